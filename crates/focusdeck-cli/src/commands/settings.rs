//! User settings commands.

use clap::Subcommand;
use focusdeck_core::storage::JsonStore;
use focusdeck_core::Settings;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print all settings as JSON
    Show,
    /// Print one setting: dark, sound, or auto_start
    Get {
        /// Setting key
        key: String,
    },
    /// Set one setting
    Set {
        /// Setting key
        key: String,
        /// true or false
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonStore::open()?;
    let mut settings = Settings::load(&store);

    match action {
        SettingsAction::Show => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsAction::Get { key } => match settings.get(&key) {
            Some(value) => println!("{value}"),
            None => return Err(format!("unknown setting: {key}").into()),
        },
        SettingsAction::Set { key, value } => {
            if !settings.set(&key, value) {
                return Err(format!("unknown setting: {key}").into());
            }
            settings.save(&store)?;
            println!("{key} = {value}");
        }
    }

    Ok(())
}
