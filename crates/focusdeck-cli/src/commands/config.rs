//! Configuration commands.

use clap::Subcommand;
use focusdeck_core::storage::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the configuration as TOML
    Show,
    /// Print one value, e.g. timer.focus_secs
    Get {
        /// Dotted config key
        key: String,
    },
    /// Set one value and persist
    Set {
        /// Dotted config key
        key: String,
        /// New value
        value: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
    }

    Ok(())
}
