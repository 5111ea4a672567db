use serde::{Deserialize, Serialize};

/// Countdown mode. Each mode has its own configured full duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "focus" => Ok(Mode::Focus),
            "short-break" | "short_break" => Ok(Mode::ShortBreak),
            "long-break" | "long_break" => Ok(Mode::LongBreak),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// Full countdown duration per mode, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeDurations {
    pub focus_secs: u32,
    pub short_break_secs: u32,
    pub long_break_secs: u32,
}

impl ModeDurations {
    pub fn for_mode(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_secs,
            Mode::ShortBreak => self.short_break_secs,
            Mode::LongBreak => self.long_break_secs,
        }
    }
}

impl Default for ModeDurations {
    fn default() -> Self {
        Self {
            focus_secs: 25 * 60,
            short_break_secs: 5 * 60,
            long_break_secs: 15 * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations() {
        let d = ModeDurations::default();
        assert_eq!(d.for_mode(Mode::Focus), 1500);
        assert_eq!(d.for_mode(Mode::ShortBreak), 300);
        assert_eq!(d.for_mode(Mode::LongBreak), 900);
    }

    #[test]
    fn mode_parse() {
        assert_eq!("focus".parse::<Mode>(), Ok(Mode::Focus));
        assert_eq!("short-break".parse::<Mode>(), Ok(Mode::ShortBreak));
        assert_eq!("long_break".parse::<Mode>(), Ok(Mode::LongBreak));
        assert!("lunch".parse::<Mode>().is_err());
    }
}
