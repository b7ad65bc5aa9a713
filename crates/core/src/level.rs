//! Severity levels
//!
//! Six active levels plus `Off`, which is only meaningful as a minimum-level
//! threshold ("suppress everything"). Ordering follows the ordinal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Log severity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum Level {
    /// Most verbose; development only
    Trace = 0,
    /// Internal events of interest
    Debug = 1,
    /// Progress and lifetime events (default threshold)
    #[default]
    Info = 2,
    /// Recoverable problems
    Warn = 3,
    /// Failed functionality
    Error = 4,
    /// The application is about to abort
    Fatal = 5,
    /// Threshold only: disables logging
    Off = 6,
}

impl Level {
    /// Every level, including `Off`
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Off,
    ];

    /// Levels an entry may be emitted at (excludes `Off`)
    pub const LOGGING: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Least severe active level
    pub const MIN: Level = Level::Trace;

    /// Most severe active level
    pub const MAX: Level = Level::Fatal;

    /// Ordinal value (0..=6)
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a level by ordinal
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLevel` for ordinals above 6.
    pub fn from_ordinal(ordinal: u8) -> Result<Self> {
        match ordinal {
            0 => Ok(Self::Trace),
            1 => Ok(Self::Debug),
            2 => Ok(Self::Info),
            3 => Ok(Self::Warn),
            4 => Ok(Self::Error),
            5 => Ok(Self::Fatal),
            6 => Ok(Self::Off),
            other => Err(Error::InvalidLevel(other.to_string())),
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warn => "Warn",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
            Self::Off => "Off",
        }
    }

    /// Ordinal difference (`self - other`)
    #[inline]
    pub const fn compare(self, other: Level) -> i32 {
        self as i32 - other as i32
    }

    /// Whether an entry at this level passes a `minimum` threshold
    ///
    /// `Off` never passes, even against an `Off` threshold.
    #[inline]
    pub fn is_enabled_for(self, minimum: Level) -> bool {
        self != Self::Off && self >= minimum
    }

    /// Whether this is one of the six active levels
    #[inline]
    pub const fn is_logging_level(self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::invalid_argument("level", "level name is empty"));
        }

        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidLevel(s.to_string()))
    }
}

impl TryFrom<String> for Level {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<u8> for Level {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_ordinal(value)
    }
}

impl From<Level> for &'static str {
    fn from(level: Level) -> Self {
        level.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        level: Level,
    }

    #[test]
    fn test_ordinals() {
        for (i, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.ordinal() as usize, i);
        }
    }

    #[test]
    fn test_ordinal_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_ordinal(level.ordinal()).unwrap(), level);
        }
    }

    #[test]
    fn test_name_round_trip() {
        for level in Level::ALL {
            assert_eq!(level.name().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("fatal".parse::<Level>().unwrap(), Level::Fatal);
        assert_eq!("oFF".parse::<Level>().unwrap(), Level::Off);
    }

    #[test]
    fn test_out_of_range_ordinal_fails() {
        let err = Level::from_ordinal(7).unwrap_err();
        assert_eq!(err, Error::InvalidLevel("7".into()));
        assert!(err.is_invalid_argument());
        assert!(Level::try_from(255u8).is_err());
    }

    #[test]
    fn test_unknown_name_fails() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err, Error::InvalidLevel("verbose".into()));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_empty_name_is_invalid_argument() {
        let err = "".parse::<Level>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { argument: "level", .. }));
    }

    #[test]
    fn test_ordering_and_compare() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Fatal < Level::Off);
        assert_eq!(Level::Error.compare(Level::Info), 2);
        assert_eq!(Level::Info.compare(Level::Error), -2);
        assert_eq!(Level::Warn.compare(Level::Warn), 0);
    }

    #[test]
    fn test_level_sets() {
        assert_eq!(Level::ALL.len(), 7);
        assert_eq!(Level::LOGGING.len(), 6);
        assert!(!Level::LOGGING.contains(&Level::Off));
        assert!(Level::LOGGING.iter().all(|l| l.is_logging_level()));
        assert_eq!(Level::MIN, Level::Trace);
        assert_eq!(Level::MAX, Level::Fatal);
    }

    #[test]
    fn test_gating_is_monotonic() {
        for minimum in Level::LOGGING {
            for level in Level::LOGGING {
                assert_eq!(level.is_enabled_for(minimum), level >= minimum);
            }
        }
    }

    #[test]
    fn test_off_threshold_disables_everything() {
        assert!(Level::LOGGING.iter().all(|l| !l.is_enabled_for(Level::Off)));
        assert!(!Level::Off.is_enabled_for(Level::Off));
        assert!(!Level::Off.is_enabled_for(Level::Trace));
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::Info.to_string(), "Info");
        assert_eq!(format!("{}", Level::Off), "Off");
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Level::default(), Level::Info);
    }

    #[test]
    fn test_deserialize() {
        let holder: Holder = toml::from_str("level = \"debug\"").unwrap();
        assert_eq!(holder.level, Level::Debug);

        let result: std::result::Result<Holder, _> = toml::from_str("level = \"loud\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"Warn\"");
    }
}
