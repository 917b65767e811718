//! Snippet lifetime choices.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How long a snippet stays retrievable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpiryPeriod {
    OneDay,
    OneWeek,
    #[default]
    OneYear,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{0}' is not a permitted expiry")]
pub struct InvalidExpiry(pub String);

impl ExpiryPeriod {
    /// Every period, longest first, as offered on the create page.
    pub const ALL: [ExpiryPeriod; 3] = [
        ExpiryPeriod::OneYear,
        ExpiryPeriod::OneWeek,
        ExpiryPeriod::OneDay,
    ];

    /// Form values accepted for the `expires` field.
    pub const FORM_VALUES: [&'static str; 3] = ["365", "7", "1"];

    pub fn days(&self) -> i32 {
        match self {
            ExpiryPeriod::OneDay => 1,
            ExpiryPeriod::OneWeek => 7,
            ExpiryPeriod::OneYear => 365,
        }
    }

    /// Label shown next to the radio button.
    pub fn label(&self) -> &'static str {
        match self {
            ExpiryPeriod::OneDay => "One Day",
            ExpiryPeriod::OneWeek => "One Week",
            ExpiryPeriod::OneYear => "One Year",
        }
    }
}

impl fmt::Display for ExpiryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl FromStr for ExpiryPeriod {
    type Err = InvalidExpiry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(ExpiryPeriod::OneDay),
            "7" => Ok(ExpiryPeriod::OneWeek),
            "365" => Ok(ExpiryPeriod::OneYear),
            other => Err(InvalidExpiry(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_permitted_values() {
        assert_eq!("1".parse::<ExpiryPeriod>().unwrap(), ExpiryPeriod::OneDay);
        assert_eq!("7".parse::<ExpiryPeriod>().unwrap(), ExpiryPeriod::OneWeek);
        assert_eq!("365".parse::<ExpiryPeriod>().unwrap(), ExpiryPeriod::OneYear);
    }

    #[test]
    fn rejects_other_values() {
        assert_eq!(
            "400".parse::<ExpiryPeriod>(),
            Err(InvalidExpiry("400".to_string()))
        );
        assert!("".parse::<ExpiryPeriod>().is_err());
    }

    #[test]
    fn form_values_match_display() {
        for (period, value) in ExpiryPeriod::ALL.iter().zip(ExpiryPeriod::FORM_VALUES) {
            assert_eq!(period.to_string(), value);
        }
    }

    #[test]
    fn defaults_to_one_year() {
        assert_eq!(ExpiryPeriod::default().days(), 365);
    }
}
