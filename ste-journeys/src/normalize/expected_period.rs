use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, path::Path};

/// the school-day period a batch of trips was queried for
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedPeriod {
    /// trips to school, queried by latest arrival time
    Am,
    /// trips home, queried by earliest departure time
    Pm,
}

impl ExpectedPeriod {
    /// derives the period from a batch label such as `pm_journeys` or
    /// `inputs/elpaso/am_journeys.json`. the file stem is split on
    /// non-alphanumeric characters and the first token equal to `am` or `pm`
    /// (ignoring case) wins.
    pub fn from_label(label: &str) -> Option<ExpectedPeriod> {
        let stem = Path::new(label)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(label);
        stem.split(|c: char| !c.is_ascii_alphanumeric())
            .find_map(|token| match token.to_ascii_lowercase().as_str() {
                "am" => Some(ExpectedPeriod::Am),
                "pm" => Some(ExpectedPeriod::Pm),
                _ => None,
            })
    }
}

impl Display for ExpectedPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpectedPeriod::Am => write!(f, "am"),
            ExpectedPeriod::Pm => write!(f, "pm"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExpectedPeriod;

    #[test]
    fn test_from_label() {
        assert_eq!(
            ExpectedPeriod::from_label("inputs/elpaso/am_journeys.json"),
            Some(ExpectedPeriod::Am)
        );
        assert_eq!(
            ExpectedPeriod::from_label("outputs/elpaso/pm_journeys_redo.geojson"),
            Some(ExpectedPeriod::Pm)
        );
        assert_eq!(
            ExpectedPeriod::from_label("indy_AM-trips"),
            Some(ExpectedPeriod::Am)
        );
        assert_eq!(ExpectedPeriod::from_label("journeys.json"), None);
        assert_eq!(ExpectedPeriod::from_label("campus_trips"), None);
    }
}
