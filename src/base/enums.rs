use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the direction of the ground displacement relative to the pipe axis
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ground movement along the pipe axis (axial soil springs)
    #[serde(alias = "Parallel")]
    Parallel,

    /// Ground movement transverse to the pipe axis (lateral soil springs)
    #[serde(alias = "Perpendicular")]
    Perpendicular,
}

impl Direction {
    /// Parses a label such as "parallel" or "Perpendicular" (case-insensitive)
    pub fn from_label(label: &str) -> Result<Self, StrError> {
        match label.trim().to_lowercase().as_str() {
            "parallel" => Ok(Direction::Parallel),
            "perpendicular" => Ok(Direction::Perpendicular),
            _ => Err("direction must be either parallel or perpendicular"),
        }
    }

    /// Returns the label of this direction
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Parallel => "parallel",
            Direction::Perpendicular => "perpendicular",
        }
    }
}

/// Defines the priority tiers of the decision matrix
///
/// Note: The fixed numbering scheme assists in sorting (Critical first).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Priority {
    Critical = 1,
    High = 2,
    Medium = 3,
    Low = 4,
}

impl Priority {
    /// Returns all priorities, most critical first
    pub const ALL: [Priority; 4] = [Priority::Critical, Priority::High, Priority::Medium, Priority::Low];

    /// Returns the ordinal level (1 = Critical, ..., 4 = Low)
    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// Returns the priority corresponding to an ordinal level
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Priority::Critical),
            2 => Some(Priority::High),
            3 => Some(Priority::Medium),
            4 => Some(Priority::Low),
            _ => None,
        }
    }

    /// Returns the name of the priority
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Direction, Priority};

    #[test]
    fn direction_from_label_works() {
        assert_eq!(Direction::from_label("parallel"), Ok(Direction::Parallel));
        assert_eq!(Direction::from_label(" Perpendicular "), Ok(Direction::Perpendicular));
        assert_eq!(
            Direction::from_label("diagonal").err(),
            Some("direction must be either parallel or perpendicular")
        );
        assert_eq!(Direction::Parallel.label(), "parallel");
    }

    #[test]
    fn direction_serde_works() {
        let json = serde_json::to_string(&[Direction::Parallel, Direction::Perpendicular]).unwrap();
        assert_eq!(json, "[\"parallel\",\"perpendicular\"]");
        let read: Vec<Direction> = serde_json::from_str("[\"Parallel\",\"perpendicular\"]").unwrap();
        assert_eq!(read, vec![Direction::Parallel, Direction::Perpendicular]);
    }

    #[test]
    fn priority_order_works() {
        let mut all = vec![Priority::Low, Priority::Critical, Priority::Medium, Priority::High];
        all.sort();
        assert_eq!(all, Priority::ALL.to_vec());
        assert_eq!(Priority::Critical.level(), 1);
        assert_eq!(Priority::Low.level(), 4);
        assert_eq!(Priority::from_level(3), Some(Priority::Medium));
        assert_eq!(Priority::from_level(0), None);
        assert_eq!(Priority::High.name(), "High");
    }
}
