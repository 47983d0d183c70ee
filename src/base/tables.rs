use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Defines the roughness coefficient assigned to unknown coatings
pub const DEFAULT_ROUGHNESS: f64 = 0.6;

/// Holds the grade → SMYS (psi) lookup table
///
/// Unknown grades resolve to the weakest grade in the table (with a warning)
/// so that a sweep is never aborted by a single bad categorical value.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GradeTable {
    /// Maps the grade name (e.g., "X-52") to its SMYS in psi
    smys: BTreeMap<String, f64>,
}

impl GradeTable {
    /// Allocates a new instance with the built-in API 5L grades
    pub fn new() -> Self {
        let smys = [
            ("X-42", 42_000.0),
            ("X-52", 52_000.0),
            ("X-60", 60_000.0),
            ("X-65", 65_000.0),
            ("X-70", 70_000.0),
            ("X-80", 80_000.0),
        ];
        GradeTable {
            smys: smys.iter().map(|(g, s)| (g.to_string(), *s)).collect(),
        }
    }

    /// Allocates a new empty table
    pub fn empty() -> Self {
        GradeTable { smys: BTreeMap::new() }
    }

    /// Inserts or replaces a grade
    pub fn with(mut self, grade: &str, smys: f64) -> Self {
        self.smys.insert(grade.to_string(), smys);
        self
    }

    /// Returns the number of grades
    pub fn len(&self) -> usize {
        self.smys.len()
    }

    /// Returns true if the table has no grades
    pub fn is_empty(&self) -> bool {
        self.smys.is_empty()
    }

    /// Returns the SMYS of a known grade
    pub fn get(&self, grade: &str) -> Option<f64> {
        self.smys.get(grade).copied()
    }

    /// Returns the weakest grade and its SMYS
    pub fn weakest(&self) -> Option<(&str, f64)> {
        self.smys
            .iter()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(g, s)| (g.as_str(), *s))
    }

    /// Resolves the SMYS of a grade
    ///
    /// Returns `(smys, source)` where `source` names the grade actually used.
    pub fn resolve(&self, grade: &str) -> Result<(f64, String), StrError> {
        if let Some(smys) = self.get(grade) {
            return Ok((smys, grade.to_string()));
        }
        let (weakest, smys) = self.weakest().ok_or("the grade table is empty")?;
        log::warn!("unknown pipe grade '{}'; using the weakest grade {} ({} psi)", grade, weakest, smys);
        Ok((smys, format!("{} (default for unknown grade '{}')", weakest, grade)))
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.smys.is_empty() {
            return Some("the grade table must have at least one grade".to_string());
        }
        for (grade, smys) in &self.smys {
            if !smys.is_finite() || *smys <= 0.0 {
                return Some(format!("SMYS of grade {} = {:?} is incorrect; it must be > 0", grade, smys));
            }
        }
        None // all good
    }
}

impl Default for GradeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the coating → roughness coefficient lookup table
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CoatingTable {
    /// Maps the coating name to its roughness coefficient (interface friction ratio δ/φ)
    roughness: BTreeMap<String, f64>,
}

impl CoatingTable {
    /// Allocates a new instance with the built-in coatings
    pub fn new() -> Self {
        let roughness = [
            ("Polyethylene", 0.6),
            ("Fusion Bonded Epoxy", 0.6),
            ("FBE", 0.6),
            ("3LPE", 0.6),
            ("Tape", 0.6),
            ("Smooth steel", 0.7),
            ("Rough Steel", 0.8),
            ("Coal Tar", 0.9),
            ("Concrete", 1.0),
        ];
        CoatingTable {
            roughness: roughness.iter().map(|(c, r)| (c.to_string(), *r)).collect(),
        }
    }

    /// Inserts or replaces a coating
    pub fn with(mut self, coating: &str, roughness: f64) -> Self {
        self.roughness.insert(coating.to_string(), roughness);
        self
    }

    /// Returns the roughness of a known coating
    pub fn get(&self, coating: &str) -> Option<f64> {
        self.roughness.get(coating).copied()
    }

    /// Resolves the roughness coefficient of a coating
    ///
    /// Returns `(roughness, source)`; unknown coatings use [DEFAULT_ROUGHNESS].
    pub fn resolve(&self, coating: &str) -> (f64, String) {
        match self.get(coating) {
            Some(r) => (r, coating.to_string()),
            None => {
                log::warn!("unknown coating '{}'; using roughness {}", coating, DEFAULT_ROUGHNESS);
                (DEFAULT_ROUGHNESS, format!("default for unknown coating '{}'", coating))
            }
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        for (coating, r) in &self.roughness {
            if !r.is_finite() || *r <= 0.0 || *r > 1.0 {
                return Some(format!(
                    "roughness of coating {} = {:?} is incorrect; it must be 0 < r ≤ 1",
                    coating, r
                ));
            }
        }
        None // all good
    }
}

impl Default for CoatingTable {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{CoatingTable, GradeTable, DEFAULT_ROUGHNESS};

    #[test]
    fn grade_table_works() {
        let table = GradeTable::new();
        assert_eq!(table.len(), 6);
        assert_eq!(table.get("X-52"), Some(52_000.0));
        assert_eq!(table.weakest(), Some(("X-42", 42_000.0)));
        assert_eq!(table.resolve("X-70").unwrap(), (70_000.0, "X-70".to_string()));
    }

    #[test]
    fn unknown_grade_uses_weakest() {
        let table = GradeTable::new();
        let (smys, source) = table.resolve("X-99").unwrap();
        assert_eq!(smys, 42_000.0);
        assert_eq!(source, "X-42 (default for unknown grade 'X-99')");

        let table = GradeTable::empty().with("X-60", 60_000.0).with("Grade B", 35_000.0);
        assert_eq!(table.resolve("X-42").unwrap().0, 35_000.0);
    }

    #[test]
    fn grade_table_captures_errors() {
        let table = GradeTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.resolve("X-52").err(), Some("the grade table is empty"));
        assert_eq!(
            table.validate(),
            Some("the grade table must have at least one grade".to_string())
        );
        let table = GradeTable::new().with("X-00", 0.0);
        assert_eq!(
            table.validate(),
            Some("SMYS of grade X-00 = 0.0 is incorrect; it must be > 0".to_string())
        );
        assert_eq!(GradeTable::new().validate(), None);
    }

    #[test]
    fn coating_table_works() {
        let table = CoatingTable::new();
        assert_eq!(table.resolve("Concrete"), (1.0, "Concrete".to_string()));
        assert_eq!(table.get("Rough Steel"), Some(0.8));
        let (r, source) = table.resolve("Wax");
        assert_eq!(r, DEFAULT_ROUGHNESS);
        assert_eq!(source, "default for unknown coating 'Wax'");
        assert_eq!(table.validate(), None);
        assert!(table.with("Glass", 1.5).validate().is_some());
    }

    #[test]
    fn tables_serde_works() {
        let table = GradeTable::empty().with("X-52", 52_000.0);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, "{\"smys\":{\"X-52\":52000.0}}");
        let read: GradeTable = serde_json::from_str(&json).unwrap();
        assert_eq!(read, table);
    }
}
