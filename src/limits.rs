//! Numeric limits for the nutrition-facts validation hook.
//!
//! Limits are plain data and can be loaded from TOML:
//!
//! ```toml
//! [calories]
//! min = 0
//! max = 2000
//!
//! [sodium]
//! max = 2300
//! ```
//!
//! Any table left out keeps the default range `0..=i32::MAX`.

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// Inclusive range a single field must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRange {
    pub min: i32,
    pub max: i32,
}

impl FieldRange {
    pub const fn new(min: i32, max: i32) -> Self {
        FieldRange { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub(crate) fn check(&self, field: &'static str, value: i32) -> Result<i32, BuildError> {
        if self.contains(value) {
            Ok(value)
        } else {
            tracing::warn!(field, value, min = self.min, max = self.max, "field out of range");
            Err(BuildError::invalid_field(field, value, self.min, self.max))
        }
    }
}

impl Default for FieldRange {
    fn default() -> Self {
        FieldRange::new(0, i32::MAX)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NutritionLimits {
    pub serving_size: FieldRange,
    pub servings: FieldRange,
    pub calories: FieldRange,
    pub fat: FieldRange,
    pub sodium: FieldRange,
    pub carbohydrate: FieldRange,
}

impl NutritionLimits {
    pub fn from_toml_str(content: &str) -> Result<Self, BuildError> {
        let limits: NutritionLimits = toml::from_str(content)?;

        for (field, range) in limits.ranges() {
            if range.min > range.max {
                return Err(BuildError::Config(format!(
                    "range for '{field}' is empty (min {} > max {})",
                    range.min, range.max
                )));
            }
        }

        Ok(limits)
    }

    fn ranges(&self) -> [(&'static str, FieldRange); 6] {
        [
            ("serving_size", self.serving_size),
            ("servings", self.servings),
            ("calories", self.calories),
            ("fat", self.fat),
            ("sodium", self.sodium),
            ("carbohydrate", self.carbohydrate),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_non_negative() {
        let limits = NutritionLimits::default();
        assert!(limits.calories.contains(0));
        assert!(limits.calories.contains(i32::MAX));
        assert!(!limits.calories.contains(-1));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let limits = NutritionLimits::from_toml_str(
            r#"
            [calories]
            max = 2000

            [sodium]
            min = 10
            max = 2300
            "#,
        )
        .unwrap();

        assert_eq!(limits.calories, FieldRange::new(0, 2000));
        assert_eq!(limits.sodium, FieldRange::new(10, 2300));
        assert_eq!(limits.fat, FieldRange::default());
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(
            NutritionLimits::from_toml_str("").unwrap(),
            NutritionLimits::default()
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = NutritionLimits::from_toml_str("[protein]\nmax = 5").unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = NutritionLimits::from_toml_str("[fat]\nmin = 10\nmax = 5").unwrap_err();
        match err {
            BuildError::Config(msg) => assert!(msg.contains("'fat'")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_reports_range() {
        let range = FieldRange::new(1, 10);
        assert_eq!(range.check("servings", 5), Ok(5));
        assert_eq!(
            range.check("servings", 0),
            Err(BuildError::invalid_field("servings", 0, 1, 10))
        );
    }
}
