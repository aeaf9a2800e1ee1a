//! Error type shared by entity constructors, the engine, and scenario loading.

use thiserror::Error;

/// Invalid input detected before any trial runs.
///
/// Carries the dotted path of the offending field (e.g. `"battery.reserve_pct"`)
/// and a human-readable description of the violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("configuration error: {field}: {message}")]
pub struct ConfigurationError {
    /// Dotted field path.
    pub field: String,
    /// Constraint description.
    pub message: String,
}

impl ConfigurationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Checks that `value` is a fraction in `[0, 1)`.
pub(crate) fn check_fraction(value: f64, field: &str) -> Result<(), ConfigurationError> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError::new(
            field,
            format!("must be at least 0 and less than 1, got {value}"),
        ))
    }
}

/// Checks that every element of `values` is a fraction in `[0, 1)`.
pub(crate) fn check_fractions(values: &[f64], field: &str) -> Result<(), ConfigurationError> {
    for (i, &v) in values.iter().enumerate() {
        check_fraction(v, &format!("{field}[{i}]"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field_and_message() {
        let e = ConfigurationError::new("simulation.n_years", "must be >= 1");
        assert_eq!(
            e.to_string(),
            "configuration error: simulation.n_years: must be >= 1"
        );
    }

    #[test]
    fn fraction_bounds() {
        assert!(check_fraction(0.0, "x").is_ok());
        assert!(check_fraction(0.999, "x").is_ok());
        assert!(check_fraction(1.0, "x").is_err());
        assert!(check_fraction(-0.01, "x").is_err());
        assert!(check_fraction(f64::NAN, "x").is_err());
    }

    #[test]
    fn fraction_list_reports_index() {
        let err = check_fractions(&[0.1, 0.2, 1.5], "battery.degradation_profile");
        assert_eq!(
            err.map_err(|e| e.field),
            Err("battery.degradation_profile[2]".to_string())
        );
    }
}
