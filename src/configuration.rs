use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::equation::equation::Equation;
use crate::equation::equationerror::EquationResult;
use crate::equation::quadraticequation::ComplexRootConstruction;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

fn default_x() -> f64 {
    5.0
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default = "default_x")]
    x: f64,
    #[serde(default)]
    complex_roots: ComplexRootConstruction,
    equations: Vec<Vec<f64>>
}

/// Coefficient sets to analyse, the point every equation is evaluated at
/// and the construction used for complex quadratic roots.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    x: f64,
    complex_roots: ComplexRootConstruction,
    coefficient_sets: Vec<Vec<f64>>
}

impl Configuration {
    pub fn new(x: f64,
               complex_roots: ComplexRootConstruction,
               coefficient_sets: Vec<Vec<f64>>) -> Configuration {
        Configuration { x, complex_roots, coefficient_sets }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn complex_roots(&self) -> ComplexRootConstruction {
        self.complex_roots
    }

    pub fn coefficient_sets(&self) -> &Vec<Vec<f64>> {
        &self.coefficient_sets
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Configuration {
        Configuration::new(json_prop.x, json_prop.complex_roots, json_prop.equations)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Ok(Configuration::from_json_prop(json_prop))
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        info!(path = %file_path.as_ref().display(),
              equations = json_prop.equations.len(),
              "configuration loaded");
        Ok(Configuration::from_json_prop(json_prop))
    }

    /// One result per coefficient set, in order, so callers can skip the
    /// sets that do not describe a supported equation.
    pub fn build_equations(&self) -> Vec<EquationResult<Equation>> {
        self.coefficient_sets
            .iter()
            .map(|coefficients| Equation::from_coefficients(coefficients))
            .collect()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(
            default_x(),
            ComplexRootConstruction::Literal,
            vec![
                vec![5.0, 9.0, 4.0],
                vec![6.0, 9.0],
                vec![5.0],
                vec![-5.0, -9.0],
                vec![3.0, 25.0, -4.0],
                vec![0.0, 9.0, 4.0],
                vec![0.0],
                vec![]
            ]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::equationerror::EquationError;

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let config = Configuration::from_json_str(r#"{ "equations": [[1, 2, 3]] }"#).unwrap();
        assert_eq!(config.x(), 5.0);
        assert_eq!(config.complex_roots(), ComplexRootConstruction::Literal);
        assert_eq!(config.coefficient_sets(), &vec![vec![1.0, 2.0, 3.0]]);
    }

    #[test]
    fn every_field_is_read() {
        let config = Configuration::from_json_str(
            r#"{ "x": -1.5, "complex_roots": "Standard", "equations": [[0], [2, 1]] }"#
        ).unwrap();
        assert_eq!(config.x(), -1.5);
        assert_eq!(config.complex_roots(), ComplexRootConstruction::Standard);
        assert_eq!(config.coefficient_sets().len(), 2);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = Configuration::from_json_str(r#"{ "equations": "none" }"#);
        assert!(matches!(result, Err(ConfigurationError::JsonParse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Configuration::from_reader("does/not/exist.json");
        assert!(matches!(result, Err(ConfigurationError::Io(_))));
    }

    #[test]
    fn default_set_skips_only_the_empty_entry() {
        let equations = Configuration::default().build_equations();
        assert_eq!(equations.len(), 8);
        assert_eq!(equations.iter().filter(|result| result.is_ok()).count(), 7);
        assert_eq!(equations[7], Err(EquationError::NoCoefficients));
    }
}
