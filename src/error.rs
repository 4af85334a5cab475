use thiserror::Error;

/// Everything that can stop a builder from producing a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Missing required field: '{field}'")]
    NullRequiredField { field: &'static str },

    #[error("Value {value} for field '{field}' is out of range (min: {min}, max: {max})")]
    InvalidField {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Failed to load limits: {0}")]
    Config(String),
}

impl BuildError {
    pub fn null_required(field: &'static str) -> Self {
        Self::NullRequiredField { field }
    }

    pub fn invalid_field(field: &'static str, value: i32, min: i32, max: i32) -> Self {
        Self::InvalidField {
            field,
            value,
            min,
            max,
        }
    }

    /// Name of the field that caused the error, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NullRequiredField { field } | Self::InvalidField { field, .. } => Some(field),
            Self::Config(_) => None,
        }
    }
}

impl From<toml::de::Error> for BuildError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
