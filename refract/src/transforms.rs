//! String transforms offered on the command line.
use refract_core::LeafTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Operation {
    UpperCase,
    LowerCase,
    Trim,
    /// Fails on the first string holding a non-ASCII character.
    AsciiOnly,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("String '{0}' contains non-ASCII characters")]
    NonAscii(String),
}

impl LeafTransform for Operation {
    type Error = TransformError;

    fn string(&self, value: String) -> Result<String, TransformError> {
        match self {
            Operation::UpperCase => Ok(value.to_uppercase()),
            Operation::LowerCase => Ok(value.to_lowercase()),
            Operation::Trim => Ok(value.trim().to_string()),
            Operation::AsciiOnly if value.is_ascii() => Ok(value),
            Operation::AsciiOnly => Err(TransformError::NonAscii(value)),
        }
    }
}
