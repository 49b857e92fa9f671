use thiserror::Error;

/// Errors raised while scanning or validating the command line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("Illegal argument '{value}' for option '{option}'. Please give {expected}. See '--help' for details.")]
    InvalidValue {
        option: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Unknown option '{0}'. See '--help' for details.")]
    UnknownOption(String),

    #[error("Option '{option}' is ambiguous; possibilities: {}. See '--help' for details.", .candidates.join(" "))]
    AmbiguousOption {
        option: String,
        candidates: Vec<String>,
    },

    #[error("Option '{0}' requires an argument. See '--help' for details.")]
    MissingValue(String),

    #[error("Option '{0}' doesn't allow an argument. See '--help' for details.")]
    UnexpectedValue(String),

    #[error("{message} See '--help' for details.")]
    MissingRequired {
        option: &'static str,
        message: &'static str,
    },

    #[error("Please use only one option of {first} and {second}.")]
    MutuallyExclusive {
        first: &'static str,
        second: &'static str,
    },
}

impl ArgumentError {
    /// Option the error refers to, as named in the option table or as typed by the user
    pub fn option(&self) -> &str {
        match self {
            ArgumentError::InvalidValue { option, .. }
            | ArgumentError::MissingRequired { option, .. } => *option,
            ArgumentError::UnknownOption(option)
            | ArgumentError::MissingValue(option)
            | ArgumentError::UnexpectedValue(option)
            | ArgumentError::AmbiguousOption { option, .. } => option.as_str(),
            ArgumentError::MutuallyExclusive { first, .. } => *first,
        }
    }
}
