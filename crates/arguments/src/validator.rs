//! Cross-option consistency checks
//!
//! Runs once on a scanned configuration. Rules are checked in a fixed order
//! and the first violation is returned.

use crate::config::RunConfiguration;
use crate::errors::ArgumentError;

pub fn validate(config: &RunConfiguration) -> Result<(), ArgumentError> {
    if config.input_file.is_empty() {
        return Err(ArgumentError::MissingRequired {
            option: "file",
            message: "Please specify an input filename with '--file'.",
        });
    }

    if !config.is_prediction() && config.dependent_var_name.is_empty() {
        return Err(ArgumentError::MissingRequired {
            option: "depvarname",
            message: "Please specify a dependent variable name with '--depvarname'.",
        });
    }

    if config.tree_type.requires_instrument() {
        if config.instrument_var_name.is_empty() {
            return Err(ArgumentError::MissingRequired {
                option: "instrumentvarname",
                message: "When using instrumental trees, the instrument variable must be specified through '--instrumentvarname'.",
            });
        }
        if config.status_var_name.is_empty() {
            return Err(ArgumentError::MissingRequired {
                option: "statusvarname",
                message: "When using instrumental trees, the treatment variable must be specified through '--statusvarname'.",
            });
        }
    }

    if !config.split_weights_file.is_empty() && !config.always_split_vars.is_empty() {
        return Err(ArgumentError::MutuallyExclusive {
            first: "splitweights",
            second: "alwayssplitvars",
        });
    }

    Ok(())
}
