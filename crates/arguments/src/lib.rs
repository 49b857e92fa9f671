//! Grove command-line arguments
//!
//! Turns the raw process arguments into a validated [`RunConfiguration`]
//! for the forest engine. Scanning and validation run once, in that order,
//! and stop at the first problem.

pub mod coerce;
pub mod config;
pub mod errors;
pub mod help;
pub mod options;
pub mod scanner;
pub mod validator;

pub use config::{RunConfiguration, TreeType, DEFAULT_NUM_TREES};
pub use errors::ArgumentError;
pub use help::{render_help, render_version};
pub use scanner::{scan, Invocation};
pub use validator::validate;

/// Scan the arguments (program name excluded) and validate the result.
///
/// Help and version requests are returned as-is without validation.
pub fn process_arguments<I, S>(args: I) -> Result<Invocation, ArgumentError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let invocation = scan(args)?;
    if let Invocation::Run { config, .. } = &invocation {
        validate(config)?;
    }
    Ok(invocation)
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
