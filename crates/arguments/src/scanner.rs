//! Option scanner
//!
//! Walks the argument vector once, left to right, following the spelling
//! rules of GNU `getopt_long`:
//!
//! - `--name value`, `--name=value` and unambiguous prefixes of `name`
//! - `-x value`, `-xvalue` and clustered flags such as `-uvw` or `-uvt100`
//! - a required argument takes the next token verbatim, even if it starts with `-`
//! - `--` ends option processing, a lone `-` is a positional token
//! - positional tokens may appear between options and are collected
//!
//! A help or version request wins wherever it appears. After the first
//! failure the scanner stops applying values but keeps reading tokens, so
//! that a later `--help` is still honoured; the failure is returned only if
//! no such request turns up.

use tracing::{debug, trace};

use crate::coerce::Rejected;
use crate::config::RunConfiguration;
use crate::errors::ArgumentError;
use crate::options::{self, Handler, OptionSpec};

/// Result of reading the command line
#[derive(Clone, Debug, PartialEq)]
pub enum Invocation {
    /// Proceed with the configuration; `unprocessed` holds positional tokens nobody consumed
    Run {
        config: RunConfiguration,
        unprocessed: Vec<String>,
    },
    /// Print help text and stop
    Help,
    /// Print version text and stop
    Version,
}

/// Scan the arguments (program name excluded) into a configuration.
///
/// The returned configuration has not been through [`crate::validate`].
pub fn scan<I, S>(args: I) -> Result<Invocation, ArgumentError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Scanner::new(args).run()
}

struct Scanner {
    args: std::vec::IntoIter<String>,
    config: RunConfiguration,
    unprocessed: Vec<String>,
    failure: Option<ArgumentError>,
}

impl Scanner {
    fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        Self {
            args: args.into_iter(),
            config: RunConfiguration::default(),
            unprocessed: Vec::new(),
            failure: None,
        }
    }

    fn run(mut self) -> Result<Invocation, ArgumentError> {
        while let Some(token) = self.args.next() {
            let stop = if token == "--" {
                self.unprocessed.extend(self.args.by_ref());
                None
            } else if let Some(body) = token.strip_prefix("--") {
                self.long_option(body)
            } else if token.len() > 1 && token.starts_with('-') {
                self.short_cluster(&token[1..])
            } else {
                trace!("Positional token: {}", token);
                self.unprocessed.push(token);
                None
            };

            if let Some(invocation) = stop {
                return Ok(invocation);
            }
        }

        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(Invocation::Run {
                config: self.config,
                unprocessed: self.unprocessed,
            }),
        }
    }

    fn long_option(&mut self, body: &str) -> Option<Invocation> {
        let (name, attached) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (body, None),
        };

        match options::find_long(name) {
            Ok(spec) => {
                let spelled = format!("--{}", spec.long);
                self.settle(spec, &spelled, attached)
            }
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    fn short_cluster(&mut self, cluster: &str) -> Option<Invocation> {
        for (index, short) in cluster.char_indices() {
            let spelled = format!("-{short}");
            let Some(spec) = options::find_short(short) else {
                self.fail(ArgumentError::UnknownOption(spelled));
                continue;
            };

            if !spec.takes_value() {
                if let Some(invocation) = self.settle(spec, &spelled, None) {
                    return Some(invocation);
                }
                continue;
            }

            // a value-taking option swallows the rest of the cluster
            let rest = &cluster[index + short.len_utf8()..];
            let attached = (!rest.is_empty()).then(|| rest.to_string());
            return self.settle(spec, &spelled, attached);
        }
        None
    }

    /// Dispatch a recognized option, recording any failure
    fn settle(
        &mut self,
        spec: &'static OptionSpec,
        spelled: &str,
        attached: Option<String>,
    ) -> Option<Invocation> {
        match self.dispatch(spec, spelled, attached) {
            Ok(stop) => stop,
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    fn dispatch(
        &mut self,
        spec: &'static OptionSpec,
        spelled: &str,
        attached: Option<String>,
    ) -> Result<Option<Invocation>, ArgumentError> {
        match spec.handler {
            Handler::Help | Handler::Version | Handler::Switch(_) if attached.is_some() => {
                Err(ArgumentError::UnexpectedValue(spelled.to_string()))
            }
            Handler::Help => Ok(Some(Invocation::Help)),
            Handler::Version => Ok(Some(Invocation::Version)),
            Handler::Switch(apply) => {
                if self.failure.is_none() {
                    apply(&mut self.config);
                    debug!("Option --{} enabled", spec.long);
                }
                Ok(None)
            }
            Handler::Value(apply) => {
                let raw = match attached {
                    Some(raw) => raw,
                    None => self
                        .args
                        .next()
                        .ok_or_else(|| ArgumentError::MissingValue(spelled.to_string()))?,
                };

                if self.failure.is_none() {
                    apply(&mut self.config, &raw).map_err(|Rejected| {
                        ArgumentError::InvalidValue {
                            option: spec.long,
                            expected: spec.expected,
                            value: raw.clone(),
                        }
                    })?;
                    debug!("Option --{} set to {}", spec.long, raw);
                }
                Ok(None)
            }
        }
    }

    fn fail(&mut self, err: ArgumentError) {
        if self.failure.is_none() {
            debug!("Scan failed, still looking for --help/--version: {}", err);
            self.failure = Some(err);
        }
    }
}
