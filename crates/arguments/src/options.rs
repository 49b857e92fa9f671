//! Option table
//!
//! One entry per command-line option. The scanner dispatches through this
//! table and the help text is rendered from it, so adding an option means
//! adding an entry here and nothing else.

use crate::coerce::{self, Coerced};
use crate::config::RunConfiguration;
use crate::errors::ArgumentError;

/// What happens when an option is recognized
#[derive(Clone, Copy)]
pub enum Handler {
    /// Flag without an argument
    Switch(fn(&mut RunConfiguration)),
    /// Required argument, coerced and range-checked before it is stored
    Value(fn(&mut RunConfiguration, &str) -> Coerced<()>),
    Help,
    Version,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Flag,
    Required,
    Informational,
}

/// A single recognized option
pub struct OptionSpec {
    pub long: &'static str,
    pub short: char,
    /// Placeholder shown in help text; empty for options without an argument
    pub value_name: &'static str,
    /// Accepted values, quoted in error messages
    pub expected: &'static str,
    pub help: &'static str,
    pub handler: Handler,
}

impl OptionSpec {
    pub fn arity(&self) -> Arity {
        match self.handler {
            Handler::Switch(_) => Arity::Flag,
            Handler::Value(_) => Arity::Required,
            Handler::Help | Handler::Version => Arity::Informational,
        }
    }

    pub fn takes_value(&self) -> bool {
        self.arity() == Arity::Required
    }
}

const POSITIVE_INTEGER: &str = "a positive integer";

pub static OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        long: "alwayssplitvars",
        short: 'A',
        value_name: "V1,V2,..",
        expected: "a comma separated list of variable names",
        help: "Comma separated list of variable names to be always considered for splitting.",
        handler: Handler::Value(|config, raw| {
            config.always_split_vars = coerce::name_list(raw)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "caseweights",
        short: 'C',
        value_name: "FILE",
        expected: "a file name",
        help: "Filename of case weights file.",
        handler: Handler::Value(|config, raw| {
            config.case_weights_file = coerce::text(raw)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "depvarname",
        short: 'D',
        value_name: "NAME",
        expected: "a variable name",
        help: "Name of dependent variable.",
        handler: Handler::Value(|config, raw| {
            config.dependent_var_name = coerce::text(raw)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "fraction",
        short: 'F',
        value_name: "X",
        expected: "a value in (0,1]",
        help: "Fraction of observations to sample. (Default: 1)",
        handler: Handler::Value(|config, raw| {
            config.fraction = coerce::unit_fraction(raw)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "savemem",
        short: 'N',
        value_name: "",
        expected: "",
        help: "Use memory saving (but slower) splitting mode.",
        handler: Handler::Switch(|config| config.save_memory = true),
    },
    OptionSpec {
        long: "predict",
        short: 'P',
        value_name: "FILE",
        expected: "a file name",
        help: "Load forest from FILE and predict with new data.",
        handler: Handler::Value(|config, raw| {
            config.predict_file = coerce::text(raw)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "splitweights",
        short: 'S',
        value_name: "FILE",
        expected: "a file name",
        help: "Filename of split select weights file.",
        handler: Handler::Value(|config, raw| {
            config.split_weights_file = coerce::text(raw)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "nthreads",
        short: 'U',
        value_name: "N",
        expected: POSITIVE_INTEGER,
        help: "Set number of parallel threads to N. (Default: Number of CPUs available)",
        handler: Handler::Value(|config, raw| {
            config.num_threads = coerce::integer_at_least(raw, 1)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "predall",
        short: 'X',
        value_name: "",
        expected: "",
        help: "Return individual predictions for each tree instead of aggregated predictions.",
        handler: Handler::Switch(|config| config.predict_all = true),
    },
    OptionSpec {
        long: "version",
        short: 'Z',
        value_name: "",
        expected: "",
        help: "Print version and citation information.",
        handler: Handler::Version,
    },
    OptionSpec {
        long: "file",
        short: 'f',
        value_name: "FILE",
        expected: "a file name",
        help: "Filename of input data. Only numerical values are supported.",
        handler: Handler::Value(|config, raw| {
            config.input_file = coerce::text(raw)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "help",
        short: 'h',
        value_name: "",
        expected: "",
        help: "Print this help.",
        handler: Handler::Help,
    },
    OptionSpec {
        long: "instrumentvarname",
        short: 'i',
        value_name: "NAME",
        expected: "a variable name",
        help: "Name of instrument variable, only applicable for instrumental trees.",
        handler: Handler::Value(|config, raw| {
            config.instrument_var_name = coerce::text(raw)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "targetpartitionsize",
        short: 'l',
        value_name: "N",
        expected: POSITIVE_INTEGER,
        help: "Set minimal node size to N.",
        handler: Handler::Value(|config, raw| {
            config.target_partition_size = coerce::integer_at_least(raw, 1)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "mtry",
        short: 'm',
        value_name: "N",
        expected: POSITIVE_INTEGER,
        help: "Number of variables to possibly split at in each node.",
        handler: Handler::Value(|config, raw| {
            config.mtry = coerce::integer_at_least(raw, 1)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "quantiles",
        short: 'q',
        value_name: "Q1,Q2,..",
        expected: "a comma separated list of quantiles, all in the range (0, 1)",
        help: "The quantiles to predict when running a quantile forest (--treetype 11).",
        handler: Handler::Value(|config, raw| {
            config.quantiles = coerce::quantile_list(raw)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "statusvarname",
        short: 's',
        value_name: "NAME",
        expected: "a variable name",
        help: "Name of status (treatment) variable, only applicable for instrumental trees.",
        handler: Handler::Value(|config, raw| {
            config.status_var_name = coerce::text(raw)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "ntree",
        short: 't',
        value_name: "N",
        expected: POSITIVE_INTEGER,
        help: "Set number of trees to N. (Default: 500)",
        handler: Handler::Value(|config, raw| {
            config.num_trees = coerce::integer_at_least(raw, 1)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "noreplace",
        short: 'u',
        value_name: "",
        expected: "",
        help: "Sample without replacement.",
        handler: Handler::Switch(|config| config.sample_without_replacement = true),
    },
    OptionSpec {
        long: "verbose",
        short: 'v',
        value_name: "",
        expected: "",
        help: "Turn on verbose mode.",
        handler: Handler::Switch(|config| config.verbose = true),
    },
    OptionSpec {
        long: "write",
        short: 'w',
        value_name: "",
        expected: "",
        help: "Save forest to file.",
        handler: Handler::Switch(|config| config.write_forest = true),
    },
    OptionSpec {
        long: "treetype",
        short: 'y',
        value_name: "TYPE",
        expected: "one of the tree type codes listed in '--help'",
        help: "Set tree type, see the list of tree types below. (Default: 11)",
        handler: Handler::Value(|config, raw| {
            config.tree_type = coerce::tree_type(raw)?;
            Ok(())
        }),
    },
    OptionSpec {
        long: "seed",
        short: 'z',
        value_name: "SEED",
        expected: "a non-negative integer",
        help: "Set random seed to SEED. (Default: No seed)",
        handler: Handler::Value(|config, raw| {
            config.seed = coerce::integer_at_least(raw, 0)?;
            Ok(())
        }),
    },
];

pub fn find_short(short: char) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.short == short)
}

/// Resolve a long option name; an unambiguous prefix is accepted like `getopt_long` does
pub fn find_long(name: &str) -> Result<&'static OptionSpec, ArgumentError> {
    if let Some(spec) = OPTIONS.iter().find(|spec| spec.long == name) {
        return Ok(spec);
    }

    let matches: Vec<&'static OptionSpec> = if name.is_empty() {
        Vec::new()
    } else {
        OPTIONS
            .iter()
            .filter(|spec| spec.long.starts_with(name))
            .collect()
    };

    match matches.as_slice() {
        [] => Err(ArgumentError::UnknownOption(format!("--{name}"))),
        [spec] => Ok(*spec),
        _ => Err(ArgumentError::AmbiguousOption {
            option: format!("--{name}"),
            candidates: matches.iter().map(|spec| format!("--{}", spec.long)).collect(),
        }),
    }
}
