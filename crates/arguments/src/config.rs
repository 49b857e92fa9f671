//! Run configuration produced by the option scanner
//!
//! Every field starts at its documented default and is only ever replaced
//! by a value that already passed coercion and range checks.

use serde::Serialize;
use std::fmt;

/// Number of trees grown when `--ntree` is not given
pub const DEFAULT_NUM_TREES: usize = 500;

/// Sampling fraction when `--fraction` is not given
pub const DEFAULT_FRACTION: f64 = 1.0;

/// Forest flavour selected with `--treetype`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeType {
    #[default]
    Quantile,
    Instrumental,
}

/// Numeric codes accepted by `--treetype`, in the order they are documented.
const TREE_TYPES: &[(u32, TreeType)] = &[
    (11, TreeType::Quantile),
    (15, TreeType::Instrumental),
];

impl TreeType {
    /// Look up the variant registered for a command-line code
    pub fn from_code(code: u32) -> Option<Self> {
        TREE_TYPES
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, tree_type)| *tree_type)
    }

    pub fn code(&self) -> u32 {
        TREE_TYPES
            .iter()
            .find(|(_, tree_type)| tree_type == self)
            .map(|(code, _)| *code)
            .unwrap_or_default()
    }

    /// All registered tree types with their codes
    pub fn all() -> impl Iterator<Item = (u32, TreeType)> {
        TREE_TYPES.iter().copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            TreeType::Quantile => "Quantile",
            TreeType::Instrumental => "Instrumental",
        }
    }

    /// Instrumental forests need both an instrument and a treatment variable
    pub fn requires_instrument(&self) -> bool {
        matches!(self, TreeType::Instrumental)
    }
}

impl fmt::Display for TreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully scanned command line, handed read-only to the forest engine
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunConfiguration {
    pub input_file: String,
    pub predict_file: String,
    pub dependent_var_name: String,
    pub status_var_name: String,
    pub instrument_var_name: String,
    pub case_weights_file: String,
    pub split_weights_file: String,
    pub always_split_vars: Vec<String>,
    pub quantiles: Vec<f64>,
    pub num_trees: usize,
    /// 0 lets the engine choose
    pub mtry: usize,
    /// 0 lets the engine choose
    pub target_partition_size: usize,
    pub num_threads: usize,
    pub fraction: f64,
    /// 0 means no seed was given
    pub seed: u64,
    pub tree_type: TreeType,
    pub sample_without_replacement: bool,
    pub save_memory: bool,
    pub verbose: bool,
    pub write_forest: bool,
    pub predict_all: bool,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            input_file: String::new(),
            predict_file: String::new(),
            dependent_var_name: String::new(),
            status_var_name: String::new(),
            instrument_var_name: String::new(),
            case_weights_file: String::new(),
            split_weights_file: String::new(),
            always_split_vars: Vec::new(),
            quantiles: Vec::new(),
            num_trees: DEFAULT_NUM_TREES,
            mtry: 0,
            target_partition_size: 0,
            num_threads: num_cpus::get().max(1),
            fraction: DEFAULT_FRACTION,
            seed: 0,
            tree_type: TreeType::default(),
            sample_without_replacement: false,
            save_memory: false,
            verbose: false,
            write_forest: false,
            predict_all: false,
        }
    }
}

impl RunConfiguration {
    /// Prediction mode loads a stored forest instead of growing one
    pub fn is_prediction(&self) -> bool {
        !self.predict_file.is_empty()
    }

    pub fn has_seed(&self) -> bool {
        self.seed != 0
    }
}
