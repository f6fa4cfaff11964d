use crate::consts::{
    ADJACENCY_PENALTY, DEFAULT_REPORT_INTERVAL, DEFAULT_RETAIN, DEFAULT_TRIALS, TARGET_VARIANCE,
};
use crate::error::{BfResult, BoardForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

impl Config {
    pub fn validate(&self) -> BfResult<()> {
        if self.search.trials == 0 {
            return Err(BoardForgeError::Config(
                "--trials must be at least 1".to_string(),
            ));
        }
        if self.search.retain == 0 {
            return Err(BoardForgeError::Config(
                "--retain must be at least 1".to_string(),
            ));
        }
        if self.search.report_interval == 0 {
            return Err(BoardForgeError::Config(
                "--report-interval must be at least 1".to_string(),
            ));
        }
        self.weights.validate()
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,
    #[arg(long, default_value_t = DEFAULT_RETAIN)]
    pub retain: usize,
    #[arg(long, default_value_t = DEFAULT_REPORT_INTERVAL)]
    pub report_interval: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            retain: DEFAULT_RETAIN,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    // Deducted per equal right/bottom neighbour
    #[arg(long, default_value_t = ADJACENCY_PENALTY)]
    pub adjacency_penalty: f32,

    // Spread anchor for the variance term
    #[arg(long, default_value_t = TARGET_VARIANCE)]
    pub target_variance: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            adjacency_penalty: ADJACENCY_PENALTY,
            target_variance: TARGET_VARIANCE,
        }
    }
}

impl ScoringWeights {
    /// Both weights must be finite and non-negative, so every penalty term
    /// keeps pulling scores down.
    pub fn validate(&self) -> BfResult<()> {
        let checks = [
            ("--adjacency-penalty", self.adjacency_penalty),
            ("--target-variance", self.target_variance),
        ];
        for (flag, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(BoardForgeError::Config(format!(
                    "{} must be a finite, non-negative number (got {})",
                    flag, value
                )));
            }
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BoardForgeError::Config(format!(
                "Failed to read weights file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Re-applies every weight the user passed explicitly on the command line,
    /// so flags win over values loaded from a file.
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(adjacency_penalty, "adjacency_penalty");
        update_if_present!(target_variance, "target_variance");
    }
}
