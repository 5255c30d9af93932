use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;

/// Where a rendered plugin goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputSink {
    /// `$GOPATH/src/<plugin_name>/<short_name>.go`.
    #[default]
    #[value(name = "gohome")]
    GoHome,
    /// Standard output, no filesystem access.
    #[value(name = "stdout")]
    Stdout,
}

impl OutputSink {
    /// Parse the value of `--output`. Matching is exact (case-sensitive).
    pub fn parse(value: &str) -> Result<Self, ScaffoldError> {
        <Self as ValueEnum>::from_str(value, false)
            .map_err(|_| ScaffoldError::InvalidOutputValue {
                value: value.to_string(),
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputSink::GoHome => "gohome",
            OutputSink::Stdout => "stdout",
        }
    }
}

impl std::fmt::Display for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
