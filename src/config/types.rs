use serde::{Deserialize, Serialize};

use crate::template::OutputSink;

/// Root configuration container.
///
/// Every key is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base directory used when `GOPATH` is not set (e.g. "/home/me/go").
    pub gopath: Option<String>,
    /// Sink used when `--output` is not given.
    pub output: OutputSink,
}
