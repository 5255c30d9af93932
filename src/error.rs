//! Error types for plugin scaffolding.
//!
//! Every failure is terminal: handlers return a [`ScaffoldError`] and the
//! binary's single top-level handler reports it and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while dispatching, generating or destroying a plugin.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The argument cursor ran past the end of the argument list.
    #[error(
        "Failed to read argument: \"{description}\" expected in command line arguments at position: {position}\n all arguments (counting them from 0):\n {arguments:?}"
    )]
    MissingArgument {
        description: String,
        position: usize,
        arguments: Vec<String>,
    },

    /// `--output` was given something other than a known sink.
    #[error("Invalid value of argument \"output\": \"{value}\"")]
    InvalidOutputValue { value: String },

    #[error("Buffalo plugin name is incorrect, it should start with \"buffalo-\": [{name}]")]
    InvalidPluginName { name: String },

    #[error("Failed to convert plugin name to camel case golang identifier: [{name}]")]
    EmptyDerivedIdentifier { name: String },

    /// The plugin path would resolve to `<base>/src` itself or climb above it.
    #[error("Plugin path must name a directory below '{root}': [{name}]")]
    InvalidPluginPath { name: String, root: PathBuf },

    #[error("Failed to {action} '{path}': {source}")]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path is not a directory: '{path}'")]
    NotADirectory { path: PathBuf },

    #[error("Malformed plugin template: {0}")]
    TemplateParse(#[from] Box<handlebars::TemplateError>),

    #[error("Failed to render plugin template: {0}")]
    TemplateRender(#[from] handlebars::RenderError),

    #[error("Cannot encode commands to JSON: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ScaffoldError {
    /// Build a [`ScaffoldError::Filesystem`] from an I/O error.
    pub fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        ScaffoldError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Whether the help text should follow this diagnostic.
    ///
    /// Only argument-shape mistakes get the help text; naming and I/O
    /// failures stand on their own.
    pub fn shows_help(&self) -> bool {
        matches!(
            self,
            ScaffoldError::MissingArgument { .. } | ScaffoldError::InvalidOutputValue { .. }
        )
    }

    /// Short machine-friendly kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ScaffoldError::MissingArgument { .. } => "missing_argument",
            ScaffoldError::InvalidOutputValue { .. } => "invalid_output_value",
            ScaffoldError::InvalidPluginName { .. } => "invalid_plugin_name",
            ScaffoldError::EmptyDerivedIdentifier { .. } => "empty_derived_identifier",
            ScaffoldError::InvalidPluginPath { .. } => "invalid_plugin_path",
            ScaffoldError::Filesystem { .. } => "filesystem",
            ScaffoldError::NotADirectory { .. } => "not_a_directory",
            ScaffoldError::TemplateParse(_) => "template_parse",
            ScaffoldError::TemplateRender(_) => "template_render",
            ScaffoldError::Catalog(_) => "catalog",
            ScaffoldError::Output(_) => "output",
            ScaffoldError::Config(_) => "config",
        }
    }
}
