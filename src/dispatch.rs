//! Top-level command dispatch.
//!
//! Walks the argument cursor token by token:
//!
//! ```text
//! available                  → print catalog, keep scanning
//! --help                     → print help, stop
//! plugin-template-generate   → [--output <sink>]... <buffalo_command> <plugin_name>
//! plugin-template-destroy    → <plugin_name>
//! anything else              → report, print help, stop
//! ```

use std::cell::OnceCell;
use std::io::Write;

use tracing::{info, warn};

use crate::args::{
    catalog_json, command_catalog, ArgCursor, AVAILABLE, DESTROY_COMMAND, GENERATE_COMMAND,
    HELP_FLAG, HELP_TEXT, OUTPUT_FLAG,
};
use crate::config::Settings;
use crate::destroy::destroy_plugin;
use crate::error::ScaffoldError;
use crate::template::{generate_plugin, OutputSink};

/// How a successful dispatch ended. All of these exit with status 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every token was handled.
    Completed,
    /// Help was printed (explicitly or because there were no arguments).
    Help,
    /// Scanning stopped at a token that is not a command.
    Unrecognized(String),
}

type SettingsLoader = Box<dyn Fn() -> Result<Settings, ScaffoldError>>;

/// Runs commands against settings that are loaded on first use.
///
/// Only generate and destroy need a Go workspace, so help and the catalog
/// keep working when the config file is broken.
pub struct Dispatcher {
    load_settings: SettingsLoader,
    settings: OnceCell<Settings>,
}

impl Dispatcher {
    pub fn new(settings: Settings) -> Self {
        Self::with_loader(move || Ok(settings.clone()))
    }

    /// Read the config file and `GOPATH` the first time a command needs them.
    pub fn from_env() -> Self {
        Self::with_loader(Settings::from_env)
    }

    fn with_loader(load: impl Fn() -> Result<Settings, ScaffoldError> + 'static) -> Self {
        Self {
            load_settings: Box::new(load),
            settings: OnceCell::new(),
        }
    }

    fn settings(&self) -> Result<&Settings, ScaffoldError> {
        if let Some(settings) = self.settings.get() {
            return Ok(settings);
        }
        let loaded = (self.load_settings)()?;
        Ok(self.settings.get_or_init(|| loaded))
    }

    /// Handle the full process argument list (program name included).
    ///
    /// Everything meant for the user goes to `out`; the first error stops
    /// dispatch and is returned untouched.
    pub fn run<W: Write>(&self, argv: &[String], out: &mut W) -> Result<Outcome, ScaffoldError> {
        let mut cursor = ArgCursor::new(argv);
        if !cursor.has_next() {
            print_help(out)?;
            return Ok(Outcome::Help);
        }

        // `--output` override; persists across generate commands in one invocation.
        let mut sink: Option<OutputSink> = None;

        while cursor.has_next() {
            let token = cursor.consume("Flag or buffalo root command")?;
            match token {
                AVAILABLE => {
                    writeln!(out, "{}", catalog_json(&command_catalog())?)?;
                }
                HELP_FLAG => {
                    print_help(out)?;
                    return Ok(Outcome::Help);
                }
                GENERATE_COMMAND => {
                    let settings = self.settings()?;
                    generate(settings, &mut cursor, &mut sink, out)?;
                }
                DESTROY_COMMAND => {
                    let settings = self.settings()?;
                    destroy(settings, &mut cursor)?;
                }
                other => {
                    warn!(token = other, "Unrecognized option");
                    writeln!(out, "Unrecognized option: {other}")?;
                    writeln!(out, "All passed arguments:")?;
                    writeln!(out, "{argv:?}")?;
                    print_help(out)?;
                    return Ok(Outcome::Unrecognized(other.to_string()));
                }
            }
        }

        Ok(Outcome::Completed)
    }
}

/// `[--output <sink>]... <buffalo_command> <plugin_name>`
///
/// Flags are only recognized before the first positional argument.
fn generate<W: Write>(
    settings: &Settings,
    cursor: &mut ArgCursor<'_>,
    sink: &mut Option<OutputSink>,
    out: &mut W,
) -> Result<(), ScaffoldError> {
    while cursor.has_next() {
        let next = cursor.peek("Flag or buffalo generate plugin-template's parameter")?;
        if next != OUTPUT_FLAG {
            break;
        }
        cursor.consume("--output argument consume")?;
        let value = cursor.consume("Output value: one of (gohome|stdout)")?;
        info!("Setting output to: {}", value);
        *sink = Some(OutputSink::parse(value)?);
    }

    let buffalo_command =
        cursor.consume("<buffalo_command> For which buffalo command is this plugin for.")?;
    let plugin_name = cursor.consume("<plugin_name> Generated plugin name.")?;

    generate_plugin(
        buffalo_command,
        plugin_name,
        &settings.base_path,
        sink.unwrap_or(settings.output),
        out,
    )
}

/// `<plugin_name>`
fn destroy(settings: &Settings, cursor: &mut ArgCursor<'_>) -> Result<(), ScaffoldError> {
    let plugin_name = cursor.consume("<plugin_name> Generated plugin name.")?;
    destroy_plugin(&settings.base_path, plugin_name)
}

pub fn print_help<W: Write>(out: &mut W) -> Result<(), ScaffoldError> {
    writeln!(out, "{HELP_TEXT}")?;
    Ok(())
}
