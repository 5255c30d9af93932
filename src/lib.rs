//! Buffalo plugin that generates (and destroys) skeletons of other buffalo
//! plugins.
//!
//! ```text
//! buffalo generate plugin-template [--output (gohome|stdout)] <buffalo_command> <plugin_name>
//! buffalo destroy plugin-template <plugin_name>
//! ```

pub mod args;
pub mod config;
pub mod destroy;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod naming;
pub mod template;

pub use dispatch::{Dispatcher, Outcome};
pub use error::ScaffoldError;
