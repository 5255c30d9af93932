//! Argument handling for the plugin binary.
//!
//! Buffalo invokes plugins with positional tokens (`available`,
//! `plugin-template-generate ...`), so arguments are walked by hand with a
//! forward-only cursor instead of a declarative parser:
//!
//! ```text
//! argv → ArgCursor → Dispatcher → (catalog | help | generate | destroy)
//! ```

mod catalog;
mod cursor;
mod help;

pub use catalog::{
    catalog_json, command_catalog, CommandDescriptor, AVAILABLE, DESTROY_COMMAND,
    GENERATE_COMMAND, HELP_FLAG, OUTPUT_FLAG,
};
pub use cursor::ArgCursor;
pub use help::HELP_TEXT;
