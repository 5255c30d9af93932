//! Commands this plugin advertises to `buffalo`.

use serde::Serialize;

use crate::error::ScaffoldError;

/// Top-level token that prints the catalog.
pub const AVAILABLE: &str = "available";
/// Top-level token that prints help.
pub const HELP_FLAG: &str = "--help";
/// Generate sub-command, as buffalo invokes it.
pub const GENERATE_COMMAND: &str = "plugin-template-generate";
/// Destroy sub-command, as buffalo invokes it.
pub const DESTROY_COMMAND: &str = "plugin-template-destroy";
/// Sink selection flag of the generate sub-command.
pub const OUTPUT_FLAG: &str = "--output";

/// One advertised command.
///
/// Serialized with the keys buffalo's plugin loader reads from the
/// `available` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    /// Name users type after the buffalo command (e.g. `buffalo generate <name>`).
    pub name: &'static str,
    /// Token buffalo passes to this binary instead of `name`.
    pub use_command: &'static str,
    /// Buffalo root command the plugin hooks into.
    pub buffalo_command: &'static str,
    /// Human-readable description (shown by `buffalo <command> --help`).
    pub description: &'static str,
}

/// Build the complete catalog, in advertised order.
pub fn command_catalog() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor {
            name: "plugin-template",
            use_command: GENERATE_COMMAND,
            buffalo_command: "generate",
            description:
                "[--output (gohome|stdout)] <buffalo_command> <plugin_name> Generates a new plugin.",
        },
        CommandDescriptor {
            name: "plugin-template",
            use_command: DESTROY_COMMAND,
            buffalo_command: "destroy",
            description: "<plugin_name> Destroys plugin previously generated by \"buffalo generate plugin-template\" command",
        },
    ]
}

/// Catalog as a single-line JSON array.
pub fn catalog_json(catalog: &[CommandDescriptor]) -> Result<String, ScaffoldError> {
    Ok(serde_json::to_string(catalog)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn catalog_lists_generate_then_destroy() {
        let catalog = command_catalog();
        let uses: Vec<_> = catalog.iter().map(|c| c.use_command).collect();
        assert_eq!(uses, vec![GENERATE_COMMAND, DESTROY_COMMAND]);
        assert!(catalog.iter().all(|c| c.name == "plugin-template"));
    }

    #[test]
    fn json_uses_buffalo_keys_in_order() {
        let json = catalog_json(&command_catalog()).unwrap();
        assert!(json.starts_with(
            r#"[{"name":"plugin-template","use_command":"plugin-template-generate","buffalo_command":"generate","description":"#
        ));

        let parsed: Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["buffalo_command"], "destroy");
        assert_eq!(
            entries[1]["description"],
            "<plugin_name> Destroys plugin previously generated by \"buffalo generate plugin-template\" command"
        );
    }
}
