use handlebars::Handlebars;
use serde::Serialize;

use crate::error::ScaffoldError;
use crate::naming::{handler_identifier, short_name};
use crate::template::body::PLUGIN_TEMPLATE;

const TEMPLATE_NAME: &str = "plugin";

/// Values substituted into the plugin template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    /// Buffalo root command the plugin hooks into (e.g. `generate`).
    pub buffalo_command: String,
    /// Plugin short name, prefix included (e.g. `buffalo-foo`).
    pub plugin_name: String,
    /// Go identifier of the generated handler (e.g. `handleFoo`).
    pub handler_name: String,
}

impl TemplateParams {
    /// Build parameters from the raw generate arguments.
    ///
    /// Fails when the short name is not a valid plugin name.
    pub fn for_plugin(
        buffalo_command: &str,
        plugin_name_with_path: &str,
    ) -> Result<Self, ScaffoldError> {
        let plugin_name = short_name(plugin_name_with_path);
        let handler_name = handler_identifier(&plugin_name)?;
        Ok(Self {
            buffalo_command: buffalo_command.to_string(),
            plugin_name,
            handler_name,
        })
    }
}

/// Handlebars wrapper holding the compiled plugin template.
///
/// Strict mode makes any placeholder without a matching parameter an error,
/// and escaping is off since the output is Go source, not HTML.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Compile the built-in plugin template.
    pub fn new() -> Result<Self, ScaffoldError> {
        Self::compile(PLUGIN_TEMPLATE)
    }

    fn compile(body: &str) -> Result<Self, ScaffoldError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string(TEMPLATE_NAME, body)
            .map_err(Box::new)?;
        Ok(Self { registry })
    }

    pub fn render(&self, params: &TemplateParams) -> Result<String, ScaffoldError> {
        Ok(self.registry.render(TEMPLATE_NAME, params)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TemplateParams {
        TemplateParams::for_plugin("generate", "me/buffalo-foo").unwrap()
    }

    #[test]
    fn params_use_short_name_and_handler() {
        let params = params();
        assert_eq!(params.buffalo_command, "generate");
        assert_eq!(params.plugin_name, "buffalo-foo");
        assert_eq!(params.handler_name, "handleFoo");
    }

    #[test]
    fn params_reject_invalid_short_name() {
        assert!(matches!(
            TemplateParams::for_plugin("generate", "buffalo-ns/foo"),
            Err(ScaffoldError::InvalidPluginName { .. })
        ));
    }

    #[test]
    fn renders_all_parameters_verbatim() {
        let rendered = TemplateRenderer::new().unwrap().render(&params()).unwrap();

        assert!(rendered.starts_with("package main\n"));
        assert!(rendered.contains("\"github.com/gobuffalo/buffalo/plugins\""));
        assert!(rendered.contains("func handleFoo() {"));
        assert!(rendered.contains("Handling: buffalo generate buffalo-foo."));
        assert!(rendered.contains("BuffaloCommand: \"generate\","));
        assert!(rendered.contains("UseCommand:     \"buffalo-foo\","));
        assert!(rendered.contains("case \"buffalo-foo\":\n\t\thandleFoo()"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn rendered_source_has_balanced_delimiters() {
        let rendered = TemplateRenderer::new().unwrap().render(&params()).unwrap();
        for (open, close) in [('{', '}'), ('(', ')'), ('[', ']')] {
            assert_eq!(
                rendered.matches(open).count(),
                rendered.matches(close).count(),
                "unbalanced {open}{close}"
            );
        }
        assert_eq!(rendered.matches('"').count() % 2, 0);
    }

    #[test]
    fn values_are_not_html_escaped() {
        let params = TemplateParams {
            buffalo_command: "a&b".to_string(),
            plugin_name: "buffalo-<x>".to_string(),
            handler_name: "handleX".to_string(),
        };
        let rendered = TemplateRenderer::compile("{{buffalo_command}} {{plugin_name}}")
            .unwrap()
            .render(&params)
            .unwrap();
        assert_eq!(rendered, "a&b buffalo-<x>");
    }

    #[test]
    fn malformed_body_fails_to_compile() {
        assert!(matches!(
            TemplateRenderer::compile("{{#if plugin_name}}unterminated"),
            Err(ScaffoldError::TemplateParse(_))
        ));
    }

    #[test]
    fn unknown_placeholder_fails_to_render() {
        let renderer = TemplateRenderer::compile("{{plugin_nmae}}").unwrap();
        assert!(matches!(
            renderer.render(&params()),
            Err(ScaffoldError::TemplateRender(_))
        ));
    }
}
