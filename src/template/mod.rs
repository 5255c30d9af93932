//! Plugin template rendering and output.
//!
//! Rendering happens before any filesystem access, so a bad plugin name
//! never leaves an empty directory behind.

mod body;
mod renderer;
mod sink;

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::config::plugin_dir;
use crate::error::ScaffoldError;

pub use body::PLUGIN_TEMPLATE;
pub use renderer::{TemplateParams, TemplateRenderer};
pub use sink::OutputSink;

/// Render a plugin skeleton and write it to `sink`.
///
/// `out` receives the source for [`OutputSink::Stdout`]; for
/// [`OutputSink::GoHome`] the file is written to
/// `<base_path>/src/<plugin_name_with_path>/<short_name>.go`, replacing any
/// previous version.
pub fn generate_plugin<W: Write>(
    buffalo_command: &str,
    plugin_name_with_path: &str,
    base_path: &Path,
    sink: OutputSink,
    out: &mut W,
) -> Result<(), ScaffoldError> {
    let params = TemplateParams::for_plugin(buffalo_command, plugin_name_with_path)?;
    debug!(
        buffalo_command = %params.buffalo_command,
        plugin_name = %params.plugin_name,
        handler_name = %params.handler_name,
        "Rendering plugin template"
    );
    let rendered = TemplateRenderer::new()?.render(&params)?;

    match sink {
        OutputSink::Stdout => {
            info!("Generating buffalo plugin at: [{}]", sink);
            out.write_all(rendered.as_bytes())?;
            out.flush()?;
            Ok(())
        }
        OutputSink::GoHome => {
            let dir = plugin_dir(base_path, plugin_name_with_path)?;
            let file = dir.join(format!("{}.go", params.plugin_name));

            fs::create_dir_all(&dir)
                .map_err(|e| ScaffoldError::filesystem("create directory", &dir, e))?;
            fs::write(&file, rendered.as_bytes())
                .map_err(|e| ScaffoldError::filesystem("write file", &file, e))?;

            info!("Generating buffalo plugin at: [{}]", dir.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stdout_sink_writes_source_and_no_files() {
        let temp = TempDir::new().unwrap();
        let mut out: Vec<u8> = Vec::new();

        generate_plugin("generate", "buffalo-foo", temp.path(), OutputSink::Stdout, &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("func handleFoo()"));
        assert!(!temp.path().join("src").exists());
    }

    #[test]
    fn gohome_sink_writes_under_src() {
        let temp = TempDir::new().unwrap();
        let mut out: Vec<u8> = Vec::new();

        generate_plugin(
            "destroy",
            "acme/buffalo-cleanup",
            temp.path(),
            OutputSink::GoHome,
            &mut out,
        )
        .unwrap();

        let expected = temp
            .path()
            .join("src")
            .join("acme")
            .join("buffalo-cleanup")
            .join("buffalo-cleanup.go");
        assert!(expected.is_file());
        assert!(out.is_empty());

        let source = fs::read_to_string(expected).unwrap();
        assert!(source.contains("func handleCleanup()"));
        assert!(source.contains("BuffaloCommand: \"destroy\","));
    }

    #[test]
    fn generating_twice_overwrites() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("src/buffalo-foo/buffalo-foo.go");
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, "stale contents that are longer than nothing").unwrap();

        for command in ["generate", "destroy"] {
            generate_plugin(
                command,
                "buffalo-foo",
                temp.path(),
                OutputSink::GoHome,
                &mut Vec::<u8>::new(),
            )
            .unwrap();
        }

        let entries: Vec<_> = fs::read_dir(file.parent().unwrap()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let source = fs::read_to_string(&file).unwrap();
        assert!(!source.contains("stale"));
        assert!(source.contains("BuffaloCommand: \"destroy\","));
        assert!(!source.contains("BuffaloCommand: \"generate\","));
    }

    #[test]
    fn invalid_name_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let err = generate_plugin(
            "generate",
            "acme/foo",
            temp.path(),
            OutputSink::GoHome,
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::InvalidPluginName { .. }));
        assert!(!temp.path().join("src").exists());
    }

    #[test]
    fn blocked_directory_is_a_filesystem_error() {
        let temp = TempDir::new().unwrap();
        // A regular file where the plugin directory should go.
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/buffalo-foo"), "").unwrap();

        let err = generate_plugin(
            "generate",
            "buffalo-foo",
            temp.path(),
            OutputSink::GoHome,
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::Filesystem { action: "create directory", .. }
        ));
    }
}
