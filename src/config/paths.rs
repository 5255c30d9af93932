//! Base path and plugin directory resolution.

use std::path::{Component, Path, PathBuf};

use crate::config::types::Config;
use crate::error::ScaffoldError;

/// Environment variable holding the Go workspace.
pub const GOPATH_ENV: &str = "GOPATH";

/// Pick the Go workspace directory.
///
/// Order: non-empty `GOPATH`, the config file's `gopath`, then the Go
/// toolchain default `$HOME/go`.
pub fn resolve_base_path(gopath_env: Option<&str>, config: &Config) -> PathBuf {
    if let Some(gopath) = gopath_env.filter(|p| !p.is_empty()) {
        return PathBuf::from(gopath);
    }
    if let Some(gopath) = config.gopath.as_deref().filter(|p| !p.is_empty()) {
        return PathBuf::from(gopath);
    }
    dirs::home_dir()
        .map(|home| home.join("go"))
        .unwrap_or_else(|| PathBuf::from("go"))
}

/// Make `path` absolute against the current directory and drop `.`/`..`
/// lexically.
pub fn absolutize(path: &Path) -> Result<PathBuf, ScaffoldError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir()
            .map_err(|e| ScaffoldError::filesystem("resolve current directory", path, e))?;
        cwd.join(path)
    };
    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Directory of a plugin: `<base_path>/src/<plugin_name_with_path>`.
///
/// The plugin path is applied segment by segment. Root and `.` segments are
/// ignored; `..` may not climb out of `<base_path>/src`, and the result must
/// lie strictly below it.
pub fn plugin_dir(
    base_path: &Path,
    plugin_name_with_path: &str,
) -> Result<PathBuf, ScaffoldError> {
    let root = base_path.join("src");
    let invalid = || ScaffoldError::InvalidPluginPath {
        name: plugin_name_with_path.to_string(),
        root: root.clone(),
    };

    let mut segments = Vec::new();
    for component in Path::new(plugin_name_with_path).components() {
        match component {
            Component::Normal(part) => segments.push(part),
            Component::ParentDir => {
                if segments.pop().is_none() {
                    return Err(invalid());
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if segments.is_empty() {
        return Err(invalid());
    }

    let mut dir = root.clone();
    dir.extend(segments);
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gopath_env_wins() {
        let config = Config {
            gopath: Some("/from/config".to_string()),
            ..Config::default()
        };
        assert_eq!(
            resolve_base_path(Some("/from/env"), &config),
            PathBuf::from("/from/env")
        );
    }

    #[test]
    fn empty_gopath_env_falls_through_to_config() {
        let config = Config {
            gopath: Some("/from/config".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_base_path(Some(""), &config), PathBuf::from("/from/config"));
        assert_eq!(resolve_base_path(None, &config), PathBuf::from("/from/config"));
    }

    #[test]
    fn default_is_go_under_home() {
        let base = resolve_base_path(None, &Config::default());
        assert!(base.ends_with("go"));
    }

    #[test]
    fn absolutize_keeps_absolute_paths_and_cleans_them() {
        assert_eq!(
            absolutize(Path::new("/opt/./go/../gopath")).unwrap(),
            PathBuf::from("/opt/gopath")
        );
    }

    #[test]
    fn absolutize_anchors_relative_paths() {
        let resolved = absolutize(Path::new("relative/go")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("relative/go"));
    }

    #[test]
    fn plugin_dir_nests_under_src() {
        let base = Path::new("/opt/go");
        assert_eq!(
            plugin_dir(base, "buffalo-foo").unwrap(),
            PathBuf::from("/opt/go/src/buffalo-foo")
        );
        assert_eq!(
            plugin_dir(base, "github.com/me/buffalo-foo/").unwrap(),
            PathBuf::from("/opt/go/src/github.com/me/buffalo-foo")
        );
        assert_eq!(
            plugin_dir(base, "me/tmp/../buffalo-foo").unwrap(),
            PathBuf::from("/opt/go/src/me/buffalo-foo")
        );
    }

    #[test]
    fn plugin_dir_treats_absolute_names_as_relative_to_src() {
        assert_eq!(
            plugin_dir(Path::new("/opt/go"), "/me/buffalo-foo").unwrap(),
            PathBuf::from("/opt/go/src/me/buffalo-foo")
        );
    }

    #[test]
    fn plugin_dir_rejects_src_itself_and_escapes() {
        let base = Path::new("/opt/go");
        for name in ["", ".", "/", "me/..", "../buffalo-foo", "me/../../buffalo-foo"] {
            assert!(
                matches!(plugin_dir(base, name), Err(ScaffoldError::InvalidPluginPath { .. })),
                "{name:?} should be rejected"
            );
        }
    }
}
