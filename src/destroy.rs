//! Removal of a previously generated plugin.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::plugin_dir;
use crate::error::ScaffoldError;

/// Remove `<base_path>/src/<plugin_name_with_path>` and everything in it.
///
/// The directory must exist.
pub fn destroy_plugin(
    base_path: &Path,
    plugin_name_with_path: &str,
) -> Result<(), ScaffoldError> {
    let dir = plugin_dir(base_path, plugin_name_with_path)?;
    info!("Destroying buffalo plugin at directory: [{}]", dir.display());

    let metadata =
        fs::metadata(&dir).map_err(|e| ScaffoldError::filesystem("inspect directory", &dir, e))?;
    if !metadata.is_dir() {
        return Err(ScaffoldError::NotADirectory { path: dir });
    }

    fs::remove_dir_all(&dir).map_err(|e| ScaffoldError::filesystem("remove directory", &dir, e))
}
