//! Output directory listing

use std::fs;
use std::path::Path;

use anyhow::Result;

/// Entry names in the output directory, in whatever order the file system
/// returns them. A directory that does not exist yet is an empty listing,
/// not an error.
pub fn list_downloads(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        files.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(files)
}
