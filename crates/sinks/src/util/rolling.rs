//! Rolled file naming and shifting
//!
//! ```text
//! app.log   → app.log.1
//! app.log.1 → app.log.2
//! ...
//! app.log.{max-1} → app.log.{max}   (previous app.log.{max} discarded)
//! ```

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Path of rolled slot `index` for `path`: `{path}.{index}`
pub fn rolled_path(path: &Path, index: u32) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

/// Shift the active file and its rolled files up by one slot
///
/// Walks from the highest slot down: for each present source, the target is
/// removed first and then the source renamed onto it. Leaves `path` vacant.
/// Does nothing when `max_rolling_files` is 0.
pub fn shift_files(path: &Path, max_rolling_files: u32) -> io::Result<()> {
    for i in (0..max_rolling_files).rev() {
        let source = if i == 0 {
            path.to_path_buf()
        } else {
            rolled_path(path, i)
        };
        if !source.exists() {
            continue;
        }

        let target = rolled_path(path, i + 1);
        if target.exists() {
            fs::remove_file(&target)?;
        }
        fs::rename(&source, &target)?;
    }
    Ok(())
}
