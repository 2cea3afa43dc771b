//! Refuse to scaffold over anything that already exists.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Resolve `name` against `cwd` and make sure nothing lives there yet.
///
/// Any entry counts, including files and dangling symlinks. If the lookup
/// itself fails for a reason other than "not found", the path is treated as
/// taken.
pub fn ensure_target_absent(cwd: &Path, name: &str) -> Result<PathBuf> {
    let target = cwd.join(name);

    let exists = match fs::symlink_metadata(&target) {
        Ok(_) => true,
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => {
            tracing::debug!("cannot inspect {}: {}", target.display(), e);
            true
        }
    };

    if exists {
        return Err(ScaffoldError::FolderExists(target));
    }
    Ok(target)
}

/// Create the target directory, failing if anything appeared there since the
/// check. A directory made here belongs to this run.
pub fn claim_target(target: &Path) -> Result<()> {
    match fs::create_dir(target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(ScaffoldError::FolderExists(target.to_path_buf()))
        }
        Err(e) => Err(ScaffoldError::Io(e)),
    }
}
