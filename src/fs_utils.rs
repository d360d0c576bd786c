use crate::error::{HdrgenError, Result};
use std::fs::{self, Permissions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes `content` to `path`, replacing any existing file
///
/// The bytes go to a temporary file in the destination directory first and
/// are renamed over `path` only once fully written, so a failed write never
/// leaves a truncated header behind. When `path` is a symlink the file it
/// points to is replaced and the link is kept. An existing file keeps its
/// permissions, and a read-only one is refused rather than replaced.
///
/// # Errors
///
/// Returns `HdrgenError::Write` if the destination is read-only, if the
/// temporary file cannot be created or written, or if it cannot be moved
/// over `path` (missing parent directory, permission denied, `path` is a
/// directory, disk full).
pub fn write_header(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: io::Error| HdrgenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(write_err)?;
    let existing = existing_permissions(&target);
    if existing.as_ref().is_some_and(Permissions::readonly) {
        return Err(write_err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "destination is read-only",
        )));
    }

    let dir = parent_dir(&target);
    debug!(dir = %dir.display(), target = %target.display(), "creating temporary header file");

    let mut builder = tempfile::Builder::new();
    builder.prefix(".hdrgen-").suffix(".tmp");
    if existing.is_none()
        && let Some(permissions) = default_permissions()
    {
        builder.permissions(permissions);
    }

    let mut file = builder.tempfile_in(dir).map_err(write_err)?;
    if let Some(permissions) = existing {
        // Set after creation so the umask does not narrow the original mode
        file.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;

    // On failure the returned handle is dropped here, removing the temporary file
    file.persist(&target).map_err(|e| write_err(e.error))?;

    info!(path = %path.display(), bytes = content.len(), "wrote header");
    Ok(())
}

/// File that will actually be replaced: `path` itself, or the file a
/// symlink at `path` points to
///
/// A dangling link resolves to its (not yet existing) destination, which is
/// then created.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(target) => Ok(target),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let destination = fs::read_link(path)?;
                Ok(parent_dir(path).join(destination))
            }
            Err(e) => Err(e),
        },
        _ => Ok(path.to_path_buf()),
    }
}

/// Directory that will hold the temporary file for `path`
fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Permissions of the regular file about to be replaced, if there is one
fn existing_permissions(path: &Path) -> Option<Permissions> {
    fs::metadata(path)
        .ok()
        .filter(fs::Metadata::is_file)
        .map(|metadata| metadata.permissions())
}

/// Mode for a newly created header
#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
