use std::fs::{File, Metadata};
use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use super::error::FilesError;

/// Walks every regular file below `root`, calling `visit` with the file's
/// path relative to `root` and its metadata.
///
/// At most `max_open` directory handles are held at once. When a deeper
/// directory would exceed the bound, the remaining entries of the oldest
/// open directory are read into memory and its handle is closed before
/// descending, so deep trees never fail for lack of descriptors.
///
/// Symlinks are not followed and, like other non-regular entries, are
/// skipped silently. Files and subdirectories that cannot be read are
/// skipped with a warning. Failing to stat or open `root` itself is fatal.
pub fn walk<F>(root: &Path, max_open: usize, mut visit: F) -> Result<(), FilesError>
where
    F: FnMut(&Path, &Metadata),
{
    let metadata = std::fs::metadata(root).map_err(|source| FilesError::Stat {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(FilesError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .max_open(max_open.max(1));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(FilesError::Walk {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                let path = err.path().map(|p| p.display().to_string()).unwrap_or_default();
                warn!("Cannot read '{}', skipping: {}", path, err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("Cannot stat '{}', skipping: {}", relative.display(), err);
                continue;
            }
        };

        if let Err(err) = File::open(path) {
            warn!("Cannot read '{}', skipping: {}", relative.display(), err);
            continue;
        }

        visit(relative, &metadata);
    }

    Ok(())
}
