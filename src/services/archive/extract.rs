use crate::types::{GenError, GenResult};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Extract every entry of the ZIP at `archive_path` into `dest_path`,
/// keeping relative paths.
///
/// Returns the first top-level directory met while extracting, or
/// `dest_path` itself when the archive holds only loose files. Entries that
/// would escape `dest_path` are skipped.
pub fn extract_zip(archive_path: &Path, dest_path: &Path) -> GenResult<PathBuf> {
    let file = fs::File::open(archive_path)
        .map_err(|e| GenError::io(format!("open {}", archive_path.display()), e))?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut top_level: Option<PathBuf> = None;
    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                log::warn!("Skipping unsafe archive entry: {}", entry.name());
                continue;
            }
        };

        if top_level.is_none() {
            top_level = top_level_dir(&entry_path, entry.is_dir()).map(|d| dest_path.join(d));
        }

        let output_path = dest_path.join(&entry_path);
        if entry.is_dir() {
            fs::create_dir_all(&output_path)
                .map_err(|e| GenError::io(format!("create {}", output_path.display()), e))?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| GenError::io(format!("create {}", parent.display()), e))?;
            }
            let mut outfile = fs::File::create(&output_path)
                .map_err(|e| GenError::io(format!("create {}", output_path.display()), e))?;
            io::copy(&mut entry, &mut outfile)
                .map_err(|e| GenError::io(format!("write {}", output_path.display()), e))?;
            count += 1;
        }
    }

    log::info!("Extracted {count} files into {}", dest_path.display());
    Ok(top_level.unwrap_or_else(|| dest_path.to_path_buf()))
}

/// First path component of an entry when that component is a directory.
fn top_level_dir(entry_path: &Path, is_dir: bool) -> Option<PathBuf> {
    let mut components = entry_path.components().filter_map(|c| match c {
        Component::Normal(part) => Some(part),
        _ => None,
    });
    let first = components.next()?;
    if is_dir || components.next().is_some() {
        Some(PathBuf::from(first))
    } else {
        None
    }
}
