//! File plumbing shared by the JSON and SVG writers.

use crate::utils::error::OutputError;
use log::debug;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Open `path` for writing, creating missing parent directories
///
/// **Public (crate)** - every on-disk output goes through here
///
/// # Arguments
/// * `path` - Destination file
/// * `extension` - Expected extension, only checked for a debug hint
///
/// # Errors
/// * `OutputError::InvalidPath` - Empty path, a directory, or parents cannot be created
/// * `OutputError::WriteFailed` - File cannot be created
pub(crate) fn create_output_file(
    path: &Path,
    extension: &str,
) -> Result<BufWriter<File>, OutputError> {
    validate_output_path(path, extension)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

/// Size of a written file, 0 if it cannot be read back
pub(crate) fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

fn validate_output_path(path: &Path, extension: &str) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if path.extension().is_some_and(|ext| ext != extension) {
        debug!("{} does not end in .{}", path.display(), extension);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new(""), "json").is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path(), "svg").is_err());
    }

    #[test]
    fn test_create_output_file_makes_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a/b/out.txt");

        let mut writer = create_output_file(&nested, "txt").unwrap();
        writer.write_all(b"hello").unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(file_size(&nested), 5);
    }
}
