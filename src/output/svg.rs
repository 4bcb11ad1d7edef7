//! SVG histogram output writer.

use super::file::{create_output_file, file_size};
use crate::utils::error::OutputError;
use log::info;
use std::io::Write;
use std::path::Path;

/// Write a generated histogram SVG to disk
///
/// **Public** - used by the inspect command for `--svg`
///
/// # Errors
/// * `OutputError::InvalidPath` - Empty path, a directory, or parents cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
///
/// # Example
/// ```ignore
/// let svg = generate_histogram_svg(&rows, None)?;
/// write_svg(&svg, "histogram.svg")?;
/// ```
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing histogram SVG to: {}", output_path.display());

    let mut writer = create_output_file(output_path, "svg")?;
    writer.write_all(svg_content.as_bytes())?;
    writer.flush()?;

    info!("SVG written ({} bytes)", file_size(output_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"></svg>"#;

    #[test]
    fn test_write_svg() {
        let temp_file = NamedTempFile::new().unwrap();

        write_svg(SVG, temp_file.path()).unwrap();

        assert_eq!(std::fs::read_to_string(temp_file.path()).unwrap(), SVG);
    }

    #[test]
    fn test_write_svg_into_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            write_svg(SVG, temp_dir.path()),
            Err(OutputError::InvalidPath(_))
        ));
    }
}
