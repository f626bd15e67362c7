//! Configuration constants and input validation for the command-line tool.

use std::path::Path;

use clap::ValueEnum;

use crate::error::{BverfgexError, Result};

/// File extension of LLCon decision files.
pub const XML_EXTENSION: &str = "xml";

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML document.
    Yaml,
}

/// Check whether a path names an LLCon XML file by its extension.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use bverfgex::config::has_xml_extension;
///
/// assert!(has_xml_extension(Path::new("corpus/1bvr000123.xml")));
/// assert!(has_xml_extension(Path::new("1BVR000123.XML")));
/// assert!(!has_xml_extension(Path::new("notes.txt")));
/// ```
pub fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(XML_EXTENSION))
}

/// Validate that a path exists and is a regular file.
///
/// # Returns
/// * `Ok(())` if the file can be read
/// * `Err(BverfgexError::InvalidInput)` otherwise
pub fn validate_file_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BverfgexError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(BverfgexError::InvalidInput(format!(
            "Path is not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_has_xml_extension() {
        assert!(has_xml_extension(Path::new("a.xml")));
        assert!(!has_xml_extension(Path::new("a.xml.bak")));
        assert!(!has_xml_extension(Path::new("xml")));
    }

    #[test]
    fn test_validate_file_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("decision.xml");
        std::fs::write(&file, "<entscheidung/>").unwrap();

        assert!(validate_file_path(&file).is_ok());
        assert!(matches!(
            validate_file_path(dir.path()),
            Err(BverfgexError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_file_path(&dir.path().join("missing.xml")),
            Err(BverfgexError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
