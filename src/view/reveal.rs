//! Reveal collaborators: open a source location in an external editor.
//!
//! The view state only hands out `(path, line)` pairs; how a location is
//! shown is up to the `Revealer` it was constructed with.

use crate::parser::BuildTimeRecord;
use crate::utils::config::{DEFAULT_EDITOR_COMMAND, LINE_PLACEHOLDER, PATH_PLACEHOLDER};
use crate::utils::error::RevealError;
use log::{debug, info};
use std::fmt;
use std::process::Command;

/// A source location to navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub path: String,
    pub line: u32,
}

impl RevealTarget {
    pub fn new(path: impl Into<String>, line: u32) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

impl From<&BuildTimeRecord> for RevealTarget {
    fn from(record: &BuildTimeRecord) -> Self {
        Self::new(record.path(), record.line_number())
    }
}

impl fmt::Display for RevealTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// Something that can show a source location to the user
pub trait Revealer {
    fn reveal(&self, target: &RevealTarget) -> Result<(), RevealError>;
}

/// Reveals by running an editor command built from a template
///
/// The template is split on whitespace, then `{path}` and `{line}` are
/// substituted inside each argument, so paths containing spaces stay a
/// single argument.
#[derive(Debug, Clone)]
pub struct CommandRevealer {
    template: String,
}

impl Default for CommandRevealer {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR_COMMAND)
    }
}

impl CommandRevealer {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Expand the template into a program and its arguments
    ///
    /// **Public** - lets callers preview the command without running it
    pub fn build_command(&self, target: &RevealTarget) -> Result<(String, Vec<String>), RevealError> {
        let line = target.line.to_string();
        let mut parts = self.template.split_whitespace().map(|part| {
            part.replace(PATH_PLACEHOLDER, &target.path)
                .replace(LINE_PLACEHOLDER, &line)
        });

        let program = parts.next().ok_or(RevealError::EmptyCommand)?;
        Ok((program, parts.collect()))
    }
}

impl Revealer for CommandRevealer {
    fn reveal(&self, target: &RevealTarget) -> Result<(), RevealError> {
        let (program, args) = self.build_command(target)?;

        info!("Revealing {} with {}", target, program);
        debug!("Editor arguments: {:?}", args);

        let status = Command::new(&program)
            .args(&args)
            .status()
            .map_err(|source| RevealError::LaunchFailed {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(RevealError::EditorFailed {
                program,
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

/// Reveals by printing the location (dry run)
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintRevealer;

impl Revealer for PrintRevealer {
    fn reveal(&self, target: &RevealTarget) -> Result<(), RevealError> {
        info!("Reveal requested for {}", target);
        println!("{}", target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command_substitutes_placeholders() {
        let revealer = CommandRevealer::new("code --goto {path}:{line}");
        let target = RevealTarget::new("/My Project/File.swift", 17);

        let (program, args) = revealer.build_command(&target).unwrap();

        assert_eq!(program, "code");
        assert_eq!(args, vec!["--goto", "/My Project/File.swift:17"]);
    }

    #[test]
    fn test_default_template() {
        let revealer = CommandRevealer::default();
        let (program, args) = revealer
            .build_command(&RevealTarget::new("/a.swift", 3))
            .unwrap();

        assert_eq!(program, "xed");
        assert_eq!(args, vec!["--line", "3", "/a.swift"]);
    }

    #[test]
    fn test_empty_template() {
        let revealer = CommandRevealer::new("   ");
        assert!(matches!(
            revealer.build_command(&RevealTarget::new("/a.swift", 1)),
            Err(RevealError::EmptyCommand)
        ));
    }
}
