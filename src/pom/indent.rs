use crate::error::{PinError, Result};
use regex::Regex;

/// Indentation unit and line terminator observed in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStyle {
    pub indent_unit: String,
    pub newline: &'static str,
}

impl DocumentStyle {
    pub fn detect(text: &str) -> Result<Self> {
        Ok(Self {
            indent_unit: infer_indent_unit(text)?,
            newline: detect_newline(text),
        })
    }

    pub fn indent(&self, level: usize) -> String {
        self.indent_unit.repeat(level)
    }
}

/// Leading whitespace of the first line that starts an element, or an empty
/// string when nothing is indented.
pub fn infer_indent_unit(text: &str) -> Result<String> {
    let indented_line = Regex::new(r"(?m)^([ \t]+)<")
        .map_err(|e| PinError::Config(format!("Regex error: {}", e)))?;

    Ok(indented_line
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default())
}

pub fn detect_newline(text: &str) -> &'static str {
    if text.contains("\r\n") { "\r\n" } else { "\n" }
}
