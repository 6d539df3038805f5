use crate::error::{PinError, Result};
use regex::Regex;
use std::ops::Range;

/// Matches the whole line carrying the marker. CRLF mode keeps a trailing
/// `\r` outside the match so the line terminator survives replacement.
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    marker: String,
    line: Regex,
}

impl MarkerPattern {
    pub fn new(marker: &str) -> Result<Self> {
        let line = Regex::new(&format!(r"(?mR)^.*(?:{marker}).*$")).map_err(|e| {
            PinError::Config(format!("Invalid marker pattern '{}': {}", marker, e))
        })?;

        Ok(Self {
            marker: marker.to_string(),
            line,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.marker
    }

    /// Byte range of the first marker line, excluding its terminator.
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.line.find(text).map(|m| m.range())
    }

    /// Replaces the first marker line with `replacement`, taken literally.
    /// Returns the text unchanged when no line matches.
    pub fn replace_first(&self, text: &str, replacement: &str) -> String {
        match self.find(text) {
            Some(range) => {
                let mut out = String::with_capacity(text.len() + replacement.len());
                out.push_str(&text[..range.start]);
                out.push_str(replacement);
                out.push_str(&text[range.end..]);
                out
            }
            None => text.to_string(),
        }
    }
}
