//! Decoded source file representation shared by all rules.
//!
//! Rules operate on [`SourceFile`], which pairs a path with UTF-8 content and
//! exposes a line iterator that preserves the original terminator of every
//! line, so the line-ending rule can see exactly what was on disk.

use std::path::{Path, PathBuf};

/// Line terminator observed at the end of a physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// A lone `\r`, which no canonical style accepts.
    Cr,
    /// Final line of a file with no trailing terminator.
    Unterminated,
}

/// A single physical line: 1-based number, text without the terminator, and
/// the terminator itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
    pub ending: LineEnding,
}

/// A file that decoded cleanly as UTF-8, ready for rule checks.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    #[must_use]
    pub const fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the content ends with a proper `\n` terminator.
    ///
    /// A trailing lone `\r` does not count.
    #[must_use]
    pub fn ends_with_newline(&self) -> bool {
        self.content.ends_with('\n')
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Iterates physical lines with their original terminators.
    ///
    /// `"a\nb"` yields two lines, the second [`LineEnding::Unterminated`];
    /// `"a\n"` yields one. Empty content yields nothing.
    #[must_use]
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            rest: &self.content,
            number: 0,
        }
    }
}

/// Iterator over [`SourceLine`]s, produced by [`SourceFile::lines`].
#[derive(Debug)]
pub struct Lines<'a> {
    rest: &'a str,
    number: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        self.number += 1;

        let Some(idx) = self.rest.find(['\n', '\r']) else {
            let text = self.rest;
            self.rest = "";
            return Some(SourceLine {
                number: self.number,
                text,
                ending: LineEnding::Unterminated,
            });
        };

        let text = &self.rest[..idx];
        // Terminator chars are single-byte, so byte indexing is safe here.
        let (ending, skip) = if self.rest.as_bytes()[idx] == b'\r' {
            if self.rest.as_bytes().get(idx + 1) == Some(&b'\n') {
                (LineEnding::CrLf, 2)
            } else {
                (LineEnding::Cr, 1)
            }
        } else {
            (LineEnding::Lf, 1)
        };
        self.rest = &self.rest[idx + skip..];

        Some(SourceLine {
            number: self.number,
            text,
            ending,
        })
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
