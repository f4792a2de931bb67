//! Porcelain status parsing
//!
//! `git status --porcelain` emits one record per line: a two-character
//! status code (`XY`), a separator and the path. Paths with special
//! characters are wrapped in double quotes, and renames/copies are written
//! as `old -> new`.

use crate::error::CoreError;
use crate::models::ChangeRecord;
use std::borrow::Cow;

/// Two status characters plus one separator.
pub const DEFAULT_PATH_OFFSET: usize = 3;

/// Marker between source and destination of a rename or copy
pub const RENAME_SEPARATOR: &str = " -> ";

const STATUS_CODE_WIDTH: usize = 2;

/// Fixed-width header layout of a porcelain status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PorcelainFormat {
    /// Byte offset at which the path begins
    pub path_offset: usize,
}

impl Default for PorcelainFormat {
    fn default() -> Self {
        Self {
            path_offset: DEFAULT_PATH_OFFSET,
        }
    }
}

impl PorcelainFormat {
    /// Creates a format with a custom header width.
    pub fn with_offset(path_offset: usize) -> Result<Self, CoreError> {
        if path_offset < STATUS_CODE_WIDTH {
            return Err(CoreError::InvalidOffset(path_offset));
        }
        Ok(Self { path_offset })
    }

    /// Parses a single non-blank status line.
    pub fn parse_line(&self, line: &str) -> Result<ChangeRecord, CoreError> {
        let malformed = || CoreError::MalformedStatusLine(line.to_string());

        let status_code = line.get(..STATUS_CODE_WIDTH).ok_or_else(malformed)?;
        let raw_path = line.get(self.path_offset..).ok_or_else(malformed)?;

        let path = match raw_path.split_once(RENAME_SEPARATOR) {
            Some((_, destination)) => destination,
            None => raw_path,
        };
        let path = unquote(path);

        if path.is_empty() {
            return Err(malformed());
        }

        Ok(ChangeRecord::new(status_code, path.into_owned()))
    }

    /// Parses full status output, skipping blank lines.
    ///
    /// Records keep the order of the output. Each line's result is returned
    /// so the caller decides what to do with malformed ones.
    pub fn parse_output<'a>(
        &'a self,
        output: &'a str,
    ) -> impl Iterator<Item = Result<ChangeRecord, CoreError>> + 'a {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(move |line| self.parse_line(line))
    }
}

/// Strips exactly one pair of surrounding double quotes and decodes the
/// C-style escapes git writes inside them (`core.quotePath`).
fn unquote(path: &str) -> Cow<'_, str> {
    if path.len() >= 2 && path.starts_with('"') && path.ends_with('"') {
        unescape(&path[1..path.len() - 1])
    } else {
        Cow::Borrowed(path)
    }
}

/// Decodes `\\`, `\"`, control escapes and octal `\ooo` bytes.
///
/// Octal escapes carry raw bytes of a UTF-8 name, so bytes are collected
/// first and decoded once. Unknown escapes are kept verbatim.
fn unescape(quoted: &str) -> Cow<'_, str> {
    if !quoted.contains('\\') {
        return Cow::Borrowed(quoted);
    }

    let bytes = quoted.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' || i + 1 == bytes.len() {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let next = bytes[i + 1];
        let simple = match next {
            b'\\' => Some(b'\\'),
            b'"' => Some(b'"'),
            b'a' => Some(0x07),
            b'b' => Some(0x08),
            b't' => Some(b'\t'),
            b'n' => Some(b'\n'),
            b'v' => Some(0x0b),
            b'f' => Some(0x0c),
            b'r' => Some(b'\r'),
            _ => None,
        };
        if let Some(byte) = simple {
            out.push(byte);
            i += 2;
            continue;
        }

        match octal_byte(&bytes[i + 1..]) {
            Some(byte) => {
                out.push(byte);
                i += 4;
            }
            None => {
                out.push(b'\\');
                i += 1;
            }
        }
    }

    Cow::Owned(String::from_utf8_lossy(&out).into_owned())
}

/// Reads exactly three octal digits as one byte.
fn octal_byte(digits: &[u8]) -> Option<u8> {
    let digits = digits.get(..3)?;
    if !digits.iter().all(|d| (b'0'..=b'7').contains(d)) {
        return None;
    }
    let value = digits
        .iter()
        .fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
    u8::try_from(value).ok()
}
