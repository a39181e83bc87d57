//! Property files.
//!
//! Parses hand-edited `key=value` files such as `local.properties` and
//! `key.properties`. The parser is permissive: an absent file is an empty
//! mapping, and malformed lines are skipped without touching other keys.

use std::collections::HashMap;
use std::fs;
#[cfg(unix)]
use std::io::Write;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{PropertyError, Result};

/// An ordered mapping of property keys to values.
///
/// Keys keep the position of their first occurrence; a later duplicate
/// replaces the value in place. The original text of every line is kept, so
/// saving a loaded file only rewrites the entries that were changed.
#[derive(Debug, Clone, Default)]
pub struct PropertyFile {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
    lines: Vec<Line>,
}

/// One logical line as it appeared in the file.
#[derive(Debug, Clone)]
enum Line {
    /// Comment, blank or malformed text, written back unchanged
    Verbatim(String),
    /// An entry; `raw` is the original text until its value is replaced
    Entry { key: String, raw: Option<String> },
}

impl PropertyFile {
    /// Create an empty property file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a property file from disk.
    ///
    /// A file that does not exist yields an empty mapping. Bytes that are not
    /// valid UTF-8 are replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `PropertyError::Read` if the file exists but cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading property file");

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "property file absent");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(PropertyError::Read {
                    path: path.to_path_buf(),
                    source,
                }
                .into())
            }
        };

        let file = Self::parse(&String::from_utf8_lossy(&bytes));
        debug!(entries = file.len(), "property file loaded");

        Ok(file)
    }

    /// Parse property file contents.
    ///
    /// - Blank lines and lines starting with `#` or `!` are comments
    /// - Key and value are split at the first unescaped `=`
    /// - Keys are trimmed; values lose leading whitespace only (space, tab, form feed)
    /// - A line ending in an odd number of backslashes continues on the next one
    /// - Lines without `=` or with an empty key are skipped
    pub fn parse(contents: &str) -> Self {
        let mut file = Self::new();
        let mut lines = contents.lines().enumerate();

        while let Some((index, raw)) = lines.next() {
            let line = raw.trim_start_matches(is_property_whitespace);

            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                file.lines.push(Line::Verbatim(raw.to_string()));
                continue;
            }

            let mut text = raw.to_string();
            let mut logical = line.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => {
                        text.push('\n');
                        text.push_str(next);
                        logical.push_str(next.trim_start_matches(is_property_whitespace));
                    }
                    None => break,
                }
            }

            match split_entry(&logical) {
                Some((key, value)) => file.insert_parsed(key, value, text),
                None => {
                    debug!(line = index + 1, "skipping malformed property line");
                    file.lines.push(Line::Verbatim(text));
                }
            }
        }

        file
    }

    fn insert_parsed(&mut self, key: String, value: String, raw: String) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key.clone(), value));
            }
        }
        self.lines.push(Line::Entry { key, raw: Some(raw) });
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    /// Value for `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Insert or replace a value.
    ///
    /// A replaced key keeps its position and its first line is rewritten on
    /// save; later duplicate lines for it are dropped. A new key is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        if let Some(&i) = self.index.get(&key) {
            self.entries[i].1 = value;
            let mut seen = false;
            self.lines.retain_mut(|line| match line {
                Line::Entry { key: k, raw } if *k == key => {
                    let first = !seen;
                    seen = true;
                    *raw = None;
                    first
                }
                _ => true,
            });
            return;
        }

        // A dangling continuation would swallow the appended line
        let dangling = matches!(
            self.lines.last(),
            Some(Line::Verbatim(text) | Line::Entry { raw: Some(text), .. })
                if ends_with_continuation(text)
        );
        if dangling {
            self.lines.push(Line::Verbatim(String::new()));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key.clone(), value));
        self.lines.push(Line::Entry { key, raw: None });
    }

    /// All entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the file to disk.
    ///
    /// Comments, blank lines, malformed lines and untouched entries are
    /// written back as they were read.
    ///
    /// # Errors
    ///
    /// Returns `PropertyError::Write` if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), entries = self.len(), "saving property file");

        fs::write(path, self.to_properties_string()).map_err(|source| PropertyError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Write the file readable by the owner only (0600 on Unix).
    ///
    /// Used for files holding credentials.
    ///
    /// # Errors
    ///
    /// Returns `PropertyError::Write` if the file cannot be written.
    pub fn save_private(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), entries = self.len(), "saving private property file");

        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let write = || -> std::io::Result<()> {
                let mut file = fs::OpenOptions::new()
                    .create(true)
                    .truncate(true)
                    .write(true)
                    .mode(0o600)
                    .open(path)?;
                file.write_all(self.to_properties_string().as_bytes())?;
                file.flush()?;

                // mode() only applies on create
                fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            };

            write().map_err(|source| PropertyError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        #[cfg(not(unix))]
        {
            self.save(path)?;
        }

        Ok(())
    }

    fn to_properties_string(&self) -> String {
        let mut output = String::new();

        for line in &self.lines {
            match line {
                Line::Verbatim(text) | Line::Entry { raw: Some(text), .. } => {
                    output.push_str(text)
                }
                Line::Entry { key, raw: None } => {
                    output.push_str(&escape_key(key));
                    output.push('=');
                    output.push_str(&escape_value(self.get(key).unwrap_or_default()));
                }
            }
            output.push('\n');
        }

        output
    }
}

/// Two files are equal when they hold the same entries in the same order.
impl PartialEq for PropertyFile {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for PropertyFile {}

impl std::fmt::Display for PropertyFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_properties_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyFile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut file = Self::new();
        for (key, value) in iter {
            file.set(key, value);
        }
        file
    }
}

/// Check that a key can be written and read back unchanged.
///
/// # Errors
///
/// Returns `PropertyError::InvalidKey` for empty keys or keys with line breaks.
pub fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() || key.trim() != key || key.contains(['\n', '\r']) {
        return Err(PropertyError::InvalidKey(key.to_string()).into());
    }
    Ok(())
}

/// Whitespace as `.properties` files define it: space, tab and form feed.
fn is_property_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000C}')
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped `=`.
///
/// Trailing key whitespace is trimmed unless it was escaped.
fn split_entry(line: &str) -> Option<(String, String)> {
    let mut escaped = false;
    let mut separator = None;
    let mut key_end = 0;

    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            key_end = i + ch.len_utf8();
        } else if ch == '\\' {
            escaped = true;
            key_end = i + 1;
        } else if ch == '=' {
            separator = Some(i);
            break;
        } else if !is_property_whitespace(ch) {
            key_end = i + ch.len_utf8();
        }
    }

    let separator = separator?;
    let key = unescape(line[..key_end].trim_start_matches(is_property_whitespace));
    if key.is_empty() {
        return None;
    }
    let value = unescape(line[separator + 1..].trim_start_matches(is_property_whitespace));

    Some((key, value))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                match u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| hex.len() == 4)
                    .and_then(char::from_u32)
                {
                    Some(decoded) => {
                        out.push(decoded);
                        for _ in 0..4 {
                            chars.next();
                        }
                    }
                    // Malformed \u escape, keep it literally
                    None => out.push_str("\\u"),
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());

    for (i, ch) in key.chars().enumerate() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '=' => escaped.push_str("\\="),
            ':' => escaped.push_str("\\:"),
            ' ' => escaped.push_str("\\ "),
            '\t' => escaped.push_str("\\t"),
            '\u{000C}' => escaped.push_str("\\f"),
            '#' | '!' if i == 0 => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }

    escaped
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for (i, ch) in value.chars().enumerate() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{000C}' => escaped.push_str("\\f"),
            ' ' if i == 0 => escaped.push_str("\\ "),
            _ => escaped.push(ch),
        }
    }

    escaped
}
