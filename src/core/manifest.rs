//! Manifest placeholders.
//!
//! Substitutes `${NAME}` tokens in a manifest template, the way the manifest
//! merger fills `manifestPlaceholders`.

use std::path::Path;

use tracing::debug;

use crate::core::types::Placeholders;
use crate::error::{ManifestError, Result};

/// Replace every `${NAME}` token in `template`.
///
/// Text that is not a well-formed token (`${` without a closing brace, or a
/// name with characters outside `[A-Za-z0-9_.-]`) is copied unchanged.
/// Values are escaped for XML.
///
/// # Errors
///
/// Returns `ManifestError::UnresolvedPlaceholders` naming every token with no
/// value. Nothing is substituted in that case.
pub fn inject(template: &str, placeholders: &Placeholders) -> Result<String> {
    let missing: Vec<String> = placeholders_in(template)
        .into_iter()
        .filter(|name| !placeholders.contains_key(name))
        .collect();
    if !missing.is_empty() {
        return Err(ManifestError::UnresolvedPlaceholders(missing).into());
    }

    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    let mut substituted = 0usize;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            output.push_str(&rest[start..]);
            rest = "";
            break;
        };

        let name = &after[..end];
        match placeholders.get(name) {
            Some(value) if is_placeholder_name(name) => {
                push_xml_escaped(&mut output, value);
                substituted += 1;
                rest = &after[end + 1..];
            }
            _ => {
                output.push_str("${");
                rest = after;
            }
        }
    }

    output.push_str(rest);
    debug!(substituted, "manifest placeholders injected");

    Ok(output)
}

/// Read a template from disk and inject placeholders.
///
/// # Errors
///
/// Returns `ManifestError::ReadTemplate` if the template cannot be read, or
/// any error from [`inject`].
pub fn inject_file(path: &Path, placeholders: &Placeholders) -> Result<String> {
    let template = std::fs::read_to_string(path).map_err(|source| ManifestError::ReadTemplate {
        path: path.to_path_buf(),
        source,
    })?;

    inject(&template, placeholders)
}

/// Names of all well-formed tokens in `template`, in order of first appearance.
pub fn placeholders_in(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };

        let name = &after[..end];
        if is_placeholder_name(name) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
            rest = &after[end + 1..];
        } else {
            rest = after;
        }
    }

    names
}

fn push_xml_escaped(output: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&apos;"),
            _ => output.push(ch),
        }
    }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
