//! YAML frontmatter handling for markdown pages.
//!
//! A frontmatter block starts on the first line of the file with `---` and
//! ends at the next `---` line.

use serde_yaml::Value;

/// Frontmatter delimiter line.
const DELIMITER: &str = "---";

/// Keys that may hold a page description, highest priority first.
const DESCRIPTION_KEYS: [&str; 4] = ["description", "summary", "abstract", "desc"];

/// Split a page into its frontmatter block and body.
///
/// Returns `(None, content)` when the page has no complete frontmatter block.
pub(crate) fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let content_start = content.strip_prefix('\u{feff}').unwrap_or(content);
    let first_len = content_start.find('\n').map_or(content_start.len(), |i| i + 1);
    if content_start[..first_len].trim_end() != DELIMITER {
        return (None, content);
    }

    let rest = &content_start[first_len..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, content)
}

/// Pick the description from frontmatter YAML.
///
/// Returns `Ok(None)` when the block is empty, is not a mapping, or has no
/// usable description key.
///
/// # Errors
///
/// Returns an error if the YAML is malformed.
pub(crate) fn frontmatter_description(yaml: &str) -> Result<Option<String>, serde_yaml::Error> {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let Value::Mapping(fields) = serde_yaml::from_str(trimmed)? else {
        return Ok(None);
    };
    Ok(DESCRIPTION_KEYS
        .iter()
        .find_map(|key| fields.get(*key).and_then(scalar_text)))
}

/// Text of a scalar YAML value, `None` for blanks and collections.
fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
