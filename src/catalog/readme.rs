//! README parsing: YAML frontmatter, title and blurb

use chrono::{DateTime, NaiveDate, Utc};
use serde_yaml::Value;

/// Title used when a README has no level-1 heading
pub const UNTITLED: &str = "Untitled";

/// Fields read from an update's README
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeInfo {
    pub date: Option<DateTime<Utc>>,
    pub title: String,
    pub blurb: String,
}

/// Split content into the frontmatter block (between a leading `---` line
/// and the next `---` line) and the remaining body lines.
///
/// An unterminated block is not frontmatter; the whole content is body.
fn split_frontmatter(content: &str) -> (Option<String>, Vec<&str>) {
    let lines: Vec<&str> = content.lines().collect();
    if lines.first() != Some(&"---") {
        return (None, lines);
    }

    match lines[1..].iter().position(|line| *line == "---") {
        Some(offset) => {
            let end = offset + 1;
            (Some(lines[1..end].join("\n")), lines[end + 1..].to_vec())
        }
        None => (None, lines),
    }
}

/// Get a scalar frontmatter value as a string
fn get_str(value: &Value, key: &str) -> Option<String> {
    match value.as_mapping()?.get(Value::String(key.to_string()))? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a frontmatter date: `YYYY-MM-DD` (midnight UTC) or RFC 3339
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Extract date, title and blurb from README markdown
pub fn parse_readme(content: &str) -> ReadmeInfo {
    let (frontmatter, body) = split_frontmatter(content);

    let date = frontmatter.and_then(|yaml| match serde_yaml::from_str::<Value>(&yaml) {
        Ok(value) => get_str(&value, "date").and_then(|raw| parse_date(&raw)),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unparseable README frontmatter");
            None
        }
    });

    let title = body
        .iter()
        .find_map(|line| heading_text(line))
        .unwrap_or(UNTITLED)
        .to_string();

    let blurb = body
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .unwrap_or_default()
        .to_string();

    ReadmeInfo { date, title, blurb }
}

/// Text of a `# heading` line (one `#`, then whitespace)
fn heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}
