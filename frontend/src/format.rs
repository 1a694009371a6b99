use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*([^*]+)\*").unwrap();
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Renders an API timestamp as e.g. `Jan 5, 2025`.
///
/// Offset-aware timestamps are shown in the browser's local time zone;
/// naive ones are taken as-is. Empty input gives an empty string and
/// anything unparseable is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    parse_date(raw)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Turns AI-generated text into a small, safe HTML subset.
///
/// The input is escaped first, so the only tags in the output are the
/// ones produced here: `<h2>`-`<h4>` for `#`-`###` headings, `<ul><li>` for
/// `- `/`* ` lines, `<strong>`, `<em>`, `<code>`, and `<br>` between lines.
pub fn format_markdown(text: &str) -> String {
    let mut html = String::with_capacity(text.len() + text.len() / 4);
    let mut in_list = false;
    let mut needs_break = false;

    for line in text.lines() {
        let escaped = escape_html(line);

        if let Some(item) = list_item(&escaped) {
            if !in_list {
                html.push_str("<ul>");
                in_list = true;
            }
            html.push_str("<li>");
            html.push_str(&format_inline(item));
            html.push_str("</li>");
            needs_break = false;
            continue;
        }
        if in_list {
            html.push_str("</ul>");
            in_list = false;
        }

        if let Some((level, title)) = heading(&escaped) {
            let tag = level + 1;
            html.push_str(&format!("<h{}>{}</h{}>", tag, format_inline(title), tag));
            needs_break = false;
            continue;
        }

        if needs_break {
            html.push_str("<br>");
        }
        html.push_str(&format_inline(&escaped));
        needs_break = true;
    }

    if in_list {
        html.push_str("</ul>");
    }
    html
}

fn format_inline(text: &str) -> String {
    let text = CODE.replace_all(text, "<code>$1</code>");
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    ITALIC.replace_all(&text, "<em>$1</em>").into_owned()
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if !(1..=3).contains(&level) {
        return None;
    }
    line[level..].strip_prefix(' ').map(|title| (level, title.trim()))
}

fn list_item(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
