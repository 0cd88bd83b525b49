//! Emphasis markup used in bot messages: `**text**` renders `text` emphasised.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("emphasis pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Plain(String),
    Emphasis(String),
}

/// Split a message into plain and emphasised runs, in order.
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for caps in EMPHASIS.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            out.push(Segment::Plain(text[cursor..whole.start()].to_string()));
        }
        out.push(Segment::Emphasis(inner.as_str().to_string()));
        cursor = whole.end();
    }
    if cursor < text.len() {
        out.push(Segment::Plain(text[cursor..].to_string()));
    }
    out
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

/// HTML for web front-ends. Everything outside `<strong>` is escaped.
pub fn to_html(text: &str) -> String {
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(s) => escape_html(&s),
            Segment::Emphasis(s) => format!("<strong>{}</strong>", escape_html(&s)),
        })
        .collect()
}

/// ANSI bold for terminals.
pub fn to_ansi(text: &str) -> String {
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(s) => s,
            Segment::Emphasis(s) => format!("\x1b[1m{s}\x1b[0m"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_emphasis_runs() {
        let parts = segments("Hi, I'm **Juri** from **Marques & Cunha**!");
        assert_eq!(
            parts,
            vec![
                Segment::Plain("Hi, I'm ".to_string()),
                Segment::Emphasis("Juri".to_string()),
                Segment::Plain(" from ".to_string()),
                Segment::Emphasis("Marques & Cunha".to_string()),
                Segment::Plain("!".to_string()),
            ]
        );
    }

    #[test]
    fn test_unbalanced_markers_stay_plain() {
        assert_eq!(
            segments("only **one marker"),
            vec![Segment::Plain("only **one marker".to_string())]
        );
    }

    #[test]
    fn test_html_rendering_escapes_user_text() {
        assert_eq!(
            to_html("**free** & <b>safe</b>"),
            "<strong>free</strong> &amp; &lt;b&gt;safe&lt;/b&gt;"
        );
    }

    #[test]
    fn test_ansi_rendering() {
        assert_eq!(to_ansi("a **b** c"), "a \x1b[1mb\x1b[0m c");
        assert_eq!(to_ansi("plain"), "plain");
    }
}
