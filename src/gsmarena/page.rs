//! Helpers shared by the page parsers.

use scraper::{ElementRef, Node};
use tracing::warn;

/// Renders an element's text the way a browser reports visible text.
///
/// Text nodes are concatenated with whitespace runs collapsed to one space,
/// `<br>` becomes a newline and every line is trimmed. Descendant `<script>`
/// and `<style>` content is skipped.
pub fn element_text(element: ElementRef) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => {
                let skipped = node
                    .parent()
                    .and_then(|p| p.value().as_element())
                    .is_some_and(|e| matches!(e.name(), "script" | "style"));
                if skipped {
                    continue;
                }
                for c in text.chars() {
                    if !c.is_whitespace() {
                        out.push(c);
                    } else if !out.ends_with(|last: char| last == ' ' || last == '\n') {
                        out.push(' ');
                    }
                }
            }
            Node::Element(e) if e.name() == "br" => out.push('\n'),
            _ => {}
        }
    }

    out.lines().map(str::trim).collect::<Vec<_>>().join("\n").trim().to_string()
}

/// Resolves an `href` found on a page against the site base URL.
pub fn absolute_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), href.trim_start_matches('/'))
    }
}

/// Keeps only the ASCII digits of `text` and parses them.
///
/// Returns `None` when there are no digits, or when the number does not fit
/// a `u64` (logged, since the caller then drops the value).
pub fn digits(text: &str) -> Option<u64> {
    let cleaned: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if cleaned.is_empty() {
        return None;
    }
    match cleaned.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!("Number {} in {:?} is out of range", cleaned, text);
            None
        }
    }
}
