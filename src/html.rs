//! Human-readable text extraction from fetched web pages.
//!
//! Renders the `<body>` of a page to plain text, dropping script, style,
//! and other non-content markup, then collapses excess whitespace while
//! keeping paragraph breaks as blank lines for the chunker.

use scraper::{Html, Selector};

/// Extracts the visible text of an HTML page.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let body = Selector::parse("body")
        .ok()
        .and_then(|s| document.select(&s).next().map(|e| e.html()))
        .unwrap_or_else(|| html.to_string());

    let text = html2text::from_read(body.as_bytes(), 80).unwrap_or_else(|_| body.clone());
    normalize_whitespace(&text)
}

/// The page `<title>`, if present and non-empty.
pub fn page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    let title = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>();
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Collapses runs of whitespace: spaces/tabs become one space, a single
/// newline is kept, and two or more newlines become exactly one blank line.
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last_was_whitespace = true;
    let mut newline_count = 0;

    for c in text.chars() {
        if c.is_whitespace() {
            if c == '\n' {
                newline_count += 1;
            }
            last_was_whitespace = true;
        } else {
            if last_was_whitespace && !result.is_empty() {
                if newline_count >= 2 {
                    result.push_str("\n\n");
                } else if newline_count == 1 {
                    result.push('\n');
                } else {
                    result.push(' ');
                }
            }
            newline_count = 0;
            result.push(c);
            last_was_whitespace = false;
        }
    }

    result.trim().to_string()
}
