//! Plain Text to Markup
//!
//! Legacy policy/terms documents were stored as plain text. When the loaded
//! content carries no tags, the editor runs it through this heuristic so the
//! old documents still display with structure: blank-line separated blocks
//! become headings, bullet lists, or paragraphs.

/// True when the content contains no markup tags at all
pub fn is_plain_text(content: &str) -> bool {
    let bytes = content.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'<' {
            if let Some(next) = bytes.get(i + 1) {
                if next.is_ascii_alphabetic() || *next == b'/' {
                    return false;
                }
            }
        }
    }
    true
}

/// Convert plain text into display markup.
///
/// Blocks are separated by blank lines. A block with any line starting with
/// `-` or `•` becomes a bullet list (one item per such line, marker
/// stripped). A block shorter than 80 characters that does not end with a
/// period becomes a heading. Everything else is a paragraph.
pub fn plain_text_to_html(text: &str) -> String {
    text.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(format_block)
        .collect()
}

fn format_block(block: &str) -> String {
    let lines: Vec<&str> = block.lines().collect();

    if lines
        .iter()
        .any(|line| line.trim_start().starts_with('-') || line.trim_start().starts_with('•'))
    {
        let items: String = lines
            .iter()
            .filter_map(|line| {
                let clean = line
                    .trim_start()
                    .trim_start_matches(['-', '•'])
                    .trim();
                (!clean.is_empty()).then(|| format!("<li>{}</li>", escape(clean)))
            })
            .collect();
        return format!("<ul>{items}</ul>");
    }

    let trimmed = block.trim();
    if block.len() < 80 && !trimmed.ends_with('.') {
        format!("<h2>{}</h2>", escape(trimmed))
    } else {
        format!("<p>{}</p>", escape(trimmed))
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_markup() {
        assert!(is_plain_text("Just words, 2 < 3 even."));
        assert!(!is_plain_text("<h2>Introduction</h2>"));
        assert!(!is_plain_text("text with </p> closer"));
    }

    #[test]
    fn short_block_without_period_is_heading() {
        let html = plain_text_to_html("Title\n\nThis is a sentence.");
        assert_eq!(html, "<h2>Title</h2><p>This is a sentence.</p>");
    }

    #[test]
    fn bullet_lines_become_list_items() {
        let html = plain_text_to_html("- first point\n- second point");
        assert_eq!(html, "<ul><li>first point</li><li>second point</li></ul>");
    }

    #[test]
    fn long_block_is_paragraph_even_without_period() {
        let long = "a ".repeat(50);
        let html = plain_text_to_html(&long);
        assert!(html.starts_with("<p>"));
    }

    #[test]
    fn text_is_escaped() {
        let html = plain_text_to_html("Care & Use");
        assert_eq!(html, "<h2>Care &amp; Use</h2>");
    }
}
