//! Visible-text extraction from a fetched job posting.

use scraper::{Html, Node};

/// Elements whose text never renders.
const NOISE_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Returns the visible text of an HTML document with whitespace collapsed.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut words: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| NOISE_TAGS.contains(&el.name()))
        });
        if !hidden {
            words.extend(text.split_whitespace());
        }
    }

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB_PAGE: &str = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Backend Engineer - Acme</title>
            <style>.hero { color: red; }</style>
            <script>window.analytics = { track: function() {} };</script>
        </head>
        <body>
            <nav>Jobs   Careers</nav>
            <main>
                <h1>Backend Engineer</h1>
                <p>Build   services in
                   Rust and Go.</p>
                <noscript>Enable JavaScript to apply</noscript>
            </main>
        </body>
        </html>
    "#;

    #[test]
    fn test_visible_text_drops_script_and_style() {
        let text = visible_text(JOB_PAGE);
        assert!(!text.contains("analytics"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains("Enable JavaScript"));
    }

    #[test]
    fn test_visible_text_keeps_title_and_body_in_document_order() {
        let text = visible_text(JOB_PAGE);
        assert_eq!(
            text,
            "Backend Engineer - Acme Jobs Careers Backend Engineer Build services in Rust and Go."
        );
    }

    #[test]
    fn test_visible_text_of_plain_text_body() {
        assert_eq!(visible_text("just   some\ntext"), "just some text");
    }

    #[test]
    fn test_visible_text_empty_document() {
        assert_eq!(visible_text(""), "");
    }
}
