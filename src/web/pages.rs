#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! HTML for the input form and the results page.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{constants::FORM_FIELD, readability::Assessment, validation::FormError};

/// Wraps `body` in the shared page layout.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <h1>Flesch-Kincaid Grade Level</h1>
{body}
</body>
</html>
"#,
        title = encode_text(title),
    )
}

/// Renders the input form, pre-filled with `value` and listing `errors`
/// beneath the text area.
pub fn form(value: &str, errors: &[FormError]) -> String {
    let errors = if errors.is_empty() {
        String::new()
    } else {
        let items: String = errors
            .iter()
            .map(|e| format!("    <li>{}</li>\n", encode_text(&e.to_string())))
            .collect();
        format!("  <ul class=\"errors\">\n{items}  </ul>\n")
    };

    let body = format!(
        r#"  <form method="post" action="/results">
    <p>Paste at least 100 words of text below.</p>
    <textarea name="{field}" id="{field}" rows="20" cols="80">{value}</textarea>
{errors}    <p><input type="submit" value="Get grade level"></p>
  </form>"#,
        field = encode_double_quoted_attribute(FORM_FIELD),
        value = encode_text(value),
    );

    layout("Text readability", &body)
}

/// Renders the submitted `content` together with its assessment.
pub fn results(content: &str, assessment: &Assessment) -> String {
    let body = format!(
        r#"  <h2>Your text</h2>
  <pre class="content">{content}</pre>
  <h2>Result</h2>
  <p class="result">{result}</p>
  <p><a href="/">Grade another text</a></p>"#,
        content = encode_text(content),
        result = encode_text(&assessment.to_string()),
    );

    layout("Readability results", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOO_SHORT_MESSAGE;

    #[test]
    fn form_escapes_prefilled_value() {
        let html = form("</textarea><script>", &[]);
        assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("class=\"errors\""));
    }

    #[test]
    fn form_lists_errors() {
        let html = form("", &[FormError::Required]);
        assert!(html.contains("<li>This field is required.</li>"));
        assert!(html.contains("name=\"textreadability\""));
    }

    #[test]
    fn results_show_content_and_message() {
        let html = results("a < b", &Assessment::TooShort { words: 3 });
        assert!(html.contains("a &lt; b"));
        assert!(html.contains(TOO_SHORT_MESSAGE));
    }
}
