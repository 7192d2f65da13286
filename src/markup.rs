//! Markup Helpers
//!
//! Item text is inserted into the list as HTML, so tag syntax is escaped first.

/// Replace `<` and `>` with their HTML entities
pub fn escape_html_tag_syntax(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag_is_neutralized() {
        assert_eq!(escape_html_tag_syntax("<script>"), "&lt;script&gt;");
        assert_eq!(
            escape_html_tag_syntax("<img src=x onerror=alert(1)>"),
            "&lt;img src=x onerror=alert(1)&gt;"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html_tag_syntax("buy milk & bread"), "buy milk & bread");
        assert_eq!(escape_html_tag_syntax(""), "");
    }
}
