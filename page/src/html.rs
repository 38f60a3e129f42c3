/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<classname> & "pointer" it's"#),
            "&lt;classname&gt; &amp; &quot;pointer&quot; it&#x27;s"
        );
        assert_eq!(escape_html("class Bar {};"), "class Bar {};");
    }
}
