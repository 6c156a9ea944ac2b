//! Codepoint helpers for command line glyph lists
//!
//! Glyph lists are given as plain strings where every character names one
//! glyph, in order.

/// Characters of a glyph list, in the order given
pub fn glyph_chars(glyph_str: &str) -> Vec<char> {
    glyph_str.chars().collect()
}

/// Human readable form such as `U+0041 'A'`, with control characters hidden
pub fn describe_codepoint(c: char) -> String {
    if c.is_control() {
        format!("U+{:04X} <control>", c as u32)
    } else {
        format!("U+{:04X} '{}'", c as u32, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_chars_keep_order_and_duplicates() {
        assert_eq!(glyph_chars("bab"), vec!['b', 'a', 'b']);
        assert_eq!(glyph_chars("äö€"), vec!['ä', 'ö', '€']);
        assert!(glyph_chars("").is_empty());
    }

    #[test]
    fn test_describe_codepoint() {
        assert_eq!(describe_codepoint('A'), "U+0041 'A'");
        assert_eq!(describe_codepoint('\n'), "U+000A <control>");
        assert_eq!(describe_codepoint('😀'), "U+1F600 '😀'");
    }
}
