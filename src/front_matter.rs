use std::collections::HashMap;

/// Example of a post header
/// ---
/// title: 'What I learned after 20+ years of software development'
/// pubDate: 2022-04-02
/// description: "Lessons collected the hard way"
/// ---
///
/// Extracts the leading frontmatter block as key-value pairs. Posts without
/// a block yield an empty map - absence of structure is not an error.
pub fn parse_front_matter(content: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    let Some(block) = find_header_block(content) else {
        return fields;
    };

    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = strip_quotes(value.trim());
        fields.insert(key.trim().to_string(), value.to_string());
    }

    fields
}

// First pass: the block opens with a `---` line at the very start of the
// file and runs until the next line beginning with `---`.
fn find_header_block(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    let line_end = rest.find('\n')?;
    if !rest[..line_end].trim().is_empty() {
        return None;
    }

    let body = &rest[line_end + 1..];
    let block_end = body.find("\n---")?;
    Some(&body[..block_end])
}

fn strip_quotes(value: &str) -> &str {
    let quoted = (value.starts_with('"') && value.ends_with('"'))
        || (value.starts_with('\'') && value.ends_with('\''));
    if quoted && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_matter() {
        let content = "---\ntitle: 'Hello World'\npubDate: 2026-01-08\ndescription: \"A greeting\"\n---\n\n# Hello\n";
        let fields = parse_front_matter(content);
        assert_eq!(fields.get("title").map(String::as_str), Some("Hello World"));
        assert_eq!(fields.get("pubDate").map(String::as_str), Some("2026-01-08"));
        assert_eq!(fields.get("description").map(String::as_str), Some("A greeting"));
    }

    #[test]
    fn test_no_header_block() {
        assert!(parse_front_matter("# Just a title\n\nBody text\n").is_empty());
        assert!(parse_front_matter("").is_empty());
        // An opening delimiter with no closing one is not a block
        assert!(parse_front_matter("---\ntitle: Lost\n").is_empty());
        // The delimiter has to be a line of its own
        assert!(parse_front_matter("--- title: Inline\n---\n").is_empty());
    }

    #[test]
    fn test_block_needs_a_line_between_delimiters() {
        assert!(parse_front_matter("---\n---\ntitle: After\n").is_empty());
    }

    #[test]
    fn test_lines_without_colon_are_ignored()  {
        let content = "---\ntitle: Hello\njust some words\npubDate: 2026-01-08\n---\n";
        let fields = parse_front_matter(content);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("title").map(String::as_str), Some("Hello"));
    }

    #[test]
    fn test_value_keeps_extra_colons() {
        let content = "---\ntitle: Rust: the good parts\n---\n";
        let fields = parse_front_matter(content);
        assert_eq!(
            fields.get("title").map(String::as_str),
            Some("Rust: the good parts")
        );
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("'quoted'"), "quoted");
        assert_eq!(strip_quotes("\"quoted\""), "quoted");
        // Only one layer comes off
        assert_eq!(strip_quotes("''double''"), "'double'");
        // Mismatched or lone quotes stay
        assert_eq!(strip_quotes("'mixed\""), "'mixed\"");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("plain"), "plain");
    }

    #[test]
    fn test_trailing_whitespace_and_crlf() {
        let content = "---  \r\ntitle: Windows Post\r\npubDate: 2024-05-01\r\n---\r\nbody";
        let fields = parse_front_matter(content);
        assert_eq!(fields.get("title").map(String::as_str), Some("Windows Post"));
        assert_eq!(fields.get("pubDate").map(String::as_str), Some("2024-05-01"));
    }
}
