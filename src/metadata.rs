use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

/// A single front matter value. `[a, b]` style values become lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Text(String),
    List(Vec<String>),
}

impl MetaValue {
    /// Flattens the value into one string. Lists are joined with `, `.
    pub fn to_text(&self) -> String {
        match self {
            MetaValue::Text(s) => s.clone(),
            MetaValue::List(items) => items.join(", "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            MetaValue::Text(s) => s.is_empty(),
            MetaValue::List(items) => items.is_empty(),
        }
    }
}

pub type Metadata = BTreeMap<String, MetaValue>;

fn header_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // opening line at the very start, closing line is the first `---` line after it
    PATTERN.get_or_init(|| {
        RegexBuilder::new(r"\A---[ \t]*\r?\n(.*?)^---[ \t]*\r?$")
            .dot_matches_new_line(true)
            .multi_line(true)
            .build()
            .expect("front matter pattern is valid")
    })
}

/// Splits a document into its front matter and the remaining body.
///
/// Text without a well-formed `---` block is returned whole as the body
/// with empty metadata. Nothing in here fails.
pub fn parse_document(content: &str) -> (Metadata, String) {
    let Some(caps) = header_pattern().captures(content) else {
        return (Metadata::new(), content.to_string());
    };

    let metadata = parse_header(caps.get(1).map_or("", |m| m.as_str()));
    let end = caps.get(0).map_or(0, |m| m.end());
    let body = content[end..].trim().to_string();

    (metadata, body)
}

fn parse_header(header: &str) -> Metadata {
    let mut metadata = Metadata::new();
    for line in header.lines() {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        metadata.insert(name.trim().to_string(), parse_value(value.trim()));
    }
    metadata
}

fn parse_value(value: &str) -> MetaValue {
    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        if inner.trim().is_empty() {
            return MetaValue::List(vec![]);
        }
        return MetaValue::List(
            inner
                .split(',')
                .map(|item| item.trim().replace('"', ""))
                .collect(),
        );
    }
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return MetaValue::Text(value[1..value.len() - 1].to_string());
    }
    MetaValue::Text(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MetaValue {
        MetaValue::Text(s.to_string())
    }

    fn list(items: &[&str]) -> MetaValue {
        MetaValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn splits_header_and_body() {
        let (meta, body) = parse_document(
            "---\ntitle: \"Setup\"\ncategory: [howto]\n---\n\nHello world, this is a test.\n",
        );
        assert_eq!(meta.get("title"), Some(&text("Setup")));
        assert_eq!(meta.get("category"), Some(&list(&["howto"])));
        assert_eq!(body, "Hello world, this is a test.");
    }

    #[test]
    fn no_header_keeps_whole_text() {
        let content = "  one two three\n";
        let (meta, body) = parse_document(content);
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn unterminated_header_is_not_a_header() {
        let content = "---\ntitle: Lost\n\nno closing line here";
        let (meta, body) = parse_document(content);
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn header_must_start_the_text() {
        let content = "intro\n---\ntitle: Late\n---\nbody";
        let (meta, body) = parse_document(content);
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn boundary_must_be_exactly_three_hyphens() {
        let content = "----\ntitle: Nope\n----\nbody";
        let (meta, _) = parse_document(content);
        assert!(meta.is_empty());

        // a longer rule inside the header does not close it
        let (meta, body) = parse_document("---\ntitle: A\n----\nsummary: B\n---\nbody");
        assert_eq!(meta.get("summary"), Some(&text("B")));
        assert_eq!(body, "body");
    }

    #[test]
    fn closes_on_first_boundary_line() {
        let (meta, body) = parse_document("---\ntitle: T\n---\nfirst\n---\nsecond");
        assert_eq!(meta.len(), 1);
        assert_eq!(body, "first\n---\nsecond");
    }

    #[test]
    fn crlf_documents_are_understood() {
        let (meta, body) = parse_document("---\r\ntitle: Windows\r\n---\r\nbody text\r\n");
        assert_eq!(meta.get("title"), Some(&text("Windows")));
        assert_eq!(body, "body text");
    }

    #[test]
    fn empty_header_yields_empty_metadata() {
        let (meta, body) = parse_document("---\n---\nbody");
        assert!(meta.is_empty());
        assert_eq!(body, "body");
    }

    #[test]
    fn header_at_end_of_text() {
        let (meta, body) = parse_document("---\ntitle: Only\n---");
        assert_eq!(meta.get("title"), Some(&text("Only")));
        assert_eq!(body, "");
    }

    #[test]
    fn value_normalization() {
        let (meta, _) = parse_document(concat!(
            "---\n",
            "tags: [a, b, c]\n",
            "quoted_list: [\"x\", \"y z\"]\n",
            "greeting: \"hello\"\n",
            "plain:   verbatim value  \n",
            "empty_list: []\n",
            "lone_quote: \"\n",
            "---\n",
        ));
        assert_eq!(meta.get("tags"), Some(&list(&["a", "b", "c"])));
        assert_eq!(meta.get("quoted_list"), Some(&list(&["x", "y z"])));
        assert_eq!(meta.get("greeting"), Some(&text("hello")));
        assert_eq!(meta.get("plain"), Some(&text("verbatim value")));
        assert_eq!(meta.get("empty_list"), Some(&list(&[])));
        assert_eq!(meta.get("lone_quote"), Some(&text("\"")));
    }

    #[test]
    fn splits_on_first_colon_only() {
        let (meta, _) = parse_document("---\ndate: 2025-09-06 12:45\nurl: http://x\n---\n");
        assert_eq!(meta.get("date"), Some(&text("2025-09-06 12:45")));
        assert_eq!(meta.get("url"), Some(&text("http://x")));
    }

    #[test]
    fn lines_without_colon_are_ignored_and_last_key_wins() {
        let (meta, _) = parse_document("---\njust prose\ntitle: one\ntitle: two\n---\n");
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("title"), Some(&text("two")));
    }

    #[test]
    fn reparsing_a_plain_body_finds_no_header() {
        let docs = [
            "---\ntitle: A\n---\nbody",
            "---\ntitle: A\ntags: [x, y]\n---\n\nsome text\n---\nafter a rule\n",
            "---\n---\n",
        ];
        for doc in docs {
            let (_, body) = parse_document(doc);
            let (again, body_again) = parse_document(&body);
            assert!(again.is_empty());
            assert_eq!(body_again, body);
        }
    }

    #[test]
    fn body_opening_with_a_block_is_parsed_again() {
        // only the first block belongs to the document; a second one stays in the body
        let (meta, body) = parse_document("---\nt: a\n---\n---\nx: b\n---\ny");
        assert_eq!(meta.get("t"), Some(&text("a")));
        assert_eq!(body, "---\nx: b\n---\ny");

        let (again, rest) = parse_document(&body);
        assert_eq!(again.get("x"), Some(&text("b")));
        assert_eq!(rest, "y");
    }

    #[test]
    fn to_text_joins_lists() {
        assert_eq!(list(&["a", "b"]).to_text(), "a, b");
        assert_eq!(text("plain").to_text(), "plain");
        assert!(list(&[]).is_empty());
        assert!(text("").is_empty());
    }
}
