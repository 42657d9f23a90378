//! Candidate extraction for utility classes
//!
//! Any text file can reference utility classes: HTML attributes, template
//! tags, string literals in scripts. The extractor does not understand any of
//! those languages; it splits each line on characters that can never be part
//! of a class name and keeps the pieces that look like one.
//!
//! Examples of kept candidates:
//! - bg-help-blue
//! - hover:text-help-red/80
//! - md:-mt-4
//! - bg-[#3B82F6]
//! - !font-bold
//! - [&:hover]:bg-help-blue (arbitrary variant)
//! - @md:text-help-red (container variant)

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::ClassToken;

/// Longest candidate worth keeping
const MAX_CANDIDATE_LEN: usize = 128;

static CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^!?-?[A-Za-z@\[][\w\-:/.\[\]#%!@&*+~,()']*$")
        .expect("candidate pattern is a valid regex")
});

/// Splits text into utility-class candidates
#[derive(Debug, Clone, Default)]
pub struct CandidateExtractor;

impl CandidateExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all candidates from a file, one token per occurrence
    pub fn parse_file(&self, path: &Path, content: &str) -> Vec<ClassToken> {
        let mut tokens = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line_number = idx + 1; // 1-indexed
            for value in self.extract_line(line) {
                tokens.push(ClassToken::new(path.to_path_buf(), line_number, value));
            }
        }

        tokens
    }

    /// Extract candidates from a single line
    pub fn extract_line<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut candidates = Vec::new();
        let mut start: Option<usize> = None;
        let mut depth = 0usize;

        for (idx, ch) in line.char_indices() {
            // Inside an arbitrary value only hard breaks end the token
            let split = if depth > 0 {
                ch.is_whitespace() || ch == '"' || ch == '`'
            } else {
                is_delimiter(ch)
            };

            if split {
                if let Some(s) = start.take() {
                    push_candidate(&line[s..idx], &mut candidates);
                }
                depth = 0;
                continue;
            }

            if start.is_none() {
                start = Some(idx);
            }

            match ch {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }

        if let Some(s) = start {
            push_candidate(&line[s..], &mut candidates);
        }

        candidates
    }
}

fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            '"' | '\'' | '`' | '<' | '>' | '=' | '{' | '}' | '(' | ')' | ';' | ','
        )
}

fn push_candidate<'a>(raw: &'a str, out: &mut Vec<&'a str>) {
    if raw.len() > MAX_CANDIDATE_LEN || raw.ends_with(':') {
        return;
    }
    if !raw.bytes().any(|b| b.is_ascii_alphabetic()) {
        return;
    }
    if CANDIDATE.is_match(raw) {
        out.push(raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_class_attribute() {
        let extractor = CandidateExtractor::new();
        let found = extractor
            .extract_line(r#"<div class="bg-help-blue text-white hover:bg-help-blue/80 p-4">"#);

        assert_eq!(
            found,
            vec!["div", "class", "bg-help-blue", "text-white", "hover:bg-help-blue/80", "p-4"]
        );
    }

    #[test]
    fn test_template_tags() {
        let extractor = CandidateExtractor::new();
        let found =
            extractor.extract_line("{% if ticket.priority == 'high' %}text-help-red{% endif %}");

        assert!(found.contains(&"ticket.priority"));
        assert!(found.contains(&"high"));
        assert!(found.contains(&"text-help-red"));
        assert!(!found.iter().any(|t| t.contains('%')));
    }

    #[test]
    fn test_script_string_literals() {
        let extractor = CandidateExtractor::new();
        let found = extractor.extract_line("badge.classList.add('bg-help-green', `ring-2`);");

        assert!(found.contains(&"bg-help-green"));
        assert!(found.contains(&"ring-2"));
    }

    #[test]
    fn test_arbitrary_values_stay_whole() {
        let extractor = CandidateExtractor::new();
        let found = extractor.extract_line(r#"class="bg-[#3B82F6] grid-cols-[1fr,2fr] m-2""#);

        assert!(found.contains(&"bg-[#3B82F6]"));
        assert!(found.contains(&"grid-cols-[1fr,2fr]"));
        assert!(found.contains(&"m-2"));
    }

    #[test]
    fn test_important_and_negative() {
        let extractor = CandidateExtractor::new();
        let found = extractor.extract_line("!font-bold -mt-4 md:-mt-8");
        assert_eq!(found, vec!["!font-bold", "-mt-4", "md:-mt-8"]);
    }

    #[test]
    fn test_arbitrary_and_container_variants() {
        let extractor = CandidateExtractor::new();
        let found =
            extractor.extract_line(r#"<li class="[&:hover]:bg-help-blue @md:text-help-red">"#);
        assert!(found.contains(&"[&:hover]:bg-help-blue"));
        assert!(found.contains(&"@md:text-help-red"));

        let mut table = crate::theme::TokenTable::default_palette();
        table.insert("help-blue", "#3B82F6".parse().unwrap());
        table.insert("help-red", "#EF4444".parse().unwrap());
        for token in ["[&:hover]:bg-help-blue", "@md:text-help-red"] {
            assert!(
                crate::extract::ColorUtility::parse(token, &table).is_some(),
                "{token}"
            );
        }
    }

    #[test]
    fn test_rejects_non_candidates() {
        let extractor = CandidateExtractor::new();
        assert!(extractor.extract_line("123 4.5 -- %} hover: #fff").is_empty());
        assert!(extractor.extract_line("").is_empty());
        assert!(extractor.extract_line(&"a".repeat(MAX_CANDIDATE_LEN + 1)).is_empty());
    }

    #[test]
    fn test_parse_file_line_numbers() {
        let extractor = CandidateExtractor::new();
        let content = "<p>\n  <span class=\"text-help-gray\"></span>\n</p>\n";
        let tokens = extractor.parse_file(Path::new("base.html"), content);

        let gray = tokens.iter().find(|t| t.value == "text-help-gray").unwrap();
        assert_eq!(gray.line_number, 2);
        assert_eq!(gray.file_path, Path::new("base.html"));
    }
}
