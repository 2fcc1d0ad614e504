//! Locate a JSON object embedded in free-form model output.
//!
//! Chat models often wrap their JSON in prose or markdown fences. These helpers scan for
//! balanced `{...}` spans without any network or provider knowledge.

use serde_json::{Map, Value};

/// Return the first balanced `{...}` span in `text` that parses as a JSON object.
///
/// Braces inside JSON string literals are ignored while balancing. Candidates that do not
/// parse are skipped and scanning resumes at the next `{`.
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(end) = balanced_end(&text[start..]) {
            let candidate = &text[start..start + end];
            if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(candidate) {
                return Some(map);
            }
        }
        search_from = start + 1;
    }
    None
}

/// Byte length of the balanced object starting at `s[0] == '{'`, or None if unbalanced.
fn balanced_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_clean_json() {
        let obj = extract_json_object(r#"{"sentiment": "positive", "confidence": 0.9}"#).unwrap();
        assert_eq!(obj["sentiment"], "positive");
    }

    #[test]
    fn test_extract_json_wrapped_in_prose() {
        let obj = extract_json_object(
            r#"Sure! Here is the analysis: {"sentiment":"NEGATIVE","confidence":0.8} Hope it helps."#,
        )
        .unwrap();
        assert_eq!(obj["sentiment"], "NEGATIVE");
        assert_eq!(obj["confidence"], 0.8);
    }

    #[test]
    fn test_extract_json_in_markdown_fence() {
        let input = "```json\n{\"sentiment\": \"positive\", \"confidence\": 0.7}\n```";
        let obj = extract_json_object(input).unwrap();
        assert_eq!(obj["confidence"], 0.7);
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let obj = extract_json_object(r#"{"note": "a } b {", "sentiment": "positive"}"#).unwrap();
        assert_eq!(obj["note"], "a } b {");
    }

    #[test]
    fn test_skips_unparseable_span() {
        let obj =
            extract_json_object(r#"{not json} then {"sentiment":"positive","confidence":1}"#)
                .unwrap();
        assert_eq!(obj["sentiment"], "positive");
    }

    #[test]
    fn test_no_json() {
        assert!(extract_json_object("I think it is positive.").is_none());
        assert!(extract_json_object("").is_none());
        assert!(extract_json_object("{\"sentiment\": \"positive\"").is_none());
        assert!(extract_json_object("} {").is_none());
    }
}
