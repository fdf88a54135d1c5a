//! YAML stream parsing.
//!
//! A workflow file is a YAML *stream*: one or more `---`-separated
//! documents. The whole stream is parsed first; if that fails, a
//! per-document fallback recovers a diagnostic for each malformed
//! document so one bad document does not mask its siblings.

use std::path::Path;

use serde_json::Value;

use crate::error::{CheckError, CheckErrorKind};

fn split_documents(content: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current_doc: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim() == "---" {
            let doc = current_doc.join("\n");
            if !doc.trim().is_empty() {
                documents.push(doc);
            }
            current_doc.clear();
            continue;
        }
        current_doc.push(line);
    }

    let doc = current_doc.join("\n");
    if !doc.trim().is_empty() {
        documents.push(doc);
    }

    documents
}

/// Parse YAML content as a document stream.
///
/// Returns `(documents_parsed, errors)`. No schema is applied: any
/// well-formed document (scalars, sequences, mappings, anchors) is
/// accepted. An empty or whitespace-only file is a valid stream of zero
/// documents.
pub fn parse_documents(content: &str, path: &Path) -> (usize, Vec<CheckError>) {
    if content.trim().is_empty() {
        return (0, Vec::new());
    }

    match serde_saphyr::from_multiple::<Value>(content) {
        Ok(docs) => (docs.len(), Vec::new()),
        Err(stream_err) => {
            let segments = split_documents(content);
            let multi = segments.len() > 1;
            let mut parsed = 0usize;
            let mut errors = Vec::new();

            for (idx, segment) in segments.iter().enumerate() {
                match serde_saphyr::from_str::<Value>(segment) {
                    Ok(_) => parsed += 1,
                    Err(doc_err) => {
                        let message = if multi {
                            format!(
                                "YAML parse error in document {} of stream: {doc_err}",
                                idx + 1
                            )
                        } else {
                            format!("YAML parse error: {doc_err}")
                        };
                        errors.push(CheckError::new(path, CheckErrorKind::Syntax, message));
                    }
                }
            }

            if parsed == 0 {
                // No document parsed at all — a single file-level diagnostic
                // reads better than one error per segment of garbage.
                errors.clear();
                errors.push(CheckError::new(
                    path,
                    CheckErrorKind::Syntax,
                    format!("YAML parse error: {stream_err}"),
                ));
            } else if errors.is_empty() {
                // Every segment parsed in isolation but the stream did not.
                errors.push(CheckError::new(
                    path,
                    CheckErrorKind::Syntax,
                    format!("YAML parse error: {stream_err}"),
                ));
            }

            (parsed, errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_mapping_parses() {
        let (docs, errors) = parse_documents("key: value\n", Path::new("a.yml"));
        assert_eq!(docs, 1);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_empty_content_is_valid_empty_stream() {
        let (docs, errors) = parse_documents("", Path::new("a.yml"));
        assert_eq!(docs, 0);
        assert!(errors.is_empty());

        let (docs, errors) = parse_documents("   \n\n", Path::new("a.yml"));
        assert_eq!(docs, 0);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unclosed_flow_sequence_is_syntax_error() {
        let (_, errors) = parse_documents("key: [unclosed\n", Path::new("a.yml"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, CheckErrorKind::Syntax);
        assert!(
            errors[0].message.starts_with("YAML parse error:"),
            "got: {}",
            errors[0].message
        );
    }

    #[test]
    fn test_anchors_and_aliases_accepted() {
        let content = "defaults: &d\n  retries: 3\njob:\n  <<: *d\n  name: build\n";
        let (docs, errors) = parse_documents(content, Path::new("a.yml"));
        assert_eq!(docs, 1);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_multi_document_stream_all_counted() {
        let content = "name: one\n---\nname: two\n---\nname: three\n";
        let (docs, errors) = parse_documents(content, Path::new("multi.yml"));
        assert_eq!(docs, 3);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_malformed_document_does_not_mask_siblings() {
        let content = "name: one\n---\ninvalid: yaml: syntax:\n---\nname: three\n";
        let (docs, errors) = parse_documents(content, Path::new("multi.yml"));
        assert_eq!(docs, 2, "both well-formed documents must still parse");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, CheckErrorKind::Syntax);
        assert!(
            errors[0].message.contains("document 2"),
            "diagnostic must name the malformed document, got: {}",
            errors[0].message
        );
    }

    #[test]
    fn test_fully_malformed_content_yields_one_error() {
        let (docs, errors) = parse_documents(": : :\n  - [unclosed\n", Path::new("bad.yml"));
        assert_eq!(docs, 0);
        assert_eq!(errors.len(), 1);
        assert!(!errors[0].message.is_empty());
    }

    #[test]
    fn test_split_documents_drops_blank_segments() {
        let segments = split_documents("---\n---\na: 1\n---\n");
        assert_eq!(segments, vec!["a: 1".to_owned()]);
    }
}
