//! Conversation archive parsing and message extraction.
//!
//! An exported conversation archive is a JSON array of conversation objects.
//! Each conversation carries a `mapping`: an object keyed by opaque node ids,
//! where each node may hold a message:
//!
//! ```json
//! [
//!   {
//!     "mapping": {
//!       "node-a": {
//!         "message": {
//!           "content": {
//!             "parts": ["the actual message text"]
//!           }
//!         }
//!       }
//!     }
//!   }
//! ]
//! ```
//!
//! Two levels of strictness apply:
//!
//! - The **top level** must be an array of objects. Anything else is fatal
//!   ([`AnalysisError::InvalidFormat`]), as is undecodable JSON
//!   ([`AnalysisError::Parse`]).
//! - **Everything below** is best-effort. A conversation without a usable
//!   `mapping`, or a node where any link of the
//!   `message` → `content` → `parts` chain is missing or mistyped,
//!   contributes nothing and raises nothing. Real archives contain
//!   heterogeneous and partially corrupt nodes; skipping them beats failing
//!   the whole run.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{AnalysisError, Result};

/// Reads an archive file and returns its validated conversation list.
///
/// Errors are tagged with the file path where available.
///
/// # Example
///
/// ```rust,no_run
/// use chatstats::archive;
///
/// let conversations = archive::load_document("conversations.json".as_ref())?;
/// let messages = archive::extract_messages(&conversations);
/// # Ok::<(), chatstats::AnalysisError>(())
/// ```
pub fn load_document(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)
        .map_err(|e| AnalysisError::parse(e, Some(path.to_path_buf())))?;
    validate_shape(document)
}

/// Parses archive content already held in memory.
///
/// Same contract as [`load_document`], minus the file read.
pub fn parse_document(content: &str) -> Result<Vec<Value>> {
    let document: Value =
        serde_json::from_str(content).map_err(|e| AnalysisError::parse(e, None))?;
    validate_shape(document)
}

/// Checks the top-level shape: an array whose elements are all objects.
fn validate_shape(document: Value) -> Result<Vec<Value>> {
    let Value::Array(conversations) = document else {
        return Err(AnalysisError::invalid_format(
            "top-level value is not an array of conversations",
        ));
    };

    if let Some(index) = conversations.iter().position(|c| !c.is_object()) {
        return Err(AnalysisError::invalid_format(format!(
            "conversation at index {index} is not an object"
        )));
    }

    Ok(conversations)
}

/// Flattens all message text parts out of the conversation list.
///
/// Parts are collected in encounter order: conversations in array order, then
/// nodes in the mapping's iteration order (serde_json iterates object keys
/// lexicographically, so the result is deterministic for a given input even
/// though the archive format itself promises no node order).
///
/// Malformed conversations and nodes are skipped silently; see the module
/// docs for the contract.
pub fn extract_messages(conversations: &[Value]) -> Vec<String> {
    let mut messages = Vec::new();

    for conversation in conversations {
        let Some(mapping) = conversation.get("mapping").and_then(Value::as_object) else {
            continue;
        };

        for node in mapping.values() {
            if let Some(parts) = node_parts(node) {
                messages.extend(parts);
            }
        }
    }

    messages
}

/// Extracts the text parts of a single node, or `None` if any link of the
/// `message` → `content` → `parts` path is absent or mistyped.
///
/// All-or-nothing: a `parts` array containing any non-string element makes
/// the whole node contribute nothing.
fn node_parts(node: &Value) -> Option<Vec<String>> {
    let parts = node
        .get("message")?
        .get("content")?
        .get("parts")?
        .as_array()?;

    parts
        .iter()
        .map(|part| part.as_str().map(ToString::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(parts: Value) -> Value {
        json!({"message": {"content": {"parts": parts}}})
    }

    #[test]
    fn test_parse_document_valid() {
        let conversations = parse_document(r#"[{"mapping": {}}, {"title": "empty"}]"#).unwrap();
        assert_eq!(conversations.len(), 2);
    }

    #[test]
    fn test_parse_document_empty_list() {
        let conversations = parse_document("[]").unwrap();
        assert!(conversations.is_empty());
    }

    #[test]
    fn test_parse_document_invalid_json() {
        let err = parse_document("{not json").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_parse_document_top_level_object() {
        let err = parse_document(r#"{"mapping": {}}"#).unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("not an array"));
    }

    #[test]
    fn test_parse_document_non_object_element() {
        let err = parse_document(r#"[{"mapping": {}}, 42]"#).unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_load_document_missing_file() {
        let err = load_document(Path::new("/no/such/archive.json")).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_extract_simple() {
        let conversations =
            vec![json!({"mapping": {"a": node(json!(["the cat sat"]))}})];
        assert_eq!(extract_messages(&conversations), vec!["the cat sat"]);
    }

    #[test]
    fn test_extract_multiple_parts_preserve_order() {
        let conversations =
            vec![json!({"mapping": {"a": node(json!(["first", "second"]))}})];
        assert_eq!(extract_messages(&conversations), vec!["first", "second"]);
    }

    #[test]
    fn test_extract_nodes_in_key_order() {
        // serde_json object iteration is key-ordered, so "a" comes before "b".
        let conversations = vec![json!({"mapping": {
            "b": node(json!(["later"])),
            "a": node(json!(["earlier"])),
        }})];
        assert_eq!(extract_messages(&conversations), vec!["earlier", "later"]);
    }

    #[test]
    fn test_extract_skips_conversation_without_mapping() {
        let conversations = vec![
            json!({"title": "no mapping here"}),
            json!({"mapping": {"a": node(json!(["kept"]))}}),
        ];
        assert_eq!(extract_messages(&conversations), vec!["kept"]);
    }

    #[test]
    fn test_extract_skips_mistyped_mapping() {
        let conversations = vec![json!({"mapping": "not an object"})];
        assert!(extract_messages(&conversations).is_empty());
    }

    #[test]
    fn test_extract_skips_node_with_broken_path() {
        let conversations = vec![json!({"mapping": {
            "no-message": {"id": "x"},
            "no-content": {"message": {}},
            "no-parts": {"message": {"content": {}}},
            "parts-not-array": {"message": {"content": {"parts": "oops"}}},
            "ok": node(json!(["survivor"])),
        }})];
        assert_eq!(extract_messages(&conversations), vec!["survivor"]);
    }

    #[test]
    fn test_extract_non_string_part_drops_whole_node() {
        let conversations = vec![json!({"mapping": {
            "mixed": node(json!(["text", {"asset_pointer": "file://img"}])),
            "ok": node(json!(["plain"])),
        }})];
        assert_eq!(extract_messages(&conversations), vec!["plain"]);
    }

    #[test]
    fn test_extract_empty_parts() {
        let conversations = vec![json!({"mapping": {"a": node(json!([]))}})];
        assert!(extract_messages(&conversations).is_empty());
    }
}
