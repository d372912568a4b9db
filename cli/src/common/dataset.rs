//! # Knowledge Base Loading
//!
//! File: cli/src/common/dataset.rs
//!
//! ## Overview
//!
//! Reads the knowledge base document from disk and hands the parsed,
//! immutable [`KnowledgeBase`] to the engine. This is the only place the
//! dataset touches the filesystem.
//!
//! Any failure (missing file, unreadable file, invalid JSON, wrong shape) is
//! reported as `VelosError::KnowledgeBaseUnavailable`: without a knowledge base
//! the responder cannot run at all.
//!
//! Loading also checks the data-integrity rule that every context has at
//! least one conversation pair. Violations are logged as warnings here and
//! reported as `VelosError::EmptyConversation` if such a context is ever
//! selected.
//!
use crate::common::fs::io;
use crate::core::error::{Result, VelosError};
use crate::engine::KnowledgeBase;
use std::path::Path;
use tracing::{info, warn};

/// Loads and parses the knowledge base at `path`.
pub fn load_knowledge_base(path: &Path) -> Result<KnowledgeBase> {
    let unavailable = |reason: String| VelosError::KnowledgeBaseUnavailable {
        path: path.display().to_string(),
        reason,
    };

    let content = io::read_file_to_string(path).map_err(|e| unavailable(format!("{:#}", e)))?;
    let knowledge = KnowledgeBase::from_json_str(&content)
        .map_err(|e| unavailable(format!("invalid knowledge base document: {}", e)))?;

    info!(
        "Loaded {} contexts from {}",
        knowledge.len(),
        path.display()
    );
    if knowledge.is_empty() {
        warn!("Knowledge base {} contains no contexts.", path.display());
    }
    for entry in knowledge.entries() {
        if entry.conversation.is_empty() {
            warn!(
                "Context '{}' has no conversation pairs and cannot answer if selected.",
                entry.query
            );
        }
    }
    Ok(knowledge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn unavailable_reason(result: Result<KnowledgeBase>) -> String {
        match result.unwrap_err().downcast::<VelosError>() {
            Ok(VelosError::KnowledgeBaseUnavailable { reason, .. }) => reason,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_valid_document() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("context.json");
        fs::write(
            &path,
            r#"[{"Query": "Greetings", "Conversation": [{"Question": "hi", "Answer": "hello there"}]}]"#,
        )?;

        let kb = load_knowledge_base(&path)?;
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.entries()[0].conversation[0].answer, "hello there");
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let reason = unavailable_reason(load_knowledge_base(&dir.path().join("missing.json")));
        assert!(reason.contains("Failed to read file"), "{}", reason);
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("context.json");
        fs::write(&path, "{ not json").unwrap();
        let reason = unavailable_reason(load_knowledge_base(&path));
        assert!(reason.starts_with("invalid knowledge base document"), "{}", reason);
    }

    #[test]
    fn test_load_wrong_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("context.json");
        fs::write(&path, r#"{"Query": "not an array"}"#).unwrap();
        let reason = unavailable_reason(load_knowledge_base(&path));
        assert!(reason.starts_with("invalid knowledge base document"), "{}", reason);
    }

    #[test]
    fn test_load_empty_array_and_hollow_contexts() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("context.json");
        fs::write(&path, "[]")?;
        assert!(load_knowledge_base(&path)?.is_empty());

        fs::write(&path, r#"[{"Query": "Hollow", "Conversation": []}]"#)?;
        let kb = load_knowledge_base(&path)?;
        assert!(kb.entries()[0].conversation.is_empty());
        Ok(())
    }
}
