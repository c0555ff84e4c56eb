use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One project or post record as supplied by the host document store.
///
/// Every field is optional on the wire; accessors degrade to placeholder
/// text so a sparse record still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, rename = "repoUrl")]
    pub repo_url: Option<String>,

    #[serde(default, rename = "$createdAt")]
    pub created_at: Option<String>,
}

/// Longest content excerpt shown in a collapsed preview.
const PREVIEW_LEN: usize = 150;

impl Record {
    /// Display title, falling back to a placeholder.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Collapsed one-paragraph preview: description, then summary, then a
    /// truncated content excerpt, then a placeholder.
    pub fn preview(&self) -> String {
        if let Some(d) = self.description.as_deref() {
            return d.to_string();
        }
        if let Some(s) = self.summary.as_deref() {
            return s.to_string();
        }
        if let Some(c) = self.content.as_deref() {
            if c.chars().count() <= PREVIEW_LEN {
                return c.to_string();
            }
            let cut: String = c.chars().take(PREVIEW_LEN).collect();
            return format!("{cut}...");
        }
        "No description available.".to_string()
    }
}

/// Envelope shape of a document-list payload.
#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<Record>,
}

/// Shapes a JSON document-list payload (`{"documents": [...]}`) into
/// records. Unknown fields are ignored; missing fields become placeholders
/// at render time.
pub fn parse_documents(payload: &str) -> Result<Vec<Record>> {
    let list: DocumentList =
        serde_json::from_str(payload).context("malformed document-list payload")?;
    Ok(list.documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_shapes_documents() {
        let payload = r#"{
            "documents": [
                {"title": "Field Renderer", "description": "wgpu toy", "url": "https://example.test/p1"},
                {"$createdAt": "2025-03-02T10:00:00Z", "content": "short post"}
            ]
        }"#;
        let records = parse_documents(payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].display_title(), "Field Renderer");
        assert_eq!(records[1].display_title(), "Untitled");
        assert_eq!(records[1].created_at.as_deref(), Some("2025-03-02T10:00:00Z"));
    }

    #[test]
    fn parse_tolerates_empty_and_unknown_fields() {
        let records = parse_documents(r#"{"documents": [], "total": 0}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn parse_rejects_malformed_payload() {
        assert!(parse_documents("not json").is_err());
    }

    #[test]
    fn preview_prefers_description_then_summary_then_content() {
        let mut r = Record {
            description: Some("desc".into()),
            summary: Some("sum".into()),
            content: Some("body".into()),
            ..Record::default()
        };
        assert_eq!(r.preview(), "desc");

        r.description = None;
        assert_eq!(r.preview(), "sum");

        r.summary = None;
        assert_eq!(r.preview(), "body");

        r.content = None;
        assert_eq!(r.preview(), "No description available.");
    }

    #[test]
    fn long_content_is_truncated_with_ellipsis() {
        let r = Record {
            content: Some("x".repeat(400)),
            ..Record::default()
        };
        let p = r.preview();
        assert_eq!(p.chars().count(), 153);
        assert!(p.ends_with("..."));
    }
}
