use anyhow::Result;

use crate::record::Record;

/// Supplier of record lists.
///
/// One opaque "list records" call; where the records come from (a remote
/// document store, a file, a hardcoded set) is the implementor's business.
pub trait RecordSource {
    fn list(&self) -> Result<Vec<Record>>;
}

/// Hardcoded record source.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The built-in project list shown when no document store is wired up.
    pub fn projects() -> Self {
        let mk = |title: &str, description: &str, repo: &str| Record {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            repo_url: Some(repo.to_string()),
            ..Record::default()
        };

        Self::new(vec![
            mk(
                "Icosahedron Field",
                "Procedural field of rotating icosahedra rendered with wgpu.",
                "https://example.test/field",
            ),
            mk(
                "Vitrine Engine",
                "Small windowing + GPU runtime behind the 3D panel.",
                "https://example.test/engine",
            ),
            mk(
                "Record Display",
                "Collapsible project and post summaries.",
                "https://example.test/records",
            ),
        ])
    }
}

impl RecordSource for StaticSource {
    fn list(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_returns_its_records() {
        let source = StaticSource::projects();
        let records = source.list().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].display_title(), "Icosahedron Field");
    }

    #[test]
    fn empty_static_source_is_valid() {
        let source = StaticSource::new(Vec::new());
        assert!(source.list().unwrap().is_empty());
    }
}
