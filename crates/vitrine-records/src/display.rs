use time::OffsetDateTime;

use crate::record::Record;

/// Renders records as a collapsible text list: a marker + title line per
/// record, with the preview and any links indented beneath it.
///
/// An empty input renders an explicit "none found" line rather than nothing.
pub fn render_list(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut out = String::new();
    for record in records {
        out.push_str("▸ ");
        out.push_str(record.display_title());
        out.push('\n');

        out.push_str("    ");
        out.push_str(&record.preview());
        out.push('\n');

        if let Some(created) = record.created_at.as_deref() {
            out.push_str(&format!("    published: {created}\n"));
        }
        if let Some(url) = record.url.as_deref() {
            out.push_str(&format!("    view: {url}\n"));
        }
        if let Some(repo) = record.repo_url.as_deref() {
            out.push_str(&format!("    repository: {repo}\n"));
        }
    }
    out
}

/// Footer line carrying the current year.
pub fn footer_line(year: i32) -> String {
    format!("© {year}")
}

/// Current calendar year (UTC), from the system clock.
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(render_list(&[]), "No records found.\n");
    }

    #[test]
    fn records_render_title_and_preview() {
        let records = vec![Record {
            title: Some("A Project".into()),
            description: Some("Does things.".into()),
            url: Some("https://example.test/a".into()),
            ..Record::default()
        }];
        let out = render_list(&records);
        assert!(out.contains("▸ A Project"));
        assert!(out.contains("    Does things."));
        assert!(out.contains("    view: https://example.test/a"));
    }

    #[test]
    fn sparse_record_renders_placeholders() {
        let out = render_list(&[Record::default()]);
        assert!(out.contains("▸ Untitled"));
        assert!(out.contains("No description available."));
        assert!(!out.contains("view:"));
    }

    #[test]
    fn footer_carries_year() {
        assert_eq!(footer_line(2026), "© 2026");
    }

    #[test]
    fn footer_for_a_known_timestamp() {
        // 2023-11-14T22:13:20Z
        let date = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(footer_line(date.year()), "© 2023");
    }

    #[test]
    fn current_year_is_plausible() {
        let y = current_year();
        assert!((2024..2100).contains(&y));
    }
}
