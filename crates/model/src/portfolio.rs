use crate::envelope::Timestamps;
use crate::relation::{MediaAttributes, MediaList, MediaRef, Relation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status of a portfolio project. Unknown values decode into
/// `Other` so a new status added on the CMS side never breaks the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentStatus {
    Completed,
    InProgress,
    #[default]
    Draft,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackEntry {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudySection {
    pub heading: String,
    pub content: String,
    #[serde(default)]
    pub image: Relation<MediaAttributes>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub highlight_lines: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoLink {
    pub title: String,
    pub url: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub embed_code: Option<String>,
    #[serde(default)]
    pub is_embedded: bool,
}

/// A portfolio project as served by the CMS. Every nested or optional
/// attribute defaults at decode time; rendering code treats absence as
/// "not provided", never as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub tech_stack: Vec<TechStackEntry>,
    #[serde(default)]
    pub featured_image: MediaRef,
    #[serde(default)]
    pub gallery: MediaList,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub case_study_sections: Vec<CaseStudySection>,
    #[serde(default)]
    pub code_snippets: Vec<CodeSnippet>,
    #[serde(default)]
    pub demo_links: Vec<DemoLink>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub solutions: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub testimonial: Option<String>,
    #[serde(default)]
    pub testimonial_author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_sparse_payload() {
        let raw = r#"{
            "title": "Realtime dashboard",
            "category": "web",
            "status": "completed",
            "techStack": [{ "name": "Rust" }, { "name": "TypeScript", "version": "5" }],
            "completedDate": "2024-11-02T00:00:00Z",
            "featured": true
        }"#;
        let item: PortfolioItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.status, ContentStatus::Completed);
        assert_eq!(item.tech_stack.len(), 2);
        assert!(item.featured);
        assert!(item.featured_image.attributes().is_none());
        assert!(item.short_description.is_none());
        assert!(item.view_count.is_none());
        assert!(item.timestamps.created_at.is_none());
    }

    #[test]
    fn bookkeeping_timestamps_decode_alongside_attributes() {
        let raw = r#"{
            "title": "Timestamped",
            "category": "web",
            "status": "completed",
            "createdAt": "2024-01-05T09:00:00Z",
            "updatedAt": "2024-02-01T10:30:00Z",
            "publishedAt": "2024-02-02T08:00:00Z"
        }"#;
        let item: PortfolioItem = serde_json::from_str(raw).unwrap();
        assert!(item.timestamps.created_at.is_some());
        assert!(item.timestamps.updated_at.is_some());
        assert_eq!(
            item.timestamps.published_at.unwrap().to_rfc3339(),
            "2024-02-02T08:00:00+00:00"
        );
    }

    #[test]
    fn unknown_status_decodes_as_other() {
        let item: PortfolioItem =
            serde_json::from_str(r#"{ "title": "x", "status": "archived" }"#).unwrap();
        assert_eq!(item.status, ContentStatus::Other("archived".to_string()));
    }

    #[test]
    fn status_round_trips_kebab_case() {
        let raw = serde_json::to_string(&ContentStatus::InProgress).unwrap();
        assert_eq!(raw, "\"in-progress\"");
    }
}
