use crate::envelope::Timestamps;
use crate::relation::{MediaRef, Relation, RelationList};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAttributes {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// A blog post as served by the CMS. Posts carry both a primary category
/// relation and a multi-valued one; category matching considers either.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub published_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Relation<CategoryAttributes>,
    #[serde(default)]
    pub categories: RelationList<CategoryAttributes>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured_image: MediaRef,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub ai_enhanced: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl BlogPost {
    /// All category slugs attached to the post, primary first.
    pub fn category_slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = Vec::new();
        if let Some(primary) = self.category.attributes() {
            slugs.push(primary.slug.as_str());
        }
        for category in self.categories.attributes() {
            if !slugs.contains(&category.slug.as_str()) {
                slugs.push(category.slug.as_str());
            }
        }
        slugs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_slugs_dedupe_and_keep_primary_first() {
        let raw = r#"{
            "title": "On retries",
            "publishedDate": "2025-01-10T08:00:00Z",
            "category": { "data": { "id": 1, "attributes": { "name": "Engineering", "slug": "engineering" } } },
            "categories": { "data": [
                { "id": 1, "attributes": { "name": "Engineering", "slug": "engineering" } },
                { "id": 2, "attributes": { "name": "Rust", "slug": "rust" } }
            ] }
        }"#;
        let post: BlogPost = serde_json::from_str(raw).unwrap();
        assert_eq!(post.category_slugs(), vec!["engineering", "rust"]);
    }

    #[test]
    fn sparse_post_decodes_with_defaults() {
        let post: BlogPost = serde_json::from_str(r#"{ "title": "Draft" }"#).unwrap();
        assert!(post.published_date.is_none());
        assert!(post.category_slugs().is_empty());
        assert!(!post.featured);
        assert!(post.timestamps.published_at.is_none());
    }

    #[test]
    fn bookkeeping_timestamps_decode_alongside_attributes() {
        let raw = r#"{
            "title": "Tracked",
            "createdAt": "2025-01-01T00:00:00Z",
            "publishedAt": "2025-01-02T00:00:00Z"
        }"#;
        let post: BlogPost = serde_json::from_str(raw).unwrap();
        assert!(post.timestamps.created_at.is_some());
        assert!(post.timestamps.updated_at.is_none());
        assert!(post.timestamps.published_at.is_some());
    }
}
