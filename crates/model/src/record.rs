use crate::envelope::Entity;
use crate::{BlogPost, ContentStatus, PortfolioItem};
use chrono::{DateTime, Utc};

/// Seam between the typed records and the listing pipeline.
///
/// Every accessor is total: missing optional attributes surface as `None`,
/// an empty collection, or a zero count, never as an error. Counts default
/// to 0 and reading time to 0 minutes so comparators need no special cases.
pub trait Record {
    /// Whether the record is visible at all (completed project, published post).
    fn is_published(&self) -> bool;

    fn featured(&self) -> bool;

    /// Category slugs the record belongs to. A filter selection matches if
    /// any of them equals it.
    fn categories(&self) -> Vec<&str>;

    fn project_type(&self) -> Option<&str> {
        None
    }

    /// Technology names (tech-stack entries). Multi-valued: a filter
    /// selection matches if any entry equals it.
    fn technologies(&self) -> Vec<&str> {
        Vec::new()
    }

    fn tags(&self) -> &[String];

    /// The timestamp listing views sort and date-filter on: completion date
    /// for projects, publish date for posts.
    fn effective_date(&self) -> Option<DateTime<Utc>>;

    fn view_count(&self) -> u64 {
        0
    }

    fn reading_time(&self) -> u32 {
        0
    }
}

impl Record for PortfolioItem {
    fn is_published(&self) -> bool {
        self.status == ContentStatus::Completed
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn categories(&self) -> Vec<&str> {
        if self.category.is_empty() {
            Vec::new()
        } else {
            vec![self.category.as_str()]
        }
    }

    fn project_type(&self) -> Option<&str> {
        self.project_type.as_deref()
    }

    fn technologies(&self) -> Vec<&str> {
        self.tech_stack.iter().map(|tech| tech.name.as_str()).collect()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn effective_date(&self) -> Option<DateTime<Utc>> {
        self.completed_date
    }

    fn view_count(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }
}

impl Record for BlogPost {
    fn is_published(&self) -> bool {
        self.published_date.is_some()
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn categories(&self) -> Vec<&str> {
        self.category_slugs()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn effective_date(&self) -> Option<DateTime<Utc>> {
        self.published_date
    }

    fn view_count(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }

    fn reading_time(&self) -> u32 {
        self.reading_time.unwrap_or(0)
    }
}

impl<T: Record> Record for Entity<T> {
    fn is_published(&self) -> bool {
        self.attributes.is_published()
    }

    fn featured(&self) -> bool {
        self.attributes.featured()
    }

    fn categories(&self) -> Vec<&str> {
        self.attributes.categories()
    }

    fn project_type(&self) -> Option<&str> {
        self.attributes.project_type()
    }

    fn technologies(&self) -> Vec<&str> {
        self.attributes.technologies()
    }

    fn tags(&self) -> &[String] {
        self.attributes.tags()
    }

    fn effective_date(&self) -> Option<DateTime<Utc>> {
        self.attributes.effective_date()
    }

    fn view_count(&self) -> u64 {
        self.attributes.view_count()
    }

    fn reading_time(&self) -> u32 {
        self.attributes.reading_time()
    }
}

impl<T: Record> Record for &T {
    fn is_published(&self) -> bool {
        (**self).is_published()
    }

    fn featured(&self) -> bool {
        (**self).featured()
    }

    fn categories(&self) -> Vec<&str> {
        (**self).categories()
    }

    fn project_type(&self) -> Option<&str> {
        (**self).project_type()
    }

    fn technologies(&self) -> Vec<&str> {
        (**self).technologies()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }

    fn effective_date(&self) -> Option<DateTime<Utc>> {
        (**self).effective_date()
    }

    fn view_count(&self) -> u64 {
        (**self).view_count()
    }

    fn reading_time(&self) -> u32 {
        (**self).reading_time()
    }
}
