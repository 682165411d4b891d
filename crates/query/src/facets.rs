use folio_model::Record;
use std::collections::HashSet;

/// Filterable dimensions a listing view exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    Category,
    ProjectType,
    Technology,
    Tag,
}

/// Distinct non-empty values per filter dimension, in first-seen order.
///
/// Always derived from the current collection — never mutated independently,
/// so recomputing after a refresh is the only way facets change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSet {
    pub categories: Vec<String>,
    pub project_types: Vec<String>,
    pub technologies: Vec<String>,
    pub tags: Vec<String>,
}

impl FacetSet {
    /// Walk the collection once and collect distinct values. Absent optional
    /// attributes are skipped, not errors; ordering is stable so the filter
    /// UI does not reshuffle between identical refreshes.
    pub fn extract<T: Record>(items: &[T]) -> Self {
        let mut facets = FacetSet::default();
        let mut seen: HashSet<(FilterDimension, String)> = HashSet::new();

        let mut push = |dim: FilterDimension, bucket: &mut Vec<String>, value: &str| {
            if value.is_empty() {
                return;
            }
            if seen.insert((dim, value.to_string())) {
                bucket.push(value.to_string());
            }
        };

        for item in items {
            for category in item.categories() {
                push(FilterDimension::Category, &mut facets.categories, category);
            }
            if let Some(project_type) = item.project_type() {
                push(
                    FilterDimension::ProjectType,
                    &mut facets.project_types,
                    project_type,
                );
            }
            for tech in item.technologies() {
                push(FilterDimension::Technology, &mut facets.technologies, tech);
            }
            for tag in item.tags() {
                push(FilterDimension::Tag, &mut facets.tags, tag);
            }
        }
        facets
    }

    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Category => &self.categories,
            FilterDimension::ProjectType => &self.project_types,
            FilterDimension::Technology => &self.technologies,
            FilterDimension::Tag => &self.tags,
        }
    }

    pub fn contains(&self, dimension: FilterDimension, value: &str) -> bool {
        self.values(dimension).iter().any(|v| v == value)
    }
}
