use crate::facets::{FacetSet, FilterDimension};
use chrono::{DateTime, Utc};
use folio_model::Record;
use serde::{Deserialize, Serialize};

/// Recency window for the date filter. Thresholds are elapsed days between
/// "now" and the record's effective date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateRange {
    #[default]
    All,
    ThreeMonths,
    SixMonths,
    Year,
}

impl DateRange {
    /// `None` means the date filter is disabled.
    pub fn max_days(self) -> Option<i64> {
        match self {
            DateRange::All => None,
            DateRange::ThreeMonths => Some(90),
            DateRange::SixMonths => Some(180),
            DateRange::Year => Some(365),
        }
    }
}

/// Active filter selections for a listing view.
///
/// All-empty at screen mount; mutated only by explicit selection; matching is
/// case-sensitive identity on slugs (values come from the facet set, which
/// the CMS serves pre-normalized).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub category: Option<String>,
    pub project_type: Option<String>,
    pub technology: Option<String>,
    #[serde(default)]
    pub date_range: DateRange,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.project_type.is_none()
            && self.technology.is_none()
            && self.date_range == DateRange::All
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Drop selections that reference facets no longer present in the
    /// collection. A stale selection behaves as if empty rather than
    /// filtering everything out.
    pub fn sanitize(&mut self, facets: &FacetSet) {
        let mut drop_stale = |selection: &mut Option<String>, dimension: FilterDimension| {
            if let Some(value) = selection {
                if !facets.contains(dimension, value) {
                    log::debug!("dropping stale {dimension:?} filter {value:?}");
                    *selection = None;
                }
            }
        };
        drop_stale(&mut self.category, FilterDimension::Category);
        drop_stale(&mut self.project_type, FilterDimension::ProjectType);
        drop_stale(&mut self.technology, FilterDimension::Technology);
    }

    /// Per-item inclusion decision: published/completed AND every active
    /// dimension matches (logical AND). Multi-valued dimensions match if any
    /// value equals the selection. Records without a date are excluded
    /// whenever a range other than `All` is active.
    pub fn matches<T: Record>(&self, item: &T, now: DateTime<Utc>) -> bool {
        if !item.is_published() {
            return false;
        }
        if let Some(category) = &self.category {
            if !item.categories().iter().any(|c| c == category) {
                return false;
            }
        }
        if let Some(project_type) = &self.project_type {
            if item.project_type() != Some(project_type.as_str()) {
                return false;
            }
        }
        if let Some(technology) = &self.technology {
            if !item.technologies().iter().any(|t| t == technology) {
                return false;
            }
        }
        if let Some(max_days) = self.date_range.max_days() {
            match item.effective_date() {
                Some(date) => {
                    if now.signed_duration_since(date).num_days() > max_days {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use folio_model::{ContentStatus, PortfolioItem, TechStackEntry};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn completed(category: &str) -> PortfolioItem {
        PortfolioItem {
            title: format!("{category} project"),
            category: category.to_string(),
            status: ContentStatus::Completed,
            completed_date: Some(now() - chrono::Duration::days(30)),
            ..Default::default()
        }
    }

    #[test]
    fn empty_filters_keep_all_published() {
        let filters = FilterState::default();
        let items = vec![
            completed("web"),
            PortfolioItem {
                status: ContentStatus::Draft,
                ..completed("web")
            },
            completed("mobile"),
        ];
        let kept: Vec<_> = items.iter().filter(|i| filters.matches(*i, now())).collect();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn active_dimensions_combine_with_and() {
        let mut item = completed("web");
        item.project_type = Some("client-work".to_string());
        item.tech_stack = vec![TechStackEntry {
            name: "Rust".to_string(),
            ..Default::default()
        }];

        let filters = FilterState {
            category: Some("web".to_string()),
            technology: Some("Rust".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&item, now()));

        let filters = FilterState {
            category: Some("web".to_string()),
            technology: Some("Go".to_string()),
            ..Default::default()
        };
        assert!(!filters.matches(&item, now()));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let item = completed("web");
        let filters = FilterState {
            category: Some("Web".to_string()),
            ..Default::default()
        };
        assert!(!filters.matches(&item, now()));
    }

    #[test]
    fn date_range_thresholds() {
        let mut item = completed("web");
        item.completed_date = Some(now() - chrono::Duration::days(100));

        let mut filters = FilterState::default();
        filters.date_range = DateRange::ThreeMonths;
        assert!(!filters.matches(&item, now()));
        filters.date_range = DateRange::SixMonths;
        assert!(filters.matches(&item, now()));
        filters.date_range = DateRange::Year;
        assert!(filters.matches(&item, now()));
    }

    #[test]
    fn undated_items_excluded_by_date_range() {
        let mut item = completed("web");
        item.completed_date = None;

        let mut filters = FilterState::default();
        assert!(filters.matches(&item, now()));
        filters.date_range = DateRange::Year;
        assert!(!filters.matches(&item, now()));
    }

    #[test]
    fn sanitize_drops_stale_selections() {
        let facets = FacetSet::extract(&[completed("web")]);
        let mut filters = FilterState {
            category: Some("design".to_string()),
            technology: Some("Rust".to_string()),
            date_range: DateRange::Year,
            ..Default::default()
        };
        filters.sanitize(&facets);
        assert_eq!(filters.category, None);
        assert_eq!(filters.technology, None);
        // Date range is not facet-backed, it survives.
        assert_eq!(filters.date_range, DateRange::Year);
    }
}
