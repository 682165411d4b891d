use crate::filter::FilterState;
use crate::sort::{sort_records, SortKey};
use chrono::{DateTime, Utc};
use folio_model::Record;

/// Filter then stably sort a collection, returning references in display
/// order. The source collection is never mutated; listing views call this
/// synchronously on every filter or sort change.
pub fn apply<'a, T: Record>(
    items: &'a [T],
    filters: &FilterState,
    key: SortKey,
    featured_first: bool,
    now: DateTime<Utc>,
) -> Vec<&'a T> {
    let mut visible: Vec<&T> = items
        .iter()
        .filter(|item| filters.matches(*item, now))
        .collect();
    sort_records(&mut visible, key, featured_first);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use folio_model::{ContentStatus, PortfolioItem};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn item(title: &str, category: &str) -> PortfolioItem {
        PortfolioItem {
            title: title.to_string(),
            category: category.to_string(),
            status: ContentStatus::Completed,
            completed_date: Some(now() - chrono::Duration::days(10)),
            ..Default::default()
        }
    }

    #[test]
    fn category_filter_scenario() {
        let items = vec![
            item("a", "web"),
            item("b", "mobile"),
            item("c", "web"),
            item("d", "design"),
        ];
        let filters = FilterState {
            category: Some("web".to_string()),
            ..Default::default()
        };

        let visible = apply(&items, &filters, SortKey::Date, false, now());

        let titles: Vec<&str> = visible.iter().map(|i| i.title.as_str()).collect();
        // Exactly the two "web" items, original relative order preserved.
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn source_collection_is_untouched() {
        let items = vec![item("z", "web"), item("a", "web")];
        let _ = apply(&items, &FilterState::default(), SortKey::Date, true, now());
        assert_eq!(items[0].title, "z");
        assert_eq!(items[1].title, "a");
    }
}
