use folio_model::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Active ordering criterion for a listing view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Newest first; undated records sort last.
    #[default]
    Date,
    /// Most viewed first; missing counts are 0.
    Popularity,
    /// Shortest read first; missing estimates are 0.
    ReadingTime,
}

/// Stable in-place sort. With `featured_first`, flagged records precede the
/// rest regardless of key; within each partition the key comparator applies.
/// Stability matters: equal keys keep their prior relative order so identical
/// filters never reshuffle the list between renders.
pub fn sort_records<T: Record>(items: &mut [T], key: SortKey, featured_first: bool) {
    items.sort_by(|a, b| compare(a, b, key, featured_first));
}

fn compare<T: Record>(a: &T, b: &T, key: SortKey, featured_first: bool) -> Ordering {
    if featured_first {
        let by_featured = b.featured().cmp(&a.featured());
        if by_featured != Ordering::Equal {
            return by_featured;
        }
    }
    match key {
        SortKey::Date => {
            // Missing dates map to the oldest representable instant.
            let a_date = a.effective_date().map_or(i64::MIN, |d| d.timestamp_millis());
            let b_date = b.effective_date().map_or(i64::MIN, |d| d.timestamp_millis());
            b_date.cmp(&a_date)
        }
        SortKey::Popularity => b.view_count().cmp(&a.view_count()),
        SortKey::ReadingTime => a.reading_time().cmp(&b.reading_time()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use folio_model::{ContentStatus, PortfolioItem};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn item(title: &str, days_ago: Option<i64>, views: Option<u64>, featured: bool) -> PortfolioItem {
        let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        PortfolioItem {
            title: title.to_string(),
            category: "web".to_string(),
            status: ContentStatus::Completed,
            completed_date: days_ago.map(|d| base - chrono::Duration::days(d)),
            view_count: views,
            featured,
            ..Default::default()
        }
    }

    fn titles(items: &[PortfolioItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn date_sorts_newest_first_with_undated_last() {
        let mut items = vec![
            item("old", Some(300), None, false),
            item("undated", None, None, false),
            item("new", Some(3), None, false),
        ];
        sort_records(&mut items, SortKey::Date, false);
        assert_eq!(titles(&items), vec!["new", "old", "undated"]);
    }

    #[test]
    fn popularity_treats_missing_as_zero() {
        let mut items = vec![
            item("mid", None, Some(50), false),
            item("unknown", None, None, false),
            item("top", None, Some(200), false),
        ];
        sort_records(&mut items, SortKey::Popularity, false);
        assert_eq!(titles(&items), vec!["top", "mid", "unknown"]);
    }

    #[test]
    fn featured_overrides_sort_key() {
        let mut items = vec![
            item("popular", None, Some(900), false),
            item("flagged", None, Some(1), true),
        ];
        sort_records(&mut items, SortKey::Popularity, true);
        assert_eq!(titles(&items), vec!["flagged", "popular"]);
    }

    #[test]
    fn equal_keys_preserve_relative_order() {
        let mut items = vec![
            item("first", Some(10), Some(5), false),
            item("second", Some(10), Some(5), false),
            item("third", Some(10), Some(5), false),
        ];
        sort_records(&mut items, SortKey::Date, true);
        assert_eq!(titles(&items), vec!["first", "second", "third"]);
    }

    fn arb_item() -> impl Strategy<Value = PortfolioItem> {
        (
            "[a-z]{1,8}",
            proptest::option::of(0i64..1000),
            proptest::option::of(0u64..10_000),
            any::<bool>(),
        )
            .prop_map(|(title, days_ago, views, featured)| {
                item(&title, days_ago, views, featured)
            })
    }

    proptest! {
        #[test]
        fn sort_is_idempotent(mut items in proptest::collection::vec(arb_item(), 0..24),
                              featured_first in any::<bool>()) {
            for key in [SortKey::Date, SortKey::Popularity, SortKey::ReadingTime] {
                sort_records(&mut items, key, featured_first);
                let once = titles(&items).into_iter().map(str::to_string).collect::<Vec<_>>();
                sort_records(&mut items, key, featured_first);
                let twice = titles(&items).into_iter().map(str::to_string).collect::<Vec<_>>();
                prop_assert_eq!(twice, once);
            }
        }

        #[test]
        fn featured_never_follows_unfeatured(mut items in proptest::collection::vec(arb_item(), 0..24)) {
            sort_records(&mut items, SortKey::Date, true);
            for pair in items.windows(2) {
                prop_assert!(!(pair[1].featured && !pair[0].featured));
            }
        }
    }
}
