//! Filter/sort engine.
//!
//! Derives the displayed posts from the full store and the current
//! [`Criteria`]. Every predicate is applied in full on each call; there is no
//! incremental state.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::domain::{Criteria, Post, SortOrder};

/// Recompute the derived view as of the current time.
pub fn recompute(criteria: &Criteria, posts: &[Post]) -> Vec<Post> {
    recompute_at(criteria, posts, Utc::now())
}

/// Recompute the derived view with an explicit "now" for the date range.
///
/// Keeps exactly the posts that pass the category, date-range and search
/// predicates, then sorts them. The sort is stable, so posts with equal keys
/// stay in store order.
pub fn recompute_at(criteria: &Criteria, posts: &[Post], now: DateTime<Utc>) -> Vec<Post> {
    let cutoff = criteria.date_range.cutoff(now);
    let term = criteria.search();

    let mut view: Vec<Post> = posts
        .iter()
        .filter(|post| criteria.category.matches(post.category))
        .filter(|post| cutoff.is_none_or(|cutoff| post.created_at >= cutoff))
        .filter(|post| term.is_empty() || post.mentions(term))
        .cloned()
        .collect();

    sort_posts(&mut view, criteria.sort);
    view
}

/// Number of non-default criteria, for the filter badge.
pub fn active_filter_count(criteria: &Criteria) -> usize {
    criteria.active_filter_count()
}

/// Stable in-place sort.
pub fn sort_posts(posts: &mut [Post], order: SortOrder) {
    match order {
        SortOrder::Newest => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => posts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::TitleAsc => posts.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOrder::TitleDesc => posts.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }
}

/// Multi-level title collation.
///
/// 1. base letters, ignoring accents and case (`École` sorts with `ecole`)
/// 2. accents, unaccented first
/// 3. case, lowercase first
fn compare_titles(a: &str, b: &str) -> Ordering {
    let (a_key, b_key) = (CollationKey::new(a), CollationKey::new(b));
    a_key
        .base
        .cmp(&b_key.base)
        .then_with(|| a_key.accented.cmp(&b_key.accented))
        .then_with(|| a.cmp(b).reverse())
}

struct CollationKey {
    base: String,
    accented: String,
}

impl CollationKey {
    fn new(title: &str) -> Self {
        let accented: String = title.nfd().flat_map(char::to_lowercase).collect();
        let base = accented.chars().filter(|c| !is_combining_mark(*c)).collect();
        Self { base, accented }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CategoryFilter, DateRange, seed_posts};
    use chrono::{Duration, TimeZone};

    fn day(n: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, n, 12, 0, 0).unwrap()
    }

    fn post(id: &str, title: &str, category: Category, created_at: DateTime<Utc>) -> Post {
        Post::new(id, title, format!("Body of {title}"), category, created_at)
    }

    fn ids(view: &[Post]) -> Vec<&str> {
        view.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_criteria_return_whole_store_sorted() {
        let store = vec![
            post("b", "B", Category::Health, day(1)),
            post("a", "A", Category::Technology, day(3)),
            post("c", "C", Category::Business, day(2)),
        ];
        let view = recompute_at(&Criteria::default(), &store, day(10));
        assert_eq!(ids(&view), vec!["a", "c", "b"]);

        let oldest = Criteria::default().with_sort(SortOrder::Oldest);
        assert_eq!(ids(&recompute_at(&oldest, &store, day(10))), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_category_filter_is_subset() {
        let store = seed_posts();
        let criteria = Criteria::default().with_category(CategoryFilter::Only(Category::Technology));
        let view = recompute(&criteria, &store);
        assert_eq!(ids(&view), vec!["1", "5"]);
        assert!(view.iter().all(|p| p.category == Category::Technology));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_content() {
        let store = seed_posts();
        let criteria = Criteria::default().with_search("REACT");
        let view = recompute(&criteria, &store);
        assert_eq!(ids(&view), vec!["1"]);

        let by_content = Criteria::default().with_search("declutter");
        assert_eq!(ids(&recompute(&by_content, &store)), vec!["4"]);

        let term = "learn";
        let kept = recompute(&Criteria::default().with_search(term), &store);
        for post in &store {
            let matches = post.mentions(term);
            assert_eq!(kept.iter().any(|k| k.id == post.id), matches);
        }
    }

    #[test]
    fn test_date_range_keeps_posts_on_cutoff() {
        let now = day(20);
        let store = vec![
            post("edge", "Edge", Category::Health, now - Duration::days(7)),
            post("old", "Old", Category::Health, now - Duration::days(8)),
            post("new", "New", Category::Health, now),
        ];
        let criteria = Criteria::default().with_date_range(DateRange::Week);
        assert_eq!(ids(&recompute_at(&criteria, &store, now)), vec!["new", "edge"]);
    }

    #[test]
    fn test_predicates_compose() {
        let now = day(20);
        let store = vec![
            post("1", "Rust tips", Category::Technology, day(19)),
            post("2", "Rust history", Category::Technology, day(1)),
            post("3", "Rust retreat", Category::Lifestyle, day(19)),
            post("4", "Go tips", Category::Technology, day(19)),
        ];
        let criteria = Criteria::default()
            .with_category(CategoryFilter::Only(Category::Technology))
            .with_search("rust")
            .with_date_range(DateRange::Week);
        assert_eq!(ids(&recompute_at(&criteria, &store, now)), vec!["1"]);
    }

    #[test]
    fn test_title_sort_is_case_insensitive_and_stable() {
        let store = vec![
            post("1", "beta", Category::Health, day(1)),
            post("2", "Alpha", Category::Health, day(2)),
            post("3", "alpha", Category::Health, day(3)),
            post("4", "Gamma", Category::Health, day(4)),
            post("5", "beta", Category::Health, day(5)),
        ];
        let asc = Criteria::default().with_sort(SortOrder::TitleAsc);
        assert_eq!(ids(&recompute_at(&asc, &store, day(10))), vec!["3", "2", "1", "5", "4"]);

        let desc = Criteria::default().with_sort(SortOrder::TitleDesc);
        assert_eq!(ids(&recompute_at(&desc, &store, day(10))), vec!["4", "1", "5", "2", "3"]);
    }

    #[test]
    fn test_accented_titles_sort_with_their_base_letter() {
        let store = vec![
            post("z", "Zebra care", Category::Health, day(1)),
            post("e", "École guide", Category::Education, day(2)),
            post("a", "Apple pie", Category::Lifestyle, day(3)),
        ];
        let asc = Criteria::default().with_sort(SortOrder::TitleAsc);
        assert_eq!(ids(&recompute_at(&asc, &store, day(10))), vec!["a", "e", "z"]);

        let desc = Criteria::default().with_sort(SortOrder::TitleDesc);
        assert_eq!(ids(&recompute_at(&desc, &store, day(10))), vec!["z", "e", "a"]);
    }

    #[test]
    fn test_unaccented_title_precedes_accented_twin() {
        assert_eq!(compare_titles("ecole", "École"), Ordering::Less);
        assert_eq!(compare_titles("École", "Ecole"), Ordering::Greater);
        assert_eq!(compare_titles("résumé", "resume"), Ordering::Greater);
        assert_eq!(compare_titles("Ecole", "ecole"), Ordering::Greater);
    }

    #[test]
    fn test_equal_timestamps_keep_store_order() {
        let store = vec![
            post("x", "X", Category::Health, day(2)),
            post("y", "Y", Category::Health, day(2)),
            post("z", "Z", Category::Health, day(2)),
        ];
        for sort in [SortOrder::Newest, SortOrder::Oldest] {
            let criteria = Criteria::default().with_sort(sort);
            assert_eq!(ids(&recompute_at(&criteria, &store, day(10))), vec!["x", "y", "z"]);
        }
    }

    #[test]
    fn test_sort_is_idempotent() {
        let store = seed_posts();
        for sort in [
            SortOrder::Newest,
            SortOrder::Oldest,
            SortOrder::TitleAsc,
            SortOrder::TitleDesc,
        ] {
            let mut once = store.clone();
            sort_posts(&mut once, sort);
            let mut twice = once.clone();
            sort_posts(&mut twice, sort);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_and_singleton_store() {
        let criteria = Criteria::default().with_search("anything");
        assert!(recompute(&criteria, &[]).is_empty());

        let single = vec![post("only", "Anything goes", Category::Education, day(1))];
        assert_eq!(ids(&recompute(&criteria, &single)), vec!["only"]);
    }

    #[test]
    fn test_active_filter_count_matches_criteria() {
        let criteria = Criteria::default().with_sort(SortOrder::Oldest);
        assert_eq!(active_filter_count(&criteria), 1);
    }
}
