//! Filter/sort criteria and the reducer that evolves them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use super::post::CategoryFilter;
use crate::error::DomainError;

/// Date-range bucket measured back from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    #[default]
    All,
    Week,
    Month,
    Quarter,
    Year,
}

impl DateRange {
    /// Earliest creation instant still inside the range, `None` for `All`.
    ///
    /// Months are calendar months; a day that does not exist in the target
    /// month clamps to that month's last day.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            DateRange::All => None,
            DateRange::Week => Some(now - Duration::days(7)),
            DateRange::Month => now.checked_sub_months(Months::new(1)),
            DateRange::Quarter => now.checked_sub_months(Months::new(3)),
            DateRange::Year => now.checked_sub_months(Months::new(12)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::Quarter => "quarter",
            DateRange::Year => "year",
        }
    }
}

impl FromStr for DateRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DateRange::All),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "quarter" => Ok(DateRange::Quarter),
            "year" => Ok(DateRange::Year),
            other => Err(DomainError::UnknownOption {
                option: "date range",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering of the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::TitleAsc => "title_asc",
            SortOrder::TitleDesc => "title_desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "title_asc" => Ok(SortOrder::TitleAsc),
            "title_desc" => Ok(SortOrder::TitleDesc),
            other => Err(DomainError::UnknownOption {
                option: "sort order",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current filter and sort selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criteria {
    pub category: CategoryFilter,
    search: String,
    pub date_range: DateRange,
    pub sort: SortOrder,
}

impl Criteria {
    /// Normalised search term: trimmed and lowercased.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search = raw.trim().to_lowercase();
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, raw: &str) -> Self {
        self.set_search(raw);
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Number of criteria that differ from their default (0-4).
    pub fn active_filter_count(&self) -> usize {
        [
            self.category != CategoryFilter::All,
            !self.search.is_empty(),
            self.date_range != DateRange::All,
            self.sort != SortOrder::Newest,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// A UI interaction that changes the criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaEvent {
    SelectCategory(CategoryFilter),
    SearchInput(String),
    SelectDateRange(DateRange),
    SelectSort(SortOrder),
    ClearFilters,
}

impl CriteriaEvent {
    /// Search keystrokes are collapsed by the caller before reaching the reducer.
    pub fn is_debounced(&self) -> bool {
        matches!(self, CriteriaEvent::SearchInput(_))
    }
}

/// Pure transition: `(criteria, event) -> criteria`.
pub fn reduce(criteria: &Criteria, event: &CriteriaEvent) -> Criteria {
    let next = criteria.clone();
    match event {
        CriteriaEvent::SelectCategory(category) => next.with_category(*category),
        CriteriaEvent::SearchInput(raw) => next.with_search(raw),
        CriteriaEvent::SelectDateRange(range) => next.with_date_range(*range),
        CriteriaEvent::SelectSort(sort) => next.with_sort(*sort),
        CriteriaEvent::ClearFilters => Criteria::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use chrono::TimeZone;

    #[test]
    fn test_defaults_have_no_active_filters() {
        assert_eq!(Criteria::default().active_filter_count(), 0);
    }

    #[test]
    fn test_active_filter_count_counts_each_criterion() {
        let criteria = Criteria::default()
            .with_category(CategoryFilter::Only(Category::Health))
            .with_search("  Zen ")
            .with_date_range(DateRange::Week)
            .with_sort(SortOrder::TitleAsc);
        assert_eq!(criteria.active_filter_count(), 4);
        assert_eq!(criteria.search(), "zen");
    }

    #[test]
    fn test_blank_search_is_inactive() {
        let criteria = Criteria::default().with_search("   ");
        assert_eq!(criteria.active_filter_count(), 0);
    }

    #[test]
    fn test_reduce_leaves_other_fields() {
        let start = Criteria::default().with_sort(SortOrder::Oldest);
        let next = reduce(
            &start,
            &CriteriaEvent::SelectCategory(CategoryFilter::Only(Category::Business)),
        );
        assert_eq!(next.sort, SortOrder::Oldest);
        assert_eq!(next.category, CategoryFilter::Only(Category::Business));
        assert_eq!(start.category, CategoryFilter::All);
    }

    #[test]
    fn test_reduce_clear_filters() {
        let start = Criteria::default()
            .with_search("rust")
            .with_date_range(DateRange::Year);
        assert_eq!(reduce(&start, &CriteriaEvent::ClearFilters), Criteria::default());
    }

    #[test]
    fn test_cutoffs() {
        let now = Utc.with_ymd_and_hms(2025, 3, 31, 12, 0, 0).unwrap();
        assert_eq!(DateRange::All.cutoff(now), None);
        assert_eq!(
            DateRange::Week.cutoff(now),
            Some(Utc.with_ymd_and_hms(2025, 3, 24, 12, 0, 0).unwrap())
        );
        // February has no 31st.
        assert_eq!(
            DateRange::Month.cutoff(now),
            Some(Utc.with_ymd_and_hms(2025, 2, 28, 12, 0, 0).unwrap())
        );
        assert_eq!(
            DateRange::Quarter.cutoff(now),
            Some(Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap())
        );
        assert_eq!(
            DateRange::Year.cutoff(now),
            Some(Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("title_desc".parse::<SortOrder>().unwrap(), SortOrder::TitleDesc);
        assert_eq!("quarter".parse::<DateRange>().unwrap(), DateRange::Quarter);
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
