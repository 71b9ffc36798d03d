//! Supported product sort orders.

use serde::{Deserialize, Serialize};


/// Collection product sort keys understood by the storefront API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    Relevance,
    BestSelling,
    Created,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub title: &'static str,
    pub slug: Option<&'static str>,
    pub sort_key: SortKey,
    pub reverse: bool,
}

pub const DEFAULT_SORT: SortOption = SortOption {
    title: "Relevance",
    slug: None,
    sort_key: SortKey::Relevance,
    reverse: false,
};

pub const SORTING: [SortOption; 5] = [
    DEFAULT_SORT,
    SortOption { title: "Trending", slug: Some("trending-desc"), sort_key: SortKey::BestSelling, reverse: false },
    SortOption { title: "Latest arrivals", slug: Some("latest-desc"), sort_key: SortKey::Created, reverse: true },
    SortOption { title: "Price: Low to high", slug: Some("price-asc"), sort_key: SortKey::Price, reverse: false },
    SortOption { title: "Price: High to low", slug: Some("price-desc"), sort_key: SortKey::Price, reverse: true },
];

/// Unknown or missing slugs fall back to [`DEFAULT_SORT`].
pub fn resolve_sort(slug: Option<&str>) -> SortOption {
    let Some(slug) = slug else {
        return DEFAULT_SORT;
    };
    SORTING.iter().find(|item| item.slug == Some(slug)).copied().unwrap_or(DEFAULT_SORT)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_slugs_resolve() {
        let sort = resolve_sort(Some("price-asc"));
        assert_eq!(sort.sort_key, SortKey::Price);
        assert!(!sort.reverse);
        assert!(resolve_sort(Some("price-desc")).reverse);
        assert_eq!(resolve_sort(Some("latest-desc")).sort_key, SortKey::Created);
    }

    #[test]
    fn unknown_or_missing_slug_is_default() {
        assert_eq!(resolve_sort(None), DEFAULT_SORT);
        assert_eq!(resolve_sort(Some("cheapest-first")), DEFAULT_SORT);
        assert_eq!(resolve_sort(Some("")), DEFAULT_SORT);
    }

    #[test]
    fn sort_key_uses_schema_names() {
        assert_eq!(serde_json::to_value(SortKey::BestSelling).unwrap(), serde_json::json!("BEST_SELLING"));
    }
}
