use crate::models::Location;

use super::book::{LocationBook, LocationError};

/// Filters for listing locations. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct LocationQuery {
    /// Case-insensitive substring over name, city, state, zip code and address.
    pub search: Option<String>,
    /// Exact state match, ignoring case.
    pub state: Option<String>,
    /// Only members of this group.
    pub group: Option<String>,
}

impl LocationQuery {
    pub fn apply<'a>(&self, book: &'a LocationBook) -> Result<Vec<&'a Location>, LocationError> {
        let members = match self.group.as_deref() {
            Some(name) => Some(
                book.group(name)
                    .ok_or_else(|| LocationError::UnknownGroup(name.to_string()))?
                    .location_ids
                    .as_slice(),
            ),
            None => None,
        };
        let needle = self.search.as_deref().map(str::to_lowercase);

        Ok(book
            .locations
            .iter()
            .filter(|l| members.is_none_or(|ids| ids.contains(&l.id)))
            .filter(|l| self.state.as_deref().is_none_or(|s| l.state.eq_ignore_ascii_case(s)))
            .filter(|l| needle.as_deref().is_none_or(|n| matches_search(l, n)))
            .collect())
    }
}

fn matches_search(loc: &Location, needle: &str) -> bool {
    [&loc.name, &loc.city, &loc.state, &loc.zip_code, &loc.address]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based.
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Slice `items` into 1-based pages. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total = items.len();
    let start = (page - 1).saturating_mul(per_page).min(total);
    let end = start.saturating_add(per_page).min(total);

    Page {
        items: &items[start..end],
        page,
        per_page,
        total,
        total_pages: total.div_ceil(per_page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn book() -> LocationBook {
        let yaml = r#"
locations:
  - { id: a, name: Uptown, city: Denver, state: CO, zipCode: "80202", address: 1 Main St }
  - { id: b, name: Pearl Street, city: Boulder, state: CO, zipCode: "80302" }
  - { id: c, name: South Congress, city: Austin, state: TX, zipCode: "78704" }
groups:
  - { name: front-range, locationIds: [a, b] }
"#;
        serde_yaml::from_str(yaml).unwrap()
    }

    fn ids(locs: &[&Location]) -> Vec<String> {
        locs.iter().map(|l| l.id.clone()).collect()
    }

    #[rstest]
    #[case(Some("denver"), None, None, &["a"])]
    #[case(Some("80"), None, None, &["a", "b"])]
    #[case(Some("main st"), None, None, &["a"])]
    #[case(None, Some("co"), None, &["a", "b"])]
    #[case(None, Some("TX"), None, &["c"])]
    #[case(None, None, Some("front-range"), &["a", "b"])]
    #[case(Some("pearl"), Some("CO"), Some("front-range"), &["b"])]
    #[case(None, None, None, &["a", "b", "c"])]
    fn test_query_filters(
        #[case] search: Option<&str>,
        #[case] state: Option<&str>,
        #[case] group: Option<&str>,
        #[case] expected: &[&str],
    ) {
        let q = LocationQuery {
            search: search.map(String::from),
            state: state.map(String::from),
            group: group.map(String::from),
        };
        let b = book();
        assert_eq!(ids(&q.apply(&b).unwrap()), expected);
    }

    #[test]
    fn test_query_unknown_group() {
        let q = LocationQuery { group: Some("nope".into()), ..Default::default() };
        assert!(matches!(q.apply(&book()), Err(LocationError::UnknownGroup(_))));
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=7).collect();

        let p = paginate(&items, 1, 3);
        assert_eq!(p.items, &[1, 2, 3]);
        assert_eq!(p.total, 7);
        assert_eq!(p.total_pages, 3);

        let p = paginate(&items, 3, 3);
        assert_eq!(p.items, &[7]);

        let p = paginate(&items, 4, 3);
        assert!(p.items.is_empty());
        assert_eq!(p.page, 4);
    }

    #[test]
    fn test_paginate_clamps_zero() {
        let items = ["x", "y"];
        let p = paginate(&items, 0, 0);
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 1);
        assert_eq!(p.items, &["x"]);
        assert_eq!(paginate::<u8>(&[], 1, 10).total_pages, 0);
    }
}
