//! Property tests for employee filtering, sorting and pagination.

use proptest::prelude::*;

use roster::domain::services::listing::filter_employees;
use roster::domain::services::{clamp_page, employee_page, paginate, total_pages, EmployeeQuery};
use roster::domain::value_objects::{SortKey, SortSpec};
use roster::Employee;

fn employees() -> impl Strategy<Value = Vec<Employee>> {
    let name = proptest::string::string_regex("[A-Za-z]{1,8}( [A-Za-z]{1,8})?").unwrap();
    proptest::collection::vec(name, 0..25).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Employee::new(i as u32 + 1, name))
            .collect()
    })
}

fn sort() -> impl Strategy<Value = Option<SortSpec>> {
    prop_oneof![
        Just(None),
        Just(Some(SortSpec::asc(SortKey::Id))),
        Just(Some(SortSpec::desc(SortKey::Id))),
        Just(Some(SortSpec::asc(SortKey::Name))),
        Just(Some(SortSpec::desc(SortKey::Name))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Walking every page visits each matching employee exactly once.
    #[test]
    fn property_pages_cover_filtered_list(
        employees in employees(),
        search in "[a-zA-Z]{0,2}",
        sort in sort(),
        page_size in 1usize..7,
    ) {
        let matching = filter_employees(&employees, &search).len();
        let pages = total_pages(matching, page_size);

        let mut seen: Vec<u32> = Vec::new();
        for page in 1..=pages {
            let query = EmployeeQuery { search: search.clone(), sort, page, page_size };
            let rows = employee_page(&employees, &query);
            prop_assert!(!rows.items.is_empty());
            prop_assert!(rows.items.len() <= page_size);
            prop_assert_eq!(rows.total_items, matching);
            seen.extend(rows.items.iter().map(|e| e.id));
        }

        prop_assert_eq!(seen.len(), matching);
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), matching);
    }

    /// PROPERTY: Every listed name contains the search text, ignoring case.
    #[test]
    fn property_filter_is_case_insensitive_substring(
        employees in employees(),
        search in "[a-zA-Z]{0,3}",
    ) {
        let needle = search.to_lowercase();
        let matched = filter_employees(&employees, &search);
        for employee in &employees {
            let expected = employee.name.to_lowercase().contains(&needle);
            let listed = matched.iter().any(|e| e.id == employee.id);
            prop_assert_eq!(expected, listed, "{}", employee.name);
        }
    }

    /// PROPERTY: Name sort is ordered ignoring case; descending is the reverse order.
    #[test]
    fn property_name_sort_is_ordered(employees in employees()) {
        let query = EmployeeQuery {
            sort: Some(SortSpec::asc(SortKey::Name)),
            page_size: employees.len().max(1),
            ..EmployeeQuery::default()
        };
        let asc = employee_page(&employees, &query);
        for pair in asc.items.windows(2) {
            prop_assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
        }

        let query = EmployeeQuery { sort: Some(SortSpec::desc(SortKey::Name)), ..query };
        let desc = employee_page(&employees, &query);
        for pair in desc.items.windows(2) {
            prop_assert!(pair[0].name.to_lowercase() >= pair[1].name.to_lowercase());
        }
    }

    /// PROPERTY: A clamped page is always in range and never empty for a non-empty list.
    #[test]
    fn property_clamped_page_in_range(
        page in 0usize..50,
        total in 0usize..60,
        page_size in 1usize..10,
    ) {
        let clamped = clamp_page(page, total, page_size);
        prop_assert!(clamped >= 1);
        prop_assert!(clamped <= total_pages(total, page_size).max(1));

        let items: Vec<usize> = (0..total).collect();
        let slice = paginate(&items, clamped, page_size);
        prop_assert_eq!(slice.items.is_empty(), total == 0);
    }
}
