//! List derivations: filter, sort, paginate
//!
//! Pure functions over the raw collections. Results are recomputed from
//! scratch on every call; the collections are small.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::entities::{Employee, Role};
use crate::domain::value_objects::{SortDirection, SortKey, SortSpec};

/// Rows per page for both lists and the permission matrix
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One page of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number this slice was taken for
    pub page: usize,
    pub page_size: usize,
    /// Items across all pages
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// 1-based row number of the first item on this page
    pub fn first_row_number(&self) -> usize {
        self.page.saturating_sub(1) * self.page_size + 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
        }
    }
}

/// `ceil(total / page_size)`; zero items means zero pages
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Clamp a requested page into `1..=total_pages` (page 1 when the list is empty).
///
/// `paginate` never clamps; callers that track a current page use this after
/// the list shrinks.
pub fn clamp_page(page: usize, total_items: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(total_items, page_size).max(1))
}

/// Slice `[(page-1)*size, page*size)` out of `items`.
///
/// Page 0 and pages past the end yield an empty slice.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let slice = if page == 0 || page_size == 0 {
        &[][..]
    } else {
        let start = (page - 1).saturating_mul(page_size).min(items.len());
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_items: items.len(),
    }
}

/// Employees whose name contains `search`, ignoring case
pub fn filter_employees<'a>(employees: &'a [Employee], search: &str) -> Vec<&'a Employee> {
    let needle = search.to_lowercase();
    employees
        .iter()
        .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort; ties keep their incoming order. `None` leaves the order untouched.
pub fn sort_employees(rows: &mut [&Employee], sort: Option<SortSpec>) {
    let Some(spec) = sort else {
        return;
    };

    rows.sort_by(|a, b| {
        let ordering = compare(a, b, spec.key);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Employee, b: &Employee, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    }
}

/// Parameters for the employee list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeQuery {
    pub search: String,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for EmployeeQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EmployeeQuery {
    /// Number of employees passing the filter, used to clamp the page
    pub fn matching(&self, employees: &[Employee]) -> usize {
        filter_employees(employees, &self.search).len()
    }
}

/// Filter, then sort, then paginate
pub fn employee_page<'a>(employees: &'a [Employee], query: &EmployeeQuery) -> Page<&'a Employee> {
    let mut rows = filter_employees(employees, &query.search);
    sort_employees(&mut rows, query.sort);
    paginate(&rows, query.page, query.page_size)
}

/// Roles in stored order, paginated
pub fn role_page(roles: &[Role], page: usize, page_size: usize) -> Page<&Role> {
    let rows: Vec<&Role> = roles.iter().collect();
    paginate(&rows, page, page_size)
}
