//! List view state
//!
//! Current page, sort and debounced search for the two list screens. The
//! rows themselves are always re-derived from the store.

use std::time::{Duration, Instant};

use crate::domain::entities::{Employee, Role};
use crate::domain::services::{
    clamp_page, employee_page, role_page, total_pages, EmployeeQuery, Page, DEFAULT_PAGE_SIZE,
};
use crate::domain::value_objects::{SortKey, SortSpec};

use super::debounce::{Debouncer, SEARCH_DEBOUNCE_MS};

/// Current page of a list, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to `page` if it lies in `1..=total_pages`; otherwise stay put
    pub fn go_to(&mut self, page: usize, total_items: usize) -> bool {
        if page < 1 || page > total_pages(total_items, self.page_size) {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next(&mut self, total_items: usize) -> bool {
        self.go_to(self.page + 1, total_items)
    }

    pub fn prev(&mut self, total_items: usize) -> bool {
        self.page > 1 && self.go_to(self.page - 1, total_items)
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Move to `page`, pulled into range; returns the page landed on
    pub fn go_to_nearest(&mut self, page: usize, total_items: usize) -> usize {
        self.page = clamp_page(page, total_items, self.page_size);
        self.page
    }

    /// Pull the page back after the list shrank
    pub fn clamp(&mut self, total_items: usize) {
        self.page = clamp_page(self.page, total_items, self.page_size);
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Employee list: search box, sortable headers and pager
#[derive(Debug, Clone)]
pub struct EmployeeListState {
    search: Debouncer<String>,
    sort: Option<SortSpec>,
    pager: Pager,
}

impl EmployeeListState {
    pub fn new(page_size: usize, debounce: Duration) -> Self {
        Self {
            search: Debouncer::new(String::new(), debounce),
            sort: None,
            pager: Pager::new(page_size),
        }
    }

    /// Search box keystroke; the term commits after the quiet window
    pub fn type_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search.input(text.into(), now);
    }

    /// Advance the debounce timer. A newly committed term returns to page 1.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.search.poll(now);
        if changed {
            self.pager.reset();
        }
        changed
    }

    /// Commit the search term without waiting
    pub fn submit_search(&mut self) -> bool {
        let changed = self.search.flush();
        if changed {
            self.pager.reset();
        }
        changed
    }

    pub fn search(&self) -> &str {
        self.search.committed()
    }

    /// Header click: same key flips the direction, another key starts ascending
    pub fn sort_by(&mut self, key: SortKey) -> SortSpec {
        let spec = SortSpec::clicked(self.sort, key);
        self.sort = Some(spec);
        spec
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn go_to_page(&mut self, page: usize, employees: &[Employee]) -> bool {
        let total = self.query().matching(employees);
        self.pager.go_to(page, total)
    }

    /// Jump to `page`, landing on the first or last page when out of range
    pub fn go_to_nearest_page(&mut self, page: usize, employees: &[Employee]) -> usize {
        let total = self.query().matching(employees);
        self.pager.go_to_nearest(page, total)
    }

    /// Quiet window before a typed search term is committed
    pub fn debounce(&self) -> Duration {
        self.search.delay()
    }

    pub fn query(&self) -> EmployeeQuery {
        EmployeeQuery {
            search: self.search.committed().clone(),
            sort: self.sort,
            page: self.pager.page(),
            page_size: self.pager.page_size(),
        }
    }

    /// Rows to render, with the page pulled back if the filter shrank the list
    pub fn view<'a>(&mut self, employees: &'a [Employee]) -> Page<&'a Employee> {
        let total = self.query().matching(employees);
        self.pager.clamp(total);
        employee_page(employees, &self.query())
    }
}

impl Default for EmployeeListState {
    fn default() -> Self {
        Self::new(
            DEFAULT_PAGE_SIZE,
            Duration::from_millis(SEARCH_DEBOUNCE_MS),
        )
    }
}

/// Role list: pager only
#[derive(Debug, Clone, Default)]
pub struct RoleListState {
    pager: Pager,
}

impl RoleListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            pager: Pager::new(page_size),
        }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn go_to_page(&mut self, page: usize, roles: &[Role]) -> bool {
        self.pager.go_to(page, roles.len())
    }

    pub fn go_to_nearest_page(&mut self, page: usize, roles: &[Role]) -> usize {
        self.pager.go_to_nearest(page, roles.len())
    }

    pub fn view<'a>(&mut self, roles: &'a [Role]) -> Page<&'a Role> {
        self.pager.clamp(roles.len());
        role_page(roles, self.pager.page(), self.pager.page_size())
    }
}
