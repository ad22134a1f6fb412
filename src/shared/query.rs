//! List Query State
//!
//! The `{search, sort, order, page, limit}` tuple that drives `GET /movies/list`.
//! The transitions here are pure; the list controller decides when to apply
//! them and when to fetch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default number of movies per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Field the server sorts by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    /// Server default ordering
    #[default]
    None,
    Rating,
    Year,
    RunTime,
}

impl SortField {
    pub const ALL: [SortField; 4] = [SortField::None, SortField::Rating, SortField::Year, SortField::RunTime];

    /// Value of the `sort` query parameter, if any
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            SortField::None => None,
            SortField::Rating => Some("rating"),
            SortField::Year => Some("year"),
            SortField::RunTime => Some("runTime"),
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            SortField::None => "None",
            SortField::Rating => "Rating",
            SortField::Year => "Year",
            SortField::RunTime => "Run Time",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Query state of the movie list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub sort: SortField,
    pub order: SortOrder,
    /// 1-based
    pub page: u32,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::with_limit(DEFAULT_PAGE_SIZE)
    }
}

impl ListQuery {
    /// Default query with a custom page size
    pub fn with_limit(limit: u32) -> Self {
        Self {
            search: String::new(),
            sort: SortField::None,
            order: SortOrder::Desc,
            page: 1,
            limit: limit.max(1),
        }
    }

    /// A changed sort field restarts from page 1 in descending order
    pub fn apply_sort(&mut self, field: SortField) {
        self.sort = field;
        self.order = SortOrder::Desc;
        self.page = 1;
    }

    /// Flip the direction and restart from page 1
    pub fn toggle_order(&mut self) {
        self.order = self.order.flipped();
        self.page = 1;
    }

    /// Move to `page`, leaving search and sort untouched
    pub fn apply_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// A settled search restarts from page 1
    pub fn settle_search(&mut self) {
        self.page = 1;
    }

    /// Query string pairs for `GET /movies/list`
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("search", self.search.clone())];
        if let Some(sort) = self.sort.as_param() {
            pairs.push(("sort", sort.to_string()));
        }
        pairs.push(("order", self.order.as_param().to_string()));
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}
