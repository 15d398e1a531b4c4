//! Filter State
//!
//! Mirrors the task list filter controls into URL query parameters.

use crate::query::QueryString;

/// One filter dimension understood by the task list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Status,
    Priority,
    Project,
    Sort,
}

impl FilterField {
    /// Emission order of the query string
    pub const ALL: [FilterField; 5] = [
        FilterField::Search,
        FilterField::Status,
        FilterField::Priority,
        FilterField::Project,
        FilterField::Sort,
    ];

    /// Query parameter (and form control) name
    pub fn param(&self) -> &'static str {
        match self {
            FilterField::Search => "search",
            FilterField::Status => "status",
            FilterField::Priority => "priority",
            FilterField::Project => "project_id",
            FilterField::Sort => "sort",
        }
    }
}

/// Placeholder the server renders for an unset value
const NONE_PLACEHOLDER: &str = "None";

fn canonical(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NONE_PLACEHOLDER {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Canonical filter tuple; unset fields are `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub project_id: Option<String>,
    pub sort: Option<String>,
}

impl FilterState {
    /// Snapshot every control through `read`; absent controls count as unset
    pub fn from_controls(read: impl Fn(FilterField) -> Option<String>) -> Self {
        let mut state = Self::default();
        for field in FilterField::ALL {
            if let Some(raw) = read(field) {
                state.set(field, &raw);
            }
        }
        state
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: FilterField, raw: &str) {
        *self.slot_mut(field) = canonical(raw);
    }

    pub fn query(&self) -> QueryString {
        let mut query = QueryString::new();
        for field in FilterField::ALL {
            if let Some(value) = self.get(field) {
                query.append(field.param(), value);
            }
        }
        query
    }

    /// Same path with a freshly built query string
    pub fn navigation_url(&self, path: &str) -> String {
        self.query().attach_to(path)
    }

    fn slot(&self, field: FilterField) -> &Option<String> {
        match field {
            FilterField::Search => &self.search,
            FilterField::Status => &self.status,
            FilterField::Priority => &self.priority,
            FilterField::Project => &self.project_id,
            FilterField::Sort => &self.sort,
        }
    }

    fn slot_mut(&mut self, field: FilterField) -> &mut Option<String> {
        match field {
            FilterField::Search => &mut self.search,
            FilterField::Status => &mut self.status,
            FilterField::Priority => &mut self.priority,
            FilterField::Project => &mut self.project_id,
            FilterField::Sort => &mut self.sort,
        }
    }
}
