//! Core domain model, filter predicates and the paginated filtering engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

pub mod applications;
pub mod catalog;
pub mod companies;
pub mod engine;
pub mod pager;
pub mod predicates;

pub use catalog::{mock_catalog, validate_catalog, CatalogError};
pub use engine::{CategoryCount, JobFilterEngine};
pub use pager::Pager;

pub const CRATE_NAME: &str = "jobboard-core";

/// Page size used by the job listing when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// A single job posting from the catalog. Every field is display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Employment/remote mode label such as "Full-time remote".
    #[serde(rename = "type", default)]
    pub job_type: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub posted_date: String,
}

/// Closed set of job categories shown as chips above the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "HR")]
    Hr,
    Developer,
    Designer,
    #[serde(rename = "SEO")]
    Seo,
    Marketing,
    #[serde(rename = "Data Entry")]
    DataEntry,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Hr,
        Category::Developer,
        Category::Designer,
        Category::Seo,
        Category::Marketing,
        Category::DataEntry,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Hr => "HR",
            Category::Developer => "Developer",
            Category::Designer => "Designer",
            Category::Seo => "SEO",
            Category::Marketing => "Marketing",
            Category::DataEntry => "Data Entry",
        }
    }

    /// Exact label lookup. Unrecognized labels return `None`.
    pub fn parse(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Names of the toggle groups the filter sidebar publishes.
pub mod groups {
    pub const WORKING_SCHEDULE: &str = "workingSchedule";
    pub const EMPLOYMENT_TYPE: &str = "employmentType";
    pub const COMPANY_TYPE: &str = "companyType";
    pub const INDUSTRY: &str = "industry";
    pub const EDUCATION: &str = "education";
    pub const SKILLS: &str = "skills";
    pub const DISTANCE: &str = "distance";
}

/// Option name -> checked.
pub type ToggleGroup = BTreeMap<String, bool>;

/// Snapshot of the filter sidebar.
///
/// The sidebar always pushes a complete snapshot; the engine replaces its
/// previous value wholesale and never merges. Conversion from JSON is total:
/// missing groups are empty, non-boolean toggles are unchecked and unknown
/// scalar fields are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "JsonValue", into = "JsonValue")]
pub struct AdvancedFilterState {
    groups: BTreeMap<String, ToggleGroup>,
    distance: Option<String>,
}

impl AdvancedFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toggle(mut self, group: &str, option: &str, active: bool) -> Self {
        self.set_toggle(group, option, active);
        self
    }

    pub fn set_toggle(&mut self, group: &str, option: &str, active: bool) {
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(option.to_string(), active);
    }

    pub fn with_distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = Some(distance.into());
        self
    }

    pub fn distance(&self) -> Option<&str> {
        self.distance.as_deref()
    }

    pub fn group(&self, group: &str) -> Option<&ToggleGroup> {
        self.groups.get(group)
    }

    /// Checked option names of `group`, in key order. Missing groups yield nothing.
    pub fn active_options<'a>(&'a self, group: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.groups
            .get(group)
            .into_iter()
            .flat_map(|options| options.iter())
            .filter(|(_, active)| **active)
            .map(|(name, _)| name.as_str())
    }

    pub fn has_active(&self, group: &str) -> bool {
        self.active_options(group).next().is_some()
    }

    /// True when nothing is checked in any group and no distance is chosen.
    pub fn is_empty(&self) -> bool {
        self.distance.is_none() && self.groups.values().all(|g| g.values().all(|v| !v))
    }
}

impl From<JsonValue> for AdvancedFilterState {
    fn from(value: JsonValue) -> Self {
        let mut state = AdvancedFilterState::default();
        let JsonValue::Object(fields) = value else {
            return state;
        };
        for (key, field) in fields {
            match field {
                JsonValue::Object(options) => {
                    let group = options
                        .into_iter()
                        .map(|(name, v)| (name, v.as_bool().unwrap_or(false)))
                        .collect();
                    state.groups.insert(key, group);
                }
                JsonValue::String(s) if key == groups::DISTANCE => {
                    if !s.is_empty() {
                        state.distance = Some(s);
                    }
                }
                _ => {}
            }
        }
        state
    }
}

impl From<AdvancedFilterState> for JsonValue {
    fn from(state: AdvancedFilterState) -> Self {
        let mut out = serde_json::Map::new();
        for (name, options) in state.groups {
            let options = options
                .into_iter()
                .map(|(k, v)| (k, JsonValue::Bool(v)))
                .collect();
            out.insert(name, JsonValue::Object(options));
        }
        if let Some(distance) = state.distance {
            out.insert(groups::DISTANCE.to_string(), JsonValue::String(distance));
        }
        JsonValue::Object(out)
    }
}

/// The three filter dimensions the engine composes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    #[serde(default)]
    pub search_term: String,
    /// Empty means no category filter.
    #[serde(default)]
    pub selected_category: String,
    #[serde(default)]
    pub advanced_filters: AdvancedFilterState,
}

impl FilterQuery {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.selected_category.is_empty()
            && self.advanced_filters.is_empty()
    }
}
