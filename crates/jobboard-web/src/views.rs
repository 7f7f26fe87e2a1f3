//! Askama views over the filtering engine.

use askama::Template;
use jobboard_core::{groups, AdvancedFilterState, JobFilterEngine, JobPosting, Pager};

#[derive(Debug, Clone)]
pub struct JobCard {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub experience: String,
    pub salary: String,
    pub skills_text: String,
    pub posted_date: String,
}

impl From<&JobPosting> for JobCard {
    fn from(job: &JobPosting) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            experience: job.experience.clone(),
            salary: job.salary.clone(),
            skills_text: if job.skills.is_empty() {
                "none".to_string()
            } else {
                job.skills.join(", ")
            },
            posted_date: job.posted_date.clone(),
        }
    }
}

/// A category chip. Submitting a selected chip clears the category.
#[derive(Debug, Clone)]
pub struct CategoryChip {
    pub label: String,
    pub count: usize,
    pub selected: bool,
    pub target: String,
}

#[derive(Debug, Clone)]
pub struct PageLink {
    pub number: usize,
    pub current: bool,
}

/// Sidebar checkbox groups: (group key, title, [(option key, label)]).
const SIDEBAR_GROUPS: [(&str, &str, &[(&str, &str)]); 4] = [
    (
        groups::WORKING_SCHEDULE,
        "Working Schedule",
        &[("fullTime", "Full Time"), ("partTime", "Part Time"), ("contract", "Contract")],
    ),
    (
        groups::EMPLOYMENT_TYPE,
        "Employment Type",
        &[("permanent", "Permanent"), ("temporary", "Temporary")],
    ),
    (
        groups::COMPANY_TYPE,
        "Company Type",
        &[("corporate", "Corporate"), ("startup", "Startup"), ("agency", "Agency")],
    ),
    (
        groups::INDUSTRY,
        "Industry",
        &[
            ("tech", "Tech"),
            ("finance", "Finance"),
            ("healthcare", "Healthcare"),
            ("education", "Education"),
        ],
    ),
];

#[derive(Debug, Clone)]
pub struct FilterOption {
    /// Form field name, `<group>.<option>`.
    pub field: String,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct FilterGroup {
    pub title: &'static str,
    pub options: Vec<FilterOption>,
}

fn sidebar_groups(filters: &AdvancedFilterState) -> Vec<FilterGroup> {
    SIDEBAR_GROUPS
        .into_iter()
        .map(|(group, title, options)| FilterGroup {
            title,
            options: options
                .iter()
                .map(|&(option, label)| FilterOption {
                    field: format!("{group}.{option}"),
                    label,
                    checked: filters
                        .group(group)
                        .and_then(|toggles| toggles.get(option))
                        .copied()
                        .unwrap_or(false),
                })
                .collect(),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct JobsPageTemplate {
    pub heading: String,
    pub filtered_count: usize,
    pub search_term: String,
    pub selected_category: String,
    pub filters_json: String,
    pub chips: Vec<CategoryChip>,
    pub sidebar: Vec<FilterGroup>,
    /// Any of search, category or filters is set.
    pub can_reset: bool,
    pub jobs: Vec<JobCard>,
    pub pages: Vec<PageLink>,
    pub show_pagination: bool,
    pub previous_page: usize,
    pub next_page: usize,
}

impl JobsPageTemplate {
    pub fn from_engine(engine: &JobFilterEngine, filters_json: String) -> Self {
        let selected = engine.selected_category();
        let chips = engine
            .category_counts()
            .into_iter()
            .map(|c| {
                let label = c.category.label().to_string();
                let is_selected = label == selected;
                CategoryChip {
                    target: if is_selected { String::new() } else { label.clone() },
                    label,
                    count: c.count,
                    selected: is_selected,
                }
            })
            .collect();
        let pager = Pager::new(engine.page_size());
        let current = engine.current_page();
        let total = engine.total_pages();
        Self {
            heading: engine.heading(),
            filtered_count: engine.result_count(),
            search_term: engine.search_term().to_string(),
            selected_category: selected.to_string(),
            filters_json,
            chips,
            sidebar: sidebar_groups(&engine.query().advanced_filters),
            can_reset: !engine.query().is_empty(),
            jobs: engine.current_jobs().iter().map(JobCard::from).collect(),
            pages: (1..=total)
                .map(|number| PageLink {
                    number,
                    current: number == current,
                })
                .collect(),
            show_pagination: engine.needs_pagination(),
            previous_page: pager.previous(current),
            next_page: pager.next(current, total),
        }
    }
}

#[derive(Template)]
#[template(path = "job_detail.html")]
pub struct JobDetailTemplate {
    pub job: JobCard,
}
