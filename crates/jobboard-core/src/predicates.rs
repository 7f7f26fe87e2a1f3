//! Pure predicates over a single posting. All of them are total: empty
//! fields never match and an inactive dimension always passes.

use crate::{groups, AdvancedFilterState, Category, FilterQuery, JobPosting};

/// How a category rule inspects the skill list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillMatch {
    /// Some skill equals one of the names.
    Exact(&'static [&'static str]),
    /// Some skill contains one of the fragments.
    Contains(&'static [&'static str]),
}

impl SkillMatch {
    pub fn matches(&self, skill: &str) -> bool {
        match self {
            SkillMatch::Exact(names) => names.contains(&skill),
            SkillMatch::Contains(fragments) => fragments.iter().any(|f| skill.contains(f)),
        }
    }
}

/// A category matches when the title contains `title_contains` or any skill
/// satisfies `skills`. Both checks are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: Category,
    pub title_contains: &'static str,
    pub skills: SkillMatch,
}

impl CategoryRule {
    pub fn matches(&self, job: &JobPosting) -> bool {
        job.title.contains(self.title_contains) || job.skills.iter().any(|s| self.skills.matches(s))
    }
}

pub const CATEGORY_RULES: [CategoryRule; 6] = [
    CategoryRule {
        category: Category::Hr,
        title_contains: "HR",
        skills: SkillMatch::Contains(&["Recruitment", "HRIS"]),
    },
    CategoryRule {
        category: Category::Developer,
        title_contains: "Developer",
        skills: SkillMatch::Exact(&["React", "JavaScript", "TypeScript", "Node.js", "Express"]),
    },
    CategoryRule {
        category: Category::Designer,
        title_contains: "Designer",
        skills: SkillMatch::Exact(&["Figma", "Adobe XD", "Sketch", "Photoshop", "Illustrator"]),
    },
    CategoryRule {
        category: Category::Seo,
        title_contains: "SEO",
        skills: SkillMatch::Contains(&["SEO"]),
    },
    CategoryRule {
        category: Category::Marketing,
        title_contains: "Marketing",
        skills: SkillMatch::Contains(&["Marketing"]),
    },
    CategoryRule {
        category: Category::DataEntry,
        title_contains: "Data Entry",
        skills: SkillMatch::Contains(&["Data", "Excel"]),
    },
];

pub fn rule_for(category: Category) -> &'static CategoryRule {
    // CATEGORY_RULES holds one entry per variant, in Category::ALL order.
    &CATEGORY_RULES[Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or_default()]
}

/// Working-schedule toggle (lower-cased) -> fragment looked for in the lower-cased job type.
const SCHEDULE_KEYWORDS: [(&str, &str); 3] = [
    ("fulltime", "full-time"),
    ("parttime", "part-time"),
    ("contract", "contract"),
];

/// Case-insensitive substring search over title, company and skills.
pub fn matches_text(job: &JobPosting, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    job.title.to_lowercase().contains(&needle)
        || job.company.to_lowercase().contains(&needle)
        || job.skills.iter().any(|s| s.to_lowercase().contains(&needle))
}

/// Empty or unrecognized categories do not filter.
pub fn matches_category(job: &JobPosting, selected_category: &str) -> bool {
    match Category::parse(selected_category) {
        Some(category) => rule_for(category).matches(job),
        None => true,
    }
}

pub fn matches_working_schedule(job: &JobPosting, filters: &AdvancedFilterState) -> bool {
    let active: Vec<String> = filters
        .active_options(groups::WORKING_SCHEDULE)
        .map(str::to_lowercase)
        .collect();
    if active.is_empty() {
        return true;
    }
    let job_type = job.job_type.to_lowercase();
    active.iter().any(|toggle| {
        SCHEDULE_KEYWORDS
            .iter()
            .find(|(key, _)| *key == toggle.as_str())
            .is_some_and(|(_, fragment)| job_type.contains(fragment))
    })
}

pub fn matches_skills(job: &JobPosting, filters: &AdvancedFilterState) -> bool {
    let active: Vec<String> = filters
        .active_options(groups::SKILLS)
        .map(str::to_lowercase)
        .collect();
    if active.is_empty() {
        return true;
    }
    job.skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        active.iter().any(|toggle| skill.contains(toggle.as_str()))
    })
}

/// Only the working-schedule and skills groups filter. Employment type,
/// company type, industry, education and distance are carried in the
/// snapshot but have no effect on the result.
pub fn matches_advanced(job: &JobPosting, filters: &AdvancedFilterState) -> bool {
    matches_working_schedule(job, filters) && matches_skills(job, filters)
}

/// AND across dimensions.
pub fn matches_query(job: &JobPosting, query: &FilterQuery) -> bool {
    matches_text(job, &query.search_term)
        && matches_category(job, &query.selected_category)
        && matches_advanced(job, &query.advanced_filters)
}
