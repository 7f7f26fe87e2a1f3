use jobboard_core::predicates::{matches_category, rule_for};
use jobboard_core::{groups, mock_catalog, AdvancedFilterState, Category, JobFilterEngine, JobPosting};

fn titles(jobs: &[JobPosting]) -> Vec<&str> {
    jobs.iter().map(|j| j.title.as_str()).collect()
}

fn ids(jobs: &[JobPosting]) -> Vec<&str> {
    jobs.iter().map(|j| j.id.as_str()).collect()
}

#[test]
fn no_filters_is_identity() {
    let catalog = mock_catalog();
    let engine = JobFilterEngine::new(catalog.clone(), 6);
    assert_eq!(engine.filtered_jobs(), catalog.as_slice());
}

#[test]
fn twelve_postings_split_across_two_pages() {
    let mut engine = JobFilterEngine::new(mock_catalog(), 6);
    assert_eq!(engine.total_pages(), 2);
    assert_eq!(ids(engine.current_jobs()), vec!["1", "2", "3", "4", "5", "6"]);
    engine.set_current_page(2);
    assert_eq!(ids(engine.current_jobs()), vec!["7", "8", "9", "10", "11", "12"]);
}

#[test]
fn react_search_finds_frontend_and_skips_hr() {
    let mut engine = JobFilterEngine::new(mock_catalog(), 6);
    engine.set_search_term("react");
    let found = titles(engine.filtered_jobs());
    assert!(found.contains(&"Frontend Developer"));
    assert!(!found.contains(&"HR Manager"));
    assert_eq!(found, vec!["Frontend Developer"]);
}

#[test]
fn text_search_is_sound_and_complete() {
    let catalog = mock_catalog();
    for term in ["google", "GOOGLE", "data", "er", "seo", "zzz", "o"] {
        let mut engine = JobFilterEngine::new(catalog.clone(), 6);
        engine.set_search_term(term);
        let needle = term.to_lowercase();
        let expected: Vec<&JobPosting> = catalog
            .iter()
            .filter(|j| {
                j.title.to_lowercase().contains(&needle)
                    || j.company.to_lowercase().contains(&needle)
                    || j.skills.iter().any(|s| s.to_lowercase().contains(&needle))
            })
            .collect();
        let actual: Vec<&JobPosting> = engine.filtered_jobs().iter().collect();
        assert_eq!(actual, expected, "search term {term:?}");
    }
}

#[test]
fn repeated_search_is_idempotent() {
    let mut once = JobFilterEngine::new(mock_catalog(), 6);
    once.set_search_term("manager");
    let mut twice = JobFilterEngine::new(mock_catalog(), 6);
    twice.set_search_term("manager");
    twice.set_search_term("manager");
    assert_eq!(once.filtered_jobs(), twice.filtered_jobs());
}

#[test]
fn designer_category_matches_title_or_design_tools() {
    let mut engine = JobFilterEngine::new(mock_catalog(), 6);
    engine.set_selected_category("Designer");
    assert_eq!(
        titles(engine.filtered_jobs()),
        vec!["Senior UI/UX Designer", "Graphic Designer"]
    );
}

#[test]
fn every_category_is_an_ordered_subsequence_of_the_catalog() {
    let catalog = mock_catalog();
    for category in Category::ALL {
        let mut engine = JobFilterEngine::new(catalog.clone(), 6);
        engine.set_selected_category(category.label());
        let expected: Vec<&JobPosting> = catalog
            .iter()
            .filter(|j| rule_for(category).matches(j))
            .collect();
        let actual: Vec<&JobPosting> = engine.filtered_jobs().iter().collect();
        assert_eq!(actual, expected, "category {category}");
        assert!(actual.iter().all(|j| matches_category(j, category.label())));
    }
}

#[test]
fn category_expectations_on_mock_data() {
    let cases = [
        ("HR", vec!["5"]),
        ("Developer", vec!["2", "3"]),
        ("SEO", vec!["7", "11"]),
        ("Marketing", vec!["8"]),
        ("Data Entry", vec!["6", "9"]),
    ];
    for (label, expected) in cases {
        let mut engine = JobFilterEngine::new(mock_catalog(), 6);
        engine.set_selected_category(label);
        assert_eq!(ids(engine.filtered_jobs()), expected, "category {label}");
    }
}

#[test]
fn full_time_toggle_excludes_part_time_jobs() {
    let mut engine = JobFilterEngine::new(mock_catalog(), 6);
    engine.set_active_filters(
        AdvancedFilterState::new().with_toggle(groups::WORKING_SCHEDULE, "fullTime", true),
    );
    assert_eq!(ids(engine.filtered_jobs()), vec!["1", "4", "6", "9", "10", "12"]);
    assert!(engine
        .filtered_jobs()
        .iter()
        .all(|j| j.job_type.to_lowercase().contains("full-time")));
}

#[test]
fn contract_toggle_on_mock_data_yields_no_results() {
    let mut engine = JobFilterEngine::new(mock_catalog(), 6);
    engine.set_current_page(2);
    engine.set_active_filters(
        AdvancedFilterState::new().with_toggle(groups::WORKING_SCHEDULE, "contract", true),
    );
    assert!(engine.filtered_jobs().is_empty());
    assert_eq!(engine.total_pages(), 0);
    assert_eq!(engine.current_page(), 1);
    assert!(engine.current_jobs().is_empty());
}

#[test]
fn dimensions_compose_with_and() {
    let mut engine = JobFilterEngine::new(mock_catalog(), 6);
    engine.set_search_term("data");
    engine.set_selected_category("Data Entry");
    assert_eq!(ids(engine.filtered_jobs()), vec!["6", "9"]);

    engine.set_active_filters(
        AdvancedFilterState::new().with_toggle(groups::SKILLS, "typing", true),
    );
    assert_eq!(ids(engine.filtered_jobs()), vec!["9"]);
}

#[test]
fn pagination_invariants_hold_for_many_page_sizes() {
    let catalog = mock_catalog();
    for page_size in 1..=13 {
        let mut engine = JobFilterEngine::new(catalog.clone(), page_size);
        let total = engine.total_pages();
        assert_eq!(total, catalog.len().div_ceil(page_size));

        let mut rebuilt = Vec::new();
        for page in 1..=total {
            engine.set_current_page(page as i64);
            assert!(engine.current_jobs().len() <= page_size);
            rebuilt.extend_from_slice(engine.current_jobs());
        }
        assert_eq!(rebuilt, catalog);
    }
}
