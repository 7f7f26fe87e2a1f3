//! Built-in catalog and catalog validation.

use std::collections::HashSet;

use thiserror::Error;

use crate::JobPosting;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("posting at index {index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate posting id {0:?}")]
    DuplicateId(String),
}

/// Ids must be non-empty and unique.
pub fn validate_catalog(jobs: &[JobPosting]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(jobs.len());
    for (index, job) in jobs.iter().enumerate() {
        if job.id.is_empty() {
            return Err(CatalogError::EmptyId { index });
        }
        if !seen.insert(job.id.as_str()) {
            return Err(CatalogError::DuplicateId(job.id.clone()));
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn posting(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    job_type: &str,
    experience: &str,
    salary: &str,
    skills: &[&str],
    posted_date: &str,
) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        job_type: job_type.to_string(),
        experience: experience.to_string(),
        salary: salary.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        posted_date: posted_date.to_string(),
    }
}

/// The twelve demo postings served when no catalog file is configured.
pub fn mock_catalog() -> Vec<JobPosting> {
    vec![
        posting("1", "Senior UI/UX Designer", "Amazon", "Gurgaon (HQ)", "Full-time remote", "3-5 years", "₹ 6-8.5 LPA", &["Figma", "Adobe XD", "Sketch"], "01 May, 2023"),
        posting("2", "Frontend Developer", "Microsoft", "Noida (HQ)", "Part-time remote", "2-4 years", "₹ 5-7.5 LPA", &["React", "JavaScript", "TypeScript"], "02 May, 2023"),
        posting("3", "Backend Developer", "Google", "Bangalore (HQ)", "Hybrid remote", "3-5 years", "₹ 7-9 LPA", &["Node.js", "Express", "MongoDB"], "03 May, 2023"),
        posting("4", "Product Manager", "Apple", "Delhi (HQ)", "Full-time remote", "4-6 years", "₹ 8-12 LPA", &["Product Strategy", "Agile", "Roadmapping"], "04 May, 2023"),
        posting("5", "HR Manager", "Netflix", "Noida (HQ)", "Hybrid remote", "5-8 years", "₹ 9-14 LPA", &["Recruitment", "Employee Relations", "HRIS"], "05 May, 2023"),
        posting("6", "Data Analyst", "Facebook", "Gurgaon (HQ)", "Full-time remote", "2-4 years", "₹ 6-8 LPA", &["SQL", "Excel", "Tableau"], "06 May, 2023"),
        posting("7", "SEO Specialist", "Twitter", "Mumbai (HQ)", "Part-time remote", "2-3 years", "₹ 4-6 LPA", &["SEO Tools", "Google Analytics", "Content Strategy"], "07 May, 2023"),
        posting("8", "Marketing Manager", "Adobe", "Pune (HQ)", "Hybrid remote", "4-6 years", "₹ 7-10 LPA", &["Digital Marketing", "Brand Strategy", "Analytics"], "08 May, 2023"),
        posting("9", "Data Entry Specialist", "Oracle", "Chennai (HQ)", "Full-time remote", "1-2 years", "₹ 3-4.5 LPA", &["Excel", "Data Management", "Typing"], "09 May, 2023"),
        posting("10", "DevOps Engineer", "IBM", "Hyderabad (HQ)", "Full-time remote", "3-5 years", "₹ 7-10 LPA", &["Docker", "Kubernetes", "CI/CD"], "10 May, 2023"),
        posting("11", "Content Writer", "LinkedIn", "Bangalore (HQ)", "Part-time remote", "2-3 years", "₹ 4-6 LPA", &["Copywriting", "Editing", "SEO Writing"], "11 May, 2023"),
        posting("12", "Graphic Designer", "Canva", "Delhi (HQ)", "Full-time remote", "2-4 years", "₹ 5-7 LPA", &["Photoshop", "Illustrator", "InDesign"], "12 May, 2023"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_catalog_is_valid() {
        let jobs = mock_catalog();
        assert_eq!(jobs.len(), 12);
        assert_eq!(validate_catalog(&jobs), Ok(()));
    }

    #[test]
    fn duplicate_and_empty_ids_are_rejected() {
        let mut jobs = mock_catalog();
        jobs[3].id = "1".into();
        assert_eq!(validate_catalog(&jobs), Err(CatalogError::DuplicateId("1".into())));

        jobs[3].id = String::new();
        assert_eq!(validate_catalog(&jobs), Err(CatalogError::EmptyId { index: 3 }));
    }
}
