//! Application-status tracker.

use serde::{Deserialize, Serialize};

use crate::catalog::mock_catalog;
use crate::JobPosting;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    ApplicationSubmitted,
    RecruiterViewed,
    UnderReview,
    Shortlisted,
}

impl ApplicationStatus {
    pub const STEPS: usize = 4;

    /// Unknown labels fall back to the first step.
    pub fn parse(label: &str) -> Self {
        match label {
            "recruiter_viewed" => Self::RecruiterViewed,
            "under_review" => Self::UnderReview,
            "shortlisted" => Self::Shortlisted,
            _ => Self::ApplicationSubmitted,
        }
    }

    pub fn step(self) -> usize {
        match self {
            Self::ApplicationSubmitted => 1,
            Self::RecruiterViewed => 2,
            Self::UnderReview => 3,
            Self::Shortlisted => 4,
        }
    }

    pub fn progress_percent(self) -> usize {
        self.step() * 100 / Self::STEPS
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ApplicationSubmitted => "Application Submitted",
            Self::RecruiterViewed => "Recruiter Viewed",
            Self::UnderReview => "Under Review",
            Self::Shortlisted => "Shortlisted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job: JobPosting,
    pub status: ApplicationStatus,
    pub applied_date: String,
    pub last_update: String,
    pub description: String,
}

impl Application {
    pub fn progress_percent(&self) -> usize {
        self.status.progress_percent()
    }
}

pub fn mock_applications() -> Vec<Application> {
    let catalog = mock_catalog();
    let description = "We have a Great Job Opportunity with a leading Indian MNC into \
                       Manufacturing of Industrial Mineral & Specialty Chemicals for Andhra.";
    [
        ("1", 0, "under_review", "5 days ago", "3 days ago"),
        ("2", 1, "recruiter_viewed", "7 days ago", "2 days ago"),
        ("3", 2, "application_submitted", "10 days ago", "10 days ago"),
    ]
    .into_iter()
    .filter_map(|(id, job_index, status, applied, updated)| {
        catalog.get(job_index).map(|job| Application {
            id: id.to_string(),
            job: job.clone(),
            status: ApplicationStatus::parse(status),
            applied_date: applied.to_string(),
            last_update: updated.to_string(),
            description: description.to_string(),
        })
    })
    .collect()
}
