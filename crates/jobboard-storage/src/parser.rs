//! Résumé parsing stub. Always returns the same sample profile; no document
//! is actually read.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::resume::UploadError;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("File URL is required")]
    MissingFileUrl,
    #[error("resume {0:?} not found")]
    UnknownResume(String),
    #[error(transparent)]
    Upload(#[from] UploadError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    pub personal_details: PersonalDetails,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}

/// `end_date` of `None` means the position is current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub technologies: String,
    pub description: String,
}

pub fn parse_resume(file_url: &str) -> Result<ParsedResume, ParseError> {
    if file_url.trim().is_empty() {
        return Err(ParseError::MissingFileUrl);
    }
    info!(file_url, "parsing resume");
    Ok(sample_profile())
}

fn sample_profile() -> ParsedResume {
    ParsedResume {
        personal_details: PersonalDetails {
            full_name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "+1 555-123-4567".into(),
            location: "New York, USA".into(),
        },
        education: vec![Education {
            institution: "University of Technology".into(),
            degree: "Master of Computer Science".into(),
            start_date: "2018-09-01".into(),
            end_date: Some("2022-06-30".into()),
            description: "Specialized in Artificial Intelligence and Machine Learning".into(),
        }],
        experience: vec![
            Experience {
                company: "Tech Solutions Inc.".into(),
                position: "Software Developer".into(),
                start_date: "2022-07-01".into(),
                end_date: None,
                description: "Developing web applications using React and Node.js. Leading a team of 3 junior developers.".into(),
            },
            Experience {
                company: "Digital Innovations".into(),
                position: "Junior Developer".into(),
                start_date: "2020-05-01".into(),
                end_date: Some("2022-06-30".into()),
                description: "Worked on front-end development with JavaScript and React".into(),
            },
        ],
        skills: ["JavaScript", "React", "Node.js", "TypeScript", "HTML/CSS", "Git", "Docker", "AWS"]
            .into_iter()
            .map(String::from)
            .collect(),
        languages: vec![
            Language {
                language: "English".into(),
                proficiency: "Native".into(),
            },
            Language {
                language: "Spanish".into(),
                proficiency: "Intermediate".into(),
            },
        ],
        projects: vec![
            Project {
                title: "E-commerce Platform".into(),
                technologies: "React, Node.js, MongoDB".into(),
                description: "Developed a full-stack e-commerce platform with payment integration".into(),
            },
            Project {
                title: "Portfolio Website".into(),
                technologies: "HTML, CSS, JavaScript".into(),
                description: "Created a responsive personal portfolio website".into(),
            },
        ],
        summary: "Experienced full-stack developer with 3+ years of experience in web development. Passionate about creating efficient and user-friendly applications.".into(),
    }
}
