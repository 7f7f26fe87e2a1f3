//! Company directory with name/location search and an industry facet.

use serde::{Deserialize, Serialize};

use crate::pager::Pager;

pub const ALL_INDUSTRIES: &str = "All Industries";

pub const INDUSTRIES: [&str; 9] = [
    ALL_INDUSTRIES,
    "Technology",
    "Software",
    "Entertainment",
    "Automotive",
    "Cloud Computing",
    "Social Media",
    "Finance",
    "Healthcare",
];

pub const COMPANIES_PER_PAGE: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: u32,
    pub name: String,
    pub industry: String,
    pub location: String,
    pub employees: String,
    pub jobs: u32,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyPage {
    pub companies: Vec<Company>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
    pager: Pager,
}

impl CompanyDirectory {
    pub fn new(companies: Vec<Company>) -> Self {
        Self {
            companies,
            pager: Pager::new(COMPANIES_PER_PAGE),
        }
    }

    pub fn mock() -> Self {
        Self::new(mock_companies())
    }

    /// `industry` of "" or "All Industries" disables the facet.
    pub fn search(&self, term: &str, industry: &str, page: i64) -> CompanyPage {
        let needle = term.to_lowercase();
        let any_industry = industry.is_empty() || industry == ALL_INDUSTRIES;
        let matched: Vec<Company> = self
            .companies
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle) || c.location.to_lowercase().contains(&needle)
            })
            .filter(|c| any_industry || c.industry == industry)
            .cloned()
            .collect();

        let total_pages = self.pager.total_pages(matched.len());
        let page = self.pager.clamp(page, total_pages);
        CompanyPage {
            companies: self.pager.slice(&matched, page).to_vec(),
            page,
            total_pages,
            total: matched.len(),
        }
    }
}

fn company(
    id: u32,
    name: &str,
    industry: &str,
    location: &str,
    employees: &str,
    jobs: u32,
    rating: f32,
) -> Company {
    Company {
        id,
        name: name.to_string(),
        industry: industry.to_string(),
        location: location.to_string(),
        employees: employees.to_string(),
        jobs,
        rating,
    }
}

pub fn mock_companies() -> Vec<Company> {
    vec![
        company(1, "Amazon", "Technology", "Seattle, WA", "1,000,000+", 123, 4.2),
        company(2, "Microsoft", "Software", "Redmond, WA", "180,000+", 85, 4.5),
        company(3, "Google", "Technology", "Mountain View, CA", "150,000+", 92, 4.6),
        company(4, "Apple", "Technology", "Cupertino, CA", "160,000+", 78, 4.3),
        company(5, "Facebook", "Social Media", "Menlo Park, CA", "70,000+", 65, 4.4),
        company(6, "Netflix", "Entertainment", "Los Gatos, CA", "12,000+", 42, 4.3),
        company(7, "Tesla", "Automotive", "Palo Alto, CA", "100,000+", 56, 4.0),
        company(8, "Adobe", "Software", "San Jose, CA", "25,000+", 38, 4.4),
        company(9, "Salesforce", "Cloud Computing", "San Francisco, CA", "70,000+", 47, 4.5),
    ]
}
