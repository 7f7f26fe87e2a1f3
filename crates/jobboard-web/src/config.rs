use std::path::PathBuf;

use jobboard_core::DEFAULT_PAGE_SIZE;
use jobboard_storage::CatalogSource;

/// Runtime settings read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Catalog file path or URL; unset means the built-in catalog.
    pub catalog: Option<String>,
    pub page_size: usize,
    pub web_port: u16,
    pub resume_dir: PathBuf,
    pub public_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            page_size: DEFAULT_PAGE_SIZE,
            web_port: 8000,
            resume_dir: PathBuf::from("./resumes"),
            public_base_url: "http://localhost:8000/api/resumes".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let web_port: u16 = std::env::var("JOBBOARD_WEB_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.web_port);
        Self {
            catalog: std::env::var("JOBBOARD_CATALOG").ok().filter(|v| !v.trim().is_empty()),
            page_size: std::env::var("JOBBOARD_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.page_size),
            web_port,
            resume_dir: std::env::var("JOBBOARD_RESUME_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.resume_dir),
            public_base_url: std::env::var("JOBBOARD_PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{web_port}/api/resumes")),
        }
    }

    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::from_setting(self.catalog.as_deref())
    }
}
