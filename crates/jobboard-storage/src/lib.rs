//! Catalog sources, résumé object storage and the résumé parsing stub.

pub mod catalog;
pub mod notify;
pub mod parser;
pub mod resume;

pub use catalog::{load_catalog, CatalogFetcher, CatalogSource, FetchError, HttpClientConfig};
pub use notify::{Notice, NoticeLevel, Notifier, RecordingNotifier, TracingNotifier};
pub use parser::{parse_resume, ParseError, ParsedResume};
pub use resume::{ResumeEntry, ResumeService, ResumeStore, StoredResume, UploadError};

pub const CRATE_NAME: &str = "jobboard-storage";
