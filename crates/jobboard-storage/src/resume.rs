//! Content-addressed résumé storage and the upload workflow around it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};
use uuid::Uuid;

use crate::notify::{Notice, Notifier};
use crate::parser::{parse_resume, ParseError, ParsedResume};

pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// Accepted MIME types and the extension each is stored under.
pub const ALLOWED_CONTENT_TYPES: [(&str, &str); 3] = [
    ("application/pdf", "pdf"),
    ("application/msword", "doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "docx",
    ),
];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported content type {0:?}; upload a PDF, DOC, or DOCX file")]
    InvalidType(String),
    #[error("file is {size} bytes; the limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
    #[error("invalid resume key {0:?}")]
    InvalidKey(String),
    #[error("resume {0:?} not found")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct StoredResume {
    pub key: String,
    pub file_name: String,
    pub content_type: String,
    pub byte_size: usize,
    pub deduplicated: bool,
    pub uploaded_at: DateTime<Utc>,
    pub public_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeEntry {
    pub key: String,
    pub byte_size: u64,
    pub public_url: String,
}

/// Résumé bucket backed by a local directory. Objects are keyed
/// `<sha256>.<ext>` so identical uploads collapse into one object.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    root: PathBuf,
    public_base_url: String,
}

impl ResumeStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    pub fn sha256_hex(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        hex::encode(hasher.finalize())
    }

    /// Checks type and size, returning the storage extension.
    pub fn validate(content_type: &str, size: usize) -> Result<&'static str, UploadError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        let extension = ALLOWED_CONTENT_TYPES
            .iter()
            .find(|(mime, _)| *mime == essence)
            .map(|(_, ext)| *ext)
            .ok_or_else(|| UploadError::InvalidType(content_type.to_string()))?;
        if size > MAX_RESUME_BYTES {
            return Err(UploadError::TooLarge {
                size,
                limit: MAX_RESUME_BYTES,
            });
        }
        Ok(extension)
    }

    pub fn is_valid_key(key: &str) -> bool {
        let Some((hash, ext)) = key.split_once('.') else {
            return false;
        };
        hash.len() == 64
            && hash.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
            && ALLOWED_CONTENT_TYPES.iter().any(|(_, e)| *e == ext)
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, UploadError> {
        if !Self::is_valid_key(key) {
            return Err(UploadError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }

    /// Writes through a temp file and an atomic rename.
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredResume, UploadError> {
        let extension = Self::validate(content_type, bytes.len())?;
        let key = format!("{}.{extension}", Self::sha256_hex(bytes));
        let absolute_path = self.root.join(&key);
        let stored = |deduplicated: bool| StoredResume {
            key: key.clone(),
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            byte_size: bytes.len(),
            deduplicated,
            uploaded_at: Utc::now(),
            public_url: self.public_url(&key),
        };

        fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("creating resume directory {}", self.root.display()))?;

        if fs::try_exists(&absolute_path)
            .await
            .with_context(|| format!("checking resume path {}", absolute_path.display()))?
        {
            info!(%key, "resume already stored");
            return Ok(stored(true));
        }

        let temp_path = self
            .root
            .join(format!(".{}.{}.tmp", Uuid::new_v4(), bytes.len()));
        let file = fs::OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&temp_path)
            .await
            .with_context(|| format!("opening temp resume file {}", temp_path.display()))?;
        fill_temp_file(file, &temp_path, bytes).await?;

        match fs::rename(&temp_path, &absolute_path).await {
            Ok(()) => {
                info!(%key, "resume stored");
                Ok(stored(false))
            }
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                let _ = fs::remove_file(&temp_path).await;
                Ok(stored(true))
            }
            Err(err) => {
                let _ = fs::remove_file(&temp_path).await;
                Err(anyhow::Error::new(err)
                    .context(format!(
                        "renaming temp resume {} -> {}",
                        temp_path.display(),
                        absolute_path.display()
                    ))
                    .into())
            }
        }
    }

    /// Stored objects sorted by key. A missing root is an empty bucket.
    pub async fn list(&self) -> Result<Vec<ResumeEntry>, UploadError> {
        let mut dir = match fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("listing {}", self.root.display()))
                    .into())
            }
        };
        let mut entries = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .with_context(|| format!("listing {}", self.root.display()))?
        {
            let key = entry.file_name().to_string_lossy().to_string();
            if !Self::is_valid_key(&key) {
                continue;
            }
            let metadata = entry
                .metadata()
                .await
                .with_context(|| format!("reading metadata for {key}"))?;
            entries.push(ResumeEntry {
                public_url: self.public_url(&key),
                byte_size: metadata.len(),
                key,
            });
        }
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }

    pub async fn exists(&self, key: &str) -> Result<bool, UploadError> {
        let path = self.path_for(key)?;
        Ok(fs::try_exists(&path)
            .await
            .with_context(|| format!("checking resume path {}", path.display()))?)
    }

    pub async fn read(&self, key: &str) -> Result<Vec<u8>, UploadError> {
        let path = self.path_for(key)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(UploadError::NotFound(key.to_string()))
            }
            Err(err) => Err(anyhow::Error::new(err)
                .context(format!("reading {}", path.display()))
                .into()),
        }
    }

    pub async fn delete(&self, key: &str) -> Result<(), UploadError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(UploadError::NotFound(key.to_string()))
            }
            Err(err) => Err(anyhow::Error::new(err)
                .context(format!("deleting {}", path.display()))
                .into()),
        }
    }
}

/// Upload/delete/parse workflow that reports outcomes through a `Notifier`.
#[derive(Clone)]
pub struct ResumeService {
    store: ResumeStore,
    notifier: Arc<dyn Notifier>,
}

impl ResumeService {
    pub fn new(store: ResumeStore, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &ResumeStore {
        &self.store
    }

    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredResume, UploadError> {
        match self.store.upload(file_name, content_type, bytes).await {
            Ok(stored) => {
                self.notifier.notify(Notice::info(
                    "File uploaded successfully",
                    format!("{file_name} has been uploaded."),
                ));
                Ok(stored)
            }
            Err(err) => {
                warn!(error = %err, file_name, "resume upload rejected");
                self.notifier.notify(upload_failure_notice(&err));
                Err(err)
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<ResumeEntry>, UploadError> {
        self.store.list().await
    }

    pub async fn delete(&self, key: &str) -> Result<(), UploadError> {
        match self.store.delete(key).await {
            Ok(()) => {
                self.notifier
                    .notify(Notice::info("File deleted", "Your resume has been deleted."));
                Ok(())
            }
            Err(err) => {
                self.notifier
                    .notify(Notice::error("Delete failed", err.to_string()));
                Err(err)
            }
        }
    }

    /// Runs the parser against the public URL of a stored résumé.
    pub async fn parse(&self, key: &str) -> Result<ParsedResume, ParseError> {
        let exists = match self.store.exists(key).await {
            Ok(exists) => exists,
            Err(err) => {
                warn!(error = %err, key, "resume lookup failed");
                self.notifier
                    .notify(Notice::error("Parsing failed", err.to_string()));
                return Err(err.into());
            }
        };
        if !exists {
            self.notifier.notify(Notice::error(
                "Parsing failed",
                format!("No stored resume {key}."),
            ));
            return Err(ParseError::UnknownResume(key.to_string()));
        }
        self.notifier.notify(Notice::info(
            "Resume parsing started",
            "Your resume is being analyzed for relevant information.",
        ));
        let parsed = parse_resume(&self.store.public_url(key))?;
        self.notifier.notify(Notice::info(
            "Resume parsed successfully",
            "Your profile has been updated with the resume information.",
        ));
        Ok(parsed)
    }
}

/// Writes `bytes` into a freshly opened temp file. The temp file is removed
/// when the write fails.
async fn fill_temp_file<W: AsyncWrite + Unpin>(
    mut file: W,
    temp_path: &Path,
    bytes: &[u8],
) -> anyhow::Result<()> {
    let written = async {
        file.write_all(bytes)
            .await
            .with_context(|| format!("writing temp resume file {}", temp_path.display()))?;
        file.flush()
            .await
            .with_context(|| format!("flushing temp resume file {}", temp_path.display()))?;
        anyhow::Ok(())
    }
    .await;
    drop(file);
    if written.is_err() {
        let _ = fs::remove_file(temp_path).await;
    }
    written
}

fn upload_failure_notice(err: &UploadError) -> Notice {
    match err {
        UploadError::InvalidType(_) => {
            Notice::error("Invalid file type", "Please upload a PDF, DOC, or DOCX file.")
        }
        UploadError::TooLarge { .. } => {
            Notice::error("File too large", "Please upload a file smaller than 5MB.")
        }
        other => Notice::error("Upload failed", other.to_string()),
    }
}
