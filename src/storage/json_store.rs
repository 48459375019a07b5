use std::{
    env, fs,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::domain::{DashboardDocument, PriorState};
use crate::errors::ForecastError;

const DEFAULT_DIR_NAME: &str = ".cashcast";
const DOCUMENT_FILE: &str = "financial_data.json";
const TMP_SUFFIX: &str = "tmp";

/// Default location of the dashboard document, `~/.cashcast/financial_data.json`,
/// overridable through `CASHCAST_HOME`.
pub fn default_document_path() -> PathBuf {
    if let Some(custom) = env::var_os("CASHCAST_HOME") {
        return PathBuf::from(custom).join(DOCUMENT_FILE);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
        .join(DOCUMENT_FILE)
}

/// How a prior-state read went.
///
/// Missing and corrupt documents both recover to empty prior state; the
/// distinction stays observable so callers can warn about corruption instead
/// of silently discarding user edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Missing,
    Corrupt,
}

/// Filesystem-backed store for the dashboard document.
///
/// One run reads the document once and writes it once; there is no locking
/// and no concurrent-writer protection. Writes go through a temp file and
/// rename so a failed write leaves the previous run's document intact.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recovers the prior run's budget items and bank entries. Never fails:
    /// a missing or unparseable file yields empty prior state with the
    /// matching status.
    pub fn load_prior(&self) -> (PriorState, LoadStatus) {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return (PriorState::default(), LoadStatus::Missing)
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    %err,
                    "prior document unreadable, starting from empty state"
                );
                return (PriorState::default(), LoadStatus::Corrupt);
            }
        };
        match serde_json::from_str(&data) {
            Ok(prior) => (prior, LoadStatus::Loaded),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    %err,
                    "prior document unparseable, starting from empty state"
                );
                (PriorState::default(), LoadStatus::Corrupt)
            }
        }
    }

    /// Strict read of the full document, for tooling and tests.
    pub fn load_document(&self) -> Result<DashboardDocument, ForecastError> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Writes the document, overwriting any prior one at the same path.
    pub fn save(&self, document: &DashboardDocument) -> Result<(), ForecastError> {
        let json = serde_json::to_string_pretty(document)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ForecastError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
