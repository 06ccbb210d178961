//! Dotenv file loading with once-only process initialization.
//!
//! Loads `.env.local` and `.env` from the project root into the process
//! environment. Dotenv semantics never overwrite variables that are
//! already set, so loading `.env.local` first gives it override precedence
//! over `.env`. Both files are optional.
//!
//! Initialization is memoized through a `OnceCell` rather than a mutable
//! flag: repeated `init()` calls return the first result without touching
//! the filesystem again. The file-existence probe is injectable so tests
//! can observe exactly how often the filesystem is consulted.

use once_cell::sync::{Lazy, OnceCell};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::ConfigError;

/// Files loaded from the project root, in precedence order.
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Pluggable file-existence check.
pub type FileProbe = Arc<dyn Fn(&Path) -> bool + Send + Sync>;

/// What a load pass actually read.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    loaded: Vec<PathBuf>,
}

impl LoadReport {
    /// Paths of the dotenv files that were found and applied.
    pub fn loaded(&self) -> &[PathBuf] {
        &self.loaded
    }
}

/// Loads dotenv files from a project root, at most once per loader.
pub struct EnvLoader {
    root: PathBuf,
    probe: FileProbe,
    state: OnceCell<LoadReport>,
}

impl EnvLoader {
    /// Creates a loader for the given project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            probe: Arc::new(|path: &Path| path.exists()),
            state: OnceCell::new(),
        }
    }

    /// Replaces the file-existence probe (test seam).
    pub fn with_probe(mut self, probe: FileProbe) -> Self {
        self.probe = probe;
        self
    }

    /// Loads the dotenv files once; later calls return the first result
    /// without re-reading the filesystem.
    pub fn init(&self) -> Result<&LoadReport, ConfigError> {
        self.state.get_or_try_init(|| self.load_files())
    }

    fn load_files(&self) -> Result<LoadReport, ConfigError> {
        let mut report = LoadReport::default();
        for name in ENV_FILES {
            let path = self.root.join(name);
            if (self.probe)(&path) {
                dotenvy::from_path(&path)?;
                tracing::debug!(path = %path.display(), "Applied dotenv file");
                report.loaded.push(path);
            }
        }
        Ok(report)
    }
}

static PROCESS_LOADER: Lazy<EnvLoader> = Lazy::new(|| EnvLoader::new("."));

/// Loads `.env.local`/`.env` from the working directory into the process
/// environment, once per process.
pub fn init_process_env() -> Result<&'static LoadReport, ConfigError> {
    PROCESS_LOADER.init()
}
