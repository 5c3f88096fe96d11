use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::aws::models::error::{Result, SyncError};
use crate::aws::models::layout::{self, DEFAULT_MODELS_DIR};

/// Prefix of the line printed for every model whose source is absent.
pub const MISSING_SOURCE_PREFIX: &str = "cannout find: ";

/// Tunables for a single sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Directory holding the local `*.json` models.
    pub models_dir: PathBuf,
    /// Resolve every model but leave the local files untouched.
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            dry_run: false,
        }
    }
}

/// A local model that was (or, in a dry run, would have been) refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatedModel {
    pub name: String,
    pub local: PathBuf,
    pub source: PathBuf,
    /// Bytes written to the local file. Zero in a dry run.
    pub bytes: u64,
}

/// Outcome of a sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub dry_run: bool,
    pub updated: Vec<UpdatedModel>,
    /// Source paths that did not exist; their local models were left as is.
    pub missing: Vec<PathBuf>,
}

impl SyncReport {
    /// Number of `*.json` entries the run looked at.
    pub fn processed(&self) -> usize {
        self.updated.len() + self.missing.len()
    }
}

/// Refreshes every `*.json` model in `options.models_dir` from
/// `<repo_path>/<name>/smithy/model.json`.
///
/// A `cannout find: <path>` line is written to `diagnostics` for each model
/// whose source does not exist; such models are skipped and the run carries
/// on. Any other IO failure aborts the run.
#[instrument(
    level = "info",
    skip_all,
    fields(repo = %repo_path.display(), models_dir = %options.models_dir.display(), dry_run = options.dry_run)
)]
pub fn sync_models<W: Write>(
    repo_path: &Path,
    options: &SyncOptions,
    diagnostics: &mut W,
) -> Result<SyncReport> {
    let mut report = SyncReport {
        dry_run: options.dry_run,
        ..SyncReport::default()
    };

    for file_name in list_models_dir(&options.models_dir)? {
        let Some(name) = layout::model_name_os(&file_name) else {
            debug!(entry = ?file_name, "skipping non-model entry");
            continue;
        };
        let display_name = name.to_string_lossy();

        let source = layout::source_model_path(repo_path, name);
        if !source.exists() {
            warn!(model = %display_name, source = %source.display(), "source model not found");
            writeln!(diagnostics, "{MISSING_SOURCE_PREFIX}{}", source.display())?;
            report.missing.push(source);
            continue;
        }

        let local = options.models_dir.join(&file_name);
        let bytes = if options.dry_run {
            0
        } else {
            copy_model(&source, &local)?
        };
        debug!(model = %display_name, bytes, "model refreshed");

        report.updated.push(UpdatedModel {
            name: display_name.into_owned(),
            local,
            source,
            bytes,
        });
    }

    info!(
        updated = report.updated.len(),
        missing = report.missing.len(),
        "model sync finished"
    );
    Ok(report)
}

/// Lists the entry names of the models directory in sorted order.
fn list_models_dir(models_dir: &Path) -> Result<Vec<OsString>> {
    let dir_error = |source: io::Error| SyncError::ModelsDir {
        path: models_dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(models_dir).map_err(dir_error)? {
        names.push(entry.map_err(dir_error)?.file_name());
    }
    names.sort();
    Ok(names)
}

/// Overwrites `local` with the contents of `source`. Only the bytes are
/// copied; the local file keeps its own permissions.
fn copy_model(source: &Path, local: &Path) -> Result<u64> {
    let copy_error = |err: io::Error| SyncError::Copy {
        from: source.to_path_buf(),
        to: local.to_path_buf(),
        source: err,
    };

    // Truncating a file that is its own source would destroy it, so a local
    // model that links to its source is left as is.
    if let (Ok(a), Ok(b)) = (fs::canonicalize(source), fs::canonicalize(local)) {
        if a == b {
            debug!(path = %a.display(), "local model is its own source, skipping copy");
            return fs::metadata(&a).map(|m| m.len()).map_err(copy_error);
        }
    }

    let mut reader = File::open(source).map_err(copy_error)?;
    let mut writer = File::create(local).map_err(copy_error)?;
    let bytes = io::copy(&mut reader, &mut writer).map_err(copy_error)?;
    writer.flush().map_err(copy_error)?;
    Ok(bytes)
}
