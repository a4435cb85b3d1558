//! # File I/O Module
//!
//! Handles project file operations with safety features:
//! - **Atomic saves**: Write to .tmp, verify, rename to prevent corruption
//! - **File locking**: Prevent concurrent edits on shared drives
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Projects are saved as `.stc` (steel calculation) files containing
//! JSON. Lock files use the `.stc.lock` extension with metadata about
//! who holds the lock; the OS-level advisory lock on that file is the
//! ground truth, the metadata is for user-facing messages.
//!
//! ## Example
//!
//! ```rust,no_run
//! use steel_core::file_io::{save_project, load_project, FileLock};
//! use steel_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "26-001", "Client");
//! let path = Path::new("job.stc");
//!
//! let lock = FileLock::acquire(path, "engineer@company.com").unwrap();
//! save_project(&project, path).unwrap();
//! drop(lock); // releases lock
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Lock file metadata stored in .stc.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where the lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// Path of the sidecar lock file for a project path
fn lock_path_for(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".lock");
    PathBuf::from(os)
}

/// File lock guard that releases the lock when dropped.
///
/// The exclusive advisory lock (via fs2) decides ownership; the lock
/// file's JSON body only tells other users who to talk to.
pub struct FileLock {
    lock_path: PathBuf,
    /// The underlying file handle (keeps the OS lock alive)
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a project file.
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - Lock acquired; released on drop
    /// * `Err(CalcError::FileLocked)` - Another process holds the lock
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| {
                CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        if lock_file.try_lock_exclusive().is_err() {
            // Someone else holds it; surface their metadata if readable
            let (holder, since) = match read_lock_info(&lock_path) {
                Ok(existing) => (
                    format!("{} ({})", existing.user_id, existing.machine),
                    existing.locked_at.to_rfc3339(),
                ),
                Err(_) => ("another process".to_string(), "unknown".to_string()),
            };
            return Err(CalcError::file_locked(
                path.display().to_string(),
                holder,
                since,
            ));
        }

        let lock_json = serde_json::to_string_pretty(&info).map_err(|e| {
            CalcError::SerializationError {
                reason: e.to_string(),
            }
        })?;
        lock_file.set_len(0).and_then(|_| lock_file.write_all(lock_json.as_bytes())).map_err(
            |e| CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string()),
        )?;

        Ok(FileLock {
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock happens when the handle closes; remove the sidecar so
        // stale metadata doesn't confuse the next user
        let _ = fs::remove_file(&self.lock_path);
    }
}

fn read_lock_info(lock_path: &Path) -> CalcResult<LockInfo> {
    let contents = fs::read_to_string(lock_path).map_err(|e| {
        CalcError::file_error("read lock", lock_path.display().to_string(), e.to_string())
    })?;
    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })
}

/// Save a project atomically.
///
/// Serializes to a `.tmp` sibling, verifies the written JSON parses
/// back, then renames over the target so a crash can never leave a
/// half-written project file.
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    })?;

    let mut tmp_os = path.as_os_str().to_os_string();
    tmp_os.push(".tmp");
    let tmp_path = PathBuf::from(tmp_os);

    fs::write(&tmp_path, &json).map_err(|e| {
        CalcError::file_error("write", tmp_path.display().to_string(), e.to_string())
    })?;

    // Verify the temp file parses before it replaces the real one
    let written = fs::read_to_string(&tmp_path).map_err(|e| {
        CalcError::file_error("verify", tmp_path.display().to_string(), e.to_string())
    })?;
    serde_json::from_str::<Project>(&written).map_err(|e| CalcError::SerializationError {
        reason: format!("verification of saved file failed: {e}"),
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        CalcError::file_error("rename", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a project, validating the schema version.
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let project: Project =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;

    if project.meta.version != SCHEMA_VERSION {
        return Err(CalcError::VersionMismatch {
            file_version: project.meta.version,
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    Ok(project)
}
