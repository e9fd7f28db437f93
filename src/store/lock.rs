use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// A lock file with no readable pid is only reclaimed once it is this old, so
/// a writer that has created the file but not yet written its pid keeps it.
const UNREADABLE_LOCK_GRACE: Duration = Duration::from_secs(10);

/// Advisory cross-process lock held for the lifetime of the guard.
///
/// The lock file is created with `create_new` and holds the owner's pid, so a
/// second writer fails fast with [`Error::Locked`] instead of waiting. The file
/// is removed on drop. A lock left behind by a process that no longer exists is
/// reclaimed once.
#[derive(Debug)]
pub struct FileLock {
    path: PathBuf,
}

impl FileLock {
    pub fn acquire(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::io("create directory", parent, e))?;
        }

        match Self::create(&path) {
            Err(Error::Locked(_)) if is_stale(&path) => {
                tracing::warn!(path = %path.display(), "removing stale lock");
                match std::fs::remove_file(&path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(Error::io("remove stale lock", &path, e)),
                }
                Self::create(&path)
            }
            other => other,
        }
    }

    fn create(path: &Path) -> Result<Self> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::Locked(path.to_path_buf()))
            }
            Err(e) => return Err(Error::io("create lock", path, e)),
        };
        writeln!(file, "{}", std::process::id()).map_err(|e| Error::io("write lock", path, e))?;

        tracing::debug!(path = %path.display(), "lock acquired");
        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to release lock");
        }
    }
}

/// True when the lock's owner is known to be gone.
fn is_stale(path: &Path) -> bool {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return false;
    };
    match contents.trim().parse::<u32>() {
        Ok(pid) => !process_alive(pid),
        Err(_) => std::fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .and_then(|modified| modified.elapsed().ok())
            .is_some_and(|age| age > UNREADABLE_LOCK_GRACE),
    }
}

#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        return false;
    };
    if pid <= 0 {
        return true;
    }
    // SAFETY: signal 0 performs only the existence and permission check.
    let rc = unsafe { libc::kill(pid, 0) };
    rc == 0 || std::io::Error::last_os_error().raw_os_error() != Some(libc::ESRCH)
}

#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}
