//! Append-only line writer with size-based rotation.
//!
//! When the active file grows past [`RotationPolicy::max_bytes`] it is renamed to
//! `<stem>.<YYYYmmdd-HHMMSS>.<ext>` and a fresh file is started. Only the newest
//! [`RotationPolicy::max_backups`] renamed files are kept.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many rotated files to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe rotating writer. The file is opened lazily on the first write.
pub struct RotatingFileWriter {
    path: PathBuf,
    policy: RotationPolicy,
    file: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    #[must_use]
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening, or writing fails, or if the lock is
    /// poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > self.policy.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let backup = self.backup_path(&Local::now().format("%Y%m%d-%H%M%S%.3f").to_string());
        fs::rename(&self.path, backup)?;
        self.prune_backups()
    }

    fn backup_path(&self, stamp: &str) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
        let name = match self.path.extension() {
            Some(ext) => format!("{stem}.{stamp}.{}", ext.to_string_lossy()),
            None => format!("{stem}.{stamp}"),
        };
        self.path.with_file_name(name)
    }

    /// Rotated files of this writer, oldest first.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let Some(stem) = self.path.file_stem().and_then(|s| s.to_str()) else {
            return Ok(vec![]);
        };
        let prefix = format!("{stem}.");
        let active = self.path.file_name();

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name() != active
                    && path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // Timestamps sort lexicographically.
        backups.sort();
        Ok(backups)
    }

    fn prune_backups(&self) -> io::Result<()> {
        let backups = self.backups()?;
        let excess = backups.len().saturating_sub(self.policy.max_backups);
        for old in &backups[..excess] {
            if let Err(e) = fs::remove_file(old) {
                eprintln!("failed to remove old trace file {}: {e}", old.display());
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tiny_policy() -> RotationPolicy {
        RotationPolicy {
            max_bytes: 16,
            max_backups: 2,
        }
    }

    #[test]
    fn appends_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trace.json");
        let writer = RotatingFileWriter::new(path.clone(), RotationPolicy::default());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "{\"a\":1}\n{\"b\":2}\n"
        );
    }

    #[test]
    fn rotates_past_the_size_limit() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trace.json");
        let writer = RotatingFileWriter::new(path.clone(), tiny_policy());

        writer.write_line("0123456789abcdefXYZ").unwrap();
        writer.write_line("fresh").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 1);
        let name = backups[0].file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("trace.") && name.ends_with(".json"), "{name}");
    }

    #[test]
    fn keeps_only_the_newest_backups() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trace.json");
        let writer = RotatingFileWriter::new(path.clone(), tiny_policy());
        for stamp in ["20240101-000000.000", "20240102-000000.000", "20240103-000000.000"] {
            fs::write(writer.backup_path(stamp), "old").unwrap();
        }
        fs::write(temp.path().join("unrelated.json"), "keep").unwrap();

        writer.prune_backups().unwrap();

        let names: Vec<String> = writer
            .backups()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "trace.20240102-000000.000.json",
                "trace.20240103-000000.000.json"
            ]
        );
        assert!(temp.path().join("unrelated.json").exists());
    }
}
