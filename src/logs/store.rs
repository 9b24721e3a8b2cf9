// Log directory reader - serves locally stored .txt log files

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::errors::{Error, Result};

const LOG_SUFFIX: &str = ".txt";

/// A log file as served to the caller.
#[derive(Debug, Clone)]
pub struct LogFile {
    pub filename: String,
    pub contents: String,
}

/// Read-only view over a flat directory of `.txt` log files. Files are
/// created by the sample generator or dropped in externally; this reader
/// never mutates them.
#[derive(Debug, Clone)]
pub struct LogStore {
    dir: PathBuf,
}

impl LogStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the log directory if it does not exist yet.
    pub fn bootstrap(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// The `.txt` file with the greatest modification time.
    pub fn latest(&self) -> Result<LogFile> {
        let mut newest: Option<(String, SystemTime)> = None;

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(LOG_SUFFIX) {
                continue;
            }

            let modified = entry.metadata()?.modified()?;
            let newer = match &newest {
                Some((_, best)) => modified > *best,
                None => true,
            };
            if newer {
                newest = Some((name, modified));
            }
        }

        let (name, _) = newest.ok_or_else(|| {
            Error::NotFound(format!("No {LOG_SUFFIX} log files found"))
        })?;
        self.read(&name)
    }

    /// Read a log file by its exact filename.
    pub fn read(&self, filename: &str) -> Result<LogFile> {
        // Plain filenames only - anything that could walk out of the log
        // directory is reported as absent.
        if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
            return Err(Error::NotFound("File not found".to_string()));
        }

        let path = self.dir.join(filename);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound("File not found".to_string()))
            }
            Err(e) => return Err(Error::Io(e)),
        };

        Ok(LogFile {
            filename: filename.to_string(),
            contents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::time::Duration;

    fn write_log(dir: &Path, name: &str, contents: &str, age_secs: u64) {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let mtime = SystemTime::now() - Duration::from_secs(age_secs);
        file.set_modified(mtime).unwrap();
    }

    #[test]
    fn test_latest_empty_dir_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LogStore::new(tmp.path());
        assert!(matches!(store.latest(), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_latest_picks_greatest_mtime() {
        let tmp = tempfile::tempdir().unwrap();
        write_log(tmp.path(), "old.txt", "old", 300);
        write_log(tmp.path(), "newest.txt", "new", 10);
        write_log(tmp.path(), "middle.txt", "mid", 100);

        let store = LogStore::new(tmp.path());
        let log = store.latest().unwrap();
        assert_eq!(log.filename, "newest.txt");
        assert_eq!(log.contents, "new");
    }

    #[test]
    fn test_latest_ignores_non_txt_files() {
        let tmp = tempfile::tempdir().unwrap();
        write_log(tmp.path(), "report.json", "{}", 1);
        write_log(tmp.path(), "trace.txt", "trace", 200);

        let store = LogStore::new(tmp.path());
        assert_eq!(store.latest().unwrap().filename, "trace.txt");
    }

    #[test]
    fn test_read_by_name() {
        let tmp = tempfile::tempdir().unwrap();
        write_log(tmp.path(), "app.txt", "[INFO] up", 10);

        let store = LogStore::new(tmp.path());
        let log = store.read("app.txt").unwrap();
        assert_eq!(log.filename, "app.txt");
        assert_eq!(log.contents, "[INFO] up");
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LogStore::new(tmp.path());
        assert!(matches!(store.read("missing.txt"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_read_rejects_path_escapes() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LogStore::new(tmp.path());

        for name in ["../secret.txt", "a/b.txt", "a\\b.txt", "..\\up.txt"] {
            assert!(
                matches!(store.read(name), Err(Error::NotFound(_))),
                "expected not-found for {name}"
            );
        }
    }

    #[test]
    fn test_bootstrap_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("logs");
        let store = LogStore::new(&nested);

        store.bootstrap().unwrap();
        assert!(nested.is_dir());
        // Idempotent
        store.bootstrap().unwrap();
    }
}
