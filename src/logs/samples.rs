// Sample log generation - seeds the log directory so the directory reader
// and the browser client have data on a fresh install

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};

const SAMPLES: &[&str] = &[
    "[INFO] Server initialized\n\
     [DEBUG] Config loaded: default.toml\n\
     [INFO] Database connection established\n\
     [WARN] Slow query detected (1.8s)\n\
     [ERROR] Failed to send email: SMTP timeout\n\
     [INFO] Retrying email send\n\
     [INFO] Email sent successfully\n\
     [INFO] Cleanup job completed",
    "[INFO] Build process started\n\
     [DEBUG] Reading configuration: build.toml\n\
     [ERROR] Missing module: render-core\n\
     [INFO] Installing dependencies\n\
     [WARN] Deprecated API used: fs::metadata_legacy\n\
     [ERROR] Permission denied: /var/log/build.log\n\
     [INFO] Build completed with warnings",
    "[INFO] Starting log analysis\n\
     [DEBUG] Model gemini-2.5-flash selected\n\
     [ERROR] Invalid input: empty logs provided\n\
     [WARN] Using default logs for retry\n\
     [INFO] Analysis completed\n\
     [DEBUG] Output length: 1024 characters",
    "[INFO] User login attempt\n\
     [DEBUG] Checking credentials\n\
     [INFO] User authenticated: user_id=204\n\
     [WARN] Suspicious login location: 192.168.1.55\n\
     [ERROR] Failed to load user dashboard\n\
     [INFO] User redirected to login",
    "[INFO] Cron job triggered: cleanup-temp\n\
     [DEBUG] Scanning temp folder\n\
     [INFO] Deleted 12 temporary files\n\
     [WARN] Some files could not be deleted: locked by another process\n\
     [INFO] Cleanup job completed",
    "[INFO] API server starting\n\
     [DEBUG] Middleware loaded: cors, trace\n\
     [INFO] Listening on port 5000\n\
     [ERROR] Route /analyze crashed: missing field `logs`\n\
     [DEBUG] Stack trace logged\n\
     [INFO] Server health OK",
    "[INFO] Scheduled task: data backup\n\
     [DEBUG] Connecting to object storage\n\
     [ERROR] Network error: bucket unreachable\n\
     [INFO] Retrying backup\n\
     [INFO] Backup completed successfully",
    "[INFO] Deploy started: version 2.1.5\n\
     [DEBUG] Pulling latest build artifacts\n\
     [INFO] Build successful\n\
     [ERROR] Missing environment variable: DATABASE_URL\n\
     [INFO] Deployment halted",
];

/// Write the sample logs as `sample-log-N.txt` with strictly increasing
/// modification times, so "latest" is deterministic on fresh data. Creates
/// the directory if needed.
pub fn write_samples(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let base = SystemTime::now() - Duration::from_secs(SAMPLES.len() as u64);

    for (idx, contents) in SAMPLES.iter().enumerate() {
        let filename = format!("sample-log-{}.txt", idx + 1);
        let path = dir.join(&filename);

        let mut file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        // Stagger mtimes one second apart, oldest first
        let mtime = base + Duration::from_secs(idx as u64);
        file.set_modified(mtime)
            .with_context(|| format!("Failed to set mtime on {}", path.display()))?;

        tracing::info!("Created {filename}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logs::LogStore;

    #[test]
    fn test_writes_all_samples() {
        let tmp = tempfile::tempdir().unwrap();
        write_samples(tmp.path()).unwrap();

        let count = std::fs::read_dir(tmp.path())
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .ends_with(".txt")
            })
            .count();
        assert_eq!(count, SAMPLES.len());
    }

    #[test]
    fn test_latest_sample_wins_after_generation() {
        let tmp = tempfile::tempdir().unwrap();
        write_samples(tmp.path()).unwrap();

        let store = LogStore::new(tmp.path());
        let latest = store.latest().unwrap();
        assert_eq!(latest.filename, format!("sample-log-{}.txt", SAMPLES.len()));
    }

    #[test]
    fn test_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("fresh").join("logs");
        write_samples(&nested).unwrap();
        assert!(nested.join("sample-log-1.txt").exists());
    }
}
