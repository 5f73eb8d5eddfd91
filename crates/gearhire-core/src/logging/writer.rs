//! Append-only JSONL session files.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::entry::LogEntry;

/// Writes one session's entries to `<logs_dir>/<date>_<session>.jsonl`.
pub struct SessionLogWriter {
    session: String,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl SessionLogWriter {
    pub fn new(logs_dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        let session = session.into();
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = logs_dir.join(format!("{}_{}.jsonl", date, session));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            session,
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a single line.
    pub fn write(&self, entry: &LogEntry) -> std::io::Result<()> {
        let line = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "log writer poisoned"))?;
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

/// Read every `.jsonl` file in `logs_dir`, sorted by timestamp.
///
/// Lines that fail to parse are skipped.
pub fn read_entries(logs_dir: impl AsRef<Path>) -> std::io::Result<Vec<LogEntry>> {
    let logs_dir = logs_dir.as_ref();
    if !logs_dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(logs_dir)? {
        let path = dir_entry?.path();
        if path.extension().map(|e| e == "jsonl").unwrap_or(false) {
            let content = fs::read_to_string(&path)?;
            entries.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .filter_map(|line| LogEntry::from_json_line(line).ok()),
            );
        }
    }

    entries.sort_by(|a, b| a.ts.cmp(&b.ts));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_session_file() {
        let temp = TempDir::new().unwrap();
        let logs_dir = temp.path().join("logs");

        let writer = SessionLogWriter::new(&logs_dir, "desktop").unwrap();
        assert!(writer.path().exists());
        assert!(writer.path().to_string_lossy().ends_with("_desktop.jsonl"));
    }

    #[test]
    fn appends_and_reads_back_across_sessions() {
        let temp = TempDir::new().unwrap();
        let logs_dir = temp.path().join("logs");

        let desktop = SessionLogWriter::new(&logs_dir, "desktop").unwrap();
        let cli = SessionLogWriter::new(&logs_dir, "cli").unwrap();
        desktop
            .write(&LogEntry::new("debug", "desktop", "t", "Popover open"))
            .unwrap();
        cli.write(&LogEntry::new("debug", "cli", "t", "Popover closed"))
            .unwrap();
        fs::write(logs_dir.join("notes.txt"), "ignored").unwrap();

        let entries = read_entries(&logs_dir).unwrap();
        assert_eq!(entries.len(), 2);
        let sessions: Vec<_> = entries.iter().map(|e| e.session.as_str()).collect();
        assert!(sessions.contains(&"desktop"));
        assert!(sessions.contains(&"cli"));
    }

    #[test]
    fn skips_garbage_lines() {
        let temp = TempDir::new().unwrap();
        let writer = SessionLogWriter::new(temp.path(), "s").unwrap();
        writer.write(&LogEntry::new("info", "s", "t", "ok")).unwrap();
        let mut file = OpenOptions::new().append(true).open(writer.path()).unwrap();
        writeln!(file, "not json").unwrap();

        assert_eq!(read_entries(temp.path()).unwrap().len(), 1);
    }

    #[test]
    fn missing_dir_reads_empty() {
        let temp = TempDir::new().unwrap();
        assert!(read_entries(temp.path().join("nope")).unwrap().is_empty());
    }
}
