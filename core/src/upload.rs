//! Simulated file intake: a list of accepted files and a human readable size.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const SIZE_STEP: f64 = 1024.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("no uploaded file with id {0}")]
    NotFound(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub id: u64,
    pub name: String,
    pub size: u64,
    /// Empty when the browser could not tell.
    pub mime: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct UploadQueue {
    files: Vec<FileEntry>,
    next_id: u64,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, size: u64, mime: &str) -> &FileEntry {
        self.next_id += 1;
        self.files.push(FileEntry {
            id: self.next_id,
            name: name.to_string(),
            size,
            mime: mime.to_string(),
            uploaded_at: Utc::now(),
        });
        let last = self.files.len() - 1;
        &self.files[last]
    }

    pub fn remove(&mut self, id: u64) -> Result<FileEntry, UploadError> {
        let idx = self
            .files
            .iter()
            .position(|f| f.id == id)
            .ok_or(UploadError::NotFound(id))?;
        Ok(self.files.remove(idx))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.files.iter()
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

/// Formats a byte count with 1024-based units, e.g. `1536` → `1.5 KB`.
///
/// Values past the gigabyte range stay in `GB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= SIZE_STEP && unit < SIZE_UNITS.len() - 1 {
        value /= SIZE_STEP;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_500_000), "1.43 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_queue_add_remove() {
        let mut queue = UploadQueue::new();
        let first = queue.add("cat.png", 2048, "image/png").id;
        let second = queue.add("notes", 10, "").id;
        assert_ne!(first, second);
        assert_eq!(queue.total_size(), 2058);

        let removed = queue.remove(first).unwrap();
        assert_eq!(removed.name, "cat.png");
        assert_eq!(queue.remove(first), Err(UploadError::NotFound(first)));

        let names: Vec<&str> = queue.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["notes"]);

        queue.clear();
        assert_eq!(queue.iter().count(), 0);
    }
}
