//! Score log persistence
//!
//! Append-only, human-readable score log: one `timestamp | name | score`
//! line per finished run. The file is the durable format, so reads must
//! hand back exactly the strings that were written. Names may themselves
//! contain the delimiter; parsing splits the timestamp off the left and
//! the score off the right, leaving everything between as the name.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use log::warn;

/// Wall-clock stamp format for appended records
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Field separator inside a record line
const DELIMITER: &str = " | ";

/// One persisted run result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRecord {
    pub timestamp: String,
    pub name: String,
    pub score: u32,
}

/// Score log boundary the session writes through
pub trait Leaderboard {
    /// Append one record. Best-effort; the caller logs failures.
    fn append(&mut self, name: &str, score: u32, timestamp: &str) -> io::Result<()>;

    /// All records in append order. Read problems degrade to empty.
    fn read_all(&self) -> Vec<LeaderboardRecord>;
}

/// Line-per-record file-backed score log
pub struct FileLeaderboard {
    path: PathBuf,
}

impl FileLeaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Leaderboard for FileLeaderboard {
    fn append(&mut self, name: &str, score: u32, timestamp: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{timestamp}{DELIMITER}{name}{DELIMITER}{score}")
    }

    fn read_all(&self) -> Vec<LeaderboardRecord> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!("score log {} unreadable: {err}", self.path.display());
                return Vec::new();
            }
        };

        text.lines()
            .filter(|line| !line.is_empty())
            .filter_map(|line| {
                let record = parse_record(line);
                if record.is_none() {
                    warn!("skipping malformed score log line: {line:?}");
                }
                record
            })
            .collect()
    }
}

/// Newest-first view truncated for the leaderboard screen
pub fn most_recent(mut records: Vec<LeaderboardRecord>, n: usize) -> Vec<LeaderboardRecord> {
    records.reverse();
    records.truncate(n);
    records
}

/// Current wall clock in the log's stamp format
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn parse_record(line: &str) -> Option<LeaderboardRecord> {
    let (timestamp, rest) = line.split_once(DELIMITER)?;
    let (name, score) = rest.rsplit_once(DELIMITER)?;
    let score = score.parse().ok()?;
    Some(LeaderboardRecord {
        timestamp: timestamp.to_string(),
        name: name.to_string(),
        score,
    })
}
