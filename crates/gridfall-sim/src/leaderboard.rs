//! Attempt history persisted across runs.
//!
//! Records are kept in one plain-text file, one `score;lives;timestamp`
//! line per attempt, best first. The store never propagates IO failures:
//! a file that cannot be read loads as an empty history and a failed save
//! drops that persist attempt, with a warning either way.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, TimeZone};

use gridfall_core::constants::{LEADERBOARD_CAPACITY, LEADERBOARD_SEPARATOR};
use gridfall_core::error::GameError;

/// One completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptRecord {
    pub score: u32,
    /// Lives remaining at round end; zero for a loss.
    pub lives_left: u32,
    /// Wall-clock completion time, epoch milliseconds.
    pub timestamp_ms: i64,
}

impl AttemptRecord {
    /// Serialize to the persisted line format.
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.score,
            self.lives_left,
            self.timestamp_ms,
            sep = LEADERBOARD_SEPARATOR
        )
    }

    /// Parse one persisted line.
    pub fn parse_line(line: &str) -> Result<Self, GameError> {
        let malformed = || GameError::MalformedRecord {
            line: line.to_string(),
        };
        let mut fields = line.trim().split(LEADERBOARD_SEPARATOR);
        let score = fields.next().ok_or_else(malformed)?;
        let lives = fields.next().ok_or_else(malformed)?;
        let timestamp = fields.next().ok_or_else(malformed)?;
        if fields.next().is_some() {
            return Err(malformed());
        }
        Ok(Self {
            score: score.trim().parse().map_err(|_| malformed())?,
            lives_left: lives.trim().parse().map_err(|_| malformed())?,
            timestamp_ms: timestamp.trim().parse().map_err(|_| malformed())?,
        })
    }

    /// Human-readable ranking line for the TOP TEN panel.
    pub fn display_line(&self) -> String {
        let when = match Local.timestamp_millis_opt(self.timestamp_ms).earliest() {
            Some(dt) => dt.format("%d/%m/%Y - %H:%M:%S").to_string(),
            None => self.timestamp_ms.to_string(),
        };
        format!("Score: {} lifes: {} {}", self.score, self.lives_left, when)
    }
}

/// The persisted top-attempts store.
pub struct LeaderboardStore {
    path: PathBuf,
    records: Vec<AttemptRecord>,
}

impl LeaderboardStore {
    /// Open the store at `path`, loading whatever history is there.
    /// Unreadable files and malformed lines degrade to fewer records.
    pub fn open(path: PathBuf) -> Self {
        let mut records = Vec::new();
        match fs::read_to_string(&path) {
            Ok(contents) => {
                for line in contents.lines().filter(|l| !l.trim().is_empty()) {
                    match AttemptRecord::parse_line(line) {
                        Ok(record) => records.push(record),
                        Err(err) => log::warn!("skipping leaderboard line: {err}"),
                    }
                }
            }
            Err(err) => {
                log::warn!("leaderboard at {} not loaded: {err}", path.display());
            }
        }
        let mut store = Self { path, records };
        store.rank();
        store
    }

    /// Record a finished round at the current wall-clock time and persist.
    pub fn record_attempt(&mut self, score: u32, lives_left: u32) {
        self.insert_record(AttemptRecord {
            score,
            lives_left,
            timestamp_ms: now_epoch_ms(),
        });
    }

    /// Insert a fully specified record, re-rank, and persist.
    pub fn insert_record(&mut self, record: AttemptRecord) {
        self.records.push(record);
        self.rank();
        self.persist();
    }

    /// Ranked records, best first.
    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }

    /// Ranked display strings, best first.
    pub fn display_lines(&self) -> Vec<String> {
        self.records.iter().map(AttemptRecord::display_line).collect()
    }

    /// Higher score first, then more lives left, then the earlier attempt.
    fn rank(&mut self) {
        self.records.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(b.lives_left.cmp(&a.lives_left))
                .then(a.timestamp_ms.cmp(&b.timestamp_ms))
        });
        self.records.truncate(LEADERBOARD_CAPACITY);
    }

    /// Rewrite the whole file from the ranked records.
    fn persist(&self) {
        let mut contents = String::new();
        for record in &self.records {
            contents.push_str(&record.to_line());
            contents.push('\n');
        }
        if let Err(err) = fs::write(&self.path, contents) {
            log::warn!("leaderboard at {} not saved: {err}", self.path.display());
        }
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
