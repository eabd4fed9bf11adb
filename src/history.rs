use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::api::Endpoint;
use crate::config::Config;

/// One recorded load attempt. The fetch log is the persistent,
/// operator-visible record of every catalog request and its outcome.
#[derive(Debug, Clone)]
pub struct FetchEntry {
    pub timestamp: DateTime<Utc>,
    pub outcome: String,
    pub endpoint: String,
    pub detail: Option<String>,
}

impl FetchEntry {
    pub fn ok(endpoint: Endpoint, items: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            outcome: "OK".to_string(),
            endpoint: endpoint.name().to_string(),
            detail: Some(format!("items={}", items)),
        }
    }

    pub fn fail(endpoint: Endpoint, error: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            outcome: "FAIL".to_string(),
            endpoint: endpoint.name().to_string(),
            detail: Some(error.to_string()),
        }
    }

    pub fn to_log_line(&self) -> String {
        let detail_str = self
            .detail
            .as_ref()
            .map(|d| format!(" {}", d))
            .unwrap_or_default();
        format!(
            "{} {} {}{}\n",
            self.timestamp.to_rfc3339(),
            self.outcome,
            self.endpoint,
            detail_str
        )
    }
}

pub struct FetchLog {
    log_path: PathBuf,
}

impl FetchLog {
    pub fn new() -> Self {
        let log_path = Config::data_dir().join("fetches.log");
        Self { log_path }
    }

    pub fn log(&self, entry: &FetchEntry) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        write!(file, "{}", entry.to_log_line())?;
        Ok(())
    }

    pub fn log_ok(&self, endpoint: Endpoint, items: usize) -> Result<()> {
        self.log(&FetchEntry::ok(endpoint, items))
    }

    pub fn log_fail(&self, endpoint: Endpoint, error: &str) -> Result<()> {
        self.log(&FetchEntry::fail(endpoint, error))
    }

    pub fn read(&self, limit: Option<usize>) -> Result<Vec<FetchEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)?;
        let entries: Vec<FetchEntry> = content.lines().filter_map(parse_line).collect();

        let result = if let Some(n) = limit {
            entries.into_iter().rev().take(n).collect()
        } else {
            entries
        };

        Ok(result)
    }

    pub fn clear(&self) -> Result<()> {
        if self.log_path.exists() {
            fs::remove_file(&self.log_path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

impl Default for FetchLog {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_line(line: &str) -> Option<FetchEntry> {
    let parts: Vec<&str> = line.splitn(4, ' ').collect();
    if parts.len() < 3 {
        return None;
    }

    let timestamp = DateTime::parse_from_rfc3339(parts[0])
        .ok()?
        .with_timezone(&Utc);
    let outcome = parts[1].to_string();
    let endpoint = parts[2].to_string();
    let detail = parts.get(3).map(|s| s.to_string());

    Some(FetchEntry {
        timestamp,
        outcome,
        endpoint,
        detail,
    })
}
