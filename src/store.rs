//! Team store: the whole roster mapping in one JSON file.
//!
//! Reads return the full mapping (empty when the file does not exist yet);
//! writes replace the file wholesale. Concurrent writers are not coordinated.

use crate::models::Teams;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Errors from reading or writing the team file.
#[derive(Debug)]
pub enum StoreError {
    /// The file could not be read or written.
    Io(std::io::Error),
    /// The file exists but does not hold a valid team mapping.
    Parse(serde_json::Error),
    /// The mapping could not be encoded.
    Encode(serde_json::Error),
    /// The mapping could not be written as CSV.
    Csv(csv::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Team file I/O failed: {}", e),
            StoreError::Parse(e) => write!(f, "Team file is not valid JSON: {}", e),
            StoreError::Encode(e) => write!(f, "Failed to encode teams: {}", e),
            StoreError::Csv(e) => write!(f, "Failed to write CSV: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Parse(e) | StoreError::Encode(e) => Some(e),
            StoreError::Csv(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<csv::Error> for StoreError {
    fn from(e: csv::Error) -> Self {
        StoreError::Csv(e)
    }
}

/// File-backed team mapping.
#[derive(Clone, Debug)]
pub struct TeamStore {
    path: PathBuf,
}

impl TeamStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full mapping. A missing file is an empty mapping.
    pub async fn load(&self) -> Result<Teams, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Teams::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&contents).map_err(StoreError::Parse)
    }

    /// Overwrite the file with `teams`, creating the parent directory if needed.
    pub async fn save(&self, teams: &Teams) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(teams).map_err(StoreError::Encode)?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::fs::write(&self.path, json).await?;
        log::info!("Saved {} team(s) to {}", teams.len(), self.path.display());
        Ok(())
    }
}

/// Flatten rosters into `team,name,position,rating` CSV rows.
pub fn teams_to_csv(teams: &Teams) -> Result<String, StoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["team", "name", "position", "rating"])?;
    for (team, players) in teams {
        for p in players {
            let rating = p.rating.to_string();
            writer.write_record([team.as_str(), p.name.as_str(), p.position.as_str(), rating.as_str()])?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| StoreError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
