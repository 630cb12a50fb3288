//! Player persistence collaborators.
//!
//! A store holds one serialized `Player` blob and writes it as a whole, so an
//! abandoned session can never leave half a save behind.
//!
//! `JsonFileStore` layout (pretty-printed JSON):
//! - `version`: envelope format version
//! - `checksum`: hex SHA-256 over the `data` string
//! - `data`: the `PlayerData` JSON as a string

use crate::error::{EngineError, EngineResult};
use crate::player::Player;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const ENVELOPE_VERSION: u32 = 1;
const SAVE_DIR: &str = ".wayfarer";
const SAVE_FILE: &str = "player.json";

pub trait PlayerStore {
    fn save(&mut self, player: &Player) -> EngineResult<()>;

    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> EngineResult<Option<Player>>;

    fn clear(&mut self) -> EngineResult<()>;
}

/// In-memory blob store for tests and the simulator.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a raw blob, as if written by an older version.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            ..Self::default()
        }
    }

    /// Store whose writes always fail with an I/O error.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PlayerStore for MemoryStore {
    fn save(&mut self, player: &Player) -> EngineResult<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::Other, "simulated write failure").into());
        }
        self.blob = Some(player.to_json()?);
        self.writes += 1;
        Ok(())
    }

    fn load(&self) -> EngineResult<Option<Player>> {
        self.blob.as_deref().map(Player::from_json).transpose()
    }

    fn clear(&mut self) -> EngineResult<()> {
        self.blob = None;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    checksum: String,
    data: String,
}

/// Checksummed JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.wayfarer/player.json`, creating the directory if needed.
    pub fn default_location() -> EngineResult<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine home directory")
        })?;
        let dir = home_dir.join(SAVE_DIR);
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join(SAVE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

fn checksum(data: &str) -> String {
    let digest = Sha256::digest(data.as_bytes());
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

impl PlayerStore for JsonFileStore {
    fn save(&mut self, player: &Player) -> EngineResult<()> {
        let data = player.to_json()?;
        let envelope = Envelope {
            version: ENVELOPE_VERSION,
            checksum: checksum(&data),
            data,
        };
        let json = serde_json::to_string_pretty(&envelope)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write then rename so a crash mid-write keeps the previous save
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> EngineResult<Option<Player>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let envelope: Envelope = serde_json::from_str(&json)?;
        if envelope.version != ENVELOPE_VERSION {
            return Err(EngineError::UnsupportedVersion(envelope.version));
        }
        if checksum(&envelope.data) != envelope.checksum {
            return Err(EngineError::ChecksumMismatch(self.path.display().to_string()));
        }
        Player::from_json(&envelope.data).map(Some)
    }

    fn clear(&mut self) -> EngineResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
