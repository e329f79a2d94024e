//! JSONL file writer for game records.
//!
//! Each [`GameRecord`] becomes one JSON line carrying its payload fields plus
//! `type` and `timestamp`. Records are appended, so one file can hold the
//! transcripts of many games.

use kingdom_application::{GameRecord, GameRecorder};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Appending JSONL recorder, flushed after every record and on drop.
pub struct JsonlGameRecorder {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlGameRecorder {
    /// Open `path` for appending, creating parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_line(record: GameRecord) -> Option<String> {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match record.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(record.record_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));

        serde_json::to_string(&Value::Object(map)).ok()
    }
}

impl GameRecorder for JsonlGameRecorder {
    fn record(&self, record: GameRecord) {
        let Some(line) = Self::to_line(record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock()
            && let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush())
        {
            warn!("Could not write game record to {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlGameRecorder {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
