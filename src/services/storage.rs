use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

/// Keyed JSON persistence rooted at a single directory. Each key maps
/// to `<root>/<key>.json`; the caller owns the handle and threads it to
/// whatever needs durability, so there is no ambient global state.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Per-user default under `$HOME/.local/share/hotelier`.
    pub fn default_location() -> anyhow::Result<Self> {
        let home = std::env::var("HOME")?;
        Ok(Self::new(
            PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("hotelier"),
        ))
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Reads the value stored under `key`. A missing entry or one that
    /// no longer parses degrades silently to the type's default.
    pub fn get<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => T::default(),
        }
    }

    /// Serializes `value` and stores it under `key`, replacing any
    /// prior entry.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        let p = self.entry_path(key);
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(p, serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    /// Deletes the entry under `key`. Missing entries are not an error.
    pub fn remove(&self, key: &str) -> anyhow::Result<()> {
        let p = self.entry_path(key);
        if p.exists() {
            std::fs::remove_file(p)?;
        }
        Ok(())
    }

    /// Appends a mutation event to `audit.jsonl` beside the entries,
    /// one JSON object per line. Best-effort: the journal must never
    /// break the operation it records, so every failure is swallowed.
    pub fn journal(&self, action: &str, data: serde_json::Value) {
        let event = JournalEvent {
            ts: unix_now(),
            action,
            data,
        };
        let Ok(mut line) = serde_json::to_string(&event) else {
            return;
        };
        line.push('\n');
        if std::fs::create_dir_all(&self.root).is_err() {
            return;
        }
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.root.join("audit.jsonl"))
            .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
    }
}

#[derive(Serialize)]
struct JournalEvent<'a> {
    ts: u64,
    action: &'a str,
    data: serde_json::Value,
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
