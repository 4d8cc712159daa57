//! File-based save store.
//!
//! Saves live as `{name}.save` in one directory. A save file is three lines:
//!
//! ```text
//! 2
//! 1
//! Punch~Sword Strike
//! ```
//!
//! story progress, player level, and the skill list joined by `~`.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::SaveRecord;
use thiserror::Error;

/// Separator between skill names; no skill name contains it.
pub const SKILL_DELIMITER: &str = "~";

const EXTENSION: &str = "save";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed save '{name}': {reason}")]
    Malformed { name: String, reason: String },

    #[error("save name '{0}' is not a valid file name")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, SaveError>;

/// Directory of save files.
#[derive(Clone, Debug)]
pub struct SaveStore {
    base_dir: PathBuf,
}

impl SaveStore {
    /// Opens the store, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn save_path(&self, name: &str) -> Result<PathBuf> {
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && !name.contains(['/', '\\', '\0']);
        if !valid {
            return Err(SaveError::InvalidName(name.to_owned()));
        }
        Ok(self.base_dir.join(format!("{name}.{EXTENSION}")))
    }

    pub fn save(&self, name: &str, record: &SaveRecord) -> Result<()> {
        let path = self.save_path(name)?;
        let temp_path = path.with_extension("save.tmp");

        fs::write(&temp_path, format_record(record))?;
        fs::rename(&temp_path, &path)?;

        tracing::info!(save = name, progress = record.story_progress, "game saved");
        Ok(())
    }

    pub fn load(&self, name: &str) -> Result<SaveRecord> {
        let path = self.save_path(name)?;
        let content = fs::read_to_string(&path)?;
        let record = parse_record(&content).map_err(|reason| SaveError::Malformed {
            name: name.to_owned(),
            reason,
        })?;

        tracing::debug!(save = name, "save loaded");
        Ok(record)
    }

    /// Names of every save in the store, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(EXTENSION)
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                names.push(stem.to_owned());
            }
        }

        names.sort_unstable();
        Ok(names)
    }
}

pub fn format_record(record: &SaveRecord) -> String {
    format!(
        "{}\n{}\n{}",
        record.story_progress,
        record.player_level,
        record.skills.join(SKILL_DELIMITER)
    )
}

pub fn parse_record(content: &str) -> std::result::Result<SaveRecord, String> {
    let mut lines = content.lines();

    let story_progress = parse_field(lines.next(), "story progress")?;
    let player_level = parse_field(lines.next(), "player level")?;
    let skills = lines
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split(SKILL_DELIMITER).map(str::to_owned).collect())
        .unwrap_or_default();

    Ok(SaveRecord {
        story_progress,
        player_level,
        skills,
    })
}

fn parse_field(line: Option<&str>, field: &str) -> std::result::Result<u32, String> {
    let line = line.ok_or_else(|| format!("missing {field}"))?;
    line.trim()
        .parse()
        .map_err(|e| format!("invalid {field} '{line}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record() -> SaveRecord {
        SaveRecord {
            story_progress: 2,
            player_level: 1,
            skills: vec!["Punch".into(), "Sword Strike".into()],
        }
    }

    #[test]
    fn writes_the_flat_three_line_format() {
        assert_eq!(format_record(&record()), "2\n1\nPunch~Sword Strike");
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path().join("saves")).unwrap();

        store.save("autosave", &record()).unwrap();
        store.save("before boss", &record()).unwrap();

        assert_eq!(store.load("autosave").unwrap(), record());
        assert_eq!(store.list().unwrap(), ["autosave", "before boss"]);
        assert!(matches!(store.load("missing"), Err(SaveError::Io(_))));
    }

    #[test]
    fn tolerates_trailing_newlines_and_empty_skill_lists() {
        let parsed = parse_record("3\n4\n\n").unwrap();
        assert_eq!(parsed.story_progress, 3);
        assert_eq!(parsed.player_level, 4);
        assert!(parsed.skills.is_empty());

        assert_eq!(parse_record("2\n1\nPunch~Sword Strike\n").unwrap(), record());
    }

    #[test]
    fn rejects_malformed_files() {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path()).unwrap();
        fs::write(dir.path().join("broken.save"), "two\n1\nPunch").unwrap();

        let err = store.load("broken").unwrap_err();
        assert!(matches!(err, SaveError::Malformed { .. }));
        assert!(err.to_string().contains("story progress"));

        assert!(parse_record("1").is_err());
    }

    #[test]
    fn rejects_path_like_names() {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path()).unwrap();

        for name in ["", "../escape", ".hidden", "a/b"] {
            assert!(matches!(
                store.save(name, &record()),
                Err(SaveError::InvalidName(_))
            ));
        }
    }
}
