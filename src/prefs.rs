use eyre::Result;
use rusqlite::{Connection, params};
use std::cell::RefCell;
use std::path::Path;

use crate::config::get_app_data_prefix;

pub const THEME_KEY: &str = "theme";

/// The one process-external store the viewer talks to: a key-value
/// table holding the persisted theme preference. Kept behind a trait
/// so state-transition tests run against [`MemoryPrefs`] instead of a
/// database file.
pub trait PrefStore {
    fn theme(&self) -> Result<Option<String>>;
    fn set_theme(&self, value: &str) -> Result<()>;
}

pub struct Prefs {
    conn: Connection,
}

impl Prefs {
    pub fn new() -> Result<Self> {
        let prefix = get_app_data_prefix()?;
        let filepath = prefix.join("preferences.db");

        // Ensure the parent directory exists
        if let Some(parent) = filepath.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::open(&filepath)
    }

    /// Open (or create) the preference database at an explicit path.
    pub fn open(filepath: &Path) -> Result<Self> {
        let conn = Connection::open(filepath)?;

        // The schema is created only if missing, so this is safe to run
        // on an existing database.
        Self::init_db(&conn)?;

        Ok(Self { conn })
    }

    fn init_db(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM preferences WHERE key=?")?;
        let result = stmt.query_row(params![key], |row| row.get(0));

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?, ?)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl PrefStore for Prefs {
    fn theme(&self) -> Result<Option<String>> {
        self.get(THEME_KEY)
    }

    fn set_theme(&self, value: &str) -> Result<()> {
        self.set(THEME_KEY, value)
    }
}

/// In-memory stand-in for [`Prefs`], for tests and for running with an
/// unwritable data directory.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    theme: RefCell<Option<String>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(value: &str) -> Self {
        Self {
            theme: RefCell::new(Some(value.to_string())),
        }
    }
}

impl PrefStore for MemoryPrefs {
    fn theme(&self) -> Result<Option<String>> {
        Ok(self.theme.borrow().clone())
    }

    fn set_theme(&self, value: &str) -> Result<()> {
        *self.theme.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_prefs() -> (Prefs, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let prefs = Prefs::open(&temp_dir.path().join("test_preferences.db")).unwrap();
        (prefs, temp_dir)
    }

    #[test]
    fn test_database_initialization() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test_init.db");
        assert!(!db_path.exists());
        let _prefs = Prefs::open(&db_path).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_theme_absent_by_default() {
        let (prefs, _temp_dir) = setup_test_prefs();
        assert_eq!(prefs.theme().unwrap(), None);
    }

    #[test]
    fn test_theme_round_trip() {
        let (prefs, _temp_dir) = setup_test_prefs();

        prefs.set_theme("dark").unwrap();
        assert_eq!(prefs.theme().unwrap(), Some("dark".to_string()));

        // Writes replace, never accumulate
        prefs.set_theme("light").unwrap();
        assert_eq!(prefs.theme().unwrap(), Some("light".to_string()));
    }

    #[test]
    fn test_theme_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test_reopen.db");

        {
            let prefs = Prefs::open(&db_path).unwrap();
            prefs.set_theme("dark").unwrap();
        }

        let prefs = Prefs::open(&db_path).unwrap();
        assert_eq!(prefs.theme().unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_memory_prefs() {
        let prefs = MemoryPrefs::new();
        assert_eq!(prefs.theme().unwrap(), None);

        prefs.set_theme("dark").unwrap();
        assert_eq!(prefs.theme().unwrap(), Some("dark".to_string()));

        let seeded = MemoryPrefs::with_theme("light");
        assert_eq!(seeded.theme().unwrap(), Some("light".to_string()));
    }
}
