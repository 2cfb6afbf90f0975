use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use diesel::prelude::*;
use stocksent::adapter::outbound::sqlite::{open, DbPool, SqliteArticleStore, SqliteScoreStore};

/// Temporary SQLite database file for integration tests.
pub struct TempDb {
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        path.push(format!("stocksent-{name}-{nanos}.db"));

        let pool = open(&path.to_string_lossy()).expect("open sqlite database");

        {
            let mut conn = pool.get().expect("get sqlite connection");
            diesel::sql_query("PRAGMA journal_mode=WAL")
                .execute(&mut conn)
                .expect("enable WAL mode");
        }

        Self { path, pool }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn articles(&self) -> SqliteArticleStore {
        SqliteArticleStore::new(self.pool.clone())
    }

    pub fn scores(&self) -> SqliteScoreStore {
        SqliteScoreStore::new(self.pool.clone())
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        for suffix in ["-wal", "-shm"] {
            let mut side = self.path.clone().into_os_string();
            side.push(suffix);
            let _ = std::fs::remove_file(side);
        }
    }
}
