/// Applied in order on every `initialize`; each statement must be idempotent.
pub const MIGRATIONS: &[&str] = &["CREATE TABLE IF NOT EXISTS preferences (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );"];
