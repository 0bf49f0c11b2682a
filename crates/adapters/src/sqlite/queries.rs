use rusqlite::{params, Connection, OptionalExtension, Result};

pub fn upsert_preference(
    conn: &Connection,
    key: &str,
    value: &str,
    updated_at: &str,
) -> Result<()> {
    conn.execute(
        "INSERT INTO preferences (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at",
        params![key, value, updated_at],
    )?;
    Ok(())
}

pub fn find_preference(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM preferences WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}
