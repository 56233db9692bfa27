use rusqlite::Connection;

use crate::DbError;

pub fn run(conn: &Connection) -> Result<(), DbError> {
    // Idempotent CREATE TABLE IF NOT EXISTS; account_id and task_id are
    // opaque identifiers owned by other modules, so no foreign keys here.
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS comments (
            id          TEXT PRIMARY KEY,
            account_id  TEXT NOT NULL,
            task_id     TEXT NOT NULL,
            content     TEXT NOT NULL,
            active      INTEGER NOT NULL DEFAULT 1 CHECK(active IN (0, 1)),
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_comments_scope
            ON comments(account_id, task_id, active);
        ",
    )?;
    Ok(())
}
