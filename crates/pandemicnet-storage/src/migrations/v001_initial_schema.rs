//! v001: individuals and contacts.

use rusqlite::Connection;

pub fn migrate(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS individuals (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            handle      TEXT NOT NULL UNIQUE,
            phone       TEXT,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS contacts (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            individual_id  INTEGER NOT NULL,
            contact_id     INTEGER NOT NULL,
            contact_date   TEXT NOT NULL,
            created_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            CHECK (individual_id <> contact_id),
            FOREIGN KEY (individual_id) REFERENCES individuals(id) ON DELETE CASCADE,
            FOREIGN KEY (contact_id) REFERENCES individuals(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_contacts_individual ON contacts(individual_id);
        CREATE INDEX IF NOT EXISTS idx_contacts_contact ON contacts(contact_id);

        -- One event per unordered pair per day.
        CREATE UNIQUE INDEX IF NOT EXISTS idx_contacts_pair_day ON contacts(
            min(individual_id, contact_id),
            max(individual_id, contact_id),
            contact_date
        );
        ",
    )
}
