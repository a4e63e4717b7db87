//! SQLite table definitions.
//!
//! The shell only ever reads and writes the columns named here; any
//! richer production schema (cars, enroute stops, member profiles) is
//! owned externally and coexists with these definitions.

/// DDL for every table the shell touches. Idempotent.
pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS members (
    email    TEXT PRIMARY KEY,
    pwd      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS locations (
    lcode    TEXT PRIMARY KEY,
    city     TEXT NOT NULL,
    prov     TEXT NOT NULL,
    address  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS rides (
    rno      INTEGER PRIMARY KEY,
    price    INTEGER NOT NULL,
    rdate    TEXT NOT NULL,
    seats    INTEGER NOT NULL,
    src      TEXT NOT NULL,
    dst      TEXT NOT NULL,
    driver   TEXT NOT NULL,
    FOREIGN KEY (driver) REFERENCES members (email)
);

CREATE TABLE IF NOT EXISTS bookings (
    bno      INTEGER PRIMARY KEY,
    email    TEXT NOT NULL,
    rno      INTEGER NOT NULL,
    cost     INTEGER NOT NULL,
    seats    INTEGER NOT NULL,
    pickup   TEXT NOT NULL,
    dropoff  TEXT NOT NULL,
    FOREIGN KEY (email) REFERENCES members (email),
    FOREIGN KEY (rno) REFERENCES rides (rno)
);

CREATE TABLE IF NOT EXISTS requests (
    rid      INTEGER PRIMARY KEY,
    email    TEXT NOT NULL,
    date     TEXT NOT NULL,
    pickup   TEXT NOT NULL,
    dropoff  TEXT NOT NULL,
    price    INTEGER NOT NULL,
    FOREIGN KEY (email) REFERENCES members (email)
);

CREATE TABLE IF NOT EXISTS inbox (
    email         TEXT NOT NULL,
    msg_timestamp TEXT NOT NULL,
    sender        TEXT NOT NULL,
    content       TEXT NOT NULL,
    rno           INTEGER NOT NULL,
    seen          TEXT NOT NULL DEFAULT 'n',
    FOREIGN KEY (email) REFERENCES members (email)
);
";
