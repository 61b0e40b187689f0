//! Database access layer with connection pooling and migrations
//!
//! This module is organized by domain:
//! - `profile` - The single income profile row
//! - `goals` - Goal CRUD, status changes and goal workflows
//! - `savings` - Append-only saving records
//! - `reminders` - Reminder scheduling, snoozing and completion

use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::advisor::GoalSource;
use crate::error::{Error, Result};
use crate::models::{DashboardStats, Goal, GoalStatus, IncomeProfile};

mod goals;
mod profile;
mod reminders;
mod savings;

pub use goals::DEFAULT_SNOOZE_DAYS;
pub use reminders::PLAN_CHECK_IN_DAYS;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Environment variable for database encryption key
pub const DB_KEY_ENV: &str = "SAVESMART_DB_KEY";

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Derive an encryption key from a passphrase using Argon2
///
/// Uses a fixed application salt so the same passphrase always produces the
/// same key, regardless of database path.
fn derive_key(passphrase: &str) -> Result<String> {
    use argon2::{password_hash::SaltString, Argon2, PasswordHasher};

    // Changing this invalidates every existing encrypted database
    const APP_SALT: &[u8; 16] = b"savesmart-salt-1";

    let salt = SaltString::encode_b64(APP_SALT)
        .map_err(|e| Error::Encryption(format!("Failed to create salt: {}", e)))?;

    let hash = Argon2::default()
        .hash_password(passphrase.as_bytes(), &salt)
        .map_err(|e| Error::Encryption(format!("Failed to derive key: {}", e)))?;

    let output = hash
        .hash
        .ok_or_else(|| Error::Encryption("No hash output".to_string()))?;
    Ok(hex::encode(output.as_bytes()))
}

/// Parse a SQLite datetime string into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    // SQLite stores as "YYYY-MM-DD HH:MM:SS" format
    chrono::NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

/// Format a timestamp the way SQLite's `CURRENT_TIMESTAMP` does, so stored
/// values compare correctly as text
pub(crate) fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Latest year that survives the stored text format
const MAX_STORED_YEAR: i32 = 9999;

/// Move `at` forward by `days`, failing with `InvalidData` when the result
/// cannot be represented or stored
pub(crate) fn add_days(at: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>> {
    Duration::try_days(days)
        .and_then(|delta| at.checked_add_signed(delta))
        .filter(|dt| dt.year() <= MAX_STORED_YEAR)
        .ok_or_else(|| {
            Error::InvalidData(format!(
                "{} days from {} is too far in the future",
                days,
                format_datetime(at)
            ))
        })
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub(crate) fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Parse a stored enum column inside a row mapper
pub(crate) fn parse_column<T>(idx: usize, value: &str) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    value.parse().map_err(|e: String| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, e.into())
    })
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Create a new database connection pool with encryption
    ///
    /// Requires the `SAVESMART_DB_KEY` environment variable. The database is
    /// encrypted with SQLCipher using a key derived from the passphrase via
    /// Argon2. Use `new_unencrypted()` for development without encryption.
    pub fn new(path: &str) -> Result<Self> {
        match std::env::var(DB_KEY_ENV).ok() {
            Some(key) => Self::new_with_key(path, Some(&key)),
            None => Err(Error::Encryption(format!(
                "Database encryption required. Set {} environment variable with your passphrase, \
                or use --no-encrypt for unencrypted databases.",
                DB_KEY_ENV
            ))),
        }
    }

    /// Create a new unencrypted database connection pool
    pub fn new_unencrypted(path: &str) -> Result<Self> {
        Self::new_with_key(path, None)
    }

    /// Create a new database with an explicit encryption key
    pub fn new_with_key(path: &str, passphrase: Option<&str>) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);

        let pool = if let Some(pass) = passphrase {
            let key = derive_key(pass)?;
            let key_pragma = format!("PRAGMA key = 'x\"{}\"';", key);

            // The key must be set on every new connection
            let manager = manager.with_init(move |conn| {
                conn.execute_batch(&key_pragma)?;
                Ok(())
            });

            Pool::builder().max_size(10).build(manager)?
        } else {
            Pool::builder().max_size(10).build(manager)?
        };

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Uses a temporary file rather than `:memory:` so every pooled
    /// connection sees the same data.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "savesmart_test_{}_{}.db",
            std::process::id(),
            id
        ));
        let path = path.to_string_lossy().to_string();

        let _ = std::fs::remove_file(&path);

        Self::new_unencrypted(&path)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Headline numbers for the dashboard
    pub fn dashboard_stats(&self, now: DateTime<Utc>) -> Result<DashboardStats> {
        let profile = self.get_profile()?;
        let counts = self.count_goals_by_status()?;
        let count = |status: GoalStatus| {
            counts
                .iter()
                .find(|(s, _)| *s == status)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        };

        Ok(DashboardStats {
            hourly_rate: crate::advisor::hourly_rate(&profile),
            currency: profile.currency,
            income_amount: profile.income_amount,
            income_period: profile.income_period,
            hours_per_day: profile.hours_per_day,
            work_days_per_month: profile.work_days_per_month,
            active_goals: count(GoalStatus::Active),
            snoozed_goals: count(GoalStatus::Snoozed),
            achieved_goals: count(GoalStatus::Achieved),
            total_saved: self.total_saved()?,
            due_reminders: self.due_reminders(now)?.len() as i64,
        })
    }

    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            -- WAL: readers don't block writers
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;

            -- Single income profile row
            CREATE TABLE IF NOT EXISTS profile (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                currency TEXT NOT NULL DEFAULT 'THB',
                income_amount REAL NOT NULL DEFAULT 20000,
                income_period TEXT NOT NULL DEFAULT 'monthly',
                hours_per_day REAL NOT NULL DEFAULT 8,
                work_days_per_week REAL NOT NULL DEFAULT 5,
                work_days_per_month REAL NOT NULL DEFAULT 22,
                fixed_expenses REAL NOT NULL DEFAULT 0,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            INSERT OR IGNORE INTO profile (id) VALUES (1);

            -- Purchase goals (soft-deleted via status)
            CREATE TABLE IF NOT EXISTS goals (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                price REAL NOT NULL CHECK (price >= 0),
                emoji TEXT,
                image_path TEXT,
                category TEXT NOT NULL DEFAULT 'Other',
                necessity INTEGER NOT NULL DEFAULT 3 CHECK (necessity BETWEEN 1 AND 5),
                target_date TEXT,
                status TEXT NOT NULL DEFAULT 'active',
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_goals_status ON goals(status);

            -- Manual deposits toward a goal (append-only)
            CREATE TABLE IF NOT EXISTS savings (
                id INTEGER PRIMARY KEY,
                goal_id INTEGER NOT NULL REFERENCES goals(id),
                amount REAL NOT NULL CHECK (amount > 0),
                note TEXT NOT NULL DEFAULT '',
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_savings_goal ON savings(goal_id);

            -- Reconsideration reminders
            CREATE TABLE IF NOT EXISTS reminders (
                id INTEGER PRIMARY KEY,
                goal_id INTEGER NOT NULL REFERENCES goals(id),
                remind_at DATETIME NOT NULL,
                recurring TEXT NOT NULL DEFAULT 'none',
                enabled INTEGER NOT NULL DEFAULT 1,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_reminders_goal ON reminders(goal_id);
            CREATE INDEX IF NOT EXISTS idx_reminders_due ON reminders(enabled, remind_at);
            "#,
        )?;

        info!("Database schema initialized");
        Ok(())
    }
}

impl GoalSource for Database {
    fn get_profile(&self) -> Result<IncomeProfile> {
        Database::get_profile(self)
    }

    fn list_goals(&self, status: Option<GoalStatus>) -> Result<Vec<Goal>> {
        Database::list_goals(self, status)
    }

    fn sum_savings(&self, goal_id: i64) -> Result<f64> {
        self.savings_total(goal_id)
    }

    fn is_due_for_reminder(&self, goal_id: i64, now: DateTime<Utc>) -> Result<bool> {
        self.is_goal_due(goal_id, now)
    }
}

#[cfg(test)]
mod tests;
