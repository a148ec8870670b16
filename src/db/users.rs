//! User records imported from the OAuth identity provider.
//!
//! A user row is keyed by the provider's stable external id; email, name,
//! and avatar are refreshed on every login so the profile never goes
//! stale. Lookup by internal id backs session resolution, lookup by email
//! backs the `weeks` terminal command.

use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const UPSERT_USER: &str = "INSERT INTO users (google_id, email, name, profile_picture, updated_at)
    VALUES (?1, ?2, ?3, ?4, CURRENT_TIMESTAMP)
    ON CONFLICT(google_id) DO UPDATE SET
        email = excluded.email,
        name = excluded.name,
        profile_picture = excluded.profile_picture,
        updated_at = CURRENT_TIMESTAMP";
const SELECT_USER: &str = "SELECT id, google_id, email, name, profile_picture FROM users";

/// A stored user identity.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub google_id: String,
    pub email: String,
    pub name: String,
    pub profile_picture: Option<String>,
}

/// Profile shape delivered by the identity provider.
///
/// Providers may return zero or more emails and photos; the first of each
/// is used, matching what the consent screen showed the user.
#[derive(Debug, Clone)]
pub struct IdentityProfile {
    pub external_id: String,
    pub emails: Vec<String>,
    pub display_name: String,
    pub photos: Vec<String>,
}

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Users { conn: db.conn })
    }

    /// Inserts or refreshes a user from an identity profile.
    ///
    /// Idempotent per external id: repeated logins update the profile
    /// fields in place and return the same row.
    pub fn upsert(&mut self, profile: &IdentityProfile) -> Result<User> {
        let email = profile.emails.first().cloned().unwrap_or_default();
        let picture = profile.photos.first().cloned();

        self.conn
            .execute(UPSERT_USER, params![profile.external_id, email, profile.display_name, picture])?;

        let user = self
            .conn
            .query_row(&format!("{} WHERE google_id = ?1", SELECT_USER), params![profile.external_id], Self::map_row)?;
        Ok(user)
    }

    pub fn fetch_by_id(&mut self, id: i64) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_USER), params![id], Self::map_row)
            .optional()?;
        Ok(user)
    }

    pub fn fetch_by_email(&mut self, email: &str) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(&format!("{} WHERE email = ?1", SELECT_USER), params![email], Self::map_row)
            .optional()?;
        Ok(user)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            google_id: row.get(1)?,
            email: row.get(2)?,
            name: row.get(3)?,
            profile_picture: row.get(4)?,
        })
    }
}
