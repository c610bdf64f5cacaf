use serde::Serialize;
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,        // surrogate key
    pub name: String,   // display name
    pub email: String,  // unique, links session and profile
    #[serde(skip_serializing)]
    pub pin: String,    // plaintext, compared exactly at login
    pub role: String,   // free text, e.g. "Content Creator"
}
