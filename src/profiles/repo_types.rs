use serde::Serialize;
use sqlx::FromRow;

/// The six free-text profile fields, as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, FromRow)]
pub struct ProfileFields {
    pub bio: String,
    pub skills: String,
    pub experience_level: String,
    pub rate_per_video: String,
    pub budget_range: String,
    pub niche: String,
}

/// Profile record in the database; at most one per user email.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub id: i64,
    pub user_email: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fields: ProfileFields,
}
