use serde::Deserialize;

use super::repo_types::ProfileFields;

/// Profile form body. Absent fields are empty strings; values are kept as
/// submitted, without trimming.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub bio: String,
    pub skills: String,
    pub experience: String,
    pub rate: String,
    pub budget: String,
    pub niche: String,
}

impl From<ProfileForm> for ProfileFields {
    fn from(f: ProfileForm) -> Self {
        Self {
            bio: f.bio,
            skills: f.skills,
            experience_level: f.experience,
            rate_per_video: f.rate,
            budget_range: f.budget,
            niche: f.niche,
        }
    }
}
