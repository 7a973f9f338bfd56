//! Profile child collections: education, experience, achievements and
//! external roles

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    pub profile_id: i64,
    pub degree: String,
    pub institution: String,
    pub start_year: Option<i32>,
    /// `None` means ongoing
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEducation {
    pub degree: String,
    pub institution: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub profile_id: i64,
    pub role: String,
    pub institution: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewExperience {
    pub role: String,
    pub institution: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

/// Achievement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AchievementType {
    #[default]
    Award,
    Grant,
    Funds,
    Other,
}

crate::impl_domain_status_conversions!(AchievementType {
    Award => "Award",
    Grant => "Grant",
    Funds => "Funds",
    Other => "Other",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i64,
    pub profile_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub kind: AchievementType,
    /// Display position; `None` sorts last
    pub sort_order: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewAchievement {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AchievementType,
    pub year: Option<i32>,
    pub description: Option<String>,
}

/// A role held outside the home institution (editor, reviewer, board member)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalRole {
    pub id: i64,
    pub profile_id: i64,
    pub role_title: String,
    pub organization: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewExternalRole {
    pub role_title: String,
    pub organization: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub description: Option<String>,
}

/// Child collections carrying a user-controlled sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildKind {
    Achievement,
    ExternalRole,
}

crate::impl_domain_status_conversions!(ChildKind {
    Achievement => "achievement",
    ExternalRole => "external_role",
});

/// Input for adding an ordered child
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NewChild {
    Achievement(NewAchievement),
    ExternalRole(NewExternalRole),
}

impl NewChild {
    pub fn kind(&self) -> ChildKind {
        match self {
            Self::Achievement(_) => ChildKind::Achievement,
            Self::ExternalRole(_) => ChildKind::ExternalRole,
        }
    }
}

/// A stored ordered child
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChildRecord {
    Achievement(Achievement),
    ExternalRole(ExternalRole),
}

impl ChildRecord {
    pub fn id(&self) -> i64 {
        match self {
            Self::Achievement(a) => a.id,
            Self::ExternalRole(r) => r.id,
        }
    }

    pub fn sort_order(&self) -> Option<i64> {
        match self {
            Self::Achievement(a) => a.sort_order,
            Self::ExternalRole(r) => r.sort_order,
        }
    }

    pub fn kind(&self) -> ChildKind {
        match self {
            Self::Achievement(_) => ChildKind::Achievement,
            Self::ExternalRole(_) => ChildKind::ExternalRole,
        }
    }
}
