//! Researcher profile types

use serde::{Deserialize, Serialize};

use super::section::SectionOrder;
use super::social::SocialLinks;
use crate::utils::text::split_comma_list;

/// The 1:1 extension of a user holding researcher attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub title: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    /// Blob reference or external URL
    pub profile_picture: Option<String>,
    /// Comma-joined, stored verbatim
    pub research_interests: Option<String>,
    /// JSON array, stored verbatim
    pub section_order: Option<String>,
}

impl Profile {
    /// Research interests split on commas and trimmed
    pub fn interests(&self) -> Vec<String> {
        self.research_interests.as_deref().map(split_comma_list).unwrap_or_default()
    }

    /// Stored section order, or the default when missing or malformed
    pub fn resolved_section_order(&self) -> SectionOrder {
        SectionOrder::resolve(self.section_order.as_deref())
    }
}

/// Edit-profile form input.
///
/// Scalar fields replace the stored values; blank strings clear them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub institution: Option<String>,
    pub other_institution: Option<String>,
    pub position: Option<String>,
    pub other_position: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub socials: SocialLinks,
}

/// Resolved scalar profile columns written by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub title: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}
