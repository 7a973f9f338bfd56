//! Aggregated profile page view

use serde::{Deserialize, Serialize};

use super::entries::{Achievement, Education, Experience, ExternalRole};
use super::profile::Profile;
use super::publication::{Photo, Publication};
use super::section::SectionOrder;
use super::social::Social;
use super::user::User;
use crate::constants::RECENT_PUBLICATION_LIMIT;

/// How many publications a profile view carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationScope {
    /// The most recent few, for the profile summary
    #[default]
    Recent,
    /// Every publication, for the dedicated listing
    All,
}

impl PublicationScope {
    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Recent => Some(RECENT_PUBLICATION_LIMIT),
            Self::All => None,
        }
    }
}

/// Everything the profile page renders, already ordered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub user: User,
    pub profile: Profile,
    pub educations: Vec<Education>,
    pub experiences: Vec<Experience>,
    pub achievements: Vec<Achievement>,
    pub external_roles: Vec<ExternalRole>,
    pub publications: Vec<Publication>,
    pub socials: Vec<Social>,
    pub photos: Vec<Photo>,
    pub is_owner: bool,
    pub section_order: SectionOrder,
    pub research_interests: Vec<String>,
}
