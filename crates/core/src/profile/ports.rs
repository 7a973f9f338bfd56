//! Port interfaces for profiles and their child collections
//!
//! Every method taking a `profile_id` scopes its reads and writes to that
//! profile; ids owned by another profile behave exactly like missing ids.

use async_trait::async_trait;
use researchd_domain::{
    ChildKind, ChildRecord, Education, Experience, NewChild, NewEducation, NewExperience, Photo,
    Profile, ProfileFields, Result, Social, SocialPlatform,
};

/// Resolved edit-profile write, applied in one transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    pub first_name: String,
    pub last_name: String,
    pub fields: ProfileFields,
    /// `Some(url)` upserts the platform's row, `None` deletes it
    pub socials: Vec<(SocialPlatform, Option<String>)>,
}

/// Trait for the profile row, socials and photos
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Return the user's profile, inserting an empty one if absent.
    ///
    /// Concurrent first calls converge on one row. Fails with `NotFound`
    /// when the user does not exist.
    async fn get_or_create(&self, user_id: i64) -> Result<Profile>;

    async fn find_by_user(&self, user_id: i64) -> Result<Option<Profile>>;

    /// Write user names, scalar profile fields and socials together
    async fn apply_changes(&self, user_id: i64, changes: ProfileChanges) -> Result<Profile>;

    async fn set_research_interests(&self, profile_id: i64, raw: &str) -> Result<()>;

    async fn set_section_order(&self, profile_id: i64, json: &str) -> Result<()>;

    /// Replace the picture reference; returns the previous one
    async fn set_profile_picture(
        &self,
        profile_id: i64,
        reference: Option<String>,
    ) -> Result<Option<String>>;

    /// Delete the profile and every owned row.
    ///
    /// Returns the blob references (files, photos, picture) the deleted rows
    /// pointed at, collected inside the same transaction.
    async fn delete_profile(&self, profile_id: i64) -> Result<Vec<String>>;

    /// Ordered by platform
    async fn list_socials(&self, profile_id: i64) -> Result<Vec<Social>>;

    /// Newest first
    async fn list_photos(&self, profile_id: i64) -> Result<Vec<Photo>>;

    async fn add_photo(
        &self,
        profile_id: i64,
        reference: String,
        caption: Option<String>,
    ) -> Result<Photo>;

    /// Returns the deleted photo, `None` if not owned or missing
    async fn delete_photo(&self, profile_id: i64, photo_id: i64) -> Result<Option<Photo>>;
}

/// Trait for education, experience, achievements and external roles
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Start year descending (nulls last), then id
    async fn list_educations(&self, profile_id: i64) -> Result<Vec<Education>>;

    /// Start year descending (nulls last), then id
    async fn list_experiences(&self, profile_id: i64) -> Result<Vec<Experience>>;

    async fn add_education(&self, profile_id: i64, entry: NewEducation) -> Result<Education>;

    async fn add_experience(&self, profile_id: i64, entry: NewExperience) -> Result<Experience>;

    /// `false` when the id is missing or owned by another profile
    async fn delete_education(&self, profile_id: i64, id: i64) -> Result<bool>;

    async fn delete_experience(&self, profile_id: i64, id: i64) -> Result<bool>;

    /// Ordered children of one kind: sort order (nulls last), then id
    async fn list_children(&self, profile_id: i64, kind: ChildKind) -> Result<Vec<ChildRecord>>;

    /// Insert with sort order `max + 1` (or 1). The read and insert share
    /// one write-locked transaction.
    async fn add_child(&self, profile_id: i64, child: NewChild) -> Result<ChildRecord>;

    async fn delete_child(&self, profile_id: i64, kind: ChildKind, id: i64) -> Result<bool>;

    /// Assign positions 1..N by list index; foreign ids are skipped.
    /// Returns the number of rows updated.
    async fn reorder_children(
        &self,
        profile_id: i64,
        kind: ChildKind,
        ordered_ids: &[i64],
    ) -> Result<usize>;
}
