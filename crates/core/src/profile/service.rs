//! Profile aggregation service - core business logic

use std::sync::Arc;

use chrono::Utc;
use researchd_domain::{
    resolve_choice, Achievement, ChildKind, ChildRecord, Education, Experience, ExternalRole,
    FileUpload, NewAchievement, NewChild, NewEducation, NewExperience, NewExternalRole, Photo,
    Profile, ProfileFields, ProfileUpdate, ProfileView, PublicationScope, ResearchdError, Result,
    SectionOrder,
};
use tracing::{debug, info};

use super::ports::{EntryRepository, ProfileChanges, ProfileRepository};
use super::validation::{
    validate_caption, validate_child, validate_education, validate_experience,
    validate_profile_update,
};
use crate::account::ports::UserRepository;
use crate::blob_ports::{discard_blob, BlobKind, BlobStore};
use crate::papers::ports::PublicationRepository;
use crate::uploads::{blob_name, validate_image};
use crate::utils::forms::{clean_optional, clean_required, validation_error};

/// Profile aggregation service
pub struct ProfileService {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn ProfileRepository>,
    entries: Arc<dyn EntryRepository>,
    publications: Arc<dyn PublicationRepository>,
    blobs: Arc<dyn BlobStore>,
    max_upload_bytes: u64,
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(
        users: Arc<dyn UserRepository>,
        profiles: Arc<dyn ProfileRepository>,
        entries: Arc<dyn EntryRepository>,
        publications: Arc<dyn PublicationRepository>,
        blobs: Arc<dyn BlobStore>,
        max_upload_bytes: u64,
    ) -> Self {
        Self { users, profiles, entries, publications, blobs, max_upload_bytes }
    }

    /// Return the user's profile, creating an empty one on first access.
    ///
    /// Every read path that needs a profile goes through here.
    pub async fn get_or_create_profile(&self, user_id: i64) -> Result<Profile> {
        self.profiles.get_or_create(user_id).await
    }

    /// Compose the full profile page for `user_id` as seen by `viewer_id`.
    pub async fn load_profile_view(
        &self,
        user_id: i64,
        viewer_id: Option<i64>,
        scope: PublicationScope,
    ) -> Result<ProfileView> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ResearchdError::not_found("user", user_id))?;
        let profile = self.get_or_create_profile(user_id).await?;
        let pid = profile.id;

        let (educations, experiences, achievements, external_roles, publications, socials, photos) = tokio::try_join!(
            self.entries.list_educations(pid),
            self.entries.list_experiences(pid),
            self.entries.list_children(pid, ChildKind::Achievement),
            self.entries.list_children(pid, ChildKind::ExternalRole),
            self.publications.list_by_profile(pid, scope.limit()),
            self.profiles.list_socials(pid),
            self.profiles.list_photos(pid),
        )?;

        debug!(user_id, profile_id = pid, ?scope, "profile view loaded");

        Ok(ProfileView {
            is_owner: viewer_id == Some(user_id),
            section_order: profile.resolved_section_order(),
            research_interests: profile.interests(),
            achievements: achievements.into_iter().filter_map(into_achievement).collect(),
            external_roles: external_roles.into_iter().filter_map(into_external_role).collect(),
            user,
            profile,
            educations,
            experiences,
            publications,
            socials,
            photos,
        })
    }

    /// Apply the edit-profile form: names, scalar fields and socials in one
    /// transaction.
    pub async fn update_profile(&self, user_id: i64, update: ProfileUpdate) -> Result<Profile> {
        validate_profile_update(&update).map_err(validation_error)?;

        let socials = update
            .socials
            .entries()
            .map(|(platform, url)| (platform, url.map(str::to_string)))
            .collect();

        let changes = ProfileChanges {
            first_name: clean_required(&update.first_name),
            last_name: clean_required(&update.last_name),
            fields: ProfileFields {
                title: clean_optional(update.title),
                institution: resolve_choice(
                    update.institution.as_deref(),
                    update.other_institution.as_deref(),
                ),
                position: resolve_choice(update.position.as_deref(), update.other_position.as_deref()),
                department: clean_optional(update.department),
                bio: clean_optional(update.bio),
                location: clean_optional(update.location),
            },
            socials,
        };

        let profile = self.profiles.apply_changes(user_id, changes).await?;
        info!(user_id, profile_id = profile.id, "profile updated");
        Ok(profile)
    }

    /// Store the interests string exactly as given
    pub async fn set_research_interests(&self, user_id: i64, raw: &str) -> Result<()> {
        let profile = self.get_or_create_profile(user_id).await?;
        self.profiles.set_research_interests(profile.id, raw).await
    }

    /// Validate and persist a section order; returns the parsed order.
    pub async fn save_section_order(
        &self,
        user_id: i64,
        order: &serde_json::Value,
    ) -> Result<SectionOrder> {
        let order = SectionOrder::from_value(order).map_err(ResearchdError::Validation)?;
        let json = order
            .to_json()
            .map_err(|e| ResearchdError::Internal(format!("section order serialization failed: {e}")))?;

        let profile = self.get_or_create_profile(user_id).await?;
        self.profiles.set_section_order(profile.id, &json).await?;
        Ok(order)
    }

    // ------------------------------------------------------------------
    // Ordered children (achievements, external roles)
    // ------------------------------------------------------------------

    /// Append an ordered child at the next sort position
    pub async fn add_child(&self, user_id: i64, child: NewChild) -> Result<ChildRecord> {
        validate_child(&child).map_err(validation_error)?;
        let child = normalize_child(child);

        let profile = self.get_or_create_profile(user_id).await?;
        let record = self.entries.add_child(profile.id, child).await?;
        info!(user_id, kind = %record.kind(), id = record.id(), sort_order = ?record.sort_order(), "child added");
        Ok(record)
    }

    /// Delete an owned child; foreign or missing ids are `NotFound`
    pub async fn delete_child(&self, user_id: i64, kind: ChildKind, id: i64) -> Result<()> {
        let not_found = || ResearchdError::not_found(kind.as_str(), id);
        let profile = self.profiles.find_by_user(user_id).await?.ok_or_else(not_found)?;

        if !self.entries.delete_child(profile.id, kind, id).await? {
            return Err(not_found());
        }
        info!(user_id, %kind, id, "child deleted");
        Ok(())
    }

    /// Assign positions 1..N in the given order; returns rows updated
    pub async fn reorder_children(&self, user_id: i64, kind: ChildKind, ordered_ids: &[i64]) -> Result<usize> {
        let Some(profile) = self.profiles.find_by_user(user_id).await? else {
            return Ok(0);
        };
        let updated = self.entries.reorder_children(profile.id, kind, ordered_ids).await?;
        if updated < ordered_ids.len() {
            debug!(user_id, %kind, requested = ordered_ids.len(), updated, "reorder skipped foreign ids");
        }
        Ok(updated)
    }

    pub async fn add_achievement(&self, user_id: i64, achievement: NewAchievement) -> Result<Achievement> {
        match self.add_child(user_id, NewChild::Achievement(achievement)).await? {
            ChildRecord::Achievement(a) => Ok(a),
            ChildRecord::ExternalRole(_) => Err(ResearchdError::Internal("unexpected child kind".into())),
        }
    }

    pub async fn delete_achievement(&self, user_id: i64, id: i64) -> Result<()> {
        self.delete_child(user_id, ChildKind::Achievement, id).await
    }

    pub async fn add_external_role(&self, user_id: i64, role: NewExternalRole) -> Result<ExternalRole> {
        match self.add_child(user_id, NewChild::ExternalRole(role)).await? {
            ChildRecord::ExternalRole(r) => Ok(r),
            ChildRecord::Achievement(_) => Err(ResearchdError::Internal("unexpected child kind".into())),
        }
    }

    pub async fn delete_external_role(&self, user_id: i64, id: i64) -> Result<()> {
        self.delete_child(user_id, ChildKind::ExternalRole, id).await
    }

    // ------------------------------------------------------------------
    // Education / experience
    // ------------------------------------------------------------------

    pub async fn add_education(&self, user_id: i64, entry: NewEducation) -> Result<Education> {
        validate_education(&entry).map_err(validation_error)?;
        let entry = NewEducation {
            degree: clean_required(&entry.degree),
            institution: clean_required(&entry.institution),
            ..entry
        };
        let profile = self.get_or_create_profile(user_id).await?;
        self.entries.add_education(profile.id, entry).await
    }

    pub async fn delete_education(&self, user_id: i64, id: i64) -> Result<()> {
        let not_found = || ResearchdError::not_found("education", id);
        let profile = self.profiles.find_by_user(user_id).await?.ok_or_else(not_found)?;
        if self.entries.delete_education(profile.id, id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    pub async fn add_experience(&self, user_id: i64, entry: NewExperience) -> Result<Experience> {
        validate_experience(&entry).map_err(validation_error)?;
        let entry = NewExperience {
            role: clean_required(&entry.role),
            institution: clean_required(&entry.institution),
            ..entry
        };
        let profile = self.get_or_create_profile(user_id).await?;
        self.entries.add_experience(profile.id, entry).await
    }

    pub async fn delete_experience(&self, user_id: i64, id: i64) -> Result<()> {
        let not_found = || ResearchdError::not_found("experience", id);
        let profile = self.profiles.find_by_user(user_id).await?.ok_or_else(not_found)?;
        if self.entries.delete_experience(profile.id, id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    // ------------------------------------------------------------------
    // Pictures and photos
    // ------------------------------------------------------------------

    /// Store a new profile picture and drop the previous one.
    pub async fn upload_profile_picture(&self, user_id: i64, upload: FileUpload) -> Result<Profile> {
        let ext = validate_image(&upload, self.max_upload_bytes).map_err(validation_error)?;
        let mut profile = self.get_or_create_profile(user_id).await?;

        let name = blob_name(&upload.filename, &ext, Utc::now());
        let reference = self.blobs.put(BlobKind::ProfilePicture, &name, &upload.bytes).await?;

        let previous = match self.profiles.set_profile_picture(profile.id, Some(reference.clone())).await {
            Ok(previous) => previous,
            Err(err) => {
                discard_blob(self.blobs.as_ref(), &reference).await;
                return Err(err);
            }
        };

        if let Some(previous) = previous.filter(|prev| *prev != reference) {
            discard_blob(self.blobs.as_ref(), &previous).await;
        }

        info!(user_id, reference = %reference, "profile picture updated");
        profile.profile_picture = Some(reference);
        Ok(profile)
    }

    pub async fn add_photo(&self, user_id: i64, upload: FileUpload, caption: Option<String>) -> Result<Photo> {
        validate_caption(caption.as_deref()).map_err(validation_error)?;
        let ext = validate_image(&upload, self.max_upload_bytes).map_err(validation_error)?;
        let profile = self.get_or_create_profile(user_id).await?;

        let name = blob_name(&upload.filename, &ext, Utc::now());
        let reference = self.blobs.put(BlobKind::Photo, &name, &upload.bytes).await?;

        match self.profiles.add_photo(profile.id, reference.clone(), clean_optional(caption)).await {
            Ok(photo) => Ok(photo),
            Err(err) => {
                discard_blob(self.blobs.as_ref(), &reference).await;
                Err(err)
            }
        }
    }

    pub async fn delete_photo(&self, user_id: i64, photo_id: i64) -> Result<()> {
        let not_found = || ResearchdError::not_found("photo", photo_id);
        let profile = self.profiles.find_by_user(user_id).await?.ok_or_else(not_found)?;
        let photo = self.profiles.delete_photo(profile.id, photo_id).await?.ok_or_else(not_found)?;

        discard_blob(self.blobs.as_ref(), &photo.storage_ref).await;
        Ok(())
    }

    /// Delete the profile with every owned row, then its blobs.
    pub async fn delete_profile(&self, user_id: i64) -> Result<()> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ResearchdError::NotFound(format!("profile for user {user_id} not found")))?;

        let references = self.profiles.delete_profile(profile.id).await?;
        info!(user_id, profile_id = profile.id, blobs = references.len(), "profile deleted");

        for reference in &references {
            discard_blob(self.blobs.as_ref(), reference).await;
        }
        Ok(())
    }
}

fn normalize_child(child: NewChild) -> NewChild {
    match child {
        NewChild::Achievement(a) => NewChild::Achievement(NewAchievement {
            title: clean_required(&a.title),
            description: clean_optional(a.description),
            ..a
        }),
        NewChild::ExternalRole(r) => NewChild::ExternalRole(NewExternalRole {
            role_title: clean_required(&r.role_title),
            organization: clean_required(&r.organization),
            description: clean_optional(r.description),
            ..r
        }),
    }
}

fn into_achievement(record: ChildRecord) -> Option<Achievement> {
    match record {
        ChildRecord::Achievement(a) => Some(a),
        ChildRecord::ExternalRole(_) => None,
    }
}

fn into_external_role(record: ChildRecord) -> Option<ExternalRole> {
    match record {
        ChildRecord::ExternalRole(r) => Some(r),
        ChildRecord::Achievement(_) => None,
    }
}
