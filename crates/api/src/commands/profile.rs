//! Profile commands: the composed view, edits, child collections and images

use researchd_domain::{
    Achievement, ChildKind, Education, Experience, ExternalRole, FileUpload, NewAchievement,
    NewEducation, NewExperience, NewExternalRole, Photo, Profile, ProfileUpdate, ProfileView,
    PublicationScope, Result, SectionOrder,
};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Load the profile page of `user_id` as seen by `viewer_id`.
///
/// The profile row is created on first access.
pub async fn get_profile(
    ctx: &AppContext,
    user_id: i64,
    viewer_id: Option<i64>,
    scope: PublicationScope,
) -> Result<ProfileView> {
    execute_command("profile::get_profile", || {
        ctx.profiles.load_profile_view(user_id, viewer_id, scope)
    })
    .await
}

pub async fn edit_profile(ctx: &AppContext, user_id: i64, update: ProfileUpdate) -> Result<Profile> {
    execute_command("profile::edit_profile", || ctx.profiles.update_profile(user_id, update)).await
}

/// Store the comma-joined interests string verbatim
pub async fn set_research_interests(ctx: &AppContext, user_id: i64, interests: &str) -> Result<()> {
    execute_command("profile::set_research_interests", || {
        ctx.profiles.set_research_interests(user_id, interests)
    })
    .await
}

/// Persist a section order given as JSON; returns the parsed order.
pub async fn save_section_order(
    ctx: &AppContext,
    user_id: i64,
    order: serde_json::Value,
) -> Result<SectionOrder> {
    execute_command("profile::save_section_order", || async move {
        ctx.profiles.save_section_order(user_id, &order).await
    })
    .await
}

pub async fn add_education(ctx: &AppContext, user_id: i64, entry: NewEducation) -> Result<Education> {
    execute_command("profile::add_education", || ctx.profiles.add_education(user_id, entry)).await
}

pub async fn delete_education(ctx: &AppContext, user_id: i64, id: i64) -> Result<()> {
    execute_command("profile::delete_education", || ctx.profiles.delete_education(user_id, id)).await
}

pub async fn add_experience(ctx: &AppContext, user_id: i64, entry: NewExperience) -> Result<Experience> {
    execute_command("profile::add_experience", || ctx.profiles.add_experience(user_id, entry)).await
}

pub async fn delete_experience(ctx: &AppContext, user_id: i64, id: i64) -> Result<()> {
    execute_command("profile::delete_experience", || ctx.profiles.delete_experience(user_id, id))
        .await
}

/// Append an achievement at the next sort position
pub async fn add_achievement(
    ctx: &AppContext,
    user_id: i64,
    achievement: NewAchievement,
) -> Result<Achievement> {
    execute_command("profile::add_achievement", || ctx.profiles.add_achievement(user_id, achievement))
        .await
}

pub async fn delete_achievement(ctx: &AppContext, user_id: i64, id: i64) -> Result<()> {
    execute_command("profile::delete_achievement", || ctx.profiles.delete_achievement(user_id, id))
        .await
}

/// Append an external role at the next sort position
pub async fn add_external_role(
    ctx: &AppContext,
    user_id: i64,
    role: NewExternalRole,
) -> Result<ExternalRole> {
    execute_command("profile::add_external_role", || ctx.profiles.add_external_role(user_id, role))
        .await
}

pub async fn delete_external_role(ctx: &AppContext, user_id: i64, id: i64) -> Result<()> {
    execute_command("profile::delete_external_role", || {
        ctx.profiles.delete_external_role(user_id, id)
    })
    .await
}

/// Renumber achievements or external roles 1..N in the given order.
///
/// Ids the user does not own are skipped; returns how many rows moved.
pub async fn reorder_items(
    ctx: &AppContext,
    user_id: i64,
    kind: ChildKind,
    ordered_ids: Vec<i64>,
) -> Result<usize> {
    execute_command("profile::reorder_items", || async move {
        ctx.profiles.reorder_children(user_id, kind, &ordered_ids).await
    })
    .await
}

/// Replace the profile picture; the previous image is removed.
pub async fn upload_profile_picture(
    ctx: &AppContext,
    user_id: i64,
    upload: FileUpload,
) -> Result<Profile> {
    execute_command("profile::upload_profile_picture", || {
        ctx.profiles.upload_profile_picture(user_id, upload)
    })
    .await
}

pub async fn add_photo(
    ctx: &AppContext,
    user_id: i64,
    upload: FileUpload,
    caption: Option<String>,
) -> Result<Photo> {
    execute_command("profile::add_photo", || ctx.profiles.add_photo(user_id, upload, caption)).await
}

pub async fn delete_photo(ctx: &AppContext, user_id: i64, photo_id: i64) -> Result<()> {
    execute_command("profile::delete_photo", || ctx.profiles.delete_photo(user_id, photo_id)).await
}

/// Delete the profile, every owned row and the blobs they referenced.
///
/// The user account stays.
pub async fn delete_profile(ctx: &AppContext, user_id: i64) -> Result<()> {
    execute_command("profile::delete_profile", || ctx.profiles.delete_profile(user_id)).await
}
