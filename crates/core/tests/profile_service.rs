//! Integration tests for profile aggregation, children and pictures

mod support;

use researchd_domain::{
    AchievementType, ChildKind, FileUpload, NewAchievement, NewEducation, NewExternalRole,
    ProfileUpdate, PublicationScope, ResearchdError, SectionId, SectionOrder, SocialLinks,
};
use serde_json::json;
use support::{Harness, PNG_BYTES};

fn achievement(title: &str) -> NewAchievement {
    NewAchievement { title: title.into(), kind: AchievementType::Grant, year: Some(2023), description: None }
}

fn base_update() -> ProfileUpdate {
    ProfileUpdate { first_name: "Alice".into(), last_name: "Smith".into(), ..Default::default() }
}

#[tokio::test(flavor = "multi_thread")]
async fn get_or_create_is_idempotent() {
    let h = Harness::new();
    let user = h.store.insert_user_without_profile("Bob", "Jones");

    let first = h.profiles.get_or_create_profile(user.id).await.expect("create");
    let second = h.profiles.get_or_create_profile(user.id).await.expect("read");
    assert_eq!(first.id, second.id);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_or_create_rejects_missing_user() {
    let h = Harness::new();
    let err = h.profiles.get_or_create_profile(999).await.expect_err("no user");
    assert!(matches!(err, ResearchdError::NotFound(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn socials_are_upserted_or_deleted_per_platform() {
    let h = Harness::new();
    let user = h.register("Alice", "Smith", "alice@example.com").await;

    let with_links = ProfileUpdate {
        socials: SocialLinks {
            github: Some("https://github.com/alice".into()),
            twitter: Some("https://twitter.com/alice".into()),
            ..Default::default()
        },
        ..base_update()
    };
    h.profiles.update_profile(user.id, with_links.clone()).await.expect("first update");
    h.profiles.update_profile(user.id, with_links).await.expect("repeat update");

    let view = h.profiles.load_profile_view(user.id, None, PublicationScope::All).await.expect("view");
    let platforms: Vec<_> = view.socials.iter().map(|s| s.platform.as_str()).collect();
    assert_eq!(platforms, vec!["GitHub", "Twitter"]);

    let cleared = ProfileUpdate {
        socials: SocialLinks { github: Some("https://github.com/alice".into()), twitter: Some("  ".into()), ..Default::default() },
        ..base_update()
    };
    h.profiles.update_profile(user.id, cleared).await.expect("clear twitter");

    let view = h.profiles.load_profile_view(user.id, None, PublicationScope::All).await.expect("view");
    assert_eq!(view.socials.len(), 1);
    assert_eq!(view.socials[0].platform, "GitHub");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_profile_resolves_other_choices_and_names() {
    let h = Harness::new();
    let user = h.register("Alice", "Smith", "alice@example.com").await;

    let update = ProfileUpdate {
        first_name: " Alicia ".into(),
        position: Some("Other".into()),
        other_position: Some("Visiting Fellow".into()),
        bio: Some("   ".into()),
        ..base_update()
    };
    let profile = h.profiles.update_profile(user.id, update).await.expect("update");
    assert_eq!(profile.position.as_deref(), Some("Visiting Fellow"));
    assert_eq!(profile.bio, None);

    let user = h.accounts.get_user(user.id).await.expect("user");
    assert_eq!(user.first_name, "Alicia");
}

#[tokio::test(flavor = "multi_thread")]
async fn section_order_round_trips_and_rejects_non_arrays() {
    let h = Harness::new();
    let user = h.register("Alice", "Smith", "alice@example.com").await;

    let order = json!(["papers-section", {"section": "about-section", "visible": false}, "custom-section"]);
    h.profiles.save_section_order(user.id, &order).await.expect("save");

    let view = h.profiles.load_profile_view(user.id, Some(user.id), PublicationScope::Recent).await.expect("view");
    assert!(view.is_owner);
    assert_eq!(serde_json::to_value(&view.section_order).expect("json"), order);
    assert_eq!(view.section_order.entries()[2].section(), &SectionId::Other("custom-section".into()));

    let err = h.profiles.save_section_order(user.id, &json!({"a": 1})).await.expect_err("object");
    assert!(matches!(err, ResearchdError::Validation(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_section_order_falls_back_to_default() {
    let h = Harness::new();
    let user = h.register("Alice", "Smith", "alice@example.com").await;
    h.profiles.save_section_order(user.id, &json!([])).await.expect("save");

    let view = h.profiles.load_profile_view(user.id, None, PublicationScope::Recent).await.expect("view");
    assert!(!view.is_owner);
    assert_eq!(view.section_order, SectionOrder::default());
}

#[tokio::test(flavor = "multi_thread")]
async fn children_get_increasing_sort_order_and_reorder() {
    let h = Harness::new();
    let user = h.register("Alice", "Smith", "alice@example.com").await;

    let a = h.profiles.add_achievement(user.id, achievement("A")).await.expect("a");
    let b = h.profiles.add_achievement(user.id, achievement("B")).await.expect("b");
    assert_eq!((a.sort_order, b.sort_order), (Some(1), Some(2)));

    let updated = h
        .profiles
        .reorder_children(user.id, ChildKind::Achievement, &[b.id, 9_999, a.id])
        .await
        .expect("reorder");
    assert_eq!(updated, 2);

    let view = h.profiles.load_profile_view(user.id, None, PublicationScope::All).await.expect("view");
    let titles: Vec<_> = view.achievements.iter().map(|x| (x.title.as_str(), x.sort_order)).collect();
    assert_eq!(titles, vec![("B", Some(1)), ("A", Some(3))]);
}

#[tokio::test(flavor = "multi_thread")]
async fn cross_user_child_delete_is_not_found_and_keeps_row() {
    let h = Harness::new();
    let alice = h.register("Alice", "Smith", "alice@example.com").await;
    let bob = h.register("Bob", "Jones", "bob@example.com").await;

    let award = h.profiles.add_achievement(alice.id, achievement("Nobel")).await.expect("add");
    let err = h.profiles.delete_achievement(bob.id, award.id).await.expect_err("foreign");
    assert!(matches!(err, ResearchdError::NotFound(_)));
    assert_eq!(h.store.achievement_count(), 1);

    h.profiles.delete_achievement(alice.id, award.id).await.expect("owner delete");
    assert_eq!(h.store.achievement_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn external_roles_and_education_validate_years() {
    let h = Harness::new();
    let user = h.register("Alice", "Smith", "alice@example.com").await;

    let role = NewExternalRole {
        role_title: "Reviewer".into(),
        organization: "Nature".into(),
        start_year: Some(2020),
        end_year: None,
        description: None,
    };
    let role = h.profiles.add_external_role(user.id, role).await.expect("role");
    assert_eq!(role.sort_order, Some(1));

    let bad = NewEducation { degree: "PhD".into(), institution: "UWA".into(), start_year: Some(2010), end_year: Some(2001) };
    assert!(matches!(
        h.profiles.add_education(user.id, bad).await,
        Err(ResearchdError::Validation(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn replacing_profile_picture_discards_previous_blob() {
    let h = Harness::new();
    let user = h.register("Alice", "Smith", "alice@example.com").await;

    let first = h
        .profiles
        .upload_profile_picture(user.id, FileUpload::new("me.png", PNG_BYTES.to_vec()))
        .await
        .expect("first picture");
    let first_ref = first.profile_picture.expect("reference");
    assert!(h.blobs.contains(&first_ref));

    let second = h
        .profiles
        .upload_profile_picture(user.id, FileUpload::new("me2.png", PNG_BYTES.to_vec()))
        .await
        .expect("second picture");
    assert!(!h.blobs.contains(&first_ref));
    assert!(h.blobs.contains(second.profile_picture.as_deref().expect("reference")));
}

#[tokio::test(flavor = "multi_thread")]
async fn photo_with_mismatched_content_is_rejected() {
    let h = Harness::new();
    let user = h.register("Alice", "Smith", "alice@example.com").await;

    let err = h
        .profiles
        .add_photo(user.id, FileUpload::new("cat.jpg", PNG_BYTES.to_vec()), None)
        .await
        .expect_err("mismatch");
    assert!(matches!(err, ResearchdError::Validation(_)));
    assert_eq!(h.blobs.len(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_profile_removes_rows_and_blobs() {
    let h = Harness::new();
    let user = h.register("Alice", "Smith", "alice@example.com").await;

    h.profiles
        .add_photo(user.id, FileUpload::new("lab.png", PNG_BYTES.to_vec()), Some("Lab".into()))
        .await
        .expect("photo");
    h.profiles.add_achievement(user.id, achievement("A")).await.expect("achievement");
    assert_eq!(h.blobs.len(), 1);

    h.profiles.delete_profile(user.id).await.expect("delete");
    assert_eq!(h.blobs.len(), 0);
    assert_eq!(h.store.photo_count(), 0);
    assert_eq!(h.store.achievement_count(), 0);

    // The next access recreates an empty profile
    let view = h.profiles.load_profile_view(user.id, None, PublicationScope::All).await.expect("view");
    assert!(view.photos.is_empty());
}
