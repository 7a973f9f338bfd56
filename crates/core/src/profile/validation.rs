//! Form validation for profile edits and child entries

use researchd_common::validation::{
    StringValidator, UrlValidator, ValidationError, ValidationResult, Validator,
};
use researchd_domain::constants::{
    INSTITUTION_CHOICES, MAX_ACHIEVEMENT_TITLE_LENGTH, MAX_BIO_LENGTH, MAX_CAPTION_LENGTH,
    MAX_DEPARTMENT_LENGTH, MAX_ENTRY_TEXT_LENGTH, MAX_LOCATION_LENGTH, MAX_NAME_LENGTH,
    MAX_OTHER_INSTITUTION_LENGTH, MAX_OTHER_POSITION_LENGTH, MAX_SOCIAL_URL_LENGTH,
    POSITION_CHOICES, TITLE_CHOICES,
};
use researchd_domain::{NewAchievement, NewChild, NewEducation, NewExperience, NewExternalRole, ProfileUpdate};

use crate::utils::forms::check_choice;

fn required(max: usize) -> StringValidator {
    StringValidator::new().not_empty().max_length(max)
}

fn optional(max: usize) -> StringValidator {
    StringValidator::new().max_length(max)
}

fn merge(v: Validator, extra: ValidationError) -> ValidationResult<()> {
    let mut errors = v.finalize().err().unwrap_or_default();
    errors.merge(extra);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub(crate) fn validate_profile_update(form: &ProfileUpdate) -> ValidationResult<()> {
    let url_rule = UrlValidator::new();
    let url_length = optional(MAX_SOCIAL_URL_LENGTH);

    let mut v = Validator::new();
    v.validate_field("first_name", &form.first_name.as_str(), &required(MAX_NAME_LENGTH))
        .validate_field("last_name", &form.last_name.as_str(), &required(MAX_NAME_LENGTH))
        .validate_optional("bio", form.bio.as_deref(), &optional(MAX_BIO_LENGTH))
        .validate_optional("location", form.location.as_deref(), &optional(MAX_LOCATION_LENGTH))
        .validate_optional("department", form.department.as_deref(), &optional(MAX_DEPARTMENT_LENGTH))
        .validate_optional(
            "other_institution",
            form.other_institution.as_deref(),
            &optional(MAX_OTHER_INSTITUTION_LENGTH),
        )
        .validate_optional(
            "other_position",
            form.other_position.as_deref(),
            &optional(MAX_OTHER_POSITION_LENGTH),
        );

    for (platform, url) in form.socials.entries() {
        let field = format!("{}_url", platform.as_str().to_lowercase());
        v.validate_optional(&field, url, &url_rule).validate_optional(&field, url, &url_length);
    }

    let mut choices = ValidationError::new();
    check_choice(&mut choices, "title", form.title.as_deref(), TITLE_CHOICES);
    check_choice(&mut choices, "institution", form.institution.as_deref(), INSTITUTION_CHOICES);
    check_choice(&mut choices, "position", form.position.as_deref(), POSITION_CHOICES);

    merge(v, choices)
}

pub(crate) fn validate_education(entry: &NewEducation) -> ValidationResult<()> {
    let mut v = Validator::new();
    v.validate_field("degree", &entry.degree.as_str(), &required(MAX_ENTRY_TEXT_LENGTH))
        .validate_field("institution", &entry.institution.as_str(), &required(MAX_ENTRY_TEXT_LENGTH));
    check_years(&mut v, entry.start_year, entry.end_year);
    v.finalize()
}

pub(crate) fn validate_experience(entry: &NewExperience) -> ValidationResult<()> {
    let mut v = Validator::new();
    v.validate_field("role", &entry.role.as_str(), &required(MAX_ENTRY_TEXT_LENGTH))
        .validate_field("institution", &entry.institution.as_str(), &required(MAX_ENTRY_TEXT_LENGTH));
    check_years(&mut v, entry.start_year, entry.end_year);
    v.finalize()
}

pub(crate) fn validate_child(child: &NewChild) -> ValidationResult<()> {
    match child {
        NewChild::Achievement(a) => validate_achievement(a),
        NewChild::ExternalRole(r) => validate_external_role(r),
    }
}

fn validate_achievement(entry: &NewAchievement) -> ValidationResult<()> {
    let mut v = Validator::new();
    v.validate_field("title", &entry.title.as_str(), &required(MAX_ACHIEVEMENT_TITLE_LENGTH));
    v.finalize()
}

fn validate_external_role(entry: &NewExternalRole) -> ValidationResult<()> {
    let mut v = Validator::new();
    v.validate_field("role_title", &entry.role_title.as_str(), &required(MAX_ENTRY_TEXT_LENGTH))
        .validate_field("organization", &entry.organization.as_str(), &required(MAX_ENTRY_TEXT_LENGTH));
    check_years(&mut v, entry.start_year, entry.end_year);
    v.finalize()
}

pub(crate) fn validate_caption(caption: Option<&str>) -> ValidationResult<()> {
    let mut v = Validator::new();
    v.validate_optional("caption", caption, &optional(MAX_CAPTION_LENGTH));
    v.finalize()
}

fn check_years(v: &mut Validator, start: Option<i32>, end: Option<i32>) {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            v.add_error("end_year", "End year cannot be before start year");
        }
    }
}
