//! Account service - registration and authentication

use std::sync::Arc;

use researchd_common::validation::{EmailValidator, StringValidator, ValidationError, Validator};
use researchd_domain::constants::{
    INSTITUTION_CHOICES, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_OTHER_INSTITUTION_LENGTH,
    MAX_OTHER_POSITION_LENGTH, MIN_PASSWORD_LENGTH, POSITION_CHOICES, TITLE_CHOICES,
};
use researchd_domain::{
    resolve_choice, NewUser, ProfileFields, Registration, ResearchdError, Result, User,
};
use tracing::{info, warn};

use super::ports::{PasswordHasher, UserRepository};
use crate::utils::forms::{check_choice, clean_optional, clean_required, validation_error};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Account service
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
    /// Create a new account service
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Register a user and create their profile.
    ///
    /// Email is trimmed and lower-cased. A taken email yields `Conflict`.
    pub async fn register(&self, registration: Registration) -> Result<User> {
        validate_registration(&registration).map_err(validation_error)?;

        let email = normalize_email(&registration.email);
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(ResearchdError::Conflict(
                "Email already registered. Please login.".to_string(),
            ));
        }

        let password_hash = self.hash_password(registration.password.clone()).await?;

        let profile = ProfileFields {
            title: clean_optional(registration.title.clone()),
            institution: resolve_choice(
                registration.institution.as_deref(),
                registration.other_institution.as_deref(),
            ),
            position: resolve_choice(
                registration.position.as_deref(),
                registration.other_position.as_deref(),
            ),
            ..ProfileFields::default()
        };

        let user = self
            .users
            .create_with_profile(
                NewUser {
                    email,
                    password_hash,
                    first_name: clean_required(&registration.first_name),
                    last_name: clean_required(&registration.last_name),
                },
                profile,
            )
            .await?;

        info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// Verify credentials.
    ///
    /// Unknown email, wrong password and inactive account all produce the
    /// same `AccessDenied` message.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let email = normalize_email(email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            return Err(ResearchdError::AccessDenied(INVALID_CREDENTIALS.to_string()));
        };

        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let stored = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored))
            .await
            .map_err(|e| ResearchdError::Internal(format!("password verification task failed: {e}")))??;

        if !verified || !user.is_active {
            warn!(user_id = user.id, "authentication rejected");
            return Err(ResearchdError::AccessDenied(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        self.users.find_by_id(user_id).await?.ok_or_else(|| ResearchdError::not_found("user", user_id))
    }

    async fn hash_password(&self, password: String) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| ResearchdError::Internal(format!("password hashing task failed: {e}")))?
    }
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_registration(form: &Registration) -> std::result::Result<(), ValidationError> {
    let name_rule = StringValidator::new().not_empty().max_length(MAX_NAME_LENGTH);
    let email = form.email.trim();

    let mut v = Validator::new();
    v.validate_field("email", &email, &EmailValidator::new())
        .validate_field("email", &email, &StringValidator::new().max_length(MAX_EMAIL_LENGTH))
        .validate_field(
            "password",
            &form.password.as_str(),
            &StringValidator::new().trim(false).min_length(MIN_PASSWORD_LENGTH),
        )
        .validate_field("first_name", &form.first_name.as_str(), &name_rule)
        .validate_field("last_name", &form.last_name.as_str(), &name_rule)
        .validate_optional(
            "other_institution",
            form.other_institution.as_deref(),
            &StringValidator::new().max_length(MAX_OTHER_INSTITUTION_LENGTH),
        )
        .validate_optional(
            "other_position",
            form.other_position.as_deref(),
            &StringValidator::new().max_length(MAX_OTHER_POSITION_LENGTH),
        );

    if form.password != form.confirm_password {
        v.add_error("confirm_password", "Passwords must match");
    }

    let mut errors = v.finalize().err().unwrap_or_default();
    check_choice(&mut errors, "title", form.title.as_deref(), TITLE_CHOICES);
    check_choice(&mut errors, "institution", form.institution.as_deref(), INSTITUTION_CHOICES);
    check_choice(&mut errors, "position", form.position.as_deref(), POSITION_CHOICES);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
