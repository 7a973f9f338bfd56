//! Registration and login commands

use researchd_domain::{Registration, Result, User};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Register a new account; the profile row is created alongside.
pub async fn register(ctx: &AppContext, registration: Registration) -> Result<User> {
    execute_command("accounts::register", || ctx.accounts.register(registration)).await
}

/// Verify credentials and return the user.
///
/// Unknown email and wrong password fail identically.
pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<User> {
    execute_command("accounts::login", || ctx.accounts.authenticate(email, password)).await
}

pub async fn get_user(ctx: &AppContext, user_id: i64) -> Result<User> {
    execute_command("accounts::get_user", || ctx.accounts.get_user(user_id)).await
}
