//! Database maintenance commands

use std::sync::Arc;

use researchd_domain::Result;
use researchd_infra::database::{seed_demo_data, SeedOutcome};
use serde::Serialize;
use tracing::info;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Response from the seed command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    /// Users inserted; zero when the database already had data
    pub users_created: usize,
    pub skipped: bool,
    /// Human-readable summary
    pub message: String,
}

/// Populate the demo researchers unless the database already has users.
pub async fn seed_database(ctx: &AppContext) -> Result<SeedResponse> {
    execute_command("database::seed_database", || async {
        let outcome = seed_demo_data(&ctx.db, Arc::clone(&ctx.hasher)).await?;
        let response = match outcome {
            SeedOutcome::Inserted { users } => SeedResponse {
                users_created: users,
                skipped: false,
                message: format!("Seeded {users} researchers"),
            },
            SeedOutcome::Skipped => SeedResponse {
                users_created: 0,
                skipped: true,
                message: "Database already contains users; nothing seeded".to_string(),
            },
        };
        info!(users_created = response.users_created, skipped = response.skipped, "seed finished");
        Ok(response)
    })
    .await
}
