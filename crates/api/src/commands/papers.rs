//! Paper commands: upload, edit, listing, download and deletion

use researchd_core::{Download, StoredPaper};
use researchd_domain::{FileUpload, PaperDetail, PaperMetadata, Result};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Store a PDF and record the publication pointing at it.
pub async fn upload_paper(
    ctx: &AppContext,
    user_id: i64,
    metadata: PaperMetadata,
    upload: FileUpload,
) -> Result<StoredPaper> {
    execute_command("papers::upload_paper", || ctx.papers.upload_paper(user_id, metadata, upload))
        .await
}

/// Overwrite metadata; a new PDF replaces the stored one.
pub async fn edit_paper(
    ctx: &AppContext,
    user_id: i64,
    publication_id: i64,
    metadata: PaperMetadata,
    new_file: Option<FileUpload>,
) -> Result<StoredPaper> {
    execute_command("papers::edit_paper", || {
        ctx.papers.edit_paper(user_id, publication_id, metadata, new_file)
    })
    .await
}

pub async fn my_papers(ctx: &AppContext, user_id: i64) -> Result<Vec<StoredPaper>> {
    execute_command("papers::my_papers", || ctx.papers.my_papers(user_id)).await
}

/// Public detail view of one publication with its owner's name
pub async fn get_paper(ctx: &AppContext, publication_id: i64) -> Result<PaperDetail> {
    execute_command("papers::get_paper", || ctx.papers.get_paper(publication_id)).await
}

/// Resolve an owned file for reading; foreign files are `AccessDenied`.
pub async fn download_file(ctx: &AppContext, user_id: i64, file_id: i64) -> Result<Download> {
    execute_command("papers::download_file", || ctx.papers.download_reference(user_id, file_id))
        .await
}

pub async fn delete_paper(ctx: &AppContext, user_id: i64, publication_id: i64) -> Result<()> {
    execute_command("papers::delete_paper", || ctx.papers.delete_paper(user_id, publication_id))
        .await
}

/// Delete a stored file; the publication stays without it.
pub async fn delete_file(ctx: &AppContext, user_id: i64, file_id: i64) -> Result<()> {
    execute_command("papers::delete_file", || ctx.papers.delete_file(user_id, file_id)).await
}
