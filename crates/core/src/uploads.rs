//! Server-side validation of uploaded files
//!
//! The client-declared filename is never trusted on its own: the extension
//! must be allowed *and* the content must look like that type.

use chrono::{DateTime, Utc};
use image::ImageFormat;
use researchd_common::validation::ValidationError;
use researchd_domain::constants::{
    IMAGE_EXTENSIONS, MAX_STORED_FILENAME_LENGTH, PAPER_EXTENSIONS, PDF_MAGIC,
};
use researchd_domain::{file_extension, sanitize_filename, FileUpload};

const FILE_FIELD: &str = "file";

fn check_size(upload: &FileUpload, max_bytes: u64) -> Result<(), ValidationError> {
    if upload.is_empty() {
        return Err(ValidationError::field(FILE_FIELD, "Uploaded file is empty"));
    }
    if upload.len() as u64 > max_bytes {
        return Err(ValidationError::field(
            FILE_FIELD,
            format!("File exceeds the maximum upload size of {max_bytes} bytes"),
        ));
    }
    Ok(())
}

fn allowed_extension(upload: &FileUpload, allowed: &[&str], message: &str) -> Result<String, ValidationError> {
    file_extension(&upload.filename)
        .filter(|ext| allowed.contains(&ext.as_str()))
        .ok_or_else(|| ValidationError::field(FILE_FIELD, message))
}

/// Validate a paper upload; returns the lower-cased extension.
pub fn validate_paper(upload: &FileUpload, max_bytes: u64) -> Result<String, ValidationError> {
    let ext = allowed_extension(upload, PAPER_EXTENSIONS, "Only PDF files are allowed!")?;
    check_size(upload, max_bytes)?;
    if !upload.bytes.starts_with(PDF_MAGIC) {
        return Err(ValidationError::field(FILE_FIELD, "File content is not a PDF document"));
    }
    Ok(ext)
}

/// Validate a picture or photo upload; returns the lower-cased extension.
pub fn validate_image(upload: &FileUpload, max_bytes: u64) -> Result<String, ValidationError> {
    let ext = allowed_extension(
        upload,
        IMAGE_EXTENSIONS,
        "Only image files (JPG, PNG, GIF) are allowed!",
    )?;
    check_size(upload, max_bytes)?;

    let sniffed = image::guess_format(&upload.bytes).ok();
    let matches = match (ext.as_str(), sniffed) {
        ("jpg" | "jpeg", Some(ImageFormat::Jpeg)) => true,
        ("png", Some(ImageFormat::Png)) => true,
        ("gif", Some(ImageFormat::Gif)) => true,
        _ => false,
    };
    if !matches {
        return Err(ValidationError::field(
            FILE_FIELD,
            format!("File content does not match the .{ext} extension"),
        ));
    }
    Ok(ext)
}

/// Display name recorded for an upload: the sanitized original, or
/// `upload.<ext>` when sanitizing leaves no name in front of the validated
/// extension.
pub fn display_name(original: &str, extension: &str) -> String {
    let sanitized = sanitize_filename(original);
    if file_extension(&sanitized).as_deref() == Some(extension.to_ascii_lowercase().as_str()) {
        sanitized
    } else {
        format!("upload.{extension}")
    }
}

/// Collision-resistant blob name: UTC timestamp (microseconds) plus the
/// sanitized original name.
pub fn blob_name(original: &str, extension: &str, now: DateTime<Utc>) -> String {
    let stamp = now.format("%Y%m%d_%H%M%S_%6f");
    let mut name = format!("{stamp}_{}", display_name(original, extension));

    if name.len() > MAX_STORED_FILENAME_LENGTH {
        // Keep the extension; the name is pure ASCII so byte slicing is safe
        let suffix = format!(".{extension}");
        name.truncate(MAX_STORED_FILENAME_LENGTH - suffix.len());
        name.push_str(&suffix);
    }
    name
}
