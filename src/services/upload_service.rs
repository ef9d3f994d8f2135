use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::GenericImageView;
use tracing::debug;

use crate::error::AppError;
use crate::models::staged_file::StagedFile;

pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/gif",
    "image/bmp",
    "image/webp",
];

pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// MIME type the file claims to be, resolved from its extension the same
/// way a browser file input would declare it.
pub fn declared_mime(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(|ext| mime_guess::from_ext(ext).first())
        .map(|m| m.to_string())
}

pub fn validate(mime_type: &str, size_bytes: u64) -> Result<(), AppError> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime_type.to_lowercase().as_str()) {
        return Err(AppError::InvalidFileType);
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(AppError::FileTooLarge);
    }
    Ok(())
}

pub fn preview_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Validate and stage the image at `path`.
///
/// The size ceiling is checked against metadata before any bytes are read,
/// so an oversized file is rejected without pulling it into memory. The
/// dimension probe is best-effort: a file that declares an image type but
/// does not decode still stages (the server does its own decoding).
pub fn stage_from_path(path: &str) -> Result<StagedFile, AppError> {
    let file_path = Path::new(path);
    let mime_type = declared_mime(file_path).ok_or(AppError::InvalidFileType)?;
    let size_bytes = fs::metadata(file_path)?.len();
    validate(&mime_type, size_bytes)?;

    let bytes = fs::read(file_path)?;
    let dimensions = image::load_from_memory(&bytes).ok().map(|img| img.dimensions());
    let preview_url = preview_data_url(&mime_type, &bytes);

    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string());

    let staged = StagedFile {
        id: uuid::Uuid::new_v4().to_string(),
        source_path: path.to_string(),
        file_name,
        mime_type,
        size_bytes,
        bytes,
        preview_url,
        dimensions,
    };

    debug!(
        id = %staged.id,
        file = %staged.file_name,
        mime = %staged.mime_type,
        size = staged.size_bytes,
        "staged upload"
    );

    Ok(staged)
}
