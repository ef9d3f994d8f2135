use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    General(String),

    #[error("Invalid file type. Please upload an image.")]
    InvalidFileType,

    #[error("File too large. Maximum size is 16MB.")]
    FileTooLarge,

    #[error("No file selected")]
    NoFileStaged,

    #[error("An extraction is already in progress")]
    ExtractionInFlight,

    #[error("Server returned an unreadable response: {0}")]
    InvalidResponse(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
