/// The single image the user has selected but not yet submitted.
///
/// Exactly one of these exists at a time; staging a replacement drops the
/// previous one together with its preview data URL. The raw bytes stay in
/// memory so the extract step can build its multipart body without going
/// back to disk.
#[derive(Debug, Clone)]
pub struct StagedFile {
    pub id: String,
    pub source_path: String,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub bytes: Vec<u8>,
    pub preview_url: String,
    pub dimensions: Option<(u32, u32)>,
}
