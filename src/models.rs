use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchInfo {
    pub batch_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadedFile {
    pub filename: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InputJson {
    pub batch_info: BatchInfo,
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenamedFile {
    pub original: String,
    pub sanitized: String,
    pub unique: String,
    /// Empty when the original had no extension.
    pub extension: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    pub batch_id: String,
    pub input_files: Vec<String>,
    pub processing_timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OutputJson {
    pub metadata: Metadata,
    pub renamed_files: Vec<RenamedFile>,
}
