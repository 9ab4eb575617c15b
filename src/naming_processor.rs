use crate::models::{InputJson, Metadata, OutputJson, RenamedFile};
use crate::utils::{ensure_directory_exists, generate_unique_filename, sanitize_filename, split_extension};
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

pub struct NamingProcessor;

impl NamingProcessor {
    pub fn rename(filename: &str) -> RenamedFile {
        let (_, extension) = split_extension(filename);
        RenamedFile {
            original: filename.to_string(),
            sanitized: sanitize_filename(filename),
            unique: generate_unique_filename(filename),
            extension: extension.to_string(),
        }
    }

    pub fn process_batch(input_path: &Path, output_path: &Path) -> Result<()> {
        let input_json = std::fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read input JSON at {}", input_path.display()))?;
        let input: InputJson = serde_json::from_str(&input_json)
            .with_context(|| format!("Failed to parse input JSON at {}", input_path.display()))?;

        let filenames: Vec<String> = input.files.into_iter().map(|f| f.filename).collect();
        info!("Batch {}: {} file(s)", input.batch_info.batch_id, filenames.len());

        let output = Self::build_output(input.batch_info.batch_id, filenames);
        Self::write_output(&output, output_path)
    }

    pub fn process_directory(dir: &Path, output_path: &Path) -> Result<()> {
        let filenames = Self::collect_directory_filenames(dir)?;
        let batch_id = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| dir.display().to_string());
        info!("Directory {}: {} file(s)", dir.display(), filenames.len());

        let output = Self::build_output(batch_id, filenames);
        Self::write_output(&output, output_path)
    }

    /// File names (last component only) of every regular file under `dir`, sorted.
    pub fn collect_directory_filenames(dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(dir) {
            let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn build_output(batch_id: String, filenames: Vec<String>) -> OutputJson {
        let mut seen = HashSet::new();
        let mut renamed_files = Vec::with_capacity(filenames.len());

        for filename in &filenames {
            let renamed = Self::rename(filename);
            debug!("{} -> {} / {}", renamed.original, renamed.sanitized, renamed.unique);
            if !seen.insert(renamed.sanitized.clone()) {
                warn!("Sanitized name {} collides within batch {}", renamed.sanitized, batch_id);
            }
            renamed_files.push(renamed);
        }

        OutputJson {
            metadata: Metadata {
                batch_id,
                input_files: filenames,
                processing_timestamp: Utc::now().to_rfc3339(),
            },
            renamed_files,
        }
    }

    fn write_output(output: &OutputJson, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_directory_exists(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(output_path, serde_json::to_string_pretty(output)?)
            .with_context(|| format!("Failed to write output to {}", output_path.display()))?;
        info!("Wrote {}", output_path.display());
        Ok(())
    }
}
