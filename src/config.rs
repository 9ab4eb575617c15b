use std::path::PathBuf;
use anyhow::{Context, Result};
use log::debug;

pub const INPUT_FILE: &str = "naming_input.json";
pub const OUTPUT_FILE: &str = "naming_output.json";

pub struct Config {
    pub batches_dir: PathBuf,
}

impl Config {
    pub fn new() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Ok(Self::with_batches_dir(current_dir.join("batches")))
    }

    pub fn with_batches_dir(batches_dir: impl Into<PathBuf>) -> Self {
        Self { batches_dir: batches_dir.into() }
    }

    /// One `(name, input, output)` entry per batch sub-directory, sorted by name.
    pub fn get_batch_paths(&self) -> Result<Vec<(String, PathBuf, PathBuf)>> {
        let mut batches = Vec::new();
        let entries = std::fs::read_dir(&self.batches_dir)
            .with_context(|| format!("Failed to read batches directory {}", self.batches_dir.display()))?;
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                let name = entry.file_name().to_string_lossy().to_string();
                let input_path = entry.path().join(INPUT_FILE);
                let output_path = entry.path().join(OUTPUT_FILE);
                debug!("found batch {} at {}", name, entry.path().display());
                batches.push((name, input_path, output_path));
            }
        }
        batches.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(batches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_batch_directories_only() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("second")).unwrap();
        std::fs::create_dir(tmp.path().join("first")).unwrap();
        std::fs::write(tmp.path().join("stray.json"), "{}").unwrap();

        let config = Config::with_batches_dir(tmp.path());
        let batches = config.get_batch_paths().unwrap();

        let names: Vec<_> = batches.iter().map(|b| b.0.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(batches[0].1, tmp.path().join("first").join(INPUT_FILE));
        assert_eq!(batches[0].2, tmp.path().join("first").join(OUTPUT_FILE));
    }

    #[test]
    fn missing_batches_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::with_batches_dir(tmp.path().join("nope"));
        let err = config.get_batch_paths().unwrap_err();
        assert!(err.to_string().contains("Failed to read batches directory"));
    }
}
