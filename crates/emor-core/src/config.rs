//! Converter settings.
//!
//! The defaults reproduce the fixed behaviour of the header generator: both
//! EMoR parameter files are read from and written to the working directory.

use crate::domain::{EmorError, EmorResult};
use crate::emit::DEFAULT_CLASS_NAME;
use crate::keys::DEFAULT_INDEX_WIDTH;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASENAMES: [&str; 2] = ["emor", "invemor"];
pub const INPUT_EXTENSION: &str = "txt";
pub const OUTPUT_PREFIX: &str = "modpar_";
pub const OUTPUT_EXTENSION: &str = "h";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub class_name: String,
    pub basenames: Vec<String>,
    pub index_width: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            class_name: DEFAULT_CLASS_NAME.to_string(),
            basenames: DEFAULT_BASENAMES.iter().map(|name| name.to_string()).collect(),
            index_width: DEFAULT_INDEX_WIDTH,
        }
    }
}

impl ConverterConfig {
    pub fn with_dirs(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> EmorResult<()> {
        if self.class_name.trim().is_empty() {
            return Err(EmorError::input_validation(
                "INPUT.CONFIG",
                "class name must not be empty",
            ));
        }

        if self.basenames.is_empty() {
            return Err(EmorError::input_validation(
                "INPUT.CONFIG",
                "at least one basename is required",
            ));
        }

        if let Some(position) = self
            .basenames
            .iter()
            .position(|basename| basename.trim().is_empty())
        {
            return Err(EmorError::input_validation(
                "INPUT.CONFIG",
                format!("basename #{} must not be empty", position + 1),
            ));
        }

        Ok(())
    }

    pub fn input_path(&self, basename: &str) -> PathBuf {
        input_path_in(&self.input_dir, basename)
    }

    pub fn output_path(&self, basename: &str) -> PathBuf {
        output_path_in(&self.output_dir, basename)
    }
}

fn input_path_in(dir: &Path, basename: &str) -> PathBuf {
    dir.join(format!("{basename}.{INPUT_EXTENSION}"))
}

fn output_path_in(dir: &Path, basename: &str) -> PathBuf {
    dir.join(format!("{OUTPUT_PREFIX}{basename}.{OUTPUT_EXTENSION}"))
}
