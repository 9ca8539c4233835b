use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSelectConfig {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub marker: Option<String>,
    pub extension: Option<String>,
    pub policy: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileDriveConfig {
    pub table: Option<PathBuf>,
    pub output_root: Option<PathBuf>,
    pub interpreter: Option<String>,
    pub script: Option<PathBuf>,
    pub param_dir: Option<PathBuf>,
    pub cutoff: Option<u32>,
    pub gmxrc_path: Option<PathBuf>,
    pub threads: Option<usize>,
    pub source_sel: Option<String>,
    pub target_sel: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub select: Option<FileSelectConfig>,
    pub drive: Option<FileDriveConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}
