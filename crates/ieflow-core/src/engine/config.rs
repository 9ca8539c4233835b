use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// Which qualifying score files of a folder take part in the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreFilePolicy {
    /// Only the first qualifying file (in sorted order) is scanned.
    #[default]
    FirstMatch,
    /// The minimum is taken across every qualifying file.
    AllMatches,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    pub root: PathBuf,
    pub output_path: PathBuf,
    /// Substring a score file's name must contain to qualify.
    pub marker: String,
    /// Score file extension, without the leading dot.
    pub extension: String,
    pub policy: ScoreFilePolicy,
}

#[derive(Default)]
pub struct SelectionConfigBuilder {
    root: Option<PathBuf>,
    output_path: Option<PathBuf>,
    marker: Option<String>,
    extension: Option<String>,
    policy: Option<ScoreFilePolicy>,
}

impl SelectionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, path: PathBuf) -> Self {
        self.root = Some(path);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
    pub fn policy(mut self, policy: ScoreFilePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<SelectionConfig, ConfigError> {
        let marker = self
            .marker
            .ok_or(ConfigError::MissingParameter("marker"))?;
        if marker.is_empty() {
            return Err(ConfigError::InvalidValue {
                parameter: "marker",
                reason: "must not be empty".to_string(),
            });
        }
        let extension = self
            .extension
            .ok_or(ConfigError::MissingParameter("extension"))?
            .trim_start_matches('.')
            .to_string();
        if extension.is_empty() {
            return Err(ConfigError::InvalidValue {
                parameter: "extension",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(SelectionConfig {
            root: self.root.ok_or(ConfigError::MissingParameter("root"))?,
            output_path: self
                .output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
            marker,
            extension,
            policy: self.policy.unwrap_or_default(),
        })
    }
}

/// Fixed parameters handed to the external interaction-energy workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowParams {
    pub interpreter: String,
    pub script_path: PathBuf,
    pub param_dir: PathBuf,
    pub pair_filter_cutoff: u32,
    pub gmxrc_path: PathBuf,
    pub threads: usize,
}

/// Source/target atom selections, passed through to the workflow verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPair {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    pub table_path: PathBuf,
    pub output_root: PathBuf,
    pub workflow: WorkflowParams,
    pub selections: SelectionPair,
}

#[derive(Default)]
pub struct DriverConfigBuilder {
    table_path: Option<PathBuf>,
    output_root: Option<PathBuf>,
    interpreter: Option<String>,
    script_path: Option<PathBuf>,
    param_dir: Option<PathBuf>,
    pair_filter_cutoff: Option<u32>,
    gmxrc_path: Option<PathBuf>,
    threads: Option<usize>,
    source_selection: Option<String>,
    target_selection: Option<String>,
}

impl DriverConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_path(mut self, path: PathBuf) -> Self {
        self.table_path = Some(path);
        self
    }
    pub fn output_root(mut self, path: PathBuf) -> Self {
        self.output_root = Some(path);
        self
    }
    pub fn interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = Some(interpreter.into());
        self
    }
    pub fn script_path(mut self, path: PathBuf) -> Self {
        self.script_path = Some(path);
        self
    }
    pub fn param_dir(mut self, path: PathBuf) -> Self {
        self.param_dir = Some(path);
        self
    }
    pub fn pair_filter_cutoff(mut self, cutoff: u32) -> Self {
        self.pair_filter_cutoff = Some(cutoff);
        self
    }
    pub fn gmxrc_path(mut self, path: PathBuf) -> Self {
        self.gmxrc_path = Some(path);
        self
    }
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = Some(n);
        self
    }
    pub fn source_selection(mut self, selection: impl Into<String>) -> Self {
        self.source_selection = Some(selection.into());
        self
    }
    pub fn target_selection(mut self, selection: impl Into<String>) -> Self {
        self.target_selection = Some(selection.into());
        self
    }

    pub fn build(self) -> Result<DriverConfig, ConfigError> {
        let threads = self
            .threads
            .ok_or(ConfigError::MissingParameter("threads"))?;
        if threads == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "threads",
                reason: "must be at least 1".to_string(),
            });
        }

        let interpreter = self
            .interpreter
            .ok_or(ConfigError::MissingParameter("interpreter"))?;
        if interpreter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                parameter: "interpreter",
                reason: "must not be empty".to_string(),
            });
        }

        let workflow = WorkflowParams {
            interpreter,
            script_path: self
                .script_path
                .ok_or(ConfigError::MissingParameter("script_path"))?,
            param_dir: self
                .param_dir
                .ok_or(ConfigError::MissingParameter("param_dir"))?,
            pair_filter_cutoff: self
                .pair_filter_cutoff
                .ok_or(ConfigError::MissingParameter("pair_filter_cutoff"))?,
            gmxrc_path: self
                .gmxrc_path
                .ok_or(ConfigError::MissingParameter("gmxrc_path"))?,
            threads,
        };

        let selections = SelectionPair {
            source: non_blank(self.source_selection, "source_selection")?,
            target: non_blank(self.target_selection, "target_selection")?,
        };

        Ok(DriverConfig {
            table_path: self
                .table_path
                .ok_or(ConfigError::MissingParameter("table_path"))?,
            output_root: self
                .output_root
                .ok_or(ConfigError::MissingParameter("output_root"))?,
            workflow,
            selections,
        })
    }
}

fn non_blank(value: Option<String>, parameter: &'static str) -> Result<String, ConfigError> {
    let value = value.ok_or(ConfigError::MissingParameter(parameter))?;
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            parameter,
            reason: "selection string must not be blank".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_driver_builder() -> DriverConfigBuilder {
        DriverConfigBuilder::new()
            .table_path(PathBuf::from("best_models.csv"))
            .output_root(PathBuf::from("output_ie_all"))
            .interpreter("python")
            .script_path(PathBuf::from("/opt/wf/grinn_workflow.py"))
            .param_dir(PathBuf::from("/opt/wf/mdp_files/"))
            .pair_filter_cutoff(10)
            .gmxrc_path(PathBuf::from("/opt/gromacs/bin/GMXRC"))
            .threads(18)
            .source_selection("all")
            .target_selection("all")
    }

    #[test]
    fn selection_builder_defaults_policy_and_strips_dot() {
        let config = SelectionConfigBuilder::new()
            .root(PathBuf::from("models"))
            .output_path(PathBuf::from("best.csv"))
            .marker("molpdf")
            .extension(".tsv")
            .build()
            .unwrap();
        assert_eq!(config.extension, "tsv");
        assert_eq!(config.policy, ScoreFilePolicy::FirstMatch);
    }

    #[test]
    fn selection_builder_requires_root() {
        let result = SelectionConfigBuilder::new()
            .output_path(PathBuf::from("best.csv"))
            .marker("molpdf")
            .extension("tsv")
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("root")));
    }

    #[test]
    fn selection_builder_rejects_empty_marker() {
        let result = SelectionConfigBuilder::new()
            .root(PathBuf::from("models"))
            .output_path(PathBuf::from("best.csv"))
            .marker("")
            .extension("tsv")
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "marker",
                ..
            })
        ));
    }

    #[test]
    fn driver_builder_builds_complete_config() {
        let config = full_driver_builder().build().unwrap();
        assert_eq!(config.workflow.threads, 18);
        assert_eq!(config.workflow.pair_filter_cutoff, 10);
        assert_eq!(config.selections.source, "all");
        assert_eq!(config.output_root, PathBuf::from("output_ie_all"));
    }

    #[test]
    fn driver_builder_rejects_zero_threads() {
        let result = full_driver_builder().threads(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "threads",
                ..
            })
        ));
    }

    #[test]
    fn driver_builder_rejects_blank_selection() {
        let result = full_driver_builder().source_selection("  ").build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "source_selection",
                ..
            })
        ));
    }

    #[test]
    fn driver_builder_reports_first_missing_parameter() {
        let result = DriverConfigBuilder::new().threads(4).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("interpreter")));
    }
}
