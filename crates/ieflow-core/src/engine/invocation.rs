use super::config::DriverConfig;
use super::error::EngineError;
use crate::core::models::entry::ModelTarget;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};

/// One fully resolved call of the external interaction-energy workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub structure_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Invocation {
    /// Builds the command line for `target`:
    ///
    /// `<interpreter> <script> <structure> <param_dir> <output_dir>
    ///  --initpairfiltercutoff <n> --gmxrc_path <path> --nt <n>
    ///  --source_sel <sel> --target_sel <sel>`
    pub fn for_target(target: &ModelTarget, config: &DriverConfig) -> Result<Self, EngineError> {
        let structure_path = target.structure_path();
        let output_dir = mirror_under(&config.output_root, &target.folder)?;
        let workflow = &config.workflow;

        let args: Vec<OsString> = vec![
            workflow.script_path.clone().into(),
            structure_path.clone().into(),
            workflow.param_dir.clone().into(),
            output_dir.clone().into(),
            "--initpairfiltercutoff".into(),
            workflow.pair_filter_cutoff.to_string().into(),
            "--gmxrc_path".into(),
            workflow.gmxrc_path.clone().into(),
            "--nt".into(),
            workflow.threads.to_string().into(),
            "--source_sel".into(),
            config.selections.source.clone().into(),
            "--target_sel".into(),
            config.selections.target.clone().into(),
        ];

        Ok(Self {
            program: workflow.interpreter.clone().into(),
            args,
            structure_path,
            output_dir,
        })
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).stdin(Stdio::null());
        command
    }

    /// Shell-like rendering for logs. Arguments containing whitespace are quoted.
    pub fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|part| {
                let part = part.to_string_lossy();
                if part.is_empty() || part.contains(char::is_whitespace) {
                    format!("'{}'", part)
                } else {
                    part.into_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Nests `folder` under `root`, keeping every normal component of `folder`.
///
/// Root and drive-prefix components of absolute folders are dropped, as are `.`
/// components. A `..` component would escape `root` and is rejected.
pub fn mirror_under(root: &Path, folder: &Path) -> Result<PathBuf, EngineError> {
    let mut mirrored = root.to_path_buf();
    for component in folder.components() {
        match component {
            Component::Normal(part) => mirrored.push(part),
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                return Err(EngineError::InvalidFolder {
                    folder: folder.to_path_buf(),
                    reason: "parent directory components ('..') are not allowed".to_string(),
                });
            }
        }
    }
    Ok(mirrored)
}
