use crate::cli::Profile;

pub struct SelectDefaults {
    pub output: &'static str,
    pub marker: &'static str,
    pub extension: &'static str,
}

impl Default for SelectDefaults {
    fn default() -> Self {
        Self {
            output: "best_models.csv",
            marker: "molpdf",
            extension: "tsv",
        }
    }
}

/// Built-in parameter set for one driver profile.
pub struct DriveDefaults {
    pub table: &'static str,
    pub output_root: &'static str,
    pub interpreter: &'static str,
    pub script: &'static str,
    pub param_dir: &'static str,
    pub cutoff: u32,
    pub gmxrc_path: &'static str,
    pub threads: usize,
    pub source_sel: &'static str,
    pub target_sel: &'static str,
}

impl DriveDefaults {
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Peptide => Self::peptide(),
            Profile::Full => Self::full(),
        }
    }

    /// GROMACS resets chain IDs, so the peptide ends up as chain C.
    pub fn peptide() -> Self {
        Self {
            table: "best_models_10mers.csv",
            output_root: "output_ie_10mers",
            interpreter: "python",
            script: "/mnt/d/repos/structbio_workflows/grinn_workflow.py",
            param_dir: "/mnt/d/repos/structbio_workflows/mdp_files/",
            cutoff: 10,
            gmxrc_path: "/mnt/d/software/gromacs2023_4/bin/GMXRC",
            threads: 12,
            source_sel: "chain C",
            target_sel: "all",
        }
    }

    pub fn full() -> Self {
        Self {
            table: "best_models.csv",
            output_root: "output_ie_all",
            interpreter: "python",
            script: "/mnt/e/repos/structbio_workflows/grinn_workflow.py",
            param_dir: "/mnt/e/repos/structbio_workflows/mdp_files/",
            cutoff: 10,
            gmxrc_path: "/mnt/d/software/gromacs2023_4/bin/GMXRC",
            threads: 18,
            source_sel: "all",
            target_sel: "all",
        }
    }
}
