use super::error::EngineError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Lists the directories exactly two levels below `root` (`root/*/*`), sorted by path.
///
/// Hidden entries (names starting with `.`) are skipped at both levels. Symlinked
/// directories are followed.
pub fn model_folders(root: &Path) -> Result<Vec<PathBuf>, EngineError> {
    if !root.is_dir() {
        return Err(EngineError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut folders = Vec::new();
    for group in visible_entries(root)? {
        if !group.is_dir() {
            continue;
        }
        folders.extend(visible_entries(&group)?.into_iter().filter(|p| p.is_dir()));
    }
    folders.sort();
    trace!("Found {} candidate folder(s) under {:?}", folders.len(), root);
    Ok(folders)
}

/// Lists regular files in `folder` with the given extension, sorted by path.
pub fn score_files(folder: &Path, extension: &str) -> Result<Vec<PathBuf>, EngineError> {
    let mut files: Vec<PathBuf> = visible_entries(folder)?
        .into_iter()
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == extension))
        .collect();
    files.sort();
    Ok(files)
}

/// Keeps the files whose name contains `marker`, preserving order.
pub fn qualifying_files<'a>(files: &'a [PathBuf], marker: &str) -> Vec<&'a PathBuf> {
    files
        .iter()
        .filter(|p| {
            p.file_name()
                .is_some_and(|name| name.to_string_lossy().contains(marker))
        })
        .collect()
}

fn visible_entries(dir: &Path) -> Result<Vec<PathBuf>, EngineError> {
    let discovery_error = |source| EngineError::Discovery {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(discovery_error)? {
        let entry = entry.map_err(discovery_error)?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        entries.push(entry.path());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn model_folders_are_two_levels_deep_and_sorted() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("g2/f1")).unwrap();
        fs::create_dir_all(root.join("g1/f2")).unwrap();
        fs::create_dir_all(root.join("g1/f1/too_deep")).unwrap();
        fs::create_dir_all(root.join(".hidden/f1")).unwrap();
        fs::write(root.join("g1/not_a_folder.txt"), "x").unwrap();
        fs::write(root.join("stray.txt"), "x").unwrap();

        let folders = model_folders(root).unwrap();
        assert_eq!(
            folders,
            vec![root.join("g1/f1"), root.join("g1/f2"), root.join("g2/f1")]
        );
    }

    #[test]
    fn model_folders_missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let result = model_folders(&dir.path().join("absent"));
        assert!(matches!(result, Err(EngineError::RootNotFound { .. })));
    }

    #[test]
    fn score_files_filter_by_extension() {
        let dir = tempdir().unwrap();
        let folder = dir.path();
        fs::write(folder.join("b.molpdf.tsv"), "").unwrap();
        fs::write(folder.join("a.dope.tsv"), "").unwrap();
        fs::write(folder.join("model_1.pdb"), "").unwrap();
        fs::write(folder.join("notes.tsv.bak"), "").unwrap();
        fs::create_dir(folder.join("dir.tsv")).unwrap();

        let files = score_files(folder, "tsv").unwrap();
        assert_eq!(
            files,
            vec![folder.join("a.dope.tsv"), folder.join("b.molpdf.tsv")]
        );
    }

    #[test]
    fn qualifying_files_match_on_file_name_only() {
        let files = vec![
            PathBuf::from("molpdf_runs/f/run1.dope.tsv"),
            PathBuf::from("molpdf_runs/f/run2.molpdf.tsv"),
        ];
        let matching = qualifying_files(&files, "molpdf");
        assert_eq!(matching, vec![&files[1]]);
    }
}
