// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    path.ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists())
}

/// Where a configuration file was looked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Passed on the command line; it must exist
    Explicit(PathBuf),
    /// Found by walking up from the working directory
    Discovered(PathBuf),
    /// The per-user default; may be absent
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Explicit(path)
            | ConfigLocation::Discovered(path)
            | ConfigLocation::Default(path) => path,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ConfigLocation::Explicit(_))
    }
}

/// Resolve the config file: an explicit path wins, then the nearest `default_filename`
/// at or above `cwd`, then `default_config_dir`. `None` when there is nowhere to look.
pub fn resolve_config_path(
    find_in_parent: FindInParent,
    cwd: &Path,
    default_config_dir: Option<&Path>,
    default_filename: &str,
    cli_file: Option<&Path>,
) -> Option<ConfigLocation> {
    if let Some(cli_file) = cli_file {
        if cli_file.is_absolute() {
            return Some(ConfigLocation::Explicit(cli_file.to_path_buf()));
        }
        return Some(ConfigLocation::Explicit(clean(cwd.join(cli_file))));
    }

    if let Some(found) = find_in_parent(cwd, default_filename) {
        return Some(ConfigLocation::Discovered(found));
    }

    default_config_dir.map(|dir| ConfigLocation::Default(clean(dir.join(default_filename))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found(_: &Path, _: &str) -> Option<PathBuf> {
        None
    }

    fn found(_: &Path, _: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/foo/rlnc.config.yaml"))
    }

    #[test]
    fn test_resolve_cli() {
        let location = resolve_config_path(
            found, // overridden by the explicit file
            Path::new("/foo/bar"),
            Some(Path::new("/my/config")),
            "rlnc.config.yaml",
            Some(Path::new("/my/absolute/conf.yaml")),
        );
        assert_eq!(
            location,
            Some(ConfigLocation::Explicit(PathBuf::from("/my/absolute/conf.yaml")))
        );

        let location = resolve_config_path(
            not_found,
            Path::new("/foo/bar"),
            None,
            "rlnc.config.yaml",
            Some(Path::new("../conf.yaml")),
        );
        assert_eq!(
            location,
            Some(ConfigLocation::Explicit(PathBuf::from("/foo/conf.yaml")))
        );
        assert!(location.is_some_and(|l| l.is_required()));
    }

    #[test]
    fn test_resolve_search_then_default() {
        let location = resolve_config_path(
            found,
            Path::new("/foo/bar"),
            Some(Path::new("/my/config")),
            "rlnc.config.yaml",
            None,
        );
        assert_eq!(
            location,
            Some(ConfigLocation::Discovered(PathBuf::from("/foo/rlnc.config.yaml")))
        );

        let location = resolve_config_path(
            not_found,
            Path::new("/foo/bar"),
            Some(Path::new("/my/config")),
            "rlnc.config.yaml",
            None,
        )
        .unwrap();
        assert_eq!(location.path(), Path::new("/my/config/rlnc.config.yaml"));
        assert!(!location.is_required());

        assert_eq!(
            resolve_config_path(not_found, Path::new("/"), None, "rlnc.config.yaml", None),
            None
        );
    }
}
