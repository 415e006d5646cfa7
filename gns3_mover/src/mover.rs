// Intent Compiler: Generating Router Startup Configurations from Network Intent
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Config Mover

use crate::types::*;
use crate::{Error, Result};

use log::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Startup configuration files. The identifier is everything before the first underscore.
const CONFIG_FILE_PATTERN: &str = r"^(?P<id>[^_]*)_(?:.*_)?startup-config\.cfg$";

/// # Mover
///
/// Moves startup configuration files into the directory of the corresponding router.
#[derive(Debug, Clone)]
pub struct Mover {
    config: MoverConfig,
    pattern: Regex,
}

impl Mover {
    /// Create a new mover with the given directory table
    pub fn new(config: MoverConfig) -> Result<Self> {
        Ok(Self { config, pattern: Regex::new(CONFIG_FILE_PATTERN)? })
    }

    /// Extract the router identifier of a startup configuration filename. Returns `None` if the
    /// file is not a startup configuration.
    pub fn router_identifier<'a>(&self, filename: &'a str) -> Option<&'a str> {
        self.pattern.captures(filename).and_then(|c| c.name("id")).map(|m| m.as_str())
    }

    /// Target directory of a startup configuration filename. Returns `None` if the file is not a
    /// startup configuration, or if no directory is registered for it.
    pub fn target_of(&self, filename: &str) -> Option<&Path> {
        let id = self.router_identifier(filename)?;
        self.config.routers.get(id).map(|p| p.as_path())
    }

    /// Create all target directories
    pub fn prepare_targets(&self) -> Result<()> {
        for dir in self.config.routers.values() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// Move all startup configurations from `source_dir` into their target directory. Files in
    /// `source_dir` are processed in alphabetical order.
    pub fn move_config_files(&self, source_dir: impl AsRef<Path>) -> Result<MoveReport> {
        let source_dir = source_dir.as_ref();
        if !source_dir.is_dir() {
            return Err(Error::SourceDirMissing(source_dir.display().to_string()));
        }

        let mut files: Vec<PathBuf> = fs::read_dir(source_dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        files.sort();

        let mut report = MoveReport::default();
        for src in files.into_iter().filter(|p| p.is_file()) {
            let filename = match src.file_name().and_then(|f| f.to_str()) {
                Some(f) => f.to_string(),
                None => continue,
            };
            if self.router_identifier(&filename).is_none() {
                continue;
            }
            match self.target_of(&filename) {
                Some(dir) => {
                    let dst = dir.join(&filename);
                    move_file(&src, &dst)?;
                    info!("Moved {} to {}", filename, dst.display());
                    report.moved.push((src, dst));
                }
                None => {
                    debug!("No directory registered for {}", filename);
                    report.skipped.push(src);
                }
            }
        }
        Ok(report)
    }
}

/// Rename the file, falling back to copy and remove if the target is on a different file system.
fn move_file(src: &Path, dst: &Path) -> Result<()> {
    if fs::rename(src, dst).is_err() {
        fs::copy(src, dst)?;
        fs::remove_file(src)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use maplit::btreemap;
    use std::fs;

    fn mover(root: &Path) -> Mover {
        Mover::new(
            MoverConfig::default()
                .with_router("i1", root.join("dynamips/ea02be46/configs"))
                .with_router("i2", root.join("dynamips/cda283b6/configs")),
        )
        .unwrap()
    }

    #[test]
    fn identifiers() {
        let m = Mover::new(MoverConfig::default()).unwrap();
        assert_eq!(m.router_identifier("i1_startup-config.cfg"), Some("i1"));
        assert_eq!(m.router_identifier("i12_startup-config.cfg"), Some("i12"));
        assert_eq!(m.router_identifier("i1_old_startup-config.cfg"), Some("i1"));
        assert_eq!(m.router_identifier("i1_private-config.cfg"), None);
        assert_eq!(m.router_identifier("i1_private-startup-config.cfg"), None);
        assert_eq!(m.router_identifier("i1_startup-config.cfg.bak"), None);
    }

    #[test]
    fn parse_table() {
        let config = MoverConfig::from_json(
            r#"{ "routers": { "i1": "./dynamips/a/configs", "i2": "./dynamips/b/configs" } }"#,
        )
        .unwrap();
        assert_eq!(
            config.routers,
            btreemap! {
                "i1".to_string() => PathBuf::from("./dynamips/a/configs"),
                "i2".to_string() => PathBuf::from("./dynamips/b/configs"),
            }
        );
        assert!(matches!(MoverConfig::from_json("{"), Err(Error::JsonError(_))));
    }

    #[test]
    fn move_files() {
        let root = tempfile::tempdir().unwrap();
        let source = root.path().join("configs");
        fs::create_dir_all(&source).unwrap();
        let files =
            ["i1_startup-config.cfg", "i2_startup-config.cfg", "i3_startup-config.cfg", "notes.txt"];
        for name in files.iter() {
            fs::write(source.join(name), name).unwrap();
        }

        let m = mover(root.path());
        m.prepare_targets().unwrap();
        let report = m.move_config_files(&source).unwrap();

        assert_eq!(report.moved.len(), 2);
        assert_eq!(report.skipped, vec![source.join("i3_startup-config.cfg")]);
        let dst = root.path().join("dynamips/ea02be46/configs/i1_startup-config.cfg");
        assert_eq!(fs::read_to_string(&dst).unwrap(), "i1_startup-config.cfg");
        assert!(root.path().join("dynamips/cda283b6/configs/i2_startup-config.cfg").exists());

        // unregistered and unrelated files stay in place
        assert!(!source.join("i1_startup-config.cfg").exists());
        assert!(source.join("i3_startup-config.cfg").exists());
        assert!(source.join("notes.txt").exists());
    }

    #[test]
    fn missing_source() {
        let root = tempfile::tempdir().unwrap();
        let m = mover(root.path());
        assert!(matches!(
            m.move_config_files(root.path().join("configs")),
            Err(Error::SourceDirMissing(_))
        ));
    }

    #[test]
    fn missing_target_directory() {
        let root = tempfile::tempdir().unwrap();
        let source = root.path().join("configs");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("i1_startup-config.cfg"), "!").unwrap();

        // targets were not prepared
        let m = mover(root.path());
        assert!(matches!(m.move_config_files(&source), Err(Error::IoError(_))));
    }
}
