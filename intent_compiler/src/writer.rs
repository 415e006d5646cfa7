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

//! # Config Writer
//!
//! Stores the compiled configurations as `<short name>_startup-config.cfg` files.

use crate::compiler::{compile_all, CompiledConfig};
use crate::intent::IntentModel;
use crate::Result;

use log::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a single configuration into the directory, and return the path of the written file.
pub fn write_config(dir: impl AsRef<Path>, config: &CompiledConfig) -> Result<PathBuf> {
    let path = dir.as_ref().join(config.filename());
    fs::write(&path, config.render())?;
    info!("Written configuration of {} to {}", config.router(), path.display());
    Ok(path)
}

/// Compile every router of the intent and write all configurations into the directory (which is
/// created if necessary). Nothing is written if any router fails to compile.
pub fn write_all(dir: impl AsRef<Path>, intent: &IntentModel) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let configs = compile_all(intent)?;
    fs::create_dir_all(dir)?;
    configs.iter().map(|config| write_config(dir, config)).collect()
}
