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

//! # Mover Types

use crate::Result;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Table of target directories, keyed by the router identifier (`i1`, `i2`, ...)
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MoverConfig {
    /// Target directory of each router
    pub routers: BTreeMap<String, PathBuf>,
}

impl MoverConfig {
    /// Read the table from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&read_to_string(path)?)
    }

    /// Parse the table from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Register the target directory of a router
    pub fn with_router(mut self, id: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.routers.insert(id.into(), dir.into());
        self
    }
}

/// Result of moving the files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Files that were moved, as (source, destination)
    pub moved: Vec<(PathBuf, PathBuf)>,
    /// Config files whose identifier has no registered directory
    pub skipped: Vec<PathBuf>,
}
