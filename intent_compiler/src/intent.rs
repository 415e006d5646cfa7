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

//! # Intent Model
//!
//! Declarative description of the network: which AS each router belongs to, which IGP the AS
//! runs, how routers are addressed, and which routers connect to another AS. The model is loaded
//! once from a JSON document and is never modified afterwards.
//!
//! ```json
//! {
//!   "as_numbers": {
//!     "1": { "protocol": "RIP", "routers": ["R1", "R2"], "border_routers": { "R2": "GigabitEthernet1/0" } },
//!     "2": { "protocol": "OSPF", "routers": ["R3"], "border_routers": { "R3": "GigabitEthernet1/0" } }
//!   },
//!   "routers": {
//!     "R1": { "loopback": "2001:db8:ffff::1/128", "interfaces": { "GigabitEthernet2/0": "2001:db8:12::1/64" } },
//!     ...
//!   }
//! }
//! ```

use crate::{Error, Result};

use indexmap::IndexMap;
use log::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::read_to_string;
use std::path::Path;

/// Interior gateway protocol of an AS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    /// RIPng
    #[serde(rename = "RIP")]
    Rip,
    /// OSPFv3
    #[serde(rename = "OSPF")]
    Ospf,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rip => write!(f, "RIP"),
            Self::Ospf => write!(f, "OSPF"),
        }
    }
}

/// # Border Link
///
/// Interface of a border router that connects to another AS. The short form only names the
/// interface, and the peer is inferred. The explicit form may name the peer AS and the peer router,
/// which is required as soon as the inference is ambiguous (more than two ASes, or multiple border
/// routers in the peer AS).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderLink {
    /// Only the interface name
    Interface(String),
    /// Interface together with an explicit peer
    Explicit {
        /// Interface name
        interface: String,
        /// AS of the peer
        #[serde(default, skip_serializing_if = "Option::is_none")]
        peer_as: Option<String>,
        /// Router terminating the link in the peer AS
        #[serde(default, skip_serializing_if = "Option::is_none")]
        peer_router: Option<String>,
    },
}

impl BorderLink {
    /// Interface on which the link is configured
    pub fn interface(&self) -> &str {
        match self {
            Self::Interface(iface) => iface,
            Self::Explicit { interface, .. } => interface,
        }
    }

    /// Explicitly configured peer AS, if any
    pub fn peer_as(&self) -> Option<&str> {
        match self {
            Self::Interface(_) => None,
            Self::Explicit { peer_as, .. } => peer_as.as_deref(),
        }
    }

    /// Explicitly configured peer router, if any
    pub fn peer_router(&self) -> Option<&str> {
        match self {
            Self::Interface(_) => None,
            Self::Explicit { peer_router, .. } => peer_router.as_deref(),
        }
    }
}

/// Information about a single AS
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsInfo {
    /// IGP used inside the AS
    pub protocol: Protocol,
    /// All routers of the AS. The order determines the order of the iBGP neighbors.
    pub routers: Vec<String>,
    /// Border routers, mapped to their border link
    #[serde(default)]
    pub border_routers: BTreeMap<String, BorderLink>,
}

/// Information about a single router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterInfo {
    /// IPv6 loopback address, including the prefix length
    pub loopback: String,
    /// IPv6 addresses (including the prefix length) of all configured interfaces, in the order of
    /// the intent file. This order determines the order of the advertised networks.
    #[serde(default)]
    pub interfaces: IndexMap<String, String>,
}

/// # Intent Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentModel {
    /// All autonomous systems, keyed by their AS number
    pub as_numbers: BTreeMap<String, AsInfo>,
    /// All routers, keyed by their name
    pub routers: BTreeMap<String, RouterInfo>,
}

impl IntentModel {
    /// Read and parse the intent from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading intent from {}", path.display());
        let intent = Self::from_json(&read_to_string(path)?)?;
        info!(
            "Loaded intent with {} ASes and {} routers",
            intent.as_numbers.len(),
            intent.routers.len()
        );
        Ok(intent)
    }

    /// Parse the intent from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the intent into a pretty-printed JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every router referenced by an AS is defined.
    pub fn check_members(&self) -> Result<()> {
        for (as_id, as_info) in self.as_numbers.iter() {
            if let Some(router) = as_info.routers.iter().find(|r| !self.routers.contains_key(*r)) {
                return Err(Error::MissingRouter { as_id: as_id.clone(), router: router.clone() });
            }
        }
        Ok(())
    }

    /// Names of all routers, in order.
    pub fn router_names(&self) -> impl Iterator<Item = &str> {
        self.routers.keys().map(|r| r.as_str())
    }

    /// Get the information of a router. If the router is not defined, but some AS lists it as
    /// member, [`Error::MissingRouter`] is returned instead of [`Error::UnknownRouter`].
    pub fn router(&self, router: &str) -> Result<&RouterInfo> {
        self.routers.get(router).ok_or_else(|| match self.as_of(router) {
            Ok((as_id, _)) => {
                Error::MissingRouter { as_id: as_id.to_string(), router: router.to_string() }
            }
            Err(_) => Error::UnknownRouter(router.to_string()),
        })
    }

    /// Get the information of an AS
    pub fn as_info(&self, as_id: &str) -> Result<&AsInfo> {
        self.as_numbers.get(as_id).ok_or_else(|| Error::UnknownAs(as_id.to_string()))
    }

    /// Get the AS of a router. If the router is (wrongly) listed in multiple ASes, the first one
    /// (in order of the AS number) is returned.
    pub fn as_of(&self, router: &str) -> Result<(&str, &AsInfo)> {
        self.as_numbers
            .iter()
            .find(|(_, info)| info.routers.iter().any(|r| r == router))
            .map(|(as_id, info)| (as_id.as_str(), info))
            .ok_or_else(|| Error::RouterWithoutAs(router.to_string()))
    }

    /// Get the border link of a router, together with the AS that declares it. Returns `None` if
    /// the router is not a border router.
    pub fn border_link(&self, router: &str) -> Option<(&str, &BorderLink)> {
        self.as_numbers
            .iter()
            .find_map(|(as_id, info)| info.border_routers.get(router).map(|l| (as_id.as_str(), l)))
    }
}
