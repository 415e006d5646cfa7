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

//! # Interior Gateway Protocol
//!
//! RIPng uses the router number as process name. OSPFv3 uses the router number as process ID,
//! except in AS 2, where all routers share process 1.

use super::{RouterContext, StanzaBuilder};
use crate::intent::Protocol;

/// AS in which all OSPF routers share process ID 1
const SHARED_OSPF_PROCESS_AS: &str = "2";

/// OSPF process ID of a router
pub fn ospf_process_id(as_id: &str, number: u32) -> u32 {
    if as_id == SHARED_OSPF_PROCESS_AS {
        1
    } else {
        number
    }
}

/// IGP process running on a router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgpProcess {
    /// RIPng process
    Rip {
        /// Process name (the router number)
        process: u32,
    },
    /// OSPFv3 process
    Ospf {
        /// Process ID
        process: u32,
        /// OSPF router-id
        router_id: String,
    },
}

impl IgpProcess {
    /// Create the IGP process of a router
    pub fn new(protocol: Protocol, as_id: &str, number: u32, router_id: &str) -> Self {
        match protocol {
            Protocol::Rip => Self::Rip { process: number },
            Protocol::Ospf => Self::Ospf {
                process: ospf_process_id(as_id, number),
                router_id: router_id.to_string(),
            },
        }
    }

    /// Line that attaches an interface to the IGP
    pub fn interface_line(&self) -> String {
        match self {
            Self::Rip { process } => format!(" ipv6 rip {} enable", process),
            Self::Ospf { process, .. } => format!(" ipv6 ospf {} area 0", process),
        }
    }

    /// Lines of the routing process stanza
    pub fn process_lines(&self) -> Vec<String> {
        match self {
            Self::Rip { process } => vec![
                format!("ipv6 router rip {}", process),
                " redistribute connected".to_string(),
                "!".to_string(),
            ],
            Self::Ospf { process, router_id } => vec![
                format!("ipv6 router ospf {}", process),
                format!(" router-id {}", router_id),
                "!".to_string(),
            ],
        }
    }
}

/// The IGP routing process.
#[derive(Debug, Clone, Copy)]
pub struct IgpStanza;

impl StanzaBuilder for IgpStanza {
    fn name(&self) -> &'static str {
        "igp process"
    }

    fn build(&self, ctx: &RouterContext<'_>) -> Vec<String> {
        ctx.igp.process_lines()
    }
}
