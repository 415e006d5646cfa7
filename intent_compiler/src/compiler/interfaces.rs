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

//! # Interfaces
//!
//! The loopback, and the fixed set of [`REQUIRED_INTERFACES`]. Interfaces that are not defined in
//! the intent are still emitted, but administratively shut down.

use super::{RouterContext, StanzaBuilder, LOOPBACK_INTERFACE, REQUIRED_INTERFACES};

/// Interface that is set to `duplex full` if it is not used
const FAST_ETHERNET: &str = "FastEthernet0/0";

/// The loopback interface, attached to the IGP.
#[derive(Debug, Clone, Copy)]
pub struct Loopback;

impl StanzaBuilder for Loopback {
    fn name(&self) -> &'static str {
        "loopback"
    }

    fn build(&self, ctx: &RouterContext<'_>) -> Vec<String> {
        vec![
            format!("interface {}", LOOPBACK_INTERFACE),
            " no ip address".to_string(),
            format!(" ipv6 address {}", ctx.router.loopback),
            ctx.igp.interface_line(),
            "!".to_string(),
        ]
    }
}

/// All required physical interfaces, in fixed order.
#[derive(Debug, Clone, Copy)]
pub struct RequiredInterfaces;

impl StanzaBuilder for RequiredInterfaces {
    fn name(&self) -> &'static str {
        "interfaces"
    }

    fn build(&self, ctx: &RouterContext<'_>) -> Vec<String> {
        REQUIRED_INTERFACES.iter().flat_map(|iface| interface_stanza(ctx, iface)).collect()
    }
}

/// Generate the stanza of a single physical interface.
pub fn interface_stanza(ctx: &RouterContext<'_>, iface: &str) -> Vec<String> {
    let addr = ctx.interface_address(iface);
    let mut lines = vec![format!("interface {}", iface), " no ip address".to_string()];

    if let Some(addr) = addr {
        lines.push(format!(" ipv6 address {}", addr));
        lines.push(" ipv6 enable".to_string());
    }

    if iface == FAST_ETHERNET && addr.is_none() {
        lines.push(" duplex full".to_string());
    } else {
        lines.push(" negotiation auto".to_string());
    }

    match addr {
        // the IGP must not run across the AS border
        Some(_) if !ctx.is_border_interface(iface) => lines.push(ctx.igp.interface_line()),
        Some(_) => {}
        None => lines.push(" shutdown".to_string()),
    }

    lines.push("!".to_string());
    lines
}
