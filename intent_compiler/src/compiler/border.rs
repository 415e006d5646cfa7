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

//! # Border Links
//!
//! Classification of inter-AS interfaces, and resolution of the eBGP peer of a border router.

use crate::intent::IntentModel;
use crate::naming::neighbor_address;
use crate::{Error, Result};

use log::*;

/// eBGP peer of a border router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EbgpPeer {
    /// Router on the other side of the border link
    pub router: String,
    /// AS of the peer
    pub as_id: String,
    /// Bare address of the peer on its border interface
    pub address: String,
}

/// Returns true if `router` is a border router (of any AS), and `iface` is its border interface.
/// The IGP is never enabled on such an interface.
pub fn is_border_link(router: &str, iface: &str, intent: &IntentModel) -> bool {
    intent.border_link(router).map(|(_, link)| link.interface() == iface).unwrap_or(false)
}

/// Resolve the eBGP peer of a router. Returns `Ok(None)` if the router is not listed as border
/// router of its own AS.
///
/// Unless the border link names them explicitly, the peer AS is the only other AS of the intent,
/// and the peer router is the only border router of the peer AS. If either is not unique, an error
/// is returned instead of guessing.
pub fn resolve_ebgp_peer(router: &str, intent: &IntentModel) -> Result<Option<EbgpPeer>> {
    let (as_id, as_info) = intent.as_of(router)?;
    let link = match as_info.border_routers.get(router) {
        Some(link) => link,
        None => return Ok(None),
    };

    // find the peer AS
    let peer_as_id = match link.peer_as() {
        Some(peer_as) => peer_as,
        None => {
            let mut others = intent.as_numbers.keys().filter(|other| other.as_str() != as_id);
            match (others.next(), others.next()) {
                (Some(other), None) => other.as_str(),
                _ => return Err(Error::AmbiguousPeerAs(as_id.to_string())),
            }
        }
    };
    let peer_as = intent.as_info(peer_as_id)?;

    // find the peer router
    let peer_router = match link.peer_router() {
        Some(peer) => peer,
        None => {
            let mut border_routers = peer_as.border_routers.keys();
            match (border_routers.next(), border_routers.next()) {
                (None, _) => return Err(Error::NoBorderRouter(peer_as_id.to_string())),
                (Some(peer), None) => peer.as_str(),
                (Some(_), Some(_)) => {
                    return Err(Error::AmbiguousBorderRouter {
                        as_id: peer_as_id.to_string(),
                        routers: peer_as.border_routers.keys().cloned().collect(),
                    })
                }
            }
        }
    };

    // the peer terminates the link on its own border interface. If it is not declared as border
    // router, it uses the same interface name as this side of the link.
    let peer_iface = peer_as
        .border_routers
        .get(peer_router)
        .map(|l| l.interface())
        .unwrap_or_else(|| link.interface());
    let address = intent.router(peer_router)?.interfaces.get(peer_iface).ok_or_else(|| {
        Error::MissingBorderInterface {
            router: peer_router.to_string(),
            interface: peer_iface.to_string(),
        }
    })?;

    debug!("eBGP peer of {}: {} in AS {} ({})", router, peer_router, peer_as_id, address);

    Ok(Some(EbgpPeer {
        router: peer_router.to_string(),
        as_id: peer_as_id.to_string(),
        address: neighbor_address(address).to_string(),
    }))
}
