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

use crate::compiler::border::*;
use crate::example_intents::*;
use crate::intent::*;
use crate::Error;

use indexmap::IndexMap;
use maplit::btreemap;

#[test]
fn border_link_classification() {
    let intent = SmallNet::intent();
    assert!(is_border_link("R2", "GigabitEthernet1/0", &intent));
    assert!(is_border_link("R3", "GigabitEthernet1/0", &intent));
    assert!(!is_border_link("R2", "GigabitEthernet2/0", &intent));
    assert!(!is_border_link("R1", "GigabitEthernet1/0", &intent));
    assert!(!is_border_link("R1", "GigabitEthernet2/0", &intent));
}

#[test]
fn border_link_uses_declared_interface() {
    let mut intent = SmallNet::intent();
    intent.as_numbers.get_mut("1").unwrap().border_routers =
        btreemap! { "R2".to_string() => BorderLink::Interface("GigabitEthernet3/0".to_string()) };
    assert!(is_border_link("R2", "GigabitEthernet3/0", &intent));
    assert!(!is_border_link("R2", "GigabitEthernet1/0", &intent));
}

#[test]
fn peer_of_border_routers() {
    let intent = SmallNet::intent();
    assert_eq!(resolve_ebgp_peer("R1", &intent).unwrap(), None);
    assert_eq!(
        resolve_ebgp_peer("R2", &intent).unwrap(),
        Some(EbgpPeer {
            router: "R3".to_string(),
            as_id: "2".to_string(),
            address: "2001:db8:23::3".to_string(),
        })
    );
    assert_eq!(
        resolve_ebgp_peer("R3", &intent).unwrap(),
        Some(EbgpPeer {
            router: "R2".to_string(),
            as_id: "1".to_string(),
            address: "2001:db8:23::2".to_string(),
        })
    );
}

#[test]
fn no_border_router_in_peer_as() {
    let mut intent = SmallNet::intent();
    intent.as_numbers.get_mut("2").unwrap().border_routers.clear();
    assert!(matches!(resolve_ebgp_peer("R2", &intent), Err(Error::NoBorderRouter(a)) if a == "2"));
    // R3 is no longer a border router
    assert_eq!(resolve_ebgp_peer("R3", &intent).unwrap(), None);
}

#[test]
fn ambiguous_border_router() {
    let mut intent = TwoAsNet::intent();
    intent
        .as_numbers
        .get_mut("2")
        .unwrap()
        .border_routers
        .insert("R6".to_string(), BorderLink::Interface("GigabitEthernet1/0".to_string()));
    match resolve_ebgp_peer("R3", &intent) {
        Err(Error::AmbiguousBorderRouter { as_id, routers }) => {
            assert_eq!(as_id, "2");
            assert_eq!(routers, vec!["R4".to_string(), "R6".to_string()]);
        }
        r => panic!("unexpected result: {:?}", r),
    }

    // naming the peer explicitly resolves the ambiguity
    intent.as_numbers.get_mut("1").unwrap().border_routers.insert(
        "R3".to_string(),
        BorderLink::Explicit {
            interface: "GigabitEthernet1/0".to_string(),
            peer_as: None,
            peer_router: Some("R4".to_string()),
        },
    );
    let peer = resolve_ebgp_peer("R3", &intent).unwrap().unwrap();
    assert_eq!(peer.router, "R4");
    assert_eq!(peer.address, "2001:3:34::4");
}

#[test]
fn peer_as_with_three_ases() {
    let mut intent = SmallNet::intent();
    intent.routers.insert(
        "R4".to_string(),
        RouterInfo { loopback: "2001:db8:ffff::4/128".to_string(), interfaces: IndexMap::new() },
    );
    intent.as_numbers.insert(
        "3".to_string(),
        AsInfo {
            protocol: Protocol::Rip,
            routers: vec!["R4".to_string()],
            border_routers: btreemap! {},
        },
    );
    assert!(matches!(resolve_ebgp_peer("R2", &intent), Err(Error::AmbiguousPeerAs(a)) if a == "1"));

    intent.as_numbers.get_mut("1").unwrap().border_routers.insert(
        "R2".to_string(),
        BorderLink::Explicit {
            interface: "GigabitEthernet1/0".to_string(),
            peer_as: Some("2".to_string()),
            peer_router: None,
        },
    );
    let peer = resolve_ebgp_peer("R2", &intent).unwrap().unwrap();
    assert_eq!(peer.router, "R3");
    assert_eq!(peer.as_id, "2");
}

#[test]
fn peer_without_border_interface() {
    let mut intent = SmallNet::intent();
    intent.routers.get_mut("R3").unwrap().interfaces.clear();
    match resolve_ebgp_peer("R2", &intent) {
        Err(Error::MissingBorderInterface { router, interface }) => {
            assert_eq!(router, "R3");
            assert_eq!(interface, "GigabitEthernet1/0");
        }
        r => panic!("unexpected result: {:?}", r),
    }
}

#[test]
fn unknown_explicit_peer_as() {
    let mut intent = SmallNet::intent();
    intent.as_numbers.get_mut("1").unwrap().border_routers.insert(
        "R2".to_string(),
        BorderLink::Explicit {
            interface: "GigabitEthernet1/0".to_string(),
            peer_as: Some("65000".to_string()),
            peer_router: None,
        },
    );
    assert!(matches!(resolve_ebgp_peer("R2", &intent), Err(Error::UnknownAs(a)) if a == "65000"));
}
