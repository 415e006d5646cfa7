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

use crate::naming::*;
use crate::Error;

#[test]
fn router_numbers() {
    assert_eq!(router_number("R1").unwrap(), 1);
    assert_eq!(router_number("R12").unwrap(), 12);
    assert_eq!(router_number(String::from("R7")).unwrap(), 7);
}

#[test]
fn malformed_router_names() {
    for name in ["R", "Rx", "R1a", "R-1", "R 1", "R99999999999"].iter() {
        match router_number(name) {
            Err(Error::MalformedName(n)) => assert_eq!(n, *name),
            r => panic!("{} should be malformed, got {:?}", name, r),
        }
    }
    router_id("Rx").unwrap_err();
}

#[test]
fn short_names() {
    assert_eq!(short_name("R1"), "i1");
    assert_eq!(short_name("R12"), "i12");
    assert_eq!(config_filename("R3"), "i3_startup-config.cfg");
    assert!(config_filename("R3").ends_with(CONFIG_FILE_SUFFIX));
}

#[test]
fn router_ids() {
    assert_eq!(router_id("R1").unwrap(), "1.1.1.1");
    assert_eq!(router_id("R23").unwrap(), "23.23.23.23");
}

#[test]
fn addresses() {
    assert_eq!(neighbor_address("2001:db8::1/64"), "2001:db8::1");
    assert_eq!(neighbor_address("2001:db8::1"), "2001:db8::1");
    assert_eq!(loopback_network("2001:100::1/128"), "2001:100::1/128");
    assert_eq!(loopback_network("2001:100::1/64"), "2001:100::1/128");
}

#[test]
fn interface_networks() {
    assert_eq!(network_64("2001:1:12::1/64"), "2001:1:12::/64");
    assert_eq!(network_64("2001:1:12::2/64"), "2001:1:12::/64");
    assert_eq!(network_64("fe80::1/64"), "fe80::/64");
    // only the last `::` is relevant
    assert_eq!(network_64("2001::1::2/64"), "2001::1::/64");
}
