// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanwerk-device — What a scanner can do, and where that knowledge comes from.
//
// Provides the capability model (feature key → limits + default), a parser
// for `scanimage -A` listings, and the providers that resolve a device id to
// its capabilities (in-memory registry, on-disk description directory).

pub mod capabilities;
pub mod listing;
pub mod provider;

pub use capabilities::{DeviceCapabilities, Feature, features};
pub use provider::{CapabilityProvider, DirectoryProvider, StaticProvider};
