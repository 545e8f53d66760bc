// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanwerk-request — Assemble and check the parameters of one scan.
//
// Flow: caller input → device capabilities → defaults → merge → output path
// → prune unsupported options → `ScanRequest`. Callers run
// `ScanRequest::validate` before handing the request to the scan runner.

pub mod builder;
pub mod clock;
pub mod defaults;
pub mod request;

pub use builder::RequestBuilder;
pub use clock::{Clock, FixedClock, SystemClock};
pub use defaults::ScanDefaults;
pub use request::ScanRequest;
