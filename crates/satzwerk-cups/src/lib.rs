// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Satzwerk CUPS — parsers for the CUPS command-line listings, device URI
// classification, driver fuzzy matching, and the queue manager facade that
// composes them.  This crate bridges between the core domain types defined
// in `satzwerk-core` and the actual CUPS tooling.

pub mod discovery;
pub mod drivers;
pub mod exec;
pub mod lines;
pub mod manager;
pub mod matcher;
pub mod options;
pub mod status;
pub mod uri;

pub use exec::{CommandOutput, CommandRunner, ShellRunner};
pub use manager::CupsManager;
