//! Core business logic module
//!
//! This module contains the ledger itself:
//! - `ledger` - account collection, reserve bookkeeping, and bank-wide
//!   policy enforcement

pub mod ledger;

pub use ledger::Ledger;
