//! Bank Ledger Library
//! # Overview
//!
//! This library models a single bank: customer accounts, deposits,
//! withdrawals, loan issuance and repayment, and an aggregate reserve
//! pool that backs all obligations. It targets a single-process,
//! single-tenant context and exposes an in-process API only.
//!
//! # Architecture
//!
//! The system is organized into two layers, in dependency order:
//!
//! - [`types`] - Core data types:
//!   - [`types::account`] - One customer's balance and loan balance,
//!     with the deposit/withdraw/loan primitives and their local
//!     sufficiency checks
//!   - [`types::error`] - The error taxonomy for all operations
//! - [`core`] - Business logic:
//!   - [`core::ledger`] - The full account set plus the bank-wide
//!     reserves; enforces amount ceilings and reserve sufficiency
//!     before delegating to the affected account
//!
//! # Operations
//!
//! Every public ledger operation validates first, then locates the
//! target account, then mutates the account and the reserves as one
//! unit:
//!
//! - **Account management**: open an account with an initial deposit,
//!   close it once its loan is repaid, look up accounts and balances
//! - **Money movement**: deposit, withdraw, approve a loan, repay a
//!   loan
//! - **Reserve management**: seed or drain the reserve pool directly
//! - **Configuration**: read and replace the deposit/withdrawal/loan
//!   ceilings
//!
//! # Example
//!
//! ```
//! use bank_ledger::Ledger;
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), bank_ledger::LedgerError> {
//! let mut ledger = Ledger::new(
//!     Decimal::from(20_000),
//!     Decimal::from(10_000),
//!     Decimal::from(15_000),
//! );
//! ledger.add_to_reserves(Decimal::from(100_000));
//!
//! ledger.add_account("Alice", Decimal::from(5_000))?;
//! ledger.deposit("Alice", Decimal::from(2_000))?;
//! ledger.approve_loan("Alice", Decimal::from(5_000))?;
//! ledger.repay_loan("Alice", Decimal::from(3_000))?;
//!
//! assert_eq!(ledger.get_account_balance("Alice")?, Decimal::from(7_000));
//! assert_eq!(ledger.get_loan_balance("Alice")?, Decimal::from(2_000));
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod core;
pub mod types;

pub use crate::core::Ledger;
pub use types::{Account, HolderId, LedgerError};
