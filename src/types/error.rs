//! Error types for the bank ledger
//!
//! This module defines all error kinds an operation on the ledger can
//! surface. Each variant carries the offending amount together with the
//! context a caller needs (available vs requested) so that control flow
//! can branch on the error kind rather than on message text.
//!
//! # Error Categories
//!
//! - **Amount validation**: amount not positive, or above a configured ceiling
//! - **Sufficiency**: account balance or bank reserves cannot cover a request
//! - **Account resolution**: unknown holder, or holder already taken

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank ledger
///
/// Every fallible ledger or account operation returns one of these
/// variants. Validation errors are raised before any state is mutated,
/// so a returned error implies balances and reserves are unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Deposit amount failed validation
    ///
    /// Raised when the amount is not positive or exceeds the deposit
    /// ceiling. Loan repayments are validated against the same ceiling.
    #[error("Invalid deposit amount {amount}: {reason}")]
    InvalidDepositAmount {
        /// The rejected amount
        amount: Decimal,
        /// Why the amount was rejected
        reason: String,
    },

    /// Withdrawal amount failed validation
    ///
    /// Raised when the amount is not positive or exceeds the withdrawal
    /// ceiling.
    #[error("Invalid withdrawal amount {amount}: {reason}")]
    InvalidWithdrawalAmount {
        /// The rejected amount
        amount: Decimal,
        /// Why the amount was rejected
        reason: String,
    },

    /// Loan amount failed validation
    ///
    /// Raised when a loan amount is not positive or exceeds the loan
    /// ceiling, when a repayment exceeds the outstanding loan balance,
    /// or when an outstanding loan blocks account removal.
    #[error("Invalid loan amount {amount}: {reason}")]
    InvalidLoanAmount {
        /// The rejected amount (for removal, the outstanding loan balance)
        amount: Decimal,
        /// Why the amount was rejected
        reason: String,
    },

    /// Withdrawal amount exceeds the account's balance
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Requested withdrawal amount
        requested: Decimal,
        /// The account balance at the time of the request
        available: Decimal,
    },

    /// Requested amount exceeds the bank's aggregate reserves
    #[error("Insufficient reserves: available {available}, requested {requested}")]
    InsufficientReserves {
        /// Requested amount
        requested: Decimal,
        /// The reserve balance at the time of the request
        available: Decimal,
    },

    /// No account matches the given holder identifier
    #[error("No account found for holder '{holder}'")]
    AccountNotFound {
        /// The holder identifier that failed to resolve
        holder: String,
    },

    /// An account for the given holder identifier already exists
    #[error("An account for holder '{holder}' already exists")]
    DuplicateAccount {
        /// The holder identifier that is already taken
        holder: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidDepositAmount error
    pub fn invalid_deposit_amount(amount: Decimal, reason: &str) -> Self {
        LedgerError::InvalidDepositAmount {
            amount,
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidWithdrawalAmount error
    pub fn invalid_withdrawal_amount(amount: Decimal, reason: &str) -> Self {
        LedgerError::InvalidWithdrawalAmount {
            amount,
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidLoanAmount error
    pub fn invalid_loan_amount(amount: Decimal, reason: &str) -> Self {
        LedgerError::InvalidLoanAmount {
            amount,
            reason: reason.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Create an InsufficientReserves error
    pub fn insufficient_reserves(requested: Decimal, available: Decimal) -> Self {
        LedgerError::InsufficientReserves {
            requested,
            available,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(holder: &str) -> Self {
        LedgerError::AccountNotFound {
            holder: holder.to_string(),
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(holder: &str) -> Self {
        LedgerError::DuplicateAccount {
            holder: holder.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::invalid_deposit(
        LedgerError::invalid_deposit_amount(Decimal::from(-50), "Amount must be greater than zero"),
        "Invalid deposit amount -50: Amount must be greater than zero"
    )]
    #[case::invalid_withdrawal(
        LedgerError::invalid_withdrawal_amount(
            Decimal::from(12_000),
            "Amount exceeds the maximum allowed withdrawal limit"
        ),
        "Invalid withdrawal amount 12000: Amount exceeds the maximum allowed withdrawal limit"
    )]
    #[case::invalid_loan(
        LedgerError::invalid_loan_amount(Decimal::from(6_000), "Repayment amount exceeds loan balance"),
        "Invalid loan amount 6000: Repayment amount exceeds loan balance"
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds(Decimal::from(10_000), Decimal::from(7_000)),
        "Insufficient funds: available 7000, requested 10000"
    )]
    #[case::insufficient_reserves(
        LedgerError::insufficient_reserves(Decimal::from(8_000), Decimal::from(4_000)),
        "Insufficient reserves: available 4000, requested 8000"
    )]
    #[case::account_not_found(
        LedgerError::account_not_found("Alice"),
        "No account found for holder 'Alice'"
    )]
    #[case::duplicate_account(
        LedgerError::duplicate_account("Bob"),
        "An account for holder 'Bob' already exists"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds(Decimal::from(100), Decimal::from(40)),
        LedgerError::InsufficientFunds {
            requested: Decimal::from(100),
            available: Decimal::from(40),
        }
    )]
    #[case::account_not_found(
        LedgerError::account_not_found("Carol"),
        LedgerError::AccountNotFound { holder: "Carol".to_string() }
    )]
    #[case::duplicate_account(
        LedgerError::duplicate_account("Carol"),
        LedgerError::DuplicateAccount { holder: "Carol".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }
}
