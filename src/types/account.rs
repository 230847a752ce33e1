//! Account entity for the bank ledger
//!
//! This module defines the Account structure holding one customer's
//! balance and loan balance, together with the balance primitives the
//! ledger delegates to. An account only enforces the invariants it can
//! verify from its own state (sufficiency of balance and loan balance);
//! all bank-wide policy lives in [`crate::core::Ledger`].

use crate::types::LedgerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique identifier for an account holder
///
/// Matched exactly (case-sensitive, no normalization).
pub type HolderId = String;

/// One customer's account state
///
/// Balances only change through the deposit/withdraw and loan
/// primitives, never by direct field access, so the invariants
/// `balance >= 0` and `loan_balance >= 0` hold after every successful
/// operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The holder identifier; immutable after creation
    holder: HolderId,

    /// Funds on deposit with the bank
    balance: Decimal,

    /// Outstanding loan principal owed to the bank
    loan_balance: Decimal,
}

impl Account {
    /// Create a new account with the given initial balance
    ///
    /// The loan balance starts at zero. No bound checking is performed
    /// here; the ledger validates the initial deposit before
    /// constructing the account.
    pub fn new(holder: impl Into<HolderId>, initial_balance: Decimal) -> Self {
        Account {
            holder: holder.into(),
            balance: initial_balance,
            loan_balance: Decimal::ZERO,
        }
    }

    /// The holder identifier
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// The current account balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The outstanding loan principal
    pub fn loan_balance(&self) -> Decimal {
        self.loan_balance
    }

    /// Check that the balance covers the specified amount
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` if `amount` exceeds the current
    /// balance.
    pub fn check_available(&self, amount: Decimal) -> Result<(), LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(amount, self.balance));
        }
        Ok(())
    }

    /// Credit the account balance
    ///
    /// No precondition is enforced at this layer; the caller has
    /// already validated that the amount is positive and within the
    /// deposit ceiling.
    pub fn deposit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Debit the account balance
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` if `amount` exceeds the current
    /// balance; the balance is left unchanged.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.check_available(amount)?;
        self.balance -= amount;
        Ok(())
    }

    /// Check that a repayment does not exceed the outstanding loan
    ///
    /// # Errors
    ///
    /// Returns `InvalidLoanAmount` if `amount` exceeds the current
    /// loan balance.
    pub fn check_repayment(&self, amount: Decimal) -> Result<(), LedgerError> {
        if amount > self.loan_balance {
            return Err(LedgerError::invalid_loan_amount(
                amount,
                "Repayment amount exceeds loan balance",
            ));
        }
        Ok(())
    }

    /// Increase the outstanding loan principal
    ///
    /// Unconditional; positivity and ceiling checks are the ledger's
    /// responsibility.
    pub fn add_to_loan_balance(&mut self, amount: Decimal) {
        self.loan_balance += amount;
    }

    /// Decrease the outstanding loan principal
    ///
    /// # Errors
    ///
    /// Returns `InvalidLoanAmount` if `amount` exceeds the current
    /// loan balance; the loan balance is left unchanged.
    pub fn subtract_from_loan_balance(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.check_repayment(amount)?;
        self.loan_balance -= amount;
        Ok(())
    }
}
