//! Bank-wide ledger
//!
//! This module provides the `Ledger` struct that owns the full set of
//! customer accounts plus the bank's aggregate reserves, and enforces
//! bank-wide policy before delegating to the affected account.
//!
//! The Ledger is responsible for:
//! - Validating amounts against the configured ceilings
//!   (deposit/withdrawal/loan) before any mutation
//! - Checking reserve sufficiency for outgoing funds
//! - Creating, looking up, and removing accounts (unique per holder)
//! - Keeping the reserves synchronized with every account-level change
//!
//! Reserves are an independent ledger column: they are adjusted by the
//! exact set of money-moving operations below, never recomputed from
//! account balances. Accounts never touch the reserves directly.
//!
//! Every operation takes `&mut self` and runs to completion, so within
//! one process the borrow checker serializes access; a concurrent
//! integrator must wrap the ledger in its own mutual exclusion.

use crate::types::{Account, HolderId, LedgerError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// The bank ledger: all accounts plus the shared reserve pool
///
/// Every public operation validates before mutating, so a returned
/// error implies no state changed. Successful operations adjust the
/// affected account and the reserves as one unit.
pub struct Ledger {
    /// Ceiling for a single deposit (also bounds loan repayments)
    max_deposit: Decimal,

    /// Ceiling for a single withdrawal
    max_withdrawal: Decimal,

    /// Ceiling for a single loan disbursement
    max_loan: Decimal,

    /// Map of holder identifiers to accounts; uniqueness enforced at
    /// creation time
    accounts: HashMap<HolderId, Account>,

    /// Bank-wide cash on hand; backs withdrawals and loan
    /// disbursements
    reserves: Decimal,
}

impl Ledger {
    /// Create a new ledger with the specified operational ceilings
    ///
    /// The account set starts empty and reserves start at zero; seed
    /// reserves with [`Ledger::add_to_reserves`] before approving
    /// loans or withdrawals.
    pub fn new(max_deposit: Decimal, max_withdrawal: Decimal, max_loan: Decimal) -> Self {
        Ledger {
            max_deposit,
            max_withdrawal,
            max_loan,
            accounts: HashMap::new(),
            reserves: Decimal::ZERO,
        }
    }

    /// The maximum deposit ceiling
    pub fn max_deposit(&self) -> Decimal {
        self.max_deposit
    }

    /// The maximum withdrawal ceiling
    pub fn max_withdrawal(&self) -> Decimal {
        self.max_withdrawal
    }

    /// The maximum loan ceiling
    pub fn max_loan(&self) -> Decimal {
        self.max_loan
    }

    /// The current reserve balance
    pub fn reserves(&self) -> Decimal {
        self.reserves
    }

    /// Replace the deposit ceiling
    ///
    /// No validation is performed; only subsequently validated
    /// operations are affected.
    pub fn set_max_deposit(&mut self, max_deposit: Decimal) {
        self.max_deposit = max_deposit;
    }

    /// Replace the withdrawal ceiling
    pub fn set_max_withdrawal(&mut self, max_withdrawal: Decimal) {
        self.max_withdrawal = max_withdrawal;
    }

    /// Replace the loan ceiling
    pub fn set_max_loan(&mut self, max_loan: Decimal) {
        self.max_loan = max_loan;
    }

    /// Validate a deposit amount against bank constraints
    ///
    /// Loan repayments are validated with this same check, so the
    /// deposit ceiling bounds them as well.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDepositAmount` if the amount is not positive or
    /// exceeds the deposit ceiling.
    pub fn check_deposit_amount(&self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_deposit_amount(
                amount,
                "Amount must be greater than zero",
            ));
        }
        if amount > self.max_deposit {
            return Err(LedgerError::invalid_deposit_amount(
                amount,
                "Amount exceeds the maximum allowed deposit limit",
            ));
        }
        Ok(())
    }

    /// Validate a withdrawal amount against bank constraints
    ///
    /// # Errors
    ///
    /// Returns `InvalidWithdrawalAmount` if the amount is not positive
    /// or exceeds the withdrawal ceiling.
    pub fn check_withdrawal_amount(&self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_withdrawal_amount(
                amount,
                "Amount must be greater than zero",
            ));
        }
        if amount > self.max_withdrawal {
            return Err(LedgerError::invalid_withdrawal_amount(
                amount,
                "Amount exceeds the maximum allowed withdrawal limit",
            ));
        }
        Ok(())
    }

    /// Validate a loan amount against bank constraints
    ///
    /// # Errors
    ///
    /// Returns `InvalidLoanAmount` if the amount is not positive or
    /// exceeds the loan ceiling.
    pub fn check_loan_amount(&self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_loan_amount(
                amount,
                "Amount must be greater than zero",
            ));
        }
        if amount > self.max_loan {
            return Err(LedgerError::invalid_loan_amount(
                amount,
                "Amount exceeds the maximum allowed loan limit",
            ));
        }
        Ok(())
    }

    /// Check that the reserves cover the specified amount
    ///
    /// # Errors
    ///
    /// Returns `InsufficientReserves` if `amount` exceeds the current
    /// reserve balance.
    pub fn check_reserves(&self, amount: Decimal) -> Result<(), LedgerError> {
        if self.reserves < amount {
            return Err(LedgerError::insufficient_reserves(amount, self.reserves));
        }
        Ok(())
    }

    /// Add an amount to the bank's reserves
    ///
    /// Unconditional increase. Together with
    /// [`Ledger::subtract_from_reserves`] this is the sole mutator of
    /// the reserve balance; every money-moving operation goes through
    /// these two primitives.
    pub fn add_to_reserves(&mut self, amount: Decimal) {
        self.reserves += amount;
    }

    /// Subtract an amount from the bank's reserves
    ///
    /// # Errors
    ///
    /// Returns `InsufficientReserves` if `amount` exceeds the current
    /// reserve balance; the reserves are left unchanged.
    pub fn subtract_from_reserves(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.check_reserves(amount)?;
        self.reserves -= amount;
        Ok(())
    }

    /// Retrieve an account by holder identifier
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account exists for the holder.
    pub fn get_account(&self, holder: &str) -> Result<&Account, LedgerError> {
        self.accounts
            .get(holder)
            .ok_or_else(|| LedgerError::account_not_found(holder))
    }

    fn get_account_mut(&mut self, holder: &str) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(holder)
            .ok_or_else(|| LedgerError::account_not_found(holder))
    }

    /// Get all accounts sorted by holder identifier
    ///
    /// The account map has no meaningful order; sorting gives
    /// deterministic output for listings.
    pub fn list_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.holder().cmp(b.holder()));
        accounts
    }

    /// Retrieve the balance of an account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account exists for the holder.
    pub fn get_account_balance(&self, holder: &str) -> Result<Decimal, LedgerError> {
        Ok(self.get_account(holder)?.balance())
    }

    /// Retrieve the outstanding loan balance of an account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account exists for the holder.
    pub fn get_loan_balance(&self, holder: &str) -> Result<Decimal, LedgerError> {
        Ok(self.get_account(holder)?.loan_balance())
    }

    /// Open a new account with an initial deposit
    ///
    /// The initial deposit is validated like any other deposit and is
    /// added to the reserves on success.
    ///
    /// # Arguments
    ///
    /// * `holder` - The holder identifier for the new account
    /// * `initial_deposit` - The opening balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The initial deposit is not positive or exceeds the deposit
    ///   ceiling (`InvalidDepositAmount`)
    /// - An account already exists for the holder (`DuplicateAccount`)
    pub fn add_account(
        &mut self,
        holder: impl Into<HolderId>,
        initial_deposit: Decimal,
    ) -> Result<(), LedgerError> {
        self.check_deposit_amount(initial_deposit)?;

        let holder = holder.into();
        if self.accounts.contains_key(&holder) {
            return Err(LedgerError::duplicate_account(&holder));
        }

        let account = Account::new(holder.clone(), initial_deposit);
        self.accounts.insert(holder, account);
        self.add_to_reserves(initial_deposit);

        Ok(())
    }

    /// Close an account and pay out its balance from the reserves
    ///
    /// All checks run before any mutation: an account is only removed
    /// once its loan balance is zero and the reserves cover its
    /// balance, so a failed closure leaves the ledger exactly as it
    /// was.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No account exists for the holder (`AccountNotFound`)
    /// - The account has an outstanding loan (`InvalidLoanAmount`)
    /// - The reserves cannot cover the account balance
    ///   (`InsufficientReserves`)
    pub fn remove_account(&mut self, holder: &str) -> Result<(), LedgerError> {
        let account = self.get_account(holder)?;

        let loan_balance = account.loan_balance();
        if loan_balance > Decimal::ZERO {
            return Err(LedgerError::invalid_loan_amount(
                loan_balance,
                "Loan balance must be 0 to close account",
            ));
        }

        let balance = account.balance();
        self.check_reserves(balance)?;

        self.accounts.remove(holder);
        self.subtract_from_reserves(balance)?;

        Ok(())
    }

    /// Deposit an amount into an account
    ///
    /// On success the account balance and the reserves both increase
    /// by the amount.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is not positive or exceeds the deposit ceiling
    ///   (`InvalidDepositAmount`)
    /// - No account exists for the holder (`AccountNotFound`)
    pub fn deposit(&mut self, holder: &str, amount: Decimal) -> Result<(), LedgerError> {
        self.check_deposit_amount(amount)?;
        self.get_account_mut(holder)?.deposit(amount);
        self.add_to_reserves(amount);

        Ok(())
    }

    /// Withdraw an amount from an account
    ///
    /// On success the account balance and the reserves both decrease
    /// by the amount. The checks run in order: withdrawal ceiling,
    /// reserve sufficiency, account sufficiency; the first violated
    /// check determines the error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is not positive or exceeds the withdrawal ceiling
    ///   (`InvalidWithdrawalAmount`)
    /// - The reserves cannot cover the amount (`InsufficientReserves`)
    /// - No account exists for the holder (`AccountNotFound`)
    /// - The account balance cannot cover the amount
    ///   (`InsufficientFunds`)
    pub fn withdraw(&mut self, holder: &str, amount: Decimal) -> Result<(), LedgerError> {
        self.check_withdrawal_amount(amount)?;
        self.check_reserves(amount)?;
        self.get_account_mut(holder)?.withdraw(amount)?;
        self.subtract_from_reserves(amount)?;

        Ok(())
    }

    /// Approve a loan for an account
    ///
    /// The disbursement comes out of the reserves; on success the
    /// account's loan balance increases and the reserves decrease by
    /// the amount.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is not positive or exceeds the loan ceiling
    ///   (`InvalidLoanAmount`)
    /// - The reserves cannot cover the amount (`InsufficientReserves`)
    /// - No account exists for the holder (`AccountNotFound`)
    pub fn approve_loan(&mut self, holder: &str, amount: Decimal) -> Result<(), LedgerError> {
        self.check_loan_amount(amount)?;
        self.check_reserves(amount)?;
        self.get_account_mut(holder)?.add_to_loan_balance(amount);
        self.subtract_from_reserves(amount)?;

        Ok(())
    }

    /// Repay part or all of an account's outstanding loan
    ///
    /// Repayments are validated with the deposit check, so the deposit
    /// ceiling bounds them. On success the loan balance decreases and
    /// the reserves increase by the amount.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is not positive or exceeds the deposit ceiling
    ///   (`InvalidDepositAmount`)
    /// - No account exists for the holder (`AccountNotFound`)
    /// - The amount exceeds the outstanding loan balance
    ///   (`InvalidLoanAmount`)
    pub fn repay_loan(&mut self, holder: &str, amount: Decimal) -> Result<(), LedgerError> {
        self.check_deposit_amount(amount)?;
        self.get_account_mut(holder)?
            .subtract_from_loan_balance(amount)?;
        self.add_to_reserves(amount);

        Ok(())
    }
}
