//! # Types
//!
//! Shared data structures used across all modules of the donation ledger.
//!
//! ## Lifecycle
//!
//! The ledger has exactly two logical states:
//!
//! ```text
//! Uninitialized ──init──► Active
//! ```
//!
//! The transition happens once and is terminal. `Active` is represented by
//! the presence of a [`LedgerConfig`] in instance storage.

use soroban_sdk::{contracttype, Address};

/// Immutable ledger configuration, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// The one and only recipient of forwarded donations.
    pub beneficiary: Address,
    /// SAC address of the asset donations are made in.
    pub token: Address,
    /// Fixed fee, in base units, withheld from every forward to the beneficiary.
    pub transfer_fee: i128,
    /// Receives the accumulated fees on `sweep_fees`.
    pub fee_collector: Address,
}

/// Cumulative donation record for one account.
///
/// `total_amount` is the gross sum of every `donate` call made by
/// `account_id`, before the transfer fee. Accounts that never donated are
/// reported with `total_amount == 0`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    pub account_id: Address,
    pub total_amount: i128,
}

impl Donation {
    pub fn empty(account_id: Address) -> Self {
        Donation {
            account_id,
            total_amount: 0,
        }
    }
}

/// Outcome of the best-effort forward performed by `donate`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ForwardOutcome {
    /// `net` reached the beneficiary.
    Delivered,
    /// The transfer failed; `net` was parked in the undelivered pool.
    Parked,
    /// The whole amount was absorbed by the fee; nothing to forward.
    Skipped,
}
