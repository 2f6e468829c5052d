//! # Donation Ledger Contract
//!
//! A Soroban contract that accepts donations from any address, forwards each
//! one to a single fixed beneficiary, and keeps per-donor cumulative totals
//! plus a distinct-donor count.
//!
//! | Phase        | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Bootstrap    | [`DonationLedger::init`]                         |
//! | Donating     | [`DonationLedger::donate`]                       |
//! | Pools        | `sweep_fees`, `flush_undelivered`                |
//! | Queries      | `get_beneficiary`, `get_donation_for_account`, `number_of_donors`, `get_donations`, `get_config`, `fees_collected`, `undelivered` |
//!
//! ## Forwarding
//!
//! Every donation is pulled from the donor into the contract, recorded at its
//! gross value, and then forwarded to the beneficiary minus the configured
//! `transfer_fee`. The forward is attempted with `try_transfer`: if it fails,
//! the donor's record still stands and the net amount is parked in the
//! undelivered pool until someone calls `flush_undelivered`.
//!
//! Storage access is fully delegated to [`storage`].

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, token, Address, Env, Vec,
};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;

pub use types::{Donation, LedgerConfig};
use types::ForwardOutcome;

/// Upper bound on the page size returned by `get_donations`.
pub const MAX_PAGE_SIZE: u32 = 50;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    ZeroOrMissingDeposit = 2,
    NotInitialized = 3,
    InvalidFee = 4,
    Overflow = 5,
}

#[contract]
pub struct DonationLedger;

#[contractimpl]
impl DonationLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Fix the beneficiary and the donation asset.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `beneficiary` must sign, so nobody else can bind the ledger to it
    ///   with a fee or collector of their choosing.
    /// - `token` is the SAC address of the asset donations are made in.
    /// - `transfer_fee` is withheld from every forward; must be non-negative.
    /// - `fee_collector` receives withheld fees on `sweep_fees`.
    pub fn init(
        env: Env,
        beneficiary: Address,
        token: Address,
        transfer_fee: i128,
        fee_collector: Address,
    ) {
        beneficiary.require_auth();
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if transfer_fee < 0 {
            panic_with_error!(&env, Error::InvalidFee);
        }

        let config = LedgerConfig {
            beneficiary: beneficiary.clone(),
            token: token.clone(),
            transfer_fee,
            fee_collector,
        };
        storage::save_config(&env, &config);

        events::emit_ledger_initialized(&env, beneficiary, token, transfer_fee);
    }

    // ─────────────────────────────────────────────────────────
    // Donating
    // ─────────────────────────────────────────────────────────

    /// Donate `amount` on behalf of `donor` and return the donor's new
    /// cumulative total.
    ///
    /// The returned total and the stored record always use the gross
    /// `amount`, whatever the outcome of the forward to the beneficiary.
    pub fn donate(env: Env, donor: Address, amount: i128) -> i128 {
        donor.require_auth();
        let config = Self::require_config(&env);

        if amount <= 0 {
            panic_with_error!(&env, Error::ZeroOrMissingDeposit);
        }

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&donor, &env.current_contract_address(), &amount);

        let recorded = match storage::record_donation(&env, &donor, amount) {
            Some(recorded) => recorded,
            None => panic_with_error!(&env, Error::Overflow),
        };
        if recorded.new_donor {
            log!(&env, "new donor", donor, storage::get_donor_count(&env));
        }

        let fee = config.transfer_fee.min(amount);
        if storage::add_to_fee_pool(&env, fee).is_none() {
            panic_with_error!(&env, Error::Overflow);
        }
        let outcome = Self::forward(&env, &token_client, &config.beneficiary, amount - fee);
        if outcome == ForwardOutcome::Parked {
            log!(&env, "forward parked", amount - fee);
        }

        events::emit_donation_made(&env, donor, amount, recorded.total);

        recorded.total
    }

    // ─────────────────────────────────────────────────────────
    // Pools
    // ─────────────────────────────────────────────────────────

    /// Send every withheld fee to the fee collector. Returns the amount sent.
    pub fn sweep_fees(env: Env) -> i128 {
        let config = Self::require_config(&env);

        let amount = storage::drain_fee_pool(&env);
        if amount == 0 {
            return 0;
        }

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &config.fee_collector, &amount);

        log!(&env, "fees swept", amount);
        events::emit_fees_swept(&env, config.fee_collector, amount);
        amount
    }

    /// Retry delivery of every parked forward to the beneficiary.
    ///
    /// Unlike the forward in `donate`, this transfer is not best-effort: if it
    /// fails the whole call reverts and the pool is left untouched.
    pub fn flush_undelivered(env: Env) -> i128 {
        let config = Self::require_config(&env);

        let amount = storage::drain_undelivered(&env);
        if amount == 0 {
            return 0;
        }

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &config.beneficiary, &amount);

        log!(&env, "undelivered flushed", amount);
        events::emit_undelivered_flushed(&env, config.beneficiary, amount);
        amount
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_beneficiary(env: Env) -> Address {
        Self::require_config(&env).beneficiary
    }

    pub fn get_config(env: Env) -> LedgerConfig {
        Self::require_config(&env)
    }

    /// Return the cumulative record for `account_id`.
    ///
    /// Accounts with no donation history get a record with a zero total
    /// rather than an error.
    pub fn get_donation_for_account(env: Env, account_id: Address) -> Donation {
        match storage::get_donation_total(&env, &account_id) {
            Some(total_amount) => Donation {
                account_id,
                total_amount,
            },
            None => Donation::empty(account_id),
        }
    }

    pub fn number_of_donors(env: Env) -> u64 {
        storage::get_donor_count(&env)
    }

    /// List donation records in first-donation order.
    ///
    /// At most [`MAX_PAGE_SIZE`] records are returned regardless of `limit`.
    pub fn get_donations(env: Env, from_index: u64, limit: u32) -> Vec<Donation> {
        storage::get_donations_page(&env, from_index, limit.min(MAX_PAGE_SIZE))
    }

    pub fn fees_collected(env: Env) -> i128 {
        storage::get_fee_pool(&env)
    }

    pub fn undelivered(env: Env) -> i128 {
        storage::get_undelivered(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn require_config(env: &Env) -> LedgerConfig {
        match storage::load_config(env) {
            Some(config) => config,
            None => panic_with_error!(env, Error::NotInitialized),
        }
    }

    /// Best-effort transfer of `net` to the beneficiary.
    ///
    /// A failed transfer is reverted on its own and never aborts the caller.
    fn forward(
        env: &Env,
        token_client: &token::Client,
        beneficiary: &Address,
        net: i128,
    ) -> ForwardOutcome {
        if net <= 0 {
            return ForwardOutcome::Skipped;
        }

        match token_client.try_transfer(&env.current_contract_address(), beneficiary, &net) {
            Ok(Ok(())) => ForwardOutcome::Delivered,
            _ => {
                if storage::add_to_undelivered(env, net).is_none() {
                    panic_with_error!(env, Error::Overflow);
                }
                events::emit_forward_failed(env, beneficiary.clone(), net);
                ForwardOutcome::Parked
            }
        }
    }
}
