//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the ledger:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type           | Description                          |
//! |-----------------|----------------|--------------------------------------|
//! | `Config`        | `LedgerConfig` | Beneficiary, token, fee, collector   |
//! | `DonorCount`    | `u64`          | Number of distinct donors            |
//! | `FeePool`       | `i128`         | Fees withheld and not yet swept      |
//! | `Undelivered`   | `i128`         | Forwards that failed to reach target |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                | Type      | Description                          |
//! |--------------------|-----------|--------------------------------------|
//! | `Donation(addr)`   | `i128`    | Cumulative gross total for `addr`    |
//! | `Donor(index)`     | `Address` | Donor at `index`, first-donation order |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! `Donor(i)` exists for every `i < DonorCount` and for nothing else, so the
//! donor count always equals the number of `Donation` keys.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Donation, LedgerConfig};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Ledger configuration (Instance).
    Config,
    /// Distinct donor counter (Instance).
    DonorCount,
    /// Withheld transfer fees (Instance).
    FeePool,
    /// Net amounts whose forward failed (Instance).
    Undelivered,
    /// Cumulative total keyed by donor (Persistent).
    Donation(Address),
    /// Donor address keyed by first-donation position (Persistent).
    Donor(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Read the configuration, `None` before `init`.
pub fn load_config(env: &Env) -> Option<LedgerConfig> {
    let config = env.storage().instance().get(&DataKey::Config);
    if config.is_some() {
        bump_instance(env);
    }
    config
}

pub fn get_donor_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::DonorCount)
        .unwrap_or(0)
}

fn set_donor_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::DonorCount, &count);
}

fn get_pool(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

/// Add `amount` to the pool at `key`. Returns `None` on overflow.
fn add_to_pool(env: &Env, key: &DataKey, amount: i128) -> Option<i128> {
    let updated = get_pool(env, key).checked_add(amount)?;
    env.storage().instance().set(key, &updated);
    bump_instance(env);
    Some(updated)
}

/// Zero the pool at `key` and return what it held.
fn drain_pool(env: &Env, key: &DataKey) -> i128 {
    let amount = get_pool(env, key);
    if amount > 0 {
        env.storage().instance().set(key, &0i128);
        bump_instance(env);
    }
    amount
}

pub fn get_fee_pool(env: &Env) -> i128 {
    get_pool(env, &DataKey::FeePool)
}

pub fn add_to_fee_pool(env: &Env, amount: i128) -> Option<i128> {
    add_to_pool(env, &DataKey::FeePool, amount)
}

pub fn drain_fee_pool(env: &Env) -> i128 {
    drain_pool(env, &DataKey::FeePool)
}

pub fn get_undelivered(env: &Env) -> i128 {
    get_pool(env, &DataKey::Undelivered)
}

pub fn add_to_undelivered(env: &Env, amount: i128) -> Option<i128> {
    add_to_pool(env, &DataKey::Undelivered, amount)
}

pub fn drain_undelivered(env: &Env) -> i128 {
    drain_pool(env, &DataKey::Undelivered)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Cumulative total for `donor`, or `None` if it never donated.
pub fn get_donation_total(env: &Env, donor: &Address) -> Option<i128> {
    let key = DataKey::Donation(donor.clone());
    let total = env.storage().persistent().get(&key);
    if total.is_some() {
        bump_persistent(env, &key);
    }
    total
}

fn set_donation_total(env: &Env, donor: &Address, total: i128) {
    let key = DataKey::Donation(donor.clone());
    env.storage().persistent().set(&key, &total);
    bump_persistent(env, &key);
}

/// Append `donor` to the donor index and bump the counter.
/// Returns `None` if the counter would overflow.
fn register_donor(env: &Env, donor: &Address) -> Option<u64> {
    let index = get_donor_count(env);
    let count = index.checked_add(1)?;
    let key = DataKey::Donor(index);
    env.storage().persistent().set(&key, donor);
    bump_persistent(env, &key);
    set_donor_count(env, count);
    bump_instance(env);
    Some(count)
}

/// Result of [`record_donation`].
pub struct Recorded {
    pub total: i128,
    pub new_donor: bool,
}

/// Add `amount` to `donor`'s cumulative total, registering the donor on
/// their first contribution. Returns `None` on overflow, in which case the
/// caller must abort so nothing written here survives.
pub fn record_donation(env: &Env, donor: &Address, amount: i128) -> Option<Recorded> {
    let (existing, new_donor) = match get_donation_total(env, donor) {
        Some(total) => (total, false),
        None => (0, true),
    };
    let total = existing.checked_add(amount)?;
    if new_donor {
        register_donor(env, donor)?;
    }
    set_donation_total(env, donor, total);
    Some(Recorded { total, new_donor })
}

fn get_donor_at(env: &Env, index: u64) -> Option<Address> {
    let key = DataKey::Donor(index);
    let donor = env.storage().persistent().get(&key);
    if donor.is_some() {
        bump_persistent(env, &key);
    }
    donor
}

/// Donation records for donors `from_index..from_index + limit`, clipped to
/// the donor count.
pub fn get_donations_page(env: &Env, from_index: u64, limit: u32) -> Vec<Donation> {
    let mut page: Vec<Donation> = Vec::new(env);
    let end = from_index
        .saturating_add(limit as u64)
        .min(get_donor_count(env));
    let mut index = from_index;
    while index < end {
        if let Some(account_id) = get_donor_at(env, index) {
            let total_amount = get_donation_total(env, &account_id).unwrap_or(0);
            page.push_back(Donation {
                account_id,
                total_amount,
            });
        }
        index += 1;
    }
    page
}
