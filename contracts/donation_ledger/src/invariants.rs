#![allow(dead_code)]

extern crate std;

use std::vec::Vec;

use soroban_sdk::Address;

use crate::types::{Donation, LedgerConfig};
use crate::DonationLedgerClient;

/// Donor count must equal the number of distinct donors seen.
pub fn assert_donor_count(client: &DonationLedgerClient, distinct_donors: usize) {
    let count = client.number_of_donors();
    assert_eq!(
        count, distinct_donors as u64,
        "donor count {} does not match {} distinct donors",
        count, distinct_donors
    );
}

/// Every account's recorded total equals the sum of what it donated.
pub fn assert_totals_match(client: &DonationLedgerClient, expected: &[(Address, i128)]) {
    for (account, sum) in expected.iter() {
        let record = client.get_donation_for_account(account);
        assert_eq!(&record.account_id, account);
        assert_eq!(
            record.total_amount, *sum,
            "recorded total {} differs from donated sum {}",
            record.total_amount, sum
        );
    }
}

/// A donation record never shrinks.
pub fn assert_monotonic(before: &Donation, after: &Donation) {
    assert_eq!(before.account_id, after.account_id);
    assert!(
        after.total_amount >= before.total_amount,
        "total decreased from {} to {}",
        before.total_amount,
        after.total_amount
    );
}

/// The paginated listing covers exactly the donor table with no duplicates.
pub fn assert_listing_consistent(client: &DonationLedgerClient) {
    let count = client.number_of_donors();
    let mut seen: Vec<Donation> = Vec::new();
    let mut from = 0u64;
    loop {
        let page = client.get_donations(&from, &crate::MAX_PAGE_SIZE);
        if page.is_empty() {
            break;
        }
        for record in page.iter() {
            assert!(
                !seen.iter().any(|d| d.account_id == record.account_id),
                "donor listed twice"
            );
            assert_eq!(client.get_donation_for_account(&record.account_id), record);
            seen.push(record);
        }
        from += page.len() as u64;
    }
    assert_eq!(seen.len() as u64, count);
}

/// Configuration never changes after `init`.
pub fn assert_config_unchanged(original: &LedgerConfig, client: &DonationLedgerClient) {
    assert_eq!(original, &client.get_config());
    assert_eq!(original.beneficiary, client.get_beneficiary());
}

/// Everything donated is accounted for: forwarded, withheld as fee, or parked.
pub fn assert_conservation(
    donated: i128,
    beneficiary_received: i128,
    client: &DonationLedgerClient,
) {
    let fees = client.fees_collected();
    let parked = client.undelivered();
    assert_eq!(
        donated,
        beneficiary_received + fees + parked,
        "donated {} != forwarded {} + fees {} + parked {}",
        donated,
        beneficiary_received,
        fees,
        parked
    );
}
