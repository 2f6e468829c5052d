use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerInitialized {
    pub beneficiary: Address,
    pub token: Address,
    pub transfer_fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationMade {
    pub donor: Address,
    pub amount: i128,
    pub total_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForwardFailed {
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesSwept {
    pub collector: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UndeliveredFlushed {
    pub beneficiary: Address,
    pub amount: i128,
}

pub fn emit_ledger_initialized(env: &Env, beneficiary: Address, token: Address, transfer_fee: i128) {
    let topics = (symbol_short!("init"),);
    let data = LedgerInitialized {
        beneficiary,
        token,
        transfer_fee,
    };
    env.events().publish(topics, data);
}

pub fn emit_donation_made(env: &Env, donor: Address, amount: i128, total_amount: i128) {
    let topics = (symbol_short!("donated"), donor.clone());
    let data = DonationMade {
        donor,
        amount,
        total_amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_forward_failed(env: &Env, beneficiary: Address, amount: i128) {
    let topics = (symbol_short!("fwd_fail"), beneficiary.clone());
    let data = ForwardFailed {
        beneficiary,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_fees_swept(env: &Env, collector: Address, amount: i128) {
    let topics = (symbol_short!("fees"), collector.clone());
    let data = FeesSwept { collector, amount };
    env.events().publish(topics, data);
}

pub fn emit_undelivered_flushed(env: &Env, beneficiary: Address, amount: i128) {
    let topics = (symbol_short!("flushed"), beneficiary.clone());
    let data = UndeliveredFlushed {
        beneficiary,
        amount,
    };
    env.events().publish(topics, data);
}
