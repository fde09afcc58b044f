use soroban_sdk::{contracttype, Address};

// Token constants
pub const DECIMALS: u32 = 6;
pub const TOKEN_UNIT: i128 = 1_000_000;
pub const INITIAL_SUPPLY: i128 = 600_000_000 * TOKEN_UNIT;

// Contribution pricing. The payment asset uses 18 decimals, so one token
// subunit costs RATE_SCALE / RATE payment subunits.
pub const MIN_INVEST: i128 = 100_000_000_000_000_000; // 0.1 payment unit
pub const RATE: i128 = 10_000; // whole tokens per whole payment unit
pub const RATE_SCALE: i128 = 1_000_000_000_000;

pub const SECONDS_PER_DAY: u64 = 86_400;

// Bonus percentage per day offset since campaign start.
// Day offsets past the end of the table earn no bonus.
pub const BONUS_SCHEDULE: [i128; 15] = [
    40, 40, 40, // days 0-2
    30, 30, 30, 30, 30, // days 3-7
    20, 20, 20, 20, // days 8-11
    10, 10, 10, // days 12-14
];

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Unix timestamp when the campaign opens
    pub start: u64,
    /// Campaign length in days; the window is [start, start + period_days * 1d)
    pub period_days: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owner,
    Paused,
    Name,
    Symbol,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceKey),
    Claimable(Address),
    TokenSold,
    Campaign,
    PaymentToken,
    Custodian,
}
