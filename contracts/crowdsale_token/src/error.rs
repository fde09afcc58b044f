use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-9)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION / PAUSE ERRORS (10-19)
    // ============================================
    /// Caller is not the owner
    Unauthorized = 10,
    /// Contract is paused
    ContractPaused = 11,
    /// Pause requested while already paused
    AlreadyPaused = 12,
    /// Resume requested while not paused
    NotPaused = 13,

    // ============================================
    // LEDGER ERRORS (20-29)
    // ============================================
    /// Amount must be positive
    InvalidAmount = 20,
    /// Sender balance too low
    InsufficientBalance = 21,
    /// Spender allowance too low
    InsufficientAllowance = 22,
    /// Non-zero allowance must be reset to zero before changing it
    PendingAllowance = 23,

    // ============================================
    // CROWDSALE ERRORS (30-39)
    // ============================================
    /// Contribution below the minimum investment
    BelowMinInvest = 30,
    /// Campaign window not open
    CampaignNotActive = 31,
    /// Investment would exceed the total supply
    SupplyExhausted = 32,
    /// No claimable balance for this investor
    NothingToClaim = 33,
    /// Forwarding the contribution to the custodian failed
    PaymentFailed = 34,

    // ============================================
    // ARITHMETIC ERRORS (40-49)
    // ============================================
    /// Checked addition or multiplication overflowed
    Overflow = 40,
    /// Checked subtraction underflowed
    Underflow = 41,
    /// Division by zero
    DivisionByZero = 42,
}
