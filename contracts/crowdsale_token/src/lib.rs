#![no_std]

mod error;
mod events;
mod ledger;
mod math;
mod pricing;
mod storage;


use error::Error;
use events::{
    ApprovalEvent, BurnEvent, ClaimedEvent, InvestedEvent, MintEvent, PausedEvent, ResumedEvent,
    TransferEvent,
};
use pricing::CampaignStatus;
use storage::{Campaign, DataKey, DECIMALS, INITIAL_SUPPLY, MIN_INVEST};

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Symbol};

#[contract]
pub struct CrowdsaleToken;

#[contractimpl]
impl CrowdsaleToken {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the token and campaign configuration. The full supply is
    /// credited to the owner, who acts as the issuer for `claim`.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        payment_token: Address,
        custodian: Address,
        ico_start: u64,
        ico_days: u64,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Paused, &false);
        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Symbol, &symbol);
        env.storage()
            .instance()
            .set(&DataKey::PaymentToken, &payment_token);
        env.storage().instance().set(&DataKey::Custodian, &custodian);
        env.storage().instance().set(
            &DataKey::Campaign,
            &Campaign {
                start: ico_start,
                period_days: ico_days,
            },
        );

        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &INITIAL_SUPPLY);
        env.storage()
            .instance()
            .set(&DataKey::Balance(owner), &INITIAL_SUPPLY);
        env.storage().instance().set(&DataKey::TokenSold, &0i128);

        Ok(())
    }

    // ============================================
    // LEDGER
    // ============================================

    /// Spendable balance of an account
    pub fn balance(env: Env, id: Address) -> i128 {
        ledger::read_balance(&env, &id)
    }

    /// Remaining approved amount for (from, spender)
    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        ledger::read_allowance(&env, &from, &spender)
    }

    /// Set the allowance for a spender.
    ///
    /// A non-zero allowance cannot be changed to another non-zero value; it
    /// must be reset to zero first. This closes the approve/transferFrom race
    /// where a spender front-runs an allowance change and spends both values.
    ///
    /// # Errors
    /// - `InvalidAmount`: Amount is negative
    /// - `PendingAllowance`: Current allowance and new amount are both non-zero
    pub fn approve(env: Env, from: Address, spender: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let current = ledger::read_allowance(&env, &from, &spender);
        if amount != 0 && current != 0 {
            return Err(Error::PendingAllowance);
        }

        ledger::write_allowance(&env, &from, &spender, amount);

        env.events().publish(
            (Symbol::new(&env, "approve"), from.clone(), spender.clone()),
            ApprovalEvent {
                from,
                spender,
                amount,
            },
        );

        Ok(())
    }

    /// Transfer tokens between accounts.
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidAmount`: Amount is not positive
    /// - `InsufficientBalance`: Sender balance too low
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        Self::check_not_paused(&env)?;

        from.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        ledger::spend_balance(&env, &from, amount)?;
        ledger::receive_balance(&env, &to, amount)?;

        env.events().publish(
            (Symbol::new(&env, "transfer"), from.clone(), to.clone()),
            TransferEvent { from, to, amount },
        );

        Ok(())
    }

    /// Transfer tokens on behalf of `from`, drawing down the spender's
    /// allowance. Allowance, sender balance and receiver balance move as one
    /// unit; any failure leaves all three untouched.
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidAmount`: Amount is not positive
    /// - `InsufficientAllowance`: Spender allowance too low
    /// - `InsufficientBalance`: Sender balance too low
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::check_not_paused(&env)?;

        spender.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        ledger::spend_allowance(&env, &from, &spender, amount)?;
        ledger::spend_balance(&env, &from, amount)?;
        ledger::receive_balance(&env, &to, amount)?;

        env.events().publish(
            (Symbol::new(&env, "transfer"), from.clone(), to.clone()),
            TransferEvent { from, to, amount },
        );

        Ok(())
    }

    // ============================================
    // CROWDSALE
    // ============================================

    /// Invest in the campaign. The contribution is forwarded to the custodian
    /// in the payment token, and the priced tokens are credited to the
    /// investor's claimable balance, to be settled later via `claim`.
    ///
    /// The custodian forwarding runs before any counter is written, so a
    /// failed forwarding aborts the call with no internal state to unwind.
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `BelowMinInvest`: Contribution below the minimum investment
    /// - `CampaignNotActive`: Campaign window not open
    /// - `SupplyExhausted`: Priced tokens would exceed the total supply
    /// - `PaymentFailed`: Payment token transfer to the custodian failed
    pub fn invest(env: Env, investor: Address, value: i128) -> Result<(), Error> {
        Self::check_not_paused(&env)?;

        investor.require_auth();

        let (tokens, day, new_sold) = Self::price_contribution(&env, value)?;

        let payment_token: Address = env
            .storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(Error::NotInitialized)?;
        let custodian: Address = env
            .storage()
            .instance()
            .get(&DataKey::Custodian)
            .ok_or(Error::NotInitialized)?;

        let payment = token::Client::new(&env, &payment_token);
        match payment.try_transfer(&investor, &custodian, &value) {
            Ok(Ok(())) => {}
            _ => return Err(Error::PaymentFailed),
        }

        Self::credit_contribution(&env, &investor, tokens, new_sold)?;

        env.events().publish(
            (Symbol::new(&env, "invested"), investor.clone()),
            InvestedEvent {
                investor,
                value,
                tokens,
                day,
            },
        );

        Ok(())
    }

    /// Owner-only proxy for contributions settled outside the payment token
    /// (e.g. fiat or another chain). Prices and credits exactly like `invest`
    /// but performs no custodian forwarding.
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `BelowMinInvest`: Contribution below the minimum investment
    /// - `CampaignNotActive`: Campaign window not open
    /// - `SupplyExhausted`: Priced tokens would exceed the total supply
    pub fn invest_for(env: Env, investor: Address, value: i128) -> Result<(), Error> {
        Self::check_not_paused(&env)?;
        Self::require_owner(&env)?;

        let (tokens, day, new_sold) = Self::price_contribution(&env, value)?;
        Self::credit_contribution(&env, &investor, tokens, new_sold)?;

        env.events().publish(
            (Symbol::new(&env, "invested"), investor.clone()),
            InvestedEvent {
                investor,
                value,
                tokens,
                day,
            },
        );

        Ok(())
    }

    /// Settle the investor's claimable balance: the full amount moves from the
    /// issuer's (owner's) balance into the investor's spendable balance. This
    /// is the only path by which invested tokens become spendable.
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `NothingToClaim`: No claimable balance for this investor
    /// - `InsufficientBalance`: Issuer balance cannot cover the claim
    pub fn claim(env: Env, investor: Address) -> Result<(), Error> {
        Self::check_not_paused(&env)?;

        investor.require_auth();

        let amount = ledger::read_claimable(&env, &investor);
        if amount == 0 {
            return Err(Error::NothingToClaim);
        }

        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)?;

        ledger::spend_balance(&env, &owner, amount)?;
        ledger::receive_balance(&env, &investor, amount)?;
        ledger::write_claimable(&env, &investor, 0);

        env.events().publish(
            (Symbol::new(&env, "claimed"), investor.clone()),
            ClaimedEvent { investor, amount },
        );

        Ok(())
    }

    /// Price a contribution at the current day offset.
    ///
    /// # Errors
    /// - `InvalidAmount`: Value is not positive
    /// - `CampaignNotActive`: Campaign window not open
    pub fn calc_tokens(env: Env, value: i128) -> Result<i128, Error> {
        if value <= 0 {
            return Err(Error::InvalidAmount);
        }

        let campaign = Self::read_campaign(&env)?;
        let now = env.ledger().timestamp();

        if pricing::campaign_status(now, &campaign) != CampaignStatus::Active {
            return Err(Error::CampaignNotActive);
        }

        pricing::calc_tokens(value, pricing::day_index(now, campaign.start))
    }

    // ============================================
    // SUPPLY ADMINISTRATION
    // ============================================

    /// Mint tokens to the owner, growing the total supply (owner only).
    /// Deliberately not gated on pause.
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the owner
    /// - `InvalidAmount`: Amount is not positive
    pub fn mint(env: Env, value: i128) -> Result<(), Error> {
        let owner = Self::require_owner(&env)?;

        if value <= 0 {
            return Err(Error::InvalidAmount);
        }

        ledger::receive_balance(&env, &owner, value)?;
        let total = Self::read_total_supply(&env);
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &math::add(total, value)?);

        env.events().publish(
            (Symbol::new(&env, "mint"), owner.clone()),
            MintEvent {
                to: owner,
                amount: value,
            },
        );

        Ok(())
    }

    /// Burn tokens from the owner's balance, shrinking the total supply
    /// (owner only). Deliberately not gated on pause.
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the owner
    /// - `InvalidAmount`: Amount is not positive
    /// - `InsufficientBalance`: Owner balance too low
    pub fn burn(env: Env, value: i128) -> Result<(), Error> {
        let owner = Self::require_owner(&env)?;

        if value <= 0 {
            return Err(Error::InvalidAmount);
        }

        ledger::spend_balance(&env, &owner, value)?;
        let total = Self::read_total_supply(&env);
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &math::sub(total, value)?);

        env.events().publish(
            (Symbol::new(&env, "burn"), owner.clone()),
            BurnEvent {
                from: owner,
                amount: value,
            },
        );

        Ok(())
    }

    // ============================================
    // CAMPAIGN / OWNER ADMINISTRATION
    // ============================================

    /// Overwrite the campaign start timestamp (owner only, no validation).
    pub fn set_ico_start(env: Env, start: u64) -> Result<(), Error> {
        Self::require_owner(&env)?;

        let mut campaign = Self::read_campaign(&env)?;
        campaign.start = start;
        env.storage().instance().set(&DataKey::Campaign, &campaign);

        Ok(())
    }

    /// Overwrite the campaign period in days (owner only, no validation).
    pub fn set_ico_period(env: Env, days: u64) -> Result<(), Error> {
        Self::require_owner(&env)?;

        let mut campaign = Self::read_campaign(&env)?;
        campaign.period_days = days;
        env.storage().instance().set(&DataKey::Campaign, &campaign);

        Ok(())
    }

    /// Overwrite the custodian address contributions are forwarded to
    /// (owner only).
    pub fn set_multisig(env: Env, custodian: Address) -> Result<(), Error> {
        Self::require_owner(&env)?;

        env.storage().instance().set(&DataKey::Custodian, &custodian);

        Ok(())
    }

    pub fn get_multisig(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Custodian)
            .ok_or(Error::NotInitialized)
    }

    /// Hand ownership to a new address (owner only). `None` is accepted and
    /// silently ignored.
    pub fn set_owner(env: Env, new_owner: Option<Address>) -> Result<(), Error> {
        Self::require_owner(&env)?;

        if let Some(new_owner) = new_owner {
            env.storage().instance().set(&DataKey::Owner, &new_owner);
        }

        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    /// Halt investor-facing and transfer-facing operations (owner only).
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the owner
    /// - `AlreadyPaused`: Contract already paused
    pub fn pause(env: Env) -> Result<(), Error> {
        let owner = Self::require_owner(&env)?;

        if Self::read_paused(&env) {
            return Err(Error::AlreadyPaused);
        }
        env.storage().instance().set(&DataKey::Paused, &true);

        env.events().publish(
            (Symbol::new(&env, "paused"),),
            PausedEvent { owner },
        );

        Ok(())
    }

    /// Lift the pause (owner only).
    ///
    /// # Errors
    /// - `Unauthorized`: Caller is not the owner
    /// - `NotPaused`: Contract is not paused
    pub fn resume(env: Env) -> Result<(), Error> {
        let owner = Self::require_owner(&env)?;

        if !Self::read_paused(&env) {
            return Err(Error::NotPaused);
        }
        env.storage().instance().set(&DataKey::Paused, &false);

        env.events().publish(
            (Symbol::new(&env, "resumed"),),
            ResumedEvent { owner },
        );

        Ok(())
    }

    // ============================================
    // VIEWS
    // ============================================

    pub fn name(env: Env) -> Result<String, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Name)
            .ok_or(Error::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Symbol)
            .ok_or(Error::NotInitialized)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn total_supply(env: Env) -> i128 {
        Self::read_total_supply(&env)
    }

    /// Running total of tokens priced and credited across all investments
    pub fn token_sold(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TokenSold)
            .unwrap_or(0)
    }

    /// Tokens earned via investment but not yet claimed
    pub fn claimable(env: Env, investor: Address) -> i128 {
        ledger::read_claimable(&env, &investor)
    }

    pub fn campaign(env: Env) -> Result<Campaign, Error> {
        Self::read_campaign(&env)
    }

    pub fn min_invest(_env: Env) -> i128 {
        MIN_INVEST
    }

    /// Bonus percentage for a day offset since campaign start
    pub fn bonus_percent(_env: Env, day: u64) -> i128 {
        pricing::bonus_percent(day)
    }

    pub fn is_paused(env: Env) -> bool {
        Self::read_paused(&env)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn check_not_paused(env: &Env) -> Result<(), Error> {
        if Self::read_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }

    fn read_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    fn require_owner(env: &Env) -> Result<Address, Error> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)?;
        owner.require_auth();
        Ok(owner)
    }

    fn read_campaign(env: &Env) -> Result<Campaign, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Campaign)
            .ok_or(Error::NotInitialized)
    }

    fn read_total_supply(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    /// Validate a contribution against the minimum, the campaign window and
    /// the remaining supply. Pure with respect to storage: nothing is written.
    fn price_contribution(env: &Env, value: i128) -> Result<(i128, u64, i128), Error> {
        if value < MIN_INVEST {
            return Err(Error::BelowMinInvest);
        }

        let campaign = Self::read_campaign(env)?;
        let now = env.ledger().timestamp();
        if pricing::campaign_status(now, &campaign) != CampaignStatus::Active {
            return Err(Error::CampaignNotActive);
        }

        let day = pricing::day_index(now, campaign.start);
        let tokens = pricing::calc_tokens(value, day)?;

        let sold: i128 = env
            .storage()
            .instance()
            .get(&DataKey::TokenSold)
            .unwrap_or(0);
        let new_sold = math::add(sold, tokens)?;
        if new_sold > Self::read_total_supply(env) {
            return Err(Error::SupplyExhausted);
        }

        Ok((tokens, day, new_sold))
    }

    /// Commit a priced contribution: bump the investor's claimable balance and
    /// the sold counter.
    fn credit_contribution(
        env: &Env,
        investor: &Address,
        tokens: i128,
        new_sold: i128,
    ) -> Result<(), Error> {
        let claimable = ledger::read_claimable(env, investor);
        ledger::write_claimable(env, investor, math::add(claimable, tokens)?);
        env.storage().instance().set(&DataKey::TokenSold, &new_sold);
        Ok(())
    }
}
