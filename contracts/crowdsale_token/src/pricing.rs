use crate::error::Error;
use crate::math;
use crate::storage::{Campaign, BONUS_SCHEDULE, RATE, RATE_SCALE, SECONDS_PER_DAY};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    NotStarted,
    Active,
    Ended,
}

/// Derive the campaign status from the current time. The window is the
/// half-open interval [start, start + period_days * 1d); nothing is persisted.
pub fn campaign_status(now: u64, campaign: &Campaign) -> CampaignStatus {
    if now < campaign.start {
        return CampaignStatus::NotStarted;
    }
    let end = campaign
        .start
        .saturating_add(campaign.period_days.saturating_mul(SECONDS_PER_DAY));
    if now < end {
        CampaignStatus::Active
    } else {
        CampaignStatus::Ended
    }
}

/// Day offset since campaign start. Only meaningful once the caller has
/// checked that the campaign is active.
pub fn day_index(now: u64, start: u64) -> u64 {
    (now - start) / SECONDS_PER_DAY
}

/// Bonus percentage for a day offset; zero past the end of the table.
pub fn bonus_percent(day: u64) -> i128 {
    usize::try_from(day)
        .ok()
        .and_then(|d| BONUS_SCHEDULE.get(d))
        .copied()
        .unwrap_or(0)
}

/// Price a contribution for a given day offset.
///
/// Formula: base = value × RATE / RATE_SCALE
///          tokens = base + base × bonus(day) / 100
pub fn calc_tokens(value: i128, day: u64) -> Result<i128, Error> {
    let base = math::div(math::mul(value, RATE)?, RATE_SCALE)?;
    let bonus = bonus_percent(day);
    if bonus == 0 {
        return Ok(base);
    }
    math::add(base, math::div(math::mul(base, bonus)?, 100)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MIN_INVEST;

    #[test]
    fn test_status_window_boundaries() {
        let campaign = Campaign {
            start: 1_000_000,
            period_days: 30,
        };
        let end = 1_000_000 + 30 * SECONDS_PER_DAY;

        assert_eq!(
            campaign_status(999_999, &campaign),
            CampaignStatus::NotStarted
        );
        assert_eq!(campaign_status(1_000_000, &campaign), CampaignStatus::Active);
        assert_eq!(campaign_status(end - 1, &campaign), CampaignStatus::Active);
        assert_eq!(campaign_status(end, &campaign), CampaignStatus::Ended);
    }

    #[test]
    fn test_zero_period_is_always_ended() {
        let campaign = Campaign {
            start: 1_000_000,
            period_days: 0,
        };
        assert_eq!(campaign_status(1_000_000, &campaign), CampaignStatus::Ended);
    }

    #[test]
    fn test_day_index() {
        let start = 1_000_000;
        assert_eq!(day_index(start, start), 0);
        assert_eq!(day_index(start + SECONDS_PER_DAY - 1, start), 0);
        assert_eq!(day_index(start + SECONDS_PER_DAY, start), 1);
        assert_eq!(day_index(start + 3 * SECONDS_PER_DAY, start), 3);
    }

    #[test]
    fn test_bonus_tiers() {
        assert_eq!(bonus_percent(0), 40);
        assert_eq!(bonus_percent(2), 40);
        assert_eq!(bonus_percent(3), 30);
        assert_eq!(bonus_percent(7), 30);
        assert_eq!(bonus_percent(8), 20);
        assert_eq!(bonus_percent(14), 10);
        assert_eq!(bonus_percent(15), 0);
        assert_eq!(bonus_percent(1_000), 0);
    }

    #[test]
    fn test_calc_tokens_day0() {
        // 0.1 payment unit buys 1,000 tokens, +40% on day 0
        let base = MIN_INVEST * RATE / RATE_SCALE;
        assert_eq!(base, 1_000_000_000);
        assert_eq!(calc_tokens(MIN_INVEST, 0).unwrap(), base + base * 40 / 100);
    }

    #[test]
    fn test_calc_tokens_day3() {
        let base = MIN_INVEST * RATE / RATE_SCALE;
        assert_eq!(calc_tokens(MIN_INVEST, 3).unwrap(), base + base * 30 / 100);
    }

    #[test]
    fn test_calc_tokens_past_table() {
        let base = MIN_INVEST * RATE / RATE_SCALE;
        assert_eq!(calc_tokens(MIN_INVEST, 15).unwrap(), base);
        assert_eq!(calc_tokens(MIN_INVEST, 29).unwrap(), base);
    }

    #[test]
    fn test_calc_tokens_overflow() {
        assert_eq!(calc_tokens(i128::MAX, 0), Err(Error::Overflow));
    }
}
