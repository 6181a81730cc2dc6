use crate::constants::{COOLDOWN_TIME, FAUCET_AMOUNT, MAX_CLAIM_AMOUNT};
use crate::error::FaucetError;
use anchor_lang::prelude::*;

/// Per-user claim history. Created on the first claim, never closed.
#[account]
#[derive(Default, InitSpace)]
pub struct ClaimRecord {
    /// The user's public key
    pub user: Pubkey,
    /// Unix timestamp of the last successful claim
    pub last_claim_at: i64,
    /// Sum of every amount claimed so far
    pub total_claimed: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

/// Eligibility of a single address, always derived from a [`ClaimRecord`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimStatus {
    /// Never claimed
    Fresh,
    /// Claimed recently, still inside the cooldown window
    Cooling,
    /// Cooldown elapsed and the lifetime cap leaves room for another claim
    Eligible,
    /// Another claim would exceed the lifetime cap
    Exhausted,
}

impl ClaimRecord {
    pub const SEED_PREFIX: &'static [u8] = b"claim_record";
    // 8 (discriminator) + 32 (user) + 8 (last_claim_at) + 8 (total_claimed) + 1 (bump)
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Every successful claim adds a non-zero amount, so this also covers a
    /// claim made at timestamp 0.
    pub fn has_claimed(&self) -> bool {
        self.total_claimed > 0
    }

    /// Earliest timestamp at which the next claim clears the cooldown.
    pub fn next_claim_at(&self) -> Option<i64> {
        self.has_claimed()
            .then(|| self.last_claim_at.saturating_add(COOLDOWN_TIME as i64))
    }

    pub fn in_cooldown(&self, now: i64) -> bool {
        matches!(self.next_claim_at(), Some(next) if now < next)
    }

    pub fn is_exhausted(&self) -> bool {
        self.total_claimed.saturating_add(FAUCET_AMOUNT) > MAX_CLAIM_AMOUNT
    }

    pub fn status(&self, now: i64) -> ClaimStatus {
        if self.is_exhausted() {
            ClaimStatus::Exhausted
        } else if !self.has_claimed() {
            ClaimStatus::Fresh
        } else if self.in_cooldown(now) {
            ClaimStatus::Cooling
        } else {
            ClaimStatus::Eligible
        }
    }

    /// The claim predicate shared by `can_claim` and `request_tokens`.
    /// Checked in order: pause, cooldown, lifetime cap.
    pub fn check_claim(&self, paused: bool, now: i64) -> Result<()> {
        require!(!paused, FaucetError::FaucetPaused);
        require!(!self.in_cooldown(now), FaucetError::CooldownActive);
        require!(!self.is_exhausted(), FaucetError::LifetimeLimitExceeded);
        Ok(())
    }

    pub fn can_claim(&self, paused: bool, now: i64) -> bool {
        self.check_claim(paused, now).is_ok()
    }

    pub fn remaining_allowance(&self) -> u64 {
        MAX_CLAIM_AMOUNT.saturating_sub(self.total_claimed)
    }

    /// Seconds left until the cooldown window closes, 0 when there is none.
    pub fn cooldown_remaining(&self, now: i64) -> i64 {
        self.next_claim_at()
            .map_or(0, |next| next.saturating_sub(now).max(0))
    }

    /// Runs the claim predicate and books one faucet payout at `now`.
    pub fn try_claim(&mut self, paused: bool, now: i64) -> Result<()> {
        self.check_claim(paused, now)?;
        self.total_claimed = self
            .total_claimed
            .checked_add(FAUCET_AMOUNT)
            .ok_or(FaucetError::ArithmeticOverflow)?;
        self.last_claim_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const DAY: i64 = COOLDOWN_TIME as i64;
    const MAX_CLAIMS: u64 = MAX_CLAIM_AMOUNT / FAUCET_AMOUNT;

    fn assert_fails(result: Result<()>, expected: FaucetError) {
        assert_eq!(result.unwrap_err(), Error::from(expected));
    }

    /// Claims `MAX_CLAIMS` times starting at `start`, one cooldown apart.
    /// Returns the timestamp of the last claim.
    fn exhaust(record: &mut ClaimRecord, start: i64) -> i64 {
        let mut now = start;
        for i in 0..MAX_CLAIMS {
            if i > 0 {
                now += DAY;
            }
            record.try_claim(false, now).unwrap();
        }
        now
    }

    #[test]
    fn fresh_record() {
        let record = ClaimRecord::default();
        assert_eq!(record.status(0), ClaimStatus::Fresh);
        assert_eq!(record.remaining_allowance(), MAX_CLAIM_AMOUNT);
        assert_eq!(record.cooldown_remaining(1_700_000_000), 0);
        assert_eq!(record.next_claim_at(), None);
    }

    #[test]
    fn first_claim_succeeds_at_any_time() {
        for now in [0, 1, 100, DAY - 1, 1_700_000_000] {
            let mut record = ClaimRecord::default();
            assert!(record.can_claim(false, now));
            record.try_claim(false, now).unwrap();
            assert_eq!(record.total_claimed, FAUCET_AMOUNT);
            assert_eq!(record.last_claim_at, now);
        }
    }

    #[test]
    fn immediate_repeat_hits_cooldown() {
        let mut record = ClaimRecord::default();
        let t0 = 1_700_000_000;
        record.try_claim(false, t0).unwrap();

        assert_eq!(record.status(t0), ClaimStatus::Cooling);
        assert!(!record.can_claim(false, t0));
        assert_fails(record.try_claim(false, t0), FaucetError::CooldownActive);
        assert_fails(record.try_claim(false, t0 + DAY - 1), FaucetError::CooldownActive);
        assert_eq!(record.cooldown_remaining(t0 + 1), DAY - 1);

        // Failed attempts leave the record untouched.
        assert_eq!(record.total_claimed, FAUCET_AMOUNT);
        assert_eq!(record.last_claim_at, t0);

        assert_eq!(record.status(t0 + DAY), ClaimStatus::Eligible);
        assert_eq!(record.cooldown_remaining(t0 + DAY), 0);
        record.try_claim(false, t0 + DAY).unwrap();
        assert_eq!(record.total_claimed, 2 * FAUCET_AMOUNT);
    }

    #[test]
    fn daily_claims_until_lifetime_cap() {
        // 10 tokens per claim, 24h cooldown, 50 token cap.
        let mut record = ClaimRecord::default();
        let mut balance = 0u64;

        record.try_claim(false, 0).unwrap();
        balance += FAUCET_AMOUNT;
        assert_eq!(balance, 10 * faucet_token::ONE_TOKEN);
        assert_eq!(record.total_claimed, FAUCET_AMOUNT);

        assert_fails(record.try_claim(false, 100), FaucetError::CooldownActive);

        for now in [86_400, 172_800, 259_200, 345_600] {
            record.try_claim(false, now).unwrap();
            balance += FAUCET_AMOUNT;
        }
        assert_eq!(balance, MAX_CLAIM_AMOUNT);
        assert_eq!(record.total_claimed, MAX_CLAIM_AMOUNT);
        assert_eq!(record.remaining_allowance(), 0);
        assert_eq!(record.last_claim_at, 345_600);

        assert_eq!(record.status(432_000), ClaimStatus::Exhausted);
        assert_fails(record.try_claim(false, 432_000), FaucetError::LifetimeLimitExceeded);
        assert_eq!(record.total_claimed, MAX_CLAIM_AMOUNT);
    }

    #[test]
    fn exhausted_stays_exhausted() {
        let mut record = ClaimRecord::default();
        let last = exhaust(&mut record, 1_700_000_000);
        assert_eq!(record.total_claimed, MAX_CLAIMS * FAUCET_AMOUNT);

        for wait in [DAY, 30 * DAY, 10_000 * DAY] {
            assert!(!record.can_claim(false, last + wait));
            assert_fails(
                record.try_claim(false, last + wait),
                FaucetError::LifetimeLimitExceeded,
            );
        }
        // Still inside the window the cooldown wins.
        assert_fails(record.try_claim(false, last + 1), FaucetError::CooldownActive);
    }

    #[test]
    fn allowance_tracks_total_claimed() {
        let mut record = ClaimRecord::default();
        let mut now = 0;
        while record.can_claim(false, now) {
            record.try_claim(false, now).unwrap();
            assert_eq!(
                record.remaining_allowance(),
                MAX_CLAIM_AMOUNT - record.total_claimed
            );
            now += DAY;
        }
        assert_eq!(record.remaining_allowance(), 0);
    }

    #[test]
    fn allowance_never_underflows() {
        let record = ClaimRecord {
            total_claimed: MAX_CLAIM_AMOUNT + 1,
            ..Default::default()
        };
        assert_eq!(record.remaining_allowance(), 0);
        assert_eq!(record.status(0), ClaimStatus::Exhausted);
    }

    #[test]
    fn addresses_are_independent() {
        let mut alice = ClaimRecord::default();
        let mut bob = ClaimRecord::default();
        let t0 = 1_700_000_000;

        exhaust(&mut alice, t0);
        assert!(bob.can_claim(false, t0));
        assert_eq!(bob.remaining_allowance(), MAX_CLAIM_AMOUNT);

        bob.try_claim(false, t0).unwrap();
        assert_eq!(bob.total_claimed, FAUCET_AMOUNT);
        assert_eq!(alice.total_claimed, MAX_CLAIM_AMOUNT);
    }

    #[test]
    fn pause_overrides_every_status() {
        let fresh = ClaimRecord::default();
        let mut claimed_once = ClaimRecord::default();
        claimed_once.try_claim(false, 0).unwrap();
        let mut exhausted = ClaimRecord::default();
        exhaust(&mut exhausted, 0);

        let now = 10 * DAY;
        for record in [&fresh, &claimed_once, &exhausted] {
            assert!(!record.can_claim(true, now));
            assert_fails(record.check_claim(true, now), FaucetError::FaucetPaused);
        }
        // Pausing does not touch stored state; unpausing restores eligibility.
        assert!(fresh.can_claim(false, now));
        assert!(claimed_once.can_claim(false, now));
        assert!(!exhausted.can_claim(false, now));
    }

    #[test]
    fn paused_claim_leaves_record_untouched() {
        let mut record = ClaimRecord::default();
        record.try_claim(false, 0).unwrap();

        assert_fails(record.try_claim(true, DAY), FaucetError::FaucetPaused);
        assert_eq!(record.total_claimed, FAUCET_AMOUNT);
        assert_eq!(record.last_claim_at, 0);

        record.try_claim(false, DAY).unwrap();
        assert_eq!(record.last_claim_at, DAY);
    }
}
