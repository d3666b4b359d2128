use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};

#[cw_serde]
pub struct Stream {
    /// Recipient of the vested tokens. Immutable after creation; every claim
    /// pays out to this address regardless of who triggers it.
    pub beneficiary: Addr,
    /// Total units committed to the stream. Fixed at creation, always > 0.
    pub total_amount: Uint128,
    /// Units already paid out. Monotonically non-decreasing, bounded by
    /// `total_amount`.
    pub claimed_amount: Uint128,
    /// Instant after which unlocking begins. Strictly in the future at
    /// creation time.
    pub start_time: Timestamp,
    /// Cliff policy applied before/at the start of the linear window.
    pub cliff: CliffSchedule,
    /// Length of the linear-unlock window in seconds.
    pub duration_seconds: u64,
}

/// The two cliff encodings are distinct schedules, picked per stream. They are
/// never combined.
#[cw_serde]
pub enum CliffSchedule {
    /// Nothing unlocks until `start_time + delay_seconds`; the whole amount
    /// then unlocks linearly over `duration_seconds`.
    Delay { delay_seconds: u64 },
    /// `amount` unlocks the moment `start_time` is reached; the remainder
    /// unlocks linearly over `duration_seconds`.
    Upfront { amount: Uint128 },
}

impl Stream {
    pub fn new(
        beneficiary: Addr,
        total_amount: Uint128,
        start_time: Timestamp,
        cliff: CliffSchedule,
        duration_seconds: u64,
    ) -> Self {
        Stream {
            beneficiary,
            total_amount,
            claimed_amount: Uint128::zero(),
            start_time,
            cliff,
            duration_seconds,
        }
    }

    /// Instant at which linear unlocking begins.
    pub fn unlock_begin_time(&self) -> Timestamp {
        match self.cliff {
            CliffSchedule::Delay { delay_seconds } => self.start_time.plus_seconds(delay_seconds),
            CliffSchedule::Upfront { .. } => self.start_time,
        }
    }

    /// Instant at which the full amount is unlocked.
    pub fn unlock_end_time(&self) -> Timestamp {
        self.unlock_begin_time().plus_seconds(self.duration_seconds)
    }

    /// Amount unlocked the moment the linear window opens. Capped at
    /// `total_amount` so the schedule can never overshoot the commitment.
    pub fn cliff_baseline(&self) -> Uint128 {
        match self.cliff {
            CliffSchedule::Delay { .. } => Uint128::zero(),
            CliffSchedule::Upfront { amount } => amount.min(self.total_amount),
        }
    }

    pub fn is_fully_claimed(&self) -> bool {
        self.claimed_amount == self.total_amount
    }
}
