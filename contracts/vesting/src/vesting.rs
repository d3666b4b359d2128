use cosmwasm_std::{Timestamp, Uint128};
use vestflow_types::vesting::{CliffSchedule, Stream};

/// Computes the unlocked amount of a schedule at `now`. Pure: the caller
/// supplies the clock, nothing is read from storage.
///
/// Before the unlock-begin instant nothing is unlocked. From that instant the
/// cliff baseline is released and the remainder unlocks linearly over
/// `duration_seconds`, rounding down on every intermediate sample. Once the
/// window has fully elapsed the result saturates at `total_amount`.
pub fn vested_amount(
    total_amount: Uint128,
    start_time: Timestamp,
    cliff: &CliffSchedule,
    duration_seconds: u64,
    now: Timestamp,
) -> Uint128 {
    let (baseline, unlock_begin) = match cliff {
        CliffSchedule::Delay { delay_seconds } => {
            (Uint128::zero(), start_time.plus_seconds(*delay_seconds))
        }
        CliffSchedule::Upfront { amount } => ((*amount).min(total_amount), start_time),
    };

    if now < unlock_begin {
        return Uint128::zero();
    }
    let unlock_end = unlock_begin.plus_seconds(duration_seconds);
    if now >= unlock_end {
        return total_amount;
    }

    // Strictly inside the linear window, so duration_seconds > 0 here.
    let elapsed = now.seconds() - unlock_begin.seconds();
    let linear = (total_amount - baseline).multiply_ratio(elapsed, duration_seconds);
    baseline + linear
}

/// Unlocked minus already claimed, never negative.
pub fn claimable_amount(stream: &Stream, now: Timestamp) -> Uint128 {
    vested_amount(
        stream.total_amount,
        stream.start_time,
        &stream.cliff,
        stream.duration_seconds,
        now,
    )
    .saturating_sub(stream.claimed_amount)
}
