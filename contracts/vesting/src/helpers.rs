use crate::ContractError;
use cosmwasm_std::{Addr, BankMsg, Coin, CosmosMsg, Timestamp, Uint128};
use vestflow_types::vesting::{CliffSchedule, Config};

/// Admin-only operations: config changes and handover initiation.
pub fn ensure_admin(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

/// Stream creation is open to the admin and the dedicated creator role. The
/// check is kept behind this seam so creation authority can later move onto
/// the streams themselves.
pub fn ensure_stream_creation_authorized(
    config: &Config,
    sender: &Addr,
) -> Result<(), ContractError> {
    if *sender != config.admin && *sender != config.stream_creator {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

/// Validates the schedule parameters of a new stream against the current
/// block time.
pub fn validate_stream_schedule(
    now: Timestamp,
    total_amount: Uint128,
    start_time: Timestamp,
    cliff: &CliffSchedule,
    duration_seconds: u64,
) -> Result<(), ContractError> {
    if total_amount.is_zero() {
        return Err(ContractError::ZeroStreamAmount {});
    }
    // start_time == now is rejected: an upfront cliff would already be
    // claimable in the creation block.
    if start_time <= now {
        return Err(ContractError::StreamInvalidStartTime {});
    }
    match cliff {
        CliffSchedule::Upfront { amount } => {
            if *amount > total_amount {
                return Err(ContractError::CliffExceedsStreamAmount {});
            }
            // zero duration is only the degenerate all-at-cliff grant
            if duration_seconds == 0 && *amount != total_amount {
                return Err(ContractError::ZeroVestingDuration {});
            }
        }
        CliffSchedule::Delay { .. } => {
            if duration_seconds == 0 {
                return Err(ContractError::ZeroVestingDuration {});
            }
        }
    }
    Ok(())
}

pub fn build_bank_send_msg(denom: String, to_addr: String, amount: Uint128) -> CosmosMsg {
    CosmosMsg::Bank(BankMsg::Send {
        to_address: to_addr,
        amount: vec![Coin { denom, amount }],
    })
}
