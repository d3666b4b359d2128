use cosmwasm_std::{OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;
use vestflow_utils::payment_checker::CustomPaymentError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    CustomPayment(#[from] CustomPaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Stream amount must be greater than zero")]
    ZeroStreamAmount {},

    #[error("Start time must be in the future")]
    StreamInvalidStartTime {},

    #[error("Cliff amount exceeds stream amount")]
    CliffExceedsStreamAmount {},

    #[error("Vesting duration must be greater than zero")]
    ZeroVestingDuration {},

    #[error("Beneficiary already has a live stream")]
    StreamAlreadyExists {},

    #[error("Stream not found")]
    StreamNotFound {},

    #[error("Nothing to claim")]
    NothingToClaim {},

    #[error("Streams must be addressed by id under the instances policy")]
    StreamIdRequired {},
}
