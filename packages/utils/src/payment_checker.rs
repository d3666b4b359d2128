use cosmwasm_std::Coin;
use cosmwasm_std::StdError;
use cw_utils::NativeBalance;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CustomPaymentError {
    #[error(transparent)]
    Std(#[from] StdError),
    #[error("Insufficient funds sent")]
    InsufficientFunds {
        expected: Vec<Coin>,
        actual: Vec<Coin>,
    },
}

/// Checks that the funds attached to a message match the expected deposit
/// exactly. Both sides are normalized first, so duplicate and zero coins do
/// not affect the comparison.
pub fn check_payment(
    sent_funds: &[Coin],
    expected_funds: &[Coin],
) -> Result<(), CustomPaymentError> {
    let mut expected_balance = NativeBalance::default();
    for coin in expected_funds {
        expected_balance += coin.clone();
    }
    expected_balance.normalize();

    let mut sent_balance = NativeBalance::default();
    for coin in sent_funds {
        sent_balance += coin.clone();
    }
    sent_balance.normalize();

    if expected_balance != sent_balance {
        return Err(CustomPaymentError::InsufficientFunds {
            expected: expected_funds.to_vec(),
            actual: sent_funds.to_vec(),
        });
    }

    Ok(())
}
