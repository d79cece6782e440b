use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Gambling is not open")]
    GamblingClosed,

    #[error("Payment method is not accepted")]
    WrongPaymentMethod,

    #[error("Contract balance should be more than the game amount: need {need}, have {have}")]
    InsufficientContractBalance { need: String, have: String },

    #[error("Random bound must be greater than zero")]
    InvalidRandomBound,

    #[error("Payment token address is not set")]
    PaymentTokenNotSet,

    #[error("Wrong stake: expected exactly {expected}, sent {sent}")]
    WrongStake { expected: String, sent: String },

    #[error("No native funds sent")]
    NoFundsSent,

    #[error("Send exactly one coin denomination")]
    MultipleDenoms,

    #[error("Invalid denom: expected {expected}, got {denom}")]
    InvalidDenom { expected: String, denom: String },

    #[error("Native funds not accepted for this payment method")]
    UnexpectedFunds,
}
