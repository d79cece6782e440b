use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    MultiplyRatio(#[from] CheckedMultiplyRatioError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Presale is not open")]
    SaleClosed,

    #[error("Payment method is not accepted")]
    WrongPaymentMethod,

    #[error("Sale amount should be more than the minimum of {min}")]
    BelowMinSaleAmount { min: String },

    #[error("Sale amount should be less than the maximum of {max}")]
    AboveMaxSaleAmount { max: String },

    #[error("Insufficient base token supply. Available: {available}, requested: {requested}")]
    InsufficientSupply {
        available: String,
        requested: String,
    },

    #[error("Base token address is not set")]
    BaseTokenNotSet,

    #[error("Payment token address is not set")]
    PaymentTokenNotSet,

    #[error("No native funds sent")]
    NoFundsSent,

    #[error("Send exactly one coin denomination")]
    MultipleDenoms,

    #[error("Invalid denom: expected {expected}, got {denom}")]
    InvalidDenom { expected: String, denom: String },

    #[error("Native funds not accepted for this payment method")]
    UnexpectedFunds,

    #[error("Insufficient payment: required {required}, sent {sent}")]
    InsufficientPayment { required: String, sent: String },
}
