use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 payment token, USDT (settable later by the admin)
    pub payment_token: Option<String>,
}

#[cw_serde]
pub enum PaymentMethod {
    Usdt,
    Native,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Stake the configured game amount on a 1/N draw.
    /// Usdt: requires a prior allowance for the stake.
    /// Native: attach exactly the stake in uaxm.
    /// `lucky_number` is mixed into the entropy derivation.
    Play {
        lucky_number: u64,
        method: PaymentMethod,
    },

    /// Admin: set the CW20 payment token
    SetPaymentToken { address: String },

    /// Admin: open/close the game
    SetGamblingOpen { open: bool },

    /// Admin: set which payment asset plays must use
    SetAcceptedMethod { method: PaymentMethod },

    /// Admin: set the fixed stake/payout unit
    SetGameAmount { amount: Uint128 },

    /// Admin: set the outcome-space bound (win chance = 1/bound)
    SetRandomBound { bound: u64 },

    /// Admin: send the contract's entire balance of any CW20 to the admin
    WithdrawToken { token: String },

    /// Admin: send the contract's entire native balance to the admin
    WithdrawNative {},

    /// Admin: propose a new admin (step 1 of 2-step transfer)
    TransferAdmin { new_admin: String },

    /// Pending admin: accept ownership (step 2 of 2-step transfer)
    AcceptAdmin {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get game configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Get custodied balances
    #[returns(StatusResponse)]
    Status {},
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub payment_token: Option<Addr>,
    pub gambling_open: bool,
    pub accepted_method: Option<PaymentMethod>,
    pub game_amount: Uint128,
    pub random_max_number: u64,
}

#[cw_serde]
pub struct StatusResponse {
    /// USDT held by the contract
    pub payment_token_balance: Uint128,
    /// Native coin (uaxm) held by the contract
    pub native_balance: Uint128,
    pub gambling_open: bool,
}
