use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 token sold by the presale (settable later by the admin)
    pub base_token: Option<String>,
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
    /// Buy `amount` base tokens, paying with `method`.
    /// Usdt: requires a prior allowance for the quoted price.
    /// Native: attach at least the quoted price in uaxm (excess is kept).
    Purchase {
        amount: Uint128,
        method: PaymentMethod,
    },

    /// Admin: set the CW20 token being sold
    SetBaseToken { address: String },

    /// Admin: set the CW20 payment token
    SetPaymentToken { address: String },

    /// Admin: open/close the sale
    SetSaleOpen { open: bool },

    /// Admin: set which payment asset purchases must use
    SetAcceptedMethod { method: PaymentMethod },

    /// Admin: set the 1e18-scaled price for one payment method
    SetRate {
        method: PaymentMethod,
        rate: Uint128,
    },

    /// Admin: set the minimum base-token amount per purchase
    SetMinSaleAmount { amount: Uint128 },

    /// Admin: set the maximum base-token amount per purchase
    SetMaxSaleAmount { amount: Uint128 },

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
    /// Get presale configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Quote the payment-asset cost of `token_amount` base tokens.
    /// `method` defaults to the configured accepted method.
    #[returns(QuoteResponse)]
    QuotePaymentAmount {
        token_amount: Uint128,
        method: Option<PaymentMethod>,
    },

    /// Get custodied balances and sale totals
    #[returns(StatusResponse)]
    Status {},
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub base_token: Option<Addr>,
    pub payment_token: Option<Addr>,
    pub sale_open: bool,
    pub accepted_method: Option<PaymentMethod>,
    pub usdt_rate: Uint128,
    pub native_rate: Uint128,
    pub min_sale_amount: Uint128,
    pub max_sale_amount: Uint128,
    pub total_sold: Uint128,
    pub total_usdt_raised: Uint128,
    pub total_native_raised: Uint128,
}

#[cw_serde]
pub struct QuoteResponse {
    pub payment_amount: Uint128,
}

#[cw_serde]
pub struct StatusResponse {
    /// Base tokens still available for sale
    pub base_token_available: Uint128,
    /// USDT held by the contract
    pub payment_token_balance: Uint128,
    /// Native coin (uaxm) held by the contract
    pub native_balance: Uint128,
    pub total_sold: Uint128,
    pub sale_open: bool,
}
