use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

use crate::msg::PaymentMethod;

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// CW20 token being sold. None until the admin sets it.
    pub base_token: Option<Addr>,
    /// CW20 payment token (USDT). None until the admin sets it.
    pub payment_token: Option<Addr>,
    /// Whether purchases are accepted
    pub sale_open: bool,
    /// Payment asset purchases must use. None = every purchase rejected.
    pub accepted_method: Option<PaymentMethod>,
    /// Price of one whole base token in USDT, scaled by 1e18.
    /// E.g. 2e17 = 0.2 USDT per token.
    pub usdt_rate: Uint128,
    /// Price of one whole base token in native coin, scaled by 1e18.
    pub native_rate: Uint128,
    /// Smallest base-token amount a single purchase may request
    pub min_sale_amount: Uint128,
    /// Largest base-token amount a single purchase may request
    pub max_sale_amount: Uint128,
    /// Total base tokens sold across all purchases. Never decreases.
    pub total_sold: Uint128,
    /// Total USDT received across all purchases
    pub total_usdt_raised: Uint128,
    /// Total native coin received across all purchases
    pub total_native_raised: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Pending admin for 2-step ownership transfer
pub const PENDING_ADMIN: Item<Addr> = Item::new("pending_admin");
