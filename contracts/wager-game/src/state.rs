use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

use crate::msg::PaymentMethod;

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// CW20 payment token (USDT). None until the admin sets it.
    pub payment_token: Option<Addr>,
    /// Whether plays are accepted
    pub gambling_open: bool,
    /// Payment asset plays must use. None = every play rejected.
    pub accepted_method: Option<PaymentMethod>,
    /// The fixed stake; a win pays the same amount on top of the
    /// returned stake.
    pub game_amount: Uint128,
    /// Exclusive upper bound of the outcome space. The win chance is
    /// exactly 1/bound; zero makes every play fail.
    pub random_max_number: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Pending admin for 2-step ownership transfer
pub const PENDING_ADMIN: Item<Addr> = Item::new("pending_admin");
