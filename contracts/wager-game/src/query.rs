use cosmwasm_std::{Deps, Env, StdResult, Uint128};

use crate::contract::NATIVE_DENOM;
use crate::msg::{ConfigResponse, StatusResponse};
use crate::state::CONFIG;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        payment_token: config.payment_token,
        gambling_open: config.gambling_open,
        accepted_method: config.accepted_method,
        game_amount: config.game_amount,
        random_max_number: config.random_max_number,
    })
}

pub fn query_status(deps: Deps, env: Env) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;

    let payment_token_balance = match &config.payment_token {
        Some(addr) => {
            let res: cw20::BalanceResponse = deps.querier.query_wasm_smart(
                addr.to_string(),
                &cw20::Cw20QueryMsg::Balance {
                    address: env.contract.address.to_string(),
                },
            )?;
            res.balance
        }
        None => Uint128::zero(),
    };
    let native_balance = deps
        .querier
        .query_balance(env.contract.address.to_string(), NATIVE_DENOM)?;

    Ok(StatusResponse {
        payment_token_balance,
        native_balance: native_balance.amount,
        gambling_open: config.gambling_open,
    })
}
