use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128,
    WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::contract::NATIVE_DENOM;
use crate::error::ContractError;
use crate::msg::PaymentMethod;
use crate::state::{Config, CONFIG, PENDING_ADMIN};

fn ensure_admin(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn execute_set_payment_token(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;
    let addr = deps.api.addr_validate(&address)?;
    config.payment_token = Some(addr.clone());
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_payment_token")
        .add_attribute("payment_token", addr.to_string()))
}

pub fn execute_set_gambling_open(
    deps: DepsMut,
    info: MessageInfo,
    open: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;
    config.gambling_open = open;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_gambling_open")
        .add_attribute("gambling_open", open.to_string()))
}

pub fn execute_set_accepted_method(
    deps: DepsMut,
    info: MessageInfo,
    method: PaymentMethod,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;
    config.accepted_method = Some(method.clone());
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_accepted_method")
        .add_attribute("accepted_method", format!("{:?}", method).to_lowercase()))
}

pub fn execute_set_game_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;
    config.game_amount = amount;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_game_amount")
        .add_attribute("game_amount", amount.to_string()))
}

/// Plain assignment: a zero bound is storable, it just makes every play
/// fail with a configuration error until corrected.
pub fn execute_set_random_bound(
    deps: DepsMut,
    info: MessageInfo,
    bound: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;
    config.random_max_number = bound;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_random_bound")
        .add_attribute("random_max_number", bound.to_string()))
}

/// Admin: withdraw the contract's entire balance of any CW20 token.
/// A zero balance succeeds without staging a transfer.
pub fn execute_withdraw_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    let token_addr = deps.api.addr_validate(&token)?;
    let balance: cw20::BalanceResponse = deps.querier.query_wasm_smart(
        token_addr.to_string(),
        &cw20::Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;

    let mut res = Response::new()
        .add_attribute("action", "withdraw_token")
        .add_attribute("token", token_addr.to_string())
        .add_attribute("amount", balance.balance.to_string());

    if !balance.balance.is_zero() {
        res = res.add_message(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token_addr.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: config.admin.to_string(),
                amount: balance.balance,
            })?,
            funds: vec![],
        }));
    }

    Ok(res)
}

/// Admin: withdraw the contract's entire native balance.
pub fn execute_withdraw_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    let balance = deps
        .querier
        .query_balance(env.contract.address.to_string(), NATIVE_DENOM)?;

    let mut res = Response::new()
        .add_attribute("action", "withdraw_native")
        .add_attribute("amount", balance.amount.to_string());

    if !balance.amount.is_zero() {
        res = res.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: config.admin.to_string(),
            amount: vec![Coin {
                denom: NATIVE_DENOM.to_string(),
                amount: balance.amount,
            }],
        }));
    }

    Ok(res)
}

pub fn execute_transfer_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;
    let new_admin = deps.api.addr_validate(&new_admin)?;
    PENDING_ADMIN.save(deps.storage, &new_admin)?;
    Ok(Response::new()
        .add_attribute("action", "transfer_admin")
        .add_attribute("pending_admin", new_admin.to_string()))
}

pub fn execute_accept_admin(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let pending = PENDING_ADMIN
        .may_load(deps.storage)?
        .ok_or(ContractError::Unauthorized)?;
    if info.sender != pending {
        return Err(ContractError::Unauthorized);
    }
    let mut config = CONFIG.load(deps.storage)?;
    config.admin = pending.clone();
    CONFIG.save(deps.storage, &config)?;
    PENDING_ADMIN.remove(deps.storage);
    Ok(Response::new()
        .add_attribute("action", "accept_admin")
        .add_attribute("admin", pending.to_string()))
}
