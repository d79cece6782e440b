use cosmwasm_std::{
    entry_point, to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env,
    MessageInfo, Response, StdError, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, PaymentMethod, QueryMsg, QuoteResponse,
    StatusResponse,
};
use crate::state::{Config, CONFIG, PENDING_ADMIN};

const CONTRACT_NAME: &str = "crates.io:token-presale";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const NATIVE_DENOM: &str = "uaxm";

/// Rates are fixed-point values scaled by 1e18.
pub const RATE_SCALE: u128 = 1_000_000_000_000_000_000;
/// The base token uses 18 decimals, USDT uses 6. USDT quotes are scaled
/// down by the difference.
pub const USDT_DECIMAL_GAP: u128 = 1_000_000_000_000;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let base_token = msg
        .base_token
        .map(|a| deps.api.addr_validate(&a))
        .transpose()?;
    let payment_token = msg
        .payment_token
        .map(|a| deps.api.addr_validate(&a))
        .transpose()?;

    let config = Config {
        admin: info.sender,
        base_token,
        payment_token,
        sale_open: false,
        accepted_method: None,
        usdt_rate: Uint128::zero(),
        native_rate: Uint128::zero(),
        min_sale_amount: Uint128::zero(),
        max_sale_amount: Uint128::zero(),
        total_sold: Uint128::zero(),
        total_usdt_raised: Uint128::zero(),
        total_native_raised: Uint128::zero(),
    };

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Purchase { amount, method } => {
            execute_purchase(deps, env, info, amount, method)
        }
        ExecuteMsg::SetBaseToken { address } => execute_set_base_token(deps, info, address),
        ExecuteMsg::SetPaymentToken { address } => execute_set_payment_token(deps, info, address),
        ExecuteMsg::SetSaleOpen { open } => execute_set_sale_open(deps, info, open),
        ExecuteMsg::SetAcceptedMethod { method } => execute_set_accepted_method(deps, info, method),
        ExecuteMsg::SetRate { method, rate } => execute_set_rate(deps, info, method, rate),
        ExecuteMsg::SetMinSaleAmount { amount } => execute_set_min_sale_amount(deps, info, amount),
        ExecuteMsg::SetMaxSaleAmount { amount } => execute_set_max_sale_amount(deps, info, amount),
        ExecuteMsg::WithdrawToken { token } => execute_withdraw_token(deps, env, info, token),
        ExecuteMsg::WithdrawNative {} => execute_withdraw_native(deps, env, info),
        ExecuteMsg::TransferAdmin { new_admin } => execute_transfer_admin(deps, info, new_admin),
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, info),
    }
}

/// Payment-asset cost of `token_amount` base tokens at the configured rate,
/// floor division. USDT quotes carry the 18→6 decimal rescale.
pub fn quote_payment_amount(
    config: &Config,
    method: &PaymentMethod,
    token_amount: Uint128,
) -> Result<Uint128, ContractError> {
    let (rate, scale) = match method {
        PaymentMethod::Usdt => (config.usdt_rate, RATE_SCALE * USDT_DECIMAL_GAP),
        PaymentMethod::Native => (config.native_rate, RATE_SCALE),
    };
    Ok(token_amount.checked_multiply_ratio(rate, scale)?)
}

/// User buys `amount` base tokens with `method`.
fn execute_purchase(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    method: PaymentMethod,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if !config.sale_open {
        return Err(ContractError::SaleClosed);
    }
    if config.accepted_method.as_ref() != Some(&method) {
        return Err(ContractError::WrongPaymentMethod);
    }
    if amount < config.min_sale_amount {
        return Err(ContractError::BelowMinSaleAmount {
            min: config.min_sale_amount.to_string(),
        });
    }
    if amount > config.max_sale_amount {
        return Err(ContractError::AboveMaxSaleAmount {
            max: config.max_sale_amount.to_string(),
        });
    }

    // Check the pool has enough base tokens — query the CW20 balance of this contract
    let base_token = config.base_token.clone().ok_or(ContractError::BaseTokenNotSet)?;
    let pool_balance: cw20::BalanceResponse = deps.querier.query_wasm_smart(
        base_token.to_string(),
        &cw20::Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    if pool_balance.balance < amount {
        return Err(ContractError::InsufficientSupply {
            available: pool_balance.balance.to_string(),
            requested: amount.to_string(),
        });
    }

    let payment = quote_payment_amount(&config, &method, amount)?;

    let mut msgs: Vec<CosmosMsg> = vec![];
    match method {
        PaymentMethod::Usdt => {
            if !info.funds.is_empty() {
                return Err(ContractError::UnexpectedFunds);
            }
            let payment_token = config
                .payment_token
                .clone()
                .ok_or(ContractError::PaymentTokenNotSet)?;
            // Pull the payment from the buyer's prior allowance
            msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: payment_token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: info.sender.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount: payment,
                })?,
                funds: vec![],
            }));
            config.total_usdt_raised += payment;
        }
        PaymentMethod::Native => {
            let sent = received_native(&info)?;
            if sent < payment {
                return Err(ContractError::InsufficientPayment {
                    required: payment.to_string(),
                    sent: sent.to_string(),
                });
            }
            // Excess above the quoted price stays in custody; the engine never refunds.
            config.total_native_raised += sent;
        }
    }

    // Send base tokens to the buyer
    msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: base_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    }));

    config.total_sold += amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "purchase")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("method", format!("{:?}", method).to_lowercase())
        .add_attribute("token_amount", amount.to_string())
        .add_attribute("payment_amount", payment.to_string()))
}

/// Attached native funds: exactly one coin of the native denom.
fn received_native(info: &MessageInfo) -> Result<Uint128, ContractError> {
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() > 1 {
        return Err(ContractError::MultipleDenoms);
    }
    let sent = &info.funds[0];
    if sent.denom != NATIVE_DENOM {
        return Err(ContractError::InvalidDenom {
            expected: NATIVE_DENOM.to_string(),
            denom: sent.denom.clone(),
        });
    }
    Ok(sent.amount)
}

fn ensure_admin(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn execute_set_base_token(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;
    let addr = deps.api.addr_validate(&address)?;
    config.base_token = Some(addr.clone());
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_base_token")
        .add_attribute("base_token", addr.to_string()))
}

fn execute_set_payment_token(
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

fn execute_set_sale_open(
    deps: DepsMut,
    info: MessageInfo,
    open: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;
    config.sale_open = open;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_sale_open")
        .add_attribute("sale_open", open.to_string()))
}

fn execute_set_accepted_method(
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

fn execute_set_rate(
    deps: DepsMut,
    info: MessageInfo,
    method: PaymentMethod,
    rate: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;
    match method {
        PaymentMethod::Usdt => config.usdt_rate = rate,
        PaymentMethod::Native => config.native_rate = rate,
    }
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_rate")
        .add_attribute("rate_method", format!("{:?}", method).to_lowercase())
        .add_attribute("rate", rate.to_string()))
}

fn execute_set_min_sale_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;
    config.min_sale_amount = amount;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_min_sale_amount")
        .add_attribute("min_sale_amount", amount.to_string()))
}

fn execute_set_max_sale_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;
    config.max_sale_amount = amount;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_max_sale_amount")
        .add_attribute("max_sale_amount", amount.to_string()))
}

/// Admin: withdraw the contract's entire balance of any CW20 token.
/// A zero balance succeeds without staging a transfer.
fn execute_withdraw_token(
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
fn execute_withdraw_native(
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

fn execute_transfer_admin(
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

fn execute_accept_admin(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
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

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::QuotePaymentAmount {
            token_amount,
            method,
        } => to_json_binary(&query_quote(deps, token_amount, method)?),
        QueryMsg::Status {} => to_json_binary(&query_status(deps, env)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        base_token: config.base_token,
        payment_token: config.payment_token,
        sale_open: config.sale_open,
        accepted_method: config.accepted_method,
        usdt_rate: config.usdt_rate,
        native_rate: config.native_rate,
        min_sale_amount: config.min_sale_amount,
        max_sale_amount: config.max_sale_amount,
        total_sold: config.total_sold,
        total_usdt_raised: config.total_usdt_raised,
        total_native_raised: config.total_native_raised,
    })
}

fn query_quote(
    deps: Deps,
    token_amount: Uint128,
    method: Option<PaymentMethod>,
) -> StdResult<QuoteResponse> {
    let config = CONFIG.load(deps.storage)?;
    let method = method
        .or_else(|| config.accepted_method.clone())
        .ok_or_else(|| StdError::generic_err("no payment method configured"))?;
    let payment_amount = quote_payment_amount(&config, &method, token_amount)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(QuoteResponse { payment_amount })
}

fn query_status(deps: Deps, env: Env) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;

    let base_token_available = match &config.base_token {
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
        base_token_available,
        payment_token_balance,
        native_balance: native_balance.amount,
        total_sold: config.total_sold,
        sale_open: config.sale_open,
    })
}
