use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, CONFIG};

const CONTRACT_NAME: &str = "crates.io:wager-game";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NATIVE_DENOM: &str = "uaxm";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let payment_token = msg
        .payment_token
        .map(|a| deps.api.addr_validate(&a))
        .transpose()?;

    let config = Config {
        admin: info.sender,
        payment_token,
        gambling_open: false,
        accepted_method: None,
        game_amount: Uint128::zero(),
        random_max_number: 0,
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
        ExecuteMsg::Play {
            lucky_number,
            method,
        } => crate::execute::play::execute_play(deps, env, info, lucky_number, method),
        ExecuteMsg::SetPaymentToken { address } => {
            crate::execute::admin::execute_set_payment_token(deps, info, address)
        }
        ExecuteMsg::SetGamblingOpen { open } => {
            crate::execute::admin::execute_set_gambling_open(deps, info, open)
        }
        ExecuteMsg::SetAcceptedMethod { method } => {
            crate::execute::admin::execute_set_accepted_method(deps, info, method)
        }
        ExecuteMsg::SetGameAmount { amount } => {
            crate::execute::admin::execute_set_game_amount(deps, info, amount)
        }
        ExecuteMsg::SetRandomBound { bound } => {
            crate::execute::admin::execute_set_random_bound(deps, info, bound)
        }
        ExecuteMsg::WithdrawToken { token } => {
            crate::execute::admin::execute_withdraw_token(deps, env, info, token)
        }
        ExecuteMsg::WithdrawNative {} => {
            crate::execute::admin::execute_withdraw_native(deps, env, info)
        }
        ExecuteMsg::TransferAdmin { new_admin } => {
            crate::execute::admin::execute_transfer_admin(deps, info, new_admin)
        }
        ExecuteMsg::AcceptAdmin {} => crate::execute::admin::execute_accept_admin(deps, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&crate::query::query_config(deps)?),
        QueryMsg::Status {} => to_json_binary(&crate::query::query_status(deps, env)?),
    }
}
