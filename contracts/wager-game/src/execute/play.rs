use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128,
    WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::contract::NATIVE_DENOM;
use crate::entropy;
use crate::error::ContractError;
use crate::msg::PaymentMethod;
use crate::state::{Config, CONFIG};

/// Stake `game_amount` on a 1/N draw. A win returns the stake plus the
/// same amount on top; a loss leaves the stake in the house.
pub fn execute_play(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    lucky_number: u64,
    method: PaymentMethod,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if !config.gambling_open {
        return Err(ContractError::GamblingClosed);
    }
    if config.accepted_method.as_ref() != Some(&method) {
        return Err(ContractError::WrongPaymentMethod);
    }

    // The house must hold at least one payout unit before committing to a
    // draw. On the native path the queried balance already includes the
    // stake attached to this call.
    let house_balance = match &method {
        PaymentMethod::Usdt => {
            let token = payment_token(&config)?;
            let res: cw20::BalanceResponse = deps.querier.query_wasm_smart(
                token.to_string(),
                &cw20::Cw20QueryMsg::Balance {
                    address: env.contract.address.to_string(),
                },
            )?;
            res.balance
        }
        PaymentMethod::Native => {
            deps.querier
                .query_balance(env.contract.address.to_string(), NATIVE_DENOM)?
                .amount
        }
    };
    if house_balance < config.game_amount {
        return Err(ContractError::InsufficientContractBalance {
            need: config.game_amount.to_string(),
            have: house_balance.to_string(),
        });
    }

    // Stake receipt
    let mut msgs: Vec<CosmosMsg> = vec![];
    match &method {
        PaymentMethod::Usdt => {
            if !info.funds.is_empty() {
                return Err(ContractError::UnexpectedFunds);
            }
            let token = payment_token(&config)?;
            msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: info.sender.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount: config.game_amount,
                })?,
                funds: vec![],
            }));
        }
        PaymentMethod::Native => {
            let sent = received_native(&info)?;
            if sent != config.game_amount {
                return Err(ContractError::WrongStake {
                    expected: config.game_amount.to_string(),
                    sent: sent.to_string(),
                });
            }
        }
    }

    // Draw the outcome
    let draw = entropy::draw_entropy(&env, &info.sender, lucky_number);
    let win = entropy::decide_win(draw, config.random_max_number)?;

    // A win sends back the stake plus the matched amount
    let payout = if win {
        config.game_amount + config.game_amount
    } else {
        Uint128::zero()
    };
    if win {
        match &method {
            PaymentMethod::Usdt => {
                let token = payment_token(&config)?;
                msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: token.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                        recipient: info.sender.to_string(),
                        amount: payout,
                    })?,
                    funds: vec![],
                }));
            }
            PaymentMethod::Native => {
                msgs.push(CosmosMsg::Bank(BankMsg::Send {
                    to_address: info.sender.to_string(),
                    amount: vec![Coin {
                        denom: NATIVE_DENOM.to_string(),
                        amount: payout,
                    }],
                }));
            }
        }
    }

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "play")
        .add_attribute("player", info.sender.to_string())
        .add_attribute("method", format!("{:?}", method).to_lowercase())
        .add_attribute("stake", config.game_amount.to_string())
        .add_attribute("win", win.to_string())
        .add_attribute("payout", payout.to_string()))
}

fn payment_token(config: &Config) -> Result<Addr, ContractError> {
    config
        .payment_token
        .clone()
        .ok_or(ContractError::PaymentTokenNotSet)
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
