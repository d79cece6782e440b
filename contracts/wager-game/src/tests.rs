use cosmwasm_std::testing::{mock_info, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{coins, from_json, Addr, BankMsg, CosmosMsg, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::contract::execute;
use crate::entropy::{decide_win, draw_entropy};
use crate::error::ContractError;
use crate::msg::{ExecuteMsg, PaymentMethod};
use crate::state::CONFIG;
use crate::testing::helpers::*;

// ============================================================
// Instantiation
// ============================================================

#[test]
fn test_instantiate_defaults() {
    let (deps, env) = setup_contract();
    let config = query_config(&deps, &env);

    assert_eq!(config.admin, ADMIN);
    assert_eq!(config.payment_token, Some(Addr::unchecked(PAYMENT_TOKEN)));
    assert!(!config.gambling_open);
    assert_eq!(config.accepted_method, None);
    assert_eq!(config.game_amount, Uint128::zero());
    assert_eq!(config.random_max_number, 0);
}

// ============================================================
// Admin surface
// ============================================================

#[test]
fn test_admin_setters() {
    let (mut deps, env) = setup_contract();

    open_game(&mut deps, &env, PaymentMethod::Usdt, 1_000_000_000, 10_000);

    let config = query_config(&deps, &env);
    assert!(config.gambling_open);
    assert_eq!(config.accepted_method, Some(PaymentMethod::Usdt));
    assert_eq!(config.game_amount, Uint128::new(1_000_000_000));
    assert_eq!(config.random_max_number, 10_000);
}

#[test]
fn test_setters_unauthorized() {
    let (mut deps, env) = setup_contract();

    for msg in [
        ExecuteMsg::SetGamblingOpen { open: true },
        ExecuteMsg::SetAcceptedMethod {
            method: PaymentMethod::Usdt,
        },
        ExecuteMsg::SetGameAmount {
            amount: Uint128::new(1),
        },
        ExecuteMsg::SetRandomBound { bound: 1 },
        ExecuteMsg::SetPaymentToken {
            address: "other".to_string(),
        },
        ExecuteMsg::WithdrawToken {
            token: PAYMENT_TOKEN.to_string(),
        },
        ExecuteMsg::WithdrawNative {},
    ] {
        let info = mock_info(RANDOM_USER, &[]);
        let err = execute(deps.as_mut(), env.clone(), info, msg).unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized));
    }
}

// ============================================================
// Play gate
// ============================================================

#[test]
fn test_play_fails_when_closed() {
    let (mut deps, env) = setup_contract();

    let err = play(&mut deps, &env, PLAYER, 30, PaymentMethod::Usdt, &[]).unwrap_err();
    assert!(matches!(err, ContractError::GamblingClosed));
}

#[test]
fn test_play_fails_wrong_method() {
    let (mut deps, env) = setup_contract();
    open_game(&mut deps, &env, PaymentMethod::Usdt, 1_000_000_000, 10_000);

    let err = play(&mut deps, &env, PLAYER, 30, PaymentMethod::Native, &[]).unwrap_err();
    assert!(matches!(err, ContractError::WrongPaymentMethod));
}

#[test]
fn test_play_fails_before_method_is_set() {
    let (mut deps, env) = setup_contract();
    let info = mock_info(ADMIN, &[]);
    execute(
        deps.as_mut(),
        env.clone(),
        info,
        ExecuteMsg::SetGamblingOpen { open: true },
    )
    .unwrap();

    let err = play(&mut deps, &env, PLAYER, 30, PaymentMethod::Usdt, &[]).unwrap_err();
    assert!(matches!(err, ContractError::WrongPaymentMethod));
}

#[test]
fn test_play_fails_when_house_cannot_cover() {
    let (mut deps, env) = setup_contract();
    open_game(&mut deps, &env, PaymentMethod::Usdt, 1_000_000_000, 10_000);
    set_usdt_balance(&mut deps, 0);

    let err = play(&mut deps, &env, PLAYER, 30, PaymentMethod::Usdt, &[]).unwrap_err();
    assert!(matches!(
        err,
        ContractError::InsufficientContractBalance { .. }
    ));
}

#[test]
fn test_play_fails_on_zero_random_bound() {
    let (mut deps, env) = setup_contract();
    open_game(&mut deps, &env, PaymentMethod::Usdt, 1_000_000_000, 0);
    set_usdt_balance(&mut deps, 100_000_000_000);

    let err = play(&mut deps, &env, PLAYER, 30, PaymentMethod::Usdt, &[]).unwrap_err();
    assert!(matches!(err, ContractError::InvalidRandomBound));
}

// ============================================================
// Play with USDT
// ============================================================

/// Find lucky numbers that deterministically win and lose for the given
/// env/player/bound. The derivation is a fixed hash, so the search result
/// never changes between runs.
fn find_seeds(env: &cosmwasm_std::Env, player: &str, bound: u64) -> (u64, u64) {
    let addr = Addr::unchecked(player);
    let winning = (0..1_000u64)
        .find(|n| decide_win(draw_entropy(env, &addr, *n), bound).unwrap())
        .expect("no winning seed in range");
    let losing = (0..1_000u64)
        .find(|n| !decide_win(draw_entropy(env, &addr, *n), bound).unwrap())
        .expect("no losing seed in range");
    (winning, losing)
}

#[test]
fn test_play_usdt_win_pays_double_the_stake() {
    let (mut deps, env) = setup_contract();
    open_game(&mut deps, &env, PaymentMethod::Usdt, 1_000_000_000, 2);
    set_usdt_balance(&mut deps, 100_000_000_000);

    let (winning, _) = find_seeds(&env, PLAYER, 2);
    let res = play(&mut deps, &env, PLAYER, winning, PaymentMethod::Usdt, &[]).unwrap();

    assert_eq!(res_attr(&res, "win"), "true");
    assert_eq!(res_attr(&res, "stake"), "1000000000");
    assert_eq!(res_attr(&res, "payout"), "2000000000");

    // Leg 1: pull the stake from the player's allowance
    assert_eq!(res.messages.len(), 2);
    match &res.messages[0].msg {
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr, msg, ..
        }) => {
            assert_eq!(contract_addr, PAYMENT_TOKEN);
            let cw20_msg: Cw20ExecuteMsg = from_json(msg).unwrap();
            match cw20_msg {
                Cw20ExecuteMsg::TransferFrom {
                    owner,
                    recipient,
                    amount,
                } => {
                    assert_eq!(owner, PLAYER);
                    assert_eq!(recipient, MOCK_CONTRACT_ADDR);
                    assert_eq!(amount, Uint128::new(1_000_000_000));
                }
                _ => panic!("expected TransferFrom, got {:?}", cw20_msg),
            }
        }
        other => panic!("expected wasm execute, got {:?}", other),
    }

    // Leg 2: send stake + winnings back
    match &res.messages[1].msg {
        CosmosMsg::Wasm(WasmMsg::Execute { msg, .. }) => {
            let cw20_msg: Cw20ExecuteMsg = from_json(msg).unwrap();
            match cw20_msg {
                Cw20ExecuteMsg::Transfer { recipient, amount } => {
                    assert_eq!(recipient, PLAYER);
                    assert_eq!(amount, Uint128::new(2_000_000_000));
                }
                _ => panic!("expected Transfer, got {:?}", cw20_msg),
            }
        }
        other => panic!("expected wasm execute, got {:?}", other),
    }
}

#[test]
fn test_play_usdt_loss_keeps_the_stake() {
    let (mut deps, env) = setup_contract();
    open_game(&mut deps, &env, PaymentMethod::Usdt, 1_000_000_000, 2);
    set_usdt_balance(&mut deps, 100_000_000_000);

    let (_, losing) = find_seeds(&env, PLAYER, 2);
    let res = play(&mut deps, &env, PLAYER, losing, PaymentMethod::Usdt, &[]).unwrap();

    assert_eq!(res_attr(&res, "win"), "false");
    assert_eq!(res_attr(&res, "payout"), "0");

    // Only the stake pull is staged; nothing comes back
    assert_eq!(res.messages.len(), 1);
}

#[test]
fn test_play_usdt_rejects_attached_funds() {
    let (mut deps, env) = setup_contract();
    open_game(&mut deps, &env, PaymentMethod::Usdt, 1_000_000_000, 2);
    set_usdt_balance(&mut deps, 100_000_000_000);

    let err = play(
        &mut deps,
        &env,
        PLAYER,
        30,
        PaymentMethod::Usdt,
        &coins(100, "uaxm"),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::UnexpectedFunds));
}

#[test]
fn test_bound_of_one_always_wins() {
    let (mut deps, env) = setup_contract();
    open_game(&mut deps, &env, PaymentMethod::Usdt, 1_000_000_000, 1);
    set_usdt_balance(&mut deps, 100_000_000_000);

    for lucky_number in [0u64, 7, 619, 31_337] {
        let res = play(
            &mut deps,
            &env,
            PLAYER,
            lucky_number,
            PaymentMethod::Usdt,
            &[],
        )
        .unwrap();
        assert_eq!(res_attr(&res, "win"), "true");
    }
}

// ============================================================
// Play with native coin
// ============================================================

#[test]
fn test_play_native_requires_exact_stake() {
    let (mut deps, env) = setup_contract();
    open_game(
        &mut deps,
        &env,
        PaymentMethod::Native,
        300_000_000_000_000_000,
        2,
    );
    set_native_balance(&mut deps, 1_000_000_000_000_000_000);

    // Under the stake
    let err = play(
        &mut deps,
        &env,
        PLAYER,
        0,
        PaymentMethod::Native,
        &coins(200_000_000_000_000_000, "uaxm"),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::WrongStake { .. }));

    // Over the stake
    let err = play(
        &mut deps,
        &env,
        PLAYER,
        0,
        PaymentMethod::Native,
        &coins(400_000_000_000_000_000, "uaxm"),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::WrongStake { .. }));

    // No funds at all
    let err = play(&mut deps, &env, PLAYER, 0, PaymentMethod::Native, &[]).unwrap_err();
    assert!(matches!(err, ContractError::NoFundsSent));

    // Wrong denom
    let err = play(
        &mut deps,
        &env,
        PLAYER,
        0,
        PaymentMethod::Native,
        &coins(300_000_000_000_000_000, "uatom"),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::InvalidDenom { .. }));
}

#[test]
fn test_play_native_fails_on_empty_house() {
    let (mut deps, env) = setup_contract();
    open_game(
        &mut deps,
        &env,
        PaymentMethod::Native,
        300_000_000_000_000_000,
        2,
    );

    // No balance on the contract and nothing attached
    let err = play(&mut deps, &env, PLAYER, 30, PaymentMethod::Native, &[]).unwrap_err();
    assert!(matches!(
        err,
        ContractError::InsufficientContractBalance { .. }
    ));
}

#[test]
fn test_play_native_win_sends_bank_payout() {
    let (mut deps, env) = setup_contract();
    open_game(
        &mut deps,
        &env,
        PaymentMethod::Native,
        300_000_000_000_000_000,
        2,
    );
    set_native_balance(&mut deps, 1_000_000_000_000_000_000);

    let (winning, losing) = find_seeds(&env, PLAYER, 2);

    let res = play(
        &mut deps,
        &env,
        PLAYER,
        winning,
        PaymentMethod::Native,
        &coins(300_000_000_000_000_000, "uaxm"),
    )
    .unwrap();
    assert_eq!(res_attr(&res, "win"), "true");
    assert_eq!(res.messages.len(), 1);
    match &res.messages[0].msg {
        CosmosMsg::Bank(BankMsg::Send { to_address, amount }) => {
            assert_eq!(to_address, PLAYER);
            assert_eq!(amount, &coins(600_000_000_000_000_000, "uaxm"));
        }
        other => panic!("expected bank send, got {:?}", other),
    }

    // The stake arrived with the call, so a loss stages nothing
    let res = play(
        &mut deps,
        &env,
        PLAYER,
        losing,
        PaymentMethod::Native,
        &coins(300_000_000_000_000_000, "uaxm"),
    )
    .unwrap();
    assert_eq!(res_attr(&res, "win"), "false");
    assert!(res.messages.is_empty());
}

// ============================================================
// Withdrawals
// ============================================================

#[test]
fn test_withdraw_token_drains_full_balance() {
    let (mut deps, env) = setup_contract();
    set_usdt_balance(&mut deps, 5_000_000_000);

    let info = mock_info(ADMIN, &[]);
    let res = execute(
        deps.as_mut(),
        env,
        info,
        ExecuteMsg::WithdrawToken {
            token: PAYMENT_TOKEN.to_string(),
        },
    )
    .unwrap();

    assert_eq!(res.messages.len(), 1);
    match &res.messages[0].msg {
        CosmosMsg::Wasm(WasmMsg::Execute { msg, .. }) => {
            let cw20_msg: Cw20ExecuteMsg = from_json(msg).unwrap();
            match cw20_msg {
                Cw20ExecuteMsg::Transfer { recipient, amount } => {
                    assert_eq!(recipient, ADMIN);
                    assert_eq!(amount, Uint128::new(5_000_000_000));
                }
                _ => panic!("expected Transfer, got {:?}", cw20_msg),
            }
        }
        other => panic!("expected wasm execute, got {:?}", other),
    }
}

#[test]
fn test_withdraw_token_zero_balance_is_noop() {
    let (mut deps, env) = setup_contract();
    set_usdt_balance(&mut deps, 0);

    let info = mock_info(ADMIN, &[]);
    let res = execute(
        deps.as_mut(),
        env,
        info,
        ExecuteMsg::WithdrawToken {
            token: PAYMENT_TOKEN.to_string(),
        },
    )
    .unwrap();
    assert!(res.messages.is_empty());
    assert_eq!(res_attr(&res, "amount"), "0");
}

#[test]
fn test_withdraw_native_drains_full_balance() {
    let (mut deps, env) = setup_contract();
    set_native_balance(&mut deps, 900_000_000_000_000_000);

    let info = mock_info(ADMIN, &[]);
    let res = execute(deps.as_mut(), env, info, ExecuteMsg::WithdrawNative {}).unwrap();

    assert_eq!(res.messages.len(), 1);
    match &res.messages[0].msg {
        CosmosMsg::Bank(BankMsg::Send { to_address, amount }) => {
            assert_eq!(to_address, ADMIN);
            assert_eq!(amount, &coins(900_000_000_000_000_000, "uaxm"));
        }
        other => panic!("expected bank send, got {:?}", other),
    }
}

#[test]
fn test_withdraw_native_zero_balance_is_noop() {
    let (mut deps, env) = setup_contract();

    let info = mock_info(ADMIN, &[]);
    let res = execute(deps.as_mut(), env, info, ExecuteMsg::WithdrawNative {}).unwrap();
    assert!(res.messages.is_empty());
    assert_eq!(res_attr(&res, "amount"), "0");
}

// ============================================================
// Admin transfer
// ============================================================

#[test]
fn test_two_step_admin_transfer() {
    let (mut deps, env) = setup_contract();

    let info = mock_info(ADMIN, &[]);
    execute(
        deps.as_mut(),
        env.clone(),
        info,
        ExecuteMsg::TransferAdmin {
            new_admin: "new_admin".to_string(),
        },
    )
    .unwrap();

    // Old admin keeps control until acceptance
    let config = CONFIG.load(deps.as_ref().storage).unwrap();
    assert_eq!(config.admin, Addr::unchecked(ADMIN));

    let info = mock_info(RANDOM_USER, &[]);
    let err = execute(deps.as_mut(), env.clone(), info, ExecuteMsg::AcceptAdmin {}).unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized));

    let info = mock_info("new_admin", &[]);
    execute(deps.as_mut(), env, info, ExecuteMsg::AcceptAdmin {}).unwrap();

    let config = CONFIG.load(deps.as_ref().storage).unwrap();
    assert_eq!(config.admin, Addr::unchecked("new_admin"));
}
