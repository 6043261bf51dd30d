//! Admin Operations Integration Tests
//!
//! Admin transfer, timeout and allow-list configuration, and withdrawal of
//! the operational balance.

use cosmwasm_std::{coins, Addr, Binary, Uint128};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use common::AssetInfo;
use lock_bridge::msg::{
    AdminResponse, BalancesResponse, ChainEntry, ChainsResponse, ConfigResponse, ExecuteMsg,
    InstantiateMsg, PendingAdminResponse, QueryMsg,
};
use lock_bridge::{ContractError, LockStatus};

const DENOM: &str = "uluna";

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        lock_bridge::contract::execute,
        lock_bridge::contract::instantiate,
        lock_bridge::contract::query,
    ))
}

struct TestEnv {
    app: App,
    contract_addr: Addr,
    admin: Addr,
    new_admin: Addr,
    user: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let admin = Addr::unchecked("admin");
    let new_admin = Addr::unchecked("new_admin");
    let user = Addr::unchecked("user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &user, coins(10_000_000_000, DENOM))
            .unwrap();
    });

    let code_id = app.store_code(contract_bridge());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                asset: AssetInfo::native(DENOM),
                timeout_window: None,
                chains: Some(vec![ChainEntry {
                    chain_id: 137,
                    name: "Polygon Mainnet".to_string(),
                }]),
            },
            &[],
            "lock-bridge",
            None,
        )
        .unwrap();

    TestEnv {
        app,
        contract_addr,
        admin,
        new_admin,
        user,
    }
}

fn exec(env: &mut TestEnv, sender: &Addr, msg: ExecuteMsg) -> anyhow::Result<AppResponse> {
    env.app
        .execute_contract(sender.clone(), env.contract_addr.clone(), &msg, &[])
}

fn lock(env: &mut TestEnv, amount: u128, chain: u64) -> anyhow::Result<AppResponse> {
    env.app.execute_contract(
        env.user.clone(),
        env.contract_addr.clone(),
        &ExecuteMsg::Lock {
            amount: Uint128::new(amount),
            recipient: Binary::from(vec![0x42; 20]),
            target_chain_id: chain,
        },
        &coins(amount, DENOM),
    )
}

fn confirm_msg(lock_id: u64) -> ExecuteMsg {
    ExecuteMsg::OracleConfirm {
        lock_id,
        dest_tx_hash: Binary::from(vec![0x99; 32]),
    }
}

fn query<T: serde::de::DeserializeOwned>(env: &TestEnv, msg: &QueryMsg) -> T {
    env.app
        .wrap()
        .query_wasm_smart(&env.contract_addr, msg)
        .unwrap()
}

fn assert_contract_err(res: anyhow::Result<AppResponse>, expected: ContractError) {
    let err = res.unwrap_err();
    assert_eq!(err.root_cause().to_string(), expected.to_string());
}

// ============================================================================
// Instantiate
// ============================================================================

#[test]
fn test_instantiate_defaults() {
    let env = setup();

    let config: ConfigResponse = query(&env, &QueryMsg::Config {});
    assert_eq!(config.admin, env.admin);
    assert_eq!(config.asset, AssetInfo::native(DENOM));
    assert_eq!(config.timeout_window, 14_400);

    let chains: ChainsResponse = query(&env, &QueryMsg::Chains {});
    assert_eq!(chains.chains.len(), 1);
}

#[test]
fn test_instantiate_rejects_zero_timeout() {
    let mut app = App::default();
    let code_id = app.store_code(contract_bridge());

    let res = app.instantiate_contract(
        code_id,
        Addr::unchecked("admin"),
        &InstantiateMsg {
            admin: "admin".to_string(),
            asset: AssetInfo::native(DENOM),
            timeout_window: Some(0),
            chains: None,
        },
        &[],
        "lock-bridge",
        None,
    );

    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        ContractError::InvalidTimeoutWindow.to_string()
    );
}

#[test]
fn test_instantiate_rejects_empty_denom() {
    let mut app = App::default();
    let code_id = app.store_code(contract_bridge());

    let res = app.instantiate_contract(
        code_id,
        Addr::unchecked("admin"),
        &InstantiateMsg {
            admin: "admin".to_string(),
            asset: AssetInfo::native(""),
            timeout_window: None,
            chains: None,
        },
        &[],
        "lock-bridge",
        None,
    );

    assert_eq!(
        res.unwrap_err().root_cause().to_string(),
        ContractError::UnsupportedAsset {
            asset: "empty denom".to_string(),
        }
        .to_string()
    );
}

// ============================================================================
// Admin Transfer
// ============================================================================

#[test]
fn test_admin_transfer_moves_oracle_role() {
    let mut env = setup();
    let (admin, new_admin) = (env.admin.clone(), env.new_admin.clone());

    exec(
        &mut env,
        &admin,
        ExecuteMsg::ProposeAdmin {
            new_admin: new_admin.to_string(),
        },
    )
    .unwrap();

    let pending: Option<PendingAdminResponse> = query(&env, &QueryMsg::PendingAdmin {});
    let pending = pending.unwrap();
    assert_eq!(pending.new_address, new_admin);
    assert_eq!(pending.proposed_at, env.app.block_info().height);

    // Proposal alone changes nothing
    let current: AdminResponse = query(&env, &QueryMsg::Admin {});
    assert_eq!(current.admin, admin);

    exec(&mut env, &new_admin, ExecuteMsg::AcceptAdmin {}).unwrap();

    let current: AdminResponse = query(&env, &QueryMsg::Admin {});
    assert_eq!(current.admin, new_admin);
    let pending: Option<PendingAdminResponse> = query(&env, &QueryMsg::PendingAdmin {});
    assert!(pending.is_none());

    // Only the new admin can confirm now
    lock(&mut env, 1_000, 137).unwrap();
    let res = exec(&mut env, &admin, confirm_msg(1));
    assert_contract_err(res, ContractError::only_oracle());
    exec(&mut env, &new_admin, confirm_msg(1)).unwrap();
}

#[test]
fn test_admin_transfer_authorization() {
    let mut env = setup();
    let (admin, new_admin, user) = (env.admin.clone(), env.new_admin.clone(), env.user.clone());

    let res = exec(
        &mut env,
        &user,
        ExecuteMsg::ProposeAdmin {
            new_admin: user.to_string(),
        },
    );
    assert_contract_err(res, ContractError::only_admin());

    let res = exec(&mut env, &new_admin, ExecuteMsg::AcceptAdmin {});
    assert_contract_err(res, ContractError::NoPendingAdmin);

    exec(
        &mut env,
        &admin,
        ExecuteMsg::ProposeAdmin {
            new_admin: new_admin.to_string(),
        },
    )
    .unwrap();

    let res = exec(&mut env, &user, ExecuteMsg::AcceptAdmin {});
    assert_contract_err(res, ContractError::UnauthorizedPendingAdmin);

    let res = exec(&mut env, &new_admin, ExecuteMsg::CancelAdminProposal {});
    assert_contract_err(res, ContractError::only_admin());
}

#[test]
fn test_cancel_admin_proposal() {
    let mut env = setup();
    let (admin, new_admin) = (env.admin.clone(), env.new_admin.clone());

    let res = exec(&mut env, &admin, ExecuteMsg::CancelAdminProposal {});
    assert_contract_err(res, ContractError::NoPendingAdmin);

    exec(
        &mut env,
        &admin,
        ExecuteMsg::ProposeAdmin {
            new_admin: new_admin.to_string(),
        },
    )
    .unwrap();
    exec(&mut env, &admin, ExecuteMsg::CancelAdminProposal {}).unwrap();

    let res = exec(&mut env, &new_admin, ExecuteMsg::AcceptAdmin {});
    assert_contract_err(res, ContractError::NoPendingAdmin);

    let current: AdminResponse = query(&env, &QueryMsg::Admin {});
    assert_eq!(current.admin, admin);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_set_timeout_window() {
    let mut env = setup();
    let (admin, user) = (env.admin.clone(), env.user.clone());

    let res = exec(&mut env, &user, ExecuteMsg::SetTimeoutWindow { timeout_window: 5 });
    assert_contract_err(res, ContractError::only_admin());

    let res = exec(&mut env, &admin, ExecuteMsg::SetTimeoutWindow { timeout_window: 0 });
    assert_contract_err(res, ContractError::InvalidTimeoutWindow);

    exec(&mut env, &admin, ExecuteMsg::SetTimeoutWindow { timeout_window: 5 }).unwrap();
    let config: ConfigResponse = query(&env, &QueryMsg::Config {});
    assert_eq!(config.timeout_window, 5);
}

#[test]
fn test_chain_allow_list_management() {
    let mut env = setup();
    let (admin, user) = (env.admin.clone(), env.user.clone());

    let res = lock(&mut env, 1_000, 80001);
    assert_contract_err(res, ContractError::UnsupportedChain { chain_id: 80001 });

    let add = ExecuteMsg::AddChain {
        chain_id: 80001,
        name: "Polygon Mumbai".to_string(),
    };
    let res = exec(&mut env, &user, add.clone());
    assert_contract_err(res, ContractError::only_admin());

    exec(&mut env, &admin, add.clone()).unwrap();
    let res = exec(&mut env, &admin, add);
    assert_contract_err(res, ContractError::ChainAlreadySupported { chain_id: 80001 });

    lock(&mut env, 1_000, 80001).unwrap();

    exec(&mut env, &admin, ExecuteMsg::RemoveChain { chain_id: 80001 }).unwrap();
    let res = exec(&mut env, &admin, ExecuteMsg::RemoveChain { chain_id: 80001 });
    assert_contract_err(res, ContractError::UnsupportedChain { chain_id: 80001 });

    let res = lock(&mut env, 1_000, 80001);
    assert_contract_err(res, ContractError::UnsupportedChain { chain_id: 80001 });

    // Existing lock to the removed chain can still be confirmed
    exec(&mut env, &admin, confirm_msg(1)).unwrap();
    let record: lock_bridge::msg::LockResponse =
        query(&env, &QueryMsg::Lock { lock_id: 1 });
    assert_eq!(record.lock.unwrap().status, LockStatus::Confirmed);

    let chains: ChainsResponse = query(&env, &QueryMsg::Chains {});
    let ids: Vec<u64> = chains.chains.iter().map(|c| c.chain_id).collect();
    assert_eq!(ids, vec![137]);
}

// ============================================================================
// Operational Balance
// ============================================================================

#[test]
fn test_withdraw_operational_only_confirmed_funds() {
    let mut env = setup();
    let (admin, user) = (env.admin.clone(), env.user.clone());
    let treasury = Addr::unchecked("treasury");

    lock(&mut env, 3_000, 137).unwrap();
    lock(&mut env, 5_000, 137).unwrap();
    exec(&mut env, &admin, confirm_msg(1)).unwrap();

    let withdraw = |amount: u128| ExecuteMsg::WithdrawOperational {
        amount: Uint128::new(amount),
        recipient: "treasury".to_string(),
    };

    let res = exec(&mut env, &user, withdraw(1_000));
    assert_contract_err(res, ContractError::only_admin());

    // Custody of lock 2 cannot be touched
    let res = exec(&mut env, &admin, withdraw(3_001));
    assert_contract_err(
        res,
        ContractError::InsufficientOperationalBalance {
            available: Uint128::new(3_000),
            requested: Uint128::new(3_001),
        },
    );

    exec(&mut env, &admin, withdraw(3_000)).unwrap();

    let treasury_balance = env.app.wrap().query_balance(&treasury, DENOM).unwrap();
    assert_eq!(treasury_balance.amount, Uint128::new(3_000));

    let balances: BalancesResponse = query(&env, &QueryMsg::Balances {});
    assert_eq!(balances.custody, Uint128::new(5_000));
    assert_eq!(balances.operational, Uint128::zero());

    let contract_balance = env
        .app
        .wrap()
        .query_balance(&env.contract_addr, DENOM)
        .unwrap();
    assert_eq!(contract_balance.amount, Uint128::new(5_000));
}
