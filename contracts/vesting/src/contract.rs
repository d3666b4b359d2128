use crate::helpers::{
    build_bank_send_msg, ensure_admin, ensure_stream_creation_authorized, validate_stream_schedule,
};
use crate::registry;
use crate::state::{CONFIG, LAST_STREAM_ID, TOTAL_COMMITTED};
use crate::vesting::{claimable_amount, vested_amount};
use crate::ContractError;
use cosmwasm_std::{
    attr, coin, entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Uint128,
};
use cw2::{ensure_from_older_version, set_contract_version};
use cw_utils::nonpayable;
use vestflow_types::vesting::{
    ClaimableResponse, Config, CreateStreamMsg, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg,
    Stream, StreamResponse, StreamSelector, StreamsResponse,
};
use vestflow_utils::payment_checker::check_payment;

// Version and contract info for migration
const CONTRACT_NAME: &str = "crates.io:vestflow-vesting";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let InstantiateMsg {
        admin,
        stream_creator,
        vesting_denom,
        admission_policy,
    } = msg;

    let admin = deps
        .api
        .addr_validate(&admin.unwrap_or(info.sender.to_string()))?;
    let stream_creator = deps
        .api
        .addr_validate(&stream_creator.unwrap_or(admin.to_string()))?;

    let config = Config {
        admin: admin.clone(),
        pending_admin: None,
        stream_creator: stream_creator.clone(),
        vesting_denom: vesting_denom.clone(),
        admission_policy,
    };
    CONFIG.save(deps.storage, &config)?;
    LAST_STREAM_ID.save(deps.storage, &0)?;
    TOTAL_COMMITTED.save(deps.storage, &Uint128::zero())?;

    let res = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("stream_creator", stream_creator)
        .add_attribute("vesting_denom", vesting_denom);
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateStream { msg } => execute_create_stream(deps, env, info, *msg),
        ExecuteMsg::ClaimTokens { stream } => execute_claim_tokens(deps, env, info, stream),
        ExecuteMsg::SetPendingAdmin { new_admin } => {
            execute_set_pending_admin(deps, info, new_admin)
        }
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, info),
        ExecuteMsg::SetStreamCreator { new_creator } => {
            execute_set_stream_creator(deps, info, new_creator)
        }
    }
}

pub fn execute_create_stream(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: CreateStreamMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_stream_creation_authorized(&config, &info.sender)?;

    let CreateStreamMsg {
        beneficiary,
        total_amount,
        start_time,
        cliff,
        duration_seconds,
    } = msg;

    validate_stream_schedule(
        env.block.time,
        total_amount,
        start_time,
        &cliff,
        duration_seconds,
    )?;

    // The committed amount moves into escrow in the same transaction as the
    // state write; a wrong deposit aborts the creation entirely.
    check_payment(
        &info.funds,
        &[coin(total_amount.u128(), &config.vesting_denom)],
    )?;

    let beneficiary = deps.api.addr_validate(&beneficiary)?;
    let stream = Stream::new(
        beneficiary.clone(),
        total_amount,
        start_time,
        cliff,
        duration_seconds,
    );
    let unlock_begin_time = stream.unlock_begin_time();
    let unlock_end_time = stream.unlock_end_time();
    let stream_id = registry::admit(deps.storage, &config.admission_policy, stream)?;

    TOTAL_COMMITTED.update(deps.storage, |total| -> Result<_, ContractError> {
        Ok(total.checked_add(total_amount)?)
    })?;

    let attrs = vec![
        attr("action", "create_stream"),
        attr("stream_id", stream_id.to_string()),
        attr("beneficiary", beneficiary),
        attr("total_amount", total_amount),
        attr("start_time", start_time.to_string()),
        attr("unlock_begin_time", unlock_begin_time.to_string()),
        attr("unlock_end_time", unlock_end_time.to_string()),
    ];
    Ok(Response::new().add_attributes(attrs))
}

pub fn execute_claim_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    stream_selector: Option<StreamSelector>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    // with no selector the sender claims its own slot
    let selector =
        stream_selector.unwrap_or_else(|| StreamSelector::Beneficiary(info.sender.to_string()));
    let (stream_id, mut stream) =
        registry::resolve(deps.api, deps.storage, &config.admission_policy, &selector)?;

    let claimable = claimable_amount(&stream, env.block.time);
    if claimable.is_zero() {
        return Err(ContractError::NothingToClaim {});
    }

    stream.claimed_amount = stream.claimed_amount.checked_add(claimable)?;
    let completed = stream.is_fully_claimed();
    registry::settle(deps.storage, &config.admission_policy, stream_id, &stream)?;

    TOTAL_COMMITTED.update(deps.storage, |total| -> Result<_, ContractError> {
        Ok(total.checked_sub(claimable)?)
    })?;

    // funds always route to the recorded beneficiary, never to the caller
    let send_msg = build_bank_send_msg(
        config.vesting_denom,
        stream.beneficiary.to_string(),
        claimable,
    );

    let res = Response::new()
        .add_message(send_msg)
        .add_attribute("action", "claim_tokens")
        .add_attribute("stream_id", stream_id.to_string())
        .add_attribute("beneficiary", stream.beneficiary)
        .add_attribute("claimed_amount", claimable)
        .add_attribute("total_claimed", stream.claimed_amount)
        .add_attribute("completed", completed.to_string());
    Ok(res)
}

pub fn execute_set_pending_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    let new_admin = deps.api.addr_validate(&new_admin)?;
    config.pending_admin = Some(new_admin.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_pending_admin")
        .add_attribute("pending_admin", new_admin))
}

pub fn execute_accept_admin(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut config = CONFIG.load(deps.storage)?;
    if config.pending_admin != Some(info.sender.clone()) {
        return Err(ContractError::Unauthorized {});
    }

    config.admin = info.sender.clone();
    config.pending_admin = None;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "accept_admin")
        .add_attribute("admin", info.sender))
}

pub fn execute_set_stream_creator(
    deps: DepsMut,
    info: MessageInfo,
    new_creator: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    let new_creator = deps.api.addr_validate(&new_creator)?;
    config.stream_creator = new_creator.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_stream_creator")
        .add_attribute("stream_creator", new_creator))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Stream { stream } => to_json_binary(&query_stream(deps, stream)?),
        QueryMsg::StreamExists { stream } => to_json_binary(&query_stream_exists(deps, stream)?),
        QueryMsg::ClaimableAmount { stream } => {
            to_json_binary(&query_claimable_amount(deps, env, stream)?)
        }
        QueryMsg::VestedAmount {
            total_amount,
            start_time,
            cliff,
            duration_seconds,
            at_time,
        } => {
            let now = at_time.unwrap_or(env.block.time);
            to_json_binary(&vested_amount(
                total_amount,
                start_time,
                &cliff,
                duration_seconds,
                now,
            ))
        }
        QueryMsg::ListStreams { start_after, limit } => {
            to_json_binary(&query_list_streams(deps, start_after, limit)?)
        }
        QueryMsg::TotalCommitted {} => to_json_binary(&TOTAL_COMMITTED.load(deps.storage)?),
    }
}

pub fn query_stream(deps: Deps, selector: StreamSelector) -> StdResult<StreamResponse> {
    let config = CONFIG.load(deps.storage)?;
    let (id, stream) =
        registry::resolve(deps.api, deps.storage, &config.admission_policy, &selector)
            .map_err(into_std_err)?;
    Ok(stream_response(id, stream))
}

pub fn query_stream_exists(deps: Deps, selector: StreamSelector) -> StdResult<bool> {
    let config = CONFIG.load(deps.storage)?;
    registry::exists(deps.api, deps.storage, &config.admission_policy, &selector)
        .map_err(into_std_err)
}

pub fn query_claimable_amount(
    deps: Deps,
    env: Env,
    selector: StreamSelector,
) -> StdResult<ClaimableResponse> {
    let config = CONFIG.load(deps.storage)?;
    let (_, stream) = registry::resolve(deps.api, deps.storage, &config.admission_policy, &selector)
        .map_err(into_std_err)?;
    Ok(ClaimableResponse {
        amount: claimable_amount(&stream, env.block.time),
    })
}

pub fn query_list_streams(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<StreamsResponse> {
    let streams = registry::list_streams(deps.storage, start_after, limit)?
        .into_iter()
        .map(|(id, stream)| stream_response(id, stream))
        .collect();
    Ok(StreamsResponse { streams })
}

fn stream_response(id: u64, stream: Stream) -> StreamResponse {
    let unlock_begin_time = stream.unlock_begin_time();
    let unlock_end_time = stream.unlock_end_time();
    StreamResponse {
        id,
        beneficiary: stream.beneficiary.to_string(),
        total_amount: stream.total_amount,
        claimed_amount: stream.claimed_amount,
        start_time: stream.start_time,
        cliff: stream.cliff,
        duration_seconds: stream.duration_seconds,
        unlock_begin_time,
        unlock_end_time,
    }
}

fn into_std_err(err: ContractError) -> StdError {
    StdError::generic_err(err.to_string())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
