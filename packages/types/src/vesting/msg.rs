use crate::vesting::{AdmissionPolicy, CliffSchedule};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};

#[cw_serde]
/// Message used to instantiate the vesting contract.
pub struct InstantiateMsg {
    /// The optional address of the admin. Defaults to the sender.
    pub admin: Option<String>,
    /// The optional dedicated stream-creation address. Defaults to the admin.
    pub stream_creator: Option<String>,
    /// Native denom escrowed by every stream and paid out on claim.
    pub vesting_denom: String,
    /// Stream admission policy, fixed for the lifetime of the contract.
    pub admission_policy: AdmissionPolicy,
}

#[cw_serde]
pub struct CreateStreamMsg {
    /// Recipient of the vested tokens.
    pub beneficiary: String,
    /// Total units committed to the stream. The same amount of the vesting
    /// denom must be attached to the message.
    pub total_amount: Uint128,
    /// Instant after which unlocking begins. Must be strictly in the future.
    pub start_time: Timestamp,
    /// Cliff policy for the stream.
    pub cliff: CliffSchedule,
    /// Length of the linear-unlock window in seconds. Zero is accepted only
    /// when the whole amount unlocks at the cliff.
    pub duration_seconds: u64,
}

/// Names a stream either through the beneficiary slot (single-slot policy)
/// or through its id handle.
#[cw_serde]
pub enum StreamSelector {
    Beneficiary(String),
    Id(u64),
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Commit escrowed funds to a new vesting stream.
    CreateStream { msg: Box<CreateStreamMsg> },
    /// Pay out every unlocked-but-unclaimed unit to the stream's beneficiary.
    /// Callable by anyone able to name the stream; funds always route to the
    /// recorded beneficiary. With no selector the sender's own slot is
    /// claimed.
    ClaimTokens { stream: Option<StreamSelector> },
    /// Start a two-phase admin handover. The current admin keeps control
    /// until the new admin accepts.
    SetPendingAdmin { new_admin: String },
    /// Complete a handover started with `SetPendingAdmin`.
    AcceptAdmin {},
    /// Reassign the dedicated stream-creation address.
    SetStreamCreator { new_creator: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns current configuration.
    #[returns(crate::vesting::Config)]
    Config {},
    /// Returns a stream's current state.
    #[returns(StreamResponse)]
    Stream { stream: StreamSelector },
    /// Returns whether a live stream exists for the selector.
    #[returns(bool)]
    StreamExists { stream: StreamSelector },
    /// Returns the unlocked-but-unclaimed amount of a stream.
    #[returns(ClaimableResponse)]
    ClaimableAmount { stream: StreamSelector },
    /// Evaluates the unlock schedule for arbitrary parameters, independent of
    /// any stored stream. `at_time` defaults to the current block time.
    #[returns(Uint128)]
    VestedAmount {
        total_amount: Uint128,
        start_time: Timestamp,
        cliff: CliffSchedule,
        duration_seconds: u64,
        at_time: Option<Timestamp>,
    },
    /// Returns list of streams paginated by `start_after` and `limit`.
    #[returns(StreamsResponse)]
    ListStreams {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Returns the total escrowed, not-yet-claimed amount across all streams.
    #[returns(Uint128)]
    TotalCommitted {},
}

#[cw_serde]
pub struct StreamResponse {
    /// Id handle of the stream.
    pub id: u64,
    /// Recipient of the vested tokens.
    pub beneficiary: String,
    pub total_amount: Uint128,
    pub claimed_amount: Uint128,
    pub start_time: Timestamp,
    pub cliff: CliffSchedule,
    pub duration_seconds: u64,
    /// Instant at which linear unlocking begins.
    pub unlock_begin_time: Timestamp,
    /// Instant at which the full amount is unlocked.
    pub unlock_end_time: Timestamp,
}

#[cw_serde]
pub struct StreamsResponse {
    pub streams: Vec<StreamResponse>,
}

#[cw_serde]
pub struct ClaimableResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct MigrateMsg {}
