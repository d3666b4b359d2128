use cosmwasm_std::{Api, Order, StdResult, Storage};
use cw_storage_plus::Bound;
use vestflow_types::vesting::{AdmissionPolicy, Stream, StreamSelector};

use crate::state::{next_stream_id, BENEFICIARY_SLOT, STREAMS};
use crate::ContractError;

const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

/// Admits a new stream under the configured policy and returns its id handle.
pub fn admit(
    store: &mut dyn Storage,
    policy: &AdmissionPolicy,
    stream: Stream,
) -> Result<u64, ContractError> {
    match policy {
        AdmissionPolicy::SingleSlot => {
            if let Some(prior_id) = BENEFICIARY_SLOT.may_load(store, &stream.beneficiary)? {
                let prior = STREAMS.load(store, prior_id)?;
                if !prior.is_fully_claimed() {
                    return Err(ContractError::StreamAlreadyExists {});
                }
                // the spent record gives up its slot and is dropped
                STREAMS.remove(store, prior_id);
            }
            let id = next_stream_id(store)?;
            BENEFICIARY_SLOT.save(store, &stream.beneficiary, &id)?;
            STREAMS.save(store, id, &stream)?;
            Ok(id)
        }
        AdmissionPolicy::Instances => {
            let id = next_stream_id(store)?;
            STREAMS.save(store, id, &stream)?;
            Ok(id)
        }
    }
}

/// Resolves a selector to a stored stream. Beneficiary selectors are only
/// meaningful under the single-slot policy; under the instances policy a
/// beneficiary may hold many streams and the id handle is required.
pub fn resolve(
    api: &dyn Api,
    store: &dyn Storage,
    policy: &AdmissionPolicy,
    selector: &StreamSelector,
) -> Result<(u64, Stream), ContractError> {
    let id = match selector {
        StreamSelector::Id(id) => *id,
        StreamSelector::Beneficiary(beneficiary) => {
            if matches!(policy, AdmissionPolicy::Instances) {
                return Err(ContractError::StreamIdRequired {});
            }
            let beneficiary = api.addr_validate(beneficiary)?;
            BENEFICIARY_SLOT
                .may_load(store, &beneficiary)?
                .ok_or(ContractError::StreamNotFound {})?
        }
    };
    let stream = STREAMS
        .may_load(store, id)?
        .ok_or(ContractError::StreamNotFound {})?;
    Ok((id, stream))
}

pub fn exists(
    api: &dyn Api,
    store: &dyn Storage,
    policy: &AdmissionPolicy,
    selector: &StreamSelector,
) -> Result<bool, ContractError> {
    match resolve(api, store, policy, selector) {
        Ok(_) => Ok(true),
        Err(ContractError::StreamNotFound {}) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Persists a stream after a claim. A fully claimed record is deleted under
/// the instances policy and retained until overwritten under single-slot.
pub fn settle(
    store: &mut dyn Storage,
    policy: &AdmissionPolicy,
    id: u64,
    stream: &Stream,
) -> StdResult<()> {
    if stream.is_fully_claimed() && matches!(policy, AdmissionPolicy::Instances) {
        STREAMS.remove(store, id);
        Ok(())
    } else {
        STREAMS.save(store, id, stream)
    }
}

pub fn list_streams(
    store: &dyn Storage,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<(u64, Stream)>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    STREAMS
        .range(store, start, None, Order::Ascending)
        .take(limit)
        .collect()
}
