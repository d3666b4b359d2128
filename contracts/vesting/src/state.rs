use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use vestflow_types::vesting::{Config, Stream};

pub const CONFIG: Item<Config> = Item::new("config");

/// Stream arena. Every stream lives here under its id handle, regardless of
/// the admission policy.
pub const STREAMS: Map<u64, Stream> = Map::new("streams");

/// Beneficiary -> id of the stream occupying its slot. Maintained only under
/// the single-slot policy.
pub const BENEFICIARY_SLOT: Map<&Addr, u64> = Map::new("beneficiary_slot");

pub const LAST_STREAM_ID: Item<u64> = Item::new("last_stream_id");

/// Escrowed, not-yet-claimed units across all streams.
pub const TOTAL_COMMITTED: Item<Uint128> = Item::new("total_committed");

pub fn next_stream_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id = LAST_STREAM_ID.load(store)? + 1;
    LAST_STREAM_ID.save(store, &id)?;
    Ok(id)
}
