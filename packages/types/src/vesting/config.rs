use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

#[cw_serde]
pub struct Config {
    /// Address authorized to manage the contract and create streams.
    pub admin: Addr,
    /// Address mid-way through a two-phase admin handover. The current admin
    /// keeps full control until this address calls `AcceptAdmin`.
    pub pending_admin: Option<Addr>,
    /// Dedicated stream-creation address, reassignable only by the admin.
    pub stream_creator: Addr,
    /// Native denom escrowed by every stream and paid out on claim.
    pub vesting_denom: String,
    /// How many live streams a single beneficiary may hold at once.
    pub admission_policy: AdmissionPolicy,
}

#[cw_serde]
pub enum AdmissionPolicy {
    /// One live stream per beneficiary, keyed by its address. A new stream for
    /// the same beneficiary is admitted only once the prior one is fully
    /// claimed, overwriting the spent record in place.
    SingleSlot,
    /// Every stream is an independent record addressed by a numeric id. A
    /// beneficiary may hold any number of concurrent streams. Fully claimed
    /// records are deleted.
    Instances,
}
