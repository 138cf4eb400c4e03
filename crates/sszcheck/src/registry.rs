//! Name → decoder registry for the closed set of supported types.
//!
//! The registry is the only place that knows concrete container types. Each
//! entry monomorphizes [`decode_case`] for one shape; everything downstream
//! works through the [`SszCase`] capability object ({encode, hash tree
//! root}). Resolution is a pure lookup: no side effects, nothing registered
//! after process start, and an unknown name is a hard error rather than an
//! empty result.

use ssz::{Decode, Encode};
use tree_hash::{Hash256, TreeHash};

use sszcheck_types::{
    AggregateAndProof, Attestation, AttestationData, AttesterSlashing, BeaconBlock,
    BeaconBlockBody, BeaconBlockHeader, BeaconState, Checkpoint, ContributionAndProof, Deposit,
    DepositData, DepositMessage, Eth1Data, ExecutionPayload, ExecutionPayloadHeader, Fork,
    ForkData, HistoricalBatch, IndexedAttestation, PendingAttestation, ProposerSlashing,
    SignedAggregateAndProof, SignedBeaconBlock, SignedBeaconBlockHeader,
    SignedContributionAndProof, SignedVoluntaryExit, SigningData, SyncAggregate,
    SyncAggregatorSelectionData, SyncCommittee, SyncCommitteeContribution, SyncCommitteeMessage,
    Validator, VoluntaryExit,
};

use crate::error::HarnessError;

/// Capability set of a decoded case value: re-encode and structural hash.
/// Decoding is the constructor side, handled by [`CaseDecoder`].
pub trait SszCase {
    fn to_ssz(&self) -> Vec<u8>;
    fn hash_tree_root(&self) -> Hash256;
}

/// Adapter implementing the capability set once for any codec-backed type.
struct Erased<T>(T);

impl<T: Encode + TreeHash> SszCase for Erased<T> {
    fn to_ssz(&self) -> Vec<u8> {
        self.0.as_ssz_bytes()
    }

    fn hash_tree_root(&self) -> Hash256 {
        self.0.tree_hash_root()
    }
}

/// Constructor produced by [`resolve`]: decodes canonical bytes into a fresh
/// case value.
pub type CaseDecoder = fn(&[u8]) -> Result<Box<dyn SszCase>, ssz::DecodeError>;

fn decode_case<T>(bytes: &[u8]) -> Result<Box<dyn SszCase>, ssz::DecodeError>
where
    T: Decode + Encode + TreeHash + 'static,
{
    Ok(Box::new(Erased(T::from_ssz_bytes(bytes)?)))
}

/// Every name the registry resolves. The bare block/state names bind to
/// their bellatrix ("merge") shapes.
pub const KNOWN_TYPES: &[&str] = &[
    "AggregateAndProof",
    "Attestation",
    "AttestationData",
    "AttesterSlashing",
    "BeaconBlock",
    "BeaconBlockBody",
    "BeaconBlockHeader",
    "BeaconState",
    "Checkpoint",
    "ContributionAndProof",
    "Deposit",
    "DepositData",
    "DepositMessage",
    "Eth1Data",
    "ExecutionPayload",
    "ExecutionPayloadHeader",
    "Fork",
    "ForkData",
    "HistoricalBatch",
    "IndexedAttestation",
    "PendingAttestation",
    "ProposerSlashing",
    "SignedAggregateAndProof",
    "SignedBeaconBlock",
    "SignedBeaconBlockHeader",
    "SignedContributionAndProof",
    "SignedVoluntaryExit",
    "SigningData",
    "SyncAggregate",
    "SyncAggregatorSelectionData",
    "SyncCommittee",
    "SyncCommitteeContribution",
    "SyncCommitteeMessage",
    "Validator",
    "VoluntaryExit",
];

/// Resolve a type name to its case decoder.
///
/// # Errors
///
/// Returns `UnknownType` for any name outside [`KNOWN_TYPES`].
pub fn resolve(name: &str) -> Result<CaseDecoder, HarnessError> {
    let decoder: CaseDecoder = match name {
        "AggregateAndProof" => decode_case::<AggregateAndProof>,
        "Attestation" => decode_case::<Attestation>,
        "AttestationData" => decode_case::<AttestationData>,
        "AttesterSlashing" => decode_case::<AttesterSlashing>,
        "BeaconBlock" => decode_case::<BeaconBlock>,
        "BeaconBlockBody" => decode_case::<BeaconBlockBody>,
        "BeaconBlockHeader" => decode_case::<BeaconBlockHeader>,
        "BeaconState" => decode_case::<BeaconState>,
        "Checkpoint" => decode_case::<Checkpoint>,
        "ContributionAndProof" => decode_case::<ContributionAndProof>,
        "Deposit" => decode_case::<Deposit>,
        "DepositData" => decode_case::<DepositData>,
        "DepositMessage" => decode_case::<DepositMessage>,
        "Eth1Data" => decode_case::<Eth1Data>,
        "ExecutionPayload" => decode_case::<ExecutionPayload>,
        "ExecutionPayloadHeader" => decode_case::<ExecutionPayloadHeader>,
        "Fork" => decode_case::<Fork>,
        "ForkData" => decode_case::<ForkData>,
        "HistoricalBatch" => decode_case::<HistoricalBatch>,
        "IndexedAttestation" => decode_case::<IndexedAttestation>,
        "PendingAttestation" => decode_case::<PendingAttestation>,
        "ProposerSlashing" => decode_case::<ProposerSlashing>,
        "SignedAggregateAndProof" => decode_case::<SignedAggregateAndProof>,
        "SignedBeaconBlock" => decode_case::<SignedBeaconBlock>,
        "SignedBeaconBlockHeader" => decode_case::<SignedBeaconBlockHeader>,
        "SignedContributionAndProof" => decode_case::<SignedContributionAndProof>,
        "SignedVoluntaryExit" => decode_case::<SignedVoluntaryExit>,
        "SigningData" => decode_case::<SigningData>,
        "SyncAggregate" => decode_case::<SyncAggregate>,
        "SyncAggregatorSelectionData" => decode_case::<SyncAggregatorSelectionData>,
        "SyncCommittee" => decode_case::<SyncCommittee>,
        "SyncCommitteeContribution" => decode_case::<SyncCommitteeContribution>,
        "SyncCommitteeMessage" => decode_case::<SyncCommitteeMessage>,
        "Validator" => decode_case::<Validator>,
        "VoluntaryExit" => decode_case::<VoluntaryExit>,
        _ => {
            return Err(HarnessError::UnknownType {
                name: name.to_owned(),
            });
        }
    };
    Ok(decoder)
}
