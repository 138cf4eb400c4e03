//! Bellatrix ("merge") containers.
//!
//! The harness binds the bare `BeaconBlock`/`BeaconBlockBody`/`BeaconState`/
//! `SignedBeaconBlock` names to these shapes, the newest phase it supports.

use ethereum_types::U256;
use ssz_derive::{Decode, Encode};
use ssz_types::{BitVector, FixedVector, VariableList};
use tree_hash_derive::TreeHash;

use crate::altair::{SyncAggregate, SyncCommittee};
use crate::phase0::{
    Attestation, AttesterSlashing, BeaconBlockHeader, Checkpoint, Deposit, Eth1Data, Fork,
    ProposerSlashing, SignedVoluntaryExit, Validator,
};
use crate::preset::{
    BytesPerLogsBloom, EpochsPerHistoricalVector, EpochsPerSlashingsVector, HistoricalRootsLimit,
    JustificationBitsLength, MaxAttestations, MaxAttesterSlashings, MaxBytesPerTransaction,
    MaxDeposits, MaxExtraDataBytes, MaxProposerSlashings, MaxTransactionsPerPayload,
    MaxVoluntaryExits, SlotsPerEth1VotingPeriod, SlotsPerHistoricalRoot, ValidatorRegistryLimit,
};
use crate::{BlsSignature, ExecutionAddress, Hash256};

/// Opaque RLP-encoded execution-layer transaction.
pub type Transaction = VariableList<u8, MaxBytesPerTransaction>;

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct ExecutionPayload {
    pub parent_hash: Hash256,
    pub fee_recipient: ExecutionAddress,
    pub state_root: Hash256,
    pub receipts_root: Hash256,
    pub logs_bloom: FixedVector<u8, BytesPerLogsBloom>,
    pub prev_randao: Hash256,
    pub block_number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: VariableList<u8, MaxExtraDataBytes>,
    pub base_fee_per_gas: U256,
    pub block_hash: Hash256,
    pub transactions: VariableList<Transaction, MaxTransactionsPerPayload>,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct ExecutionPayloadHeader {
    pub parent_hash: Hash256,
    pub fee_recipient: ExecutionAddress,
    pub state_root: Hash256,
    pub receipts_root: Hash256,
    pub logs_bloom: FixedVector<u8, BytesPerLogsBloom>,
    pub prev_randao: Hash256,
    pub block_number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: VariableList<u8, MaxExtraDataBytes>,
    pub base_fee_per_gas: U256,
    pub block_hash: Hash256,
    pub transactions_root: Hash256,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct BeaconBlockBody {
    pub randao_reveal: BlsSignature,
    pub eth1_data: Eth1Data,
    pub graffiti: Hash256,
    pub proposer_slashings: VariableList<ProposerSlashing, MaxProposerSlashings>,
    pub attester_slashings: VariableList<AttesterSlashing, MaxAttesterSlashings>,
    pub attestations: VariableList<Attestation, MaxAttestations>,
    pub deposits: VariableList<Deposit, MaxDeposits>,
    pub voluntary_exits: VariableList<SignedVoluntaryExit, MaxVoluntaryExits>,
    pub sync_aggregate: SyncAggregate,
    pub execution_payload: ExecutionPayload,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct BeaconBlock {
    pub slot: u64,
    pub proposer_index: u64,
    pub parent_root: Hash256,
    pub state_root: Hash256,
    pub body: BeaconBlockBody,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SignedBeaconBlock {
    pub message: BeaconBlock,
    pub signature: BlsSignature,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct BeaconState {
    pub genesis_time: u64,
    pub genesis_validators_root: Hash256,
    pub slot: u64,
    pub fork: Fork,
    pub latest_block_header: BeaconBlockHeader,
    pub block_roots: FixedVector<Hash256, SlotsPerHistoricalRoot>,
    pub state_roots: FixedVector<Hash256, SlotsPerHistoricalRoot>,
    pub historical_roots: VariableList<Hash256, HistoricalRootsLimit>,
    pub eth1_data: Eth1Data,
    pub eth1_data_votes: VariableList<Eth1Data, SlotsPerEth1VotingPeriod>,
    pub eth1_deposit_index: u64,
    pub validators: VariableList<Validator, ValidatorRegistryLimit>,
    pub balances: VariableList<u64, ValidatorRegistryLimit>,
    pub randao_mixes: FixedVector<Hash256, EpochsPerHistoricalVector>,
    pub slashings: FixedVector<u64, EpochsPerSlashingsVector>,
    pub previous_epoch_participation: VariableList<u8, ValidatorRegistryLimit>,
    pub current_epoch_participation: VariableList<u8, ValidatorRegistryLimit>,
    pub justification_bits: BitVector<JustificationBitsLength>,
    pub previous_justified_checkpoint: Checkpoint,
    pub current_justified_checkpoint: Checkpoint,
    pub finalized_checkpoint: Checkpoint,
    pub inactivity_scores: VariableList<u64, ValidatorRegistryLimit>,
    pub current_sync_committee: SyncCommittee,
    pub next_sync_committee: SyncCommittee,
    pub latest_execution_payload_header: ExecutionPayloadHeader,
}
