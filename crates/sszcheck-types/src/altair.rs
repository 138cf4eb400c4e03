//! Altair sync-committee containers.

use ssz_derive::{Decode, Encode};
use ssz_types::{BitVector, FixedVector};
use tree_hash_derive::TreeHash;

use crate::preset::{SyncCommitteeSize, SyncSubcommitteeSize};
use crate::{BlsPubkey, BlsSignature, Hash256};

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SyncCommittee {
    pub pubkeys: FixedVector<BlsPubkey, SyncCommitteeSize>,
    pub aggregate_pubkey: BlsPubkey,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SyncAggregate {
    pub sync_committee_bits: BitVector<SyncCommitteeSize>,
    pub sync_committee_signature: BlsSignature,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SyncCommitteeMessage {
    pub slot: u64,
    pub beacon_block_root: Hash256,
    pub validator_index: u64,
    pub signature: BlsSignature,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SyncAggregatorSelectionData {
    pub slot: u64,
    pub subcommittee_index: u64,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SyncCommitteeContribution {
    pub slot: u64,
    pub beacon_block_root: Hash256,
    pub subcommittee_index: u64,
    pub aggregation_bits: BitVector<SyncSubcommitteeSize>,
    pub signature: BlsSignature,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct ContributionAndProof {
    pub aggregator_index: u64,
    pub contribution: SyncCommitteeContribution,
    pub selection_proof: BlsSignature,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SignedContributionAndProof {
    pub message: ContributionAndProof,
    pub signature: BlsSignature,
}

#[cfg(test)]
mod tests {
    use ssz::{Decode, Encode};
    use tree_hash::TreeHash;

    use super::*;

    #[test]
    fn sync_committee_message_round_trips() {
        let message = SyncCommitteeMessage {
            slot: 99,
            beacon_block_root: Hash256::repeat_byte(0x42),
            validator_index: 1234,
            signature: vec![0x0f; 96].into(),
        };
        let bytes = message.as_ssz_bytes();
        assert_eq!(
            SyncCommitteeMessage::from_ssz_bytes(&bytes).unwrap(),
            message
        );
    }

    #[test]
    fn contribution_round_trips_with_bitvector() {
        let mut bits = BitVector::<SyncSubcommitteeSize>::new();
        bits.set(0, true).unwrap();
        bits.set(127, true).unwrap();
        let contribution = SyncCommitteeContribution {
            slot: 1,
            beacon_block_root: Hash256::zero(),
            subcommittee_index: 2,
            aggregation_bits: bits,
            signature: vec![0xaa; 96].into(),
        };
        let bytes = contribution.as_ssz_bytes();
        let decoded = SyncCommitteeContribution::from_ssz_bytes(&bytes).unwrap();
        assert_eq!(decoded, contribution);
        assert_eq!(decoded.tree_hash_root(), contribution.tree_hash_root());
    }
}
