//! Mainnet preset length parameters as typenum aliases.
//!
//! Names follow the consensus spec constants they stand in for.

use ssz_types::typenum::{
    U2, U4, U16, U32, U33, U128, U256, U512, U2048, U8192, U16777216, U65536, U1048576,
    U1073741824, U1099511627776,
};

pub type MaxValidatorsPerCommittee = U2048;
pub type DepositProofLength = U33;
pub type SlotsPerHistoricalRoot = U8192;
pub type HistoricalRootsLimit = U16777216;
pub type EpochsPerHistoricalVector = U65536;
pub type EpochsPerSlashingsVector = U8192;
pub type ValidatorRegistryLimit = U1099511627776;
pub type SlotsPerEth1VotingPeriod = U2048;
pub type JustificationBitsLength = U4;

pub type MaxProposerSlashings = U16;
pub type MaxAttesterSlashings = U2;
pub type MaxAttestations = U128;
pub type MaxDeposits = U16;
pub type MaxVoluntaryExits = U16;

pub type SyncCommitteeSize = U512;
pub type SyncSubcommitteeSize = U128;

pub type BytesPerLogsBloom = U256;
pub type MaxExtraDataBytes = U32;
pub type MaxBytesPerTransaction = U1073741824;
pub type MaxTransactionsPerPayload = U1048576;
