use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, PanicOnDefault, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;
mod types;
mod words;

mod mint;
mod royalties;
mod views;

mod admin;


pub use constants::*;
pub use errors::MintError;
pub use events::MintEvent;
pub use types::{EpicToken, NftContractMetadata, RoyaltyInfo, StorageKey, TokenView};
pub use words::{FIRST_WORDS, SECOND_WORDS, THIRD_WORDS};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/epic-nft/epic-nft-monorepo",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep177", version = "2.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,

    // Supply invariant: incremented by exactly 1 per mint, never decremented.
    pub total_supply: u64,
    pub max_supply: u64,

    pub minting_fee: u128,
    // Fee custody ledger: the account balance also carries storage staking,
    // so withdrawable fees are tracked separately.
    pub collected_fees: u128,

    pub royalty_receiver: AccountId,
    pub royalty_percentage: u32,

    pub tokens_by_id: IterableMap<u64, EpicToken>,
    pub(crate) tokens_per_owner: LookupMap<AccountId, IterableSet<u64>>,

    pub contract_metadata: NftContractMetadata,
}
