use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

#[near(event_json(standard = "nep297"))]
pub enum MintEvent {
    #[event_version("1.0.0")]
    EpicNftMinted { minter_id: AccountId, token_id: u64, name: String },
    #[event_version("1.0.0")]
    MaxSupplySet { owner_id: AccountId, old_max_supply: u64, new_max_supply: u64 },
    #[event_version("1.0.0")]
    MintingFeeSet { owner_id: AccountId, old_fee: U128, new_fee: U128 },
    #[event_version("1.0.0")]
    RoyaltyReceiverSet { owner_id: AccountId, old_receiver: AccountId, new_receiver: AccountId },
    #[event_version("1.0.0")]
    RoyaltyPercentageSet { owner_id: AccountId, old_percentage: u32, new_percentage: u32 },
    #[event_version("1.0.0")]
    FeesWithdrawn { owner_id: AccountId, amount: U128 },
    #[event_version("1.0.0")]
    OwnerTransferred { old_owner: AccountId, new_owner: AccountId },
}
