use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U64;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

#[test]
fn mint_increments_supply() {
    let mut contract = new_contract();
    contract.make_an_epic_nft().unwrap();
    contract.make_an_epic_nft().unwrap();
    assert_eq!(contract.total_supply().0, 2);
}

#[test]
fn token_ids_are_sequential_from_one() {
    let mut contract = new_contract();
    let first = contract.make_an_epic_nft().unwrap();
    let second = contract.make_an_epic_nft().unwrap();
    assert_eq!(first.token_id.0, 1);
    assert_eq!(second.token_id.0, 2);
    assert!(contract.get_token(U64(1)).is_some());
    assert!(contract.get_token(U64(2)).is_some());
}

#[test]
fn mint_at_cap_fails() {
    let mut contract = new_contract();
    contract.set_max_supply(U64(1)).unwrap();
    contract.make_an_epic_nft().unwrap();
    let err = contract.make_an_epic_nft().unwrap_err();
    assert!(matches!(err, MintError::SupplyExceeded(_)));
    assert!(err.to_string().contains("Maximum NFT supply reached."));
    assert_eq!(contract.total_supply().0, 1);
}

#[test]
fn non_owner_mint_without_fee_fails() {
    let mut contract = new_contract();
    testing_env!(context(minter()).build());
    let err = contract.make_an_epic_nft().unwrap_err();
    assert!(matches!(err, MintError::InsufficientFee(_)));
    assert_eq!(contract.total_supply().0, 0);
}

#[test]
fn non_owner_mint_collects_whole_deposit() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), TEST_MINT_DEPOSIT).build());
    contract.make_an_epic_nft().unwrap();
    assert_eq!(contract.collected_fees().0, TEST_MINT_DEPOSIT);
}

#[test]
fn owner_mint_is_fee_exempt() {
    let mut contract = new_contract();
    contract.make_an_epic_nft().unwrap();
    assert_eq!(contract.total_supply().0, 1);
    assert_eq!(contract.collected_fees().0, 0);
}

#[test]
fn minted_words_come_from_the_fixed_lists() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), TEST_MINT_DEPOSIT).build());
    let token = contract.make_an_epic_nft().unwrap();
    assert!(FIRST_WORDS.contains(&token.first_word.as_str()));
    assert!(SECOND_WORDS.contains(&token.second_word.as_str()));
    assert!(THIRD_WORDS.contains(&token.third_word.as_str()));
    assert_eq!(
        token.name,
        format!("{}{}{}", token.first_word, token.second_word, token.third_word)
    );
}

#[test]
fn minted_token_records_minter_and_timestamp() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), TEST_MINT_DEPOSIT).build());
    let token = contract.make_an_epic_nft().unwrap();
    assert_eq!(token.owner_id, minter());
    assert_eq!(token.minter_id, minter());
    assert_eq!(token.minted_at.0, 1_700_000_000_000_000_000);
}

#[test]
fn mint_emits_nep297_event() {
    let mut contract = new_contract();
    contract.make_an_epic_nft().unwrap();
    let logs = get_logs();
    assert!(
        logs.iter()
            .any(|log| log.starts_with("EVENT_JSON:") && log.contains("epic_nft_minted")),
        "expected an EVENT_JSON mint event, got {:?}",
        logs
    );
}

#[test]
fn mint_indexes_token_per_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), TEST_MINT_DEPOSIT).build());
    contract.make_an_epic_nft().unwrap();
    assert_eq!(contract.nft_supply_for_owner(minter()).0, 1);
    assert_eq!(contract.nft_supply_for_owner(other()).0, 0);
}

#[test]
fn supply_counter_reaches_cap_exactly() {
    let mut contract = new_contract();
    contract.set_max_supply(U64(3)).unwrap();
    for _ in 0..3 {
        contract.make_an_epic_nft().unwrap();
    }
    assert_eq!(contract.total_supply().0, 3);
    assert!(matches!(
        contract.make_an_epic_nft().unwrap_err(),
        MintError::SupplyExceeded(_)
    ));
}
