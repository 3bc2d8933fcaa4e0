use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U64;
use near_sdk::testing_env;

#[test]
fn get_token_none_for_unminted_id() {
    let contract = new_contract();
    assert!(contract.get_token(U64(1)).is_none());
}

#[test]
fn nft_tokens_lists_all_minted() {
    let mut contract = new_contract();
    for _ in 0..3 {
        contract.make_an_epic_nft().unwrap();
    }
    let tokens = contract.nft_tokens(None, None);
    assert_eq!(tokens.len(), 3);
}

#[test]
fn nft_tokens_paginates() {
    let mut contract = new_contract();
    for _ in 0..3 {
        contract.make_an_epic_nft().unwrap();
    }
    let page = contract.nft_tokens(Some(U64(1)), Some(1));
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].token_id.0, 2);
}

#[test]
fn nft_tokens_for_owner_filters_by_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), TEST_MINT_DEPOSIT).build());
    contract.make_an_epic_nft().unwrap();
    contract.make_an_epic_nft().unwrap();
    testing_env!(context(owner()).build());
    contract.make_an_epic_nft().unwrap();

    assert_eq!(contract.nft_tokens_for_owner(minter(), None, None).len(), 2);
    assert_eq!(contract.nft_tokens_for_owner(owner(), None, None).len(), 1);
    assert!(contract.nft_tokens_for_owner(other(), None, None).is_empty());
}

#[test]
fn token_svg_renders_the_composed_name() {
    let mut contract = new_contract();
    let token = contract.make_an_epic_nft().unwrap();
    let svg = contract.token_svg(token.token_id).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(&token.name));
    assert!(contract.token_svg(U64(99)).is_none());
}

#[test]
fn nft_metadata_defaults() {
    let contract = new_contract();
    let metadata = contract.nft_metadata();
    assert_eq!(metadata.spec, "nft-1.0.0");
    assert_eq!(metadata.name, "EpicNFT");
    assert_eq!(metadata.symbol, "EPIC");
}

#[test]
fn custom_contract_metadata_is_kept() {
    testing_env!(context(owner()).build());
    let contract = Contract::new(
        Some(owner()),
        Some(NftContractMetadata {
            spec: "nft-1.0.0".into(),
            name: "SquareNFT".into(),
            symbol: "SQUARE".into(),
            icon: None,
            base_uri: None,
        }),
    );
    assert_eq!(contract.nft_metadata().name, "SquareNFT");
    assert_eq!(contract.nft_metadata().symbol, "SQUARE");
}
