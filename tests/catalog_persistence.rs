use std::fs;

use finmex::{
    catalog::{Catalog, CreditCard, DebitCard},
    storage::{CatalogStore, JsonCatalog},
};
use tempfile::TempDir;

fn store_in_temp_dir() -> (JsonCatalog, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let store = JsonCatalog::new(temp.path().join("tarjetas.json"));
    (store, temp)
}

#[test]
fn first_run_initializes_an_empty_catalog_on_disk() {
    let (store, _guard) = store_in_temp_dir();
    assert!(!store.path().exists());

    let catalog = store.load_or_init().expect("init catalog");
    assert!(catalog.is_empty());
    assert!(store.path().exists());
}

#[test]
fn append_and_save_roundtrips_both_sections() {
    let (store, _guard) = store_in_temp_dir();
    let mut catalog = store.load_or_init().expect("init catalog");

    catalog.add_debit(DebitCard {
        yield_rate: 0.055,
        minimum_balance: 1000.0,
        annual_fee: 0.0,
        ..DebitCard::new("Nomina Plus", "BBVA")
    });
    catalog.add_credit(CreditCard {
        interest_rate: 0.42,
        cat: 0.55,
        annual_fee: 700.0,
        credit_limit: 50_000.0,
        cashback_rate: 0.01,
        interest_free_months: true,
        ..CreditCard::new("Oro", "Banamex")
    });
    store.save(&catalog).expect("save catalog");

    let loaded = store.load_or_init().expect("reload catalog");
    assert_eq!(loaded.debit.len(), 1);
    assert_eq!(loaded.credit.len(), 1);
    assert_eq!(loaded.debit[0].name, "Nomina Plus");
    assert_eq!(loaded.credit[0].interest_rate, 0.42);
    assert!(loaded.credit[0].interest_free_months);
}

#[test]
fn wire_format_keeps_the_historical_section_keys() {
    let (store, _guard) = store_in_temp_dir();
    let mut catalog = Catalog::new();
    catalog.add_debit(DebitCard::new("Basica", "Santander"));
    store.save(&catalog).expect("save catalog");

    let raw = fs::read_to_string(store.path()).expect("read raw json");
    assert!(raw.contains("\"debito\""));
    assert!(raw.contains("\"credito\""));
    assert!(raw.contains("\"minimum_balance\""));
}

#[test]
fn catalogs_written_by_hand_are_readable() {
    let (store, _guard) = store_in_temp_dir();
    fs::write(
        store.path(),
        r#"{
  "debito": [
    {
      "name": "Digital",
      "bank": "Hey Banco",
      "yield_rate": 0.09,
      "minimum_balance": 0.0,
      "annual_fee": 0.0,
      "inactivity_fee": 0.0
    }
  ],
  "credito": []
}"#,
    )
    .expect("write fixture");

    let catalog = store.load_or_init().expect("load fixture");
    assert_eq!(catalog.debit.len(), 1);
    assert_eq!(catalog.debit[0].bank, "Hey Banco");
    assert_eq!(catalog.debit[0].yield_rate, 0.09);
}

#[test]
fn malformed_json_is_a_fatal_load_error() {
    let (store, _guard) = store_in_temp_dir();
    fs::write(store.path(), "{\"debito\": [,]}").expect("write garbage");
    assert!(store.load_or_init().is_err());
}

#[test]
fn saving_twice_replaces_the_previous_contents() {
    let (store, _guard) = store_in_temp_dir();
    let mut catalog = store.load_or_init().expect("init catalog");
    catalog.add_debit(DebitCard::new("One", "Bank"));
    store.save(&catalog).expect("first save");
    catalog.add_debit(DebitCard::new("Two", "Bank"));
    store.save(&catalog).expect("second save");

    let loaded = store.load_or_init().expect("reload");
    assert_eq!(loaded.debit.len(), 2);
    assert_eq!(loaded.debit[1].name, "Two");
}
