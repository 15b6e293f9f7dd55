//! Convoy registry tests

use codered::models::convoy::{seed_convoys, ConvoyStatus};
use codered::registry::convoy::ConvoyRegistry;

fn convoy(id: &str) -> codered::models::convoy::Convoy {
    let mut convoy = seed_convoys().remove(0);
    convoy.id = id.to_string();
    convoy
}

#[test]
fn test_prepend_puts_new_entry_first() {
    let registry = ConvoyRegistry::with_seed(seed_convoys());
    let before = registry.list();

    registry.prepend(convoy("CV-NEW-1"));

    let after = registry.list();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0].id, "CV-NEW-1");
    // Existing entries keep their order and contents
    assert_eq!(&after[1..], &before[..]);
}

#[test]
fn test_duplicate_ids_accepted() {
    let registry = ConvoyRegistry::new();
    registry.prepend(convoy("CV-DUP"));
    registry.prepend(convoy("CV-DUP"));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("CV-DUP").unwrap().id, "CV-DUP");
}

#[test]
fn test_seed_order_and_counts() {
    let registry = ConvoyRegistry::with_seed(seed_convoys());
    let ids: Vec<_> = registry.list().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["CV-ALPHA-01", "CV-BRAVO-09", "CV-CHARLIE-22"]);
    assert_eq!(registry.count_by_status(ConvoyStatus::Moving), 1);
    assert_eq!(registry.count_by_status(ConvoyStatus::Secure), 0);
}

#[test]
fn test_empty_registry() {
    let registry = ConvoyRegistry::default();
    assert!(registry.is_empty());
    assert!(registry.list().is_empty());
    assert!(registry.get("CV-ALPHA-01").is_none());
}
