//! Property tests for principal re-balancing
//!
//! Whatever sequence of saves a single owner sees, the store holds at most
//! one principal address for them at every rest point.

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::AddressId;
use domain_people::{AddressDraft, AddressService, MockAddressPort, MockPersonPort, Person};
use proptest::prelude::*;

/// One generated save: possibly principal, possibly an update of an address
/// created earlier in the sequence (picked by index).
fn save_ops() -> impl Strategy<Value = Vec<(bool, Option<usize>)>> {
    proptest::collection::vec((any::<bool>(), proptest::option::of(0usize..8)), 1..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn principal_count_never_exceeds_one(ops in save_ops()) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let owner = Person::new(
                "Ana Beatriz",
                NaiveDate::from_ymd_opt(1979, 4, 30).unwrap(),
            );
            let people = Arc::new(MockPersonPort::with_people(vec![owner.clone()]).await);
            let addresses = Arc::new(MockAddressPort::new());
            let service = AddressService::new(people, addresses.clone());

            let mut known: Vec<AddressId> = Vec::new();

            for (is_principal, update_slot) in ops {
                let id = match update_slot {
                    Some(slot) if !known.is_empty() => Some(known[slot % known.len()]),
                    _ => None,
                };
                let draft = AddressDraft {
                    id,
                    street: "Rua Projetada".to_string(),
                    number: "3".to_string(),
                    city: "Natal".to_string(),
                    postal_code: "59000000".to_string(),
                    is_principal,
                    person_id: Some(owner.id),
                };

                let stored = service.save_with_rebalance(draft).await.unwrap();
                if !known.contains(&stored.id) {
                    known.push(stored.id);
                }

                let principals = addresses
                    .snapshot()
                    .await
                    .iter()
                    .filter(|a| a.person_id == owner.id && a.is_principal)
                    .count();
                assert!(principals <= 1, "owner ended up with {} principals", principals);
                if is_principal {
                    assert_eq!(principals, 1);
                }
            }
        });
    }
}
