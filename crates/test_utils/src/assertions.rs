//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::PersonId;
use domain_people::Address;

/// Counts the principal addresses in a collection
pub fn principal_count(addresses: &[Address]) -> usize {
    addresses.iter().filter(|a| a.is_principal).count()
}

/// Asserts that exactly one address in the collection is principal
///
/// # Panics
///
/// Panics when zero or more than one principal address is present
pub fn assert_single_principal(addresses: &[Address]) {
    let count = principal_count(addresses);
    assert!(
        count == 1,
        "Expected exactly one principal address, found {} among {} addresses",
        count,
        addresses.len()
    );
}

/// Asserts that at most one address in the collection is principal
pub fn assert_at_most_one_principal(addresses: &[Address]) {
    let count = principal_count(addresses);
    assert!(
        count <= 1,
        "Expected at most one principal address, found {}",
        count
    );
}

/// Asserts that no address in the collection is principal
pub fn assert_no_principal(addresses: &[Address]) {
    let count = principal_count(addresses);
    assert!(count == 0, "Expected no principal address, found {}", count);
}

/// Asserts that every address in the collection belongs to the given owner
pub fn assert_owned_by(addresses: &[Address], owner: PersonId) {
    for address in addresses {
        assert!(
            address.person_id == owner,
            "Address {} belongs to {}, expected owner {}",
            address.id,
            address.person_id,
            owner
        );
    }
}
