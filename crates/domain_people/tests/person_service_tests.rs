//! Tests for PersonService

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::PersonId;
use domain_people::{MockPersonPort, Person, PersonRecord, PersonService};

fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1992, 11, 5).unwrap()
}

fn create_test_person(name: &str) -> Person {
    Person::new(name, birth_date())
}

async fn service_with(people: Vec<Person>) -> PersonService {
    PersonService::new(Arc::new(MockPersonPort::with_people(people).await))
}

// ============================================================================
// Lookup Tests
// ============================================================================

mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_find_all_empty_registry() {
        let service = service_with(vec![]).await;
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_returns_every_person() {
        let service = service_with(vec![
            create_test_person("Maria Silva"),
            create_test_person("Carlos Souza"),
        ])
        .await;

        let all = service.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_id_returns_person() {
        let person = create_test_person("Maria Silva");
        let service = service_with(vec![person.clone()]).await;

        let found = service.find_by_id(person.id).await.unwrap();
        assert_eq!(found.id, person.id);
        assert_eq!(found.name, "Maria Silva");
    }

    #[tokio::test]
    async fn test_find_by_id_unknown_fails_with_fixed_message() {
        let service = service_with(vec![]).await;

        let error = service.find_by_id(PersonId::new()).await.unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Person not found");
    }
}

// ============================================================================
// Save Tests
// ============================================================================

mod save_tests {
    use super::*;

    #[tokio::test]
    async fn test_save_create_mints_identifier() {
        let service = service_with(vec![]).await;

        let stored = service
            .save(PersonRecord::create("Maria Silva", birth_date()))
            .await
            .unwrap();

        assert_eq!(stored.name, "Maria Silva");
        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_with_explicit_id_stores_under_that_id() {
        let service = service_with(vec![]).await;
        let id = PersonId::new();

        let stored = service
            .save(PersonRecord {
                id: Some(id),
                name: "Carlos Souza".to_string(),
                birth_date: birth_date(),
            })
            .await
            .unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(service.find_by_id(id).await.unwrap().name, "Carlos Souza");
    }

    #[tokio::test]
    async fn test_save_update_changes_fields() {
        let person = create_test_person("Maria Silva");
        let service = service_with(vec![person.clone()]).await;

        let mut record = PersonRecord::from(person.clone());
        record.birth_date = NaiveDate::from_ymd_opt(1991, 1, 17).unwrap();
        let updated = service.save(record).await.unwrap();

        assert_eq!(updated.id, person.id);
        assert_eq!(
            updated.birth_date,
            NaiveDate::from_ymd_opt(1991, 1, 17).unwrap()
        );
        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }
}

// ============================================================================
// Name Uniqueness Tests
// ============================================================================

mod uniqueness_tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let service = service_with(vec![create_test_person("Maria Silva")]).await;

        let error = service
            .save(PersonRecord::create("Maria Silva", birth_date()))
            .await
            .unwrap_err();

        assert!(error.is_conflict());
        assert_eq!(error.to_string(), "Person already registered");
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts_ignoring_case() {
        let service = service_with(vec![create_test_person("Maria Silva")]).await;

        let error = service
            .save(PersonRecord::create("MARIA SILVA", birth_date()))
            .await
            .unwrap_err();

        assert!(error.is_conflict());
        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_resaving_own_name_is_idempotent() {
        let person = create_test_person("Maria Silva");
        let service = service_with(vec![person.clone()]).await;

        let stored = service.save(PersonRecord::from(person.clone())).await.unwrap();

        assert_eq!(stored.id, person.id);
        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_keeping_name_with_case_change_is_allowed() {
        let person = create_test_person("Maria Silva");
        let service = service_with(vec![person.clone()]).await;

        let mut record = PersonRecord::from(person.clone());
        record.name = "maria silva".to_string();
        let stored = service.save(record).await.unwrap();

        assert_eq!(stored.id, person.id);
        assert_eq!(stored.name, "maria silva");
    }

    #[tokio::test]
    async fn test_update_claiming_someone_elses_name_conflicts() {
        let maria = create_test_person("Maria Silva");
        let carlos = create_test_person("Carlos Souza");
        let service = service_with(vec![maria, carlos.clone()]).await;

        let mut record = PersonRecord::from(carlos);
        record.name = "maria silva".to_string();
        let error = service.save(record).await.unwrap_err();

        assert!(error.is_conflict());
    }

    #[tokio::test]
    async fn test_distinct_names_do_not_conflict() {
        let service = service_with(vec![create_test_person("Maria Silva")]).await;

        let stored = service
            .save(PersonRecord::create("Maria Silveira", birth_date()))
            .await
            .unwrap();

        assert_eq!(stored.name, "Maria Silveira");
        assert_eq!(service.find_all().await.unwrap().len(), 2);
    }
}
