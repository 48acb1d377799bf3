// src/services/library_service_tests.rs
//
// LibraryService tests against mocked repositories
//
// INVARIANTS TESTED:
// - Invalid input never reaches the backend
// - New ids are the numeric maximum plus one
// - Books and categories load independently
// - Every outcome is published on the event bus

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::domain::book::invariants::MSG_CODE_TAKEN;
    use crate::domain::{Book, BookField, BookInput, Category};
    use crate::error::AppError;
    use crate::events::EventBus;
    use crate::repositories::{MockBookRepository, MockCategoryRepository};
    use crate::services::LibraryService;

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn stored(id: &str, code: &str, quantity: u32) -> Book {
        Book {
            id: id.to_string(),
            code: code.to_string(),
            name: format!("Book {}", id),
            category_id: "1".to_string(),
            import_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            quantity,
        }
    }

    fn dune_input() -> BookInput {
        BookInput {
            code: "BO-0001".to_string(),
            name: "Dune".to_string(),
            category_id: "1".to_string(),
            import_date: "2024-01-01".to_string(),
            quantity: "5".to_string(),
        }
    }

    fn service(
        books: MockBookRepository,
        categories: MockCategoryRepository,
    ) -> (LibraryService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let service = LibraryService::new(Arc::new(books), Arc::new(categories), Arc::clone(&bus));
        (service, bus)
    }

    fn event_types(bus: &EventBus) -> Vec<String> {
        bus.get_event_log().into_iter().map(|e| e.event_type).collect()
    }

    // ========================================================================
    // ADD BOOK
    // ========================================================================

    #[tokio::test]
    async fn test_add_book_posts_with_next_id() {
        let mut books = MockBookRepository::new();
        books
            .expect_create()
            .withf(|book: &Book| book.id == "8" && book.code == "BO-0001" && book.quantity == 5)
            .times(1)
            .returning(|book| Ok(book.clone()));

        let (service, bus) = service(books, MockCategoryRepository::new());
        let existing = vec![stored("3", "BO-0003", 1), stored("7", "BO-0007", 2)];

        let created = service.add_book(&dune_input(), &existing, today()).await.unwrap();

        assert_eq!(created.id, "8");
        assert_eq!(created.name, "Dune");
        assert_eq!(event_types(&bus), vec!["BookCreated"]);
    }

    #[tokio::test]
    async fn test_add_book_first_record_gets_id_one() {
        let mut books = MockBookRepository::new();
        books
            .expect_create()
            .withf(|book: &Book| book.id == "1")
            .times(1)
            .returning(|book| Ok(book.clone()));

        let (service, _bus) = service(books, MockCategoryRepository::new());
        let created = service.add_book(&dune_input(), &[], today()).await.unwrap();
        assert_eq!(created.id, "1");
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_backend() {
        let mut books = MockBookRepository::new();
        books.expect_create().never();

        let (service, bus) = service(books, MockCategoryRepository::new());
        let existing = vec![stored("1", "BO-0001", 3)];

        let err = service
            .add_book(&dune_input(), &existing, today())
            .await
            .unwrap_err();

        match err {
            AppError::Validation(report) => {
                assert_eq!(report.errors().len(), 1);
                assert_eq!(report.error(BookField::Code), Some(MSG_CODE_TAKEN));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(bus.get_event_log().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_on_create_is_reported() {
        let mut books = MockBookRepository::new();
        books
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::Network("connection refused".to_string())));

        let (service, bus) = service(books, MockCategoryRepository::new());
        let err = service.add_book(&dune_input(), &[], today()).await.unwrap_err();

        assert!(err.is_network());
        assert!(bus.get_event_log().is_empty());
    }

    // ========================================================================
    // LOAD CATALOG
    // ========================================================================

    #[tokio::test]
    async fn test_load_catalog_success() {
        let mut books = MockBookRepository::new();
        books
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![stored("1", "BO-0001", 4), stored("2", "BO-0002", 1)]));

        let mut categories = MockCategoryRepository::new();
        categories
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![Category::new("1", "Novel")]));

        let (service, bus) = service(books, categories);
        let load = service.load_catalog().await;

        assert_eq!(load.books.unwrap().len(), 2);
        assert_eq!(load.categories.unwrap().len(), 1);
        assert_eq!(event_types(&bus), vec!["CatalogLoaded"]);
    }

    #[tokio::test]
    async fn test_category_failure_keeps_books() {
        let mut books = MockBookRepository::new();
        books
            .expect_list_all()
            .returning(|| Ok(vec![stored("1", "BO-0001", 4)]));

        let mut categories = MockCategoryRepository::new();
        categories.expect_list_all().returning(|| {
            Err(AppError::ApiStatus {
                status: 500,
                url: "http://localhost:3001/categories".to_string(),
            })
        });

        let (service, bus) = service(books, categories);
        let load = service.load_catalog().await;

        assert_eq!(load.books.unwrap().len(), 1);
        assert!(load.categories.unwrap_err().is_network());
        assert_eq!(event_types(&bus), vec!["CatalogLoadFailed"]);
    }
}
