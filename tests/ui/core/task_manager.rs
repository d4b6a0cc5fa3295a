use crate::support::{books, FakeBookSource, FakeColorExtractor};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use swote::cover_colors::{ColorError, ColorExtractor};
use swote::ui::core::{Action, TaskManager};
use swote::utils::color::Rgb;

struct BrokenExtractor;

#[async_trait]
impl ColorExtractor for BrokenExtractor {
    async fn edge_color(&self, _cover_ref: &str) -> Result<Rgb, ColorError> {
        Err(ColorError::Decode("not an image".to_string()))
    }
}

async fn wait_for_cleanup(manager: &mut TaskManager) -> Vec<String> {
    for _ in 0..200 {
        let finished = manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            return finished.into_iter().map(|(_, description)| description).collect();
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("task never finished");
}

#[tokio::test]
async fn test_book_fetch_success() {
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_book_fetch(Arc::new(FakeBookSource(Ok(books(3)))));
    assert_eq!(manager.task_count(), 1);

    match rx.recv().await {
        Some(Action::BooksLoaded(books)) => assert_eq!(books.len(), 3),
        other => panic!("expected BooksLoaded, got {:?}", other),
    }

    let finished = wait_for_cleanup(&mut manager).await;
    assert_eq!(finished, vec!["Fetching books".to_string()]);
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_book_fetch_failure() {
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_book_fetch(Arc::new(FakeBookSource(Err("connection refused".to_string()))));

    match rx.recv().await {
        Some(Action::BooksFailed(message)) => assert!(message.contains("connection refused")),
        other => panic!("expected BooksFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_color_extraction() {
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_color_extraction(
        Arc::new(FakeColorExtractor(Rgb::new(9, 8, 7))),
        "https://covers.example/a.jpg".to_string(),
    );

    match rx.recv().await {
        Some(Action::EdgeColorResolved { cover_ref, color }) => {
            assert_eq!(cover_ref, "https://covers.example/a.jpg");
            assert_eq!(color, Rgb::new(9, 8, 7));
        }
        other => panic!("expected EdgeColorResolved, got {:?}", other),
    }
}

#[tokio::test]
async fn test_color_extraction_failure_uses_fallback() {
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_color_extraction(Arc::new(BrokenExtractor), "broken".to_string());

    match rx.recv().await {
        Some(Action::EdgeColorResolved { color, .. }) => assert_eq!(color, Rgb::fallback()),
        other => panic!("expected EdgeColorResolved, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, _rx) = TaskManager::new();

    manager.spawn_book_fetch(Arc::new(FakeBookSource(Ok(Vec::new()))));
    manager.spawn_color_extraction(Arc::new(BrokenExtractor), "x".to_string());
    assert_eq!(manager.task_count(), 2);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
}
