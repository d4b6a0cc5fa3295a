use std::time::Duration;
use swote::constants::MIN_FRAME_INTERVAL;
use swote::ui::core::EventHandler;

#[tokio::test]
async fn test_event_handler_creation() {
    let mut event_handler = EventHandler::with_tick_rate(Duration::from_millis(5));
    event_handler.mark_rendered();

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(event_handler.time_since_last_render() >= Duration::from_millis(10));

    event_handler.mark_rendered();
    assert!(event_handler.time_since_last_render() < Duration::from_millis(10));
}

#[tokio::test]
async fn test_frame_rate_cap() {
    let mut event_handler = EventHandler::new();
    event_handler.mark_rendered();
    assert!(!event_handler.should_render());

    tokio::time::sleep(MIN_FRAME_INTERVAL + Duration::from_millis(4)).await;
    assert!(event_handler.should_render());

    event_handler.mark_rendered();
    assert!(!event_handler.should_render());
}
