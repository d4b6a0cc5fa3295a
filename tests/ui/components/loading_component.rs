use crate::support::buffer_text;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use swote::constants::LOADING_QUOTES;
use swote::ui::components::LoadingComponent;
use swote::ui::core::Component;

#[test]
fn test_starts_on_a_random_quote() {
    let now = Instant::now();
    let mut rng = StdRng::seed_from_u64(11);
    let loading = LoadingComponent::new(&mut rng, now);

    assert!(loading.index() < LOADING_QUOTES.len());
    assert_eq!(loading.current(), LOADING_QUOTES[loading.index()]);
    assert!(!loading.is_fading());
}

#[test]
fn test_fades_then_advances() {
    let now = Instant::now();
    let mut rng = StdRng::seed_from_u64(11);
    let mut loading = LoadingComponent::new(&mut rng, now);
    let start = loading.index();

    loading.advance(now + Duration::from_secs(9));
    assert!(!loading.is_fading());
    assert_eq!(loading.index(), start);

    loading.advance(now + Duration::from_secs(10));
    assert!(loading.is_fading());
    assert_eq!(loading.index(), start, "the old quote fades out first");

    loading.advance(now + Duration::from_millis(10_400));
    assert!(loading.is_fading());

    loading.advance(now + Duration::from_millis(10_500));
    assert!(!loading.is_fading());
    assert_eq!(loading.index(), (start + 1) % LOADING_QUOTES.len());

    // The next switch is a full interval later
    loading.advance(now + Duration::from_secs(19));
    assert!(!loading.is_fading());
    loading.advance(now + Duration::from_millis(20_500));
    assert!(loading.is_fading());
}

#[test]
fn test_render() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut loading = LoadingComponent::new(&mut rng, Instant::now());
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();

    terminal.draw(|f| loading.render(f, f.area())).unwrap();

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Loading books..."));
    assert!(text.contains(loading.current().1));
}
