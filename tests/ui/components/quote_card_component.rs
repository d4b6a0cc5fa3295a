use crate::support::{mouse, row_text, saved};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use std::time::{Duration, Instant};
use swote::gesture::{CellScale, PointerEventKind};
use swote::ui::components::quote_card_component::{font_modifier, wrap_lines};
use swote::ui::components::{ControlPhase, QuoteCardComponent};
use swote::ui::core::Action;
use swote::utils::color::Rgb;

fn card() -> QuoteCardComponent {
    QuoteCardComponent::new(saved("walden", "Simplify, simplify.", 1000))
}

fn drag_left(card: &mut QuoteCardComponent, dx: f32, now: Instant) {
    card.handle_pointer(&mouse(PointerEventKind::Down, 400.0, 50.0), now);
    card.handle_pointer(&mouse(PointerEventKind::Move, 400.0 - dx, 52.0), now);
}

#[test]
fn test_wrap_lines() {
    assert_eq!(wrap_lines("one two three", 7), vec!["one two", "three"]);
    assert_eq!(wrap_lines("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    assert_eq!(wrap_lines("first\nsecond", 20), vec!["first", "second"]);
    assert_eq!(wrap_lines("", 10), vec![""]);
}

#[test]
fn test_font_modifier() {
    assert_eq!(font_modifier(12), Modifier::DIM);
    assert_eq!(font_modifier(13), Modifier::DIM);
    assert_eq!(font_modifier(14), Modifier::empty());
    assert_eq!(font_modifier(16), Modifier::empty());
    assert_eq!(font_modifier(17), Modifier::BOLD);
    assert_eq!(font_modifier(20), Modifier::BOLD);
}

#[test]
fn test_short_swipe_snaps_back() {
    let mut card = card();
    let now = Instant::now();

    drag_left(&mut card, 40.0, now);
    assert_eq!(card.offset_x(), -40.0);
    assert_eq!(card.delete_intensity(), 0.5);
    assert_eq!(card.phase(), ControlPhase::Dragging);

    card.handle_pointer(&mouse(PointerEventKind::Up, 360.0, 52.0), now);
    assert_eq!(card.offset_x(), 0.0);
    assert_eq!(card.phase(), ControlPhase::Idle);
    assert!(card.tick(now + Duration::from_secs(1)).is_none());
}

#[test]
fn test_rightward_drag_does_not_move() {
    let mut card = card();
    let now = Instant::now();

    card.handle_pointer(&mouse(PointerEventKind::Down, 400.0, 50.0), now);
    card.handle_pointer(&mouse(PointerEventKind::Move, 500.0, 50.0), now);
    assert_eq!(card.offset_x(), 0.0);
    assert_eq!(card.delete_intensity(), 0.0);
}

#[test]
fn test_intensity_caps_at_threshold() {
    let mut card = card();
    drag_left(&mut card, 160.0, Instant::now());
    assert_eq!(card.delete_intensity(), 1.0);
}

#[test]
fn test_left_swipe_deletes_after_animation() {
    let mut card = card();
    let now = Instant::now();

    drag_left(&mut card, 100.0, now);
    card.handle_pointer(&mouse(PointerEventKind::Up, 300.0, 52.0), now);

    assert!(card.phase().is_animating());
    assert_eq!(card.offset_x(), -400.0);

    // Nothing is emitted until the animation ends
    assert!(card.tick(now + Duration::from_millis(150)).is_none());
    assert!(!card.is_removed());

    match card.tick(now + Duration::from_millis(200)) {
        Action::DeleteQuote(id) => assert_eq!(id, "walden-1000"),
        other => panic!("expected DeleteQuote, got {:?}", other),
    }
    assert!(card.is_removed());

    // Exactly once
    assert!(card.tick(now + Duration::from_millis(400)).is_none());
}

#[test]
fn test_pointer_ignored_while_animating() {
    let mut card = card();
    let now = Instant::now();

    card.request_delete(now);
    assert!(card.phase().is_animating());

    card.handle_pointer(&mouse(PointerEventKind::Down, 400.0, 50.0), now);
    card.handle_pointer(&mouse(PointerEventKind::Move, 450.0, 50.0), now);
    assert_eq!(card.offset_x(), -400.0);
}

#[test]
fn test_cancel_mid_drag() {
    let mut card = card();
    let now = Instant::now();

    drag_left(&mut card, 200.0, now);
    card.cancel();

    assert_eq!(card.offset_x(), 0.0);
    assert_eq!(card.phase(), ControlPhase::Idle);
}

#[test]
fn test_height_and_render() {
    let card = card();
    // Borders, one quote line, a blank line and the attribution
    assert_eq!(card.height(40), 5);

    let area = Rect::new(0, 0, 40, 5);
    let mut buf = Buffer::empty(area);
    card.render(&mut buf, area, 14, Rgb::new(240, 240, 240), CellScale::default());

    assert!(row_text(&buf, 1).contains("Simplify, simplify."));
    assert!(row_text(&buf, 3).contains("Author walden"));
}

#[test]
fn test_render_shows_delete_affordance() {
    let mut card = card();
    drag_left(&mut card, 100.0, Instant::now());

    let area = Rect::new(0, 0, 40, 5);
    let mut buf = Buffer::empty(area);
    card.render(&mut buf, area, 14, Rgb::new(240, 240, 240), CellScale::default());

    // 100 units at 8 units per column reveals 12 columns on the right
    assert!(row_text(&buf, 1).contains("Delete"));
}
