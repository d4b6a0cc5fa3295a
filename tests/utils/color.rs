use ratatui::style::Color;
use swote::utils::color::{contrast_text_color, luminance, rgb_to_hex, Rgb};

#[test]
fn test_rgb_to_hex() {
    assert_eq!(rgb_to_hex(Rgb::new(255, 0, 16)), "#ff0010");
    assert_eq!(rgb_to_hex(Rgb::fallback()), "#646464");
}

#[test]
fn test_contrast_text_color() {
    assert_eq!(contrast_text_color(Rgb::new(255, 255, 255)), Color::Black);
    assert_eq!(contrast_text_color(Rgb::new(250, 220, 120)), Color::Black);
    assert_eq!(contrast_text_color(Rgb::new(0, 0, 0)), Color::White);
    assert_eq!(contrast_text_color(Rgb::new(20, 40, 90)), Color::White);
}

#[test]
fn test_luminance_bounds() {
    assert!(luminance(Rgb::new(0, 0, 0)).abs() < 1e-9);
    assert!((luminance(Rgb::new(255, 255, 255)) - 1.0).abs() < 1e-9);
}

#[test]
fn test_lerp() {
    let from = Rgb::new(0, 100, 200);
    let to = Rgb::new(200, 100, 0);

    assert_eq!(from.lerp(to, 0.0), from);
    assert_eq!(from.lerp(to, 1.0), to);
    assert_eq!(from.lerp(to, 0.5), Rgb::new(100, 100, 100));
    // Out-of-range factors are clamped
    assert_eq!(from.lerp(to, 3.0), to);
    assert_eq!(from.lerp(to, -1.0), from);
}

#[test]
fn test_into_ratatui_color() {
    assert_eq!(Color::from(Rgb::new(1, 2, 3)), Color::Rgb(1, 2, 3));
}
