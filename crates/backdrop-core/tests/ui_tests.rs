// Menu, cursor follower, scroll reveal and anchor helpers.

use backdrop_core::*;
use glam::Vec2;

#[test]
fn menu_toggles_once_per_click() {
    let s = MenuState::default();
    assert_eq!(s, MenuState::Closed);
    let s = s.toggled();
    assert!(s.is_open());
    let s = s.toggled();
    assert!(!s.is_open());

    let mut s = MenuState::Closed;
    for click in 1..=7 {
        s = s.toggled();
        assert_eq!(s.is_open(), click % 2 == 1);
    }
}

#[test]
fn choosing_a_link_always_closes_the_menu() {
    assert_eq!(MenuState::Open.closed(), MenuState::Closed);
    assert_eq!(MenuState::Closed.closed(), MenuState::Closed);
}

#[test]
fn dot_tracks_pointer_and_ring_eases_after_it() {
    let mut c = CursorFollower::default();
    let dot = c.pointer_moved(200.0, 100.0);
    assert_eq!(dot, Vec2::new(200.0, 100.0));

    let first = c.step();
    assert!((first - Vec2::new(30.0, 15.0)).length() < 1e-4);

    let mut gap = (c.pointer - c.ring).length();
    for _ in 0..40 {
        c.step();
        let g = (c.pointer - c.ring).length();
        assert!(g < gap);
        gap = g;
    }
    assert!(gap < 1.0);
}

#[test]
fn reveal_happens_once_and_never_reverts() {
    let mut t = RevealTracker::new();
    t.observe(1);
    t.observe(2);
    assert_eq!(t.pending(), 2);

    assert!(!t.intersected(1, false));
    assert_eq!(t.pending(), 2);

    assert!(t.intersected(1, true));
    assert_eq!(t.pending(), 1);
    assert!(!t.intersected(1, true));
    assert!(!t.intersected(1, false));
    assert_eq!(t.pending(), 1);

    // re-observing a revealed element does not hide it again
    t.observe(1);
    assert!(!t.intersected(1, true));
    assert_eq!(t.pending(), 1);

    assert!(t.intersected(2, true));
    assert_eq!(t.pending(), 0);
}

#[test]
fn unobserved_elements_are_ignored() {
    let mut t = RevealTracker::new();
    assert!(!t.intersected(9, true));
    assert_eq!(t.pending(), 0);
}

#[test]
fn anchor_selector_skips_bare_hash_and_external_links() {
    assert_eq!(anchor_selector("#projects"), Some("#projects"));
    assert_eq!(anchor_selector(" #about "), Some("#about"));
    assert_eq!(anchor_selector("#"), None);
    assert_eq!(anchor_selector("https://example.com/#x"), None);
    assert_eq!(anchor_selector(""), None);
}

#[test]
fn fragment_clicks_never_fall_through_to_navigation() {
    let bare = anchor_click(Some("#"));
    assert!(bare.prevent_default);
    assert_eq!(bare.scroll_to, None);

    // the target may not exist; the click is still handled in-page
    let missing = anchor_click(Some("#missing"));
    assert!(missing.prevent_default);
    assert_eq!(missing.scroll_to, Some("#missing"));

    let about = anchor_click(Some("#about"));
    assert!(about.prevent_default);
    assert_eq!(about.scroll_to, Some("#about"));
}

#[test]
fn other_links_keep_default_navigation() {
    for href in [None, Some(""), Some("/cv.pdf"), Some("https://example.com/#x")] {
        let click = anchor_click(href);
        assert!(!click.prevent_default, "{href:?}");
        assert_eq!(click.scroll_to, None);
    }
}

#[test]
fn pointer_readings_are_relative_to_viewport() {
    let mut input = InputState::new(Viewport::new(800.0, 600.0));
    input.pointer_moved(400.0, 300.0);
    assert_eq!(input.offset, Vec2::ZERO);
    assert_eq!(input.cursor_ndc, Vec2::ZERO);

    input.pointer_moved(0.0, 0.0);
    assert_eq!(input.offset, Vec2::new(-400.0, -300.0));
    assert_eq!(input.cursor_ndc, Vec2::new(-1.0, 1.0));

    // malformed events leave the last reading in place
    input.pointer_moved(f32::NAN, 10.0);
    assert_eq!(input.offset, Vec2::new(-400.0, -300.0));
    input.scrolled(f32::NAN);
    assert_eq!(input.scroll, 0.0);
    input.scrolled(125.0);
    assert_eq!(input.scroll, 125.0);
}

#[test]
fn resize_moves_the_viewport_centre() {
    let mut input = InputState::new(Viewport::new(800.0, 600.0));
    assert!(input.resized(Viewport::new(1000.0, 500.0)));
    input.pointer_moved(500.0, 250.0);
    assert_eq!(input.offset, Vec2::ZERO);
    assert!(!input.resized(Viewport::new(0.0, 500.0)));
    assert_eq!(input.viewport, Viewport::new(1000.0, 500.0));
}
