use super::*;
use crate::animation::visual::VisualState;
use crate::document::page::{Page, PageElement};
use crate::foundation::core::Rect;
use crate::reveal::scan::ANIMATE_ATTR;
use crate::schedule::driver::FrameEffect;

fn section(id: u64, y: f64, style: &str) -> PageElement {
    PageElement::new(id, Rect::new(0.0, y, 1280.0, y + 400.0)).attr(ANIMATE_ATTR, style)
}

fn landing() -> Page {
    Page::new(vec![
        section(1, 100.0, "fade-in"),
        section(2, 1000.0, "fade-up"),
        section(3, 1600.0, "stagger")
            .child(PageElement::new(31, Rect::new(0.0, 1600.0, 400.0, 1800.0)))
            .child(PageElement::new(32, Rect::new(400.0, 1600.0, 800.0, 1800.0))),
        section(4, 2400.0, "slide-left"),
        section(5, 3000.0, "scale"),
        PageElement::new(6, Rect::new(0.0, 3600.0, 1280.0, 3800.0)),
    ])
    .unwrap()
}

fn animator() -> ScrollAnimator {
    ScrollAnimator::new(MotionConfig::default(), Viewport::new(1280.0, 800.0)).unwrap()
}

fn frames(anim: &mut ScrollAnimator, page: &mut Page, secs: f64) {
    for _ in 0..(secs / 0.01).round() as usize {
        anim.advance(page, 0.01);
    }
}

#[test]
fn registration_waits_for_the_settle_delay() {
    let mut page = landing();
    let mut anim = animator();
    anim.initialize();
    frames(&mut anim, &mut page, 0.05);
    assert!(anim.registry().is_empty());
    frames(&mut anim, &mut page, 0.06);
    assert_eq!(anim.registry().len(), 5);
    for id in [1, 2, 3, 4, 5] {
        assert!(anim.registry().state_for(ElementId(id)).is_some(), "#{id}");
    }
    assert!(anim.registry().state_for(ElementId(6)).is_none());
}

#[test]
fn initialize_is_idempotent() {
    let mut page = landing();
    let mut anim = animator();
    anim.initialize();
    anim.initialize();
    frames(&mut anim, &mut page, 0.2);
    assert_eq!(anim.registry().len(), 5);

    anim.initialize();
    assert!(anim.registry().is_empty());
    frames(&mut anim, &mut page, 0.2);
    assert_eq!(anim.registry().len(), 5);
}

#[test]
fn content_already_in_view_starts_revealed() {
    let mut page = landing();
    let mut anim = animator();
    anim.initialize();
    frames(&mut anim, &mut page, 0.11);
    assert!(anim.registry().state_for(ElementId(1)).unwrap().revealed);
    assert_eq!(page.visual(ElementId(1)), Some(VisualState::IDENTITY));
    assert!(!anim.registry().is_animating());
    assert_eq!(page.visual(ElementId(2)).unwrap().opacity, 0.0);
}

#[test]
fn late_refresh_absorbs_layout_shift() {
    let mut page = landing();
    let mut anim = animator();
    anim.initialize();
    frames(&mut anim, &mut page, 0.11);
    anim.on_scroll(&mut page, Viewport::new(1280.0, 800.0).scrolled_to(400.0));
    assert!(anim.registry().state_for(ElementId(2)).unwrap().revealed);

    // An image above the section finishes loading and pushes it down the page.
    page.shift_below(900.0, 1000.0);
    frames(&mut anim, &mut page, 0.6);
    assert!(!anim.registry().state_for(ElementId(2)).unwrap().revealed);
    assert_eq!(anim.pending_timers(), 0);
}

#[test]
fn cleanup_stops_every_mutation() {
    let mut page = landing();
    let mut anim = animator();
    anim.initialize();
    frames(&mut anim, &mut page, 0.2);
    anim.on_scroll(&mut page, Viewport::new(1280.0, 800.0).scrolled_to(2000.0));
    frames(&mut anim, &mut page, 0.1);
    assert!(anim.registry().is_animating());

    anim.cleanup();
    let writes = page.mutation_count();
    for y in [0.0, 1500.0, 3000.0, 0.0] {
        anim.on_scroll(&mut page, Viewport::new(1280.0, 800.0).scrolled_to(y));
        frames(&mut anim, &mut page, 0.3);
    }
    assert_eq!(page.mutation_count(), writes);
    assert!(anim.registry().is_empty());

    anim.cleanup();
    anim.cleanup();
}

#[test]
fn cleanup_cancels_pending_setup() {
    let mut page = landing();
    let mut anim = animator();
    anim.initialize();
    anim.cleanup();
    frames(&mut anim, &mut page, 1.0);
    assert!(anim.registry().is_empty());
    assert_eq!(page.mutation_count(), 0);
}

struct Ticker(u32);

impl FrameEffect for Ticker {
    fn frame(&mut self, _time: f64, _dt: f64) {
        self.0 += 1;
    }
}

#[test]
fn cleanup_disposes_counters_parallax_and_effects() {
    let mut page = landing();
    let mut anim = animator();
    assert!(anim.count_up(&page, ElementId(6), 120.0, None));
    assert!(anim.parallax(&mut page, ElementId(5), 0.3, Scrub::Instant));
    assert!(!anim.parallax(&mut page, ElementId(99), 0.3, Scrub::Instant));
    let ticker = anim.spawn_effect(Ticker(0));
    anim.advance(&mut page, 0.01);
    assert_eq!(ticker.borrow().0, 1);

    anim.cleanup();
    assert!(ticker.is_disposed());
    assert_eq!(anim.active_effects(), 0);
    let writes = page.mutation_count();
    anim.on_scroll(&mut page, Viewport::new(1280.0, 800.0).scrolled_to(3500.0));
    frames(&mut anim, &mut page, 3.0);
    assert_eq!(page.mutation_count(), writes);
    assert_eq!(ticker.borrow().0, 1);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = MotionConfig {
        start_fraction: 0.0,
        ..MotionConfig::default()
    };
    assert!(ScrollAnimator::new(cfg, Viewport::new(1.0, 1.0)).is_err());
}
