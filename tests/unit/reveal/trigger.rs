use super::*;
use crate::document::page::{Page, PageElement};
use crate::reveal::spec::{RevealStyle, StaggerGroup};

const VP: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
    scroll_y: 0.0,
};

fn spec(id: u64, style: RevealStyle) -> RevealSpec {
    RevealSpec {
        element: ElementId(id),
        style,
        delay: 0.0,
        duration: 0.5,
        stagger: None,
    }
}

fn page() -> Page {
    Page::new(vec![
        // top at 100: already past the start line at scroll 0
        PageElement::new(1, Rect::new(0.0, 100.0, 400.0, 300.0)),
        // start line crossed at scroll 1000 - 680 = 320
        PageElement::new(2, Rect::new(0.0, 1000.0, 400.0, 1200.0)),
        PageElement::new(3, Rect::new(0.0, 1000.0, 400.0, 1400.0))
            .child(PageElement::new(31, Rect::new(0.0, 1000.0, 400.0, 1100.0)))
            .child(PageElement::new(32, Rect::new(0.0, 1100.0, 400.0, 1200.0)))
            .child(PageElement::new(33, Rect::new(0.0, 1200.0, 400.0, 1300.0))),
    ])
    .unwrap()
}

fn run_for(reg: &mut TriggerRegistry, page: &mut Page, secs: f64) {
    let steps = (secs / 0.01).round() as usize;
    for _ in 0..steps {
        reg.tick(page, 0.01);
    }
}

#[test]
fn zone_uses_start_line_and_viewport_bottom() {
    let line = ThresholdLine::measure(Rect::new(0.0, 1000.0, 10.0, 1100.0), VP, 0.85);
    assert_eq!(line.zone(VP.scrolled_to(319.0)), Zone::BelowThreshold);
    assert_eq!(line.zone(VP.scrolled_to(320.0)), Zone::AboveThreshold);
    assert_eq!(line.zone(VP.scrolled_to(5000.0)), Zone::AboveThreshold);
    assert_eq!(line.zone(VP), Zone::BelowThreshold);
}

#[test]
fn initial_state_is_applied_without_animation() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    let a = reg
        .register(&mut page, spec(1, RevealStyle::FadeUp), VP)
        .unwrap()
        .unwrap();
    let b = reg
        .register(&mut page, spec(2, RevealStyle::FadeUp), VP)
        .unwrap()
        .unwrap();

    assert!(reg.state(a).unwrap().revealed);
    assert!(!reg.state(b).unwrap().revealed);
    assert_eq!(page.visual(ElementId(1)), Some(VisualState::IDENTITY));
    assert_eq!(
        page.visual(ElementId(2)),
        Some(Transition::for_style(RevealStyle::FadeUp).from)
    );
    assert!(!reg.is_animating());
}

#[test]
fn crossing_plays_forward_and_back() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    reg.register(&mut page, spec(2, RevealStyle::SlideLeft), VP)
        .unwrap();

    reg.update(&page, VP.scrolled_to(400.0));
    assert!(reg.state_for(ElementId(2)).unwrap().revealed);
    assert!(reg.is_animating());
    run_for(&mut reg, &mut page, 0.25);
    let mid = page.visual(ElementId(2)).unwrap();
    assert!(mid.translate.x > 0.0 && mid.translate.x < 80.0);
    run_for(&mut reg, &mut page, 0.3);
    assert_eq!(page.visual(ElementId(2)), Some(VisualState::IDENTITY));
    assert!(!reg.is_animating());

    reg.update(&page, VP.scrolled_to(0.0));
    assert!(!reg.state_for(ElementId(2)).unwrap().revealed);
    run_for(&mut reg, &mut page, 0.6);
    assert_eq!(
        page.visual(ElementId(2)),
        Some(Transition::for_style(RevealStyle::SlideLeft).from)
    );
}

#[test]
fn scrolling_past_the_element_does_not_hide_it() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    reg.register(&mut page, spec(2, RevealStyle::FadeIn), VP)
        .unwrap();
    reg.update(&page, VP.scrolled_to(400.0));
    reg.update(&page, VP.scrolled_to(3000.0));
    assert!(reg.state_for(ElementId(2)).unwrap().revealed);
}

#[test]
fn every_re_entry_replays_the_full_transition() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    reg.register(&mut page, spec(2, RevealStyle::FadeUp), VP)
        .unwrap();

    let mut samples = Vec::new();
    for _ in 0..3 {
        reg.update(&page, VP.scrolled_to(400.0));
        run_for(&mut reg, &mut page, 0.1);
        samples.push(page.visual(ElementId(2)).unwrap());
        run_for(&mut reg, &mut page, 0.5);
        assert_eq!(page.visual(ElementId(2)), Some(VisualState::IDENTITY));

        reg.update(&page, VP.scrolled_to(0.0));
        run_for(&mut reg, &mut page, 0.6);
    }
    assert!(samples[0].distance(&samples[1]) < 1e-9);
    assert!(samples[0].distance(&samples[2]) < 1e-9);
    assert!(samples[0].opacity < 1.0);
}

#[test]
fn reversal_mid_flight_starts_from_current_value() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    reg.register(&mut page, spec(2, RevealStyle::FadeUp), VP)
        .unwrap();
    reg.update(&page, VP.scrolled_to(400.0));
    run_for(&mut reg, &mut page, 0.2);
    let before = page.visual(ElementId(2)).unwrap();

    reg.update(&page, VP.scrolled_to(0.0));
    reg.tick(&mut page, 0.0);
    let after = page.visual(ElementId(2)).unwrap();
    assert!(before.distance(&after) < 1e-9);

    // 40% of the path was covered, so unwinding takes 40% of the duration.
    run_for(&mut reg, &mut page, 0.19);
    assert!(reg.is_animating());
    run_for(&mut reg, &mut page, 0.02);
    assert!(!reg.is_animating());
    assert_eq!(
        page.visual(ElementId(2)),
        Some(Transition::for_style(RevealStyle::FadeUp).from)
    );
}

#[test]
fn stagger_members_start_in_order_and_unwind_in_reverse() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    let s = RevealSpec {
        element: ElementId(3),
        style: RevealStyle::Stagger,
        delay: 0.0,
        duration: 0.5,
        stagger: Some(StaggerGroup {
            members: vec![ElementId(31), ElementId(32), ElementId(33)],
            increment: 0.1,
        }),
    };
    assert_eq!(
        s.targets().iter().map(|t| t.1).collect::<Vec<_>>(),
        vec![0.0, 0.1, 0.2]
    );
    reg.register(&mut page, s, VP).unwrap();
    assert_eq!(page.visual(ElementId(3)), None);

    reg.update(&page, VP.scrolled_to(400.0));
    run_for(&mut reg, &mut page, 0.15);
    let o = |p: &Page, id| p.visual(ElementId(id)).unwrap().opacity;
    assert!(o(&page, 31) > o(&page, 32));
    assert!(o(&page, 32) > 0.0);
    assert_eq!(o(&page, 33), 0.0);

    run_for(&mut reg, &mut page, 1.0);
    reg.update(&page, VP.scrolled_to(0.0));
    run_for(&mut reg, &mut page, 0.15);
    assert!(o(&page, 33) < o(&page, 32));
    assert_eq!(o(&page, 31), 1.0);
}

fn wide_stagger() -> RevealSpec {
    RevealSpec {
        element: ElementId(3),
        style: RevealStyle::Stagger,
        delay: 0.0,
        duration: 0.5,
        stagger: Some(StaggerGroup {
            members: vec![ElementId(31), ElementId(32), ElementId(33)],
            increment: 0.5,
        }),
    }
}

#[test]
fn stagger_member_in_flight_turns_back_at_once() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    reg.register(&mut page, wide_stagger(), VP).unwrap();
    let o = |p: &Page, id| p.visual(ElementId(id)).unwrap().opacity;

    reg.update(&page, VP.scrolled_to(400.0));
    run_for(&mut reg, &mut page, 0.2);
    let at_flip = o(&page, 31);
    assert!(at_flip > 0.0 && at_flip < 1.0);
    assert_eq!(o(&page, 32), 0.0);

    reg.update(&page, VP.scrolled_to(0.0));
    run_for(&mut reg, &mut page, 0.05);
    let unwinding = o(&page, 31);
    assert!(unwinding < at_flip, "{unwinding} vs {at_flip}");

    // 40% of the path was covered: back to hidden in 40% of the duration.
    run_for(&mut reg, &mut page, 0.2);
    assert_eq!(o(&page, 31), 0.0);
    assert!(!reg.is_animating());
}

#[test]
fn replay_during_unwind_resumes_members_already_moving() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    reg.register(&mut page, wide_stagger(), VP).unwrap();
    let o = |p: &Page, id| p.visual(ElementId(id)).unwrap().opacity;

    reg.update(&page, VP.scrolled_to(400.0));
    run_for(&mut reg, &mut page, 2.0);
    reg.update(&page, VP.scrolled_to(0.0));
    run_for(&mut reg, &mut page, 0.3);
    let at_flip = o(&page, 33);
    assert!(at_flip > 0.0 && at_flip < 1.0);
    assert_eq!(o(&page, 32), 1.0);

    reg.update(&page, VP.scrolled_to(400.0));
    run_for(&mut reg, &mut page, 0.05);
    assert!(o(&page, 33) > at_flip);
    assert_eq!(o(&page, 31), 1.0);

    run_for(&mut reg, &mut page, 0.3);
    assert_eq!(page.visual(ElementId(33)), Some(VisualState::IDENTITY));
    assert!(!reg.is_animating());
}

#[test]
fn vanished_element_is_skipped_silently() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    reg.register(&mut page, spec(2, RevealStyle::Scale), VP)
        .unwrap();
    page.remove(ElementId(2));
    let writes = page.mutation_count();

    reg.update(&page, VP.scrolled_to(400.0));
    run_for(&mut reg, &mut page, 1.0);
    assert_eq!(page.mutation_count(), writes);
    assert!(!reg.state_for(ElementId(2)).unwrap().revealed);

    assert_eq!(
        reg.register(&mut page, spec(99, RevealStyle::Scale), VP)
            .unwrap(),
        None
    );
}

#[test]
fn second_registration_for_an_element_is_refused() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    reg.register(&mut page, spec(2, RevealStyle::FadeIn), VP)
        .unwrap();
    let err = reg
        .register(&mut page, spec(2, RevealStyle::FadeUp), VP)
        .unwrap_err();
    assert!(err.to_string().contains("already has trigger"));
    assert_eq!(reg.len(), 1);
}

#[test]
fn dispose_all_kills_running_tweens() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    let h = reg
        .register(&mut page, spec(2, RevealStyle::FadeIn), VP)
        .unwrap()
        .unwrap();
    reg.update(&page, VP.scrolled_to(400.0));
    run_for(&mut reg, &mut page, 0.1);

    assert_eq!(reg.dispose_all(), 1);
    assert!(reg.state(h).is_none());
    let writes = page.mutation_count();
    reg.update(&page, VP.scrolled_to(0.0));
    run_for(&mut reg, &mut page, 1.0);
    assert_eq!(page.mutation_count(), writes);
}

#[test]
fn refresh_picks_up_layout_shifts() {
    let mut page = page();
    let mut reg = TriggerRegistry::new(0.85);
    reg.register(&mut page, spec(2, RevealStyle::FadeIn), VP)
        .unwrap();
    let vp = VP.scrolled_to(400.0);

    page.set_bounds(ElementId(2), Rect::new(0.0, 2000.0, 400.0, 2200.0));
    reg.refresh(&page, vp);
    assert!(!reg.state_for(ElementId(2)).unwrap().revealed);

    page.set_bounds(ElementId(2), Rect::new(0.0, 900.0, 400.0, 1100.0));
    reg.refresh(&page, vp);
    assert!(reg.state_for(ElementId(2)).unwrap().revealed);
}
