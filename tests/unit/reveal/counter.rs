use super::*;
use crate::document::page::{Page, PageElement};
use crate::foundation::core::Rect;

fn setup() -> (Page, Viewport) {
    let page = Page::new(vec![PageElement::new(
        7,
        Rect::new(0.0, 1000.0, 200.0, 1100.0),
    )])
    .unwrap();
    (page, Viewport::new(1280.0, 800.0))
}

#[test]
fn counts_up_once_the_start_line_is_crossed() {
    let (mut page, vp) = setup();
    let mut c = CountUp::new(&page, ElementId(7), 250.0, 2.0, vp, 0.85).unwrap();
    assert!(!c.has_fired());
    c.tick(&mut page, 0.5);
    assert_eq!(page.text(ElementId(7)), Some(""));

    c.on_scroll(vp.scrolled_to(400.0));
    assert!(c.is_running());
    c.tick(&mut page, 1.0);
    let mid: i64 = page.text(ElementId(7)).unwrap().parse().unwrap();
    assert!(mid > 125 && mid < 250);
    c.tick(&mut page, 1.5);
    assert_eq!(page.text(ElementId(7)), Some("250"));
    assert!(!c.is_running());
}

#[test]
fn never_replays_after_scrolling_back() {
    let (mut page, vp) = setup();
    let mut c = CountUp::new(&page, ElementId(7), 10.0, 1.0, vp.scrolled_to(400.0), 0.85).unwrap();
    c.tick(&mut page, 2.0);
    c.on_scroll(vp);
    c.on_scroll(vp.scrolled_to(400.0));
    assert!(!c.is_running());
    assert_eq!(page.text(ElementId(7)), Some("10"));
}

#[test]
fn missing_element_yields_none() {
    let (page, vp) = setup();
    assert!(CountUp::new(&page, ElementId(8), 1.0, 1.0, vp, 0.85).is_none());
}
