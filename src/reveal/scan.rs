use crate::{
    config::MotionConfig,
    document::host::Document,
    foundation::core::ElementId,
    reveal::spec::{RevealSpec, RevealStyle, StaggerGroup},
};

pub const ANIMATE_ATTR: &str = "data-scroll-animate";
pub const DELAY_ATTR: &str = "data-scroll-delay"; // milliseconds
pub const DURATION_ATTR: &str = "data-scroll-duration"; // milliseconds
pub const STAGGER_ATTR: &str = "data-stagger-delay"; // seconds

/// Collects every reveal annotation under `root` (whole document for `None`), in document order.
///
/// Malformed or out-of-range timing attributes fall back to the configured defaults. A stagger
/// parent without children yields no spec.
#[tracing::instrument(skip(doc, config))]
pub fn scan<D>(doc: &D, root: Option<ElementId>, config: &MotionConfig) -> Vec<RevealSpec>
where
    D: Document + ?Sized,
{
    let mut specs = Vec::new();
    for el in doc.descendants(root) {
        let Some(tag) = doc.attribute(el, ANIMATE_ATTR) else {
            continue;
        };
        let Some(style) = RevealStyle::from_tag(&tag) else {
            tracing::trace!(element = %el, tag = %tag, "unknown reveal style");
            continue;
        };

        let delay = read_number(doc, el, DELAY_ATTR)
            .map(|ms| (ms / 1000.0).max(0.0))
            .unwrap_or(0.0);

        let spec = if style == RevealStyle::Stagger {
            let members = doc.children(el);
            if members.is_empty() {
                tracing::debug!(element = %el, "stagger parent has no children");
                continue;
            }
            let increment = read_number(doc, el, STAGGER_ATTR)
                .filter(|s| *s >= 0.0)
                .unwrap_or(config.default_stagger);
            RevealSpec {
                element: el,
                style,
                delay,
                duration: config.default_duration,
                stagger: Some(StaggerGroup { members, increment }),
            }
        } else {
            let duration = read_number(doc, el, DURATION_ATTR)
                .map(|ms| ms / 1000.0)
                .filter(|s| *s > 0.0)
                .unwrap_or(config.default_duration);
            RevealSpec {
                element: el,
                style,
                delay,
                duration,
                stagger: None,
            }
        };
        specs.push(spec);
    }

    tracing::debug!(count = specs.len(), "scanned reveal annotations");
    specs
}

fn read_number<D>(doc: &D, el: ElementId, attr: &str) -> Option<f64>
where
    D: Document + ?Sized,
{
    doc.attribute(el, attr)
        .as_deref()
        .and_then(parse_number_prefix)
}

/// Lenient number parsing: the longest finite numeric prefix after leading whitespace, so
/// `"200ms"` reads as `200`.
pub(crate) fn parse_number_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-')))
        .unwrap_or(s.len());
    let s = &s[..end];
    (1..=s.len())
        .rev()
        .find_map(|n| s[..n].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/scan.rs"]
mod tests;
