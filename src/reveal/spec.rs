use crate::foundation::core::ElementId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealStyle {
    FadeUp,
    FadeIn,
    SlideLeft,
    SlideRight,
    Scale,
    Stagger,
}

impl RevealStyle {
    pub const ALL: [Self; 6] = [
        Self::FadeUp,
        Self::FadeIn,
        Self::SlideLeft,
        Self::SlideRight,
        Self::Scale,
        Self::Stagger,
    ];

    /// Markup tag, as written in `data-scroll-animate`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::FadeUp => "fade-up",
            Self::FadeIn => "fade-in",
            Self::SlideLeft => "slide-left",
            Self::SlideRight => "slide-right",
            Self::Scale => "scale",
            Self::Stagger => "stagger",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.tag() == tag.trim())
    }
}

/// Members of a stagger parent and the per-index delay step between them.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StaggerGroup {
    pub members: Vec<ElementId>, // document order
    pub increment: f64,          // seconds
}

impl StaggerGroup {
    pub fn member_offset(&self, index: usize) -> f64 {
        index as f64 * self.increment
    }
}

/// One annotated element, resolved at scan time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealSpec {
    pub element: ElementId,
    pub style: RevealStyle,
    pub delay: f64,    // seconds, >= 0
    pub duration: f64, // seconds, > 0
    pub stagger: Option<StaggerGroup>,
}

impl RevealSpec {
    /// Elements this spec animates, paired with their forward-play delay.
    ///
    /// For a stagger parent these are its members; otherwise the element itself.
    pub fn targets(&self) -> Vec<(ElementId, f64)> {
        match &self.stagger {
            Some(group) => group
                .members
                .iter()
                .enumerate()
                .map(|(i, &el)| (el, self.delay + group.member_offset(i)))
                .collect(),
            None => vec![(self.element, self.delay)],
        }
    }
}
