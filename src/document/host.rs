use crate::{
    animation::visual::VisualState,
    foundation::core::{ElementId, Rect},
};

/// The host document as seen by the motion engine.
///
/// Reads are used by the scan and by trigger registration/refresh. Writes only ever target the
/// element a trigger or effect owns. An element that has been removed reports `None` from
/// [`Document::bounds`]; the engine treats that as "skip", never as an error.
pub trait Document {
    /// All elements below `root` (or the whole document for `None`) in document order,
    /// excluding `root` itself.
    fn descendants(&self, root: Option<ElementId>) -> Vec<ElementId>;

    /// Direct children of `el` in document order.
    fn children(&self, el: ElementId) -> Vec<ElementId>;

    fn attribute(&self, el: ElementId, name: &str) -> Option<String>;

    /// Layout box in document coordinates, or `None` when the element is gone.
    fn bounds(&self, el: ElementId) -> Option<Rect>;

    fn contains(&self, el: ElementId) -> bool {
        self.bounds(el).is_some()
    }

    fn apply_visual(&mut self, el: ElementId, state: VisualState);

    fn set_text(&mut self, el: ElementId, text: &str);
}
