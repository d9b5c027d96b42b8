pub mod counter;
pub mod lifecycle;
pub mod parallax;
pub mod scan;
pub mod spec;
pub mod transition;
pub mod trigger;
