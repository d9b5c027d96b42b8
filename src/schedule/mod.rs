pub mod driver;
pub mod timers;
