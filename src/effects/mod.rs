pub mod particles;
pub mod pulse;
pub mod tilt;
