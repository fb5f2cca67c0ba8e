mod led_strip;
mod random;

pub use led_strip::SmartLedsDriver;
pub use random::seeded_rng;
