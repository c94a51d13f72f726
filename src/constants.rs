// Garden-wide tuning constants. Entity motion constants live next to the
// entity that uses them.

// Per-frame spawn chances while the garden is running
pub const HEART_SPAWN_CHANCE: f64 = 0.08;
pub const BUTTERFLY_SPAWN_CHANCE: f64 = 0.01;

// Hearts and butterflies are dropped once opacity falls to this value
pub const FADE_REMOVAL_THRESHOLD: f64 = 0.05;

// Initial flower bed seeded by the trigger click
pub const FLOWER_COUNT: usize = 5;
pub const FLOWER_JITTER_X: f64 = 50.0; // +/- px around each evenly spaced slot
pub const FLOWER_BASE_LIFT_MIN: f64 = 50.0; // px above the bottom edge
pub const FLOWER_BASE_LIFT_MAX: f64 = 100.0;
pub const FLOWER_STEM_MIN_FRACTION: f64 = 0.4; // of viewport height
pub const FLOWER_STEM_MAX_FRACTION: f64 = 0.7;
pub const FLOWER_BLOOM_MIN: f64 = 30.0;
pub const FLOWER_BLOOM_MAX: f64 = 60.0;

// Palette ranges (HSL hue degrees / RGB channels)
pub const PETAL_HUE_MIN: f64 = 300.0;
pub const PETAL_HUE_MAX: f64 = 350.0;
pub const STEM_HUE_MIN: f64 = 80.0;
pub const STEM_HUE_MAX: f64 = 140.0;
pub const HEART_GREEN_MIN: u8 = 100;
pub const HEART_GREEN_MAX: u8 = 150;
pub const HEART_BLUE_MIN: u8 = 150;
pub const HEART_BLUE_MAX: u8 = 200;

pub const HEART_SIZE_MIN: f64 = 10.0;
pub const HEART_SIZE_MAX: f64 = 25.0;

// Running frames between population summaries in the log
pub const STATS_LOG_INTERVAL: u64 = 600;
