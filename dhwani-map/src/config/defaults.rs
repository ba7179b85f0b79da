//! Default value functions for serde deserialization.

pub fn grid_size() -> usize {
    160
}

pub fn cell_size() -> f32 {
    100.0
}

pub fn origin_bias() -> i32 {
    1
}

pub fn distance_threshold() -> f32 {
    10.0
}

pub fn angular_spread_deg() -> f32 {
    12.0
}

pub fn obstacle_surface() -> f32 {
    1.0
}

pub fn obstacle_flank() -> f32 {
    0.8
}

pub fn empty_near() -> f32 {
    0.5
}

pub fn empty_far() -> f32 {
    1.0
}
