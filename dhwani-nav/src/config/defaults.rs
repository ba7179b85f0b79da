//! Default value functions for serde deserialization.

use super::simulation::Rect;

pub fn beam_count() -> usize {
    16
}

pub fn min_valid_range() -> f32 {
    200.0
}

pub fn max_valid_range() -> f32 {
    4500.0
}

pub fn near_threshold() -> f32 {
    800.0
}

pub fn turn_rate() -> f32 {
    20.0
}

pub fn cruise_speed() -> f32 {
    300.0
}

pub fn reverse_speed() -> f32 {
    -100.0
}

pub fn slowdown_offset() -> f32 {
    200.0
}

pub fn slowdown_divisor() -> f32 {
    6.0
}

pub fn left_beams() -> Vec<usize> {
    vec![0]
}

pub fn front_left_beams() -> Vec<usize> {
    vec![1, 2]
}

pub fn front_beams() -> Vec<usize> {
    vec![3, 4]
}

pub fn front_right_beams() -> Vec<usize> {
    vec![5, 6]
}

pub fn right_beams() -> Vec<usize> {
    vec![7]
}

pub fn start_offset() -> f32 {
    8000.0
}

pub fn max_cycles() -> u64 {
    300_000
}

pub fn map_path() -> String {
    "robot_map.dat".to_string()
}

pub fn field_width() -> usize {
    4
}

pub fn log_level() -> String {
    "info".to_string()
}

pub fn room() -> Rect {
    Rect::new(-4000.0, -3000.0, 4000.0, 3000.0)
}

pub fn obstacles() -> Vec<Rect> {
    vec![
        Rect::new(1500.0, -800.0, 2300.0, 400.0),
        Rect::new(-2600.0, 1200.0, -1400.0, 2000.0),
    ]
}

pub fn seed() -> u64 {
    42
}

pub fn robot_radius() -> f32 {
    250.0
}

pub fn sonar_max_range() -> f32 {
    5000.0
}

pub fn no_echo_range() -> f32 {
    5000.0
}

pub fn range_noise_stddev() -> f32 {
    15.0
}

pub fn dropout_rate() -> f32 {
    0.01
}

pub fn time_step() -> f32 {
    0.1
}

pub fn max_rotation_rate() -> f32 {
    100.0
}

pub fn sonar_angles() -> Vec<f32> {
    vec![
        90.0, 50.0, 30.0, 10.0, -10.0, -30.0, -50.0, -90.0, -90.0, -130.0, -150.0, -170.0, 170.0,
        150.0, 130.0, 90.0,
    ]
}
