//! Rectangular room with box obstacles and ray casting.

use crate::config::{Rect, SimulationSection};

/// Static geometry the simulated robot drives in
#[derive(Clone, Debug)]
pub struct SimWorld {
    room: Rect,
    obstacles: Vec<Rect>,
}

impl SimWorld {
    /// Create a world from a room and its obstacles
    pub fn new(room: Rect, obstacles: Vec<Rect>) -> Self {
        Self { room, obstacles }
    }

    /// World described by a simulation section
    pub fn from_config(section: &SimulationSection) -> Self {
        Self::new(section.room, section.obstacles.clone())
    }

    /// Room walls
    pub fn room(&self) -> &Rect {
        &self.room
    }

    /// Would a disc of `radius` at (x, y) hit a wall or obstacle?
    pub fn collides(&self, x: f32, y: f32, radius: f32) -> bool {
        !self.room.contains(x, y, -radius)
            || self.obstacles.iter().any(|o| o.contains(x, y, radius))
    }

    /// Distance to the first surface along `bearing_deg`, if within `max_range`.
    pub fn ray_cast(&self, x: f32, y: f32, bearing_deg: f32, max_range: f32) -> Option<f32> {
        let (dy, dx) = bearing_deg.to_radians().sin_cos();

        // From inside the room the wall is where the ray leaves it
        let mut nearest = slab(&self.room, x, y, dx, dy)
            .map(|(_, exit)| exit)
            .unwrap_or(f32::INFINITY);

        for obstacle in &self.obstacles {
            if let Some((enter, exit)) = slab(obstacle, x, y, dx, dy)
                && enter >= 0.0
                && exit >= enter
            {
                nearest = nearest.min(enter);
            }
        }

        (nearest <= max_range).then_some(nearest)
    }
}

/// Entry and exit distances of a ray through a rectangle
fn slab(rect: &Rect, ox: f32, oy: f32, dx: f32, dy: f32) -> Option<(f32, f32)> {
    let mut enter = f32::NEG_INFINITY;
    let mut exit = f32::INFINITY;

    for (origin, dir, min, max) in [(ox, dx, rect.min_x, rect.max_x), (oy, dy, rect.min_y, rect.max_y)] {
        if dir.abs() < 1e-9 {
            if origin < min || origin > max {
                return None;
            }
            continue;
        }
        let t1 = (min - origin) / dir;
        let t2 = (max - origin) / dir;
        enter = enter.max(t1.min(t2));
        exit = exit.min(t1.max(t2));
    }

    (exit >= enter && exit >= 0.0).then_some((enter, exit))
}
