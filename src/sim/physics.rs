//! Fixed-step vertical physics and dt-normalized horizontal integration
//!
//! Gravity is a per-update increment: deltaTime is NOT multiplied in, and
//! position integrates velocity once per call. Horizontal motion through
//! [`apply_velocity`] is scaled by `dt * 60` instead. The two conventions are
//! kept side by side on purpose; changing either alters the jump arc.

use crate::consts::{BASELINE_UPDATES_PER_SEC, GRAVITY};

/// Outcome of one gravity step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallStep {
    pub y: f32,
    pub velocity_y: f32,
    pub grounded: bool,
}

/// Accelerate, integrate, then clamp at `floor_y`.
///
/// Touching or crossing the floor zeroes velocity and reports grounded.
pub fn apply_gravity(y: f32, velocity_y: f32, floor_y: f32) -> FallStep {
    let velocity_y = velocity_y + GRAVITY;
    let y = y + velocity_y;

    if y >= floor_y {
        FallStep {
            y: floor_y,
            velocity_y: 0.0,
            grounded: true,
        }
    } else {
        FallStep {
            y,
            velocity_y,
            grounded: false,
        }
    }
}

/// Advance `x` by a per-baseline-update velocity over `dt` seconds
#[inline]
pub fn apply_velocity(x: f32, velocity_x: f32, dt: f32) -> f32 {
    x + velocity_x * dt * BASELINE_UPDATES_PER_SEC
}
