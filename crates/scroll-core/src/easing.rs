//! Easing curves and relative rotation tweens.

use glam::Vec3;

/// Cubic ease-in-out (the `power2.inOut` curve). Input is clamped
/// to \[0, 1\].
#[inline]
pub fn power2_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// A fixed-duration relative animation of a 3-component value.
///
/// The tween does not own the value it animates. Each call to
/// [`Tween::advance`] returns the increment for that step, so several tweens
/// and any continuous motion can be summed into the same field. Once
/// finished, the increments returned over the tween's lifetime add up to
/// exactly `delta`.
#[derive(Clone, Debug)]
pub struct Tween {
    pub delta: Vec3,
    pub duration_sec: f32,
    elapsed_sec: f32,
    landed: bool,
}

impl Tween {
    pub fn new(delta: Vec3, duration_sec: f32) -> Self {
        Self {
            delta,
            duration_sec,
            elapsed_sec: 0.0,
            landed: false,
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration_sec <= 0.0 {
            if self.landed {
                1.0
            } else {
                0.0
            }
        } else {
            (self.elapsed_sec / self.duration_sec).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Move the tween forward by `dt_sec` and return the eased increment.
    pub fn advance(&mut self, dt_sec: f32) -> Vec3 {
        if self.duration_sec <= 0.0 {
            // zero-length tweens land in one step
            let was_landed = std::mem::replace(&mut self.landed, true);
            return if was_landed { Vec3::ZERO } else { self.delta };
        }
        let before = power2_in_out(self.progress());
        self.elapsed_sec = (self.elapsed_sec + dt_sec.max(0.0)).min(self.duration_sec);
        let after = power2_in_out(self.progress());
        self.delta * (after - before)
    }
}
