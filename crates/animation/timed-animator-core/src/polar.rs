//! Polar coordinates, used to lay points out on a circle.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::value::Vec2;

/// Radius and angle (radians).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PolarCoordinate {
    pub radius: f64,
    pub angle: f64,
}

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees / 360.0 * (PI * 2.0)
}

#[inline]
pub fn from_radians(radians: f64) -> f64 {
    radians / (2.0 * PI) * 360.0
}

impl PolarCoordinate {
    #[inline]
    pub fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }

    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        from_radians(self.angle)
    }

    #[inline]
    pub fn set_angle_degrees(&mut self, degrees: f64) {
        self.angle = to_radians(degrees);
    }

    pub fn from_cartesian(point: Vec2) -> Self {
        let (x, y) = (point.x as f64, point.y as f64);
        Self::new((x * x + y * y).sqrt(), y.atan2(x))
    }

    pub fn to_cartesian(&self) -> Vec2 {
        Vec2::new(
            (self.radius * self.angle.cos()) as f32,
            (self.radius * self.angle.sin()) as f32,
        )
    }
}
