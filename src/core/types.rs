//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Host-assigned identifier for a loaded entity.
///
/// The host owns entity lifetime; we only ever hold this handle, and it may
/// stop resolving at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// The two self-buff actions the engine manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    BloodRage,
    SteelSkin,
}

impl ActionKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ActionKind::BloodRage => "Blood Rage",
            ActionKind::SteelSkin => "Steel Skin",
        }
    }
}

/// 2D world position
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared distance; proximity checks compare against a squared radius
    /// so no square root is taken per entity.
    pub fn distance_squared(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_squared() {
        let origin = Vec2::new(0.0, 0.0);
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(origin.distance_squared(&p), 25.0);
        assert_eq!(origin.distance(&p), 5.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Vec2::new(-2.0, 7.5);
        let b = Vec2::new(1.0, -3.0);
        assert_eq!(a.distance_squared(&b), b.distance_squared(&a));
    }
}
