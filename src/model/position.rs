use serde::{Deserialize, Serialize};

/// Integer world-space position (x/y on the ground plane, z is altitude).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WorldPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Same ground position, raised by `dz`.
    pub fn raised(self, dz: i32) -> Self {
        Self {
            z: self.z.saturating_add(dz),
            ..self
        }
    }
}
