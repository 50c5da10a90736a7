use super::RoomId;

/// Terrain type of a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sector {
    Structure,
    #[default]
    City,
    Field,
    Forest,
    Hills,
    Mountains,
    ShallowWater,
    DeepWater,
    Underwater,
    /// Open sky; characters without flight fall.
    Air,
    Road,
    Grasslands,
    Cave,
    Ruins,
    Swamp,
    Beach,
    UnderdarkWild,
    AstralPlane,
    Ice,
}

impl Sector {
    /// Sectors that extinguish burning characters.
    pub const fn is_water(self) -> bool {
        matches!(self, Self::ShallowWater | Self::DeepWater | Self::Underwater)
    }

    /// Sectors where landing makes a splash instead of a thud.
    pub const fn is_splashy(self) -> bool {
        matches!(self, Self::ShallowWater | Self::DeepWater)
    }
}

/// A room characters can occupy.
///
/// `light` counts the light sources present; the engine keeps it in step with
/// the characters standing here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id: RoomId,
    pub sector: Sector,
    pub light: i32,
}

impl Room {
    pub fn new(id: RoomId, sector: Sector) -> Self {
        Self {
            id,
            sector,
            light: 0,
        }
    }
}
