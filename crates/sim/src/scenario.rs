//! The staged cast and the scripted events that drive it.
use anyhow::Result;
use charstate_core::{
    Abilities, ApplyLocation, Character, CharacterId, Effect, EffectFlags, EffectKind, Engine,
    Equipment, ItemHandle, MergePolicy, Position, Room, RoomId, Sector, Skill, WearSlot, World,
};
use tracing::info;

pub const TOWN: RoomId = RoomId(3001);
pub const LAKE: RoomId = RoomId(3002);
pub const RIDGE: RoomId = RoomId(3003);

const LANTERN: ItemHandle = ItemHandle(1);
const BREASTPLATE: ItemHandle = ItemHandle(2);
const GAUNTLETS: ItemHandle = ItemHandle(3);
const RING: ItemHandle = ItemHandle(4);

/// Characters created by [`stage`].
pub struct Cast {
    pub berserker: CharacterId,
    pub adventurer: CharacterId,
    pub bear: CharacterId,
}

impl Cast {
    pub fn ids(&self) -> [CharacterId; 3] {
        [self.berserker, self.adventurer, self.bear]
    }
}

pub fn world() -> World {
    let mut world = World::new();
    world.add_room(Room::new(TOWN, Sector::City));
    world.add_room(Room::new(LAKE, Sector::ShallowWater));
    world.add_room(Room::new(RIDGE, Sector::Mountains));
    world
}

pub fn stage(engine: &mut Engine<'_>) -> Result<Cast> {
    let berserker = Character::builder("Brega")
        .level(20)
        .abilities(Abilities::new(85, 60, 40, 45, 80, 50))
        .max_hit(180)
        .skill(Skill::Berserk, 80)
        .skill(Skill::Meditate, 90)
        .meditating()
        .position(Position::Sitting)
        .build();
    let berserker = engine.spawn(berserker, Some(TOWN))?;

    let adventurer = Character::builder("Tamsin")
        .level(12)
        .abilities(Abilities::new(60, 72, 66, 70, 68, 55))
        .max_hit(110)
        .hit(40)
        .mana(30)
        .equipment(
            Equipment::builder()
                .wear(WearSlot::Light, LANTERN)
                .wear(WearSlot::Body, BREASTPLATE)
                .wear(WearSlot::Hands, GAUNTLETS)
                .wear(WearSlot::FingerRight, RING)
                .build(),
        )
        .build();
    let adventurer = engine.spawn(adventurer, Some(TOWN))?;
    engine.apply_effect(
        adventurer,
        Effect::new(EffectKind::BLESS, ApplyLocation::Hitroll, 2, 6),
    )?;
    engine.apply_effect(
        adventurer,
        Effect::new(EffectKind::IMMOLATE, ApplyLocation::None, 0, 3).with_flags(EffectFlags::ON_FIRE),
    )?;

    let bear = Character::builder("a cave bear")
        .npc()
        .level(8)
        .abilities(Abilities::new(90, 40, 20, 30, 85, 20))
        .max_hit(60)
        .max_move(200)
        .build();
    let bear = engine.spawn(bear, Some(RIDGE))?;

    info!(%berserker, %adventurer, %bear, "cast staged");
    Ok(Cast {
        berserker,
        adventurer,
        bear,
    })
}

/// Scripted events keyed by pulse.
pub fn script(engine: &mut Engine<'_>, cast: &Cast, pulse: u64) -> Result<()> {
    match pulse {
        50 => {
            info!(character = %cast.adventurer, "wades into the lake");
            engine.move_to_room(cast.adventurer, LAKE)?;
        }
        120 => {
            engine.merge_effect(
                cast.adventurer,
                Effect::new(EffectKind::BLESS, ApplyLocation::Hitroll, 2, 6),
                MergePolicy::ACCUMULATE,
            )?;
            let fly = Effect::new(EffectKind::FLY, ApplyLocation::None, 0, 2)
                .with_flags(EffectFlags::FLY);
            engine.apply_effect(cast.adventurer, fly)?;
            engine.set_position(cast.adventurer, Position::Flying)?;
        }
        300 => {
            engine.expire_effects_of_kind(cast.adventurer, EffectKind::FLY)?;
        }
        400 => {
            info!(character = %cast.bear, "falls from a ledge");
            engine.hurt(cast.bear, 68, true)?;
        }
        600 => {
            engine.alter_move(cast.bear, 20)?;
            engine.expire_effects_of_kind(cast.adventurer, EffectKind::BLESS)?;
        }
        _ => {}
    }
    Ok(())
}
