//! Regeneration, bleeding, rage and the lifetime of queued timers.

mod common;

use charstate_core::stats::RAGE_CRAZED;
use charstate_core::{
    Character, EffectKind, Engine, Env, Notice, PlayerFlags, Position, Pulse, Skill, Stance,
    TimerFlags, TimerKind, TimerOutcome,
};
use common::*;

#[test]
fn arming_three_times_queues_one_timer() {
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard());
    let id = engine
        .spawn(Character::builder("Abe").max_hit(20).hit(10).build(), Some(TOWN))
        .expect("spawn");

    for _ in 0..3 {
        engine.arm(id, TimerKind::HitRegen).expect("arm");
    }

    let abe = engine.character(id).expect("abe");
    assert!(abe.pending_timers().contains(TimerFlags::HIT_REGEN));
    assert_eq!(abe.pending_events().len(), 1);
    assert_eq!(engine.world().queue().owned_by(id), 1);
}

#[test]
fn full_meters_are_not_armed() {
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard());
    let id = engine
        .spawn(Character::builder("Bo").build(), Some(TOWN))
        .expect("spawn");

    engine.check_regen_rates(id).expect("check");
    engine.arm(id, TimerKind::ManaRegen).expect("arm");
    engine.arm(id, TimerKind::Rage).expect("arm");

    assert!(engine.character(id).expect("bo").pending_timers().is_empty());
    assert!(engine.world().queue().is_empty());
}

#[test]
fn hit_regeneration_reaches_maximum_and_stops() {
    let rates = FixedRates::uniform(75);
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard().with_rates(&rates));
    let id = engine
        .spawn(Character::builder("Cy").max_hit(100).hit(40).build(), Some(TOWN))
        .expect("spawn");

    // 750 pulses per game hour at 75 points per hour: one point every 10 pulses
    assert_eq!(engine.advance(599), 59);
    assert_eq!(engine.character(id).expect("cy").hit().current, 99);

    assert_eq!(engine.advance(1), 1);
    let cy = engine.character(id).expect("cy");
    assert_eq!(cy.hit().current, 100);
    assert!(!cy.pending_timers().contains(TimerFlags::HIT_REGEN));
    assert!(cy.pending_events().is_empty());
    assert_eq!(engine.world().pulse(), Pulse(600));
    assert!(engine.world().queue().is_empty());
}

#[test]
fn running_a_timer_at_maximum_finishes_it() {
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard());
    let id = engine
        .spawn(Character::builder("Dot").max_hit(100).hit(99).build(), Some(TOWN))
        .expect("spawn");
    assert_eq!(engine.world().queue().owned_by(id), 1);

    assert_eq!(
        engine.run_timer(id, TimerKind::HitRegen).expect("tick"),
        TimerOutcome::Done
    );
    let dot = engine.character(id).expect("dot");
    assert_eq!(dot.hit().current, 100);
    assert!(dot.pending_timers().is_empty());
    assert!(engine.world().queue().is_empty());

    engine.hurt(id, 5, true).expect("hurt");
    assert_eq!(engine.world().queue().owned_by(id), 1);
}

#[test]
fn pathological_rates_are_clamped() {
    for (gain, delay) in [(0, 750), (-20, 750), (1, 750), (10_000, 1)] {
        let rates = FixedRates::uniform(gain);
        let mut world = world();
        let mut engine = Engine::new(&mut world, Env::standard().with_rates(&rates));
        let id = engine
            .spawn(Character::builder("Eli").max_hit(50).hit(10).build(), Some(TOWN))
            .expect("spawn");

        let handle = engine.character(id).expect("eli").pending_events()[0];
        assert_eq!(engine.world().queue().due_at(handle), Some(Pulse(delay)), "gain {gain}");
    }
}

#[test]
fn mana_and_movement_regenerate() {
    let rates = FixedRates::uniform(150);
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard().with_rates(&rates));
    let id = engine
        .spawn(Character::builder("Fay").build(), Some(TOWN))
        .expect("spawn");

    engine.alter_mana(id, 10).expect("spend mana");
    engine.alter_move(id, 4).expect("spend movement");
    let fay = engine.character(id).expect("fay");
    assert_eq!((fay.mana().current, fay.movement().current), (90, 96));
    assert!(fay
        .pending_timers()
        .contains(TimerFlags::MANA_REGEN | TimerFlags::MOVE_REGEN));

    // one point every 5 pulses
    engine.advance(20);
    let fay = engine.character(id).expect("fay");
    assert_eq!((fay.mana().current, fay.movement().current), (94, 100));
    assert!(!fay.pending_timers().contains(TimerFlags::MOVE_REGEN));

    assert!(engine.run_until_idle(1_000) < 1_000);
    assert_eq!(engine.character(id).expect("fay").mana().current, 100);
}

#[test]
fn bleeding_out_ends_in_death_without_attackers() {
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard());
    let id = engine
        .spawn(Character::builder("Gus").max_hit(20).hit(5).build(), Some(TOWN))
        .expect("spawn");

    engine.hurt(id, 12, true).expect("hurt");
    let gus = engine.character(id).expect("gus");
    assert_eq!(gus.hit().current, -7);
    assert_eq!(gus.stance(), Stance::MortallyWounded);

    assert!(engine.run_until_idle(10_000) < 10_000);
    let gus = engine.character(id).expect("gus");
    assert!(gus.is_deceased());
    assert_eq!(gus.stance(), Stance::Dead);
    assert!(gus.pending_timers().is_empty());

    let deaths = engine
        .take_notices()
        .into_iter()
        .filter(|notice| matches!(notice, Notice::Died { .. }))
        .count();
    assert_eq!(deaths, 1);
}

#[test]
fn bleeding_out_under_attack_lingers() {
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard());
    let mut victim = Character::builder("Hob").max_hit(20).hit(5).build();
    victim.attackers = 1;
    let id = engine.spawn(victim, Some(TOWN)).expect("spawn");

    engine.hurt(id, 12, true).expect("hurt");
    engine.advance(5_000);

    let hob = engine.character(id).expect("hob");
    assert!(!hob.is_deceased());
    assert!((-10..=-6).contains(&hob.hit().current));
    assert_eq!(hob.stance(), Stance::MortallyWounded);
    assert!(hob.pending_timers().contains(TimerFlags::HIT_REGEN));
}

#[test]
fn rage_crosses_into_berserking_on_the_crossing_tick() {
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard());
    let monk = Character::builder("Ivar")
        .skill(Skill::Berserk, 100)
        .skill(Skill::Meditate, 100)
        .meditating()
        .build();
    let id = engine.spawn(monk, Some(TOWN)).expect("spawn");
    assert!(engine
        .character(id)
        .expect("ivar")
        .pending_timers()
        .contains(TimerFlags::RAGE));

    let mut crossed = false;
    for _ in 0..10_000 {
        engine.pulse();
        let ivar = engine.character(id).expect("ivar");
        if ivar.is_berserking() {
            assert!(ivar.rage > RAGE_CRAZED);
            assert!(!ivar.is_meditating());
            assert!(ivar.has_effect_of_kind(EffectKind::BERSERK));
            crossed = true;
            break;
        }
        assert!(ivar.rage <= RAGE_CRAZED);
        assert!(ivar.is_meditating());
    }
    assert!(crossed);
    assert!(engine
        .take_notices()
        .contains(&Notice::RageConsumes { character: id }));

    assert!(engine.run_until_idle(100_000) < 100_000);
    let ivar = engine.character(id).expect("ivar");
    assert_eq!(ivar.rage, 0);
    assert!(!ivar.is_berserking());
    assert!(!ivar.has_effect_of_kind(EffectKind::BERSERK));
    assert!(!ivar.player_flags.contains(PlayerFlags::MEDITATE));

    let notices = engine.take_notices();
    assert!(notices.contains(&Notice::RageRecedes { character: id }));
    assert!(notices.contains(&Notice::SeekTarget { character: id }));
}

#[test]
fn idle_rage_drains_and_does_not_rearm() {
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard());
    let id = engine
        .spawn(Character::builder("Jun").rage(30).build(), Some(TOWN))
        .expect("spawn");

    assert!(engine.run_until_idle(10_000) < 10_000);
    assert_eq!(engine.character(id).expect("jun").rage, 0);

    engine.arm(id, TimerKind::Rage).expect("arm");
    assert!(engine.world().queue().is_empty());

    engine.set_meditating(id, true).expect("meditate");
    assert!(engine.world().queue().is_empty());
}

#[test]
fn stopping_berserking_strips_the_whole_family() {
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard());
    let id = engine
        .spawn(Character::builder("Kai").rage(500).build(), Some(TOWN))
        .expect("spawn");

    engine.start_berserking(id).expect("berserk");
    engine
        .apply_effect(
            id,
            charstate_core::Effect::new(
                EffectKind::SPIRIT_WOLF,
                charstate_core::ApplyLocation::Damroll,
                4,
                10,
            ),
        )
        .expect("wolf");
    assert!(engine.character(id).expect("kai").is_berserking());

    engine.stop_berserking(id).expect("calm");
    let kai = engine.character(id).expect("kai");
    assert_eq!(kai.rage, 0);
    assert!(!kai.is_berserking());
    assert!(!kai.has_effect_of_kind(EffectKind::SPIRIT_WOLF));
    assert_eq!(kai.damroll(), 0);
}

#[test]
fn berserking_stands_the_character_up_and_alert() {
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard());
    let brute = Character::builder("Kol")
        .skill(Skill::Berserk, 60)
        .rage(300)
        .stance(Stance::Resting)
        .position(Position::Sitting)
        .build();
    let id = engine.spawn(brute, Some(TOWN)).expect("spawn");
    engine.take_notices();

    engine.start_berserking(id).expect("berserk");
    let kol = engine.character(id).expect("kol");
    assert!(kol.is_berserking());
    assert_eq!(kol.stance(), Stance::Alert);
    assert_eq!(kol.position, Position::Standing);
    assert!(engine.take_notices().contains(&Notice::StanceChanged {
        character: id,
        from: Stance::Resting,
        to: Stance::Alert,
    }));
}

#[test]
fn destroying_a_character_cancels_its_timers() {
    let items = Catalog::standard();
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard().with_items(&items));
    let ch = Character::builder("Lem")
        .max_hit(20)
        .hit(5)
        .rage(40)
        .equipment(
            charstate_core::Equipment::builder()
                .wear(charstate_core::WearSlot::Light, LANTERN)
                .build(),
        )
        .build();
    let id = engine.spawn(ch, Some(TOWN)).expect("spawn");
    let other = engine
        .spawn(Character::builder("Mae").max_hit(20).hit(10).build(), Some(TOWN))
        .expect("spawn");
    assert_eq!(engine.world().queue().owned_by(id), 2);
    assert_eq!(engine.world().room(TOWN).expect("town").light, 1);

    let lem = engine.destroy(id).expect("destroy");
    assert!(lem.pending_timers().is_empty());
    assert!(engine.character(id).is_none());
    assert_eq!(engine.world().queue().owned_by(id), 0);
    assert_eq!(engine.world().queue().owned_by(other), 1);
    assert_eq!(engine.world().room(TOWN).expect("town").light, 0);

    engine.advance(2_000);
    assert!(engine.take_notices().iter().all(|notice| notice.character() != id));
}

#[test]
fn leaving_the_world_stops_regeneration() {
    let mut world = world();
    let mut engine = Engine::new(&mut world, Env::standard());
    let id = engine
        .spawn(Character::builder("Ned").max_hit(20).hit(10).build(), Some(TOWN))
        .expect("spawn");

    engine.remove_from_room(id).expect("leave");
    assert!(engine.run_until_idle(10_000) < 10_000);

    let ned = engine.character(id).expect("ned");
    assert_eq!(ned.hit().current, 10);
    assert!(ned.pending_timers().is_empty());
}
