//! Headless character-state simulation.
//!
//! Loads content from a data directory, stages a small cast, runs the pulse
//! clock and logs every notice the engine emits.
//!
//! ```bash
//! CONTENT_DATA_DIR=crates/game/content/data SIM_PULSES=5000 cargo run -p charstate-sim
//! ```

mod config;
mod scenario;

use anyhow::{Context, Result};
use charstate_content::ContentFactory;
use charstate_core::{Engine, Env, Notice};
use tracing::{info, warn};

use config::SimConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let sim = SimConfig::from_env();
    let factory = ContentFactory::new(&sim.data_dir);
    let mut config = factory
        .load_config()
        .with_context(|| format!("loading config from {}", sim.data_dir.display()))?;
    if let Some(seed) = sim.seed {
        config = config.with_seed(seed);
    }
    let items = factory.load_items().context("loading item catalog")?;
    let wear_off = factory.load_wear_off().context("loading wear-off messages")?;

    let env = Env::standard()
        .with_items(&items)
        .with_skills(&wear_off)
        .with_config(&config);
    let mut world = scenario::world();
    let mut engine = Engine::new(&mut world, env);
    let cast = scenario::stage(&mut engine)?;
    report(&mut engine);

    let mut fired = 0;
    for _ in 0..sim.pulses {
        fired += engine.pulse();
        let pulse = engine.world().pulse().0;
        scenario::script(&mut engine, &cast, pulse)?;
        report(&mut engine);
    }

    info!(
        pulses = sim.pulses,
        fired,
        queued = engine.world().queue().len(),
        "simulation finished"
    );
    for id in cast.ids() {
        let Some(ch) = engine.character(id) else {
            warn!(character = %id, "character left the world");
            continue;
        };
        info!(
            character = %id,
            name = %ch.name,
            hit = %format!("{}/{}", ch.hit().current, ch.hit().maximum),
            mana = %format!("{}/{}", ch.mana().current, ch.mana().maximum),
            movement = %format!("{}/{}", ch.movement().current, ch.movement().maximum),
            rage = ch.rage,
            stance = <&str>::from(ch.stance()),
            armor_class = ch.armor_class(),
            berserking = ch.is_berserking(),
            "final state"
        );
    }
    Ok(())
}

fn report(engine: &mut Engine<'_>) {
    let pulse = engine.world().pulse();
    for notice in engine.take_notices() {
        let character = notice.character();
        match notice {
            Notice::WearOff { kind, message, .. } => {
                info!(%pulse, %character, %kind, "{message}")
            }
            Notice::StanceChanged { from, to, .. } => info!(
                %pulse,
                %character,
                from = <&str>::from(from),
                to = <&str>::from(to),
                "stance changed"
            ),
            Notice::FellToGround { splash, .. } => {
                info!(%pulse, %character, splash, "fell to the ground")
            }
            Notice::ImproveSkill { skill, .. } => {
                info!(%pulse, %character, skill = <&str>::from(skill), "skill practice")
            }
            other => info!(%pulse, %character, notice = ?other, "notice"),
        }
    }
}
