use std::fs;

use charstate_content::ContentFactory;
use charstate_core::{EffectKind, ItemHandle, ItemOracle, SkillOracle};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).expect("write content file");
}

#[test]
fn loads_every_file_in_a_data_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(&dir, "config.toml", "pulses_per_second = 20\nrage_interval_seconds = 2\n");
    write(
        &dir,
        "items.ron",
        r#"(items: [
            (handle: 1, name: "lantern", kind: Light(lit: true)),
            (handle: 2, name: "girdle of might", kind: Trinket,
             applies: [(location: Str, modifier: 4)]),
        ])"#,
    );
    write(
        &dir,
        "wear_off.ron",
        r#"(messages: [(kind: 39, message: "You feel weaker.")])"#,
    );

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().expect("config");
    assert_eq!(config.pulses_per_game_hour(), 1_500);
    assert_eq!(config.rage_interval(), 40);

    let items = factory.load_items().expect("items");
    assert_eq!(items.all_definitions().len(), 2);
    assert_eq!(
        items.definition(ItemHandle(2)).map(|item| item.applies.len()),
        Some(1)
    );

    let wear_off = factory.load_wear_off().expect("wear-off");
    assert_eq!(wear_off.wear_off(EffectKind::STRENGTH), Some("You feel weaker."));
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let factory = ContentFactory::new(dir.path());

    assert_eq!(
        factory.load_config().expect("config"),
        charstate_core::EngineConfig::default()
    );
    assert!(factory.load_items().is_err());
}
