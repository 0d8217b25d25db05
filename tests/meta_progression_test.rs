//! Integration tests for the run -> souls -> upgrades -> next run cycle.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rogue_clone::meta::{
    bank_souls, load_meta_from, save_meta_to, try_buy_upgrade, upgrade_bonus, UpgradeError,
};
use rogue_clone::{GameSession, MetaProgress, SessionConfig};

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

#[test]
fn test_new_level_starts_with_upgraded_stats() {
    let mut meta = MetaProgress::default();
    meta.upgrades.insert("max_hp".to_string(), 2);

    let mut rng = test_rng();
    let mut session = GameSession::new(SessionConfig::default());
    session.init_level(1, &meta, &mut rng);

    let player = session.player().expect("player spawned");
    let stats = player.stats.as_ref().expect("player stats");
    assert_eq!(stats.max_hp, 22);
    assert_eq!(stats.hp, 22);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.souls, 0);
    assert_eq!(
        session.messages().latest(),
        Some("Welcome to Level 1 of the Dungeon.")
    );
    assert!(!session.is_game_over());
}

#[test]
fn test_player_starts_in_first_room() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut session = GameSession::new(SessionConfig::default());
        session.init_level(3, &MetaProgress::default(), &mut rng);

        let start = session.dungeon().start_room().map(|r| r.center());
        let player = session.player().map(|p| p.pos);
        assert!(start.is_some(), "seed {}", seed);
        assert_eq!(player, start);
        assert_eq!(session.level(), 3);
        assert_eq!(
            session.messages().latest(),
            Some("Welcome to Level 3 of the Dungeon.")
        );
    }
}

#[test]
fn test_init_level_replaces_previous_level() {
    let mut rng = test_rng();
    let meta = MetaProgress::default();
    let mut session = GameSession::new(SessionConfig::default());
    session.init_level(1, &meta, &mut rng);
    let first_ids: Vec<_> = session.entities().iter().map(|e| e.id).collect();

    session.init_level(2, &meta, &mut rng);
    assert!(session
        .entities()
        .iter()
        .all(|e| !first_ids.contains(&e.id)));
    assert_eq!(session.messages().len(), 2);
}

#[test]
fn test_banked_souls_buy_upgrades_that_persist() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("meta.json");

    let mut meta = load_meta_from(&path);
    assert_eq!(meta, MetaProgress::default());

    bank_souls(&mut meta, 60);
    bank_souls(&mut meta, 45);
    assert_eq!(try_buy_upgrade(&mut meta, "base_damage"), Ok(1));
    assert_eq!(try_buy_upgrade(&mut meta, "agility"), Ok(1));
    assert!(matches!(
        try_buy_upgrade(&mut meta, "max_hp"),
        Err(UpgradeError::InsufficientSouls {
            needed: 50,
            available: 5
        })
    ));
    save_meta_to(&path, &meta).expect("save meta");

    let reloaded = load_meta_from(&path);
    assert_eq!(reloaded.souls, 5);
    assert_eq!(upgrade_bonus(&reloaded, "base_damage"), 1);
    assert_eq!(upgrade_bonus(&reloaded, "agility"), 1);
    assert_eq!(upgrade_bonus(&reloaded, "max_hp"), 0);

    let mut rng = test_rng();
    let mut session = GameSession::new(SessionConfig::default());
    session.init_level(1, &reloaded, &mut rng);
    let stats = session
        .player()
        .and_then(|p| p.stats.as_ref())
        .expect("player stats");
    assert_eq!(stats.str, 17);
    assert_eq!(stats.agility, 13);
    assert_eq!(stats.max_hp, 12);
}

#[test]
fn test_corrupt_meta_file_starts_fresh() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("meta.json");
    std::fs::write(&path, "souls: lots").expect("write");
    assert_eq!(load_meta_from(&path), MetaProgress::default());
}
