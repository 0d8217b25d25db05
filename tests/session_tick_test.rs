//! Integration tests for GameSession::update: movement, melee, monster AI,
//! pickups, and the end of a run.
//!
//! Sessions are built over a single hand-placed room so positions are
//! predictable. Uses seeded ChaCha8Rng for deterministic behavior.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rogue_clone::combat::roll_damage;
use rogue_clone::dungeon::{Dungeon, Room, RoomKind};
use rogue_clone::entity::{EntityStore, ItemKind, Stats};
use rogue_clone::{GameSession, InputSnapshot, Position, SessionConfig, TickEvent, Viewport};

const FRAME: f64 = 1.0 / 60.0;

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// One 1000x500 room at the world origin. With an 800x600 viewport and the
/// player near the top-left the camera stays at (0, 0), so screen and world
/// coordinates coincide.
fn open_room() -> Dungeon {
    let mut dungeon = Dungeon::new(2560.0, 768.0);
    dungeon.rooms.push(Room::new(
        0.0,
        0.0,
        1000.0,
        500.0,
        RoomKind::Chamber { column: 0, row: 0 },
    ));
    dungeon
}

fn idle() -> InputSnapshot {
    InputSnapshot::idle(Viewport::new(800.0, 600.0))
}

fn weak_monster(hp: i32, exp: u32, souls: u32) -> Stats {
    Stats {
        hp,
        max_hp: hp,
        str: 0,
        armor: 0,
        exp,
        level: 1,
        gold: 0,
        souls,
        speed: 100.0,
        agility: 10,
    }
}

fn session(store: EntityStore) -> GameSession {
    GameSession::from_parts(SessionConfig::default(), open_room(), store)
}

fn player_stats(session: &GameSession) -> &Stats {
    session
        .player()
        .and_then(|p| p.stats.as_ref())
        .expect("player with stats")
}

// ── Movement ────────────────────────────────────────────────────

#[test]
fn test_blocked_axis_slides_along_wall() {
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(995.0, 250.0), Stats::base_player());
    let mut session = session(store);
    session.apply_input(InputSnapshot {
        right: true,
        down: true,
        ..idle()
    });

    let mut rng = test_rng();
    session.update(0.1, &mut rng);

    let pos = session.player().map(|p| p.pos).expect("player");
    assert_eq!(pos.x, 995.0, "x is blocked by the east wall");
    let expected_dy = std::f64::consts::FRAC_1_SQRT_2 * 186.0 * 0.1;
    assert!((pos.y - (250.0 + expected_dy)).abs() < 1e-9);
}

#[test]
fn test_player_never_leaves_the_floor() {
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(500.0, 250.0), Stats::base_player());
    let mut session = session(store);
    session.apply_input(InputSnapshot {
        up: true,
        left: true,
        ..idle()
    });

    let mut rng = test_rng();
    for _ in 0..600 {
        session.update(FRAME, &mut rng);
        let pos = session.player().map(|p| p.pos).expect("player");
        assert!(session.is_valid_move(pos.x, pos.y));
    }
    let pos = session.player().map(|p| p.pos).expect("player");
    assert!(pos.x < 5.0 && pos.y < 5.0, "pressed into the corner");
}

// ── Combat ──────────────────────────────────────────────────────

#[test]
fn test_swing_hits_monster_inside_cone() {
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(100.0, 100.0), Stats::base_player());
    let target = store.spawn_monster(
        Position::new(150.0, 110.0),
        "Orc",
        'O',
        weak_monster(50, 5, 1),
    );
    let mut session = session(store);
    session.apply_input(InputSnapshot {
        attack: true,
        pointer: Position::new(200.0, 100.0),
        ..idle()
    });

    let mut rng = test_rng();
    let result = session.update(FRAME, &mut rng);

    let damage = result
        .events
        .iter()
        .find_map(|e| match e {
            TickEvent::PlayerAttack {
                target: hit, damage, ..
            } if *hit == target => Some(*damage),
            _ => None,
        })
        .expect("monster in the cone is hit");
    let hp = session.entities()[0]
        .stats
        .as_ref()
        .map(|s| s.hp)
        .expect("monster stats");
    assert_eq!(hp, 50 - damage);
    assert_eq!(
        session.messages().iter().find(|m| m.starts_with("You hit")),
        Some(format!("You hit Orc for {} damage.", damage).as_str())
    );
}

#[test]
fn test_swing_misses_monster_behind_player() {
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(100.0, 100.0), Stats::base_player());
    store.spawn_monster(Position::new(60.0, 100.0), "Orc", 'O', weak_monster(50, 5, 1));
    let mut session = session(store);
    session.apply_input(InputSnapshot {
        attack: true,
        pointer: Position::new(200.0, 100.0),
        ..idle()
    });

    let mut rng = test_rng();
    let result = session.update(FRAME, &mut rng);

    assert!(!result
        .events
        .iter()
        .any(|e| matches!(e, TickEvent::PlayerAttack { .. })));
    let player = session.player().expect("player");
    assert!(player.attack_visual.active, "a miss still swings");
    assert_eq!(session.entities()[0].stats.as_ref().map(|s| s.hp), Some(50));
}

#[test]
fn test_swing_ignores_monster_out_of_range() {
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(100.0, 100.0), Stats::base_player());
    store.spawn_monster(Position::new(180.0, 100.0), "Orc", 'O', weak_monster(50, 5, 1));
    let mut session = session(store);
    session.apply_input(InputSnapshot {
        attack: true,
        pointer: Position::new(200.0, 100.0),
        ..idle()
    });

    let mut rng = test_rng();
    let result = session.update(FRAME, &mut rng);
    assert!(!result
        .events
        .iter()
        .any(|e| matches!(e, TickEvent::PlayerAttack { .. })));
}

#[test]
fn test_swing_aims_through_scrolled_camera() {
    let mut dungeon = Dungeon::new(2560.0, 768.0);
    dungeon.rooms.push(Room::new(
        1200.0,
        200.0,
        800.0,
        400.0,
        RoomKind::Chamber { column: 1, row: 0 },
    ));
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(1500.0, 400.0), Stats::base_player());
    let target = store.spawn_monster(
        Position::new(1540.0, 400.0),
        "Orc",
        'O',
        weak_monster(50, 5, 1),
    );
    let mut session = GameSession::from_parts(SessionConfig::default(), dungeon, store);
    // Screen (450, 300) is world (1550, 400) once the camera follows the player.
    session.apply_input(InputSnapshot {
        attack: true,
        pointer: Position::new(450.0, 300.0),
        ..idle()
    });

    assert_eq!(session.camera(), Position::new(1100.0, 100.0));
    let mut rng = test_rng();
    let result = session.update(FRAME, &mut rng);
    assert!(result
        .events
        .iter()
        .any(|e| matches!(e, TickEvent::PlayerAttack { target: hit, .. } if *hit == target)));
}

#[test]
fn test_damage_stays_in_bounds() {
    let mut rng = test_rng();
    for _ in 0..1000 {
        let weak = roll_damage(0, &mut rng);
        assert!((1..=2).contains(&weak));
        let strong = roll_damage(16, &mut rng);
        assert!((4..=6).contains(&strong));
    }
}

#[test]
fn test_kill_grants_exp_souls_and_level() {
    let mut store = EntityStore::new();
    let stats = Stats {
        exp: 85,
        ..Stats::base_player()
    };
    store.spawn_player(Position::new(100.0, 100.0), stats);
    store.spawn_monster(Position::new(140.0, 100.0), "Snake", 'S', weak_monster(1, 20, 3));
    let mut session = session(store);
    session.apply_input(InputSnapshot {
        attack: true,
        pointer: Position::new(140.0, 100.0),
        ..idle()
    });

    let mut rng = test_rng();
    let result = session.update(FRAME, &mut rng);

    assert!(session.entities().is_empty(), "corpse removed");
    let stats = player_stats(&session);
    assert_eq!(stats.exp, 105);
    assert_eq!(stats.level, 2);
    assert_eq!(stats.souls, 3);
    assert_eq!(stats.max_hp, 17);
    assert_eq!(stats.hp, 17);
    assert_eq!(stats.str, 17);

    let kinds: Vec<&str> = result.events.iter().map(TickEvent::message).collect();
    assert!(kinds.contains(&"Snake died."));
    assert!(kinds.contains(&"Level Up!"));
}

// ── Monster AI ──────────────────────────────────────────────────

#[test]
fn test_monster_wakes_then_hunts() {
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(100.0, 100.0), Stats::base_player());
    store.spawn_monster(Position::new(300.0, 100.0), "Zombie", 'Z', weak_monster(10, 1, 1));
    let mut session = session(store);

    let mut rng = test_rng();
    let first = session.update(0.1, &mut rng);
    assert!(matches!(first.events.as_slice(), [TickEvent::MonsterWoke { .. }]));
    assert_eq!(session.entities()[0].pos.x, 300.0, "no step on the waking frame");

    session.update(0.1, &mut rng);
    assert!((session.entities()[0].pos.x - 290.0).abs() < 1e-9);
}

#[test]
fn test_distant_monster_keeps_sleeping() {
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(100.0, 100.0), Stats::base_player());
    store.spawn_monster(Position::new(900.0, 400.0), "Zombie", 'Z', weak_monster(10, 1, 1));
    let mut session = session(store);

    let mut rng = test_rng();
    for _ in 0..30 {
        assert!(session.update(FRAME, &mut rng).events.is_empty());
    }
    assert_eq!(session.entities()[0].pos, Position::new(900.0, 400.0));
}

// ── Pickups ─────────────────────────────────────────────────────

#[test]
fn test_pickups_apply_once() {
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(100.0, 100.0), Stats::base_player());
    store.spawn_item(Position::new(110.0, 100.0), ItemKind::Gold { amount: 25 });
    store.spawn_item(Position::new(100.0, 110.0), ItemKind::AgilityPotion);
    store.spawn_item(Position::new(90.0, 100.0), ItemKind::AgilityRing);
    let mut session = session(store);

    let mut rng = test_rng();
    let first = session.update(FRAME, &mut rng);
    assert_eq!(first.events.len(), 3);
    assert!(session.entities().is_empty());

    let second = session.update(FRAME, &mut rng);
    assert!(second.events.is_empty());

    let stats = player_stats(&session);
    assert_eq!(stats.gold, 25);
    assert_eq!(stats.agility, 14);
    assert!(session
        .messages()
        .iter()
        .any(|m| m == "Picked up 25 gold."));
    assert!(session
        .messages()
        .iter()
        .any(|m| m == "Equipped Ring of Agility! (+1 Agility)"));
}

#[test]
fn test_items_out_of_reach_stay_put() {
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(100.0, 100.0), Stats::base_player());
    store.spawn_item(Position::new(160.0, 100.0), ItemKind::Gold { amount: 25 });
    let mut session = session(store);

    let mut rng = test_rng();
    session.update(FRAME, &mut rng);
    assert_eq!(session.entities().len(), 1);
    assert_eq!(player_stats(&session).gold, 0);
}

// ── End of run ──────────────────────────────────────────────────

fn doomed_player(souls: u32) -> Stats {
    Stats {
        hp: 1,
        souls,
        ..Stats::base_player()
    }
}

#[test]
fn test_death_reports_souls_and_freezes_session() {
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(100.0, 100.0), doomed_player(7));
    store.spawn_monster(Position::new(130.0, 100.0), "Bat", 'B', weak_monster(10, 1, 1));
    let mut session = session(store);

    let mut rng = test_rng();
    let wake = session.update(FRAME, &mut rng);
    assert!(wake.souls_earned().is_none());

    let fatal = session.update(FRAME, &mut rng);
    assert_eq!(fatal.souls_earned(), Some(7));
    assert!(session.is_game_over());
    assert_eq!(session.souls_earned(), Some(7));
    assert_eq!(session.messages().latest(), Some("You died!"));

    let before = session.player().cloned();
    session.apply_input(InputSnapshot {
        right: true,
        attack: true,
        ..idle()
    });
    for _ in 0..10 {
        let result = session.update(FRAME, &mut rng);
        assert!(!result.simulated);
        assert!(result.events.is_empty());
    }
    assert_eq!(session.player().cloned(), before);
}

#[test]
fn test_simultaneous_killing_blows_credit_souls_once() {
    let mut store = EntityStore::new();
    store.spawn_player(Position::new(100.0, 100.0), doomed_player(4));
    store.spawn_monster(Position::new(130.0, 100.0), "Bat", 'B', weak_monster(10, 1, 1));
    store.spawn_monster(Position::new(70.0, 100.0), "Bat", 'B', weak_monster(10, 1, 1));
    let mut session = session(store);

    let mut rng = test_rng();
    session.update(FRAME, &mut rng);
    let fatal = session.update(FRAME, &mut rng);

    let deaths = fatal
        .events
        .iter()
        .filter(|e| matches!(e, TickEvent::PlayerDied { .. }))
        .count();
    assert_eq!(deaths, 1);
    let hits = fatal
        .events
        .iter()
        .filter(|e| matches!(e, TickEvent::MonsterAttack { .. }))
        .count();
    assert_eq!(hits, 1, "the second monster never swings at a corpse");
}
