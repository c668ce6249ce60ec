use std::cell::RefCell;
use std::rc::Rc;

use dash_runner::consts::*;
use dash_runner::sim::{
    Booster, BoosterKind, Coin, Effects, GameEvent, GamePhase, Locomotion, Obstacle, ObstacleKind, Pacing,
    Particles, Session, TickInput,
};
use dash_runner::HighScoreKeeper;
use rand::SeedableRng;
use rand_pcg::Pcg32;

const DT: f32 = 1.0 / 60.0;

/// Keeper that records every save request
#[derive(Clone, Default)]
struct Recorder {
    saves: Rc<RefCell<Vec<u64>>>,
}

impl HighScoreKeeper for Recorder {
    fn high_score(&self) -> u64 {
        self.saves.borrow().iter().copied().max().unwrap_or(0)
    }

    fn save_high_score(&mut self, score: u64) -> bool {
        let best = self.high_score();
        self.saves.borrow_mut().push(score);
        score > best
    }
}

/// Playing session with the first frame's spawns cleared
fn quiet_session(seed: u64) -> (Session, Recorder) {
    let recorder = Recorder::default();
    let mut s = Session::new(seed, Box::new(recorder.clone()));
    s.start();
    s.update(&TickInput::default(), DT);
    s.obstacles.clear();
    s.coins.clear();
    s.boosters.clear();
    s.drain_events();
    (s, recorder)
}

fn step_clear(s: &mut Session, input: TickInput) {
    s.update(&input, DT);
    s.obstacles.clear();
}

/// Ground block that still overlaps the runner after one frame of scroll
fn block_on_player(s: &Session) -> Obstacle {
    Obstacle::new(ObstacleKind::Ground, s.player.pos.x + 10.0, None)
}

#[test]
fn test_spike_scrolls_linearly() {
    let mut spike = Obstacle::new(ObstacleKind::Spike, 1000.0, None);
    assert_eq!(spike.velocity_x, -5.0);
    for _ in 0..100 {
        spike.update(1.0, 1.0);
    }
    assert!((spike.pos.x - 500.0).abs() < 1e-3);
    assert!(!spike.is_off_screen());
}

#[test]
fn test_shield_absorbs_hit() {
    let (mut s, recorder) = quiet_session(1);
    s.effects.activate(BoosterKind::Shield, s.game_speed);
    assert!(s.effects.shield);

    let block = block_on_player(&s);
    s.obstacles.push(block);
    s.update(&TickInput::default(), DT);

    assert_eq!(s.phase, GamePhase::Playing);
    assert!(!s.effects.shield);
    assert!(s.effects.active.is_none());
    assert_ne!(s.player.state, Locomotion::Dead);
    assert!(s.drain_events().contains(&GameEvent::ShieldBreak));
    assert!(recorder.saves.borrow().is_empty());

    // Still overlapping next frame, but the hit was already spent
    s.update(&TickInput::default(), DT);
    assert_eq!(s.phase, GamePhase::Playing);
}

#[test]
fn test_unshielded_hit_ends_run_and_saves_once() {
    let (mut s, recorder) = quiet_session(2);
    for _ in 0..30 {
        step_clear(&mut s, TickInput::default());
    }
    let block = block_on_player(&s);
    s.obstacles.push(block);
    s.update(&TickInput::default(), DT);

    assert_eq!(s.player.state, Locomotion::Dead);
    assert_eq!(s.phase, GamePhase::GameOver);
    assert_eq!(*recorder.saves.borrow(), vec![s.score]);
    assert!(s.new_record());

    let died = s
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::Death { .. }))
        .count();
    assert_eq!(died, 1);

    // Frozen after death
    let score = s.score;
    for _ in 0..10 {
        s.update(&TickInput::default(), DT);
    }
    assert_eq!(s.score, score);
    assert_eq!(recorder.saves.borrow().len(), 1);
}

#[test]
fn test_restart_reloads_high_score() {
    let (mut s, recorder) = quiet_session(3);
    for _ in 0..60 {
        step_clear(&mut s, TickInput::default());
    }
    let block = block_on_player(&s);
    s.obstacles.push(block);
    s.update(&TickInput::default(), DT);
    let first = s.score;
    assert!(first > 0);

    s.restart();
    assert_eq!(s.phase, GamePhase::Playing);
    assert_eq!(s.score, 0);
    assert_eq!(s.high_score(), first);
    assert!(!s.new_record());
    assert_eq!(recorder.saves.borrow().len(), 1);
}

#[test]
fn test_slide_keeps_runner_low() {
    let (mut s, _) = quiet_session(4);
    assert!(s.slide());

    let mut frames = 0;
    while s.player.state == Locomotion::Slide {
        assert_eq!(s.player.size.y, PLAYER_SLIDE_HEIGHT);
        assert_eq!(s.player.pos.y, GROUND_Y + (PLAYER_HEIGHT - PLAYER_SLIDE_HEIGHT));
        step_clear(&mut s, TickInput::default());
        frames += 1;
        assert!(frames < 60, "slide never ended");
    }

    assert_eq!(s.player.state, Locomotion::Run);
    assert_eq!(s.player.size.y, PLAYER_HEIGHT);
    assert_eq!(s.player.pos.y, GROUND_Y);
}

#[test]
fn test_collected_coin_never_retriggers() {
    let (mut s, _) = quiet_session(5);
    let center = s.player.pos + s.player.size / 2.0;
    s.coins.push(Coin::new(
        center.x - COIN_SIZE / 2.0,
        center.y - COIN_SIZE / 2.0,
        0.0,
    ));

    let mut pickups = 0;
    for _ in 0..10 {
        step_clear(&mut s, TickInput::default());
        pickups += s
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::CoinPickup)
            .count();
    }
    assert_eq!(pickups, 1);
    assert!(s.coins.iter().all(|c| c.pos.x > PLAYER_X + PLAYER_WIDTH));
}

#[test]
fn test_booster_picked_up_once() {
    let (mut s, _) = quiet_session(8);
    let mut booster = Booster::new(BoosterKind::Shield, s.player.pos.x + 5.0);
    booster.pos.y = s.player.pos.y + 10.0;
    s.boosters.push(booster);

    let mut pickups = 0;
    for _ in 0..3 {
        step_clear(&mut s, TickInput::default());
        pickups += s
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::BoosterPickup(_)))
            .count();
    }
    assert_eq!(pickups, 1);
    // Timer only counted down, never reset by a second pickup
    let remaining = s.effects.active.map(|e| e.remaining).unwrap_or(0.0);
    assert!((remaining - (EFFECT_DURATION - 3.0 * DT)).abs() < 1e-4);
}

#[test]
fn test_game_speed_saturates() {
    let mut pacing = Pacing::default();
    let mut last = pacing.game_speed();
    for _ in 0..100 {
        pacing.update(DIFFICULTY_INTERVAL + 0.01);
        let speed = pacing.game_speed();
        assert!(speed >= last);
        assert!(speed <= MAX_GAME_SPEED);
        last = speed;
    }
    assert_eq!(last, MAX_GAME_SPEED);

    // A speed boost may push past the cap for its duration only
    let mut effects = Effects::default();
    let boosted = effects.activate(BoosterKind::Speed, last);
    assert!(boosted > MAX_GAME_SPEED);
    let restored = effects.update(EFFECT_DURATION + 0.1, boosted, pacing.game_speed());
    assert!((restored - MAX_GAME_SPEED).abs() < 1e-5);
    assert!(effects.active.is_none());
}

#[test]
fn test_particle_pool_does_not_leak() {
    let mut rng = Pcg32::seed_from_u64(6);
    let mut particles = Particles::new(PARTICLE_POOL_SIZE);
    for _ in 0..100 {
        particles.emit(glam::Vec2::new(100.0, 100.0), 0xFFD700, 8, &mut rng);
        while !particles.is_empty() {
            particles.update(DT);
        }
    }
    assert_eq!(particles.pool_total(), PARTICLE_POOL_SIZE);
}

#[test]
fn test_restart_releases_particles() {
    let (mut s, _) = quiet_session(7);
    for _ in 0..20 {
        step_clear(&mut s, TickInput::default());
    }
    assert!(!s.particles.is_empty());
    let total = s.particles.pool_total();

    for _ in 0..5 {
        s.restart();
        assert!(s.particles.is_empty());
        for _ in 0..20 {
            step_clear(&mut s, TickInput::default());
        }
    }
    assert_eq!(s.particles.pool_total(), total);
}
