//! Per-frame session update
//!
//! Phase order is fixed: intents, player, gravity, pacing, camera/background,
//! spawning, entity motion, collisions, effect countdown, particles, score.
//! Later phases read what earlier ones wrote in the same frame.

use super::collision::{Bounds, boxes_overlap, circles_overlap};
use super::physics::apply_velocity;
use super::state::{GameEvent, GamePhase, PARALLAX_LAYERS, Session};
use crate::consts::*;
use crate::palette;

/// Edge-triggered intents for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub jump: bool,
    pub slide: bool,
}

/// Relative scroll rates of the parallax layers (back to front)
const PARALLAX_RATES: [f32; PARALLAX_LAYERS] = [0.2, 0.5, 1.0];
/// Background pixels per second per unit of layer rate
const PARALLAX_SCALE: f32 = 100.0;

const DUST_PARTICLES: usize = 3;
const COIN_PARTICLES: usize = 8;
const SHIELD_PARTICLES: usize = 15;

impl Session {
    /// Advance one frame. Does nothing unless the session is playing, except
    /// that the camera keeps settling after game over.
    pub fn update(&mut self, input: &TickInput, dt: f32) {
        let dt = dt.max(0.0).min(self.settings.max_frame_dt);
        match self.phase {
            GamePhase::Playing => {}
            GamePhase::GameOver => {
                self.camera.update(dt, &mut self.rng);
                return;
            }
            GamePhase::Menu | GamePhase::Paused => return,
        }
        self.clock += dt;

        if input.jump {
            self.jump();
        }
        if input.slide {
            self.slide();
        }

        let flying = self.effects.flying();
        self.player.update(dt, flying, self.game_speed);
        if self.player.should_emit_dust() {
            let feet = self.player.feet();
            self.particles
                .emit(feet, palette::DUST, DUST_PARTICLES, &mut self.rng);
        }
        if !flying {
            self.player.apply_gravity();
        }

        if self.pacing.update(dt) {
            self.game_speed = self.pacing.game_speed();
        }

        self.camera.update(dt, &mut self.rng);
        self.update_background(dt);

        self.spawner.update(
            dt,
            self.pacing.difficulty,
            VIEWPORT_WIDTH,
            &mut self.rng,
            &mut self.obstacles,
            &mut self.coins,
            &mut self.boosters,
        );
        self.update_entities(dt);

        self.resolve_collisions();
        if self.phase == GamePhase::GameOver {
            return;
        }

        self.game_speed = self
            .effects
            .update(dt, self.game_speed, self.pacing.game_speed());
        self.particles.update(dt);
        self.accrue_score(dt);
    }

    fn update_background(&mut self, dt: f32) {
        for (offset, rate) in self.background.iter_mut().zip(PARALLAX_RATES) {
            let velocity = -rate * self.game_speed * PARALLAX_SCALE / BASELINE_UPDATES_PER_SEC;
            *offset = apply_velocity(*offset, velocity, dt);
            if *offset <= -VIEWPORT_WIDTH {
                *offset = 0.0;
            }
        }
    }

    /// Move every entity; drop the ones off-screen or collected last frame
    fn update_entities(&mut self, dt: f32) {
        let speed = self.game_speed;

        self.obstacles.retain_mut(|obstacle| {
            obstacle.update(dt, speed);
            !obstacle.is_off_screen()
        });

        let magnet = self.effects.magnet.then_some(self.player.pos);
        let clock = self.clock;
        self.coins.retain_mut(|coin| {
            if coin.collected {
                return false;
            }
            coin.update(speed, clock);
            if let Some(target) = magnet {
                coin.attract(target, dt);
            }
            !coin.is_off_screen()
        });

        self.boosters.retain_mut(|booster| {
            if booster.collected {
                return false;
            }
            booster.update(dt, speed);
            !booster.is_off_screen()
        });
    }

    /// Player against obstacles, then coins, then boosters
    fn resolve_collisions(&mut self) {
        let player = self.player.bounds();

        for i in 0..self.obstacles.len() {
            let obstacle = &self.obstacles[i];
            if obstacle.absorbed || !boxes_overlap(&player, &obstacle.bounds()) {
                continue;
            }
            let at = obstacle.pos;

            if self.effects.consume_shield() {
                self.obstacles[i].absorbed = true;
                self.camera.shake(10.0, 0.2);
                self.particles
                    .emit(at, palette::SHIELD, SHIELD_PARTICLES, &mut self.rng);
                self.events.push(GameEvent::ShieldBreak);
                log::info!("Shield absorbed a hit");
            } else {
                self.game_over();
                return;
            }
        }

        for coin in &mut self.coins {
            if coin.collected || !circles_overlap(&player, &coin.bounds()) {
                continue;
            }
            coin.collected = true;
            self.score += COIN_BONUS;
            self.particles
                .emit(coin.pos, palette::COIN, COIN_PARTICLES, &mut self.rng);
            self.events.push(GameEvent::CoinPickup);
        }

        for booster in &mut self.boosters {
            if booster.collected || !boxes_overlap(&player, &booster.bounds()) {
                continue;
            }
            booster.collected = true;
            self.game_speed = self.effects.activate(booster.kind, self.game_speed);
            self.events.push(GameEvent::BoosterPickup(booster.kind));
        }
    }

    /// Distance points; the fractional part carries to the next frame
    fn accrue_score(&mut self, dt: f32) {
        self.score_carry += dt * DISTANCE_POINTS_PER_SEC * self.game_speed;
        let whole = self.score_carry.floor();
        self.score += whole as u64;
        self.score_carry -= whole;
    }
}
