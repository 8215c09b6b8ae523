//! Level session control.
//!
//! A [`LevelSession`] owns one level of play: the generated world geometry,
//! the SPAWNED → WON state machine, and the per-frame ordering of motion,
//! wall collision, and goal detection. Presentation reacts to the discrete
//! [`LevelEvent`]s the session reports; the session itself never draws or
//! plays anything.

pub mod collision;
pub mod messages;
pub mod world;

use std::time::Instant;

use glam::Vec2;
use rand::Rng;

use crate::config::GameConfig;
use crate::maze::generator;
use world::WorldModel;

/// Lifecycle of a single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelState {
    /// Navigating. Collisions reset the offset but stay in this state.
    Spawned,
    /// Goal reached. Terminal until the next level is started.
    Won,
}

/// Discrete events emitted by [`LevelSession::frame`] for the event sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelEvent {
    /// The avatar touched a wall and was reset to the start zone.
    Bonk,
    /// The avatar reached the goal; the level is over.
    Won {
        /// Seconds from level spawn to the winning frame.
        elapsed_seconds: f64,
    },
}

/// One level of play: generated geometry plus scroll and timing state.
///
/// Rebuilt from scratch on every level change; nothing is patched in place
/// across levels.
pub struct LevelSession {
    /// World geometry and scroll offset.
    pub world: WorldModel,
    state: LevelState,
    config: GameConfig,
    started_at: Instant,
}

impl LevelSession {
    /// Builds and spawns a new level: generates the maze, converts it to
    /// wall geometry, and centers the avatar on the start zone.
    pub fn start<R: Rng + ?Sized>(config: &GameConfig, viewport: Vec2, rng: &mut R) -> Self {
        let grid = generator::generate(config.cols, config.rows, rng);
        let mut world = WorldModel::build(&grid, config.cell_size, config.wall_thickness);
        world.reset_offset(viewport);

        Self {
            world,
            state: LevelState::Spawned,
            config: config.clone(),
            started_at: Instant::now(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LevelState {
        self.state
    }

    /// Seconds since the level spawned.
    pub fn elapsed_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    /// Runs one frame of core logic.
    ///
    /// Order within the frame: apply motion, test walls, test the goal.
    /// Walls are tested with the forgiving radius
    /// (`avatar_radius * wall_forgiveness`); a hit resets the offset to the
    /// spawn value, reports [`LevelEvent::Bonk`], and skips the goal test
    /// for that frame. The goal is tested with the full radius against the
    /// end zone shrunk by `goal_inset`; reaching it is terminal, and a won
    /// session ignores all further motion.
    pub fn frame(&mut self, motion: Vec2, viewport: Vec2) -> Option<LevelEvent> {
        if self.state != LevelState::Spawned {
            return None;
        }

        self.world.apply_motion(motion, self.config.sensitivity);
        let pos = self.world.avatar_maze_pos(viewport);

        let bonk_radius = self.config.avatar_radius * self.config.wall_forgiveness;
        if self.world.hits_wall(pos, bonk_radius) {
            self.world.reset_offset(viewport);
            return Some(LevelEvent::Bonk);
        }

        if self
            .world
            .reached_goal(pos, self.config.avatar_radius, self.config.goal_inset)
        {
            self.state = LevelState::Won;
            return Some(LevelEvent::Won {
                elapsed_seconds: self.elapsed_seconds(),
            });
        }

        None
    }
}
