use glam::Vec2;
use hecs::World;

use crate::hud::{self, HudLine};
use crate::systems::*;
use crate::*;

/// One local match: the human on the left against the AI on the right.
///
/// Owns the world and every piece of state that outlives a frame.
pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub speed_record: SpeedRecord,
    pub ai: AiState,
    pub events: Events,
    pub rng: GameRng,
    pub input: VerticalInput,
}

impl LocalGame {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let mut ai = AiState::default();

        // Create paddles
        create_paddle(&mut world, &config, PLAYER_SIDE);
        create_paddle(&mut world, &config, AI_SIDE);

        // Create ball and serve it
        create_ball(
            &mut world,
            &config,
            map.ball_spawn(),
            Vec2::ZERO,
            config.ball_speed_base,
        );
        reset_round(&mut world, &map, &config, &mut rng, &mut ai);

        Self {
            world,
            time: Time::new(0.0, 0.0),
            map,
            config,
            score: Score::new(),
            speed_record: SpeedRecord::new(),
            ai,
            events: Events::new(),
            rng,
            input: VerticalInput::new(),
        }
    }

    /// Apply this frame's keys: steer the player paddle, maybe restart
    pub fn read_input(&mut self, frame: &FrameInput) {
        apply_player_input(&mut self.world, PLAYER_SIDE, &mut self.input, frame);

        if frame.restart_pressed {
            self.reset();
        }
    }

    /// Advance the simulation by one rendered frame
    pub fn update(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.speed_record,
            &mut self.ai,
            &mut self.events,
            &mut self.rng,
        );
    }

    pub fn tick(&mut self, frame: &FrameInput, dt: f32) -> &Events {
        self.read_input(frame);
        self.update(dt);
        &self.events
    }

    /// Full reset: positions, score and speed record
    pub fn reset(&mut self) {
        reset_game(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.rng,
            &mut self.ai,
            &mut self.score,
            &mut self.speed_record,
        );
        log::info!("game restarted");
    }

    pub fn ball(&self) -> Option<(Motion, Ball)> {
        self.world
            .query::<(&Motion, &Ball)>()
            .iter()
            .next()
            .map(|(_e, (motion, ball))| (*motion, *ball))
    }

    /// Both paddles, left first
    pub fn paddles(&self) -> Vec<(Motion, Paddle)> {
        let mut paddles: Vec<(Motion, Paddle)> = self
            .world
            .query::<(&Motion, &Paddle)>()
            .iter()
            .map(|(_e, (motion, paddle))| (*motion, *paddle))
            .collect();
        paddles.sort_by_key(|(_m, paddle)| paddle.side != Side::Left);
        paddles
    }

    pub fn paddle(&self, side: Side) -> Option<(Motion, Paddle)> {
        self.paddles().into_iter().find(|(_m, p)| p.side == side)
    }

    pub fn ball_speed(&self) -> f32 {
        self.ball().map_or(0.0, |(motion, _ball)| motion.speed)
    }

    pub fn hud(&self) -> Vec<HudLine> {
        hud::layout(
            &self.score,
            self.ball_speed(),
            self.speed_record.best(),
            &self.map,
        )
    }
}
