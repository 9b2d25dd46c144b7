use hecs::World;

use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameEvent, GameRng, Paddle,
    PaddleControl, PointerState, Score, Side,
};

/// One match: a ball, an AI paddle on the left and a pointer paddle on the right
pub struct PongMatch {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    winner: Option<Side>,
    ticks: u64,
}

impl PongMatch {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();

        create_paddle(&mut world, &config, Side::Left, PaddleControl::Ai);
        create_paddle(&mut world, &config, Side::Right, PaddleControl::Pointer);

        let mut ball = Ball::centered(&config);
        ball.reset(&config, &mut rng);
        create_ball(&mut world, ball);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            winner: None,
            ticks: 0,
        }
    }

    /// Advance one tick. Once the match is over this does nothing and
    /// reports no events, so match-over is seen exactly once.
    pub fn tick(&mut self, pointer: PointerState) -> &Events {
        if self.winner.is_some() {
            self.events.clear();
            return &self.events;
        }

        step(
            &mut self.world,
            &self.config,
            &pointer,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.ticks += 1;

        for event in self.events.iter() {
            if let GameEvent::MatchOver { winner } = *event {
                tracing::info!(
                    ?winner,
                    left = self.score.left,
                    right = self.score.right,
                    ticks = self.ticks,
                    "match over"
                );
                self.winner = Some(winner);
            }
        }

        &self.events
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Mutable access to the ball, for scripted set-ups
    pub fn with_ball<R>(&mut self, f: impl FnOnce(&mut Ball) -> R) -> Option<R> {
        self.world
            .query_mut::<&mut Ball>()
            .into_iter()
            .next()
            .map(|(_e, ball)| f(ball))
    }
}
