pub mod audio;
pub mod components;
pub mod config;
pub mod fsm;
pub mod map;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use audio::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    pointer: &PointerState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles from their control sources
    drive_paddles(world, pointer, config);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, then paddles)
    check_collisions(world, config, events);

    // 4. Check scoring (ball exited arena)
    check_scoring(world, config, score, events, rng);
}

/// Helper to create a paddle entity at its starting position
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    side: Side,
    control: PaddleControl,
) -> hecs::Entity {
    let paddle = Paddle::new(side, config.paddle_start(side), config.paddle_speed);
    world.spawn((paddle, control))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
