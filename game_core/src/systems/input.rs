use hecs::World;

use crate::{Ball, Config, Paddle, PaddleControl, PointerState};

/// Move every paddle from its control source
pub fn drive_paddles(world: &mut World, pointer: &PointerState, config: &Config) {
    // AI paddles chase the ball's vertical center as it was at the start of the tick
    let ball_center_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.rect.center_y());

    let bounds = config.playfield();
    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &PaddleControl)>() {
        match control {
            PaddleControl::Ai => {
                if let Some(target_y) = ball_center_y {
                    paddle.move_toward(target_y, config.ai_tracking_band, &bounds);
                }
            }
            PaddleControl::Pointer => paddle.move_to_pointer(pointer.y, &bounds),
        }
    }
}
