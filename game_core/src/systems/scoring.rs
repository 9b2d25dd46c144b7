use crate::{Ball, Config, Events, GameEvent, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the arena (scoring)
///
/// At most one point is awarded per call: the ball is re-served from the
/// center as soon as it is scored.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.rect.right() <= 0.0 {
            Side::Right
        } else if ball.rect.left() >= config.arena_width {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        events.push(GameEvent::Scored { side: scorer });
        tracing::debug!(
            ?scorer,
            left = score.left,
            right = score.right,
            "point scored"
        );

        ball.reset(config, rng);

        if let Some(winner) = score.has_winner(config.win_score) {
            events.push(GameEvent::MatchOver { winner });
        }
    }
}
