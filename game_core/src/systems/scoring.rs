use hecs::World;

use crate::components::*;
use crate::{Events, GameMap, GameRng, Score};

/// Check if the ball's edge reached a side edge of the screen.
///
/// Awards the point and queues a score sound; returns the scoring side so
/// the caller can start a new round.
pub fn check_scoring(
    world: &World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let scorer = world
        .query::<(&Motion, &Ball)>()
        .iter()
        .find_map(|(_e, (motion, ball))| {
            if motion.position.x + ball.radius >= map.width {
                Some(Side::Left)
            } else if motion.position.x - ball.radius <= 0.0 {
                Some(Side::Right)
            } else {
                None
            }
        })?;

    score.increment(scorer);
    events.scored(scorer, rng.score_cue());
    log::debug!(
        "{:?} scores, now {} - {}",
        scorer,
        score.left,
        score.right
    );

    Some(scorer)
}
