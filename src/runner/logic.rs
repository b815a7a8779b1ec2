//! Endless runner game logic: the Playing/GameOver state machine and the
//! fixed per-frame update order.

use super::collision::first_collision;
use super::spawner::Spawner;
use super::types::{Obstacle, ObstacleKind, Phase, Player};
use crate::core::config::GameConfig;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    Jump,    // Space or Up
    Restart, // R
    Quit,    // Q, Esc or Ctrl+C
    Other,   // Any other key
}

/// Whether the outer loop should keep running after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// What happened during one simulated frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Shape of the obstacle spawned this frame, if any.
    pub spawned: Option<ObstacleKind>,
    /// Obstacles dropped after scrolling off the left edge.
    pub pruned: usize,
    /// The player hit an obstacle and the session ended.
    pub collided: bool,
}

/// A play session.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    pub config: GameConfig,
    pub phase: Phase,
    pub player: Player,
    /// Live obstacles in spawn order.
    pub obstacles: Vec<Obstacle>,
    /// +1 per simulated Playing frame.
    pub score: u64,
    pub spawner: Spawner,
    /// Id given to the next spawned obstacle.
    pub next_obstacle_id: u64,
    /// Sessions started so far, including the current one.
    pub session: u32,
}

impl RunnerGame {
    /// Create a new session in the Playing state.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let game = Self {
            player: Player::new(&config),
            spawner: Spawner::new(config.min_spawn_distance, config.max_spawn_distance, rng),
            config,
            phase: Phase::Playing,
            obstacles: Vec::new(),
            score: 0,
            next_obstacle_id: 0,
            session: 1,
        };
        log::info!(
            "Session {} started (first obstacle in {} frames)",
            game.session,
            game.spawner.threshold
        );
        game
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Spawn an obstacle of `kind` at the right edge of the field.
    pub fn spawn_obstacle(&mut self, kind: ObstacleKind) {
        let obstacle = Obstacle::spawn(
            self.next_obstacle_id,
            kind,
            self.config.field_width,
            &self.config,
        );
        log::debug!(
            "Spawned {} obstacle #{} at x={}",
            kind.name(),
            obstacle.id,
            obstacle.rect.x
        );
        self.next_obstacle_id += 1;
        self.obstacles.push(obstacle);
    }
}

/// Apply one input to the session.
///
/// Jump only matters while Playing and Restart only while GameOver. Quit is
/// honoured in both states.
pub fn process_input<R: Rng>(
    game: &mut RunnerGame,
    input: RunnerInput,
    rng: &mut R,
) -> LoopControl {
    match (game.phase, input) {
        (_, RunnerInput::Quit) => {
            log::info!("Quit requested (score {})", game.score);
            return LoopControl::Quit;
        }
        (Phase::Playing, RunnerInput::Jump) => {
            game.player.jump(game.config.jump_strength);
        }
        (Phase::GameOver, RunnerInput::Restart) => {
            restart(game, rng);
        }
        _ => {}
    }
    LoopControl::Continue
}

/// Advance one Playing frame.
///
/// Order: player physics, spawn, obstacle physics, prune, collision, score.
/// Does nothing once the session is over.
pub fn step_frame<R: Rng>(game: &mut RunnerGame, rng: &mut R) -> FrameReport {
    let mut report = FrameReport::default();
    if game.phase != Phase::Playing {
        return report;
    }

    // 1. Player physics
    game.player
        .update(game.config.gravity, game.config.ground_height);

    // 2. Spawn
    if game.spawner.tick(rng) {
        let kind = ObstacleKind::random(rng);
        game.spawn_obstacle(kind);
        report.spawned = Some(kind);
    }

    // 3. Obstacle physics
    for obstacle in &mut game.obstacles {
        obstacle.update(game.config.speed);
    }

    // 4. Prune obstacles fully past the left edge
    let threshold = game.config.prune_threshold();
    let before = game.obstacles.len();
    game.obstacles
        .retain(|obstacle| obstacle.rect.right() >= threshold);
    report.pruned = before - game.obstacles.len();
    if report.pruned > 0 {
        log::debug!("Pruned {} obstacle(s)", report.pruned);
    }

    // 5. Collision
    if let Some(index) = first_collision(&game.player.rect, &game.obstacles) {
        let obstacle = &game.obstacles[index];
        log::info!(
            "Hit {} obstacle #{} at x={} (score {})",
            obstacle.kind.name(),
            obstacle.id,
            obstacle.rect.x,
            game.score + 1
        );
        game.phase = Phase::GameOver;
        report.collided = true;
    }

    // 6. Score counts every simulated frame, the fatal one included
    game.score += 1;

    report
}

/// Reset player, obstacles, score and spawn timer, and resume Playing.
pub fn restart<R: Rng>(game: &mut RunnerGame, rng: &mut R) {
    game.player = Player::new(&game.config);
    game.obstacles.clear();
    game.score = 0;
    game.spawner.reset(rng);
    game.next_obstacle_id = 0;
    game.phase = Phase::Playing;
    game.session += 1;
    log::info!(
        "Session {} started (first obstacle in {} frames)",
        game.session,
        game.spawner.threshold
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::types::Rect;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    /// A session whose spawner will not fire during a test.
    fn quiet_game(rng: &mut ChaCha8Rng) -> RunnerGame {
        let mut game = RunnerGame::new(GameConfig::default(), rng);
        game.spawner.threshold = u32::MAX;
        game
    }

    // ── Input tests ──

    #[test]
    fn test_new_game_defaults() {
        let mut rng = create_test_rng();
        let game = RunnerGame::new(GameConfig::default(), &mut rng);
        assert_eq!(game.phase, Phase::Playing);
        assert!(!game.is_game_over());
        assert_eq!(game.score, 0);
        assert!(game.obstacles.is_empty());
        assert_eq!(game.spawner.counter, 0);
        assert_eq!(game.session, 1);
        assert_eq!(game.player.rect, Rect::new(50, 280, 10, 50));
    }

    #[test]
    fn test_jump_input_while_playing() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);

        let control = process_input(&mut game, RunnerInput::Jump, &mut rng);
        assert_eq!(control, LoopControl::Continue);
        assert!(game.player.is_jumping);
        assert_eq!(game.player.velocity_y, -15);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        for _ in 0..10 {
            step_frame(&mut game, &mut rng);
        }

        process_input(&mut game, RunnerInput::Restart, &mut rng);
        assert_eq!(game.score, 10);
        assert_eq!(game.session, 1);
    }

    #[test]
    fn test_jump_ignored_when_game_over() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.phase = Phase::GameOver;

        process_input(&mut game, RunnerInput::Jump, &mut rng);
        assert!(!game.player.is_jumping);
        assert_eq!(game.phase, Phase::GameOver);
    }

    #[test]
    fn test_quit_in_both_states() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        assert_eq!(
            process_input(&mut game, RunnerInput::Quit, &mut rng),
            LoopControl::Quit
        );

        game.phase = Phase::GameOver;
        assert_eq!(
            process_input(&mut game, RunnerInput::Quit, &mut rng),
            LoopControl::Quit
        );
    }

    #[test]
    fn test_other_input_is_ignored() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        let before = game.player.clone();

        let control = process_input(&mut game, RunnerInput::Other, &mut rng);
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(game.player, before);
    }

    // ── Frame tests ──

    #[test]
    fn test_score_increments_per_frame() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        for expected in 1..=50 {
            step_frame(&mut game, &mut rng);
            assert_eq!(game.score, expected);
        }
    }

    #[test]
    fn test_step_is_noop_when_game_over() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.spawn_obstacle(ObstacleKind::Standard);
        game.phase = Phase::GameOver;

        let report = step_frame(&mut game, &mut rng);
        assert_eq!(report, FrameReport::default());
        assert_eq!(game.score, 0);
        assert_eq!(game.obstacles[0].rect.x, 800);
    }

    #[test]
    fn test_spawned_obstacle_moves_in_spawn_frame() {
        let mut rng = create_test_rng();
        let mut game = RunnerGame::new(GameConfig::default(), &mut rng);
        game.spawner.threshold = 1;

        let report = step_frame(&mut game, &mut rng);
        assert!(report.spawned.is_some());
        assert_eq!(game.obstacles.len(), 1);
        assert_eq!(game.obstacles[0].rect.x, 797);
        assert_eq!(game.obstacles[0].id, 0);
        assert_eq!(Some(game.obstacles[0].kind), report.spawned);
    }

    #[test]
    fn test_obstacle_ids_increase() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.spawn_obstacle(ObstacleKind::Wide);
        game.spawn_obstacle(ObstacleKind::Tall);
        let ids: Vec<u64> = game.obstacles.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_prune_waits_for_right_edge() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        // Move the player out of the way so nothing collides
        game.player.rect.x = 600;

        game.spawn_obstacle(ObstacleKind::Wide);
        game.obstacles[0].rect.x = -77; // right edge -37

        // right edge -40 after one frame: still kept
        let report = step_frame(&mut game, &mut rng);
        assert_eq!(report.pruned, 0);
        assert_eq!(game.obstacles[0].rect.right(), -40);

        // right edge -43: removed
        let report = step_frame(&mut game, &mut rng);
        assert_eq!(report.pruned, 1);
        assert!(game.obstacles.is_empty());
    }

    #[test]
    fn test_collision_ends_session() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.spawn_obstacle(ObstacleKind::Standard);
        game.obstacles[0].rect.x = 62;

        let report = step_frame(&mut game, &mut rng);
        assert!(report.collided);
        assert_eq!(game.phase, Phase::GameOver);
        // The fatal frame still counts
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_jump_clears_tall_obstacle() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.spawn_obstacle(ObstacleKind::Tall);
        game.obstacles[0].rect.x = 80;

        process_input(&mut game, RunnerInput::Jump, &mut rng);
        for _ in 0..60 {
            let report = step_frame(&mut game, &mut rng);
            assert!(!report.collided, "tall obstacle should be cleared");
        }
        assert_eq!(game.phase, Phase::Playing);
        assert!(!game.player.is_jumping);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut rng = create_test_rng();
        let mut game = RunnerGame::new(GameConfig::default(), &mut rng);
        game.spawner.threshold = 1;
        step_frame(&mut game, &mut rng);
        process_input(&mut game, RunnerInput::Jump, &mut rng);
        step_frame(&mut game, &mut rng);
        game.phase = Phase::GameOver;

        process_input(&mut game, RunnerInput::Restart, &mut rng);

        assert_eq!(game.phase, Phase::Playing);
        assert_eq!(game.score, 0);
        assert!(game.obstacles.is_empty());
        assert_eq!(game.spawner.counter, 0);
        assert_eq!(game.next_obstacle_id, 0);
        assert_eq!(game.player, Player::new(&game.config));
        assert_eq!(game.session, 2);
    }
}
