//! Player/obstacle collision detection.

use super::types::{Obstacle, Rect};

/// Exact axis-aligned overlap test, no hitbox shrinking.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Index of the first obstacle (in spawn order) touching the player.
pub fn first_collision(player: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| rects_overlap(player, &obstacle.rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::runner::types::ObstacleKind;

    #[test]
    fn test_overlapping_rects_collide() {
        let player = Rect::new(50, 300, 10, 50);
        let obstacle = Rect::new(55, 310, 20, 20);
        assert!(rects_overlap(&player, &obstacle));
        assert!(rects_overlap(&obstacle, &player));
    }

    #[test]
    fn test_separated_rects_do_not_collide() {
        let player = Rect::new(50, 300, 10, 50);
        let obstacle = Rect::new(200, 310, 20, 20);
        assert!(!rects_overlap(&player, &obstacle));
    }

    #[test]
    fn test_vertical_clearance_avoids_collision() {
        // Horizontally overlapping but fully above
        let player = Rect::new(50, 200, 10, 50);
        let obstacle = Rect::new(45, 290, 20, 40);
        assert!(!rects_overlap(&player, &obstacle));
    }

    #[test]
    fn test_first_collision_in_spawn_order() {
        let config = GameConfig::default();
        let player = Rect::new(50, 280, 10, 50);
        let obstacles = vec![
            Obstacle::spawn(0, ObstacleKind::Standard, 400, &config),
            Obstacle::spawn(1, ObstacleKind::Wide, 30, &config),
            Obstacle::spawn(2, ObstacleKind::Tall, 52, &config),
        ];
        assert_eq!(first_collision(&player, &obstacles), Some(1));
    }

    #[test]
    fn test_no_obstacles_no_collision() {
        let player = Rect::new(50, 280, 10, 50);
        assert_eq!(first_collision(&player, &[]), None);
    }
}
