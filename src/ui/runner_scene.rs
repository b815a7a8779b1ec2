//! Endless runner scene rendering.
//!
//! The play field is drawn into a `Canvas` sized to the content area and
//! then stamped as one `Paragraph`. Draw order: ground, obstacles, player,
//! score text, so entities stay visible where they touch the ground.

use super::canvas::Canvas;
use super::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
};
use crate::runner::{ObstacleKind, RunnerGame};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PLAYER_CHAR: char = '┃';
const OBSTACLE_CHAR: char = '█';
const GROUND_CHAR: char = '▀';

const PLAYER_COLOR: Color = Color::Green;
const OBSTACLE_COLOR: Color = Color::Red;
const GROUND_COLOR: Color = Color::Gray;

const TITLE: &str = " Endless Runner ";
const INFO_PANEL_WIDTH: u16 = 22;

/// Render a Playing frame.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let layout = create_game_layout(frame, area, TITLE, PLAYER_COLOR, 8, INFO_PANEL_WIDTH);

    render_play_field(frame, layout.content, game);

    let status = if game.player.is_jumping {
        "Airborne"
    } else {
        "Run!"
    };
    render_status_bar(
        frame,
        layout.status_bar,
        status,
        PLAYER_COLOR,
        &[("[Space/Up]", "Jump"), ("[Q/Esc]", "Quit")],
    );

    render_info_panel(frame, layout.info_panel, game);
}

/// Render the game-over overlay with the final score and restart prompt.
pub fn render_game_over_scene(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    render_game_over_overlay(
        frame,
        area,
        "Game Over!",
        Color::Red,
        &[
            format!("Score: {}", game.score),
            "Press R to Restart".to_string(),
        ],
        &[("[R]", "Restart"), ("[Q/Esc]", "Quit")],
    );
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let mut canvas = Canvas::new(
        area.width,
        area.height,
        game.config.field_width,
        game.config.field_height,
    );
    draw_play_field(&mut canvas, game);

    frame.render_widget(Paragraph::new(canvas.to_lines()), area);
}

/// Draw the world onto a canvas.
pub fn draw_play_field(canvas: &mut Canvas, game: &RunnerGame) {
    let config = &game.config;

    canvas.hline(
        config.ground_height,
        0,
        config.field_width,
        GROUND_CHAR,
        GROUND_COLOR,
    );

    for obstacle in &game.obstacles {
        canvas.fill_rect(&obstacle.rect, OBSTACLE_CHAR, OBSTACLE_COLOR);
    }

    // The player is a vertical line through the center of its box
    let player = &game.player.rect;
    canvas.vline(
        player.center_x(),
        player.y,
        player.bottom(),
        PLAYER_CHAR,
        PLAYER_COLOR,
    );

    canvas.text(1, 0, &format!("Score: {}", game.score), Color::White);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let inner = render_info_panel_frame(frame, area);

    let label = Style::default().fg(Color::DarkGray);
    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Run: ", label),
            Span::styled(game.session.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Obstacles: ", label),
            Span::styled(
                game.obstacles.len().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" {} ", PLAYER_CHAR), Style::default().fg(PLAYER_COLOR)),
            Span::styled("Runner", label),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {} ", OBSTACLE_CHAR),
                Style::default().fg(OBSTACLE_COLOR),
            ),
            Span::styled(obstacle_legend(), label),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn obstacle_legend() -> String {
    ObstacleKind::ALL
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn row_text(canvas: &Canvas, row: u16) -> String {
        (0..canvas.cols())
            .map(|col| canvas.cell(col, row).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    #[test]
    fn test_draw_play_field() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut game = RunnerGame::new(GameConfig::default(), &mut rng);
        game.spawn_obstacle(ObstacleKind::Tall);
        game.obstacles[0].rect.x = 400;
        game.score = 42;

        let mut canvas = Canvas::new(80, 20, 800, 400);
        draw_play_field(&mut canvas, &game);

        assert!(row_text(&canvas, 0).starts_with(" Score: 42"));
        // Player line at column 5, rows 14..=16
        for row in 14..=16 {
            assert_eq!(canvas.cell(5, row).map(|c| c.ch), Some(PLAYER_CHAR));
        }
        // Tall obstacle: columns 40..=41, rows 14..=16 (290..330)
        for row in 14..=16 {
            for col in 40..=41 {
                assert_eq!(canvas.cell(col, row).map(|c| c.ch), Some(OBSTACLE_CHAR));
            }
        }
        // Ground elsewhere on row 16
        assert_eq!(canvas.cell(20, 16).map(|c| c.ch), Some(GROUND_CHAR));
        assert_eq!(canvas.cell(20, 15).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn test_obstacle_legend() {
        assert_eq!(obstacle_legend(), "Standard/Wide/Tall");
    }
}
