use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::Game;

/// Values the HUD shows beyond what the game itself carries.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    pub theme: &'a Theme,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, game: &Game, info: &HudInfo<'_>) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let bounds = game.bounds();
    let line = Line::from(vec![
        Span::styled(
            format!(" Score: {}", game.score),
            Style::new()
                .fg(info.theme.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  Hi: {}", info.high_score.max(game.score)),
            Style::new().fg(info.theme.hud_score),
        ),
        Span::styled(
            format!("  Length: {}", game.snake.len()),
            Style::new().fg(info.theme.menu_footer),
        ),
        Span::styled(
            format!("  {}×{}", bounds.max_x + 1, bounds.max_y + 1),
            Style::new().fg(info.theme.menu_footer),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), hud_area);

    play_area
}
