use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{GLYPH_FOOD, GLYPH_SNAKE, GridBounds, Theme};
use crate::game::{Game, GameStatus};
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, game: &Game, info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, game, info);

    let theme = info.theme;
    let block = Block::bordered().border_style(Style::new().fg(theme.border));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, game, theme);
    render_snake(frame, inner, game, theme);

    if game.is_start_screen() {
        render_start_menu(frame, play_area, info.high_score, theme);
        return;
    }

    match game.status {
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            game.score,
            info.high_score,
            game.death_reason,
            theme,
        ),
        GameStatus::Playing => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for position in &game.food {
        let Some((x, y)) = logical_to_terminal(inner, game.bounds(), *position) else {
            continue;
        };

        buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let buffer = frame.buffer_mut();

    // Body first, tail to head; the front of the iteration is the tail.
    for (index, segment) in game.snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, game.bounds(), *segment) else {
            continue;
        };

        let color = if index == 0 {
            theme.snake_tail
        } else {
            theme.snake_body
        };
        buffer.set_string(x, y, GLYPH_SNAKE, Style::new().fg(color));
    }

    if let Some((x, y)) = logical_to_terminal(inner, game.bounds(), game.snake.head()) {
        buffer.set_string(
            x,
            y,
            GLYPH_SNAKE,
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD),
        );
    }
}

/// Maps a logical cell to a terminal cell inside `inner`, clipping
/// anything off the board or outside the drawable rect (a head that just
/// left the board simply is not drawn).
fn logical_to_terminal(inner: Rect, bounds: GridBounds, position: Position) -> Option<(u16, u16)> {
    if bounds.is_out_of_bounds(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
