use ratatui::layout::Rect;
use ratatui::style::{Color, Style as CellStyle};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Style, Theme, BORDER_HALF_BLOCK, GLYPH_HALF_UPPER};
use crate::game::GameState;
use crate::geometry::{GridGeometry, Position};
use crate::ui::hud::{render_hud, HudInfo, HUD_HEIGHT};
use crate::ui::menu::render_board_cleared;

/// Per-frame presentation options.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub style: Style,
    pub theme: &'a Theme,
    /// Set once the snake has filled the board and no food can be placed.
    pub board_cleared: bool,
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, options: RenderOptions<'_>) {
    let area = frame.area();
    let geometry = state.geometry();
    let hud_height = if options.style.is_detailed() {
        HUD_HEIGHT
    } else {
        0
    };

    let board_area = board_rect(area, geometry, hud_height);
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(
            CellStyle::new()
                .fg(options.theme.border_fg)
                .bg(options.theme.border_bg),
        );

    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let cells = compose_cells(state, options.style, options.theme);
    render_cells(frame, inner, geometry, &cells, options.theme);

    if options.style.is_detailed() {
        let hud_area = Rect {
            x: board_area.x,
            y: board_area.bottom(),
            width: board_area.width,
            height: hud_height.min(area.bottom().saturating_sub(board_area.bottom())),
        };
        render_hud(
            frame,
            hud_area,
            state,
            &HudInfo {
                best_length: state.best_length,
                theme: options.theme,
            },
        );
    }

    if options.board_cleared {
        render_board_cleared(frame, board_area, state.score(), options.theme);
    }
}

/// Resolves the color of every grid cell, row-major.
///
/// Paint order: background, erased previous tail, snake, food.
#[must_use]
pub fn compose_cells(state: &GameState, style: Style, theme: &Theme) -> Vec<Color> {
    let geometry = state.geometry();
    let columns = grid_len(geometry.columns());
    let rows = grid_len(geometry.rows());

    let mut cells = Vec::with_capacity(columns * rows);
    for row in 0..rows {
        for column in 0..columns {
            cells.push(background_color(column, row, style, theme));
        }
    }

    if let Some(tail) = state.snake.last_tail() {
        if let Some(index) = cell_index(geometry, tail) {
            cells[index] = theme.background;
        }
    }

    let head = state.snake.head();
    for segment in state.snake.segments() {
        let Some(index) = cell_index(geometry, *segment) else {
            continue;
        };

        cells[index] = if *segment == head && style.is_detailed() {
            theme.snake_eyes
        } else {
            theme.snake_body
        };
    }

    if let Some(index) = cell_index(geometry, state.food.position) {
        cells[index] = theme.food;
    }

    cells
}

fn background_color(column: usize, row: usize, style: Style, theme: &Theme) -> Color {
    if style.is_detailed() && (column + row) % 2 == 1 {
        theme.grid_line
    } else {
        theme.background
    }
}

/// Two grid rows share one terminal row: the upper half-block takes the
/// top cell as foreground and the bottom cell as background.
fn render_cells(
    frame: &mut Frame<'_>,
    inner: Rect,
    geometry: GridGeometry,
    cells: &[Color],
    theme: &Theme,
) {
    let columns = grid_len(geometry.columns());
    let rows = grid_len(geometry.rows());
    let buffer = frame.buffer_mut();

    for terminal_row in 0..rows.div_ceil(2) {
        let Some(y) = offset(inner.y, terminal_row, inner.bottom()) else {
            break;
        };

        for column in 0..columns {
            let Some(x) = offset(inner.x, column, inner.right()) else {
                break;
            };

            let top = cells[terminal_row * 2 * columns + column];
            let bottom = cells
                .get((terminal_row * 2 + 1) * columns + column)
                .copied()
                .filter(|_| terminal_row * 2 + 1 < rows)
                .unwrap_or(theme.border_bg);

            buffer.set_string(x, y, GLYPH_HALF_UPPER, CellStyle::new().fg(top).bg(bottom));
        }
    }
}

/// Board plus border, centered in the space left above the HUD.
fn board_rect(area: Rect, geometry: GridGeometry, hud_height: u16) -> Rect {
    let columns = u16::try_from(geometry.columns()).unwrap_or(u16::MAX);
    let terminal_rows = u16::try_from(geometry.rows()).unwrap_or(u16::MAX).div_ceil(2);

    let width = columns.saturating_add(2).min(area.width);
    let height = terminal_rows
        .saturating_add(2)
        .min(area.height.saturating_sub(hud_height));

    let total_height = height.saturating_add(hud_height).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - total_height) / 2,
        width,
        height,
    }
}

fn cell_index(geometry: GridGeometry, position: Position) -> Option<usize> {
    if !geometry.contains(position) {
        return None;
    }

    let (column, row) = geometry.to_grid(position);
    Some(grid_len(row) * grid_len(geometry.columns()) + grid_len(column))
}

fn grid_len(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}

fn offset(start: u16, index: usize, end: u16) -> Option<u16> {
    let index = u16::try_from(index).ok()?;
    let value = start.checked_add(index)?;
    (value < end).then_some(value)
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::config::{Style, THEME};
    use crate::food::Food;
    use crate::game::GameState;
    use crate::geometry::{GridGeometry, Position};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{compose_cells, render, RenderOptions};

    fn small_state() -> GameState {
        let geometry = GridGeometry::new(80, 60, 20).unwrap();
        let mut state = GameState::new_with_seed(geometry, 9).unwrap();
        state.snake = Snake::from_segments(
            geometry,
            vec![Position::new(40, 20), Position::new(20, 20)],
            Direction::Right,
        );
        state.food = Food::new(Position::new(60, 40));
        state
    }

    #[test]
    fn composed_cells_paint_snake_and_food() {
        let state = small_state();

        let cells = compose_cells(&state, Style::Classic, &THEME);

        assert_eq!(cells.len(), 12);
        // Row 1: columns 1 and 2 hold the snake.
        assert_eq!(cells[4 + 1], THEME.snake_body);
        assert_eq!(cells[4 + 2], THEME.snake_body);
        // Row 2, column 3 holds the food.
        assert_eq!(cells[8 + 3], THEME.food);
        assert_eq!(cells[0], THEME.background);
        assert_eq!(cells[1], THEME.background);
    }

    #[test]
    fn detailed_style_marks_head_and_grid() {
        let state = small_state();

        let cells = compose_cells(&state, Style::Detailed, &THEME);

        assert_eq!(cells[4 + 2], THEME.snake_eyes);
        assert_eq!(cells[4 + 1], THEME.snake_body);
        assert_eq!(cells[0], THEME.background);
        assert_eq!(cells[1], THEME.grid_line);
    }

    #[test]
    fn previous_tail_is_erased_to_background() {
        let mut state = small_state();
        state.snake = Snake::from_segments(
            state.geometry(),
            vec![Position::new(20, 20), Position::new(20, 0)],
            Direction::Down,
        );
        state.snake.tick();

        let cells = compose_cells(&state, Style::Detailed, &THEME);

        // (20, 0) is a grid-line cell in the detailed pattern.
        assert_eq!(state.snake.last_tail(), Some(Position::new(20, 0)));
        assert_eq!(cells[1], THEME.background);
        assert_eq!(cells[2], THEME.background);
        assert_eq!(cells[3], THEME.grid_line);
    }

    #[test]
    fn frame_renders_into_small_terminal_without_panicking() {
        let state = GameState::new_with_seed(GridGeometry::standard(), 1).unwrap();

        for (width, height) in [(80, 24), (10, 5), (1, 1)] {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal
                .draw(|frame| {
                    render(
                        frame,
                        &state,
                        RenderOptions {
                            style: Style::Detailed,
                            theme: &THEME,
                            board_cleared: true,
                        },
                    )
                })
                .unwrap();
        }
    }

    #[test]
    fn head_cell_is_drawn_as_half_block() {
        let state = GameState::new_with_seed(GridGeometry::standard(), 1).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal
            .draw(|frame| {
                render(
                    frame,
                    &state,
                    RenderOptions {
                        style: Style::Classic,
                        theme: &THEME,
                        board_cleared: false,
                    },
                )
            })
            .unwrap();

        // 34x14 board centered in 80x24: inner origin at (24, 6).
        // Head at grid (16, 12) is the top half of terminal row 6.
        let buffer = terminal.backend().buffer();
        let cell = buffer.cell((24 + 16, 6 + 6)).unwrap();
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, THEME.snake_body);
    }
}
