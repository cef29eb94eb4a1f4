use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;

/// Draws the win popup shown once the snake covers the whole board.
pub fn render_board_cleared(frame: &mut Frame<'_>, area: Rect, length: usize, theme: &Theme) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("BOARD CLEARED").style(
            Style::new()
                .fg(theme.snake_body)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Length: {length}")),
        Line::from(""),
        Line::from("[Esc]/[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.hud_text).bg(theme.background))
            .block(
                Block::bordered()
                    .border_style(Style::new().fg(theme.border_fg))
                    .title(" you win "),
            ),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
