use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Rows reserved below the board for the score line.
pub const HUD_HEIGHT: u16 = 1;

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    pub best_length: usize,
    pub theme: &'a Theme,
}

/// Renders the score line into `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo<'_>) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(score_line(
            state.score(),
            info.best_length,
            usize::from(area.width),
            info.theme,
        ))
        .alignment(Alignment::Center),
        area,
    );
}

/// Builds `Length: N │ Best: M`, switching to `L`/`B` labels when the full
/// text does not fit.
fn score_line(
    length: usize,
    best_length: usize,
    available_width: usize,
    theme: &Theme,
) -> Line<'static> {
    let compact = score_line_width(length, best_length) > available_width;
    let (length_label, best_label) = if compact {
        ("L", "B")
    } else {
        ("Length", "Best")
    };

    let value_style = Style::new().fg(theme.hud_text).add_modifier(Modifier::BOLD);
    let label_style = Style::new().fg(theme.hud_text);

    Line::from(vec![
        Span::styled(format!("{length_label}: "), label_style),
        Span::styled(length.to_string(), value_style),
        Span::styled(" │ ", label_style),
        Span::styled(format!("{best_label}: "), label_style),
        Span::styled(best_length.to_string(), value_style),
    ])
}

/// Width of the full-label line; `│` counts as one column.
fn score_line_width(length: usize, best_length: usize) -> usize {
    "Length".len()
        + "Best".len()
        + 2 // ": "
        + length.to_string().len()
        + 3 // " │ "
        + 2 // ": "
        + best_length.to_string().len()
}

#[cfg(test)]
mod tests {
    use crate::config::THEME;

    use super::{score_line, score_line_width};

    fn text(length: usize, best: usize, width: usize) -> String {
        score_line(length, best, width, &THEME)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn full_labels_when_space_allows() {
        assert_eq!(text(3, 12, 40), "Length: 3 │ Best: 12");
        assert_eq!(score_line_width(3, 12), 20);
    }

    #[test]
    fn compact_labels_in_narrow_area() {
        assert_eq!(text(3, 12, 19), "L: 3 │ B: 12");
        assert_eq!(text(3, 12, 20), "Length: 3 │ Best: 12");
    }
}
