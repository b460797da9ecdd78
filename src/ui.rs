use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

use crate::session::{Outcome, Session};
use crate::typing_policy::TypingPolicy;

/// Share of the terminal width given to the prompt; the rest is split
/// evenly into side margins.
const PROMPT_WIDTH_PERCENT: u16 = 80;

impl Widget for &Session {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);

        let underlined_dim_bold_style = Style::default()
            .patch(dim_bold_style)
            .add_modifier(Modifier::UNDERLINED);

        let italic_style = Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM);

        let side_margin = (100 - PROMPT_WIDTH_PERCENT) / 2;
        let column = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(side_margin),
                Constraint::Percentage(PROMPT_WIDTH_PERCENT),
                Constraint::Percentage(side_margin),
            ])
            .split(area)[1];

        let fixed_rows = 3; // progress, spacer, legend
        let wrapped = wrap_prompt(self.expected_chars(), column.width as usize);
        let visible_rows = (wrapped.len() as u16)
            .min(area.height.saturating_sub(fixed_rows))
            .max(1);
        let padding = area.height.saturating_sub(visible_rows + fixed_rows) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(padding),
                Constraint::Length(1), // progress
                Constraint::Length(1),
                Constraint::Length(visible_rows),
                Constraint::Min(0),
                Constraint::Length(1), // legend
            ])
            .split(column);

        let cursor = self.cursor_pos();
        let char_span = |idx: usize| match self.input.get(idx) {
            Some(input) if input.outcome == Outcome::Incorrect => Span::styled(
                match input.char {
                    ' ' => "·".to_owned(),
                    c => c.to_string(),
                },
                red_bold_style,
            ),
            Some(input) => Span::styled(
                self.expected_char(idx).unwrap_or(input.char).to_string(),
                green_bold_style,
            ),
            None => Span::styled(
                self.expected_char(idx).map(String::from).unwrap_or_default(),
                if idx == cursor {
                    underlined_dim_bold_style
                } else {
                    dim_bold_style
                },
            ),
        };

        let lines = wrapped
            .iter()
            .map(|range| Line::from(range.clone().map(&char_span).collect::<Vec<Span>>()))
            .collect::<Vec<Line>>();

        let cursor_line = wrapped
            .iter()
            .position(|range| range.contains(&cursor))
            .unwrap_or(wrapped.len().saturating_sub(1));
        let scroll = scroll_offset(cursor_line, wrapped.len(), visible_rows as usize);

        let prompt = Paragraph::new(lines)
            .alignment(if wrapped.len() == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .scroll((scroll as u16, 0));

        prompt.render(chunks[3], buf);

        let progress = Paragraph::new(Span::styled(
            format!("{}/{}", cursor, self.target_len()),
            dim_bold_style,
        ))
        .alignment(Alignment::Center);

        progress.render(chunks[1], buf);

        let legend = Paragraph::new(Span::styled(
            match self.policy {
                TypingPolicy::Normal => "(esc)ape",
                TypingPolicy::Strict => "strict / (esc)ape",
            },
            italic_style,
        ))
        .alignment(Alignment::Center);

        legend.render(chunks[5], buf);
    }
}

/// Split the prompt into rows at most `width` columns wide, breaking after
/// spaces where possible. Every character lands on exactly one row, so a
/// mistyped space stays visible.
fn wrap_prompt(chars: &[char], width: usize) -> Vec<Range<usize>> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let mut used = 0;
        let mut end = start;
        let mut last_break = None;
        while end < chars.len() {
            let w = chars[end].width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            end += 1;
            if chars[end - 1] == ' ' {
                last_break = Some(end);
            }
        }
        if end < chars.len() {
            end = last_break.unwrap_or(end).max(start + 1);
        }
        rows.push(start..end);
        start = end;
    }
    rows
}

/// First row to show so that the cursor row, plus one row of look-ahead when
/// there is one, fits in `visible` rows.
fn scroll_offset(cursor_row: usize, total_rows: usize, visible: usize) -> usize {
    if total_rows <= visible {
        return 0;
    }
    let wanted_bottom = (cursor_row + 2).min(total_rows);
    wanted_bottom.saturating_sub(visible)
}
