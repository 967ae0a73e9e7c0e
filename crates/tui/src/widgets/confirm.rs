//! Yes/no confirmation dialog.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::layout::centered_rect;

const CONFIRM_WIDTH: u16 = 48;
const CONFIRM_HEIGHT: u16 = 7;

const YES_LABEL: &str = "[ Yes (y) ]";
const NO_LABEL: &str = "[ No (n) ]";

/// Where each part of the dialog is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmLayout {
    /// The whole dialog; clicks outside it decline.
    pub outer: Rect,
    /// The question.
    pub prompt: Rect,
    /// The "yes" button.
    pub yes: Rect,
    /// The "no" button.
    pub no: Rect,
}

/// Computes the dialog layout centered within `area`.
#[must_use]
pub fn confirm_layout(area: Rect) -> ConfirmLayout {
    let outer = centered_rect(CONFIRM_WIDTH, CONFIRM_HEIGHT, area);
    let inner = Block::default().borders(Borders::ALL).inner(outer);

    let [prompt, _, buttons] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
            .areas(inner);

    let yes_width = u16::try_from(YES_LABEL.chars().count()).unwrap_or(u16::MAX);
    let no_width = u16::try_from(NO_LABEL.chars().count()).unwrap_or(u16::MAX);
    let total = yes_width.saturating_add(3).saturating_add(no_width);
    let x = buttons.x + buttons.width.saturating_sub(total) / 2;

    ConfirmLayout {
        outer,
        prompt,
        yes: Rect::new(x, buttons.y, yes_width, buttons.height).intersection(buttons),
        no: Rect::new(x + yes_width + 3, buttons.y, no_width, buttons.height).intersection(buttons),
    }
}

/// Renders `prompt` in a dialog centered within `area`.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_tui::widgets::render_confirm_dialog;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_confirm_dialog("Delete this card?", area, &mut buf);
/// ```
pub fn render_confirm_dialog(prompt: &str, area: Rect, buf: &mut Buffer) {
    let layout = confirm_layout(area);

    Clear.render(layout.outer, buf);

    Block::default()
        .title(Span::styled(
            " Confirm ",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightRed))
        .render(layout.outer, buf);

    Paragraph::new(Line::from(prompt))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(layout.prompt, buf);

    Paragraph::new(Span::styled(YES_LABEL, Style::default().fg(Color::Red)))
        .render(layout.yes, buf);
    Paragraph::new(Span::styled(NO_LABEL, Style::default().fg(Color::Green)))
        .render(layout.no, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn render_confirm_dialog_shows_prompt() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_confirm_dialog("Are you sure you want to delete all cards?", area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Confirm"));
        assert!(content.contains("Are you sure you want to delete all cards?"));
        assert!(content.contains(YES_LABEL));
        assert!(content.contains(NO_LABEL));
    }

    #[test]
    fn buttons_sit_inside_the_dialog() {
        let layout = confirm_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.outer, Rect::new(16, 8, 48, 7));
        assert!(layout.outer.contains(layout.yes.as_position()));
        assert!(layout.outer.contains(layout.no.as_position()));
        assert!(layout.yes.right() < layout.no.x);
        assert_eq!(layout.yes.y, 13);
    }

    #[test]
    fn render_confirm_dialog_handles_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);

        // Should not panic with small area
        render_confirm_dialog("Delete this card?", area, &mut buf);
    }
}
