//! Drawing the Purrfect Saver window

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Focus};

/// Window title
pub const TITLE: &str = "Purrfect Saver";

/// Button label
pub const SAVE_BUTTON_LABEL: &str = "Save Money";

const WINDOW_WIDTH: u16 = 52;
const WINDOW_HEIGHT: u16 = 16;

/// Create a fixed-size centered rect
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Render the whole window and remember where the controls landed
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(WINDOW_WIDTH, WINDOW_HEIGHT, frame.area());

    let block = Block::default()
        .title(format!(" {} ", TITLE))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Amount field
            Constraint::Length(3), // Button
            Constraint::Length(1), // Feedback
            Constraint::Length(1), // Counters
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("How much did you save today? 🐱"),
        chunks[0],
    );

    render_amount(frame, app, chunks[1]);
    render_button(frame, app, chunks[2]);

    if let Some(feedback) = &app.feedback {
        let color = if feedback.is_error() {
            Color::Red
        } else {
            Color::Green
        };
        frame.render_widget(
            Paragraph::new(feedback.message())
                .style(Style::default().fg(color))
                .alignment(Alignment::Center),
            chunks[3],
        );
    }

    frame.render_widget(
        Paragraph::new(app.rewards.status_line())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[4],
    );

    frame.render_widget(
        Paragraph::new(Line::from("Enter: save  Tab: switch  Esc: quit"))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[6],
    );
}

fn render_amount(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Amount;
    let border = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.amount.focused = focused;
    frame.render_widget(&app.amount, inner);
    app.amount_area = Some(area);
}

fn render_button(frame: &mut Frame, app: &mut App, area: Rect) {
    let width = (SAVE_BUTTON_LABEL.len() as u16 + 6).min(area.width);
    let button = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);

    let style = if app.focus == Focus::SaveButton {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    frame.render_widget(
        Paragraph::new(SAVE_BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL)),
        button,
    );
    app.button_area = Some(button);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        screen
    }

    #[test]
    fn test_window_shows_form() {
        let mut app = App::new();
        let screen = draw(&mut app);

        assert!(screen.contains(TITLE));
        assert!(screen.contains(SAVE_BUTTON_LABEL));
        assert!(screen.contains("Level: 1 | Points: 0 | Streak: 0"));
        assert!(app.button_area.is_some());
        assert!(app.amount_area.is_some());
    }

    #[test]
    fn test_window_shows_feedback_after_submit() {
        let mut app = App::new();
        for c in "25".chars() {
            app.amount.insert(c);
        }
        app.submit();

        let screen = draw(&mut app);

        assert!(screen.contains("You gained 5 XP!"));
        assert!(screen.contains("Level: 1 | Points: 5 | Streak: 1"));
    }

    #[test]
    fn test_window_shows_error() {
        let mut app = App::new();
        app.amount.insert('x');
        app.submit();

        let screen = draw(&mut app);
        assert!(screen.contains("Please enter a valid number!"));
    }
}
