//! Loan form rendering

use crate::app::App;
use crate::state::{FormField, BUTTON_ROW};
use crate::validate::LoanField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the calculator form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Calculate Your Monthly Payment ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Loan amount
            Constraint::Length(1), //   error line
            Constraint::Length(3), // Interest rate
            Constraint::Length(1), //   error line
            Constraint::Length(3), // Loan term
            Constraint::Length(1), //   error line
            Constraint::Length(3), // Calculate button
            Constraint::Length(1), // Result / transport error
            Constraint::Min(0),
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let fields = [
        (0, &app.state.form.loan_amount, LoanField::Amount),
        (1, &app.state.form.interest_rate, LoanField::Rate),
        (2, &app.state.form.loan_term, LoanField::Term),
    ];
    for (index, field, loan_field) in fields {
        let is_active = app.state.form.active_field_index == index;
        let error = app.state.errors.get(loan_field);
        draw_field(frame, chunks[index * 2], field, is_active, error.is_some());
        draw_field_error(frame, chunks[index * 2 + 1], error);
    }

    draw_button(frame, chunks[6], app);
    draw_result(frame, chunks[7], app);
    draw_help_text(frame, chunks[9]);
}

/// Draw one form field as a bordered block with a cursor when active
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, has_error: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else {
        style
    };

    let value = field.as_text();
    let (display_value, value_style) = if value.is_empty() && !is_active {
        (field.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        (value, style)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw the message line sitting under a failing field
fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
        frame.render_widget(line, area);
    }
}

/// Draw the Calculate button, labeled per the busy flag
fn draw_button(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.state.form.active_field_index == BUTTON_ROW;
    let label = if app.state.busy {
        "Calculating..."
    } else {
        "Calculate"
    };

    let style = if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let button = Paragraph::new(Span::styled(format!("  {label}  "), style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

/// Draw the result line: the payment figure or the transport error
fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(ref message) = app.state.transport_error {
        Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(payment) = app.state.monthly_payment {
        Line::from(Span::styled(
            format!("Your Monthly Payment Is: ${payment}"),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        return;
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the keybinding help line
fn draw_help_text(frame: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": calculate  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]);
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
