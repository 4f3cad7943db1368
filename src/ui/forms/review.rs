//! Review step: summary, consent text and checkbox

use crate::app::App;
use crate::config::IntakeConfig;
use crate::state::{FormData, LoanKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Label/value rows of the summary, in display form
fn summary_rows(form: &FormData) -> Vec<(&'static str, String)> {
    let loan_type = LoanKind::from_value(&form.loan_kind)
        .map(|kind| kind.label().to_string())
        .unwrap_or_else(|| form.loan_kind.clone());

    vec![
        ("Loan Type", loan_type),
        ("Amount", form.amount_desired.clone()),
        (
            "Name",
            format!("{} {}", form.first_name, form.last_name)
                .trim()
                .to_string(),
        ),
        ("Email", form.email.clone()),
        ("Phone", form.phone.clone()),
        ("Business", form.business_name.clone()),
        ("Revenue", form.monthly_revenue.clone()),
        ("Industry", form.industry.clone()),
        ("Credit Score", form.credit_score_range.clone()),
        ("Use of Funds", form.use_of_funds.clone()),
    ]
}

fn consent_text(config: &IntakeConfig) -> String {
    format!(
        "By submitting, you agree that AION Capital may contact you about your request and \
         share your application with potential lenders for the purpose of financing review. \
         Your data will be handled in accordance with our privacy practices. For questions, \
         email {} or call {}.",
        config.contact_email, config.contact_phone
    )
}

fn checkbox_line(consent: bool) -> Line<'static> {
    let (mark, style) = if consent {
        ("[x]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        ("[ ]", Style::default().fg(Color::Gray))
    };
    Line::from(vec![
        Span::styled(mark, style),
        Span::raw(" I agree to the Privacy & Terms."),
        Span::styled("  (Space)", Style::default().fg(Color::DarkGray)),
    ])
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let rows = summary_rows(&app.state.form);
    let summary_height = rows
        .iter()
        .map(|(_, value)| value.lines().count().max(1) as u16)
        .sum::<u16>();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary_height),
            Constraint::Length(1), // Rule
            Constraint::Min(3),    // Consent text
            Constraint::Length(1), // Checkbox
        ])
        .split(area);

    let label_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for (label, value) in rows {
        let mut value_lines = value.lines();
        let first = value_lines.next().unwrap_or_default().to_string();
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), label_style),
            Span::raw(first),
        ]));
        let indent = " ".repeat(label.len() + 2);
        lines.extend(value_lines.map(|l| Line::from(format!("{indent}{l}"))));
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let rule = "─".repeat(chunks[1].width as usize);
    frame.render_widget(
        Paragraph::new(rule).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(consent_text(&app.config))
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(checkbox_line(app.state.wizard.consent)),
        chunks[3],
    );
}
