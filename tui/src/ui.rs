//! Rendering. Pure functions of `App`; nothing here mutates state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use carefinder_contracts::{
    guidance::{
        GUIDANCE, GUIDANCE_INTRO, GUIDANCE_TITLE, HOME_INTRO, HOME_TITLE, QUESTIONNAIRE_INTRO,
        QUESTIONNAIRE_TITLE,
    },
    recommendation::{Recommendation, DISCLAIMER, SAFETY_NET},
    report::{Duration, RedFlag, Severity},
};
use carefinder_core::Page;

use crate::app::{fields, App, Field, Outcome};

pub fn ui(f: &mut Frame, app: &App) {
    let full = f.area();

    // Split into: body, disclaimer, key bar.
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // sidebar + page
            Constraint::Length(4), // disclaimer
            Constraint::Length(3), // key bar
        ])
        .split(full);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(40)])
        .split(outer_chunks[0]);

    render_sidebar(f, body_chunks[0], app);
    match app.router.current() {
        Page::Home => render_home(f, body_chunks[1]),
        Page::Guidance => render_guidance(f, body_chunks[1]),
        Page::Questionnaire => render_questionnaire(f, body_chunks[1], app),
    }
    render_disclaimer(f, outer_chunks[1]);
    render_footer(f, outer_chunks[2], app);
}

/// Colour used for each pathway, matching the guidance page.
fn pathway_color(rec: Recommendation) -> Color {
    match rec {
        Recommendation::EmergencyCare => Color::Red,
        Recommendation::GpAppointment => Color::Cyan,
        Recommendation::Pharmacy => Color::Green,
    }
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = vec![ListItem::new("")];

    for (i, page) in Page::ALL.iter().enumerate() {
        let style = if app.router.current() == *page {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        items.push(ListItem::new(Line::from(Span::styled(
            format!(" [{}] {:<14}", i + 1, page.title()),
            style,
        ))));
    }

    let list = List::new(items).block(bordered(" CareFinder "));
    f.render_widget(list, area);
}

fn render_home(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", HOME_TITLE),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("  {}", HOME_INTRO)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [3] ", Style::default().fg(Color::Cyan)),
            Span::raw("Start Questionnaire    "),
            Span::styled("[2] ", Style::default().fg(Color::Cyan)),
            Span::raw("Read Guidance"),
        ]),
    ];

    let p = Paragraph::new(lines)
        .block(bordered(" Home "))
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

fn render_guidance(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!("  {}", GUIDANCE_TITLE),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("  {}", GUIDANCE_INTRO)),
    ];

    for section in GUIDANCE.iter() {
        let color = section.pathway.map(pathway_color).unwrap_or(Color::Yellow);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", section.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("  {}", section.summary)));
        for item in section.items {
            lines.push(Line::from(vec![
                Span::styled("    • ", Style::default().fg(color)),
                Span::raw(*item),
            ]));
        }
    }

    let p = Paragraph::new(lines)
        .block(bordered(" Guidance "))
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

fn render_questionnaire(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(22), Constraint::Length(7)])
        .split(area);

    let mut items: Vec<ListItem> = vec![
        ListItem::new(Line::from(Span::styled(
            format!("  {}", QUESTIONNAIRE_INTRO),
            Style::default().fg(Color::Gray),
        ))),
        ListItem::new(""),
    ];

    let current = app.current_field();
    let heading = |text: &'static str| {
        ListItem::new(Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::BOLD),
        )))
    };

    for field in fields() {
        match field {
            Field::RedFlag(flag) if flag == RedFlag::ALL[0] => {
                items.push(heading("  1. Are you experiencing any emergency symptoms?"));
            }
            Field::Severity(s) if s == Severity::ALL[0] => {
                items.push(ListItem::new(""));
                items.push(heading("  2. How severe is your main symptom?"));
            }
            Field::Duration(d) if d == Duration::ALL[0] => {
                items.push(ListItem::new(""));
                items.push(heading("  3. How long have you had this symptom?"));
            }
            Field::Submit => items.push(ListItem::new("")),
            _ => {}
        }

        let (marker, label) = match field {
            Field::RedFlag(flag) => (checkbox(app.is_selected(field)), flag.label()),
            Field::Severity(s) => (radio(app.is_selected(field)), s.label()),
            Field::Duration(d) => (radio(app.is_selected(field)), d.label()),
            Field::Submit => ("", "[ Get Guidance ]"),
        };

        let cursor = if field == current { "  ▸ " } else { "    " };
        let style = if field == current {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{}{}", marker, label), style),
        ])));
    }

    let title = format!(" {} ", QUESTIONNAIRE_TITLE);
    let list = List::new(items).block(bordered(&title));
    f.render_widget(list, chunks[0]);

    render_outcome(f, chunks[1], app);
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x] "
    } else {
        "[ ] "
    }
}

fn radio(selected: bool) -> &'static str {
    if selected {
        "(•) "
    } else {
        "( ) "
    }
}

fn render_outcome(f: &mut Frame, area: Rect, app: &App) {
    let block = bordered(" Guidance For You ");

    let lines: Vec<Line> = match &app.outcome {
        None => vec![Line::from(Span::styled(
            "  Answer the questions, then choose Get Guidance.",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(Outcome::Incomplete { message }) => vec![Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))],
        Some(Outcome::Assessed(assessment)) => {
            let rec = assessment.recommendation;
            vec![
                Line::from(Span::styled(
                    format!("  {}", rec.headline()),
                    Style::default()
                        .fg(pathway_color(rec))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("  {}", rec.advice())),
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", SAFETY_NET),
                    Style::default().fg(Color::Yellow),
                )),
            ]
        }
    };

    let p = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

fn render_disclaimer(f: &mut Frame, area: Rect) {
    let p = Paragraph::new(Span::styled(DISCLAIMER, Style::default().fg(Color::DarkGray)))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![
        Span::styled(" [1-3] ", Style::default().fg(Color::Cyan)),
        Span::raw("Page  "),
        Span::styled("[Tab] ", Style::default().fg(Color::Cyan)),
        Span::raw("Next page  "),
    ];

    if app.router.current() == Page::Questionnaire {
        spans.push(Span::styled("[↑/↓] ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw("Move  "));
        spans.push(Span::styled("[Space/Enter] ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw("Select  "));
        spans.push(Span::styled("[s] ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw("Get guidance  "));
        spans.push(Span::styled("[x] ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw("Clear  "));
    }

    spans.push(Span::styled("[q] ", Style::default().fg(Color::Cyan)));
    spans.push(Span::raw("Quit"));

    let footer = Paragraph::new(Line::from(spans)).block(bordered(""));
    f.render_widget(footer, area);
}
