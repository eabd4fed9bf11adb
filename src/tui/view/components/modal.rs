use crate::model::Course;
use crate::tui::view::components::centered_rect;
use crate::utils::format_created_date;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_course_modal(f: &mut Frame, course: &Course) {
    let area = centered_rect(60, 45, f.area());

    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            course.subject.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Id: ", Style::default().fg(Color::Gray)),
            Span::raw(course.id.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Created: ", Style::default().fg(Color::Gray)),
            Span::raw(format_created_date(&course.created_date)),
        ]),
        Line::from(vec![
            Span::styled("Image: ", Style::default().fg(Color::Gray)),
            Span::styled(course.image.clone(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().title(" Course ").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn render_help_modal(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());

    let help_text = vec![
        Line::from(vec![Span::styled(
            "CourseHub Help",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Navigation",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  ↑/↓    ", Style::default().fg(Color::Cyan)),
            Span::raw("Move through courses"),
        ]),
        Line::from(vec![
            Span::styled("  ←/→    ", Style::default().fg(Color::Cyan)),
            Span::raw("Switch category filter"),
        ]),
        Line::from(vec![
            Span::styled("  n/p    ", Style::default().fg(Color::Cyan)),
            Span::raw("Next / previous page"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Actions",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  Enter  ", Style::default().fg(Color::Cyan)),
            Span::raw("Course details"),
        ]),
        Line::from(vec![
            Span::styled("  r      ", Style::default().fg(Color::Cyan)),
            Span::raw("Reload categories and courses"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ?      ", Style::default().fg(Color::Cyan)),
            Span::raw("Show this help"),
        ]),
        Line::from(vec![
            Span::styled("  q      ", Style::default().fg(Color::Cyan)),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press q, Esc, or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph =
        Paragraph::new(help_text).block(Block::default().title(" Help ").borders(Borders::ALL));

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
