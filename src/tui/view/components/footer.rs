use crate::tui::state::PageInfo;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_browse_footer(f: &mut Frame, area: Rect, pager: Option<&PageInfo>) {
    let mut footer_spans = vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::raw(" Nav  "),
        Span::styled("←→", Style::default().fg(Color::Cyan)),
        Span::raw(" Category  "),
        Span::styled("n/p", Style::default().fg(Color::Cyan)),
        Span::raw(" Page  "),
        Span::styled("r", Style::default().fg(Color::Cyan)),
        Span::raw(" Reload  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" Details  "),
        Span::styled("?", Style::default().fg(Color::Cyan)),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ];

    if let Some(pager) = pager {
        footer_spans.push(Span::raw("  "));
        footer_spans.push(Span::styled(
            format!(
                "| Page {}{}",
                pager.page,
                if pager.has_next { " →" } else { "" }
            ),
            Style::default().fg(Color::Green),
        ));
    }

    let footer =
        Paragraph::new(Line::from(footer_spans)).block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}
