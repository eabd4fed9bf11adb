use crate::model::{Category, Course};
use crate::tui::state::PageInfo;
use crate::tui::view::components::footer::render_browse_footer;
use crate::utils::{format_created_date, truncate_middle};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListState;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

pub struct BrowseData<'a> {
    pub list_state: &'a mut ListState,
    /// `None` while categories are still unloaded.
    pub categories: Option<&'a [Category]>,
    pub courses: &'a [Course],
    pub pager: Option<&'a PageInfo>,
    pub selected_category: Option<usize>,
    pub loading_courses: bool,
    pub last_error: Option<&'a str>,
    pub show_image_urls: bool,
}

pub fn render_browse(f: &mut Frame, data: &mut BrowseData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_header(f, chunks[0], data.pager, data.last_error);
    render_chips(f, chunks[1], data.categories, data.selected_category);
    render_course_list(f, chunks[2], data);
    render_browse_footer(f, chunks[3], data.pager);
}

fn render_header(f: &mut Frame, area: Rect, pager: Option<&PageInfo>, last_error: Option<&str>) {
    let mut spans = vec![
        Span::styled(
            " CourseHub ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Course Catalog"),
    ];

    if let Some(pager) = pager {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} courses", pager.count),
            Style::default().fg(Color::Green),
        ));
    }

    if let Some(err) = last_error {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("error: {}", err),
            Style::default().fg(Color::Red),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn render_chips(f: &mut Frame, area: Rect, categories: Option<&[Category]>, selected: Option<usize>) {
    let line = match categories {
        // Unloaded state: the chip row is a progress indicator until the
        // first successful load, however long that takes.
        None => Line::from(Span::styled(
            " Loading categories...",
            Style::default().fg(Color::Cyan),
        )),
        Some(cates) => {
            let mut spans = vec![Span::raw(" ")];
            spans.push(chip("All", selected.is_none()));
            for (i, cate) in cates.iter().enumerate() {
                spans.push(Span::raw(" "));
                spans.push(chip(&cate.name, selected == Some(i)));
            }
            Line::from(spans)
        }
    };

    let chips = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(chips, area);
}

fn chip(name: &str, selected: bool) -> Span<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("[{}]", name), style)
}

fn render_course_list(f: &mut Frame, area: Rect, data: &mut BrowseData) {
    let mut items: Vec<ListItem> = data
        .courses
        .iter()
        .map(|course| course_row(course, data.show_image_urls))
        .collect();

    if data.loading_courses {
        items.push(ListItem::new(Line::from(Span::styled(
            "Loading courses...",
            Style::default().fg(Color::Cyan),
        ))));
    } else if data.courses.is_empty() && data.pager.is_some() {
        items.push(ListItem::new(Line::from(Span::styled(
            "No courses found",
            Style::default().fg(Color::DarkGray),
        ))));
    }

    let title = match data.pager {
        Some(pager) => format!(" Courses ({}) ", pager.count),
        None => " Courses ".to_string(),
    };

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::NONE))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, data.list_state);
}

fn course_row(course: &Course, show_image_urls: bool) -> ListItem<'static> {
    let title = Line::from(vec![
        Span::styled("▣ ", Style::default().fg(Color::Magenta)),
        Span::raw(course.subject.clone()),
    ]);

    let mut detail_spans = vec![
        Span::raw("    "),
        Span::styled(
            format_created_date(&course.created_date),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if show_image_urls {
        detail_spans.push(Span::raw("  "));
        detail_spans.push(Span::styled(
            truncate_middle(&course.image, 40),
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(vec![title, Line::from(detail_spans)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    fn course(id: i64, subject: &str) -> Course {
        Course {
            id,
            subject: subject.to_string(),
            created_date: "2024-01-01T00:00:00Z".to_string(),
            image: format!("https://cdn.example.com/{}.png", id),
        }
    }

    fn render_to_text(data: &mut BrowseData) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_browse(f, data)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let cells: Vec<&str> = buffer.content().iter().map(|c| c.symbol()).collect();
        cells
            .chunks(width)
            .map(|row| row.concat())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn browse_data<'a>(
        list_state: &'a mut ListState,
        categories: Option<&'a [Category]>,
        courses: &'a [Course],
        pager: Option<&'a PageInfo>,
        loading_courses: bool,
    ) -> BrowseData<'a> {
        BrowseData {
            list_state,
            categories,
            courses,
            pager,
            selected_category: None,
            loading_courses,
            last_error: None,
            show_image_urls: true,
        }
    }

    #[test]
    fn unloaded_categories_show_progress_indicator() {
        let mut list_state = ListState::default();
        let mut data = browse_data(&mut list_state, None, &[], None, true);
        let screen = render_to_text(&mut data);

        assert!(screen.contains("Loading categories..."));
    }

    #[test]
    fn empty_category_load_renders_no_chips_and_no_indicator() {
        let mut list_state = ListState::default();
        let cates: Vec<Category> = Vec::new();
        let mut data = browse_data(&mut list_state, Some(cates.as_slice()), &[], None, false);
        let screen = render_to_text(&mut data);

        assert!(!screen.contains("Loading categories..."));
        assert!(screen.contains("[All]"));
        assert_eq!(screen.matches('[').count(), 1);
    }

    #[test]
    fn loaded_categories_render_one_chip_each() {
        let mut list_state = ListState::default();
        let cates = vec![category(1, "Programming"), category(2, "Mathematics")];
        let mut data = browse_data(&mut list_state, Some(cates.as_slice()), &[], None, false);
        let screen = render_to_text(&mut data);

        assert!(screen.contains("[Programming]"));
        assert!(screen.contains("[Mathematics]"));
        assert!(!screen.contains("Loading categories..."));
    }

    #[test]
    fn courses_render_in_response_order() {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        let courses = vec![course(1, "B-tree Internals"), course(2, "Async Rust")];
        let pager = PageInfo {
            count: 2,
            page: 1,
            has_next: false,
            has_prev: false,
        };
        let mut data = browse_data(&mut list_state, None, &courses, Some(&pager), false);
        let screen = render_to_text(&mut data);

        let first = screen.find("B-tree Internals").unwrap();
        let second = screen.find("Async Rust").unwrap();
        assert!(first < second);
    }

    #[test]
    fn loading_flag_appends_trailing_indicator() {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        let courses = vec![course(1, "B-tree Internals")];
        let mut data = browse_data(&mut list_state, None, &courses, None, true);
        let screen = render_to_text(&mut data);

        assert!(screen.contains("Loading courses..."));
    }

    #[test]
    fn settled_load_shows_no_course_indicator() {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        let courses = vec![course(1, "B-tree Internals")];
        let pager = PageInfo {
            count: 1,
            page: 1,
            has_next: false,
            has_prev: false,
        };
        let mut data = browse_data(&mut list_state, None, &courses, Some(&pager), false);
        let screen = render_to_text(&mut data);

        assert!(!screen.contains("Loading courses..."));
    }

    #[test]
    fn load_error_is_surfaced_in_header() {
        let mut list_state = ListState::default();
        let mut data = browse_data(&mut list_state, None, &[], None, false);
        data.last_error = Some("courses returned HTTP 500");
        let screen = render_to_text(&mut data);

        assert!(screen.contains("error: courses returned HTTP 500"));
        assert!(screen.contains("Loading categories..."));
    }
}
