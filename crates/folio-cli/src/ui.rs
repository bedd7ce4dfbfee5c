use folio_engine::{BlockNode, HeadingLevel, InlineSegment, Post, ViewState};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::App;

const ACCENT: Color = Color::Rgb(190, 30, 60);
const DIM: Color = Color::DarkGray;
const CODE_BG: Color = Color::Rgb(30, 41, 59);

pub fn ui(f: &mut Frame, app: &mut App) {
    match app.view.state() {
        ViewState::Listing => draw_listing(f, app),
        ViewState::Reading => draw_reading(f, app),
    }
}

fn draw_listing(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let query = app.view.filter().query();
    let search_text = if query.is_empty() {
        Line::from(Span::styled("Search articles...", Style::default().fg(DIM)))
    } else {
        Line::from(query.to_string())
    };
    let search = Paragraph::new(search_text)
        .block(Block::default().borders(Borders::ALL).title("Search"));
    f.render_widget(search, chunks[0]);

    f.render_widget(tag_bar(app), chunks[1]);

    if app.view.is_empty_result() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("No articles found matching your criteria."),
            Line::from(Span::styled(
                "Ctrl-L: Clear filters",
                Style::default().fg(ACCENT),
            )),
        ])
        .centered()
        .block(Block::default().borders(Borders::ALL).title("Articles"));
        f.render_widget(empty, chunks[2]);
    } else {
        let items: Vec<ListItem> = app
            .view
            .visible_posts()
            .into_iter()
            .map(|post| post_card(post, app.preview_tags))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Articles"))
            .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
        f.render_stateful_widget(list, chunks[2], &mut app.list_state);
    }

    let hint = listing_help(app.view.filter().is_active());
    help(f, chunks[3], hint);
}

/// The clear-filters hint only shows while a query or tag narrows the list.
fn listing_help(filtered: bool) -> &'static str {
    if filtered {
        "Type: Search | ↑/↓: Move | Enter: Read | Tab/Shift-Tab: Tag | Esc: Clear search | Ctrl-L: Clear filters | Ctrl-C: Quit"
    } else {
        "Type: Search | ↑/↓: Move | Enter: Read | Tab/Shift-Tab: Tag | Ctrl-C: Quit"
    }
}

fn tag_bar(app: &App) -> Paragraph<'static> {
    let selected = app.view.filter().tag();
    let chip = |label: &str, active: bool| {
        let style = if active {
            Style::default()
                .bg(ACCENT)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT)
        };
        Span::styled(format!(" {} ", label.to_uppercase()), style)
    };

    let mut spans = vec![
        Span::styled("Filter by: ", Style::default().fg(DIM)),
        chip("All", selected.is_none()),
    ];
    for tag in app.view.tags() {
        spans.push(Span::raw(" "));
        spans.push(chip(tag, selected == Some(tag.as_str())));
    }

    Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL))
}

fn post_card(post: &Post, preview_tags: usize) -> ListItem<'static> {
    let tags = post.preview_tags(preview_tags).join(", ");
    ListItem::new(vec![
        Line::from(Span::styled(
            post.title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(post.date().to_string(), Style::default().fg(DIM)),
            Span::raw("  "),
            Span::styled(tags, Style::default().fg(ACCENT)),
        ]),
        Line::from(Span::styled(
            post.summary().to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ])
}

fn draw_reading(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let lines = match app.view.active_post() {
        Some(post) => article_lines(post, app.words_per_minute),
        None => vec![Line::from("Post not found")],
    };

    let article = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Article"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(article, chunks[0]);

    help(f, chunks[1], "Esc/←: Back to list | ↑/↓: Scroll | q: Quit");
}

fn help(f: &mut Frame, area: Rect, text: &'static str) {
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(DIM)))),
        area,
    );
}

pub fn article_lines(post: &Post, words_per_minute: u32) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            post.tags().join(" · ").to_uppercase(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            post.title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{}  ·  {} min read",
                post.date(),
                post.reading_minutes(words_per_minute)
            ),
            Style::default().fg(DIM),
        )),
        Line::from(""),
    ];
    lines.extend(block_lines(&post.blocks()));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Thanks for reading!",
        Style::default().fg(DIM).add_modifier(Modifier::ITALIC),
    )));
    lines
}

/// Maps rendered blocks to terminal lines.
pub fn block_lines(blocks: &[BlockNode]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            BlockNode::Heading { level, segments } => {
                let color = match level {
                    HeadingLevel::H1 => Color::Rgb(255, 215, 100),
                    HeadingLevel::H2 => Color::Rgb(240, 190, 90),
                    HeadingLevel::H3 => Color::Rgb(220, 170, 80),
                };
                let base = Style::default().fg(color).add_modifier(Modifier::BOLD);
                lines.push(Line::from(segment_spans(segments, base)));
            }
            BlockNode::ListItem(segments) => {
                let mut spans = vec![Span::styled("  • ", Style::default().fg(ACCENT))];
                spans.extend(segment_spans(segments, Style::default()));
                lines.push(Line::from(spans));
            }
            BlockNode::OrderedListItem { label, segments } => {
                let mut spans = vec![Span::styled(
                    format!("  {label}. "),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )];
                spans.extend(segment_spans(segments, Style::default()));
                lines.push(Line::from(spans));
            }
            BlockNode::Blockquote(segments) => {
                let mut spans = vec![Span::styled("│ ", Style::default().fg(ACCENT))];
                spans.extend(segment_spans(
                    segments,
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
                lines.push(Line::from(spans));
            }
            BlockNode::CodeBlock { lines: code, .. } => {
                let style = Style::default().bg(CODE_BG).fg(Color::White);
                for line in code {
                    lines.push(Line::from(Span::styled(format!("  {line}"), style)));
                }
            }
            BlockNode::Paragraph(segments) => {
                lines.push(Line::from(segment_spans(segments, Style::default())));
            }
            BlockNode::Blank => lines.push(Line::from("")),
        }
    }
    lines
}

fn segment_spans(segments: &[InlineSegment], base: Style) -> Vec<Span<'static>> {
    segments
        .iter()
        .map(|segment| match segment {
            InlineSegment::PlainText(s) => Span::styled(s.clone(), base),
            InlineSegment::Bold(s) => Span::styled(s.clone(), base.add_modifier(Modifier::BOLD)),
            InlineSegment::Italic(s) => {
                Span::styled(s.clone(), base.add_modifier(Modifier::ITALIC))
            }
            InlineSegment::InlineCode(s) => Span::styled(s.clone(), base.fg(Color::Yellow)),
        })
        .collect()
}
