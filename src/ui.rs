// Terminal UI - The portfolio in a terminal
//
// Keys stand in for clicks: every clickable node in the current page is a
// focus target, Enter activates the focused one.

use crate::content::Content;
use crate::nav::NavLayout;
use crate::node::{FieldKind, Node};
use crate::shell::{App, Interaction, Message, ViewSelector};
use crate::views::{self, section_title, Page, RenderContext};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::rc::Rc;

const PROGRESS_WIDTH: usize = 24;
/// Rows below a focused target kept on screen (card border, heading)
const FOCUS_CONTEXT: usize = 3;
const PAGE_ROWS: u16 = 10;

pub struct TerminalApp {
    pub app: App,
    pub content: Content,
    pub form_endpoint: String,
    /// Index into the current page's click targets (nav first, then body)
    pub focus: usize,
    pub scroll: u16,
    pub layout: NavLayout,
    /// Last known terminal size
    pub viewport: Rect,
    /// Last outbound link, shown in the status bar
    pub status: Option<String>,
}

impl TerminalApp {
    pub fn new(content: Content, form_endpoint: String) -> Self {
        let mut ui = Self {
            app: App::new(),
            content,
            form_endpoint,
            focus: 0,
            scroll: 0,
            layout: NavLayout::Desktop,
            viewport: Rect::new(0, 0, 120, 40),
            status: None,
        };
        ui.reset_focus();
        ui
    }

    pub fn page(&self) -> Page {
        let ctx = RenderContext {
            content: &self.content,
            form_endpoint: &self.form_endpoint,
        };
        views::render(&self.app, &ctx, self.layout)
    }

    fn targets(page: &Page) -> (Vec<Interaction>, usize) {
        let nav = page.nav.interactions();
        let nav_len = nav.len();
        let mut all = nav;
        all.extend(page.body.interactions());
        (all, nav_len)
    }

    /// Focus the first clickable thing in the body, or the last nav target
    fn reset_focus(&mut self) {
        let (targets, nav_len) = Self::targets(&self.page());
        self.focus = if targets.len() > nav_len {
            nav_len
        } else {
            nav_len.saturating_sub(1)
        };
        self.scroll = 0;
    }

    pub fn resize(&mut self, size: Rect) {
        self.set_width(size.width);
        self.viewport = size;
        self.follow_focus();
    }

    pub fn set_width(&mut self, columns: u16) {
        let layout = NavLayout::for_width(columns);
        if layout != self.layout {
            self.layout = layout;
            self.reset_focus();
        }
    }

    fn dispatch(&mut self, msg: Message) {
        let before = self.app.selector();
        self.app.update(&msg);
        if self.app.selector() != before {
            self.reset_focus();
        }
    }

    fn activate_focused(&mut self) {
        let page = self.page();
        let (targets, _) = Self::targets(&page);
        let Some(target) = targets.get(self.focus).cloned() else {
            return;
        };

        let before = self.app.selector();
        match self.app.activate(&target) {
            Some(url) => {
                tracing::info!(%url, "open link");
                self.status = Some(url);
            }
            None => self.status = None,
        }

        if self.app.selector() != before {
            self.reset_focus();
        } else {
            // Targets may have appeared or disappeared (menu, load more)
            let (targets, _) = Self::targets(&self.page());
            self.focus = self.focus.min(targets.len().saturating_sub(1));
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let (targets, _) = Self::targets(&self.page());
        let len = targets.len();
        if len == 0 {
            return;
        }
        self.focus = if forward {
            if self.focus >= len - 1 { 0 } else { self.focus + 1 }
        } else if self.focus == 0 {
            len - 1
        } else {
            self.focus - 1
        };
    }

    /// Rendered body rows, and the row of the focused target when it is in the body
    fn body_rows(&self, page: &Page) -> (usize, Option<usize>) {
        let width = body_area(self.viewport, &page.nav).width as usize;

        let mut renderer = LineRenderer::new(self.focus);
        renderer.node(&page.nav, 0);
        renderer.take_lines();
        renderer.focus_line = None;
        renderer.node(&page.body, 0);
        let focus_line = renderer.focus_line;
        let lines = renderer.take_lines();

        let mut total = 0;
        let mut focus_row = None;
        for (i, line) in lines.iter().enumerate() {
            if Some(i) == focus_line {
                focus_row = Some(total);
            }
            total += wrapped_rows(line, width);
        }
        (total, focus_row)
    }

    /// Keeps scroll within the rendered body
    fn clamp_scroll(&mut self) {
        let page = self.page();
        let height = body_area(self.viewport, &page.nav).height as usize;
        let (total, _) = self.body_rows(&page);
        let max = total.saturating_sub(height);
        self.scroll = (self.scroll as usize).min(max) as u16;
    }

    /// Scrolls just enough to show the focused target, then clamps
    fn follow_focus(&mut self) {
        let page = self.page();
        let height = body_area(self.viewport, &page.nav).height as usize;
        let (_, focus_row) = self.body_rows(&page);

        if let Some(row) = focus_row {
            let mut scroll = self.scroll as usize;
            let bottom = row + FOCUS_CONTEXT;
            if bottom > scroll + height {
                scroll = bottom.saturating_sub(height);
            }
            if row < scroll {
                scroll = row;
            }
            self.scroll = scroll.min(u16::MAX as usize) as u16;
        }
        self.clamp_scroll();
    }

    /// Returns true when the app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let paging = matches!(key.code, KeyCode::PageUp | KeyCode::PageDown);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.dispatch(Message::Navigate(self.app.selector().previous()))
            }
            KeyCode::BackTab => self.dispatch(Message::Navigate(self.app.selector().previous())),
            KeyCode::Tab => self.dispatch(Message::Navigate(self.app.selector().next())),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.dispatch(Message::Navigate(ViewSelector::ALL[index]));
            }
            KeyCode::Char('m') if self.layout == NavLayout::Compact => {
                let open = !self.app.shell.menu_open;
                self.dispatch(Message::SetMenuOpen(open));
                self.reset_focus();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::Down | KeyCode::Char('j') => self.move_focus(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_focus(false),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE_ROWS),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_ROWS),
            KeyCode::Home => {
                self.focus = 0;
                self.scroll = 0;
            }
            KeyCode::End => {
                let (targets, _) = Self::targets(&self.page());
                self.focus = targets.len().saturating_sub(1);
            }
            _ => {}
        }

        if paging {
            self.clamp_scroll();
        } else {
            self.follow_focus();
        }
        false
    }
}

pub fn run_ui(app: &mut TerminalApp) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        return Err(err.into());
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut TerminalApp,
) -> io::Result<()> {
    loop {
        app.resize(terminal.size()?);
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn screen_chunks(area: Rect, nav: &Node) -> Rc<[Rect]> {
    let nav_rows = match nav {
        Node::Nav { entries, toggle: Some(_), .. } => entries.len() as u16 + 1,
        _ => 1,
    };

    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(nav_rows + 2), // Navigation
            Constraint::Min(0),               // Selected view
            Constraint::Length(3),            // Status bar
        ])
        .split(area)
}

/// Inside of the bordered body block
fn body_area(area: Rect, nav: &Node) -> Rect {
    Block::default().borders(Borders::ALL).inner(screen_chunks(area, nav)[1])
}

fn wrapped_rows(line: &Line, width: usize) -> usize {
    if width == 0 {
        return 1;
    }
    line.width().div_ceil(width).max(1)
}

pub fn ui(f: &mut Frame, app: &TerminalApp) {
    let page = app.page();
    let chunks = screen_chunks(f.size(), &page.nav);

    let mut renderer = LineRenderer::new(app.focus);
    renderer.node(&page.nav, 0);
    let nav_lines = renderer.take_lines();
    render_header(f, chunks[0], nav_lines);

    renderer.node(&page.body, 0);
    let body_lines = renderer.take_lines();
    render_body(f, chunks[1], app, &page, body_lines);

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_body(
    f: &mut Frame,
    area: Rect,
    app: &TerminalApp,
    page: &Page,
    lines: Vec<Line<'static>>,
) {
    let title = section_title(&page.body).unwrap_or("");
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(format!(" {} ", title)),
        );
    f.render_widget(body, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &TerminalApp) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let mut spans = Vec::new();
    if let Some(url) = &app.status {
        spans.push(Span::styled(format!(" Open: {} ", url), Style::default().fg(Color::Green)));
        spans.push(Span::raw("| "));
    }
    spans.push(key("Tab"));
    spans.push(Span::raw(" Page | "));
    spans.push(key("1-6"));
    spans.push(Span::raw(" Jump | "));
    spans.push(key("↑/↓"));
    spans.push(Span::raw(" Focus | "));
    spans.push(key("Enter"));
    spans.push(Span::raw(" Click | "));
    if app.layout == NavLayout::Compact {
        spans.push(key("m"));
        spans.push(Span::raw(" Menu | "));
    }
    spans.push(key("PgUp/PgDn"));
    spans.push(Span::raw(" Scroll | "));
    spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    f.render_widget(status_bar, area);
}

// ============================================================================
// NODE → LINES
// ============================================================================

/// Walks nodes in the same order as `Node::interactions`, so the n-th
/// clickable node seen is focus target n.
struct LineRenderer {
    focus: usize,
    target: usize,
    lines: Vec<Line<'static>>,
    /// Line index where the focused target starts
    focus_line: Option<usize>,
}

impl LineRenderer {
    fn new(focus: usize) -> Self {
        Self { focus, target: 0, lines: Vec::new(), focus_line: None }
    }

    fn take_lines(&mut self) -> Vec<Line<'static>> {
        std::mem::take(&mut self.lines)
    }

    /// Claims the next target index if the node is clickable
    fn claim(&mut self, node: &Node) -> bool {
        if node.own_interaction().is_some() {
            let focused = self.target == self.focus;
            if focused {
                self.focus_line = Some(self.lines.len());
            }
            self.target += 1;
            focused
        } else {
            false
        }
    }

    fn node(&mut self, node: &Node, depth: usize) {
        let focused = self.claim(node);
        let indent = "  ".repeat(depth);

        match node {
            Node::Nav { brand, toggle, entries } => {
                let mut spans = vec![Span::styled(
                    brand.clone(),
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                )];
                if let Some(toggle) = toggle {
                    spans.push(Span::raw("  "));
                    let toggle_focused = self.claim(toggle);
                    spans.push(button_span(toggle, toggle_focused));
                    self.lines.push(Line::from(spans));
                    for entry in entries {
                        let entry_focused = self.claim(entry);
                        self.lines.push(Line::from(vec![
                            Span::raw("  "),
                            button_span(entry, entry_focused),
                        ]));
                    }
                } else {
                    for entry in entries {
                        spans.push(Span::raw(" │ "));
                        let entry_focused = self.claim(entry);
                        spans.push(button_span(entry, entry_focused));
                    }
                    self.lines.push(Line::from(spans));
                }
            }
            Node::Section { title, children } => {
                if depth > 0 {
                    self.lines.push(Line::from(""));
                    self.lines.push(Line::from(Span::styled(
                        format!("{}{}", indent, title),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )));
                }
                for child in children {
                    self.node(child, depth + 1);
                }
            }
            Node::Group(children) => {
                for child in children {
                    self.node(child, depth);
                }
            }
            Node::Heading(text) => self.lines.push(Line::from(Span::styled(
                format!("{}{}", indent, text),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))),
            Node::Text(text) => self.lines.push(Line::from(format!("{}{}", indent, text))),
            Node::Note(text) => self.lines.push(Line::from(Span::styled(
                format!("{}{}", indent, text),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))),
            Node::Card { highlighted, on_click, children, .. } => {
                let color = if focused {
                    Color::Yellow
                } else if *highlighted {
                    Color::Blue
                } else {
                    Color::DarkGray
                };
                let marker = if focused && on_click.is_some() { "→ " } else { "" };
                self.lines.push(Line::from(""));
                self.lines.push(Line::from(Span::styled(
                    format!("{}{}╭────────────────────────────────", indent, marker),
                    Style::default().fg(color),
                )));
                for child in children {
                    self.node(child, depth + 1);
                }
                self.lines.push(Line::from(Span::styled(
                    format!("{}╰────────────────────────────────", indent),
                    Style::default().fg(color),
                )));
            }
            Node::Progress { label, percent } => {
                let percent = (*percent).min(100);
                let filled = percent as usize * PROGRESS_WIDTH / 100;
                self.lines.push(Line::from(vec![
                    Span::raw(format!("{}{:<22}", indent, label)),
                    Span::styled("█".repeat(filled), Style::default().fg(Color::Blue)),
                    Span::styled(
                        "░".repeat(PROGRESS_WIDTH - filled),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format!(" {:>3}%", percent)),
                ]));
            }
            Node::Tags(tags) => {
                let mut spans = vec![Span::raw(indent.clone())];
                for tag in tags {
                    spans.push(Span::styled(
                        format!("[{}]", tag),
                        Style::default().fg(Color::Gray).bg(Color::Rgb(55, 65, 81)),
                    ));
                    spans.push(Span::raw(" "));
                }
                self.lines.push(Line::from(spans));
            }
            Node::Link { label, href, icon } => self.lines.push(Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    format!("{} {}", icon_glyph(icon.as_deref()), label),
                    focus_style(
                        focused,
                        Style::default()
                            .fg(Color::LightBlue)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ),
                Span::styled(format!("  {}", href), Style::default().fg(Color::DarkGray)),
            ])),
            Node::Button { .. } => {
                self.lines.push(Line::from(""));
                self.lines.push(Line::from(vec![Span::raw(indent), button_span(node, focused)]));
            }
            Node::Image { url, .. } => self.lines.push(Line::from(vec![
                Span::raw(indent),
                Span::styled("🖼  image ", Style::default().fg(Color::Gray)),
                Span::styled(url.clone(), Style::default().fg(Color::DarkGray)),
            ])),
            Node::Video { url, playing, .. } => {
                let label = if *playing { "❚❚ Playing" } else { "▶ Play" };
                self.lines.push(Line::from(vec![
                    Span::raw(indent),
                    Span::styled("🎬 video ", Style::default().fg(Color::Gray)),
                    Span::styled(url.clone(), Style::default().fg(Color::DarkGray)),
                    Span::raw("  "),
                    Span::styled(
                        format!("[ {} ]", label),
                        focus_style(focused, Style::default().fg(Color::Green)),
                    ),
                ]));
            }
            Node::Form { action, method, fields, submit_label } => {
                self.lines.push(Line::from(""));
                self.lines.push(Line::from(Span::styled(
                    format!("{}✉  {} {}", indent, method, action),
                    Style::default().fg(Color::DarkGray),
                )));
                for field in fields {
                    let rows = if field.kind == FieldKind::TextArea { 3 } else { 1 };
                    self.lines.push(Line::from(Span::styled(
                        format!("{}{}", indent, field.label),
                        Style::default().fg(Color::Gray),
                    )));
                    for row in 0..rows {
                        let hint = if row == 0 { field.placeholder.as_str() } else { "" };
                        self.lines.push(Line::from(Span::styled(
                            format!("{}  {:<40}", indent, hint),
                            Style::default().fg(Color::DarkGray).bg(Color::Rgb(55, 65, 81)),
                        )));
                    }
                }
                self.lines.push(Line::from(Span::styled(
                    format!("{}[ {} ]  (sent from a browser)", indent, submit_label),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }
}

fn focus_style(focused: bool, style: Style) -> Style {
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn icon_glyph(icon: Option<&str>) -> &'static str {
    match icon {
        Some("mail") => "✉",
        Some("linkedin") => "in",
        Some("github") => "gh",
        _ => "🔗",
    }
}

fn button_span(node: &Node, focused: bool) -> Span<'static> {
    let (label, active) = match node {
        Node::Button { label, active, .. } => (label.clone(), *active),
        _ => (String::new(), false),
    };
    let style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("[ {} ]", label), focus_style(focused, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::certificates::card_key;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn terminal_app() -> TerminalApp {
        TerminalApp::new(
            Content::canonical(),
            "https://relay.example.com/f/test".to_string(),
        )
    }

    fn draw(app: &TerminalApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();

        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = terminal_app();
        assert_eq!(app.app.selector(), ViewSelector::Home);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.app.selector(), ViewSelector::About);

        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.app.selector(), ViewSelector::Contact);
    }

    #[test]
    fn test_number_keys_jump() {
        let mut app = terminal_app();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.app.selector(), ViewSelector::Certificates);
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.app.selector(), ViewSelector::Current);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = terminal_app();
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert!(app.handle_key(key(KeyCode::Esc)));
        assert!(!app.handle_key(key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_enter_expands_focused_certificate() {
        let mut app = terminal_app();
        app.handle_key(key(KeyCode::Char('3')));

        // Focus starts on the first card
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.app.views.certificates.expanded, Some(1));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.app.views.certificates.expanded, None);
    }

    #[test]
    fn test_credential_link_sets_status_only() {
        let mut app = terminal_app();
        app.handle_key(key(KeyCode::Char('3')));
        app.handle_key(key(KeyCode::Enter));

        // Next target after the expanded card is its credential link
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.app.views.certificates.expanded, Some(1));
        assert_eq!(app.status.as_deref(), Some("https://aws.amazon.com/verification"));
    }

    #[test]
    fn test_end_then_enter_loads_more() {
        let mut app = terminal_app();
        app.handle_key(key(KeyCode::Char('3')));
        app.handle_key(key(KeyCode::End));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.app.views.certificates.display_count, 5);
        let page = app.page();
        assert!(page.body.find_card(&card_key(5)).is_some());
    }

    #[test]
    fn test_home_call_to_action() {
        let mut app = terminal_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.app.selector(), ViewSelector::Projects);
    }

    #[test]
    fn test_compact_menu_key() {
        let mut app = terminal_app();
        app.set_width(60);
        assert_eq!(app.layout, NavLayout::Compact);

        app.handle_key(key(KeyCode::Char('m')));
        assert!(app.app.shell.menu_open);

        // Menu entries come right after the toggle
        app.focus = 1 + ViewSelector::Contact as usize;
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.app.selector(), ViewSelector::Contact);
        assert!(!app.app.shell.menu_open);
    }

    #[test]
    fn test_m_ignored_in_desktop_layout() {
        let mut app = terminal_app();
        app.set_width(140);
        app.handle_key(key(KeyCode::Char('m')));
        assert!(!app.app.shell.menu_open);
    }

    #[test]
    fn test_draw_desktop_shows_nav_and_view() {
        let mut app = terminal_app();
        app.set_width(140);
        app.handle_key(key(KeyCode::Char('2')));

        let screen = draw(&app, 140, 50);
        assert!(screen.contains("Siyabonga Mbuyisa"));
        assert!(screen.contains("Let's Connect"));
        assert!(screen.contains(" About Me "));
        assert!(screen.contains("JavaScript"));
        assert!(screen.contains("90%"));
    }

    #[test]
    fn test_draw_compact_hides_entries_until_open() {
        let mut app = terminal_app();
        app.set_width(80);

        let screen = draw(&app, 80, 40);
        assert!(screen.contains("Menu"));
        assert!(!screen.contains("Currently Working On"));

        app.handle_key(key(KeyCode::Char('m')));
        let screen = draw(&app, 80, 40);
        assert!(screen.contains("Currently Working On"));
    }

    #[test]
    fn test_end_scrolls_focus_into_view() {
        let mut app = terminal_app();
        let size = Rect::new(0, 0, 120, 24);
        app.resize(size);
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.scroll, 0);

        app.handle_key(key(KeyCode::End));
        assert!(app.scroll > 0);
        let screen = draw(&app, size.width, size.height);
        assert!(screen.contains("Load More Certificates"));

        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_focus_follows_last_certificate_after_load_more() {
        let mut app = terminal_app();
        let size = Rect::new(0, 0, 120, 24);
        app.resize(size);
        app.handle_key(key(KeyCode::Char('3')));
        app.handle_key(key(KeyCode::End));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.app.views.certificates.display_count, 5);

        app.handle_key(key(KeyCode::End));
        let screen = draw(&app, size.width, size.height);
        assert!(screen.contains("Java Programming Masterclass"));
    }

    #[test]
    fn test_page_down_stops_at_end_of_body() {
        let mut app = terminal_app();
        let size = Rect::new(0, 0, 120, 24);
        app.resize(size);
        app.handle_key(key(KeyCode::Char('2')));

        for _ in 0..50 {
            app.handle_key(key(KeyCode::PageDown));
        }
        let bottom = app.scroll;
        assert!(bottom > 0);
        assert!(bottom < 50 * PAGE_ROWS);

        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.scroll, bottom);

        // Last skill is still on screen, not blank space
        let screen = draw(&app, size.width, size.height);
        assert!(screen.contains("%"));

        for _ in 0..50 {
            app.handle_key(key(KeyCode::PageUp));
        }
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_draw_contact_icons() {
        let mut app = terminal_app();
        app.set_width(140);
        app.handle_key(key(KeyCode::Char('6')));

        let screen = draw(&app, 140, 60);
        assert!(screen.contains("✉ Gmail"));
        assert!(screen.contains("in LinkedIn"));
        assert!(screen.contains("gh GitHub"));
    }

    #[test]
    fn test_draw_projects_media() {
        let mut app = terminal_app();
        app.set_width(140);
        app.handle_key(key(KeyCode::Char('4')));

        let screen = draw(&app, 140, 80);
        assert!(screen.contains("image"));
        assert!(screen.contains("video"));
        assert!(screen.contains("Play"));
    }
}
