//! Interactive portfolio site rendered with ratatui.
//!
//! One screen per section (home, about, projects, experience, contact),
//! navigable with Tab or number keys. Projects get a category filter and a
//! detail modal; the contact section drives the [`ContactForm`] controller
//! and shows its inline errors exactly as the form logic dictates.

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::catalog::{ProjectRecord, category_labels, filter_by_category};
use crate::config::SiteConfig;
use crate::content::{AWARDS, EXPERIENCES, FAQS, HERO_CODE_LINES, PROJECTS, SKILLS, SOCIAL_LINKS};
use crate::delivery::{LogSink, MessageSink};
use crate::error::{FolioError, Result};
use crate::form::{ContactForm, Field, Submission};
use crate::tui::animate::Reveal;

/// Notice shown after an accepted submission, word-for-word the demo alert.
const SENT_NOTICE: &str = "Message sent successfully! (Demo - not actually sent)";

/// Site sections in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Projects,
        Self::Experience,
        Self::Contact,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::About => 1,
            Self::Projects => 2,
            Self::Experience => 3,
            Self::Contact => 4,
        }
    }

    const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Focus within the contact section: the three inputs plus the send button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactFocus {
    Input(Field),
    Send,
}

impl ContactFocus {
    const ORDER: [Self; 4] = [
        Self::Input(Field::Name),
        Self::Input(Field::Email),
        Self::Input(Field::Message),
        Self::Send,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Action to take after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    Continue,
}

/// Theme palette, toggled like the original's dark-mode switch.
#[derive(Debug, Clone, Copy)]
struct Palette {
    accent: Color,
    text: Color,
    dim: Color,
}

const fn palette(dark: bool) -> Palette {
    if dark {
        Palette {
            accent: Color::Cyan,
            text: Color::White,
            dim: Color::DarkGray,
        }
    } else {
        Palette {
            accent: Color::Blue,
            text: Color::Black,
            dim: Color::Gray,
        }
    }
}

/// TUI application state.
pub struct SiteTui {
    config: SiteConfig,
    dark: bool,
    section: Section,
    /// FAQ accordion: cursor plus the single open entry, if any.
    faq_cursor: usize,
    open_faq: Option<usize>,
    /// Index into `category_labels()` for the active project filter.
    category_idx: usize,
    project_state: ListState,
    /// Project id shown in the detail modal.
    modal: Option<u32>,
    exp_index: usize,
    form: ContactForm,
    contact_focus: ContactFocus,
    /// True while keystrokes are being typed into the focused input.
    editing: bool,
    status_message: Option<String>,
    show_help: bool,
    reveal: Reveal,
}

impl SiteTui {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let dark = config.theme.dark;
        let mut project_state = ListState::default();
        project_state.select(Some(0));
        Self {
            config,
            dark,
            section: Section::Home,
            faq_cursor: 0,
            open_faq: None,
            category_idx: 0,
            project_state,
            modal: None,
            exp_index: 0,
            form: ContactForm::new(),
            contact_focus: ContactFocus::Input(Field::Name),
            editing: false,
            status_message: None,
            show_help: false,
            reveal: Reveal::section(HERO_CODE_LINES.len()),
        }
    }

    /// Run the TUI main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            // Short poll keeps entrance animations ticking between keys.
            if event::poll(Duration::from_millis(33))? {
                if let Event::Key(key) = event::read()? {
                    match self.handle_key(key.code, key.modifiers) {
                        Action::Quit => return Ok(()),
                        Action::Continue => {}
                    }
                }
            }
        }
    }

    fn selected_category(&self) -> &'static str {
        category_labels()[self.category_idx]
    }

    fn filtered_projects(&self) -> Vec<&'static ProjectRecord> {
        filter_by_category(PROJECTS, self.selected_category())
    }

    fn goto_section(&mut self, section: Section) {
        if self.section == section {
            return;
        }
        self.section = section;
        self.modal = None;
        self.editing = false;
        self.status_message = None;
        let items = match section {
            Section::Home => HERO_CODE_LINES.len(),
            Section::About => AWARDS.len() + SKILLS.len() + FAQS.len(),
            Section::Projects => self.filtered_projects().len(),
            Section::Experience => EXPERIENCES.len(),
            Section::Contact => ContactFocus::ORDER.len(),
        };
        self.reveal = Reveal::section(items);
    }

    // ---- input handling -------------------------------------------------

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Action {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.show_help {
            if matches!(key, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
                self.show_help = false;
            }
            return Action::Continue;
        }

        // While typing into a contact input every printable key belongs to
        // the form.
        if self.editing {
            return self.handle_edit_key(key);
        }

        match key {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('?') => {
                self.show_help = true;
                return Action::Continue;
            }
            KeyCode::Char('d') => {
                self.dark = !self.dark;
                return Action::Continue;
            }
            KeyCode::Tab | KeyCode::Right => {
                self.goto_section(self.section.next());
                return Action::Continue;
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.goto_section(self.section.prev());
                return Action::Continue;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let idx = (c as usize) - ('1' as usize);
                self.goto_section(Section::ALL[idx]);
                return Action::Continue;
            }
            _ => {}
        }

        match self.section {
            Section::Home => Action::Continue,
            Section::About => self.handle_about_key(key),
            Section::Projects => self.handle_projects_key(key),
            Section::Experience => self.handle_experience_key(key),
            Section::Contact => self.handle_contact_key(key),
        }
    }

    fn handle_about_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.faq_cursor + 1 < FAQS.len() {
                    self.faq_cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.faq_cursor = self.faq_cursor.saturating_sub(1);
            }
            KeyCode::Enter => {
                // Accordion: reopening the open entry closes it.
                self.open_faq = if self.open_faq == Some(self.faq_cursor) {
                    None
                } else {
                    Some(self.faq_cursor)
                };
            }
            _ => {}
        }
        Action::Continue
    }

    fn handle_projects_key(&mut self, key: KeyCode) -> Action {
        if self.modal.is_some() {
            if matches!(key, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x')) {
                self.modal = None;
            }
            return Action::Continue;
        }

        match key {
            KeyCode::Down | KeyCode::Char('j') => self.select_project(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_project(-1),
            KeyCode::Char('f') => {
                self.category_idx = (self.category_idx + 1) % category_labels().len();
                self.project_state.select(if self.filtered_projects().is_empty() {
                    None
                } else {
                    Some(0)
                });
                self.reveal = Reveal::section(self.filtered_projects().len());
                self.status_message = Some(format!("Filter: {}", self.selected_category()));
            }
            KeyCode::Enter | KeyCode::Char('l') => {
                if let Some(selected) = self.project_state.selected() {
                    self.modal = self.filtered_projects().get(selected).map(|p| p.id);
                }
            }
            _ => {}
        }
        Action::Continue
    }

    fn select_project(&mut self, delta: i64) {
        let count = self.filtered_projects().len();
        if count == 0 {
            self.project_state.select(None);
            return;
        }
        let current = self.project_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).rem_euclid(count as i64) as usize;
        self.project_state.select(Some(next));
    }

    fn handle_experience_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.exp_index + 1 < EXPERIENCES.len() {
                    self.exp_index += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.exp_index = self.exp_index.saturating_sub(1);
            }
            _ => {}
        }
        Action::Continue
    }

    fn handle_contact_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                self.contact_focus = self.contact_focus.next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.contact_focus = self.contact_focus.prev();
            }
            KeyCode::Enter | KeyCode::Char('i') => match self.contact_focus {
                ContactFocus::Input(_) => {
                    self.editing = true;
                    self.status_message = None;
                }
                ContactFocus::Send => {
                    if key == KeyCode::Enter {
                        self.submit_form();
                    }
                }
            },
            _ => {}
        }
        Action::Continue
    }

    /// Keystrokes while an input is focused for typing. Enter and Esc both
    /// leave editing mode; leaving counts as losing focus, so it blurs.
    fn handle_edit_key(&mut self, key: KeyCode) -> Action {
        let ContactFocus::Input(field) = self.contact_focus else {
            self.editing = false;
            return Action::Continue;
        };

        match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => {
                self.editing = false;
                let value = self.form.field(field).value.clone();
                self.form.blur_field(field, &value);
                if key == KeyCode::Tab {
                    self.contact_focus = self.contact_focus.next();
                }
            }
            KeyCode::Char(c) => {
                let mut value = self.form.field(field).value.clone();
                value.push(c);
                self.form.update_field(field, &value);
            }
            KeyCode::Backspace => {
                let mut value = self.form.field(field).value.clone();
                value.pop();
                self.form.update_field(field, &value);
            }
            _ => {}
        }
        Action::Continue
    }

    fn submit_form(&mut self) {
        match self.form.submit() {
            Submission::Accepted(values) => {
                // The form has already reset; delivery is the sink's problem.
                match LogSink.send(&values) {
                    Ok(_) => {
                        self.status_message = Some(SENT_NOTICE.to_string());
                        self.contact_focus = ContactFocus::Input(Field::Name);
                    }
                    Err(err) => {
                        self.status_message = Some(format!("Delivery failed: {err}"));
                    }
                }
            }
            Submission::Rejected => {
                self.status_message = Some("Please fix the highlighted fields".to_string());
            }
        }
    }

    // ---- drawing --------------------------------------------------------

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // nav bar
                Constraint::Min(10),   // section body
                Constraint::Length(1), // key hints
            ])
            .split(f.area());

        self.draw_nav_bar(f, chunks[0]);
        match self.section {
            Section::Home => self.draw_home(f, chunks[1]),
            Section::About => self.draw_about(f, chunks[1]),
            Section::Projects => self.draw_projects(f, chunks[1]),
            Section::Experience => self.draw_experience(f, chunks[1]),
            Section::Contact => self.draw_contact(f, chunks[1]),
        }
        self.draw_hint_bar(f, chunks[2]);

        if let Some(id) = self.modal {
            self.draw_project_modal(f, id);
        }
        if self.show_help {
            self.draw_help_overlay(f);
        }
    }

    fn draw_nav_bar(&self, f: &mut Frame, area: Rect) {
        let pal = palette(self.dark);
        let mut spans = vec![
            Span::styled(
                self.config.owner.name.clone(),
                Style::default().fg(pal.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        for (i, section) in Section::ALL.iter().enumerate() {
            let style = if *section == self.section {
                Style::default().fg(pal.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(pal.dim)
            };
            spans.push(Span::styled(format!(" {} {}", i + 1, section.label()), style));
        }
        if let Some(msg) = &self.status_message {
            spans.push(Span::styled(
                format!("  | {msg}"),
                Style::default().fg(Color::Green),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_hint_bar(&self, f: &mut Frame, area: Rect) {
        let hint = if self.editing {
            "type to edit  Enter/Esc: done  Tab: next field"
        } else {
            match self.section {
                Section::Home => "Tab/1-5: sections  d: theme  ?: help  q: quit",
                Section::About => "j/k: move  Enter: toggle answer  Tab: sections  q: quit",
                Section::Projects => "j/k: move  f: filter  Enter: details  Esc: close  q: quit",
                Section::Experience => "j/k: move through the timeline  Tab: sections  q: quit",
                Section::Contact => "j/k: move  Enter: edit/send  Tab: sections  q: quit",
            }
        };
        let pal = palette(self.dark);
        f.render_widget(
            Paragraph::new(hint).style(Style::default().fg(pal.dim)),
            area,
        );
    }

    /// Entrance offset for item `index`: indent shrinking to zero as the
    /// reveal progresses, echoing the original slide-in.
    fn entrance_pad(&self, index: usize) -> String {
        let progress = self.reveal.progress(index);
        let offset = ((1.0 - progress) * 6.0).round() as usize;
        " ".repeat(offset)
    }

    fn draw_home(&self, f: &mut Frame, area: Rect) {
        let pal = palette(self.dark);
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} - {}", self.config.owner.name, self.config.owner.tagline),
                Style::default().fg(pal.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.config.owner.location.clone(),
                Style::default().fg(pal.dim),
            )),
            Line::from(""),
        ];
        for (i, code) in HERO_CODE_LINES.iter().enumerate() {
            if self.reveal.progress(i) <= 0.0 {
                continue;
            }
            lines.push(Line::from(Span::styled(
                format!("{}{code}", self.entrance_pad(i)),
                Style::default().fg(Color::Green),
            )));
        }
        lines.push(Line::from(""));
        for link in SOCIAL_LINKS {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", link.label), Style::default().fg(pal.accent)),
                Span::styled(link.url, Style::default().fg(pal.dim)),
            ]));
        }

        let block = Block::default().borders(Borders::ALL).title(" home ");
        f.render_widget(
            Paragraph::new(Text::from(lines))
                .block(block)
                .style(Style::default().fg(pal.text))
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn draw_about(&self, f: &mut Frame, area: Rect) {
        let pal = palette(self.dark);
        let mut lines = vec![Line::from(Span::styled(
            "Behind every great app is an even greater developer",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::from(""));

        for (i, award) in AWARDS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}{} ", self.entrance_pad(i), award.number),
                    Style::default().fg(pal.accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(award.text),
            ]));
        }
        lines.push(Line::from(""));

        for (i, skill) in SKILLS.iter().enumerate() {
            let idx = AWARDS.len() + i;
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}{:<24}", self.entrance_pad(idx), skill.title),
                    Style::default().fg(pal.accent),
                ),
                Span::styled(skill.description, Style::default().fg(pal.dim)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "What's the development process like?",
            Style::default().add_modifier(Modifier::BOLD),
        )));

        for (i, faq) in FAQS.iter().enumerate() {
            let marker = if self.open_faq == Some(i) { "-" } else { "+" };
            let cursor = if self.faq_cursor == i { "> " } else { "  " };
            let style = if self.faq_cursor == i {
                Style::default().fg(pal.accent)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{cursor}{marker} {}", faq.question),
                style,
            )));
            if self.open_faq == Some(i) {
                for wrapped in textwrap::wrap(faq.answer, area.width.saturating_sub(8) as usize) {
                    lines.push(Line::from(Span::styled(
                        format!("      {wrapped}"),
                        Style::default().fg(pal.dim),
                    )));
                }
            }
        }

        let block = Block::default().borders(Borders::ALL).title(" about ");
        f.render_widget(
            Paragraph::new(Text::from(lines))
                .block(block)
                .style(Style::default().fg(pal.text))
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn draw_projects(&mut self, f: &mut Frame, area: Rect) {
        let pal = palette(self.dark);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(5)])
            .split(area);

        // Filter row, active label highlighted like the original buttons.
        let mut spans = vec![Span::raw(" ")];
        for (i, label) in category_labels().iter().enumerate() {
            let style = if i == self.category_idx {
                Style::default().fg(pal.accent).add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(pal.dim)
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

        let projects = self.filtered_projects();
        let items: Vec<ListItem> = projects
            .iter()
            .enumerate()
            .map(|(i, p)| {
                ListItem::new(Line::from(vec![
                    Span::raw(self.entrance_pad(i)),
                    Span::styled(
                        format!("[{}] ", p.category),
                        Style::default().fg(pal.accent),
                    ),
                    Span::styled(p.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {}", p.tags.join(", ")),
                        Style::default().fg(pal.dim),
                    ),
                ]))
            })
            .collect();

        let title = format!(" Featured Projects ({} shown) ", projects.len());
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[1], &mut self.project_state);
    }

    fn draw_project_modal(&self, f: &mut Frame, id: u32) {
        let Some(project) = PROJECTS.iter().find(|p| p.id == id) else {
            return;
        };
        let pal = palette(self.dark);
        let area = f.area();
        let width = 70.min(area.width.saturating_sub(4));
        let height = 16.min(area.height.saturating_sub(4));
        let modal_area = Rect::new(
            (area.width.saturating_sub(width)) / 2,
            (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::from(Span::styled(
                project.title,
                Style::default().fg(pal.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                project.category.label(),
                Style::default().fg(pal.dim),
            )),
            Line::from(""),
            Line::from(project.description),
            Line::from(""),
            Line::from(format!("Tags:   {}", project.tags.join(", "))),
            Line::from(format!("Live:   {}", project.live_url)),
            Line::from(format!("Code:   {}", project.github_url)),
            Line::from(format!("Image:  {}", project.image)),
            Line::from(""),
            Line::from(Span::styled(
                "Esc to close",
                Style::default().fg(pal.dim),
            )),
        ];

        f.render_widget(
            Paragraph::new(Text::from(lines))
                .block(Block::default().borders(Borders::ALL).title(" project "))
                .wrap(Wrap { trim: false }),
            modal_area,
        );
    }

    fn draw_experience(&self, f: &mut Frame, area: Rect) {
        let pal = palette(self.dark);
        let mut lines = Vec::new();
        for (i, exp) in EXPERIENCES.iter().enumerate() {
            let active = i == self.exp_index;
            let marker = if active { ">" } else { " " };
            let head_style = if active {
                Style::default().fg(pal.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "{}{marker} {} {} - {} ({} - {})",
                    self.entrance_pad(i),
                    exp.icon,
                    exp.position,
                    exp.company,
                    exp.start_date,
                    exp.end_date
                ),
                head_style,
            )));
            lines.push(Line::from(Span::styled(
                format!("     {}", exp.location),
                Style::default().fg(pal.dim),
            )));
            if active {
                lines.push(Line::from(format!("     {}", exp.description)));
                for achievement in exp.achievements {
                    lines.push(Line::from(Span::styled(
                        format!("       * {achievement}"),
                        Style::default().fg(pal.dim),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    format!("     Skills: {}", exp.skills.join(", ")),
                    Style::default().fg(pal.accent),
                )));
            }
            lines.push(Line::from(""));
        }

        let block = Block::default().borders(Borders::ALL).title(" experience ");
        f.render_widget(
            Paragraph::new(Text::from(lines))
                .block(block)
                .style(Style::default().fg(pal.text))
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn draw_contact(&self, f: &mut Frame, area: Rect) {
        let pal = palette(self.dark);
        let mut lines = vec![
            Line::from(Span::styled(
                "Let's Build Something Amazing",
                Style::default().fg(pal.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Have a project in mind? Let's discuss how I can help bring your ideas to life",
                Style::default().fg(pal.dim),
            )),
            Line::from(""),
        ];

        for field in Field::ALL {
            let state = self.form.field(field);
            let focused = self.contact_focus == ContactFocus::Input(field);
            let marker = if focused { "> " } else { "  " };
            let cursor = if focused && self.editing { "_" } else { "" };
            let shown = if state.value.is_empty() && !(focused && self.editing) {
                Span::styled(field.placeholder(), Style::default().fg(pal.dim))
            } else {
                Span::raw(format!("{}{cursor}", state.value))
            };
            let label_style = if focused {
                Style::default().fg(pal.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{:<9}", field.as_str()), label_style),
                shown,
            ]));
            // Inline error, gated on the touched flag by the controller.
            if state.shows_error() {
                lines.push(Line::from(Span::styled(
                    format!("           {}", state.error),
                    Style::default().fg(Color::Red),
                )));
            }
        }

        lines.push(Line::from(""));
        let send_style = if self.contact_focus == ContactFocus::Send {
            Style::default().fg(pal.accent).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(pal.accent)
        };
        lines.push(Line::from(Span::styled("  [ Send Message ]", send_style)));

        let block = Block::default().borders(Borders::ALL).title(" contact ");
        f.render_widget(
            Paragraph::new(Text::from(lines))
                .block(block)
                .style(Style::default().fg(pal.text))
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn draw_help_overlay(&self, f: &mut Frame) {
        let area = f.area();
        let width = 56.min(area.width.saturating_sub(4));
        let height = 18.min(area.height.saturating_sub(4));
        let help_area = Rect::new(
            (area.width.saturating_sub(width)) / 2,
            (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );
        f.render_widget(Clear, help_area);

        let lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  Tab / Shift-Tab   next / previous section"),
            Line::from("  1..5              jump to a section"),
            Line::from("  j / k             move within a section"),
            Line::from("  f                 cycle the project filter"),
            Line::from("  Enter             open details / toggle / edit / send"),
            Line::from("  Esc               close modal, stop editing"),
            Line::from("  d                 toggle dark mode"),
            Line::from("  q / Ctrl-C        quit"),
            Line::from(""),
            Line::from("Press ? or Esc to close this help"),
        ];

        f.render_widget(
            Paragraph::new(Text::from(lines))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Cyan))
                        .title(" Help "),
                )
                .wrap(Wrap { trim: false }),
            help_area,
        );
    }

    // ---- test accessors -------------------------------------------------

    #[cfg(test)]
    fn press(&mut self, key: KeyCode) -> Action {
        self.handle_key(key, KeyModifiers::NONE)
    }
}

/// RAII guard to ensure terminal state is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Run the interactive site.
pub fn run_site_tui(config: SiteConfig) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(FolioError::Terminal(
            "browse requires an interactive terminal".to_string(),
        ));
    }

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    SiteTui::new(config).run(&mut terminal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validate::NAME_TOO_SHORT;

    fn tui() -> SiteTui {
        SiteTui::new(SiteConfig::default())
    }

    #[test]
    fn tab_cycles_sections_and_wraps() {
        let mut app = tui();
        assert_eq!(app.section, Section::Home);
        for _ in 0..Section::ALL.len() {
            app.press(KeyCode::Tab);
        }
        assert_eq!(app.section, Section::Home);
        app.press(KeyCode::BackTab);
        assert_eq!(app.section, Section::Contact);
    }

    #[test]
    fn number_keys_jump_to_sections() {
        let mut app = tui();
        app.press(KeyCode::Char('3'));
        assert_eq!(app.section, Section::Projects);
        app.press(KeyCode::Char('1'));
        assert_eq!(app.section, Section::Home);
    }

    #[test]
    fn filter_cycle_narrows_the_grid() {
        let mut app = tui();
        app.press(KeyCode::Char('3'));
        assert_eq!(app.filtered_projects().len(), PROJECTS.len());

        // All -> Web Design
        app.press(KeyCode::Char('f'));
        assert_eq!(app.selected_category(), "Web Design");
        assert_eq!(app.filtered_projects().len(), 2);

        // Wrap all the way back to All.
        for _ in 0..4 {
            app.press(KeyCode::Char('f'));
        }
        assert_eq!(app.selected_category(), "All");
        assert_eq!(app.filtered_projects().len(), PROJECTS.len());
    }

    #[test]
    fn enter_opens_modal_esc_closes() {
        let mut app = tui();
        app.press(KeyCode::Char('3'));
        app.press(KeyCode::Enter);
        assert_eq!(app.modal, Some(1));
        app.press(KeyCode::Esc);
        assert_eq!(app.modal, None);
    }

    #[test]
    fn faq_accordion_toggles() {
        let mut app = tui();
        app.press(KeyCode::Char('2'));
        app.press(KeyCode::Char('j'));
        app.press(KeyCode::Enter);
        assert_eq!(app.open_faq, Some(1));
        app.press(KeyCode::Enter);
        assert_eq!(app.open_faq, None);
    }

    #[test]
    fn typing_then_leaving_field_blurs_and_validates() {
        let mut app = tui();
        app.press(KeyCode::Char('5'));
        app.press(KeyCode::Enter); // start editing name
        app.press(KeyCode::Char('J'));
        // Still editing, untouched: no visible error yet.
        assert!(!app.form.field(Field::Name).shows_error());
        app.press(KeyCode::Esc); // leave the field -> blur
        assert_eq!(app.form.field(Field::Name).error, NAME_TOO_SHORT);
        assert!(app.form.field(Field::Name).shows_error());
    }

    #[test]
    fn send_with_valid_form_resets_and_notifies() {
        let mut app = tui();
        app.press(KeyCode::Char('5'));

        let entries = [
            (Field::Name, "Jane"),
            (Field::Email, "jane@x.com"),
            (Field::Message, "Hello there, this works."),
        ];
        for (field, text) in entries {
            app.press(KeyCode::Enter);
            for c in text.chars() {
                app.press(KeyCode::Char(c));
            }
            app.press(KeyCode::Tab); // blur and advance
            let _ = field;
        }
        assert_eq!(app.contact_focus, ContactFocus::Send);
        app.press(KeyCode::Enter);

        assert_eq!(app.status_message.as_deref(), Some(SENT_NOTICE));
        assert!(app.form.field(Field::Name).value.is_empty());
        assert!(!app.form.field(Field::Name).touched);
    }

    #[test]
    fn send_with_empty_form_shows_every_error() {
        let mut app = tui();
        app.press(KeyCode::Char('5'));
        // Move focus straight to the send button.
        app.press(KeyCode::Char('k'));
        assert_eq!(app.contact_focus, ContactFocus::Send);
        app.press(KeyCode::Enter);

        for field in Field::ALL {
            assert!(app.form.field(field).shows_error());
        }
        assert_eq!(
            app.status_message.as_deref(),
            Some("Please fix the highlighted fields")
        );
    }

    #[test]
    fn q_quits_outside_editing_but_types_inside() {
        let mut app = tui();
        app.press(KeyCode::Char('5'));
        app.press(KeyCode::Enter);
        assert_eq!(app.press(KeyCode::Char('q')), Action::Continue);
        assert_eq!(app.form.field(Field::Name).value, "q");
        app.press(KeyCode::Esc);
        assert_eq!(app.press(KeyCode::Char('q')), Action::Quit);
    }
}
