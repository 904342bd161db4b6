use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use time::OffsetDateTime;

use crate::controller::{Controller, Dialog, Effect, Phase};
use crate::navigate;
use crate::remote::RemoteClient;
use crate::runtime::Worker;
use crate::tui::TuiRunOptions;

mod input;
use input::Input;

mod modal;

mod view;
use view::{fmt_since, render_view_chrome};

pub(crate) fn run_with_options(opts: TuiRunOptions) -> Result<Option<String>> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let client = RemoteClient::new(&opts.api_url)?;
    let worker = Worker::spawn(client)?;
    let (ctl, effects) = Controller::start(opts.store);
    let mut app = App::new(ctl, worker, opts.api_url);
    app.dispatch(effects);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res.map(|_| app.opened)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoginField {
    Username,
    Password,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ProfileField {
    Name,
    Password,
}

struct App {
    ctl: Controller,
    worker: Worker,
    api_url: String,

    login_focus: LoginField,
    show_password: bool,
    username: Input,
    password: Input,

    selected: usize,

    rename: Input,
    profile_focus: ProfileField,
    profile_name: Input,
    profile_password: Input,

    /// Redirect waiting for the overlay to be drawn before it is opened.
    redirect: Option<String>,
    opened: Option<String>,
    quit: bool,
}

impl App {
    fn new(ctl: Controller, worker: Worker, api_url: String) -> Self {
        Self {
            ctl,
            worker,
            api_url,
            login_focus: LoginField::Username,
            show_password: false,
            username: Input::default(),
            password: Input::default(),
            selected: 0,
            rename: Input::default(),
            profile_focus: ProfileField::Name,
            profile_name: Input::default(),
            profile_password: Input::default(),
            redirect: None,
            opened: None,
            quit: false,
        }
    }

    fn dispatch(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Call(job) => {
                    let label = job.request.label();
                    if let Err(err) = self.worker.submit(job) {
                        tracing::error!(job = label, error = %format!("{:#}", err), "could not submit job");
                    }
                }
                Effect::Redirect(target) => self.redirect = Some(target),
            }
        }
    }

    fn drain_completions(&mut self) {
        while let Some(completion) = self.worker.try_recv() {
            let was_logged_in = self.ctl.is_logged_in();
            let effects = self.ctl.complete(completion);
            if !was_logged_in && self.ctl.is_logged_in() {
                self.password.clear();
                self.selected = 0;
            }
            // A profile save that succeeded closes the dialog; drop the typed password.
            if self.ctl.dialog().is_none() {
                self.profile_password.clear();
            }
            self.dispatch(effects);
        }
        let len = self.ctl.catalog().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn selected_id(&self) -> Option<String> {
        self.ctl
            .catalog()
            .entries()
            .get(self.selected)
            .map(|e| e.id.clone())
    }

    fn submit_login(&mut self) {
        {
            let form = self.ctl.login_form_mut();
            form.username = self.username.buf.clone();
            form.password = self.password.buf.clone();
        }
        let effects = self.ctl.submit_login();
        self.dispatch(effects);
    }

    fn open_rename(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.ctl.open_rename(&id)
            && let Some(draft) = self.ctl.rename_draft_mut()
        {
            let name = draft.proposed_name.clone();
            self.rename.set(name);
        }
    }

    fn confirm_rename(&mut self) {
        if let Some(draft) = self.ctl.rename_draft_mut() {
            draft.proposed_name = self.rename.buf.clone();
        }
        let effects = self.ctl.confirm_rename();
        self.rename.clear();
        self.dispatch(effects);
    }

    fn open_profile(&mut self) {
        if self.ctl.open_profile()
            && let Some(draft) = self.ctl.profile_draft_mut()
        {
            let name = draft.proposed_display_name.clone();
            self.profile_name.set(name);
            self.profile_password.clear();
            self.profile_focus = ProfileField::Name;
        }
    }

    fn save_profile(&mut self) {
        if let Some(draft) = self.ctl.profile_draft_mut() {
            draft.proposed_display_name = self.profile_name.buf.clone();
            draft.proposed_password = self.profile_password.buf.clone();
        }
        let effects = self.ctl.save_profile();
        self.dispatch(effects);
    }

    fn logout(&mut self) {
        self.ctl.logout();
        self.username.clear();
        self.password.clear();
        self.login_focus = LoginField::Username;
        self.selected = 0;
    }

    fn refresh(&mut self) {
        let effects = self.ctl.refresh();
        self.dispatch(effects);
    }

    fn select(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let effects = self.ctl.select(&id);
        self.dispatch(effects);
    }
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.drain_completions();

        terminal.draw(|f| draw(f, app)).context("draw")?;
        if app.quit {
            return Ok(());
        }

        if let Some(target) = app.redirect.take() {
            match navigate::open_target(&target) {
                Ok(()) => {
                    app.opened = Some(target);
                    return Ok(());
                }
                Err(err) => app.ctl.navigation_failed(&format!("{:#}", err)),
            }
            continue;
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit = true;
        return;
    }

    if app.ctl.alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.ctl.dismiss_alert();
        }
        return;
    }

    match app.ctl.dialog() {
        Some(Dialog::Rename(_)) => {
            handle_rename_key(app, key);
            return;
        }
        Some(Dialog::Profile(_)) => {
            handle_profile_key(app, key);
            return;
        }
        None => {}
    }

    match app.ctl.phase() {
        Phase::LoggedOut => handle_login_key(app, key),
        Phase::LoggedIn => handle_list_key(app, key),
        Phase::Navigating => {}
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.quit = true,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login_focus = match app.login_focus {
                LoginField::Username => LoginField::Password,
                LoginField::Password => LoginField::Username,
            };
        }
        KeyCode::F(2) => app.show_password = !app.show_password,
        KeyCode::Enter => {
            if app.login_focus == LoginField::Username && app.password.buf.is_empty() {
                app.login_focus = LoginField::Password;
            } else {
                app.submit_login();
            }
        }
        code => {
            if app.ctl.login_form().is_pending() {
                return;
            }
            let _ = match app.login_focus {
                LoginField::Username => app.username.handle_key(code),
                LoginField::Password => app.password.handle_key(code),
            };
        }
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    let len = app.ctl.catalog().len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.selected = app.selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            if app.selected + 1 < len {
                app.selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.select(),
        KeyCode::Char('r') => app.open_rename(),
        KeyCode::Char('p') => app.open_profile(),
        KeyCode::Char('l') => app.logout(),
        KeyCode::Char('g') => app.refresh(),
        _ => {}
    }
}

fn handle_rename_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.ctl.cancel_rename();
            app.rename.clear();
        }
        KeyCode::Enter => app.confirm_rename(),
        code => {
            let _ = app.rename.handle_key(code);
        }
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.ctl.close_profile();
            app.profile_password.clear();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.profile_focus = match app.profile_focus {
                ProfileField::Name => ProfileField::Password,
                ProfileField::Password => ProfileField::Name,
            };
        }
        KeyCode::Enter => app.save_profile(),
        code => {
            let _ = match app.profile_focus {
                ProfileField::Name => app.profile_name.handle_key(code),
                ProfileField::Password => app.profile_password.handle_key(code),
            };
        }
    }
}

fn draw(frame: &mut ratatui::Frame, app: &App) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    if app.ctl.is_logged_in() {
        draw_list(frame, app, parts[0]);
    } else {
        draw_login(frame, app, parts[0]);
    }
    frame.render_widget(
        Paragraph::new(Line::styled(footer_hint(app), Style::default().fg(Color::DarkGray))),
        parts[1],
    );

    if let Some(Dialog::Rename(draft)) = app.ctl.dialog() {
        let current = app
            .ctl
            .catalog()
            .find(&draft.target_id)
            .map(|e| e.display_name.as_str())
            .unwrap_or("");
        modal::draw_rename(frame, current, &app.rename);
    }
    if let Some(Dialog::Profile(draft)) = app.ctl.dialog() {
        modal::draw_profile(
            frame,
            draft,
            &app.profile_name,
            &app.profile_password,
            app.profile_focus,
        );
    }
    if app.ctl.phase() == Phase::Navigating {
        modal::draw_navigating(frame, app.redirect.as_deref().unwrap_or(""));
    }
    if let Some(alert) = app.ctl.alert() {
        modal::draw_alert(frame, alert);
    }
}

fn footer_hint(app: &App) -> &'static str {
    if app.ctl.alert().is_some() {
        return "Enter/Esc dismiss";
    }
    match app.ctl.phase() {
        Phase::LoggedOut => "Tab switch field  F2 show/hide password  Enter sign in  Esc quit",
        Phase::LoggedIn => "↑/↓ move  Enter open  r rename  p profile  g refresh  l logout  q quit",
        Phase::Navigating => "",
    }
}

fn draw_login(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let inner = render_view_chrome(frame, "Launcher", "Sign in to access the establishments", area);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("Service: {}", app.api_url),
            Style::default().fg(Color::DarkGray),
        )),
        parts[0],
    );

    let focus_style = |f: LoginField| {
        if app.login_focus == f {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        }
    };
    frame.render_widget(
        Paragraph::new(app.username.buf.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(LoginField::Username))
                .title("Username"),
        ),
        parts[1],
    );
    let shown = if app.show_password {
        app.password.buf.clone()
    } else {
        app.password.masked()
    };
    frame.render_widget(
        Paragraph::new(shown).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(LoginField::Password))
                .title("Password"),
        ),
        parts[2],
    );

    let form = app.ctl.login_form();
    let status = if form.is_pending() {
        Line::styled("Signing in…", Style::default().fg(Color::Yellow))
    } else if let Some(err) = form.error.as_deref() {
        Line::styled(err.to_string(), Style::default().fg(Color::Red))
    } else {
        Line::raw("")
    };
    frame.render_widget(Paragraph::new(status), parts[3]);

    if app.ctl.dialog().is_none() && app.ctl.alert().is_none() {
        let (field, input) = match app.login_focus {
            LoginField::Username => (parts[1], &app.username),
            LoginField::Password => (parts[2], &app.password),
        };
        let x = (input.cursor as u16).min(field.width.saturating_sub(3));
        frame.set_cursor_position((field.x + 1 + x, field.y + 1));
    }
}

fn draw_list(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let user = app.ctl.session().display_name.as_deref().unwrap_or("");
    let synced = match app.ctl.catalog().synced_at() {
        Some(at) => format!("synced {}", fmt_since(at, OffsetDateTime::now_utc())),
        None => "built-in list".to_string(),
    };
    let detail = format!("user: {}  |  {}", user, synced);
    let inner = render_view_chrome(frame, "Establishments", &detail, area);

    let items: Vec<ListItem> = app
        .ctl
        .catalog()
        .iter()
        .map(|e| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    e.display_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  ({})", e.id), Style::default().fg(Color::DarkGray)),
            ])];
            if let Some(desc) = e.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(Line::styled(
                    format!("  {}", desc),
                    Style::default().fg(Color::Gray),
                ));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !app.ctl.catalog().is_empty() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, inner, &mut state);
}
