//! atrium-inspect — terminal walkthrough of the room scene.
//!
//! Assembles the room frame on every key press and shows what a renderer
//! would receive: the pass sequence with command counts, the camera, and
//! the resolved layout. No window or GPU is needed.
//!
//! Run with `cargo run -p atrium-inspect [-- path/to/room.json]`.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use atrium::camera::{CameraState, Viewport};
use atrium::config::RoomConfig;
use atrium::error::SceneError;
use atrium::input::{Action, KeyCode as SceneKey, KeyMap};
use atrium::overlay;
use atrium::scene::{Frame, RoomScene};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;

const DUMP_PATH: &str = "frame.json";

// ── App state ────────────────────────────────────────────────────────────

struct App {
    scene: RoomScene,
    camera: CameraState,
    viewport: Viewport,
    keys: KeyMap,
    overlay_on: bool,
    frame: Frame,
    status: String,
}

impl App {
    fn new(scene: RoomScene) -> Self {
        let camera = scene.camera();
        let viewport = Viewport::default();
        let frame = scene.assemble(&camera, &viewport, true);
        Self {
            scene,
            camera,
            viewport,
            keys: KeyMap::default(),
            overlay_on: true,
            frame,
            status: String::from("ready"),
        }
    }

    fn rebuild(&mut self) {
        self.frame = self.scene.assemble(&self.camera, &self.viewport, self.overlay_on);
    }

    /// Apply a mapped action. Returns `true` if the app should quit.
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Exit => return true,
            Action::ToggleOverlay => {
                self.overlay_on = !self.overlay_on;
                self.status = format!("overlay {}", if self.overlay_on { "on" } else { "off" });
            }
            Action::Camera(a) => {
                self.camera.apply(a);
                self.status = format!("{a:?}");
            }
        }
        self.rebuild();
        false
    }

    fn dump(&mut self) {
        self.status = match write_frame(&self.frame) {
            Ok(()) => format!("wrote {DUMP_PATH}"),
            Err(e) => {
                log::warn!("frame dump failed: {e}");
                format!("dump failed: {e}")
            }
        };
    }
}

fn write_frame(frame: &Frame) -> Result<(), SceneError> {
    let json = frame.to_json_pretty()?;
    std::fs::write(DUMP_PATH, json)?;
    Ok(())
}

/// Terminal key to the physical key the scene's bindings are written for.
fn scene_key(code: KeyCode) -> Option<SceneKey> {
    let key = match code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => SceneKey::KeyW,
            'a' => SceneKey::KeyA,
            's' => SceneKey::KeyS,
            'd' => SceneKey::KeyD,
            'q' => SceneKey::KeyQ,
            'e' => SceneKey::KeyE,
            'r' => SceneKey::KeyR,
            'c' => SceneKey::KeyC,
            _ => return None,
        },
        KeyCode::Up => SceneKey::ArrowUp,
        KeyCode::Down => SceneKey::ArrowDown,
        KeyCode::Left => SceneKey::ArrowLeft,
        KeyCode::Right => SceneKey::ArrowRight,
        KeyCode::Esc => SceneKey::Escape,
        _ => return None,
    };
    Some(key)
}

// ── Main ─────────────────────────────────────────────────────────────────

fn load_scene() -> Result<RoomScene, SceneError> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => RoomConfig::load(&path)?,
        None => RoomConfig::default(),
    };
    RoomScene::new(config)
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let scene = match load_scene() {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("atrium-inspect: {e}");
            std::process::exit(1);
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(scene);

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key(&mut app, key) {
                    break;
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

// ── Key handling ─────────────────────────────────────────────────────────

/// Returns `true` if the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('j') => {
            app.dump();
            return false;
        }
        _ => {}
    }
    match scene_key(key.code).and_then(|k| app.keys.action(k)) {
        Some(action) => app.apply(action),
        None => false,
    }
}

// ── Drawing ──────────────────────────────────────────────────────────────

fn ui(f: &mut ratatui::Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(8),    // passes + detail
            Constraint::Length(1), // help bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);
    draw_passes(f, app, body[0]);
    draw_detail(f, app, body[1]);

    draw_help_bar(f, chunks[2]);
}

fn label(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::White))
}

fn draw_header(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let (overlay_text, overlay_color) = if app.overlay_on {
        (" AXES ", Color::Green)
    } else {
        (" NO AXES ", Color::DarkGray)
    };
    let text = Line::from(vec![
        Span::styled(overlay_text, Style::default().bg(overlay_color).fg(Color::Black)),
        Span::raw("  "),
        Span::styled(
            overlay::camera_readout(app.camera.position()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        label("Commands: "),
        value(app.frame.commands.len().to_string()),
        Span::raw("  |  "),
        Span::styled(app.status.clone(), Style::default().fg(Color::Yellow)),
    ]);

    let block = Block::default()
        .title(" atrium-inspect ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_passes(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let commands = &app.frame.commands;
    let lines: Vec<Line> = commands
        .passes()
        .iter()
        .map(|pass| {
            let mut kinds: Vec<(&str, usize)> = Vec::new();
            for cmd in &commands.commands()[pass.start..pass.end] {
                match kinds.iter_mut().find(|(k, _)| *k == cmd.kind()) {
                    Some((_, n)) => *n += 1,
                    None => kinds.push((cmd.kind(), 1)),
                }
            }
            let breakdown = kinds
                .iter()
                .map(|(k, n)| format!("{n} {k}"))
                .collect::<Vec<_>>()
                .join(", ");
            Line::from(vec![
                Span::styled(format!(" {:<10}", pass.name), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:>4}  ", pass.len()), Style::default().fg(Color::White)),
                label(&breakdown),
            ])
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} passes ", commands.passes().len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_detail(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let cam = &app.camera;
    let look = cam.look_at();
    let layout = app.scene.layout();

    let mut lines = vec![
        Line::from(vec![
            label(" look-at    "),
            value(format!("({:.2}, {:.2}, {:.2})", look.x, look.y, look.z)),
        ]),
        Line::from(vec![
            label(" pitch/yaw  "),
            value(format!("{:.1}° / {:.1}°", cam.pitch(), cam.yaw())),
        ]),
        Line::from(vec![
            label(" frame row  "),
            value(format!(
                "{:.2} .. {:.2}  ({} frames, {:.2} wide)",
                layout.row_left(),
                layout.row_right(),
                layout.len(),
                layout.row_width()
            )),
        ]),
        Line::from(""),
        Line::from(label(" curtains")),
    ];

    for c in app.scene.curtains() {
        lines.push(Line::from(vec![
            label(&format!("   x {:>7.2}  ", c.left_x)),
            value(format!(
                "height {:.2}  band bottom {:.2} (min {:.2})",
                c.height,
                c.clamped_band_bottom(),
                c.min_band_bottom_y
            )),
        ]));
    }

    let block = Block::default()
        .title(" detail ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_help_bar(f: &mut ratatui::Frame, area: Rect) {
    let key = |k: &str| Span::styled(k.to_string(), Style::default().fg(Color::Cyan));
    let help = Line::from(vec![
        key(" [WASD]"),
        Span::raw(" move  "),
        key("[Q/E]"),
        Span::raw(" up/down  "),
        key("[\u{2190}\u{2191}\u{2192}\u{2193}]"),
        Span::raw(" look  "),
        key("[R]"),
        Span::raw(" reset  "),
        key("[C]"),
        Span::raw(" axes  "),
        key("[j]"),
        Span::raw(" dump json  "),
        key("[Esc]"),
        Span::raw(" quit"),
    ]);
    f.render_widget(Paragraph::new(help), area);
}
