//! Ratatui-based terminal form.
//!
//! The left panel holds the assignment editor and the two output filenames;
//! the right panel previews the last generated markdown and charts the point
//! distribution.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::pipeline::{self, RunOutput};
use crate::config::{Config, OutputPaths};
use crate::error::AppError;

mod editor;
mod plotters_chart;

use editor::{LineInput, TextEditor};
use plotters_chart::DistributionChart;

/// Longest accepted output filename.
const FILENAME_LIMIT: usize = 32;

/// How long a status message stays visible.
const STATUS_TIMEOUT: Duration = Duration::from_secs(2);

const EXAMPLE: &str = "eg: 100 x 2 Reading Responses (Readings)
    250 x 1 Midterm Exam (Midterm)
    1200 Participation";

/// Start the TUI.
pub fn run(config: Config) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Editor,
    Markdown,
    Chart,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Editor => Focus::Markdown,
            Focus::Markdown => Focus::Chart,
            Focus::Chart => Focus::Editor,
        }
    }
}

struct App {
    config: Config,
    editor: TextEditor,
    markdown_input: LineInput,
    chart_input: LineInput,
    focus: Focus,
    status: Option<(String, Instant)>,
    preview: String,
    run: Option<RunOutput>,
}

impl App {
    fn new(config: Config) -> Self {
        let editor = TextEditor::from_lines(&config.assignments);
        let markdown_input =
            LineInput::new(config.output.markdown.display().to_string(), FILENAME_LIMIT);
        let chart_input =
            LineInput::new(config.output.chart.display().to_string(), FILENAME_LIMIT);
        Self {
            config,
            editor,
            markdown_input,
            chart_input,
            focus: Focus::Editor,
            status: None,
            preview: String::new(),
            run: None,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if self.expire_status() {
                needs_redraw = true;
            }
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('g') if ctrl => self.generate(),
            KeyCode::Tab => self.focus = self.focus.next(),
            _ => {
                match self.focus {
                    Focus::Editor => self.editor.handle_key(key),
                    Focus::Markdown => self.markdown_input.handle_key(key),
                    Focus::Chart => self.chart_input.handle_key(key),
                };
            }
        }
        false
    }

    /// Run the pipeline on the editor contents and write both files.
    fn generate(&mut self) {
        let run = pipeline::run(self.editor.lines(), &self.config.scale);
        let paths = OutputPaths {
            markdown: PathBuf::from(self.markdown_input.value().trim()),
            chart: PathBuf::from(self.chart_input.value().trim()),
        };

        match pipeline::write_outputs(&run, &paths, &self.config.late_policy, true) {
            Ok(markdown) => {
                self.preview = markdown;
                self.run = Some(run);
                self.set_status("✅ Saved files");
            }
            Err(err) => {
                tracing::warn!(error = %err, "generate failed");
                self.set_status(format!("❌ {err}"));
            }
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    /// Drop a status message older than [`STATUS_TIMEOUT`]; `true` if one was dropped.
    fn expire_status(&mut self) -> bool {
        let expired = self
            .status
            .as_ref()
            .is_some_and(|(_, since)| since.elapsed() >= STATUS_TIMEOUT);
        if expired {
            self.status = None;
        }
        expired
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(52), Constraint::Min(0)])
            .split(frame.area());

        self.draw_form(frame, chunks[0]);
        self.draw_preview(frame, chunks[1]);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(Paragraph::new("Enter your assignments below"), rows[0]);
        frame.render_widget(
            Paragraph::new(EXAMPLE).style(Style::default().fg(Color::DarkGray)),
            rows[1],
        );

        self.draw_editor(frame, rows[2]);
        self.draw_input(frame, rows[3], "Markdown ", &self.markdown_input, Focus::Markdown);
        self.draw_input(frame, rows[4], "Chart    ", &self.chart_input, Focus::Chart);

        let help = "tab next field  ctrl+g generate files  ctrl+c quit";
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::Gray)),
            rows[5],
        );

        if let Some((message, _)) = &self.status {
            frame.render_widget(
                Paragraph::new(message.as_str()).style(Style::default().fg(Color::Yellow)),
                rows[6],
            );
        }
    }

    fn draw_editor(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let focused = self.focus == Focus::Editor;
        let border = if focused { Color::Magenta } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (row, col) = self.editor.cursor();
        let visible = usize::from(inner.height.max(1));
        let scroll = row.saturating_sub(visible - 1);

        let lines: Vec<Line> = self.editor.lines().iter().map(|l| Line::from(l.as_str())).collect();
        frame.render_widget(
            Paragraph::new(Text::from(lines)).scroll((scroll as u16, 0)),
            inner,
        );

        if focused {
            let x = inner.x + (col as u16).min(inner.width.saturating_sub(1));
            let y = inner.y + (row - scroll) as u16;
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    fn draw_input(
        &self,
        frame: &mut ratatui::Frame<'_>,
        area: Rect,
        label: &str,
        input: &LineInput,
        field: Focus,
    ) {
        let style = if self.focus == field {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::raw(label),
            Span::styled("> ", style),
            Span::styled(input.value(), style),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        if self.focus == field {
            let offset = (label.chars().count() + 2 + input.value().chars().count()) as u16;
            let x = area.x + offset.min(area.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(x, area.y));
        }
    }

    fn draw_preview(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(14)])
            .split(area);

        let preview = if self.preview.is_empty() {
            Paragraph::new("Press ctrl+g to generate files.")
                .style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.preview.as_str())
        };
        frame.render_widget(
            preview
                .wrap(Wrap { trim: false })
                .block(Block::default().title("Preview").borders(Borders::ALL)),
            chunks[0],
        );

        let block = Block::default().title("Distribution").borders(Borders::ALL);
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        frame.render_widget(Clear, inner);

        if let Some(run) = &self.run {
            let values = run.chart_values();
            frame.render_widget(DistributionChart { values: &values }, inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with_outputs(dir: &std::path::Path) -> App {
        let mut config = parse_config(
            "scale:\n  - Letter: A\n    Min: 90\n  - Letter: B\n    Min: 80\n\
             assignments:\n  - 400 x 2 major projects (projects)\n",
        )
        .unwrap();
        config.output = OutputPaths {
            markdown: dir.join("out.md"),
            chart: dir.join("chart.svg"),
        };
        // Bypass the filename limit so temp paths fit.
        let mut app = App::new(config.clone());
        app.markdown_input =
            LineInput::new(config.output.markdown.display().to_string(), usize::MAX);
        app.chart_input = LineInput::new(config.output.chart.display().to_string(), usize::MAX);
        app
    }

    #[test]
    fn tab_cycles_focus() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_outputs(dir.path());
        assert_eq!(app.focus, Focus::Editor);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Markdown);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Chart);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Editor);
    }

    #[test]
    fn keys_go_to_focused_field() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_outputs(dir.path());
        app.handle_key(key(KeyCode::Enter));
        for c in "200 final".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.editor.lines(), ["400 x 2 major projects (projects)", "200 final"]);

        app.handle_key(key(KeyCode::Tab));
        let before = app.markdown_input.value().to_string();
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.markdown_input.value().chars().count(), before.chars().count() - 1);
    }

    #[test]
    fn ctrl_g_writes_files_and_previews() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_outputs(dir.path());
        app.handle_key(key(KeyCode::Enter));
        for c in "200 final".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }

        assert!(!app.handle_key(ctrl('g')));

        assert_eq!(app.status.as_ref().map(|(m, _)| m.as_str()), Some("✅ Saved files"));
        assert!(app.preview.contains("There are 1000 possible points"));
        assert!(app.preview.contains("| A | ≥ 900 | ≤ 1000 |"));
        assert!(dir.path().join("out.md").exists());
        assert!(dir.path().join("chart.svg").exists());
        assert_eq!(app.run.as_ref().map(|r| r.assignments.len()), Some(2));
    }

    #[test]
    fn generate_failure_sets_error_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_outputs(dir.path());
        app.markdown_input = LineInput::new(
            dir.path().join("missing").join("out.md").display().to_string(),
            usize::MAX,
        );

        app.handle_key(ctrl('g'));

        let status = app.status.as_ref().map(|(m, _)| m.clone()).unwrap_or_default();
        assert!(status.starts_with("❌ "), "{status}");
        assert!(app.preview.is_empty());
    }

    #[test]
    fn status_expires() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_outputs(dir.path());
        app.status = Some(("old".to_string(), Instant::now() - STATUS_TIMEOUT));
        assert!(app.expire_status());
        assert!(app.status.is_none());
        assert!(!app.expire_status());
    }

    #[test]
    fn ctrl_c_quits() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_outputs(dir.path());
        assert!(app.handle_key(ctrl('c')));
    }
}
