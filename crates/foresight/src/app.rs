use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use foresight_core::error::StudyError;
use foresight_core::model::{Figure, FigureId};
use foresight_core::{Study, StudyResults};

use crate::screens::figure::FigureScreen;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, WARNING_COLOR};

/// Full-screen viewer that pages through the figures of a study
pub struct App {
    study: Study,
    results: StudyResults,
    selected: usize,
    exit: bool,
    figure_screen: FigureScreen,
}

impl App {
    /// Open the viewer, starting at `initial` if given
    pub fn new(
        study: Study,
        results: StudyResults,
        initial: Option<&FigureId>,
    ) -> Result<Self, StudyError> {
        let selected = match initial {
            Some(id) => study
                .figures
                .iter()
                .position(|f| &f.id == id)
                .ok_or_else(|| StudyError::UnknownFigure(id.clone()))?,
            None => 0,
        };

        Ok(Self {
            study,
            results,
            selected,
            exit: false,
            figure_screen: FigureScreen,
        })
    }

    /// The figure currently on screen
    pub fn current_figure(&self) -> Option<&Figure> {
        self.study.figures.get(self.selected)
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// runs the viewer's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Figure
                Constraint::Length(1), // Help
            ])
            .split(frame.area());

        self.render_title(frame, chunks[0]);

        match self.current_figure() {
            Some(figure) => self
                .figure_screen
                .render(frame, chunks[1], figure, &self.results),
            None => frame.render_widget(
                Paragraph::new(Line::from("  This study has no figures."))
                    .style(Style::default().fg(WARNING_COLOR)),
                chunks[1],
            ),
        }

        let help = Line::from(Span::styled(
            " [Left/Right/Tab] switch figure  [q/Esc] quit",
            Style::default().fg(HELP_COLOR),
        ));
        frame.render_widget(Paragraph::new(help), chunks[2]);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = match self.current_figure() {
            Some(figure) => format!(
                " {} ({}/{}) - {}",
                figure.id,
                self.selected + 1,
                self.study.figures.len(),
                figure.title
            ),
            None => format!(" {}", self.study.title),
        };
        let line = Line::from(Span::styled(
            title,
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true;
            }
            KeyCode::Right | KeyCode::Tab => self.step(1),
            KeyCode::Left | KeyCode::BackTab => self.step(-1),
            _ => {}
        }
    }

    /// Move `delta` figures forward, wrapping at either end
    fn step(&mut self, delta: isize) {
        let count = self.study.figures.len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected as isize + delta).rem_euclid(count as isize) as usize;
        if let Some(figure) = self.current_figure() {
            tracing::debug!(figure = %figure.id, "switched figure");
        }
    }
}
