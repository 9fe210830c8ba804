use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::SessionPhase;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::InputOutcome;

fn loading_text(app_state: &AppState) -> &'static str {
    if app_state.controller.is_analyzing() {
        return "Analyzing your responses and generating personalized recommendations...";
    }
    if app_state.controller.phase() == SessionPhase::Starting {
        return "Starting your assessment...";
    }

    return "Sending...";
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut textarea = TextArea::default();

    #[cfg(feature = "dev")]
    {
        let test_str = "Most days I feel completely drained before lunch even starts";
        for char in test_str.chars() {
            textarea.input(tui_textarea::Input {
                key: tui_textarea::Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    // The assessment starts as soon as the UI is up, matching a chat where
    // the first question greets you.
    if let Some(action) = app_state.controller.start_session() {
        tx.send(action)?;
    }

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Min(1),
                    Constraint::Max(1),
                    Constraint::Max(4),
                ])
                .split(frame.size());

            if layout[0].width != app_state.last_known_width
                || layout[0].height != app_state.last_known_height
            {
                app_state.set_rect(layout[0]);
            }

            app_state
                .bubble_list
                .render(frame, layout[0], app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[0].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            let (status, status_is_error) = app_state.status_text();
            let mut status_style = Style::default().add_modifier(Modifier::DIM);
            if status_is_error {
                status_style = Style::default().fg(Color::Red);
            }
            frame.render_widget(
                Paragraph::new(format!(" {status}")).style(status_style),
                layout[1],
            );

            if app_state.controller.phase().is_in_flight() {
                Loading::new(loading_text(app_state)).render(frame, layout[2]);
            } else {
                frame.render_widget(textarea.widget(), layout[2]);
            }
        })?;

        match events.next().await? {
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => {
                if app_state.controller.phase().is_in_flight() {
                    continue;
                }

                let input_str = &textarea.lines().join("\n");
                if input_str.is_empty() {
                    continue;
                }

                match app_state.handle_input(input_str) {
                    InputOutcome::Quit => {
                        break;
                    }
                    InputOutcome::Dispatch(action) => {
                        tx.send(action)?;
                        textarea = TextArea::default();
                    }
                    InputOutcome::Consumed => {
                        // Rejected answers stay in the input for editing;
                        // handled commands are cleared.
                        if input_str.starts_with('/') {
                            textarea = TextArea::default();
                        }
                    }
                }
            }
            Event::KeyboardCharInput(input) => {
                if !app_state.controller.phase().is_in_flight() {
                    textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                textarea.insert_str(&text.replace('\r', "\n"));
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UITick() => {
                app_state.tick();
            }
            event => {
                app_state.handle_event(event);
                if let Some(question) = app_state.controller.current_question() {
                    textarea.set_placeholder_text(question.placeholder.to_string());
                }
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut app_state = AppState::default();
    let mut events = EventsService::new(rx);

    start_loop(&mut terminal, &mut app_state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
