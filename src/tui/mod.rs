pub mod app;
pub mod ui;

use std::{error::Error, io};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use app::{App, InputField, InputMode};
use ui::ui;

pub fn run_tui() -> Result<(), Box<dyn Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new();

    // Run loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match app.input_mode {
                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => app.next(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous(),
                    KeyCode::Char(' ') => app.toggle_complete(),
                    KeyCode::Char('a') => app.start_add(),
                    KeyCode::Char('n') => app.start_edit(InputField::Title),
                    KeyCode::Char('t') => app.start_edit(InputField::Due),
                    KeyCode::Char('p') => app.cycle_priority(),
                    KeyCode::Char('/') => app.start_search(),
                    KeyCode::Char('f') => app.cycle_status_filter(),
                    KeyCode::Char('c') => app.cycle_category(),
                    KeyCode::Char('o') => app.cycle_sort_key(),
                    KeyCode::Char('x') => app.clear_filters(),
                    KeyCode::Char('s') => app.toggle_select(),
                    KeyCode::Char('*') => app.toggle_select_all(),
                    KeyCode::Char('C') => app.complete_selection(),
                    KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
                    _ => {}
                },
                InputMode::Search => match key.code {
                    KeyCode::Enter => app.search_accept(),
                    KeyCode::Esc => app.search_cancel(),
                    KeyCode::Char(c) => app.search_push(c),
                    KeyCode::Backspace => app.search_pop(),
                    _ => {}
                },
                InputMode::Confirm => match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
                    KeyCode::Char('n') | KeyCode::Esc => app.cancel_delete(),
                    _ => {}
                },
                InputMode::Adding | InputMode::Editing => match key.code {
                    KeyCode::Enter => app.handle_input(),
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Normal;
                        app.input_buffer.clear();
                    }
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    _ => {}
                },
            }
        }
    }
}
