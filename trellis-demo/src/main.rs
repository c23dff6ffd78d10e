use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use crossterm::event::Event;
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use trellis_demo::{App, DemoError, TerminalGuard, load_users};

const TICK: Duration = Duration::from_millis(100);

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DemoError> {
    let log_file = File::create("trellis-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let path = env::args_os().nth(1).map(PathBuf::from);
    let users = load_users(path.as_deref())?;
    info!("Loaded {} users", users.len());

    let mut app = App::new(users)?;
    let mut terminal = TerminalGuard::new()?;

    while app.is_running() {
        if app.needs_redraw() {
            let (width, _) = terminal.size()?;
            terminal.draw(&app.lines(width as usize))?;
            app.mark_drawn();
        }

        for event in terminal.poll(TICK)? {
            match event {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(..) => app.request_redraw(),
                _ => {}
            }
        }
        app.tick(Instant::now());
    }

    Ok(())
}
