// Binary entry point: argument parsing, logging, terminal lifecycle.
// The terminal owns stdout while the app runs, so logging goes to a file
// (opt-in via --log-file) rather than stderr.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use env_logger::{Builder, Env, Target};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

mod app;
mod data;
mod error;
mod state;
mod ui;

use app::App;
use data::PageData;
use error::Result;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "feeddeck: a social feed dashboard for the terminal.",
    long_about = "feeddeck renders a social feed page: stories, posts, suggested \
    groups, and a contact chat panel.\n\n\
    With no arguments it shows a built-in sample dataset. Pass --data to load \
    a page dataset from a JSON file instead."
)]
struct Args {
    /// Path to a JSON page dataset; defaults to the built-in sample
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Write logs to this file; without it logging is disabled
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn setup_logging(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    info!(
        "{} {} starting up",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    info!("logging to file: {}", log_file.display());
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref log_file) = args.log_file {
        setup_logging(log_file)?;
    }

    let data = match args.data {
        Some(ref path) => {
            info!("loading page data from {}", path.display());
            PageData::from_json_file(path)?
        }
        None => {
            info!("using the built-in sample dataset");
            PageData::sample()
        }
    };
    info!(
        "page data loaded: {} contacts, {} stories, {} groups, {} posts",
        data.contacts.len(),
        data.stories.len(),
        data.groups.len(),
        data.posts.len()
    );

    let mut terminal = setup_terminal()?;
    let run_result = App::new(data).run(&mut terminal);
    restore_terminal(terminal)?;
    run_result?;

    info!("shut down cleanly");
    Ok(())
}
