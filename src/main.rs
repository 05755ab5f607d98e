use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::time::{Duration, Instant};

// Declare modules
mod client;
mod domain;
mod event;
mod export;
mod handler;
mod state;
mod table;
mod theme;
mod tui;
mod ui;

use crate::{
    domain::Network,
    event::Action,
    state::{App, StartupOptions},
    tui::Tui,
};

// LazyUnit version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Interval between time-based UI updates (toast countdown).
const TICK_RATE: Duration = Duration::from_millis(200);

// ASCII art logo
const LOGO: &str = r#"
██╗      █████╗ ███████╗██╗   ██╗██╗   ██╗███╗   ██╗██╗████████╗
██║     ██╔══██╗╚══███╔╝╚██╗ ██╔╝██║   ██║████╗  ██║██║╚══██╔══╝
██║     ███████║  ███╔╝  ╚████╔╝ ██║   ██║██╔██╗ ██║██║   ██║
██║     ██╔══██║ ███╔╝    ╚██╔╝  ██║   ██║██║╚██╗██║██║   ██║
███████╗██║  ██║███████╗   ██║   ╚██████╔╝██║ ╚████║██║   ██║
╚══════╝╚═╝  ╚═╝╚══════╝   ╚═╝    ╚═════╝ ╚═╝  ╚═══╝╚═╝   ╚═╝
"#;

/// LazyUnit - Terminal UI for Hyperunit bridge operations
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Address to query on startup (fires the initial query automatically)
    #[arg(short, long)]
    address: Option<String>,

    /// Network to query: mainnet or testnet
    #[arg(short, long)]
    network: Option<Network>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if let Some(Commands::Version) = cli.command {
        println!("{}", LOGO);
        println!("LazyUnit v{}", VERSION);
        println!("A terminal UI for exploring Hyperunit bridge operations");
        return Ok(());
    }

    color_eyre::install()?;
    let mut terminal = tui::init()?;

    let mut app = App::new(StartupOptions {
        address: cli.address,
        network: cli.network,
    });
    let size = terminal.size()?;
    app.update_terminal_size(size.width, size.height);

    // The automatic initial query: exactly once, only when an address was
    // supplied on the command line.
    if app.has_startup_address() {
        app.update(Action::SubmitQuery);
    }

    let result = run_app(&mut terminal, &mut app).await;

    tui::restore()?;
    result
}

/// Sets up file-backed logging when `RUST_LOG` is present.
///
/// The subscriber writes to a log file rather than the terminal, which the
/// alternate screen owns while the app runs.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_err() {
        return;
    }
    let path = std::env::temp_dir().join("lazyunit.log");
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::sync::Arc::new(file))
            .with_ansi(false)
            .try_init();
    }
}

/// Main application loop.
async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        if app.exit {
            break;
        }

        terminal.draw(|frame| ui::render(app, frame))?;

        // Wait briefly for a terminal event, then service async messages and
        // the tick timer. Fetches run on worker threads, so blocking here for
        // a few milliseconds never stalls them.
        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_millis(5))
            .min(Duration::from_millis(50));

        if crossterm::event::poll(timeout)? {
            match crossterm::event::read() {
                Ok(crossterm::event::Event::Resize(width, height)) => {
                    app.update_terminal_size(width, height);
                    continue;
                }
                Ok(event) => {
                    if let Some(action) = handler::handle_event(app, event) {
                        app.update(action);
                    }
                }
                Err(_) => {
                    app.exit = true;
                }
            }
        }

        app.drain_messages();

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
            app.update(Action::Tick);
        }

        // Let spawned tasks make progress between loop turns.
        tokio::task::yield_now().await;
    }
    Ok(())
}
