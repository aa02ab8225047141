use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event as CrosstermEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use folio::{app::App, config::Config, logging};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// An interactive terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A shell-style terminal portfolio", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Start in day mode
    #[arg(long)]
    day: bool,

    /// Skip the header intro typing effect
    #[arg(long)]
    no_intro: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_or_default(Config::default_path().as_deref()),
    };

    // CLI flags override config
    if args.day {
        config.start_in_day_mode = true;
    }
    if args.no_intro {
        config.intro.enabled = false;
    }

    Ok(config)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )
    .context("Failed to enter alternate screen")?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal() {
    let _ = execute!(
        stdout(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args)?;

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init_global(&log_file).context("Failed to initialize logging")?;
    tracing::info!("folio starting");

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        restore_terminal();
        original_hook(panic);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(&config);

    let result = run_event_loop(&mut app, &mut terminal);

    restore_terminal();
    result.context("Event loop returned an error")
}

/// Main event loop
fn run_event_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    const FRAME_DURATION: Duration = Duration::from_millis(16); // 60fps
    let mut last_render = Instant::now();
    let mut needs_render = true;

    loop {
        if app.should_quit() {
            tracing::info!("folio exiting");
            break;
        }

        if app.tick() {
            needs_render = true;
        }

        if needs_render && last_render.elapsed() >= FRAME_DURATION {
            terminal.draw(|frame| app.render(frame))?;
            last_render = Instant::now();
            needs_render = false;
        }

        let timeout = if needs_render {
            FRAME_DURATION.saturating_sub(last_render.elapsed())
        } else {
            Duration::from_millis(50)
        };

        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    app.handle_key(key_event.code, key_event.modifiers);
                    needs_render = true;
                }
            }
            CrosstermEvent::Mouse(mouse_event) => {
                app.handle_mouse(mouse_event);
                needs_render = true;
            }
            CrosstermEvent::Resize(..) => {
                needs_render = true;
            }
            CrosstermEvent::Paste(text) => {
                app.paste(&text);
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}
