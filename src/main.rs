mod terminal_input;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use rogue_clone::core::constants::LOG_FILE;
use rogue_clone::meta::{bank_souls, load_meta, save_meta, try_buy_upgrade};
use rogue_clone::utils::{init_logging, persistence::save_path};
use rogue_clone::{GameSession, MetaProgress, SessionConfig};
use std::io;
use std::time::{Duration, Instant};
use terminal_input::{field_viewport, TerminalInput};
use ui::menu::RunSummary;
use ui::shop::ShopState;

/// Frame poll interval (~60 fps).
const FRAME_POLL_MS: u64 = 16;

/// Screen states
enum Screen {
    Title,
    Playing,
    GameOver(RunSummary),
    Shop,
}

/// Parsed command-line options.
#[derive(Debug, Default)]
struct CliOptions {
    seed: Option<u64>,
    reset_meta: bool,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("rogue-clone {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Rogue Clone - real-time terminal dungeon crawler\n");
                println!("Usage: rogue-clone [options]\n");
                println!("Options:");
                println!("  --seed <n>    Use a fixed random seed");
                println!("  --reset-meta  Forget all banked souls and upgrades");
                println!("  --version     Show version information");
                println!("  --help        Show this help message");
                println!();
                println!("Logs go to ~/.rogue_clone/{} (filter: ROGUE_CLONE_LOG)", LOG_FILE);
                std::process::exit(0);
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--reset-meta" => options.reset_meta = true,
            other => return Err(format!("Unknown option: {}", other)),
        }
    }
    Ok(options)
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'rogue-clone --help' for usage.");
            std::process::exit(1);
        }
    };

    match save_path(LOG_FILE) {
        Ok(path) => {
            if let Err(e) = init_logging(&path) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), seed = ?options.seed, "starting");

    let mut meta = if options.reset_meta {
        let fresh = MetaProgress::default();
        if let Err(e) = save_meta(&fresh) {
            eprintln!("Warning: could not reset meta-progression: {}", e);
        }
        fresh
    } else {
        load_meta()
    };

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut meta, &mut rng);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    tracing::info!(souls = meta.souls, "exiting");
    println!("Goodbye!");
    Ok(())
}

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn run(terminal: &mut Term, meta: &mut MetaProgress, rng: &mut StdRng) -> io::Result<()> {
    let mut screen = Screen::Title;
    let mut shop = ShopState::default();
    let mut session: Option<GameSession> = None;

    loop {
        match screen {
            Screen::Title => {
                terminal.draw(|frame| ui::menu::render_title(frame, meta))?;
                if let Some(key) = next_key_press()? {
                    match key.code {
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            session = Some(new_run(terminal, meta, rng)?);
                            screen = Screen::Playing;
                        }
                        KeyCode::Char('s') | KeyCode::Char('S') => {
                            shop.status = None;
                            screen = Screen::Shop;
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                        _ => {}
                    }
                }
            }

            Screen::Shop => {
                terminal.draw(|frame| ui::shop::render_shop(frame, meta, &shop))?;
                if let Some(key) = next_key_press()? {
                    match key.code {
                        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
                            shop.select_prev()
                        }
                        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
                            shop.select_next()
                        }
                        KeyCode::Enter => {
                            shop.status = Some(buy_upgrade(meta, shop.selected_id()));
                        }
                        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                            screen = Screen::Title;
                        }
                        _ => {}
                    }
                }
            }

            Screen::Playing => {
                let Some(game) = session.as_mut() else {
                    screen = Screen::Title;
                    continue;
                };
                screen = match play(terminal, game, meta, rng)? {
                    Some(summary) => Screen::GameOver(summary),
                    None => Screen::Title,
                };
                session = None;
            }

            Screen::GameOver(summary) => {
                terminal.draw(|frame| ui::menu::render_game_over(frame, &summary, meta))?;
                if let Some(key) = next_key_press()? {
                    match key.code {
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            session = Some(new_run(terminal, meta, rng)?);
                            screen = Screen::Playing;
                        }
                        KeyCode::Char('s') | KeyCode::Char('S') => {
                            shop.status = None;
                            screen = Screen::Shop;
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            screen = Screen::Title;
                        }
                        _ => {}
                    }
                }
            }
        }
    }
    Ok(())
}

/// Waits one poll interval for a key press.
fn next_key_press() -> io::Result<Option<KeyEvent>> {
    if event::poll(Duration::from_millis(50))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

fn buy_upgrade(meta: &mut MetaProgress, id: &str) -> String {
    match try_buy_upgrade(meta, id) {
        Ok(level) => {
            if let Err(e) = save_meta(meta) {
                tracing::warn!(error = %e, "could not save meta-progression");
                return format!("Bought level {} but saving failed: {}", level, e);
            }
            format!("Upgraded to level {}.", level)
        }
        Err(e) => e.to_string(),
    }
}

/// Starts a run on dungeon level 1 sized to the current terminal.
fn new_run(terminal: &mut Term, meta: &MetaProgress, rng: &mut StdRng) -> io::Result<GameSession> {
    let size = terminal.size()?;
    let field = ui::game_layout(size).field;
    let config = SessionConfig::default().with_viewport(field_viewport(field));
    let mut session = GameSession::new(config);
    session.init_level(1, meta, rng);
    Ok(session)
}

/// Runs the real-time loop until the player dies (returns the run summary)
/// or abandons the run (returns `None`, forfeiting its souls).
fn play(
    terminal: &mut Term,
    session: &mut GameSession,
    meta: &mut MetaProgress,
    rng: &mut StdRng,
) -> io::Result<Option<RunSummary>> {
    let mut input = TerminalInput::new();
    let mut show_help = false;
    let mut field = Rect::default();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| {
            field = ui::draw_game(frame, session, show_help);
        })?;

        // Drain every pending event before simulating.
        let mut timeout = Duration::from_millis(FRAME_POLL_MS);
        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            match event::read()? {
                Event::Key(key) => {
                    if input.handle_key(key) || key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('h') | KeyCode::Char('H') => {
                            show_help = !show_help;
                            input.release_all();
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            tracing::info!(
                                level = session.level(),
                                "run abandoned, souls forfeited"
                            );
                            return Ok(None);
                        }
                        _ => {}
                    }
                }
                Event::Mouse(mouse) => input.handle_mouse(mouse),
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        if show_help {
            continue;
        }

        input.advance(dt);
        session.apply_input(input.snapshot(field));
        let result = session.update(dt, rng);

        if let Some(souls) = result.souls_earned() {
            bank_souls(meta, souls);
            if let Err(e) = save_meta(meta) {
                tracing::warn!(error = %e, "could not save meta-progression");
            }
            let stats = session.player().and_then(|p| p.stats.as_ref());
            return Ok(Some(RunSummary {
                dungeon_level: session.level(),
                player_level: stats.map_or(1, |s| s.level),
                gold: stats.map_or(0, |s| s.gold),
                souls_earned: souls,
            }));
        }
    }
}
