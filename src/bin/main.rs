//! Main entry point for tbl.

use std::{
    io::stdout,
    panic,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc, Mutex,
    },
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::EnableMouseCapture,
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use tabelle::{
    app::App,
    canvas::Painter,
    cleanup_terminal,
    constants::TICK_RATE_IN_MILLISECONDS,
    create_input_thread, create_or_get_config,
    data::load_documents,
    event::{handle_key_event_or_break, handle_mouse_event, TabelleEvent},
    options::{args::TabelleArgs, build_app_config_fields, config::style::Styles},
    panic_hook, read_config,
};
use tui::{backend::CrosstermBackend, Terminal};

fn main() -> Result<()> {
    let args = TabelleArgs::parse();

    #[cfg(all(feature = "fern", debug_assertions))]
    {
        tabelle::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("debug.log"),
        )?;
    }

    let config_path = read_config(args.general.config_location.as_ref())
        .context("Unable to access the given config file location.")?;
    let config = create_or_get_config(&config_path)
        .context("Unable to properly parse or create the config file.")?;

    let app_config_fields = build_app_config_fields(&args, &config)?;
    let styles = Styles::new(&args, &config)?;
    let painter = Painter::new(styles);

    // Load everything up front so a bad file fails before we touch the
    // terminal.
    let documents = load_documents(&args.files, app_config_fields.delimiter)?;

    let mut app = App::new(
        app_config_fields,
        args.files,
        &documents,
        painter.table_styling(),
    );

    // Create termination mutex.
    #[allow(clippy::mutex_atomic)]
    let thread_termination_lock = Arc::new(Mutex::new(false));

    // Set up input handling.
    let (sender, receiver) = mpsc::channel();
    let _input_thread = create_input_thread(sender.clone(), thread_termination_lock.clone());

    // Set up tui and crossterm.
    let mut stdout_val = stdout();
    execute!(stdout_val, EnterAlternateScreen, EnableMouseCapture)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout_val))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    // Set panic hook.
    panic::set_hook(Box::new(|info| panic_hook(info)));

    // Set termination hook.
    let is_terminated = Arc::new(AtomicBool::new(false));
    let ist_clone = is_terminated.clone();
    let ctrl_c_sender = sender;
    ctrlc::set_handler(move || {
        ist_clone.store(true, Ordering::SeqCst);
        let _ = ctrl_c_sender.send(TabelleEvent::Terminate);
    })?;

    while !is_terminated.load(Ordering::SeqCst) {
        if let Ok(recv) = receiver.recv_timeout(Duration::from_millis(TICK_RATE_IN_MILLISECONDS)) {
            match recv {
                TabelleEvent::KeyInput(event) => {
                    if handle_key_event_or_break(event, &mut app) {
                        break;
                    }
                }
                TabelleEvent::MouseInput(event) => {
                    handle_mouse_event(event, &mut app);
                }
                TabelleEvent::Resize => {
                    app.is_force_redraw = true;
                }
                TabelleEvent::Terminate => {
                    break;
                }
            }
        }

        painter.draw_data(&mut terminal, &mut app)?;
    }

    *thread_termination_lock.lock().unwrap() = true;

    cleanup_terminal(&mut terminal)?;

    Ok(())
}
