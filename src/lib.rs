//! A terminal viewer for delimited text files, with click-to-sort columns.
//!
//! **Note:** The following documentation is primarily intended for people to
//! refer to for development purposes rather than the main usage documentation.

pub mod app;
pub mod canvas;
pub mod constants;
pub mod data;
pub mod event;
pub mod options;
pub mod utils {
    pub mod collation;
    pub mod general;
    pub mod logging;
    pub mod strings;
}
pub mod widgets;

use std::{
    fs,
    io::{stdout, Write},
    panic::PanicHookInfo,
    path::PathBuf,
    sync::{
        mpsc::Sender,
        Arc, Mutex,
    },
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{poll, read, DisableMouseCapture, Event},
    execute,
    style::Print,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

use crate::{
    constants::{DEFAULT_CONFIG_CONTENT, DEFAULT_CONFIG_FILE_PATH},
    event::TabelleEvent,
    options::Config,
};

/// Finds the config file location to use.
///
/// An explicit location always wins. Otherwise, a file already sitting in
/// `~/.config` is respected before falling back to the platform config
/// directory, so old setups keep working.
pub fn read_config(config_location: Option<&PathBuf>) -> Result<Option<PathBuf>> {
    let config_path = if let Some(conf_loc) = config_location {
        Some(conf_loc.clone())
    } else if cfg!(target_os = "windows") {
        if let Some(home_path) = dirs::config_dir() {
            let mut path = home_path;
            path.push(DEFAULT_CONFIG_FILE_PATH);
            Some(path)
        } else {
            None
        }
    } else if let Some(home_path) = dirs::home_dir() {
        let mut path = home_path;
        path.push(".config/");
        path.push(DEFAULT_CONFIG_FILE_PATH);
        if path.exists() {
            // If it already exists, use the old one.
            Some(path)
        } else {
            // If it does not, use the new one!
            if let Some(config_path) = dirs::config_dir() {
                let mut path = config_path;
                path.push(DEFAULT_CONFIG_FILE_PATH);
                Some(path)
            } else {
                None
            }
        }
    } else {
        None
    };

    Ok(config_path)
}

/// Reads the config at the given path, or creates a commented-out default
/// there if nothing exists yet.
pub fn create_or_get_config(config_path: &Option<PathBuf>) -> Result<Config> {
    if let Some(path) = config_path {
        if let Ok(config_string) = fs::read_to_string(path) {
            // We found a config file!
            Ok(toml_edit::de::from_str(config_string.as_str())?)
        } else {
            // Config file DNE...
            if let Some(parent_path) = path.parent() {
                fs::create_dir_all(parent_path)?;
            }
            fs::File::create(path)?.write_all(DEFAULT_CONFIG_CONTENT.as_bytes())?;
            Ok(Config::default())
        }
    } else {
        // Don't write, the config path was somehow None...
        Ok(Config::default())
    }
}

pub fn cleanup_terminal(
    terminal: &mut tui::Terminal<tui::backend::CrosstermBackend<std::io::Stdout>>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Based on https://github.com/Rigellute/spotify-tui/blob/master/src/main.rs
pub fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let mut stdout = stdout();

    let msg = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };

    let stacktrace: String = format!("{:?}", backtrace::Backtrace::new());

    let _ = disable_raw_mode();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);

    // Print stack trace. Must be done after!
    let _ = execute!(
        stdout,
        Print(format!(
            "thread '<unnamed>' panicked at '{}', {}\n\r{}",
            msg,
            panic_info.location().map_or_else(
                || "unknown location".to_string(),
                |loc| loc.to_string()
            ),
            stacktrace
        )),
    );
}

/// Spawns the thread that polls crossterm for input and forwards it over the
/// channel. Key and mouse events are throttled a little so that holding a
/// key down does not flood the event loop.
pub fn create_input_thread(
    sender: Sender<TabelleEvent>, termination_ctrl_lock: Arc<Mutex<bool>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut mouse_timer = Instant::now();
        let mut keyboard_timer = Instant::now();

        loop {
            // A bit of a hack to work around the terminated check. We don't
            // block here.
            if let Ok(is_terminated) = termination_ctrl_lock.try_lock() {
                if *is_terminated {
                    drop(is_terminated);
                    break;
                }
            }
            if let Ok(poll) = poll(Duration::from_millis(20)) {
                if poll {
                    if let Ok(event) = read() {
                        match event {
                            Event::Key(key) => {
                                if Instant::now().duration_since(keyboard_timer).as_millis() >= 20 {
                                    if sender.send(TabelleEvent::KeyInput(key)).is_err() {
                                        break;
                                    }
                                    keyboard_timer = Instant::now();
                                }
                            }
                            Event::Mouse(mouse) => {
                                if Instant::now().duration_since(mouse_timer).as_millis() >= 20 {
                                    if sender.send(TabelleEvent::MouseInput(mouse)).is_err() {
                                        break;
                                    }
                                    mouse_timer = Instant::now();
                                }
                            }
                            Event::Resize(_, _) => {
                                if sender.send(TabelleEvent::Resize).is_err() {
                                    break;
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_config_is_created_from_the_template() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tabelle").join("tabelle.toml");

        let config = create_or_get_config(&Some(path.clone())).unwrap();
        assert_eq!(config, Config::default());

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_CONFIG_CONTENT);

        // The second call reads back the file the first one wrote, so the
        // commented-out template has to be valid TOML.
        let reread = create_or_get_config(&Some(path)).unwrap();
        assert_eq!(reread, Config::default());
    }
}
