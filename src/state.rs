use std::path::PathBuf;
use std::sync::Mutex;
use tauri::{AppHandle, Emitter, Manager};

use crate::config::{load_config_or_default, ConfigError};
use crate::console::Console;

pub const CHANGE_EVENT: &str = "roster://changed";

pub struct ConsoleState {
    pub console: Mutex<Console>,
}

impl ConsoleState {
    pub fn new(app_handle: &AppHandle) -> Result<Self, ConfigError> {
        let config_dir: PathBuf = app_handle
            .path()
            .app_config_dir()
            .unwrap_or_else(|_| PathBuf::from("."));
        let config = load_config_or_default(config_dir.join("roster.toml"))?;

        let mut console = Console::new(&config)?;

        // Push every change to the webview so tables re-render.
        let handle = app_handle.clone();
        console.subscribe(move |event| {
            if let Err(e) = handle.emit(CHANGE_EVENT, event) {
                tracing::warn!(%e, "failed to emit roster change");
            }
        });

        Ok(ConsoleState {
            console: Mutex::new(console),
        })
    }
}

pub trait ConsoleExt {
    fn console(&self) -> &ConsoleState;
}

impl ConsoleExt for AppHandle {
    fn console(&self) -> &ConsoleState {
        self.state::<ConsoleState>().inner()
    }
}
