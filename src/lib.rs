pub mod calculator;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod models;
pub mod ratio;
pub mod registry;
pub mod sorting;

#[cfg(feature = "desktop")]
mod commands;
#[cfg(feature = "desktop")]
mod state;


pub use console::{Console, RosterChange, RosterEvent, SubscriptionId};
pub use error::ValidationError;

#[cfg(feature = "desktop")]
use commands::{staff_types, staffing};
#[cfg(feature = "desktop")]
use state::ConsoleState;
#[cfg(feature = "desktop")]
use tauri::Manager;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // Build the console from roster.toml (or defaults)
            let state = ConsoleState::new(app.handle())?;
            app.manage(state);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Staff types
            staff_types::get_staff_types,
            staff_types::create_staff_type,
            staff_types::update_staff_type,
            staff_types::sort_staff_types,
            // Staffing calculator
            staffing::get_staffing_rows,
            staffing::create_staffing_row,
            staffing::set_census,
            staffing::sort_staffing_rows,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
