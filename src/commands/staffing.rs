use crate::models::{CreateStaffingRow, SetCensus, StaffingRow};
use crate::sorting::{SortDirection, StaffingColumn};
use crate::state::ConsoleExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_staffing_rows(app: AppHandle) -> Result<Vec<StaffingRow>, String> {
    let state = app.console();
    let console = state.console.lock().map_err(|e| e.to_string())?;

    Ok(console.staffing_rows())
}

#[tauri::command]
pub fn create_staffing_row(app: AppHandle, row: CreateStaffingRow) -> Result<StaffingRow, String> {
    let state = app.console();
    let mut console = state.console.lock().map_err(|e| e.to_string())?;

    console
        .add_staffing_row(&row.title, &row.ratio)
        .map_err(|e| e.to_string())
}

// An empty value clears the census for the row.
#[tauri::command]
pub fn set_census(app: AppHandle, census: SetCensus) -> Result<StaffingRow, String> {
    let state = app.console();
    let mut console = state.console.lock().map_err(|e| e.to_string())?;

    console
        .set_census(census.row_id, &census.value)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn sort_staffing_rows(app: AppHandle, column: StaffingColumn) -> Result<Option<SortDirection>, String> {
    let state = app.console();
    let mut console = state.console.lock().map_err(|e| e.to_string())?;

    Ok(console.sort_staffing_rows(column))
}
