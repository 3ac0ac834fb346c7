use crate::models::{CreateStaffType, StaffType, UpdateStaffType};
use crate::sorting::{SortDirection, StaffTypeColumn};
use crate::state::ConsoleExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_staff_types(app: AppHandle) -> Result<Vec<StaffType>, String> {
    let state = app.console();
    let console = state.console.lock().map_err(|e| e.to_string())?;

    Ok(console.staff_types())
}

#[tauri::command]
pub fn create_staff_type(app: AppHandle, staff_type: CreateStaffType) -> Result<StaffType, String> {
    let state = app.console();
    let mut console = state.console.lock().map_err(|e| e.to_string())?;

    console
        .add_staff_type(&staff_type.title, &staff_type.code)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn update_staff_type(app: AppHandle, staff_type: UpdateStaffType) -> Result<StaffType, String> {
    let state = app.console();
    let mut console = state.console.lock().map_err(|e| e.to_string())?;

    console
        .update_staff_type(staff_type.id, &staff_type.title, &staff_type.code)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn sort_staff_types(app: AppHandle, column: StaffTypeColumn) -> Result<Option<SortDirection>, String> {
    let state = app.console();
    let mut console = state.console.lock().map_err(|e| e.to_string())?;

    Ok(console.sort_staff_types(column))
}
