pub mod staff_types;
pub mod staffing;
