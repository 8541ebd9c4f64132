//! Process exit codes. Notification errors map through `NotifyError::exit_code`.

pub const SUCCESS: i32 = 0;
pub const INTERNAL_ERROR: i32 = 2; // Unexpected failure outside the notification pipeline
