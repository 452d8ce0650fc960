/// Utility functions used throughout the application

use std::path::PathBuf;

pub const DEBUG_LOG_FILE: &str = "albumtui-debug.log";

/// Get platform-specific directory for the debug log
pub fn get_debug_log_dir() -> PathBuf {
    std::env::temp_dir()
}

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    get_debug_log_dir().join(DEBUG_LOG_FILE)
}
