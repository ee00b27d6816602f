use std::env;

pub const DEBUG_ENV: &str = "POWERLINE_STATUS_DEBUG";

pub fn debug_enabled() -> bool {
    env::var(DEBUG_ENV).is_ok()
}

pub fn debug(message: &str) {
    if debug_enabled() {
        eprintln!("[DEBUG] {}", message);
    }
}

pub fn debug_with_context(context: &str, message: &str) {
    if debug_enabled() {
        eprintln!("[DEBUG] {}: {}", context, message);
    }
}

/// Non-fatal problems are always reported
pub fn warn(context: &str, message: &str) {
    eprintln!("[WARN] {}: {}", context, message);
}
