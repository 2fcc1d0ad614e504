pub mod banner;
pub mod render;
pub mod tui;

/// Prints the welcome banner. Call once at client startup (after tracing init).
pub fn init_ui(server_url: &str) {
    banner::print_welcome(server_url);
}
