//! Welcome banner for the terminal client.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stdout};

const TITLE: &str = "Sentiment Analysis";

/// Title blue (#1a365d).
const TITLE_BLUE: (u8, u8, u8) = (0x1a, 0x36, 0x5d);
/// Accent blue (#4299e1).
const ACCENT_BLUE: (u8, u8, u8) = (0x42, 0x99, 0xe1);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn blend(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> Color {
    let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    Color::Rgb {
        r: mix(a.0, b.0),
        g: mix(a.1, b.1),
        b: mix(a.2, b.2),
    }
}

/// Prints the title with a left-to-right gradient, then the version and server URL.
pub fn print_welcome(server_url: &str) {
    let mut out = stdout();
    let chars: Vec<char> = TITLE.chars().collect();
    let last = chars.len().saturating_sub(1).max(1) as f64;

    let _ = out.execute(Print("\r\n  "));
    for (i, c) in chars.iter().enumerate() {
        let _ = out.execute(SetForegroundColor(blend(TITLE_BLUE, ACCENT_BLUE, i as f64 / last)));
        let _ = out.execute(Print(c));
    }
    let _ = out.execute(ResetColor);

    let _ = out.execute(Print(format!(
        "  v{}\r\n  server: {}\r\n\r\n",
        env!("CARGO_PKG_VERSION"),
        server_url
    )));
    let _ = out.flush();
}
