//! ASCII banner (WORKOUT) with a vertical color gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Track orange (#ff6b1a).
const TRACK_ORANGE: (u8, u8, u8) = (0xff, 0x6b, 0x1a);
/// Pool blue (#1ab2ff).
const POOL_BLUE: (u8, u8, u8) = (0x1a, 0xb2, 0xff);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

fn banner_art() -> Option<String> {
    let font = FIGfont::standard().ok()?;
    let figure = font.convert("WORKOUT")?;
    Some(figure.to_string())
}

/// Prints "WORKOUT" in figlet's standard font, orange to blue, then the version.
/// Skipped silently if the font cannot be loaded.
pub fn print_welcome() {
    let Some(art) = banner_art() else {
        return;
    };
    let mut out = stdout();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(TRACK_ORANGE, POOL_BLUE, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(Print(format!("workout-stats v{}\r\n", version)));
    let _ = out.flush();
}
