use std::io::{self, Write};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static mut JSON_MODE: bool = false;

pub fn init(json: bool) {
    unsafe { JSON_MODE = json; }
}

pub fn is_json() -> bool {
    unsafe { JSON_MODE }
}

pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

/// Human-mode confirmation line (green). Silent in JSON mode.
pub fn success(msg: &str) {
    if is_json() {
        return;
    }
    let mut out = StandardStream::stdout(ColorChoice::Auto);
    let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    let _ = writeln!(out, "{msg}");
    let _ = out.reset();
}

pub fn eprintln_line(msg: &str) {
    let _ = writeln!(io::stderr(), "{msg}");
}
