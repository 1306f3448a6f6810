use std::io::{self, Write};

pub const BORDER_WIDTH: usize = 60;

/// Print a bordered banner. Last-resort path when the popup fails.
pub fn show<W: Write>(out: &mut W, title: &str, message: &str) -> io::Result<()> {
    let border = "=".repeat(BORDER_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", border)?;
    writeln!(out, "🔔 {}", title)?;
    writeln!(out, "{}", border)?;
    writeln!(out, "{}", message)?;
    writeln!(out, "{}", border)?;
    writeln!(out)?;
    out.flush()
}
