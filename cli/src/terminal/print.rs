//! Console rendering. Every helper writes to the given sink so menus can be
//! driven against an in-memory buffer.

use std::fmt::Display;
use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

pub fn banner<W: Write>(out: &mut W, no_banner: bool, q_level: u8) -> io::Result<()> {
    if no_banner || q_level > 0 {
        return Ok(());
    }

    let text_content: String = format!("⟦ ACADEMIA v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).color(colors::SEPARATOR);
    writeln!(out, "{sep}{text}{sep}")
}

pub fn header<W: Write>(out: &mut W, msg: &str, q_level: u8) -> io::Result<()> {
    if q_level > 0 {
        return Ok(());
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    writeln!(
        out,
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    )
}

pub fn fat_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR))
}

/// `key.....: value`, padding keys to `key_width` so a block lines up.
pub fn aligned_line<W: Write, V: Display>(out: &mut W, key: &str, key_width: usize, value: V) -> io::Result<()> {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    writeln!(
        out,
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::SECONDARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    )
}

pub fn tree_head<W: Write>(out: &mut W, idx: usize, name: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    )
}

/// One level of `├─`/`└─` branches under a [`tree_head`].
pub fn as_tree_one_level<W: Write>(out: &mut W, pairs: &[(String, String)]) -> io::Result<()> {
    let key_width = pairs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (i, (key, value)) in pairs.iter().enumerate() {
        let branch = if i + 1 == pairs.len() { "└─" } else { "├─" };
        writeln!(
            out,
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width + 1 - key.len()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        )?;
    }
    Ok(())
}

pub fn centerln<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    writeln!(out, "{space}{msg}")
}

pub fn success<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "[SUCCESS]".color(colors::SUCCESS).bold(), msg)
}

pub fn info<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "[INFO]".color(colors::ACCENT), msg)
}

pub fn error<W: Write>(out: &mut W, err: &dyn Display) -> io::Result<()> {
    writeln!(out, "{} {}", "[ERROR]".color(colors::ERROR).bold(), err)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
