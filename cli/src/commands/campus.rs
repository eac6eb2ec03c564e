use std::io::Write;
use std::path::Path;

use academia_common::config::Config;
use academia_core::adapters::outbound::storage::JsonCampusStore;
use academia_core::application::services::campus::{CampusService, CampusSummary};

use crate::terminal::print;

pub fn campus<W: Write>(file: &Path, cfg: &Config, out: &mut W) -> anyhow::Result<()> {
    let mut service = CampusService::new(Box::new(JsonCampusStore));
    service.load(&cfg.resolve(file))?;

    print::header(out, "campus summary", cfg.quiet)?;
    let summaries = service.summaries();
    if summaries.is_empty() {
        print::info(out, "No universities found.")?;
    }
    for (idx, summary) in summaries.iter().enumerate() {
        print_summary(out, idx, summary)?;
        if idx + 1 != summaries.len() {
            writeln!(out)?;
        }
    }
    Ok(())
}

fn print_summary<W: Write>(out: &mut W, idx: usize, summary: &CampusSummary) -> anyhow::Result<()> {
    print::tree_head(out, idx, &summary.university)?;
    let courses: Vec<(String, String)> = summary
        .courses
        .iter()
        .map(|c| {
            (
                c.name.clone(),
                format!("{} students, class average {:.2}", c.students, c.class_average),
            )
        })
        .collect();
    print::as_tree_one_level(out, &courses)?;

    let width = "Unique students".len();
    print::aligned_line(out, "Unique students", width, summary.unique_students)?;
    let top = match &summary.top_student {
        Some((name, avg)) => format!("{name} ({avg:.2})"),
        None => String::from("none"),
    };
    print::aligned_line(out, "Top student", width, top)?;
    let top_three = summary
        .top_three
        .iter()
        .map(|(name, avg)| format!("{name} ({avg:.2})"))
        .collect::<Vec<_>>()
        .join(", ");
    print::aligned_line(out, "Top three", width, top_three)?;
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
