use std::io::{BufRead, Write};

use academia_common::config::Config;
use academia_common::validate;
use academia_core::adapters::outbound::{notify, storage};
use academia_core::application::services::library::{LibraryReport, LibraryService};
use academia_core::domain::models::library::{Book, Library};
use tracing::warn;

use crate::terminal::print;
use crate::terminal::prompt::Prompt;

const MENU: &[&str] = &[
    "1. Add Book",
    "2. Remove Book",
    "3. Show Report",
    "4. Save Library",
    "5. Load Library",
    "6. Exit",
];

pub fn library<R: BufRead, W: Write>(cfg: &Config, prompt: &mut Prompt<R, W>) -> anyhow::Result<()> {
    let mut service = LibraryService::new(
        Library::new(),
        storage::library_store(cfg.format),
        notify::notifier(cfg.notifier),
    );

    loop {
        writeln!(prompt.out())?;
        print::header(prompt.out(), "library management system", cfg.quiet)?;
        for entry in MENU {
            writeln!(prompt.out(), "{entry}")?;
        }

        let Some(choice) = prompt.ask("Choose option: ")? else {
            break;
        };
        let outcome = match choice.as_str() {
            "1" => add_book(&mut service, prompt),
            "2" => remove_book(&mut service, prompt),
            "3" => Ok(LibraryReport(service.books()).to_string()),
            "4" => file_name(cfg, prompt).and_then(|path| service.save(&path)),
            "5" => file_name(cfg, prompt).and_then(|path| service.load(&path)),
            "6" => {
                writeln!(prompt.out(), "Goodbye.")?;
                break;
            }
            _ => Err(anyhow::anyhow!("Invalid option. Please choose 1-6.")),
        };

        match outcome {
            Ok(message) => writeln!(prompt.out(), "{message}")?,
            Err(err) => {
                warn!("library action failed: {err}");
                print::error(prompt.out(), &err)?;
            }
        }
    }
    Ok(())
}

fn add_book<R: BufRead, W: Write>(
    service: &mut LibraryService,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<String> {
    let title = prompt.field("Title: ")?;
    let author = prompt.field("Author: ")?;
    let year = validate::parse_int("Year", &prompt.field("Year: ")?)?;
    service.add_book(Book::new(title, author, year)?)
}

fn remove_book<R: BufRead, W: Write>(
    service: &mut LibraryService,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<String> {
    let title = prompt.field("Title of book to remove: ")?;
    service.remove_by_title(&title)
}

/// Reads a file name, defaulting to `library.<ext>` in the data directory.
fn file_name<R: BufRead, W: Write>(
    cfg: &Config,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<std::path::PathBuf> {
    let name = prompt.field("Filename: ")?;
    if name.is_empty() {
        return Ok(cfg.resolve(&format!("library.{}", cfg.format.extension())));
    }
    Ok(cfg.resolve(&name))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use academia_common::config::StoreFormat;

    fn run(cfg: &Config, script: &str) -> String {
        colored::control::set_override(false);
        let mut prompt = Prompt::new(script.as_bytes(), Vec::new());
        library(cfg, &mut prompt).unwrap();
        String::from_utf8(prompt.into_inner().1).unwrap()
    }

    #[test]
    fn test_add_then_report() {
        let out = run(&Config::default(), "1\nDune\nFrank Herbert\n1965\n3\n6\n");
        assert!(out.contains("Sending email notification: Book 'Dune' added to library"));
        assert!(out.contains("Total Books: 1\n- Dune by Frank Herbert (1965)"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_errors_do_not_end_the_loop() {
        let out = run(&Config::default(), "1\nDune\nFrank Herbert\nsoon\n2\nEmma\n9\n3\n");
        assert!(out.contains("[ERROR] Year must be an integer"));
        assert!(out.contains("[ERROR] Book not found: Emma"));
        assert!(out.contains("[ERROR] Invalid option. Please choose 1-6."));
        assert!(out.contains("Total Books: 0"));
    }

    #[test]
    fn test_save_and_load_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config {
            data_dir: dir.path().to_path_buf(),
            format: StoreFormat::Json,
            ..Config::default()
        };

        run(&cfg, "1\nDune\nFrank Herbert\n1965\n4\n\n6\n");
        assert!(dir.path().join("library.json").exists());

        let out = run(&cfg, "5\nlibrary.json\n3\n6\n");
        assert!(out.contains("Library loaded from"));
        assert!(out.contains("Total Books: 1"));
    }
}
