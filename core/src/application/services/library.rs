use std::fmt;
use std::path::Path;

use academia_common::error::DomainError;
use tracing::info;

use crate::domain::models::library::{Book, Library};
use crate::ports::outbound::library_store::LibraryStore;
use crate::ports::outbound::notifier::Notifier;

pub struct LibraryService {
    library: Library,
    store: Box<dyn LibraryStore>,
    notifier: Box<dyn Notifier>,
}

impl LibraryService {
    pub fn new(library: Library, store: Box<dyn LibraryStore>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            library,
            store,
            notifier,
        }
    }

    pub fn books(&self) -> &[Book] {
        self.library.books()
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn add_book(&mut self, book: Book) -> anyhow::Result<String> {
        let message = format!("Book '{}' added to library", book.title());
        self.library.add(book);
        Ok(self.notifier.notify(&message))
    }

    pub fn remove_book(&mut self, book: &Book) -> anyhow::Result<String> {
        let removed = self.library.remove(book)?;
        Ok(self
            .notifier
            .notify(&format!("Book '{}' removed from library", removed.title())))
    }

    /// Removes the first book whose title matches exactly.
    pub fn remove_by_title(&mut self, title: &str) -> anyhow::Result<String> {
        let book = self
            .library
            .find_by_title(title)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Book", title))?;
        self.remove_book(&book)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<String> {
        self.store.save(&self.library, path)?;
        info!(path = %path.display(), books = self.library.len(), "library saved");
        Ok(self
            .notifier
            .notify(&format!("Library saved to {}", path.display())))
    }

    /// Replaces the in-memory library. On failure the current one is kept.
    pub fn load(&mut self, path: &Path) -> anyhow::Result<String> {
        self.library = self.store.load(path)?;
        info!(path = %path.display(), books = self.library.len(), "library loaded");
        Ok(self
            .notifier
            .notify(&format!("Library loaded from {}", path.display())))
    }
}

/// Plain-text inventory of a shelf.
pub struct LibraryReport<'a>(pub &'a [Book]);

impl fmt::Display for LibraryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Library Report:")?;
        writeln!(f, "Total Books: {}", self.0.len())?;
        for book in self.0 {
            writeln!(f, "- {} by {} ({})", book.title(), book.author(), book.year())?;
        }
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
