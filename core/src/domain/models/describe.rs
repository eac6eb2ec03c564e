//! Behaviour composition in priority order.
//!
//! A [`DescribeChain`] asks its own override first, then each base in the order
//! given; the first one that answers wins. Swapping the bases swaps the winner.

pub trait Describe {
    /// Returns `None` when this strategy has nothing to say.
    fn describe(&self, id: usize) -> Option<String>;
}

pub struct Printable;

impl Describe for Printable {
    fn describe(&self, id: usize) -> Option<String> {
        Some(format!("Printable object with id {id}"))
    }
}

pub struct Serializable;

impl Describe for Serializable {
    fn describe(&self, id: usize) -> Option<String> {
        Some(format!("Serializable object with id {id}"))
    }
}

/// The report's own description, placed ahead of every base.
pub struct ReportDescription;

impl Describe for ReportDescription {
    fn describe(&self, id: usize) -> Option<String> {
        Some(format!("Report object with id {id}"))
    }
}

pub struct DescribeChain {
    id: usize,
    own: Option<Box<dyn Describe>>,
    bases: Vec<Box<dyn Describe>>,
}

impl DescribeChain {
    pub fn new(id: usize, bases: Vec<Box<dyn Describe>>) -> Self {
        Self {
            id,
            own: None,
            bases,
        }
    }

    pub fn with_override(mut self, own: Box<dyn Describe>) -> Self {
        self.own = Some(own);
        self
    }

    /// Falls back to a bare description when no strategy answers.
    pub fn describe(&self) -> String {
        self.own
            .iter()
            .chain(self.bases.iter())
            .find_map(|d| d.describe(self.id))
            .unwrap_or_else(|| format!("object with id {}", self.id))
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
