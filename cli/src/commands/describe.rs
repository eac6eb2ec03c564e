use std::io::Write;

use academia_common::config::Config;
use academia_core::domain::models::describe::{
    Describe, DescribeChain, Printable, ReportDescription, Serializable,
};

use crate::terminal::print;

/// How the report object's chain is assembled.
pub struct ChainOptions {
    pub id: usize,
    /// Put `Serializable` ahead of `Printable`.
    pub reverse: bool,
    /// Leave out the report's own description.
    pub bases_only: bool,
}

pub fn chain(opts: &ChainOptions) -> DescribeChain {
    let mut bases: Vec<Box<dyn Describe>> = vec![Box::new(Printable), Box::new(Serializable)];
    if opts.reverse {
        bases.reverse();
    }
    let chain = DescribeChain::new(opts.id, bases);
    if opts.bases_only {
        chain
    } else {
        chain.with_override(Box::new(ReportDescription))
    }
}

pub fn describe<W: Write>(opts: &ChainOptions, cfg: &Config, out: &mut W) -> anyhow::Result<()> {
    print::header(out, "describe", cfg.quiet)?;
    print::info(out, &chain(opts).describe())?;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn run(id: usize, reverse: bool, bases_only: bool) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let opts = ChainOptions { id, reverse, bases_only };
        describe(&opts, &Config::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_own_description_by_default() {
        assert!(run(1, false, false).contains("[INFO] Report object with id 1"));
        assert!(run(1, true, false).contains("[INFO] Report object with id 1"));
    }

    #[test]
    fn test_base_order_follows_flag() {
        assert!(run(2, false, true).contains("[INFO] Printable object with id 2"));
        assert!(run(2, true, true).contains("[INFO] Serializable object with id 2"));
    }
}
