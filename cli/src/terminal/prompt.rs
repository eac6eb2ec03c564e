use std::io::{BufRead, Write};

use anyhow::{Context, bail};

/// Line-oriented console session over any reader/writer pair.
pub struct Prompt<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Prints `label` and reads one trimmed line. `None` once input is exhausted.
    pub fn ask(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Prompt::ask`], but running out of input is an error.
    pub fn field(&mut self, label: &str) -> anyhow::Result<String> {
        match self.ask(label)? {
            Some(value) => Ok(value),
            None => bail!("unexpected end of input"),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.out)
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
