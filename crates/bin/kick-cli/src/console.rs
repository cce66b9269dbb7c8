use crate::error::GenerationError;
use colored::Colorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Failure,
}

/// Decides whether text gets ANSI colors. Fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn colored(&self) -> bool {
        self.color
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }

        match tone {
            Tone::Success => text.green().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Failure => text.red().to_string(),
        }
    }
}

/// User facing output of the tool.
///
/// Diagnostics go through `tracing` to stderr; this is only for the lines a
/// user is meant to read.
pub struct Console<W> {
    palette: Palette,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(palette: Palette, out: W) -> Self {
        Self { palette, out }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let painted = self.palette.paint(Tone::Success, message);
        self.line(&painted)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        let painted = self.palette.paint(Tone::Warning, message);
        self.line(&painted)
    }

    pub fn failure(&mut self, message: &str) -> io::Result<()> {
        let painted = self.palette.paint(Tone::Failure, message);
        self.line(&painted)
    }

    /// Print an error and, when there is one, how to recover from it.
    pub fn report(&mut self, error: &GenerationError) -> io::Result<()> {
        self.failure(&format!("Error: {error}"))?;
        if let Some(suggestion) = error.recovery_suggestion() {
            self.warning(&format!("Recovery suggestion: {suggestion}"))?;
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Input;

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        let palette = Palette::new(false);

        assert_eq!(palette.paint(Tone::Failure, "boom"), "boom");
    }

    #[test]
    fn test_colored_palette_wraps_text_in_escapes() {
        colored::control::set_override(true);
        let painted = Palette::new(true).paint(Tone::Success, "done");

        assert!(painted.starts_with("\u{1b}["));
        assert!(painted.contains("done"));
    }

    #[test]
    fn test_report_prints_error_and_suggestion() {
        let mut console = Console::new(Palette::new(false), Vec::new());
        console
            .report(&GenerationError::MissingInput(Input::EnginePath))
            .unwrap();

        let output = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(
            output,
            "Error: No value was provided for the Godot path\n\
             Recovery suggestion: Pass --godot <value> or answer the prompt.\n"
        );
    }
}
