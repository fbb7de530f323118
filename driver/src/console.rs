use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

/// The color a span of console output is written in
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    /// Progress and success, bright green
    Status,
    /// Failures and warnings, bright red
    Failure,
}
impl Tone {
    fn spec(self) -> ColorSpec {
        let color = match self {
            Self::Status => Color::Green,
            Self::Failure => Color::Red,
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_intense(true);
        spec
    }
}

/// Human-facing output of the dispatcher
///
/// All messages, including failures, go to the same sink, which is stdout
/// outside of tests.
pub struct Console<'a> {
    out: &'a mut dyn WriteColor,
}
impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn WriteColor) -> Self {
        Self { out }
    }

    /// Writes `text` in the given tone, resetting the color afterwards
    pub fn paint(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        self.out.set_color(&tone.spec())?;
        self.out.write_all(text.as_bytes())?;
        self.out.reset()
    }

    pub fn plain(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    /// Writes a message made of one or more colored spans, padded by blank lines
    pub fn message(&mut self, spans: &[(Tone, &str)]) -> io::Result<()> {
        self.plain("\n")?;
        for (tone, text) in spans {
            self.paint(*tone, text)?;
        }
        self.plain("\n\n")
    }

    pub fn status(&mut self, text: &str) -> io::Result<()> {
        self.message(&[(Tone::Status, text)])
    }

    pub fn failure(&mut self, text: &str) -> io::Result<()> {
        self.message(&[(Tone::Failure, text)])
    }

    /// Reports a finished step as either its success or failure message
    pub fn outcome(&mut self, success: bool, ok: &str, failed: &str) -> io::Result<()> {
        if success {
            self.status(ok)
        } else {
            self.failure(failed)
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod test {
    use termcolor::{Buffer, WriteColor};

    use super::*;

    #[test]
    fn messages_are_padded_with_blank_lines() {
        let mut buffer = Buffer::no_color();
        let mut console = Console::new(&mut buffer);
        console.status("Build successful!").unwrap();
        assert_eq!(buffer.as_slice(), b"\nBuild successful!\n\n");
    }

    #[test]
    fn colored_spans_are_reset() {
        let mut buffer = Buffer::ansi();
        let mut console = Console::new(&mut buffer);
        console
            .message(&[(Tone::Status, "ok "), (Tone::Failure, "but careful")])
            .unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(output.contains("ok "));
        assert!(output.contains("but careful"));
        assert!(output.matches("\x1b[0m").count() >= 2);
    }

    #[test]
    fn uncolored_sinks_receive_plain_text() {
        let mut buffer = Buffer::no_color();
        assert!(!buffer.supports_color());
        let mut console = Console::new(&mut buffer);
        console.outcome(false, "fine", "broken").unwrap();
        assert_eq!(buffer.as_slice(), b"\nbroken\n\n");
    }
}
