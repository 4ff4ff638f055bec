//! Result rendering
//!
//! The typewriter effect is cosmetic: both displays write exactly the same
//! characters, only the timing differs.

use crate::config::DisplayConfig;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Lower bound of the per-character delay.
const MIN_DELAY_MS: u64 = 10;

/// How fast a piece of text is typed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Banners such as `GENERATING`.
    Slow,
    /// Model output.
    Normal,
    Fast,
}

/// Anything that can show a block of text to the user.
pub trait TextDisplay {
    /// Writes `text` followed by a blank line.
    fn show(&mut self, text: &str, pace: Pace) -> io::Result<()>;
}

/// Writes text in one go.
pub struct PlainDisplay<W> {
    out: W,
}

impl<W: Write> PlainDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TextDisplay for PlainDisplay<W> {
    fn show(&mut self, text: &str, _pace: Pace) -> io::Result<()> {
        write!(self.out, "{}\n\n", text)?;
        self.out.flush()
    }
}

/// Types text out one character at a time with a random delay.
pub struct TypewriterDisplay<W> {
    out: W,
    delays: DisplayConfig,
}

impl<W: Write> TypewriterDisplay<W> {
    pub fn new(out: W, delays: DisplayConfig) -> Self {
        Self { out, delays }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn max_delay_ms(&self, pace: Pace) -> u64 {
        match pace {
            Pace::Slow => self.delays.slow_delay_ms,
            Pace::Normal => self.delays.normal_delay_ms,
            Pace::Fast => self.delays.fast_delay_ms,
        }
    }
}

impl<W: Write> TextDisplay for TypewriterDisplay<W> {
    fn show(&mut self, text: &str, pace: Pace) -> io::Result<()> {
        let max = self.max_delay_ms(pace);
        let min = MIN_DELAY_MS.min(max);
        let mut rng = rand::thread_rng();
        let mut buf = [0u8; 4];

        for c in text.chars() {
            self.out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
            self.out.flush()?;
            if max > 0 {
                thread::sleep(Duration::from_millis(rng.gen_range(min..=max)));
            }
        }
        self.out.write_all(b"\n\n")?;
        self.out.flush()
    }
}

/// Picks the display for the terminal according to the config.
pub fn terminal_display(config: &DisplayConfig) -> Box<dyn TextDisplay> {
    if config.typewriter {
        Box::new(TypewriterDisplay::new(io::stdout(), config.clone()))
    } else {
        Box::new(PlainDisplay::new(io::stdout()))
    }
}
