use std::io::{self, IsTerminal as _, Read as _, Stdout, Write as _};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEvent},
    terminal,
};

/// Host side of the machine's IO: a non-blocking key probe for the
/// memory-mapped keyboard, a blocking read for the input traps, and a byte
/// sink for the output traps.
pub trait Console {
    /// Non-blocking probe. A returned byte is consumed.
    fn poll(&mut self) -> io::Result<Option<u8>>;
    /// Blocking read of a single byte. Returns 0 once input is exhausted.
    fn read(&mut self) -> io::Result<u8>;
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// Open the console backend that fits the host: a raw terminal when stdin is
/// interactive, plain pipes otherwise.
pub fn open() -> Box<dyn Console> {
    if io::stdin().is_terminal() {
        Box::new(Terminal::new())
    } else {
        Box::new(Piped)
    }
}

pub fn enable_raw_mode() {
    debug_assert!(
        !terminal::is_raw_mode_enabled().is_ok_and(|is| is),
        "terminal should not be in raw mode at this point",
    );
    terminal::enable_raw_mode().expect("failed to enable raw terminal");
}
pub fn disable_raw_mode() {
    debug_assert!(
        terminal::is_raw_mode_enabled().is_ok_and(|is| is),
        "terminal should be in raw mode at this point",
    );
    terminal::disable_raw_mode().expect("failed to disable raw terminal");
}

/// Interactive console. The terminal stays in raw mode for the lifetime of
/// this value, so keypresses reach the machine without line buffering.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        enable_raw_mode();
        Self { out: io::stdout() }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        disable_raw_mode();
    }
}

impl Console for Terminal {
    fn poll(&mut self) -> io::Result<Option<u8>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(byte) = key_byte(key) {
                    return Ok(Some(byte));
                }
            }
        }
        Ok(None)
    }

    fn read(&mut self) -> io::Result<u8> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(byte) = key_byte(key) {
                    return Ok(byte);
                }
            }
        }
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        // Raw mode leaves the newline discipline to us
        for &byte in bytes {
            if byte == b'\n' {
                self.out.write_all(b"\r\n")?;
            } else {
                self.out.write_all(&[byte])?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Map a terminal event to the byte the machine sees.
///
/// Caller must ensure terminal is in raw mode.
fn key_byte(event: KeyEvent) -> Option<u8> {
    use event::{KeyCode, KeyEventKind, KeyModifiers as Mod};

    if matches!(event.kind, KeyEventKind::Release) {
        return None;
    }

    let byte = match (event.modifiers, event.code) {
        // Ctrl+C
        (Mod::CONTROL, KeyCode::Char('c')) => {
            disable_raw_mode();
            println!();
            std::process::exit(0);
        }

        (_, KeyCode::Enter) => b'\n',
        (_, KeyCode::Backspace) => 0x08,
        (_, KeyCode::Tab) => b'\t',
        (_, KeyCode::Esc) => 0x1b,

        // Normal character
        (Mod::NONE | Mod::SHIFT, KeyCode::Char(ch)) if ch.is_ascii() => ch as u8,

        _ => return None,
    };

    Some(byte)
}

/// Console for non-interactive hosts (scripted runs, test harnesses).
///
/// A pipe cannot be probed without blocking, so `poll` reads eagerly: input
/// is reported available until the stream is exhausted.
pub struct Piped;

impl Piped {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match io::stdin().lock().read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }
}

impl Console for Piped {
    fn poll(&mut self) -> io::Result<Option<u8>> {
        self.read_byte()
    }

    fn read(&mut self) -> io::Result<u8> {
        Ok(self.read_byte()?.unwrap_or(0))
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}
