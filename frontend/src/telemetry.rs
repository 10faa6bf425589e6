// Tracing output for the browser: each formatted event becomes one console
// call at a matching level.

use gloo_console as console;
use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

pub struct Console;

pub struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_owned();
        if line.is_empty() {
            return;
        }
        if self.level == Level::ERROR {
            console::error!(line);
        } else if self.level == Level::WARN {
            console::warn!(line);
        } else if self.level >= Level::DEBUG {
            console::debug!(line);
        } else {
            console::log!(line);
        }
    }
}

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Installs the console subscriber as the global default.
pub fn init(max_level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(Console)
        .with_max_level(max_level)
        .with_ansi(false)
        // the wasm target has no clock to read
        .without_time()
        .try_init();

    if installed.is_err() {
        console::warn!("tracing subscriber already installed");
    }
}
