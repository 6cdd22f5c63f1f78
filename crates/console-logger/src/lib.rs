//! Console Logger
//!
//! `tracing` subscriber for browser builds. Each formatted event is handed to the
//! console method matching its level, so errors show up as errors in devtools.
//! Host builds (tests, tooling) write to stderr instead.

use std::io::{self, Write};

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

/// Destination for one formatted log line
pub type Sink = fn(Level, &str);

/// Builds one [`ConsoleWriter`] per event, tagged with the event's level
#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: Sink,
}

impl ConsoleMakeWriter {
    /// Writer that targets the platform console
    pub fn new() -> Self {
        Self { sink: emit }
    }

    /// Writer that hands every line to `sink`
    pub fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }

    fn writer(&self, level: Level) -> ConsoleWriter {
        ConsoleWriter {
            level,
            sink: self.sink,
            buf: Vec::new(),
        }
    }
}

impl Default for ConsoleMakeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.writer(*meta.level())
    }
}

/// Buffers a single event and emits it as one console call when dropped.
///
/// The fmt layer may issue several `write` calls per event; the console
/// has no notion of partial lines, so nothing is emitted until the end.
pub struct ConsoleWriter {
    level: Level,
    sink: Sink,
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        (self.sink)(self.level, line.trim_end());
    }
}

/// Subscriber without timestamps (there is no system clock in `wasm32-unknown-unknown`)
/// and without ANSI colours.
pub fn subscriber(max_level: Level, writer: ConsoleMakeWriter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(writer)
        .finish()
}

/// Install the console subscriber as the global default.
///
/// Returns `false` if a global subscriber was already set.
pub fn init(max_level: Level) -> bool {
    tracing::subscriber::set_global_default(subscriber(max_level, ConsoleMakeWriter::new())).is_ok()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        Level::DEBUG => console::debug_1(&value),
        _ => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}
