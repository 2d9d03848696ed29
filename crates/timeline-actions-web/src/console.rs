//! `tracing` output routed to a line-oriented console.
//!
//! The fmt layer renders each event into a [`ConsoleWriter`], which hands
//! the finished line to a [`ConsoleSink`] with the console method matching
//! the event level. On wasm the sink is `console.*`; tests record lines.

use std::io;

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, reload};

/// Handle for changing the maximum level after installation.
pub type LevelHandle = reload::Handle<LevelFilter, Registry>;

/// Browser console method for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Debug,
    Info,
    Warn,
    Error,
}

impl ConsoleMethod {
    #[must_use]
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            _ => Self::Debug,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Destination for finished log lines.
pub trait ConsoleSink: Clone {
    fn emit(&self, method: ConsoleMethod, line: &str);
}

/// [`MakeWriter`] producing one [`ConsoleWriter`] per event.
#[derive(Debug, Clone)]
pub struct ConsoleMakeWriter<S> {
    sink: S,
}

impl<S: ConsoleSink> ConsoleMakeWriter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<'a, S: ConsoleSink + 'a> MakeWriter<'a> for ConsoleMakeWriter<S> {
    type Writer = ConsoleWriter<S>;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(self.sink.clone(), ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(self.sink.clone(), ConsoleMethod::for_level(meta.level()))
    }
}

/// Buffers one rendered event and emits it on flush or drop.
#[derive(Debug)]
pub struct ConsoleWriter<S: ConsoleSink> {
    sink: S,
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl<S: ConsoleSink> ConsoleWriter<S> {
    fn new(sink: S, method: ConsoleMethod) -> Self {
        Self {
            sink,
            method,
            buf: Vec::new(),
        }
    }

    fn emit_pending(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end_matches(['\r', '\n']);
        if !line.is_empty() {
            self.sink.emit(self.method, line);
        }
        self.buf.clear();
    }
}

impl<S: ConsoleSink> io::Write for ConsoleWriter<S> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit_pending();
        Ok(())
    }
}

impl<S: ConsoleSink> Drop for ConsoleWriter<S> {
    fn drop(&mut self) {
        self.emit_pending();
    }
}

/// Build a subscriber writing to `sink` at `level` and above.
///
/// Timestamps and ANSI colors are off: the browser console provides both.
pub fn console_subscriber<S>(
    sink: S,
    level: Level,
) -> (impl Subscriber + Send + Sync + 'static, LevelHandle)
where
    S: ConsoleSink + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(LevelFilter::from_level(level));
    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .without_time()
            .with_ansi(false)
            .with_target(false)
            .with_writer(ConsoleMakeWriter::new(sink)),
    );
    (subscriber, handle)
}

pub fn set_level(handle: &LevelHandle, level: Level) -> Result<(), reload::Error> {
    handle.modify(|filter| *filter = LevelFilter::from_level(level))
}
