//! `tracing` output for the browser.
//!
//! The fmt layer formats each event into a buffer; when the writer is
//! dropped the line is sent to the `console` method matching its level, so
//! devtools filtering by level keeps working.
//!
//! The max level sits behind a reload layer so the JS bootstrap can change
//! it after `start()` has installed the subscriber.

use std::io;
use std::sync::RwLock;

use lazy_static::lazy_static;
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, Registry};
use wasm_bindgen::JsValue;

pub type LevelHandle = reload::Handle<LevelFilter, Registry>;

lazy_static! {
    static ref LEVEL_HANDLE: RwLock<Option<LevelHandle>> = RwLock::new(None);
}

pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
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
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }

        let value: JsValue = line.into();
        match self.level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            _ => web_sys::console::debug_1(&value),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Console subscriber plus the handle that adjusts its max level.
pub fn console_subscriber<W>(
    level: Level,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, LevelHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(LevelFilter::from_level(level));
    let output = fmt::layer()
        .with_writer(writer)
        .without_time()
        .with_ansi(false)
        .with_target(false);

    (tracing_subscriber::registry().with(filter).with(output), handle)
}

/// Install the console subscriber. A second call only changes the level.
pub fn init(level: Level) {
    let (subscriber, handle) = console_subscriber(level, MakeConsoleWriter);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        set_level(level);
        return;
    }
    *LEVEL_HANDLE.write().unwrap_or_else(|e| e.into_inner()) = Some(handle);
}

/// Change the max level of the installed subscriber.
pub fn set_level(level: Level) {
    let guard = LEVEL_HANDLE.read().unwrap_or_else(|e| e.into_inner());
    match guard.as_ref() {
        Some(handle) => {
            if let Err(e) = handle.reload(LevelFilter::from_level(level)) {
                tracing::warn!("cannot change log level: {}", e);
            }
        }
        None => crate::debug_log!("no console subscriber installed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_can_be_raised_after_install() {
        let (subscriber, handle) = console_subscriber(Level::INFO, io::sink);

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(Level::INFO));
            assert!(!tracing::enabled!(Level::DEBUG));

            handle.reload(LevelFilter::DEBUG).unwrap();
            assert!(tracing::enabled!(Level::DEBUG));

            handle.reload(LevelFilter::WARN).unwrap();
            assert!(!tracing::enabled!(Level::INFO));
        });
    }
}
