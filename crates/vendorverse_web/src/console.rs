//! `tracing` output for the browser console
//!
//! `tracing-subscriber`'s fmt layer writes each event through a fresh
//! writer; [`LineWriter`] buffers it and hands the finished line to a sink
//! on drop, so one event becomes one console call at the matching level.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Receives one formatted event
pub type Sink = fn(Level, &str);

/// [`MakeWriter`] producing one [`LineWriter`] per event
#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: Sink,
}

impl ConsoleMakeWriter {
    pub fn new(sink: Sink) -> Self {
        Self { sink }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter::new(Level::INFO, self.sink)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter::new(*meta.level(), self.sink)
    }
}

/// Buffers one event and emits it on drop
pub struct LineWriter {
    level: Level,
    buf: Vec<u8>,
    sink: Sink,
}

impl LineWriter {
    fn new(level: Level, sink: Sink) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
            sink,
        }
    }
}

impl io::Write for LineWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        (self.sink)(self.level, line.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::io::Write;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(level: Level, line: &str) {
        LINES.with(|l| l.borrow_mut().push((level, line.to_string())));
    }

    fn take() -> Vec<(Level, String)> {
        LINES.with(|l| std::mem::take(&mut *l.borrow_mut()))
    }

    #[test]
    fn one_line_per_writer() {
        {
            let mut w = LineWriter::new(Level::WARN, capture);
            write!(w, "theme ").unwrap();
            writeln!(w, "step failed").unwrap();
        }
        drop(LineWriter::new(Level::INFO, capture));

        assert_eq!(take(), vec![(Level::WARN, "theme step failed".to_string())]);
    }

    #[test]
    fn subscriber_routes_levels() {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(ConsoleMakeWriter::new(capture))
            .with_ansi(false)
            .without_time()
            .with_max_level(Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("preference not persisted");
            tracing::debug!("theme dark committed");
            tracing::trace!("filtered out");
        });

        let lines = take();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Level::WARN);
        assert!(lines[0].1.contains("preference not persisted"));
        assert_eq!(lines[1].0, Level::DEBUG);
        assert!(lines[1].1.contains("theme dark committed"));
    }
}
