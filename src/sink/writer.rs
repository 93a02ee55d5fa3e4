//! Sink over any `io::Write` (files, pipes, sockets).

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use parking_lot::Mutex;

use crate::error::SinkError;
use crate::format::Format;

use super::Sink;

/// Writes one record per line into a buffer. The buffer is flushed when it
/// fills, on [`Sink::flush`], on [`close`](Self::close) and on drop, never
/// per record.
pub struct WriterSink<W: Write + Send> {
    name: String,
    format: Format,
    writer: Mutex<Option<BufWriter<W>>>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(name: &str, format: Format, writer: W) -> Self {
        Self {
            name: name.to_string(),
            format,
            writer: Mutex::new(Some(BufWriter::new(writer))),
        }
    }

    /// Flush and take the writer back. Later writes fail with
    /// [`SinkError::Closed`].
    pub fn close(&self) -> Result<Option<W>, SinkError> {
        match self.writer.lock().take() {
            Some(buffered) => buffered
                .into_inner()
                .map(Some)
                .map_err(|e| SinkError::Io(e.into_error())),
            None => Ok(None),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.writer.lock().is_none()
    }
}

impl WriterSink<File> {
    /// Append to the file at `path`, creating it if needed.
    pub fn append_to(path: impl AsRef<Path>, format: Format) -> io::Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(&path.display().to_string(), format, file))
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self) -> Format {
        self.format
    }

    fn write(&self, serialized: &str) -> Result<(), SinkError> {
        let mut guard = self.writer.lock();
        let writer = guard
            .as_mut()
            .ok_or_else(|| SinkError::Closed(self.name.clone()))?;
        writeln!(writer, "{}", serialized)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), SinkError> {
        match self.writer.lock().as_mut() {
            Some(writer) => Ok(writer.flush()?),
            None => Err(SinkError::Closed(self.name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use crate::config::LoggerConfig;
    use crate::logger::Logger;

    /// Writer whose flush is slow and counted.
    struct SlowFlush {
        written: Arc<Mutex<Vec<u8>>>,
        flushes: Arc<AtomicUsize>,
        delay: Duration,
    }

    impl Write for SlowFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            std::thread::sleep(self.delay);
            self.flushes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_writes_lines() {
        let sink = WriterSink::new("buffer", Format::Json, Vec::new());
        sink.write("first").unwrap();
        sink.write("second").unwrap();

        let buffer = sink.close().unwrap().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_closed_sink_errors() {
        let sink = WriterSink::new("buffer", Format::Json, Vec::new());
        sink.close().unwrap();

        assert!(sink.is_closed());
        assert!(matches!(sink.write("late"), Err(SinkError::Closed(name)) if name == "buffer"));
        assert!(sink.close().unwrap().is_none());
    }

    #[test]
    fn test_emit_does_not_wait_for_flush() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let flushes = Arc::new(AtomicUsize::new(0));
        let delay = Duration::from_millis(300);
        let sink = Arc::new(WriterSink::new(
            "slow",
            Format::Json,
            SlowFlush {
                written: Arc::clone(&written),
                flushes: Arc::clone(&flushes),
                delay,
            },
        ));

        let logger = Logger::without_sinks(LoggerConfig::new());
        logger.add_sink(sink.clone());

        let started = Instant::now();
        logger.info("first");
        logger.info("second");
        assert!(started.elapsed() < delay);
        assert_eq!(flushes.load(Ordering::SeqCst), 0);

        logger.flush();
        assert_eq!(flushes.load(Ordering::SeqCst), 1);

        let output = String::from_utf8(written.lock().clone()).unwrap();
        let first = output.find("\"first\"").unwrap();
        let second = output.find("\"second\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_append_to_file() {
        let path = std::env::temp_dir().join(format!("ctxlog-{}.log", uuid::Uuid::new_v4()));
        let sink = WriterSink::append_to(&path, Format::Json).unwrap();
        sink.write(r#"{"message":"persisted"}"#).unwrap();
        drop(sink);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"message\":\"persisted\"}\n");
        std::fs::remove_file(&path).unwrap();
    }
}
