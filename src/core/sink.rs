//! Output destinations shared by writers
//!
//! Every sink serialises writes behind a mutex: all stderr sinks share one
//! process-wide lock, every other sink carries its own. A writer hands over a
//! fully rendered entry, so an entry is never interleaved with another.

use super::error::Result;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

static STDERR_LOCK: Mutex<()> = parking_lot::const_mutex(());

type SharedWrite = Arc<Mutex<Box<dyn Write + Send>>>;

#[derive(Clone)]
enum SinkKind {
    Stderr,
    Shared(SharedWrite),
}

/// Destination for rendered log entries
#[derive(Clone)]
pub struct Sink {
    kind: SinkKind,
}

impl Sink {
    /// The process's standard error stream
    pub fn stderr() -> Self {
        Self {
            kind: SinkKind::Stderr,
        }
    }

    /// Any `io::Write`, guarded by its own lock
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            kind: SinkKind::Shared(Arc::new(Mutex::new(Box::new(writer)))),
        }
    }

    /// In-memory sink plus a handle to read back what was written
    ///
    /// # Example
    ///
    /// ```
    /// use rust_field_logger::Sink;
    ///
    /// let (sink, buffer) = Sink::buffer();
    /// sink.write_entry(b"hello\n").unwrap();
    /// assert_eq!(buffer.contents(), "hello\n");
    /// ```
    pub fn buffer() -> (Self, SinkBuffer) {
        let buffer = SinkBuffer::default();
        (Self::from_writer(buffer.clone()), buffer)
    }

    /// Whether the sink is an interactive terminal. Only stderr can be.
    pub fn is_terminal(&self) -> bool {
        match self.kind {
            SinkKind::Stderr => io::stderr().is_terminal(),
            SinkKind::Shared(_) => false,
        }
    }

    /// Write one complete entry under the sink's lock and flush it
    pub fn write_entry(&self, entry: &[u8]) -> Result<()> {
        match &self.kind {
            SinkKind::Stderr => {
                let _guard = STDERR_LOCK.lock();
                let mut stderr = io::stderr().lock();
                stderr.write_all(entry)?;
                stderr.flush()?;
            }
            SinkKind::Shared(writer) => {
                let mut writer = writer.lock();
                writer.write_all(entry)?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SinkKind::Stderr => f.write_str("Sink(stderr)"),
            SinkKind::Shared(_) => f.write_str("Sink(writer)"),
        }
    }
}

/// Growable in-memory buffer; clones share the same bytes
#[derive(Debug, Clone, Default)]
pub struct SinkBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SinkBuffer {
    /// Everything written so far, decoded lossily as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SinkBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
