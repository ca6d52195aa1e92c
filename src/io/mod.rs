//! I/O providers and targets for the selection pipeline.
//!
//! The pipeline never touches the filesystem directly: it reads from an
//! `InputProvider` and writes to an `OutputTarget`. File and stdin/stdout
//! implementations live in `std_io`; in-memory doubles for tests live in
//! `memory`.

mod memory;
mod std_io;

pub use memory::{InMemorySink, InMemorySource};
pub use std_io::{FileInput, FileOutput, StdinInput, StdoutOutput};

use std::fmt::Debug;
use std::io::{Read, Write};

/// Trait for synchronous input providers.
///
/// Implementors provide a way to open a readable byte stream from sources
/// such as files, stdin, or in-memory buffers.
pub trait InputProvider: Send + Sync + Debug {
    /// Returns a unique identifier for this input source.
    ///
    /// This is used for error messages and logging.
    /// Convention: "-" for stdin, file path for files.
    fn id(&self) -> &str;

    /// Open and return a new readable stream.
    ///
    /// Each call returns a fresh stream positioned at the beginning. The
    /// stream is released when the returned handle is dropped.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}

/// Trait for synchronous output targets.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Create and return a writable stream, replacing any previous content.
    fn create(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
