/// Filesystem adapters for file I/O operations
mod file_hasher;
mod file_reader;
mod file_writer;

pub use file_hasher::Sha256FileHasher;
pub use file_reader::{DebianCopyrightReader, FileSystemReader, DEFAULT_COPYRIGHT_DIR};
pub use file_writer::FileSystemWriter;
