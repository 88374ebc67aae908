//! Config source port trait.

use std::io::{self, BufRead};
use std::path::Path;

/// Opens a config path for line-by-line reading. The returned reader is
/// dropped, and the handle released, when parsing finishes or fails.
pub trait SourcePort {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>>;
}
