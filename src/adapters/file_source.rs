//! Filesystem config source.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::ports::source_port::SourcePort;

#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl SourcePort for FileSource {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}
