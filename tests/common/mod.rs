#![allow(dead_code)]

use kvconf::ports::source_port::SourcePort;
use std::cell::Cell;
use std::collections::HashMap;
use std::io::{self, BufRead, Cursor, Write};
use std::path::{Path, PathBuf};

/// In-memory config source that counts how often it is opened.
pub struct CountingSource {
    pub files: HashMap<PathBuf, String>,
    pub opens: Cell<usize>,
}

impl CountingSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            opens: Cell::new(0),
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn opens(&self) -> usize {
        self.opens.get()
    }
}

impl SourcePort for CountingSource {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        self.opens.set(self.opens.get() + 1);
        match self.files.get(path) {
            Some(content) => Ok(Box::new(Cursor::new(content.clone().into_bytes()))),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}

pub fn write_temp_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[derive(Debug, Default, PartialEq)]
pub struct ServiceConfig {
    pub name: String,
    pub count: u64,
}

kvconf::config_record!(ServiceConfig {
    name: text => "Name",
    count: unsigned => "Count",
});
