use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Byte-stream source for candidate resource names.
///
/// `Ok(None)` means the resource does not exist, which lets resolution move
/// on to the next candidate. Any `Err` is reported to the caller as-is.
pub trait ResourceLoader {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>>;
}

impl<F, R> ResourceLoader for F
where
    F: Fn(&str) -> io::Result<Option<R>>,
    R: Read + 'static,
{
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        Ok(self(name)?.map(|reader| Box::new(reader) as Box<dyn Read>))
    }
}

/// In-memory resources keyed by candidate name
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.resources.insert(name.into(), content.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }
}

impl ResourceLoader for MemoryLoader {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        Ok(self
            .resources
            .get(name)
            .map(|bytes| Box::new(Cursor::new(bytes.as_slice())) as Box<dyn Read + '_>))
    }
}

/// Resources stored as files below a root directory, one file per candidate name
#[derive(Debug, Clone)]
pub struct DirLoader {
    root: PathBuf,
}

impl DirLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceLoader for DirLoader {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        let path = self.root.join(name);
        match File::open(&path) {
            Ok(file) if file.metadata()?.is_file() => Ok(Some(Box::new(BufReader::new(file)))),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
