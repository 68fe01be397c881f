//! Edge-list input buffers.

use crate::error::Result;
use memmap::Mmap;
use std::{fs::File, path::Path};

/// The bytes of an edge-list source, owned or memory mapped.
pub enum InputBuffer {
    /// A memory buffer.
    Mem(Vec<u8>),
    /// A read-only memory mapped file.
    Mmap(Mmap),
}

impl InputBuffer {
    /// Maps the file at `path`. An empty file becomes an empty memory buffer
    /// since a zero-length mapping is rejected by the OS.
    pub fn new_mmap<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(InputBuffer::Mem(vec![]));
        }
        Ok(InputBuffer::Mmap(unsafe { Mmap::map(&file)? }))
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            InputBuffer::Mem(vec) => vec.as_slice(),
            InputBuffer::Mmap(mmap) => &mmap[..],
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        Ok(std::str::from_utf8(self.as_bytes())?)
    }
}
