use std::fs;
use std::path::Path;

use miette::{IntoDiagnostic, Result};

use crate::error;
use crate::runtime::MEMORY_MAX;

/// A parsed LC3 object file: a load origin and the program words.
///
/// The on-disk format has no header, checksum or symbol table. The first two
/// bytes are a big-endian origin address, every following byte pair is a
/// big-endian machine word to be placed at origin, origin + 1, and so on.
pub struct Image {
    orig: u16,
    words: Vec<u16>,
}

impl Image {
    pub fn from_bytes(bytes: &[u8]) -> Result<Image> {
        if bytes.len() < 2 {
            return Err(error::load_too_short(bytes.len()));
        }
        let orig = u16::from_be_bytes([bytes[0], bytes[1]]);
        // A trailing odd byte carries no word and is ignored
        let words: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        if usize::from(orig) + words.len() > MEMORY_MAX {
            return Err(error::load_too_long(orig, words.len()));
        }
        Ok(Image { orig, words })
    }

    pub fn read_from(path: &Path) -> Result<Image> {
        let bytes = fs::read(path).into_diagnostic()?;
        Self::from_bytes(&bytes)
    }

    /// Memory address the program is loaded at. Also the initial PC.
    pub fn orig(&self) -> u16 {
        self.orig
    }

    pub fn words(&self) -> &[u16] {
        &self.words
    }
}
