//! Program Loader.
//!
//! This module turns input files into memory images. It performs:
//! 1. **ELF loading:** Parses an ELF32 file with the `object` crate and extracts the
//!    executable section linked at address 0.
//! 2. **Raw loading:** Treats any other file as a flat big-endian word image at address 0.
//! 3. **Installation:** Copies the image into main memory.
//!
//! In both cases the program ends at the first address past its last word; reaching
//! that PC is how a run terminates.

use std::fs;
use std::path::Path;

use object::elf::SHF_EXECINSTR;
use object::{Object, ObjectSection, SectionFlags};

use crate::common::constants::WORD_BYTES;
use crate::common::error::SimError;
use crate::soc::memory::Memory;

/// ELF identification bytes at the start of every ELF file.
const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// A program image placed at address 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction words, starting at address 0.
    pub words: Vec<u32>,
    /// Address one past the last instruction.
    pub end_pc: u32,
}

impl Program {
    /// Builds a program from already-encoded instruction words.
    pub fn from_words(words: Vec<u32>) -> Self {
        let end_pc = words.len() as u32 * WORD_BYTES;
        Self { words, end_pc }
    }

    /// Writes the image into memory at address 0.
    ///
    /// # Returns
    ///
    /// `SimError::ProgramTooLarge` if the image does not fit.
    pub fn install(&self, mem: &mut Memory) -> Result<(), SimError> {
        mem.load_words(0, &self.words)
    }
}

/// Packs bytes into words, padding the final word with zeros.
fn pack_words(bytes: &[u8], little_endian: bool) -> Vec<u32> {
    bytes
        .chunks(WORD_BYTES as usize)
        .map(|chunk| {
            let mut buf = [0u8; 4];
            buf[..chunk.len()].copy_from_slice(chunk);
            if little_endian {
                u32::from_le_bytes(buf)
            } else {
                u32::from_be_bytes(buf)
            }
        })
        .collect()
}

/// Loads the executable section of an ELF file.
///
/// The section must carry `SHF_EXECINSTR` and be linked at address 0. Its
/// words are decoded in the file's own byte order; `end_pc` is the section
/// size.
///
/// # Arguments
///
/// * `bytes` - Contents of the ELF file.
///
/// # Returns
///
/// The program, `SimError::Elf` for a malformed file, or
/// `SimError::MissingTextSection`.
pub fn load_elf(bytes: &[u8]) -> Result<Program, SimError> {
    let file = object::File::parse(bytes)?;
    let little_endian = file.is_little_endian();

    let text = file
        .sections()
        .find(|s| {
            let exec = matches!(
                s.flags(),
                SectionFlags::Elf { sh_flags } if sh_flags & u64::from(SHF_EXECINSTR) != 0
            );
            exec && s.address() == 0
        })
        .ok_or(SimError::MissingTextSection)?;

    let data = text.data()?;
    let words = pack_words(data, little_endian);
    let end_pc = text.size() as u32;
    tracing::debug!(
        section = text.name().unwrap_or("?"),
        bytes = data.len(),
        end_pc,
        "loaded ELF text section"
    );
    Ok(Program { words, end_pc })
}

/// Loads a flat image of big-endian words.
///
/// A trailing partial word is zero-padded; `end_pc` is rounded up to the
/// next word.
pub fn load_raw(bytes: &[u8]) -> Result<Program, SimError> {
    let words = pack_words(bytes, false);
    Ok(Program::from_words(words))
}

/// Reads a file and loads it as ELF or raw by its magic number.
///
/// # Arguments
///
/// * `path` - Path to the program file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Program, SimError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.starts_with(ELF_MAGIC) {
        load_elf(&bytes)
    } else {
        load_raw(&bytes)
    }
}
