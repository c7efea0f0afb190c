//! Program Loader Tests.
//!
//! Raw images and error paths use files in a temporary directory.

use std::fs;

use mipsim_core::common::SimError;
use mipsim_core::sim::Program;
use mipsim_core::sim::loader::{load_elf, load_file, load_raw};
use mipsim_core::soc::Memory;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn raw_image_is_big_endian_words() {
    let program = load_raw(&[0x20, 0x01, 0x00, 0x05, 0x00, 0x22, 0x18, 0x20]).unwrap();
    assert_eq!(program.words, vec![0x2001_0005, 0x0022_1820]);
    assert_eq!(program.end_pc, 8);
}

#[test]
fn trailing_bytes_are_zero_padded() {
    let program = load_raw(&[0x12, 0x34, 0x56, 0x78, 0xAB]).unwrap();
    assert_eq!(program.words, vec![0x1234_5678, 0xAB00_0000]);
    assert_eq!(program.end_pc, 8);
}

#[test]
fn raw_file_is_loaded_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prog.bin");
    fs::write(&path, [0x20, 0x01, 0x00, 0x05]).unwrap();

    let program = load_file(&path).unwrap();
    assert_eq!(program, Program::from_words(vec![0x2001_0005]));
}

#[test]
fn file_with_elf_magic_is_parsed_as_elf() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.elf");
    fs::write(&path, b"\x7fELF\x01\x02\x01garbage").unwrap();

    assert!(matches!(load_file(&path), Err(SimError::Elf(_))));
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.bin");

    match load_file(&path) {
        Err(SimError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn elf_parser_rejects_non_elf_bytes() {
    assert!(matches!(load_elf(&[0u8; 64]), Err(SimError::Elf(_))));
}

#[test]
fn install_places_words_at_address_zero() {
    let program = Program::from_words(vec![1, 2, 3]);
    let mut mem = Memory::new(8);
    program.install(&mut mem).unwrap();
    assert_eq!(&mem.words()[..4], &[1, 2, 3, 0]);
}

#[test]
fn oversized_program_does_not_install() {
    let program = Program::from_words(vec![0; 9]);
    let mut mem = Memory::new(8);
    assert!(matches!(
        program.install(&mut mem),
        Err(SimError::ProgramTooLarge { bytes: 36, capacity: 32 })
    ));
}
