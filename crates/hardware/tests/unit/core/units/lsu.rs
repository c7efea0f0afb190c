//! Load/Store Unit Tests.
//!
//! Sub-word accesses use big-endian byte lanes: address `4k` is the most
//! significant byte of word `k`.

use mipsim_core::common::SimError;
use mipsim_core::core::pipeline::signals::MemWidth;
use mipsim_core::core::units::lsu::{ByteLane, Lsu};
use mipsim_core::soc::Memory;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn memory_with(addr: u32, word: u32) -> Memory {
    let mut mem = Memory::new(64);
    mem.write_word(addr, word).unwrap();
    mem
}

#[rstest]
#[case(0x10, 0x11)]
#[case(0x11, 0x22)]
#[case(0x12, 0x33)]
#[case(0x13, 0x44)]
fn byte_loads_pick_big_endian_lanes(#[case] addr: u32, #[case] expected: u32) {
    let mem = memory_with(0x10, 0x1122_3344);
    assert_eq!(Lsu::load(&mem, addr, MemWidth::Byte, false).unwrap(), expected);
}

#[test]
fn sign_and_zero_extension() {
    let mem = memory_with(0x10, 0x80FF_7F01);
    assert_eq!(Lsu::load(&mem, 0x10, MemWidth::Byte, true).unwrap(), 0xFFFF_FF80);
    assert_eq!(Lsu::load(&mem, 0x10, MemWidth::Byte, false).unwrap(), 0x80);
    assert_eq!(Lsu::load(&mem, 0x12, MemWidth::Byte, true).unwrap(), 0x7F);
    assert_eq!(Lsu::load(&mem, 0x10, MemWidth::Half, true).unwrap(), 0xFFFF_80FF);
    assert_eq!(Lsu::load(&mem, 0x12, MemWidth::Half, false).unwrap(), 0x7F01);
    assert_eq!(Lsu::load(&mem, 0x13, MemWidth::Word, true).unwrap(), 0x80FF_7F01);
}

#[test]
fn sub_word_stores_preserve_other_lanes() {
    let mut mem = memory_with(0x20, 0x1122_3344);
    Lsu::store(&mut mem, 0x23, MemWidth::Byte, 0xABCD).unwrap();
    assert_eq!(mem.read_word(0x20).unwrap(), 0x1122_33CD);
    Lsu::store(&mut mem, 0x20, MemWidth::Half, 0xFFFF_BEEF).unwrap();
    assert_eq!(mem.read_word(0x20).unwrap(), 0xBEEF_33CD);
    Lsu::store(&mut mem, 0x20, MemWidth::Word, 7).unwrap();
    assert_eq!(mem.read_word(0x20).unwrap(), 7);
}

#[test]
fn out_of_range_accesses_fail() {
    let mut mem = Memory::new(4);
    assert!(matches!(
        Lsu::load(&mem, 0x10, MemWidth::Word, false),
        Err(SimError::MemoryOutOfBounds { addr: 0x10 })
    ));
    assert!(matches!(
        Lsu::store(&mut mem, 0x11, MemWidth::Byte, 1),
        Err(SimError::MemoryOutOfBounds { addr: 0x11 })
    ));
}

#[test]
fn lane_geometry() {
    let byte = ByteLane::new(0x101, MemWidth::Byte);
    assert_eq!((byte.shift(), byte.mask()), (16, 0xFF));
    let half = ByteLane::new(0x102, MemWidth::Half);
    assert_eq!((half.shift(), half.mask()), (0, 0xFFFF));
    let word = ByteLane::new(0x102, MemWidth::Word);
    assert_eq!((word.shift(), word.mask()), (0, u32::MAX));
}
