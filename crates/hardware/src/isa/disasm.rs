//! Instruction Disassembler for the MIPS32 subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! // addi $t0, $zero, 5
//! assert_eq!(disassemble(0x2008_0005), "addi $t0, $zero, 5");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::instruction::InstructionBits;
use crate::isa::mips32::{funct as f, opcodes as op};

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns `"nop"` for the all-zero word and `"unknown"` for
/// unrecognised encodings.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    if inst == 0 {
        return "nop".into();
    }

    let rs = reg_name(inst.rs());
    let rt = reg_name(inst.rt());
    let rd = reg_name(inst.rd());
    let simm = inst.imm_sext() as i32;
    let uimm = inst.imm16();

    match inst.opcode() {
        op::OP_RTYPE => {
            let name = match inst.funct() {
                f::FUNCT_SLL => return format!("sll {rd}, {rt}, {}", inst.shamt()),
                f::FUNCT_SRL => return format!("srl {rd}, {rt}, {}", inst.shamt()),
                f::FUNCT_JR => return format!("jr {rs}"),
                f::FUNCT_ADD => "add",
                f::FUNCT_ADDU => "addu",
                f::FUNCT_SUB => "sub",
                f::FUNCT_SUBU => "subu",
                f::FUNCT_AND => "and",
                f::FUNCT_OR => "or",
                f::FUNCT_NOR => "nor",
                f::FUNCT_SLT => "slt",
                f::FUNCT_SLTU => "sltu",
                _ => return "unknown".into(),
            };
            format!("{name} {rd}, {rs}, {rt}")
        }
        op::OP_J => format!("j {:#x}", inst.target26() << 2),
        op::OP_JAL => format!("jal {:#x}", inst.target26() << 2),
        op::OP_BEQ => format!("beq {rs}, {rt}, {simm}"),
        op::OP_BNE => format!("bne {rs}, {rt}, {simm}"),
        op::OP_ADDI => format!("addi {rt}, {rs}, {simm}"),
        op::OP_ADDIU => format!("addiu {rt}, {rs}, {simm}"),
        op::OP_SLTI => format!("slti {rt}, {rs}, {simm}"),
        op::OP_SLTIU => format!("sltiu {rt}, {rs}, {simm}"),
        op::OP_ANDI => format!("andi {rt}, {rs}, {uimm:#x}"),
        op::OP_ORI => format!("ori {rt}, {rs}, {uimm:#x}"),
        op::OP_LUI => format!("lui {rt}, {uimm:#x}"),
        opcode => {
            let name = match opcode {
                op::OP_LB => "lb",
                op::OP_LH => "lh",
                op::OP_LW => "lw",
                op::OP_LBU => "lbu",
                op::OP_LHU => "lhu",
                op::OP_SB => "sb",
                op::OP_SH => "sh",
                op::OP_SW => "sw",
                _ => return "unknown".into(),
            };
            format!("{name} {rt}, {simm}({rs})")
        }
    }
}
