//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** The coarse ALU-op class chosen by the decoder and the
//!    concrete ALU operation chosen by the ALU control.
//! 2. **Operand Selection:** Register or immediate as the second ALU input, `rt` or `rd`
//!    as the destination.
//! 3. **Memory Control:** Access width and sign extension for loads and stores.

/// Concrete ALU operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Produces zero. Used for unsupported encodings in permissive mode.
    #[default]
    Nop,

    /// Wrapping addition.
    Add,

    /// Wrapping subtraction.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise NOR.
    Nor,

    /// Set less than (signedness chosen by the ALU control flags).
    Slt,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,
}

/// Two-bit ALU-op class produced by the decoder.
///
/// The ALU control refines this into an [`AluOp`] using `funct` and the opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOpClass {
    /// `00`: address calculation for loads and stores (add).
    MemAddr,
    /// `01`: branch comparison (subtract).
    Branch,
    /// `10`: R-type; the operation comes from `funct`.
    RType,
    /// `11`: I-type arithmetic; the operation comes from the opcode.
    #[default]
    Immediate,
}

impl AluOpClass {
    /// Returns the two-bit hardware encoding of the class.
    pub const fn bits(self) -> u8 {
        match self {
            Self::MemAddr => 0b00,
            Self::Branch => 0b01,
            Self::RType => 0b10,
            Self::Immediate => 0b11,
        }
    }
}

/// Source of the second ALU operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Value of register `rt`.
    #[default]
    Reg,
    /// Extended 16-bit immediate.
    Imm,
}

/// Which instruction field names the destination register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegDest {
    /// `rt` (I-type).
    #[default]
    Rt,
    /// `rd` (R-type).
    Rd,
}

/// Memory access width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    #[default]
    Word,
}

/// Control signals generated by the decode stage.
///
/// One vector is produced per instruction and is immutable afterwards; it
/// travels with the instruction through every latch. The default value is a
/// no-op: nothing is written and no memory is touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Destination register field selection.
    pub reg_dest: RegDest,
    /// Unconditional jump (`j`, `jal`).
    pub jump: bool,
    /// Conditional branch (`beq`, `bne`).
    pub branch: bool,
    /// Branch is taken when the operands differ.
    pub branch_not_equal: bool,
    /// Instruction reads memory.
    pub mem_read: bool,
    /// Instruction writes memory.
    pub mem_write: bool,
    /// Writeback value comes from memory rather than the ALU.
    pub mem_to_reg: bool,
    /// Second ALU operand source.
    pub alu_src: OpBSrc,
    /// Coarse ALU operation class.
    pub alu_op: AluOpClass,
    /// Instruction writes a general-purpose register.
    pub reg_write: bool,
    /// Jump writes the return address to `$ra`.
    pub jump_link: bool,
    /// Result is the immediate shifted into the upper half.
    pub load_upper_imm: bool,
    /// Memory access width.
    pub width: MemWidth,
    /// Sub-word loads are sign-extended.
    pub signed_load: bool,
}
