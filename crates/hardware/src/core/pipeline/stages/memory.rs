//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. It performs loads
//! (with sign or zero extension) and stores (read-modify-write for sub-word
//! widths) through the LSU, in lane order, so a store in an older lane is
//! visible to a load in a younger lane of the same bundle.

use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, MemWb, MemWbEntry};
use crate::core::units::lsu::Lsu;

/// Executes the memory access stage.
///
/// # Arguments
///
/// * `cpu` - CPU state; memory is read and written.
/// * `ex_mem` - Instructions executed last cycle.
///
/// # Returns
///
/// The MEM/WB latch, or `SimError::MemoryOutOfBounds` for a data address
/// outside memory.
pub fn memory_stage(cpu: &mut Cpu, ex_mem: &ExMem) -> Result<MemWb, SimError> {
    let mut mem_wb = MemWb::default();

    for entry in &ex_mem.entries {
        let mut load_data = 0;
        if entry.fault.is_none() && !entry.halt {
            let addr = entry.alu;
            if entry.ctrl.mem_read {
                load_data = Lsu::load(&cpu.mem, addr, entry.ctrl.width, entry.ctrl.signed_load)?;
                tracing::trace!(pc = entry.pc, addr, load_data, "MEM load");
            } else if entry.ctrl.mem_write {
                Lsu::store(&mut cpu.mem, addr, entry.ctrl.width, entry.store_data)?;
                tracing::trace!(pc = entry.pc, addr, data = entry.store_data, "MEM store");
            }
        }

        mem_wb.entries.push(MemWbEntry {
            pc: entry.pc,
            inst: entry.inst,
            dest: entry.dest,
            alu: entry.alu,
            load_data,
            ctrl: entry.ctrl,
            fault: entry.fault,
            halt: entry.halt,
        });
    }

    Ok(mem_wb)
}
