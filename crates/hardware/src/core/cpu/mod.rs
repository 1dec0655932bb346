//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file, program counter, and stall flag.
//! 2. **Pipeline Control:** Owns the four inter-stage latches of the five-stage pipeline.
//! 3. **Memory:** Holds instruction memory (decoded slots) and byte-addressed data memory.
//! 4. **Inspection:** Maps special-purpose register queries onto latch fields.

/// Register and memory dump formatting.
pub mod dump;

/// Instruction execution orchestration and pipeline coordination.
pub mod execution;

/// Byte-addressed data memory.
pub mod memory;

use tracing::debug;

use crate::common::SimError;
use crate::config::{Config, HazardScope};
use crate::core::arch::{Gpr, SpRegister, Stage};
use crate::core::cpu::memory::DataMemory;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::isa::Instruction;
use crate::sim::program::Program;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
///
/// The CPU moves instructions through the five-stage pipeline, one stage
/// advance per call to [`Cpu::tick`], and tracks cycle statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Program Counter; undefined until a program is loaded.
    pub pc: Option<u32>,
    /// Address of the first instruction; undefined until a program is loaded.
    pub base_address: Option<u32>,
    /// Instruction memory, one decoded instruction per slot.
    pub instr_memory: Vec<Instruction>,
    /// Data memory.
    pub data_memory: DataMemory,
    /// Memory latency in cycles. Stored for reporting only.
    pub memory_latency: u32,

    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// EX/MEM Latch.
    pub ex_mem: ExMem,
    /// MEM/WB Latch.
    pub mem_wb: MemWb,
    /// Set while decode holds an instruction waiting on a data hazard.
    pub stall: bool,
    /// Instruction classes checked by the hazard unit.
    pub hazard_scope: HazardScope,

    /// Enable per-instruction retire tracing.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU instance in the reset state.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A new `Cpu` with every register undefined, data memory filled with
    /// `0xFF`, and instruction memory holding `config.program.capacity` `NOP` slots.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            pc: None,
            base_address: None,
            instr_memory: vec![Instruction::NOP; config.program.capacity],
            data_memory: DataMemory::new(config.memory.size_bytes),
            memory_latency: config.memory.latency,
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            stall: false,
            hazard_scope: config.pipeline.hazard_scope,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        }
    }

    /// Returns every entity to its initial state.
    ///
    /// Registers, latches and the program counter become undefined, data memory
    /// is refilled with `0xFF`, instruction memory with `NOP`, and the
    /// statistics return to zero. A program must be loaded again afterwards.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.pc = None;
        self.base_address = None;
        self.instr_memory.fill(Instruction::NOP);
        self.data_memory.reset();
        self.clear_pipeline();
        debug!("cpu reset");
    }

    /// Empties every latch, drops a pending stall and zeroes the statistics.
    fn clear_pipeline(&mut self) {
        self.if_id = IfId::default();
        self.id_ex = IdEx::default();
        self.ex_mem = ExMem::default();
        self.mem_wb = MemWb::default();
        self.stall = false;
        self.stats = SimStats::default();
    }

    /// Loads `program` into instruction memory and points the PC at its base.
    ///
    /// Slots past the end of the program are filled with `NOP`. The latches
    /// and statistics start over, so a finished run can be followed by a new
    /// program. Registers and data memory are left untouched.
    ///
    /// # Errors
    ///
    /// `SimError::ProgramTooLarge` if the program has more instructions than
    /// instruction memory has slots.
    pub fn load(&mut self, program: &Program) -> Result<(), SimError> {
        let instructions = program.instructions();
        let capacity = self.instr_memory.len();
        if instructions.len() > capacity {
            return Err(SimError::ProgramTooLarge {
                len: instructions.len(),
                capacity,
            });
        }

        let (loaded, rest) = self.instr_memory.split_at_mut(instructions.len());
        loaded.copy_from_slice(instructions);
        rest.fill(Instruction::NOP);

        self.base_address = Some(program.base_address());
        self.pc = Some(program.base_address());
        self.clear_pipeline();
        debug!(
            len = instructions.len(),
            base = format_args!("{:#x}", program.base_address()),
            "program loaded"
        );
        Ok(())
    }

    /// Reads a special-purpose register as seen by `stage`.
    ///
    /// `PC` belongs to IF; `NPC` to ID (the IF/ID latch) and EX (ID/EX);
    /// `A`, `B` and `IMM` to EX; `B`, `ALU_OUTPUT` and `COND` to MEM;
    /// `ALU_OUTPUT` and `LMD` to WB. Any other combination, and `IR` in every
    /// stage, has no value and yields `None`. `COND` reads as `1` or `0`.
    pub fn get_sp_register(&self, reg: SpRegister, stage: Stage) -> Option<u32> {
        match (stage, reg) {
            (Stage::If, SpRegister::Pc) => self.pc,
            (Stage::Id, SpRegister::Npc) => self.if_id.npc,
            (Stage::Ex, SpRegister::Npc) => self.id_ex.npc,
            (Stage::Ex, SpRegister::A) => self.id_ex.a,
            (Stage::Ex, SpRegister::B) => self.id_ex.b,
            (Stage::Ex, SpRegister::Imm) => self.id_ex.imm,
            (Stage::Mem, SpRegister::B) => self.ex_mem.b,
            (Stage::Mem, SpRegister::AluOutput) => self.ex_mem.alu_out,
            (Stage::Mem, SpRegister::Cond) => self.ex_mem.cond.map(u32::from),
            (Stage::Wb, SpRegister::AluOutput) => self.mem_wb.alu_out,
            (Stage::Wb, SpRegister::Lmd) => self.mem_wb.lmd,
            _ => None,
        }
    }

    /// Returns the instruction each stage will work on in the next cycle.
    ///
    /// IF reports the instruction at the PC (or `None` when no program is
    /// loaded); the other stages report the instruction in their input latch.
    pub fn instruction_at(&self, stage: Stage) -> Option<Instruction> {
        match stage {
            Stage::If => {
                let offset = self.pc?.checked_sub(self.base_address?)?;
                self.instr_memory
                    .get((offset / crate::common::INSTRUCTION_SIZE) as usize)
                    .copied()
            }
            Stage::Id => Some(self.if_id.inst),
            Stage::Ex => Some(self.id_ex.inst),
            Stage::Mem => Some(self.ex_mem.inst),
            Stage::Wb => Some(self.mem_wb.inst),
        }
    }
}
