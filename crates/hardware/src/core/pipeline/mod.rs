//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Hazards:** Detection of read-after-write dependencies that require a stall.
//! 2. **Latches:** Inter-stage records (IF/ID, ID/EX, EX/MEM, MEM/WB).
//! 3. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//!
//! Stages run once per cycle in write-back-to-fetch order, so each stage reads the
//! latch its predecessor produced in the previous cycle before that latch is
//! overwritten.

/// Pipeline hazard detection logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;
