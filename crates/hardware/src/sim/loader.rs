//! Assembly Loader.
//!
//! This module turns assembly source text into a [`Program`]. It performs:
//! 1. **Parsing:** Runs the `asm.pest` grammar, which strips comments and lexes
//!    labels, registers, numbers and `imm(Rn)` addresses.
//! 2. **Decoding:** Maps each instruction onto an [`Instruction`] with register indices and immediates.
//! 3. **Label resolution:** Rewrites branch targets as byte displacements from the following instruction.
//!
//! ```text
//! loop:  ADDI R1 R1 -1      # comment
//!        LW   R2 4(R1)
//!        BNEZ R1 loop
//!        EOP
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use pest::Parser;
use pest::error::LineColLocation;
use pest::iterators::{Pair, Pairs};
use thiserror::Error;
use tracing::debug;

use crate::common::{INSTRUCTION_SIZE, NUM_GPRS};
use crate::config::ProgramConfig;
use crate::isa::{InstClass, Instruction, Opcode};
use crate::sim::program::Program;

use self::grammar::{AsmParser, Rule};

mod grammar {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "sim/asm.pest"]
    pub struct AsmParser;
}

/// Errors raised while reading or parsing a program.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read `{}`: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The text does not follow the assembly grammar.
    #[error("line {line}: syntax error, {message}")]
    Syntax {
        /// Source line.
        line: usize,
        /// Parser diagnostic.
        message: String,
    },

    /// The first token of an instruction is not a known opcode.
    #[error("line {line}: unknown opcode `{token}`")]
    UnknownOpcode {
        /// Source line.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// An instruction has fewer operands than its opcode takes.
    #[error("line {line}: missing operand for {opcode}")]
    MissingOperand {
        /// Source line.
        line: usize,
        /// Opcode being parsed.
        opcode: Opcode,
    },

    /// An instruction has more operands than its opcode takes.
    #[error("line {line}: unexpected operand `{token}`")]
    TrailingOperand {
        /// Source line.
        line: usize,
        /// First surplus token.
        token: String,
    },

    /// A register operand is not `R0`..`R31`.
    #[error("line {line}: invalid register `{token}`")]
    InvalidRegister {
        /// Source line.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// An immediate is not a 32-bit decimal or hex number.
    #[error("line {line}: invalid immediate `{token}`")]
    InvalidImmediate {
        /// Source line.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// A memory operand is not of the form `imm(Rn)`.
    #[error("line {line}: invalid memory operand `{token}`, expected imm(Rn)")]
    InvalidAddress {
        /// Source line.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// A branch names a label that is never defined.
    #[error("line {line}: undefined label `{label}`")]
    UnresolvedLabel {
        /// Line of the branch.
        line: usize,
        /// Label name.
        label: String,
    },

    /// A label is defined twice.
    #[error("line {line}: label `{label}` already defined")]
    DuplicateLabel {
        /// Line of the second definition.
        line: usize,
        /// Label name.
        label: String,
    },

    /// The program never ends with `EOP`.
    #[error("program has no EOP instruction")]
    MissingEop,

    /// The program does not fit instruction memory.
    #[error("program has {len} instructions but instruction memory holds {capacity}")]
    TooManyInstructions {
        /// Instructions parsed.
        len: usize,
        /// Configured capacity.
        capacity: usize,
    },
}

/// A branch whose displacement is filled in once every label is known.
struct Fixup {
    index: usize,
    line: usize,
    label: String,
}

/// Operand cursor over the pairs following an opcode.
struct Operands<'i> {
    pairs: Pairs<'i, Rule>,
    line: usize,
    opcode: Opcode,
}

impl<'i> Operands<'i> {
    fn next(&mut self) -> Result<Pair<'i, Rule>, LoadError> {
        self.pairs.next().ok_or(LoadError::MissingOperand {
            line: self.line,
            opcode: self.opcode,
        })
    }

    fn register(&mut self) -> Result<usize, LoadError> {
        let pair = self.next()?;
        let index = if pair.as_rule() == Rule::register {
            register_index(pair.as_str())
        } else {
            None
        };
        index.ok_or_else(|| LoadError::InvalidRegister {
            line: self.line,
            token: pair.as_str().to_string(),
        })
    }

    fn immediate(&mut self) -> Result<u32, LoadError> {
        let pair = self.next()?;
        let value = if pair.as_rule() == Rule::number {
            parse_immediate(pair.as_str())
        } else {
            None
        };
        value.ok_or_else(|| LoadError::InvalidImmediate {
            line: self.line,
            token: pair.as_str().to_string(),
        })
    }

    /// `imm(Rn)`, returned as `(offset, base)`.
    fn address(&mut self) -> Result<(u32, usize), LoadError> {
        let pair = self.next()?;
        let token = pair.as_str();
        let parsed = if pair.as_rule() == Rule::address {
            decode_address(pair)
        } else {
            None
        };
        parsed.ok_or_else(|| LoadError::InvalidAddress {
            line: self.line,
            token: token.to_string(),
        })
    }

    /// Branch target; any operand that is not an address names a label.
    fn label(&mut self) -> Result<&'i str, LoadError> {
        Ok(self.next()?.as_str())
    }

    fn finish(mut self) -> Result<(), LoadError> {
        self.pairs.next().map_or(Ok(()), |pair| {
            Err(LoadError::TrailingOperand {
                line: self.line,
                token: pair.as_str().to_string(),
            })
        })
    }
}

fn syntax_error(err: &pest::error::Error<Rule>) -> LoadError {
    let (LineColLocation::Pos((line, _)) | LineColLocation::Span((line, _), _)) = err.line_col;
    LoadError::Syntax {
        line,
        message: err.variant.message().into_owned(),
    }
}

/// Index of a `register` token, if it names one of the 32 registers.
fn register_index(token: &str) -> Option<usize> {
    token[1..].parse().ok().filter(|&idx| idx < NUM_GPRS)
}

/// Value of a `number` token. Negative values wrap to two's complement;
/// anything outside the 32-bit range is rejected.
fn parse_immediate(token: &str) -> Option<u32> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    let magnitude = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };

    if negative {
        (magnitude <= 1 << 31).then(|| magnitude.wrapping_neg())
    } else {
        Some(magnitude)
    }
}

fn decode_address(pair: Pair<'_, Rule>) -> Option<(u32, usize)> {
    let mut offset = 0;
    let mut base = None;
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::offset => offset = parse_immediate(part.as_str())?,
            Rule::register => base = register_index(part.as_str()),
            _ => {}
        }
    }
    Some((offset, base?))
}

fn decode_instruction(
    opcode: Opcode,
    ops: &mut Operands<'_>,
) -> Result<(Instruction, Option<String>), LoadError> {
    let inst = match opcode.class() {
        InstClass::Nop => Instruction::NOP,
        InstClass::Eop => Instruction::EOP,
        InstClass::RegReg => {
            let dest = ops.register()?;
            let src1 = ops.register()?;
            let src2 = ops.register()?;
            Instruction::reg_reg(opcode, dest, src1, src2)
        }
        InstClass::RegImm => {
            let dest = ops.register()?;
            let src1 = ops.register()?;
            let imm = ops.immediate()?;
            Instruction::reg_imm(opcode, dest, src1, imm)
        }
        InstClass::Load => {
            let dest = ops.register()?;
            let (offset, base) = ops.address()?;
            Instruction::load(dest, base, offset)
        }
        InstClass::Store => {
            let src = ops.register()?;
            let (offset, base) = ops.address()?;
            Instruction::store(src, base, offset)
        }
        InstClass::Branch => {
            let inst = if opcode == Opcode::Jump {
                Instruction::jump(0)
            } else {
                Instruction::branch(opcode, ops.register()?, 0)
            };
            return Ok((inst, Some(ops.label()?.to_string())));
        }
    };
    Ok((inst, None))
}

/// Parses assembly source into a program.
///
/// # Arguments
///
/// * `source` - Program text, one instruction per line.
/// * `config` - Supplies the load address and the instruction memory capacity.
///
/// # Errors
///
/// Returns the first [`LoadError`] found; nothing is partially loaded.
pub fn parse_program(source: &str, config: &ProgramConfig) -> Result<Program, LoadError> {
    let pairs = AsmParser::parse(Rule::program, source).map_err(|err| syntax_error(&err))?;

    let mut instructions = Vec::new();
    let mut labels: BTreeMap<&str, usize> = BTreeMap::new();
    let mut fixups = Vec::new();

    for item in pairs
        .flat_map(Pair::into_inner)
        .filter(|pair| pair.as_rule() == Rule::line)
        .flat_map(Pair::into_inner)
    {
        let (line, _) = item.as_span().start_pos().line_col();
        match item.as_rule() {
            Rule::label => {
                let label = item.into_inner().as_str();
                if labels.insert(label, instructions.len()).is_some() {
                    return Err(LoadError::DuplicateLabel {
                        line,
                        label: label.to_string(),
                    });
                }
            }
            Rule::instruction => {
                let mut parts = item.into_inner();
                let Some(head) = parts.next() else {
                    continue;
                };
                let opcode =
                    head.as_str()
                        .parse::<Opcode>()
                        .map_err(|_| LoadError::UnknownOpcode {
                            line,
                            token: head.as_str().to_string(),
                        })?;

                let mut ops = Operands {
                    pairs: parts,
                    line,
                    opcode,
                };
                let (inst, target) = decode_instruction(opcode, &mut ops)?;
                ops.finish()?;

                if let Some(label) = target {
                    fixups.push(Fixup {
                        index: instructions.len(),
                        line,
                        label,
                    });
                }
                instructions.push(inst);
            }
            _ => {}
        }
    }

    if instructions.len() > config.capacity {
        return Err(LoadError::TooManyInstructions {
            len: instructions.len(),
            capacity: config.capacity,
        });
    }

    for Fixup { index, line, label } in fixups {
        let Some(&target) = labels.get(label.as_str()) else {
            return Err(LoadError::UnresolvedLabel { line, label });
        };
        let displacement = (target as i64 - index as i64 - 1) * i64::from(INSTRUCTION_SIZE);
        instructions[index].immediate = Some(displacement as i32 as u32);
    }

    if !instructions.iter().any(|inst| inst.opcode == Opcode::Eop) {
        return Err(LoadError::MissingEop);
    }

    debug!(
        len = instructions.len(),
        labels = labels.len(),
        "program parsed"
    );
    Ok(Program::new(instructions, config.base_address))
}

/// Reads and parses a program file.
///
/// # Errors
///
/// `LoadError::Io` if the file cannot be read, otherwise as [`parse_program`].
pub fn load_program_file(
    path: impl AsRef<Path>,
    config: &ProgramConfig,
) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&source, config)
}
