//! Opcode table.
//!
//! Each supported opcode byte maps to a descriptor naming its operation,
//! addressing mode and base cycle cost. Adding an opcode means adding a row
//! to [`OPCODES`]; the dispatch loop never changes.
//!
//! | Opcode | Instruction | Cycles |
//! |--------|-------------|--------|
//! | `$A9`  | LDA #nn     | 2      |
//! | `$A5`  | LDA nn      | 3      |
//! | `$B5`  | LDA nn,X    | 4      |
//! | `$AD`  | LDA nnnn    | 4      |
//! | `$BD`  | LDA nnnn,X  | 4/5    |
//! | `$20`  | JSR nnnn    | 6      |

use crate::addressing::Mode;

/// What an instruction does once its operand address is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Load the accumulator from the operand address.
    Lda,
    /// Store the return address at SP and jump to the operand address.
    Jsr,
}

impl Operation {
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lda => "LDA",
            Self::Jsr => "JSR",
        }
    }

    /// Cycles spent after the operand address is known.
    ///
    /// LDA reads one byte. JSR writes a two-byte return address and spends
    /// one internal cycle.
    #[must_use]
    pub const fn cycles(self) -> u8 {
        match self {
            Self::Lda => 1,
            Self::Jsr => 3,
        }
    }
}

/// One row of the opcode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub code: u8,
    pub operation: Operation,
    pub mode: Mode,
    /// Cost without any page-cross penalty, opcode fetch included.
    pub cycles: u8,
}

impl Opcode {
    const fn new(code: u8, operation: Operation, mode: Mode) -> Self {
        Self {
            code,
            operation,
            mode,
            cycles: 1 + mode.cycles() + operation.cycles(),
        }
    }

    #[must_use]
    pub const fn mnemonic(&self) -> &'static str {
        self.operation.mnemonic()
    }
}

/// Every supported opcode.
pub const OPCODES: &[Opcode] = &[
    Opcode::new(0xA9, Operation::Lda, Mode::Immediate),
    Opcode::new(0xA5, Operation::Lda, Mode::ZeroPage),
    Opcode::new(0xB5, Operation::Lda, Mode::ZeroPageX),
    Opcode::new(0xAD, Operation::Lda, Mode::Absolute),
    Opcode::new(0xBD, Operation::Lda, Mode::AbsoluteX),
    Opcode::new(0x20, Operation::Jsr, Mode::Absolute),
];

static TABLE: [Option<Opcode>; 256] = build_table();

const fn build_table() -> [Option<Opcode>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < OPCODES.len() {
        let op = OPCODES[i];
        table[op.code as usize] = Some(op);
        i += 1;
    }
    table
}

/// Look up the descriptor for an opcode byte.
#[must_use]
pub fn lookup(code: u8) -> Option<&'static Opcode> {
    TABLE[usize::from(code)].as_ref()
}
