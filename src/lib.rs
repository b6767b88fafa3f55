//! The execution core of the CHIP-8 virtual machine: machine state, the
//! instruction decoder, the semantics of every instruction, and the cycle
//! driver that ties them together. Loading program images from disk, drawing
//! the frame buffer and translating keyboard events into the 16-key pad are
//! left to the embedding program.

pub use crate::chip8::{Chip8, RomError};
pub use crate::instruction::Instruction;
pub use crate::opcode::{nibbles, Operands};
pub use crate::state::{FrameBuffer, State};

mod chip8;
pub mod constants;
mod instruction;
mod opcode;
mod operations;
mod state;
