use rand::Rng;

use crate::opcode::{nibbles, Operands};
use crate::operations;
use crate::state::State;

/// One decoded instruction with its operand fields already extracted.
///
/// The top nibble of the word selects one of 16 primary families; families
/// 0x0, 0x8 and 0xE route again on the bottom nibble and family 0xF on the
/// bottom byte. Words whose secondary key is unmapped decode to `Nop` and
/// are silently ignored rather than rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    ClearDisplay,
    Return,
    Jump { nnn: u16 },
    Call { nnn: u16 },
    SkipEqImm { x: usize, kk: u8 },
    SkipNeImm { x: usize, kk: u8 },
    SkipEqReg { x: usize, y: usize },
    LoadImm { x: usize, kk: u8 },
    AddImm { x: usize, kk: u8 },
    Move { x: usize, y: usize },
    Or { x: usize, y: usize },
    And { x: usize, y: usize },
    Xor { x: usize, y: usize },
    AddCarry { x: usize, y: usize },
    SubBorrow { x: usize, y: usize },
    ShiftRight { x: usize },
    SubReverse { x: usize, y: usize },
    ShiftLeft { x: usize },
    SkipNeReg { x: usize, y: usize },
    SetIndex { nnn: u16 },
    JumpOffset { nnn: u16 },
    Random { x: usize, kk: u8 },
    Draw { x: usize, y: usize, n: u8 },
    SkipKeyPressed { x: usize },
    SkipKeyNotPressed { x: usize },
    ReadDelay { x: usize },
    WaitKey { x: usize },
    SetDelay { x: usize },
    SetSound { x: usize },
    AddIndex { x: usize },
    FontAddress { x: usize },
    StoreBcd { x: usize },
    StoreRegisters { x: usize },
    LoadRegisters { x: usize },
    Nop,
}

impl Instruction {
    /// Selects exactly one Instruction for a word, in constant time.
    ///
    /// Families 0x1-0x7 and 0x9-0xD are identified by the top nibble alone
    /// and ignore nothing but their operand fields; the low nibble of e.g.
    /// 0x5xy? is not inspected.
    pub fn decode(word: u16) -> Instruction {
        let Operands { x, y, n, kk, nnn } = Operands::decode(word);
        match nibbles(word) {
            (0x0, _, _, 0x0) => Instruction::ClearDisplay,
            (0x0, _, _, 0xE) => Instruction::Return,
            (0x1, ..) => Instruction::Jump { nnn },
            (0x2, ..) => Instruction::Call { nnn },
            (0x3, ..) => Instruction::SkipEqImm { x, kk },
            (0x4, ..) => Instruction::SkipNeImm { x, kk },
            (0x5, ..) => Instruction::SkipEqReg { x, y },
            (0x6, ..) => Instruction::LoadImm { x, kk },
            (0x7, ..) => Instruction::AddImm { x, kk },
            (0x8, _, _, 0x0) => Instruction::Move { x, y },
            (0x8, _, _, 0x1) => Instruction::Or { x, y },
            (0x8, _, _, 0x2) => Instruction::And { x, y },
            (0x8, _, _, 0x3) => Instruction::Xor { x, y },
            (0x8, _, _, 0x4) => Instruction::AddCarry { x, y },
            (0x8, _, _, 0x5) => Instruction::SubBorrow { x, y },
            (0x8, _, _, 0x6) => Instruction::ShiftRight { x },
            (0x8, _, _, 0x7) => Instruction::SubReverse { x, y },
            (0x8, _, _, 0xE) => Instruction::ShiftLeft { x },
            (0x9, ..) => Instruction::SkipNeReg { x, y },
            (0xA, ..) => Instruction::SetIndex { nnn },
            (0xB, ..) => Instruction::JumpOffset { nnn },
            (0xC, ..) => Instruction::Random { x, kk },
            (0xD, ..) => Instruction::Draw { x, y, n },
            (0xE, _, _, 0xE) => Instruction::SkipKeyPressed { x },
            (0xE, _, _, 0x1) => Instruction::SkipKeyNotPressed { x },
            (0xF, ..) => match kk {
                0x07 => Instruction::ReadDelay { x },
                0x0A => Instruction::WaitKey { x },
                0x15 => Instruction::SetDelay { x },
                0x18 => Instruction::SetSound { x },
                0x1E => Instruction::AddIndex { x },
                0x29 => Instruction::FontAddress { x },
                0x33 => Instruction::StoreBcd { x },
                0x55 => Instruction::StoreRegisters { x },
                0x65 => Instruction::LoadRegisters { x },
                _ => Instruction::Nop,
            },
            _ => Instruction::Nop,
        }
    }

    /// Runs the instruction's state transition.
    ///
    /// `pressed_keys` holds one flag per key, down when nonzero; `rng` is
    /// consumed only by `Random`.
    pub fn execute<R: Rng>(self, state: &State, pressed_keys: [u8; 16], rng: &mut R) -> State {
        match self {
            Instruction::ClearDisplay => operations::clear_display(state),
            Instruction::Return => operations::ret(state),
            Instruction::Jump { nnn } => operations::jump(nnn, state),
            Instruction::Call { nnn } => operations::call(nnn, state),
            Instruction::SkipEqImm { x, kk } => operations::skip_eq_imm(x, kk, state),
            Instruction::SkipNeImm { x, kk } => operations::skip_ne_imm(x, kk, state),
            Instruction::SkipEqReg { x, y } => operations::skip_eq_reg(x, y, state),
            Instruction::LoadImm { x, kk } => operations::load_imm(x, kk, state),
            Instruction::AddImm { x, kk } => operations::add_imm(x, kk, state),
            Instruction::Move { x, y } => operations::mv(x, y, state),
            Instruction::Or { x, y } => operations::or(x, y, state),
            Instruction::And { x, y } => operations::and(x, y, state),
            Instruction::Xor { x, y } => operations::xor(x, y, state),
            Instruction::AddCarry { x, y } => operations::add_carry(x, y, state),
            Instruction::SubBorrow { x, y } => operations::sub_borrow(x, y, state),
            Instruction::ShiftRight { x } => operations::shift_right(x, state),
            Instruction::SubReverse { x, y } => operations::sub_reverse(x, y, state),
            Instruction::ShiftLeft { x } => operations::shift_left(x, state),
            Instruction::SkipNeReg { x, y } => operations::skip_ne_reg(x, y, state),
            Instruction::SetIndex { nnn } => operations::set_index(nnn, state),
            Instruction::JumpOffset { nnn } => operations::jump_offset(nnn, state),
            Instruction::Random { x, kk } => operations::random(x, kk, rng.gen(), state),
            Instruction::Draw { x, y, n } => operations::draw(x, y, n, state),
            Instruction::SkipKeyPressed { x } => operations::skip_key_pressed(x, state, pressed_keys),
            Instruction::SkipKeyNotPressed { x } => {
                operations::skip_key_not_pressed(x, state, pressed_keys)
            }
            Instruction::ReadDelay { x } => operations::read_delay(x, state),
            Instruction::WaitKey { x } => operations::wait_key(x, state, pressed_keys),
            Instruction::SetDelay { x } => operations::set_delay(x, state),
            Instruction::SetSound { x } => operations::set_sound(x, state),
            Instruction::AddIndex { x } => operations::add_index(x, state),
            Instruction::FontAddress { x } => operations::font_address(x, state),
            Instruction::StoreBcd { x } => operations::store_bcd(x, state),
            Instruction::StoreRegisters { x } => operations::store_registers(x, state),
            Instruction::LoadRegisters { x } => operations::load_registers(x, state),
            Instruction::Nop => *state,
        }
    }
}
