use std::io::Read;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::constants::PROGRAM_START;
use crate::instruction::Instruction;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the machine `state`, the `pressed_keys` flags fed by some input
/// collaborator, and the byte generator seeded at construction.
///
/// Supplies interfaces for:
/// - loading program images
/// - pressing and releasing keys
/// - advancing the machine one fetch-decode-execute-tick cycle at a time
/// - inspecting the frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    pressed_keys: [u8; 16],
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: [0; 16],
            rng: StdRng::from_entropy(),
        }
    }

    /// An interpreter whose random-instruction byte stream is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: [0; 16],
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Copy a program image verbatim to the load address.
    ///
    /// The image is not inspected; whatever bytes the reader yields become
    /// the program.
    ///
    /// # Arguments
    /// * `reader` a reader positioned at the start of the image
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), RomError> {
        let mut image = Vec::new();
        reader.read_to_end(&mut image)?;

        let region = &mut self.state.memory[PROGRAM_START..];
        if image.len() > region.len() {
            return Err(RomError::TooLarge {
                size: image.len(),
                capacity: region.len(),
            });
        }
        region[..image.len()].copy_from_slice(&image);
        log::debug!("loaded {} byte program image", image.len());
        Ok(())
    }

    /// The frame buffer as it stands, whether or not anything new was drawn.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if the display should be redrawn, clearing
    /// the draw flag.
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.pressed_keys[key as usize] = 0x1;
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.pressed_keys[key as usize] = 0x0;
    }

    /// Direct read access to the machine state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Direct write access to the machine state. Nothing is validated;
    /// collaborators are trusted to stay within the documented layout.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Advances the machine by a single cycle:
    /// - fetches the word at the pc and advances the pc past it
    /// - decodes and executes exactly one instruction
    /// - ticks both timers
    ///
    /// An instruction that must run again (waiting on a key) rewinds the pc
    /// itself, so the net advance over such a cycle is zero.
    pub fn cycle(&mut self) {
        let word = self.fetch();
        self.state.pc += 0x2;

        let instruction = Instruction::decode(word);
        log::trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            word,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        self.state = instruction.execute(&self.state, self.pressed_keys, &mut self.rng);

        self.tick_timers();
    }

    /// Gets the word currently pointed at by the pc.
    /// Memory holds bytes, but instructions are 16 bits, so two subsequent
    /// bytes are combined, high byte first.
    fn fetch(&self) -> u16 {
        let high = u16::from(self.state.memory[self.state.pc as usize]);
        let low = u16::from(self.state.memory[self.state.pc as usize + 1]);
        high << 8 | low
    }

    /// Each nonzero timer counts down by one; both floor at zero.
    fn tick_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors surfaced while loading a program image.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("program image is {size} bytes but only {capacity} fit at the load address")]
    TooLarge { size: usize, capacity: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
