//! Property tests for the invariants that hold over every operand value:
//! arithmetic flags, XOR blitting, stack discipline and timer clamping.

use proptest::prelude::*;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chip8_vm::constants::PROGRAM_START;
use chip8_vm::{Chip8, Instruction, State};

fn exec(word: u16, state: &State, pressed_keys: [u8; 16]) -> State {
    Instruction::decode(word).execute(state, pressed_keys, &mut StepRng::new(0, 0))
}

proptest! {
    #[test]
    fn add_with_carry_wraps_and_flags(a in any::<u8>(), b in any::<u8>()) {
        let mut state = State::new();
        state.v[0x1] = a;
        state.v[0x2] = b;
        let state = exec(0x8124, &state, [0; 16]);
        prop_assert_eq!(state.v[0x1], a.wrapping_add(b));
        prop_assert_eq!(state.v[0xF], u8::from(u16::from(a) + u16::from(b) > 0xFF));
    }

    #[test]
    fn sub_with_borrow_flags_strict_greater(a in any::<u8>(), b in any::<u8>()) {
        let mut state = State::new();
        state.v[0x1] = a;
        state.v[0x2] = b;
        let state = exec(0x8125, &state, [0; 16]);
        prop_assert_eq!(state.v[0x1], a.wrapping_sub(b));
        prop_assert_eq!(state.v[0xF], u8::from(a > b));
    }

    #[test]
    fn sub_reverse_flags_strict_greater(a in any::<u8>(), b in any::<u8>()) {
        let mut state = State::new();
        state.v[0x1] = a;
        state.v[0x2] = b;
        let state = exec(0x8127, &state, [0; 16]);
        prop_assert_eq!(state.v[0x1], b.wrapping_sub(a));
        prop_assert_eq!(state.v[0xF], u8::from(b > a));
    }

    #[test]
    fn shift_right_captures_the_shifted_out_bit(a in any::<u8>()) {
        let mut state = State::new();
        state.v[0x1] = a;
        let state = exec(0x8106, &state, [0; 16]);
        prop_assert_eq!(state.v[0x1], a >> 1);
        prop_assert_eq!(state.v[0xF], a & 0x1);
    }

    #[test]
    fn shift_left_captures_the_shifted_out_bit(a in any::<u8>()) {
        let mut state = State::new();
        state.v[0x1] = a;
        let state = exec(0x810E, &state, [0; 16]);
        prop_assert_eq!(state.v[0x1], a << 1);
        prop_assert_eq!(state.v[0xF], a >> 7);
    }

    #[test]
    fn add_immediate_wraps_and_leaves_the_flag_alone(a in any::<u8>(), kk in any::<u8>(), flag in any::<u8>()) {
        let mut state = State::new();
        state.v[0x1] = a;
        state.v[0xF] = flag;
        let state = exec(0x7100 | u16::from(kk), &state, [0; 16]);
        prop_assert_eq!(state.v[0x1], a.wrapping_add(kk));
        prop_assert_eq!(state.v[0xF], flag);
    }

    #[test]
    fn drawing_twice_restores_the_frame_buffer(
        sprite in proptest::collection::vec(any::<u8>(), 1..=15),
        x in any::<u8>(),
        y in any::<u8>(),
    ) {
        let mut state = State::new();
        state.memory[0x300..0x300 + sprite.len()].copy_from_slice(&sprite);
        state.i = 0x300;
        state.v[0x0] = x;
        state.v[0x1] = y;
        let word = 0xD010 | sprite.len() as u16;
        let once = exec(word, &state, [0; 16]);
        let twice = exec(word, &once, [0; 16]);
        prop_assert!(twice.frame_buffer[..] == state.frame_buffer[..]);
    }

    #[test]
    fn calls_then_returns_restore_pc_and_stack(
        addrs in proptest::collection::vec(0x200u16..0x1000, 1..=16),
    ) {
        let mut state = State::new();
        let original_pc = state.pc;
        for &addr in &addrs {
            state = exec(0x2000 | addr, &state, [0; 16]);
            prop_assert_eq!(state.pc, addr);
        }
        prop_assert_eq!(state.sp as usize, addrs.len());
        for _ in 0..addrs.len() {
            state = exec(0x00EE, &state, [0; 16]);
        }
        prop_assert_eq!(state.pc, original_pc);
        prop_assert_eq!(state.sp, 0);
    }

    #[test]
    fn bcd_stores_decimal_digits(value in any::<u8>()) {
        let mut state = State::new();
        state.v[0x1] = value;
        state.i = 0x300;
        let state = exec(0xF133, &state, [0; 16]);
        prop_assert_eq!(state.memory[0x300], value / 100);
        prop_assert_eq!(state.memory[0x301], value / 10 % 10);
        prop_assert_eq!(state.memory[0x302], value % 10);
    }

    #[test]
    fn block_store_then_load_round_trips_below_x(
        regs in proptest::collection::vec(any::<u8>(), 16),
        x in 0usize..16,
    ) {
        let mut state = State::new();
        state.v.copy_from_slice(&regs);
        state.i = 0x400;
        let word = 0xF055 | ((x as u16) << 8);
        let stored = exec(word, &state, [0; 16]);
        prop_assert_eq!(&stored.memory[0x400..0x400 + x], &regs[..x]);
        // the transfer stops short of Vx itself
        prop_assert_eq!(stored.memory[0x400 + x], 0);

        let mut target = State::new();
        target.i = 0x400;
        target.memory = stored.memory;
        let word = 0xF065 | ((x as u16) << 8);
        let loaded = exec(word, &target, [0; 16]);
        prop_assert_eq!(&loaded.v[..x], &regs[..x]);
        prop_assert_eq!(&loaded.v[x..], &target.v[x..]);
    }

    #[test]
    fn wait_for_key_takes_the_lowest_key_or_rewinds(keys in proptest::array::uniform16(any::<bool>())) {
        let mut pressed_keys = [0u8; 16];
        for (flag, &down) in pressed_keys.iter_mut().zip(keys.iter()) {
            *flag = u8::from(down);
        }
        let state = State::new();
        let after = exec(0xF10A, &state, pressed_keys);
        match keys.iter().position(|&down| down) {
            Some(lowest) => {
                prop_assert_eq!(after.v[0x1], lowest as u8);
                prop_assert_eq!(after.pc, state.pc);
            }
            None => prop_assert_eq!(after.pc, state.pc - 0x2),
        }
    }

    #[test]
    fn random_never_sets_bits_outside_the_mask(kk in any::<u8>(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = Instruction::decode(0xC100 | u16::from(kk)).execute(&State::new(), [0; 16], &mut rng);
        prop_assert_eq!(state.v[0x1] & !kk, 0);
    }

    #[test]
    fn timers_count_down_once_per_cycle_and_clamp(
        delay in any::<u8>(),
        sound in any::<u8>(),
        cycles in 0usize..600,
    ) {
        let mut chip8 = Chip8::with_seed(0);
        // fill the program region with harmless register loads
        for slot in chip8.state_mut().memory[PROGRAM_START..].chunks_exact_mut(2) {
            slot.copy_from_slice(&[0x61, 0x00]);
        }
        chip8.state_mut().delay_timer = delay;
        chip8.state_mut().sound_timer = sound;
        for _ in 0..cycles {
            chip8.cycle();
        }
        prop_assert_eq!(chip8.state().delay_timer as usize, (delay as usize).saturating_sub(cycles));
        prop_assert_eq!(chip8.state().sound_timer as usize, (sound as usize).saturating_sub(cycles));
    }
}
