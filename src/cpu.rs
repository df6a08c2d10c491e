//! The CPU: registers, flat 64KiB memory, framebuffer, keyboard latch, and
//! the reset/step/interrupt sequencing that ties them together.

use crate::addressing::resolve;
use crate::flags::StatusFlags;
use crate::opcodes::OPCODES;
use crate::palette::{FRAMEBUFFER_BASE, FRAMEBUFFER_LEN, PALETTE};
use crate::rng::{OsRandomSource, RandomByteSource};

pub const STACK_BASE: u16 = 0x0100;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const NMI_VECTOR: u16 = 0xFFFA;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// The reserved read address that returns a random byte (instruction-stream
/// fetches only, see the addressing resolver's doc comment).
const RNG_MAGIC_ADDRESS: u16 = 0x00FE;
/// The reserved read address that returns the keyboard latch.
const KEYBOARD_MAGIC_ADDRESS: u16 = 0x00FF;

pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub p: StatusFlags,

    memory: Box<[u8; 0x10000]>,
    pub pixels: Box<[u32; FRAMEBUFFER_LEN]>,
    pub keyboard_latch: u8,
    rng: Box<dyn RandomByteSource>,

    halted: bool,
    last_write: Option<u16>,
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_rng(Box::new(OsRandomSource::new()))
    }

    pub fn with_rng(rng: Box<dyn RandomByteSource>) -> Self {
        Cpu {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: 0,
            p: StatusFlags::reset_value(),
            memory: Box::new([0; 0x10000]),
            pixels: Box::new([0; FRAMEBUFFER_LEN]),
            keyboard_latch: 0,
            rng,
            halted: false,
            last_write: None,
        }
    }

    /// Zeroes registers and memory, sets SP=0xFF, P=0x20, and loads PC from
    /// the reset vector. Does not reseed the RNG (see DESIGN.md open question 8).
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFF;
        self.p = StatusFlags::reset_value();
        for byte in self.memory.iter_mut() {
            *byte = 0;
        }
        self.keyboard_latch = 0;
        self.halted = false;
        self.last_write = None;
        self.pc = self.read_u16(RESET_VECTOR);
    }

    pub fn is_halted(&self) -> bool {
        self.halted || self.pc == 0xFFFF
    }

    /// Raw memory read, never intercepted by the magic addresses. Used for
    /// dereferencing an already-resolved effective address.
    pub fn read_u8(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    pub fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read_u8(addr) as u16;
        let hi = self.read_u8(addr.wrapping_add(1)) as u16;
        lo | (hi << 8)
    }

    pub fn write_u8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
        self.last_write = Some(addr);
    }

    pub fn write_u16(&mut self, addr: u16, value: u16) {
        self.write_u8(addr, (value & 0xFF) as u8);
        self.write_u8(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Fetches the next instruction-stream byte, advancing PC. Intercepts
    /// the 0x00FE (RNG) and 0x00FF (keyboard) magic addresses.
    pub fn next_u8(&mut self) -> u8 {
        let addr = self.pc;
        self.pc = self.pc.wrapping_add(1);
        match addr {
            RNG_MAGIC_ADDRESS => self.rng.next_byte(),
            KEYBOARD_MAGIC_ADDRESS => self.keyboard_latch,
            _ => self.read_u8(addr),
        }
    }

    /// Fetches the next two instruction-stream bytes as a little-endian
    /// word, advancing PC by 2. Does not intercept the magic addresses
    /// (matches the source's `fetch_word`, used only by absolute-family
    /// addressing modes).
    pub fn next_u16(&mut self) -> u16 {
        let lo = self.read_u8(self.pc) as u16;
        let hi = self.read_u8(self.pc.wrapping_add(1)) as u16;
        self.pc = self.pc.wrapping_add(2);
        lo | (hi << 8)
    }

    pub fn push_u8(&mut self, value: u8) {
        let addr = STACK_BASE + self.sp as u16;
        self.write_u8(addr, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub fn pull_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let addr = STACK_BASE + self.sp as u16;
        self.read_u8(addr)
    }

    pub fn push_u16(&mut self, value: u16) {
        self.push_u8((value >> 8) as u8);
        self.push_u8((value & 0xFF) as u8);
    }

    pub fn pull_u16(&mut self) -> u16 {
        let lo = self.pull_u8() as u16;
        let hi = self.pull_u8() as u16;
        lo | (hi << 8)
    }

    pub fn halt(&mut self) {
        self.halted = true;
        self.pc = 0xFFFF;
    }

    /// Only honored when I=0. The source never wires this up; exposed for
    /// hosts that want interrupt fidelity.
    pub fn raise_irq(&mut self) {
        if self.p.contains(StatusFlags::INTERRUPT_DISABLE) {
            return;
        }
        let pc = self.pc;
        self.push_u16(pc);
        let pushed = (self.p & !StatusFlags::BREAK) | StatusFlags::UNUSED;
        self.push_u8(pushed.bits());
        self.p.insert(StatusFlags::INTERRUPT_DISABLE);
        self.pc = self.read_u16(IRQ_VECTOR);
    }

    pub fn raise_nmi(&mut self) {
        let pc = self.pc;
        self.push_u16(pc);
        let pushed = (self.p & !StatusFlags::BREAK) | StatusFlags::UNUSED;
        self.push_u8(pushed.bits());
        self.p.insert(StatusFlags::INTERRUPT_DISABLE);
        self.pc = self.read_u16(NMI_VECTOR);
    }

    /// Fetches one opcode, dispatches it, and syncs the framebuffer if the
    /// instruction wrote into the framebuffer window.
    pub fn step(&mut self) {
        if self.is_halted() {
            return;
        }
        self.last_write = None;
        let opcode = self.next_u8();
        match OPCODES.get(&opcode) {
            Some(entry) => {
                log::trace!("{:04X}: {:02X} {}", self.pc.wrapping_sub(1), opcode, entry.mnemonic);
                let operand = resolve(self, entry.mode);
                (entry.handler)(self, operand);
            }
            None => {
                log::warn!("unknown opcode {:02X} at {:04X}, halting", opcode, self.pc.wrapping_sub(1));
                self.halt();
            }
        }
        self.sync_framebuffer();
    }

    fn sync_framebuffer(&mut self) {
        if let Some(addr) = self.last_write {
            if addr >= FRAMEBUFFER_BASE && (addr as usize) < FRAMEBUFFER_BASE as usize + FRAMEBUFFER_LEN {
                let index = (addr - FRAMEBUFFER_BASE) as usize;
                let palette_index = (self.read_u8(addr) & 0x0F) as usize;
                self.pixels[index] = PALETTE[palette_index];
            }
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandomSource;

    #[test]
    fn reset_sets_sp_p_and_pc_from_vector() {
        let mut cpu = Cpu::new();
        cpu.write_u16(RESET_VECTOR, 0xC000);
        cpu.reset();
        assert_eq!(cpu.sp, 0xFF);
        assert_eq!(cpu.p.bits(), 0x20);
        assert_eq!(cpu.pc, 0xC000);
    }

    #[test]
    fn push_pull_u8_round_trips_and_moves_sp() {
        let mut cpu = Cpu::new();
        cpu.reset();
        let sp_before = cpu.sp;
        cpu.push_u8(0x42);
        assert_eq!(cpu.sp, sp_before.wrapping_sub(1));
        let value = cpu.pull_u8();
        assert_eq!(value, 0x42);
        assert_eq!(cpu.sp, sp_before);
    }

    #[test]
    fn magic_addresses_only_intercepted_on_instruction_stream_fetch() {
        let mut cpu = Cpu::new();
        cpu.keyboard_latch = 0x41;
        cpu.pc = 0x00FF;
        assert_eq!(cpu.next_u8(), 0x41);
        // a plain dereference of 0x00FF is not intercepted.
        cpu.write_u8(0x00FF, 0x99);
        assert_eq!(cpu.read_u8(0x00FF), 0x99);
    }

    #[test]
    fn step_halts_on_kil_opcode() {
        let mut cpu = Cpu::new();
        cpu.reset();
        cpu.pc = 0x8000;
        cpu.write_u8(0x8000, 0x02);
        cpu.step();
        assert!(cpu.is_halted());
        assert_eq!(cpu.pc, 0xFFFF);
    }

    #[test]
    fn framebuffer_write_updates_pixel() {
        let mut cpu = Cpu::new();
        cpu.reset();
        cpu.pc = 0x8000;
        // LDA #$02 ; STA $0205
        cpu.write_u8(0x8000, 0xA9);
        cpu.write_u8(0x8001, 0x02);
        cpu.write_u8(0x8002, 0x8D);
        cpu.write_u16(0x8003, 0x0205);
        cpu.step();
        cpu.step();
        assert_eq!(cpu.pixels[5], PALETTE[2]);
    }

    #[test]
    fn seeded_rng_feeds_magic_address() {
        let mut cpu = Cpu::with_rng(Box::new(SeededRandomSource::new(7)));
        cpu.pc = 0x00FE;
        let first = cpu.next_u8();
        let mut other = Cpu::with_rng(Box::new(SeededRandomSource::new(7)));
        other.pc = 0x00FE;
        assert_eq!(other.next_u8(), first);
    }
}
