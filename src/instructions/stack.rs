//! PHA/PHP/PLA/PLP.

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::flags::{set_nz, StatusFlags};

pub fn pha(cpu: &mut Cpu, _op: Operand) {
    cpu.push_u8(cpu.a);
}

/// Pushes P with bits 4 (B) and 5 (unused) forced to 1.
pub fn php(cpu: &mut Cpu, _op: Operand) {
    let pushed = cpu.p | StatusFlags::BREAK | StatusFlags::UNUSED;
    cpu.push_u8(pushed.bits());
}

pub fn pla(cpu: &mut Cpu, _op: Operand) {
    cpu.a = cpu.pull_u8();
    set_nz(&mut cpu.p, cpu.a);
}

/// Restores P from the stack, forcing bit 5 (unused) back to 1.
pub fn plp(cpu: &mut Cpu, _op: Operand) {
    let pulled = cpu.pull_u8();
    cpu.p = StatusFlags::from_bits_truncate(pulled) | StatusFlags::UNUSED;
}
