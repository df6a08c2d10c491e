//! ASL, LSR, ROL, ROR — each operates on the accumulator or a memory cell,
//! chosen by whether `Operand::address` is present.

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::flags::{set_nz, StatusFlags};

fn write_back(cpu: &mut Cpu, op: &Operand, result: u8) {
    match op.address {
        Some(addr) => cpu.write_u8(addr, result),
        None => cpu.a = result,
    }
}

pub fn asl(cpu: &mut Cpu, op: Operand) {
    let value = op.value;
    cpu.p.set(StatusFlags::CARRY, value & 0x80 != 0);
    let result = value << 1;
    write_back(cpu, &op, result);
    set_nz(&mut cpu.p, result);
}

pub fn lsr(cpu: &mut Cpu, op: Operand) {
    let value = op.value;
    cpu.p.set(StatusFlags::CARRY, value & 0x01 != 0);
    let result = value >> 1;
    write_back(cpu, &op, result);
    set_nz(&mut cpu.p, result);
}

pub fn rol(cpu: &mut Cpu, op: Operand) {
    let value = op.value;
    let carry_in: u8 = if cpu.p.contains(StatusFlags::CARRY) { 1 } else { 0 };
    cpu.p.set(StatusFlags::CARRY, value & 0x80 != 0);
    let result = (value << 1) | carry_in;
    write_back(cpu, &op, result);
    set_nz(&mut cpu.p, result);
}

pub fn ror(cpu: &mut Cpu, op: Operand) {
    let value = op.value;
    let carry_in: u8 = if cpu.p.contains(StatusFlags::CARRY) { 1 } else { 0 };
    cpu.p.set(StatusFlags::CARRY, value & 0x01 != 0);
    let result = (value >> 1) | (carry_in << 7);
    write_back(cpu, &op, result);
    set_nz(&mut cpu.p, result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asl_memory_shifts_and_sets_carry() {
        let mut cpu = Cpu::new();
        cpu.write_u8(0x10, 0x81);
        asl(&mut cpu, Operand { address: Some(0x10), value: 0x81 });
        assert_eq!(cpu.read_u8(0x10), 0x02);
        assert!(cpu.p.contains(StatusFlags::CARRY));
    }

    #[test]
    fn ror_accumulator_rotates_carry_into_bit7() {
        let mut cpu = Cpu::new();
        cpu.a = 0x01;
        cpu.p.insert(StatusFlags::CARRY);
        ror(&mut cpu, Operand { address: None, value: cpu.a });
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.p.contains(StatusFlags::CARRY));
    }

    #[test]
    fn lsr_sets_carry_from_bit0() {
        let mut cpu = Cpu::new();
        lsr(&mut cpu, Operand { address: None, value: 0x01 });
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.p.contains(StatusFlags::CARRY));
        assert!(cpu.p.contains(StatusFlags::ZERO));
    }
}
