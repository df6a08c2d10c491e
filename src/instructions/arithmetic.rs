//! ADC, SBC, INC/DEC family, and CMP/CPX/CPY.

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::flags::{compare, set_nz};

pub fn adc(cpu: &mut Cpu, op: Operand) {
    cpu.a = crate::flags::adc(&mut cpu.p, cpu.a, op.value);
}

pub fn sbc(cpu: &mut Cpu, op: Operand) {
    cpu.a = crate::flags::sbc(&mut cpu.p, cpu.a, op.value);
}

pub fn inc(cpu: &mut Cpu, op: Operand) {
    let addr = op.address.expect("INC requires a memory address");
    let result = op.value.wrapping_add(1);
    cpu.write_u8(addr, result);
    set_nz(&mut cpu.p, result);
}

pub fn dec(cpu: &mut Cpu, op: Operand) {
    let addr = op.address.expect("DEC requires a memory address");
    let result = op.value.wrapping_sub(1);
    cpu.write_u8(addr, result);
    set_nz(&mut cpu.p, result);
}

pub fn inx(cpu: &mut Cpu, _op: Operand) {
    cpu.x = cpu.x.wrapping_add(1);
    set_nz(&mut cpu.p, cpu.x);
}

pub fn dex(cpu: &mut Cpu, _op: Operand) {
    cpu.x = cpu.x.wrapping_sub(1);
    set_nz(&mut cpu.p, cpu.x);
}

pub fn iny(cpu: &mut Cpu, _op: Operand) {
    cpu.y = cpu.y.wrapping_add(1);
    set_nz(&mut cpu.p, cpu.y);
}

pub fn dey(cpu: &mut Cpu, _op: Operand) {
    cpu.y = cpu.y.wrapping_sub(1);
    set_nz(&mut cpu.p, cpu.y);
}

pub fn cmp(cpu: &mut Cpu, op: Operand) {
    compare(&mut cpu.p, cpu.a, op.value);
}

pub fn cpx(cpu: &mut Cpu, op: Operand) {
    compare(&mut cpu.p, cpu.x, op.value);
}

pub fn cpy(cpu: &mut Cpu, op: Operand) {
    compare(&mut cpu.p, cpu.y, op.value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::StatusFlags;

    #[test]
    fn adc_carry_overflow_scenario() {
        let mut cpu = Cpu::new();
        cpu.a = 0x50;
        adc(&mut cpu, Operand { address: None, value: 0x50 });
        assert_eq!(cpu.a, 0xA0);
        assert!(!cpu.p.contains(StatusFlags::CARRY));
        assert!(cpu.p.contains(StatusFlags::OVERFLOW));
    }

    #[test]
    fn sbc_borrow_scenario() {
        let mut cpu = Cpu::new();
        cpu.a = 0x50;
        cpu.p.insert(StatusFlags::CARRY);
        sbc(&mut cpu, Operand { address: None, value: 0xF0 });
        assert_eq!(cpu.a, 0x60);
        assert!(!cpu.p.contains(StatusFlags::CARRY));
    }

    #[test]
    fn inc_dec_wrap_mod_256() {
        let mut cpu = Cpu::new();
        cpu.write_u8(0x10, 0xFF);
        inc(&mut cpu, Operand { address: Some(0x10), value: 0xFF });
        assert_eq!(cpu.read_u8(0x10), 0x00);
        dec(&mut cpu, Operand { address: Some(0x10), value: 0x00 });
        assert_eq!(cpu.read_u8(0x10), 0xFF);
    }

    #[test]
    fn cpx_sets_carry_when_greater_or_equal() {
        let mut cpu = Cpu::new();
        cpu.x = 0x10;
        cpx(&mut cpu, Operand { address: None, value: 0x10 });
        assert!(cpu.p.contains(StatusFlags::CARRY));
        assert!(cpu.p.contains(StatusFlags::ZERO));
    }
}
