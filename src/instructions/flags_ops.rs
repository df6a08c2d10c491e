//! The flag-only instructions: CLC, SEC, CLI, SEI, CLD, SED, CLV.

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::flags::StatusFlags;

pub fn clc(cpu: &mut Cpu, _op: Operand) {
    cpu.p.remove(StatusFlags::CARRY);
}

pub fn sec(cpu: &mut Cpu, _op: Operand) {
    cpu.p.insert(StatusFlags::CARRY);
}

pub fn cli(cpu: &mut Cpu, _op: Operand) {
    cpu.p.remove(StatusFlags::INTERRUPT_DISABLE);
}

pub fn sei(cpu: &mut Cpu, _op: Operand) {
    cpu.p.insert(StatusFlags::INTERRUPT_DISABLE);
}

pub fn cld(cpu: &mut Cpu, _op: Operand) {
    cpu.p.remove(StatusFlags::DECIMAL);
}

pub fn sed(cpu: &mut Cpu, _op: Operand) {
    cpu.p.insert(StatusFlags::DECIMAL);
}

pub fn clv(cpu: &mut Cpu, _op: Operand) {
    cpu.p.remove(StatusFlags::OVERFLOW);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_clear_each_flag() {
        let mut cpu = Cpu::new();
        sec(&mut cpu, Operand { address: None, value: 0 });
        assert!(cpu.p.contains(StatusFlags::CARRY));
        clc(&mut cpu, Operand { address: None, value: 0 });
        assert!(!cpu.p.contains(StatusFlags::CARRY));

        sei(&mut cpu, Operand { address: None, value: 0 });
        assert!(cpu.p.contains(StatusFlags::INTERRUPT_DISABLE));
        cli(&mut cpu, Operand { address: None, value: 0 });
        assert!(!cpu.p.contains(StatusFlags::INTERRUPT_DISABLE));

        sed(&mut cpu, Operand { address: None, value: 0 });
        assert!(cpu.p.contains(StatusFlags::DECIMAL));
        cld(&mut cpu, Operand { address: None, value: 0 });
        assert!(!cpu.p.contains(StatusFlags::DECIMAL));
    }

    #[test]
    fn clv_clears_overflow_only() {
        let mut cpu = Cpu::new();
        cpu.p.insert(StatusFlags::OVERFLOW | StatusFlags::CARRY);
        clv(&mut cpu, Operand { address: None, value: 0 });
        assert!(!cpu.p.contains(StatusFlags::OVERFLOW));
        assert!(cpu.p.contains(StatusFlags::CARRY));
    }
}
