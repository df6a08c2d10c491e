//! The eight relative-addressed conditional branches.

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::flags::StatusFlags;

fn branch_if(cpu: &mut Cpu, op: Operand, condition: bool) {
    if condition {
        cpu.pc = op.address.expect("branch requires a relative target");
    }
}

pub fn bpl(cpu: &mut Cpu, op: Operand) {
    branch_if(cpu, op, !cpu.p.contains(StatusFlags::NEGATIVE));
}

pub fn bmi(cpu: &mut Cpu, op: Operand) {
    branch_if(cpu, op, cpu.p.contains(StatusFlags::NEGATIVE));
}

pub fn bvc(cpu: &mut Cpu, op: Operand) {
    branch_if(cpu, op, !cpu.p.contains(StatusFlags::OVERFLOW));
}

pub fn bvs(cpu: &mut Cpu, op: Operand) {
    branch_if(cpu, op, cpu.p.contains(StatusFlags::OVERFLOW));
}

pub fn bcc(cpu: &mut Cpu, op: Operand) {
    branch_if(cpu, op, !cpu.p.contains(StatusFlags::CARRY));
}

pub fn bcs(cpu: &mut Cpu, op: Operand) {
    branch_if(cpu, op, cpu.p.contains(StatusFlags::CARRY));
}

pub fn bne(cpu: &mut Cpu, op: Operand) {
    branch_if(cpu, op, !cpu.p.contains(StatusFlags::ZERO));
}

pub fn beq(cpu: &mut Cpu, op: Operand) {
    branch_if(cpu, op, cpu.p.contains(StatusFlags::ZERO));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beq_taken_scenario() {
        let mut cpu = Cpu::new();
        cpu.p.insert(StatusFlags::ZERO);
        cpu.pc = 0x8004;
        beq(&mut cpu, Operand { address: Some(0x8008), value: 0 });
        assert_eq!(cpu.pc, 0x8008);
    }

    #[test]
    fn bne_not_taken_leaves_pc_untouched() {
        let mut cpu = Cpu::new();
        cpu.p.insert(StatusFlags::ZERO);
        cpu.pc = 0x8004;
        bne(&mut cpu, Operand { address: Some(0x8008), value: 0 });
        assert_eq!(cpu.pc, 0x8004);
    }
}
