//! LDA/LDX/LDY, STA/STX/STY, and the register-transfer family.

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::flags::set_nz;

pub fn lda(cpu: &mut Cpu, op: Operand) {
    cpu.a = op.value;
    set_nz(&mut cpu.p, cpu.a);
}

pub fn ldx(cpu: &mut Cpu, op: Operand) {
    cpu.x = op.value;
    set_nz(&mut cpu.p, cpu.x);
}

pub fn ldy(cpu: &mut Cpu, op: Operand) {
    cpu.y = op.value;
    set_nz(&mut cpu.p, cpu.y);
}

pub fn sta(cpu: &mut Cpu, op: Operand) {
    cpu.write_u8(op.address.expect("STA requires a memory address"), cpu.a);
}

pub fn stx(cpu: &mut Cpu, op: Operand) {
    cpu.write_u8(op.address.expect("STX requires a memory address"), cpu.x);
}

pub fn sty(cpu: &mut Cpu, op: Operand) {
    cpu.write_u8(op.address.expect("STY requires a memory address"), cpu.y);
}

pub fn tax(cpu: &mut Cpu, _op: Operand) {
    cpu.x = cpu.a;
    set_nz(&mut cpu.p, cpu.x);
}

pub fn tay(cpu: &mut Cpu, _op: Operand) {
    cpu.y = cpu.a;
    set_nz(&mut cpu.p, cpu.y);
}

pub fn txa(cpu: &mut Cpu, _op: Operand) {
    cpu.a = cpu.x;
    set_nz(&mut cpu.p, cpu.a);
}

pub fn tya(cpu: &mut Cpu, _op: Operand) {
    cpu.a = cpu.y;
    set_nz(&mut cpu.p, cpu.a);
}

pub fn tsx(cpu: &mut Cpu, _op: Operand) {
    cpu.x = cpu.sp;
    set_nz(&mut cpu.p, cpu.x);
}

pub fn txs(cpu: &mut Cpu, _op: Operand) {
    cpu.sp = cpu.x;
}
