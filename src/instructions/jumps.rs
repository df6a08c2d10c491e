//! JMP, JSR, RTS, RTI, BRK.

use crate::addressing::Operand;
use crate::cpu::{Cpu, IRQ_VECTOR};
use crate::flags::StatusFlags;

pub fn jmp(cpu: &mut Cpu, op: Operand) {
    cpu.pc = op.address.expect("JMP requires a target address");
}

/// Pushes the address of the instruction's last operand byte (PC, which by
/// the time this handler runs has already been advanced past both operand
/// bytes by the resolver, minus one), then jumps. See DESIGN.md open
/// question 3 for why this differs from the literal source.
pub fn jsr(cpu: &mut Cpu, op: Operand) {
    let return_to = cpu.pc.wrapping_sub(1);
    cpu.push_u16(return_to);
    cpu.pc = op.address.expect("JSR requires a target address");
}

pub fn rts(cpu: &mut Cpu, _op: Operand) {
    let addr = cpu.pull_u16();
    cpu.pc = addr.wrapping_add(1);
}

pub fn rti(cpu: &mut Cpu, _op: Operand) {
    let pulled = cpu.pull_u8();
    cpu.p = StatusFlags::from_bits_truncate(pulled) | StatusFlags::UNUSED;
    cpu.pc = cpu.pull_u16();
}

/// Pushes (PC+1) high then low — BRK behaves as a 2-byte instruction,
/// skipping an unread signature byte, matching real hardware and the
/// concrete scenario in spec §8 rather than the literal source (see
/// DESIGN.md open question 4).
pub fn brk(cpu: &mut Cpu, _op: Operand) {
    let return_to = cpu.pc.wrapping_add(1);
    cpu.push_u16(return_to);
    let pushed = cpu.p | StatusFlags::BREAK | StatusFlags::UNUSED;
    cpu.push_u8(pushed.bits());
    cpu.p.insert(StatusFlags::INTERRUPT_DISABLE);
    cpu.pc = cpu.read_u16(IRQ_VECTOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsr_then_rts_round_trip() {
        let mut cpu = Cpu::new();
        cpu.reset();
        cpu.pc = 0x8003; // resolver has already consumed JSR's 2 operand bytes
        let sp_before = cpu.sp;
        jsr(&mut cpu, Operand { address: Some(0x9000), value: 0 });
        assert_eq!(cpu.pc, 0x9000);
        rts(&mut cpu, Operand { address: None, value: 0 });
        assert_eq!(cpu.pc, 0x8003);
        assert_eq!(cpu.sp, sp_before);
    }

    #[test]
    fn jsr_pushes_address_of_last_operand_byte() {
        let mut cpu = Cpu::new();
        cpu.reset();
        cpu.pc = 0x8003;
        jsr(&mut cpu, Operand { address: Some(0x9000), value: 0 });
        let addr = cpu.pull_u16();
        assert_eq!(addr, 0x8002);
    }

    #[test]
    fn brk_pushes_pc_plus_two_and_vectors() {
        let mut cpu = Cpu::new();
        cpu.reset();
        cpu.write_u16(IRQ_VECTOR, 0x9000);
        cpu.pc = 0x8001; // one past the BRK opcode byte itself
        brk(&mut cpu, Operand { address: None, value: 0 });
        assert_eq!(cpu.pc, 0x9000);
        assert!(cpu.p.contains(StatusFlags::INTERRUPT_DISABLE));
        let pushed_p = cpu.pull_u8();
        assert!(pushed_p & StatusFlags::BREAK.bits() != 0);
        let pushed_pc = cpu.pull_u16();
        assert_eq!(pushed_pc, 0x8002);
    }
}
