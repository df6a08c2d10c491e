//! The 256-entry opcode dispatch table: a compile-time perfect hash map from
//! opcode byte to (mnemonic, addressing mode, handler), reusing the
//! teacher's `phf_map!`-based dispatch shape (see `DESIGN.md`). Unlike the
//! teacher's `Operand`, this table drops the `bytes`/`cycles` fields —
//! cycle-accurate timing is an explicit non-goal, and PC advancement is a
//! side effect of the addressing resolver consuming operand bytes directly.

use phf::phf_map;

use crate::addressing::{AddressingMode as M, Operand};
use crate::cpu::Cpu;
use crate::instructions::*;

pub type Handler = fn(&mut Cpu, Operand);

pub struct OpEntry {
    pub mnemonic: &'static str,
    pub mode: M,
    pub handler: Handler,
}

macro_rules! op {
    ($mnemonic:expr, $mode:expr, $handler:expr) => {
        OpEntry {
            mnemonic: $mnemonic,
            mode: $mode,
            handler: $handler,
        }
    };
}

pub static OPCODES: phf::Map<u8, OpEntry> = phf_map! {
    0x00u8 => op!("BRK", M::Implicit, jumps::brk),
    0x01u8 => op!("ORA", M::IndirectX, logical::ora),
    0x02u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0x03u8 => op!("SLO", M::IndirectX, illegal_rmw::slo),
    0x04u8 => op!("NOP", M::ZeroPage, nop_kil::nop),
    0x05u8 => op!("ORA", M::ZeroPage, logical::ora),
    0x06u8 => op!("ASL", M::ZeroPage, shifts::asl),
    0x07u8 => op!("SLO", M::ZeroPage, illegal_rmw::slo),
    0x08u8 => op!("PHP", M::Implicit, stack::php),
    0x09u8 => op!("ORA", M::Immediate, logical::ora),
    0x0Au8 => op!("ASL", M::Accumulator, shifts::asl),
    0x0Bu8 => op!("ANC", M::Immediate, illegal_misc::anc),
    0x0Cu8 => op!("NOP", M::Absolute, nop_kil::nop),
    0x0Du8 => op!("ORA", M::Absolute, logical::ora),
    0x0Eu8 => op!("ASL", M::Absolute, shifts::asl),
    0x0Fu8 => op!("SLO", M::Absolute, illegal_rmw::slo),

    0x10u8 => op!("BPL", M::Relative, branches::bpl),
    0x11u8 => op!("ORA", M::IndirectY, logical::ora),
    0x12u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0x13u8 => op!("SLO", M::IndirectY, illegal_rmw::slo),
    0x14u8 => op!("NOP", M::ZeroPageX, nop_kil::nop),
    0x15u8 => op!("ORA", M::ZeroPageX, logical::ora),
    0x16u8 => op!("ASL", M::ZeroPageX, shifts::asl),
    0x17u8 => op!("SLO", M::ZeroPageX, illegal_rmw::slo),
    0x18u8 => op!("CLC", M::Implicit, flags_ops::clc),
    0x19u8 => op!("ORA", M::AbsoluteY, logical::ora),
    0x1Au8 => op!("NOP", M::Implicit, nop_kil::nop),
    0x1Bu8 => op!("SLO", M::AbsoluteY, illegal_rmw::slo),
    0x1Cu8 => op!("NOP", M::AbsoluteX, nop_kil::nop),
    0x1Du8 => op!("ORA", M::AbsoluteX, logical::ora),
    0x1Eu8 => op!("ASL", M::AbsoluteX, shifts::asl),
    0x1Fu8 => op!("SLO", M::AbsoluteX, illegal_rmw::slo),

    0x20u8 => op!("JSR", M::Absolute, jumps::jsr),
    0x21u8 => op!("AND", M::IndirectX, logical::and),
    0x22u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0x23u8 => op!("RLA", M::IndirectX, illegal_rmw::rla),
    0x24u8 => op!("BIT", M::ZeroPage, logical::bit),
    0x25u8 => op!("AND", M::ZeroPage, logical::and),
    0x26u8 => op!("ROL", M::ZeroPage, shifts::rol),
    0x27u8 => op!("RLA", M::ZeroPage, illegal_rmw::rla),
    0x28u8 => op!("PLP", M::Implicit, stack::plp),
    0x29u8 => op!("AND", M::Immediate, logical::and),
    0x2Au8 => op!("ROL", M::Accumulator, shifts::rol),
    0x2Bu8 => op!("ANC", M::Immediate, illegal_misc::anc),
    0x2Cu8 => op!("BIT", M::Absolute, logical::bit),
    0x2Du8 => op!("AND", M::Absolute, logical::and),
    0x2Eu8 => op!("ROL", M::Absolute, shifts::rol),
    0x2Fu8 => op!("RLA", M::Absolute, illegal_rmw::rla),

    0x30u8 => op!("BMI", M::Relative, branches::bmi),
    0x31u8 => op!("AND", M::IndirectY, logical::and),
    0x32u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0x33u8 => op!("RLA", M::IndirectY, illegal_rmw::rla),
    0x34u8 => op!("NOP", M::ZeroPageX, nop_kil::nop),
    0x35u8 => op!("AND", M::ZeroPageX, logical::and),
    0x36u8 => op!("ROL", M::ZeroPageX, shifts::rol),
    0x37u8 => op!("RLA", M::ZeroPageX, illegal_rmw::rla),
    0x38u8 => op!("SEC", M::Implicit, flags_ops::sec),
    0x39u8 => op!("AND", M::AbsoluteY, logical::and),
    0x3Au8 => op!("NOP", M::Implicit, nop_kil::nop),
    0x3Bu8 => op!("RLA", M::AbsoluteY, illegal_rmw::rla),
    0x3Cu8 => op!("NOP", M::AbsoluteX, nop_kil::nop),
    0x3Du8 => op!("AND", M::AbsoluteX, logical::and),
    0x3Eu8 => op!("ROL", M::AbsoluteX, shifts::rol),
    0x3Fu8 => op!("RLA", M::AbsoluteX, illegal_rmw::rla),

    0x40u8 => op!("RTI", M::Implicit, jumps::rti),
    0x41u8 => op!("EOR", M::IndirectX, logical::eor),
    0x42u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0x43u8 => op!("SRE", M::IndirectX, illegal_rmw::sre),
    0x44u8 => op!("NOP", M::ZeroPage, nop_kil::nop),
    0x45u8 => op!("EOR", M::ZeroPage, logical::eor),
    0x46u8 => op!("LSR", M::ZeroPage, shifts::lsr),
    0x47u8 => op!("SRE", M::ZeroPage, illegal_rmw::sre),
    0x48u8 => op!("PHA", M::Implicit, stack::pha),
    0x49u8 => op!("EOR", M::Immediate, logical::eor),
    0x4Au8 => op!("LSR", M::Accumulator, shifts::lsr),
    0x4Bu8 => op!("ALR", M::Immediate, illegal_misc::alr),
    0x4Cu8 => op!("JMP", M::Absolute, jumps::jmp),
    0x4Du8 => op!("EOR", M::Absolute, logical::eor),
    0x4Eu8 => op!("LSR", M::Absolute, shifts::lsr),
    0x4Fu8 => op!("SRE", M::Absolute, illegal_rmw::sre),

    0x50u8 => op!("BVC", M::Relative, branches::bvc),
    0x51u8 => op!("EOR", M::IndirectY, logical::eor),
    0x52u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0x53u8 => op!("SRE", M::IndirectY, illegal_rmw::sre),
    0x54u8 => op!("NOP", M::ZeroPageX, nop_kil::nop),
    0x55u8 => op!("EOR", M::ZeroPageX, logical::eor),
    0x56u8 => op!("LSR", M::ZeroPageX, shifts::lsr),
    0x57u8 => op!("SRE", M::ZeroPageX, illegal_rmw::sre),
    0x58u8 => op!("CLI", M::Implicit, flags_ops::cli),
    0x59u8 => op!("EOR", M::AbsoluteY, logical::eor),
    0x5Au8 => op!("NOP", M::Implicit, nop_kil::nop),
    0x5Bu8 => op!("SRE", M::AbsoluteY, illegal_rmw::sre),
    0x5Cu8 => op!("NOP", M::AbsoluteX, nop_kil::nop),
    0x5Du8 => op!("EOR", M::AbsoluteX, logical::eor),
    0x5Eu8 => op!("LSR", M::AbsoluteX, shifts::lsr),
    0x5Fu8 => op!("SRE", M::AbsoluteX, illegal_rmw::sre),

    0x60u8 => op!("RTS", M::Implicit, jumps::rts),
    0x61u8 => op!("ADC", M::IndirectX, arithmetic::adc),
    0x62u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0x63u8 => op!("RRA", M::IndirectX, illegal_rmw::rra),
    0x64u8 => op!("NOP", M::ZeroPage, nop_kil::nop),
    0x65u8 => op!("ADC", M::ZeroPage, arithmetic::adc),
    0x66u8 => op!("ROR", M::ZeroPage, shifts::ror),
    0x67u8 => op!("RRA", M::ZeroPage, illegal_rmw::rra),
    0x68u8 => op!("PLA", M::Implicit, stack::pla),
    0x69u8 => op!("ADC", M::Immediate, arithmetic::adc),
    0x6Au8 => op!("ROR", M::Accumulator, shifts::ror),
    0x6Bu8 => op!("ARR", M::Immediate, illegal_misc::arr),
    0x6Cu8 => op!("JMP", M::Indirect, jumps::jmp),
    0x6Du8 => op!("ADC", M::Absolute, arithmetic::adc),
    0x6Eu8 => op!("ROR", M::Absolute, shifts::ror),
    0x6Fu8 => op!("RRA", M::Absolute, illegal_rmw::rra),

    0x70u8 => op!("BVS", M::Relative, branches::bvs),
    0x71u8 => op!("ADC", M::IndirectY, arithmetic::adc),
    0x72u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0x73u8 => op!("RRA", M::IndirectY, illegal_rmw::rra),
    0x74u8 => op!("NOP", M::ZeroPageX, nop_kil::nop),
    0x75u8 => op!("ADC", M::ZeroPageX, arithmetic::adc),
    0x76u8 => op!("ROR", M::ZeroPageX, shifts::ror),
    0x77u8 => op!("RRA", M::ZeroPageX, illegal_rmw::rra),
    0x78u8 => op!("SEI", M::Implicit, flags_ops::sei),
    0x79u8 => op!("ADC", M::AbsoluteY, arithmetic::adc),
    0x7Au8 => op!("NOP", M::Implicit, nop_kil::nop),
    0x7Bu8 => op!("RRA", M::AbsoluteY, illegal_rmw::rra),
    0x7Cu8 => op!("NOP", M::AbsoluteX, nop_kil::nop),
    0x7Du8 => op!("ADC", M::AbsoluteX, arithmetic::adc),
    0x7Eu8 => op!("ROR", M::AbsoluteX, shifts::ror),
    0x7Fu8 => op!("RRA", M::AbsoluteX, illegal_rmw::rra),

    0x80u8 => op!("NOP", M::Immediate, nop_kil::nop),
    0x81u8 => op!("STA", M::IndirectX, loads_stores::sta),
    0x82u8 => op!("NOP", M::Immediate, nop_kil::nop),
    0x83u8 => op!("SAX", M::IndirectX, illegal_misc::sax),
    0x84u8 => op!("STY", M::ZeroPage, loads_stores::sty),
    0x85u8 => op!("STA", M::ZeroPage, loads_stores::sta),
    0x86u8 => op!("STX", M::ZeroPage, loads_stores::stx),
    0x87u8 => op!("SAX", M::ZeroPage, illegal_misc::sax),
    0x88u8 => op!("DEY", M::Implicit, arithmetic::dey),
    0x89u8 => op!("NOP", M::Immediate, nop_kil::nop),
    0x8Au8 => op!("TXA", M::Implicit, loads_stores::txa),
    0x8Bu8 => op!("XAA", M::Immediate, illegal_misc::xaa),
    0x8Cu8 => op!("STY", M::Absolute, loads_stores::sty),
    0x8Du8 => op!("STA", M::Absolute, loads_stores::sta),
    0x8Eu8 => op!("STX", M::Absolute, loads_stores::stx),
    0x8Fu8 => op!("SAX", M::Absolute, illegal_misc::sax),

    0x90u8 => op!("BCC", M::Relative, branches::bcc),
    0x91u8 => op!("STA", M::IndirectY, loads_stores::sta),
    0x92u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0x93u8 => op!("AHX", M::IndirectY, illegal_misc::ahx),
    0x94u8 => op!("STY", M::ZeroPageX, loads_stores::sty),
    0x95u8 => op!("STA", M::ZeroPageX, loads_stores::sta),
    0x96u8 => op!("STX", M::ZeroPageY, loads_stores::stx),
    0x97u8 => op!("SAX", M::ZeroPageY, illegal_misc::sax),
    0x98u8 => op!("TYA", M::Implicit, loads_stores::tya),
    0x99u8 => op!("STA", M::AbsoluteY, loads_stores::sta),
    0x9Au8 => op!("TXS", M::Implicit, loads_stores::txs),
    0x9Bu8 => op!("TAS", M::AbsoluteY, illegal_misc::tas),
    0x9Cu8 => op!("SHY", M::AbsoluteX, illegal_misc::shy),
    0x9Du8 => op!("STA", M::AbsoluteX, loads_stores::sta),
    0x9Eu8 => op!("SHX", M::AbsoluteY, illegal_misc::shx),
    0x9Fu8 => op!("AHX", M::AbsoluteY, illegal_misc::ahx),

    0xA0u8 => op!("LDY", M::Immediate, loads_stores::ldy),
    0xA1u8 => op!("LDA", M::IndirectX, loads_stores::lda),
    0xA2u8 => op!("LDX", M::Immediate, loads_stores::ldx),
    0xA3u8 => op!("LAX", M::IndirectX, illegal_misc::lax),
    0xA4u8 => op!("LDY", M::ZeroPage, loads_stores::ldy),
    0xA5u8 => op!("LDA", M::ZeroPage, loads_stores::lda),
    0xA6u8 => op!("LDX", M::ZeroPage, loads_stores::ldx),
    0xA7u8 => op!("LAX", M::ZeroPage, illegal_misc::lax),
    0xA8u8 => op!("TAY", M::Implicit, loads_stores::tay),
    0xA9u8 => op!("LDA", M::Immediate, loads_stores::lda),
    0xAAu8 => op!("TAX", M::Implicit, loads_stores::tax),
    0xABu8 => op!("LAX", M::Immediate, illegal_misc::lax),
    0xACu8 => op!("LDY", M::Absolute, loads_stores::ldy),
    0xADu8 => op!("LDA", M::Absolute, loads_stores::lda),
    0xAEu8 => op!("LDX", M::Absolute, loads_stores::ldx),
    0xAFu8 => op!("LAX", M::Absolute, illegal_misc::lax),

    0xB0u8 => op!("BCS", M::Relative, branches::bcs),
    0xB1u8 => op!("LDA", M::IndirectY, loads_stores::lda),
    0xB2u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0xB3u8 => op!("LAX", M::IndirectY, illegal_misc::lax),
    0xB4u8 => op!("LDY", M::ZeroPageX, loads_stores::ldy),
    0xB5u8 => op!("LDA", M::ZeroPageX, loads_stores::lda),
    0xB6u8 => op!("LDX", M::ZeroPageY, loads_stores::ldx),
    0xB7u8 => op!("LAX", M::ZeroPageY, illegal_misc::lax),
    0xB8u8 => op!("CLV", M::Implicit, flags_ops::clv),
    0xB9u8 => op!("LDA", M::AbsoluteY, loads_stores::lda),
    0xBAu8 => op!("TSX", M::Implicit, loads_stores::tsx),
    0xBBu8 => op!("LAS", M::AbsoluteY, illegal_misc::las),
    0xBCu8 => op!("LDY", M::AbsoluteX, loads_stores::ldy),
    0xBDu8 => op!("LDA", M::AbsoluteX, loads_stores::lda),
    0xBEu8 => op!("LDX", M::AbsoluteY, loads_stores::ldx),
    0xBFu8 => op!("LAX", M::AbsoluteY, illegal_misc::lax),

    0xC0u8 => op!("CPY", M::Immediate, arithmetic::cpy),
    0xC1u8 => op!("CMP", M::IndirectX, arithmetic::cmp),
    0xC2u8 => op!("NOP", M::Immediate, nop_kil::nop),
    0xC3u8 => op!("DCP", M::IndirectX, illegal_rmw::dcp),
    0xC4u8 => op!("CPY", M::ZeroPage, arithmetic::cpy),
    0xC5u8 => op!("CMP", M::ZeroPage, arithmetic::cmp),
    0xC6u8 => op!("DEC", M::ZeroPage, arithmetic::dec),
    0xC7u8 => op!("DCP", M::ZeroPage, illegal_rmw::dcp),
    0xC8u8 => op!("INY", M::Implicit, arithmetic::iny),
    0xC9u8 => op!("CMP", M::Immediate, arithmetic::cmp),
    0xCAu8 => op!("DEX", M::Implicit, arithmetic::dex),
    0xCBu8 => op!("AXS", M::Immediate, illegal_misc::axs),
    0xCCu8 => op!("CPY", M::Absolute, arithmetic::cpy),
    0xCDu8 => op!("CMP", M::Absolute, arithmetic::cmp),
    0xCEu8 => op!("DEC", M::Absolute, arithmetic::dec),
    0xCFu8 => op!("DCP", M::Absolute, illegal_rmw::dcp),

    0xD0u8 => op!("BNE", M::Relative, branches::bne),
    0xD1u8 => op!("CMP", M::IndirectY, arithmetic::cmp),
    0xD2u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0xD3u8 => op!("DCP", M::IndirectY, illegal_rmw::dcp),
    0xD4u8 => op!("NOP", M::ZeroPageX, nop_kil::nop),
    0xD5u8 => op!("CMP", M::ZeroPageX, arithmetic::cmp),
    0xD6u8 => op!("DEC", M::ZeroPageX, arithmetic::dec),
    0xD7u8 => op!("DCP", M::ZeroPageX, illegal_rmw::dcp),
    0xD8u8 => op!("CLD", M::Implicit, flags_ops::cld),
    0xD9u8 => op!("CMP", M::AbsoluteY, arithmetic::cmp),
    0xDAu8 => op!("NOP", M::Implicit, nop_kil::nop),
    0xDBu8 => op!("DCP", M::AbsoluteY, illegal_rmw::dcp),
    0xDCu8 => op!("NOP", M::AbsoluteX, nop_kil::nop),
    0xDDu8 => op!("CMP", M::AbsoluteX, arithmetic::cmp),
    0xDEu8 => op!("DEC", M::AbsoluteX, arithmetic::dec),
    0xDFu8 => op!("DCP", M::AbsoluteX, illegal_rmw::dcp),

    0xE0u8 => op!("CPX", M::Immediate, arithmetic::cpx),
    0xE1u8 => op!("SBC", M::IndirectX, arithmetic::sbc),
    0xE2u8 => op!("NOP", M::Immediate, nop_kil::nop),
    0xE3u8 => op!("ISC", M::IndirectX, illegal_rmw::isc),
    0xE4u8 => op!("CPX", M::ZeroPage, arithmetic::cpx),
    0xE5u8 => op!("SBC", M::ZeroPage, arithmetic::sbc),
    0xE6u8 => op!("INC", M::ZeroPage, arithmetic::inc),
    0xE7u8 => op!("ISC", M::ZeroPage, illegal_rmw::isc),
    0xE8u8 => op!("INX", M::Implicit, arithmetic::inx),
    0xE9u8 => op!("SBC", M::Immediate, arithmetic::sbc),
    0xEAu8 => op!("NOP", M::Implicit, nop_kil::nop),
    0xEBu8 => op!("SBC", M::Immediate, arithmetic::sbc),
    0xECu8 => op!("CPX", M::Absolute, arithmetic::cpx),
    0xEDu8 => op!("SBC", M::Absolute, arithmetic::sbc),
    0xEEu8 => op!("INC", M::Absolute, arithmetic::inc),
    0xEFu8 => op!("ISC", M::Absolute, illegal_rmw::isc),

    0xF0u8 => op!("BEQ", M::Relative, branches::beq),
    0xF1u8 => op!("SBC", M::IndirectY, arithmetic::sbc),
    0xF2u8 => op!("KIL", M::Implicit, nop_kil::kil),
    0xF3u8 => op!("ISC", M::IndirectY, illegal_rmw::isc),
    0xF4u8 => op!("NOP", M::ZeroPageX, nop_kil::nop),
    0xF5u8 => op!("SBC", M::ZeroPageX, arithmetic::sbc),
    0xF6u8 => op!("INC", M::ZeroPageX, arithmetic::inc),
    0xF7u8 => op!("ISC", M::ZeroPageX, illegal_rmw::isc),
    0xF8u8 => op!("SED", M::Implicit, flags_ops::sed),
    0xF9u8 => op!("SBC", M::AbsoluteY, arithmetic::sbc),
    0xFAu8 => op!("NOP", M::Implicit, nop_kil::nop),
    0xFBu8 => op!("ISC", M::AbsoluteY, illegal_rmw::isc),
    0xFCu8 => op!("NOP", M::AbsoluteX, nop_kil::nop),
    0xFDu8 => op!("SBC", M::AbsoluteX, arithmetic::sbc),
    0xFEu8 => op!("INC", M::AbsoluteX, arithmetic::inc),
    0xFFu8 => op!("ISC", M::AbsoluteX, illegal_rmw::isc),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_256_opcodes() {
        assert_eq!(OPCODES.len(), 256);
    }

    #[test]
    fn brk_and_lda_are_present_with_expected_modes() {
        assert_eq!(OPCODES.get(&0x00).unwrap().mnemonic, "BRK");
        assert_eq!(OPCODES.get(&0xA9).unwrap().mode, M::Immediate);
    }

    #[test]
    fn lax_0xab_is_not_split_into_a_separate_atx_entry() {
        assert_eq!(OPCODES.get(&0xAB).unwrap().mnemonic, "LAX");
    }
}
