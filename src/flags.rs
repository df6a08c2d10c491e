//! Status-register bit layout and the pure arithmetic/compare helpers that update it.

use bitflags::bitflags;

bitflags! {
    /// The 6502 status register P: N V _ B D I Z C (MSB to LSB).
    pub struct StatusFlags: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL           = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const UNUSED            = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

impl StatusFlags {
    pub fn reset_value() -> Self {
        StatusFlags::UNUSED
    }
}

/// Sets Z/N on `self` from a result byte. Shared by nearly every instruction family.
pub fn set_nz(p: &mut StatusFlags, value: u8) {
    p.set(StatusFlags::ZERO, value == 0);
    p.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
}

/// ADC core: returns the new accumulator value and updates C/V/Z/N on `p`.
pub fn adc(p: &mut StatusFlags, a: u8, m: u8) -> u8 {
    let carry_in: u16 = if p.contains(StatusFlags::CARRY) { 1 } else { 0 };
    let r = a as u16 + m as u16 + carry_in;
    p.set(StatusFlags::CARRY, r > 0xFF);
    let result = (r & 0xFF) as u8;
    let overflow = (a ^ result) & (m ^ result) & 0x80 != 0;
    p.set(StatusFlags::OVERFLOW, overflow);
    set_nz(p, result);
    result
}

/// SBC core: returns the new accumulator value and updates C/V/Z/N on `p`.
pub fn sbc(p: &mut StatusFlags, a: u8, m: u8) -> u8 {
    let borrow_in: u16 = if p.contains(StatusFlags::CARRY) { 0 } else { 1 };
    let r = (a as u16)
        .wrapping_sub(m as u16)
        .wrapping_sub(borrow_in);
    p.set(StatusFlags::CARRY, r & 0x100 == 0);
    let result = (r & 0xFF) as u8;
    let overflow = (a ^ result) & (!m ^ result) & 0x80 != 0;
    p.set(StatusFlags::OVERFLOW, overflow);
    set_nz(p, result);
    result
}

/// CMP/CPX/CPY core: sets C/Z/N for `reg` compared against `m`, does not mutate `reg`.
pub fn compare(p: &mut StatusFlags, reg: u8, m: u8) {
    p.set(StatusFlags::CARRY, reg >= m);
    set_nz(p, reg.wrapping_sub(m));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adc_sets_carry_and_overflow() {
        let mut p = StatusFlags::reset_value();
        let result = adc(&mut p, 0x50, 0x50);
        assert_eq!(result, 0xA0);
        assert!(!p.contains(StatusFlags::CARRY));
        assert!(p.contains(StatusFlags::OVERFLOW));
        assert!(p.contains(StatusFlags::NEGATIVE));
        assert!(!p.contains(StatusFlags::ZERO));
    }

    #[test]
    fn adc_round_trips_with_sbc() {
        let mut p = StatusFlags::reset_value();
        p.insert(StatusFlags::CARRY);
        let a = adc(&mut p, 0x10, 0x20);
        let back = sbc(&mut p, a, 0x20);
        assert_eq!(back, 0x10);
    }

    #[test]
    fn sbc_borrow_scenario() {
        let mut p = StatusFlags::reset_value();
        p.insert(StatusFlags::CARRY);
        let result = sbc(&mut p, 0x50, 0xF0);
        assert_eq!(result, 0x60);
        assert!(!p.contains(StatusFlags::CARRY));
        assert!(!p.contains(StatusFlags::OVERFLOW));
        assert!(!p.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn compare_sets_carry_on_greater_equal() {
        let mut p = StatusFlags::reset_value();
        compare(&mut p, 0x40, 0x40);
        assert!(p.contains(StatusFlags::CARRY));
        assert!(p.contains(StatusFlags::ZERO));
    }

    #[test]
    fn set_nz_negative_and_zero() {
        let mut p = StatusFlags::reset_value();
        set_nz(&mut p, 0x80);
        assert!(p.contains(StatusFlags::NEGATIVE));
        assert!(!p.contains(StatusFlags::ZERO));
        set_nz(&mut p, 0x00);
        assert!(!p.contains(StatusFlags::NEGATIVE));
        assert!(p.contains(StatusFlags::ZERO));
    }
}
