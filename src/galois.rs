// Galois Field - GF(2^8)
// For AES, the mod is x^8 + x^4 + x^3 + x + 1 (01:1b).
use crate::common::{element, FieldMul, GaloisError};
use crate::trace::{Step, Trace};
use crate::util::{highest_bit, least_bit, REDUCTION};

/// Bit-serial arithmetic, no tables needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Galois;

impl Galois {
    pub fn add(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Same as add in characteristic 2.
    pub fn sub(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// over 0x011b
    pub fn mul(a: u8, b: u8) -> u8 {
        Self::mul_steps(a, b, |_| {})
    }

    pub fn mul_checked(a: u32, b: u32) -> Result<u8, GaloisError> {
        Ok(Self::mul(element(a)?, element(b)?))
    }

    /// Multiplies and keeps the registers of every iteration.
    pub fn mul_traced(a: u8, b: u8) -> Trace {
        let mut trace = Trace::new(a, b);
        let mut steps = Vec::with_capacity(8);
        trace.result = Self::mul_steps(a, b, |step| steps.push(step));
        trace.steps = steps;
        trace
    }

    fn mul_steps(mut a: u8, mut b: u8, mut on_step: impl FnMut(Step)) -> u8 {
        let mut r = 0u8;
        for i in 0..8 {
            if least_bit(b) {
                r ^= a;
            }
            let overflow = highest_bit(a);
            a <<= 1;
            if overflow {
                a ^= REDUCTION;
            }
            b >>= 1;
            on_step(Step {
                index: i,
                a,
                b,
                acc: r,
                reduced: overflow,
            });
        }
        r
    }

    pub fn mul_vec(a: [u8; 4], b: [u8; 4]) -> u8 {
        let mut ret = 0u8;
        for i in 0..4 {
            let mult = Self::mul(a[i], b[i]);
            ret = Self::add(ret, mult);
        }
        ret
    }

    /// Square and multiply. `pow(a, 0)` is 1, zero included.
    pub fn pow(a: u8, e: u32) -> u8 {
        let mut ret = 1u8;
        let mut base = a;
        let mut e = e;
        while e != 0 {
            if e & 1 == 1 {
                ret = Self::mul(ret, base);
            }
            base = Self::mul(base, base);
            e >>= 1;
        }
        ret
    }
}

impl FieldMul for Galois {
    fn product(&self, a: u8, b: u8) -> Result<u8, GaloisError> {
        Ok(Self::mul(a, b))
    }
}

#[test]
fn test_galois_mul() {
    assert_eq!(Galois::mul(0x49, 0x24), 0xdc);
    assert_eq!(Galois::mul(0x24, 0x49), 0xdc);
    assert_eq!(Galois::mul(0x07, 0xd1), 0x1);
    // FIPS 197, section 4.2.
    assert_eq!(Galois::mul(0x83, 0x57), 0xc1);
    assert_eq!(Galois::mul(0x57, 0x13), 0xfe);
}

#[test]
fn test_galois_mul_laws() {
    for a in 0..=255u8 {
        assert_eq!(Galois::mul(a, 1), a);
        assert_eq!(Galois::mul(a, 0), 0);
        assert_eq!(Galois::sub(Galois::add(a, 0x5a), 0x5a), a);
        for b in 0..=255u8 {
            assert_eq!(Galois::mul(a, b), Galois::mul(b, a));
        }
    }
}

#[test]
fn test_galois_mul_sampled() {
    use rand::prelude::*;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::seed_from_u64(0x11b);
    for _ in 0..4096 {
        let (a, b, c): (u8, u8, u8) = (rng.gen(), rng.gen(), rng.gen());
        assert_eq!(
            Galois::mul(Galois::mul(a, b), c),
            Galois::mul(a, Galois::mul(b, c))
        );
        assert_eq!(
            Galois::mul(a, Galois::add(b, c)),
            Galois::add(Galois::mul(a, b), Galois::mul(a, c))
        );
    }
}

#[test]
fn test_galois_mul_checked() {
    assert_eq!(Galois::mul_checked(0x83, 0x57), Ok(0xc1));
    assert_eq!(
        Galois::mul_checked(0x183, 0x57),
        Err(GaloisError::OutOfRange(0x183))
    );
    assert_eq!(
        Galois::mul_checked(2, 256),
        Err(GaloisError::OutOfRange(256))
    );
}

#[test]
fn test_galois_mul_vec() {
    // MixColumns, column db 13 53 45 -> 8e 4d a1 bc.
    let col = [0xdb, 0x13, 0x53, 0x45];
    assert_eq!(Galois::mul_vec([2, 3, 1, 1], col), 0x8e);
    assert_eq!(Galois::mul_vec([1, 2, 3, 1], col), 0x4d);
    assert_eq!(Galois::mul_vec([1, 1, 2, 3], col), 0xa1);
    assert_eq!(Galois::mul_vec([3, 1, 1, 2], col), 0xbc);
}

#[test]
fn test_galois_pow() {
    assert_eq!(Galois::pow(0, 0), 1);
    assert_eq!(Galois::pow(0, 5), 0);
    assert_eq!(Galois::pow(3, 1), 3);
    assert_eq!(Galois::pow(3, 2), 5);
    assert_eq!(Galois::pow(3, 255), 1);
    assert_eq!(Galois::pow(2, 51), 1);
    assert_eq!(Galois::pow(0x53, 254), 0xca);
}

#[test]
fn test_galois_mul_traced() {
    let trace = Galois::mul_traced(0b10000011, 0b01010111);
    assert_eq!(trace.result, 0xc1);
    assert_eq!(trace.steps.len(), 8);
    assert_eq!(
        trace.steps[0],
        Step {
            index: 0,
            a: 0x1d,
            b: 0x2b,
            acc: 0x83,
            reduced: true,
        }
    );
    assert_eq!(trace.steps[7].b, 0);
    assert_eq!(trace.steps[7].acc, trace.result);
    assert!(trace.reductions() > 0);

    let text = trace.to_string();
    assert!(text.starts_with("0b10000011 * 0b01010111\n"));
    assert!(text.ends_with("= 0b11000001 (0xc1)"));
    assert_eq!(text.lines().count(), 10);
}
