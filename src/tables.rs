// Exponential and logarithm tables for O(1) multiplication.
use std::sync::OnceLock;

use crate::common::{FieldMul, GaloisError};
use crate::galois::Galois;
use crate::generator::{order, GROUP_ORDER};
use log::{debug, warn};

/// 0x03 = x + 1, the usual AES generator.
pub const DEFAULT_GENERATOR: u8 = 0x03;

const N: usize = GROUP_ORDER as usize;

static AES_TABLES: OnceLock<Tables> = OnceLock::new();

/// Tables for `DEFAULT_GENERATOR`, built on first use.
pub fn aes() -> &'static Tables {
    AES_TABLES.get_or_init(|| Tables::build(DEFAULT_GENERATOR))
}

/// `exp[e] = g^e` and its inverse map over the nonzero elements.
///
/// Read-only once built. Only a generator of order 255 gives complete
/// tables; anything else leaves holes in `log`, which the lookups report
/// as `GaloisError::Uninitialized`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tables {
    generator: u8,
    exp: [u8; 256],
    log: [Option<u8>; 256],
}

impl Default for Tables {
    fn default() -> Self {
        Self::build(DEFAULT_GENERATOR)
    }
}

impl Tables {
    /// Builds without checking the generator.
    pub fn build(generator: u8) -> Self {
        let mut exp = [0u8; 256];
        let mut log = [None; 256];
        exp[0] = 1;
        for i in 1..=N {
            exp[i] = Galois::mul(generator, exp[i - 1]);
            // i = 255 wraps back to exp[0] and rewrites log[1] = 0.
            if exp[i] != 0 {
                log[exp[i] as usize] = Some((i % N) as u8);
            }
        }

        let tables = Self {
            generator,
            exp,
            log,
        };
        let missing = tables.missing();
        if missing == 0 {
            debug!("built tables from generator {:#04x}", generator);
        } else {
            warn!(
                "{:#04x} is not a generator, tables lack {} logarithms",
                generator, missing
            );
        }
        tables
    }

    /// Builds only from a generator of the whole group.
    pub fn new(generator: u8) -> Result<Self, GaloisError> {
        match order(generator) {
            Some(GROUP_ORDER) => Ok(Self::build(generator)),
            k => Err(GaloisError::NotPrimitive {
                generator,
                order: k.unwrap_or(0),
            }),
        }
    }

    pub fn generator(&self) -> u8 {
        self.generator
    }

    pub fn exp(&self) -> &[u8; 256] {
        &self.exp
    }

    pub fn log_of(&self, a: u8) -> Result<u8, GaloisError> {
        if a == 0 {
            return Err(GaloisError::LogOfZero);
        }
        self.log[a as usize].ok_or(GaloisError::Uninitialized {
            element: a,
            generator: self.generator,
        })
    }

    /// Nonzero elements with no logarithm.
    pub fn missing(&self) -> usize {
        self.log[1..].iter().filter(|l| l.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.missing() == 0
    }

    pub fn mul(&self, a: u8, b: u8) -> Result<u8, GaloisError> {
        if a == 0 || b == 0 {
            return Ok(0);
        }
        let e = self.log_of(a)? as usize + self.log_of(b)? as usize;
        Ok(self.exp[e % N])
    }

    /// `inv(0)` is 0.
    pub fn inv(&self, a: u8) -> Result<u8, GaloisError> {
        if a == 0 {
            return Ok(0);
        }
        Ok(self.exp[N - self.log_of(a)? as usize])
    }

    pub fn div(&self, a: u8, b: u8) -> Result<u8, GaloisError> {
        if b == 0 {
            return Err(GaloisError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        let e = self.log_of(a)? as usize + N - self.log_of(b)? as usize;
        Ok(self.exp[e % N])
    }

    pub fn exp_hex(&self) -> String {
        hex::encode(self.exp)
    }

    /// Holes, and the undefined log of 0, print as 00.
    pub fn log_hex(&self) -> String {
        hex::encode(self.log.map(|l| l.unwrap_or(0)))
    }
}

impl FieldMul for Tables {
    fn product(&self, a: u8, b: u8) -> Result<u8, GaloisError> {
        self.mul(a, b)
    }
}

#[test]
fn test_tables_generator_3() {
    let t = Tables::build(3);
    assert!(t.is_complete());
    assert_eq!(t.generator(), 3);
    assert_eq!(t.exp()[0], 1);
    assert_eq!(t.exp()[1], 3);
    assert_eq!(t.exp()[2], 5);
    assert_eq!(t.exp()[255], 1);
    assert_eq!(t.log_of(1), Ok(0));
    assert_eq!(t.log_of(3), Ok(1));
    assert_eq!(t.log_of(0), Err(GaloisError::LogOfZero));
    assert_eq!(&t, aes());
    assert_eq!(t, Tables::default());
}

#[test]
fn test_tables_bijective() {
    for g in [3u8, 5, Galois::pow(3, 7)] {
        let t = Tables::new(g).unwrap();
        let mut seen = [false; 256];
        for i in 0..N {
            let x = t.exp()[i];
            assert_ne!(x, 0);
            assert!(!seen[x as usize]);
            seen[x as usize] = true;
            assert_eq!(t.log_of(x), Ok(i as u8));
        }
        assert!(!seen[0]);
    }
}

#[test]
fn test_tables_mul() {
    let t = aes();
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            let p = t.mul(a, b).unwrap();
            assert_eq!(p, Galois::mul(a, b));
            assert_eq!(p, t.mul(b, a).unwrap());
        }
    }
}

#[test]
fn test_tables_mul_any_generator() {
    use crate::generator::find_generators;

    for g in find_generators().into_iter().step_by(16) {
        let t = Tables::new(g).unwrap();
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(t.mul(a, b), Ok(Galois::mul(a, b)));
            }
        }
    }
}

#[test]
fn test_tables_inv() {
    let t = aes();
    assert_eq!(t.inv(0), Ok(0));
    assert_eq!(t.inv(0x53), Ok(0xca));
    assert_eq!(t.inv(0x07), Ok(0xd1));
    assert_eq!(t.mul(t.inv(0x02).unwrap(), 0x02), Ok(1));
    for a in 1..=255u8 {
        let inv = t.inv(a).unwrap();
        assert_eq!(t.mul(a, inv), Ok(1));
        assert_eq!(Galois::mul(a, inv), 1);
    }
}

#[test]
fn test_tables_div() {
    let t = aes();
    assert_eq!(t.div(5, 0), Err(GaloisError::DivisionByZero));
    assert_eq!(t.div(0, 5), Ok(0));
    for a in 0..=255u8 {
        for b in 1..=255u8 {
            let q = t.div(a, b).unwrap();
            assert_eq!(Galois::mul(q, b), a);
        }
    }
}

#[test]
fn test_tables_non_generator() {
    let t = Tables::build(2);
    assert!(!t.is_complete());
    assert_eq!(t.missing(), 255 - 51);
    assert_eq!(t.mul(2, 4), Ok(8));
    assert_eq!(Galois::mul(t.inv(2).unwrap(), 2), 1);
    assert_eq!(
        t.mul(3, 2),
        Err(GaloisError::Uninitialized {
            element: 3,
            generator: 2
        })
    );
    assert_eq!(
        t.inv(3),
        Err(GaloisError::Uninitialized {
            element: 3,
            generator: 2
        })
    );

    let zero = Tables::build(0);
    assert_eq!(zero.missing(), 255);
    assert_eq!(zero.mul(0, 9), Ok(0));
}

#[test]
fn test_tables_new() {
    assert!(Tables::new(3).is_ok());
    assert_eq!(
        Tables::new(2),
        Err(GaloisError::NotPrimitive {
            generator: 2,
            order: 51
        })
    );
    assert_eq!(
        Tables::new(1),
        Err(GaloisError::NotPrimitive {
            generator: 1,
            order: 1
        })
    );
    assert_eq!(
        Tables::new(0),
        Err(GaloisError::NotPrimitive {
            generator: 0,
            order: 0
        })
    );
}

#[test]
fn test_tables_hex() {
    let t = aes();
    assert_eq!(t.exp_hex().len(), 512);
    assert!(t.exp_hex().starts_with("0103050f"));
    assert!(t.log_hex().starts_with("00001901"));
}

#[test]
fn test_aes_tables_shared() {
    assert!(std::ptr::eq(aes(), aes()));
    let handles: Vec<_> = (0..4u8)
        .map(|k| {
            std::thread::spawn(move || {
                let t = aes();
                (1..=255u8)
                    .filter(|&a| a % 4 == k)
                    .all(|a| t.mul(a, t.inv(a).unwrap()) == Ok(1))
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
