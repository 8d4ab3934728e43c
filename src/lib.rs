//! GF(2^8) arithmetic over the AES polynomial x^8 + x^4 + x^3 + x + 1.
//!
//! `multiply_poly` works bit by bit. `build_tables` derives an exp/log
//! pair from a generator, after which `multiply_table` and `invert` are
//! single lookups. `find_generators` lists the 128 primitive elements.
pub mod common;
pub mod config;
pub mod galois;
pub mod generator;
pub mod tables;
pub mod trace;
pub mod util;

use std::collections::BTreeSet;

pub use common::{element, FieldMul, GaloisError};
pub use config::FieldConfig;
pub use galois::Galois;
pub use tables::{Tables, DEFAULT_GENERATOR};
pub use trace::{Step, Trace};

pub fn multiply_poly(a: u8, b: u8) -> u8 {
    Galois::mul(a, b)
}

/// The generator is not checked; see `Tables::new` for that.
pub fn build_tables(generator: u8) -> Tables {
    Tables::build(generator)
}

pub fn multiply_table(a: u8, b: u8, tables: &Tables) -> Result<u8, GaloisError> {
    tables.mul(a, b)
}

pub fn invert(a: u8, tables: &Tables) -> Result<u8, GaloisError> {
    tables.inv(a)
}

pub fn find_generators() -> BTreeSet<u8> {
    generator::find_generators()
}

#[test]
fn test_facade() {
    assert_eq!(multiply_poly(0x83, 0x57), 0xc1);

    let tables = build_tables(DEFAULT_GENERATOR);
    assert_eq!(multiply_table(0x83, 0x57, &tables), Ok(0xc1));
    let inv = invert(0x02, &tables).unwrap();
    assert_eq!(multiply_table(inv, 0x02, &tables), Ok(1));
    assert_eq!(invert(0, &tables), Ok(0));

    let gens = find_generators();
    assert_eq!(gens.len(), 128);
    for g in gens.iter().take(4) {
        let t = build_tables(*g);
        assert!(t.is_complete());
        assert_eq!(multiply_table(0x53, 0xca, &t), Ok(1));
    }
}
