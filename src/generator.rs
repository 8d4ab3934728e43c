// Primitive element search over GF(2^8)*.
use std::collections::BTreeSet;

use crate::common::{FieldMul, GaloisError};
use crate::galois::Galois;
use log::info;

/// Size of the multiplicative group.
pub const GROUP_ORDER: u16 = 255;

/// Multiplicative order of `g`, `None` for zero.
pub fn order(g: u8) -> Option<u16> {
    if g == 0 {
        return None;
    }
    let mut acc = g;
    let mut i = 1u16;
    while acc != 1 {
        acc = Galois::mul(acc, g);
        i += 1;
    }
    Some(i)
}

/// Same as `order`, with products taken from `m`.
pub fn order_with<M: FieldMul>(m: &M, g: u8) -> Result<Option<u16>, GaloisError> {
    if g == 0 {
        return Ok(None);
    }
    let mut acc = g;
    let mut i = 1u16;
    while acc != 1 {
        // A field never gets here; a broken strategy might.
        if i >= GROUP_ORDER {
            return Ok(None);
        }
        acc = m.product(acc, g)?;
        i += 1;
    }
    Ok(Some(i))
}

pub fn is_generator(g: u8) -> bool {
    order(g) == Some(GROUP_ORDER)
}

/// All 128 generators, found with the polynomial multiplier only.
pub fn find_generators() -> BTreeSet<u8> {
    let ret: BTreeSet<u8> = (2..=255u8).filter(|&g| is_generator(g)).collect();
    info!("found {} generators of GF(2^8)*", ret.len());
    ret
}

pub fn find_generators_with<M: FieldMul>(m: &M) -> Result<BTreeSet<u8>, GaloisError> {
    let mut ret = BTreeSet::new();
    for g in 2..=255u8 {
        if order_with(m, g)? == Some(GROUP_ORDER) {
            ret.insert(g);
        }
    }
    info!("found {} generators of GF(2^8)*", ret.len());
    Ok(ret)
}

#[test]
fn test_order() {
    assert_eq!(order(0), None);
    assert_eq!(order(1), Some(1));
    // x itself is not primitive for 0x11b.
    assert_eq!(order(2), Some(51));
    assert_eq!(order(3), Some(255));
    for g in 1..=255u8 {
        let k = order(g).unwrap();
        assert_eq!(GROUP_ORDER % k, 0);
        assert_eq!(Galois::pow(g, k as u32), 1);
    }
}

#[test]
fn test_find_generators() {
    let gens = find_generators();
    assert_eq!(gens.len(), 128);
    assert!(!gens.contains(&0));
    assert!(!gens.contains(&1));
    assert!(!gens.contains(&2));
    assert!(gens.contains(&3));
    for &g in &gens {
        assert!(is_generator(g));
    }
}

#[test]
fn test_find_generators_with() {
    use crate::tables::{aes, Tables};

    let gens = find_generators();
    assert_eq!(find_generators_with(&Galois), Ok(gens.clone()));
    assert_eq!(find_generators_with(aes()), Ok(gens));

    // Tables from 0x02 only cover a subgroup of 51 elements.
    assert_eq!(
        find_generators_with(&Tables::build(2)),
        Err(GaloisError::Uninitialized {
            element: 3,
            generator: 2
        })
    );
}
