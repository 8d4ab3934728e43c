/// x^8 folded back into the low byte: x^4 + x^3 + x + 1.
pub const REDUCTION: u8 = 0x1b;

/// x^8 + x^4 + x^3 + x + 1.
pub const MODULUS: u16 = 0x11b;

#[inline]
pub fn least_bit(b: u8) -> bool {
    b & 1 != 0
}

/// Set when the next left shift would leave the byte.
#[inline]
pub fn highest_bit(a: u8) -> bool {
    a & 0x80 != 0
}

#[inline]
pub fn bit_at(b: u8, i: usize) -> bool {
    i < 8 && (1 << i) & b != 0
}

/// Degree of the polynomial, `None` for the zero polynomial.
pub fn degree(n: u8) -> Option<usize> {
    for i in (0..8).rev() {
        if bit_at(n, i) {
            return Some(i);
        }
    }
    None
}

/// Renders a byte as a polynomial in x, highest power first.
pub fn poly_string(n: u8) -> String {
    let Some(top) = degree(n) else {
        return "0".to_owned();
    };
    let mut terms = vec![];
    for i in (0..=top).rev() {
        if !bit_at(n, i) {
            continue;
        }
        terms.push(match i {
            0 => "1".to_owned(),
            1 => "x".to_owned(),
            _ => format!("x^{}", i),
        });
    }
    terms.join(" + ")
}

#[test]
fn test_degree() {
    assert_eq!(degree(0), None);
    assert_eq!(degree(1), Some(0));
    assert_eq!(degree(0b1100110), Some(6));
    assert_eq!(degree(0x80), Some(7));
}

#[test]
fn test_bits() {
    assert!(least_bit(0x57));
    assert!(!least_bit(0x56));
    assert!(highest_bit(0x83));
    assert!(!highest_bit(0x7f));
    assert!(bit_at(0b100, 2));
    assert!(!bit_at(0xff, 8));
}

#[test]
fn test_poly_string() {
    assert_eq!(poly_string(0), "0");
    assert_eq!(poly_string(1), "1");
    assert_eq!(poly_string(0x57), "x^6 + x^4 + x^2 + x + 1");
    assert_eq!(poly_string(REDUCTION), "x^4 + x^3 + x + 1");
    assert_eq!(MODULUS as u8, REDUCTION);
}
