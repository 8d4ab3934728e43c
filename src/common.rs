use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaloisError {
    #[error("{0} is not an element of GF(2^8)")]
    OutOfRange(u32),
    #[error("no logarithm for {element:#04x} in tables built from {generator:#04x}")]
    Uninitialized { element: u8, generator: u8 },
    #[error("{generator:#04x} is not a generator (order {order})")]
    NotPrimitive { generator: u8, order: u16 },
    #[error("zero has no logarithm")]
    LogOfZero,
    #[error("division by zero")]
    DivisionByZero,
}

/// A multiplication strategy over GF(2^8).
pub trait FieldMul {
    fn product(&self, a: u8, b: u8) -> Result<u8, GaloisError>;
}

/// Checks a value crossing into the field.
pub fn element(value: u32) -> Result<u8, GaloisError> {
    u8::try_from(value).map_err(|_| GaloisError::OutOfRange(value))
}

#[test]
fn test_element() {
    assert_eq!(element(0), Ok(0));
    assert_eq!(element(0xff), Ok(0xff));
    assert_eq!(element(0x100), Err(GaloisError::OutOfRange(0x100)));
    assert_eq!(
        GaloisError::NotPrimitive {
            generator: 2,
            order: 51
        }
        .to_string(),
        "0x02 is not a generator (order 51)"
    );
}
