// Step records of the bit-serial multiplier.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registers after one iteration of the multiply loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub index: u8,
    /// Multiplicand, shifted and reduced.
    pub a: u8,
    /// Multiplier, shifted right.
    pub b: u8,
    pub acc: u8,
    /// Whether the shift of `a` overflowed and was folded back.
    pub reduced: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub a: u8,
    pub b: u8,
    pub result: u8,
    pub steps: Vec<Step>,
}

impl Trace {
    pub fn new(a: u8, b: u8) -> Self {
        Self {
            a,
            b,
            result: 0,
            steps: vec![],
        }
    }

    /// Number of iterations where the reduction constant was applied.
    pub fn reductions(&self) -> usize {
        self.steps.iter().filter(|s| s.reduced).count()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "i: {}\ta: {:#010b}\tb: {:#010b}\tr: {:#010b} ({:#04x})",
            self.index, self.a, self.b, self.acc, self.acc
        )
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:#010b} * {:#010b}", self.a, self.b)?;
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        write!(f, "= {:#010b} ({:#04x})", self.result, self.result)
    }
}

#[test]
fn test_step_display() {
    let step = Step {
        index: 3,
        a: 0x1b,
        b: 0x0a,
        acc: 0xc1,
        reduced: true,
    };
    assert_eq!(
        step.to_string(),
        "i: 3\ta: 0b00011011\tb: 0b00001010\tr: 0b11000001 (0xc1)"
    );
}
