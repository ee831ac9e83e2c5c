/// Length tolerance below which a vector counts as degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;

    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    pub fn is_zero(self, length: f64) -> bool {
        length.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LINEAR)
    }
}
