/// Four-digit lab variant (e.g. `4104`), zero-padded on the left.
///
/// The digits drive the whole run: `n3` sets the node count, `n3`/`n4` the
/// edge density, and the full number seeds the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    value: u32,
    digits: [u32; 4],
}

impl Variant {
    pub const BASE_NODE_COUNT: usize = 10;

    pub fn new(value: u32) -> Result<Self, VariantError> {
        if value > 9999 {
            return Err(VariantError::TooManyDigits(value));
        }
        let digits = [value / 1000, value / 100 % 10, value / 10 % 10, value % 10];
        Ok(Self { value, digits })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn digits(&self) -> [u32; 4] {
        self.digits
    }

    pub fn n3(&self) -> u32 {
        self.digits[2]
    }

    pub fn n4(&self) -> u32 {
        self.digits[3]
    }

    pub fn seed(&self) -> u64 {
        u64::from(self.value)
    }

    pub fn node_count(&self) -> usize {
        Self::BASE_NODE_COUNT + self.n3() as usize
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("variant {0} has more than four digits")]
    TooManyDigits(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_of_4104() {
        let v = Variant::new(4104).unwrap();
        assert_eq!(v.digits(), [4, 1, 0, 4]);
        assert_eq!(v.node_count(), 10);
        assert_eq!(v.seed(), 4104);
        assert_eq!((v.n3(), v.n4()), (0, 4));
    }

    #[test]
    fn test_short_variant_is_zero_padded() {
        let v = Variant::new(57).unwrap();
        assert_eq!(v.digits(), [0, 0, 5, 7]);
        assert_eq!(v.node_count(), 15);
    }

    #[test]
    fn test_five_digits_rejected() {
        assert_eq!(Variant::new(12345), Err(VariantError::TooManyDigits(12345)));
    }
}
