use core::iter::Copied;
use core::slice;

/// Widest field that can be moved in or out of a word as one integer.
pub const MAX_FIELD_WIDTH: usize = 32;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitWordError {
    /// Malformed field: `start > end`, `end` past the last bit, or wider than
    /// [`MAX_FIELD_WIDTH`]
    Range,
    /// A range replacement was rejected. Nothing was written.
    Validation,
}

/// Inclusive bit range `[start, end]`, read as a big-endian unsigned integer
/// (`start` holds the most significant bit).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    pub start: usize,
    pub end: usize,
}

impl Field {
    pub const fn new(start: usize, end: usize) -> Self {
        Field { start, end }
    }

    pub const fn width(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BitWord<const N: usize> {
    bits: [bool; N],
}

impl<const N: usize> Default for BitWord<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> BitWord<N> {
    pub const fn new() -> Self {
        BitWord { bits: [false; N] }
    }

    /// Build a word from a literal `0`/`1` listing. Any non-zero entry is a 1.
    pub const fn from_bits(bits: [u8; N]) -> Self {
        let mut out = [false; N];
        let mut index = 0;

        while index < N {
            out[index] = bits[index] != 0;
            index += 1;
        }

        BitWord { bits: out }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Bits in transmission order (index 0 first)
    pub fn iter(&self) -> Copied<slice::Iter<'_, bool>> {
        self.bits.iter().copied()
    }

    /// The whole word as a big-endian integer. Words longer than 64 bits keep
    /// only their last 64 bits.
    pub fn to_u64(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }

    fn check_field(start: usize, end: usize) -> Result<(), BitWordError> {
        if start > end || end >= N || end - start + 1 > MAX_FIELD_WIDTH {
            return Err(BitWordError::Range);
        }

        Ok(())
    }

    /// Read bits `[start, end]` as a big-endian unsigned integer.
    pub fn read_field(&self, start: usize, end: usize) -> Result<u32, BitWordError> {
        Self::check_field(start, end)?;

        Ok(self.bits[start..=end]
            .iter()
            .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit)))
    }

    /// Write `value` into bits `[start, end]`, most significant bit first.
    ///
    /// High-order bits that do not fit are dropped, so the field ends up
    /// holding `value mod 2^width`.
    pub fn write_field(&mut self, start: usize, end: usize, value: u32) -> Result<(), BitWordError> {
        Self::check_field(start, end)?;

        let mut rest = value;
        for bit in self.bits[start..=end].iter_mut().rev() {
            *bit = rest & 1 == 1;
            rest >>= 1;
        }

        Ok(())
    }

    /// Overwrite bits `[start, end]` with `replacement`.
    ///
    /// Either every bit is replaced or, on error, the word is left untouched.
    pub fn replace_range(
        &mut self,
        start: usize,
        end: usize,
        replacement: &[bool],
    ) -> Result<(), BitWordError> {
        if start > end || end >= N || replacement.len() != end - start + 1 {
            return Err(BitWordError::Validation);
        }

        self.bits[start..=end].copy_from_slice(replacement);

        Ok(())
    }

    /// Compare bits `[start, end]` against `pattern`. A malformed range or a
    /// length mismatch is simply "not equal".
    pub fn equals_range(&self, start: usize, end: usize, pattern: &[bool]) -> bool {
        if start > end {
            return false;
        }

        match self.bits.get(start..=end) {
            Some(range) => range == pattern,
            None => false,
        }
    }

    /// Add `amount` to a field, discarding the carry out of its top bit.
    pub fn add_to_field(&mut self, start: usize, end: usize, amount: u32) -> Result<(), BitWordError> {
        let value = self.read_field(start, end)?;

        self.write_field(start, end, value.wrapping_add(amount))
    }

    /// Subtract `amount` from a field, stopping at zero.
    pub fn sub_from_field(
        &mut self,
        start: usize,
        end: usize,
        amount: u32,
    ) -> Result<(), BitWordError> {
        let value = self.read_field(start, end)?;

        self.write_field(start, end, value.saturating_sub(amount))
    }

    pub fn read(&self, field: Field) -> Result<u32, BitWordError> {
        self.read_field(field.start, field.end)
    }

    pub fn write(&mut self, field: Field, value: u32) -> Result<(), BitWordError> {
        self.write_field(field.start, field.end, value)
    }

    pub fn replace(&mut self, field: Field, replacement: &[bool]) -> Result<(), BitWordError> {
        self.replace_range(field.start, field.end, replacement)
    }

    pub fn matches(&self, field: Field, pattern: &[bool]) -> bool {
        self.equals_range(field.start, field.end, pattern)
    }
}

impl<'a, const N: usize> IntoIterator for &'a BitWord<N> {
    type Item = bool;
    type IntoIter = Copied<slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
