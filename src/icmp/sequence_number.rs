type SequenceNumberInnerType = u16;

/// Sequence number carried in every echo request of one pass over the tasks.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct SequenceNumber(SequenceNumberInnerType);

impl SequenceNumber {
    fn start_value_inner_type() -> SequenceNumberInnerType {
        // Echo request sequence numbers start from 1.
        SequenceNumberInnerType::from(1u8)
    }

    pub fn start_value() -> SequenceNumber {
        SequenceNumber(Self::start_value_inner_type())
    }

    /// The following sequence number. Wraps from `u16::MAX` to 0.
    #[must_use]
    pub fn next(self) -> Self {
        SequenceNumber(self.0.wrapping_add(1))
    }
}

impl From<SequenceNumber> for SequenceNumberInnerType {
    fn from(value: SequenceNumber) -> Self {
        value.0
    }
}

impl From<SequenceNumberInnerType> for SequenceNumber {
    fn from(value: SequenceNumberInnerType) -> Self {
        SequenceNumber(value)
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        assert_eq!(1u16, SequenceNumber::start_value().into());
    }

    #[test]
    fn next_increments_by_one() {
        let mut sequence_number = SequenceNumber::start_value();
        for expected in 2..=1000u16 {
            sequence_number = sequence_number.next();
            assert_eq!(expected, u16::from(sequence_number));
        }
    }

    #[test]
    fn next_wraps_to_zero() {
        let last = SequenceNumber::from(u16::MAX);
        assert_eq!(SequenceNumber::from(0), last.next());
        assert_eq!(SequenceNumber::from(1), last.next().next());
    }

    #[test]
    fn fmt() {
        assert_eq!("42", format!("{}", SequenceNumber::from(42)));
    }
}
