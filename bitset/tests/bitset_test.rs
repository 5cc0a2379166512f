use bitset::{Bitset, BitsetError, and, or, xor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn zeros_has_no_set_bits(length in 0..2000usize) {
        let bits = Bitset::zeros(length);
        assert_eq!(bits.len(), length);
        assert_eq!(bits.count(), 0);
        assert!(bits.none());
    }

    #[test]
    fn try_with_length_accepts_non_negative(length in 0..2000i64) {
        let bits = Bitset::try_with_length(length).unwrap();
        assert_eq!(i64::try_from(bits.len()).unwrap(), length);
        assert!(bits.none());
    }

    #[test]
    fn try_with_length_rejects_negative(length in i64::MIN..0) {
        assert_eq!(
            Bitset::try_with_length(length),
            Err(BitsetError::InvalidArgument { value: length.to_string() })
        );
    }

    #[test]
    fn parse(text in "[01]{0,300}") {
        let bits = Bitset::parse(&text).unwrap();
        assert_eq!(bits.len(), text.len());
        for (index, character) in text.chars().enumerate() {
            assert_eq!(bits.get(index), Ok(character == '1'));
        }
        assert_eq!(bits.to_string(), text);
    }

    #[test]
    fn parse_rejects_foreign_characters(prefix in "[01]{0,50}", foreign in "[^01]", suffix in "\\PC{0,20}") {
        let text = format!("{prefix}{foreign}{suffix}");
        let expected = BitsetError::Parse {
            position: prefix.chars().count(),
            character: foreign.chars().next().unwrap(),
        };
        assert_eq!(Bitset::parse(&text), Err(expected.clone()));
        assert_eq!(text.parse::<Bitset>(), Err(expected));
    }

    #[test]
    fn count(bits in arbitrary_bitset(2000)) {
        let expected = bits.iter().filter(|bit| *bit).count();
        assert_eq!(bits.count(), expected);
        assert_eq!(bits.none(), expected == 0);
        assert_eq!(bits.support().count(), expected);
    }

    #[test]
    fn support(bits in arbitrary_bitset(2000)) {
        let support: Vec<usize> = bits.support().collect();
        assert!(support.windows(2).all(|pair| pair[0] < pair[1]));
        for index in support {
            assert_eq!(bits.get(index), Ok(true));
        }
    }

    #[test]
    fn set_reset_flip((bits, index) in bitset_and_index(500)) {
        let mut set = bits.clone();
        set.set(index).unwrap();
        assert_eq!(set.get(index), Ok(true));

        let mut reset = bits.clone();
        reset.reset(index).unwrap();
        assert_eq!(reset.get(index), Ok(false));

        let mut flipped = bits.clone();
        flipped.flip(index).unwrap();
        assert_eq!(flipped.get(index), Ok(!bits.get(index).unwrap()));
        flipped.flip(index).unwrap();
        assert_eq!(flipped, bits);

        for other in (0..bits.len()).filter(|&other| other != index) {
            assert_eq!(set.get(other), bits.get(other));
            assert_eq!(reset.get(other), bits.get(other));
        }
    }

    #[test]
    fn out_of_range_leaves_bits_untouched(bits in arbitrary_bitset(500), excess in 0..100usize) {
        let index = bits.len() + excess;
        let expected = Err(BitsetError::IndexOutOfRange { index, length: bits.len() });
        let mut mutated = bits.clone();
        assert_eq!(mutated.set(index), expected);
        assert_eq!(mutated.reset(index), expected);
        assert_eq!(mutated.flip(index), expected);
        assert_eq!(mutated.get(index).map(|_| ()), expected);
        assert_eq!(mutated, bits);
    }

    #[test]
    fn not_is_an_involution(bits in arbitrary_bitset(2000)) {
        let mut negated = bits.clone();
        negated.not();
        assert_eq!(negated.len(), bits.len());
        assert_eq!(negated.count(), bits.len() - bits.count());
        for (index, bit) in negated.iter().enumerate() {
            assert_eq!(bit, !bits.get(index).unwrap());
        }
        negated.not();
        assert_eq!(negated, bits);
    }

    #[test]
    fn and_is_bitwise_and((left, right) in equal_length_bitsets(2000)) {
        let result = and(&left, &right).unwrap();
        assert_eq!(result.len(), left.len());
        for (index, bit) in result.iter().enumerate() {
            assert_eq!(bit, left.get(index).unwrap() && right.get(index).unwrap());
        }
        assert_eq!(and(&right, &left).unwrap(), result);
    }

    #[test]
    fn or_is_bitwise_or((left, right) in equal_length_bitsets(2000)) {
        let result = or(&left, &right).unwrap();
        assert_eq!(result.len(), left.len());
        for (index, bit) in result.iter().enumerate() {
            assert_eq!(bit, left.get(index).unwrap() || right.get(index).unwrap());
        }
        assert_eq!(or(&right, &left).unwrap(), result);
    }

    #[test]
    fn xor_is_bitwise_xor((left, right) in equal_length_bitsets(2000)) {
        let result = xor(&left, &right).unwrap();
        assert_eq!(result.len(), left.len());
        for (index, bit) in result.iter().enumerate() {
            assert_eq!(bit, left.get(index).unwrap() ^ right.get(index).unwrap());
        }
        assert_eq!(xor(&right, &left).unwrap(), result);
    }

    #[test]
    fn operands_are_not_mutated((left, right) in equal_length_bitsets(500)) {
        let (left_before, right_before) = (left.clone(), right.clone());
        let _ = left.and(&right).unwrap();
        let _ = left.or(&right).unwrap();
        let _ = left.xor(&right).unwrap();
        assert_eq!(left, left_before);
        assert_eq!(right, right_before);
    }

    #[test]
    fn mismatched_lengths_are_rejected(left in arbitrary_bitset(500), right in arbitrary_bitset(500)) {
        prop_assume!(left.len() != right.len());
        let expected = Err(BitsetError::LengthMismatch { left: left.len(), right: right.len() });
        assert_eq!(and(&left, &right), expected);
        assert_eq!(or(&left, &right), expected);
        assert_eq!(xor(&left, &right), expected);
    }
}

#[test]
fn try_with_length_rejects_unallocatable_lengths() {
    assert_eq!(
        Bitset::try_with_length(u64::MAX),
        Err(BitsetError::InvalidArgument { value: u64::MAX.to_string() })
    );
    assert_eq!(
        Bitset::try_with_length(u128::MAX),
        Err(BitsetError::InvalidArgument { value: u128::MAX.to_string() })
    );
    assert_eq!(Bitset::try_with_length(0u128).unwrap(), Bitset::zeros(0));
}

#[test]
fn pairwise_scenario() {
    let left = Bitset::parse("1010").unwrap();
    let right = Bitset::parse("0110").unwrap();
    assert_eq!(xor(&left, &right).unwrap().to_string(), "1100");
    assert_eq!(and(&left, &right).unwrap().to_string(), "0010");
    assert_eq!(or(&left, &right).unwrap().to_string(), "1110");
}

#[test]
fn set_scenario() {
    let mut bits = Bitset::zeros(5);
    bits.set(2).unwrap();
    bits.set(4).unwrap();
    assert_eq!(bits.count(), 2);
    assert_eq!(bits.to_string(), "00101");
    assert_eq!(bits.support().collect::<Vec<_>>(), vec![2, 4]);
}

#[test]
fn not_scenario() {
    let mut bits = Bitset::parse("11").unwrap();
    bits.not();
    assert_eq!(bits.to_string(), "00");
    assert!(bits.none());
}

#[test]
fn zero_length_is_vacuously_none() {
    let empty = Bitset::zeros(0);
    assert!(empty.is_empty());
    assert_eq!(empty.count(), 0);
    assert!(empty.none());

    let parsed = Bitset::parse("").unwrap();
    assert_eq!(parsed, empty);
    assert_eq!(parsed.to_string(), "");
    assert_eq!(Bitset::default(), empty);

    let mut negated = empty.clone();
    negated.not();
    assert!(negated.none());
    assert_eq!(xor(&empty, &negated).unwrap(), empty);
}

#[test]
fn parse_reports_first_offending_character() {
    assert_eq!(
        Bitset::parse("01 1"),
        Err(BitsetError::Parse { position: 2, character: ' ' })
    );
    assert_eq!(
        Bitset::parse("0é2"),
        Err(BitsetError::Parse { position: 1, character: 'é' })
    );
}

#[test]
fn conversions() {
    let bits: Bitset = vec![true, false, true].into();
    assert_eq!(bits.as_slice(), &[true, false, true]);
    assert_eq!(format!("{bits:?}"), "Bitset(len=3,value=101)");
    assert_eq!(Vec::<bool>::from(bits.clone()), vec![true, false, true]);
    assert_eq!(bits.into_vec(), vec![true, false, true]);
}

#[test]
fn error_messages() {
    assert_eq!(
        BitsetError::LengthMismatch { left: 4, right: 3 }.to_string(),
        "bitsets should have same length (left has 4 bits, right has 3)"
    );
    assert_eq!(
        BitsetError::IndexOutOfRange { index: 7, length: 5 }.to_string(),
        "index 7 is out of range for a bitset of length 5"
    );
}

fn arbitrary_bitset(max_length: usize) -> impl Strategy<Value = Bitset> {
    prop::collection::vec(any::<bool>(), 0..max_length).prop_map(Bitset::from)
}

fn bitset_and_index(max_length: usize) -> impl Strategy<Value = (Bitset, usize)> {
    (1..max_length).prop_flat_map(|length| {
        (
            prop::collection::vec(any::<bool>(), length).prop_map(Bitset::from),
            0..length,
        )
    })
}

fn equal_length_bitsets(max_length: usize) -> impl Strategy<Value = (Bitset, Bitset)> {
    (0..max_length).prop_flat_map(|length| {
        (
            prop::collection::vec(any::<bool>(), length).prop_map(Bitset::from),
            prop::collection::vec(any::<bool>(), length).prop_map(Bitset::from),
        )
    })
}
