use crate::error::{Error, Result};
use crate::io::{InputStream, ReadTuple, ReadValue};

/// Sum of candy bags modulo the number of kids, reduced as bags are added so
/// it never overflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunningRemainder {
    divisor: u64,
    acc: u64,
}

impl RunningRemainder {
    /// `None` when the divisor is zero.
    pub fn new(divisor: u64) -> Option<Self> {
        (divisor != 0).then_some(Self { divisor, acc: 0 })
    }

    pub fn add(&mut self, c: u64) {
        let m = self.divisor as u128;
        self.acc = ((self.acc as u128 + c as u128 % m) % m) as u64;
    }

    pub fn value(&self) -> u64 {
        self.acc
    }
}

/// Consumes `N M` followed by `N` values and returns their sum modulo `M`.
pub fn solve_case(input: &mut impl InputStream, case: usize) -> Result<u64> {
    let (n, m): (usize, u64) = input.tuple().map_err(|e| e.in_case(case))?;
    tracing::trace!(n, m, "read case");
    let mut rem = RunningRemainder::new(m).ok_or(Error::ZeroDivisor { case })?;
    for _ in 0..n {
        let c: u64 = input.value().map_err(|e| e.in_case(case))?;
        rem.add(c);
    }
    Ok(rem.value())
}

#[cfg(test)]
fn remainder_of(divisor: u64, bags: &[u64]) -> Option<u64> {
    let mut rem = RunningRemainder::new(divisor)?;
    bags.iter().for_each(|&c| rem.add(c));
    Some(rem.value())
}

#[test]
fn test_remainder() {
    assert_eq!(remainder_of(5, &[1, 2, 3]), Some(1));
    assert_eq!(remainder_of(7, &[]), Some(0));
    assert_eq!(remainder_of(1, &[10, 20]), Some(0));
    assert_eq!(remainder_of(0, &[1]), None);

    // plain sum would overflow u64
    let expected = ((u64::MAX as u128 * 2 + 3) % (u64::MAX - 1) as u128) as u64;
    assert_eq!(
        remainder_of(u64::MAX - 1, &[u64::MAX, u64::MAX, 3]),
        Some(expected)
    );
}

#[test]
fn test_remainder_matches_naive_sum() {
    let mut seed = 0x2545_f491_u64;
    let mut next = || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };
    for _ in 0..200 {
        let n = (next() % 20) as usize;
        let divisor = next() % 1000 + 1;
        let bags: Vec<u64> = (0..n).map(|_| next() % 1_000_000).collect();
        let naive = bags.iter().sum::<u64>() % divisor;
        assert_eq!(remainder_of(divisor, &bags), Some(naive));
    }
}

#[test]
fn test_solve_case_consumes_exactly_its_tokens() {
    let mut input = "3 5\n1 2\n3\n9 9".as_bytes();
    assert_eq!(solve_case(&mut input, 1).unwrap(), 1);
    let rest: (u64, u64) = input.tuple().unwrap();
    assert_eq!(rest, (9, 9));
}

#[test]
fn test_solve_case_streams_long_case() {
    let mut source = String::from("100000 7\n");
    for _ in 0..100_000 {
        source += "u64max ";
    }
    let source = source.replace("u64max", &u64::MAX.to_string());
    let expected = ((u64::MAX as u128 * 100_000) % 7) as u64;
    assert_eq!(solve_case(&mut source.as_bytes(), 1).unwrap(), expected);
}

#[test]
fn test_solve_case_errors() {
    let mut input = "2 0\n4 4".as_bytes();
    assert!(matches!(
        solve_case(&mut input, 3),
        Err(Error::ZeroDivisor { case: 3 })
    ));

    let mut input = "3 5\n1 2".as_bytes();
    match solve_case(&mut input, 2) {
        Err(Error::Case { case: 2, source }) => {
            assert!(matches!(*source, Error::UnexpectedEof { .. }))
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
