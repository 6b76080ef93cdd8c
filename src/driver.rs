use std::io::Write;

use crate::error::Result;
use crate::io::{InputStream, ReadValue};
use crate::solver::solve_case;

/// Solves every case in `input`, writing one `Case #i: r` line per case.
///
/// Lines for cases solved before a failure are flushed before the error is
/// returned.
#[tracing::instrument(skip_all)]
pub fn run(input: &mut impl InputStream, output: &mut impl Write) -> Result<()> {
    let result = write_cases(input, output);
    output.flush()?;
    result
}

fn write_cases(input: &mut impl InputStream, output: &mut impl Write) -> Result<()> {
    let t: usize = input.value()?;
    tracing::debug!(cases = t, "start");
    for i_tc in 1..=t {
        let _span = tracing::trace_span!("case", i = i_tc).entered();
        let ans = solve_case(input, i_tc)?;
        writeln!(output, "Case #{}: {}", i_tc, ans)?;
    }
    Ok(())
}

#[cfg(test)]
fn run_str(source: &str) -> (Result<()>, String) {
    let mut input = source.as_bytes();
    let mut output = Vec::new();
    let result = run(&mut input, &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_samples() {
    for (source, expected) in [
        ("1\n3 5\n1 2 3\n", "Case #1: 1\n"),
        ("2\n2 4\n1 1\n3 10\n4 4 4\n", "Case #1: 2\nCase #2: 2\n"),
        ("1\n0 7\n", "Case #1: 0\n"),
        // values spread over lines, CRLF endings
        ("2\r\n3 5\r\n1\r\n2\r\n3\r\n1 2\r\n5", "Case #1: 1\nCase #2: 1\n"),
        ("0\n", ""),
    ] {
        let (result, output) = run_str(source);
        result.unwrap();
        assert_eq!(output, expected);
    }
}

#[test]
fn test_case_labels_and_idempotence() {
    let mut source = String::from("12\n");
    for i in 0..12u64 {
        source += &format!("2 {}\n{} {}\n", i + 2, i, i * 3);
    }
    let (result, first) = run_str(&source);
    result.unwrap();
    let labels: Vec<usize> = first
        .lines()
        .map(|l| l["Case #".len()..l.find(':').unwrap()].parse().unwrap())
        .collect();
    assert_eq!(labels, (1..=12).collect::<Vec<_>>());
    assert_eq!(run_str(&source).1, first);
}

#[test]
fn test_partial_output_on_error() {
    use crate::error::Error;

    let (result, output) = run_str("3\n1 4\n5\n1 0\n5\n1 2\n1\n");
    assert!(matches!(result, Err(Error::ZeroDivisor { case: 2 })));
    assert_eq!(output, "Case #1: 1\n");

    let (result, output) = run_str("2\n1 4\n5\n2 3\n1");
    assert!(matches!(result, Err(Error::Case { case: 2, .. })));
    assert_eq!(output, "Case #1: 1\n");

    let (result, output) = run_str("");
    assert!(matches!(result, Err(Error::UnexpectedEof { .. })));
    assert_eq!(output, "");
}
