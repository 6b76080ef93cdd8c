use std::fmt::Display;
use std::io::{BufRead, BufReader, BufWriter, Read, StdinLock, Stdout};
use std::str::FromStr;

use crate::error::{Error, Result};

pub trait InputStream {
    /// Next whitespace-delimited token, or `None` at end of input.
    fn token(&mut self) -> Result<Option<&[u8]>>;
}

// cheap whitespace check, also treats control bytes as separators
#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

impl InputStream for &[u8] {
    fn token(&mut self) -> Result<Option<&[u8]>> {
        let Some(idx) = self.iter().position(|&c| !is_whitespace(c)) else {
            *self = &[];
            return Ok(None);
        };
        *self = &self[idx..];
        let idx = self
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.len());
        let (token, buf_new) = self.split_at(idx);
        *self = buf_new;
        Ok(Some(token))
    }
}

pub struct InputAtOnce {
    buf: Box<[u8]>,
    cursor: usize,
}

impl InputAtOnce {
    pub fn new(buf: Box<[u8]>) -> Self {
        Self { buf, cursor: 0 }
    }

    fn take(&mut self, n: usize) -> &[u8] {
        let n = n.min(self.buf.len() - self.cursor);
        let slice = &self.buf[self.cursor..self.cursor + n];
        self.cursor += n;
        slice
    }
}

impl InputStream for InputAtOnce {
    fn token(&mut self) -> Result<Option<&[u8]>> {
        let rest = &self.buf[self.cursor..];
        let Some(skip) = rest.iter().position(|&c| !is_whitespace(c)) else {
            self.cursor = self.buf.len();
            return Ok(None);
        };
        self.cursor += skip;
        let len = self.buf[self.cursor..]
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.buf.len() - self.cursor);
        Ok(Some(self.take(len)))
    }
}

/// Reads one line at a time, so tokens are available as soon as their line
/// arrives.
pub struct LineSyncedInput<R: BufRead> {
    line_buf: Vec<u8>,
    line_cursor: usize,
    inner: R,
}

impl<R: BufRead> LineSyncedInput<R> {
    pub fn new(r: R) -> Self {
        Self {
            line_buf: Vec::new(),
            line_cursor: 0,
            inner: r,
        }
    }

    fn eol(&self) -> bool {
        self.line_cursor == self.line_buf.len()
    }

    // false on EOF
    fn refill_line_buf(&mut self) -> Result<bool> {
        self.line_buf.clear();
        self.line_cursor = 0;
        Ok(self.inner.read_until(b'\n', &mut self.line_buf)? > 0)
    }
}

impl<R: BufRead> InputStream for LineSyncedInput<R> {
    fn token(&mut self) -> Result<Option<&[u8]>> {
        loop {
            if self.eol() && !self.refill_line_buf()? {
                return Ok(None);
            }
            let rest = &self.line_buf[self.line_cursor..];
            match rest.iter().position(|&c| !is_whitespace(c)) {
                Some(skip) => {
                    let start = self.line_cursor + skip;
                    let len = self.line_buf[start..]
                        .iter()
                        .position(|&c| is_whitespace(c))
                        .unwrap_or(self.line_buf.len() - start);
                    self.line_cursor = start + len;
                    return Ok(Some(&self.line_buf[start..start + len]));
                }
                None => self.line_cursor = self.line_buf.len(),
            }
        }
    }
}

pub trait ReadValue<T> {
    fn value(&mut self) -> Result<T>;

    fn vec(&mut self, n: usize) -> Result<Vec<T>> {
        (0..n).map(|_| self.value()).collect()
    }
}

impl<T: FromStr, I: InputStream> ReadValue<T> for I
where
    T::Err: Display,
{
    fn value(&mut self) -> Result<T> {
        let token = self.token()?.ok_or(Error::UnexpectedEof {
            expected: std::any::type_name::<T>(),
        })?;
        let invalid = |reason: String| Error::InvalidToken {
            token: String::from_utf8_lossy(token).into_owned(),
            reason,
        };
        let text = std::str::from_utf8(token).map_err(|e| invalid(e.to_string()))?;
        text.parse::<T>().map_err(|e| invalid(e.to_string()))
    }
}

pub trait ReadTuple<T> {
    fn tuple(&mut self) -> Result<T>;
}

macro_rules! impl_tuple {
    ($($T:ident )+) => {
        impl<$($T,)+ I> ReadTuple<($($T,)+)> for I
        where
            I: $(ReadValue<$T> + )+ InputStream
        {
            fn tuple(&mut self) -> Result<($($T,)+)> {
                Ok(($(<I as ReadValue<$T>>::value(self)?,)+))
            }
        }
    };
}

macro_rules! impl_tuples {
    () => {};
    ($T1:ident $($T:ident)*) => {
        impl_tuples! {$($T )*}
        impl_tuple! {$T1 $($T )*}
    };
}

impl_tuples! {T0 T1}

pub fn stdin_at_once() -> Result<InputAtOnce> {
    let mut reader = BufReader::new(std::io::stdin().lock());
    let mut buf: Vec<u8> = vec![];
    reader.read_to_end(&mut buf)?;
    Ok(InputAtOnce::new(buf.into_boxed_slice()))
}

/// Interactive stdin: tokens are handed out as soon as their line is typed.
pub fn stdin_buf() -> LineSyncedInput<StdinLock<'static>> {
    LineSyncedInput::new(std::io::stdin().lock())
}

pub fn stdout_buf() -> BufWriter<Stdout> {
    BufWriter::new(std::io::stdout())
}

#[test]
fn test_stream() {
    let source = " 2 3 4 5 \r\n 2 4 \n\n\n19235 3\nabc -7\n123\r\n";
    fn test_sub(mut input: impl InputStream) {
        let v: Vec<u64> = input.vec(4).unwrap();
        assert_eq!(v, [2, 3, 4, 5]);
        let (n, k): (usize, u64) = input.tuple().unwrap();
        assert_eq!((n, k), (2, 4));
        let (a, b): (u32, u8) = input.tuple().unwrap();
        assert_eq!((a, b), (19235, 3));
        let s: String = input.value().unwrap();
        assert_eq!(s, "abc");
        let x: i64 = input.value().unwrap();
        assert_eq!(x, -7);
        let last: u16 = input.value().unwrap();
        assert_eq!(last, 123);
        assert!(input.token().unwrap().is_none());
    }
    test_sub(source.as_bytes());
    test_sub(InputAtOnce::new(source.as_bytes().into()));
    test_sub(LineSyncedInput::new(source.as_bytes()));
}

#[test]
fn test_errors() {
    let mut input = "12 -3 x".as_bytes();
    let n: u64 = input.value().unwrap();
    assert_eq!(n, 12);
    let neg: Result<u64> = input.value();
    assert!(matches!(neg, Err(Error::InvalidToken { ref token, .. }) if token == "-3"));
    let garbage: Result<u64> = input.value();
    assert!(matches!(garbage, Err(Error::InvalidToken { .. })));
    let eof: Result<u64> = input.value();
    assert!(matches!(eof, Err(Error::UnexpectedEof { .. })));

    let overflow: Result<u8> = "256".as_bytes().value();
    assert!(matches!(overflow, Err(Error::InvalidToken { .. })));
}

#[test]
fn test_line_synced_blank_lines() {
    let mut input = LineSyncedInput::new("\n\n   \n 7\n\n".as_bytes());
    let x: u64 = input.value().unwrap();
    assert_eq!(x, 7);
    let eof: Result<u64> = input.value();
    assert!(matches!(eof, Err(Error::UnexpectedEof { .. })));
}
