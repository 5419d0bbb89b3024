//! Whitespace-token reader over any `BufRead`.
//!
//! Tokens may be split across lines in any way; a drill only sees the
//! sequence of tokens, exactly like chained `>>` extraction.

use std::any::type_name;
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use tracing::trace;

use crate::bounded::BoundedBuf;
use crate::error::{DrillError, DrillResult};

pub struct Scanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next raw token, or `None` once the input is exhausted.
    pub fn token(&mut self) -> DrillResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    pub fn next<T: FromStr>(&mut self) -> DrillResult<T> {
        let expected = type_name::<T>();
        let token = self
            .token()?
            .ok_or_else(|| DrillError::unexpected_eof(expected))?;
        trace!(token = %token, expected, "read token");
        token
            .parse()
            .map_err(|_| DrillError::parse(token, expected))
    }

    pub fn read_count(&mut self) -> DrillResult<usize> {
        self.next::<usize>()
    }

    /// A count that must not exceed `capacity`, checked before anything
    /// is sized from it.
    pub fn read_count_within(&mut self, capacity: usize) -> DrillResult<usize> {
        let requested = self.read_count()?;
        if requested > capacity {
            return Err(DrillError::CapacityExceeded {
                requested,
                capacity,
            });
        }
        Ok(requested)
    }

    pub fn read_values(&mut self, n: usize, capacity: usize) -> DrillResult<BoundedBuf> {
        let mut buf = BoundedBuf::with_len_hint(n, capacity)?;
        for _ in 0..n {
            let value = self.next::<i64>()?;
            buf.push(value)?;
        }
        Ok(buf)
    }

    /// A count `n` followed by `n` integers.
    pub fn read_counted(&mut self, capacity: usize) -> DrillResult<BoundedBuf> {
        let n = self.read_count()?;
        self.read_values(n, capacity)
    }

    pub fn read_words(&mut self, n: usize, capacity: usize) -> DrillResult<Vec<String>> {
        if n > capacity {
            return Err(DrillError::CapacityExceeded {
                requested: n,
                capacity,
            });
        }
        let mut words = Vec::with_capacity(n);
        for _ in 0..n {
            let word = self
                .token()?
                .ok_or_else(|| DrillError::unexpected_eof("word"))?;
            words.push(word);
        }
        Ok(words)
    }
}
