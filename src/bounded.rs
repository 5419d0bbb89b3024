//! A growable integer buffer with a hard upper bound.
//!
//! Every array drill declares how many values it is willing to hold. Asking
//! for more is reported up front instead of writing past the end.

use std::ops::{Deref, DerefMut};

use crate::error::{DrillError, DrillResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedBuf {
    items: Vec<i64>,
    capacity: usize,
}

impl BoundedBuf {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Allocates room for `requested` values, failing if that exceeds the bound.
    pub fn with_len_hint(requested: usize, capacity: usize) -> DrillResult<Self> {
        Self::check(requested, capacity)?;
        Ok(Self {
            items: Vec::with_capacity(requested),
            capacity,
        })
    }

    pub fn from_values(values: &[i64], capacity: usize) -> DrillResult<Self> {
        let mut buf = Self::with_len_hint(values.len(), capacity)?;
        buf.items.extend_from_slice(values);
        Ok(buf)
    }

    pub fn push(&mut self, value: i64) -> DrillResult<()> {
        Self::check(self.items.len() + 1, self.capacity)?;
        self.items.push(value);
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.items
    }

    fn check(requested: usize, capacity: usize) -> DrillResult<()> {
        if requested > capacity {
            return Err(DrillError::CapacityExceeded {
                requested,
                capacity,
            });
        }
        Ok(())
    }
}

impl Deref for BoundedBuf {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.items
    }
}

impl DerefMut for BoundedBuf {
    fn deref_mut(&mut self) -> &mut [i64] {
        &mut self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_within_capacity() {
        let mut buf = BoundedBuf::new(3);
        buf.push(1).unwrap();
        buf.push(2).unwrap();
        buf.push(3).unwrap();
        assert_eq!(&buf[..], &[1, 2, 3]);
        assert_eq!(buf.capacity(), 3);
    }

    #[test]
    fn test_push_past_capacity_fails() {
        let mut buf = BoundedBuf::new(1);
        buf.push(7).unwrap();
        let err = buf.push(8).unwrap_err();
        assert!(matches!(
            err,
            DrillError::CapacityExceeded {
                requested: 2,
                capacity: 1
            }
        ));
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn test_len_hint_checked_before_reading() {
        assert!(BoundedBuf::with_len_hint(200, 200).is_ok());
        assert!(BoundedBuf::with_len_hint(201, 200).is_err());
    }

    #[test]
    fn test_slice_access_is_mutable() {
        let mut buf = BoundedBuf::from_values(&[3, 1, 2], 10).unwrap();
        buf.sort();
        assert_eq!(buf.into_vec(), vec![1, 2, 3]);
    }
}
