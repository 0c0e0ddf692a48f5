use crate::core::StepVec;
use crate::error::StepVecError;
use crate::raw::Slots;

impl<T> StepVec<T> {
    /// Grows the backing storage by exactly `extra` slots.
    ///
    /// A new block of `capacity() + extra` slots is allocated, the live
    /// elements are moved into it in order, and the old block is released.
    /// Runs in `O(capacity + extra)`.
    ///
    /// # Errors
    ///
    /// Returns `StepVecError::InvalidGrowthAmount` if `extra` is 0, or
    /// `StepVecError::CapacityOverflow` if the new capacity cannot be allocated.
    /// On error the vector is unchanged.
    pub fn ensure_capacity(&mut self, extra: usize) -> Result<(), StepVecError> {
        if extra == 0 {
            return Err(StepVecError::InvalidGrowthAmount { amount: extra });
        }
        let mut grown = self.allocate_grown(extra)?;
        // SAFETY: [0, len) are live and fit in the larger block
        unsafe { self.slots.move_range_to(0..self.len, &mut grown, 0) };
        self.replace_slots(grown);
        Ok(())
    }

    /// Allocates an empty block `extra` slots larger than the current one.
    pub(crate) fn allocate_grown(&self, extra: usize) -> Result<Slots<T>, StepVecError> {
        let capacity = self.capacity();
        let overflow = StepVecError::CapacityOverflow {
            capacity,
            requested: extra,
        };
        let new_capacity = capacity.checked_add(extra).ok_or(overflow.clone())?;
        Slots::allocate(new_capacity).ok_or(overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_ensure_capacity_adds_exact_amount() {
        let mut v = StepVec::from_sequence(vec![1, 2, 3], 5).unwrap();

        v.ensure_capacity(4).unwrap();
        assert_eq!(v.capacity(), 7);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_ensure_capacity_zero_rejected() {
        let mut v = StepVec::from_sequence(vec![1, 2, 3], 5).unwrap();

        assert_eq!(
            v.ensure_capacity(0).unwrap_err(),
            StepVecError::InvalidGrowthAmount { amount: 0 }
        );
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_ensure_capacity_overflow_leaves_vector_unchanged() {
        let mut v = StepVec::from_sequence(vec![1u32, 2], 5).unwrap();

        assert_eq!(
            v.ensure_capacity(usize::MAX).unwrap_err(),
            StepVecError::CapacityOverflow {
                capacity: 2,
                requested: usize::MAX
            }
        );
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_slice(), &[1, 2]);
    }
}
