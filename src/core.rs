use alloc::boxed::Box;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::StepVecError;
use crate::raw::Slots;

/// A growable vector whose capacity grows by a fixed, caller-chosen step
#[allow(clippy::module_name_repetitions)]
pub struct StepVec<T> {
    pub(crate) slots: Slots<T>,
    pub(crate) len: usize,
    growth_increment: usize,
}

fn check_growth_increment(value: usize) -> Result<(), StepVecError> {
    if value == 0 {
        return Err(StepVecError::InvalidConfiguration {
            parameter: "growth_increment",
            value,
        });
    }
    Ok(())
}

impl<T> StepVec<T> {
    /// Creates an empty `StepVec` with zero capacity.
    ///
    /// # Errors
    ///
    /// Returns `StepVecError::InvalidConfiguration` if `growth_increment` is 0.
    pub fn new(growth_increment: usize) -> Result<Self, StepVecError> {
        Self::with_capacity(0, growth_increment)
    }

    /// Creates an empty `StepVec` with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `StepVecError::InvalidConfiguration` if `growth_increment` is 0,
    /// or `StepVecError::CapacityOverflow` if `capacity` slots cannot be allocated.
    pub fn with_capacity(capacity: usize, growth_increment: usize) -> Result<Self, StepVecError> {
        check_growth_increment(growth_increment)?;
        let slots = Slots::allocate(capacity).ok_or(StepVecError::CapacityOverflow {
            capacity: 0,
            requested: capacity,
        })?;
        Ok(Self {
            slots,
            len: 0,
            growth_increment,
        })
    }

    /// Creates a `StepVec` that takes ownership of an existing sequence.
    ///
    /// The sequence's storage becomes the backing storage, so both the length
    /// and the capacity equal the number of elements.
    ///
    /// # Errors
    ///
    /// Returns `StepVecError::InvalidConfiguration` if `growth_increment` is 0.
    pub fn from_sequence(
        sequence: impl Into<Box<[T]>>,
        growth_increment: usize,
    ) -> Result<Self, StepVecError> {
        check_growth_increment(growth_increment)?;
        let slots = Slots::from_boxed(sequence.into());
        let len = slots.capacity();
        Ok(Self {
            slots,
            len,
            growth_increment,
        })
    }

    /// Replaces the growth increment used by later automatic growth.
    ///
    /// # Errors
    ///
    /// Returns `StepVecError::InvalidConfiguration` if `value` is 0. The
    /// previous increment stays in effect.
    pub fn set_growth_increment(&mut self, value: usize) -> Result<(), StepVecError> {
        check_growth_increment(value)?;
        self.growth_increment = value;
        Ok(())
    }

    #[must_use]
    pub fn growth_increment(&self) -> usize {
        self.growth_increment
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns `true` if `index` addresses a live element.
    #[must_use]
    pub fn in_bounds(&self, index: usize) -> bool {
        index < self.len
    }

    pub(crate) fn check_bounds(&self, index: usize) -> Result<(), StepVecError> {
        if self.in_bounds(index) {
            Ok(())
        } else {
            Err(StepVecError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        }
    }

    /// Gets a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `StepVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, StepVecError> {
        self.check_bounds(index)?;
        // SAFETY: bounds checked above
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Gets a mutable reference to the element at `index`. Writing through it
    /// changes the element stored in the vector.
    ///
    /// # Errors
    ///
    /// Returns `StepVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, StepVecError> {
        self.check_bounds(index)?;
        // SAFETY: bounds checked above
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Overwrites the element at `index`, dropping the old one.
    ///
    /// # Errors
    ///
    /// Returns `StepVecError::IndexOutOfBounds` if `index >= len()`. The vector
    /// is left unchanged and `value` is dropped.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), StepVecError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Gets a reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be below `len()`. Anything else is undefined behavior.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "get_unchecked index out of bounds");
        unsafe { &*self.slots.as_ptr().add(index) }
    }

    /// Gets a mutable reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be below `len()`. Anything else is undefined behavior.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "get_unchecked_mut index out of bounds");
        unsafe { &mut *self.slots.as_mut_ptr().add(index) }
    }

    /// Overwrites the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be below `len()`. Anything else is undefined behavior.
    pub unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        unsafe {
            *self.get_unchecked_mut(index) = value;
        }
    }

    /// Returns the live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are live
        unsafe { self.slots.live(self.len) }
    }

    /// Returns a mutable view over exactly the live elements.
    ///
    /// Writes through the view change the vector. The view borrows the vector,
    /// so nothing that can move or resize the backing storage may run while
    /// the view is alive.
    #[must_use]
    pub fn live_view(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are live
        unsafe { self.slots.live_mut(self.len) }
    }

    /// Clones up to `destination.len()` live elements into `destination`.
    ///
    /// Returns the number of elements written.
    pub fn copy_into(&self, destination: &mut [T]) -> usize
    where
        T: Clone,
    {
        let count = self.len.min(destination.len());
        if let (Some(target), Some(source)) =
            (destination.get_mut(..count), self.as_slice().get(..count))
        {
            target.clone_from_slice(source);
        }
        count
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.live_view().iter_mut()
    }

    /// Installs `slots` as the backing storage. The live prefix must
    /// already have been moved into it.
    pub(crate) fn replace_slots(&mut self, slots: Slots<T>) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = self.slots.capacity(),
            new_capacity = slots.capacity(),
            len = self.len,
            "replaced backing storage"
        );
        self.slots = slots;
    }
}

impl<T> Drop for StepVec<T> {
    fn drop(&mut self) {
        // SAFETY: slots [0, len) are live and nothing reads them afterwards
        unsafe { self.slots.drop_range(0..self.len) };
    }
}

impl<T: Clone> Clone for StepVec<T> {
    fn clone(&self) -> Self {
        let mut copy = Self {
            slots: Slots::new_uninit(self.capacity()),
            len: 0,
            growth_increment: self.growth_increment,
        };
        for value in self {
            copy.slots.write(copy.len, value.clone());
            copy.len += 1;
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for StepVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepVec")
            .field("data", &self.as_slice())
            .field("capacity", &self.capacity())
            .field("growth_increment", &self.growth_increment)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for StepVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for StepVec<T> {}

impl<T> Index<usize> for StepVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "Index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        // SAFETY: bounds asserted above
        unsafe { self.get_unchecked(index) }
    }
}

impl<T> IndexMut<usize> for StepVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "Index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        // SAFETY: bounds asserted above
        unsafe { self.get_unchecked_mut(index) }
    }
}

impl<T> Extend<T> for StepVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}
