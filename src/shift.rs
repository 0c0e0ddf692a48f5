use crate::core::StepVec;
use crate::error::StepVecError;
use crate::raw::Slots;

impl<T> StepVec<T> {
    /// Appends `value` at the end.
    ///
    /// Returns `true` if the backing storage had to grow by the growth increment.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity cannot be allocated.
    pub fn push_back(&mut self, value: T) -> bool {
        match self.insert(self.len, value) {
            Ok(grew) => grew,
            Err(err) => panic!("{err}"),
        }
    }

    /// Inserts `value` at index 0, moving every element one slot to the right.
    ///
    /// Returns `true` if the backing storage had to grow by the growth increment.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity cannot be allocated.
    pub fn push_front(&mut self, value: T) -> bool {
        match self.insert(0, value) {
            Ok(grew) => grew,
            Err(err) => panic!("{err}"),
        }
    }

    /// Inserts `value` at `index`, moving the elements at and after `index`
    /// one slot to the right.
    ///
    /// If the vector is full, the backing storage first grows by exactly the
    /// growth increment. Returns `true` if that happened.
    ///
    /// # Errors
    ///
    /// Returns `StepVecError::IndexOutOfBounds` if `index > len()`, or
    /// `StepVecError::CapacityOverflow` if the grown capacity cannot be
    /// allocated. On error the vector is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<bool, StepVecError> {
        let len = self.len;
        if index > len {
            return Err(StepVecError::IndexOutOfBounds { index, length: len });
        }

        if len < self.capacity() {
            // SAFETY: [index, len) are live and slot `len` exists
            unsafe { self.slots.shift_right(index, len) };
            self.slots.write(index, value);
            self.len += 1;
            return Ok(false);
        }

        let mut grown = self.allocate_grown(self.growth_increment())?;
        // SAFETY: both halves are live and the new block has room for len + 1
        unsafe {
            self.slots.move_range_to(0..index, &mut grown, 0);
            self.slots.move_range_to(index..len, &mut grown, index + 1);
        }
        grown.write(index, value);
        self.replace_slots(grown);
        self.len += 1;
        Ok(true)
    }

    /// Removes and returns the element at `index`, moving the following
    /// elements one slot to the left.
    ///
    /// The backing storage shrinks by exactly one slot, so both `len()` and
    /// `capacity()` drop by one.
    ///
    /// # Errors
    ///
    /// Returns `StepVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, StepVecError> {
        self.check_bounds(index)?;
        let len = self.len;

        let mut shrunk = Slots::new_uninit(self.capacity() - 1);
        // SAFETY: `index` is live; the rest of [0, len) fits in the smaller block
        let value = unsafe {
            let value = self.slots.read(index);
            self.slots.move_range_to(0..index, &mut shrunk, 0);
            self.slots.move_range_to(index + 1..len, &mut shrunk, index);
            value
        };
        self.len -= 1;
        self.replace_slots(shrunk);
        Ok(value)
    }
}
