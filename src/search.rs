use crate::core::StepVec;

impl<T: PartialEq> StepVec<T> {
    /// Returns `true` if any live element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    /// Returns the index of the first live element equal to `value`.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}
