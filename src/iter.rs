use core::iter::FusedIterator;

use crate::core::StepVec;
use crate::raw::Slots;

impl<'a, T> IntoIterator for &'a StepVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut StepVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for StepVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // The emptied vector owns nothing live, so its drop is a no-op
        let back = core::mem::take(&mut self.len);
        let slots = core::mem::replace(&mut self.slots, Slots::new_uninit(0));
        IntoIter {
            slots,
            front: 0,
            back,
        }
    }
}

/// Owning iterator over the elements of a `StepVec`
///
/// Elements that are not consumed are dropped with the iterator.
pub struct IntoIter<T> {
    slots: Slots<T>,
    front: usize,
    back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: [front, back) are live; `front` is retired right after
        let value = unsafe { self.slots.read(self.front) };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `back` was live and is now outside [front, back)
        Some(unsafe { self.slots.read(self.back) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: exactly [front, back) are still live
        unsafe { self.slots.drop_range(self.front..self.back) };
    }
}
