use alloc::boxed::Box;
use core::alloc::Layout;
use core::mem::MaybeUninit;
use core::ops::Range;
use core::ptr;

/// Owned, fixed-size block of possibly uninitialised slots.
///
/// `Slots` does not know which of its slots hold live values and never drops
/// them. The owner tracks the live prefix and is responsible for dropping it.
pub(crate) struct Slots<T> {
    block: Box<[MaybeUninit<T>]>,
}

impl<T> Slots<T> {
    /// Allocates `capacity` uninitialised slots.
    ///
    /// Returns `None` if a block of that size cannot be described to the
    /// allocator.
    pub(crate) fn allocate(capacity: usize) -> Option<Self> {
        Layout::array::<T>(capacity).ok()?;
        Some(Self::new_uninit(capacity))
    }

    /// Allocates `capacity` uninitialised slots.
    ///
    /// # Contract
    ///
    /// The caller already knows that `capacity` is allocatable, normally
    /// because it is not larger than a block that exists.
    pub(crate) fn new_uninit(capacity: usize) -> Self {
        Self {
            block: Box::new_uninit_slice(capacity),
        }
    }

    /// Takes over the storage of `values`; every slot is live.
    pub(crate) fn from_boxed(values: Box<[T]>) -> Self {
        let raw = Box::into_raw(values) as *mut [MaybeUninit<T>];
        // SAFETY: `MaybeUninit<T>` has the layout of `T` and the pointer comes
        // straight from a `Box` with the same length and allocator.
        let block = unsafe { Box::from_raw(raw) };
        Self { block }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.block.len()
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        self.block.as_ptr().cast::<T>()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.block.as_mut_ptr().cast::<T>()
    }

    /// Writes `value` into the slot at `index` without reading or dropping
    /// what was there.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the capacity.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn write(&mut self, index: usize, value: T) {
        self.block[index].write(value);
    }

    /// Moves the value out of the slot at `index`.
    ///
    /// # Safety
    ///
    /// The slot must be live. Afterwards it counts as uninitialised.
    pub(crate) unsafe fn read(&self, index: usize) -> T {
        unsafe { ptr::read(self.as_ptr().add(index)) }
    }

    /// # Safety
    ///
    /// Slots `[0, len)` must be live.
    pub(crate) unsafe fn live(&self, len: usize) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.as_ptr(), len) }
    }

    /// # Safety
    ///
    /// Slots `[0, len)` must be live.
    pub(crate) unsafe fn live_mut(&mut self, len: usize) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Bitwise-moves the live values in `from` into `target`, starting at slot `at`.
    ///
    /// # Safety
    ///
    /// Slots in `from` must be live and `at + from.len()` must not exceed the
    /// target capacity. Afterwards the source slots count as uninitialised.
    pub(crate) unsafe fn move_range_to(&self, from: Range<usize>, target: &mut Self, at: usize) {
        let count = from.end - from.start;
        unsafe {
            ptr::copy_nonoverlapping(
                self.as_ptr().add(from.start),
                target.as_mut_ptr().add(at),
                count,
            );
        }
    }

    /// Moves the live values `[index, len)` one slot to the right, leaving
    /// slot `index` uninitialised.
    ///
    /// # Safety
    ///
    /// Slots `[index, len)` must be live and `len` must be below the capacity.
    pub(crate) unsafe fn shift_right(&mut self, index: usize, len: usize) {
        let base = self.as_mut_ptr();
        unsafe {
            ptr::copy(base.add(index), base.add(index + 1), len - index);
        }
    }

    /// Drops the values in `range` in place.
    ///
    /// # Safety
    ///
    /// Slots in `range` must be live. Afterwards they count as uninitialised.
    pub(crate) unsafe fn drop_range(&mut self, range: Range<usize>) {
        let count = range.end - range.start;
        unsafe {
            let start = self.as_mut_ptr().add(range.start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(start, count));
        }
    }
}
