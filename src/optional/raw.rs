//! Raw inline storage for a single payload.
//!
//! This layer intentionally exposes *minimal* surface area and concentrates
//! the unsafe storage primitives in one module. It knows nothing about
//! occupancy: the lifecycle layer above owns the engaged flag and must
//! uphold the liveness contract on every call here.

use core::mem::MaybeUninit;
use core::ptr;

/// A block of uninitialized memory sized and aligned for exactly one `T`.
///
/// The slot lives inline in its container, is exclusively owned by it, and
/// is never aliased or separately freed. `MaybeUninit` provides the size and
/// alignment guarantees; nothing here tracks whether a payload is live.
pub(crate) struct RawSlot<T> {
    storage: MaybeUninit<T>,
}

impl<T> RawSlot<T> {
    /// Creates a slot holding no payload.
    #[inline(always)]
    pub(crate) const fn uninit() -> Self {
        Self {
            storage: MaybeUninit::uninit(),
        }
    }

    /// Creates a slot already holding `value`.
    #[inline(always)]
    pub(crate) const fn filled(value: T) -> Self {
        Self {
            storage: MaybeUninit::new(value),
        }
    }

    /// Constructs `value` in place and returns a reference to it.
    ///
    /// Any payload previously live in the slot is overwritten without being
    /// dropped; callers must destroy it first.
    #[inline(always)]
    pub(crate) fn place(&mut self, value: T) -> &mut T {
        self.storage.write(value)
    }

    /// Borrows the payload.
    ///
    /// # Safety
    /// The slot must hold a live payload.
    #[inline(always)]
    pub(crate) unsafe fn get_ref(&self) -> &T {
        self.storage.assume_init_ref()
    }

    /// Mutably borrows the payload.
    ///
    /// # Safety
    /// The slot must hold a live payload.
    #[inline(always)]
    pub(crate) unsafe fn get_mut(&mut self) -> &mut T {
        self.storage.assume_init_mut()
    }

    /// Relocates the payload out of the slot by bitwise copy.
    ///
    /// # Safety
    /// The slot must hold a live payload, and the caller must treat the slot
    /// as uninitialized afterwards: reading, dropping, or relocating the
    /// payload again would duplicate it.
    #[inline(always)]
    pub(crate) unsafe fn read(&self) -> T {
        self.storage.assume_init_read()
    }

    /// Destroys the payload in place.
    ///
    /// # Safety
    /// The slot must hold a live payload, and the caller must treat the slot
    /// as uninitialized afterwards.
    #[inline(always)]
    pub(crate) unsafe fn destroy(&mut self) {
        ptr::drop_in_place(self.storage.as_mut_ptr());
    }
}
