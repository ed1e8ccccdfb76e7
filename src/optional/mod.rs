//! `Optional` — an optional value with inline payload storage.
//!
//! The container owns a fixed-size slot sized and aligned for one `T` and an
//! occupancy flag. The payload is constructed in place when the container
//! engages and destroyed in place when it disengages; the payload type needs
//! no "null" sentinel and is never default-constructed on the container's
//! behalf.
//!
//! Access comes in two flavors:
//! - **Checked** ([`Optional::value`] and friends): validates occupancy and
//!   fails with [`BadOptionalAccess`] on a disengaged container.
//! - **Unchecked** ([`Optional::get_unchecked`] and friends): `unsafe`, zero
//!   branching; occupancy is a caller-guaranteed precondition.

mod raw;

use core::fmt;

use raw::RawSlot;

/// The error returned by checked access to a disengaged [`Optional`].
///
/// This is the only failure the container reports; every other operation is
/// total over its preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadOptionalAccess;

impl fmt::Display for BadOptionalAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("bad optional access: container holds no value")
    }
}

impl std::error::Error for BadOptionalAccess {}

/// An optional value of type `T`, stored inline.
///
/// Unlike `Option<T>`, the payload lives in a manually managed slot gated by
/// an occupancy flag, and the container exposes the full
/// engage/assign/reset/emplace lifecycle of a value holder: assignment into
/// an engaged container reuses the live payload instead of destroying and
/// reconstructing it, while [`emplace`](Optional::emplace) deliberately does
/// the opposite.
///
/// Copy-assignment ([`Clone::clone_from`]) and move-assignment
/// ([`move_from`](Optional::move_from)) both follow the same four-way
/// contract over source/destination occupancy:
///
/// 1. both engaged: payload-to-payload assignment, destination stays engaged
/// 2. destination disengaged, source engaged: construct in place, engage
/// 3. destination engaged, source disengaged: destroy payload, disengage
/// 4. both disengaged: no-op
///
/// Relocating the payload out (`move_from`, [`take`](Optional::take),
/// [`into_value`](Optional::into_value)) disengages the source; Rust has no
/// moved-from object state to leave behind.
///
/// # Example
///
/// ```rust
/// use inlay::Optional;
///
/// let mut a: Optional<i32> = Optional::new();
/// assert!(!a.has_value());
///
/// a.set(5);
/// assert!(a.has_value());
/// assert_eq!(a.value(), Ok(&5));
///
/// let b = a.clone();
/// a.reset();
/// assert!(!a.has_value());
/// assert_eq!(b.value(), Ok(&5));
/// ```
pub struct Optional<T> {
    slot: RawSlot<T>,
    // Invariant: true iff `slot` holds a live payload.
    engaged: bool,
}

impl<T> Optional<T> {
    /// Creates a disengaged container. No payload construction occurs.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slot: RawSlot::uninit(),
            engaged: false,
        }
    }

    /// Creates an engaged container holding `value`.
    #[inline]
    pub fn some(value: T) -> Self {
        Self {
            slot: RawSlot::filled(value),
            engaged: true,
        }
    }

    /// Returns `true` if the container currently holds a payload.
    ///
    /// Never fails and has no side effects.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.engaged
    }

    /// Assigns `value` into the container.
    ///
    /// If engaged, assigns through to the live payload (the payload's own
    /// assignment runs; the slot is not destroyed and re-placed). If
    /// disengaged, constructs the payload in place and engages.
    pub fn set(&mut self, value: T) {
        if self.engaged {
            // SAFETY: the flag is set, so the payload is live.
            unsafe {
                *self.slot.get_mut() = value;
            }
        } else {
            self.slot.place(value);
            self.engaged = true;
        }
    }

    /// Destroys the payload if engaged and disengages. Idempotent.
    pub fn reset(&mut self) {
        if self.engaged {
            // Clear the flag before running the destructor so the invariant
            // holds even if `T::drop` unwinds.
            self.engaged = false;
            // SAFETY: the flag was set, so the payload is live; it is not
            // touched again after this.
            unsafe {
                self.slot.destroy();
            }
        }
    }

    /// Destroys any current payload, constructs a fresh one from `value`,
    /// and returns a reference to it.
    ///
    /// Unlike [`set`](Optional::set), this always destroys-then-reconstructs
    /// and never assigns through, regardless of prior occupancy.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.reset();
        self.engaged = true;
        self.slot.place(value)
    }

    /// Destroys any current payload, constructs a fresh one in place from
    /// `construct`, and returns a reference to it.
    ///
    /// The closure stands in for an arbitrary constructor with an arbitrary
    /// argument list. If it panics, the container is left disengaged.
    pub fn emplace_with<F>(&mut self, construct: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        let value = construct();
        self.engaged = true;
        self.slot.place(value)
    }

    /// Checked access: borrows the payload.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the container is disengaged.
    #[inline]
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        if self.engaged {
            // SAFETY: the flag is set, so the payload is live.
            Ok(unsafe { self.slot.get_ref() })
        } else {
            Err(BadOptionalAccess)
        }
    }

    /// Checked access: mutably borrows the payload.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the container is disengaged.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        if self.engaged {
            // SAFETY: the flag is set, so the payload is live.
            Ok(unsafe { self.slot.get_mut() })
        } else {
            Err(BadOptionalAccess)
        }
    }

    /// Checked access: relocates the payload out of the container.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the container is disengaged.
    #[inline]
    pub fn into_value(mut self) -> Result<T, BadOptionalAccess> {
        if self.engaged {
            self.engaged = false;
            // SAFETY: the flag was set, so the payload is live; the flag is
            // now clear, so `Drop` will not touch the slot again.
            Ok(unsafe { self.slot.read() })
        } else {
            Err(BadOptionalAccess)
        }
    }

    /// Borrows the payload with no occupancy check.
    ///
    /// The fast path of the container: zero branching. Member access goes
    /// through the returned reference.
    ///
    /// # Safety
    /// The container must be engaged. Calling this on a disengaged container
    /// is undefined behavior.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        self.slot.get_ref()
    }

    /// Mutably borrows the payload with no occupancy check.
    ///
    /// # Safety
    /// The container must be engaged. Calling this on a disengaged container
    /// is undefined behavior.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        self.slot.get_mut()
    }

    /// Relocates the payload out of the container with no occupancy check.
    ///
    /// # Safety
    /// The container must be engaged. Calling this on a disengaged container
    /// is undefined behavior.
    #[inline(always)]
    pub unsafe fn into_inner_unchecked(mut self) -> T {
        self.engaged = false;
        self.slot.read()
    }

    /// Relocates the payload out and disengages, or returns `None` if
    /// already disengaged.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        if self.engaged {
            self.engaged = false;
            // SAFETY: the flag was set, so the payload is live; the flag is
            // now clear, so the slot is not touched again.
            Some(unsafe { self.slot.read() })
        } else {
            None
        }
    }

    /// Borrows the payload as a standard `Option` view.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        if self.engaged {
            // SAFETY: the flag is set, so the payload is live.
            Some(unsafe { self.slot.get_ref() })
        } else {
            None
        }
    }

    /// Move-assignment from another container.
    ///
    /// Applies the four-way occupancy contract with the payload relocated
    /// out of `source` rather than cloned. `source` is always disengaged
    /// afterwards.
    pub fn move_from(&mut self, source: &mut Self) {
        match (self.engaged, source.engaged) {
            (true, true) => {
                source.engaged = false;
                // SAFETY: both flags were set, so both payloads are live;
                // the source flag is now clear, so its slot is not touched
                // again. Assigning through runs the destination payload's
                // own drop for the value it replaces.
                unsafe {
                    *self.slot.get_mut() = source.slot.read();
                }
            }
            (false, true) => {
                source.engaged = false;
                // SAFETY: the source flag was set, so its payload is live;
                // the flag is now clear, so its slot is not touched again.
                let value = unsafe { source.slot.read() };
                self.slot.place(value);
                self.engaged = true;
            }
            (true, false) => self.reset(),
            (false, false) => {}
        }
    }
}

impl<T> Default for Optional<T> {
    /// Equivalent to [`Optional::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(payload) => Self::some(payload.clone()),
            None => Self::new(),
        }
    }

    /// Copy-assignment from another container, following the four-way
    /// occupancy contract.
    fn clone_from(&mut self, source: &Self) {
        match (self.engaged, source.engaged) {
            (true, true) => {
                // Payload-to-payload assignment; `T::clone_from` may reuse
                // whatever resources the live payload holds.
                // SAFETY: both flags are set, so both payloads are live.
                unsafe {
                    self.slot.get_mut().clone_from(source.slot.get_ref());
                }
            }
            (false, true) => {
                // SAFETY: the source flag is set, so its payload is live.
                let cloned = unsafe { source.slot.get_ref() }.clone();
                self.slot.place(cloned);
                self.engaged = true;
            }
            (true, false) => self.reset(),
            (false, false) => {}
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(payload) => f.debug_tuple("Optional").field(payload).finish(),
            None => f.write_str("Optional(<disengaged>)"),
        }
    }
}

impl<T> From<T> for Optional<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::some(v),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(mut value: Optional<T>) -> Self {
        value.take()
    }
}
