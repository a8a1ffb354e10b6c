use crate::trace_bank;
use crate::vcs::bus::consts::{CART_WINDOW_START, PAGE_MASK};
use log::{debug, warn};

/// What started a bank transition
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransitionCause {
    Explicit,
    /// Access to the given cartridge address
    Hotspot(u16),
    Reset,
    Restore,
    Forced,
}

/// Inclusive range of window offsets whose access selects a slice.
///
/// The selected slice is the distance from the first hotspot, so the
/// hotspots `$FF6-$FF9` of an F6 cartridge select slices 0-3.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HotspotRange {
    first: u16,
    last: u16,
}

impl HotspotRange {
    pub const fn new(first: u16, count: u16) -> Self {
        Self {
            first,
            last: first + count - 1,
        }
    }

    #[inline(always)]
    pub fn slice_for(&self, offset: u16) -> Option<u16> {
        if offset >= self.first && offset <= self.last {
            Some(offset - self.first)
        } else {
            None
        }
    }

    /// Cartridge address of the first page holding a hotspot
    pub const fn first_page(&self) -> u16 {
        CART_WINDOW_START | (self.first & !PAGE_MASK)
    }

    /// Cartridge address that selects `slice`
    pub fn address_of(&self, slice: u16) -> Option<u16> {
        (slice <= self.last - self.first).then(|| CART_WINDOW_START + self.first + slice)
    }
}

/// Bank transition bookkeeping shared by every scheme.
///
/// Holds the lock that freezes the mapping for the debugger and rewind, and
/// the flags the debugger consumes after a transition.
#[derive(Debug, Default)]
pub struct BankSwitchController {
    locked: bool,
    bank_changed: bool,
    write_port_read: Option<u16>,
}

impl BankSwitchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&mut self) {
        if !self.locked {
            debug!("Bank lock engaged");
        }
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        if self.locked {
            debug!("Bank lock released");
        }
        self.locked = false;
    }

    #[inline(always)]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether a transition may happen right now
    #[inline]
    pub fn permit(&self, segment: usize, cause: TransitionCause) -> bool {
        if self.locked {
            trace_bank!("locked: ignored {:?} on segment {}", cause, segment);
            return false;
        }
        true
    }

    /// Keep `slice` inside `0..bank_count`
    pub fn clamp(&self, segment: usize, slice: u16, bank_count: u16) -> u16 {
        if slice >= bank_count {
            warn!(
                "Bank {} out of range for segment {} ({} banks), clamped",
                slice, segment, bank_count
            );
            bank_count - 1
        } else {
            slice
        }
    }

    /// Record a completed transition
    pub fn commit(&mut self, segment: usize, from: u16, to: u16, cause: TransitionCause) {
        if cause == TransitionCause::Explicit {
            debug!("Segment {} switched {} -> {}", segment, from, to);
        }
        trace_bank!("segment {}: {} -> {} ({:?})", segment, from, to, cause);
        self.bank_changed = true;
    }

    pub fn mark_changed(&mut self) {
        self.bank_changed = true;
    }

    pub fn take_bank_changed(&mut self) -> bool {
        std::mem::take(&mut self.bank_changed)
    }

    pub fn note_write_port_read(&mut self, address: u16) {
        trace_bank!("read from write port ${:04X}", address);
        self.write_port_read = Some(address);
    }

    pub fn take_write_port_read(&mut self) -> Option<u16> {
        self.write_port_read.take()
    }

    /// Release the lock, returning whether it was held
    pub(crate) fn lift_lock(&mut self) -> bool {
        std::mem::replace(&mut self.locked, false)
    }

    pub(crate) fn restore_lock(&mut self, locked: bool) {
        self.locked = locked;
    }
}
