use crate::vcs::bus::address_space::AddressSpace;
use crate::vcs::cartridge::controller::TransitionCause;
use crate::vcs::cartridge::{BankSelection, Cartridge, SegmentInfo};
use std::fmt;

const BANK_SIZE: usize = 0x1000;
const RESET_VECTOR: usize = 0x0FFC;

/// Where one 4K bank expects to run, read from its reset vector
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BankSummary {
    pub bank: u16,
    pub start: u16,
    pub hotspot: Option<u16>,
}

impl fmt::Display for BankSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bank {} @ ${:04X} - ${:04X}",
            self.bank,
            self.start,
            self.start.wrapping_add(0x0FFF)
        )?;
        if let Some(hotspot) = self.hotspot {
            write!(f, " (hotspot = ${:04X})", hotspot)?;
        }
        Ok(())
    }
}

/// Debugger view of a cartridge.
///
/// The only way to switch banks while the lock is held.
pub struct CartDebugger<'a> {
    cart: &'a mut dyn Cartridge,
    space: &'a mut AddressSpace,
}

impl<'a> CartDebugger<'a> {
    pub fn new(cart: &'a mut dyn Cartridge, space: &'a mut AddressSpace) -> Self {
        Self { cart, space }
    }

    pub fn selection(&self) -> BankSelection {
        self.cart.selection()
    }

    pub fn segments(&self) -> Vec<SegmentInfo> {
        self.cart.segments()
    }

    pub fn bank_count(&self, segment: usize) -> Option<u16> {
        self.cart.segments().get(segment).map(|seg| seg.bank_count)
    }

    /// Switch `segment` to `slice` even if the bank is locked.
    /// The lock state is the same afterwards.
    pub fn force_bank(&mut self, segment: usize, slice: u16) -> bool {
        let controller = &mut self.cart.base_mut().controller;
        let was_locked = controller.lift_lock();

        let switched = self
            .cart
            .select_slice(segment, slice, TransitionCause::Forced, &mut *self.space);

        self.cart.base_mut().controller.restore_lock(was_locked);
        switched
    }

    pub fn lock(&mut self) {
        self.cart.lock_bank();
    }

    pub fn unlock(&mut self) {
        self.cart.unlock_bank();
    }

    pub fn is_locked(&self) -> bool {
        self.cart.bank_locked()
    }

    pub fn take_bank_changed(&mut self) -> bool {
        self.cart.base_mut().controller.take_bank_changed()
    }

    pub fn take_write_port_read(&mut self) -> Option<u16> {
        self.cart.base_mut().controller.take_write_port_read()
    }

    /// One line per bank for schemes made of whole 4K banks; empty for
    /// everything else.
    pub fn bank_summary(&self) -> Vec<BankSummary> {
        let image = self.cart.image();
        let bank_count = self.cart.bank_count();
        if self.cart.segments().len() != 1 || image.len() != bank_count as usize * BANK_SIZE {
            return Vec::new();
        }

        (0..bank_count)
            .map(|bank| {
                let vector = bank as usize * BANK_SIZE + RESET_VECTOR;
                let start = u16::from_le_bytes([image[vector], image[vector + 1]]);
                BankSummary {
                    bank,
                    start: start - start % BANK_SIZE as u16,
                    hotspot: self.cart.hotspot_address(0, bank),
                }
            })
            .collect()
    }
}
