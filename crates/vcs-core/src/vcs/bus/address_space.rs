use crate::vcs::bus::consts::*;
use crate::vcs::bus::page_access::PageAccess;
use std::ops::Range;

/// Page table for the 4K cartridge window.
///
/// Indexed by `(address & CART_WINDOW_MASK) >> PAGE_SHIFT`, so every address
/// with A12 set resolves to exactly one descriptor in O(1).
#[derive(Debug, Clone)]
pub struct AddressSpace {
    pages: [PageAccess; NUM_PAGES],
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressSpace {
    pub fn new() -> Self {
        Self {
            pages: [PageAccess::default(); NUM_PAGES],
        }
    }

    #[inline(always)]
    pub fn page_index(address: u16) -> usize {
        ((address & CART_WINDOW_MASK) >> PAGE_SHIFT) as usize
    }

    pub fn set_page_access(&mut self, address: u16, access: PageAccess) {
        debug_assert_eq!(address & PAGE_MASK, 0, "unaligned page ${:04X}", address);
        self.pages[Self::page_index(address)] = access;
    }

    #[inline(always)]
    pub fn get_page_access(&self, address: u16) -> &PageAccess {
        &self.pages[Self::page_index(address)]
    }

    /// Reprogram every page in `range` (cartridge addresses, page aligned).
    ///
    /// `access_for` receives each page's address. All pages are replaced
    /// before this returns.
    pub fn map_pages<F>(&mut self, range: Range<u16>, mut access_for: F)
    where
        F: FnMut(u16) -> PageAccess,
    {
        debug_assert_eq!(range.start & PAGE_MASK, 0);
        debug_assert_eq!(range.end & PAGE_MASK, 0);
        for addr in range.step_by(PAGE_SIZE as usize) {
            self.set_page_access(addr, access_for(addr));
        }
    }

    /// `(page address, descriptor)` for the whole window
    pub fn pages(&self) -> impl Iterator<Item = (u16, &PageAccess)> {
        self.pages
            .iter()
            .enumerate()
            .map(|(i, access)| (CART_WINDOW_START + ((i as u16) << PAGE_SHIFT), access))
    }
}
