use super::controller::TransitionCause;
use super::{BankSelection, CartBase, Cartridge, CartridgeConfig, CartridgeError};
use super::{SegmentInfo, SegmentKind};
use crate::vcs::bankswitch::BankswitchType;
use crate::vcs::bus::address_space::AddressSpace;
use crate::vcs::bus::consts::{CART_WINDOW_LIMIT, CART_WINDOW_START, PAGE_SIZE};
use crate::vcs::bus::data_bus::DataBus;
use crate::vcs::bus::page_access::{DirectBase, PageAccess, PageAccessType};

const MAX_SIZE: usize = 0x0800;

/// Plain ROM of up to 2K, mirrored through the whole window.
///
/// Images smaller than a page are repeated until they fill one, so every
/// page can still be served by a direct pointer.
pub struct Cartridge2K {
    base: CartBase,
    mask: u16,
}

impl Cartridge2K {
    pub fn new(image: Vec<u8>, config: &CartridgeConfig) -> Result<Cartridge2K, CartridgeError> {
        let scheme = BankswitchType::Bs2K;
        let len = image.len();
        if len == 0 || len > MAX_SIZE || !len.is_power_of_two() {
            return Err(CartridgeError::CorruptImage {
                scheme: scheme.name(),
                actual: len,
                expected: format!("a power of two up to {}", MAX_SIZE),
            });
        }

        let size = len.max(PAGE_SIZE as usize);
        let image: Vec<u8> = image.iter().copied().cycle().take(size).collect();

        let base = CartBase::new(scheme, image, 0, config, 0, 1)?;
        Ok(Cartridge2K {
            base,
            mask: (size - 1) as u16,
        })
    }
}

impl Cartridge for Cartridge2K {
    fn base(&self) -> &CartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CartBase {
        &mut self.base
    }

    fn install(&mut self, space: &mut AddressSpace) {
        let mask = self.mask;
        space.map_pages(CART_WINDOW_START..CART_WINDOW_LIMIT, |addr| {
            let offset = (addr & mask) as usize;
            PageAccess::new(PageAccessType::READ)
                .with_peek(DirectBase::Rom(offset))
                .with_code_access(offset)
        });
    }

    fn reset(&mut self, _space: &mut AddressSpace) {
        self.base.controller.mark_changed();
    }

    fn peek(&mut self, address: u16, _space: &mut AddressSpace, _bus: &dyn DataBus) -> u8 {
        self.base.image()[(address & self.mask) as usize]
    }

    fn poke(&mut self, _address: u16, _value: u8, _space: &mut AddressSpace) -> bool {
        false
    }

    fn select_slice(
        &mut self,
        _segment: usize,
        _slice: u16,
        _cause: TransitionCause,
        _space: &mut AddressSpace,
    ) -> bool {
        false
    }

    fn selection(&self) -> BankSelection {
        BankSelection(vec![0])
    }

    fn segments(&self) -> Vec<SegmentInfo> {
        vec![SegmentInfo::new(SegmentKind::Fixed, 1, CART_WINDOW_START)]
    }

    fn patch(&mut self, address: u16, value: u8) -> bool {
        let index = (address & self.mask) as usize;
        self.base.image_mut()[index] = value;
        self.base.controller.mark_changed();
        true
    }
}
