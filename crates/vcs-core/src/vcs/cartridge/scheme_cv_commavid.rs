use super::controller::TransitionCause;
use super::mapping::{map_ram_read_port, map_ram_write_port, map_rom};
use super::{BankSelection, CartBase, Cartridge, CartridgeConfig, CartridgeError};
use super::{SegmentInfo, SegmentKind};
use crate::vcs::bankswitch::BankswitchType;
use crate::vcs::bus::address_space::AddressSpace;
use crate::vcs::bus::consts::{CART_WINDOW_LIMIT, CART_WINDOW_MASK};
use crate::vcs::bus::data_bus::DataBus;

const ROM_SIZE: usize = 0x0800;
const RAM_SIZE: usize = 0x0400;

/// Commavid (CV): 1K of RAM read at `$1000-$13FF` and written at
/// `$1400-$17FF`, then 2K of ROM.
///
/// A 4K image carries the RAM's power-on contents in its first 1K and the
/// ROM in its upper half.
pub struct CartridgeCV {
    base: CartBase,
    initial_ram: Option<Box<[u8]>>,
}

impl CartridgeCV {
    pub fn new(image: Vec<u8>, config: &CartridgeConfig) -> Result<CartridgeCV, CartridgeError> {
        let scheme = BankswitchType::Cv;
        let (rom, initial_ram) = match image.len() {
            ROM_SIZE => (image, None),
            len if len == 2 * ROM_SIZE => {
                let initial_ram = image[..RAM_SIZE].to_vec().into_boxed_slice();
                (image[ROM_SIZE..].to_vec(), Some(initial_ram))
            }
            actual => {
                return Err(CartridgeError::CorruptImage {
                    scheme: scheme.name(),
                    actual,
                    expected: format!("{} or {}", ROM_SIZE, 2 * ROM_SIZE),
                });
            }
        };

        let base = CartBase::new(scheme, rom, RAM_SIZE, config, 0, 1)?;
        let mut cart = CartridgeCV { base, initial_ram };
        cart.load_initial_ram();
        Ok(cart)
    }

    fn load_initial_ram(&mut self) {
        match &self.initial_ram {
            Some(contents) => self.base.ram_mut().copy_from_slice(contents),
            None => self.base.init_ram(),
        }
    }
}

impl Cartridge for CartridgeCV {
    fn base(&self) -> &CartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CartBase {
        &mut self.base
    }

    fn install(&mut self, space: &mut AddressSpace) {
        let image_len = self.base.image().len();
        map_ram_read_port(space, 0x1000..0x1400, 0, image_len);
        map_ram_write_port(space, 0x1400..0x1800, 0, image_len);
        map_rom(space, 0x1800..CART_WINDOW_LIMIT, 0);
    }

    fn reset(&mut self, _space: &mut AddressSpace) {
        self.load_initial_ram();
        self.base.controller.mark_changed();
    }

    fn peek(&mut self, address: u16, _space: &mut AddressSpace, bus: &dyn DataBus) -> u8 {
        let offset = address & CART_WINDOW_MASK;
        match offset {
            0x0000..=0x03FF => self.base.ram()[offset as usize],
            0x0400..=0x07FF => {
                self.base
                    .read_from_write_port((offset & 0x03FF) as usize, address, bus)
            }
            _ => self.base.image()[(offset & 0x07FF) as usize],
        }
    }

    fn poke(&mut self, address: u16, value: u8, _space: &mut AddressSpace) -> bool {
        let offset = address & CART_WINDOW_MASK;
        if (0x0400..0x0800).contains(&offset) {
            self.base.ram_mut()[(offset & 0x03FF) as usize] = value;
            true
        } else {
            false
        }
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
        vec![SegmentInfo::new(SegmentKind::Fixed, 1, 0x1800)]
    }

    fn patch(&mut self, address: u16, value: u8) -> bool {
        let offset = address & CART_WINDOW_MASK;
        if offset < 0x0800 {
            self.base.ram_mut()[(offset & 0x03FF) as usize] = value;
        } else {
            self.base.image_mut()[(offset & 0x07FF) as usize] = value;
        }
        self.base.controller.mark_changed();
        true
    }
}
