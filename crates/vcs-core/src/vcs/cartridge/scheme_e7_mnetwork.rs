use super::controller::{HotspotRange, TransitionCause};
use super::mapping::{map_device, map_ram_read_port, map_ram_write_port, map_rom};
use super::{BankSelection, CartBase, Cartridge, CartridgeConfig, CartridgeError};
use super::{SegmentInfo, SegmentKind};
use crate::vcs::bankswitch::BankswitchType;
use crate::vcs::bus::address_space::AddressSpace;
use crate::vcs::bus::consts::{CART_WINDOW_LIMIT, CART_WINDOW_MASK};
use crate::vcs::bus::data_bus::DataBus;

const SLICE_SIZE: usize = 0x0800;
const SLICE_MASK: u16 = 0x07FF;

// 1K of RAM visible in place of the last slice, then four 256 byte banks
const LOW_RAM_SIZE: usize = 0x0400;
const RAM_BANK_SIZE: usize = 0x0100;
const RAM_BANKS: u16 = 4;
const RAM_SIZE: usize = LOW_RAM_SIZE + RAM_BANKS as usize * RAM_BANK_SIZE;

const SEGMENT_SWITCHABLE: usize = 0;
// Segment 1 is the fixed last slice
const SEGMENT_RAM: usize = 2;

const RAM_HOTSPOTS: HotspotRange = HotspotRange::new(0xFE8, RAM_BANKS);

/*
   M-Network (E7) layout. E78K is the same board with half the ROM.

   $1000 +-----------------------+
         | slice 0 (2K)          |  or 1K RAM when the last slice is selected:
         |                       |  write $1000-$13FF, read $1400-$17FF
   $1800 +-----------------------+
         | RAM bank write port   |  256 bytes
   $1900 +-----------------------+
         | RAM bank read port    |  256 bytes
   $1A00 +-----------------------+
         | last slice (fixed)    |
         |          hotspots     |  $1FE0-$1FE7 slice, $1FE8-$1FEB RAM bank
   $1FFF +-----------------------+
*/
pub struct CartridgeE7 {
    base: CartBase,
    slice_hotspots: HotspotRange,
    bank_count: u16,
    slice: u16,
    ram_bank: u16,
}

impl CartridgeE7 {
    pub fn new(
        image: Vec<u8>,
        scheme: BankswitchType,
        config: &CartridgeConfig,
    ) -> Result<CartridgeE7, CartridgeError> {
        let (bank_count, slice_hotspots) = match scheme {
            BankswitchType::E7 => (8, HotspotRange::new(0xFE0, 8)),
            BankswitchType::E78K => (4, HotspotRange::new(0xFE4, 4)),
            other => return Err(CartridgeError::UnsupportedScheme(other.name())),
        };

        let expected = bank_count as usize * SLICE_SIZE;
        if image.len() != expected {
            return Err(CartridgeError::CorruptImage {
                scheme: scheme.name(),
                actual: image.len(),
                expected: expected.to_string(),
            });
        }

        let base = CartBase::new(scheme, image, RAM_SIZE, config, 0, bank_count)?;
        let slice = base.start_bank();
        Ok(CartridgeE7 {
            base,
            slice_hotspots,
            bank_count,
            slice,
            ram_bank: 0,
        })
    }

    fn fixed_slice(&self) -> u16 {
        self.bank_count - 1
    }

    fn low_ram_visible(&self) -> bool {
        self.slice == self.fixed_slice()
    }

    fn ram_bank_offset(&self) -> usize {
        LOW_RAM_SIZE + self.ram_bank as usize * RAM_BANK_SIZE
    }

    fn program_fixed(&mut self, space: &mut AddressSpace) {
        let rom_offset = self.fixed_slice() as usize * SLICE_SIZE;
        let hotspot_page = self.slice_hotspots.first_page().min(RAM_HOTSPOTS.first_page());

        map_rom(
            space,
            0x1A00..hotspot_page,
            rom_offset + (0x1A00 & SLICE_MASK) as usize,
        );
        map_device(
            space,
            hotspot_page..CART_WINDOW_LIMIT,
            rom_offset + (hotspot_page & SLICE_MASK) as usize,
        );
    }

    fn program_slice(&mut self, space: &mut AddressSpace) {
        if self.low_ram_visible() {
            let image_len = self.base.image().len();
            map_ram_write_port(space, 0x1000..0x1400, 0, image_len);
            map_ram_read_port(space, 0x1400..0x1800, 0, image_len);
        } else {
            map_rom(space, 0x1000..0x1800, self.slice as usize * SLICE_SIZE);
        }
    }

    fn program_ram_bank(&mut self, space: &mut AddressSpace) {
        let image_len = self.base.image().len();
        let offset = self.ram_bank_offset();
        map_ram_write_port(space, 0x1800..0x1900, offset, image_len);
        map_ram_read_port(space, 0x1900..0x1A00, offset, image_len);
    }

    fn check_switch_bank(&mut self, address: u16, space: &mut AddressSpace) {
        let offset = address & CART_WINDOW_MASK;
        let cause = TransitionCause::Hotspot(address);
        if let Some(slice) = self.slice_hotspots.slice_for(offset) {
            self.select_slice(SEGMENT_SWITCHABLE, slice, cause, space);
        } else if let Some(bank) = RAM_HOTSPOTS.slice_for(offset) {
            self.select_slice(SEGMENT_RAM, bank, cause, space);
        }
    }

    /// Index into RAM for a window offset inside one of the RAM ports
    fn ram_index(&self, offset: u16) -> Option<usize> {
        match offset {
            0x0000..=0x07FF if self.low_ram_visible() => Some((offset & 0x03FF) as usize),
            0x0800..=0x09FF => Some(self.ram_bank_offset() + (offset & 0x00FF) as usize),
            _ => None,
        }
    }

    fn is_write_port(&self, offset: u16) -> bool {
        (offset < 0x0400 && self.low_ram_visible()) || (0x0800..0x0900).contains(&offset)
    }

    fn rom_index(&self, offset: u16) -> usize {
        let slice = if offset < 0x0800 {
            self.slice
        } else {
            self.fixed_slice()
        };
        slice as usize * SLICE_SIZE + (offset & SLICE_MASK) as usize
    }
}

impl Cartridge for CartridgeE7 {
    fn base(&self) -> &CartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CartBase {
        &mut self.base
    }

    fn install(&mut self, space: &mut AddressSpace) {
        self.slice = self.base.start_bank();
        self.ram_bank = 0;

        self.program_fixed(space);
        self.program_ram_bank(space);
        self.program_slice(space);
    }

    fn reset(&mut self, space: &mut AddressSpace) {
        self.base.init_ram();

        self.select_slice(SEGMENT_RAM, 0, TransitionCause::Reset, space);
        let start = self.base.start_bank();
        self.select_slice(SEGMENT_SWITCHABLE, start, TransitionCause::Reset, space);
        self.base.controller.mark_changed();
    }

    fn peek(&mut self, address: u16, space: &mut AddressSpace, bus: &dyn DataBus) -> u8 {
        self.check_switch_bank(address, space);

        let offset = address & CART_WINDOW_MASK;
        let write_port = self.is_write_port(offset);

        match self.ram_index(offset) {
            Some(index) if write_port => self.base.read_from_write_port(index, address, bus),
            Some(index) => self.base.ram()[index],
            None => self.base.image()[self.rom_index(offset)],
        }
    }

    fn poke(&mut self, address: u16, value: u8, space: &mut AddressSpace) -> bool {
        self.check_switch_bank(address, space);

        let offset = address & CART_WINDOW_MASK;
        let write_port = self.is_write_port(offset);

        match self.ram_index(offset) {
            Some(index) if write_port => {
                self.base.ram_mut()[index] = value;
                true
            }
            _ => false,
        }
    }

    fn select_slice(
        &mut self,
        segment: usize,
        slice: u16,
        cause: TransitionCause,
        space: &mut AddressSpace,
    ) -> bool {
        let bank_count = match segment {
            SEGMENT_SWITCHABLE => self.bank_count,
            SEGMENT_RAM => RAM_BANKS,
            _ => return false,
        };
        if !self.base.controller.permit(segment, cause) {
            return false;
        }

        let slice = self.base.controller.clamp(segment, slice, bank_count);
        let from = if segment == SEGMENT_RAM {
            let from = std::mem::replace(&mut self.ram_bank, slice);
            self.program_ram_bank(space);
            from
        } else {
            let from = std::mem::replace(&mut self.slice, slice);
            self.program_slice(space);
            from
        };
        self.base.controller.commit(segment, from, slice, cause);
        true
    }

    fn selection(&self) -> BankSelection {
        BankSelection(vec![self.slice, self.fixed_slice(), self.ram_bank])
    }

    fn segments(&self) -> Vec<SegmentInfo> {
        vec![
            SegmentInfo::new(SegmentKind::Switchable, self.bank_count, 0x1000),
            SegmentInfo::new(SegmentKind::Fixed, self.bank_count, 0x1A00),
            SegmentInfo::new(SegmentKind::RamBank, RAM_BANKS, 0x1800),
        ]
    }

    fn patch(&mut self, address: u16, value: u8) -> bool {
        let offset = address & CART_WINDOW_MASK;
        match self.ram_index(offset) {
            Some(index) => self.base.ram_mut()[index] = value,
            None => {
                let index = self.rom_index(offset);
                self.base.image_mut()[index] = value;
            }
        }
        self.base.controller.mark_changed();
        true
    }

    fn hotspot_address(&self, segment: usize, slice: u16) -> Option<u16> {
        match segment {
            SEGMENT_SWITCHABLE => self.slice_hotspots.address_of(slice),
            SEGMENT_RAM => RAM_HOTSPOTS.address_of(slice),
            _ => None,
        }
    }

    fn get_bank(&self) -> u16 {
        self.slice
    }
}
