use super::controller::{HotspotRange, TransitionCause};
use super::mapping::{map_device, map_ram_read_port, map_ram_write_port, map_rom};
use super::{BankSelection, CartBase, Cartridge, CartridgeConfig, CartridgeError};
use super::{SegmentInfo, SegmentKind};
use crate::vcs::bankswitch::BankswitchType;
use crate::vcs::bus::address_space::AddressSpace;
use crate::vcs::bus::consts::{CART_WINDOW_LIMIT, CART_WINDOW_MASK, CART_WINDOW_START};
use crate::vcs::bus::data_bus::DataBus;

const BANK_SIZE: usize = 0x1000;

/*
   Atari standard schemes and their relatives: the whole 4K window shows one
   4K slice, selected by touching one of a run of consecutive hotspots at the
   top of the window. The "SC" (SuperChip) variants add 128 bytes of RAM,
   CBS RAM Plus (FA) adds 256:

   $1000 +-----------------+
         | RAM write port  |  ram_size bytes (SC/FA only)
         +-----------------+
         | RAM read port   |  ram_size bytes (SC/FA only)
         +-----------------+
         | ROM slice       |
         |        hotspots |  F8 $1FF8-9, F6 $1FF6-9, F4 $1FF4-B, ...
   $1FFF +-----------------+
*/
#[derive(Debug, Copy, Clone)]
struct AtariLayout {
    bank_count: u16,
    hotspots: Option<HotspotRange>,
    start_bank: u16,
    ram_size: u16,
}

impl AtariLayout {
    const fn new(bank_count: u16, hotspot: u16, start_bank: u16, ram_size: u16) -> Self {
        Self {
            bank_count,
            hotspots: Some(HotspotRange::new(hotspot, bank_count)),
            start_bank,
            ram_size,
        }
    }

    const fn flat(ram_size: u16) -> Self {
        Self {
            bank_count: 1,
            hotspots: None,
            start_bank: 0,
            ram_size,
        }
    }

    fn for_scheme(scheme: BankswitchType) -> Option<Self> {
        use BankswitchType as Bs;

        let layout = match scheme {
            Bs::Bs4K => Self::flat(0),
            Bs::Bs4KSC => Self::flat(128),
            Bs::F8 => Self::new(2, 0xFF8, 1, 0),
            Bs::F8sc => Self::new(2, 0xFF8, 1, 128),
            Bs::F6 => Self::new(4, 0xFF6, 0, 0),
            Bs::F6sc => Self::new(4, 0xFF6, 0, 128),
            Bs::F4 => Self::new(8, 0xFF4, 0, 0),
            Bs::F4sc => Self::new(8, 0xFF4, 0, 128),
            Bs::Ef => Self::new(16, 0xFE0, 1, 0),
            Bs::Efsc => Self::new(16, 0xFE0, 1, 128),
            Bs::Df => Self::new(32, 0xFC0, 1, 0),
            Bs::Dfsc => Self::new(32, 0xFC0, 1, 128),
            Bs::Bf => Self::new(64, 0xF80, 1, 0),
            Bs::Bfsc => Self::new(64, 0xF80, 1, 128),
            Bs::Fa => Self::new(3, 0xFF8, 2, 256),
            _ => return None,
        };
        Some(layout)
    }
}

pub struct CartridgeAtari {
    base: CartBase,
    layout: AtariLayout,
    bank: u16,
}

impl CartridgeAtari {
    pub fn new(
        image: Vec<u8>,
        scheme: BankswitchType,
        config: &CartridgeConfig,
    ) -> Result<CartridgeAtari, CartridgeError> {
        let layout = AtariLayout::for_scheme(scheme)
            .ok_or(CartridgeError::UnsupportedScheme(scheme.name()))?;

        let expected = layout.bank_count as usize * BANK_SIZE;
        if image.len() != expected {
            return Err(CartridgeError::CorruptImage {
                scheme: scheme.name(),
                actual: image.len(),
                expected: expected.to_string(),
            });
        }

        let base = CartBase::new(
            scheme,
            image,
            layout.ram_size as usize,
            config,
            layout.start_bank,
            layout.bank_count,
        )?;
        let bank = base.start_bank();
        Ok(CartridgeAtari { base, layout, bank })
    }

    fn bank_offset(&self) -> usize {
        self.bank as usize * BANK_SIZE
    }

    fn rom_start(&self) -> u16 {
        CART_WINDOW_START + 2 * self.layout.ram_size
    }

    // Everything between the RAM ports and the window's end follows the bank
    fn program_bank(&mut self, space: &mut AddressSpace) {
        let offset = self.bank_offset();
        let rom_start = self.rom_start();
        let rom_end = self
            .layout
            .hotspots
            .map_or(CART_WINDOW_LIMIT, |hotspots| hotspots.first_page());

        map_rom(
            space,
            rom_start..rom_end,
            offset + (rom_start - CART_WINDOW_START) as usize,
        );
        if rom_end < CART_WINDOW_LIMIT {
            map_device(
                space,
                rom_end..CART_WINDOW_LIMIT,
                offset + (rom_end - CART_WINDOW_START) as usize,
            );
        }
    }

    fn check_switch_bank(&mut self, address: u16, space: &mut AddressSpace) {
        let offset = address & CART_WINDOW_MASK;
        if let Some(slice) = self.layout.hotspots.and_then(|h| h.slice_for(offset)) {
            self.select_slice(0, slice, TransitionCause::Hotspot(address), space);
        }
    }
}

impl Cartridge for CartridgeAtari {
    fn base(&self) -> &CartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CartBase {
        &mut self.base
    }

    fn install(&mut self, space: &mut AddressSpace) {
        let ram_size = self.layout.ram_size;
        if ram_size > 0 {
            let image_len = self.base.image().len();
            let write_port = CART_WINDOW_START..CART_WINDOW_START + ram_size;
            let read_port = write_port.end..write_port.end + ram_size;
            map_ram_write_port(space, write_port, 0, image_len);
            map_ram_read_port(space, read_port, 0, image_len);
        }

        self.bank = self.base.start_bank();
        self.program_bank(space);
    }

    fn reset(&mut self, space: &mut AddressSpace) {
        self.base.init_ram();
        let start = self.base.start_bank();
        self.select_slice(0, start, TransitionCause::Reset, space);
        self.base.controller.mark_changed();
    }

    fn peek(&mut self, address: u16, space: &mut AddressSpace, bus: &dyn DataBus) -> u8 {
        self.check_switch_bank(address, space);

        let offset = address & CART_WINDOW_MASK;
        let ram_size = self.layout.ram_size;
        if offset < ram_size {
            self.base.read_from_write_port(offset as usize, address, bus)
        } else if offset < 2 * ram_size {
            self.base.ram()[(offset - ram_size) as usize]
        } else {
            self.base.image()[self.bank_offset() + offset as usize]
        }
    }

    fn poke(&mut self, address: u16, value: u8, space: &mut AddressSpace) -> bool {
        self.check_switch_bank(address, space);

        let offset = address & CART_WINDOW_MASK;
        if offset < self.layout.ram_size {
            self.base.ram_mut()[offset as usize] = value;
            true
        } else {
            false
        }
    }

    fn select_slice(
        &mut self,
        segment: usize,
        slice: u16,
        cause: TransitionCause,
        space: &mut AddressSpace,
    ) -> bool {
        if segment != 0 || self.layout.bank_count == 1 {
            return false;
        }
        if !self.base.controller.permit(segment, cause) {
            return false;
        }

        let slice = self
            .base
            .controller
            .clamp(segment, slice, self.layout.bank_count);
        let from = std::mem::replace(&mut self.bank, slice);
        self.program_bank(space);
        self.base.controller.commit(segment, from, slice, cause);
        true
    }

    fn selection(&self) -> BankSelection {
        BankSelection(vec![self.bank])
    }

    fn segments(&self) -> Vec<SegmentInfo> {
        let kind = if self.layout.bank_count > 1 {
            SegmentKind::Switchable
        } else {
            SegmentKind::Fixed
        };
        vec![SegmentInfo::new(kind, self.layout.bank_count, CART_WINDOW_START)]
    }

    fn patch(&mut self, address: u16, value: u8) -> bool {
        let offset = address & CART_WINDOW_MASK;
        let ram_size = self.layout.ram_size;
        if offset < 2 * ram_size {
            // Both ports reach the same cell
            self.base.ram_mut()[(offset % ram_size) as usize] = value;
        } else {
            let index = self.bank_offset() + offset as usize;
            self.base.image_mut()[index] = value;
        }
        self.base.controller.mark_changed();
        true
    }

    fn hotspot_address(&self, segment: usize, slice: u16) -> Option<u16> {
        if segment != 0 {
            return None;
        }
        self.layout.hotspots?.address_of(slice)
    }

    fn get_bank(&self) -> u16 {
        self.bank
    }
}
