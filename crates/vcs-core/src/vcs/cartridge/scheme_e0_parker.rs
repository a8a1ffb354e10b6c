use super::controller::{HotspotRange, TransitionCause};
use super::mapping::{map_device, map_rom};
use super::{BankSelection, CartBase, Cartridge, CartridgeConfig, CartridgeError};
use super::{SegmentInfo, SegmentKind};
use crate::vcs::bankswitch::BankswitchType;
use crate::vcs::bus::address_space::AddressSpace;
use crate::vcs::bus::consts::{CART_WINDOW_LIMIT, CART_WINDOW_MASK, CART_WINDOW_START};
use crate::vcs::bus::data_bus::DataBus;

const SLICE_SIZE: usize = 0x0400;
const SLICE_MASK: u16 = 0x03FF;
const BANK_COUNT: u16 = 8;
const FIXED_SLICE: u16 = BANK_COUNT - 1;

const SWITCHABLE_SEGMENTS: usize = 3;
const START_SLICES: [u16; SWITCHABLE_SEGMENTS] = [4, 5, 6];

// One run of eight hotspots per switchable segment
const HOTSPOTS: [HotspotRange; SWITCHABLE_SEGMENTS] = [
    HotspotRange::new(0xFE0, BANK_COUNT),
    HotspotRange::new(0xFE8, BANK_COUNT),
    HotspotRange::new(0xFF0, BANK_COUNT),
];

/// Parker Brothers (E0): four 1K segments, the first three switchable and
/// the last fixed to slice 7, which also holds every hotspot.
pub struct CartridgeE0 {
    base: CartBase,
    slices: [u16; SWITCHABLE_SEGMENTS],
}

impl CartridgeE0 {
    pub fn new(image: Vec<u8>, config: &CartridgeConfig) -> Result<CartridgeE0, CartridgeError> {
        let scheme = BankswitchType::E0;
        let expected = BANK_COUNT as usize * SLICE_SIZE;
        if image.len() != expected {
            return Err(CartridgeError::CorruptImage {
                scheme: scheme.name(),
                actual: image.len(),
                expected: expected.to_string(),
            });
        }

        let base = CartBase::new(scheme, image, 0, config, START_SLICES[0], BANK_COUNT)?;
        let mut cart = CartridgeE0 {
            base,
            slices: START_SLICES,
        };
        cart.slices[0] = cart.base.start_bank();
        Ok(cart)
    }

    fn startup_slices(&self) -> [u16; SWITCHABLE_SEGMENTS] {
        let mut slices = START_SLICES;
        slices[0] = self.base.start_bank();
        slices
    }

    fn segment_origin(segment: usize) -> u16 {
        CART_WINDOW_START + (segment * SLICE_SIZE) as u16
    }

    fn program_segment(&mut self, segment: usize, space: &mut AddressSpace) {
        let start = Self::segment_origin(segment);
        let end = start + SLICE_SIZE as u16;
        map_rom(space, start..end, self.slices[segment] as usize * SLICE_SIZE);
    }

    fn program_fixed(&mut self, space: &mut AddressSpace) {
        let start = Self::segment_origin(SWITCHABLE_SEGMENTS);
        let hotspot_page = HOTSPOTS[0].first_page();
        let rom_offset = FIXED_SLICE as usize * SLICE_SIZE;

        map_rom(space, start..hotspot_page, rom_offset);
        map_device(
            space,
            hotspot_page..CART_WINDOW_LIMIT,
            rom_offset + (hotspot_page & SLICE_MASK) as usize,
        );
    }

    fn check_switch_bank(&mut self, address: u16, space: &mut AddressSpace) {
        let offset = address & CART_WINDOW_MASK;
        let hit = HOTSPOTS
            .iter()
            .enumerate()
            .find_map(|(segment, hotspots)| Some((segment, hotspots.slice_for(offset)?)));

        if let Some((segment, slice)) = hit {
            self.select_slice(segment, slice, TransitionCause::Hotspot(address), space);
        }
    }

    fn rom_index(&self, offset: u16) -> usize {
        let segment = (offset as usize) / SLICE_SIZE;
        let slice = self.slices.get(segment).copied().unwrap_or(FIXED_SLICE);
        slice as usize * SLICE_SIZE + (offset & SLICE_MASK) as usize
    }
}

impl Cartridge for CartridgeE0 {
    fn base(&self) -> &CartBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CartBase {
        &mut self.base
    }

    fn install(&mut self, space: &mut AddressSpace) {
        self.slices = self.startup_slices();

        self.program_fixed(space);
        for segment in 0..SWITCHABLE_SEGMENTS {
            self.program_segment(segment, space);
        }
    }

    fn reset(&mut self, space: &mut AddressSpace) {
        for (segment, slice) in self.startup_slices().into_iter().enumerate() {
            self.select_slice(segment, slice, TransitionCause::Reset, space);
        }
        self.base.controller.mark_changed();
    }

    fn peek(&mut self, address: u16, space: &mut AddressSpace, _bus: &dyn DataBus) -> u8 {
        self.check_switch_bank(address, space);
        self.base.image()[self.rom_index(address & CART_WINDOW_MASK)]
    }

    fn poke(&mut self, address: u16, _value: u8, space: &mut AddressSpace) -> bool {
        self.check_switch_bank(address, space);
        false
    }

    fn select_slice(
        &mut self,
        segment: usize,
        slice: u16,
        cause: TransitionCause,
        space: &mut AddressSpace,
    ) -> bool {
        if segment >= SWITCHABLE_SEGMENTS || !self.base.controller.permit(segment, cause) {
            return false;
        }

        let slice = self.base.controller.clamp(segment, slice, BANK_COUNT);
        let from = std::mem::replace(&mut self.slices[segment], slice);
        self.program_segment(segment, space);
        self.base.controller.commit(segment, from, slice, cause);
        true
    }

    fn selection(&self) -> BankSelection {
        let mut slices = self.slices.to_vec();
        slices.push(FIXED_SLICE);
        BankSelection(slices)
    }

    fn segments(&self) -> Vec<SegmentInfo> {
        (0..=SWITCHABLE_SEGMENTS)
            .map(|segment| {
                let kind = if segment < SWITCHABLE_SEGMENTS {
                    SegmentKind::Switchable
                } else {
                    SegmentKind::Fixed
                };
                SegmentInfo::new(kind, BANK_COUNT, Self::segment_origin(segment))
            })
            .collect()
    }

    fn patch(&mut self, address: u16, value: u8) -> bool {
        let index = self.rom_index(address & CART_WINDOW_MASK);
        self.base.image_mut()[index] = value;
        self.base.controller.mark_changed();
        true
    }

    fn hotspot_address(&self, segment: usize, slice: u16) -> Option<u16> {
        HOTSPOTS.get(segment)?.address_of(slice)
    }
}
