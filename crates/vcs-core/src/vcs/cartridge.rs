use crate::vcs::bankswitch::BankswitchType;
use crate::vcs::bus::address_space::AddressSpace;
use crate::vcs::bus::data_bus::DataBus;
use crate::vcs::bus::page_access::{CodeAccessFlags, DirectBase};
use controller::{BankSwitchController, TransitionCause};
use log::info;
use scheme_2k::Cartridge2K;
use scheme_atari::CartridgeAtari;
use scheme_cv_commavid::CartridgeCV;
use scheme_e0_parker::CartridgeE0;
use scheme_e7_mnetwork::CartridgeE7;
use thiserror::Error;

pub mod controller;
pub(crate) mod mapping;
pub mod savestate;
pub mod scheme_2k;
pub mod scheme_atari;
pub mod scheme_cv_commavid;
pub mod scheme_e0_parker;
pub mod scheme_e7_mnetwork;

#[cfg(test)]
mod controller_test;
#[cfg(test)]
mod scheme_cv_commavid_test;
#[cfg(test)]
mod scheme_e0_parker_test;
#[cfg(test)]
mod scheme_e7_mnetwork_test;

#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("Unsupported bankswitch scheme: {0}")]
    UnsupportedScheme(&'static str),

    #[error("Bankswitch scheme must be resolved before creating a cartridge")]
    AutoDetect,

    #[error("{scheme} image is {actual} bytes, expected {expected}")]
    CorruptImage {
        scheme: &'static str,
        actual: usize,
        expected: String,
    },

    #[error("Start bank {bank} out of range for {scheme} ({bank_count} banks)")]
    InvalidStartBank {
        scheme: &'static str,
        bank: u16,
        bank_count: u16,
    },
}

/// Contents of cartridge RAM after construction and reset
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RamInit {
    #[default]
    Zero,
    Fill(u8),
}

#[derive(Debug, Clone, Default)]
pub struct CartridgeConfig {
    /// Overrides the scheme's startup bank for segment 0
    pub start_bank: Option<u16>,
    pub ram_init: RamInit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// ROM slice selected by hotspots or `bank()`
    Switchable,
    /// Always shows the same ROM slice
    Fixed,
    /// RAM bank selected by hotspots or `bank_ram()`
    RamBank,
}

/// One independently remappable part of the window
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SegmentInfo {
    pub kind: SegmentKind,
    pub bank_count: u16,
    /// First cartridge address of the segment
    pub origin: u16,
}

impl SegmentInfo {
    pub const fn new(kind: SegmentKind, bank_count: u16, origin: u16) -> Self {
        Self {
            kind,
            bank_count,
            origin,
        }
    }
}

/// Current slice of every segment, in `segments()` order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BankSelection(pub Vec<u16>);

impl BankSelection {
    pub fn slices(&self) -> &[u16] {
        &self.0
    }

    pub fn get(&self, segment: usize) -> Option<u16> {
        self.0.get(segment).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Buffers and bank state every scheme owns.
///
/// ROM and RAM are allocated once here and never resized, which keeps the
/// offsets stored in the page table valid for the cartridge's lifetime.
#[derive(Debug)]
pub struct CartBase {
    scheme: BankswitchType,
    image: Box<[u8]>,
    ram: Box<[u8]>,
    code_access: Box<[CodeAccessFlags]>,
    pub(crate) controller: BankSwitchController,
    start_bank: u16,
    ram_init: RamInit,
}

impl CartBase {
    pub(crate) fn new(
        scheme: BankswitchType,
        image: Vec<u8>,
        ram_size: usize,
        config: &CartridgeConfig,
        default_start_bank: u16,
        bank_count: u16,
    ) -> Result<Self, CartridgeError> {
        let start_bank = config.start_bank.unwrap_or(default_start_bank);
        if start_bank >= bank_count {
            return Err(CartridgeError::InvalidStartBank {
                scheme: scheme.name(),
                bank: start_bank,
                bank_count,
            });
        }

        let code_access = vec![CodeAccessFlags::empty(); image.len() + ram_size];
        let mut base = Self {
            scheme,
            image: image.into_boxed_slice(),
            ram: vec![0; ram_size].into_boxed_slice(),
            code_access: code_access.into_boxed_slice(),
            controller: BankSwitchController::new(),
            start_bank,
            ram_init: config.ram_init,
        };
        base.init_ram();
        Ok(base)
    }

    pub fn scheme(&self) -> BankswitchType {
        self.scheme
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub(crate) fn image_mut(&mut self) -> &mut [u8] {
        &mut self.image
    }

    pub fn ram(&self) -> &[u8] {
        &self.ram
    }

    pub(crate) fn ram_mut(&mut self) -> &mut [u8] {
        &mut self.ram
    }

    pub fn start_bank(&self) -> u16 {
        self.start_bank
    }

    pub(crate) fn init_ram(&mut self) {
        let fill = match self.ram_init {
            RamInit::Zero => 0,
            RamInit::Fill(value) => value,
        };
        self.ram.fill(fill);
    }

    #[inline(always)]
    pub fn read_direct(&self, base: DirectBase, address: u16) -> u8 {
        let page_offset = (address & crate::vcs::bus::consts::PAGE_MASK) as usize;
        match base {
            DirectBase::Rom(offset) => self.image[offset + page_offset],
            DirectBase::Ram(offset) => self.ram[offset + page_offset],
        }
    }

    #[inline(always)]
    pub fn write_direct(&mut self, base: DirectBase, address: u16, value: u8) {
        let page_offset = (address & crate::vcs::bus::consts::PAGE_MASK) as usize;
        match base {
            DirectBase::Rom(offset) => self.image[offset + page_offset] = value,
            DirectBase::Ram(offset) => self.ram[offset + page_offset] = value,
        }
    }

    /// Read of a write-only RAM port.
    ///
    /// Returns the floating bus value; unless the bank is locked the same
    /// value also lands in RAM, as the real cartridge latches whatever is
    /// on the bus when its write line is strobed.
    pub(crate) fn read_from_write_port(
        &mut self,
        ram_index: usize,
        address: u16,
        bus: &dyn DataBus,
    ) -> u8 {
        let value = bus.data_bus_state(0xFF);
        if !self.controller.is_locked() {
            self.controller.note_write_port_read(address);
            self.ram[ram_index] = value;
        }
        value
    }

    pub fn code_access(&self, offset: usize) -> CodeAccessFlags {
        self.code_access
            .get(offset)
            .copied()
            .unwrap_or_default()
    }

    pub fn mark_code_access(&mut self, offset: usize, flags: CodeAccessFlags) {
        if let Some(entry) = self.code_access.get_mut(offset) {
            entry.insert(flags);
        }
    }
}

/// A cartridge bankswitching scheme.
///
/// The console only reaches an implementation through pages of the
/// `AddressSpace` that have no direct pointer, or through the debugger.
pub trait Cartridge {
    fn base(&self) -> &CartBase;
    fn base_mut(&mut self) -> &mut CartBase;

    /// Program every page of the window. Called once, before any access.
    fn install(&mut self, space: &mut AddressSpace);

    /// Reinitialise RAM and return every segment to its startup slice
    fn reset(&mut self, space: &mut AddressSpace);

    /// CPU read that the page table could not satisfy directly
    fn peek(&mut self, address: u16, space: &mut AddressSpace, bus: &dyn DataBus) -> u8;

    /// CPU write that the page table could not satisfy directly.
    ///
    /// Returns true if a byte was stored. Writes to ROM are ignored by the
    /// hardware and return false, which is not an error.
    fn poke(&mut self, address: u16, value: u8, space: &mut AddressSpace) -> bool;

    /// Map `slice` into `segment` and reprogram that segment's pages.
    ///
    /// Returns false without touching anything when the bank is locked or
    /// the segment is fixed. Out of range slices are clamped.
    fn select_slice(
        &mut self,
        segment: usize,
        slice: u16,
        cause: TransitionCause,
        space: &mut AddressSpace,
    ) -> bool;

    fn selection(&self) -> BankSelection;

    fn segments(&self) -> Vec<SegmentInfo>;

    /// Overwrite the byte a read of `address` would currently return,
    /// ignoring ROM and port restrictions. Debugger only.
    fn patch(&mut self, address: u16, value: u8) -> bool;

    /// Cartridge address whose access selects `slice` into `segment`
    fn hotspot_address(&self, _segment: usize, _slice: u16) -> Option<u16> {
        None
    }

    fn bank(&mut self, slice: u16, space: &mut AddressSpace) -> bool {
        self.select_slice(0, slice, TransitionCause::Explicit, space)
    }

    fn bank_ram(&mut self, bank: u16, space: &mut AddressSpace) -> bool {
        match self.ram_segment() {
            Some(segment) => self.select_slice(segment, bank, TransitionCause::Explicit, space),
            None => false,
        }
    }

    fn ram_segment(&self) -> Option<usize> {
        self.segments()
            .iter()
            .position(|seg| seg.kind == SegmentKind::RamBank)
    }

    fn get_bank(&self) -> u16 {
        self.selection().get(0).unwrap_or(0)
    }

    fn bank_count(&self) -> u16 {
        self.segments().first().map_or(1, |seg| seg.bank_count)
    }

    fn scheme(&self) -> BankswitchType {
        self.base().scheme()
    }

    fn name(&self) -> &'static str {
        self.scheme().name()
    }

    fn image(&self) -> &[u8] {
        self.base().image()
    }

    fn ram(&self) -> &[u8] {
        self.base().ram()
    }

    fn lock_bank(&mut self) {
        self.base_mut().controller.lock();
    }

    fn unlock_bank(&mut self) {
        self.base_mut().controller.unlock();
    }

    fn bank_locked(&self) -> bool {
        self.base().controller.is_locked()
    }
}

/// Build the cartridge for `scheme` around `image`.
pub fn create_cartridge(
    image: Vec<u8>,
    scheme: BankswitchType,
    config: &CartridgeConfig,
) -> Result<Box<dyn Cartridge>, CartridgeError> {
    use BankswitchType as Bs;

    let size = image.len();
    let cart: Box<dyn Cartridge> = match scheme {
        Bs::Auto => return Err(CartridgeError::AutoDetect),
        Bs::Bs2K => Box::new(Cartridge2K::new(image, config)?),
        Bs::Bs4K
        | Bs::Bs4KSC
        | Bs::F8
        | Bs::F8sc
        | Bs::F6
        | Bs::F6sc
        | Bs::F4
        | Bs::F4sc
        | Bs::Ef
        | Bs::Efsc
        | Bs::Df
        | Bs::Dfsc
        | Bs::Bf
        | Bs::Bfsc
        | Bs::Fa => Box::new(CartridgeAtari::new(image, scheme, config)?),
        Bs::E7 | Bs::E78K => Box::new(CartridgeE7::new(image, scheme, config)?),
        Bs::E0 => Box::new(CartridgeE0::new(image, config)?),
        Bs::Cv => Box::new(CartridgeCV::new(image, config)?),
        other => return Err(CartridgeError::UnsupportedScheme(other.name())),
    };

    info!(
        "Created {} cartridge: {} bytes, {} banks, {} bytes RAM",
        cart.name(),
        size,
        cart.bank_count(),
        cart.ram().len()
    );
    Ok(cart)
}
