use crate::vcs::bankswitch::BankswitchType;
use crate::vcs::bus::address_space::AddressSpace;
use crate::vcs::bus::cart_debugger::CartDebugger;
use crate::vcs::bus::consts::PAGE_MASK;
use crate::vcs::bus::data_bus::DataBus;
use crate::vcs::bus::page_access::{CodeAccessFlags, PageAccess};
use crate::vcs::cartridge::savestate::{self, SaveRecord, SaveStateError};
use crate::vcs::cartridge::{Cartridge, CartridgeConfig, CartridgeError, create_cartridge};
use log::info;

/// The cartridge as the console's bus sees it.
///
/// Owns the cartridge and its page table. Accesses with a direct pointer in
/// the page table never reach the cartridge's code.
pub struct CartBus {
    cart: Box<dyn Cartridge>,
    space: AddressSpace,
}

impl CartBus {
    pub fn new(mut cart: Box<dyn Cartridge>) -> CartBus {
        let mut space = AddressSpace::new();
        cart.install(&mut space);
        cart.reset(&mut space);

        info!("{} cartridge installed at bank {}", cart.name(), cart.get_bank());
        CartBus { cart, space }
    }

    pub fn from_image(
        image: Vec<u8>,
        scheme: BankswitchType,
        config: &CartridgeConfig,
    ) -> Result<CartBus, CartridgeError> {
        Ok(Self::new(create_cartridge(image, scheme, config)?))
    }

    #[inline]
    pub fn peek(&mut self, address: u16, bus: &dyn DataBus) -> u8 {
        let direct = self.space.get_page_access(address).direct_peek;
        match direct {
            Some(base) => self.cart.base().read_direct(base, address),
            None => self.cart.peek(address, &mut self.space, bus),
        }
    }

    /// Returns true if a byte was stored
    #[inline]
    pub fn poke(&mut self, address: u16, value: u8) -> bool {
        let direct = self.space.get_page_access(address).direct_poke;
        match direct {
            Some(base) => {
                self.cart.base_mut().write_direct(base, address, value);
                true
            }
            None => self.cart.poke(address, value, &mut self.space),
        }
    }

    pub fn bank(&mut self, slice: u16) -> bool {
        self.cart.bank(slice, &mut self.space)
    }

    pub fn bank_ram(&mut self, bank: u16) -> bool {
        self.cart.bank_ram(bank, &mut self.space)
    }

    pub fn get_bank(&self) -> u16 {
        self.cart.get_bank()
    }

    pub fn bank_count(&self) -> u16 {
        self.cart.bank_count()
    }

    pub fn patch(&mut self, address: u16, value: u8) -> bool {
        self.cart.patch(address, value)
    }

    pub fn lock_bank(&mut self) {
        self.cart.lock_bank();
    }

    pub fn unlock_bank(&mut self) {
        self.cart.unlock_bank();
    }

    pub fn bank_locked(&self) -> bool {
        self.cart.bank_locked()
    }

    pub fn reset(&mut self) {
        self.cart.reset(&mut self.space);
        info!("{} cartridge reset to bank {}", self.cart.name(), self.cart.get_bank());
    }

    pub fn save_state(&self) -> SaveRecord {
        savestate::save(self.cart.as_ref())
    }

    pub fn load_state(&mut self, record: &SaveRecord) -> Result<(), SaveStateError> {
        savestate::load(self.cart.as_mut(), &mut self.space, record)
    }

    pub fn save_state_bytes(&self) -> Vec<u8> {
        self.save_state().encode()
    }

    pub fn load_state_bytes(&mut self, bytes: &[u8]) -> Result<(), SaveStateError> {
        savestate::load_bytes(self.cart.as_mut(), &mut self.space, bytes)
    }

    pub fn page_access(&self, address: u16) -> &PageAccess {
        self.space.get_page_access(address)
    }

    pub fn address_space(&self) -> &AddressSpace {
        &self.space
    }

    fn code_access_offset(&self, address: u16) -> Option<usize> {
        let base = self.space.get_page_access(address).code_access?;
        Some(base + (address & PAGE_MASK) as usize)
    }

    /// Tag the byte currently answering `address` for the disassembler
    pub fn mark_access(&mut self, address: u16, flags: CodeAccessFlags) {
        if let Some(offset) = self.code_access_offset(address) {
            self.cart.base_mut().mark_code_access(offset, flags);
        }
    }

    pub fn access_flags(&self, address: u16) -> CodeAccessFlags {
        self.code_access_offset(address)
            .map(|offset| self.cart.base().code_access(offset))
            .unwrap_or_default()
    }

    pub fn cartridge(&self) -> &dyn Cartridge {
        self.cart.as_ref()
    }

    pub fn debugger(&mut self) -> CartDebugger<'_> {
        CartDebugger::new(self.cart.as_mut(), &mut self.space)
    }
}
