// VCS cartridge core modules
pub mod prelude;
pub mod vcs;

// Re-exports
pub use vcs::bankswitch::BankswitchType;
pub use vcs::bus::cart_bus::CartBus;
pub use vcs::cartridge::{Cartridge, CartridgeConfig, CartridgeError, create_cartridge};
pub use vcs::cartridge::savestate::{SaveRecord, SaveStateError};
