//! Convenient imports for consumers of vcs-core
//!
//! Pull in everything commonly needed in one line:
//! ```rust
//! use vcs_core::prelude::*;
//! ```

// Cartridge construction and the bus facing API
pub use crate::vcs::bankswitch::{BankswitchType, name_to_type, type_from_filename};
pub use crate::vcs::bus::cart_bus::CartBus;
pub use crate::vcs::bus::cart_debugger::{BankSummary, CartDebugger};
pub use crate::vcs::bus::data_bus::{DataBus, FloatingBus};
pub use crate::vcs::cartridge::{
    BankSelection, CartridgeConfig, CartridgeError, RamInit, SegmentInfo, SegmentKind,
    create_cartridge,
};

// Traits that users might need
pub use crate::vcs::cartridge::Cartridge;

// Save states
pub use crate::vcs::cartridge::savestate::{SaveRecord, SaveStateError};

// Macros
pub use crate::trace_dump;

// Constants
pub use crate::vcs::bus::consts::{CART_WINDOW_SIZE, CART_WINDOW_START};

// Conditional testing utilities
#[cfg(feature = "testing-utils")]
pub use crate::vcs::test_utils::*;
