// Image builders shared by the unit tests and, behind `testing-utils`, by
// other crates' tests.

use crate::vcs::bankswitch::BankswitchType;
use crate::vcs::bus::cart_bus::CartBus;
use crate::vcs::bus::data_bus::FloatingBus;
use crate::vcs::cartridge::CartridgeConfig;

/// `bank_count` banks of `bank_size` bytes, every byte of bank `i` equal to `i`
pub fn banked_image(bank_count: usize, bank_size: usize) -> Vec<u8> {
    (0..bank_count)
        .flat_map(|bank| std::iter::repeat_n(bank as u8, bank_size))
        .collect()
}

/// Like `banked_image`, but the reset vector of 4K bank `i` points into
/// `$F000 - $1000 * (i % 16)`, so banks are told apart by their start address.
pub fn vectored_image(bank_count: usize) -> Vec<u8> {
    let mut image = banked_image(bank_count, 0x1000);
    for bank in 0..bank_count {
        let start = ((15 - bank % 16) as u16) << 12;
        let vector = bank * 0x1000 + 0x0FFC;
        image[vector..vector + 2].copy_from_slice(&start.to_le_bytes());
    }
    image
}

/// Every byte equal to its own offset modulo 251, so nearby offsets differ
pub fn patterned_image(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Bus around a freshly built cartridge; panics on construction errors
pub fn cart_bus(image: Vec<u8>, scheme: BankswitchType) -> CartBus {
    CartBus::from_image(image, scheme, &CartridgeConfig::default())
        .unwrap_or_else(|err| panic!("failed to build {} cartridge: {}", scheme, err))
}

/// Data bus that always reports `value`
pub fn floating(value: u8) -> FloatingBus {
    FloatingBus::new(value)
}
