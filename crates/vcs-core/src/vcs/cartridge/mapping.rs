// Page programming shared by the schemes. Each helper replaces every page of
// the given range of cartridge addresses in one pass.

use crate::vcs::bus::address_space::AddressSpace;
use crate::vcs::bus::page_access::{DirectBase, PageAccess, PageAccessType};
use std::ops::Range;

/// Read-only ROM; the range shows image bytes starting at `rom_offset`
pub(crate) fn map_rom(space: &mut AddressSpace, range: Range<u16>, rom_offset: usize) {
    let start = range.start;
    space.map_pages(range, |addr| {
        let offset = rom_offset + (addr - start) as usize;
        PageAccess::new(PageAccessType::READ)
            .with_peek(DirectBase::Rom(offset))
            .with_code_access(offset)
    });
}

/// RAM write port. Reads of these pages reach the cartridge.
pub(crate) fn map_ram_write_port(
    space: &mut AddressSpace,
    range: Range<u16>,
    ram_offset: usize,
    image_len: usize,
) {
    let start = range.start;
    space.map_pages(range, |addr| {
        let offset = ram_offset + (addr - start) as usize;
        PageAccess::new(PageAccessType::WRITE)
            .with_poke(DirectBase::Ram(offset))
            .with_code_access(image_len + offset)
    });
}

/// RAM read port. Writes to these pages reach the cartridge.
pub(crate) fn map_ram_read_port(
    space: &mut AddressSpace,
    range: Range<u16>,
    ram_offset: usize,
    image_len: usize,
) {
    let start = range.start;
    space.map_pages(range, |addr| {
        let offset = ram_offset + (addr - start) as usize;
        PageAccess::new(PageAccessType::READ)
            .with_peek(DirectBase::Ram(offset))
            .with_code_access(image_len + offset)
    });
}

/// Pages every access of which must reach the cartridge (hotspots).
/// Code access follows the ROM bytes that answer reads there.
pub(crate) fn map_device(space: &mut AddressSpace, range: Range<u16>, rom_offset: usize) {
    let start = range.start;
    space.map_pages(range, |addr| {
        PageAccess::new(PageAccessType::READ).with_code_access(rom_offset + (addr - start) as usize)
    });
}
