// Cartridge window as seen by the 6507 (13 address lines, A12 selects the cart)
pub const ADDRESS_MASK: u16 = 0x1FFF;
pub const CART_WINDOW_START: u16 = 0x1000;
pub const CART_WINDOW_SIZE: u16 = 0x1000;
pub const CART_WINDOW_MASK: u16 = CART_WINDOW_SIZE - 1;
// One past the last cartridge address
pub const CART_WINDOW_LIMIT: u16 = CART_WINDOW_START + CART_WINDOW_SIZE;

// Page table granularity
pub const PAGE_SHIFT: u16 = 6;
pub const PAGE_SIZE: u16 = 1 << PAGE_SHIFT;
pub const PAGE_MASK: u16 = PAGE_SIZE - 1;
pub const NUM_PAGES: usize = (CART_WINDOW_SIZE >> PAGE_SHIFT) as usize;
