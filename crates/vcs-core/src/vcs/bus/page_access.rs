use bitflags::bitflags;

bitflags! {
    /// Which direction of the bus a page answers directly
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct PageAccessType: u8 {
        const READ =      0b0000_0001;
        const WRITE =     0b0000_0010;
        const READWRITE = 0b0000_0011;
    }
}

bitflags! {
    /* Disassembly hints kept per cartridge byte. The engine only stores
       these for the debugger, it never looks at them.
        7  bit  0
        ---- ----
        ...R DPGC
           | ||||
           | |||+- Executed as code
           | ||+-- Read as playfield graphics
           | |+--- Read as sprite graphics
           | +---- Read as data
           +------ Referenced as a table row
     */
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct CodeAccessFlags: u8 {
        const CODE = 0b0000_0001;
        const PGFX = 0b0000_0010;
        const GFX =  0b0000_0100;
        const DATA = 0b0000_1000;
        const ROW =  0b0001_0000;
    }
}

/// Start of a page inside one of the cartridge's own buffers.
///
/// The offset always addresses the first byte of a full page, so
/// `offset + (address & PAGE_MASK)` stays inside the buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DirectBase {
    Rom(usize),
    Ram(usize),
}

/// Page descriptor consulted on every access to the cartridge window.
///
/// A page without a direct pointer for the requested direction is routed to
/// the cartridge's `peek`/`poke`; there is no such thing as an unmapped page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageAccess {
    pub direct_peek: Option<DirectBase>,
    pub direct_poke: Option<DirectBase>,
    pub code_access: Option<usize>,
    pub access_type: PageAccessType,
}

impl PageAccess {
    pub const fn new(access_type: PageAccessType) -> Self {
        Self {
            direct_peek: None,
            direct_poke: None,
            code_access: None,
            access_type,
        }
    }

    pub const fn with_peek(mut self, base: DirectBase) -> Self {
        self.direct_peek = Some(base);
        self
    }

    pub const fn with_poke(mut self, base: DirectBase) -> Self {
        self.direct_poke = Some(base);
        self
    }

    pub const fn with_code_access(mut self, offset: usize) -> Self {
        self.code_access = Some(offset);
        self
    }

    /// True if every access to this page goes through the cartridge
    pub fn is_device_only(&self) -> bool {
        self.direct_peek.is_none() && self.direct_poke.is_none()
    }
}

impl Default for PageAccess {
    fn default() -> Self {
        Self::new(PageAccessType::READ)
    }
}
