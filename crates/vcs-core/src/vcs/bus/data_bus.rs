/// Source of the value left on the data bus by the last driven cycle.
///
/// Supplied by the console to every cartridge `peek`, so a read from a
/// write-only port can observe what the real hardware would see.
pub trait DataBus {
    /// `undriven` marks bits nothing drives on this access.
    fn data_bus_state(&self, undriven: u8) -> u8;
}

/// Remembers the last value driven on the bus.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloatingBus {
    last_value: u8,
    // Pull undriven bits high instead of letting them float
    drive_undriven: bool,
}

impl FloatingBus {
    pub fn new(last_value: u8) -> Self {
        Self {
            last_value,
            drive_undriven: false,
        }
    }

    pub fn with_driven_undriven_bits(mut self, drive: bool) -> Self {
        self.drive_undriven = drive;
        self
    }

    pub fn drive(&mut self, value: u8) {
        self.last_value = value;
    }

    pub fn last_value(&self) -> u8 {
        self.last_value
    }
}

impl DataBus for FloatingBus {
    fn data_bus_state(&self, undriven: u8) -> u8 {
        if self.drive_undriven {
            self.last_value | undriven
        } else {
            self.last_value
        }
    }
}
