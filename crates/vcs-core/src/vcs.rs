pub mod bankswitch;
pub mod bus;
pub mod cartridge;
pub mod tracer;

#[cfg(any(test, feature = "testing-utils"))]
pub mod test_utils;

#[cfg(test)]
mod bankswitch_test;
