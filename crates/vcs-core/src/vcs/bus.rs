pub mod address_space;
pub mod cart_bus;
pub mod cart_debugger;
pub mod consts;
pub mod data_bus;
pub mod page_access;

#[cfg(test)]
mod cart_debugger_test;
