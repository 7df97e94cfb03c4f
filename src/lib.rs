pub mod bus;
pub mod config;
pub mod cpu;
pub mod disasm;
pub mod system;
