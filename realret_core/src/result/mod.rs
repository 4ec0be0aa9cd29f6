pub mod assembler;
pub mod projection;
