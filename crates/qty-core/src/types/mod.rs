//! Value types for qty calculations

mod operand;
mod quantity;

pub use operand::Operand;
pub use quantity::Quantity;
