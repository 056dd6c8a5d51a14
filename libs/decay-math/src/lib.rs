#![no_std]

pub mod constant_product;
pub mod full_math;
pub mod share_math;
pub mod virtual_balance;

pub use constant_product::*;
pub use full_math::*;
pub use share_math::*;
pub use virtual_balance::*;
