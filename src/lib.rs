#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

// CEP-18 token used as the distributed asset
pub mod token;
pub mod errors;
pub mod events;

// Token distribution
pub mod distribution;
