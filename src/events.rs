//! Event definitions for the CEP-18 token
use odra::prelude::*;
use odra::casper_types::U256;
use odra::prelude::Address;

/// Event emitted when tokens move between accounts (mint and burn included)
#[odra::event]
pub struct Transfer {
    /// From address
    pub from: Address,
    /// To address
    pub to: Address,
    /// Amount transferred
    pub value: U256,
}

/// Event emitted when approval is granted
#[odra::event]
pub struct Approval {
    /// Owner address
    pub owner: Address,
    /// Spender address
    pub spender: Address,
    /// Amount approved
    pub value: U256,
}

/// Event emitted when an account is added to or removed from the blacklist
#[odra::event]
pub struct BlacklistUpdated {
    pub account: Address,
    pub blacklisted: bool,
    pub updated_by: Address,
}
