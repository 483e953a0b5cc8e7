//! CEP-18 compatible stable token with a USDC-style blacklist.
//!
//! Used as the distributed asset in tests and local deployments. The
//! distributor itself only depends on the [`Cep18Token`] interface.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::events::{Approval, BlacklistUpdated, Transfer};
use crate::errors::TokenError;

/// Stable token module implementing the CEP-18 standard
#[odra::module]
pub struct StableToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply of tokens
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: owner -> spender -> amount
    allowances: Mapping<(Address, Address), U256>,
    /// Accounts that can neither send nor receive
    blacklisted: Mapping<Address, bool>,
    /// Minter and blacklister
    admin: Var<Address>,
}

#[odra::module]
impl StableToken {
    /// Initialize the token; the deployer becomes the admin
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
        self.admin.set(self.env().caller());
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    pub fn admin(&self) -> Address {
        self.admin.get_or_revert_with(TokenError::Unauthorized)
    }

    pub fn is_blacklisted(&self, account: Address) -> bool {
        self.blacklisted.get(&account).unwrap_or(false)
    }

    /// Transfer tokens to another address.
    ///
    /// Returns `false` without moving anything when either side is
    /// blacklisted.
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        if self.is_blacklisted(caller) || self.is_blacklisted(to) {
            return false;
        }
        self.transfer_internal(caller, to, amount);
        true
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.approve_internal(caller, spender, amount);
        true
    }

    /// Transfer tokens from one address to another (requires approval)
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        if self.is_blacklisted(from) || self.is_blacklisted(to) {
            return false;
        }

        let current_allowance = self.allowance(from, caller);
        if current_allowance < amount {
            self.env().revert(TokenError::InsufficientAllowance);
        }

        self.approve_internal(from, caller, current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    /// Mint new tokens (admin only)
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.only_admin();

        let current_supply = self.total_supply();
        self.total_supply.set(current_supply + amount);

        let current_balance = self.balance_of(to);
        self.balances.set(&to, current_balance + amount);

        self.env().emit_event(Transfer {
            from: self.env().self_address(),
            to,
            value: amount,
        });
    }

    /// Burn tokens (admin only)
    pub fn burn(&mut self, from: Address, amount: U256) {
        self.only_admin();

        let current_balance = self.balance_of(from);
        if current_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }
        self.balances.set(&from, current_balance - amount);

        let current_supply = self.total_supply();
        self.total_supply.set(current_supply - amount);

        self.env().emit_event(Transfer {
            from,
            to: self.env().self_address(),
            value: amount,
        });
    }

    pub fn blacklist(&mut self, account: Address) {
        self.set_blacklisted(account, true);
    }

    pub fn unblacklist(&mut self, account: Address) {
        self.set_blacklisted(account, false);
    }

    fn set_blacklisted(&mut self, account: Address, blacklisted: bool) {
        self.only_admin();
        self.blacklisted.set(&account, blacklisted);

        self.env().emit_event(BlacklistUpdated {
            account,
            blacklisted,
            updated_by: self.env().caller(),
        });
    }

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from,
            to,
            value: amount,
        });
    }

    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }

    fn only_admin(&self) {
        let caller = self.env().caller();
        let admin = match self.admin.get() {
            Some(addr) => addr,
            None => self.env().revert(TokenError::Unauthorized),
        };
        if caller != admin {
            self.env().revert(TokenError::Unauthorized);
        }
    }
}

/// External token interface for interacting with CEP-18 tokens
#[odra::external_contract]
pub trait Cep18Token {
    /// Get the balance of an address
    fn balance_of(&self, owner: Address) -> U256;

    /// Transfer tokens; `false` means the token refused the transfer
    fn transfer(&mut self, to: Address, amount: U256) -> bool;

    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;

    fn approve(&mut self, spender: Address, amount: U256) -> bool;

    fn allowance(&self, owner: Address, spender: Address) -> U256;

    fn total_supply(&self) -> U256;

    fn decimals(&self) -> u8;
}
