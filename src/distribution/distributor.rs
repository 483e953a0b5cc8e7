//! Distributor - splits a fixed amount of one CEP-18 token per round
//!
//! The contract is deployed empty and configured exactly once, by the account
//! that deployed it. After that anyone may trigger `distribute`, which pays every recipient its
//! basis-point share of the configured amount and pays the reward target its
//! own share plus the rounding residual. A round either completes every
//! transfer or reverts as a whole.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::token::Cep18TokenContractRef;
use super::errors::DistributorError;
use super::events::*;
use super::shares::{self, DistributionPlan, Recipient};

/// Token distributor contract
#[odra::module]
pub struct Distributor {
    /// Account allowed to configure the distributor
    deployer: Var<Address>,
    /// Set once by initialization, never cleared
    initialized: Var<bool>,
    /// Token being distributed
    token: Var<Address>,
    /// Recipients with their shares, in payout order
    recipients: Var<Vec<Recipient>>,
    /// Account receiving the reward share and the residual
    reward_target: Var<Address>,
    /// Reward share in basis points
    reward_share: Var<u32>,
    /// Amount moved per round
    distribution_amount: Var<U256>,
    /// Completed rounds
    rounds: Var<u64>,
    /// Sum moved over all rounds
    total_distributed: Var<U256>,
}

#[odra::module]
impl Distributor {
    /// Record the deployer as the only account allowed to configure
    pub fn init(&mut self) {
        let caller = self.env().caller();
        self.deployer.set(caller);
    }

    /// Configure the distributor with an explicit share table.
    ///
    /// # Arguments
    /// * `token` - CEP-18 token contract to distribute
    /// * `recipients` - payees and their shares in basis points
    /// * `reward_target` - payee of the reward share and rounding residual
    /// * `reward_share` - reward share in basis points
    /// * `distribution_amount` - amount moved per round, in base units
    ///
    /// Recipient shares plus `reward_share` must total exactly 10000.
    pub fn initialize(
        &mut self,
        token: Address,
        recipients: Vec<Recipient>,
        reward_target: Address,
        reward_share: u32,
        distribution_amount: U256,
    ) {
        self.configure(token, recipients, reward_target, reward_share, distribution_amount);
    }

    /// Configure the distributor with one share for the whole recipient
    /// group, split equally. `recipients_share` must divide evenly by the
    /// number of recipients.
    pub fn initialize_equal_split(
        &mut self,
        token: Address,
        recipients: Vec<Address>,
        recipients_share: u32,
        reward_target: Address,
        reward_share: u32,
        distribution_amount: U256,
    ) {
        self.ensure_not_initialized();
        self.only_deployer();
        let recipients = shares::equal_split(&recipients, recipients_share)
            .unwrap_or_else(|error| self.env().revert(error));
        self.configure(token, recipients, reward_target, reward_share, distribution_amount);
    }

    /// Run one distribution round. Callable by anyone.
    pub fn distribute(&mut self) {
        let amount = self.distribution_amount();
        let self_address = self.env().self_address();
        let mut token = self.token_ref();

        let holdings = token.balance_of(self_address);
        if holdings < amount {
            self.env().revert(DistributorError::InsufficientBalance);
        }

        let plan = self.plan_round(amount);

        let round = self.rounds.get_or_default() + 1;
        let total = self
            .total_distributed
            .get_or_default()
            .checked_add(amount)
            .unwrap_or_else(|| self.env().revert(DistributorError::ArithmeticOverflow));
        self.rounds.set(round);
        self.total_distributed.set(total);

        for (allocation, is_reward) in plan.transfers() {
            if !token.transfer(allocation.account, allocation.amount) {
                self.env().revert(DistributorError::TransferFailed);
            }
            self.env().emit_event(PayoutSent {
                round,
                account: allocation.account,
                amount: allocation.amount,
                is_reward,
            });
        }

        if token.balance_of(self_address) != holdings - amount {
            self.env().revert(DistributorError::BalanceMismatch);
        }

        self.env().emit_event(Distributed {
            round,
            caller: self.env().caller(),
            amount,
            reward_amount: plan.reward.amount,
            residual: plan.residual,
            timestamp: self.env().get_block_time(),
        });
    }

    // View functions

    pub fn get_deployer(&self) -> Address {
        self.deployer.get_or_revert_with(DistributorError::Unauthorized)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get_or_default()
    }

    pub fn token(&self) -> Address {
        self.token.get_or_revert_with(DistributorError::NotInitialized)
    }

    pub fn recipients(&self) -> Vec<Recipient> {
        self.recipients.get_or_revert_with(DistributorError::NotInitialized)
    }

    pub fn reward_target(&self) -> Address {
        self.reward_target.get_or_revert_with(DistributorError::NotInitialized)
    }

    pub fn reward_share(&self) -> u32 {
        self.reward_share.get_or_revert_with(DistributorError::NotInitialized)
    }

    pub fn distribution_amount(&self) -> U256 {
        self.distribution_amount.get_or_revert_with(DistributorError::NotInitialized)
    }

    /// Current token holdings of the distributor
    pub fn token_balance(&self) -> U256 {
        self.token_ref().balance_of(self.env().self_address())
    }

    pub fn rounds(&self) -> u64 {
        self.rounds.get_or_default()
    }

    pub fn total_distributed(&self) -> U256 {
        self.total_distributed.get_or_default()
    }

    /// The transfers the next round would perform
    pub fn preview_distribution(&self) -> DistributionPlan {
        self.plan_round(self.distribution_amount())
    }

    // Internal helper functions

    fn configure(
        &mut self,
        token: Address,
        recipients: Vec<Recipient>,
        reward_target: Address,
        reward_share: u32,
        distribution_amount: U256,
    ) {
        self.ensure_not_initialized();
        self.only_deployer();

        if let Err(error) = shares::validate(&recipients, reward_share, distribution_amount) {
            self.env().revert(error);
        }
        if !token.is_contract() {
            self.env().revert(DistributorError::InvalidToken);
        }

        let self_address = self.env().self_address();
        let invalid_payee = recipients
            .iter()
            .map(|recipient| recipient.account)
            .chain(core::iter::once(reward_target))
            .any(|account| account == self_address || account == token);
        if invalid_payee {
            self.env().revert(DistributorError::InvalidAccount);
        }

        let recipient_count = recipients.len() as u32;
        self.token.set(token);
        self.recipients.set(recipients);
        self.reward_target.set(reward_target);
        self.reward_share.set(reward_share);
        self.distribution_amount.set(distribution_amount);
        self.initialized.set(true);

        self.env().emit_event(Initialized {
            token,
            reward_target,
            reward_share,
            distribution_amount,
            recipient_count,
            initializer: self.env().caller(),
        });
    }

    fn plan_round(&self, amount: U256) -> DistributionPlan {
        let recipients = self.recipients();
        shares::plan(amount, &recipients, self.reward_target(), self.reward_share())
            .unwrap_or_else(|error| self.env().revert(error))
    }

    fn token_ref(&self) -> Cep18TokenContractRef {
        Cep18TokenContractRef::new(self.env(), self.token())
    }

    fn only_deployer(&self) {
        if self.deployer.get() != Some(self.env().caller()) {
            self.env().revert(DistributorError::Unauthorized);
        }
    }

    fn ensure_not_initialized(&self) {
        if self.initialized.get_or_default() {
            self.env().revert(DistributorError::AlreadyInitialized);
        }
    }
}
