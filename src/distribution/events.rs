//! Events for the token distributor
use odra::prelude::*;
use odra::casper_types::U256;

/// Event emitted once, when the distributor is configured
#[odra::event]
pub struct Initialized {
    /// Token being distributed
    pub token: Address,
    /// Account receiving the reward share and the rounding residual
    pub reward_target: Address,
    /// Reward share in basis points
    pub reward_share: u32,
    /// Amount moved per round
    pub distribution_amount: U256,
    /// Number of configured recipients
    pub recipient_count: u32,
    /// Account that performed the initialization
    pub initializer: Address,
}

/// Event emitted for every non-zero transfer of a round, in transfer order
#[odra::event]
pub struct PayoutSent {
    /// Round the payout belongs to
    pub round: u64,
    /// Account that received the payout
    pub account: Address,
    /// Amount transferred
    pub amount: U256,
    /// Whether this is the reward target's payout
    pub is_reward: bool,
}

/// Event emitted when a distribution round completes
#[odra::event]
pub struct Distributed {
    /// Round number, starting at 1
    pub round: u64,
    /// Account that triggered the round
    pub caller: Address,
    /// Total amount moved (always the configured distribution amount)
    pub amount: U256,
    /// Amount paid to the reward target, residual included
    pub reward_amount: U256,
    /// Rounding residual absorbed by the reward target
    pub residual: U256,
    /// Block time of the round
    pub timestamp: u64,
}
