//! Basis-point share arithmetic for distribution rounds.
//!
//! Everything here is pure: validation of a share table, expansion of an
//! equal-split group share, and planning of one round. All amounts are exact
//! integers; floor-division residue goes to the reward target.
use odra::prelude::*;
use odra::casper_types::U256;
use super::errors::DistributorError;

/// One whole, in basis points (100.00%)
pub const BASIS_POINTS: u32 = 10_000;

/// Upper bound on recipients paid in a single round
pub const MAX_RECIPIENTS: usize = 20;

/// A payee and its share in basis points
#[odra::odra_type]
pub struct Recipient {
    pub account: Address,
    pub share: u32,
}

impl Recipient {
    pub fn new(account: Address, share: u32) -> Self {
        Self { account, share }
    }
}

/// Amount owed to one account in a round
#[odra::odra_type]
pub struct Allocation {
    pub account: Address,
    pub amount: U256,
}

/// The transfers one distribution round performs
#[odra::odra_type]
pub struct DistributionPlan {
    /// Recipient allocations, in configured order
    pub allocations: Vec<Allocation>,
    /// Reward allocation, residual included
    pub reward: Allocation,
    /// Floor-division residue folded into `reward`
    pub residual: U256,
}

impl DistributionPlan {
    /// Sum of every allocation in the plan
    pub fn total(&self) -> U256 {
        self.allocations
            .iter()
            .fold(self.reward.amount, |acc, allocation| acc + allocation.amount)
    }

    /// Non-zero transfers in execution order, with a flag marking the reward
    pub fn transfers(&self) -> impl Iterator<Item = (&Allocation, bool)> + '_ {
        self.allocations
            .iter()
            .map(|allocation| (allocation, false))
            .chain(core::iter::once((&self.reward, true)))
            .filter(|(allocation, _)| !allocation.amount.is_zero())
    }
}

/// Checks a share table, reward share and per-round amount.
pub fn validate(
    recipients: &[Recipient],
    reward_share: u32,
    distribution_amount: U256,
) -> Result<(), DistributorError> {
    if recipients.is_empty() {
        return Err(DistributorError::EmptyRecipientList);
    }
    if recipients.len() > MAX_RECIPIENTS {
        return Err(DistributorError::TooManyRecipients);
    }
    if reward_share > BASIS_POINTS {
        return Err(DistributorError::ShareOutOfRange);
    }

    let mut total = u64::from(reward_share);
    for (idx, recipient) in recipients.iter().enumerate() {
        if recipient.share > BASIS_POINTS {
            return Err(DistributorError::ShareOutOfRange);
        }
        let duplicate = recipients
            .iter()
            .take(idx)
            .any(|existing| existing.account == recipient.account);
        if duplicate {
            return Err(DistributorError::DuplicateRecipient);
        }
        total += u64::from(recipient.share);
    }
    if total != u64::from(BASIS_POINTS) {
        return Err(DistributorError::SharesDoNotSumTo100Percent);
    }

    if distribution_amount.is_zero() {
        return Err(DistributorError::ZeroDistributionAmount);
    }
    if distribution_amount
        .checked_mul(U256::from(BASIS_POINTS))
        .is_none()
    {
        return Err(DistributorError::DistributionAmountTooLarge);
    }

    Ok(())
}

/// Expands a single group share into an equal per-recipient table.
///
/// The group share must divide evenly; nothing is rounded.
pub fn equal_split(
    accounts: &[Address],
    group_share: u32,
) -> Result<Vec<Recipient>, DistributorError> {
    if accounts.is_empty() {
        return Err(DistributorError::EmptyRecipientList);
    }
    if accounts.len() > MAX_RECIPIENTS {
        return Err(DistributorError::TooManyRecipients);
    }

    let count = accounts.len() as u32;
    if group_share % count != 0 {
        return Err(DistributorError::UnevenEqualSplit);
    }

    let share = group_share / count;
    Ok(accounts
        .iter()
        .map(|account| Recipient::new(*account, share))
        .collect())
}

/// Pairs accounts with shares given as two parallel lists.
///
/// Returns `None` when the lists differ in length.
pub fn pair_recipients(accounts: Vec<Address>, shares: Vec<u32>) -> Option<Vec<Recipient>> {
    if accounts.len() != shares.len() {
        return None;
    }
    Some(
        accounts
            .into_iter()
            .zip(shares)
            .map(|(account, share)| Recipient::new(account, share))
            .collect(),
    )
}

/// `floor(amount * share / BASIS_POINTS)`
pub fn portion(amount: U256, share: u32) -> Result<U256, DistributorError> {
    let scaled = amount
        .checked_mul(U256::from(share))
        .ok_or(DistributorError::ArithmeticOverflow)?;
    Ok(scaled / U256::from(BASIS_POINTS))
}

/// Plans one round: every payee gets its floored portion and the reward
/// target additionally absorbs whatever the flooring left over, so the plan
/// always totals exactly `amount`.
pub fn plan(
    amount: U256,
    recipients: &[Recipient],
    reward_target: Address,
    reward_share: u32,
) -> Result<DistributionPlan, DistributorError> {
    let mut allocations = Vec::with_capacity(recipients.len());
    let mut planned = U256::zero();
    for recipient in recipients {
        let share = portion(amount, recipient.share)?;
        planned = planned
            .checked_add(share)
            .ok_or(DistributorError::ArithmeticOverflow)?;
        allocations.push(Allocation {
            account: recipient.account,
            amount: share,
        });
    }

    let reward = portion(amount, reward_share)?;
    planned = planned
        .checked_add(reward)
        .ok_or(DistributorError::ArithmeticOverflow)?;
    let residual = amount
        .checked_sub(planned)
        .ok_or(DistributorError::ArithmeticOverflow)?;

    Ok(DistributionPlan {
        allocations,
        reward: Allocation {
            account: reward_target,
            amount: reward + residual,
        },
        residual,
    })
}
