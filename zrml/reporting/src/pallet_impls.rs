// Copyright 2025 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

use crate::{
    payout_hasher, AccountIdOf, BalanceOf, Config, Error, Event, HashOf, MarketIdOf, MarketOf,
    Markets, MomentOf, Pallet, PayoutDistributionHashStake, PayoutDistributionHashStakeToken,
    LOG_TARGET,
};
use frame_support::{
    ensure,
    traits::{Get, Time},
};
use parity_scale_codec::Decode;
use reporting_primitives::{
    constants::{MAX_FEE_PER_ETH_IN_ATTOETH, ONE_ETH},
    math::checked_ops_res::{CheckedAddRes, CheckedDivRes},
    traits::{ReportingWindowApi, StakeTokenApi, StakeTokenFactory, UniverseApi},
    types::{OutcomeIndex, PayoutNumerator, ReportingState},
};
use sp_runtime::{
    traits::{AccountIdConversion, TrailingZeroInput, Zero},
    DispatchError, DispatchResult,
};

impl<T: Config> Pallet<T> {
    /// The account which escrows the bonds of `market_id`.
    pub fn market_account(market_id: MarketIdOf<T>) -> AccountIdOf<T> {
        T::PalletId::get().into_sub_account_truncating(market_id)
    }

    pub fn market(market_id: &MarketIdOf<T>) -> Result<MarketOf<T>, DispatchError> {
        Markets::<T>::get(market_id).ok_or(Error::<T>::MarketDoesNotExist.into())
    }

    /// Returns the current reporting phase of `market_id`.
    pub fn reporting_state(market_id: MarketIdOf<T>) -> Result<ReportingState, DispatchError> {
        let market = Self::market(&market_id)?;
        Self::reporting_state_of(market_id, &market)
    }

    pub fn designated_report_due_timestamp(
        market_id: MarketIdOf<T>,
    ) -> Result<MomentOf<T>, DispatchError> {
        Self::market(&market_id)?
            .designated_report_due_timestamp(T::DesignatedReportingDuration::get())
    }

    /// `None` until the designated report was received.
    pub fn designated_report_dispute_due_timestamp(
        market_id: MarketIdOf<T>,
    ) -> Result<Option<MomentOf<T>>, DispatchError> {
        Self::market(&market_id)?
            .designated_report_dispute_due_timestamp(T::DesignatedReportingDisputeDuration::get())
    }

    pub fn share_token(
        market_id: MarketIdOf<T>,
        outcome: OutcomeIndex,
    ) -> Result<Option<AccountIdOf<T>>, DispatchError> {
        let market = Self::market(&market_id)?;
        Ok(market.share_tokens.get(usize::from(outcome)).cloned())
    }

    pub fn tentative_winning_payout_distribution_hash(
        market_id: MarketIdOf<T>,
    ) -> Result<Option<HashOf<T>>, DispatchError> {
        Ok(Self::market(&market_id)?.tentative_winners.winning)
    }

    pub fn best_guess_second_place_tentative_winner(
        market_id: MarketIdOf<T>,
    ) -> Result<Option<HashOf<T>>, DispatchError> {
        Ok(Self::market(&market_id)?.tentative_winners.second_place)
    }

    /// Stake registered for `payout_distribution_hash`; zero if nothing was ever registered.
    pub fn payout_distribution_hash_stake(
        market_id: MarketIdOf<T>,
        payout_distribution_hash: HashOf<T>,
    ) -> BalanceOf<T> {
        PayoutDistributionHashStake::<T>::get(market_id, payout_distribution_hash)
    }

    pub fn stake_token(
        market_id: MarketIdOf<T>,
        payout_distribution_hash: HashOf<T>,
    ) -> Option<AccountIdOf<T>> {
        PayoutDistributionHashStakeToken::<T>::get(market_id, payout_distribution_hash)
    }

    /// Checks that `stake_token` stakes on `market_id` and is the token registered for its
    /// payout distribution.
    pub fn is_container_for_stake_token(
        market_id: MarketIdOf<T>,
        stake_token: &AccountIdOf<T>,
    ) -> bool {
        Self::contained_payout_distribution_hash(market_id, stake_token).is_some()
    }

    pub fn derive_payout_distribution_hash(
        market_id: MarketIdOf<T>,
        payout_numerators: &[PayoutNumerator],
        invalid: bool,
    ) -> Result<HashOf<T>, DispatchError> {
        let market = Self::market(&market_id)?;
        Self::payout_distribution_hash_of(&market, payout_numerators, invalid)
    }

    /// Returns the stake token of the payout distribution, creating it on first use.
    pub fn get_or_create_stake_token(
        market_id: MarketIdOf<T>,
        payout_numerators: &[PayoutNumerator],
        invalid: bool,
    ) -> Result<AccountIdOf<T>, DispatchError> {
        let payout_distribution_hash =
            Self::derive_payout_distribution_hash(market_id, payout_numerators, invalid)?;
        Self::get_or_create_stake_token_for(
            market_id,
            payout_distribution_hash,
            payout_numerators,
            invalid,
        )
    }

    pub(crate) fn get_or_create_stake_token_for(
        market_id: MarketIdOf<T>,
        payout_distribution_hash: HashOf<T>,
        payout_numerators: &[PayoutNumerator],
        invalid: bool,
    ) -> Result<AccountIdOf<T>, DispatchError> {
        if let Some(stake_token) =
            PayoutDistributionHashStakeToken::<T>::get(market_id, payout_distribution_hash)
        {
            return Ok(stake_token);
        }

        let stake_token =
            T::StakeTokenFactory::create_stake_token(market_id, payout_numerators, invalid)
                .map_err(Self::collaborator_failure("create_stake_token"))?;
        PayoutDistributionHashStakeToken::<T>::insert(
            market_id,
            payout_distribution_hash,
            stake_token.clone(),
        );

        Self::deposit_event(Event::StakeTokenCreated {
            market_id,
            payout_distribution_hash,
            stake_token: stake_token.clone(),
        });

        Ok(stake_token)
    }

    /// Adds `amount` to the stake registered for `payout_distribution_hash`.
    pub(crate) fn record_stake_increase(
        market_id: MarketIdOf<T>,
        payout_distribution_hash: HashOf<T>,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
        PayoutDistributionHashStake::<T>::try_mutate(
            market_id,
            payout_distribution_hash,
            |stake| -> DispatchResult {
                *stake = stake.checked_add_res(&amount)?;
                Ok(())
            },
        )
    }

    /// Current supply of the stake token backing `payout_distribution_hash`.
    pub(crate) fn supply_of(
        market_id: MarketIdOf<T>,
        payout_distribution_hash: &HashOf<T>,
    ) -> BalanceOf<T> {
        PayoutDistributionHashStakeToken::<T>::get(market_id, payout_distribution_hash)
            .map(|stake_token| T::StakeTokens::total_supply(&stake_token))
            .unwrap_or_else(Zero::zero)
    }

    pub(crate) fn contained_payout_distribution_hash(
        market_id: MarketIdOf<T>,
        stake_token: &AccountIdOf<T>,
    ) -> Option<HashOf<T>> {
        if T::StakeTokens::market(stake_token)? != market_id {
            return None;
        }
        let payout_distribution_hash = T::StakeTokens::payout_distribution_hash(stake_token)?;
        let registered =
            PayoutDistributionHashStakeToken::<T>::get(market_id, payout_distribution_hash)?;
        (registered == *stake_token).then_some(payout_distribution_hash)
    }

    pub(crate) fn payout_distribution_hash_of(
        market: &MarketOf<T>,
        payout_numerators: &[PayoutNumerator],
        invalid: bool,
    ) -> Result<HashOf<T>, DispatchError> {
        payout_hasher::derive_payout_distribution_hash::<T::Hashing>(
            market.number_of_outcomes,
            market.num_ticks,
            payout_numerators,
            invalid,
        )
        .map_err(|error| {
            log::debug!(target: LOG_TARGET, "Rejected payout numerators: {:?}", error);
            Error::<T>::MalformedPayoutNumerators.into()
        })
    }

    pub(crate) fn reporting_state_of(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
    ) -> Result<ReportingState, DispatchError> {
        if let Some(forking_market) = T::Universe::forking_market(&market.universe) {
            if forking_market != market_id {
                return Ok(ReportingState::AwaitingForkMigration);
            }
        }

        let now = T::Timestamp::now();
        if now < market.end_time {
            return Ok(ReportingState::PreReporting);
        }

        match market.designated_report_received_time {
            None => {
                let due = market
                    .designated_report_due_timestamp(T::DesignatedReportingDuration::get())?;
                if now < due {
                    return Ok(ReportingState::DesignatedReporting);
                }
            }
            Some(received) if market.designated_reporter_dispute_bond.is_none() => {
                let due = received
                    .checked_add_res(&T::DesignatedReportingDisputeDuration::get())?;
                return Ok(if now < due {
                    ReportingState::DesignatedDispute
                } else {
                    ReportingState::AwaitingFinalization
                });
            }
            Some(_) => {}
        }

        let first_reporters_disputed = market.first_reporters_dispute_bond.is_some();
        let state = if T::ReportingWindow::is_reporting_active(&market.reporting_window) {
            if first_reporters_disputed {
                ReportingState::LastReporting
            } else {
                ReportingState::FirstReporting
            }
        } else if market.tentative_winners.winning.is_none() {
            ReportingState::AwaitingNoReportMigration
        } else if T::ReportingWindow::is_dispute_active(&market.reporting_window) {
            if first_reporters_disputed {
                ReportingState::LastDispute
            } else {
                ReportingState::FirstDispute
            }
        } else {
            ReportingState::AwaitingFinalization
        };

        Ok(state)
    }

    pub(crate) fn ensure_reporting_state(
        market_id: MarketIdOf<T>,
        market: &MarketOf<T>,
        required: ReportingState,
    ) -> DispatchResult {
        let state = Self::reporting_state_of(market_id, market)?;
        ensure!(state == required, Error::<T>::StateMismatch(required));
        Ok(())
    }

    /// `ONE_ETH` divided by the fee, or zero if the market charges no fee.
    pub(crate) fn fee_divisor(fee_per_eth_in_attoeth: u128) -> Result<u128, DispatchError> {
        if fee_per_eth_in_attoeth.is_zero() {
            return Ok(Zero::zero());
        }
        ONE_ETH.checked_div_res(&fee_per_eth_in_attoeth)
    }

    /// Checks that `new_fee_per_eth_in_attoeth` is strictly cheaper than the fee encoded by
    /// `current_fee_divisor`.
    pub(crate) fn ensure_fee_decrease(
        current_fee_divisor: u128,
        new_fee_per_eth_in_attoeth: u128,
    ) -> Result<u128, DispatchError> {
        ensure!(
            new_fee_per_eth_in_attoeth <= MAX_FEE_PER_ETH_IN_ATTOETH,
            Error::<T>::InvalidFeeAdjustment
        );
        let new_fee_divisor = Self::fee_divisor(new_fee_per_eth_in_attoeth)?;
        let is_decrease = match (current_fee_divisor.is_zero(), new_fee_divisor.is_zero()) {
            (true, _) => false,
            (false, true) => true,
            (false, false) => new_fee_divisor > current_fee_divisor,
        };
        ensure!(is_decrease, Error::<T>::InvalidFeeAdjustment);
        Ok(new_fee_divisor)
    }

    pub(crate) fn is_zero_account(who: &AccountIdOf<T>) -> bool {
        AccountIdOf::<T>::decode(&mut TrailingZeroInput::zeroes()).is_ok_and(|zero| *who == zero)
    }

    /// Logs the error of a failed collaborator call and replaces it with `CollaboratorFailure`.
    pub(crate) fn collaborator_failure(
        call: &'static str,
    ) -> impl FnOnce(DispatchError) -> DispatchError {
        move |error| {
            log::warn!(target: LOG_TARGET, "Collaborator call `{}` failed: {:?}", call, error);
            Error::<T>::CollaboratorFailure.into()
        }
    }
}
