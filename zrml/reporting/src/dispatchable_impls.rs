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
    types::{ConfigurationError, Market},
    AccountIdOf, BalanceOf, Config, Error, Event, HashOf, MarketCounter, MarketIdOf, MarketOf,
    Markets, MomentOf, Pallet, PayoutDistributionHashStakeToken,
    LOG_TARGET,
};
use alloc::vec::Vec;
use frame_support::{
    ensure, require_transactional,
    traits::{Currency, ExistenceRequirement, Get, Time},
    BoundedVec,
};
use reporting_primitives::{
    constants::{MAX_FEE_PER_ETH_IN_ATTOETH, MAX_OUTCOMES, MIN_OUTCOMES},
    math::checked_ops_res::CheckedAddRes,
    traits::{
        DisputeBondFactory, ReportingWindowApi, ReputationTokenApi, ShareTokenFactory,
        StakeTokenApi, UniverseApi,
    },
    types::{OutcomeIndex, PayoutNumerator, ReportingState},
};
use sp_runtime::{
    traits::{One, Zero},
    DispatchError, DispatchResult,
};

impl<T: Config> Pallet<T> {
    #[allow(clippy::too_many_arguments)]
    #[require_transactional]
    pub(crate) fn do_initialize_market(
        creator: AccountIdOf<T>,
        reporting_window: AccountIdOf<T>,
        end_time: MomentOf<T>,
        number_of_outcomes: OutcomeIndex,
        num_ticks: PayoutNumerator,
        fee_per_eth_in_attoeth: u128,
        denomination_token: AccountIdOf<T>,
        designated_reporter: AccountIdOf<T>,
        value_sent: BalanceOf<T>,
    ) -> DispatchResult {
        let invalid = Error::<T>::InvalidConfiguration;
        ensure!(number_of_outcomes >= MIN_OUTCOMES, invalid(ConfigurationError::TooFewOutcomes));
        ensure!(number_of_outcomes <= MAX_OUTCOMES, invalid(ConfigurationError::TooManyOutcomes));
        ensure!(!num_ticks.is_zero(), invalid(ConfigurationError::ZeroNumTicks));
        ensure!(
            num_ticks.checked_rem(PayoutNumerator::from(number_of_outcomes)) == Some(0),
            invalid(ConfigurationError::NumTicksNotDivisible)
        );
        ensure!(
            fee_per_eth_in_attoeth <= MAX_FEE_PER_ETH_IN_ATTOETH,
            invalid(ConfigurationError::FeeAboveMaximum)
        );
        ensure!(!Self::is_zero_account(&creator), invalid(ConfigurationError::ZeroCreator));
        ensure!(
            !Self::is_zero_account(&designated_reporter),
            invalid(ConfigurationError::ZeroDesignatedReporter)
        );

        let universe = T::ReportingWindow::universe(&reporting_window);
        ensure!(
            T::Universe::forking_market(&universe).is_none(),
            invalid(ConfigurationError::ForkingMarketActive)
        );

        let market_id = MarketCounter::<T>::get();
        let market_account = Self::market_account(market_id);
        let reputation_token = T::ReportingWindow::reputation_token(&reporting_window);
        let no_show_bond = T::Universe::designated_report_no_show_bond(&universe);
        ensure!(
            T::ReputationToken::balance_of(&reputation_token, &market_account) >= no_show_bond,
            invalid(ConfigurationError::InsufficientNoShowBond)
        );

        let validity_bond = T::Universe::validity_bond(&universe);
        // The market account must survive the gas refund while it escrows the validity bond.
        ensure!(
            validity_bond >= T::Currency::minimum_balance(),
            invalid(ConfigurationError::ValidityBondBelowExistentialDeposit)
        );
        let target_reporter_gas_costs = T::Universe::target_reporter_gas_costs(&universe);
        let held = validity_bond.checked_add_res(&target_reporter_gas_costs)?;
        ensure!(value_sent > held, invalid(ConfigurationError::NonPositiveRefund));

        let fee_divisor = Self::fee_divisor(fee_per_eth_in_attoeth)?;

        MarketCounter::<T>::put(market_id.checked_add_res(&One::one())?);

        T::Currency::transfer(&creator, &market_account, held, ExistenceRequirement::AllowDeath)
            .map_err(Self::collaborator_failure("transfer"))?;

        let mut share_tokens = BoundedVec::with_bounded_capacity(number_of_outcomes.into());
        for outcome in 0..number_of_outcomes {
            let share_token = T::ShareTokenFactory::create_share_token(market_id, outcome)
                .map_err(Self::collaborator_failure("create_share_token"))?;
            share_tokens
                .try_push(share_token)
                .map_err(|_| invalid(ConfigurationError::TooManyOutcomes))?;
        }

        let market = Market {
            creator: creator.clone(),
            owner: creator.clone(),
            reporting_window,
            universe,
            end_time,
            number_of_outcomes,
            num_ticks,
            fee_divisor,
            denomination_token,
            designated_reporter: designated_reporter.clone(),
            designated_report_received_time: None,
            tentative_winners: Default::default(),
            total_stake: Zero::zero(),
            extra_dispute_bond_remaining_to_be_paid_out: Zero::zero(),
            designated_reporter_dispute_bond: None,
            first_reporters_dispute_bond: None,
            share_tokens,
            validity_bond,
            target_reporter_gas_costs,
        };
        Markets::<T>::insert(market_id, market);

        Self::deposit_event(Event::MarketInitialized {
            market_id,
            creator,
            designated_reporter,
            number_of_outcomes,
            num_ticks,
            fee_divisor,
        });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_designated_report(
        stake_token: AccountIdOf<T>,
        market_id: MarketIdOf<T>,
    ) -> DispatchResult {
        let mut market = Self::market(&market_id)?;
        Self::ensure_reporting_state(market_id, &market, ReportingState::DesignatedReporting)?;
        let payout_distribution_hash =
            Self::contained_payout_distribution_hash(market_id, &stake_token)
                .ok_or(Error::<T>::Unauthorized)?;

        let received_time = T::Timestamp::now();
        market.designated_report_received_time = Some(received_time);
        market.tentative_winners.seat(payout_distribution_hash);
        let reporting_window = market.reporting_window.clone();
        let owner = market.owner.clone();
        let target_reporter_gas_costs = market.target_reporter_gas_costs;
        Markets::<T>::insert(market_id, market);

        T::ReportingWindow::update_market_phase(&reporting_window, market_id)
            .map_err(Self::collaborator_failure("update_market_phase"))?;
        T::ReportingWindow::note_designated_report(&reporting_window, market_id)
            .map_err(Self::collaborator_failure("note_designated_report"))?;

        // The designated reporter showed up, so the no-show bond goes back to the owner.
        let market_account = Self::market_account(market_id);
        let reputation_token = T::ReportingWindow::reputation_token(&reporting_window);
        let no_show_bond = T::ReputationToken::balance_of(&reputation_token, &market_account);
        if !no_show_bond.is_zero() {
            T::ReputationToken::trusted_transfer(
                &reputation_token,
                &market_account,
                &owner,
                no_show_bond,
            )
            .map_err(Self::collaborator_failure("trusted_transfer"))?;
        }
        T::Currency::transfer(
            &market_account,
            &owner,
            target_reporter_gas_costs,
            ExistenceRequirement::KeepAlive,
        )
        .map_err(Self::collaborator_failure("transfer"))?;

        Self::deposit_event(Event::DesignatedReportSubmitted {
            market_id,
            payout_distribution_hash,
            received_time,
        });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_dispute_designated_report(
        who: AccountIdOf<T>,
        market_id: MarketIdOf<T>,
        payout_numerators: Vec<PayoutNumerator>,
        amount: BalanceOf<T>,
        invalid: bool,
    ) -> DispatchResult {
        let mut market = Self::market(&market_id)?;
        Self::ensure_reporting_state(market_id, &market, ReportingState::DesignatedDispute)?;

        let bond_amount = T::DesignatedReporterDisputeBond::get();
        let (dispute_bond, payout_distribution_hash) = Self::post_dispute_bond(
            &who,
            market_id,
            &mut market,
            &payout_numerators,
            amount,
            invalid,
            bond_amount,
        )?;
        market.designated_reporter_dispute_bond = Some(dispute_bond.clone());
        let reporting_window = market.reporting_window.clone();
        Markets::<T>::insert(market_id, market);

        T::ReportingWindow::update_market_phase(&reporting_window, market_id)
            .map_err(Self::collaborator_failure("update_market_phase"))?;
        T::ReportingWindow::increase_total_stake(&reporting_window, bond_amount)
            .map_err(Self::collaborator_failure("increase_total_stake"))?;
        Self::buy_dispute_stake(
            &who,
            market_id,
            payout_distribution_hash,
            &payout_numerators,
            amount,
            invalid,
        )?;

        Self::deposit_event(Event::DesignatedReportDisputed {
            market_id,
            disputer: who,
            dispute_bond,
            bond_amount,
            payout_distribution_hash,
        });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_dispute_first_reporters(
        who: AccountIdOf<T>,
        market_id: MarketIdOf<T>,
        payout_numerators: Vec<PayoutNumerator>,
        amount: BalanceOf<T>,
        invalid: bool,
    ) -> DispatchResult {
        let mut market = Self::market(&market_id)?;
        Self::ensure_reporting_state(market_id, &market, ReportingState::FirstDispute)?;

        let bond_amount = T::FirstReportersDisputeBond::get();
        let (dispute_bond, payout_distribution_hash) = Self::post_dispute_bond(
            &who,
            market_id,
            &mut market,
            &payout_numerators,
            amount,
            invalid,
            bond_amount,
        )?;
        market.first_reporters_dispute_bond = Some(dispute_bond.clone());
        let current_window = market.reporting_window.clone();
        let next_window = T::Universe::next_reporting_window(&market.universe)
            .map_err(Self::collaborator_failure("next_reporting_window"))?;
        market.reporting_window = next_window.clone();
        Markets::<T>::insert(market_id, market);

        T::ReportingWindow::update_market_phase(&current_window, market_id)
            .map_err(Self::collaborator_failure("update_market_phase"))?;
        T::ReportingWindow::increase_total_stake(&current_window, bond_amount)
            .map_err(Self::collaborator_failure("increase_total_stake"))?;
        Self::buy_dispute_stake(
            &who,
            market_id,
            payout_distribution_hash,
            &payout_numerators,
            amount,
            invalid,
        )?;
        T::ReportingWindow::remove_market(&current_window, market_id)
            .map_err(Self::collaborator_failure("remove_market"))?;
        T::ReportingWindow::migrate_market_in_from_sibling(&next_window, market_id)
            .map_err(Self::collaborator_failure("migrate_market_in_from_sibling"))?;

        Self::deposit_event(Event::FirstReportersDisputed {
            market_id,
            disputer: who,
            dispute_bond,
            bond_amount,
            payout_distribution_hash,
        });
        Self::deposit_event(Event::MarketMigrated {
            market_id,
            from: current_window,
            to: next_window,
        });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_update_tentative_winning_payout_distribution_hash(
        stake_token: AccountIdOf<T>,
        market_id: MarketIdOf<T>,
        payout_distribution_hash: HashOf<T>,
    ) -> DispatchResult {
        let mut market = Self::market(&market_id)?;
        let registered =
            PayoutDistributionHashStakeToken::<T>::get(market_id, payout_distribution_hash);
        ensure!(registered.as_ref() == Some(&stake_token), Error::<T>::Unauthorized);

        let new_supply = T::StakeTokens::total_supply(&stake_token);
        let previous = market.tentative_winners;
        market
            .tentative_winners
            .on_supply_changed(payout_distribution_hash, new_supply, |other| {
                Self::supply_of(market_id, other)
            })
            .map_err(|error| {
                log::debug!(
                    target: LOG_TARGET,
                    "Rejected supply of {:?} for market {:?}: {:?}",
                    payout_distribution_hash,
                    market_id,
                    error,
                );
                Error::<T>::InvalidStateTransition
            })?;

        let tentative_winners = market.tentative_winners;
        Markets::<T>::insert(market_id, market);

        if tentative_winners != previous {
            Self::deposit_event(Event::TentativeWinnersUpdated {
                market_id,
                tentative_winning_payout_distribution_hash: tentative_winners.winning,
                best_guess_second_place_tentative_winner: tentative_winners.second_place,
            });
        }

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_increase_total_stake(
        stake_token: AccountIdOf<T>,
        market_id: MarketIdOf<T>,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        let mut market = Self::market(&market_id)?;
        let payout_distribution_hash =
            Self::contained_payout_distribution_hash(market_id, &stake_token)
                .ok_or(Error::<T>::Unauthorized)?;

        Self::record_stake_increase(market_id, payout_distribution_hash, amount)?;
        market.total_stake = market.total_stake.checked_add_res(&amount)?;
        let total_stake = market.total_stake;
        let reporting_window = market.reporting_window.clone();
        Markets::<T>::insert(market_id, market);

        T::ReportingWindow::increase_total_stake(&reporting_window, amount)
            .map_err(Self::collaborator_failure("increase_total_stake"))?;

        Self::deposit_event(Event::TotalStakeIncreased {
            market_id,
            payout_distribution_hash,
            amount,
            total_stake,
        });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_decrease_market_creator_settlement_fee(
        who: AccountIdOf<T>,
        market_id: MarketIdOf<T>,
        new_fee_per_eth_in_attoeth: u128,
    ) -> DispatchResult {
        Markets::<T>::try_mutate(market_id, |maybe_market| -> DispatchResult {
            let market = maybe_market.as_mut().ok_or(Error::<T>::MarketDoesNotExist)?;
            ensure!(who == market.owner, Error::<T>::Unauthorized);

            let fee_divisor =
                Self::ensure_fee_decrease(market.fee_divisor, new_fee_per_eth_in_attoeth)?;
            market.fee_divisor = fee_divisor;

            Self::deposit_event(Event::SettlementFeeDecreased { market_id, fee_divisor });

            Ok(())
        })
    }

    #[require_transactional]
    pub(crate) fn do_transfer_market_ownership(
        who: AccountIdOf<T>,
        market_id: MarketIdOf<T>,
        new_owner: AccountIdOf<T>,
    ) -> DispatchResult {
        Markets::<T>::try_mutate(market_id, |maybe_market| -> DispatchResult {
            let market = maybe_market.as_mut().ok_or(Error::<T>::MarketDoesNotExist)?;
            ensure!(who == market.owner, Error::<T>::Unauthorized);
            ensure!(
                !Self::is_zero_account(&new_owner),
                Error::<T>::InvalidConfiguration(ConfigurationError::ZeroOwner)
            );

            let previous_owner = core::mem::replace(&mut market.owner, new_owner.clone());

            Self::deposit_event(Event::MarketOwnershipTransferred {
                market_id,
                previous_owner,
                new_owner,
            });

            Ok(())
        })
    }

    /// Validates a dispute of the tentative winner, then creates and funds its bond.
    ///
    /// Returns the bond and the hash of the disputing distribution. The bond is added to the
    /// stake of `market` but nothing is written to storage.
    fn post_dispute_bond(
        who: &AccountIdOf<T>,
        market_id: MarketIdOf<T>,
        market: &mut MarketOf<T>,
        payout_numerators: &[PayoutNumerator],
        amount: BalanceOf<T>,
        invalid: bool,
        bond_amount: BalanceOf<T>,
    ) -> Result<(AccountIdOf<T>, HashOf<T>), DispatchError> {
        let winning =
            market.tentative_winners.winning.ok_or(Error::<T>::InvalidStateTransition)?;
        let payout_distribution_hash =
            Self::payout_distribution_hash_of(market, payout_numerators, invalid)?;
        ensure!(payout_distribution_hash != winning, Error::<T>::InvalidStateTransition);
        // Without fresh stake on the challenger the current winner must still be backed.
        if amount.is_zero() {
            ensure!(
                !Self::supply_of(market_id, &winning).is_zero(),
                Error::<T>::InvalidStateTransition
            );
        }

        let dispute_bond =
            T::DisputeBondFactory::create_dispute_bond(market_id, who, bond_amount, winning)
                .map_err(Self::collaborator_failure("create_dispute_bond"))?;
        let reputation_token = T::ReportingWindow::reputation_token(&market.reporting_window);
        T::ReputationToken::trusted_transfer(&reputation_token, who, &dispute_bond, bond_amount)
            .map_err(Self::collaborator_failure("trusted_transfer"))?;

        market.total_stake = market.total_stake.checked_add_res(&bond_amount)?;
        market.extra_dispute_bond_remaining_to_be_paid_out =
            market.extra_dispute_bond_remaining_to_be_paid_out.checked_add_res(&bond_amount)?;

        Ok((dispute_bond, payout_distribution_hash))
    }

    fn buy_dispute_stake(
        who: &AccountIdOf<T>,
        market_id: MarketIdOf<T>,
        payout_distribution_hash: HashOf<T>,
        payout_numerators: &[PayoutNumerator],
        amount: BalanceOf<T>,
        invalid: bool,
    ) -> DispatchResult {
        if amount.is_zero() {
            return Ok(());
        }
        let stake_token = Self::get_or_create_stake_token_for(
            market_id,
            payout_distribution_hash,
            payout_numerators,
            invalid,
        )?;
        T::StakeTokens::trusted_buy(&stake_token, who, amount)
            .map_err(Self::collaborator_failure("trusted_buy"))
    }
}
