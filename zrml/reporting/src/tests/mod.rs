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

#![cfg(all(feature = "mock", test))]

mod designated_report;
mod dispute_designated_report;

use crate::{
    mock::{
        consts::*,
        ext_builder::ExtBuilder,
        runtime::{Balances, MockStorage, Reporting, Runtime, RuntimeOrigin, System, Timestamp},
        types::{
            MockDisputeBondFactory, MockReportingWindow, MockReputationToken,
            MockShareTokenFactory, MockStakeTokens, MockUniverse, ReportingWindowCall,
        },
    },
    types::ConfigurationError,
    Error, Event, MarketCounter, Markets, MarketOf, PayoutDistributionHashStake,
};
use frame_support::{assert_noop, assert_ok, traits::Currency};
use reporting_primitives::{
    constants::{
        mock::{
            DesignatedReporterDisputeBond, DesignatedReportingDisputeDuration,
            DesignatedReportingDuration, FirstReportersDisputeBond,
        },
        BASE, ONE_ETH,
    },
    traits::ReputationTokenApi,
    types::{AccountIdTest, Balance, Hash, MarketId, Moment, PayoutNumerator, ReportingState},
};
use sp_runtime::{DispatchError, TokenError};

/// Payout which assigns all ticks to `outcome`.
fn payout(outcome: usize) -> Vec<PayoutNumerator> {
    let mut payout_numerators = vec![0; usize::from(NUMBER_OF_OUTCOMES)];
    payout_numerators[outcome] = NUM_TICKS;
    payout_numerators
}

fn invalid_payout() -> Vec<PayoutNumerator> {
    vec![NUM_TICKS / PayoutNumerator::from(NUMBER_OF_OUTCOMES); usize::from(NUMBER_OF_OUTCOMES)]
}

fn set_now(now: Moment) {
    Timestamp::set_timestamp(now);
}

fn designated_report_due() -> Moment {
    END_TIME + DesignatedReportingDuration::get()
}

fn market(market_id: MarketId) -> MarketOf<Runtime> {
    Markets::<Runtime>::get(market_id).unwrap()
}

fn reputation_of(who: AccountIdTest) -> Balance {
    MockReputationToken::balance_of(&REPUTATION_TOKEN, &who)
}

/// Funds the no-show bond of the next market and creates it on behalf of `ALICE`.
fn initialize_market() -> MarketId {
    let market_id = MarketCounter::<Runtime>::get();
    MockReputationToken::deposit(
        REPUTATION_TOKEN,
        Reporting::market_account(market_id),
        DESIGNATED_REPORT_NO_SHOW_BOND,
    );
    assert_ok!(Reporting::initialize_market(
        RuntimeOrigin::signed(ALICE),
        REPORTING_WINDOW,
        END_TIME,
        NUMBER_OF_OUTCOMES,
        NUM_TICKS,
        FEE_PER_ETH_IN_ATTOETH,
        DENOMINATION_TOKEN,
        BOB,
        VALUE_SENT,
    ));
    market_id
}

fn payout_distribution_hash(market_id: MarketId, payout_numerators: &[PayoutNumerator]) -> Hash {
    Reporting::derive_payout_distribution_hash(market_id, payout_numerators, false).unwrap()
}

/// Creates the stake token of `payout_numerators` and returns it along with its hash.
fn stake_token(market_id: MarketId, payout_numerators: &[PayoutNumerator]) -> (AccountIdTest, Hash) {
    assert_ok!(Reporting::create_stake_token(
        RuntimeOrigin::signed(DAVE),
        market_id,
        payout_numerators.to_vec(),
        false,
    ));
    let hash = payout_distribution_hash(market_id, payout_numerators);
    (Reporting::stake_token(market_id, hash).unwrap(), hash)
}

/// Files the designated report for outcome 0 at the end of the market. The designated stake
/// token is given a supply of 105.
fn submit_designated_report(market_id: MarketId) -> (AccountIdTest, Hash) {
    set_now(END_TIME);
    let (designated, designated_hash) = stake_token(market_id, &payout(0));
    MockStakeTokens::set_total_supply(designated, 105);
    assert_ok!(Reporting::designated_report(RuntimeOrigin::signed(designated), market_id));
    (designated, designated_hash)
}

/// Disputes the designated report in favor of outcome 1 on behalf of `CHARLIE`, buying 14 units
/// of the disputing stake token.
fn dispute_designated_report(market_id: MarketId) -> Hash {
    MockReputationToken::deposit(REPUTATION_TOKEN, CHARLIE, DesignatedReporterDisputeBond::get());
    assert_ok!(Reporting::dispute_designated_report(
        RuntimeOrigin::signed(CHARLIE),
        market_id,
        payout(1),
        14,
        false,
    ));
    payout_distribution_hash(market_id, &payout(1))
}
