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

use super::*;
use test_case::test_case;

#[test]
fn dispute_designated_report_works() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        let (_, designated_hash) = submit_designated_report(market_id);
        MockReportingWindow::clear_calls();
        let bond_amount = DesignatedReporterDisputeBond::get();
        MockReputationToken::deposit(REPUTATION_TOKEN, CHARLIE, bond_amount);

        assert_ok!(Reporting::dispute_designated_report(
            RuntimeOrigin::signed(CHARLIE),
            market_id,
            payout(1),
            14,
            false,
        ));

        let disputed_hash = payout_distribution_hash(market_id, &payout(1));
        let market = market(market_id);
        let dispute_bond = market.designated_reporter_dispute_bond.unwrap();
        assert!(MockDisputeBondFactory::called_once_with(
            market_id,
            CHARLIE,
            bond_amount,
            designated_hash
        ));
        assert_eq!(reputation_of(CHARLIE), 0);
        assert_eq!(reputation_of(dispute_bond), bond_amount);
        assert_eq!(market.total_stake, bond_amount);
        assert_eq!(market.extra_dispute_bond_remaining_to_be_paid_out, bond_amount);
        assert_eq!(market.first_reporters_dispute_bond, None);
        // The tentative winner only moves once the stake tokens announce their supply.
        assert_eq!(market.tentative_winners.winning, Some(designated_hash));

        let disputed = Reporting::stake_token(market_id, disputed_hash).unwrap();
        assert_eq!(MockStakeTokens::trusted_buy_calls(), vec![(disputed, CHARLIE, 14)]);
        assert_eq!(
            MockReportingWindow::calls(),
            vec![
                ReportingWindowCall::UpdateMarketPhase { window: REPORTING_WINDOW, market_id },
                ReportingWindowCall::IncreaseTotalStake {
                    window: REPORTING_WINDOW,
                    amount: bond_amount
                },
            ]
        );
        System::assert_last_event(
            Event::<Runtime>::DesignatedReportDisputed {
                market_id,
                disputer: CHARLIE,
                dispute_bond,
                bond_amount,
                payout_distribution_hash: disputed_hash,
            }
            .into(),
        );
    });
}

#[test]
fn dispute_designated_report_without_purchase_does_not_touch_stake_tokens() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        submit_designated_report(market_id);
        MockReputationToken::deposit(
            REPUTATION_TOKEN,
            CHARLIE,
            DesignatedReporterDisputeBond::get(),
        );
        let created = MockStakeTokens::created();

        assert_ok!(Reporting::dispute_designated_report(
            RuntimeOrigin::signed(CHARLIE),
            market_id,
            payout(1),
            0,
            false,
        ));

        assert!(MockStakeTokens::trusted_buy_calls().is_empty());
        assert_eq!(MockStakeTokens::created(), created);
        assert_eq!(
            Reporting::stake_token(market_id, payout_distribution_hash(market_id, &payout(1))),
            None
        );
        assert!(market(market_id).designated_reporter_dispute_bond.is_some());
    });
}

#[test]
fn dispute_designated_report_reuses_an_existing_stake_token() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        submit_designated_report(market_id);
        let (disputed, _) = stake_token(market_id, &payout(1));
        let created = MockStakeTokens::created();

        dispute_designated_report(market_id);

        assert_eq!(MockStakeTokens::created(), created);
        assert_eq!(MockStakeTokens::trusted_buy_calls(), vec![(disputed, CHARLIE, 14)]);
    });
}

#[test]
fn dispute_designated_report_without_purchase_fails_if_the_winner_has_no_stake() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        let (designated, _) = submit_designated_report(market_id);
        MockStakeTokens::set_total_supply(designated, 0);
        MockReputationToken::deposit(
            REPUTATION_TOKEN,
            CHARLIE,
            DesignatedReporterDisputeBond::get(),
        );

        assert_noop!(
            Reporting::dispute_designated_report(
                RuntimeOrigin::signed(CHARLIE),
                market_id,
                payout(1),
                0,
                false,
            ),
            Error::<Runtime>::InvalidStateTransition
        );
        assert!(MockDisputeBondFactory::not_called());
    });
}

#[test]
fn dispute_designated_report_fails_on_the_tentative_winner() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        submit_designated_report(market_id);
        MockReputationToken::deposit(
            REPUTATION_TOKEN,
            CHARLIE,
            DesignatedReporterDisputeBond::get(),
        );

        assert_noop!(
            Reporting::dispute_designated_report(
                RuntimeOrigin::signed(CHARLIE),
                market_id,
                payout(0),
                14,
                false,
            ),
            Error::<Runtime>::InvalidStateTransition
        );
    });
}

#[test_case(vec![NUM_TICKS, 0, 0, 0], false; "too few numerators")]
#[test_case(vec![NUM_TICKS, 0, 0, 0, 0, 0], false; "too many numerators")]
#[test_case(vec![NUM_TICKS, 1, 0, 0, 0], false; "sum exceeds ticks")]
#[test_case(vec![NUM_TICKS - 1, 0, 0, 0, 0], false; "sum below ticks")]
#[test_case(vec![NUM_TICKS, 0, 0, 0, 0], true; "uneven invalid payout")]
fn dispute_designated_report_fails_on_malformed_payout(
    payout_numerators: Vec<PayoutNumerator>,
    invalid: bool,
) {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        submit_designated_report(market_id);
        MockReputationToken::deposit(
            REPUTATION_TOKEN,
            CHARLIE,
            DesignatedReporterDisputeBond::get(),
        );

        assert_noop!(
            Reporting::dispute_designated_report(
                RuntimeOrigin::signed(CHARLIE),
                market_id,
                payout_numerators,
                14,
                invalid,
            ),
            Error::<Runtime>::MalformedPayoutNumerators
        );
    });
}

#[test]
fn dispute_designated_report_fails_before_the_designated_report() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        set_now(END_TIME);

        assert_noop!(
            Reporting::dispute_designated_report(
                RuntimeOrigin::signed(CHARLIE),
                market_id,
                payout(1),
                14,
                false,
            ),
            Error::<Runtime>::StateMismatch(ReportingState::DesignatedDispute)
        );
    });
}

#[test]
fn dispute_designated_report_fails_once_the_dispute_is_due() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        submit_designated_report(market_id);
        set_now(END_TIME + DesignatedReportingDisputeDuration::get());

        assert_noop!(
            Reporting::dispute_designated_report(
                RuntimeOrigin::signed(CHARLIE),
                market_id,
                payout(1),
                14,
                false,
            ),
            Error::<Runtime>::StateMismatch(ReportingState::DesignatedDispute)
        );
    });
}

#[test]
fn dispute_designated_report_fails_if_already_disputed() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        submit_designated_report(market_id);
        dispute_designated_report(market_id);
        MockReputationToken::deposit(
            REPUTATION_TOKEN,
            CHARLIE,
            DesignatedReporterDisputeBond::get(),
        );

        assert_noop!(
            Reporting::dispute_designated_report(
                RuntimeOrigin::signed(CHARLIE),
                market_id,
                payout(2),
                14,
                false,
            ),
            Error::<Runtime>::StateMismatch(ReportingState::DesignatedDispute)
        );
    });
}

#[test]
fn dispute_designated_report_fails_if_the_disputer_cannot_fund_the_bond() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        submit_designated_report(market_id);
        MockReputationToken::deposit(
            REPUTATION_TOKEN,
            CHARLIE,
            DesignatedReporterDisputeBond::get() - 1,
        );

        assert_noop!(
            Reporting::dispute_designated_report(
                RuntimeOrigin::signed(CHARLIE),
                market_id,
                payout(1),
                14,
                false,
            ),
            Error::<Runtime>::CollaboratorFailure
        );
    });
}

#[test]
fn dispute_designated_report_rolls_back_if_the_purchase_fails() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        submit_designated_report(market_id);
        let bond_amount = DesignatedReporterDisputeBond::get();
        MockReputationToken::deposit(REPUTATION_TOKEN, CHARLIE, bond_amount);
        stake_token(market_id, &payout(1));
        MockStakeTokens::set_return_value(Err(TokenError::BelowMinimum.into()));

        assert_noop!(
            Reporting::dispute_designated_report(
                RuntimeOrigin::signed(CHARLIE),
                market_id,
                payout(1),
                14,
                false,
            ),
            Error::<Runtime>::CollaboratorFailure
        );
        assert_eq!(reputation_of(CHARLIE), bond_amount);
        assert_eq!(market(market_id).total_stake, 0);
        assert_eq!(market(market_id).designated_reporter_dispute_bond, None);
    });
}
