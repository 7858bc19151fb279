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
use reporting_primitives::constants::mock::ExistentialDeposit;

#[test]
fn designated_report_works() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        set_now(END_TIME);
        let (designated, designated_hash) = stake_token(market_id, &payout(0));

        assert_ok!(Reporting::designated_report(RuntimeOrigin::signed(designated), market_id));

        let market = market(market_id);
        assert_eq!(market.designated_report_received_time, Some(END_TIME));
        assert_eq!(market.tentative_winners.winning, Some(designated_hash));
        assert_eq!(market.tentative_winners.second_place, None);
        assert_eq!(
            MockReportingWindow::calls(),
            vec![
                ReportingWindowCall::UpdateMarketPhase { window: REPORTING_WINDOW, market_id },
                ReportingWindowCall::NoteDesignatedReport { window: REPORTING_WINDOW, market_id },
            ]
        );
        System::assert_last_event(
            Event::<Runtime>::DesignatedReportSubmitted {
                market_id,
                payout_distribution_hash: designated_hash,
                received_time: END_TIME,
            }
            .into(),
        );
    });
}

#[test]
fn designated_report_refunds_no_show_bond_and_gas_costs_to_the_owner() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        let market_account = Reporting::market_account(market_id);

        submit_designated_report(market_id);

        assert_eq!(reputation_of(ALICE), DESIGNATED_REPORT_NO_SHOW_BOND);
        assert_eq!(reputation_of(market_account), 0);
        assert_eq!(Balances::free_balance(ALICE), INITIAL_BALANCE - VALIDITY_BOND);
        assert_eq!(Balances::free_balance(market_account), VALIDITY_BOND);
    });
}

#[test]
fn designated_report_keeps_the_market_account_alive_with_the_smallest_validity_bond() {
    ExtBuilder::default().build().execute_with(|| {
        MockUniverse::set_validity_bond(ExistentialDeposit::get());
        let market_id = initialize_market();
        let market_account = Reporting::market_account(market_id);

        submit_designated_report(market_id);

        assert_eq!(Balances::free_balance(market_account), ExistentialDeposit::get());
        assert_eq!(Balances::free_balance(ALICE), INITIAL_BALANCE - ExistentialDeposit::get());
    });
}

#[test]
fn designated_report_refunds_the_current_owner() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        assert_ok!(Reporting::transfer_market_ownership(
            RuntimeOrigin::signed(ALICE),
            market_id,
            DAVE
        ));

        submit_designated_report(market_id);

        assert_eq!(reputation_of(ALICE), 0);
        assert_eq!(reputation_of(DAVE), DESIGNATED_REPORT_NO_SHOW_BOND);
        assert_eq!(Balances::free_balance(DAVE), INITIAL_BALANCE + TARGET_REPORTER_GAS_COSTS);
    });
}

#[test]
fn designated_report_does_not_require_a_funded_stake_token() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        set_now(END_TIME);
        let (designated, _) = stake_token(market_id, &invalid_payout());

        assert_ok!(Reporting::designated_report(RuntimeOrigin::signed(designated), market_id));
    });
}

#[test]
fn designated_report_fails_before_the_market_ends() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        set_now(END_TIME - 1);
        let (designated, _) = stake_token(market_id, &payout(0));

        assert_noop!(
            Reporting::designated_report(RuntimeOrigin::signed(designated), market_id),
            Error::<Runtime>::StateMismatch(ReportingState::DesignatedReporting)
        );
    });
}

#[test]
fn designated_report_fails_once_it_is_due() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        set_now(designated_report_due());
        let (designated, _) = stake_token(market_id, &payout(0));

        assert_noop!(
            Reporting::designated_report(RuntimeOrigin::signed(designated), market_id),
            Error::<Runtime>::StateMismatch(ReportingState::DesignatedReporting)
        );
    });
}

#[test]
fn designated_report_fails_if_already_reported() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        let (designated, _) = submit_designated_report(market_id);

        assert_noop!(
            Reporting::designated_report(RuntimeOrigin::signed(designated), market_id),
            Error::<Runtime>::StateMismatch(ReportingState::DesignatedReporting)
        );
    });
}

#[test]
fn designated_report_fails_if_sender_is_not_a_stake_token() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        set_now(END_TIME);

        assert_noop!(
            Reporting::designated_report(RuntimeOrigin::signed(BOB), market_id),
            Error::<Runtime>::Unauthorized
        );
    });
}

#[test]
fn designated_report_fails_if_sender_is_not_the_registered_stake_token() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        set_now(END_TIME);
        let (_, designated_hash) = stake_token(market_id, &payout(0));
        let impostor = MockStakeTokens::forge(market_id, designated_hash);

        assert_noop!(
            Reporting::designated_report(RuntimeOrigin::signed(impostor), market_id),
            Error::<Runtime>::Unauthorized
        );
    });
}

#[test]
fn designated_report_fails_if_sender_stakes_on_another_market() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        let other_market_id = initialize_market();
        set_now(END_TIME);
        let (other_stake_token, _) = stake_token(other_market_id, &payout(0));

        assert_noop!(
            Reporting::designated_report(RuntimeOrigin::signed(other_stake_token), market_id),
            Error::<Runtime>::Unauthorized
        );
    });
}

#[test]
fn designated_report_fails_on_unknown_market() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            Reporting::designated_report(RuntimeOrigin::signed(BOB), 0),
            Error::<Runtime>::MarketDoesNotExist
        );
    });
}

#[test]
fn designated_report_rolls_back_if_the_reporting_window_fails() {
    ExtBuilder::default().build().execute_with(|| {
        let market_id = initialize_market();
        set_now(END_TIME);
        let (designated, _) = stake_token(market_id, &payout(0));
        MockReportingWindow::set_return_value(Err(DispatchError::Other("window closed")));

        assert_noop!(
            Reporting::designated_report(RuntimeOrigin::signed(designated), market_id),
            Error::<Runtime>::CollaboratorFailure
        );
        assert_eq!(market(market_id).designated_report_received_time, None);
        assert_eq!(reputation_of(ALICE), 0);
    });
}
