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

use crate::mock::consts::{REPUTATION_TOKEN, UNIVERSE};
use core::cell::{Cell, RefCell};
use reporting_primitives::{
    traits::ReportingWindowApi,
    types::{AccountIdTest, Balance, MarketId},
};
use sp_runtime::DispatchResult;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReportingWindowCall {
    UpdateMarketPhase { window: AccountIdTest, market_id: MarketId },
    NoteDesignatedReport { window: AccountIdTest, market_id: MarketId },
    IncreaseTotalStake { window: AccountIdTest, amount: Balance },
    RemoveMarket { window: AccountIdTest, market_id: MarketId },
    MigrateMarketInFromSibling { window: AccountIdTest, market_id: MarketId },
}

pub struct MockReportingWindow;

impl MockReportingWindow {
    pub fn set_reporting_active(active: bool) {
        REPORTING_ACTIVE.with(|value| value.set(active));
    }

    pub fn set_dispute_active(active: bool) {
        DISPUTE_ACTIVE.with(|value| value.set(active));
    }

    /// Result returned by every notification received from now on.
    pub fn set_return_value(value: DispatchResult) {
        REPORTING_WINDOW_RETURN_VALUE.with(|v| *v.borrow_mut() = value);
    }

    pub fn calls() -> Vec<ReportingWindowCall> {
        REPORTING_WINDOW_CALLS.with(|calls| calls.borrow().clone())
    }

    pub fn clear_calls() {
        REPORTING_WINDOW_CALLS.with(|calls| calls.borrow_mut().clear());
    }

    fn record(call: ReportingWindowCall) -> DispatchResult {
        REPORTING_WINDOW_CALLS.with(|calls| calls.borrow_mut().push(call));

        REPORTING_WINDOW_RETURN_VALUE.with(|value| *value.borrow())
    }
}

impl ReportingWindowApi for MockReportingWindow {
    type AccountId = AccountIdTest;
    type Balance = Balance;
    type MarketId = MarketId;

    fn update_market_phase(window: &AccountIdTest, market_id: MarketId) -> DispatchResult {
        Self::record(ReportingWindowCall::UpdateMarketPhase { window: *window, market_id })
    }

    fn note_designated_report(window: &AccountIdTest, market_id: MarketId) -> DispatchResult {
        Self::record(ReportingWindowCall::NoteDesignatedReport { window: *window, market_id })
    }

    fn increase_total_stake(window: &AccountIdTest, amount: Balance) -> DispatchResult {
        Self::record(ReportingWindowCall::IncreaseTotalStake { window: *window, amount })
    }

    fn is_reporting_active(_window: &AccountIdTest) -> bool {
        REPORTING_ACTIVE.with(|value| value.get())
    }

    fn is_dispute_active(_window: &AccountIdTest) -> bool {
        DISPUTE_ACTIVE.with(|value| value.get())
    }

    fn remove_market(window: &AccountIdTest, market_id: MarketId) -> DispatchResult {
        Self::record(ReportingWindowCall::RemoveMarket { window: *window, market_id })
    }

    fn migrate_market_in_from_sibling(
        window: &AccountIdTest,
        market_id: MarketId,
    ) -> DispatchResult {
        Self::record(ReportingWindowCall::MigrateMarketInFromSibling { window: *window, market_id })
    }

    fn reputation_token(_window: &AccountIdTest) -> AccountIdTest {
        REPUTATION_TOKEN
    }

    fn universe(_window: &AccountIdTest) -> AccountIdTest {
        UNIVERSE
    }
}

thread_local! {
    pub static REPORTING_WINDOW_CALLS: RefCell<Vec<ReportingWindowCall>> =
        const { RefCell::new(vec![]) };
    pub static REPORTING_WINDOW_RETURN_VALUE: RefCell<DispatchResult> =
        const { RefCell::new(Ok(())) };
    pub static REPORTING_ACTIVE: Cell<bool> = const { Cell::new(false) };
    pub static DISPUTE_ACTIVE: Cell<bool> = const { Cell::new(false) };
}
