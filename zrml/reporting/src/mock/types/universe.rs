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

use crate::mock::consts::{
    DESIGNATED_REPORT_NO_SHOW_BOND, NEXT_REPORTING_WINDOW, TARGET_REPORTER_GAS_COSTS,
    VALIDITY_BOND,
};
use core::cell::{Cell, RefCell};
use reporting_primitives::{
    traits::UniverseApi,
    types::{AccountIdTest, Balance, MarketId},
};
use sp_runtime::DispatchError;

pub struct MockUniverse;

impl MockUniverse {
    pub fn set_forking_market(market_id: Option<MarketId>) {
        FORKING_MARKET.with(|value| value.set(market_id));
    }

    pub fn set_validity_bond(amount: Balance) {
        VALIDITY_BOND_VALUE.with(|value| value.set(amount));
    }

    pub fn set_next_reporting_window(value: Result<AccountIdTest, DispatchError>) {
        NEXT_REPORTING_WINDOW_RETURN_VALUE.with(|v| *v.borrow_mut() = value);
    }
}

impl UniverseApi for MockUniverse {
    type AccountId = AccountIdTest;
    type Balance = Balance;
    type MarketId = MarketId;

    fn forking_market(_universe: &AccountIdTest) -> Option<MarketId> {
        FORKING_MARKET.with(|value| value.get())
    }

    fn designated_report_no_show_bond(_universe: &AccountIdTest) -> Balance {
        DESIGNATED_REPORT_NO_SHOW_BOND
    }

    fn target_reporter_gas_costs(_universe: &AccountIdTest) -> Balance {
        TARGET_REPORTER_GAS_COSTS
    }

    fn validity_bond(_universe: &AccountIdTest) -> Balance {
        VALIDITY_BOND_VALUE.with(|value| value.get())
    }

    fn next_reporting_window(_universe: &AccountIdTest) -> Result<AccountIdTest, DispatchError> {
        NEXT_REPORTING_WINDOW_RETURN_VALUE.with(|value| *value.borrow())
    }
}

thread_local! {
    pub static FORKING_MARKET: Cell<Option<MarketId>> = const { Cell::new(None) };
    pub static VALIDITY_BOND_VALUE: Cell<Balance> = const { Cell::new(VALIDITY_BOND) };
    pub static NEXT_REPORTING_WINDOW_RETURN_VALUE: RefCell<Result<AccountIdTest, DispatchError>> =
        const { RefCell::new(Ok(NEXT_REPORTING_WINDOW)) };
}
