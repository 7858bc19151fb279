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

use crate::mock::runtime::MockStorage;
use core::cell::RefCell;
use reporting_primitives::{
    traits::ShareTokenFactory,
    types::{AccountIdTest, MarketId, OutcomeIndex},
};
use sp_runtime::{DispatchError, DispatchResult};

pub struct MockShareTokenFactory;

impl MockShareTokenFactory {
    pub fn set_return_value(value: DispatchResult) {
        SHARE_TOKEN_RETURN_VALUE.with(|v| *v.borrow_mut() = value);
    }

    /// The `(market_id, outcome)` pairs in the order they were requested.
    pub fn calls() -> Vec<(MarketId, OutcomeIndex)> {
        SHARE_TOKEN_CALL_DATA.with(|values| values.borrow().clone())
    }
}

impl ShareTokenFactory for MockShareTokenFactory {
    type AccountId = AccountIdTest;
    type MarketId = MarketId;

    fn create_share_token(
        market_id: MarketId,
        outcome: OutcomeIndex,
    ) -> Result<AccountIdTest, DispatchError> {
        SHARE_TOKEN_CALL_DATA.with(|values| values.borrow_mut().push((market_id, outcome)));
        SHARE_TOKEN_RETURN_VALUE.with(|value| *value.borrow())?;

        Ok(MockStorage::next_instrument_id())
    }
}

thread_local! {
    pub static SHARE_TOKEN_CALL_DATA: RefCell<Vec<(MarketId, OutcomeIndex)>> =
        const { RefCell::new(vec![]) };
    pub static SHARE_TOKEN_RETURN_VALUE: RefCell<DispatchResult> = const { RefCell::new(Ok(())) };
}
