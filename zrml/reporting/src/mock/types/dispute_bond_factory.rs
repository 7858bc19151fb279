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
    traits::DisputeBondFactory,
    types::{AccountIdTest, Balance, Hash, MarketId},
};
use sp_runtime::{DispatchError, DispatchResult};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisputeBondCallData {
    pub market_id: MarketId,
    pub bond_holder: AccountIdTest,
    pub amount: Balance,
    pub payout_distribution_hash: Hash,
}

pub struct MockDisputeBondFactory;

impl MockDisputeBondFactory {
    pub fn set_return_value(value: DispatchResult) {
        DISPUTE_BOND_RETURN_VALUE.with(|v| *v.borrow_mut() = value);
    }

    pub fn not_called() -> bool {
        DISPUTE_BOND_CALL_DATA.with(|values| values.borrow().is_empty())
    }

    pub fn called_once_with(
        market_id: MarketId,
        bond_holder: AccountIdTest,
        amount: Balance,
        payout_distribution_hash: Hash,
    ) -> bool {
        DISPUTE_BOND_CALL_DATA.with(|values| {
            values.borrow().as_slice()
                == [DisputeBondCallData { market_id, bond_holder, amount, payout_distribution_hash }]
        })
    }
}

impl DisputeBondFactory for MockDisputeBondFactory {
    type AccountId = AccountIdTest;
    type Balance = Balance;
    type Hash = Hash;
    type MarketId = MarketId;

    fn create_dispute_bond(
        market_id: MarketId,
        bond_holder: &AccountIdTest,
        amount: Balance,
        payout_distribution_hash: Hash,
    ) -> Result<AccountIdTest, DispatchError> {
        DISPUTE_BOND_CALL_DATA.with(|values| {
            values.borrow_mut().push(DisputeBondCallData {
                market_id,
                bond_holder: *bond_holder,
                amount,
                payout_distribution_hash,
            })
        });
        DISPUTE_BOND_RETURN_VALUE.with(|value| *value.borrow())?;

        Ok(MockStorage::next_instrument_id())
    }
}

thread_local! {
    pub static DISPUTE_BOND_CALL_DATA: RefCell<Vec<DisputeBondCallData>> =
        const { RefCell::new(vec![]) };
    pub static DISPUTE_BOND_RETURN_VALUE: RefCell<DispatchResult> = const { RefCell::new(Ok(())) };
}
