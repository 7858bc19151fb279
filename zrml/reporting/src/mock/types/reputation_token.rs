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

use crate::mock::{runtime::Runtime, types::mock_storage::ReputationBalances};
use reporting_primitives::{
    traits::ReputationTokenApi,
    types::{AccountIdTest, Balance},
};
use sp_runtime::{DispatchResult, TokenError};

pub struct MockReputationToken;

impl MockReputationToken {
    pub fn deposit(token: AccountIdTest, who: AccountIdTest, amount: Balance) {
        ReputationBalances::<Runtime>::mutate(token, who, |balance| *balance += amount);
    }
}

impl ReputationTokenApi for MockReputationToken {
    type AccountId = AccountIdTest;
    type Balance = Balance;

    fn balance_of(token: &AccountIdTest, who: &AccountIdTest) -> Balance {
        ReputationBalances::<Runtime>::get(token, who)
    }

    fn trusted_transfer(
        token: &AccountIdTest,
        source: &AccountIdTest,
        destination: &AccountIdTest,
        amount: Balance,
    ) -> DispatchResult {
        let remaining = ReputationBalances::<Runtime>::get(token, source)
            .checked_sub(amount)
            .ok_or(TokenError::FundsUnavailable)?;
        ReputationBalances::<Runtime>::insert(token, source, remaining);
        ReputationBalances::<Runtime>::mutate(token, destination, |balance| *balance += amount);
        Ok(())
    }
}
