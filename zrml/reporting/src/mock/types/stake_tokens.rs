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

use crate::mock::{
    runtime::{MockStorage, Runtime},
    types::mock_storage::{StakeTokenInfo, StakeTokens},
};
use core::cell::RefCell;
use reporting_primitives::{
    traits::{StakeTokenApi, StakeTokenFactory},
    types::{AccountIdTest, Balance, Hash, MarketId, PayoutNumerator},
};
use sp_runtime::{
    traits::{BlakeTwo256, Hash as _},
    DispatchError, DispatchResult,
};

/// Stake tokens which track their supply but never call back into the market.
pub struct MockStakeTokens;

impl MockStakeTokens {
    pub fn set_total_supply(stake_token: AccountIdTest, total_supply: Balance) {
        StakeTokens::<Runtime>::mutate(stake_token, |info| {
            if let Some(info) = info {
                info.total_supply = total_supply;
            }
        });
    }

    /// Registers an instrument which claims to be a stake token of `market_id` without being
    /// created through the factory.
    pub fn forge(market_id: MarketId, payout_distribution_hash: Hash) -> AccountIdTest {
        let stake_token = MockStorage::next_instrument_id();
        StakeTokens::<Runtime>::insert(
            stake_token,
            StakeTokenInfo { market_id, payout_distribution_hash, total_supply: 0 },
        );
        stake_token
    }

    /// Result returned by `create_stake_token` and `trusted_buy` from now on.
    pub fn set_return_value(value: DispatchResult) {
        STAKE_TOKENS_RETURN_VALUE.with(|v| *v.borrow_mut() = value);
    }

    pub fn trusted_buy_calls() -> Vec<(AccountIdTest, AccountIdTest, Balance)> {
        TRUSTED_BUY_CALLS.with(|calls| calls.borrow().clone())
    }

    pub fn created() -> usize {
        CREATED_STAKE_TOKENS.with(|created| *created.borrow())
    }
}

impl StakeTokenFactory for MockStakeTokens {
    type AccountId = AccountIdTest;
    type MarketId = MarketId;

    fn create_stake_token(
        market_id: MarketId,
        payout_numerators: &[PayoutNumerator],
        invalid: bool,
    ) -> Result<AccountIdTest, DispatchError> {
        STAKE_TOKENS_RETURN_VALUE.with(|value| *value.borrow())?;

        let payout_distribution_hash = BlakeTwo256::hash_of(&(payout_numerators, invalid));
        let stake_token = Self::forge(market_id, payout_distribution_hash);
        CREATED_STAKE_TOKENS.with(|created| *created.borrow_mut() += 1);

        Ok(stake_token)
    }
}

impl StakeTokenApi for MockStakeTokens {
    type AccountId = AccountIdTest;
    type Balance = Balance;
    type Hash = Hash;
    type MarketId = MarketId;

    fn market(stake_token: &AccountIdTest) -> Option<MarketId> {
        StakeTokens::<Runtime>::get(stake_token).map(|info| info.market_id)
    }

    fn payout_distribution_hash(stake_token: &AccountIdTest) -> Option<Hash> {
        StakeTokens::<Runtime>::get(stake_token).map(|info| info.payout_distribution_hash)
    }

    fn total_supply(stake_token: &AccountIdTest) -> Balance {
        StakeTokens::<Runtime>::get(stake_token).map_or(0, |info| info.total_supply)
    }

    fn trusted_buy(
        stake_token: &AccountIdTest,
        buyer: &AccountIdTest,
        amount: Balance,
    ) -> DispatchResult {
        TRUSTED_BUY_CALLS.with(|calls| calls.borrow_mut().push((*stake_token, *buyer, amount)));
        STAKE_TOKENS_RETURN_VALUE.with(|value| *value.borrow())?;

        StakeTokens::<Runtime>::try_mutate(stake_token, |info| {
            let info = info.as_mut().ok_or(DispatchError::CannotLookup)?;
            info.total_supply += amount;
            Ok(())
        })
    }
}

thread_local! {
    pub static CREATED_STAKE_TOKENS: RefCell<usize> = const { RefCell::new(0) };
    pub static STAKE_TOKENS_RETURN_VALUE: RefCell<DispatchResult> = const { RefCell::new(Ok(())) };
    pub static TRUSTED_BUY_CALLS: RefCell<Vec<(AccountIdTest, AccountIdTest, Balance)>> =
        const { RefCell::new(vec![]) };
}
