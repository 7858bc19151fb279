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

//! Ledgers of the mocked instruments. Kept in runtime storage so that they are rolled back
//! together with the pallet under test.

pub use pallet::*;

#[frame_support::pallet]
pub mod pallet {
    use crate::mock::consts::FIRST_INSTRUMENT_ID;
    use core::marker::PhantomData;
    use frame_support::pallet_prelude::*;
    use reporting_primitives::types::{AccountIdTest, Balance, Hash, MarketId};

    #[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
    pub struct StakeTokenInfo {
        pub market_id: MarketId,
        pub payout_distribution_hash: Hash,
        pub total_supply: Balance,
    }

    #[pallet::config]
    pub trait Config: frame_system::Config {}

    #[pallet::pallet]
    pub struct Pallet<T>(PhantomData<T>);

    /// Reputation held per token and account.
    #[pallet::storage]
    pub type ReputationBalances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        AccountIdTest,
        Blake2_128Concat,
        AccountIdTest,
        Balance,
        ValueQuery,
    >;

    #[pallet::storage]
    pub type StakeTokens<T: Config> =
        StorageMap<_, Blake2_128Concat, AccountIdTest, StakeTokenInfo, OptionQuery>;

    #[pallet::storage]
    pub type InstrumentCounter<T: Config> = StorageValue<_, AccountIdTest, ValueQuery>;

    impl<T: Config> Pallet<T> {
        /// Hands out a fresh account for a mocked instrument.
        pub fn next_instrument_id() -> AccountIdTest {
            InstrumentCounter::<T>::mutate(|counter| {
                let id = FIRST_INSTRUMENT_ID + *counter;
                *counter += 1;
                id
            })
        }
    }
}
