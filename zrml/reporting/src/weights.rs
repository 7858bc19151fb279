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

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

pub trait WeightInfoZeitgeist {
    fn initialize_market(o: u32) -> Weight;
    fn designated_report() -> Weight;
    fn dispute_designated_report(o: u32) -> Weight;
    fn dispute_first_reporters(o: u32) -> Weight;
    fn update_tentative_winning_payout_distribution_hash() -> Weight;
    fn increase_total_stake() -> Weight;
    fn decrease_market_creator_settlement_fee() -> Weight;
    fn transfer_market_ownership() -> Weight;
    fn create_stake_token(o: u32) -> Weight;
}

/// Placeholder weights until the pallet is benchmarked. Collaborator calls are not accounted for.
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    // Storage: `Reporting::MarketCounter` (r:1 w:1)
    // Storage: `Reporting::Markets` (r:0 w:1)
    // Storage: `System::Account` (r:2 w:2)
    fn initialize_market(o: u32) -> Weight {
        Weight::from_parts(60_000_000, 4_000)
            .saturating_add(Weight::from_parts(5_000_000, 0).saturating_mul(o.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    // Storage: `Reporting::Markets` (r:1 w:1)
    // Storage: `Reporting::PayoutDistributionHashStakeToken` (r:1 w:0)
    // Storage: `System::Account` (r:2 w:2)
    fn designated_report() -> Weight {
        Weight::from_parts(55_000_000, 4_500)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    // Storage: `Reporting::Markets` (r:1 w:1)
    // Storage: `Reporting::PayoutDistributionHashStakeToken` (r:2 w:1)
    fn dispute_designated_report(o: u32) -> Weight {
        Weight::from_parts(50_000_000, 4_500)
            .saturating_add(Weight::from_parts(1_000_000, 0).saturating_mul(o.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    // Storage: `Reporting::Markets` (r:1 w:1)
    // Storage: `Reporting::PayoutDistributionHashStakeToken` (r:2 w:1)
    fn dispute_first_reporters(o: u32) -> Weight {
        Weight::from_parts(60_000_000, 4_500)
            .saturating_add(Weight::from_parts(1_000_000, 0).saturating_mul(o.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    // Storage: `Reporting::Markets` (r:1 w:1)
    // Storage: `Reporting::PayoutDistributionHashStakeToken` (r:3 w:0)
    fn update_tentative_winning_payout_distribution_hash() -> Weight {
        Weight::from_parts(30_000_000, 4_500)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Storage: `Reporting::Markets` (r:1 w:1)
    // Storage: `Reporting::PayoutDistributionHashStakeToken` (r:1 w:0)
    // Storage: `Reporting::PayoutDistributionHashStake` (r:1 w:1)
    fn increase_total_stake() -> Weight {
        Weight::from_parts(25_000_000, 4_500)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    // Storage: `Reporting::Markets` (r:1 w:1)
    fn decrease_market_creator_settlement_fee() -> Weight {
        Weight::from_parts(15_000_000, 4_000)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Storage: `Reporting::Markets` (r:1 w:1)
    fn transfer_market_ownership() -> Weight {
        Weight::from_parts(15_000_000, 4_000)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Storage: `Reporting::Markets` (r:1 w:0)
    // Storage: `Reporting::PayoutDistributionHashStakeToken` (r:1 w:1)
    fn create_stake_token(o: u32) -> Weight {
        Weight::from_parts(20_000_000, 4_000)
            .saturating_add(Weight::from_parts(500_000, 0).saturating_mul(o.into()))
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}
