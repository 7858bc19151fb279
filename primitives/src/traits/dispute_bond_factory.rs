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

use sp_runtime::DispatchError;

/// Creates the bond instrument which holds the stake of a dispute.
pub trait DisputeBondFactory {
    type AccountId;
    type Balance;
    type Hash;
    type MarketId;

    /// Creates a bond held by `bond_holder` disputing `payout_distribution_hash`.
    fn create_dispute_bond(
        market_id: Self::MarketId,
        bond_holder: &Self::AccountId,
        amount: Self::Balance,
        payout_distribution_hash: Self::Hash,
    ) -> Result<Self::AccountId, DispatchError>;
}
