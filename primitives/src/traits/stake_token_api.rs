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

use sp_runtime::DispatchResult;

/// Shape of a stake token as consumed by the market it stakes on.
///
/// A stake token represents the value staked on one payout distribution of one market. It calls
/// back into the market whenever its supply changes.
pub trait StakeTokenApi {
    type AccountId;
    type Balance;
    type Hash;
    type MarketId;

    /// Returns the market `token` belongs to, or `None` if `token` is not a stake token.
    fn market(token: &Self::AccountId) -> Option<Self::MarketId>;

    /// Returns the payout distribution hash `token` stakes on.
    fn payout_distribution_hash(token: &Self::AccountId) -> Option<Self::Hash>;

    fn total_supply(token: &Self::AccountId) -> Self::Balance;

    /// Buys `amount` of `token` on behalf of `buyer`.
    fn trusted_buy(
        token: &Self::AccountId,
        buyer: &Self::AccountId,
        amount: Self::Balance,
    ) -> DispatchResult;
}
