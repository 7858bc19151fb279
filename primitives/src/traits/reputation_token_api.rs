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

/// Reputation token which funds the no-show bond and the dispute bonds of a market.
pub trait ReputationTokenApi {
    type AccountId;
    type Balance;

    /// Returns the amount of `token` held by `who`.
    fn balance_of(token: &Self::AccountId, who: &Self::AccountId) -> Self::Balance;

    /// Moves `amount` of `token` from `source` to `destination`.
    ///
    /// The caller is trusted, so `source` does not need to approve the transfer.
    fn trusted_transfer(
        token: &Self::AccountId,
        source: &Self::AccountId,
        destination: &Self::AccountId,
        amount: Self::Balance,
    ) -> DispatchResult;
}
