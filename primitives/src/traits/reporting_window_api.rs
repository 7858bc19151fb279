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

/// Reporting window, which groups the markets reported in the same period and tracks the stake
/// placed on them in aggregate.
pub trait ReportingWindowApi {
    type AccountId;
    type Balance;
    type MarketId;

    /// Asks the window to re-evaluate the phase of `market_id`.
    fn update_market_phase(window: &Self::AccountId, market_id: Self::MarketId) -> DispatchResult;

    /// Notifies the window that `market_id` received its designated report.
    fn note_designated_report(
        window: &Self::AccountId,
        market_id: Self::MarketId,
    ) -> DispatchResult;

    /// Adds `amount` to the stake tracked by the window.
    fn increase_total_stake(window: &Self::AccountId, amount: Self::Balance) -> DispatchResult;

    fn is_reporting_active(window: &Self::AccountId) -> bool;

    fn is_dispute_active(window: &Self::AccountId) -> bool;

    /// Removes `market_id` from the window after it was migrated elsewhere.
    fn remove_market(window: &Self::AccountId, market_id: Self::MarketId) -> DispatchResult;

    /// Adopts `market_id` from a sibling window of the same universe.
    fn migrate_market_in_from_sibling(
        window: &Self::AccountId,
        market_id: Self::MarketId,
    ) -> DispatchResult;

    /// Returns the reputation token used for bonds in this window.
    fn reputation_token(window: &Self::AccountId) -> Self::AccountId;

    /// Returns the universe the window belongs to.
    fn universe(window: &Self::AccountId) -> Self::AccountId;
}
