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

/// Universe of reporting windows, the source of the bond sizes charged at market creation.
pub trait UniverseApi {
    type AccountId;
    type Balance;
    type MarketId;

    /// Returns the market the universe is currently forking on, if any.
    fn forking_market(universe: &Self::AccountId) -> Option<Self::MarketId>;

    /// Reputation a market must hold before it can be created. Returned to the market owner once
    /// the designated reporter shows up.
    fn designated_report_no_show_bond(universe: &Self::AccountId) -> Self::Balance;

    /// Native currency paid to the market owner to cover the designated report.
    fn target_reporter_gas_costs(universe: &Self::AccountId) -> Self::Balance;

    fn validity_bond(universe: &Self::AccountId) -> Self::Balance;

    /// Returns the reporting window following the current one, creating it if necessary.
    fn next_reporting_window(universe: &Self::AccountId) -> Result<Self::AccountId, DispatchError>;
}
