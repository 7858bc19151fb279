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

use frame_support::PalletError;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Reporting phase of a market.
///
/// The phase is never stored. It is projected from the market's record, the current time and the
/// flags of the reporting window and universe the market belongs to, so identical inputs always
/// yield the same phase.
#[derive(
    Clone, Copy, Debug, Decode, Encode, Eq, MaxEncodedLen, PalletError, PartialEq, TypeInfo,
)]
pub enum ReportingState {
    /// The market's end time has not passed yet.
    PreReporting,
    /// Only the designated reporter may report.
    DesignatedReporting,
    /// The designated report may be disputed.
    DesignatedDispute,
    /// The designated reporter didn't show up or was disputed, and the reporting window is open.
    FirstReporting,
    /// The first reporters' outcome may be disputed.
    FirstDispute,
    /// The market was migrated after a first reporters dispute and is being reported again.
    LastReporting,
    /// The last round of reports may be disputed.
    LastDispute,
    /// Nobody reported during the reporting window.
    AwaitingNoReportMigration,
    /// The universe is forking on a different market.
    AwaitingForkMigration,
    /// All dispute periods have passed.
    AwaitingFinalization,
}
