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

#![cfg(feature = "mock")]

pub use super::*;
use crate::types::{Balance, Moment};
use frame_support::{parameter_types, PalletId};

// Reporting
parameter_types! {
    pub const DesignatedReporterDisputeBond: Balance = 11 * BASE;
    pub const DesignatedReportingDisputeDuration: Moment = 3 * MILLISECS_PER_DAY;
    pub const DesignatedReportingDuration: Moment = 3 * MILLISECS_PER_DAY;
    pub const FirstReportersDisputeBond: Balance = 22 * BASE;
    pub const ReportingPalletId: PalletId = REPORTING_PALLET_ID;
}

// Shared within tests
// Balance
parameter_types! {
    pub const ExistentialDeposit: u128 = CENT;
    pub const MaxLocks: u32 = 50;
    pub const MaxReserves: u32 = 50;
}

// System
parameter_types! {
    pub const BlockHashCount: u64 = 250;
}

// Time
parameter_types! {
    pub const MinimumPeriod: u64 = MILLISECS_PER_BLOCK as u64 / 2;
}
