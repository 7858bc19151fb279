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

use reporting_primitives::{
    constants::{BASE, CENT, MILLISECS_PER_DAY},
    types::{AccountIdTest, Balance, Moment, OutcomeIndex, PayoutNumerator},
};

pub const ZERO_ACCOUNT: AccountIdTest = 0;
pub const ALICE: AccountIdTest = 1;
pub const BOB: AccountIdTest = 2;
pub const CHARLIE: AccountIdTest = 3;
pub const DAVE: AccountIdTest = 4;

pub const REPORTING_WINDOW: AccountIdTest = 100;
pub const NEXT_REPORTING_WINDOW: AccountIdTest = 101;
pub const UNIVERSE: AccountIdTest = 110;
pub const REPUTATION_TOKEN: AccountIdTest = 120;
pub const DENOMINATION_TOKEN: AccountIdTest = 130;

/// Instruments created by the mock factories are numbered from here on.
pub const FIRST_INSTRUMENT_ID: AccountIdTest = 1_000;

pub const INITIAL_BALANCE: Balance = 100 * BASE;

pub const DESIGNATED_REPORT_NO_SHOW_BOND: Balance = 100 * BASE;
pub const VALIDITY_BOND: Balance = 12 * CENT;
pub const TARGET_REPORTER_GAS_COSTS: Balance = 15 * CENT;
pub const VALUE_SENT: Balance = 30 * CENT;

pub const END_TIME: Moment = 10 * MILLISECS_PER_DAY;
pub const NUMBER_OF_OUTCOMES: OutcomeIndex = 5;
pub const NUM_TICKS: PayoutNumerator = 10_000_000_000;
pub const FEE_PER_ETH_IN_ATTOETH: u128 = 16;
