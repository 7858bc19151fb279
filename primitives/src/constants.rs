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

#![allow(
    // Constants parameters inside `parameter_types!` already check
    // arithmetic operations at compile time
    clippy::arithmetic_side_effects
)]

#[cfg(feature = "mock")]
pub mod mock;

use crate::types::{Balance, Moment};
use frame_support::PalletId;

// Definitions for time
pub const MILLISECS_PER_BLOCK: u32 = 12000;
pub const MILLISECS_PER_HOUR: Moment = 60 * 60 * 1000;
pub const MILLISECS_PER_DAY: Moment = MILLISECS_PER_HOUR * 24;

// Definitions for currency
pub const BASE: u128 = 10_000_000_000;
pub const CENT: Balance = BASE / 100; // 100_000_000

// Reporting
/// Fixed-point unit in which settlement fees are quoted. A fee of `ONE_ETH` takes the whole
/// amount.
pub const ONE_ETH: u128 = 1_000_000_000_000_000_000;
/// Max. settlement fee a market creator may configure (50%).
pub const MAX_FEE_PER_ETH_IN_ATTOETH: u128 = ONE_ETH / 2;
/// Min. outcomes of a reportable market.
pub const MIN_OUTCOMES: u16 = 2;
/// Max. outcomes of a reportable market.
pub const MAX_OUTCOMES: u16 = 8;
/// Pallet identifier, used to derive the market accounts which escrow the bonds.
pub const REPORTING_PALLET_ID: PalletId = PalletId(*b"zge/rprt");
