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

/// Balance of an account.
pub type Balance = u128;

/// An index to a block.
pub type BlockNumber = u64;

/// A hash of some data used by the chain.
pub type Hash = sp_core::H256;

/// The market identifier type.
pub type MarketId = u128;

/// Time
pub type Moment = u64;

/// The index of an outcome of a market.
pub type OutcomeIndex = u16;

/// A single entry of a payout distribution, measured in ticks.
pub type PayoutNumerator = u128;

// Tests

pub type AccountIdTest = u128;
