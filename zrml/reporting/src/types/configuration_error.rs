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
use sp_runtime::RuntimeDebug;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

/// Reason why the arguments of `initialize_market` or an ownership transfer were rejected.
#[derive(Clone, Copy, Decode, Encode, Eq, PalletError, PartialEq, RuntimeDebug, TypeInfo)]
pub enum ConfigurationError {
    /// The market has fewer than two outcomes.
    TooFewOutcomes,
    /// The market has more than eight outcomes.
    TooManyOutcomes,
    /// The number of ticks is zero.
    ZeroNumTicks,
    /// The number of ticks is not a multiple of the number of outcomes.
    NumTicksNotDivisible,
    /// The settlement fee exceeds `MAX_FEE_PER_ETH_IN_ATTOETH`.
    FeeAboveMaximum,
    ZeroCreator,
    ZeroDesignatedReporter,
    ZeroOwner,
    /// The universe of the reporting window is forking.
    ForkingMarketActive,
    /// The market account holds less reputation than the designated report no-show bond.
    InsufficientNoShowBond,
    /// The universe's validity bond is below the existential deposit of the native currency.
    ValidityBondBelowExistentialDeposit,
    /// The value sent doesn't exceed the validity bond plus the target reporter gas costs.
    NonPositiveRefund,
}
