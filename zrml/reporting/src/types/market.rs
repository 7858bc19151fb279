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

use crate::types::TentativeWinners;
use frame_support::{traits::ConstU32, BoundedVec};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use reporting_primitives::{
    constants::MAX_OUTCOMES,
    math::checked_ops_res::CheckedAddRes,
    types::{OutcomeIndex, PayoutNumerator},
};
use scale_info::TypeInfo;
use sp_runtime::{traits::CheckedAdd, DispatchError, RuntimeDebug};

pub type MaxOutcomes = ConstU32<{ MAX_OUTCOMES as u32 }>;

/// Reporting record of a market.
///
/// The configuration fields are fixed by `initialize_market`. The remaining fields only change
/// through the reporting and dispute calls of the pallet.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Market<AccountId, Balance, Hash, Moment> {
    pub creator: AccountId,
    /// Receives the no-show bond and the gas refund; may lower the settlement fee.
    pub owner: AccountId,
    pub reporting_window: AccountId,
    pub universe: AccountId,
    pub end_time: Moment,
    pub number_of_outcomes: OutcomeIndex,
    pub num_ticks: PayoutNumerator,
    /// `ONE_ETH` divided by the settlement fee; zero if the market charges no fee.
    pub fee_divisor: u128,
    pub denomination_token: AccountId,
    pub designated_reporter: AccountId,
    pub designated_report_received_time: Option<Moment>,
    pub tentative_winners: TentativeWinners<Hash>,
    /// Stake placed on all distributions plus all dispute bonds.
    pub total_stake: Balance,
    pub extra_dispute_bond_remaining_to_be_paid_out: Balance,
    pub designated_reporter_dispute_bond: Option<AccountId>,
    pub first_reporters_dispute_bond: Option<AccountId>,
    /// One claim instrument per outcome, ordered by outcome index.
    pub share_tokens: BoundedVec<AccountId, MaxOutcomes>,
    pub validity_bond: Balance,
    pub target_reporter_gas_costs: Balance,
}

impl<AccountId, Balance, Hash, Moment> Market<AccountId, Balance, Hash, Moment>
where
    Moment: CheckedAdd + Copy,
{
    /// The designated reporter must report before this point in time.
    pub fn designated_report_due_timestamp(
        &self,
        designated_reporting_duration: Moment,
    ) -> Result<Moment, DispatchError> {
        self.end_time.checked_add_res(&designated_reporting_duration)
    }

    /// The designated report may be disputed until this point in time. `None` until the
    /// designated report was received.
    pub fn designated_report_dispute_due_timestamp(
        &self,
        designated_reporting_dispute_duration: Moment,
    ) -> Result<Option<Moment>, DispatchError> {
        self.designated_report_received_time
            .map(|received| received.checked_add_res(&designated_reporting_dispute_duration))
            .transpose()
    }
}
