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

use reporting_primitives::types::{OutcomeIndex, PayoutNumerator};
use sp_runtime::traits::Hash;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MalformedPayout {
    /// There isn't exactly one numerator per outcome.
    WrongLength,
    /// A valid payout doesn't distribute exactly the market's ticks.
    WrongSum,
    /// An invalid payout doesn't split the ticks evenly among all outcomes.
    UnevenInvalidPayout,
}

/// Derives the key under which reports, disputes and stake tokens of a payout distribution are
/// filed.
pub(crate) fn derive_payout_distribution_hash<H>(
    number_of_outcomes: OutcomeIndex,
    num_ticks: PayoutNumerator,
    payout_numerators: &[PayoutNumerator],
    invalid: bool,
) -> Result<H::Output, MalformedPayout>
where
    H: Hash,
{
    if payout_numerators.len() != usize::from(number_of_outcomes) {
        return Err(MalformedPayout::WrongLength);
    }

    if invalid {
        let even_share = num_ticks
            .checked_div(PayoutNumerator::from(number_of_outcomes))
            .ok_or(MalformedPayout::WrongLength)?;
        if payout_numerators.iter().any(|numerator| *numerator != even_share) {
            return Err(MalformedPayout::UnevenInvalidPayout);
        }
    } else {
        let sum = payout_numerators
            .iter()
            .try_fold(0 as PayoutNumerator, |acc, numerator| acc.checked_add(*numerator))
            .ok_or(MalformedPayout::WrongSum)?;
        if sum != num_ticks {
            return Err(MalformedPayout::WrongSum);
        }
    }

    Ok(H::hash_of(&(payout_numerators, invalid)))
}
