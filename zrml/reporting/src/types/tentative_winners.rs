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

use sp_runtime::RuntimeDebug;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::traits::Zero;

/// The payout distributions backed by the most and the second most stake.
///
/// Only the two tracked seats ever move. A distribution which dropped out of the pair is not
/// reconsidered when a tracked distribution loses its stake; it has to announce its supply again.
#[derive(
    Clone, Copy, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo,
)]
pub struct TentativeWinners<H> {
    /// The tentative winning payout distribution hash.
    pub winning: Option<H>,
    /// The best guess for the runner-up.
    pub second_place: Option<H>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TentativeWinnersError {
    /// The update would leave the market without a winner backed by positive stake.
    NoPositiveWinner,
}

impl<H> TentativeWinners<H>
where
    H: Copy + PartialEq,
{
    /// Seats `hash` as tentative winner regardless of its stake. A different previous winner
    /// becomes second place.
    pub fn seat(&mut self, hash: H) {
        if self.winning == Some(hash) {
            return;
        }
        let previous = self.winning.replace(hash);
        if previous.is_some() || self.second_place == Some(hash) {
            self.second_place = previous;
        }
    }

    /// Applies a change of the stake backing `hash` to the two seats.
    ///
    /// `supply_of` returns the current stake of any other distribution. Ties never promote a
    /// challenger. The seats are left untouched if the update fails.
    pub fn on_supply_changed<B, F>(
        &mut self,
        hash: H,
        new_supply: B,
        supply_of: F,
    ) -> Result<(), TentativeWinnersError>
    where
        B: Copy + PartialOrd + Zero,
        F: Fn(&H) -> B,
    {
        let supply = |other: &H| if *other == hash { new_supply } else { supply_of(other) };
        let mut next = *self;

        if new_supply.is_zero() {
            if next.winning == Some(hash) {
                next.winning = next.second_place.take();
            } else if next.second_place == Some(hash) {
                next.second_place = None;
            }
        } else {
            match next.winning {
                None => next.winning = Some(hash),
                Some(winning) if winning == hash => {
                    // The winner shrank below the runner-up.
                    if let Some(second_place) = next.second_place {
                        if supply(&second_place) > new_supply {
                            next.winning = Some(second_place);
                            next.second_place = Some(hash);
                        }
                    }
                }
                Some(winning) if new_supply > supply(&winning) => {
                    next.winning = Some(hash);
                    next.second_place = Some(winning);
                }
                Some(_) => {
                    let takes_second_place = match next.second_place {
                        None => true,
                        Some(second_place) => {
                            second_place != hash && new_supply > supply(&second_place)
                        }
                    };
                    if takes_second_place {
                        next.second_place = Some(hash);
                    }
                }
            }
        }

        match next.winning {
            Some(winning) if !supply(&winning).is_zero() => {
                *self = next;
                Ok(())
            }
            _ => Err(TentativeWinnersError::NoPositiveWinner),
        }
    }
}
