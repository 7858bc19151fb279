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
use sp_arithmetic::{
    traits::{CheckedAdd, CheckedDiv},
    ArithmeticError,
};

/// Checked addition which reports an overflow as a dispatch error.
pub trait CheckedAddRes
where
    Self: Sized,
{
    fn checked_add_res(&self, other: &Self) -> Result<Self, DispatchError>;
}

/// Checked division which reports a zero divisor as a dispatch error.
pub trait CheckedDivRes
where
    Self: Sized,
{
    fn checked_div_res(&self, other: &Self) -> Result<Self, DispatchError>;
}

impl<T> CheckedAddRes for T
where
    T: CheckedAdd,
{
    #[inline]
    fn checked_add_res(&self, other: &Self) -> Result<Self, DispatchError> {
        self.checked_add(other).ok_or(DispatchError::Arithmetic(ArithmeticError::Overflow))
    }
}

impl<T> CheckedDivRes for T
where
    T: CheckedDiv,
{
    #[inline]
    fn checked_div_res(&self, other: &Self) -> Result<Self, DispatchError> {
        self.checked_div(other).ok_or(DispatchError::Arithmetic(ArithmeticError::DivisionByZero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(u128::MAX, 1, ArithmeticError::Overflow; "add overflows")]
    fn checked_add_res_reports_overflow(lhs: u128, rhs: u128, expected: ArithmeticError) {
        assert_eq!(lhs.checked_add_res(&rhs), Err(DispatchError::Arithmetic(expected)));
    }

    #[test]
    fn checked_div_res_reports_division_by_zero() {
        assert_eq!(
            1u128.checked_div_res(&0),
            Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero))
        );
        assert_eq!(16u128.checked_div_res(&4), Ok(4));
    }
}
