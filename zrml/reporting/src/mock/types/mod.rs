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

mod dispute_bond_factory;
pub mod mock_storage;
mod reporting_window;
mod reputation_token;
mod share_token_factory;
mod stake_tokens;
mod universe;

pub use dispute_bond_factory::*;
pub use reporting_window::*;
pub use reputation_token::*;
pub use share_token_factory::*;
pub use stake_tokens::*;
pub use universe::*;
