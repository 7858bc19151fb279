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
mod reporting_window_api;
mod reputation_token_api;
mod share_token_factory;
mod stake_token_api;
mod stake_token_factory;
mod universe_api;

pub use dispute_bond_factory::*;
pub use reporting_window_api::*;
pub use reputation_token_api::*;
pub use share_token_factory::*;
pub use stake_token_api::*;
pub use stake_token_factory::*;
pub use universe_api::*;
