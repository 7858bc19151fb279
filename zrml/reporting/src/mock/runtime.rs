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

use crate as zrml_reporting;
use crate::mock::types::{
    mock_storage, MockDisputeBondFactory, MockReportingWindow, MockReputationToken,
    MockShareTokenFactory, MockStakeTokens, MockUniverse,
};
use frame_support::{construct_runtime, traits::Everything};
use frame_system::mocking::MockBlock;
use reporting_primitives::{
    constants::mock::{
        BlockHashCount, DesignatedReporterDisputeBond, DesignatedReportingDisputeDuration,
        DesignatedReportingDuration, ExistentialDeposit, FirstReportersDisputeBond, MaxLocks,
        MaxReserves, MinimumPeriod, ReportingPalletId,
    },
    types::{AccountIdTest, Balance, Hash, MarketId, Moment},
};
use sp_runtime::traits::{BlakeTwo256, ConstU32, IdentityLookup};

construct_runtime! {
    pub enum Runtime {
        Reporting: zrml_reporting,
        Balances: pallet_balances,
        MockStorage: mock_storage,
        System: frame_system,
        Timestamp: pallet_timestamp,
    }
}

impl zrml_reporting::Config for Runtime {
    type Currency = Balances;
    type DesignatedReporterDisputeBond = DesignatedReporterDisputeBond;
    type DesignatedReportingDisputeDuration = DesignatedReportingDisputeDuration;
    type DesignatedReportingDuration = DesignatedReportingDuration;
    type DisputeBondFactory = MockDisputeBondFactory;
    type FirstReportersDisputeBond = FirstReportersDisputeBond;
    type MarketId = MarketId;
    type PalletId = ReportingPalletId;
    type ReportingWindow = MockReportingWindow;
    type ReputationToken = MockReputationToken;
    type RuntimeEvent = RuntimeEvent;
    type ShareTokenFactory = MockShareTokenFactory;
    type StakeTokenFactory = MockStakeTokens;
    type StakeTokens = MockStakeTokens;
    type Timestamp = Timestamp;
    type Universe = MockUniverse;
    type WeightInfo = zrml_reporting::weights::WeightInfo<Runtime>;
}

impl mock_storage::Config for Runtime {}

impl frame_system::Config for Runtime {
    type AccountData = pallet_balances::AccountData<Balance>;
    type AccountId = AccountIdTest;
    type BaseCallFilter = Everything;
    type Block = MockBlock<Runtime>;
    type BlockHashCount = BlockHashCount;
    type BlockLength = ();
    type BlockWeights = ();
    type RuntimeCall = RuntimeCall;
    type RuntimeTask = RuntimeTask;
    type DbWeight = ();
    type RuntimeEvent = RuntimeEvent;
    type Hash = Hash;
    type Hashing = BlakeTwo256;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Nonce = u64;
    type MaxConsumers = ConstU32<16>;
    type MultiBlockMigrator = ();
    type OnKilledAccount = ();
    type OnNewAccount = ();
    type RuntimeOrigin = RuntimeOrigin;
    type PalletInfo = PalletInfo;
    type PreInherents = ();
    type PostInherents = ();
    type PostTransactions = ();
    type SingleBlockMigrations = ();
    type SS58Prefix = ();
    type SystemWeightInfo = ();
    type Version = ();
    type OnSetCode = ();
}

impl pallet_balances::Config for Runtime {
    type AccountStore = System;
    type Balance = Balance;
    type DustRemoval = ();
    type FreezeIdentifier = ();
    type RuntimeHoldReason = ();
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposit = ExistentialDeposit;
    type MaxFreezes = ();
    type MaxLocks = MaxLocks;
    type MaxReserves = MaxReserves;
    type ReserveIdentifier = [u8; 8];
    type RuntimeFreezeReason = ();
    type WeightInfo = ();
}

impl pallet_timestamp::Config for Runtime {
    type MinimumPeriod = MinimumPeriod;
    type Moment = Moment;
    type OnTimestampSet = ();
    type WeightInfo = ();
}
