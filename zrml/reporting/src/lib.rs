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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod dispatchable_impls;
pub mod mock;
mod pallet_impls;
mod payout_hasher;
#[cfg(test)]
mod tests;
pub mod types;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        types::{ConfigurationError, Market},
        weights::WeightInfoZeitgeist,
    };
    use alloc::vec::Vec;
    use core::marker::PhantomData;
    use frame_support::{
        pallet_prelude::{
            IsType, OptionQuery, StorageDoubleMap, StorageMap, StorageValue, StorageVersion,
            ValueQuery,
        },
        traits::{Currency, Get, Time},
        transactional, Blake2_128Concat, PalletId, Parameter,
    };
    use frame_system::{ensure_signed, pallet_prelude::OriginFor};
    use parity_scale_codec::MaxEncodedLen;
    use reporting_primitives::{
        traits::{
            DisputeBondFactory, ReportingWindowApi, ReputationTokenApi, ShareTokenFactory,
            StakeTokenApi, StakeTokenFactory, UniverseApi,
        },
        types::{OutcomeIndex, PayoutNumerator, ReportingState},
    };
    use sp_runtime::{
        traits::{AtLeast32BitUnsigned, Member},
        DispatchResult, SaturatedConversion,
    };

    pub(crate) const LOG_TARGET: &str = "runtime::zrml-reporting";

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Native currency which escrows the validity bond and the target reporter gas costs of
        /// each market.
        type Currency: Currency<Self::AccountId>;

        /// Reputation a disputer has to bond to challenge the designated report.
        #[pallet::constant]
        type DesignatedReporterDisputeBond: Get<BalanceOf<Self>>;

        /// Time after the designated report during which it can be disputed.
        #[pallet::constant]
        type DesignatedReportingDisputeDuration: Get<MomentOf<Self>>;

        /// Time after the end of a market during which only its designated reporter can report.
        #[pallet::constant]
        type DesignatedReportingDuration: Get<MomentOf<Self>>;

        type DisputeBondFactory: DisputeBondFactory<
                AccountId = Self::AccountId,
                Balance = BalanceOf<Self>,
                Hash = Self::Hash,
                MarketId = Self::MarketId,
            >;

        /// Reputation a disputer has to bond to challenge the first reporters.
        #[pallet::constant]
        type FirstReportersDisputeBond: Get<BalanceOf<Self>>;

        type MarketId: AtLeast32BitUnsigned + Copy + Default + MaxEncodedLen + Member + Parameter;

        /// Identifier of this pallet, used to derive the market accounts.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type ReportingWindow: ReportingWindowApi<
                AccountId = Self::AccountId,
                Balance = BalanceOf<Self>,
                MarketId = Self::MarketId,
            >;

        type ReputationToken: ReputationTokenApi<
                AccountId = Self::AccountId,
                Balance = BalanceOf<Self>,
            >;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type ShareTokenFactory: ShareTokenFactory<
                AccountId = Self::AccountId,
                MarketId = Self::MarketId,
            >;

        type StakeTokenFactory: StakeTokenFactory<
                AccountId = Self::AccountId,
                MarketId = Self::MarketId,
            >;

        /// Accessor for the stake tokens created by `StakeTokenFactory`.
        type StakeTokens: StakeTokenApi<
                AccountId = Self::AccountId,
                Balance = BalanceOf<Self>,
                Hash = Self::Hash,
                MarketId = Self::MarketId,
            >;

        /// Clock which drives the time-gated reporting phases.
        type Timestamp: Time;

        type Universe: UniverseApi<
                AccountId = Self::AccountId,
                Balance = BalanceOf<Self>,
                MarketId = Self::MarketId,
            >;

        type WeightInfo: WeightInfoZeitgeist;
    }

    /// The current storage version.
    pub(crate) const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub type BalanceOf<T> = <<T as Config>::Currency as Currency<AccountIdOf<T>>>::Balance;
    pub type HashOf<T> = <T as frame_system::Config>::Hash;
    pub type MarketIdOf<T> = <T as Config>::MarketId;
    pub type MomentOf<T> = <<T as Config>::Timestamp as Time>::Moment;
    pub type MarketOf<T> = Market<AccountIdOf<T>, BalanceOf<T>, HashOf<T>, MomentOf<T>>;

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    /// The id of the next market.
    #[pallet::storage]
    pub type MarketCounter<T: Config> = StorageValue<_, MarketIdOf<T>, ValueQuery>;

    #[pallet::storage]
    pub type Markets<T: Config> =
        StorageMap<_, Blake2_128Concat, MarketIdOf<T>, MarketOf<T>, OptionQuery>;

    /// Stake registered for each payout distribution of a market. Never removed.
    #[pallet::storage]
    pub type PayoutDistributionHashStake<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        MarketIdOf<T>,
        Blake2_128Concat,
        HashOf<T>,
        BalanceOf<T>,
        ValueQuery,
    >;

    /// The stake token of each payout distribution of a market. Created once per distribution
    /// and never removed.
    #[pallet::storage]
    pub type PayoutDistributionHashStakeToken<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        MarketIdOf<T>,
        Blake2_128Concat,
        HashOf<T>,
        AccountIdOf<T>,
        OptionQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// A market was configured and its share tokens were created.
        MarketInitialized {
            market_id: MarketIdOf<T>,
            creator: AccountIdOf<T>,
            designated_reporter: AccountIdOf<T>,
            number_of_outcomes: OutcomeIndex,
            num_ticks: PayoutNumerator,
            fee_divisor: u128,
        },
        /// The stake token of a payout distribution was created.
        StakeTokenCreated {
            market_id: MarketIdOf<T>,
            payout_distribution_hash: HashOf<T>,
            stake_token: AccountIdOf<T>,
        },
        /// The designated reporter reported through the stake token of the distribution.
        DesignatedReportSubmitted {
            market_id: MarketIdOf<T>,
            payout_distribution_hash: HashOf<T>,
            received_time: MomentOf<T>,
        },
        /// The designated report was disputed in favor of `payout_distribution_hash`.
        DesignatedReportDisputed {
            market_id: MarketIdOf<T>,
            disputer: AccountIdOf<T>,
            dispute_bond: AccountIdOf<T>,
            bond_amount: BalanceOf<T>,
            payout_distribution_hash: HashOf<T>,
        },
        /// The first reporters were disputed in favor of `payout_distribution_hash`.
        FirstReportersDisputed {
            market_id: MarketIdOf<T>,
            disputer: AccountIdOf<T>,
            dispute_bond: AccountIdOf<T>,
            bond_amount: BalanceOf<T>,
            payout_distribution_hash: HashOf<T>,
        },
        /// The market moved to a different reporting window.
        MarketMigrated {
            market_id: MarketIdOf<T>,
            from: AccountIdOf<T>,
            to: AccountIdOf<T>,
        },
        /// A stake token registered additional stake.
        TotalStakeIncreased {
            market_id: MarketIdOf<T>,
            payout_distribution_hash: HashOf<T>,
            amount: BalanceOf<T>,
            total_stake: BalanceOf<T>,
        },
        /// The tentative winner or the best guess for second place changed.
        TentativeWinnersUpdated {
            market_id: MarketIdOf<T>,
            tentative_winning_payout_distribution_hash: Option<HashOf<T>>,
            best_guess_second_place_tentative_winner: Option<HashOf<T>>,
        },
        /// The market owner lowered the settlement fee.
        SettlementFeeDecreased { market_id: MarketIdOf<T>, fee_divisor: u128 },
        MarketOwnershipTransferred {
            market_id: MarketIdOf<T>,
            previous_owner: AccountIdOf<T>,
            new_owner: AccountIdOf<T>,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// A token, factory, reporting window or the native currency rejected a call.
        CollaboratorFailure,
        /// The arguments don't form a valid market configuration.
        InvalidConfiguration(ConfigurationError),
        /// The new settlement fee isn't lower than the current one.
        InvalidFeeAdjustment,
        /// The update would leave the tentative winner or the stake in an invalid state.
        InvalidStateTransition,
        /// The payout numerators don't distribute the market's ticks.
        MalformedPayoutNumerators,
        /// The market does not exist.
        MarketDoesNotExist,
        /// The market is not in the reporting state the call requires. Carries the required
        /// state.
        StateMismatch(ReportingState),
        /// The sender is not allowed to make this call.
        Unauthorized,
        /// The amount is zero.
        ZeroAmount,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Creates a market in `reporting_window` on behalf of the sender.
        ///
        /// The validity bond and the target reporter gas costs are moved from the sender to the
        /// market account. `value_sent` must exceed their sum. The reputation required by the
        /// universe's no-show bond must already be held by the market account.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)` where `n` is the number of outcomes.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize_market((*number_of_outcomes).into()))]
        #[transactional]
        pub fn initialize_market(
            origin: OriginFor<T>,
            reporting_window: AccountIdOf<T>,
            end_time: MomentOf<T>,
            number_of_outcomes: OutcomeIndex,
            num_ticks: PayoutNumerator,
            fee_per_eth_in_attoeth: u128,
            denomination_token: AccountIdOf<T>,
            designated_reporter: AccountIdOf<T>,
            value_sent: BalanceOf<T>,
        ) -> DispatchResult {
            let creator = ensure_signed(origin)?;

            Self::do_initialize_market(
                creator,
                reporting_window,
                end_time,
                number_of_outcomes,
                num_ticks,
                fee_per_eth_in_attoeth,
                denomination_token,
                designated_reporter,
                value_sent,
            )
        }

        /// Files the designated report. Must be called by the stake token of the reported
        /// distribution.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::designated_report())]
        #[transactional]
        pub fn designated_report(origin: OriginFor<T>, market_id: MarketIdOf<T>) -> DispatchResult {
            let stake_token = ensure_signed(origin)?;

            Self::do_designated_report(stake_token, market_id)
        }

        /// Disputes the designated report in favor of the distribution described by
        /// `payout_numerators` and `invalid`.
        ///
        /// The sender bonds `DesignatedReporterDisputeBond` and, if `amount` is not zero, buys
        /// `amount` of the disputing distribution's stake token.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)` where `n` is the number of outcomes.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::dispute_designated_report(
            payout_numerators.len().saturated_into()
        ))]
        #[transactional]
        pub fn dispute_designated_report(
            origin: OriginFor<T>,
            market_id: MarketIdOf<T>,
            payout_numerators: Vec<PayoutNumerator>,
            amount: BalanceOf<T>,
            invalid: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_dispute_designated_report(who, market_id, payout_numerators, amount, invalid)
        }

        /// Disputes the first reporters in favor of the distribution described by
        /// `payout_numerators` and `invalid`, and moves the market to the universe's next
        /// reporting window.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)` where `n` is the number of outcomes.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::dispute_first_reporters(
            payout_numerators.len().saturated_into()
        ))]
        #[transactional]
        pub fn dispute_first_reporters(
            origin: OriginFor<T>,
            market_id: MarketIdOf<T>,
            payout_numerators: Vec<PayoutNumerator>,
            amount: BalanceOf<T>,
            invalid: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_dispute_first_reporters(who, market_id, payout_numerators, amount, invalid)
        }

        /// Announces the current supply of the sender, the stake token of
        /// `payout_distribution_hash`, and moves the tentative winners accordingly.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::update_tentative_winning_payout_distribution_hash())]
        #[transactional]
        pub fn update_tentative_winning_payout_distribution_hash(
            origin: OriginFor<T>,
            market_id: MarketIdOf<T>,
            payout_distribution_hash: HashOf<T>,
        ) -> DispatchResult {
            let stake_token = ensure_signed(origin)?;

            Self::do_update_tentative_winning_payout_distribution_hash(
                stake_token,
                market_id,
                payout_distribution_hash,
            )
        }

        /// Registers `amount` of additional stake bought from the sender, a stake token of the
        /// market.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::increase_total_stake())]
        #[transactional]
        pub fn increase_total_stake(
            origin: OriginFor<T>,
            market_id: MarketIdOf<T>,
            amount: BalanceOf<T>,
        ) -> DispatchResult {
            let stake_token = ensure_signed(origin)?;

            Self::do_increase_total_stake(stake_token, market_id, amount)
        }

        /// Lowers the settlement fee of the market. Only callable by the market owner.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::decrease_market_creator_settlement_fee())]
        #[transactional]
        pub fn decrease_market_creator_settlement_fee(
            origin: OriginFor<T>,
            market_id: MarketIdOf<T>,
            new_fee_per_eth_in_attoeth: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_decrease_market_creator_settlement_fee(
                who,
                market_id,
                new_fee_per_eth_in_attoeth,
            )
        }

        /// Hands the market over to `new_owner`. Only callable by the market owner.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::transfer_market_ownership())]
        #[transactional]
        pub fn transfer_market_ownership(
            origin: OriginFor<T>,
            market_id: MarketIdOf<T>,
            new_owner: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_transfer_market_ownership(who, market_id, new_owner)
        }

        /// Creates the stake token of the distribution described by `payout_numerators` and
        /// `invalid` unless it already exists.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)` where `n` is the number of outcomes.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::create_stake_token(
            payout_numerators.len().saturated_into()
        ))]
        #[transactional]
        pub fn create_stake_token(
            origin: OriginFor<T>,
            market_id: MarketIdOf<T>,
            payout_numerators: Vec<PayoutNumerator>,
            invalid: bool,
        ) -> DispatchResult {
            ensure_signed(origin)?;

            Self::get_or_create_stake_token(market_id, &payout_numerators, invalid)?;

            Ok(())
        }
    }
}
