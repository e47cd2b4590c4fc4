use fxhash::FxHashSet;
use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub usize);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room {}", self.0)
    }
}

/// Exact decimal amount of currency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Divides the amount into `parts` equal shares.
    ///
    /// Shares carry the full decimal precision, so `parts * share` may differ
    /// from `self` in the last representable digit.
    pub fn split_evenly(self, parts: usize) -> Self {
        if parts == 0 {
            return Self::ZERO;
        }
        Self(self.0 / Decimal::from(parts as u64))
    }

    pub fn round_to_scale(self, scale: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Formats with exactly `scale` decimal places.
    pub fn to_fixed_string(self, scale: u32) -> String {
        let mut rounded = self.round_to_scale(scale).0;
        rounded.rescale(scale);
        rounded.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Square matrix of bids; row = participant, column = room.
///
/// Only constructed by [`crate::services::BidValidator`], so every row is
/// known to sum to the declared cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BidMatrix {
    size: usize,
    cells: Vec<Money>,
}

impl BidMatrix {
    pub(crate) fn from_validated_rows(rows: &[Vec<Money>]) -> Self {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            cells.extend_from_slice(row);
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn bid(&self, participant: ParticipantId, room: RoomId) -> Money {
        self.cells[participant.0 * self.size + room.0]
    }

    pub fn row(&self, participant: ParticipantId) -> &[Money] {
        let start = participant.0 * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn participants(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        (0..self.size).map(ParticipantId)
    }
}

/// Room held by each participant, indexed by participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    rooms: Vec<RoomId>,
}

impl Assignment {
    pub fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms }
    }

    pub fn from_indices(indices: &[usize]) -> Self {
        Self::new(indices.iter().copied().map(RoomId).collect())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn room_of(&self, participant: ParticipantId) -> RoomId {
        self.rooms[participant.0]
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, RoomId)> + '_ {
        self.rooms
            .iter()
            .enumerate()
            .map(|(idx, room)| (ParticipantId(idx), *room))
    }

    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.rooms.len()];
        for room in &self.rooms {
            match seen.get_mut(room.0) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    pub fn total_value(&self, bids: &BidMatrix) -> Money {
        self.iter()
            .map(|(participant, room)| bids.bid(participant, room))
            .sum()
    }
}

/// Entry `(i, j)` is how much participant `i` values `j`'s room minus what
/// `j` is currently charged for it, relative to `j`'s own bid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessmentMatrix {
    size: usize,
    cells: Vec<Money>,
}

impl AssessmentMatrix {
    pub(crate) fn from_cells(size: usize, cells: Vec<Money>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, assessor: ParticipantId, holder: ParticipantId) -> Money {
        self.cells[assessor.0 * self.size + holder.0]
    }

    pub fn row(&self, assessor: ParticipantId) -> &[Money] {
        let start = assessor.0 * self.size;
        &self.cells[start..start + self.size]
    }

    /// Adds each participant's discount to their whole column.
    pub fn with_column_discounts(mut self, discounts: &DiscountVector) -> Self {
        debug_assert_eq!(discounts.len(), self.size);
        for row in self.cells.chunks_exact_mut(self.size) {
            for (cell, discount) in row.iter_mut().zip(discounts.iter()) {
                *cell += discount;
            }
        }
        self
    }
}

pub type EnvyTargets = SmallVec<[ParticipantId; 4]>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvyRecord {
    pub max_envy_amount: Money,
    /// Ascending participant order; empty when `max_envy_amount` is zero.
    pub max_envy_targets: EnvyTargets,
}

impl EnvyRecord {
    pub fn is_envyless(&self) -> bool {
        self.max_envy_amount.is_zero()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvyProfile {
    records: Vec<EnvyRecord>,
}

impl EnvyProfile {
    pub fn new(records: Vec<EnvyRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, participant: ParticipantId) -> &EnvyRecord {
        &self.records[participant.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &EnvyRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, record)| (ParticipantId(idx), record))
    }

    pub fn max_envy(&self) -> Money {
        self.records
            .iter()
            .map(|record| record.max_envy_amount)
            .max()
            .unwrap_or(Money::ZERO)
    }

    pub fn is_envy_free(&self) -> bool {
        self.max_envy().is_zero()
    }

    pub fn envyless_participants(&self) -> FxHashSet<ParticipantId> {
        self.iter()
            .filter(|(_, record)| record.is_envyless())
            .map(|(participant, _)| participant)
            .collect()
    }
}

/// One amount per participant, in participant order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscountVector {
    amounts: Vec<Money>,
}

impl DiscountVector {
    pub fn zeros(len: usize) -> Self {
        Self {
            amounts: vec![Money::ZERO; len],
        }
    }

    pub fn from_amounts(amounts: Vec<Money>) -> Self {
        Self { amounts }
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn get(&self, participant: ParticipantId) -> Money {
        self.amounts[participant.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = Money> + '_ {
        self.amounts.iter().copied()
    }

    pub fn as_slice(&self) -> &[Money] {
        &self.amounts
    }

    pub fn total(&self) -> Money {
        self.amounts.iter().sum()
    }

    pub fn is_all_zero(&self) -> bool {
        self.amounts.iter().all(|amount| amount.is_zero())
    }

    pub fn accumulate(&mut self, round: &DiscountVector) {
        for (total, amount) in self.amounts.iter_mut().zip(round.iter()) {
            *total += amount;
        }
    }

    pub fn add_to_each(&mut self, amount: Money) {
        for total in &mut self.amounts {
            *total += amount;
        }
    }
}

/// Outcome of a completed rent split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RentSplit {
    pub assignment: Assignment,
    /// Payment per participant, in participant order.
    pub final_costs: Vec<Money>,
    pub utilitarian_total: Money,
    pub surplus: Money,
    pub rounds: usize,
}

impl RentSplit {
    pub fn cost_of(&self, participant: ParticipantId) -> Money {
        self.final_costs[participant.0]
    }

    pub fn total_cost(&self) -> Money {
        self.final_costs.iter().sum()
    }
}
