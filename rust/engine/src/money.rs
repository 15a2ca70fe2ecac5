//! Exact currency amounts.
//!
//! Amounts are stored as a signed count of cents so that the 3:2 blackjack
//! payout, surrender refunds and insurance stakes never drift the bankroll.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

const CENTS_PER_UNIT: i64 = 100;

#[derive(
    Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Saturates at the largest representable amount.
    pub fn from_whole(units: u64) -> Self {
        Self::checked_from_whole(units).unwrap_or(Money(i64::MAX))
    }

    pub fn checked_from_whole(units: u64) -> Option<Self> {
        i64::try_from(units)
            .ok()
            .and_then(|u| u.checked_mul(CENTS_PER_UNIT))
            .map(Money)
    }

    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn times(self, n: i64) -> Self {
        Money(self.0 * n)
    }

    /// Half of the amount, truncated to the cent. Exact for any amount that
    /// has an even cent count, which covers every whole-unit bet.
    pub fn half(self) -> Self {
        Money(self.0 / 2)
    }

    /// One and a half times the amount (the blackjack win on top of the stake).
    pub fn three_halves(self) -> Self {
        Money(self.0 * 3 / 2)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = (abs / CENTS_PER_UNIT as u64).to_string();
        let cents = abs % CENTS_PER_UNIT as u64;

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, ch) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "{}${}.{:02}", sign, grouped, cents)
    }
}
