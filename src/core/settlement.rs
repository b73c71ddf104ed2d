//! Settlement engine - reconciles the shared ledger between the two
//! household participants.
//!
//! The engine is a pure function over whatever expense records the store
//! returns: it filters out settled records, normalizes the loose typing the
//! store is known to produce, and folds the remainder into a
//! [`BalanceSummary`]. Records that cannot be normalized are skipped with a
//! structured [`SkipReason`] rather than aborting the computation; a ledger
//! we do not own gets best-effort reconciliation, not hard failures.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ExpenseRecord, User};

/// Policy governing how a shared expense's cost is apportioned between the
/// two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SplitPolicy {
    /// Each participant owes half.
    #[serde(rename = "50-50")]
    EvenSplit,
    /// The non-payer owes the full amount.
    #[serde(rename = "100-other")]
    PayerCoversOther,
}

impl SplitPolicy {
    /// Parses a loose split-type token.
    ///
    /// Tokens are trimmed and lowercased before matching, and the store's
    /// historical spellings are accepted alongside the canonical ones.
    /// Anything else is unrecognized, which downstream treats as "no
    /// outstanding obligation" rather than as dirty data.
    #[must_use]
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "50-50" | "50/50" => Some(Self::EvenSplit),
            "100-other" | "100% other" | "100_other" => Some(Self::PayerCoversOther),
            _ => None,
        }
    }

    /// Canonical wire token for this policy.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::EvenSplit => "50-50",
            Self::PayerCoversOther => "100-other",
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Why a raw record was excluded from settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The record carries no amount at all
    MissingAmount,
    /// The amount could not be coerced to a finite number
    UnparsableAmount,
    /// The record names no payer, directly or embedded
    MissingPayer,
    /// The payer identifier could not be coerced to an integer
    UnparsablePayer,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingAmount => "missing amount",
            Self::UnparsableAmount => "unparsable amount",
            Self::MissingPayer => "missing payer",
            Self::UnparsablePayer => "unparsable payer",
        };
        f.write_str(text)
    }
}

/// The cleaned, typed view of one raw expense record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedExpense {
    /// Resolved payer id
    pub payer: i64,
    /// Finite purchase amount
    pub amount: f64,
    /// Recognized split policy, if the token matched one
    pub split: Option<SplitPolicy>,
}

/// Normalizes one raw record for settlement.
///
/// Resolves the payer id (direct foreign key, else the embedded payer
/// object), coerces the amount to a finite number, and parses the split
/// token. Returns the structured reason when the record cannot be used, so
/// callers can log exactly what was dropped instead of coercing silently.
///
/// # Errors
/// A [`SkipReason`] when the payer or amount is missing or unparseable. An
/// unrecognized split token is not a skip; it normalizes to `split: None`.
pub fn normalize(record: &ExpenseRecord) -> Result<NormalizedExpense, SkipReason> {
    let payer = match (&record.user_id, &record.user) {
        (Some(raw), _) => raw.parse().ok_or(SkipReason::UnparsablePayer)?,
        (None, Some(user)) => user.id,
        (None, None) => return Err(SkipReason::MissingPayer),
    };

    let amount = match &record.amount {
        Some(raw) => raw.parse().ok_or(SkipReason::UnparsableAmount)?,
        None => return Err(SkipReason::MissingAmount),
    };

    Ok(NormalizedExpense {
        payer,
        amount,
        split: record.split_policy(),
    })
}

/// The two users designated as the ledger's participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Participants {
    /// The participant designated "user 1"
    pub user1: i64,
    /// The participant designated "user 2"
    pub user2: i64,
}

/// Which side of the ledger a user occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    /// The "user 1" side
    User1,
    /// The "user 2" side
    User2,
}

impl Participants {
    /// Designates the first two users of a stable ordering as the
    /// participants. Additional users are ignored; fewer than two yields
    /// `None`.
    #[must_use]
    pub fn leading(users: &[User]) -> Option<Self> {
        match users {
            [first, second, ..] => Some(Self {
                user1: first.id,
                user2: second.id,
            }),
            _ => None,
        }
    }

    /// Returns the seat a user occupies, if they are a participant.
    #[must_use]
    pub fn seat_of(&self, user_id: i64) -> Option<Seat> {
        if user_id == self.user1 {
            Some(Seat::User1)
        } else if user_id == self.user2 {
            Some(Seat::User2)
        } else {
            None
        }
    }
}

/// Outstanding balance between the two participants, derived from the
/// unsettled portion of the ledger. Recomputed from scratch on every read,
/// never cached or incrementally updated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BalanceSummary {
    /// Total user 1 owes user 2
    pub user1_owes: f64,
    /// Total user 2 owes user 1
    pub user2_owes: f64,
    /// `user2_owes - user1_owes`
    pub net_balance: f64,
    /// Gross unsettled outlay by user 1
    pub user1_paid: f64,
    /// Gross unsettled outlay by user 2
    pub user2_paid: f64,
}

/// Computes the outstanding balance between the two participants.
///
/// Settled records never contribute. Records that fail [`normalize`] are
/// skipped and logged, never fatal. A payer who is neither participant
/// contributes nothing to either side. Without a participant pair the zero
/// summary is returned; that is the defined empty-state result, not an
/// error.
///
/// Amounts accumulate in floating-point currency units with no rounding;
/// rounding to two decimals is a presentation concern, applied by callers
/// when formatting.
#[must_use]
pub fn compute_balance(
    expenses: &[ExpenseRecord],
    participants: Option<Participants>,
) -> BalanceSummary {
    let Some(participants) = participants else {
        return BalanceSummary::default();
    };

    let mut summary = BalanceSummary::default();
    for record in expenses.iter().filter(|record| !record.paid) {
        let normalized = match normalize(record) {
            Ok(normalized) => normalized,
            Err(reason) => {
                debug!(expense_id = record.id, %reason, "skipping malformed expense record");
                continue;
            }
        };

        // A third-party payer owes and is owed nothing here.
        let Some(seat) = participants.seat_of(normalized.payer) else {
            continue;
        };

        match seat {
            Seat::User1 => summary.user1_paid += normalized.amount,
            Seat::User2 => summary.user2_paid += normalized.amount,
        }

        let owed = match normalized.split {
            Some(SplitPolicy::EvenSplit) => normalized.amount / 2.0,
            Some(SplitPolicy::PayerCoversOther) => normalized.amount,
            // Unrecognized tokens imply no outstanding obligation.
            None => continue,
        };

        match seat {
            Seat::User1 => summary.user2_owes += owed,
            Seat::User2 => summary.user1_owes += owed,
        }
    }

    summary.net_balance = summary.user2_owes - summary.user1_owes;
    summary
}
