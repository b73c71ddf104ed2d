//! Viewer-perspective presentation helpers.
//!
//! The settlement math in [`crate::core::settlement`] is viewer-agnostic;
//! the helpers here derive what a given participant should see - the shown
//! amount, its sign, and the summary line. The viewer id always arrives as
//! an explicit parameter; it is read from the preference file by the caller
//! and never observed through shared state.

use crate::core::settlement::{BalanceSummary, Participants, Seat, SplitPolicy};
use crate::models::ExpenseRecord;

/// Nets smaller than one displayable cent read as settled.
const SETTLED_EPSILON: f64 = 0.01;

/// How an expense amount reads from the viewer's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmountTone {
    /// Already settled; presentation-neutral
    Settled,
    /// The viewer paid, so the other participant owes them
    OwedToViewer,
    /// The viewer owes the payer
    OwedByViewer,
    /// No viewer known, or the split implies no debt
    Neutral,
}

/// The amount shown for an expense: half under an even split, the full
/// amount otherwise. `None` when the amount is unparseable.
#[must_use]
pub fn display_amount(expense: &ExpenseRecord) -> Option<f64> {
    let amount = expense.amount_value()?;
    match expense.split_policy() {
        Some(SplitPolicy::EvenSplit) => Some(amount / 2.0),
        _ => Some(amount),
    }
}

/// Derives the tone of an expense amount for the given viewer.
///
/// Under either recognized policy the payer is the one owed money; settled
/// expenses and unrecognized policies carry no direction.
#[must_use]
pub fn amount_tone(expense: &ExpenseRecord, viewer_id: Option<i64>) -> AmountTone {
    if expense.paid {
        return AmountTone::Settled;
    }
    let Some(viewer_id) = viewer_id else {
        return AmountTone::Neutral;
    };
    if expense.split_policy().is_none() {
        return AmountTone::Neutral;
    }
    if expense.payer_id() == Some(viewer_id) {
        AmountTone::OwedToViewer
    } else {
        AmountTone::OwedByViewer
    }
}

/// Formats a monetary value in the household currency, two decimals.
#[must_use]
pub fn format_money(amount: f64) -> String {
    format!("€{amount:.2}")
}

/// Formats the shown amount banking-style: `+` when the viewer is owed,
/// `-` when they owe, unsigned when settled or directionless. `None` when
/// the amount is unparseable.
#[must_use]
pub fn format_signed_amount(expense: &ExpenseRecord, viewer_id: Option<i64>) -> Option<String> {
    let amount = display_amount(expense)?;
    let formatted = match amount_tone(expense, viewer_id) {
        AmountTone::OwedToViewer => format!("+{}", format_money(amount)),
        AmountTone::OwedByViewer => format!("-{}", format_money(amount)),
        AmountTone::Settled | AmountTone::Neutral => format_money(amount),
    };
    Some(formatted)
}

/// The balance summary line from the viewer's perspective.
#[must_use]
pub fn net_balance_text(
    summary: &BalanceSummary,
    participants: Option<Participants>,
    viewer_id: Option<i64>,
) -> String {
    let (Some(participants), Some(viewer_id)) = (participants, viewer_id) else {
        return "No balance data".to_string();
    };

    if summary.net_balance.abs() < SETTLED_EPSILON {
        return "All settled up!".to_string();
    }

    let net = format_money(summary.net_balance.abs());
    match participants.seat_of(viewer_id) {
        Some(Seat::User1) if summary.user1_owes > summary.user2_owes => format!("You owe {net}"),
        Some(Seat::User1) => format!("You are owed {net}"),
        Some(Seat::User2) if summary.user2_owes > summary.user1_owes => format!("You owe {net}"),
        Some(Seat::User2) => format!("You are owed {net}"),
        None => "Balance unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::test_expense;

    fn participants() -> Option<Participants> {
        Some(Participants { user1: 1, user2: 2 })
    }

    fn summary(user1_owes: f64, user2_owes: f64) -> BalanceSummary {
        BalanceSummary {
            user1_owes,
            user2_owes,
            net_balance: user2_owes - user1_owes,
            ..BalanceSummary::default()
        }
    }

    #[test]
    fn even_split_shows_half_the_amount() {
        let expense = test_expense(1, 1, 100.0, "50-50");
        assert_eq!(display_amount(&expense), Some(50.0));
    }

    #[test]
    fn other_policies_show_the_full_amount() {
        assert_eq!(
            display_amount(&test_expense(1, 1, 100.0, "100-other")),
            Some(100.0)
        );
        assert_eq!(
            display_amount(&test_expense(2, 1, 100.0, "joint-account")),
            Some(100.0)
        );
    }

    #[test]
    fn unparseable_amounts_have_no_display_value() {
        let mut expense = test_expense(1, 1, 0.0, "50-50");
        expense.amount = None;
        assert_eq!(display_amount(&expense), None);
        assert_eq!(format_signed_amount(&expense, Some(1)), None);
    }

    #[test]
    fn settled_expenses_are_presentation_neutral() {
        let mut expense = test_expense(1, 1, 100.0, "50-50");
        expense.paid = true;
        assert_eq!(amount_tone(&expense, Some(2)), AmountTone::Settled);
        assert_eq!(
            format_signed_amount(&expense, Some(2)).as_deref(),
            Some("€50.00")
        );
    }

    #[test]
    fn the_payer_is_owed_and_the_other_owes() {
        let expense = test_expense(1, 1, 100.0, "50-50");
        assert_eq!(amount_tone(&expense, Some(1)), AmountTone::OwedToViewer);
        assert_eq!(amount_tone(&expense, Some(2)), AmountTone::OwedByViewer);
        assert_eq!(
            format_signed_amount(&expense, Some(1)).as_deref(),
            Some("+€50.00")
        );
        assert_eq!(
            format_signed_amount(&expense, Some(2)).as_deref(),
            Some("-€50.00")
        );
    }

    #[test]
    fn full_amount_owed_under_payer_covers_other() {
        let expense = test_expense(1, 2, 30.0, "100-other");
        assert_eq!(
            format_signed_amount(&expense, Some(1)).as_deref(),
            Some("-€30.00")
        );
    }

    #[test]
    fn unknown_viewer_or_policy_is_directionless() {
        let expense = test_expense(1, 1, 100.0, "50-50");
        assert_eq!(amount_tone(&expense, None), AmountTone::Neutral);

        let oddball = test_expense(2, 1, 100.0, "joint-account");
        assert_eq!(amount_tone(&oddball, Some(2)), AmountTone::Neutral);
        assert_eq!(
            format_signed_amount(&oddball, Some(2)).as_deref(),
            Some("€100.00")
        );
    }

    #[test]
    fn money_is_formatted_to_two_decimals() {
        assert_eq!(format_money(0.0), "€0.00");
        assert_eq!(format_money(12.5), "€12.50");
        assert_eq!(format_money(123.456), "€123.46");
    }

    #[test]
    fn balance_text_requires_participants_and_viewer() {
        let summary = summary(10.0, 0.0);
        assert_eq!(net_balance_text(&summary, None, Some(1)), "No balance data");
        assert_eq!(
            net_balance_text(&summary, participants(), None),
            "No balance data"
        );
    }

    #[test]
    fn sub_cent_nets_read_as_settled() {
        assert_eq!(
            net_balance_text(&summary(10.0, 10.005), participants(), Some(1)),
            "All settled up!"
        );
    }

    #[test]
    fn balance_text_follows_the_viewer_seat() {
        let summary = summary(30.0, 50.0);
        assert_eq!(
            net_balance_text(&summary, participants(), Some(1)),
            "You are owed €20.00"
        );
        assert_eq!(
            net_balance_text(&summary, participants(), Some(2)),
            "You owe €20.00"
        );
    }

    #[test]
    fn non_participant_viewers_get_no_direction() {
        assert_eq!(
            net_balance_text(&summary(30.0, 50.0), participants(), Some(42)),
            "Balance unknown"
        );
    }
}
