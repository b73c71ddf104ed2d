//! The balance panel: who owes whom, and by how much.

use crate::config::Preferences;
use crate::core::display::{format_money, net_balance_text};
use crate::core::settlement::{Participants, compute_balance};
use crate::errors::Result;
use crate::models::User;
use crate::store::{self, StoreClient};

/// Fetches the ledger and prints the settlement summary.
pub async fn run(store: &StoreClient, preferences: Preferences) -> Result<()> {
    let users = store::users::list_users(store).await?;
    let expenses = store::expenses::list_expenses(store).await?;

    let participants = Participants::leading(&users);
    let summary = compute_balance(&expenses, participants);

    let Some(participants) = participants else {
        println!("Add two users to start tracking a balance.");
        return Ok(());
    };

    let user1 = name_of(&users, participants.user1);
    let user2 = name_of(&users, participants.user2);

    println!("{user1} paid {}, {user2} paid {}", format_money(summary.user1_paid), format_money(summary.user2_paid));
    println!("{user1} owes {user2}: {}", format_money(summary.user1_owes));
    println!("{user2} owes {user1}: {}", format_money(summary.user2_owes));
    println!("Net balance: {}", format_money(summary.net_balance));

    // The stored preference is only a default; the first user stands in
    // when none is set, matching the original client.
    let viewer_id = preferences
        .primary_user_id
        .or_else(|| users.first().map(|user| user.id));
    println!("{}", net_balance_text(&summary, Some(participants), viewer_id));

    Ok(())
}

fn name_of(users: &[User], id: i64) -> &str {
    users
        .iter()
        .find(|user| user.id == id)
        .map_or("unknown", |user| user.name.as_str())
}
