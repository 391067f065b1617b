//! Payment and favorite display formatting

use crate::models::{Favorite, Payment, PaymentStatus};

fn status_icon(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Ok => "✓",
        PaymentStatus::Fail => "✗",
        PaymentStatus::InProgress => "…",
    }
}

/// Format a single payment as one line
pub fn format_payment_row(payment: &Payment, symbol: &str) -> String {
    format!(
        "{} {}  #{:<4} {:<16} {:>12}  {}",
        status_icon(payment.status),
        payment.id,
        payment.account_id.to_string(),
        truncate(payment.category.as_str(), 16),
        payment.amount.format_with_symbol(symbol),
        payment.status
    )
}

pub fn format_payment_list(payments: &[&Payment], symbol: &str) -> String {
    if payments.is_empty() {
        return "  No payments.\n".to_string();
    }

    let mut output = String::new();
    for payment in payments {
        output.push_str("  ");
        output.push_str(&format_payment_row(payment, symbol));
        output.push('\n');
    }
    output
}

/// Format a single favorite as one line
pub fn format_favorite_row(favorite: &Favorite, symbol: &str) -> String {
    format!(
        "{}  #{:<4} {:<20} {:<16} {:>12}",
        favorite.id,
        favorite.account_id.to_string(),
        truncate(&favorite.name, 20),
        truncate(favorite.category.as_str(), 16),
        favorite.amount.format_with_symbol(symbol)
    )
}

pub fn format_favorite_list(favorites: &[&Favorite], symbol: &str) -> String {
    if favorites.is_empty() {
        return "  No favorites.\n".to_string();
    }

    let mut output = String::new();
    for favorite in favorites {
        output.push_str("  ");
        output.push_str(&format_favorite_row(favorite, symbol));
        output.push('\n');
    }
    output
}

/// Truncate a string to fit a column, marking the cut with "..."
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
