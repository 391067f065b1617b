//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Favorite, Money, Payment};

use super::payment::{format_favorite_list, format_payment_list};

/// Format a list of accounts as a table with a total row
pub fn format_account_list(accounts: &[Account], symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let phone_width = accounts
        .iter()
        .map(|a| a.phone.as_str().len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6}  {:<phone_width$}  {:>14}\n",
        "ID",
        "Phone",
        "Balance",
        phone_width = phone_width,
    ));
    output.push_str(&format!(
        "{:->6}  {:-<phone_width$}  {:->14}\n",
        "",
        "",
        "",
        phone_width = phone_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:>6}  {:<phone_width$}  {:>14}\n",
            account.id.to_string(),
            account.phone.as_str(),
            account.balance.format_with_symbol(symbol),
            phone_width = phone_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();
    output.push_str(&format!(
        "{:>6}  {:<phone_width$}  {:>14}\n",
        "TOTAL",
        "",
        total.format_with_symbol(symbol),
        phone_width = phone_width,
    ));

    output
}

/// Format one account together with its payments and favorites
pub fn format_account_details(
    account: &Account,
    payments: &[&Payment],
    favorites: &[&Favorite],
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account #{}\n", account.id));
    output.push_str(&format!("  Phone:    {}\n", account.phone));
    output.push_str(&format!(
        "  Balance:  {}\n",
        account.balance.format_with_symbol(symbol)
    ));

    output.push_str(&format!("\nPayments ({}):\n", payments.len()));
    output.push_str(&format_payment_list(payments, symbol));

    output.push_str(&format!("\nFavorites ({}):\n", favorites.len()));
    output.push_str(&format_favorite_list(favorites, symbol));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Payment};

    fn account(id: i64, phone: &str, balance: i64) -> Account {
        let mut account = Account::new(AccountId::new(id), phone.into());
        account.balance = Money::from_minor(balance);
        account
    }

    #[test]
    fn test_format_account_list() {
        let accounts = vec![
            account(1, "79000000001", 100000),
            account(2, "79000000002", 50050),
        ];

        let output = format_account_list(&accounts, "$");
        assert!(output.contains("79000000001"));
        assert!(output.contains("$1000.00"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$1500.50"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_account_list(&[], "$").contains("No accounts found"));
    }

    #[test]
    fn test_format_account_details() {
        let account = account(1, "79000000001", 8000);
        let payment = Payment::new(account.id, Money::from_minor(2000), "food".into());

        let output = format_account_details(&account, &[&payment], &[], "$");
        assert!(output.contains("Account #1"));
        assert!(output.contains("$80.00"));
        assert!(output.contains("Payments (1)"));
        assert!(output.contains("food"));
        assert!(output.contains("Favorites (0)"));
    }
}
