//! Wallet service
//!
//! The in-memory ledger: accounts, the payments made from them and the
//! favorites bookmarked from those payments. Every collection keeps
//! insertion order for listing and export; hash indexes keyed by ID serve
//! the lookups.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{WalletError, WalletResult};
use crate::models::{
    Account, AccountId, Category, Favorite, FavoriteId, Money, Payment, PaymentId, Phone,
};
use crate::storage::{dump, legacy, DumpFile, DumpPaths};

/// Result of importing a dump directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub accounts_added: usize,
    pub payments_added: usize,
    pub favorites_added: usize,
    /// Records whose ID was already present
    pub duplicates_skipped: usize,
    /// Dump files that exist but could not be opened
    pub warnings: Vec<String>,
}

impl ImportSummary {
    pub fn total_added(&self) -> usize {
        self.accounts_added + self.payments_added + self.favorites_added
    }
}

/// The ledger itself
///
/// A mutation is applied only after its audit entries are written, so a
/// failed operation leaves the ledger untouched.
///
/// Not synchronized; callers sharing one across threads must serialize
/// access themselves.
#[derive(Debug)]
pub struct WalletService {
    /// Highest account ID issued or imported so far
    last_account_id: AccountId,
    accounts: Vec<Account>,
    payments: Vec<Payment>,
    favorites: Vec<Favorite>,
    account_index: HashMap<AccountId, usize>,
    payment_index: HashMap<PaymentId, usize>,
    favorite_index: HashMap<FavoriteId, usize>,
    phones: HashSet<Phone>,
    audit: Option<AuditLogger>,
}

impl Default for WalletService {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletService {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            last_account_id: AccountId::new(0),
            accounts: Vec::new(),
            payments: Vec::new(),
            favorites: Vec::new(),
            account_index: HashMap::new(),
            payment_index: HashMap::new(),
            favorite_index: HashMap::new(),
            phones: HashSet::new(),
            audit: None,
        }
    }

    /// Record every mutation in the audit log at `path`
    pub fn with_audit_log(mut self, path: PathBuf) -> Self {
        self.audit = Some(AuditLogger::new(path));
        self
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    // ----- accounts -----

    /// Register a new account with a zero balance
    ///
    /// IDs are handed out sequentially, starting at 1.
    pub fn register_account(&mut self, phone: impl Into<Phone>) -> WalletResult<Account> {
        let phone = phone.into();
        if self.phones.contains(&phone) {
            return Err(WalletError::PhoneAlreadyRegistered(phone));
        }

        let account = Account::new(self.last_account_id.next(), phone);
        self.audit(&[AuditEntry::create(
            EntityType::Account,
            account.id.to_string(),
            Some(account.phone.to_string()),
            &account,
        )])?;

        self.insert_account(account.clone());
        Ok(account)
    }

    /// Add funds to an account
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> WalletResult<()> {
        if !amount.is_positive() {
            return Err(WalletError::AmountMustBePositive(amount));
        }

        let index = self.account_position(account_id)?;
        let before = &self.accounts[index];
        let after = credited(before, amount)?;
        self.audit(&[account_update(before, &after)])?;

        self.accounts[index] = after;
        Ok(())
    }

    pub fn find_account_by_id(&self, account_id: AccountId) -> WalletResult<&Account> {
        let index = self.account_position(account_id)?;
        Ok(&self.accounts[index])
    }

    /// All accounts in registration/import order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    // ----- payments -----

    /// Debit an account and record an in-progress payment
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: impl Into<Category>,
    ) -> WalletResult<Payment> {
        if !amount.is_positive() {
            return Err(WalletError::AmountMustBePositive(amount));
        }

        let index = self.account_position(account_id)?;
        let before = &self.accounts[index];
        if !before.can_afford(amount) {
            return Err(WalletError::NotEnoughBalance {
                needed: amount,
                available: before.balance,
            });
        }

        // amount is positive and covered by the balance, so this cannot wrap
        let mut after = before.clone();
        after.balance -= amount;

        let payment = Payment::new(account_id, amount, category.into());
        let entries = [
            AuditEntry::create(EntityType::Payment, payment.id.to_string(), None, &payment),
            account_update(before, &after),
        ];
        self.audit(&entries)?;

        self.accounts[index] = after;
        self.insert_payment(payment.clone());
        Ok(payment)
    }

    pub fn find_payment_by_id(&self, payment_id: PaymentId) -> WalletResult<&Payment> {
        let index = self.payment_position(payment_id)?;
        Ok(&self.payments[index])
    }

    /// Mark a payment as failed and return its amount to the owning account
    ///
    /// Nothing is changed when the owning account is missing. Rejecting the
    /// same payment twice credits the account twice.
    pub fn reject(&mut self, payment_id: PaymentId) -> WalletResult<()> {
        let payment_index = self.payment_position(payment_id)?;
        let payment_before = &self.payments[payment_index];
        let account_index = self.account_position(payment_before.account_id)?;
        let account_before = &self.accounts[account_index];

        let account_after = credited(account_before, payment_before.amount)?;
        let mut payment_after = payment_before.clone();
        payment_after.fail();

        let entries = [
            AuditEntry::update(
                EntityType::Payment,
                payment_id.to_string(),
                None,
                payment_before,
                &payment_after,
            ),
            account_update(account_before, &account_after),
        ];
        self.audit(&entries)?;

        self.payments[payment_index] = payment_after;
        self.accounts[account_index] = account_after;
        Ok(())
    }

    /// Make a new payment with the same account, amount and category
    pub fn repeat(&mut self, payment_id: PaymentId) -> WalletResult<Payment> {
        let original = self.find_payment_by_id(payment_id)?;
        let (account_id, amount, category) =
            (original.account_id, original.amount, original.category.clone());

        self.pay(account_id, amount, category)
    }

    /// All payments in creation/import order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn payments_for_account(&self, account_id: AccountId) -> impl Iterator<Item = &Payment> {
        self.payments
            .iter()
            .filter(move |p| p.account_id == account_id)
    }

    // ----- favorites -----

    /// Bookmark a payment under a name
    pub fn favorite_payment(
        &mut self,
        payment_id: PaymentId,
        name: impl Into<String>,
    ) -> WalletResult<Favorite> {
        let payment = self.find_payment_by_id(payment_id)?;
        let favorite = Favorite::from_payment(payment, name);
        self.audit(&[AuditEntry::create(
            EntityType::Favorite,
            favorite.id.to_string(),
            Some(favorite.name.clone()),
            &favorite,
        )])?;

        self.insert_favorite(favorite.clone());
        Ok(favorite)
    }

    pub fn find_favorite_by_id(&self, favorite_id: FavoriteId) -> WalletResult<&Favorite> {
        self.favorite_index
            .get(&favorite_id)
            .map(|&index| &self.favorites[index])
            .ok_or_else(|| WalletError::FavoriteNotFound(favorite_id.to_string()))
    }

    /// Pay again from a favorite
    ///
    /// Goes through [`WalletService::pay`], so the amount is checked against
    /// and debited from the account balance.
    pub fn pay_from_favorite(&mut self, favorite_id: FavoriteId) -> WalletResult<Payment> {
        let favorite = self.find_favorite_by_id(favorite_id)?;
        let (account_id, amount, category) =
            (favorite.account_id, favorite.amount, favorite.category.clone());

        self.pay(account_id, amount, category)
    }

    /// All favorites in creation/import order
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn favorites_for_account(&self, account_id: AccountId) -> impl Iterator<Item = &Favorite> {
        self.favorites
            .iter()
            .filter(move |f| f.account_id == account_id)
    }

    // ----- persistence -----

    /// Write all accounts to a single `|`-terminated file
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P) -> WalletResult<()> {
        legacy::write_accounts(path, &self.accounts)
    }

    /// Append every account from a single-file export
    ///
    /// Records are appended without checking for existing IDs, so importing
    /// the same file twice duplicates its accounts. Returns the number of
    /// accounts appended. Nothing is appended if any record is malformed.
    pub fn import_from_file<P: AsRef<Path>>(&mut self, path: P) -> WalletResult<usize> {
        let accounts = legacy::read_accounts(path)?;
        let count = accounts.len();

        for account in accounts {
            self.insert_account(account);
        }

        Ok(count)
    }

    /// Dump accounts, payments and favorites into `dir`
    pub fn export<P: AsRef<Path>>(&self, dir: P) -> WalletResult<()> {
        dump::write_dump(dir.as_ref(), &self.accounts, &self.payments, &self.favorites)
    }

    /// Merge a dump directory into the ledger
    ///
    /// Records whose ID already exists are skipped. Missing files count as
    /// empty; files that exist but cannot be opened are reported in
    /// [`ImportSummary::warnings`]. All three files are parsed before
    /// anything is merged, so a malformed file leaves the ledger unchanged.
    pub fn import<P: AsRef<Path>>(&mut self, dir: P) -> WalletResult<ImportSummary> {
        let paths = DumpPaths::new(dir.as_ref());
        let mut summary = ImportSummary::default();

        let accounts: Vec<Account> = load_dump_file(&paths.accounts(), &mut summary.warnings)?;
        let payments: Vec<Payment> = load_dump_file(&paths.payments(), &mut summary.warnings)?;
        let favorites: Vec<Favorite> = load_dump_file(&paths.favorites(), &mut summary.warnings)?;

        for account in accounts {
            if self.account_index.contains_key(&account.id) {
                summary.duplicates_skipped += 1;
            } else {
                self.insert_account(account);
                summary.accounts_added += 1;
            }
        }

        for payment in payments {
            if self.payment_index.contains_key(&payment.id) {
                summary.duplicates_skipped += 1;
            } else {
                self.insert_payment(payment);
                summary.payments_added += 1;
            }
        }

        for favorite in favorites {
            if self.favorite_index.contains_key(&favorite.id) {
                summary.duplicates_skipped += 1;
            } else {
                self.insert_favorite(favorite);
                summary.favorites_added += 1;
            }
        }

        Ok(summary)
    }

    // ----- internals -----

    fn account_position(&self, account_id: AccountId) -> WalletResult<usize> {
        self.account_index
            .get(&account_id)
            .copied()
            .ok_or(WalletError::AccountNotFound(account_id))
    }

    fn payment_position(&self, payment_id: PaymentId) -> WalletResult<usize> {
        self.payment_index
            .get(&payment_id)
            .copied()
            .ok_or_else(|| WalletError::PaymentNotFound(payment_id.to_string()))
    }

    /// Append an account and keep the counter at the highest known ID
    ///
    /// With duplicate IDs the index keeps the first occurrence.
    fn insert_account(&mut self, account: Account) {
        if account.id > self.last_account_id {
            self.last_account_id = account.id;
        }
        self.account_index
            .entry(account.id)
            .or_insert(self.accounts.len());
        self.phones.insert(account.phone.clone());
        self.accounts.push(account);
    }

    fn insert_payment(&mut self, payment: Payment) {
        self.payment_index
            .entry(payment.id)
            .or_insert(self.payments.len());
        self.payments.push(payment);
    }

    fn insert_favorite(&mut self, favorite: Favorite) {
        self.favorite_index
            .entry(favorite.id)
            .or_insert(self.favorites.len());
        self.favorites.push(favorite);
    }

    fn audit(&self, entries: &[AuditEntry]) -> WalletResult<()> {
        match &self.audit {
            Some(logger) => logger.log_batch(entries),
            None => Ok(()),
        }
    }
}

/// The account with `amount` added to its balance
fn credited(account: &Account, amount: Money) -> WalletResult<Account> {
    let balance = account
        .balance
        .checked_add(amount)
        .ok_or(WalletError::BalanceOverflow {
            account: account.id,
            amount,
        })?;

    Ok(Account {
        balance,
        ..account.clone()
    })
}

fn account_update(before: &Account, after: &Account) -> AuditEntry {
    AuditEntry::update(
        EntityType::Account,
        after.id.to_string(),
        Some(after.phone.to_string()),
        before,
        after,
    )
}

fn load_dump_file<T: DeserializeOwned>(
    path: &Path,
    warnings: &mut Vec<String>,
) -> WalletResult<Vec<T>> {
    match dump::read_dump_file(path)? {
        DumpFile::Records(records) => Ok(records),
        DumpFile::Missing => Ok(Vec::new()),
        DumpFile::Unreadable(reason) => {
            warnings.push(reason);
            Ok(Vec::new())
        }
    }
}
