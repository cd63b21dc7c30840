//! Rows shown by the list screens.
//!
//! Users and account history come from the API. Bets and the ledger are
//! still static collections until their endpoints exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::listing::Searchable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub money: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_bets: u32,
    /// Older accounts were created before the backend stamped this.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Searchable for UserRecord {
    type Category = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str(), self.phone.as_str(), self.id.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Credit,
    Debit,
    Other,
}

impl TransactionKind {
    pub fn classify(kind: &str) -> Self {
        let kind = kind.to_lowercase();
        if kind.contains("credit") || kind.contains("deposit") {
            TransactionKind::Credit
        } else if kind.contains("debit") || kind.contains("withdrawal") {
            TransactionKind::Debit
        } else {
            TransactionKind::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHistoryEntry {
    pub user_id: String,
    pub full_name: String,
    pub phone: String,
    pub transaction: Transaction,
}

impl AccountHistoryEntry {
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::classify(&self.transaction.kind)
    }
}

impl Searchable for AccountHistoryEntry {
    type Category = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.full_name.as_str(),
            self.user_id.as_str(),
            self.phone.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetStatus {
    Current,
    Won,
    Lost,
    Refunded,
}

impl BetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BetStatus::Current => "Current",
            BetStatus::Won => "Won",
            BetStatus::Lost => "Lost",
            BetStatus::Refunded => "Refunded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    pub id: String,
    pub sport: String,
    pub event: String,
    pub option: String,
    pub amount: f64,
    pub status: BetStatus,
}

impl Searchable for BetRecord {
    type Category = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Profit,
    Loss,
}

/// Tabs on the ledger screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedgerTab {
    #[default]
    All,
    Profit,
    Loss,
}

impl LedgerTab {
    pub const ALL: [LedgerTab; 3] = [LedgerTab::All, LedgerTab::Profit, LedgerTab::Loss];

    pub fn label(&self) -> &'static str {
        match self {
            LedgerTab::All => "All IDs",
            LedgerTab::Profit => "Profit",
            LedgerTab::Loss => "Loss",
        }
    }
}

impl std::str::FromStr for LedgerTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(LedgerTab::All),
            "profit" => Ok(LedgerTab::Profit),
            "loss" => Ok(LedgerTab::Loss),
            other => Err(format!("unknown tab '{}', expected all, profit or loss", other)),
        }
    }
}

/// One row of the per-account money summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub id: String,
    pub deposit: f64,
    pub bet: f64,
    pub withdraw: f64,
    pub holding: f64,
    pub outcome: Outcome,
}

impl Searchable for LedgerRow {
    type Category = LedgerTab;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str()]
    }

    fn in_category(&self, tab: LedgerTab) -> bool {
        match tab {
            LedgerTab::All => true,
            LedgerTab::Profit => self.outcome == Outcome::Profit,
            LedgerTab::Loss => self.outcome == Outcome::Loss,
        }
    }
}

fn bet(id: &str, option: &str, amount: f64, status: BetStatus) -> BetRecord {
    BetRecord {
        id: id.to_string(),
        sport: "Cricket".to_string(),
        event: "IPL 2025".to_string(),
        option: option.to_string(),
        amount,
        status,
    }
}

pub fn sample_bets() -> Vec<BetRecord> {
    vec![
        bet("Abc102", "Mumbai Indians win", 1000.0, BetStatus::Current),
        bet("Def456", "Chennai Super Kings win", 500.0, BetStatus::Won),
        bet("Ghi789", "Top Scorer: Virat Kohli", 300.0, BetStatus::Lost),
        bet("Jkl012", "Total Runs Over 180", 750.0, BetStatus::Refunded),
    ]
}

fn ledger(id: &str, deposit: f64, bet: f64, withdraw: f64, holding: f64, outcome: Outcome) -> LedgerRow {
    LedgerRow {
        id: id.to_string(),
        deposit,
        bet,
        withdraw,
        holding,
        outcome,
    }
}

pub fn sample_ledger() -> Vec<LedgerRow> {
    vec![
        ledger("Abc102", 1000.0, 500.0, 1000.0, 1000.0, Outcome::Profit),
        ledger("Abc102", 5000.0, 500.0, 1000.0, 1000.0, Outcome::Loss),
        ledger("Xyz456", 2500.0, 1200.0, 500.0, 3200.0, Outcome::Profit),
        ledger("Pqr789", 3000.0, 2000.0, 0.0, 1000.0, Outcome::Loss),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Listing;

    #[test]
    fn test_user_record_deserialization() {
        let json = r#"[{
            "_id": "65f1c0a9e4b0d2a1b3c4d5e6",
            "fullName": "Rohit Sharma",
            "phone": "9876543210",
            "money": 1520.5,
            "totalBets": 12,
            "createdAt": "2025-03-05T10:15:00.000Z"
        }]"#;
        let users: Vec<UserRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].full_name, "Rohit Sharma");
        assert_eq!(users[0].total_bets, 12);
        assert!(users[0].matches("rohit"));
        assert!(users[0].matches("d5e6"));
        assert!(users[0].matches("98765"));
    }

    #[test]
    fn test_user_record_missing_counters_default() {
        let json = r#"{"_id":"1","fullName":"A","phone":"1","createdAt":"2025-01-01T00:00:00Z"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.money, 0.0);
        assert_eq!(user.total_bets, 0);
    }

    #[test]
    fn test_user_list_tolerates_nulls_and_missing_dates() {
        let json = r#"[
            {"_id":"1","fullName":"A","phone":"9876543210","money":null,"totalBets":null,"createdAt":"2025-01-01T00:00:00Z"},
            {"_id":"2","fullName":"B","phone":"9123456780","money":250.0,"totalBets":4}
        ]"#;
        let users: Vec<UserRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].money, 0.0);
        assert_eq!(users[0].total_bets, 0);
        assert!(users[0].created_at.is_some());
        assert_eq!(users[1].money, 250.0);
        assert_eq!(users[1].created_at, None);
    }

    #[test]
    fn test_account_history_deserialization() {
        let json = r#"[{
            "userId": "u-1",
            "fullName": "Virat Kohli",
            "phone": "9123456780",
            "transaction": { "type": "Deposit", "amount": 2500, "createdAt": "2025-04-01T08:00:00Z" }
        }]"#;
        let entries: Vec<AccountHistoryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].kind(), TransactionKind::Credit);
        assert_eq!(entries[0].transaction.amount, 2500.0);
        assert!(entries[0].matches("U-1"));
    }

    #[test]
    fn test_transaction_kind_classify() {
        assert_eq!(TransactionKind::classify("credit"), TransactionKind::Credit);
        assert_eq!(TransactionKind::classify("Admin Deposit"), TransactionKind::Credit);
        assert_eq!(TransactionKind::classify("DEBIT"), TransactionKind::Debit);
        assert_eq!(TransactionKind::classify("withdrawal"), TransactionKind::Debit);
        assert_eq!(TransactionKind::classify("bonus"), TransactionKind::Other);
    }

    #[test]
    fn test_bet_search_single_match() {
        let mut listing = Listing::with_records(sample_bets(), 4);
        listing.set_search_term("Abc");
        let view = listing.render();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, "Abc102");
        assert!(!view.has_previous);
        assert!(!view.has_next);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn test_bets_only_search_by_id() {
        let mut listing = Listing::with_records(sample_bets(), 4);
        listing.set_search_term("cricket");
        assert_eq!(listing.filtered_count(), 0);
    }

    #[test]
    fn test_ledger_tabs() {
        let mut listing = Listing::with_records(sample_ledger(), 5);
        listing.set_category(LedgerTab::Profit);
        assert_eq!(listing.filtered_count(), 2);
        listing.set_search_term("abc");
        assert_eq!(listing.filtered_count(), 1);
        listing.set_category(LedgerTab::All);
        assert_eq!(listing.filtered_count(), 2);
    }

    #[test]
    fn test_ledger_tab_from_str() {
        assert_eq!("Profit".parse::<LedgerTab>(), Ok(LedgerTab::Profit));
        assert!("gains".parse::<LedgerTab>().is_err());
    }
}
