//! Deterministic fixture data backing the dashboard endpoints.
//!
//! Every constructor returns the same literal records on every call; there
//! is no randomness and no I/O. The settings slice is the exception: its
//! default lives here but persistence belongs to [`crate::store`].

use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::models::{
    ActivityDay, BalancePoint, CreditCard, ExpenseStat, SettingsProfile, Transaction,
    TransferContact, TransferDirection,
};
use crate::resource::ResourceKey;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn balance_history() -> Vec<BalancePoint> {
    let points = [
        ("Feb", 5_000.0),
        ("Mar", 12_000.0),
        ("Apr", 9_500.0),
        ("May", 15_500.0),
        ("Jun", 21_000.0),
        ("Jul", 18_000.0),
        ("Aug", 24_000.0),
        ("Sep", 16_500.0),
        ("Oct", 22_500.0),
        ("Nov", 29_000.0),
        ("Dec", 25_500.0),
        ("Jan", 32_000.0),
    ];
    points
        .into_iter()
        .map(|(month, balance)| BalancePoint {
            month: month.to_string(),
            balance,
        })
        .collect()
}

pub fn credit_cards() -> Vec<CreditCard> {
    vec![
        CreditCard {
            id: "card-1".to_string(),
            balance: 5_756.0,
            card_holder: "Eddy Cusuma".to_string(),
            card_number: "3778 **** **** 1234".to_string(),
            valid_thru: "12/22".to_string(),
            card_type: "primary".to_string(),
        },
        CreditCard {
            id: "card-2".to_string(),
            balance: 8_420.0,
            card_holder: "Eddy Cusuma".to_string(),
            card_number: "4556 **** **** 9801".to_string(),
            valid_thru: "09/24".to_string(),
            card_type: "secondary".to_string(),
        },
        CreditCard {
            id: "card-3".to_string(),
            balance: 1_230.5,
            card_holder: "Eddy Cusuma".to_string(),
            card_number: "5110 **** **** 4722".to_string(),
            valid_thru: "03/25".to_string(),
            card_type: "virtual".to_string(),
        },
    ]
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "tx-1".to_string(),
            description: "Deposit from my Card".to_string(),
            transaction_type: "card".to_string(),
            date: date(2021, 1, 28),
            amount: 850.0,
            direction: TransferDirection::Debit,
        },
        Transaction {
            id: "tx-2".to_string(),
            description: "Deposit Paypal".to_string(),
            transaction_type: "paypal".to_string(),
            date: date(2021, 1, 25),
            amount: 2_500.0,
            direction: TransferDirection::Credit,
        },
        Transaction {
            id: "tx-3".to_string(),
            description: "Jemi Wilson".to_string(),
            transaction_type: "transfer".to_string(),
            date: date(2021, 1, 21),
            amount: 5_400.0,
            direction: TransferDirection::Credit,
        },
        Transaction {
            id: "tx-4".to_string(),
            description: "Workspace rent".to_string(),
            transaction_type: "transfer".to_string(),
            date: date(2021, 1, 18),
            amount: 1_200.0,
            direction: TransferDirection::Debit,
        },
        Transaction {
            id: "tx-5".to_string(),
            description: "Refund groceries".to_string(),
            transaction_type: "card".to_string(),
            date: date(2021, 1, 15),
            amount: 132.75,
            direction: TransferDirection::Credit,
        },
    ]
}

pub fn weekly_activity() -> Vec<ActivityDay> {
    let days = [
        ("Sat", 480.0, 240.0),
        ("Sun", 350.0, 130.0),
        ("Mon", 320.0, 260.0),
        ("Tue", 480.0, 370.0),
        ("Wed", 150.0, 230.0),
        ("Thu", 390.0, 230.0),
        ("Fri", 400.0, 330.0),
    ];
    days.into_iter()
        .map(|(day, deposit, withdraw)| ActivityDay {
            day: day.to_string(),
            deposit,
            withdraw,
        })
        .collect()
}

pub fn expense_statistics() -> Vec<ExpenseStat> {
    let wedges = [
        ("Entertainment", 30.0),
        ("Bill Expense", 15.0),
        ("Investment", 20.0),
        ("Others", 35.0),
    ];
    wedges
        .into_iter()
        .map(|(label, percentage)| ExpenseStat {
            label: label.to_string(),
            percentage,
        })
        .collect()
}

pub fn quick_transfer_contacts() -> Vec<TransferContact> {
    vec![
        TransferContact {
            id: "contact-1".to_string(),
            name: "Livia Bator".to_string(),
            role: "CEO".to_string(),
            avatar: "/uploads/livia.png".to_string(),
        },
        TransferContact {
            id: "contact-2".to_string(),
            name: "Randy Press".to_string(),
            role: "Director".to_string(),
            avatar: "/uploads/randy.png".to_string(),
        },
        TransferContact {
            id: "contact-3".to_string(),
            name: "Workman".to_string(),
            role: "Designer".to_string(),
            avatar: "/uploads/workman.png".to_string(),
        },
    ]
}

/// Profile used to seed a fresh settings store.
pub fn default_settings() -> SettingsProfile {
    SettingsProfile {
        name: "Charlene Reed".to_string(),
        user_name: "charlene.reed".to_string(),
        email: "charlenereed@gmail.com".to_string(),
        password: "password123".to_string(),
        date_of_birth: "1990-01-25".to_string(),
        present_address: "San Jose, California, USA".to_string(),
        permanent_address: "San Jose, California, USA".to_string(),
        city: "San Jose".to_string(),
        postal_code: "45962".to_string(),
        country: "USA".to_string(),
        avatar: "/uploads/charlene.png".to_string(),
    }
}

/// JSON body for one dashboard slice, or None for resources that are not
/// served from fixtures (settings comes from the store).
pub fn dashboard_slice(key: ResourceKey) -> Option<Value> {
    let value = match key {
        ResourceKey::Cards => json!(credit_cards()),
        ResourceKey::Transactions => json!(transactions()),
        ResourceKey::WeeklyActivity => json!(weekly_activity()),
        ResourceKey::ExpenseStatistics => json!(expense_statistics()),
        ResourceKey::QuickTransferUsers => json!(quick_transfer_contacts()),
        ResourceKey::BalanceHistory => json!(balance_history()),
        ResourceKey::Settings => return None,
    };
    Some(value)
}
