//! Database seeder for month-end report development and testing.
//!
//! Seeds a small chart of accounts, journals, a saved report context and
//! posted ledger lines spread over the previous and current month.
//!
//! Usage: cargo run --bin seeder

use chrono::{Datelike, Days, Months, NaiveDate, Utc};
use monthend_db::entities::{
    account_groups, accounts, journals, ledger_lines, report_contexts,
    sea_orm_active_enums::PostingState,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

/// Demo report context ID (consistent for all seeds)
const DEMO_CONTEXT_ID: &str = "00000000-0000-0000-0000-000000000001";

/// Groups as `(id suffix, name)`.
const GROUPS: &[(u128, &str)] = &[
    (0x10, "Current Assets"),
    (0x11, "Current Liabilities"),
    (0x12, "Equity"),
    (0x13, "Income"),
    (0x14, "Expenses"),
];

/// Accounts as `(id suffix, code, name, account type, group suffix)`.
const ACCOUNTS: &[(u128, &str, &str, &str, Option<u128>)] = &[
    (0x20, "101000", "Bank", "asset_cash", Some(0x10)),
    (0x21, "121000", "Account Receivable", "asset_receivable", Some(0x10)),
    (0x22, "211000", "Account Payable", "liability_payable", Some(0x11)),
    (0x23, "301000", "Capital", "equity", Some(0x12)),
    (0x24, "400000", "Product Sales", "income", Some(0x13)),
    (0x25, "600000", "Office Rent", "expense", Some(0x14)),
    (0x26, "999999", "Suspense", "asset_current", None),
];

/// Journals as `(id suffix, name)`.
const JOURNALS: &[(u128, &str)] = &[
    (0x30, "Bank"),
    (0x31, "Customer Invoices"),
    (0x32, "Miscellaneous Operations"),
    (0x33, "Vendor Bills"),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = monthend_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding account groups...");
    seed_groups(&db).await;

    println!("Seeding accounts...");
    seed_accounts(&db).await;

    println!("Seeding journals...");
    seed_journals(&db).await;

    println!("Seeding report context...");
    seed_report_context(&db).await;

    println!("Seeding ledger lines...");
    seed_ledger_lines(&db).await;

    println!("Seeding complete!");
}

fn demo_id(suffix: u128) -> Uuid {
    Uuid::from_u128(suffix)
}

fn demo_context_id() -> Uuid {
    Uuid::parse_str(DEMO_CONTEXT_ID).unwrap()
}

/// First day of the current month and of the month before it.
fn seed_months() -> (NaiveDate, NaiveDate) {
    let today = Utc::now().date_naive();
    let this_month = today.with_day(1).unwrap();
    let last_month = this_month.checked_sub_months(Months::new(1)).unwrap();
    (last_month, this_month)
}

/// Seeds account groups.
async fn seed_groups(db: &DatabaseConnection) {
    for &(suffix, name) in GROUPS {
        if account_groups::Entity::find_by_id(demo_id(suffix))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Group {name} already exists, skipping...");
            continue;
        }

        let group = account_groups::ActiveModel {
            id: Set(demo_id(suffix)),
            name: Set(name.to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        group.insert(db).await.expect("Failed to create group");
        println!("  Created group: {name}");
    }
}

/// Seeds the chart of accounts.
async fn seed_accounts(db: &DatabaseConnection) {
    for &(suffix, code, name, account_type, group) in ACCOUNTS {
        if accounts::Entity::find_by_id(demo_id(suffix))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Account {code} already exists, skipping...");
            continue;
        }

        let account = accounts::ActiveModel {
            id: Set(demo_id(suffix)),
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            account_type: Set(account_type.to_string()),
            group_id: Set(group.map(demo_id)),
            created_at: Set(Utc::now().fixed_offset()),
        };

        account.insert(db).await.expect("Failed to create account");
        println!("  Created account: {code} {name}");
    }
}

/// Seeds journals.
async fn seed_journals(db: &DatabaseConnection) {
    for &(suffix, name) in JOURNALS {
        if journals::Entity::find_by_id(demo_id(suffix))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Journal {name} already exists, skipping...");
            continue;
        }

        let journal = journals::ActiveModel {
            id: Set(demo_id(suffix)),
            name: Set(name.to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        journal.insert(db).await.expect("Failed to create journal");
        println!("  Created journal: {name}");
    }
}

/// Seeds a report context pinned to the end of last month.
async fn seed_report_context(db: &DatabaseConnection) {
    if report_contexts::Entity::find_by_id(demo_context_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Report context already exists, skipping...");
        return;
    }

    let (_, this_month) = seed_months();
    let last_month_end = this_month.pred_opt().unwrap();

    let context = report_contexts::ActiveModel {
        id: Set(demo_context_id()),
        name: Set("Previous month close".to_string()),
        reference_date: Set(Some(last_month_end)),
        created_at: Set(Utc::now().fixed_offset()),
    };

    context
        .insert(db)
        .await
        .expect("Failed to create report context");
    println!("  Created report context for {last_month_end}");
}

/// Seeds balanced journal entries over two months, plus one draft that
/// reports must ignore.
async fn seed_ledger_lines(db: &DatabaseConnection) {
    let (last_month, this_month) = seed_months();

    // (id suffix, account, journal, month, day offset, debit, credit, state)
    let lines: &[(u128, u128, u128, NaiveDate, u64, &str, &str, PostingState)] = &[
        // Owner contribution
        (0x100, 0x20, 0x30, last_month, 0, "50000.00", "0", PostingState::Posted),
        (0x101, 0x23, 0x30, last_month, 0, "0", "50000.00", PostingState::Posted),
        // Invoice last month
        (0x102, 0x21, 0x31, last_month, 9, "12500.00", "0", PostingState::Posted),
        (0x103, 0x24, 0x31, last_month, 9, "0", "12500.00", PostingState::Posted),
        // Rent bill this month
        (0x104, 0x25, 0x33, this_month, 2, "3200.00", "0", PostingState::Posted),
        (0x105, 0x22, 0x33, this_month, 2, "0", "3200.00", PostingState::Posted),
        // Customer payment this month
        (0x106, 0x20, 0x30, this_month, 4, "7500.00", "0", PostingState::Posted),
        (0x107, 0x21, 0x30, this_month, 4, "0", "7500.00", PostingState::Posted),
        // Unposted correction
        (0x108, 0x26, 0x32, this_month, 5, "99.99", "0", PostingState::Draft),
        (0x109, 0x20, 0x32, this_month, 5, "0", "99.99", PostingState::Draft),
    ];

    for (suffix, account, journal, month, offset, debit, credit, state) in lines {
        if ledger_lines::Entity::find_by_id(demo_id(*suffix))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            continue;
        }

        let line = ledger_lines::ActiveModel {
            id: Set(demo_id(*suffix)),
            account_id: Set(demo_id(*account)),
            journal_id: Set(Some(demo_id(*journal))),
            date: Set(*month + Days::new(*offset)),
            debit: Set(debit.parse::<Decimal>().unwrap()),
            credit: Set(credit.parse::<Decimal>().unwrap()),
            posting_state: Set(*state),
            created_at: Set(Utc::now().fixed_offset()),
        };

        line.insert(db).await.expect("Failed to create ledger line");
    }

    println!("  Seeded {} ledger lines", lines.len());
}
