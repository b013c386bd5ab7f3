//! Initial database migration.
//!
//! Creates the chart of accounts, journals, ledger lines and report contexts.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: CHART OF ACCOUNTS
        // ============================================================
        db.execute_unprepared(ACCOUNT_GROUPS_SQL).await?;
        db.execute_unprepared(ACCOUNTS_SQL).await?;

        // ============================================================
        // PART 3: JOURNALS & LEDGER
        // ============================================================
        db.execute_unprepared(JOURNALS_SQL).await?;
        db.execute_unprepared(LEDGER_LINES_SQL).await?;

        // ============================================================
        // PART 4: REPORTING
        // ============================================================
        db.execute_unprepared(REPORT_CONTEXTS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
CREATE TYPE posting_state AS ENUM ('draft', 'posted', 'cancelled');
";

const ACCOUNT_GROUPS_SQL: &str = r"
CREATE TABLE account_groups (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const ACCOUNTS_SQL: &str = r"
CREATE TABLE accounts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    code VARCHAR(64) NOT NULL,
    name VARCHAR(255) NOT NULL,
    -- Free-form tag; unknown tags are treated as credit-natured.
    account_type VARCHAR(64) NOT NULL,
    group_id UUID REFERENCES account_groups(id) ON DELETE SET NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_accounts_code UNIQUE (code)
);

CREATE INDEX idx_accounts_group ON accounts(group_id);
";

const JOURNALS_SQL: &str = r"
CREATE TABLE journals (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const LEDGER_LINES_SQL: &str = r"
CREATE TABLE ledger_lines (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    account_id UUID NOT NULL REFERENCES accounts(id) ON DELETE RESTRICT,
    journal_id UUID REFERENCES journals(id) ON DELETE SET NULL,
    date DATE NOT NULL,
    debit NUMERIC(20, 4) NOT NULL DEFAULT 0,
    credit NUMERIC(20, 4) NOT NULL DEFAULT 0,
    posting_state posting_state NOT NULL DEFAULT 'draft',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_ledger_lines_debit CHECK (debit >= 0),
    CONSTRAINT chk_ledger_lines_credit CHECK (credit >= 0)
);

-- Per-account date range scans
CREATE INDEX idx_ledger_lines_account_date ON ledger_lines(account_id, date);

-- Posted lines only, the sole input to reports
CREATE INDEX idx_ledger_lines_posted ON ledger_lines(date) WHERE posting_state = 'posted';
";

const REPORT_CONTEXTS_SQL: &str = r"
CREATE TABLE report_contexts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    reference_date DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS report_contexts CASCADE;
DROP TABLE IF EXISTS ledger_lines CASCADE;
DROP TABLE IF EXISTS journals CASCADE;
DROP TABLE IF EXISTS accounts CASCADE;
DROP TABLE IF EXISTS account_groups CASCADE;
DROP TYPE IF EXISTS posting_state;
";
