//! Page rendering for each [`Route`].
//!
//! Pages only display what the aggregation engine computed; they never do
//! arithmetic of their own beyond formatting.

use serde_json::json;
use tracing::debug;

use crate::{
    config::Config,
    core::services::{RecordService, SummaryService},
    currency::{format_amount, format_unsigned, CurrencyCode, FormatOptions, LocaleConfig},
    domain::{Identifiable, LedgerSummary, Record, RecordId, RecordKind},
};

use super::{
    output::{format_message, MessageKind, OutputPreferences},
    routes::Route,
    ui::{
        detail_view::DetailView,
        style::{paint_kind, paint_signed},
        table_renderer::{Table, TableColumn},
    },
};

const CATEGORY_MAX_WIDTH: usize = 24;

/// Snapshot plus display settings for one render.
pub struct PageContext {
    pub records: Vec<Record>,
    pub source_name: String,
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
    pub format: FormatOptions,
    pub plain: bool,
}

impl PageContext {
    pub fn new(records: Vec<Record>, source_name: impl Into<String>, config: &Config) -> Self {
        Self {
            records,
            source_name: source_name.into(),
            currency: config.currency.clone(),
            locale: config.locale(),
            format: config.format_options(),
            plain: config.plain_mode,
        }
    }

    fn money(&self, amount: i128) -> String {
        format_amount(amount, &self.currency, &self.locale, &self.format)
    }

    fn subtotal(&self, amount: u128) -> String {
        format_unsigned(amount, &self.currency, &self.locale, &self.format)
    }

    fn heading(&self, title: &str) -> String {
        let prefs = OutputPreferences {
            plain_mode: self.plain,
            quiet_mode: false,
        };
        format_message(MessageKind::Section, title, &prefs)
    }
}

/// Renders a page to text.
pub fn render(route: Route, ctx: &PageContext) -> String {
    debug!(%route, "rendering page");
    match route {
        Route::Home => render_home(ctx),
        Route::About => render_about(ctx),
        Route::Contact => render_contact(ctx),
        Route::Expenses => render_expenses(ctx),
        Route::ExpenseDetail(id) => render_detail(ctx, id),
    }
}

/// Renders the data behind a page as JSON.
pub fn render_json(route: Route, ctx: &PageContext) -> Result<String, serde_json::Error> {
    match route {
        Route::Expenses => {
            let summary = SummaryService::summarize(&ctx.records);
            serde_json::to_string_pretty(&summary)
        }
        Route::ExpenseDetail(id) => {
            serde_json::to_string_pretty(&RecordService::find(&ctx.records, id))
        }
        other => serde_json::to_string_pretty(&json!({
            "route": other.to_string(),
            "title": other.title(),
        })),
    }
}

pub fn navigation_menu() -> String {
    Route::navigation()
        .iter()
        .map(|route| format!("  {:<10} {}", route.to_string(), route.title()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_home(ctx: &PageContext) -> String {
    [
        ctx.heading("Home"),
        "Welcome to your household ledger.".to_string(),
        String::new(),
        navigation_menu(),
    ]
    .join("\n")
}

fn render_about(ctx: &PageContext) -> String {
    [
        ctx.heading("About"),
        "Kakeibo groups your income and expense records by month and keeps a".to_string(),
        "running net balance across every record.".to_string(),
        format!("Records are read from: {}", ctx.source_name),
    ]
    .join("\n")
}

fn render_contact(ctx: &PageContext) -> String {
    [
        ctx.heading("Contact"),
        "Questions or bug reports: open an issue in the project repository.".to_string(),
    ]
    .join("\n")
}

fn render_expenses(ctx: &PageContext) -> String {
    let summary = SummaryService::summarize(&ctx.records);
    [
        ctx.heading(Route::Expenses.title()),
        String::new(),
        ctx.heading("All records"),
        records_table(ctx),
        balance_line(ctx, &summary),
        String::new(),
        ctx.heading("Monthly totals"),
        monthly_table(ctx, &summary),
    ]
    .join("\n")
}

fn records_table(ctx: &PageContext) -> String {
    let mut table = Table::new(vec![
        TableColumn::right("ID"),
        TableColumn::left("Date"),
        TableColumn::left("Category").with_max_width(CATEGORY_MAX_WIDTH),
        TableColumn::right("Amount"),
    ]);
    for record in &ctx.records {
        table.push_row(vec![
            record.id().to_string(),
            record.date().format("%Y-%m-%d").to_string(),
            record.category().to_string(),
            paint_kind(ctx.money(i128::from(record.amount())), record.kind(), ctx.plain),
        ]);
    }
    table.render()
}

fn balance_line(ctx: &PageContext, summary: &LedgerSummary) -> String {
    format!(
        "Net of credits and debits: {}",
        paint_signed(ctx.money(summary.balance), summary.balance, ctx.plain)
    )
}

fn monthly_table(ctx: &PageContext, summary: &LedgerSummary) -> String {
    if summary.monthly.is_empty() {
        return "No records yet.".to_string();
    }
    let mut table = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("Income"),
        TableColumn::right("Expense"),
        TableColumn::right("Net"),
    ]);
    for (month, total) in summary.monthly.iter() {
        let net = total.net();
        table.push_row(vec![
            month.to_string(),
            paint_kind(ctx.subtotal(total.income), RecordKind::Credit, ctx.plain),
            paint_kind(ctx.subtotal(total.expense), RecordKind::Debit, ctx.plain),
            ctx.money(net),
        ]);
    }
    table.render()
}

fn render_detail(ctx: &PageContext, id: RecordId) -> String {
    let back = format!("← Back to list: {}", Route::Expenses);
    let Some(record) = RecordService::find(&ctx.records, id) else {
        debug!(%id, "record not found");
        return [ctx.heading("Record not found"), back].join("\n");
    };

    let view = DetailView::new(ctx.heading(Route::ExpenseDetail(id).title()))
        .with_field("ID", record.id().to_string())
        .with_field("Date", record.date().format("%Y-%m-%d").to_string())
        .with_field("Category", record.category())
        .with_field("Kind", record.kind().label())
        .with_field(
            "Amount",
            paint_kind(ctx.money(i128::from(record.amount())), record.kind(), ctx.plain),
        );
    [view.render(), back].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{RecordSource, StaticRecordSource};

    fn plain_context() -> PageContext {
        let config = Config {
            plain_mode: true,
            ..Config::default()
        };
        let records = StaticRecordSource::sample().load().unwrap();
        PageContext::new(records, "built-in sample", &config)
    }

    #[test]
    fn expenses_page_lists_months_in_first_seen_order() {
        let page = render(Route::Expenses, &plain_context());
        let feb = page.find("2026-02 ").expect("february row");
        let mar = page.find("2026-03 ").expect("march row");
        assert!(feb < mar);
        assert!(page.contains("Net of credits and debits: ¥593,850"));
    }

    #[test]
    fn detail_page_shows_kind_and_amount() {
        let page = render(Route::ExpenseDetail(RecordId(4)), &plain_context());
        assert!(page.contains("Kind:"));
        assert!(page.contains("Credit"));
        assert!(page.contains("¥300,000"));
    }

    #[test]
    fn missing_detail_falls_back_to_not_found() {
        let page = render(Route::ExpenseDetail(RecordId(42)), &plain_context());
        assert!(page.starts_with("=== Record not found ==="));
        assert!(page.contains("/expenses"));
    }

    #[test]
    fn json_summary_keeps_month_order() {
        let json = render_json(Route::Expenses, &plain_context()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["balance"], 593_850);
        assert_eq!(value["monthly"][0]["month"], "2026-02");
        assert_eq!(value["monthly"][1]["month"], "2026-03");
    }

    #[test]
    fn json_detail_for_missing_record_is_null() {
        let json = render_json(Route::ExpenseDetail(RecordId(42)), &plain_context()).unwrap();
        assert_eq!(json, "null");
    }
}
