//! Resource read/write commands.
//!
//! `ledgerctl get accounts`, `ledgerctl trial-balance --period 2026-07`,
//! etc. Translates resource names to the books services and renders the
//! results.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use ledgerctl_books::{
    Account, BalanceRun, BooksService, CreateVoucher, ExchangeRate, GroupingRule, Report,
    SetExchangeRate, TrialBalanceRow, Voucher, VoucherQuery,
};
use ledgerctl_client::ApiClient;
use ledgerctl_core::{ListParams, Period};

use crate::commands::fail;
use crate::config::ClientConfig;
use crate::output;

fn books(api: Arc<ApiClient>) -> BooksService {
    BooksService::new(api)
}

/// GET a resource (list or get by ID).
pub async fn get(
    resource: &str,
    id: Option<&str>,
    period: Option<Period>,
    limit: Option<usize>,
    offset: Option<usize>,
    json_output: bool,
    config_path: &Path,
) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let (api, _ctx) = super::connect(&config)?;
    let svc = books(api);

    let mut params = ListParams::default();
    if let Some(l) = limit {
        params.limit = l;
    }
    if let Some(o) = offset {
        params.offset = o;
    }

    match resource.to_lowercase().as_str() {
        "account" | "accounts" => {
            if let Some(code) = id {
                let account = svc.get_account(code).await.map_err(fail)?;
                return output::print_json(&account);
            }
            let result = svc.list_accounts(&params).await.map_err(fail)?;
            render_accounts(&result.items, result.total, json_output)?;
        }

        "voucher" | "vouchers" => {
            if let Some(id) = id {
                let voucher = svc.get_voucher(id).await.map_err(fail)?;
                return output::print_json(&voucher);
            }
            let query = VoucherQuery {
                period,
                word: None,
                limit,
                offset,
            };
            let result = svc.list_vouchers(&query).await.map_err(fail)?;
            render_vouchers(&result.items, result.total, json_output)?;
        }

        "report" | "reports" => {
            if let Some(id) = id {
                let Some(period) = period else {
                    anyhow::bail!("Provide --period to render report \"{}\".", id);
                };
                let table = svc.report_rows(id, &period).await.map_err(fail)?;
                return render_report_table(&table, json_output);
            }
            let reports = svc.list_reports().await.map_err(fail)?;
            render_reports(&reports, json_output)?;
        }

        "grouping-rule" | "grouping-rules" | "rule" | "rules" => {
            let rules = svc.list_grouping_rules().await.map_err(fail)?;
            render_rules(&rules, json_output)?;
        }

        "exchange-rate" | "exchange-rates" | "rate" | "rates" => {
            let Some(period) = period else {
                anyhow::bail!("Provide --period to list exchange rates.");
            };
            let rates = svc.list_exchange_rates(&period).await.map_err(fail)?;
            render_rates(&rates, json_output)?;
        }

        "balance-run" | "balance-runs" | "run" | "runs" => {
            let runs = svc.list_balance_runs().await.map_err(fail)?;
            render_runs(&runs, json_output)?;
        }

        _ => anyhow::bail!("Unknown resource type: {}", resource),
    }
    Ok(())
}

/// CREATE a resource from a JSON body.
pub async fn create(
    resource: &str,
    json_body: &str,
    json_output: bool,
    config_path: &Path,
) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let (api, _ctx) = super::connect(&config)?;
    let svc = books(api);

    match resource.to_lowercase().as_str() {
        "voucher" | "vouchers" => {
            let input: CreateVoucher = serde_json::from_str(json_body)
                .map_err(|e| anyhow::anyhow!("Invalid JSON: {}", e))?;
            let voucher = svc.create_voucher(&input).await.map_err(fail)?;
            if json_output {
                return output::print_json(&voucher);
            }
            println!(
                "Voucher {}-{} created ({} entries, total {}).",
                voucher.word,
                voucher.number,
                voucher.entries.len(),
                output::fmt_amount(voucher.total_debit()),
            );
        }
        _ => anyhow::bail!("Cannot create resource type: {}", resource),
    }
    Ok(())
}

/// DELETE a resource.
pub async fn delete(resource: &str, id: &str, config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let (api, _ctx) = super::connect(&config)?;
    let svc = books(api);

    match resource.to_lowercase().as_str() {
        "voucher" | "vouchers" => {
            svc.delete_voucher(id).await.map_err(fail)?;
            println!("Voucher {} deleted.", id);
        }
        _ => anyhow::bail!("Cannot delete resource type: {}", resource),
    }
    Ok(())
}

/// Set a currency's exchange rate for a period.
pub async fn set_rate(
    currency: &str,
    period: Period,
    rate: f64,
    json_output: bool,
    config_path: &Path,
) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let (api, _ctx) = super::connect(&config)?;
    let svc = books(api);

    let input = SetExchangeRate {
        currency: currency.to_uppercase(),
        period,
        rate,
    };
    let saved = svc.set_exchange_rate(&input).await.map_err(fail)?;
    if json_output {
        return output::print_json(&saved);
    }
    println!("Rate set: {} @ {} for {}.", saved.currency, saved.rate, saved.period);
    Ok(())
}

/// Print the trial balance for a period.
pub async fn trial_balance(period: Period, json_output: bool, config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let (api, _ctx) = super::connect(&config)?;
    let svc = books(api);

    let rows = svc.trial_balance(&period).await.map_err(fail)?;
    render_trial_balance(&rows, json_output)
}

/// Ask the server to (re)generate balances for a period.
pub async fn generate_balance(period: Period, json_output: bool, config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let (api, _ctx) = super::connect(&config)?;
    let svc = books(api);

    let run = svc.generate_balance(&period).await.map_err(fail)?;
    if json_output {
        return output::print_json(&run);
    }
    println!("Balance generation for {}: {:?} (run {}).", run.period, run.status, run.id);
    Ok(())
}

/// STATUS — check server health.
pub async fn status(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let ctx = config
        .current()
        .ok_or_else(|| anyhow::anyhow!("No current context."))?;

    println!("Context:   {}", ctx.name);
    println!("Server:    {}", if ctx.server.is_empty() { "-" } else { &ctx.server });

    if ctx.server.is_empty() {
        println!("Status:    no server configured");
        return Ok(());
    }

    let api = ApiClient::new(&ctx.server)?;
    match api.get_json::<serde_json::Value>("/health").await {
        Ok(_) => println!("Status:    connected"),
        Err(e) => println!("Status:    unreachable ({})", e),
    }
    Ok(())
}

// ── Rendering ───────────────────────────────────────────────────────

pub(crate) fn render_accounts(items: &[Account], total: usize, json: bool) -> Result<()> {
    if json {
        return output::print_json(&serde_json::json!({"items": items, "total": total}));
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|a| {
            vec![
                a.code.clone(),
                a.name.clone(),
                format!("{:?}", a.category),
                format!("{:?}", a.direction),
                a.currency.clone().unwrap_or_default(),
            ]
        })
        .collect();
    output::print_table(&["CODE", "NAME", "CATEGORY", "DIRECTION", "CURRENCY"], &rows);
    println!("{} of {} accounts.", items.len(), total);
    Ok(())
}

pub(crate) fn render_vouchers(items: &[Voucher], total: usize, json: bool) -> Result<()> {
    if json {
        return output::print_json(&serde_json::json!({"items": items, "total": total}));
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|v| {
            vec![
                format!("{}-{}", v.word, v.number),
                v.date.to_string(),
                v.entries.len().to_string(),
                output::fmt_amount(v.total_debit()),
                v.id.clone(),
            ]
        })
        .collect();
    output::print_table(&["VOUCHER", "DATE", "ENTRIES", "TOTAL", "ID"], &rows);
    println!("{} of {} vouchers.", items.len(), total);
    Ok(())
}

pub(crate) fn render_trial_balance(rows: &[TrialBalanceRow], json: bool) -> Result<()> {
    if json {
        return output::print_json(&serde_json::json!({ "items": rows }));
    }
    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.account_code.clone(),
                r.account_name.clone(),
                output::fmt_amount(r.opening_debit),
                output::fmt_amount(r.opening_credit),
                output::fmt_amount(r.period_debit),
                output::fmt_amount(r.period_credit),
                output::fmt_amount(r.closing_debit),
                output::fmt_amount(r.closing_credit),
            ]
        })
        .collect();
    output::print_table(
        &["CODE", "ACCOUNT", "OPEN DR", "OPEN CR", "PERIOD DR", "PERIOD CR", "CLOSE DR", "CLOSE CR"],
        &table,
    );
    Ok(())
}

pub(crate) fn render_runs(runs: &[BalanceRun], json: bool) -> Result<()> {
    if json {
        return output::print_json(&serde_json::json!({ "items": runs }));
    }
    let rows: Vec<Vec<String>> = runs
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.period.to_string(),
                format!("{:?}", r.status),
                r.generated_at.clone().unwrap_or_default(),
                r.message.clone().unwrap_or_default(),
            ]
        })
        .collect();
    output::print_table(&["RUN", "PERIOD", "STATUS", "GENERATED", "MESSAGE"], &rows);
    Ok(())
}

pub(crate) fn render_reports(reports: &[Report], json: bool) -> Result<()> {
    if json {
        return output::print_json(&serde_json::json!({ "items": reports }));
    }
    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|r| vec![r.id.clone(), r.name.clone(), format!("{:?}", r.kind)])
        .collect();
    output::print_table(&["ID", "NAME", "KIND"], &rows);
    Ok(())
}

pub(crate) fn render_report_table(table: &ledgerctl_books::ReportTable, json: bool) -> Result<()> {
    if json {
        return output::print_json(table);
    }
    let mut headers = vec!["LINE", "CAPTION"];
    for col in &table.columns {
        headers.push(col.as_str());
    }
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|r| {
            let mut row = vec![r.line_no.to_string(), r.caption.clone()];
            row.extend(r.amounts.iter().map(|a| output::fmt_amount(*a)));
            row
        })
        .collect();
    output::print_table(&headers, &rows);
    Ok(())
}

pub(crate) fn render_rules(rules: &[GroupingRule], json: bool) -> Result<()> {
    if json {
        return output::print_json(&serde_json::json!({ "items": rules }));
    }
    let rows: Vec<Vec<String>> = rules
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.name.clone(),
                format!("{:?}", r.source_category),
                r.account_prefixes.join(","),
                r.target_line.clone(),
            ]
        })
        .collect();
    output::print_table(&["ID", "NAME", "CATEGORY", "PREFIXES", "TARGET LINE"], &rows);
    Ok(())
}

pub(crate) fn render_rates(rates: &[ExchangeRate], json: bool) -> Result<()> {
    if json {
        return output::print_json(&serde_json::json!({ "items": rates }));
    }
    let rows: Vec<Vec<String>> = rates
        .iter()
        .map(|r| vec![r.currency.clone(), r.period.to_string(), r.rate.to_string()])
        .collect();
    output::print_table(&["CURRENCY", "PERIOD", "RATE"], &rows);
    Ok(())
}
