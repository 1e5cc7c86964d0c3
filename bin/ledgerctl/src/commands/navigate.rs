//! The `open` command — permission-gated navigation into a screen.
//!
//! Restores the session from the saved token, asks the guard whether
//! the target's module is accessible, then fetches and renders the
//! screen's data. Denial renders the unauthorized notice, mirroring
//! what the browser frontend does with a redirect.

use std::path::Path;

use anyhow::Result;

use ledgerctl_books::{BooksService, VoucherQuery};
use ledgerctl_core::Period;
use ledgerctl_session::{catalog, NavigationGuard};

use crate::commands::resource::{
    render_accounts, render_rates, render_reports, render_rules, render_runs,
    render_trial_balance, render_vouchers,
};
use crate::commands::{connect, fail, restore_session, session};
use crate::config::ClientConfig;

pub async fn open(
    target: &str,
    period: Option<Period>,
    json_output: bool,
    config_path: &Path,
) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let (api, ctx) = connect(&config)?;
    let (store, auth) = session(api.clone(), &config);
    restore_session(&auth, &ctx).await?;

    let guard = NavigationGuard::new(store.clone());
    let Some(route) = catalog::find(target).or_else(|| catalog::find_by_path(target)) else {
        anyhow::bail!("Unknown route: {}", target);
    };

    if !guard.can_activate(route.name) {
        println!("Unauthorized: no access to {} ({}).", route.name, route.full_path);
        println!("-> {}", catalog::unauthorized_route().full_path);
        return Ok(());
    }

    println!("[{}]", route.full_path);
    let svc = BooksService::new(api);

    match route.name {
        "dashboard" => {
            let principal = store.principal();
            println!("Signed in as {}.", principal.identity().name);
            println!("Accessible modules:");
            for r in catalog::ROUTES {
                if r.parent.is_empty() && !r.permission.is_empty() && guard.can_activate(r.name) {
                    println!("  {:<16} {}", r.name, r.full_path);
                }
            }
        }

        "accounts" => {
            let result = svc.list_accounts(&Default::default()).await.map_err(fail)?;
            render_accounts(&result.items, result.total, json_output)?;
        }

        "vouchers" => {
            let query = VoucherQuery { period, ..Default::default() };
            let result = svc.list_vouchers(&query).await.map_err(fail)?;
            render_vouchers(&result.items, result.total, json_output)?;
        }

        "voucher-entry" => {
            println!("Submit a voucher with `ledgerctl create voucher --json '{{...}}'`.");
        }

        "balances" | "balance-runs" => {
            let runs = svc.list_balance_runs().await.map_err(fail)?;
            render_runs(&runs, json_output)?;
        }

        "trial-balance" => {
            let Some(period) = period else {
                anyhow::bail!("Provide --period to open the trial balance.");
            };
            let rows = svc.trial_balance(&period).await.map_err(fail)?;
            render_trial_balance(&rows, json_output)?;
        }

        "reports" | "report-viewer" => {
            let reports = svc.list_reports().await.map_err(fail)?;
            render_reports(&reports, json_output)?;
            if route.name == "report-viewer" {
                println!("Render one with `ledgerctl get reports <id> --period <YYYY-MM>`.");
            }
        }

        "settings" => {
            println!("Settings screens:");
            for r in catalog::ROUTES {
                if r.parent == "settings" {
                    println!("  {:<16} {}", r.name, r.full_path);
                }
            }
        }

        "grouping-rules" => {
            let rules = svc.list_grouping_rules().await.map_err(fail)?;
            render_rules(&rules, json_output)?;
        }

        "exchange-rates" => {
            let Some(period) = period else {
                anyhow::bail!("Provide --period to open exchange rates.");
            };
            let rates = svc.list_exchange_rates(&period).await.map_err(fail)?;
            render_rates(&rates, json_output)?;
        }

        "unauthorized" => {
            println!("Nothing here. Ask an administrator for access.");
        }

        other => anyhow::bail!("No screen wired for route: {}", other),
    }
    Ok(())
}
