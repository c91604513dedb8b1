//! Command Line Interface for the liquidity pool dashboard.
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use poolboard_data::{FixtureProvider, MarketStore};
use poolboard_domain::entities::PositionId;
use poolboard_domain::enums::{AprBucket, RiskLevel, SortKey};
use poolboard_domain::filter::PoolFilter;
use poolboard_domain::metrics::deposit;
use poolboard_domain::metrics::pnl;
use poolboard_domain::thresholds::{Thresholds, health_status};
use poolboard_execution::{ExecutorConfig, TransactionOutcome, TransactionRequest, TransactionSimulator};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "poolboard")]
#[command(about = "Liquidity pool dashboard CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pools, filtered and sorted
    Pools {
        /// Risk level filter: low | medium | high
        #[arg(short, long)]
        risk: Option<String>,

        /// APR bucket filter: 0-10 | 10-20 | 20-50 | 50+
        #[arg(short, long)]
        apr: Option<String>,

        /// Case-insensitive search over name and token symbols
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort key (descending): apr | tvl | volume
        #[arg(long, default_value = "apr")]
        sort: String,
    },
    /// Show one pool, optionally with a deposit preview
    Show {
        /// Pool id (e.g. sol-usdc)
        pool_id: String,

        /// Deposit amount in USD to preview
        #[arg(short, long)]
        deposit: Option<f64>,
    },
    /// Open positions and portfolio summary
    Portfolio,
    /// Closed positions
    History,
    /// Submit a simulated deposit
    Deposit {
        /// Pool id
        pool_id: String,

        /// Amount in USD
        amount: f64,
    },
    /// Submit a simulated withdrawal
    Withdraw {
        /// Position id (UUID, shown by `portfolio`)
        position_id: String,

        /// Percentage of the position to withdraw, in [0, 100]
        percentage: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = MarketStore::load(&FixtureProvider::new()).await?;

    match &cli.command {
        Commands::Pools {
            risk,
            apr,
            search,
            sort,
        } => {
            let mut filter = PoolFilter::new()
                .with_search(search.clone())
                .with_sort(sort.parse::<SortKey>().map_err(anyhow::Error::msg)?);
            if let Some(risk) = risk {
                filter = filter.with_risk(risk.parse::<RiskLevel>().map_err(anyhow::Error::msg)?);
            }
            if let Some(apr) = apr {
                filter = filter.with_apr_bucket(apr.parse::<AprBucket>().map_err(anyhow::Error::msg)?);
            }
            render_pools(&store, &filter);
        }
        Commands::Show { pool_id, deposit } => {
            render_pool_detail(&store, pool_id, *deposit)?;
        }
        Commands::Portfolio => render_portfolio(&store),
        Commands::History => render_history(&store),
        Commands::Deposit { pool_id, amount } => {
            let request = TransactionRequest::Deposit {
                pool_id: pool_id.clone(),
                amount_usd: decimal_arg(*amount)?,
            };
            submit(&store, request).await?;
        }
        Commands::Withdraw {
            position_id,
            percentage,
        } => {
            let request = TransactionRequest::Withdraw {
                position_id: PositionId(Uuid::parse_str(position_id)?),
                percentage: decimal_arg(*percentage)?,
            };
            submit(&store, request).await?;
        }
    }

    Ok(())
}

fn decimal_arg(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| anyhow::anyhow!("not a finite number: {value}"))
}

fn render_pools(store: &MarketStore, filter: &PoolFilter) {
    let thresholds = Thresholds::default();
    let pools = store.pools().screen(filter);
    if pools.is_empty() {
        println!("🔍 no pools match the current filters");
        return;
    }

    println!(
        "{:<10} | {:<10} | {:>14} | {:>8} | {:>14} | {:<6} | {:<6}",
        "ID", "PAIR", "TVL", "APR", "24H VOL", "RISK", "HEALTH"
    );
    for pool in &pools {
        let health = match pool.health_pct {
            Some(pct) => health_status(pct, &thresholds).to_string(),
            None => "-".to_string(),
        };
        println!(
            "{:<10} | {:<10} | {:>14} | {:>7}% | {:>14} | {:<6} | {:<6}",
            pool.id,
            pool.pair_label(),
            fmt_usd(pool.tvl_usd),
            pool.apr_pct,
            fmt_usd(pool.volume_24h_usd),
            pool.risk,
            health
        );
    }
    println!("✅ {} pool(s)", pools.len());
}

fn render_pool_detail(store: &MarketStore, pool_id: &str, deposit_amount: Option<f64>) -> Result<()> {
    let pools = store.pools();
    let pool = pools.get(pool_id)?;

    println!("Pool        {}  ({})", pool.name, pool.id);
    println!("Pair        {}", pool.pair_label());
    println!("TVL         {}", fmt_usd(pool.tvl_usd));
    println!("APR         {}%", pool.apr_pct);
    println!("24h volume  {}", fmt_usd(pool.volume_24h_usd));
    println!("7d volume   {}", fmt_usd(pool.volume_7d_usd));
    println!("Risk        {}", pool.risk);
    println!("24h fees    {}", fmt_opt_usd(pool.fees_24h_usd));
    println!("Utilization {}", fmt_opt_pct(pool.utilization_pct));
    println!("Health      {}", fmt_opt_pct(pool.health_pct));

    if let Some(amount) = deposit_amount {
        let amount = decimal_arg(amount)?;
        let est = deposit::estimate_deposit(pool, amount);
        println!();
        println!("Deposit preview for {}:", fmt_usd(amount));
        println!(
            "  Token split   {} {} + {} {}",
            est.token_a_amount.round_dp(6),
            pool.token_a.symbol,
            est.token_b_amount.round_dp(6),
            pool.token_b.symbol
        );
        println!("  Daily yield   {}", fmt_usd(est.daily_yield_usd));
        println!("  Yearly yield  {}", fmt_usd(est.yearly_yield_usd));
        println!("  Est. APR      {}%", est.apr_pct.round_dp(2));
    }
    Ok(())
}

fn render_portfolio(store: &MarketStore) {
    let positions = store.positions();
    let summary = positions.summary();

    println!(
        "💼 {} open position(s) | invested {} | value {} | P&L {} ({}%)",
        summary.open_positions,
        fmt_usd(summary.total_invested_usd),
        fmt_usd(summary.total_value_usd),
        fmt_usd(summary.total_pnl_usd),
        summary.pnl_pct.round_dp(2)
    );
    println!(
        "{:<36} | {:<10} | {:>12} | {:>12} | {:>8} | {:>8} | {:>7}",
        "POSITION", "PAIR", "VALUE", "P&L", "P&L %", "24H %", "SHARE"
    );
    for position in positions.open() {
        let (pair, share) = match positions.pool_for(position) {
            Some(pool) => (
                pool.pair_label(),
                format!(
                    "{}%",
                    pnl::pool_share_pct(position.current_value_usd, pool.tvl_usd).round_dp(3)
                ),
            ),
            None => ("unknown".to_string(), "-".to_string()),
        };
        let change_24h = position
            .change_24h_pct()
            .map_or_else(|| "-".to_string(), |pct| format!("{}%", pct.round_dp(2)));
        println!(
            "{:<36} | {:<10} | {:>12} | {:>12} | {:>7}% | {:>8} | {:>7}",
            position.id,
            pair,
            fmt_usd(position.current_value_usd),
            fmt_usd(position.pnl_usd),
            position.pnl_pct().round_dp(2),
            change_24h,
            share
        );
    }
}

fn render_history(store: &MarketStore) {
    let positions = store.positions();
    println!(
        "{:<36} | {:<10} | {:>12} | {:>12} | {:>8} | {:<10} | {:<10}",
        "POSITION", "POOL", "INVESTED", "EXIT", "P&L %", "OPENED", "CLOSED"
    );
    for closed in positions.closed() {
        println!(
            "{:<36} | {:<10} | {:>12} | {:>12} | {:>7}% | {:<10} | {:<10}",
            closed.id,
            closed.pool_id,
            fmt_usd(closed.amount_invested_usd),
            fmt_usd(closed.exit_value_usd),
            closed.pnl_pct().round_dp(2),
            closed.opened_at.format("%Y-%m-%d"),
            closed.closed_at.format("%Y-%m-%d")
        );
    }
}

async fn submit(store: &MarketStore, request: TransactionRequest) -> Result<()> {
    let simulator = TransactionSimulator::new(store.clone(), ExecutorConfig::default());
    println!("📡 submitting transaction...");
    let receipt = simulator.submit(request).await?;

    match &receipt.outcome {
        TransactionOutcome::Deposited(est) => {
            println!("✅ deposit confirmed ({})", receipt.id);
            println!("  Daily yield   {}", fmt_usd(est.daily_yield_usd));
            println!("  Yearly yield  {}", fmt_usd(est.yearly_yield_usd));
            println!("  Est. APR      {}%", est.apr_pct.round_dp(2));
        }
        TransactionOutcome::Withdrawn(est) => {
            println!("✅ withdrawal confirmed ({})", receipt.id);
            println!("  Amount        {}", fmt_usd(est.amount_usd));
            println!("  Realized P&L  {}", fmt_usd(est.pnl_usd));
        }
    }
    Ok(())
}

fn fmt_usd(value: Decimal) -> String {
    format!("${}", value.round_dp(2))
}

fn fmt_opt_usd(value: Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_string(), fmt_usd)
}

fn fmt_opt_pct(value: Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_string(), |pct| format!("{pct}%"))
}
