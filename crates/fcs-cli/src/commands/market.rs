use crate::commands::{client, print_response};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use fcs_client::{HistoryQuery, Market, MarketEndpoints, Period};

#[derive(Args, Debug)]
pub struct LatestArgs {
  /// forex, crypto or stock
  pub market: Market,

  /// Symbol, or several separated by commas
  pub symbol: String,

  /// Restrict to one exchange or liquidity provider
  #[arg(short, long)]
  pub exchange: Option<String>,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
  /// forex, crypto or stock
  pub market: Market,

  pub symbol: String,

  /// Candle period (1m, 5m, 15m, 30m, 1h, 2h, 4h, 5h, 1d, 1w, 1month)
  #[arg(short, long, default_value = "1d")]
  pub period: Period,

  /// Number of candles
  #[arg(short, long)]
  pub length: Option<u32>,

  /// Start date (YYYY-MM-DD)
  #[arg(long)]
  pub from: Option<String>,

  /// End date (YYYY-MM-DD)
  #[arg(long)]
  pub to: Option<String>,

  #[arg(long)]
  pub page: Option<u32>,
}

impl HistoryArgs {
  fn query(&self) -> HistoryQuery {
    HistoryQuery {
      period: self.period,
      length: self.length,
      from: self.from.clone(),
      to: self.to.clone(),
      page: self.page,
      is_chart: None,
    }
  }
}

pub async fn latest(args: LatestArgs, config: Config) -> Result<()> {
  let client = client(&config)?;
  let exchange = args.exchange.as_deref();

  let response = match args.market {
    Market::Forex => client.forex().latest(&args.symbol, exchange).await,
    Market::Crypto => client.crypto().latest(&args.symbol, exchange).await,
    Market::Stock => client.stock().latest(&args.symbol, exchange).await,
  };

  print_response(&response?, &config)
}

pub async fn history(args: HistoryArgs, config: Config) -> Result<()> {
  let client = client(&config)?;
  let query = args.query();

  let response = match args.market {
    Market::Forex => client.forex().history(&args.symbol, &query).await,
    Market::Crypto => client.crypto().history(&args.symbol, &query).await,
    Market::Stock => client.stock().history(&args.symbol, &query).await,
  };

  print_response(&response?, &config)
}
