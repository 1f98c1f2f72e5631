//! `mts-view`: inspect and flip the persisted dashboard theme from a terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use etf_mts_view::{
    format_currency, format_number, format_percent, use_theme, FileStorage, OutputMode,
    ThemeProvider, ThemeScope, ThemeStore, ToggleGroup, ToggleItem, ToggleSize, ToggleVariant,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mts-view", version, about = "ETF MTS dashboard view helpers")]
struct Cli {
    /// Preferences file (defaults to the per-user data directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Output styling
    #[arg(long, value_enum, default_value_t = Output::Auto, global = true)]
    output: Output,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Auto,
    Term,
    Text,
}

impl From<Output> for OutputMode {
    fn from(output: Output) -> Self {
        match output {
            Output::Auto => OutputMode::Auto,
            Output::Term => OutputMode::Term,
            Output::Text => OutputMode::Text,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the active theme
    Theme,
    /// Flip between dark and light and persist the result
    Toggle,
    /// Format a number the way the dashboard does
    Fmt {
        #[command(subcommand)]
        kind: FmtKind,
    },
    /// Render a sample period selector in the active theme
    Group {
        #[arg(long, default_value = "default")]
        variant: ToggleVariant,
        #[arg(long, default_value = "default")]
        size: ToggleSize,
        /// Item to show pressed
        #[arg(long, default_value = "1y")]
        pressed: String,
    },
}

#[derive(Subcommand)]
enum FmtKind {
    Number {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    Percent {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[arg(long, default_value_t = 2)]
        decimals: usize,
    },
    Currency {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = OutputMode::from(cli.output);

    match cli.command {
        Command::Fmt { kind } => {
            let text = match kind {
                FmtKind::Number { value } => format_number(value),
                FmtKind::Percent { value, decimals } => format_percent(value, decimals),
                FmtKind::Currency { value } => format_currency(value),
            };
            println!("{text}");
        }
        Command::Theme => {
            let _scope = provide_store(cli.store)?;
            println!("{}", use_theme()?.preference());
        }
        Command::Toggle => {
            let _scope = provide_store(cli.store)?;
            let theme = use_theme()?;
            theme.subscribe(|pref| println!("{pref}"));
            theme.toggle();
        }
        Command::Group {
            variant,
            size,
            pressed,
        } => {
            let _scope = provide_store(cli.store)?;
            let mut group = ToggleGroup::single()
                .variant(variant)
                .size(size)
                .item(ToggleItem::new("1m", "1M"))
                .item(ToggleItem::new("3m", "3M"))
                .item(ToggleItem::new("1y", "1Y"))
                .item(ToggleItem::new("ytd", "YTD"));
            group.press(&pressed);
            println!("{}", group.render(use_theme()?.preference(), mode)?);
        }
    }
    Ok(())
}

/// Opens the persisted store and provides it for the rest of the command.
fn provide_store(path: Option<PathBuf>) -> Result<ThemeScope> {
    let storage = match path {
        Some(path) => FileStorage::new(path),
        None => FileStorage::default_location()
            .context("no home directory; pass --store <path>")?,
    };
    tracing::debug!(path = %storage.path().display(), "using preferences file");
    Ok(ThemeProvider::provide(
        ThemeStore::builder().storage(storage).open(),
    ))
}
