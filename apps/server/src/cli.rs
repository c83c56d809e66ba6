use clap::{ArgAction, Args, Parser, Subcommand};
use search_core::Language;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the ROI calculator and content search over a unix socket
    Serve,
    /// Compute the return on a rental property
    Roi(RoiArgs),
    /// Search the site content
    Search {
        /// 搜索关键词（忽略大小写的子串匹配）
        query: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// List every item in the content corpus
    Corpus {
        /// Display language: en or zh
        #[arg(short, long)]
        lang: Option<Language>,
    },
}

/// Calculator fields are free text; anything that is not a number counts as 0
#[derive(Args, Debug)]
pub struct RoiArgs {
    /// Purchase price, e.g. 750000 or "$750,000"
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub purchase_price: String,

    /// Cash down payment
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub down_payment: String,

    /// Expected monthly rent
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub monthly_rent: String,

    /// Monthly operating expenses (tax, insurance, HOA, maintenance)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub monthly_expenses: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Display language: en or zh (defaults to the configured language)
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// Print machine readable JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
