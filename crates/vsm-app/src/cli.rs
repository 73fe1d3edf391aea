use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vsm_core::QueryOptions;

#[derive(Parser, Debug)]
#[command(name = "vsm-lookup", about = "Query the Complex Portal as a VSM dictionary")]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// EBI Search endpoint, overrides config and environment
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Log request URLs and result counts
    #[arg(long, global = true)]
    pub log: bool,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List dictionary metadata
    DictInfos {
        /// Dictionary URIs to filter on
        #[arg(long = "id")]
        ids: Vec<String>,
    },
    /// Fetch entries, all of them or by URI
    Entries {
        /// Entry URIs
        #[arg(long = "id")]
        ids: Vec<String>,
        #[command(flatten)]
        query: QueryArgs,
        /// Sort key: id, dictID or str
        #[arg(long)]
        sort: Option<String>,
    },
    /// Fetch entries matching a string
    Match {
        search: String,
        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Dictionary URIs to filter on
    #[arg(long = "dict-id")]
    pub dict_ids: Vec<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub per_page: Option<i64>,
}

impl Command {
    /// Options of the query; empty filter lists are left out
    pub fn query_options(&self) -> QueryOptions {
        match self {
            Command::DictInfos { ids } => with_ids(QueryOptions::new(), ids),
            Command::Entries { ids, query, sort } => {
                let mut options = with_ids(query.to_options(), ids);
                options.sort = sort.clone();
                options
            }
            Command::Match { query, .. } => query.to_options(),
        }
    }
}

impl QueryArgs {
    fn to_options(&self) -> QueryOptions {
        let mut options = QueryOptions {
            page: self.page,
            per_page: self.per_page,
            ..Default::default()
        };
        if !self.dict_ids.is_empty() {
            options = options.with_dict_ids(self.dict_ids.iter().cloned());
        }
        options
    }
}

fn with_ids(options: QueryOptions, ids: &[String]) -> QueryOptions {
    if ids.is_empty() {
        options
    } else {
        options.with_ids(ids.iter().cloned())
    }
}
