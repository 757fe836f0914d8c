use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "blogsearch", version, about = "Search a blog's post index")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter posts by name; each query (or stdin line) is one keystroke's worth of input.
    Search(SearchArgs),
    /// Print a JSON-LD script tag.
    JsonLd {
        #[command(subcommand)]
        kind: JsonLdKind,
    },
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Post index: a JSON array of {name, path, tag}.
    #[arg(long)]
    pub posts: PathBuf,

    /// TOML config file. Missing file means defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Queries to run in order. Reads stdin lines when empty.
    pub queries: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Debug, Subcommand)]
pub enum JsonLdKind {
    /// WebSite schema from the `[site]` config table.
    Website {
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// BlogPosting schema for one post.
    Post {
        /// Page path used as the WebPage @id.
        #[arg(long)]
        pathname: String,
        /// JSON file with title, description, image, author, pubDate.
        #[arg(long)]
        meta: PathBuf,
    },
}
