use crate::args::{OutputFormat, SearchArgs};
use anyhow::Context;
use blogsearch_core::types::AppConfig;
use blogsearch_core::{PostCatalog, PostMeta, StructuredData};
use blogsearch_search::{SearchConfig, SearchEngine, render_html, render_text};
use std::io::{self, BufRead, Write};
use std::path::Path;

pub fn search(args: SearchArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let catalog = PostCatalog::load(&args.posts)
        .with_context(|| format!("failed to load posts from {}", args.posts.display()))?;

    let search_config = SearchConfig::from(&config.search);
    let mut engine = SearchEngine::new(catalog.into_entries(), search_config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.queries.is_empty() {
        let stdin = io::stdin();
        run_queries(&mut engine, stdin.lock().lines(), args.format, &mut out)
    } else {
        let queries = args.queries.into_iter().map(Ok);
        run_queries(&mut engine, queries, args.format, &mut out)
    }
}

/// Feeds each query to the engine as one input event and writes the
/// rendered state. Idle states write nothing.
pub(crate) fn run_queries<I, W>(
    engine: &mut SearchEngine,
    queries: I,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    for query in queries {
        let query = query.context("failed to read query")?;
        engine.set_query(query);

        let state = engine.display_state();
        let rendered = match format {
            OutputFormat::Text => render_text(&state),
            OutputFormat::Html => render_html(&state),
        };
        if !rendered.is_empty() {
            writeln!(out, "{rendered}")?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn json_ld_website(config: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config)?;
    println!("{}", StructuredData::website(&config.site).to_script_tag());
    Ok(())
}

pub fn json_ld_post(pathname: &str, meta: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(meta)
        .with_context(|| format!("failed to read {}", meta.display()))?;
    let post: PostMeta = serde_json::from_str(&content)
        .with_context(|| format!("invalid post metadata in {}", meta.display()))?;

    let data = StructuredData::Post {
        pathname: pathname.to_string(),
        post,
    };
    println!("{}", data.to_script_tag());
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let config = AppConfig::load(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(config);
    }

    for error in &errors {
        log::warn!("{}: {error}", path.display());
    }
    Ok(config.with_defaults_for_invalid())
}

#[cfg(test)]
mod tests;
