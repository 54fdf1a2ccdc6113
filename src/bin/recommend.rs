use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use qualiscout::config::{api_key_from_env, load_or_default};
use qualiscout::{
    run_recommendation, CatalogStore, ChatSynthesizer, CrossrefClient, RecommendationRequest,
};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse()?;

    let config = load_or_default(&args.config)?;
    let store = CatalogStore::new(&config.catalog.path);
    let literature = CrossrefClient::new(&config.literature)?;
    let synthesizer = ChatSynthesizer::new(&config.synthesis, api_key_from_env())?;

    let request = RecommendationRequest {
        area: args.area,
        sub_topic: args.sub_topic,
        keywords: args.keywords,
        result_count: args.result_count,
    };
    let outcome = run_recommendation(&store, &literature, &synthesizer, &config.literature, &request)?;

    for warning in &outcome.warnings {
        eprintln!("warning: {}", warning.message);
    }
    println!("{}", outcome.report);
    Ok(())
}

struct CliArgs {
    config: PathBuf,
    area: String,
    sub_topic: Option<String>,
    keywords: Option<String>,
    result_count: Option<usize>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut config = PathBuf::from("qualiscout.toml");
        let mut area = None;
        let mut sub_topic = None;
        let mut keywords = None;
        let mut result_count = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args.next().context("Expected a path after --config")?;
                    config = PathBuf::from(value);
                }
                "--area" => {
                    area = Some(args.next().context("Expected a value after --area")?);
                }
                "--sub-topic" => {
                    sub_topic = Some(args.next().context("Expected a value after --sub-topic")?);
                }
                "--keywords" => {
                    keywords = Some(args.next().context("Expected a value after --keywords")?);
                }
                "--results" => {
                    let value = args.next().context("Expected a number after --results")?;
                    result_count = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid result count '{value}'"))?,
                    );
                }
                other => anyhow::bail!("Unknown argument '{other}'"),
            }
        }
        Ok(Self {
            config,
            area: area.context("Missing required --area argument")?,
            sub_topic,
            keywords,
            result_count,
        })
    }
}
