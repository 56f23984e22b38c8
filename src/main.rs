#[macro_use]
extern crate lazy_static;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use pico_args::Arguments;
use tracing::info;

use config::{BakeConfig, Invocation, HELP};
use encode::decomposition::Decompositions;
use encode::properties::PropertyStreams;
use encode::scripts::ScriptOrder;
use output::Artifact;
use tables::profile::pack_profiles;
use ucd::Repertoire;

mod common;
mod config;
mod encode;
mod error;
mod filter;
mod macros;
mod output;
mod stats;
mod tables;
mod ucd;

#[cfg(test)]
mod fixtures;

fn main() -> anyhow::Result<ExitCode>
{
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = match Invocation::parse(Arguments::from_env()) {
        Invocation::Bake(config) => config,
        Invocation::Help => {
            eprint!("{HELP}");
            return Ok(ExitCode::SUCCESS);
        }
        Invocation::Usage => {
            eprint!("{HELP}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let artifact = bake(&config)?;

    io::stdout()
        .lock()
        .write_all(artifact.as_bytes())
        .context("writing tables to stdout")?;

    info!("Done.");

    Ok(ExitCode::SUCCESS)
}

/// весь файл с таблицами; ничего не пишется, пока все шаги не выполнены
fn bake(config: &BakeConfig) -> anyhow::Result<String>
{
    info!("Loading UCDXML...");

    let repertoire = Repertoire::load(&config.ucd)
        .with_context(|| format!("loading {}", config.ucd.display()))?;

    let scripts = ScriptOrder::load(&config.declarations)
        .with_context(|| format!("reading script declarations from {}", config.declarations.display()))?;

    info!("{} script declarations", scripts.len());
    info!("Preparing data tables...");

    let decompositions = Decompositions::build(&repertoire.records)?;
    decompositions.stats.log("Decompositions");

    let streams = PropertyStreams::extract(&repertoire.records, &scripts, &decompositions)?;

    info!("Generating output...");

    let profiles = pack_profiles(&streams);

    for tables in &profiles {
        info!("  {:?}: {} bytes", tables.profile, tables.size());
    }

    let artifact = Artifact {
        invocation: &config.invocation(),
        description: &repertoire.description,
        scripts: &scripts,
        decompositions: &decompositions,
        profiles: &profiles,
    };

    Ok(artifact.render()?)
}
