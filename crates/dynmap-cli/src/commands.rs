use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dynmap_cli::output::render_output;
use dynmap_cli::render::restore_map;
use dynmap_cli::script::MapScript;
use dynmap_dna::RecordingRegistrar;
use tracing::{info, info_span, warn};

use crate::cli::{BuildArgs, RenderArgs};

pub fn run_build(args: &BuildArgs) -> Result<String> {
    let span = info_span!("build", script = %args.script.display());
    let _guard = span.enter();

    let source = read(&args.script)?;
    let script = MapScript::from_json(&source).context("parse map script")?;
    let registrar = RecordingRegistrar::new();
    let map = script.build(&registrar);
    let tag = map.tag(!args.no_init).context("render map")?;
    info!(map_id = %tag.id(), records = map.dna().len(), "built map");
    Ok(render_output(&tag, &registrar.calls(), args.with_scripts))
}

pub fn run_render(args: &RenderArgs) -> Result<String> {
    let span = info_span!("render", dna = %args.dna.display());
    let _guard = span.enter();

    let source = read(&args.dna)?;
    let registrar = RecordingRegistrar::new();
    let map = restore_map(&source, args.id.as_deref(), &registrar)?;
    let tag = map.tag(!args.no_init).inspect_err(|error| {
        warn!(%error, "rejected DNA document");
    })?;
    info!(map_id = %tag.id(), records = map.dna().len(), "rendered map");
    Ok(render_output(&tag, &registrar.calls(), args.with_scripts))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
