//! `chordal dataset` and `chordal datasets` — built-in graphs.

use std::io::{self, Write};

use chordal_core::ErrorCode;
use chordal_data::Dataset;
use clap::Args;
use serde::Serialize;

use super::check::{VerdictOutput, render_verdict_pretty, render_verdict_text};
use super::{CodedError, Context, Outcome};
use crate::output::{pretty_section, render_mode};

/// Arguments for `chordal dataset`.
#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Dataset name; sized datasets accept `name:n` (e.g. `cycle:6`, n at most 4096).
    pub name: String,

    /// Also print the elimination order.
    #[arg(long)]
    pub order: bool,
}

#[derive(Debug, Serialize)]
struct DatasetEntry {
    name: &'static str,
    description: &'static str,
    vertices: usize,
    edges: usize,
}

#[derive(Debug, Serialize)]
struct DatasetsOutput {
    datasets: Vec<DatasetEntry>,
}

fn catalogue() -> DatasetsOutput {
    let datasets = Dataset::ALL
        .iter()
        .map(|dataset| {
            let graph = dataset.graph();
            DatasetEntry {
                name: dataset.name(),
                description: dataset.description(),
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
            }
        })
        .collect();
    DatasetsOutput { datasets }
}

fn render_datasets_text(out: &DatasetsOutput, w: &mut dyn Write) -> io::Result<()> {
    for entry in &out.datasets {
        writeln!(w, "{}\t{}\t{}", entry.name, entry.vertices, entry.edges)?;
    }
    Ok(())
}

fn render_datasets_pretty(out: &DatasetsOutput, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &format!("Datasets ({})", out.datasets.len()))?;
    for entry in &out.datasets {
        writeln!(
            w,
            "{:<12} {:>4}v {:>4}e  {}",
            entry.name, entry.vertices, entry.edges, entry.description
        )?;
    }
    Ok(())
}

/// Execute `chordal dataset`.
pub fn run_dataset(args: &DatasetArgs, ctx: &Context) -> anyhow::Result<Outcome> {
    let dataset: Dataset = args
        .name
        .parse()
        .map_err(|message: String| CodedError::new(ErrorCode::UnknownDataset, message))?;
    let graph = dataset.graph();
    let payload = VerdictOutput::compute(dataset.to_string(), &graph, ctx, args.order);
    render_mode(ctx.mode, &payload, render_verdict_text, render_verdict_pretty)?;
    Ok(payload.outcome())
}

/// Execute `chordal datasets`.
pub fn run_datasets(ctx: &Context) -> anyhow::Result<Outcome> {
    let payload = catalogue();
    render_mode(ctx.mode, &payload, render_datasets_text, render_datasets_pretty)?;
    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_covers_every_dataset() {
        let out = catalogue();
        assert_eq!(out.datasets.len(), Dataset::ALL.len());
        let karate = out
            .datasets
            .iter()
            .find(|entry| entry.name == "karate-club")
            .expect("karate club listed");
        assert_eq!((karate.vertices, karate.edges), (34, 78));
    }

    #[test]
    fn text_is_tab_separated() {
        let mut buf = Vec::new();
        render_datasets_text(&catalogue(), &mut buf).expect("render");
        let rendered = String::from_utf8(buf).expect("utf8");
        assert!(rendered.lines().any(|line| line == "house\t5\t6"));
        assert!(rendered.lines().all(|line| line.split('\t').count() == 3));
    }

    #[test]
    fn pretty_shows_descriptions() {
        let mut buf = Vec::new();
        render_datasets_pretty(&catalogue(), &mut buf).expect("render");
        let rendered = String::from_utf8(buf).expect("utf8");
        assert!(rendered.starts_with("Datasets (7)"));
        assert!(rendered.contains("two triangles sharing one vertex"));
    }
}
