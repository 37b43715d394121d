//! `chordal check` — decide whether a graph file is chordal.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use chordal_core::{AdjacencyGraph, Algorithm, ChordalityTest, PeoViolation};
use chordal_data::{InputFormat, load_path};
use clap::Args;
use serde::Serialize;

use super::{Context, Outcome, join};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `chordal check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Graph file: edge list text or JSON.
    pub file: PathBuf,

    /// Input format; inferred from the extension when omitted.
    #[arg(long, value_name = "edges|json")]
    pub input: Option<InputFormat>,

    /// Also print the elimination order.
    #[arg(long)]
    pub order: bool,
}

/// Verdict payload shared by `check` and `dataset`.
#[derive(Debug, Serialize)]
pub struct VerdictOutput {
    pub source: String,
    pub algorithm: String,
    pub vertices: usize,
    pub edges: usize,
    pub chordal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<PeoViolation>,
}

impl VerdictOutput {
    /// Run the chordality test on `graph` under `ctx`.
    #[must_use]
    pub fn compute(
        source: String,
        graph: &AdjacencyGraph,
        ctx: &Context,
        show_order: bool,
    ) -> Self {
        let test = ChordalityTest::new(ctx.chordality);
        let report = test.run(graph);
        Self {
            source,
            algorithm: test.display().to_string(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            chordal: report.chordal,
            order: (show_order || ctx.show_order)
                .then(|| report.ranking.elimination_order().to_vec()),
            violation: report.violation,
        }
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        Outcome::from_verdict(self.chordal)
    }
}

const fn verdict_word(chordal: bool) -> &'static str {
    if chordal { "chordal" } else { "not chordal" }
}

pub fn render_verdict_text(out: &VerdictOutput, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{}: {}", out.source, verdict_word(out.chordal))?;
    if let Some(order) = &out.order {
        writeln!(w, "order: {}", join(order))?;
    }
    if let Some(violation) = &out.violation {
        writeln!(w, "witness: {violation}")?;
    }
    Ok(())
}

pub fn render_verdict_pretty(out: &VerdictOutput, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &format!("Chordality: {}", out.source))?;
    pretty_kv(w, "Verdict", verdict_word(out.chordal))?;
    pretty_kv(w, "Vertices", out.vertices.to_string())?;
    pretty_kv(w, "Edges", out.edges.to_string())?;
    pretty_kv(w, "Algorithm", &out.algorithm)?;
    if let Some(order) = &out.order {
        pretty_kv(w, "Order", join(order))?;
    }
    if let Some(v) = &out.violation {
        pretty_kv(w, "Witness", format!("{} - {} - {}", v.unmatched, v.vertex, v.parent))?;
        writeln!(w, "  {v}")?;
    }
    Ok(())
}

/// Execute `chordal check`.
pub fn run_check(args: &CheckArgs, ctx: &Context) -> anyhow::Result<Outcome> {
    let graph = load_path(&args.file, args.input)
        .with_context(|| format!("loading {}", args.file.display()))?;
    let payload = VerdictOutput::compute(args.file.display().to_string(), &graph, ctx, args.order);
    render_mode(ctx.mode, &payload, render_verdict_text, render_verdict_pretty)?;
    Ok(payload.outcome())
}
