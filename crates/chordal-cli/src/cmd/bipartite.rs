//! `chordal bipartite` — chordality of a row/column relation's block graph.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use chordal_core::{Algorithm, BiChordalityReport, Bipartite, ChordalityTest, RowCol, Side};
use chordal_data::{InputFormat, load_bipartite_path};
use clap::Args;
use serde::Serialize;

use super::{Context, Outcome, join};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `chordal bipartite`.
#[derive(Args, Debug)]
pub struct BipartiteArgs {
    /// Biadjacency file: `shape r c` edge list text or JSON.
    pub file: PathBuf,

    /// Input format; inferred from the extension when omitted.
    #[arg(long, value_name = "edges|json")]
    pub input: Option<InputFormat>,

    /// Also print the row and column ranks.
    #[arg(long)]
    pub order: bool,
}

#[derive(Debug, Serialize)]
struct BipartiteOutput {
    source: String,
    algorithm: String,
    rows: usize,
    cols: usize,
    edges: usize,
    #[serde(flatten)]
    report: BiChordalityReport,
    #[serde(skip)]
    show_ranks: bool,
}

fn side_label(side: Side) -> String {
    match side {
        Side::Row(r) => format!("r{r}"),
        Side::Col(c) => format!("c{c}"),
    }
}

fn render_ranks(rank: &RowCol<Vec<usize>>, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "row rank: {}", join(&rank.row))?;
    writeln!(w, "col rank: {}", join(&rank.col))
}

fn render_bipartite_text(out: &BipartiteOutput, w: &mut dyn Write) -> io::Result<()> {
    let verdict = if out.report.chordal { "chordal" } else { "not chordal" };
    writeln!(w, "{}: {verdict}", out.source)?;
    if out.show_ranks {
        render_ranks(&out.report.rank, w)?;
    }
    if let Some(v) = &out.report.violation {
        writeln!(
            w,
            "witness: {} - {} - {}",
            side_label(v.unmatched),
            side_label(v.vertex),
            side_label(v.parent)
        )?;
    }
    Ok(())
}

fn render_bipartite_pretty(out: &BipartiteOutput, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &format!("Bipartite chordality: {}", out.source))?;
    pretty_kv(
        w,
        "Verdict",
        if out.report.chordal { "chordal" } else { "not chordal" },
    )?;
    pretty_kv(w, "Shape", format!("{} x {}", out.rows, out.cols))?;
    pretty_kv(w, "Edges", out.edges.to_string())?;
    pretty_kv(w, "Algorithm", &out.algorithm)?;
    if out.show_ranks {
        pretty_kv(w, "Row rank", join(&out.report.rank.row))?;
        pretty_kv(w, "Col rank", join(&out.report.rank.col))?;
    }
    if let Some(v) = &out.report.violation {
        pretty_kv(
            w,
            "Witness",
            format!(
                "{} - {} - {}",
                side_label(v.unmatched),
                side_label(v.vertex),
                side_label(v.parent)
            ),
        )?;
    }
    Ok(())
}

/// Execute `chordal bipartite`.
pub fn run_bipartite(args: &BipartiteArgs, ctx: &Context) -> anyhow::Result<Outcome> {
    let graph = load_bipartite_path(&args.file, args.input)
        .with_context(|| format!("loading {}", args.file.display()))?;
    let test = Bipartite::new(ChordalityTest::new(ctx.chordality));
    let report = test.run(&graph);
    let outcome = Outcome::from_verdict(report.chordal);
    let payload = BipartiteOutput {
        source: args.file.display().to_string(),
        algorithm: test.display().to_string(),
        rows: graph.n_row(),
        cols: graph.n_col(),
        edges: graph.edges().len(),
        report,
        show_ranks: args.order || ctx.show_order,
    };
    render_mode(ctx.mode, &payload, render_bipartite_text, render_bipartite_pretty)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chordal_core::BipartiteGraph;

    fn output_for(graph: &BipartiteGraph, show_ranks: bool) -> BipartiteOutput {
        let test = Bipartite::new(ChordalityTest::default());
        BipartiteOutput {
            source: "b.txt".to_string(),
            algorithm: test.display().to_string(),
            rows: graph.n_row(),
            cols: graph.n_col(),
            edges: graph.edges().len(),
            report: test.run(graph),
            show_ranks,
        }
    }

    #[test]
    fn complete_two_by_two_has_side_labelled_witness() {
        let graph = BipartiteGraph::new(2, 2, vec![(0, 0), (0, 1), (1, 0), (1, 1)]).expect("valid");
        let out = output_for(&graph, false);
        let mut buf = Vec::new();
        render_bipartite_text(&out, &mut buf).expect("render");
        let rendered = String::from_utf8(buf).expect("utf8");
        assert!(rendered.starts_with("b.txt: not chordal\n"));
        let witness = rendered
            .lines()
            .find_map(|line| line.strip_prefix("witness: "))
            .expect("witness line");
        assert_eq!(witness.split(" - ").count(), 3);
        assert!(witness.contains('r') && witness.contains('c'));
    }

    #[test]
    fn ranks_split_by_side() {
        let graph = BipartiteGraph::new(1, 3, vec![(0, 0), (0, 1), (0, 2)]).expect("valid");
        let out = output_for(&graph, true);
        assert!(out.report.chordal);
        assert_eq!(out.report.rank.row.len(), 1);
        assert_eq!(out.report.rank.col.len(), 3);

        let mut buf = Vec::new();
        render_bipartite_pretty(&out, &mut buf).expect("render");
        let rendered = String::from_utf8(buf).expect("utf8");
        assert!(rendered.contains("BiChordalityTest(strategy='bucketed')"));
        assert!(rendered.contains("Row rank:"));
        assert!(rendered.contains("1 x 3"));
    }

    #[test]
    fn json_flattens_report() {
        let graph = BipartiteGraph::new(1, 1, vec![(0, 0)]).expect("valid");
        let value = serde_json::to_value(output_for(&graph, false)).expect("json");
        assert_eq!(value["chordal"], true);
        assert_eq!(value["rank"]["row"].as_array().map(Vec::len), Some(1));
        assert!(value.get("show_ranks").is_none());
    }
}
