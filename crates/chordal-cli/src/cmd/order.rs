//! `chordal order` — print the MCS ranking of a graph file.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use chordal_core::{Algorithm, McsOrdering, elimination_parents, is_perfect_elimination_ordering};
use chordal_data::{InputFormat, load_path};
use clap::Args;
use serde::Serialize;

use super::{Context, Outcome, join};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `chordal order`.
#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Graph file: edge list text or JSON.
    pub file: PathBuf,

    /// Input format; inferred from the extension when omitted.
    #[arg(long, value_name = "edges|json")]
    pub input: Option<InputFormat>,
}

#[derive(Debug, Serialize)]
struct OrderOutput {
    source: String,
    algorithm: String,
    /// `rank[v]` in `1..=n`.
    rank: Vec<usize>,
    /// Vertices by increasing rank.
    order: Vec<usize>,
    /// Lowest-ranked later neighbour of each vertex.
    parent: Vec<Option<usize>>,
    perfect: bool,
}

fn parent_label(parent: Option<usize>) -> String {
    parent.map_or_else(|| "-".to_string(), |p| p.to_string())
}

fn render_order_text(out: &OrderOutput, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "rank: {}", join(&out.rank))?;
    writeln!(w, "order: {}", join(&out.order))?;
    let parents: Vec<String> = out.parent.iter().copied().map(parent_label).collect();
    writeln!(w, "parent: {}", parents.join(" "))?;
    writeln!(w, "perfect: {}", out.perfect)
}

fn render_order_pretty(out: &OrderOutput, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &format!("Ordering: {}", out.source))?;
    pretty_kv(w, "Algorithm", &out.algorithm)?;
    pretty_kv(w, "Perfect", if out.perfect { "yes" } else { "no" })?;
    writeln!(w)?;
    writeln!(w, "{:>8} {:>6} {:>8}", "vertex", "rank", "parent")?;
    for (v, (rank, parent)) in out.rank.iter().zip(&out.parent).enumerate() {
        writeln!(w, "{v:>8} {rank:>6} {:>8}", parent_label(*parent))?;
    }
    Ok(())
}

/// Execute `chordal order`.
pub fn run_order(args: &OrderArgs, ctx: &Context) -> anyhow::Result<Outcome> {
    let graph = load_path(&args.file, args.input)
        .with_context(|| format!("loading {}", args.file.display()))?;
    let ordering = McsOrdering {
        strategy: ctx.chordality.strategy,
    };
    let ranking = ordering.run(&graph);
    let payload = OrderOutput {
        source: args.file.display().to_string(),
        algorithm: ordering.display().to_string(),
        rank: ranking.ranks().to_vec(),
        order: ranking.elimination_order().to_vec(),
        parent: elimination_parents(&graph, &ranking),
        perfect: is_perfect_elimination_ordering(&graph, &ranking),
    };
    render_mode(ctx.mode, &payload, render_order_text, render_order_pretty)?;
    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_output() -> OrderOutput {
        OrderOutput {
            source: "path.txt".to_string(),
            algorithm: "McsOrdering(strategy='bucketed')".to_string(),
            rank: vec![3, 2, 1],
            order: vec![2, 1, 0],
            parent: vec![None, Some(0), Some(1)],
            perfect: true,
        }
    }

    #[test]
    fn text_lists_rank_order_and_parents() {
        let mut buf = Vec::new();
        render_order_text(&path_output(), &mut buf).expect("render");
        let rendered = String::from_utf8(buf).expect("utf8");
        assert_eq!(
            rendered,
            "rank: 3 2 1\norder: 2 1 0\nparent: - 0 1\nperfect: true\n"
        );
    }

    #[test]
    fn pretty_has_one_row_per_vertex() {
        let mut buf = Vec::new();
        render_order_pretty(&path_output(), &mut buf).expect("render");
        let rendered = String::from_utf8(buf).expect("utf8");
        assert!(rendered.contains("Ordering: path.txt"));
        assert!(rendered.contains("Perfect:"));
        let rows = rendered
            .lines()
            .skip_while(|line| !line.contains("vertex"))
            .skip(1)
            .count();
        assert_eq!(rows, 3);
    }
}
