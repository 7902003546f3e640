use crate::prelude::*;
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Cost settings for the uniform cost model.
#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[clap(next_help_heading = "Costs")]
pub struct CostArgs {
    /// Cost of a match.
    #[clap(long = "match", default_value_t = 0., display_order = 10)]
    pub match_cost: Cost,

    /// Cost of a substitution.
    #[clap(long = "sub", default_value_t = 1., display_order = 10)]
    pub sub: Cost,

    /// Cost of an insertion.
    #[clap(long, default_value_t = 1., display_order = 10)]
    pub ins: Cost,

    /// Cost of a deletion.
    #[clap(long, default_value_t = 1., display_order = 10)]
    pub del: Cost,

    /// Use QWERTY key distances for substitutions.
    #[clap(long, conflicts_with_all = ["match_cost", "sub"], display_order = 11)]
    pub keyboard: bool,
}

impl CostArgs {
    pub fn uniform(&self) -> UniformCost {
        UniformCost::new(self.match_cost, self.sub, self.ins, self.del)
    }

    /// The generic cost model to align with.
    pub fn generic(&self) -> GenericCost {
        if self.keyboard {
            let mut cm = GenericCost::keyboard();
            cm.default.ins = self.ins;
            cm.default.del = self.del;
            cm
        } else {
            GenericCost::new(self.uniform())
        }
    }
}

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(author, about)]
pub struct Cli {
    /// The first string.
    pub a: String,

    /// The second string.
    pub b: String,

    #[clap(flatten)]
    pub costs: CostArgs,

    /// Also compute the normalized edit distance.
    #[clap(short, long, conflicts_with = "keyboard")]
    pub normalized: bool,

    /// Print the alignment.
    #[clap(short, long)]
    pub alignment: bool,

    /// Print the result as JSON.
    #[clap(long)]
    pub json: bool,
}

/// The result of running the cli on one pair.
#[derive(Debug, Serialize)]
pub struct Output {
    pub distance: Cost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cigar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl Cli {
    pub fn run(&self) -> Result<Output> {
        let cm = self.costs.uniform();
        cm.validate()?;
        let (a, b) = (to_sequence(&self.a), to_sequence(&self.b));

        let nw = NW::new(self.costs.generic());
        let (distance, alignment) = if self.alignment {
            let (cost, alignment) = nw.align(&a, &b);
            (cost, Some(alignment))
        } else {
            (nw.cost(&a, &b), None)
        };
        log::info!("distance {distance}");

        let normalized = if self.normalized {
            Some(Normalizer::default().distance(&a, &b, &cm)?)
        } else {
            None
        };

        Ok(Output {
            distance,
            normalized,
            cigar: alignment.as_ref().map(Alignment::to_cigar),
            alignment,
        })
    }
}

impl Output {
    pub fn print(&self) {
        println!("distance   {}", self.distance);
        if let Some(normalized) = self.normalized {
            println!("normalized {normalized}");
        }
        if let (Some(cigar), Some(alignment)) = (&self.cigar, &self.alignment) {
            println!("cigar      {cigar}");
            println!("{alignment}");
        }
    }
}
