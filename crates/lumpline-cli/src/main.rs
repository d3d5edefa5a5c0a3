//! Lumpline command-line interface.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use lumpline_core::{
    DiscretizationPlan, LadderTopology, LineGeometry, LineParameters, Netlist, NodeId,
    SectionParameters, parse_value,
};

#[derive(Parser)]
#[command(name = "lumpline")]
#[command(about = "Lumped netlist synthesis for coupled lossy interconnects", long_about = None)]
#[command(version)]
struct Cli {
    /// Line parameter file
    #[arg(value_name = "PARAMS")]
    params: PathBuf,

    /// First node number of the generated ladder (0 is ground)
    #[arg(value_name = "START_NODE")]
    start_node: u32,

    /// Line length in meters; engineering suffixes allowed (e.g. 500m)
    #[arg(value_name = "LENGTH")]
    length: String,

    /// Signal rise time in seconds; engineering suffixes allowed (e.g. 100n)
    #[arg(value_name = "RISE_TIME")]
    rise_time: String,

    /// Output netlist file
    #[arg(short, long, default_value = "interconnect")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.start_node == 0 {
        bail!("start node must be at least 1; node 0 is ground");
    }
    let length =
        parse_value(&cli.length).map_err(|e| anyhow::anyhow!("bad length argument: {}", e))?;
    let rise_time =
        parse_value(&cli.rise_time).map_err(|e| anyhow::anyhow!("bad rise time argument: {}", e))?;
    let geometry = LineGeometry::new(length, rise_time)?;

    println!("Reading parameters from {}", cli.params.display());
    let params = LineParameters::load(&cli.params)
        .with_context(|| format!("failed to load {}", cli.params.display()))?;

    if cli.verbose {
        println!("Line length: {} m", geometry.length);
        println!("Rise time: {} s", geometry.rise_time);
        println!("Series resistance: {} ohm/m", params.resistance);
        println!("Ground conductance: {} S/m", params.conductance);
    }

    let plan = DiscretizationPlan::estimate(&params, &geometry)?;
    println!(
        "Constructing {} interconnects of {} sections",
        params.num_conductors, plan.num_sections
    );

    let section = SectionParameters::derive(&params, &geometry, plan);
    let topology = LadderTopology::build(
        params.num_conductors,
        plan.num_sections,
        NodeId::new(cli.start_node),
    );
    let netlist = Netlist::synthesize(&section, &topology);

    let counts = netlist.counts();
    println!(
        "Elements: {} resistors, {} capacitors, {} inductors, {} coupling sources",
        counts.resistors, counts.capacitors, counts.inductors, counts.coupling_sources
    );

    fs::write(&cli.output, netlist.to_string())
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("Wrote {}", cli.output.display());
    println!("Done!");
    Ok(())
}
