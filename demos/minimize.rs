use clap::Parser;

use kmap_rs::kmap::KMap;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Minterms (truth-table rows where the function is 1).
    #[arg(value_name = "INT")]
    minterms: Vec<u32>,

    /// Comma-separated variable names, most significant first (2 to 4 single characters).
    #[clap(short, long, value_name = "CHAR,...", value_delimiter = ',', default_value = "A,B,C,D")]
    variables: Vec<String>,

    /// Log the group search.
    #[clap(long)]
    debug: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let kmap = KMap::new(&args.minterms, args.variables.as_slice())?;
    let shape = kmap.shape();
    println!("map ({}):", shape);
    for row in 0..shape.height() {
        let cells: Vec<String> = (0..shape.width())
            .map(|col| {
                let label = kmap.label(row, col);
                let value = kmap.value(row, col) as u8;
                format!("{:0width$b}={}", label, value, width = kmap.variables().len())
            })
            .collect();
        println!("  {}", cells.join("  "));
    }

    let cover = kmap.cover();
    println!("groups:");
    for group in &cover {
        println!("  {} ({} cells)", group.region(), group.len());
    }

    println!("f = {}", kmap.minimize());

    Ok(())
}
