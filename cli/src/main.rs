mod commands;
mod terminal;

use std::io;

use commands::{CommandLine, Commands, campus, describe, fleet, grades, library, personnel};
use terminal::logging;
use terminal::print;
use terminal::prompt::Prompt;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init(cfg.quiet)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print::banner(&mut stdout, cfg.no_banner, cfg.quiet)?;

    match commands.command {
        Commands::Library { .. } => {
            let mut prompt = Prompt::new(stdin.lock(), stdout.lock());
            library::library(&cfg, &mut prompt)
        }
        Commands::Grades => {
            let mut prompt = Prompt::new(stdin.lock(), stdout.lock());
            grades::grades(&cfg, &mut prompt)
        }
        Commands::Campus { file } => campus::campus(&file, &cfg, &mut stdout),
        Commands::Personnel => personnel::personnel(&cfg, &mut stdout),
        Commands::Fleet { car, motorcycle, truck } => {
            let mileages = fleet::Mileages { car, motorcycle, truck };
            fleet::fleet(&mileages, &cfg, &mut stdout)
        }
        Commands::Describe { id, reverse, bases_only } => {
            let opts = describe::ChainOptions { id, reverse, bases_only };
            describe::describe(&opts, &cfg, &mut stdout)
        }
    }
}
