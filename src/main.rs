use clap::Parser;
use walletvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create => walletvault::cli::commands::create::execute(&cli),
        Commands::Import { ref source } => {
            walletvault::cli::commands::import_cmd::execute(&cli, source)
        }
        Commands::Show => walletvault::cli::commands::show::execute(&cli),
        Commands::Address => walletvault::cli::commands::address::execute(&cli),
        Commands::Export {
            ref format,
            ref output,
            force,
        } => walletvault::cli::commands::export::execute(&cli, format, output.as_deref(), force),
        Commands::Rotate => walletvault::cli::commands::rotate::execute(&cli),
        Commands::Completions { shell } => walletvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        walletvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
