use clap::{Parser, Subcommand};
use file_entry::HashAlgorithm;
use std::path::PathBuf;

mod commands;
mod output;

use commands::CommandExecutor;

#[derive(Parser)]
#[command(
    name = "fentry",
    about = "Inspect filesystem entries: metadata, content hashes, MIME types",
    version,
    author
)]
struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print an inspection report for a path")]
    Inspect {
        #[arg(help = "Path to inspect")]
        path: PathBuf,

        #[arg(long, help = "Emit the report as JSON")]
        json: bool,
    },

    #[command(about = "Print a content digest")]
    Hash {
        #[arg(help = "Path to hash")]
        path: PathBuf,

        #[arg(
            short,
            long,
            default_value = "sha256",
            help = "Digest algorithm (md5, sha1, sha256)"
        )]
        algorithm: HashAlgorithm,
    },

    #[command(about = "Print the detected MIME type")]
    Mime {
        #[arg(help = "Path to examine")]
        path: PathBuf,
    },

    #[command(about = "Create a directory")]
    Mkdir {
        #[arg(help = "Directory path to create")]
        path: PathBuf,

        #[arg(short, long, help = "Create missing parent directories")]
        recursive: bool,
    },

    #[command(about = "Remove a file or directory")]
    Rm {
        #[arg(help = "Path to remove")]
        path: PathBuf,

        #[arg(short, long, help = "Remove directory contents as well")]
        recursive: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let executor = CommandExecutor::new(!cli.no_color, cli.verbose);

    let ok = match cli.command {
        Commands::Inspect { path, json } => executor.inspect(path, json),
        Commands::Hash { path, algorithm } => executor.hash(path, algorithm),
        Commands::Mime { path } => executor.mime(path),
        Commands::Mkdir { path, recursive } => executor.mkdir(path, recursive),
        Commands::Rm { path, recursive } => executor.rm(path, recursive),
    };

    if !ok {
        std::process::exit(1);
    }
}
