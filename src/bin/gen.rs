//! srsgen: CLI tool for compiling allow-list directories into binary
//! rule-set artifacts.

use clap::{Parser, Subcommand};
use srsgen::{
    compile_kind, ensure_output_dir, CompileConfig, EntryKind, KindSummary, LogObserver,
    RuleSetReader, LIST_EXTENSION,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "srsgen")]
#[command(version = "0.1.0")]
#[command(about = "Compile categorized allow-lists into binary rule-set artifacts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the domain and IP list roots into rule-set artifacts
    Compile {
        /// Directory of domain-suffix list files
        #[arg(long, default_value = "allow-domains/Services")]
        domains_dir: PathBuf,

        /// Directory of IPv4-CIDR list files
        #[arg(long, default_value = "allow-domains/Subnets/IPv4")]
        ips_dir: PathBuf,

        /// Output directory for domain rule-sets
        #[arg(long, default_value = "sing-geosite")]
        geosite_dir: PathBuf,

        /// Output directory for IP rule-sets
        #[arg(long, default_value = "sing-geoip")]
        geoip_dir: PathBuf,

        /// Source list extension (without the dot)
        #[arg(long, default_value = LIST_EXTENSION)]
        extension: String,

        /// Write a JSON manifest of the compiled artifacts
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// Decode a compiled artifact and print its contents
    Inspect {
        /// Artifact file to inspect
        artifact: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            domains_dir,
            ips_dir,
            geosite_dir,
            geoip_dir,
            extension,
            manifest,
        } => {
            if let Err(e) = compile(
                domains_dir,
                ips_dir,
                geosite_dir,
                geoip_dir,
                extension,
                manifest,
            ) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Inspect { artifact } => {
            if let Err(e) = inspect(&artifact) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn compile(
    domains_dir: PathBuf,
    ips_dir: PathBuf,
    geosite_dir: PathBuf,
    geoip_dir: PathBuf,
    extension: String,
    manifest: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_output_dir(&geosite_dir)?;
    ensure_output_dir(&geoip_dir)?;

    let mut domain_config = CompileConfig::new(EntryKind::DomainSuffix, domains_dir, geosite_dir);
    domain_config.list_extension = extension.clone();

    let mut ip_config = CompileConfig::new(EntryKind::IpCidr, ips_dir, geoip_dir);
    ip_config.list_extension = extension;

    // The two kinds are independent runs; a failure in one does not stop
    // the other from being attempted, but it does fail the process.
    let mut failed = false;
    let mut summaries: Vec<KindSummary> = Vec::new();

    log::info!("compiling domain rule-sets");
    match compile_kind(&domain_config, &mut LogObserver) {
        Ok(summary) => summaries.push(summary),
        Err(e) => {
            log::error!("domain compilation failed: {}", e);
            failed = true;
        }
    }

    log::info!("compiling IP rule-sets");
    match compile_kind(&ip_config, &mut LogObserver) {
        Ok(summary) => summaries.push(summary),
        Err(e) => {
            log::error!("IP compilation failed: {}", e);
            failed = true;
        }
    }

    if let Some(path) = manifest {
        let content = serde_json::to_string_pretty(&summaries)?;
        fs::write(&path, content)?;
        log::info!("wrote manifest to {}", path.display());
    }

    if failed {
        return Err("compilation failed".into());
    }

    let total: usize = summaries.iter().map(|s| s.artifacts.len()).sum();
    println!("Compiled {} rule-set artifacts", total);
    Ok(())
}

fn inspect(artifact: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(artifact)?;
    let reader = RuleSetReader::from_bytes(&data)?;

    println!("{}", artifact.display());
    println!("  kind:    {}", reader.kind());
    println!("  entries: {}", reader.entry_count());
    println!("  bytes:   {}", data.len());
    for entry in reader.entries() {
        println!("    {}", entry);
    }
    Ok(())
}
