//! ndictl - NDI configuration and translation table inspector.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nas_ndi::vlan::stats::to_sai_vlan_stat;
use nas_ndi::{InterfaceStat, NdiConfig, QueueStat, SaiVariant, DEFAULT_CONFIG_PATH};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Inspect NAS NDI configuration and SAI translation tables
#[derive(Parser, Debug)]
#[command(name = "ndictl")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a configuration file
    Check {
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,
    },

    /// Print the NAS to SAI counter tables
    Tables {
        /// Only this SAI generation; every generation if omitted
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VariantArg {
    Native,
    MemberBased,
}

impl From<VariantArg> for SaiVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Native => SaiVariant::Native,
            VariantArg::MemberBased => SaiVariant::MemberBased,
        }
    }
}

fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")
}

fn check(path: &Path) -> Result<()> {
    let config = NdiConfig::load(path)
        .with_context(|| format!("configuration {} is not usable", path.display()))?;

    println!("{}: default SAI variant {}", path.display(), config.sai_variant);
    for npu in &config.npus {
        println!(
            "  npu {}: switch {:#x}, {} SAI, max_ports {}, {} mapped ports",
            npu.npu_id,
            npu.switch_id,
            config.variant_of(npu),
            npu.max_ports,
            npu.ports.len()
        );
    }
    Ok(())
}

fn tables(variant: SaiVariant) {
    println!("queue counters ({} SAI):", variant);
    for stat in QueueStat::all() {
        match stat.to_sai(variant) {
            Some(sai) => println!("  {:<30} {:?} ({})", format!("{:?}", stat), sai, sai as u32),
            None => println!("  {:<30} unsupported", format!("{:?}", stat)),
        }
    }

    println!("vlan counters:");
    for stat in InterfaceStat::ALL {
        match to_sai_vlan_stat(*stat) {
            Some(sai) => println!("  {:<30} {:?} ({})", format!("{:?}", stat), sai, sai as u32),
            None => println!("  {:<30} unsupported", format!("{:?}", stat)),
        }
    }

    println!(
        "command shell: {}",
        if variant.has_command_shell() {
            "available"
        } else {
            "unavailable"
        }
    );
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_level) {
        eprintln!("ndictl: {:#}", e);
        return ExitCode::FAILURE;
    }

    let result = match args.command {
        Command::Check { path } => check(&path),
        Command::Tables { variant } => {
            match variant {
                Some(variant) => tables(variant.into()),
                None => SaiVariant::ALL.iter().copied().for_each(tables),
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => {
            info!("ndictl done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
