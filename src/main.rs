use clap::Parser;
use percent_d::{EscapeOptions, HexCase, Profile, PresetsConfig, SpacePolicy, Strategy};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "percent-d")]
#[command(about = "Percent-encode data for URIs, query strings, and form bodies", long_about = None)]
#[command(version)]
struct Cli {
    /// Named preset from profiles.toml
    #[arg(short = 'P', long)]
    preset: Option<String>,

    /// Compliance profile (unreserved-only, all-unreserved, form-encode)
    #[arg(short, long, default_value = "unreserved-only")]
    profile: String,

    /// Emit lowercase hex digits
    #[arg(long)]
    lower: bool,

    /// Encode space as '+' instead of %20
    #[arg(long)]
    plus: bool,

    /// Print the exact encoded length instead of the encoding
    #[arg(long)]
    length: bool,

    /// File to encode (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// List available presets
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load preset configuration with user overrides
    let config = PresetsConfig::load_with_overrides()?;

    if cli.list {
        println!("Available presets:\n");
        let mut presets: Vec<_> = config.presets.iter().collect();
        presets.sort_by_key(|(name, _)| *name);

        for (name, preset) in presets {
            let options = preset.options();
            println!(
                "  {:<15} {:<16} hex={:<5} space={}",
                name,
                options.profile.as_str(),
                options.hex_case.as_str(),
                options.space.as_str()
            );
        }
        return Ok(());
    }

    let options = if let Some(name) = &cli.preset {
        config
            .get_preset(name)
            .ok_or_else(|| {
                format!("Preset '{}' not found. Use --list to see available presets.", name)
            })?
            .options()
    } else {
        EscapeOptions {
            // Unknown profile names fall back to the default profile on
            // purpose; see Profile::resolve.
            profile: Profile::resolve(&cli.profile),
            hex_case: if cli.lower { HexCase::Lower } else { HexCase::Upper },
            space: if cli.plus { SpacePolicy::Plus } else { SpacePolicy::Percent },
            strategy: Strategy::Presized,
        }
    };

    // Read input data
    let input_data = if let Some(file_path) = cli.file {
        fs::read(&file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    if cli.length {
        println!("{}", percent_d::encoded_len(&input_data, &options));
    } else {
        println!("{}", percent_d::escape_bytes(&input_data, &options));
    }

    Ok(())
}
