//! beepc — compile melody notation into a square-wave WAV file or a `beep`
//! command line.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, Level};

use beepc::config::{load_config, Config, OutputFormat};
use beepc::dsl::Compiler;
use beepc::render::{beep_script, render, to_wav_bytes, write_wav_file};

/// beepc - speaker music compiler
#[derive(Parser)]
#[command(name = "beepc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Melody source file
    source: PathBuf,

    /// Output file path (default: <output_dir>/<source file name>.wav)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config, else wav)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the result to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Log compiler and renderer details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config().context("failed to load configuration")?;
    let format = cli.format.unwrap_or(config.format);

    let source = std::fs::read_to_string(&cli.source)
        .with_context(|| format!("failed to read {}", cli.source.display()))?;
    let tones = Compiler::compile(&source)
        .with_context(|| format!("failed to compile {}", cli.source.display()))?;
    info!(tones = tones.len(), "compiled {}", cli.source.display());

    let bytes = match format {
        OutputFormat::Wav => {
            let pcm = render(&tones);
            if !cli.stdout {
                let path = output_path(cli, &config, format);
                write_wav_file(&path, &pcm)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(samples = pcm.len(), "wrote {}", path.display());
                return Ok(());
            }
            to_wav_bytes(&pcm).context("failed to encode WAV")?
        }
        OutputFormat::Beep => {
            let mut script = beep_script(&tones);
            script.push('\n');
            script.into_bytes()
        }
    };

    if cli.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes).context("failed to write to stdout")?;
        stdout.flush().context("failed to write to stdout")?;
    } else {
        let path = output_path(cli, &config, format);
        std::fs::write(&path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

/// Explicit `--output`, else `<output_dir>/<source file name>.<ext>`.
fn output_path(cli: &Cli, config: &Config, format: OutputFormat) -> PathBuf {
    if let Some(path) = &cli.output {
        return path.clone();
    }
    default_output_path(&cli.source, &config.output_dir, format)
}

fn default_output_path(source: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    let ext = match format {
        OutputFormat::Wav => "wav",
        OutputFormat::Beep => "sh",
    };
    output_dir.join(format!("{name}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_appends_extension_to_file_name() {
        assert_eq!(
            default_output_path(Path::new("songs/tetris.txt"), Path::new("out"), OutputFormat::Wav),
            PathBuf::from("out/tetris.txt.wav")
        );
        assert_eq!(
            default_output_path(Path::new("tetris"), Path::new("."), OutputFormat::Beep),
            PathBuf::from("./tetris.sh")
        );
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["beepc", "song.txt", "-f", "beep", "--stdout", "-v"]);
        assert_eq!(cli.source, PathBuf::from("song.txt"));
        assert_eq!(cli.format, Some(OutputFormat::Beep));
        assert!(cli.stdout);
        assert!(cli.verbose);
        assert!(cli.output.is_none());
    }

    #[test]
    fn stdout_conflicts_with_output() {
        let res = Cli::try_parse_from(["beepc", "song.txt", "--stdout", "-o", "x.wav"]);
        assert!(res.is_err());
    }

    #[test]
    fn explicit_output_wins() {
        let cli = Cli::parse_from(["beepc", "song.txt", "-o", "x.wav"]);
        let path = output_path(&cli, &Config::default(), OutputFormat::Wav);
        assert_eq!(path, PathBuf::from("x.wav"));
    }
}
