use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use projectile_motion::control::command::{Command, HELP_TEXT};
use projectile_motion::*;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "projectile")]
#[command(version)]
#[command(about = "Ideal projectile motion calculator", long_about = None)]
struct Cli {
    /// Initial speed (m/s)
    #[arg(short = 'v', long)]
    speed: Option<f64>,

    /// Launch angle (degrees, 0-90)
    #[arg(short = 'a', long)]
    angle: Option<f64>,

    /// Initial height (m)
    #[arg(long)]
    height: Option<f64>,

    /// Gravitational acceleration (m/s², at least 0.1)
    #[arg(short = 'g', long)]
    gravity: Option<f64>,

    /// JSON settings file with launch inputs
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Read commands from stdin and recompute after every change
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Log every recomputation
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn flag_settings(&self) -> Settings {
        Settings {
            initial_speed: self.speed,
            launch_angle_degrees: self.angle,
            initial_height: self.height,
            gravity: self.gravity,
        }
    }

    fn launch_parameters(&self) -> Result<LaunchParameters, CalculatorError> {
        let file_settings = match &self.config {
            Some(path) => {
                log::info!("loading settings from {}", path.display());
                Settings::load(path)?
            }
            None => Settings::default(),
        };

        let settings = file_settings.merge(self.flag_settings());
        Ok(settings.apply(LaunchParameters::default()))
    }
}

fn print_report(session: &CalculatorSession, format: OutputFormat) -> Result<(), CalculatorError> {
    let report = TrajectoryReport::new(session.params(), session.result());
    match format {
        OutputFormat::Text => report.display(),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn run_interactive(
    session: &mut CalculatorSession,
    format: OutputFormat,
) -> Result<(), CalculatorError> {
    println!("{}", HELP_TEXT);
    print_report(session, format)?;

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP_TEXT),
            Command::Show => print_report(session, OutputFormat::Text)?,
            Command::Json => print_report(session, OutputFormat::Json)?,
            command => {
                if command.apply(session) {
                    print_report(session, format)?;
                }
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut session = CalculatorSession::new(cli.launch_parameters()?);

    if cli.interactive {
        run_interactive(&mut session, cli.format)?;
    } else {
        print_report(&session, cli.format)?;
    }

    Ok(())
}
