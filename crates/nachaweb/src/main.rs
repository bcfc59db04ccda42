use clap::{Parser, Subcommand};
use colored::*;
use models::Notification;
use nachaweb_lib::{build_validator, format_report, list_icons, load_fields, load_resolver};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "nachaweb",
    about = "Form validation and icon rendering for the NACHA web front end",
    version,
    long_about = "Runs the NACHA web page's form checks and icon rendering from the terminal.\n\nExamples:\n  nachaweb validate batch_form.yaml              # Validate exported form fields\n  nachaweb icon check --class big                # Print the markup for an icon\n  nachaweb render templates/index.html           # Swap emoji placeholders for SVG icons\n  nachaweb check-upload payroll.ach              # Check a file before uploading it\n  nachaweb --icons custom.yaml icons             # List icons from a custom table"
)]
struct Nachaweb {
    #[command(subcommand)]
    command: Commands,

    /// Icon table to use instead of the built-in one (YAML)
    #[arg(long, global = true)]
    icons: Option<PathBuf>,

    /// Run in verbose mode with detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in debug mode with extensive details
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate form fields exported as YAML or JSON
    Validate {
        /// Path to the fields file
        path: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Substring marking a routing-number field (repeatable, replaces the defaults)
        #[arg(long = "routing-field", value_name = "SUBSTRING")]
        routing_fields: Vec<String>,

        /// Do not fail number fields whose value is not a number
        #[arg(long)]
        lenient_numbers: bool,
    },

    /// Print the markup for an icon
    Icon {
        /// Icon name
        name: String,

        /// Extra class to add to the icon
        #[arg(short, long, default_value = "")]
        class: String,
    },

    /// Replace emoji placeholders with icon markup
    Render {
        /// File to render (reads stdin when omitted)
        path: Option<PathBuf>,
    },

    /// Check that a file can be uploaded as a NACHA file
    CheckUpload {
        /// Path to the file
        path: PathBuf,
    },

    /// List available icons and their placeholders
    Icons,

    /// Format values the way the web page displays them
    Format {
        #[command(subcommand)]
        value: FormatCommand,
    },
}

#[derive(Debug, Subcommand)]
enum FormatCommand {
    /// Amount in cents, shown as dollars
    Amount {
        #[arg(allow_negative_numbers = true)]
        cents: i64,
    },

    /// NACHA YYMMDD date
    Date { date: String },
}

fn fail(message: &str) -> ! {
    logging::error(message);
    std::process::exit(1);
}

fn main() {
    let cli = Nachaweb::parse();

    if cli.debug {
        logging::set_log_level(logging::LogLevel::Debug);
        logging::debug("Debug mode enabled - showing detailed logs");
    } else if cli.verbose {
        logging::set_log_level(logging::LogLevel::Info);
        logging::info("Verbose mode enabled");
    } else {
        logging::set_log_level(logging::LogLevel::Warning);
    }

    match cli.command {
        Commands::Validate {
            path,
            json,
            routing_fields,
            lenient_numbers,
        } => {
            let fields = load_fields(&path).unwrap_or_else(|e| fail(&e));
            logging::info(&format!(
                "Validating {} field(s) from {}",
                fields.len(),
                path.display()
            ));

            let result = build_validator(&routing_fields, lenient_numbers).validate(&fields);

            if json {
                match serde_json::to_string_pretty(&result) {
                    Ok(output) => println!("{}", output),
                    Err(e) => fail(&format!("Failed to serialize result: {}", e)),
                }
            } else {
                println!("{}", format_report(&result));
            }

            if !result.is_valid() {
                std::process::exit(1);
            }
        }
        Commands::Icon { name, class } => {
            let resolver = load_resolver(cli.icons.as_deref()).unwrap_or_else(|e| fail(&e));
            println!("{}", resolver.resolve_with_class(&name, &class));
        }
        Commands::Render { path } => {
            let resolver = load_resolver(cli.icons.as_deref()).unwrap_or_else(|e| fail(&e));

            let input = match &path {
                Some(path) => std::fs::read_to_string(path)
                    .unwrap_or_else(|e| fail(&format!("Failed to read {}: {}", path.display(), e))),
                None => {
                    let mut buffer = String::new();
                    if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
                        fail(&format!("Failed to read stdin: {}", e));
                    }
                    buffer
                }
            };

            print!("{}", resolver.substitute_all(&input));
        }
        Commands::CheckUpload { path } => {
            let candidate = utils::upload_candidate(&path)
                .unwrap_or_else(|e| fail(&format!("Failed to inspect {}: {}", path.display(), e)));

            match validators::validate_upload(&candidate) {
                Ok(()) => println!(
                    "{} {} ({} bytes)",
                    "✓".green(),
                    candidate.file_name,
                    candidate.size_bytes
                ),
                Err(e) => {
                    logging::debug(&format!("{:?}", e));
                    eprintln!("{}", Notification::error(e.to_string()).to_markup());
                    std::process::exit(1);
                }
            }
        }
        Commands::Icons => {
            let resolver = load_resolver(cli.icons.as_deref()).unwrap_or_else(|e| fail(&e));
            for line in list_icons(&resolver) {
                println!("{}", line);
            }
        }
        Commands::Format { value } => match value {
            FormatCommand::Amount { cents } => println!("{}", utils::format_amount(cents)),
            FormatCommand::Date { date } => println!("{}", utils::format_date(&date)),
        },
    }
}
