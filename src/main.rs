// ShowReg - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config, session, and store resolution
// 4. Subcommand dispatch

use clap::{Args, Parser, Subcommand};
use showreg::app::registration::{self, RecordUpdate, RegistrationForm};
use showreg::app::store::RecordStore;
use showreg::app::{excel, import, pdf, session};
use showreg::core::catalog::build_catalog;
use showreg::core::export::write_records;
use showreg::core::model::{AgeCategory, CertStatus, Sex, ShowType};
use showreg::core::rank::sort_and_number;
use showreg::core::tags::build_tag_sheets;
use showreg::platform::config::{load_config, AppConfig};
use showreg::platform::config::PlatformPaths;
use showreg::util::error::{Result, ShowRegError};
use showreg::util::{constants, logging};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

/// ShowReg - cat show registration and catalogue generation.
///
/// Register contestants, classify them into competition classes according
/// to the active show type, and export the catalogue, number-tag sheets,
/// and backup dumps.
#[derive(Parser, Debug)]
#[command(name = "ShowReg", version, about)]
struct Cli {
    /// Override the data directory holding the store and session files.
    #[arg(long = "data-dir", global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register one contestant.
    Register(RegisterArgs),

    /// List the persisted records with their store indices.
    List,

    /// Edit the record at INDEX in place (class label is recomputed).
    Edit {
        /// 0-based store index, as shown by `list`.
        index: usize,
        #[command(flatten)]
        fields: EditArgs,
    },

    /// Delete the record at INDEX.
    Delete {
        /// 0-based store index, as shown by `list`.
        index: usize,
    },

    /// Merge an exported .csv or .xlsx file into the store.
    Import {
        /// File to import.
        file: PathBuf,
    },

    /// Export the styled spreadsheet catalogue.
    Catalog {
        /// Output .xlsx path.
        #[arg(short, long, default_value = "Catshow_Catalogue.xlsx")]
        output: PathBuf,
    },

    /// Export the printable number-tag sheets.
    Tags {
        /// Output .pdf path.
        #[arg(short, long, default_value = "Catshow_Tags.pdf")]
        output: PathBuf,
    },

    /// Dump the full record set as a CSV backup (same format as the store).
    Backup {
        /// Output .csv path.
        #[arg(short, long, default_value = "Catshow_Backup.csv")]
        output: PathBuf,
    },

    /// Show or set the session's active show type.
    ShowType {
        /// New show type (Simple, Breed-base, or Complex). Omit to print
        /// the current one.
        value: Option<String>,
    },

    /// Delete the entire persisted store.
    Reset {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct RegisterArgs {
    /// Owner's name.
    #[arg(long)]
    owner: String,

    /// Owner's phone number.
    #[arg(long, default_value = "")]
    phone: String,

    /// The cat's name.
    #[arg(long = "pet-name")]
    pet_name: String,

    /// Sex: Male or Female.
    #[arg(long, default_value = "Male")]
    sex: String,

    /// Breed, e.g. "Persian", "Household Pet (Mix)", "Other Purebred".
    #[arg(long)]
    breed: String,

    /// Sub-breed detail for "Other Purebred" entries, e.g. "Ragdoll".
    #[arg(long = "sub-breed")]
    sub_breed: Option<String>,

    /// Colour/pattern, e.g. "Red Tabby".
    #[arg(long)]
    color: String,

    /// Certification status: Pedigree or Non-Pedigree. Forced to Pet Class
    /// for mixed breeds and to a placeholder in breed-base mode.
    #[arg(long, default_value = "Pedigree")]
    status: String,

    /// Age category: Kitten or Adult.
    #[arg(long)]
    age: String,
}

#[derive(Args, Debug, Default)]
struct EditArgs {
    #[arg(long)]
    owner: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long = "pet-name")]
    pet_name: Option<String>,
    #[arg(long)]
    sex: Option<String>,
    #[arg(long)]
    breed: Option<String>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    age: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is read before logging init so [logging] level can take part
    // in the filter priority chain.
    let platform_paths = PlatformPaths::resolve();
    let (config, config_warnings) = load_config(&platform_paths.config_dir);

    logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        eprintln!("Warning: {warning}");
    }

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "ShowReg starting"
    );

    let data_dir = cli.data_dir.unwrap_or(platform_paths.data_dir);
    let store = RecordStore::new(data_dir.join(constants::STORE_FILE_NAME));
    let session_path = session::session_path(&data_dir);
    let mut active_session = session::load(&session_path)
        .unwrap_or_else(|| session::SessionData::fresh(&config.default_show_type));

    match run(cli.command, &store, &mut active_session, &config) {
        Ok(()) => {
            // Session-save failures are logged, never fatal: the operation
            // itself already completed.
            if let Err(e) = session::save(&active_session, &session_path) {
                tracing::warn!(error = %e, "Could not persist session");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Command,
    store: &RecordStore,
    active_session: &mut session::SessionData,
    config: &AppConfig,
) -> Result<()> {
    match command {
        Command::Register(args) => {
            let form = RegistrationForm {
                owner: args.owner,
                phone: args.phone,
                pet_name: args.pet_name,
                sex: Sex::parse(&args.sex),
                breed: args.breed,
                sub_breed: args.sub_breed,
                color: args.color,
                status: CertStatus::parse(&args.status),
                age: AgeCategory::parse(&args.age),
            };
            let record = registration::register(&form, active_session, store)?;
            println!(
                "Registered '{}' ({}) in class '{}'",
                record.pet_name, record.sex, record.class_label
            );
        }

        Command::List => {
            let records = store.load()?;
            if records.is_empty() {
                println!("No contestants registered yet.");
            } else {
                println!("Active show type: {}", active_session.show_type);
                for (index, r) in records.iter().enumerate() {
                    println!(
                        "{index:>4}  {:<20} {:<20} {:<25} {}",
                        r.owner, r.pet_name, r.breed, r.class_label
                    );
                }
            }
        }

        Command::Edit { index, fields } => {
            let update = RecordUpdate {
                owner: fields.owner,
                phone: fields.phone,
                pet_name: fields.pet_name,
                sex: fields.sex.as_deref().map(Sex::parse),
                breed: fields.breed,
                color: fields.color,
                status: fields.status.as_deref().map(CertStatus::parse),
                age: fields.age.as_deref().map(AgeCategory::parse),
            };
            let edited = registration::edit(store, &active_session.show_type, index, &update)?;
            println!(
                "Updated record {index}: '{}' now in class '{}'",
                edited.pet_name, edited.class_label
            );
        }

        Command::Delete { index } => {
            let removed = registration::delete(store, index)?;
            println!("Deleted record {index} ('{}')", removed.pet_name);
        }

        Command::Import { file } => {
            let appended = import::import_file(store, &file)?;
            println!("Imported {appended} record(s) from '{}'", file.display());
        }

        Command::Catalog { output } => {
            let records = store.load()?;
            let ranked = sort_and_number(records, &active_session.show_type);
            let doc = build_catalog(&ranked, &active_session.show_type);
            excel::export_catalog(&doc, &output)?;
            println!(
                "Catalogue written to '{}' ({} class sheet(s), {} contestant(s))",
                output.display(),
                doc.pages.len(),
                ranked.len()
            );
        }

        Command::Tags { output } => {
            let records = store.load()?;
            let ranked = sort_and_number(records, &active_session.show_type);
            let sheet = build_tag_sheets(&ranked);
            let branding = pdf::Branding::resolve(&config.organisation, config.logo_path.as_deref());
            pdf::export_tag_sheets(&sheet, &branding, &output)?;
            println!(
                "Tag sheets written to '{}' ({} page(s), {} card(s))",
                output.display(),
                sheet.pages.len(),
                ranked.len()
            );
        }

        Command::Backup { output } => {
            let records = store.load()?;
            let file = File::create(&output).map_err(|e| ShowRegError::Io {
                path: output.clone(),
                operation: "backup",
                source: e,
            })?;
            let count = write_records(&records, BufWriter::new(file), &output)?;
            println!("Backup of {count} record(s) written to '{}'", output.display());
        }

        Command::ShowType { value } => match value {
            Some(new_type) => {
                if ShowType::parse(&new_type).is_none() {
                    eprintln!(
                        "Warning: '{new_type}' matches no known mode; \
                         contestants will classify into the generic fallback class."
                    );
                }
                active_session.show_type = new_type;
                println!("Active show type set to '{}'", active_session.show_type);
            }
            None => println!("Active show type: {}", active_session.show_type),
        },

        Command::Reset { yes } => {
            if !yes {
                println!("This deletes the entire store. Re-run with --yes to confirm.");
            } else {
                store.reset()?;
                println!("Store deleted.");
            }
        }
    }

    Ok(())
}
