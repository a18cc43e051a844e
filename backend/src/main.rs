//! ARS CLI - run the intake service or submit applications to it
//!
//! ```bash
//! ars serve                                  # Start the intake service (port 3000)
//! ars positions                              # List open positions
//! ars submit --name "John Doe" \
//!     --email john@example.com --phone 555-0123 \
//!     --position "Data Scientist" --resume cv.pdf
//! ars status ARS-1A2B3C4D                    # Check an application
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use ars_common::{
    format_date, format_megabytes, open_positions, Field, ResumeKind, ResumeUpload,
    SubmissionController, SubmitBlocked, SubmitError,
};
use ars_intake::{intake_url_from_env, HttpIntakeClient, IntakeConfig};

#[derive(Parser)]
#[command(name = "ars")]
#[command(about = "AI Resume Scorer application intake", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the intake service
    Serve {
        /// Port to listen on (default: ARS_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory to save accepted resumes in (default: ARS_RESUME_DIR)
        #[arg(long)]
        resume_dir: Option<PathBuf>,
    },

    /// Submit an application
    Submit {
        /// Full name
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// One of the open positions (see `ars positions`)
        #[arg(long)]
        position: String,

        /// Resume file (PDF or DOCX, max 5MB)
        #[arg(long)]
        resume: PathBuf,

        /// LinkedIn profile
        #[arg(long)]
        linkedin: Option<String>,

        /// File containing a cover letter
        #[arg(long)]
        cover_letter: Option<PathBuf>,

        /// Intake service URL (default: ARS_INTAKE_URL or http://localhost:3000)
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Check the status of an application
    Status {
        /// Tracking code
        code: String,

        /// Intake service URL (default: ARS_INTAKE_URL or http://localhost:3000)
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// List open positions
    Positions,
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port, resume_dir } => cmd_serve(port, resume_dir).await,

        Commands::Submit {
            name,
            email,
            phone,
            position,
            resume,
            linkedin,
            cover_letter,
            endpoint,
        } => {
            let fields = [
                (Field::CandidateName, name),
                (Field::Email, email),
                (Field::Phone, phone),
                (Field::Position, position),
                (Field::LinkedIn, linkedin.unwrap_or_default()),
            ];
            cmd_submit(&fields, &resume, cover_letter.as_deref(), endpoint).await
        }

        Commands::Status { code, endpoint } => cmd_status(&code, endpoint).await,

        Commands::Positions => cmd_positions(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(
    port: Option<u16>,
    resume_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = IntakeConfig::from_env()?;
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(dir) = resume_dir {
        config = config.with_resume_dir(dir);
    }

    ars_intake::server::start_server(config).await?;
    Ok(())
}

/// Read a resume from disk, declaring the MIME type its extension implies.
///
/// Unknown extensions are declared as `application/octet-stream` so the
/// usual file check rejects them with the usual message.
fn load_resume(path: &Path) -> Result<ResumeUpload, Box<dyn std::error::Error>> {
    let bytes = fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume")
        .to_string();
    let mime_type = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ResumeKind::from_extension)
        .map(|kind| kind.mime_type())
        .unwrap_or("application/octet-stream");

    Ok(ResumeUpload::new(file_name, mime_type, bytes))
}

async fn cmd_submit(
    fields: &[(Field, String)],
    resume_path: &Path,
    cover_letter: Option<&Path>,
    endpoint: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = SubmissionController::new();

    for (field, value) in fields {
        controller.set_field(*field, value.clone())?;
    }
    if let Some(path) = cover_letter {
        controller.set_field(Field::CoverLetter, fs::read_to_string(path)?)?;
    }

    let resume = load_resume(resume_path)?;
    eprintln!("📄 Resume: {} ({})", resume.file_name, format_megabytes(resume.bytes.len() as u64));
    controller.select_resume(resume)?;

    let client = HttpIntakeClient::new(endpoint.unwrap_or_else(intake_url_from_env));
    eprintln!("📤 Submitting to {}...", client.submit_url());

    match controller.submit(&client).await {
        Ok(outcome) => {
            eprintln!("✅ Application submitted!");
            println!("{}", outcome.tracking_code);
            if outcome.tracking_code.is_provisional() {
                eprintln!("⚠️  The service issued no tracking code; this one is provisional.");
            } else {
                eprintln!("   Save this code to check your application status.");
            }
            Ok(())
        }
        Err(SubmitError::Blocked(SubmitBlocked::Invalid(errors))) => {
            for (field, message) in errors.fields() {
                eprintln!("   - {}: {}", field.wire_name(), message);
            }
            if let Some(message) = errors.resume() {
                eprintln!("   - resume: {}", message);
            }
            Err(format!("{} field(s) need attention", errors.len()).into())
        }
        Err(e) => Err(e.into()),
    }
}

async fn cmd_status(code: &str, endpoint: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let client = HttpIntakeClient::new(endpoint.unwrap_or_else(intake_url_from_env));
    let view = client.application_status(code).await?;

    println!("📋 {} ({})", view.tracking_code, view.status);
    println!("   Candidate: {}", view.candidate_name);
    println!("   Position:  {}", view.position);
    println!("   Submitted: {}", format_date(&view.submitted_at));
    match view.ai_score {
        Some(score) => println!("   Score:     {:.0}", score),
        None => println!("   Score:     analysis pending"),
    }
    Ok(())
}

fn cmd_positions() -> Result<(), Box<dyn std::error::Error>> {
    let positions = open_positions();
    eprintln!("📋 Open positions ({}):\n", positions.len());
    for p in positions {
        println!("  {} ({})", p.title, p.department);
    }
    Ok(())
}
