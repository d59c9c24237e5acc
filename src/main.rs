//! Vacuno CLI
//!
//! Command-line front end for the Vacuno cattle API:
//! - Log in, register and manage the stored session
//! - Browse, search and filter the herd
//! - Create, update and delete records
//! - Add health and weight records

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vacuno::api::{ApiClient, AuthClient, CattleClient, ReqwestTransport};
use vacuno::config::{generate_default_config, Config, LoggingConfig};
use vacuno::models::{
    Animal, CattleUpdate, Estado, HealthRecordCreate, Sexo, WeightRecordCreate,
};
use vacuno::session::{FileSessionStore, SessionContext};
use vacuno::views::{
    messages, CattleDraft, CattleListView, DashboardView, DeleteOutcome, DraftField, LoginField,
    LoginView, RegisterField,
};

#[derive(Parser)]
#[command(name = "vacuno")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Livestock management from the command line")]
#[command(long_about = "Vacuno manages a cattle herd through the Vacuno API.\nLog in once; the session is kept until you log out.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session
    Login {
        email: String,
        /// Password (prompted on stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create an account, then log in with it
    Register {
        nombre: String,
        email: String,
        /// Password, at least 8 characters (prompted on stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in account
    Whoami,

    /// Herd summary and most recent records
    Dashboard,

    /// List cattle
    List {
        /// Only records in this state (activa, enferma, vendida)
        #[arg(short, long)]
        estado: Option<Estado>,
        /// Filter by name or identifier (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one record
    Show { id: String },

    /// Add a record
    Add {
        /// Unique identifier (ear tag)
        identificador: String,
        nombre: String,
        #[arg(long)]
        raza: Option<String>,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        fecha_nacimiento: Option<String>,
        /// H (hembra) or M (macho)
        #[arg(long, default_value = "H")]
        sexo: Sexo,
        /// Current weight in kg
        #[arg(long)]
        peso: Option<String>,
    },

    /// Change fields of a record
    Update {
        id: String,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        raza: Option<String>,
        #[arg(long)]
        estado: Option<Estado>,
        #[arg(long)]
        peso: Option<f64>,
    },

    /// Delete a record
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Add a health record (vaccination, treatment, checkup)
    HealthRecord {
        id_vaca: String,
        /// Kind of event, e.g. vacunacion
        #[arg(short, long)]
        tipo: String,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long)]
        fecha: Option<NaiveDate>,
        #[arg(long)]
        descripcion: Option<String>,
        #[arg(long)]
        medicamento: Option<String>,
        #[arg(long)]
        dosis: Option<String>,
        #[arg(long)]
        veterinario: Option<String>,
    },

    /// Add a weight record
    WeightRecord {
        id_vaca: String,
        peso: f64,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long)]
        fecha: Option<NaiveDate>,
        #[arg(long, default_value = "kg")]
        unidad: String,
        #[arg(long, default_value = "manual")]
        metodo: String,
    },

    /// Check that the API is reachable
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::debug!("Command failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);

    let session = SessionContext::new(Rc::new(FileSessionStore::new(config.session.path())));
    let transport = ReqwestTransport::from_config(&config.api)?;
    let api = ApiClient::new(Rc::new(transport), session.clone());
    let auth = AuthClient::new(api.clone());
    let cattle = CattleClient::new(api.clone());
    let format = cli.format;

    match cli.command {
        Commands::Login { email, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Contraseña: ")?,
            };

            let mut view = LoginView::new();
            view.set_login_field(LoginField::Email, &email);
            view.set_login_field(LoginField::Password, &password);

            if view.submit_login(&auth).await.is_none() {
                bail!(view.error.unwrap_or_else(|| messages::LOGIN_FAILED.to_string()));
            }
            println!("Sesión iniciada como {}", email);
        }

        Commands::Register {
            nombre,
            email,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Contraseña: ")?,
            };

            let mut view = LoginView::new();
            view.toggle_register();
            view.set_register_field(RegisterField::Nombre, &nombre);
            view.set_register_field(RegisterField::Email, &email);
            view.set_register_field(RegisterField::Password, &password);

            if view.submit_register(&auth).await.is_none() {
                bail!(view.error.unwrap_or_else(|| messages::REGISTER_FAILED.to_string()));
            }
            println!("Usuario {} registrado; sesión iniciada", email);
        }

        Commands::Logout => {
            vacuno::views::logout(&session);
            println!("Sesión cerrada");
        }

        Commands::Whoami => {
            require_session(&session)?;
            let user = auth.me().await?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&user)?),
                OutputFormat::Csv => write_csv(std::iter::once(&user))?,
                OutputFormat::Table => {
                    println!("Nombre: {}", user.nombre);
                    println!("Email:  {}", user.email);
                    println!("Rol:    {}", user.rol);
                    println!("Activo: {}", if user.activo { "sí" } else { "no" });
                }
            }
        }

        Commands::Dashboard => {
            require_session(&session)?;
            let mut view = DashboardView::new();
            view.load(&cattle).await;
            if let Some(error) = view.error {
                bail!(error);
            }

            match format {
                OutputFormat::Json => {
                    let summary = serde_json::json!({
                        "total": view.stats.total,
                        "activa": view.stats.healthy,
                        "enferma": view.stats.sick,
                        "peso_promedio": view.stats.avg_weight,
                        "recientes": view.recent,
                    });
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                OutputFormat::Csv => write_csv(view.recent.iter())?,
                OutputFormat::Table => {
                    println!("Total de animales: {}", view.stats.total);
                    println!("Activas:           {}", view.stats.healthy);
                    println!("Enfermas:          {}", view.stats.sick);
                    println!("Peso promedio:     {} kg", view.stats.avg_weight);
                    println!();
                    println!("Registros recientes:");
                    print_cattle_table(&view.recent, messages::NO_RECORDS_YET);
                }
            }
        }

        Commands::List { estado, search } => {
            require_session(&session)?;
            let mut view = CattleListView::new();
            view.change_status_filter(&cattle, estado).await;
            if let Some(error) = view.error.take() {
                bail!(error);
            }
            if let Some(term) = search {
                view.set_search(&term);
            }

            print_cattle(view.visible(), format, messages::NO_RECORDS)?;
        }

        Commands::Show { id } => {
            require_session(&session)?;
            let animal = cattle.get(&id).await?;
            print_cattle(std::slice::from_ref(&animal), format, messages::NO_RECORDS)?;
        }

        Commands::Add {
            identificador,
            nombre,
            raza,
            fecha_nacimiento,
            sexo,
            peso,
        } => {
            require_session(&session)?;
            let mut draft = CattleDraft::default();
            draft.set(DraftField::Identificador, &identificador);
            draft.set(DraftField::Nombre, &nombre);
            draft.set(DraftField::Raza, raza.as_deref().unwrap_or_default());
            draft.set(
                DraftField::FechaNacimiento,
                fecha_nacimiento.as_deref().unwrap_or_default(),
            );
            draft.set(DraftField::Sexo, sexo.code());
            draft.set(DraftField::PesoActual, peso.as_deref().unwrap_or_default());

            let request = draft
                .to_request()
                .map_err(|e| anyhow::anyhow!(e.user_message(messages::CATTLE_CREATE_FAILED)))?;
            let animal = cattle.create(&request).await?;
            println!("Registro creado: {} ({})", animal.identificador, animal.id);
        }

        Commands::Update {
            id,
            nombre,
            raza,
            estado,
            peso,
        } => {
            require_session(&session)?;
            let changes = CattleUpdate {
                nombre,
                raza,
                estado,
                peso_actual: peso,
            };
            if changes.is_empty() {
                bail!("Nada que actualizar: indique al menos un campo");
            }

            let animal = cattle.update(&id, &changes).await?;
            print_cattle(std::slice::from_ref(&animal), format, messages::NO_RECORDS)?;
        }

        Commands::Delete { id, yes } => {
            require_session(&session)?;
            let mut view = CattleListView::new();
            let outcome = view
                .delete(&cattle, &id, |question| yes || confirm(question))
                .await;

            match outcome {
                DeleteOutcome::Cancelled => println!("Cancelado"),
                DeleteOutcome::Deleted => println!("{}", deleted_summary(&view)?),
                DeleteOutcome::Failed(message) => bail!(message),
            }
        }

        Commands::HealthRecord {
            id_vaca,
            tipo,
            fecha,
            descripcion,
            medicamento,
            dosis,
            veterinario,
        } => {
            require_session(&session)?;
            let record = HealthRecordCreate {
                id_vaca,
                fecha: fecha.unwrap_or_else(today),
                tipo,
                descripcion,
                medicamento,
                dosis,
                veterinario,
            };
            let ack = cattle.add_health_record(&record).await?;
            println!("{}", ack.message);
        }

        Commands::WeightRecord {
            id_vaca,
            peso,
            fecha,
            unidad,
            metodo,
        } => {
            require_session(&session)?;
            if peso <= 0.0 || !peso.is_finite() {
                bail!(messages::CATTLE_INVALID_WEIGHT);
            }

            let mut record = WeightRecordCreate::new(id_vaca, fecha.unwrap_or_else(today), peso);
            record.unidad = unidad;
            record.metodo = metodo;
            let ack = cattle.add_weight_record(&record).await?;
            println!("{}", ack.message);
        }

        Commands::Status => {
            println!("Vacuno v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("API:    {}", config.api.base_url);

            let health = api.health().await.with_context(|| {
                format!("Cannot connect to Vacuno API at {}", config.api.base_url)
            })?;
            println!("Estado: {}", health.status);
            println!(
                "Sesión: {}",
                if session.is_authenticated() { "iniciada" } else { "sin iniciar" }
            );
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vacuno={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn require_session(session: &SessionContext) -> anyhow::Result<()> {
    if !session.is_authenticated() {
        bail!("No hay sesión iniciada. Ejecute: vacuno login <email>");
    }
    Ok(())
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn prompt(label: &str) -> anyhow::Result<String> {
    eprint!("{}", label);
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn confirm(question: &str) -> bool {
    match prompt(&format!("{} [s/N] ", question)) {
        Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes"),
        Err(_) => false,
    }
}

fn print_cattle(cattle: &[Animal], format: OutputFormat, empty: &str) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(cattle)?),
        OutputFormat::Csv => write_csv(cattle.iter())?,
        OutputFormat::Table => print_cattle_table(cattle, empty),
    }
    Ok(())
}

fn print_cattle_table(cattle: &[Animal], empty: &str) {
    if cattle.is_empty() {
        println!("{}", empty);
        return;
    }

    println!(
        "{:<12} {:<20} {:<14} {:<10} {:<8} {:<10} {}",
        "Identificador", "Nombre", "Raza", "Nacimiento", "Sexo", "Estado", "Peso"
    );
    println!("{}", "-".repeat(88));

    for animal in cattle {
        println!(
            "{:<12} {:<20} {:<14} {:<10} {:<8} {:<10} {}",
            animal.identificador,
            animal.nombre,
            animal.raza.as_deref().unwrap_or("-"),
            animal
                .fecha_nacimiento
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            animal.sexo.label(),
            animal.estado.label(),
            animal
                .peso_actual
                .map(|p| format!("{:.1} kg", p))
                .unwrap_or_else(|| "-".to_string()),
        );
    }
}

/// Line printed after a delete; a failed re-fetch is reported, not counted
fn deleted_summary(view: &CattleListView) -> anyhow::Result<String> {
    if let Some(error) = &view.error {
        bail!("Registro eliminado, pero no se pudo recargar la lista: {}", error);
    }
    Ok(format!("Registro eliminado; quedan {} registros", view.cattle().len()))
}

fn write_csv<'a, T: serde::Serialize + 'a>(rows: impl Iterator<Item = &'a T>) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_summary_counts_remaining() {
        let mut view = CattleListView::new();
        view.finish_load(Ok(Vec::new()));
        assert_eq!(deleted_summary(&view).unwrap(), "Registro eliminado; quedan 0 registros");
    }

    #[test]
    fn test_deleted_summary_reports_failed_refresh() {
        let mut view = CattleListView::new();
        view.error = Some(messages::CATTLE_LOAD_FAILED.to_string());

        let err = deleted_summary(&view).unwrap_err().to_string();
        assert!(err.contains(messages::CATTLE_LOAD_FAILED));
        assert!(!err.contains("quedan"));
    }
}
