use clap::{Parser, Subcommand};
use clinica::{
    client::{
        document::{BookingForm, RegisterForm},
        HttpApi, Section, ViewController,
    },
    config::DEFAULT_API_URL,
};

/// Front-end for the clinic: runs one user action against the API and prints
/// the resulting page.
#[derive(Parser)]
#[command(name = "clinica-client")]
struct Cli {
    /// Base URL of the API.
    #[arg(long, env = "CLINICA_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Print only the section the action touched.
    #[arg(long)]
    section_only: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every saved appointment.
    Citas,
    /// Register a new patient.
    Registrar {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        apellido: String,
        /// YYYY-MM-DD
        #[arg(long)]
        fecha_nacimiento: String,
        #[arg(long)]
        telefono: String,
    },
    /// Search patients by name or surname and show their appointments.
    Buscar { termino: String },
    /// Book an appointment.
    Agendar {
        #[arg(long, default_value = "")]
        paciente: String,
        #[arg(long, default_value = "")]
        medico: String,
        /// YYYY-MM-DDTHH:MM
        #[arg(long, default_value = "")]
        fecha_hora: String,
        #[arg(long, default_value = "")]
        motivo: String,
    },
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut controller = ViewController::new(HttpApi::new(cli.api_url));
    controller.start().await;

    let section = match cli.command {
        Command::Citas => {
            controller.navigate(Section::Appointments).await;
            Section::Appointments
        }
        Command::Registrar {
            nombre,
            apellido,
            fecha_nacimiento,
            telefono,
        } => {
            controller.navigate(Section::Patients).await;
            controller.document_mut().register_form = RegisterForm {
                nombre,
                apellido,
                fecha_nacimiento,
                telefono,
            };
            controller.register_patient().await;
            Section::Patients
        }
        Command::Buscar { termino } => {
            controller.navigate(Section::Patients).await;
            controller.document_mut().search_input = termino;
            controller.search_patients().await;
            Section::Patients
        }
        Command::Agendar {
            paciente,
            medico,
            fecha_hora,
            motivo,
        } => {
            controller.navigate(Section::Booking).await;
            controller.document_mut().booking_form = BookingForm {
                id_paciente: paciente,
                id_medico: medico,
                fecha_hora,
                motivo,
            };
            controller.book_appointment().await;
            Section::Booking
        }
    };

    for alert in controller.document_mut().take_alerts() {
        eprintln!("{}", alert);
    }

    let document = controller.document();
    if cli.section_only {
        println!("{}", document.render_section(section));
    } else {
        print!("{}", document.render_page());
    }

    Ok(())
}
