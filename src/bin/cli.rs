use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use waboard_access::authz::{
    all_capabilities, can_access_route, describe_role, has_capability_named, Capability, Role,
};
use waboard_access::nav::NAV_ITEMS;
use waboard_access::session::{FileStore, SessionManager};

#[derive(Parser, Debug)]
#[command(author, version, about = "waboard access inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the role x capability matrix
    Matrix,
    /// Check a single (role, capability) pair by name
    Check { role: String, capability: String },
    /// Show which navigation entries a role may see
    Routes { role: String },
    /// Sign in with a demo account and persist the session
    Login { email: String, password: String },
    /// Show the persisted session, if any
    Whoami,
    /// Drop the persisted session
    Logout,
}

fn main() -> anyhow::Result<()> {
    load_env();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Matrix => print_matrix(),
        Commands::Check { role, capability } => {
            let allowed = has_capability_named(&role, &capability);
            println!("{}", if allowed { "allow" } else { "deny" });
        }
        Commands::Routes { role } => {
            let role = Role::from_name(&role)
                .with_context(|| format!("unknown role: {role}"))?;
            for item in NAV_ITEMS {
                let visible = can_access_route(role, item.path);
                println!("{:<8} {:<16} {}", if visible { "visible" } else { "hidden" }, item.path, item.label);
            }
        }
        Commands::Login { email, password } => {
            let manager = SessionManager::new(FileStore::new(session_path()));
            let session = manager.login(&email, &password)?;
            println!("signed in as {} ({})", session.email, describe_role(session.role).label);
        }
        Commands::Whoami => {
            let manager = SessionManager::new(FileStore::new(session_path()));
            match manager.restore()? {
                Some(session) => {
                    let descriptor = describe_role(session.role);
                    println!("{} <{}>", session.name, session.email);
                    println!("role:   {} ({})", session.role, descriptor.label);
                    if let Some(tenant) = &session.tenant {
                        println!("tenant: {tenant}");
                    }
                    println!("since:  {}", session.issued_at.to_rfc3339());
                }
                None => println!("not signed in"),
            }
        }
        Commands::Logout => {
            let manager = SessionManager::new(FileStore::new(session_path()));
            manager.logout()?;
            println!("signed out");
        }
    }

    Ok(())
}

fn print_matrix() {
    print!("{:<20}", "capability");
    for role in Role::ALL {
        print!(" {:<14}", role.as_str());
    }
    println!();

    let sets: Vec<_> = Role::ALL.iter().map(|role| all_capabilities(*role)).collect();
    let mut current_area = None;
    for cap in Capability::ALL {
        if current_area != Some(cap.area()) {
            current_area = Some(cap.area());
            println!("-- {}", cap.area());
        }
        print!("{:<20}", cap.as_str());
        for set in &sets {
            print!(" {:<14}", if set.contains(cap) { "yes" } else { "-" });
        }
        println!();
    }
}

fn session_path() -> PathBuf {
    std::env::var("WABOARD_SESSION_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".waboard/session.json"))
}

fn load_env() {
    // Try to load env from CWD; fall back to the crate-local `.env`.
    if dotenvy::dotenv().is_err() {
        let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
        let _ = dotenvy::from_path(crate_env);
    }
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
