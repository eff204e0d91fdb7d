use clap::{crate_description, crate_version, Arg, ArgAction, Command};
use pretty_env_logger::env_logger::Builder;
use std::env;
use std::io::Write;
use std::process::exit;

use che_endpoints::service::EndpointLister;
use che_endpoints::Config;

fn set_logger_level(b: &mut Builder) {
    let mut b = b;
    if env::var("RUST_LOG").is_err() {
        b = b.filter_level(log::LevelFilter::Info)
    }
    b.init();
}

fn setup_logger() {
    // Logs go to stderr; stdout is reserved for the endpoint listing.
    match std::env::var("RUST_LOG_STYLE") {
        Ok(s) if s == "SYSTEMD" => {
            let builder = &mut pretty_env_logger::env_logger::builder();
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "<{}>{}: {}",
                    match record.level() {
                        log::Level::Error => 3,
                        log::Level::Warn => 4,
                        log::Level::Info => 6,
                        log::Level::Debug => 7,
                        log::Level::Trace => 7,
                    },
                    record.target(),
                    record.args()
                )
            });
            set_logger_level(builder);
        }
        _ => {
            let builder = &mut pretty_env_logger::formatted_builder();
            set_logger_level(builder);
        }
    };
}

pub(crate) fn main() {
    let cli = Command::new("che-endpoints")
        .about(format!(
            "{}\n{} {}",
            crate_description!(),
            "Configuration is read from the CHE_API, CHE_WORKSPACE_ID",
            "and CHE_MACHINE_TOKEN environment variables.",
        ))
        .arg(
            Arg::new("check")
                .action(ArgAction::SetTrue)
                .short('t')
                .long("test")
                .help("Check the configuration without contacting the API"),
        )
        .arg(
            Arg::new("dump")
                .action(ArgAction::SetTrue)
                .long("dump")
                .help("Print the raw workspace document instead of its endpoints"),
        )
        .version(crate_version!());

    let args = cli.get_matches();

    setup_logger();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(err) => {
            println!("{err}");
            exit(1);
        }
    };

    let workspace_id = match config.workspace_id() {
        Ok(id) => id,
        Err(err) => {
            println!("{err}");
            exit(1);
        }
    };

    let client = match config.client() {
        Ok(c) => c,
        Err(err) => {
            println!("{err}");
            exit(1);
        }
    };

    if args.get_flag("check") {
        tracing::info!(
            api = config.api.as_deref().unwrap_or_default(),
            workspace = workspace_id,
            authenticated = client.config().headers.is_some(),
            projects_root = ?config.projects_root,
            "Configuration is valid."
        );
        exit(0);
    }

    let lister = EndpointLister::new(client, workspace_id);
    let result = {
        let mut out = std::io::stdout().lock();
        if args.get_flag("dump") {
            lister.dump(&mut out)
        } else {
            lister.run(&mut out).map(|_| ())
        }
    };

    match result {
        Ok(()) => {}
        // A broken workspace document is not something we can report on.
        Err(err) if err.is_structure() => panic!("{err}"),
        Err(err) => {
            println!("{err}");
            exit(1);
        }
    }
}
