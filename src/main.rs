use filenav::core::commands::CommandExecutor;
use filenav::core::config::{Config, ConfigPaths};
use filenav::core::env::EnvPaths;
use filenav::core::fs::FileManager;
use filenav::core::session::Session;
use filenav::flags::Flags;
use filenav::highlight::SyntaxHighlighter;
use filenav::logging;
use filenav::shell::Shell;
use std::env;
use std::io::{self, IsTerminal};

fn main() -> Result<(), filenav::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("filenav {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let env_paths = EnvPaths::new()?;
    let config_paths = match flags.get_value("config") {
        Some(path) => ConfigPaths::from_file(path),
        None => ConfigPaths::new(&env_paths),
    };
    let mut config = Config::new(config_paths);
    config.load()?;
    let table = config.command_table();

    let rust_log = env::var("RUST_LOG").ok();
    logging::init(&logging::resolve_filter(
        flags.is_set("debug"),
        flags.is_set("quiet"),
        config.log_filter(),
        rust_log.as_deref(),
    ));
    for warning in config.warnings() {
        tracing::warn!("{}", warning);
    }

    let username = flags.username().unwrap_or_else(whoami::username);
    tracing::info!(%username, home = %env_paths.home().display(), "starting");

    let files = FileManager::new(username.as_str(), env_paths.home());

    // At the editor prompt Ctrl-C is reported as an interrupt instead. A
    // running command is stopped and the session says goodbye itself.
    let interrupt = files.interrupt();
    let farewell = Session::farewell_message(&username);
    ctrlc::set_handler(move || {
        if !interrupt.trigger() {
            println!("\n{}", farewell);
            std::process::exit(0);
        }
    })?;

    let executor = CommandExecutor::new(table);

    if io::stdin().is_terminal() {
        let highlighter = SyntaxHighlighter::with_color(config.color());
        let session = Session::new(files, executor, highlighter);
        let mut shell = Shell::new(session, config.prompt(), highlighter)?;
        shell.run()
    } else {
        let mut session = Session::new(files, executor, SyntaxHighlighter::plain());
        let stdin = io::stdin();
        session.run(stdin.lock(), &mut io::stdout())
    }
}
