use colored::Colorize;
use plugin_abi_gen::cli;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();

    // RUST_LOG wins over -d
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(command_line_interface.log_level()),
    )
    .init();

    if let Err(error) = command_line_interface.run() {
        log::debug!("{error:?}");
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
