use remote_request_gen::cli;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.init_tracing();
    command_line_interface.run()
}
