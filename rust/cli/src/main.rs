use std::io;

fn main() {
    callbreak_cli::init_logging();
    let code = callbreak_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
