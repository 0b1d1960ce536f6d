//! fologic CLI - first-order logic normal forms, evaluation and resolution proofs.

use fologic::repl::Repl;

fn main() {
    env_logger::init();

    println!("fologic - first-order logic workbench");
    println!("Type :help for help, :quit to exit.\n");

    let mut repl = Repl::new();
    if let Err(e) = repl.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
