use nxutil::error::NxError;

fn main() {
    if let Err(e) = nxutil::cli::run() {
        match e.downcast_ref::<NxError>() {
            Some(nx) if nx.to_stdout() => println!("{nx}"),
            _ => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}
