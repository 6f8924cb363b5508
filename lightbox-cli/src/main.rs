//! Entry point for the Lightbox command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(err) = lightbox_cli::run() {
        eprintln!("lightbox: {err}");
        std::process::exit(1);
    }
}
