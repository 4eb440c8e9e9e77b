use env_logger::{Builder, Env};
use log::LevelFilter;

/// Set up `env_logger` for the frame host.
///
/// Serves and misses show at info, per-frame summaries need `--verbose`
/// (debug), and transforms for every frame need `RUST_LOG=trace`. A
/// `RUST_LOG` value always overrides the flag.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(default_level.to_string());
    let mut builder = Builder::from_env(env);

    // Host tests build several games in one process; keep the first logger
    if builder.try_init().is_err() {
        log::debug!("Logger already installed");
    }
}
