use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Env};

/// Installs the process logger. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:>5} {}: {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
