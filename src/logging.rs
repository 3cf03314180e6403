use std::io::Write;

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};

pub fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,  // default: warnings and errors
        1 => LevelFilter::Info,  // -v: info and up
        2 => LevelFilter::Debug, // -vv: debug and up
        _ => LevelFilter::Trace, // -vvv: trace and up
    };

    let mut builder = Builder::new();
    builder.filter_level(level);

    builder.format(move |buf, record| {
        let label = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warn ".yellow().bold(),
            Level::Info => "info ".white().bold(),
            Level::Debug => "debug".bright_black(),
            Level::Trace => "trace".bright_black(),
        };

        if level >= LevelFilter::Debug {
            writeln!(buf, "{} [{}] {}", label, record.target(), record.args())
        } else {
            writeln!(buf, "{} {}", label, record.args())
        }
    });

    builder.init();
}
