use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "displayfix", about = "Restores the configured monitor resolution and refresh rate")]
struct Opt {
    /// Config file with `monitor width height refresh` tuples
    #[structopt(short, long, parse(from_os_str), default_value = "config.txt")]
    config: PathBuf,

    /// File that receives one line per action
    #[structopt(short, long, parse(from_os_str), default_value = "log.txt")]
    log: PathBuf,

    /// Expect a single tuple instead of two
    #[structopt(long)]
    single: bool,

    /// Print the monitor count and current mode as JSON and exit
    #[structopt(long)]
    status: bool,
}

#[cfg(windows)]
fn main() -> color_eyre::Result<()> {
    use displayfix::config::Variant;
    use displayfix::{fixer, DisplayStatus, LogFile, Win32Display};

    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opt = Opt::from_args();
    let api = Win32Display;

    if opt.status {
        println!("{}", serde_json::to_string_pretty(&DisplayStatus::query(&api))?);
        return Ok(());
    }

    let variant = if opt.single { Variant::Single } else { Variant::Pair };
    let outcome = fixer::run(&api, &LogFile::new(opt.log), &opt.config, variant);
    log::debug!("Finished with {:?}", outcome);
    std::process::exit(outcome.exit_code());
}

#[cfg(not(windows))]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opt = Opt::from_args();
    log::debug!("{:?}", opt);
    Err(color_eyre::eyre::eyre!("displayfix can only change display modes on Windows"))
}
