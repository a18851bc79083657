use std::path::PathBuf;
use std::str::FromStr;

use clap::{Arg, Command};
use simplelog::LevelFilter;

// This structure holds the command line arguments
#[derive(Debug)]
pub struct CliOptions {
    pub files: Vec<PathBuf>,
    pub settings_file: Option<PathBuf>,
    pub chunk_size: Option<String>,
    pub number: bool,
    pub interleave: bool,
    pub logger: PathBuf,
    pub logger_level: LevelFilter,
}

impl Default for CliOptions {
    fn default() -> Self {
        let mut logger = std::env::temp_dir();
        logger.push("nextline.log");

        CliOptions {
            files: Vec::new(),
            settings_file: None,
            chunk_size: None,
            number: false,
            interleave: false,
            logger,
            logger_level: LevelFilter::Info,
        }
    }
}

impl CliOptions {
    pub fn get_options() -> CliOptions {
        let matches = Command::new("nextline")
            .version(env!("CARGO_PKG_VERSION"))
            .author("Alain Viguier dandyvica@gmail.com")
            .about("Prints files line by line, reading them in fixed-size chunks")
            .arg(
                Arg::new("files")
                    .required(true)
                    .multiple_values(true)
                    .takes_value(true)
                    .help("Files to read. Use dash '-' for standard input"),
            )
            .arg(
                Arg::new("chunk")
                    .short('c')
                    .long("chunk-size")
                    .required(false)
                    .help("Number of bytes requested by each read call")
                    .takes_value(true),
            )
            .arg(
                Arg::new("settings")
                    .short('s')
                    .long("settings")
                    .required(false)
                    .help("Name of the optional YAML settings file")
                    .takes_value(true),
            )
            .arg(
                Arg::new("number")
                    .short('n')
                    .long("number")
                    .required(false)
                    .help("Prefix each line with its number")
                    .takes_value(false),
            )
            .arg(
                Arg::new("interleave")
                    .short('i')
                    .long("interleave")
                    .required(false)
                    .help("Print one line of each file in turn, until all are exhausted")
                    .takes_value(false),
            )
            .arg(
                Arg::new("log")
                    .short('l')
                    .long("log")
                    .required(false)
                    .help("Name of the log file for logging information")
                    .takes_value(true),
            )
            .arg(
                Arg::new("loglevel")
                    .long("loglevel")
                    .required(false)
                    .help("Logging level")
                    .possible_values(["off", "error", "warn", "info", "debug", "trace"])
                    .takes_value(true),
            )
            .get_matches();

        // save all cli options into a structure
        let mut options = CliOptions::default();

        // files are mandatory
        if let Some(files) = matches.values_of("files") {
            options.files = files.map(PathBuf::from).collect();
        }

        // parsed along with the settings, to report errors the same way
        options.chunk_size = matches.value_of("chunk").map(String::from);

        if let Some(settings) = matches.value_of("settings") {
            options.settings_file = Some(PathBuf::from(settings));
        }

        if let Some(log) = matches.value_of("log") {
            options.logger = PathBuf::from(log);
        }

        if let Some(level) = matches.value_of("loglevel") {
            options.logger_level = LevelFilter::from_str(level).unwrap_or(LevelFilter::Info);
        }

        options.number = matches.is_present("number");
        options.interleave = matches.is_present("interleave");

        options
    }
}
