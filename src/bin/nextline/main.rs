use std::io::{stdout, BufWriter, Read, Write};
use std::path::Path;
use std::process::exit;

use log::{error, info};

use nextline::{reader::compression::CompressionScheme, AppResult, Line, LineReader, Settings};

mod args;
use args::CliOptions;

mod init;
use init::{init_log, init_settings};

// exit codes
pub const EXIT_READ_ERROR: i32 = 1;
pub const EXIT_SETTINGS_ERROR: i32 = 2;
pub const EXIT_LOGGER_ERROR: i32 = 3;

fn main() {
    // manage arguments from command line
    let options = CliOptions::get_options();

    init_log(&options);

    let settings = match init_settings(&options) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("invalid settings: {}", e);
            exit(EXIT_SETTINGS_ERROR);
        }
    };

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = if options.interleave {
        interleave(&options, &settings, &mut out)
    } else {
        sequential(&options, &settings, &mut out)
    };

    // flush what was printed before a possible error
    let result = result.and_then(|_| out.flush().map_err(Into::into));

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("nextline: {}", e);
        exit(EXIT_READ_ERROR);
    }
    info!("end of reading");
}

// print the line as is, optionally numbered
fn print_line<W: Write>(out: &mut W, number: Option<u64>, line: &Line) -> AppResult<()> {
    if let Some(n) = number {
        write!(out, "{:>6}\t", n)?;
    }
    out.write_all(line.as_bytes())?;
    Ok(())
}

// standard input or a possibly compressed file
fn open_source(path: &Path) -> AppResult<Box<dyn Read>> {
    if path == Path::new("-") {
        #[cfg(unix)]
        return Ok(Box::new(nextline::Fd::new(0)?));

        #[cfg(not(unix))]
        return Ok(Box::new(std::io::stdin()));
    }

    CompressionScheme::from_path(path).reader(path)
}

/// Prints all files one after the other.
fn sequential<W: Write>(options: &CliOptions, settings: &Settings, out: &mut W) -> AppResult<()> {
    // numbering runs across files
    let mut count = 0;

    for path in &options.files {
        info!("reading {:?}", path);

        let mut reader = LineReader::from_settings(open_source(path)?, settings);
        while let Some(line) = reader.next_line()? {
            count += 1;
            let number = if options.number { Some(count) } else { None };
            print_line(out, number, &line)?;
        }

        info!(
            "{:?}: {} lines, {} read calls",
            path,
            reader.lines(),
            reader.reads()
        );
    }
    Ok(())
}

/// Prints one line of each file in turn through a single descriptor table.
#[cfg(unix)]
fn interleave<W: Write>(options: &CliOptions, settings: &Settings, out: &mut W) -> AppResult<()> {
    use std::fs::File;
    use std::os::unix::io::{AsRawFd, RawFd};

    use nextline::{AppCustomErrorKind, AppError, FdTable};

    // files must stay open while their descriptors are read
    let mut files = Vec::new();
    let mut active: Vec<RawFd> = Vec::new();

    for path in &options.files {
        if path == Path::new("-") {
            active.push(0);
            continue;
        }
        if CompressionScheme::from_path(path).is_compressed() {
            return Err(AppError::new(
                AppCustomErrorKind::UnsupportedCompression,
                &format!("{:?}: compressed files can't be interleaved", path),
            ));
        }
        let file = File::open(path)?;
        info!("{:?} opened as fd={}", path, file.as_raw_fd());
        active.push(file.as_raw_fd());
        files.push(file);
    }

    let mut table = FdTable::new(settings);
    let mut count = 0;

    while !active.is_empty() {
        let mut still_active = Vec::with_capacity(active.len());

        for fd in active {
            match table.next_line(fd)? {
                Some(line) => {
                    count += 1;
                    let number = if options.number { Some(count) } else { None };
                    print_line(out, number, &line)?;
                    still_active.push(fd);
                }
                None => table.release(fd),
            }
        }

        active = still_active;
    }

    info!("{} lines read from {} files", count, options.files.len());
    Ok(())
}

#[cfg(not(unix))]
fn interleave<W: Write>(_options: &CliOptions, _settings: &Settings, _out: &mut W) -> AppResult<()> {
    Err(nextline::AppError::new(
        nextline::AppCustomErrorKind::InvalidArgument,
        "interleaving needs raw descriptors, only available on unix",
    ))
}
