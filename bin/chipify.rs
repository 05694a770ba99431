use chipify::emit;
use chipify::logger::ConsoleLogger;
use chipify::params::Parameters;
use chipify::pipeline::{self, Config};

use std::path::Path;

use clap::{Arg, ArgMatches, Command};
use log::error;


fn app() -> Command<'static> {
    Command::new("chipify")
        .about("A 1-bit bit-crushing tool for XO-CHIP.")
        .version(clap::crate_version!())
        .arg(Arg::new("infile")
                .help("The WAV file to bit crush")
                .value_name("INFILE")
                .required(true)
                .allow_invalid_utf8(true))
        .arg(Arg::new("outfile")
                .help("Override the default write target")
                .long_help(
                    "(Optional) Override the default write target.\n\n\
                     If absent, the input filename will be used as the base for\n\
                     output filenames. In both cases, the suffix is stripped, the\n\
                     bit-crushed sound is written to <stem>.out.wav and the\n\
                     Octo-compatible bytes are written to <stem>.out.txt in the\n\
                     current directory.")
                .value_name("OUTFILE")
                .required(false)
                .allow_invalid_utf8(true))
        .arg(Arg::new("quiet-sass")
                .help("Turn off sass lines; useful in build scripts")
                .short('q')
                .long("quiet-sass"))
        .arg(Arg::new("verbose")
                .help("Print filter and crusher details")
                .short('v')
                .long("verbose"))
        .arg(Arg::new("params")
                .help("Filter parameters to use (as yaml file)")
                .value_name("PARAMS")
                .short('p')
                .long("params")
                .takes_value(true)
                .allow_invalid_utf8(true))
}

fn config(matches: &ArgMatches) -> chipify::Result<Config> {
    let infile = Path::new(matches.value_of_os("infile").unwrap_or_default());
    let outfile = matches.value_of_os("outfile").map(Path::new);

    let params = match matches.value_of_os("params") {
        Some(path) => Parameters::load(path)?,
        None       => Parameters::default(),
    };

    // outputs land in the working directory, like the input's stem
    let cwd = std::env::current_dir().unwrap_or_default();

    Ok(Config {
        input: infile.to_path_buf(),
        output_base: emit::output_base(&cwd, infile, outfile),
        quiet_sass: matches.is_present("quiet-sass"),
        params,
    })
}

fn main() {
    // show full help if run without arguments
    if std::env::args_os().len() <= 1 {
        let _ = app().write_long_help(&mut std::io::stderr());
        std::process::exit(1);
    }

    let matches = app().get_matches();

    let logger = ConsoleLogger::new(matches.is_present("verbose"));
    if logger.init().is_err() {
        eprintln!("failed to initialize logger");
    }

    let result = config(&matches).and_then(|config| pipeline::run(&config));

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
