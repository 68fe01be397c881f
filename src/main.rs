use clap::{crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use degdist::{
    config::{Config, MalformedPolicy, Profile},
    fit::SampleShape,
    generate::STANDARD_SET,
    pipeline::{BatchOutcome, Pipeline, Target},
};
use std::error::Error;

fn common_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("output-dir")
            .help("Writes the <name>.csv distributions into this directory")
            .long("output-dir")
            .takes_value(true)
            .default_value("."),
        Arg::with_name("fit-input")
            .help("Sample handed to the power-law fit")
            .long("fit-input")
            .takes_value(true)
            .default_value("degrees")
            .possible_values(&["degrees", "counts"]),
        Arg::with_name("threads")
            .help("Number of worker threads, all cores by default")
            .long("threads")
            .takes_value(true),
    ]
}

fn parse_config(matches: &ArgMatches) -> Result<Config, Box<dyn Error>> {
    Ok(Config::default()
        .output_dir(matches.value_of("output-dir").unwrap())
        .sample_shape(matches.value_of("fit-input").unwrap().parse::<SampleShape>()?)
        .threads(
            matches
                .value_of("threads")
                .map(str::parse::<usize>)
                .transpose()?,
        ))
}

fn handle_file(matches: &ArgMatches) -> Result<BatchOutcome, Box<dyn Error>> {
    let config = parse_config(matches)?
        .profile(matches.value_of("SIZE").unwrap().parse::<Profile>()?)
        .policy(if matches.is_present("lenient") {
            MalformedPolicy::Lenient
        } else {
            MalformedPolicy::Strict
        });
    let target = Target::file(matches.value_of("INPUT").unwrap());
    Ok(Pipeline::from_config(config)?.run_batch(&[target]))
}

fn handle_generate(matches: &ArgMatches) -> Result<BatchOutcome, Box<dyn Error>> {
    let config = parse_config(matches)?;
    let targets = match matches.values_of("graphs") {
        Some(names) => names.map(Target::generated).collect::<Result<Vec<_>, _>>()?,
        None => STANDARD_SET
            .iter()
            .map(|&(name, generator)| Target::Generated(name.to_owned(), generator))
            .collect(),
    };
    Ok(Pipeline::from_config(config)?.run_batch(&targets))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let graph_names: Vec<&str> = STANDARD_SET.iter().map(|&(name, _)| name).collect();
    let matches = App::new("degdist")
        .version(crate_version!())
        .about("Computes degree distributions of simple graphs and fits power laws")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("file")
                .about("Processes an edge-list file")
                .arg(Arg::with_name("INPUT").required(true))
                .arg(
                    Arg::with_name("SIZE")
                        .help("large: space-delimited with a header line; small: comma-delimited")
                        .default_value("small")
                        .possible_values(&["large", "small"]),
                )
                .arg(
                    Arg::with_name("lenient")
                        .help("Skips malformed records instead of aborting")
                        .long("lenient")
                        .takes_value(false),
                )
                .args(&common_args()),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("Processes the standard set of random graphs")
                .arg(
                    Arg::with_name("graphs")
                        .help("Processes only these graphs")
                        .long("graphs")
                        .takes_value(true)
                        .multiple(true)
                        .require_delimiter(true)
                        .possible_values(&graph_names),
                )
                .args(&common_args()),
        )
        .get_matches();
    let outcome = match matches.subcommand() {
        ("file", Some(matches)) => handle_file(matches)?,
        ("generate", Some(matches)) => handle_generate(matches)?,
        _ => return Ok(()),
    };
    println!("{}", outcome);
    Ok(outcome.check()?)
}
