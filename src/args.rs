use clap::{value_parser, Arg, ArgAction, Command};

/// Parse a modulus given in decimal or with a `0x` prefix
fn parse_modulus(input: &str) -> Result<u64, String> {
    let parsed = match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => input.parse(),
    };
    parsed.map_err(|err| format!("Invalid modulus {input:?}: {err}"))
}

pub fn build_command() -> Command {
    Command::new("rsdemo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Encode a message with Reed-Solomon, corrupt it, and decode it again")
        .arg(
            Arg::new("message")
                .help("Text to encode (one symbol per character)")
                .required(true),
        )
        .arg(
            Arg::new("field")
                .short('f')
                .long("field")
                .help("Field to compute in")
                .value_parser(["prime", "binary"])
                .default_value("prime"),
        )
        .arg(
            Arg::new("modulus")
                .short('m')
                .long("modulus")
                .help("Field modulus (default: 1231 for prime, 0x11D for binary)")
                .value_name("MODULUS")
                .value_parser(parse_modulus),
        )
        .arg(
            Arg::new("generator")
                .short('g')
                .long("generator")
                .help("Generator element (default: 3 for prime, 2 for binary)")
                .value_name("ELEMENT")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("ecc")
                .short('e')
                .long("ecc")
                .help("Number of error-correction symbols")
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .default_value("16"),
        )
        .arg(
            Arg::new("corrupt")
                .short('c')
                .long("corrupt")
                .help("Number of symbols to corrupt (default: ecc / 2)")
                .value_name("COUNT")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for the corruption RNG")
                .value_name("SEED")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log decoder stages (repeat for more detail)")
                .action(ArgAction::Count),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_command().get_matches()
}
