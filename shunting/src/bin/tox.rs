extern crate shunting;

mod logger {
    use log::{Level, LevelFilter, Log, Metadata, Record};

    struct StderrLogger;

    static LOGGER: StderrLogger = StderrLogger;

    impl Log for StderrLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                let tag = match record.level() {
                    Level::Error => "ERROR",
                    Level::Warn => "WARN",
                    Level::Info => "INFO",
                    Level::Debug => "DEBUG",
                    Level::Trace => "TRACE",
                };
                eprintln!("[{}] {}: {}", tag, record.target(), record.args());
            }
        }

        fn flush(&self) {}
    }

    // -v flags win over TOX_LOG, default is warn
    pub fn resolve_level(verbosity: usize, env: Option<&str>) -> Result<LevelFilter, String> {
        match (verbosity, env) {
            (0, None) => Ok(LevelFilter::Warn),
            (0, Some(l)) => l.parse::<LevelFilter>()
                .map_err(|_| format!("ignoring invalid TOX_LOG={:?}, using warn", l)),
            (1, _) => Ok(LevelFilter::Debug),
            _ => Ok(LevelFilter::Trace),
        }
    }

    pub fn init(verbosity: usize) {
        let env = std::env::var("TOX_LOG").ok();
        let level = resolve_level(verbosity, env.as_deref()).unwrap_or_else(|warning| {
            eprintln!("{}", warning);
            LevelFilter::Warn
        });
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

mod cli {
    use shunting::{Error, ShuntingParser};

    pub fn evalexpr(input: &str, show_rpn: bool) -> Result<f64, Error> {
        let expr = ShuntingParser::parse_str(input)?;
        if show_rpn {
            println!("{}", expr);
        }
        let result = expr.eval()?;
        match expr.to_infix() {
            Some(infix) => println!("{} = {}", infix, result),
            None => println!("{}", result),
        }
        Ok(result)
    }
}

struct Args {
    verbosity: usize,
    show_rpn: bool,
    expr: Vec<String>,
}

fn parse_args() -> Args {
    let mut args = Args { verbosity: 0, show_rpn: false, expr: Vec::new() };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--rpn" => args.show_rpn = true,
            "-v" => args.verbosity += 1,
            "-vv" => args.verbosity += 2,
            _ => args.expr.push(arg),
        }
    }
    args
}

fn main() {
    let args = parse_args();
    logger::init(args.verbosity);

    let input = if !args.expr.is_empty() {
        args.expr.join(" ")
    } else {
        use rustyline::error::ReadlineError;
        let mut rl = match rustyline::DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Readline err: {:?}", e);
                std::process::exit(1);
            }
        };
        match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return,
            Err(e) => {
                eprintln!("Readline err: {:?}", e);
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = cli::evalexpr(&input, args.show_rpn) {
        log::debug!("failed on {:?}", input);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{cli, logger};
    use log::LevelFilter;

    #[test]
    fn log_level() {
        assert_eq!(logger::resolve_level(0, None), Ok(LevelFilter::Warn));
        assert_eq!(logger::resolve_level(0, Some("trace")), Ok(LevelFilter::Trace));
        assert_eq!(logger::resolve_level(0, Some("OFF")), Ok(LevelFilter::Off));
        assert_eq!(logger::resolve_level(1, Some("error")), Ok(LevelFilter::Debug));
        assert_eq!(logger::resolve_level(2, None), Ok(LevelFilter::Trace));
    }

    #[test]
    fn bad_log_level_is_reported() {
        assert_eq!(logger::resolve_level(0, Some("loud")),
                   Err(format!("ignoring invalid TOX_LOG=\"loud\", using warn")));
        // flags make TOX_LOG irrelevant
        assert_eq!(logger::resolve_level(1, Some("loud")), Ok(LevelFilter::Debug));
    }

    #[test]
    fn single_expression() {
        assert_eq!(cli::evalexpr("3+4*2", true), Ok(11.0));
        assert!(cli::evalexpr("3+", false).is_err());
        assert!(cli::evalexpr("3 +4", false).is_err());
        let long = vec!["1"; 100_000].join("+");
        assert_eq!(cli::evalexpr(&long, false), Ok(100_000.0));
    }
}
