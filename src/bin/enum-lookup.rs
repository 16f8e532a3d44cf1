use std::fmt::Display;
use std::process::ExitCode;
use std::str::FromStr;

use enumerator::lookup;
use enumerator::Enumeration;
use enumerator::Truthy;

use argh::FromArgs;
use tracing_subscriber::EnvFilter;

/// Look up instances of the bundled example enumerations (`colour`, `weekday`) by name
/// or value. Without `--name` or `--value` all instances are listed.
#[derive(FromArgs)]
pub struct Arguments {
    /// enumeration to query, `colour` or `weekday`.
    #[argh(positional)]
    pub family: String,
    /// name of the instance to look up. names are case sensitive.
    #[argh(option, short = 'n')]
    pub name: Option<String>,
    /// value of the instance to look up. zero never matches, use `--check` to test
    /// for zero-valued instances.
    #[argh(option, short = 'v')]
    pub value: Option<String>,
    /// only print whether the given name or value exists, as `true` or `false`.
    #[argh(switch, short = 'c')]
    pub check: bool,
    /// trace lookups on stderr. `RUST_LOG` takes precedence.
    #[argh(switch)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Enumeration)]
#[enumeration(u32)]
enum Colour {
    #[instance("red", 1001)]
    Red,
    #[instance("blue", 1002)]
    Blue,
    #[instance(1003)]
    Green,
}

/// ISO 8601 weekday numbers.
#[derive(Clone, Copy, Enumeration)]
#[enumeration(u8)]
enum Weekday {
    #[instance("monday", 1)]
    Monday,
    #[instance("tuesday", 2)]
    Tuesday,
    #[instance("wednesday", 3)]
    Wednesday,
    #[instance("thursday", 4)]
    Thursday,
    #[instance("friday", 5)]
    Friday,
    #[instance("saturday", 6)]
    Saturday,
    #[instance("sunday", 7)]
    Sunday,
}

fn main() -> ExitCode {
    let args: Arguments = argh::from_env();
    init_tracing(args.verbose);
    let result = match args.family.as_str() {
        "colour" | "color" => query::<Colour>(&args),
        "weekday" => query::<Weekday>(&args),
        other => Err(format!(
            "Unknown enumeration {other:?}, expected `colour` or `weekday`"
        )),
    };
    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(why) => {
            eprintln!("{why}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` or, failing that, by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the query described by `args` against `T` and return the lines to print.
fn query<T>(args: &Arguments) -> Result<Vec<String>, String>
where
    T: Enumeration,
    T::Value: Display + FromStr + Truthy,
    <T::Value as FromStr>::Err: Display,
{
    let found = match (&args.name, &args.value) {
        (Some(_), Some(_)) => {
            return Err("Give either --name or --value, not both".to_owned());
        }
        (Some(name), None) if args.check => {
            return Ok(vec![lookup::is_name_valid::<T>(name).to_string()])
        }
        (Some(name), None) => lookup::get_by_name::<T>(name, None)
            .ok_or_else(|| format!("No instance named {name:?}"))?,
        (None, Some(value)) => {
            let parsed = value
                .parse::<T::Value>()
                .map_err(|why| format!("Invalid value {value:?} ({why})"))?;
            if args.check {
                return Ok(vec![lookup::is_value_valid::<T>(&parsed).to_string()]);
            }
            lookup::get_by_value::<T>(&parsed, None)
                .ok_or_else(|| format!("No instance with value {value:?}"))?
        }
        (None, None) if args.check => {
            return Err("--check needs --name or --value".to_owned())
        }
        (None, None) => {
            return Ok(lookup::get_all::<T>()
                .iter()
                .map(|instance| format!("- {}", format_instance(instance)))
                .collect())
        }
    };
    Ok(vec![format_instance(found)])
}

/// `name: value`, with the name quoted if needed.
fn format_instance<T>(instance: &T) -> String
where
    T: Enumeration,
    T::Value: Display,
{
    format!("{}: {}", quote_if_needed(instance.name()), instance.value())
}

/// Quote and escape `name` if printing it bare would make the `name: value` line
/// ambiguous. Otherwise return it unchanged.
fn quote_if_needed(name: &str) -> String {
    let needs_quotes = name.is_empty()
        || name.starts_with(char::is_whitespace)
        || name.ends_with(char::is_whitespace)
        || name.contains([':', '#', '"'])
        || name.contains(char::is_control);
    if needs_quotes {
        format!("\"{}\"", name.escape_default())
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn arguments(
        family: &str,
        name: Option<&str>,
        value: Option<&str>,
        check: bool,
    ) -> Arguments {
        Arguments {
            family: family.to_owned(),
            name: name.map(str::to_owned),
            value: value.map(str::to_owned),
            check,
            verbose: false,
        }
    }

    #[test]
    fn test_quote_if_needed() {
        let cases = [
            ("", "\"\""),
            ("red", "red"),
            ("Green", "Green"),
            (" red", "\" red\""),
            ("red ", "\"red \""),
            ("re:d", "\"re:d\""),
            ("#red", "\"#red\""),
            ("re\"d", "\"re\\\"d\""),
            ("re\nd", "\"re\\nd\""),
        ];
        for (input, expected) in cases {
            assert_eq!(quote_if_needed(input), expected);
        }
    }

    #[test]
    fn test_query_all() {
        let lines = query::<Colour>(&arguments("colour", None, None, false)).unwrap();
        assert_eq!(lines, ["- red: 1001", "- blue: 1002", "- Green: 1003"]);
    }

    #[test]
    fn test_query_by_name() {
        let lines = query::<Weekday>(&arguments("weekday", Some("friday"), None, false));
        assert_eq!(lines, Ok(vec!["friday: 5".to_owned()]));
        let missing = query::<Weekday>(&arguments("weekday", Some("Friday"), None, false));
        assert!(missing.is_err());
    }

    #[test]
    fn test_query_by_value() {
        let lines = query::<Colour>(&arguments("colour", None, Some("1002"), false));
        assert_eq!(lines, Ok(vec!["blue: 1002".to_owned()]));
        let invalid = query::<Colour>(&arguments("colour", None, Some("blue"), false));
        assert!(invalid.unwrap_err().starts_with("Invalid value"));
    }

    #[test]
    fn test_query_check() {
        let valid = query::<Colour>(&arguments("colour", Some("red"), None, true));
        assert_eq!(valid, Ok(vec!["true".to_owned()]));
        let invalid = query::<Weekday>(&arguments("weekday", None, Some("0"), true));
        assert_eq!(invalid, Ok(vec!["false".to_owned()]));
        assert!(query::<Colour>(&arguments("colour", None, None, true)).is_err());
    }

    #[test]
    fn test_query_name_and_value() {
        let both = query::<Colour>(&arguments("colour", Some("red"), Some("1001"), false));
        assert!(both.is_err());
    }
}
