//! Command-line argument parsing.
//!
//! Turns raw argument tokens into a typed [`Command`]. This is the only place
//! where strings are converted to point values.

use crate::error::ArgumentError;

/// A parsed and validated CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add points to a customer's balance.
    Earn { customer_id: String, points: i64 },

    /// Deduct points from a customer's balance if enough are available.
    Redeem { customer_id: String, points: i64 },

    /// Print usage text.
    Help,
}

/// Parses the arguments that follow the program name.
///
/// An empty list or a leading `help` always yields [`Command::Help`];
/// anything after `help` is ignored.
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Command, ArgumentError> {
    let command = match args.first() {
        None => return Ok(Command::Help),
        Some(first) => first.as_ref(),
    };

    match command {
        "help" => Ok(Command::Help),
        "earn" | "redeem" => {
            let (customer_id, points) = parse_customer_and_points(command, args)?;
            if command == "earn" {
                Ok(Command::Earn {
                    customer_id,
                    points,
                })
            } else {
                Ok(Command::Redeem {
                    customer_id,
                    points,
                })
            }
        }
        other => Err(ArgumentError::UnknownCommand(other.to_string())),
    }
}

/// Validates `<command> <customerId> <points>`.
///
/// The argument count is checked last so that a missing or malformed value is
/// reported before a surplus token.
fn parse_customer_and_points<S: AsRef<str>>(
    command: &str,
    args: &[S],
) -> Result<(String, i64), ArgumentError> {
    let customer_id = match args.get(1).map(AsRef::as_ref) {
        Some(id) if !id.trim().is_empty() => id,
        _ => {
            return Err(ArgumentError::MissingCustomerId {
                command: command.to_string(),
            })
        }
    };

    let points_str = match args.get(2).map(AsRef::as_ref) {
        Some(p) if !p.is_empty() => p,
        _ => {
            return Err(ArgumentError::MissingPoints {
                command: command.to_string(),
            })
        }
    };

    let points = parse_points(points_str).ok_or_else(|| ArgumentError::InvalidPoints {
        command: command.to_string(),
        value: points_str.to_string(),
    })?;

    if args.len() != 3 {
        return Err(ArgumentError::WrongArgumentCount {
            command: command.to_string(),
            count: args.len(),
        });
    }

    Ok((customer_id.to_string(), points))
}

/// Parses a strictly positive whole number. Returns `None` for anything else.
///
/// Whole numbers in decimal or exponent form (`"10.0"`, `"1e3"`) are accepted;
/// values with a fractional part are not.
fn parse_points(value: &str) -> Option<i64> {
    let value = value.trim();
    let points = match value.parse::<i64>() {
        Ok(points) => points,
        Err(_) => {
            let float = value.parse::<f64>().ok()?;
            if !float.is_finite() || float.fract() != 0.0 || float >= i64::MAX as f64 {
                return None;
            }
            float as i64
        }
    };
    Some(points).filter(|p| *p > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earn(customer_id: &str, points: i64) -> Command {
        Command::Earn {
            customer_id: customer_id.to_string(),
            points,
        }
    }

    #[test]
    fn test_empty_args_is_help() {
        let args: [&str; 0] = [];
        assert_eq!(parse(&args), Ok(Command::Help));
    }

    #[test]
    fn test_help_ignores_trailing_tokens() {
        assert_eq!(parse(&["help"]), Ok(Command::Help));
        assert_eq!(parse(&["help", "extra", "args"]), Ok(Command::Help));
    }

    #[test]
    fn test_parse_earn() {
        assert_eq!(parse(&["earn", "testUser1", "100"]), Ok(earn("testUser1", 100)));
    }

    #[test]
    fn test_parse_redeem() {
        assert_eq!(
            parse(&["redeem", "testUser8", "50"]),
            Ok(Command::Redeem {
                customer_id: "testUser8".to_string(),
                points: 50,
            })
        );
    }

    #[test]
    fn test_accepts_owned_strings() {
        let args = vec!["earn".to_string(), "u1".to_string(), "100".to_string()];
        assert_eq!(parse(&args), Ok(earn("u1", 100)));
    }

    #[test]
    fn test_points_surrounding_whitespace_is_trimmed() {
        assert_eq!(parse(&["earn", "u1", " 7 "]), Ok(earn("u1", 7)));
    }

    #[test]
    fn test_missing_customer_id() {
        for args in [
            &["earn"][..],
            &["earn", "", "100"][..],
            &["redeem", "   ", "100"][..],
        ] {
            assert!(matches!(
                parse(args),
                Err(ArgumentError::MissingCustomerId { .. })
            ));
        }
    }

    #[test]
    fn test_missing_points() {
        assert_eq!(
            parse(&["earn", "testUser2"]),
            Err(ArgumentError::MissingPoints {
                command: "earn".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_points() {
        for value in [
            "abc",
            "10.5",
            "25.7",
            "0",
            "0.0",
            "-50",
            "-5",
            "-2.0",
            "1e-3",
            "inf",
            "NaN",
            "99999999999999999999",
        ] {
            let result = parse(&["redeem", "testUser3", value]);
            assert_eq!(
                result,
                Err(ArgumentError::InvalidPoints {
                    command: "redeem".to_string(),
                    value: value.to_string(),
                }),
                "value {:?} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_whole_numbers_in_decimal_or_exponent_form() {
        assert_eq!(parse(&["earn", "u1", "10.0"]), Ok(earn("u1", 10)));
        assert_eq!(parse(&["earn", "u1", "1e3"]), Ok(earn("u1", 1000)));
        assert_eq!(parse(&["earn", "u1", "5."]), Ok(earn("u1", 5)));
    }

    #[test]
    fn test_too_many_arguments() {
        assert_eq!(
            parse(&["earn", "testUser7", "100", "extra"]),
            Err(ArgumentError::WrongArgumentCount {
                command: "earn".to_string(),
                count: 4,
            })
        );
    }

    #[test]
    fn test_invalid_points_reported_before_argument_count() {
        assert!(matches!(
            parse(&["earn", "u1", "abc", "extra"]),
            Err(ArgumentError::InvalidPoints { .. })
        ));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse(&["transfer", "u1", "5"]).unwrap_err();
        assert_eq!(err, ArgumentError::UnknownCommand("transfer".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown command: 'transfer'. Use 'help' for usage information."
        );
    }

    #[test]
    fn test_commands_are_case_sensitive() {
        assert!(matches!(
            parse(&["EARN", "u1", "5"]),
            Err(ArgumentError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = parse(&["redeem", "u1"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing points value for 'redeem' command. Usage: redeem <customerId> <points>"
        );

        let err = parse(&["earn", "u1", "-5"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid points value for 'earn' command. Points must be a positive integer."
        );
    }
}
