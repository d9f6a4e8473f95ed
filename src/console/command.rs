//! Command parsing
//!
//! Turns an input line into a command plus its raw field values. Double
//! quotes group words into one field, so food names and amounts may contain
//! spaces. Closed option sets (sex, activity, unit) are parsed here; numeric
//! text stays raw so the tool handlers apply their own validation.

use crate::energy::{ActivityLevel, EnergyUnit, Sex};

/// Help text listing every command
pub const HELP: &str = r#"Commands:
  tdee <male|female> <age> <height-cm> <weight-kg> <activity>
      Estimate BMR, TDEE, and daily calorie targets.
      Activity: sedentary (1.2), light (1.375), moderate (1.55),
      active (1.725), very_active (1.9).
  reset
      Clear the stored TDEE result.
  add <name> [amount] <energy> [kcal|kJ]
      Track a food. Quote names or amounts that contain spaces.
      The unit defaults to kcal when omitted.
  remove <position>
      Remove the table row at that position.
  clear
      Remove every tracked entry.
  table
      Redraw the food table.
  convert <value> <kcal|kJ> <kcal|kJ>
      Convert between kilocalories and kilojoules.
  status
      Show session and build information.
  help
      Show this help.
  quit
      End the session."#;

/// A parsed console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Compute BMR, TDEE, and calorie targets
    Tdee {
        sex: Sex,
        age: String,
        height_cm: String,
        weight_kg: String,
        activity: ActivityLevel,
    },
    /// Clear the stored TDEE result
    Reset,
    /// Add a food entry and redraw the table
    Add {
        name: String,
        amount: String,
        energy: String,
        unit: EnergyUnit,
    },
    /// Remove the entry at a 1-based table position
    Remove { position: usize },
    /// Remove every entry
    Clear,
    /// Redraw the table without mutating it
    Table,
    /// Convert a value between energy units
    Convert {
        value: String,
        from: EnergyUnit,
        to: EnergyUnit,
    },
    /// Show session status
    Status,
    /// Show command help
    Help,
    /// End the session
    Quit,
}

/// Parse one input line into a command
///
/// Returns a plain message for unknown commands or malformed arguments.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let tokens = tokenize(line);
    let (name, args) = match tokens.split_first() {
        Some((name, args)) => (name, args),
        None => return Err("Type 'help' for a list of commands.".to_string()),
    };

    match name.to_lowercase().as_str() {
        "tdee" => parse_tdee(args),
        "reset" => Ok(Command::Reset),
        "add" => parse_add(args),
        "remove" | "rm" => parse_remove(args),
        "clear" => Ok(Command::Clear),
        "table" | "list" => Ok(Command::Table),
        "convert" => parse_convert(args),
        "status" => Ok(Command::Status),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!(
            "Unknown command: {}. Type 'help' for a list of commands.",
            other
        )),
    }
}

fn parse_tdee(args: &[String]) -> Result<Command, String> {
    if args.len() != 5 {
        return Err(
            "Usage: tdee <male|female> <age> <height-cm> <weight-kg> <activity>".to_string(),
        );
    }

    let sex = Sex::from_str(&args[0])
        .ok_or_else(|| format!("Unknown sex: {}. Use male or female.", args[0]))?;
    let activity = ActivityLevel::from_str(&args[4])
        .ok_or_else(|| format!("Unknown activity level: {}. {}", args[4], activity_choices()))?;

    Ok(Command::Tdee {
        sex,
        age: args[1].clone(),
        height_cm: args[2].clone(),
        weight_kg: args[3].clone(),
        activity,
    })
}

fn parse_add(args: &[String]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: add <name> [amount] <energy> [kcal|kJ]".to_string());
    }

    // A trailing unit token is optional; kcal is the default
    let (unit, rest) = match EnergyUnit::from_str(&args[args.len() - 1]) {
        Some(unit) if args.len() >= 3 => (unit, &args[..args.len() - 1]),
        _ => (EnergyUnit::Kcal, args),
    };

    Ok(Command::Add {
        name: rest[0].clone(),
        amount: rest[1..rest.len() - 1].join(" "),
        energy: rest[rest.len() - 1].clone(),
        unit,
    })
}

fn parse_remove(args: &[String]) -> Result<Command, String> {
    if args.len() != 1 {
        return Err("Usage: remove <position>".to_string());
    }
    match args[0].parse::<usize>() {
        Ok(position) => Ok(Command::Remove { position }),
        Err(_) => Err(format!("Invalid position: {}", args[0])),
    }
}

fn parse_convert(args: &[String]) -> Result<Command, String> {
    if args.len() != 3 {
        return Err("Usage: convert <value> <kcal|kJ> <kcal|kJ>".to_string());
    }
    let from = EnergyUnit::from_str(&args[1])
        .ok_or_else(|| format!("Unknown unit: {}. Use kcal or kJ.", args[1]))?;
    let to = EnergyUnit::from_str(&args[2])
        .ok_or_else(|| format!("Unknown unit: {}. Use kcal or kJ.", args[2]))?;

    Ok(Command::Convert {
        value: args[0].clone(),
        from,
        to,
    })
}

fn activity_choices() -> String {
    let levels = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{} ({})", level.as_str(), level.multiplier()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Choose from {}.", levels)
}

/// Split a line into whitespace-separated tokens, honoring double quotes
///
/// A quoted pair may be empty, which produces an empty token. An unbalanced
/// quote runs to the end of the line.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if quoted || !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                    quoted = false;
                }
            }
            c => current.push(c),
        }
    }
    if quoted || !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain() {
        assert_eq!(tokenize("add Apple 95"), vec!["add", "Apple", "95"]);
        assert_eq!(tokenize("  clear  "), vec!["clear"]);
    }

    #[test]
    fn test_tokenize_quoted() {
        assert_eq!(
            tokenize(r#"add "Greek Yogurt" "1 cup" 150 kcal"#),
            vec!["add", "Greek Yogurt", "1 cup", "150", "kcal"]
        );
    }

    #[test]
    fn test_tokenize_empty_quotes() {
        assert_eq!(tokenize(r#"add "" 95"#), vec!["add", "", "95"]);
    }

    #[test]
    fn test_tokenize_unbalanced_quote() {
        assert_eq!(tokenize(r#"add "Apple Pie 95"#), vec!["add", "Apple Pie 95"]);
    }

    #[test]
    fn test_parse_tdee() {
        let cmd = parse_line("tdee male 25 175 70 moderate").unwrap();
        assert_eq!(
            cmd,
            Command::Tdee {
                sex: Sex::Male,
                age: "25".to_string(),
                height_cm: "175".to_string(),
                weight_kg: "70".to_string(),
                activity: ActivityLevel::Moderate,
            }
        );
    }

    #[test]
    fn test_parse_tdee_multiplier_alias() {
        let cmd = parse_line("tdee female 30 165 60 1.55").unwrap();
        match cmd {
            Command::Tdee { activity, .. } => assert_eq!(activity, ActivityLevel::Moderate),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_tdee_errors() {
        assert!(parse_line("tdee male 25 175").unwrap_err().starts_with("Usage:"));
        assert!(parse_line("tdee robot 25 175 70 moderate")
            .unwrap_err()
            .contains("Unknown sex"));
        assert!(parse_line("tdee male 25 175 70 couch")
            .unwrap_err()
            .contains("Unknown activity level"));
    }

    #[test]
    fn test_parse_add_defaults_to_kcal() {
        let cmd = parse_line("add Apple 95").unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "Apple".to_string(),
                amount: String::new(),
                energy: "95".to_string(),
                unit: EnergyUnit::Kcal,
            }
        );
    }

    #[test]
    fn test_parse_add_with_unit_and_amount() {
        let cmd = parse_line("add Juice 200ml 500 kJ").unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "Juice".to_string(),
                amount: "200ml".to_string(),
                energy: "500".to_string(),
                unit: EnergyUnit::Kj,
            }
        );
    }

    #[test]
    fn test_parse_add_quoted_name() {
        let cmd = parse_line(r#"add "Greek Yogurt" "1 cup" 150 kcal"#).unwrap();
        match cmd {
            Command::Add { name, amount, .. } => {
                assert_eq!(name, "Greek Yogurt");
                assert_eq!(amount, "1 cup");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_too_few_args() {
        assert!(parse_line("add Apple").unwrap_err().starts_with("Usage:"));
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(parse_line("remove 2").unwrap(), Command::Remove { position: 2 });
        assert_eq!(parse_line("rm 1").unwrap(), Command::Remove { position: 1 });
        assert!(parse_line("remove two").unwrap_err().contains("Invalid position"));
        assert!(parse_line("remove").unwrap_err().starts_with("Usage:"));
    }

    #[test]
    fn test_parse_convert() {
        let cmd = parse_line("convert 500 kcal kJ").unwrap();
        assert_eq!(
            cmd,
            Command::Convert {
                value: "500".to_string(),
                from: EnergyUnit::Kcal,
                to: EnergyUnit::Kj,
            }
        );
        assert!(parse_line("convert 500 kcal miles")
            .unwrap_err()
            .contains("Unknown unit"));
        assert!(parse_line("convert 500").unwrap_err().starts_with("Usage:"));
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse_line("clear").unwrap(), Command::Clear);
        assert_eq!(parse_line("table").unwrap(), Command::Table);
        assert_eq!(parse_line("reset").unwrap(), Command::Reset);
        assert_eq!(parse_line("status").unwrap(), Command::Status);
        assert_eq!(parse_line("help").unwrap(), Command::Help);
        assert_eq!(parse_line("quit").unwrap(), Command::Quit);
        assert_eq!(parse_line("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_command_name_case_insensitive() {
        assert_eq!(parse_line("TABLE").unwrap(), Command::Table);
        assert_eq!(parse_line("Quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_line("teleport now").unwrap_err();
        assert!(err.contains("Unknown command: teleport"));
    }
}
