use knights_knaves::{
    config::Config,
    structures::{Actor, Claims, Testimony},
    types::err::{self, ErrorKind},
};

use crate::args::{PuzzleArgs, TableArgs};

/// A request for a truth table.
pub(super) struct TableRequest {
    pub speaker: Actor,
    pub statement: String,
    pub claims: Claims,
}

/// Reads the arguments of a table request, filling absent claims from `config`.
///
/// A speaker and non-empty statement are required.
pub(super) fn read_table_request(args: TableArgs, config: &Config) -> Result<TableRequest, ErrorKind> {
    let statement = args.statement.as_deref().map(str::trim).unwrap_or_default();

    let (Some(speaker), false) = (args.speaker, statement.is_empty()) else {
        return Err(err::InputError::MissingStatement.into());
    };

    let speaker = speaker.parse::<Actor>()?;

    let claims = Claims::new(
        args.identity_a
            .unwrap_or_else(|| config.default_claim_a.clone()),
        args.identity_b
            .unwrap_or_else(|| config.default_claim_b.clone()),
    );

    Ok(TableRequest {
        speaker,
        statement: statement.to_string(),
        claims,
    })
}

/// Reads each `SPEAKER: STATEMENT` pair of a puzzle request.
pub(super) fn read_testimony(args: PuzzleArgs) -> Result<Vec<Testimony>, ErrorKind> {
    if args.says.is_empty() {
        return Err(err::InputError::NoTestimony.into());
    }

    args.says.iter().map(|says| testimony_from_str(says)).collect()
}

fn testimony_from_str(says: &str) -> Result<Testimony, ErrorKind> {
    let Some((speaker, statement)) = says.split_once(':') else {
        return Err(err::InputError::MalformedTestimony(says.to_string()).into());
    };

    let statement = statement.trim();
    if statement.is_empty() {
        return Err(err::InputError::MalformedTestimony(says.to_string()).into());
    }

    Ok(Testimony::new(speaker.parse::<Actor>()?, statement))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_args(speaker: Option<&str>, statement: Option<&str>) -> TableArgs {
        TableArgs {
            speaker: speaker.map(str::to_string),
            statement: statement.map(str::to_string),
            identity_a: None,
            identity_b: Some("knight".to_string()),
        }
    }

    #[test]
    fn table_request() {
        let config = Config::default();

        let request = read_table_request(table_args(Some("B"), Some(" p ∧ q ")), &config);
        let Ok(request) = request else {
            panic!("request rejected");
        };
        assert_eq!(request.speaker, Actor::B);
        assert_eq!(request.statement, "p ∧ q");
        assert_eq!(request.claims, Claims::new("knight", "knight"));
    }

    #[test]
    fn table_request_missing() {
        let config = Config::default();
        let missing = Err(ErrorKind::Input(err::InputError::MissingStatement));

        assert_eq!(
            read_table_request(table_args(None, Some("p")), &config).map(|r| r.statement),
            missing
        );
        assert_eq!(
            read_table_request(table_args(Some("A"), Some("  ")), &config).map(|r| r.statement),
            missing
        );
        assert_eq!(
            read_table_request(table_args(Some("A"), None), &config).map(|r| r.statement),
            missing
        );
    }

    #[test]
    fn table_request_unknown_speaker() {
        let config = Config::default();
        assert_eq!(
            read_table_request(table_args(Some("C"), Some("p")), &config).map(|r| r.statement),
            Err(ErrorKind::Argument(err::ArgumentError::UnknownActor(
                "C".to_string()
            )))
        );
    }

    #[test]
    fn testimony() {
        assert_eq!(
            testimony_from_str("a: p → q"),
            Ok(Testimony::new(Actor::A, "p → q"))
        );
        assert!(testimony_from_str("A p").is_err());
        assert!(testimony_from_str("A:  ").is_err());
        assert!(testimony_from_str("C: p").is_err());

        let args = PuzzleArgs { says: vec![] };
        assert_eq!(
            read_testimony(args),
            Err(ErrorKind::Input(err::InputError::NoTestimony))
        );
    }
}
