use nom::{
    branch::alt,
    bytes::complete::take_while_m_n,
    character::complete::{char, multispace0, multispace1},
    combinator::value,
    multi::separated_list1,
    number::complete::double,
    sequence::delimited,
    IResult, Parser,
};

use crate::error::TrainingError;
use crate::package::Package;

/// Parse a textual sensor package such as `SWM 720 1 80 25 40` or
/// `RUN: 15000, 1, 75`.
///
/// Only the shape is checked here; the activity code and the value count are
/// validated by [`crate::package::read_package`].
pub fn parse_package(input: &str) -> Result<Package, TrainingError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TrainingError::EmptyPackage);
    }

    match package(input) {
        Ok((remaining, (code, values))) => {
            if remaining.is_empty() {
                Ok(Package::new(code, values))
            } else {
                Err(TrainingError::ParseError {
                    position: (input.len() - remaining.len()) as u32,
                    message: format!("unexpected characters: '{}'", remaining),
                })
            }
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(TrainingError::ParseError {
            position: (input.len() - e.input.len()) as u32,
            message: describe_failure(input).to_string(),
        }),
        Err(e) => Err(TrainingError::ParseError {
            position: 0,
            message: format!("parse error: {:?}", e),
        }),
    }
}

fn package(input: &str) -> IResult<&str, (&str, Vec<f64>)> {
    let (input, code) = activity_code(input)?;
    let (input, _) = code_separator(input)?;
    let (input, values) = separated_list1(value_separator, double).parse(input)?;
    Ok((input, (code, values)))
}

/// Name the part of the package the parser stopped at.
fn describe_failure(input: &str) -> &'static str {
    let Ok((rest, _)) = activity_code(input) else {
        return "expected a three-letter activity code";
    };
    if code_separator(rest).is_err() {
        return "expected ':' or whitespace after the activity code";
    }
    "expected a number"
}

fn activity_code(input: &str) -> IResult<&str, &str> {
    take_while_m_n(3, 3, |c: char| c.is_ascii_alphabetic()).parse(input)
}

fn code_separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), delimited(multispace0, char(':'), multispace0)),
        value((), multispace1),
    ))
    .parse(input)
}

fn value_separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), delimited(multispace0, char(','), multispace0)),
        value((), multispace1),
    ))
    .parse(input)
}
