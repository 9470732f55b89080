use super::{integer, token, whitespace};
use crate::{
    common::{SpaceHistogram, Summary},
    error::{CnfError, HeaderIssue, LineCount, Result},
};
use indicatif::ProgressBar;
use itertools::Itertools;
use nom::{
    bytes::complete::tag,
    sequence::{preceded, separated_pair, tuple},
    IResult, Parser,
};
use std::io::BufRead;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Largest variable a literal may refer to.
    pub vars: i64,
    /// Number of clause lines that must follow the header.
    pub clauses: i64,
}

/// Recognizes a trimmed `p cnf V C`, returning the raw `V` and `C` tokens. Anything after `C`
/// is ignored.
fn header_fields(input: &str) -> IResult<&str, (&str, &str)> {
    preceded(
        tuple((tag("p"), whitespace, tag("cnf"), whitespace)),
        separated_pair(token, whitespace, token),
    )
    .parse(input)
}

pub fn parse_header(input: &str) -> Result<Header> {
    let (_, (vars, clauses)) = header_fields(input.trim())
        .map_err(|_| CnfError::HeaderFormat(HeaderIssue::Malformed))?;
    let vars = integer(vars).ok_or_else(|| {
        CnfError::HeaderFormat(HeaderIssue::NonIntegerVariables(vars.to_string()))
    })?;
    let clauses = integer(clauses).ok_or_else(|| {
        CnfError::HeaderFormat(HeaderIssue::NonIntegerClauses(clauses.to_string()))
    })?;
    Ok(Header { vars, clauses })
}

/// Validate a single clause line and return how many spaces separate its tokens.
///
/// Checks run in a fixed order: the line must have tokens, its last token must be the literal
/// text `0`, and then every token in turn must be an integer within `[-vars, vars]`. The first
/// failing check is reported.
pub fn parse_clause(line: usize, input: &str, vars: i64) -> Result<usize> {
    let tokens = input.split_whitespace().collect_vec();
    let Some(&last) = tokens.last() else {
        return Err(CnfError::EmptyLine { line });
    };
    // textual on purpose, "-0" and "00" are rejected
    if last != "0" {
        return Err(CnfError::MissingTerminator { line });
    }

    for &token in &tokens {
        let value = integer(token).ok_or_else(|| CnfError::NonIntegerToken {
            line,
            token: token.to_string(),
        })?;
        let (wide, bound) = (i128::from(value), i128::from(vars));
        if wide > bound || wide < -bound {
            return Err(CnfError::OutOfBounds {
                line,
                value,
                bound: vars,
            });
        }
    }

    Ok(tokens.len() - 1)
}

/// Read a header and its clause lines from `reader`, one line at a time.
pub fn parse<R: BufRead>(reader: R, progress: &ProgressBar) -> Result<Summary> {
    info!("parsing cnf");
    let mut lines = reader.lines();
    let header = {
        let line = lines
            .next()
            .ok_or(CnfError::EmptyInput)?
            .map_err(|source| CnfError::Io { line: 1, source })?;
        let header = parse_header(&line)?;
        info!("{} variables and {} clauses", header.vars, header.clauses);
        header
    };
    progress.set_length(u64::try_from(header.clauses).unwrap_or(0));

    let mut histogram = SpaceHistogram::new();
    let mut processed: i64 = 0;
    // the header is line 1
    for (number, line) in (2..).zip(lines) {
        let line = line.map_err(|source| CnfError::Io { line: number, source })?;
        trace!("line {}: {}", number, line);
        processed += 1;
        if processed > header.clauses {
            return Err(CnfError::LineCountMismatch {
                declared: header.clauses,
                actual: LineCount::Extra(processed),
            });
        }

        let spaces = parse_clause(number, &line, header.vars)?;
        debug!("line {} OK with {} spaces", number, spaces);
        histogram.record(spaces);
        progress.inc(1);
    }

    if processed < header.clauses {
        return Err(CnfError::LineCountMismatch {
            declared: header.clauses,
            actual: LineCount::TooFew(processed),
        });
    }

    Ok(Summary { header, histogram })
}
