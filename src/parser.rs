pub mod cnf;

use nom::{
    bytes::complete::{take_till1, take_while1},
    character::complete::{digit1, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::pair,
    IResult, Parser,
};

/// A maximal run of non-whitespace characters.
fn token(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

/// Any non-empty run of whitespace, Unicode included, so headers split like clause lines.
fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}

fn parse_i64(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), str::parse).parse(input)
}

/// Parse a whole token as an integer. Values outside the `i64` range are rejected.
fn integer(token: &str) -> Option<i64> {
    all_consuming(parse_i64)
        .parse(token)
        .ok()
        .map(|(_, value)| value)
}
