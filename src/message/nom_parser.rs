//! Nom-based decomposition of an IRC line.
//!
//! This module splits a line into its four raw segments without allocating.
//! Field-level validation happens afterwards, in [`Message::new`](super::Message::new).

use nom::{
    bytes::complete::{take_till, take_while, take_while1},
    character::complete::char,
    combinator::{cut, opt},
    error::{context, VerboseError, VerboseErrorKind},
    sequence::{preceded, terminated},
    IResult,
};

use crate::error::FormatError;

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// One or more SP characters. Tabs are not separators.
fn spaces1(input: &str) -> ParseResult<&str, &str> {
    take_while1(|c| c == ' ')(input)
}

fn spaces0(input: &str) -> ParseResult<&str, &str> {
    take_while(|c| c == ' ')(input)
}

/// Parse IRCv3 message tags (the part after `@` and before the first space).
///
/// A leading `@` commits to a tags segment; it must be followed by a verb.
fn parse_tags(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message tags",
        preceded(char('@'), cut(terminated(take_till(|c| c == ' '), spaces1))),
    )(input)
}

/// Parse message source (the part after `:` and before the first space).
fn parse_source(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message source",
        preceded(char(':'), cut(terminated(take_till(|c| c == ' '), spaces1))),
    )(input)
}

/// Parse the verb: any run of non-space characters.
fn parse_verb(input: &str) -> ParseResult<&str, &str> {
    context("parsing verb", take_while1(|c| c != ' '))(input)
}

/// Parse a complete line into its raw segments.
///
/// ```text
/// [@tags SP+] [:source SP+] <verb> [SP+ params]
/// ```
pub(crate) fn parse_message(input: &str) -> ParseResult<&str, RawMessage<'_>> {
    let (input, tags) = opt(parse_tags)(input)?;
    let (input, source) = opt(parse_source)(input)?;
    let (input, verb) = parse_verb(input)?;
    let (params, _) = spaces0(input)?;

    Ok((
        "",
        RawMessage {
            tags,
            source,
            verb,
            params: (!params.is_empty()).then_some(params),
        },
    ))
}

/// A decomposed IRC line holding slices of the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawMessage<'a> {
    /// Raw tags segment (without the leading `@`), if present.
    pub tags: Option<&'a str>,
    /// Raw source (without the leading `:`), if present.
    pub source: Option<&'a str>,
    /// The verb token.
    pub verb: &'a str,
    /// Everything after the verb and its separating spaces, if anything.
    pub params: Option<&'a str>,
}

impl<'a> RawMessage<'a> {
    /// Decompose `input`, reporting where and why the grammar failed.
    pub fn parse(input: &'a str) -> Result<Self, FormatError> {
        match parse_message(input) {
            Ok((_, msg)) => Ok(msg),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                // The first entry is the innermost failure.
                let position = e
                    .errors
                    .first()
                    .map_or(input.len(), |(rest, _)| input.len() - rest.len());
                let context_info = e.errors.iter().find_map(|(_, kind)| match kind {
                    VerboseErrorKind::Context(ctx) => Some(*ctx),
                    _ => None,
                });

                Err(FormatError {
                    input: input.to_string(),
                    position,
                    context: context_info,
                })
            }
            Err(nom::Err::Incomplete(_)) => Err(FormatError {
                input: input.to_string(),
                position: input.len(),
                context: Some("incomplete input"),
            }),
        }
    }

    /// Iterate the raw `key[=value]` pieces of the tags segment.
    pub fn tag_pieces(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.tags
            .into_iter()
            .flat_map(|tags| tags.split(';'))
            .map(|piece| piece.split_once('=').unwrap_or((piece, "")))
    }

    /// Split the parameters segment into middle parameters and the optional
    /// trailing parameter.
    pub fn split_params(&self) -> (Vec<&'a str>, Option<&'a str>) {
        let Some(params) = self.params else {
            return (Vec::new(), None);
        };

        if let Some(trailing) = params.strip_prefix(':') {
            return (Vec::new(), Some(trailing));
        }

        let (middle, trailing) = match params.split_once(" :") {
            Some((middle, trailing)) => (middle, Some(trailing)),
            None => (params, None),
        };

        let middle = middle.split(' ').filter(|p| !p.is_empty()).collect();
        (middle, trailing)
    }
}
