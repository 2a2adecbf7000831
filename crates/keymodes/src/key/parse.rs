use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    combinator::{eof, opt, value},
    multi::separated_list1,
    sequence::delimited,
    IResult,
};

use super::{KeyDescriptor, KeyLayout, Modifiers, MODIFIER_NAMES};

fn parse_layout(input: &str) -> IResult<&str, KeyLayout> {
    alt((value(KeyLayout::Mapped, tag("mapped:")), value(KeyLayout::Physical, tag("phys:"))))(input)
}

pub(crate) fn parse_key_str(input: &str) -> IResult<&str, KeyDescriptor> {
    let (input, layout) = opt(parse_layout)(input)?;
    let (input, name) = take_while1(|_: char| true)(input)?;
    let (input, _) = eof(input)?;

    let key = KeyDescriptor::new(layout.unwrap_or_default(), name);

    Ok((input, key))
}

fn parse_modifier_name(input: &str) -> IResult<&str, Modifiers> {
    let (rest, name) = take_while1(|c: char| c.is_ascii_alphabetic())(input)?;

    if name == "NONE" {
        return Ok((rest, Modifiers::empty()));
    }

    for (flag, n) in MODIFIER_NAMES.iter() {
        if *n == name {
            return Ok((rest, *flag));
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Tag)))
}

fn parse_modifier(input: &str) -> IResult<&str, Modifiers> {
    delimited(multispace0, parse_modifier_name, multispace0)(input)
}

pub(crate) fn parse_modifiers_str(input: &str) -> IResult<&str, Modifiers> {
    let (input, mods) = separated_list1(char('|'), parse_modifier)(input)?;
    let (input, _) = eof(input)?;

    let mods = mods.into_iter().fold(Modifiers::empty(), |acc, m| acc | m);

    Ok((input, mods))
}
